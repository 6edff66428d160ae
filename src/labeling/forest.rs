//! Union-find forest over provisional region labels.
//!
//! Parent links always point from a higher id to a lower one (or to the
//! background), so walks terminate and the structure stays a forest. Neither
//! path compression nor union-by-rank is applied: the merge order, and hence
//! the final dense numbering, depends only on the scan order.

/// Region label id. Dense ids are consecutive after labeling completes.
pub type LabelId = u32;

/// Label reserved for background pixels.
pub const BACKGROUND_LABEL: LabelId = 0;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LabelForest {
    /// `None` marks a root.
    parent: Vec<Option<LabelId>>,
}

impl Default for LabelForest {
    fn default() -> Self {
        Self::new()
    }
}

impl LabelForest {
    /// Forest holding only the background root.
    pub fn new() -> Self {
        Self::with_capacity(1)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        let mut parent = Vec::with_capacity(capacity.max(1));
        parent.push(None);
        Self { parent }
    }

    /// Allocate the next label id as a fresh root.
    pub fn make_root(&mut self) -> LabelId {
        let id = self.parent.len() as LabelId;
        self.parent.push(None);
        id
    }

    /// Number of ids allocated, background included.
    pub fn len(&self) -> usize {
        self.parent.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }

    pub fn parent(&self, id: LabelId) -> Option<LabelId> {
        self.parent[id as usize]
    }

    pub fn is_root(&self, id: LabelId) -> bool {
        self.parent[id as usize].is_none()
    }

    /// Root of the tree containing `id`.
    pub fn find(&self, id: LabelId) -> LabelId {
        let mut cur = id;
        while let Some(p) = self.parent[cur as usize] {
            cur = p;
        }
        cur
    }

    /// Merge the trees of `a` and `b`, returning the surviving root.
    ///
    /// Background always absorbs; otherwise the higher root is attached under
    /// the lower one.
    pub fn union(&mut self, a: LabelId, b: LabelId) -> LabelId {
        let ra = self.find(a);
        let rb = self.find(b);
        if ra == rb {
            return ra;
        }
        let (keep, attach) = if ra == BACKGROUND_LABEL {
            (ra, rb)
        } else if rb == BACKGROUND_LABEL {
            (rb, ra)
        } else if ra < rb {
            (ra, rb)
        } else {
            (rb, ra)
        };
        self.parent[attach as usize] = Some(keep);
        keep
    }

    /// Root ids in ascending order.
    pub fn roots(&self) -> impl Iterator<Item = LabelId> + '_ {
        self.parent
            .iter()
            .enumerate()
            .filter(|(_, p)| p.is_none())
            .map(|(i, _)| i as LabelId)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_forest_has_only_background() {
        let forest = LabelForest::new();
        assert_eq!(forest.len(), 1);
        assert!(forest.is_root(BACKGROUND_LABEL));
        assert_eq!(forest.roots().collect::<Vec<_>>(), vec![0]);
    }

    #[test]
    fn higher_root_attaches_under_lower() {
        let mut forest = LabelForest::new();
        let a = forest.make_root();
        let b = forest.make_root();
        let c = forest.make_root();
        assert_eq!((a, b, c), (1, 2, 3));

        assert_eq!(forest.union(c, b), 2);
        assert_eq!(forest.parent(3), Some(2));
        assert_eq!(forest.union(c, a), 1);
        // Root of c's tree (2) was attached, not c itself.
        assert_eq!(forest.parent(2), Some(1));
        assert_eq!(forest.parent(3), Some(2));
        assert_eq!(forest.find(3), 1);
        assert_eq!(forest.roots().collect::<Vec<_>>(), vec![0, 1]);
    }

    #[test]
    fn background_absorbs_either_side() {
        let mut forest = LabelForest::new();
        let a = forest.make_root();
        let b = forest.make_root();
        assert_eq!(forest.union(a, BACKGROUND_LABEL), BACKGROUND_LABEL);
        assert_eq!(forest.union(BACKGROUND_LABEL, b), BACKGROUND_LABEL);
        assert!(forest.is_root(BACKGROUND_LABEL));
        assert_eq!(forest.find(a), 0);
        assert_eq!(forest.find(b), 0);
    }

    #[test]
    fn repeated_union_is_a_no_op() {
        let mut forest = LabelForest::new();
        let a = forest.make_root();
        let b = forest.make_root();
        forest.union(a, b);
        let snapshot = forest.clone();
        assert_eq!(forest.union(b, a), 1);
        assert_eq!(forest, snapshot);
    }
}
