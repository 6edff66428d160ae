use super::ConnectedLine;
use crate::error::{ChartError, Result};
use crate::labeling::{Labeling, PrimitiveStore, BACKGROUND_LABEL};
use log::debug;

/// Group the primitives of `store` into one connected line per region label.
///
/// Lines come out in ascending label order, carry the label's representative
/// color and are already finalized.
pub fn aggregate_connected_lines(
    store: &PrimitiveStore,
    labeling: &Labeling,
) -> Result<Vec<ConnectedLine>> {
    let mut by_label: Vec<Option<ConnectedLine>> =
        (0..labeling.label_count()).map(|_| None).collect();

    for (id, prim) in store.iter() {
        let label = prim.parent_label();
        if label == BACKGROUND_LABEL || !labeling.contains_label(label) {
            return Err(ChartError::structural(format!(
                "primitive {} references label {} but labeling has foreground labels 1..{}",
                id.0,
                label,
                labeling.label_count()
            )));
        }
        let slot = &mut by_label[label as usize];
        if let Some(line) = slot.as_mut() {
            line.add_primitive(store, id)?;
        } else {
            *slot = Some(ConnectedLine::new(store, id)?);
        }
    }

    let mut lines = Vec::new();
    for mut line in by_label.into_iter().flatten() {
        if let Some(color) = labeling.label_color(line.region_label()) {
            line.set_color(color);
        }
        line.finalize_bounding_box(store)?;
        lines.push(line);
    }
    debug!(
        "aggregate_connected_lines primitives={} lines={}",
        store.len(),
        lines.len()
    );
    Ok(lines)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::PointPixel;
    use crate::image::Raster;
    use crate::labeling::label_regions;

    #[test]
    fn every_labeled_pixel_lies_in_its_line_box() {
        let raster = Raster::from_fn(30, 20, 256, |r, c| {
            let on_diag = (r as i32 - c as i32 / 2).abs() <= 1;
            let in_block = (12..18).contains(&r) && (2..9).contains(&c);
            if on_diag || in_block {
                40
            } else {
                255
            }
        })
        .expect("valid raster");
        let labeling = label_regions(&raster, 255).expect("labeled");
        let store = PrimitiveStore::from_labeling(&labeling);
        let lines = aggregate_connected_lines(&store, &labeling).expect("consistent");

        assert_eq!(lines.len(), labeling.label_count() - 1);
        for line in &lines {
            let bounds = line.bounds().expect("finalized");
            let pixels = labeling.pixels_of(line.region_label());
            assert_eq!(pixels.len(), line.pixel_count());
            assert!(pixels.iter().all(|&p| bounds.contains(p)));
            // Row runs are stored in raster order, so the points match exactly.
            assert_eq!(line.points(&store).expect("known primitives"), pixels);
            assert_eq!(line.color(), Some(40));
        }
    }

    #[test]
    fn lines_follow_label_order() {
        let raster = Raster::from_fn(8, 8, 256, |r, c| match (r, c) {
            (0, 5..=7) => 10,
            (4..=7, 1) => 90,
            _ => 255,
        })
        .expect("valid raster");
        let labeling = label_regions(&raster, 255).expect("labeled");
        let store = PrimitiveStore::from_labeling(&labeling);
        let lines = aggregate_connected_lines(&store, &labeling).expect("consistent");
        let labels: Vec<_> = lines.iter().map(|l| l.region_label()).collect();
        assert_eq!(labels, vec![1, 2]);
        assert_eq!(lines[0].primitives().len(), 1);
        assert_eq!(lines[1].primitives().len(), 4);
        let upper_left = lines[1].upper_left().expect("finalized");
        assert_eq!(upper_left, PointPixel::new(4, 1));
    }

    #[test]
    fn primitive_with_unknown_label_is_rejected() {
        let raster = Raster::from_fn(4, 4, 256, |_, _| 255).expect("valid raster");
        let labeling = label_regions(&raster, 255).expect("labeled");
        let mut store = PrimitiveStore::new();
        store.push(3, [PointPixel::new(0, 0)]);
        let err = aggregate_connected_lines(&store, &labeling).unwrap_err();
        assert!(matches!(err, ChartError::StructuralInconsistency(_)));

        let mut background_store = PrimitiveStore::new();
        background_store.push(BACKGROUND_LABEL, [PointPixel::new(1, 1)]);
        assert!(aggregate_connected_lines(&background_store, &labeling).is_err());
    }
}
