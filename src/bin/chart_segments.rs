use chart_segments::config::chart::load_config;
use chart_segments::image::io::{
    load_indexed_raster, read_json_file, save_label_image, write_json_file,
};
use chart_segments::image::ImageView;
use chart_segments::{ChartAnnotations, ChartPipeline};
use log::info;
use std::env;
use std::path::Path;

fn main() {
    env_logger::init();
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let config_path = env::args().nth(1).ok_or_else(usage)?;
    let config = load_config(Path::new(&config_path)).map_err(|e| e.to_string())?;

    let raster = load_indexed_raster(&config.input).map_err(|e| e.to_string())?;
    let annotations: ChartAnnotations = match &config.annotations {
        Some(path) => read_json_file(path).map_err(|e| e.to_string())?,
        None => ChartAnnotations::default(),
    };
    info!(
        "loaded {} ({}x{}), {} rectangles",
        config.input.display(),
        raster.width(),
        raster.height(),
        annotations.rectangles.len()
    );

    let run = ChartPipeline::new(config.params)
        .process(&raster, &annotations)
        .map_err(|e| e.to_string())?;
    let report = run.report().map_err(|e| e.to_string())?;

    write_json_file(&config.output.report_json, &report).map_err(|e| e.to_string())?;
    println!(
        "Saved report with {} lines ({} data lines, {} bars) to {}",
        report.lines.len(),
        report.data_line_count(),
        report.bar_count(),
        config.output.report_json.display()
    );

    if let Some(labels_path) = &config.output.labels_image {
        save_label_image(&run.labeling, labels_path).map_err(|e| e.to_string())?;
        println!(
            "Saved label image ({} regions) to {}",
            run.labeling.label_count() - 1,
            labels_path.display()
        );
    }

    Ok(())
}

fn usage() -> String {
    "Usage: chart_segments <config.json>".to_string()
}
