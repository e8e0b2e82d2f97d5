//! Diagnostic report export.

mod common;

use common::*;
use doc_color_decomposer::{DecomposerConfig, DocColorDecomposer};
use pretty_assertions::assert_eq;

#[test]
fn test_report_contents() {
    let decomposer =
        DocColorDecomposer::new(&red_and_white(), DecomposerConfig::default().tolerance(1))
            .unwrap();
    let report = decomposer.report();

    assert_eq!((report.width, report.height), (2, 2));
    assert_eq!(report.tolerance, 1);
    assert_eq!(report.smoothing_width, 1);
    assert_eq!(report.histogram.len(), 360);
    assert_eq!(report.histogram[150], 3.0);
    assert_eq!(report.histogram[0], 1.0);
    assert_eq!(report.working_histogram, report.histogram);
    assert_eq!(report.peaks, vec![0, 150]);
    assert_eq!(report.labels.len(), 360);

    assert_eq!(report.clusters.len(), 2);
    assert_eq!(report.clusters[0].mean_color, Some(colors::WHITE));
    assert_eq!(report.clusters[1].mean_color, Some(colors::RED));
    assert_eq!(report.clusters[1].pixel_count, 3);

    assert_eq!(report.hue_colors[150], Some(colors::RED));
    assert_eq!(report.scatter_2d.len(), 2);
    assert_eq!(report.scatter_3d[0].color, colors::RED);
    assert_eq!(report.scatter_3d[0].count, 3);
}

#[test]
fn test_report_json() {
    let decomposer = DocColorDecomposer::new(&two_ink_page(12, 12), DecomposerConfig::default())
        .unwrap();
    let json = decomposer.report().to_json().unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();

    assert_eq!(value["width"], 12);
    assert_eq!(value["tolerance"], 35);
    assert_eq!(value["histogram"].as_array().map(Vec::len), Some(360));
    assert_eq!(value["hue_colors"][1], serde_json::Value::Null);
    assert!(value["clusters"].as_array().is_some_and(|c| !c.is_empty()));
}
