//! Report files on disk.

use std::fs;

use langdist_core::pipeline::run;

use super::helpers::*;

#[test]
fn test_language_listing_layout() {
    let (_tmp, config) = four_language_setup();
    run(&config).expect("run");

    let labels = fs::read_to_string(config.output.labels_path()).unwrap();
    assert_eq!(
        labels,
        "OldEnglish=0\nWelsh     =1\nScotsGaeli=2\nBreton    =3\n"
    );
}

#[test]
fn test_distance_matrix_layout() {
    let (_tmp, config) = four_language_setup();
    run(&config).expect("run");

    for path in [config.output.kl_path(), config.output.rao_path()] {
        let text = fs::read_to_string(&path).unwrap();
        assert!(text.ends_with('\n'));
        let rows: Vec<&str> = text.lines().collect();
        assert_eq!(rows.len(), 4);
        for (i, row) in rows.iter().enumerate() {
            let cells: Vec<f64> = row.split(' ').map(|c| c.parse().unwrap()).collect();
            assert_eq!(cells.len(), 4);
            assert!(cells[i].abs() < 1e-9);
        }
    }
}

#[test]
fn test_annotated_report_layout() {
    let (_tmp, config) = four_language_setup();
    run(&config).expect("run");

    let report = fs::read_to_string(config.output.kl_report_path()).unwrap();
    let lines: Vec<&str> = report.lines().collect();
    assert_eq!(lines.len(), 5);
    assert_eq!(lines[0], "4");
    assert!(lines[1].starts_with("OldEnglish  "));
    assert!(lines[2].starts_with("Welsh       "));
    assert_eq!(lines[3][12..].split(' ').count(), 4);
}

#[test]
fn test_custom_file_names_and_sentinel() {
    let (_tmp, mut config) = four_language_setup();
    config.output.kl_file = "kl.dist".to_string();
    config.output.failure_sentinel = "-".to_string();
    config.validate().expect("valid config");

    run(&config).expect("run");
    assert!(config.output.dir.join("kl.dist").exists());
}
