//! Distance values through the full pipeline.

use langdist_core::pipeline::{compute, run};
use langdist_core::{kl_divergence, rao_distance, LangMatrix, Metric};

use super::helpers::*;

const TOL: f64 = 1e-9;

#[test]
fn test_four_languages_zero_diagonal_finite_elsewhere() {
    let (_tmp, config) = four_language_setup();
    let output = compute(&config).expect("compute");

    assert_eq!(output.registry.len(), 4);
    assert_eq!(output.vocabulary_size, 3);
    assert!(output.distances.failures.is_empty());

    for metric in [Metric::Kl, Metric::Rao] {
        let matrix = output.distances.matrix(metric);
        assert_eq!(matrix.size(), 4);
        for i in 0..4 {
            assert!(matrix.get(i, i).unwrap().abs() < TOL);
            for j in 0..4 {
                let value = matrix.get(i, j).unwrap();
                assert!(value.is_finite());
                if i != j {
                    assert!(value > 0.0, "{} [{}][{}] = {}", metric, i, j, value);
                }
            }
        }
    }
}

#[test]
fn test_sequential_and_parallel_runs_agree() {
    let (_tmp, mut config) = four_language_setup();
    let parallel = compute(&config).expect("parallel");
    config.compute.parallel = false;
    let sequential = compute(&config).expect("sequential");

    assert_eq!(parallel.distances.kl, sequential.distances.kl);
    assert_eq!(parallel.distances.rao, sequential.distances.rao);
}

#[test]
fn test_opposed_matrices_known_values() {
    let p = LangMatrix::from_rows(vec![vec![0.9, 0.1], vec![0.1, 0.9]]).unwrap();
    let q = LangMatrix::from_rows(vec![vec![0.1, 0.9], vec![0.9, 0.1]]).unwrap();
    let log9 = 9f64.log2();

    let kl = kl_divergence(&p, &q).unwrap();
    let rao = rao_distance(&p, &q).unwrap();
    assert!((kl - 1.6 * log9).abs() < TOL, "kl = {}", kl);
    assert!((rao - log9).abs() < TOL, "rao = {}", rao);

    assert!((kl_divergence(&q, &p).unwrap() - kl).abs() < TOL);
    assert!((rao_distance(&q, &p).unwrap() - rao).abs() < TOL);
}

#[test]
fn test_disjoint_languages_fail_rao_only() {
    let tmp = tempfile::TempDir::new().unwrap();
    let catalog = write_file(
        tmp.path(),
        "catalog",
        "# North\nsun\t1 \n# South\nmoon\t1 \n",
    );
    let config = config_for(tmp.path(), catalog);

    let output = run(&config).expect("run");
    assert!(output.distances.kl.is_complete());
    assert_eq!(output.distances.rao.get(0, 1), None);
    assert_eq!(output.summary().failed_pairs.len(), 2);

    let rao = std::fs::read_to_string(config.output.rao_path()).unwrap();
    assert_eq!(rao, "0.0 NA\nNA 0.0\n");
}
