//! Corpus layouts and ingestion failures.

use std::fs;

use langdist_core::pipeline::{compute, load_corpus};
use langdist_core::LangDistError;
use tempfile::TempDir;

use super::helpers::*;

#[test]
fn test_catalog_sections_become_languages() {
    let (_tmp, config) = four_language_setup();
    let corpus = load_corpus(&config.input).expect("load");

    let names: Vec<&str> = corpus.languages().iter().map(|l| l.language()).collect();
    assert_eq!(names, vec!["Old_English", "Welsh", "Scots_Gaelic", "Breton"]);
    assert_eq!(corpus.vocabulary().index_of("hand"), Some(0));
    assert_eq!(corpus.vocabulary().index_of("eye"), Some(2));
}

#[test]
fn test_directory_layout_uses_file_names() {
    let tmp = TempDir::new().unwrap();
    let catalog = write_file(tmp.path(), "meanings", "hand\t1 \nfoot\t1 \n");
    let langs = tmp.path().join("langs");
    fs::create_dir(&langs).unwrap();
    write_file(&langs, "Welsh", "foot\t0.5 0.5 \nhand\t0.5 0.5 \n");
    write_file(&langs, "Breton", "hand\t0.9 0.1 \nfoot\t0.1 0.9 \n");

    let mut config = config_for(tmp.path(), catalog);
    config.input.languages_dir = Some(langs);

    let output = compute(&config).expect("compute");
    assert_eq!(output.registry.index_of("Breton"), Some(0));
    assert_eq!(output.registry.index_of("Welsh"), Some(1));
    assert_eq!(output.vocabulary_size, 2);

    // Welsh defines foot first: local (0, 1) is global (foot, hand)
    let welsh = &output.registry.entry(1).unwrap().matrix;
    assert_eq!(welsh.get(1, 0), 0.5);
}

#[test]
fn test_language_file_meanings_extend_vocabulary() {
    let tmp = TempDir::new().unwrap();
    let catalog = write_file(tmp.path(), "meanings", "hand\t1 \n");
    let langs = tmp.path().join("langs");
    fs::create_dir(&langs).unwrap();
    write_file(&langs, "Welsh", "tooth\t1 \n");

    let mut config = config_for(tmp.path(), catalog);
    config.input.languages_dir = Some(langs);

    let corpus = load_corpus(&config.input).expect("load");
    assert_eq!(corpus.vocabulary().size(), 2);
    assert_eq!(corpus.vocabulary().index_of("tooth"), Some(1));
}

#[test]
fn test_malformed_line_aborts_with_context() {
    let tmp = TempDir::new().unwrap();
    let catalog = write_file(
        tmp.path(),
        "catalog",
        "# Welsh\nhand\t0.5 0.5 \nfoot 0.5 0.5\n",
    );
    let config = config_for(tmp.path(), catalog);

    match compute(&config) {
        Err(LangDistError::MalformedRecord {
            line_number, line, ..
        }) => {
            assert_eq!(line_number, 3);
            assert_eq!(line, "foot 0.5 0.5");
        }
        other => panic!("expected MalformedRecord, got {:?}", other.map(|_| ())),
    }
}

#[test]
fn test_non_numeric_value_is_malformed() {
    let tmp = TempDir::new().unwrap();
    let catalog = write_file(tmp.path(), "catalog", "# Welsh\nhand\t0.5 abc \n");
    let config = config_for(tmp.path(), catalog);

    let err = compute(&config).map(|_| ()).unwrap_err();
    assert!(err.is_input_error());
    assert!(err.to_string().contains("\"abc\" is not a number"));
}

#[test]
fn test_empty_directory_is_empty_corpus() {
    let tmp = TempDir::new().unwrap();
    let catalog = write_file(tmp.path(), "meanings", "hand\t1 \n");
    let langs = tmp.path().join("langs");
    fs::create_dir(&langs).unwrap();

    let mut config = config_for(tmp.path(), catalog);
    config.input.languages_dir = Some(langs);

    assert!(matches!(
        load_corpus(&config.input),
        Err(LangDistError::EmptyCorpus(_))
    ));
}
