//! End-to-end run: ingest → vocabulary barrier → alignment → registry →
//! pairwise distances → reports.
//!
//! Two corpus layouts are supported:
//!
//! - **Catalog only**: every language entry of the catalog is a language.
//! - **Catalog + directory**: the catalog seeds the vocabulary, and every
//!   regular file in `languages_dir` is one language. Files are taken in
//!   name order so indices are reproducible across runs.
//!
//! All meanings of all languages are registered before the vocabulary is
//! frozen; no matrix is allocated before that point.

use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use rayon::prelude::*;
use serde::Serialize;
use tracing::{debug, info, warn};

use crate::alignment::{AlignedMatrix, MatrixAligner};
use crate::config::{InputConfig, LangDistConfig, OutputConfig};
use crate::error::{LangDistError, LangDistResult};
use crate::ingest::{Catalog, RecordSet};
use crate::pairwise::{compute_pairwise, Metric, PairwiseDistances};
use crate::registry::LanguageRegistry;
use crate::report::{write_annotated_report, write_distance_matrix, write_language_labels};
use crate::vocabulary::{Vocabulary, VocabularyBuilder};

/// Parsed corpus with its frozen vocabulary.
#[derive(Debug, Clone)]
pub struct Corpus {
    vocabulary: Vocabulary,
    languages: Vec<RecordSet>,
}

impl Corpus {
    /// Register every meaning of `seed` and `languages`, then freeze.
    ///
    /// `seed` meanings come first, then each language in order.
    pub fn new(seed: &Catalog, languages: Vec<RecordSet>) -> Self {
        let mut builder = VocabularyBuilder::new();
        seed.register_into(&mut builder);
        for set in &languages {
            builder.register_records(set);
        }
        Self {
            vocabulary: builder.freeze(),
            languages,
        }
    }

    pub fn vocabulary(&self) -> &Vocabulary {
        &self.vocabulary
    }

    pub fn languages(&self) -> &[RecordSet] {
        &self.languages
    }
}

/// Read the corpus described by `input`.
///
/// # Errors
///
/// - `Io` if the catalog or a language file cannot be read
/// - `MalformedRecord` for the first unparseable line
/// - `EmptyCorpus` if no language was found
pub fn load_corpus(input: &InputConfig) -> LangDistResult<Corpus> {
    let catalog = Catalog::read(&input.catalog, &input.language_marker)?;

    let (seed, languages) = match &input.languages_dir {
        None => (Catalog::default(), catalog.into_languages()),
        Some(dir) => {
            let languages = read_language_dir(dir, input)?;
            (catalog, languages)
        }
    };

    if languages.is_empty() {
        let source = input.languages_dir.as_ref().unwrap_or(&input.catalog);
        return Err(LangDistError::EmptyCorpus(source.display().to_string()));
    }

    let corpus = Corpus::new(&seed, languages);
    info!(
        languages = corpus.languages.len(),
        meanings = corpus.vocabulary.size(),
        "Vocabulary frozen"
    );
    Ok(corpus)
}

fn read_language_dir(dir: &Path, input: &InputConfig) -> LangDistResult<Vec<RecordSet>> {
    let mut files: Vec<(String, PathBuf)> = Vec::new();
    for entry in fs::read_dir(dir).map_err(|e| LangDistError::io(dir, e))? {
        let entry = entry.map_err(|e| LangDistError::io(dir, e))?;
        let path = entry.path();
        if !path.is_file() {
            continue;
        }
        let Some(file_name) = path.file_name().and_then(|n| n.to_str()) else {
            warn!(path = %path.display(), "Skipping file with non UTF-8 name");
            continue;
        };
        let Some(name) = file_name.strip_prefix(input.language_file_prefix.as_str()) else {
            debug!(file = file_name, "Skipping file without language prefix");
            continue;
        };
        if name.is_empty() || name.starts_with('.') {
            continue;
        }
        files.push((name.to_string(), path.clone()));
    }
    files.sort();

    let languages = files
        .into_iter()
        .map(|(name, path)| RecordSet::read(name, &path, &input.language_marker))
        .collect::<LangDistResult<Vec<_>>>()?;

    debug!(dir = %dir.display(), languages = languages.len(), "Read language files");
    Ok(languages)
}

/// Align every language of the corpus and register it.
///
/// Registry indices follow corpus order whether or not alignment runs in
/// parallel.
pub fn build_registry(corpus: &Corpus, parallel: bool) -> LangDistResult<LanguageRegistry> {
    let aligner = MatrixAligner::new(&corpus.vocabulary);

    let aligned: Vec<AlignedMatrix> = if parallel {
        corpus
            .languages
            .par_iter()
            .map(|set| aligner.align(set))
            .collect::<LangDistResult<Vec<_>>>()?
    } else {
        corpus
            .languages
            .iter()
            .map(|set| aligner.align(set))
            .collect::<LangDistResult<Vec<_>>>()?
    };

    let mut registry = LanguageRegistry::new(aligner.dim());
    let mut gaps = 0;
    for language in aligned {
        gaps += language.stats.gap_positions;
        registry.insert(language.language, language.matrix)?;
    }

    info!(
        languages = registry.len(),
        dim = registry.dim(),
        gap_positions = gaps,
        "Language registry built"
    );
    Ok(registry)
}

/// One failed pair, by language name.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FailedPair {
    pub metric: Metric,
    pub from: String,
    pub to: String,
    pub reason: String,
}

/// Machine-readable outcome of a run.
#[derive(Debug, Clone, Serialize)]
pub struct RunSummary {
    pub languages: usize,
    pub vocabulary_size: usize,
    pub failed_pairs: Vec<FailedPair>,
}

/// Everything a run produced.
#[derive(Debug)]
pub struct RunOutput {
    pub vocabulary_size: usize,
    pub registry: LanguageRegistry,
    pub distances: PairwiseDistances,
}

impl RunOutput {
    pub fn summary(&self) -> RunSummary {
        let name = |index: usize| {
            self.registry
                .entry(index)
                .map(|e| e.name.clone())
                .unwrap_or_default()
        };
        RunSummary {
            languages: self.registry.len(),
            vocabulary_size: self.vocabulary_size,
            failed_pairs: self
                .distances
                .failures
                .iter()
                .map(|f| FailedPair {
                    metric: f.metric,
                    from: name(f.from),
                    to: name(f.to),
                    reason: f.error.to_string(),
                })
                .collect(),
        }
    }
}

/// Load, align and measure without writing anything.
pub fn compute(config: &LangDistConfig) -> LangDistResult<RunOutput> {
    let corpus = load_corpus(&config.input)?;
    let registry = build_registry(&corpus, config.compute.parallel)?;
    let distances = compute_pairwise(&registry, config.compute.parallel);
    Ok(RunOutput {
        vocabulary_size: corpus.vocabulary.size(),
        registry,
        distances,
    })
}

/// Full run: [`compute`] then [`write_outputs`].
pub fn run(config: &LangDistConfig) -> LangDistResult<RunOutput> {
    let output = compute(config)?;
    write_outputs(&config.output, &output.registry, &output.distances)?;
    Ok(output)
}

/// Write the label listing, both distance matrices and, if enabled, the
/// annotated reports into `output.dir`.
pub fn write_outputs(
    output: &OutputConfig,
    registry: &LanguageRegistry,
    distances: &PairwiseDistances,
) -> LangDistResult<()> {
    fs::create_dir_all(&output.dir).map_err(|e| LangDistError::io(&output.dir, e))?;
    let sentinel = output.failure_sentinel.as_str();

    write_file(&output.labels_path(), |out| write_language_labels(out, registry))?;
    write_file(&output.kl_path(), |out| {
        write_distance_matrix(out, &distances.kl, sentinel)
    })?;
    write_file(&output.rao_path(), |out| {
        write_distance_matrix(out, &distances.rao, sentinel)
    })?;

    if output.annotated_report {
        let labels = registry.labels();
        write_file(&output.kl_report_path(), |out| {
            write_annotated_report(out, &labels, &distances.kl, sentinel)
        })?;
        write_file(&output.rao_report_path(), |out| {
            write_annotated_report(out, &labels, &distances.rao, sentinel)
        })?;
    }

    info!(dir = %output.dir.display(), "Reports written");
    Ok(())
}

fn write_file<F>(path: &Path, render: F) -> LangDistResult<()>
where
    F: FnOnce(&mut BufWriter<File>) -> io::Result<()>,
{
    let file = File::create(path).map_err(|e| LangDistError::io(path, e))?;
    let mut out = BufWriter::new(file);
    render(&mut out)
        .and_then(|_| out.flush())
        .map_err(|e| LangDistError::io(path, e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    const CATALOG: &str = "# English\nhand\t0.6 0.4 \nfoot\t0.3 0.7 \n# German\nhand\t0.5 0.5 \neye\t0.2 0.8 \n";

    fn write(dir: &Path, name: &str, body: &str) -> PathBuf {
        let path = dir.join(name);
        fs::write(&path, body).unwrap();
        path
    }

    fn input_for(catalog: PathBuf) -> InputConfig {
        InputConfig {
            catalog,
            ..Default::default()
        }
    }

    #[test]
    fn test_corpus_registers_seed_first() {
        let seed = Catalog::parse("eye\t1 \n", "#", "seed").unwrap();
        let english = RecordSet::parse("English", "hand\t1 \neye\t0 1 \n", "#").unwrap();
        let corpus = Corpus::new(&seed, vec![english]);

        assert_eq!(corpus.vocabulary().index_of("eye"), Some(0));
        assert_eq!(corpus.vocabulary().index_of("hand"), Some(1));
        assert_eq!(corpus.languages().len(), 1);
    }

    #[test]
    fn test_load_catalog_only() {
        let tmp = TempDir::new().unwrap();
        let catalog = write(tmp.path(), "catalog", CATALOG);

        let corpus = load_corpus(&input_for(catalog)).unwrap();
        assert_eq!(corpus.languages().len(), 2);
        assert_eq!(corpus.vocabulary().size(), 3);
        assert_eq!(corpus.vocabulary().meaning_at(2), Some("eye"));
    }

    #[test]
    fn test_load_language_dir_sorted_and_prefixed() {
        let tmp = TempDir::new().unwrap();
        let catalog = write(tmp.path(), "catalog", "water\t1 \n");
        let langs = tmp.path().join("langs");
        fs::create_dir(&langs).unwrap();
        write(&langs, "lm_Welsh", "fire\t0.5 0.5 \nwater\t0.5 0.5 \n");
        write(&langs, "lm_Breton", "water\t1 \n");
        write(&langs, "README", "not a language\n");

        let input = InputConfig {
            languages_dir: Some(langs),
            language_file_prefix: "lm_".to_string(),
            ..input_for(catalog)
        };
        let corpus = load_corpus(&input).unwrap();

        let names: Vec<&str> = corpus.languages().iter().map(|l| l.language()).collect();
        assert_eq!(names, vec!["Breton", "Welsh"]);
        assert_eq!(corpus.vocabulary().index_of("water"), Some(0));
        assert_eq!(corpus.vocabulary().index_of("fire"), Some(1));
    }

    #[test]
    fn test_empty_catalog_is_empty_corpus() {
        let tmp = TempDir::new().unwrap();
        let catalog = write(tmp.path(), "catalog", "hand\t1 \n");
        assert!(matches!(
            load_corpus(&input_for(catalog)),
            Err(LangDistError::EmptyCorpus(_))
        ));
    }

    #[test]
    fn test_missing_catalog_is_io() {
        let tmp = TempDir::new().unwrap();
        let result = load_corpus(&input_for(tmp.path().join("absent")));
        assert!(matches!(result, Err(LangDistError::Io { .. })));
    }

    #[test]
    fn test_build_registry_parallel_matches_sequential() {
        let tmp = TempDir::new().unwrap();
        let catalog = write(tmp.path(), "catalog", CATALOG);
        let corpus = load_corpus(&input_for(catalog)).unwrap();

        let parallel = build_registry(&corpus, true).unwrap();
        let sequential = build_registry(&corpus, false).unwrap();

        assert_eq!(parallel.len(), 2);
        assert_eq!(parallel.dim(), 3);
        for (a, b) in parallel.entries().iter().zip(sequential.entries()) {
            assert_eq!(a.name, b.name);
            assert_eq!(a.matrix, b.matrix);
        }
        assert_eq!(parallel.index_of("German"), Some(1));
    }

    #[test]
    fn test_run_writes_reports() {
        let tmp = TempDir::new().unwrap();
        let catalog = write(tmp.path(), "catalog", CATALOG);
        let mut config = LangDistConfig::default();
        config.input = input_for(catalog);
        config.output.dir = tmp.path().join("out");

        let output = run(&config).unwrap();
        let summary = output.summary();
        assert_eq!(summary.languages, 2);
        assert_eq!(summary.vocabulary_size, 3);

        let labels = fs::read_to_string(config.output.labels_path()).unwrap();
        assert_eq!(labels, "English   =0\nGerman    =1\n");

        let kl = fs::read_to_string(config.output.kl_path()).unwrap();
        assert_eq!(kl.lines().count(), 2);
        assert!(kl.starts_with("0.0 "));

        let report = fs::read_to_string(config.output.rao_report_path()).unwrap();
        assert!(report.starts_with("2\nEnglish     "));
    }

    #[test]
    fn test_run_without_annotated_report() {
        let tmp = TempDir::new().unwrap();
        let catalog = write(tmp.path(), "catalog", CATALOG);
        let mut config = LangDistConfig::default();
        config.input = input_for(catalog);
        config.output.dir = tmp.path().to_path_buf();
        config.output.annotated_report = false;

        run(&config).unwrap();
        assert!(config.output.rao_path().exists());
        assert!(!config.output.kl_report_path().exists());
    }

    #[test]
    fn test_summary_names_failed_pairs() {
        let tmp = TempDir::new().unwrap();
        let catalog = write(
            tmp.path(),
            "catalog",
            "# Left\na\t1 \nb\t \n# Right\nb\t1 \n",
        );
        let mut config = LangDistConfig::default();
        config.input = input_for(catalog);

        let summary = compute(&config).unwrap().summary();
        assert_eq!(summary.failed_pairs.len(), 2);
        let failed = &summary.failed_pairs[0];
        assert_eq!(failed.metric, Metric::Rao);
        assert_eq!((failed.from.as_str(), failed.to.as_str()), ("Left", "Right"));

        let json = serde_json::to_value(&summary).unwrap();
        assert_eq!(json["failed_pairs"][0]["metric"], "rao");
    }
}
