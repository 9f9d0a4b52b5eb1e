// File: src/persistence.rs
use crate::config::AnalyzerConfig;
use crate::core::corpus::Corpus;
use crate::core::loader::{load_noun_paradigms, load_verb_paradigms};
use crate::error::{Error, Result};
use std::fs::{self, File};
use std::io::{BufReader, BufWriter};
use std::path::Path;
use tempfile::NamedTempFile;
use tracing::{info, warn};

/// A corpus plus whatever went wrong while loading it.
///
/// Loading never fails outright: an unreadable source contributes no
/// paradigms and is reported here once.
#[derive(Debug, Default)]
pub struct CorpusLoad {
    pub corpus: Corpus,
    pub warnings: Vec<Error>,
}

impl CorpusLoad {
    pub fn is_clean(&self) -> bool {
        self.warnings.is_empty()
    }
}

pub fn read_text(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|source| Error::Read { path: path.to_path_buf(), source })
}

/// Reads and parses both text corpora, substituting an empty collection for
/// any file that is missing or yields no entries.
pub fn load_corpus(noun_path: &Path, verb_path: &Path) -> CorpusLoad {
    let mut warnings = Vec::new();

    let nouns = match read_text(noun_path) {
        Ok(text) => load_noun_paradigms(&text),
        Err(e) => {
            warnings.push(e);
            Vec::new()
        }
    };
    if nouns.is_empty() && warnings.is_empty() {
        warnings.push(Error::EmptyCorpus { path: noun_path.to_path_buf() });
    }

    let before = warnings.len();
    let verbs = match read_text(verb_path) {
        Ok(text) => load_verb_paradigms(&text),
        Err(e) => {
            warnings.push(e);
            Vec::new()
        }
    };
    if verbs.is_empty() && warnings.len() == before {
        warnings.push(Error::EmptyCorpus { path: verb_path.to_path_buf() });
    }

    for warning in &warnings {
        warn!("{warning}; continuing with an empty collection");
    }
    info!(nouns = nouns.len(), verbs = verbs.len(), "corpus loaded");
    CorpusLoad { corpus: Corpus::new(nouns, verbs), warnings }
}

/// Loads the corpus described by `config`, preferring a compiled snapshot.
/// A clean text load refreshes the snapshot.
pub fn load_configured(config: &AnalyzerConfig) -> CorpusLoad {
    if let Some(snapshot) = config.snapshot.as_deref() {
        if snapshot.exists() {
            match load_snapshot(snapshot) {
                Ok(corpus) => {
                    info!(path = %snapshot.display(), "using corpus snapshot");
                    return CorpusLoad { corpus, warnings: Vec::new() };
                }
                Err(e) => warn!("{e}; rebuilding from text corpora"),
            }
        }
    }

    let load = load_corpus(&config.noun_corpus, &config.verb_corpus);
    if let (Some(snapshot), true) = (config.snapshot.as_deref(), load.is_clean()) {
        if let Err(e) = save_snapshot(&load.corpus, snapshot) {
            warn!("{e}");
        }
    }
    load
}

pub fn save_snapshot(corpus: &Corpus, path: &Path) -> Result<()> {
    let write_err = |source: std::io::Error| Error::Write { path: path.to_path_buf(), source };
    let parent_dir = match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir,
        _ => Path::new("."),
    };
    fs::create_dir_all(parent_dir).map_err(write_err)?;

    let temp_file = NamedTempFile::new_in(parent_dir).map_err(write_err)?;
    let writer = BufWriter::new(&temp_file);
    bincode::serialize_into(writer, corpus)?;

    temp_file.persist(path).map_err(|e| write_err(e.error))?;
    Ok(())
}

pub fn load_snapshot(path: &Path) -> Result<Corpus> {
    let file = File::open(path).map_err(|source| Error::Read { path: path.to_path_buf(), source })?;
    let reader = BufReader::new(file);
    Ok(bincode::deserialize_from(reader)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::index::resolve_noun;
    use tempfile::tempdir;

    const NOUNS: &str = "Sanskrit Header: 1. फल अकारान्तः नपुंसकलिङ्गः fruit
<<TABLE>>
प्रथमा\tफलम्\tफले\tफलानि
</TABLE>
<<INFO>>neuter</INFO>";

    const VERBS: &str = "Heading: 1. (१) पठ् व्यक्तायां (भ्वादिः शप् सकर्मकः सेट्)
कर्तरि लट्
पठति पठतः पठन्ति
";

    #[test]
    fn missing_files_degrade_to_empty() {
        let dir = tempdir().expect("tempdir");
        let load = load_corpus(&dir.path().join("nouns.txt"), &dir.path().join("verbs.txt"));
        assert!(load.corpus.is_empty());
        assert_eq!(load.warnings.len(), 2);
        assert!(matches!(load.warnings[0], Error::Read { .. }));
    }

    #[test]
    fn unparseable_file_is_reported_once() {
        let dir = tempdir().expect("tempdir");
        let nouns = dir.path().join("nouns.txt");
        let verbs = dir.path().join("verbs.txt");
        fs::write(&nouns, "nothing useful").expect("write");
        fs::write(&verbs, VERBS).expect("write");

        let load = load_corpus(&nouns, &verbs);
        assert_eq!(load.corpus.verbs.len(), 1);
        assert!(matches!(&load.warnings[..], [Error::EmptyCorpus { path }] if path == &nouns));
    }

    #[test]
    fn snapshot_round_trips() {
        let dir = tempdir().expect("tempdir");
        let path = dir.path().join("cache").join("corpus.bin");
        let corpus = Corpus::from_texts(NOUNS, VERBS);

        save_snapshot(&corpus, &path).expect("save");
        let restored = load_snapshot(&path).expect("load");
        assert_eq!(restored.verbs.len(), 1);
        let hit = resolve_noun(&restored.nouns, "फलानि").expect("form survives");
        assert_eq!(hit.paradigm.info, "neuter");
        assert_eq!(hit.paradigm.meta.gloss.as_deref(), Some("fruit"));
    }

    #[test]
    fn corrupt_snapshot_is_an_error() {
        let dir = tempdir().expect("tempdir");
        let path = dir.path().join("corpus.bin");
        fs::write(&path, [0xff; 3]).expect("write");
        assert!(matches!(load_snapshot(&path), Err(Error::Snapshot(_))));
    }

    #[test]
    fn configured_load_writes_then_reuses_snapshot() {
        let dir = tempdir().expect("tempdir");
        let config = AnalyzerConfig {
            noun_corpus: dir.path().join("nouns.txt"),
            verb_corpus: dir.path().join("verbs.txt"),
            snapshot: Some(dir.path().join("corpus.bin")),
        };
        fs::write(&config.noun_corpus, NOUNS).expect("write");
        fs::write(&config.verb_corpus, VERBS).expect("write");

        let first = load_configured(&config);
        assert!(first.is_clean());
        assert!(dir.path().join("corpus.bin").exists());

        // The text corpora are gone, so only the snapshot can supply entries.
        fs::remove_file(&config.noun_corpus).expect("remove");
        fs::remove_file(&config.verb_corpus).expect("remove");
        let second = load_configured(&config);
        assert!(second.is_clean());
        assert_eq!(second.corpus.nouns.len(), 1);
    }
}
