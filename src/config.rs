// File: src/config.rs
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

const DEFAULT_NOUN_CORPUS: &str = "shabda_combined.txt";
const DEFAULT_VERB_CORPUS: &str = "dhatu_combined.txt";

/// Where the analyzer finds its corpora.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalyzerConfig {
    pub noun_corpus: PathBuf,
    pub verb_corpus: PathBuf,
    /// Compiled corpus cache. Rebuilt from the text corpora when absent.
    pub snapshot: Option<PathBuf>,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            noun_corpus: PathBuf::from(DEFAULT_NOUN_CORPUS),
            verb_corpus: PathBuf::from(DEFAULT_VERB_CORPUS),
            snapshot: None,
        }
    }
}

impl AnalyzerConfig {
    /// Reads a JSON config file. Missing keys keep their defaults.
    ///
    /// Relative corpus paths are taken relative to the file's directory.
    pub fn from_file(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .map_err(|source| Error::Read { path: path.to_path_buf(), source })?;
        let mut config: Self = serde_json::from_str(&text)
            .map_err(|source| Error::Config { path: path.to_path_buf(), source })?;
        if let Some(base) = path.parent() {
            config.rebase(base);
        }
        Ok(config)
    }

    fn rebase(&mut self, base: &Path) {
        let rebase = |p: &mut PathBuf| {
            if p.is_relative() {
                *p = base.join(&*p);
            }
        };
        rebase(&mut self.noun_corpus);
        rebase(&mut self.verb_corpus);
        if let Some(snapshot) = self.snapshot.as_mut() {
            rebase(snapshot);
        }
    }
}
