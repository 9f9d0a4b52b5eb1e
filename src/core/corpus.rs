// src/core/corpus.rs
use crate::core::loader::{load_noun_paradigms, load_verb_paradigms};
use crate::core::types::{NounParadigm, VerbParadigm};
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Both loaded paradigm collections. Immutable once built.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Corpus {
    pub nouns: Vec<NounParadigm>,
    pub verbs: Vec<VerbParadigm>,
}

impl Corpus {
    pub fn new(nouns: Vec<NounParadigm>, verbs: Vec<VerbParadigm>) -> Self {
        Self { nouns, verbs }
    }

    /// Parses both corpora from already-read text.
    pub fn from_texts(noun_text: &str, verb_text: &str) -> Self {
        Self::new(load_noun_paradigms(noun_text), load_verb_paradigms(verb_text))
    }

    pub fn is_empty(&self) -> bool {
        self.nouns.is_empty() && self.verbs.is_empty()
    }

    /// The raw entry text of the first paradigm listing `form`, nouns first.
    pub fn raw_entry_for(&self, form: &str) -> Option<&str> {
        self.nouns
            .iter()
            .find(|paradigm| paradigm.contains(form))
            .map(|paradigm| paradigm.raw_block.as_str())
            .or_else(|| {
                self.verbs
                    .iter()
                    .find(|paradigm| paradigm.contains(form))
                    .map(|paradigm| paradigm.raw_block.as_str())
            })
    }
}

/// A corpus shared between concurrent readers.
///
/// Readers hold an `Arc` snapshot for as long as they need it. `replace` swaps
/// in a new corpus; snapshots taken earlier keep the old one alive unchanged.
#[derive(Debug, Clone, Default)]
pub struct SharedCorpus {
    current: Arc<RwLock<Arc<Corpus>>>,
}

impl SharedCorpus {
    pub fn new(corpus: Corpus) -> Self {
        Self { current: Arc::new(RwLock::new(Arc::new(corpus))) }
    }

    pub fn snapshot(&self) -> Arc<Corpus> {
        Arc::clone(&self.current.read())
    }

    /// Installs `corpus`, returning the one it replaced.
    pub fn replace(&self, corpus: Corpus) -> Arc<Corpus> {
        std::mem::replace(&mut *self.current.write(), Arc::new(corpus))
    }
}
