// src/lib.rs

pub mod config;
pub mod core;
pub mod error;
pub mod persistence;
pub use crate::core::corpus::{Corpus, SharedCorpus};
pub use crate::core::engine::{analyze_sentence, AnalysisResult, Analyzer};
pub use crate::core::loader::{load_noun_paradigms, load_verb_paradigms};
pub use crate::error::Error;
