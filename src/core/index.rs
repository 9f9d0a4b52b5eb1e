// src/core/index.rs
//! Form lookup over loaded paradigms. Paradigms are searched in load order
//! and the first one containing the form wins; there is no ranking.

use crate::core::trie::PreverbTrie;
use crate::core::types::{
    NounParadigm, ParadigmId, Purusha, Vachana, VerbParadigm, Vibhakti,
};
use tracing::trace;

/// A noun form located in its declension table.
#[derive(Debug, Clone)]
pub struct NounMatch<'c> {
    pub paradigm_id: ParadigmId,
    pub paradigm: &'c NounParadigm,
    /// Row label as written in the table.
    pub case_label: &'c str,
    pub vibhakti: Option<Vibhakti>,
    pub vachana: Vachana,
}

/// A verb form located in one of its person/number grids.
#[derive(Debug, Clone)]
pub struct VerbMatch<'c> {
    pub paradigm_id: ParadigmId,
    pub paradigm: &'c VerbParadigm,
    pub lakara: &'c str,
    pub purusha: Purusha,
    pub vachana: Vachana,
    /// Set when the match was only found after removing a preverb.
    pub upasarga: Option<&'static str>,
}

/// Finds the first paradigm and cell producing `form`.
pub fn resolve_noun<'c>(paradigms: &'c [NounParadigm], form: &str) -> Option<NounMatch<'c>> {
    let (paradigm_id, paradigm) = paradigms
        .iter()
        .enumerate()
        .find(|(_, paradigm)| paradigm.contains(form))?;

    let found = paradigm.table().iter().find_map(|row| {
        Vachana::ALL
            .into_iter()
            .zip(row.cells.iter())
            .find(|(_, alternatives)| alternatives.iter().any(|alt| alt == form))
            .map(|(vachana, _)| (row, vachana))
    });
    let (row, vachana) = found?;
    trace!(form, heading = %paradigm.heading, case = %row.label, "noun hit");

    Some(NounMatch {
        paradigm_id,
        paradigm,
        case_label: &row.label,
        vibhakti: row.vibhakti(),
        vachana,
    })
}

/// Finds the first paradigm and cell producing `form`. When nothing matches
/// as written, the longest known preverb is stripped once and the remainder
/// is tried instead.
pub fn resolve_verb<'c>(paradigms: &'c [VerbParadigm], form: &str) -> Option<VerbMatch<'c>> {
    resolve_verb_with(paradigms, form, PreverbTrie::upasargas())
}

pub fn resolve_verb_with<'c>(
    paradigms: &'c [VerbParadigm],
    form: &str,
    preverbs: &PreverbTrie,
) -> Option<VerbMatch<'c>> {
    if let Some(found) = locate_verb(paradigms, form, None) {
        return Some(found);
    }
    let (stripped, upasarga) = preverbs.strip(form)?;
    locate_verb(paradigms, stripped, Some(upasarga))
}

fn locate_verb<'c>(
    paradigms: &'c [VerbParadigm],
    form: &str,
    upasarga: Option<&'static str>,
) -> Option<VerbMatch<'c>> {
    let (paradigm_id, paradigm) = paradigms
        .iter()
        .enumerate()
        .find(|(_, paradigm)| paradigm.contains(form))?;

    let found = paradigm.grids().iter().find_map(|grid| {
        grid.cells()
            .find(|&(_, _, cell)| cell == form)
            .map(|(purusha, vachana, _)| (grid, purusha, vachana))
    });
    let (grid, purusha, vachana) = found?;
    trace!(form, heading = %paradigm.heading, lakara = %grid.lakara, ?upasarga, "verb hit");

    Some(VerbMatch {
        paradigm_id,
        paradigm,
        lakara: &grid.lakara,
        purusha,
        vachana,
        upasarga,
    })
}
