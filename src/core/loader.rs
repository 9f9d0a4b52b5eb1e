// src/core/loader.rs
//! Parsing of hand-authored paradigm corpora.
//!
//! Both corpora are loosely formatted, so every failure here is local: a bad
//! heading leaves its fields unresolved, a bad row is skipped, and the rest of
//! the corpus still loads. What was skipped is recorded on the paradigm as
//! [`LoadIssue`]s.

use crate::core::script::{clean_form, segment};
use crate::core::types::{
    LakaraGrid, LoadIssue, MetaField, NounHeading, NounParadigm, TableRow, VerbHeading,
    VerbParadigm,
};
use tracing::debug;

/// Marks the start of every noun entry.
pub const NOUN_ENTRY_DELIMITER: &str = "Sanskrit Header:";
/// Marks the start of every verb entry.
pub const VERB_ENTRY_DELIMITER: &str = "Heading:";
/// Introduces a finite construction section in a verb entry.
pub const LAKARA_MARKER: &str = "कर्तरि";

const TABLE_OPEN: &str = "<<TABLE>>";
const TABLE_CLOSE: &str = "</TABLE>";
const INFO_OPEN: &str = "<<INFO>>";
const INFO_CLOSE: &str = "</INFO>";

/// Fields per table row: the case label plus three number columns.
const TABLE_FIELDS: usize = 4;
const GRID_SIZE: usize = 3;

/// Parses a noun corpus into paradigms, in file order.
pub fn load_noun_paradigms(raw_text: &str) -> Vec<NounParadigm> {
    let paradigms: Vec<NounParadigm> = raw_text
        .split(NOUN_ENTRY_DELIMITER)
        .skip(1)
        .map(parse_noun_block)
        .collect();
    debug!(count = paradigms.len(), "loaded noun paradigms");
    paradigms
}

/// Parses a verb corpus into paradigms, in file order.
pub fn load_verb_paradigms(raw_text: &str) -> Vec<VerbParadigm> {
    let paradigms: Vec<VerbParadigm> = raw_text
        .split(VERB_ENTRY_DELIMITER)
        .skip(1)
        .map(parse_verb_block)
        .collect();
    debug!(count = paradigms.len(), "loaded verb paradigms");
    paradigms
}

fn parse_noun_block(block: &str) -> NounParadigm {
    let block = block.trim();
    let heading = first_line(block);
    let mut issues = Vec::new();

    let (meta, heading_issue) = extract_noun_heading(&heading);
    issues.extend(heading_issue);

    let table_text = between(block, TABLE_OPEN, TABLE_CLOSE);
    if table_text.is_none() {
        issues.push(LoadIssue::MissingTable);
    }
    let info = match between(block, INFO_OPEN, INFO_CLOSE) {
        Some(info) => info.to_string(),
        None => {
            issues.push(LoadIssue::MissingInfo);
            String::new()
        }
    };

    let mut table = Vec::new();
    for line in table_text.unwrap_or_default().lines() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        match parse_table_row(line) {
            Ok(row) => table.push(row),
            Err(issue) => issues.push(issue),
        }
    }

    if !issues.is_empty() {
        debug!(%heading, ?issues, "noun entry parsed with issues");
    }
    NounParadigm::new(heading, meta, table, info, block.to_string(), issues)
}

fn parse_table_row(line: &str) -> Result<TableRow, LoadIssue> {
    let fields: Vec<&str> = line.split('\t').filter(|f| !f.is_empty()).collect();
    if fields.len() != TABLE_FIELDS {
        return Err(LoadIssue::MalformedRow { line: line.to_string(), fields: fields.len() });
    }
    Ok(TableRow {
        label: fields[0].trim().to_string(),
        cells: [split_alternatives(fields[1]), split_alternatives(fields[2]), split_alternatives(fields[3])],
    })
}

/// A cell may list several forms separated by commas or whitespace.
fn split_alternatives(field: &str) -> Vec<String> {
    let mut forms: Vec<String> = Vec::new();
    for raw in field.split(|c: char| c == ',' || c.is_whitespace()) {
        let form = clean_form(raw);
        if !form.is_empty() && !forms.iter().any(|f| f == form) {
            forms.push(form.to_string());
        }
    }
    forms
}

/// Heading shape: `<n>. <lemma> <stem-class>ः <gender>ः <gloss...>`.
pub fn extract_noun_heading(heading: &str) -> (NounHeading, Option<LoadIssue>) {
    let parts: Vec<&str> = match heading.split_once(". ") {
        Some((_, rest)) => rest.split_whitespace().collect(),
        None => Vec::new(),
    };
    if parts.len() < 3 {
        return (NounHeading::unresolved(), Some(LoadIssue::MalformedHeading));
    }

    let strip_visarga = |s: &str| s.trim_end_matches(|c: char| c == 'ः' || c == ',').to_string();
    let gloss = MetaField::new(parts[3..].join(" "));
    let issue = (!gloss.is_resolved()).then_some(LoadIssue::MissingGloss);
    let meta = NounHeading {
        lemma: MetaField::new(parts[0]),
        stem_class: MetaField::new(strip_visarga(parts[1])),
        gender: MetaField::new(strip_visarga(parts[2])),
        gloss,
    };
    (meta, issue)
}

fn parse_verb_block(block: &str) -> VerbParadigm {
    let block = block.trim();
    let heading = first_line(block);
    let raw_block = format!("{VERB_ENTRY_DELIMITER}{block}");
    let mut issues = Vec::new();

    let meta = extract_verb_heading(&heading).unwrap_or_else(|| {
        issues.push(LoadIssue::MalformedHeading);
        VerbHeading::unresolved()
    });

    let mut grids = Vec::new();
    let mut lines = block.lines().skip(1).peekable();
    while let Some(line) = lines.next() {
        let Some(lakara) = lakara_label(line) else {
            continue;
        };
        let mut rows: [[String; GRID_SIZE]; GRID_SIZE] = Default::default();
        let mut row_count = 0;
        while let Some(next) = lines.peek() {
            if next.trim().is_empty() || lakara_label(next).is_some() {
                break;
            }
            let line = lines.next().unwrap_or_default();
            let forms = segment(line);
            if forms.is_empty() {
                // Rule lines and stray notes do not take a grid row.
                issues.push(LoadIssue::MalformedRow { line: line.trim().to_string(), fields: 0 });
                continue;
            }
            if row_count >= GRID_SIZE || forms.len() > GRID_SIZE {
                issues.push(LoadIssue::MalformedRow { line: line.trim().to_string(), fields: forms.len() });
            } else {
                for (cell, form) in rows[row_count].iter_mut().zip(forms) {
                    *cell = form;
                }
            }
            row_count += 1;
        }
        if row_count == 0 {
            issues.push(LoadIssue::EmptyGrid { lakara: lakara.clone() });
        }
        grids.push(LakaraGrid { lakara, rows });
    }

    if !issues.is_empty() {
        debug!(%heading, ?issues, "verb entry parsed with issues");
    }
    VerbParadigm::new(heading, meta, grids, raw_block, issues)
}

/// Heading shape: `<n>. (<tag>) <root> <gloss> (<class> <affix> <transitivity> <augment>)`.
/// Any structural shortfall leaves every field unresolved.
pub fn extract_verb_heading(heading: &str) -> Option<VerbHeading> {
    let middle = heading.split(')').nth(1)?.trim();
    let (before, after) = middle.split_once('(')?;
    if after.contains('(') {
        return None;
    }

    let mut names = before.split_whitespace();
    let root = names.next()?;
    let gloss = names.next()?;

    let meta: Vec<&str> = after
        .trim_matches(|c: char| c == ')' || c.is_whitespace())
        .split_whitespace()
        .collect();
    if meta.len() < 4 {
        return None;
    }

    Some(VerbHeading {
        root: MetaField::new(root),
        gloss: MetaField::new(gloss),
        class: MetaField::new(meta[0]),
        affix_class: MetaField::new(meta[1]),
        transitivity: MetaField::new(meta[2]),
        augment: MetaField::new(meta[3]),
    })
}

/// `कर्तरि लट्` yields `लट्`.
fn lakara_label(line: &str) -> Option<String> {
    let rest = line.trim().strip_prefix(LAKARA_MARKER)?;
    if !rest.starts_with(char::is_whitespace) {
        return None;
    }
    let label = rest.trim();
    (!label.is_empty()).then(|| label.to_string())
}

fn first_line(block: &str) -> String {
    block.lines().next().unwrap_or_default().trim().to_string()
}

fn between<'a>(text: &'a str, open: &str, close: &str) -> Option<&'a str> {
    let start = text.find(open)? + open.len();
    let len = text[start..].find(close)?;
    Some(text[start..start + len].trim())
}
