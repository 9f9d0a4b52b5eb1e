// src/core/types.rs
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

/// Printed in place of a heading field that could not be extracted.
pub const UNRESOLVED_MARK: &str = "❌";

/// Index of a paradigm inside its loaded corpus.
pub type ParadigmId = usize;

/// The seven grammatical cases, in table order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(into = "&'static str")]
pub enum Vibhakti {
    Prathama,
    Dvitiya,
    Tritiya,
    Chaturthi,
    Panchami,
    Shashthi,
    Saptami,
}

impl Vibhakti {
    pub const ALL: [Vibhakti; 7] = [
        Vibhakti::Prathama,
        Vibhakti::Dvitiya,
        Vibhakti::Tritiya,
        Vibhakti::Chaturthi,
        Vibhakti::Panchami,
        Vibhakti::Shashthi,
        Vibhakti::Saptami,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Vibhakti::Prathama => "प्रथमा",
            Vibhakti::Dvitiya => "द्वितीया",
            Vibhakti::Tritiya => "तृतीया",
            Vibhakti::Chaturthi => "चतुर्थी",
            Vibhakti::Panchami => "पञ्चमी",
            Vibhakti::Shashthi => "षष्ठी",
            Vibhakti::Saptami => "सप्तमी",
        }
    }

    /// Recognizes a table row label such as `पञ्चमी` or `पञ्चमी विभक्तिः`.
    pub fn from_label(label: &str) -> Option<Self> {
        let label = label.trim();
        Self::ALL
            .into_iter()
            .find(|case| label.starts_with(case.label()))
    }
}

impl From<Vibhakti> for &'static str {
    fn from(case: Vibhakti) -> Self {
        case.label()
    }
}

impl fmt::Display for Vibhakti {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Grammatical number. Doubles as the column index of noun tables and verb grids.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(into = "&'static str")]
pub enum Vachana {
    Eka,
    Dvi,
    Bahu,
}

impl Vachana {
    pub const ALL: [Vachana; 3] = [Vachana::Eka, Vachana::Dvi, Vachana::Bahu];

    pub fn label(self) -> &'static str {
        match self {
            Vachana::Eka => "एकवचन",
            Vachana::Dvi => "द्विवचन",
            Vachana::Bahu => "बहुवचन",
        }
    }
}

impl From<Vachana> for &'static str {
    fn from(vachana: Vachana) -> Self {
        vachana.label()
    }
}

impl fmt::Display for Vachana {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Grammatical person in source order: the first grid row is the third person.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(into = "&'static str")]
pub enum Purusha {
    Prathama,
    Madhyama,
    Uttama,
}

impl Purusha {
    pub const ALL: [Purusha; 3] = [Purusha::Prathama, Purusha::Madhyama, Purusha::Uttama];

    pub fn label(self) -> &'static str {
        match self {
            Purusha::Prathama => "प्रथम पुरुष",
            Purusha::Madhyama => "मध्यम पुरुष",
            Purusha::Uttama => "उत्तम पुरुष",
        }
    }
}

impl From<Purusha> for &'static str {
    fn from(purusha: Purusha) -> Self {
        purusha.label()
    }
}

impl fmt::Display for Purusha {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A heading field extracted from hand-authored text.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "Option<String>", into = "Option<String>")]
pub enum MetaField {
    Resolved(String),
    Unresolved,
}

impl MetaField {
    pub fn new(value: impl Into<String>) -> Self {
        let value = value.into();
        if value.is_empty() {
            MetaField::Unresolved
        } else {
            MetaField::Resolved(value)
        }
    }

    pub fn as_deref(&self) -> Option<&str> {
        match self {
            MetaField::Resolved(value) => Some(value),
            MetaField::Unresolved => None,
        }
    }

    pub fn is_resolved(&self) -> bool {
        matches!(self, MetaField::Resolved(_))
    }
}

impl From<Option<String>> for MetaField {
    fn from(value: Option<String>) -> Self {
        value.map_or(MetaField::Unresolved, MetaField::new)
    }
}

impl From<MetaField> for Option<String> {
    fn from(field: MetaField) -> Self {
        match field {
            MetaField::Resolved(value) => Some(value),
            MetaField::Unresolved => None,
        }
    }
}

impl fmt::Display for MetaField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_deref().unwrap_or(UNRESOLVED_MARK))
    }
}

/// A recoverable problem found while parsing one corpus entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum LoadIssue {
    /// The heading line did not have the expected shape; all fields are unresolved.
    MalformedHeading,
    /// The heading parsed but carried no gloss.
    MissingGloss,
    MissingTable,
    MissingInfo,
    /// A row with the wrong number of fields was skipped.
    MalformedRow { line: String, fields: usize },
    /// A `कर्तरि` section with no grid lines under it.
    EmptyGrid { lakara: String },
}

/// One case row of a declension table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableRow {
    /// The row label as written, e.g. `पञ्चमी`.
    pub label: String,
    /// Alternative forms for singular, dual and plural.
    pub cells: [Vec<String>; 3],
}

impl TableRow {
    pub fn vibhakti(&self) -> Option<Vibhakti> {
        Vibhakti::from_label(&self.label)
    }
}

/// Extracted fields of a noun heading line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NounHeading {
    pub lemma: MetaField,
    pub stem_class: MetaField,
    pub gender: MetaField,
    pub gloss: MetaField,
}

impl NounHeading {
    pub fn unresolved() -> Self {
        Self {
            lemma: MetaField::Unresolved,
            stem_class: MetaField::Unresolved,
            gender: MetaField::Unresolved,
            gloss: MetaField::Unresolved,
        }
    }
}

/// A declension paradigm. Built once by the loader and never mutated.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NounParadigm {
    pub heading: String,
    pub meta: NounHeading,
    table: Vec<TableRow>,
    all_forms: HashSet<String>,
    pub info: String,
    pub raw_block: String,
    pub issues: Vec<LoadIssue>,
}

impl NounParadigm {
    pub fn new(
        heading: String,
        meta: NounHeading,
        table: Vec<TableRow>,
        info: String,
        raw_block: String,
        issues: Vec<LoadIssue>,
    ) -> Self {
        let all_forms = table
            .iter()
            .flat_map(|row| row.cells.iter().flatten())
            .cloned()
            .collect();
        Self { heading, meta, table, all_forms, info, raw_block, issues }
    }

    pub fn table(&self) -> &[TableRow] {
        &self.table
    }

    pub fn all_forms(&self) -> &HashSet<String> {
        &self.all_forms
    }

    pub fn contains(&self, form: &str) -> bool {
        self.all_forms.contains(form)
    }
}

/// Extracted fields of a verb heading line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerbHeading {
    pub root: MetaField,
    pub gloss: MetaField,
    /// Gaṇa, the verb class (1 to 10).
    pub class: MetaField,
    /// Pratyaya, the affix class.
    pub affix_class: MetaField,
    /// Karmakatā marker.
    pub transitivity: MetaField,
    /// Seṭ/aniṭ marker.
    pub augment: MetaField,
}

impl VerbHeading {
    pub fn unresolved() -> Self {
        Self {
            root: MetaField::Unresolved,
            gloss: MetaField::Unresolved,
            class: MetaField::Unresolved,
            affix_class: MetaField::Unresolved,
            transitivity: MetaField::Unresolved,
            augment: MetaField::Unresolved,
        }
    }
}

/// A 3x3 person/number grid under one `कर्तरि` label. Missing cells are empty strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LakaraGrid {
    pub lakara: String,
    pub rows: [[String; 3]; 3],
}

impl LakaraGrid {
    /// Iterates non-empty cells in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = (Purusha, Vachana, &str)> + '_ {
        Purusha::ALL.into_iter().zip(self.rows.iter()).flat_map(|(purusha, row)| {
            Vachana::ALL
                .into_iter()
                .zip(row.iter())
                .filter(|(_, form)| !form.is_empty())
                .map(move |(vachana, form)| (purusha, vachana, form.as_str()))
        })
    }
}

/// A conjugation paradigm. Built once by the loader and never mutated.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VerbParadigm {
    pub heading: String,
    pub meta: VerbHeading,
    grids: Vec<LakaraGrid>,
    all_forms: HashSet<String>,
    pub raw_block: String,
    pub issues: Vec<LoadIssue>,
}

impl VerbParadigm {
    pub fn new(
        heading: String,
        meta: VerbHeading,
        grids: Vec<LakaraGrid>,
        raw_block: String,
        issues: Vec<LoadIssue>,
    ) -> Self {
        let all_forms = grids
            .iter()
            .flat_map(|grid| grid.cells().map(|(_, _, form)| form.to_string()))
            .collect();
        Self { heading, meta, grids, all_forms, raw_block, issues }
    }

    pub fn grids(&self) -> &[LakaraGrid] {
        &self.grids
    }

    pub fn all_forms(&self) -> &HashSet<String> {
        &self.all_forms
    }

    pub fn contains(&self, form: &str) -> bool {
        self.all_forms.contains(form)
    }
}
