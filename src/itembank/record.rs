//! Repaired item rows and their non-numeric quoting

use crate::itembank::difficulty::{DEFAULT_DISCRIMINATION, calc_difficulty};
use crate::itembank::grade::resolve_grade;
use crate::itembank::serial::clean_text;
use std::collections::HashMap;
use std::fmt;

/// Output columns in the order they are written
pub const OUTPUT_COLUMNS: [&str; 11] = [
    "ID",
    "Question_Text",
    "Option_A",
    "Option_B",
    "Option_C",
    "Option_D",
    "Correct_Answer",
    "Skill_Standard",
    "Grade_Level",
    "Difficulty",
    "Discrimination",
];

/// Columns whose text may contain corrupted serials
pub const TEXT_COLUMNS: [&str; 5] = [
    "Question_Text",
    "Option_A",
    "Option_B",
    "Option_C",
    "Option_D",
];

/// A typed output cell
///
/// Text is always quoted so that values like grade `"7"` survive re-import as
/// text; numbers are written bare.
#[derive(Debug, Clone, PartialEq)]
pub enum Field {
    /// Quoted text
    Text(String),
    /// Bare integer, held as its normalised digit string
    Integer(String),
    /// Bare decimal, always written with a fractional part
    Decimal(f64),
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(text) => write!(f, "\"{}\"", text.replace('"', "\"\"")),
            Self::Integer(value) => write!(f, "{value}"),
            Self::Decimal(value) => write!(f, "{}", format_decimal(*value)),
        }
    }
}

/// Canonical digits of an integer ID, or `None` when `raw` is not one
///
/// Accepts an optional sign and ASCII digits, with single underscores allowed
/// between digits. Any length is accepted; leading zeros and a `+` sign are
/// dropped and negative zero reads as `0`.
pub fn integer_id(raw: &str) -> Option<String> {
    let (negative, body) = match raw.as_bytes().first()? {
        b'-' => (true, raw.get(1..)?),
        b'+' => (false, raw.get(1..)?),
        _ => (false, raw),
    };
    if body.is_empty()
        || body.starts_with('_')
        || body.ends_with('_')
        || body.contains("__")
        || !body.bytes().all(|b| b.is_ascii_digit() || b == b'_')
    {
        return None;
    }

    let digits: String = body.chars().filter(char::is_ascii_digit).collect();
    let digits = digits.trim_start_matches('0');
    Some(match (negative, digits) {
        (_, "") => "0".to_string(),
        (true, digits) => format!("-{digits}"),
        (false, digits) => digits.to_string(),
    })
}

/// Format a float the way the upstream tooling does: `2.5`, `1.0`, `-3.0`
pub fn format_decimal(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 {
        format!("{value:.1}")
    } else {
        format!("{value}")
    }
}

/// Raw input row keyed by header name
#[derive(Debug, Clone, Default)]
pub struct RawRow {
    cells: HashMap<String, String>,
}

impl RawRow {
    /// Pair headers with cells; missing trailing cells read as empty
    pub fn from_cells<'a>(
        headers: impl IntoIterator<Item = &'a str>,
        cells: impl IntoIterator<Item = &'a str>,
    ) -> Self {
        let mut cells = cells.into_iter();
        let cells = headers
            .into_iter()
            .map(|header| {
                (
                    header.trim_start_matches('\u{feff}').to_string(),
                    cells.next().unwrap_or_default().to_string(),
                )
            })
            .collect();
        Self { cells }
    }

    /// Value of a column, empty when absent
    pub fn get(&self, column: &str) -> &str {
        self.cells.get(column).map_or("", String::as_str)
    }
}

/// A repaired item ready to be written
#[derive(Debug, Clone, PartialEq)]
pub struct ItemRecord {
    /// Integer or text identifier
    pub id: Field,
    /// Question and the four options, serials repaired
    pub texts: [String; 5],
    /// Correct answer, passed through
    pub correct_answer: String,
    /// Skill standard, passed through
    pub skill: String,
    /// Normalised grade level
    pub grade: String,
    /// Heuristic difficulty
    pub difficulty: f64,
    /// Discrimination, always [`DEFAULT_DISCRIMINATION`]
    pub discrimination: f64,
}

impl ItemRecord {
    /// Repair one raw row whose trimmed ID is `id`
    pub fn repair(id: &str, row: &RawRow) -> Self {
        let id = integer_id(id).map_or_else(|| Field::Text(id.to_string()), Field::Integer);
        let texts = TEXT_COLUMNS.map(|column| clean_text(row.get(column)));
        let skill = row.get("Skill_Standard").to_string();
        let grade = resolve_grade(row.get("Grade_Level"), &skill);
        let [question, ..] = &texts;
        let difficulty = calc_difficulty(&grade, &skill, question);

        Self {
            id,
            texts,
            correct_answer: row.get("Correct_Answer").to_string(),
            skill,
            grade,
            difficulty,
            discrimination: DEFAULT_DISCRIMINATION,
        }
    }

    /// Cells in [`OUTPUT_COLUMNS`] order
    pub fn fields(&self) -> Vec<Field> {
        let mut fields = Vec::with_capacity(OUTPUT_COLUMNS.len());
        fields.push(self.id.clone());
        fields.extend(self.texts.iter().cloned().map(Field::Text));
        fields.push(Field::Text(self.correct_answer.clone()));
        fields.push(Field::Text(self.skill.clone()));
        fields.push(Field::Text(self.grade.clone()));
        fields.push(Field::Decimal(self.difficulty));
        fields.push(Field::Decimal(self.discrimination));
        fields
    }
}
