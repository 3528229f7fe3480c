//! Grade level normalisation

use crate::itembank::serial::serial_to_month;
use regex::Regex;
use std::sync::LazyLock;

/// Grade used when nothing better is known
pub const DEFAULT_GRADE: &str = "HS";
/// Grade used for blank grades on calculus skills
pub const CALCULUS_GRADE: &str = "calc-1";

// Day-month text such as "12-Nov" produced by spreadsheet date formatting
static DAY_MONTH: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"^[0-9]{1,2}-[A-Za-z]{3}").ok());

const MONTH_GRADES: [(&str, &str); 4] = [
    ("Nov", "11"),
    ("Oct", "10"),
    ("Sep", "9"),
    ("Dec", "12"),
];

fn is_missing(value: &str) -> bool {
    value.is_empty() || value.eq_ignore_ascii_case("nan")
}

fn is_serial_token(value: &str) -> bool {
    value.len() == 5 && value.bytes().all(|b| b.is_ascii_digit())
}

/// Normalise a raw grade cell
///
/// Serials decode to their month, day-month text to the grade its month
/// stands for, `PK` folds into `K`, and a trailing `.0` from float export is
/// dropped. Blank and `nan` cells become [`DEFAULT_GRADE`].
pub fn clean_grade(raw: &str) -> String {
    let s = raw.trim();
    if is_missing(s) {
        return DEFAULT_GRADE.to_string();
    }

    if is_serial_token(s) {
        if let Some(month) = s.parse().ok().and_then(serial_to_month) {
            return month.to_string();
        }
    }

    if DAY_MONTH.as_ref().is_some_and(|re| re.is_match(s)) {
        if let Some((_, grade)) = MONTH_GRADES.iter().find(|(month, _)| s.contains(month)) {
            return (*grade).to_string();
        }
    }

    if s == "K" || s == "PK" {
        return "K".to_string();
    }

    s.strip_suffix(".0").unwrap_or(s).to_string()
}

/// Resolve the grade of a row, falling back on the skill for blank cells
///
/// A blank or `nan` cell (checked before trimming) becomes [`CALCULUS_GRADE`]
/// when the skill names a calculus standard, otherwise [`DEFAULT_GRADE`].
pub fn resolve_grade(raw: &str, skill: &str) -> String {
    if is_missing(raw) {
        if skill.contains("Calc") {
            CALCULUS_GRADE.to_string()
        } else {
            DEFAULT_GRADE.to_string()
        }
    } else {
        clean_grade(raw)
    }
}
