//! Heuristic item difficulty on an IRT-like theta scale
//!
//! Not a fitted model: a base value per grade plus fixed bumps for skill
//! domains and question wording, clamped to the usual `[-3, 3]` range.

use crate::io::configuration::LONG_QUESTION_CHARS;

/// Lowest difficulty written
pub const MIN_DIFFICULTY: f64 = -3.0;
/// Highest difficulty written
pub const MAX_DIFFICULTY: f64 = 3.0;
/// Base difficulty for grades missing from [`GRADE_BASE`]
pub const FALLBACK_BASE: f64 = 2.5;
/// Discrimination assigned to every item
pub const DEFAULT_DISCRIMINATION: f64 = 1.0;

/// Base difficulty per cleaned grade level
pub const GRADE_BASE: [(&str, f64); 20] = [
    ("K", -2.5),
    ("PK", -2.5),
    ("1", -2.0),
    ("2", -1.5),
    ("3", -1.0),
    ("4", -0.5),
    ("5", 0.0),
    ("6", 0.5),
    ("7", 1.0),
    ("8", 1.5),
    ("9", 2.0),
    ("10", 2.5),
    ("11", 2.5),
    ("12", 2.5),
    ("HS", 2.5),
    ("HS-Alg1", 2.0),
    ("HS-Alg2", 2.5),
    ("calc-1", 2.8),
    ("PreCalc", 2.6),
    ("13+", 2.8),
];

/// Skill-standard fragments and the difficulty they add
pub const DOMAIN_ADJUSTMENTS: [(&str, f64); 4] = [
    (".NS.", 0.2),
    (".EE.", 0.3),
    (".G.", 0.2),
    (".RP.", 0.3),
];

/// Base difficulty of a grade
pub fn grade_base(grade: &str) -> f64 {
    GRADE_BASE
        .iter()
        .find(|(g, _)| *g == grade)
        .map_or(FALLBACK_BASE, |(_, base)| *base)
}

/// Extra difficulty from the skill standard's domain
pub fn domain_adjustment(skill: &str) -> f64 {
    DOMAIN_ADJUSTMENTS
        .iter()
        .filter(|(fragment, _)| skill.contains(fragment))
        .map(|(_, bump)| bump)
        .sum()
}

/// Extra difficulty from question wording
pub fn text_adjustment(text: &str) -> f64 {
    let mut adj = 0.0;
    if text.chars().count() > LONG_QUESTION_CHARS {
        adj += 0.2;
    }
    if text.contains('?') && !text.contains("Calculate") {
        adj += 0.2;
    }
    adj
}

/// Difficulty of an item, clamped and rounded to one decimal
pub fn calc_difficulty(grade: &str, skill: &str, text: &str) -> f64 {
    let value = grade_base(grade) + domain_adjustment(skill) + text_adjustment(text);
    round_tenths(value.clamp(MIN_DIFFICULTY, MAX_DIFFICULTY))
}

fn round_tenths(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
