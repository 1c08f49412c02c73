//! ATS Scorer: estimates how well a resume survives an applicant tracking system.
//!
//! Six independent rules, each capped on its own:
//! contact info (20), section headers (20), dates (15), action verbs (20),
//! quantifiable achievements (15), optimal length (10). Caps sum to 100.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

pub const MAX_SCORE: u32 = 100;

const CONTACT_CAP: u32 = 20;
const SECTION_CAP: u32 = 20;
const DATES_CAP: u32 = 15;
const VERBS_CAP: u32 = 20;
const ACHIEVEMENTS_CAP: u32 = 15;
const LENGTH_CAP: u32 = 10;

static EMAIL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\b[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}\b").expect("valid email regex")
});

static PHONE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(\+?\d{1,3}[-.\s]?)?\(?\d{3}\)?[-.\s]?\d{3}[-.\s]?\d{4}")
        .expect("valid phone regex")
});

static SECTION_HEADERS: Lazy<Vec<Regex>> = Lazy::new(|| {
    [
        r"(?i)experience|work history",
        r"(?i)education|qualification",
        r"(?i)skills|technical skills",
        r"(?i)projects|portfolio",
    ]
    .iter()
    .map(|p| Regex::new(p).expect("valid section regex"))
    .collect()
});

static DATE_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    [
        // Bare year
        r"(?i)\b(19|20)\d{2}\b",
        // Month Year
        r"(?i)\b(Jan|Feb|Mar|Apr|May|Jun|Jul|Aug|Sep|Oct|Nov|Dec)[a-z]*\s+(19|20)\d{2}\b",
        // MM/DD/YYYY
        r"(?i)\b\d{1,2}/\d{1,2}/(19|20)\d{2}\b",
    ]
    .iter()
    .map(|p| Regex::new(p).expect("valid date regex"))
    .collect()
});

static ACHIEVEMENT: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\d+%|\d+\+|[$€£]\d+|\d+[kK]\+?").expect("valid achievement regex")
});

const ACTION_VERBS: &[&str] = &[
    "developed",
    "created",
    "managed",
    "led",
    "designed",
    "implemented",
    "built",
    "achieved",
    "improved",
    "increased",
    "reduced",
    "optimized",
    "coordinated",
    "analyzed",
    "established",
    "maintained",
];

/// Letter grade derived from the total score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Grade {
    #[serde(rename = "A+")]
    APlus,
    A,
    #[serde(rename = "B+")]
    BPlus,
    B,
    C,
    D,
}

impl Grade {
    pub fn from_score(score: u32) -> Self {
        if score >= 90 {
            Grade::APlus
        } else if score >= 80 {
            Grade::A
        } else if score >= 70 {
            Grade::BPlus
        } else if score >= 60 {
            Grade::B
        } else if score >= 50 {
            Grade::C
        } else {
            Grade::D
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Grade::APlus => "A+",
            Grade::A => "A",
            Grade::BPlus => "B+",
            Grade::B => "B",
            Grade::C => "C",
            Grade::D => "D",
        }
    }
}

/// Points earned per category. Serializes as an object keyed by category name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub contact_info: u32,
    pub section_headers: u32,
    pub dates: u32,
    pub action_verbs: u32,
    pub quantifiable_achievements: u32,
    pub optimal_length: u32,
}

impl ScoreBreakdown {
    pub fn total(&self) -> u32 {
        self.contact_info
            + self.section_headers
            + self.dates
            + self.action_verbs
            + self.quantifiable_achievements
            + self.optimal_length
    }

    /// `(category, points, cap)` in scoring order.
    pub fn entries(&self) -> [(&'static str, u32, u32); 6] {
        [
            ("contact_info", self.contact_info, CONTACT_CAP),
            ("section_headers", self.section_headers, SECTION_CAP),
            ("dates", self.dates, DATES_CAP),
            ("action_verbs", self.action_verbs, VERBS_CAP),
            (
                "quantifiable_achievements",
                self.quantifiable_achievements,
                ACHIEVEMENTS_CAP,
            ),
            ("optimal_length", self.optimal_length, LENGTH_CAP),
        ]
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AtsResult {
    pub total_score: u32,
    pub max_score: u32,
    pub breakdown: ScoreBreakdown,
    pub grade: Grade,
}

/// Scores raw resume text for ATS compatibility. Never fails: a missing
/// pattern simply earns zero in its category.
pub fn calculate_ats_score(text: &str) -> AtsResult {
    let breakdown = ScoreBreakdown {
        contact_info: score_contact_info(text),
        section_headers: score_section_headers(text),
        dates: score_dates(text),
        action_verbs: score_action_verbs(text),
        quantifiable_achievements: score_achievements(text),
        optimal_length: score_length(text),
    };

    let raw = breakdown.total();

    AtsResult {
        total_score: raw.min(MAX_SCORE),
        max_score: MAX_SCORE,
        grade: Grade::from_score(raw),
        breakdown,
    }
}

fn score_contact_info(text: &str) -> u32 {
    let mut score = 0;
    if EMAIL.is_match(text) {
        score += 10;
    }
    if PHONE.is_match(text) {
        score += 10;
    }
    score.min(CONTACT_CAP)
}

fn score_section_headers(text: &str) -> u32 {
    let found = SECTION_HEADERS.iter().filter(|re| re.is_match(text)).count() as u32;
    (found * 5).min(SECTION_CAP)
}

/// Matches from different patterns are not deduplicated: "Jan 2020" counts
/// once as a year and once as a month-year.
fn score_dates(text: &str) -> u32 {
    let count: usize = DATE_PATTERNS
        .iter()
        .map(|re| re.find_iter(text).count())
        .sum();
    (count as u32).saturating_mul(3).min(DATES_CAP)
}

fn score_action_verbs(text: &str) -> u32 {
    let lower = text.to_lowercase();
    let count = ACTION_VERBS.iter().filter(|v| lower.contains(*v)).count() as u32;
    (count * 2).min(VERBS_CAP)
}

fn score_achievements(text: &str) -> u32 {
    let count = ACHIEVEMENT.find_iter(text).count() as u32;
    count.saturating_mul(3).min(ACHIEVEMENTS_CAP)
}

fn score_length(text: &str) -> u32 {
    match text.split_whitespace().count() {
        300..=1500 => 10,
        200..=299 | 1501..=2000 => 5,
        _ => 2,
    }
}
