//! Salary Estimator: canned Indian salary bands (Lakhs Per Annum) keyed by
//! title substrings.

use serde::{Deserialize, Serialize};

pub const DEFAULT_LOCATION: &str = "India";
const CURRENCY: &str = "INR";

/// `(title substring, min, max, avg)` in LPA.
///
/// Order is the tie-break: keys overlap ("senior" and "software engineer" both
/// hit "Senior Software Engineer") and the first entry contained in the title
/// wins.
const SALARY_TABLE: &[(&str, &str, &str, &str)] = &[
    ("intern", "1.5", "3", "2.5"),
    ("junior", "3", "6", "4.5"),
    ("software engineer", "4", "12", "7"),
    ("senior", "12", "25", "18"),
    ("lead", "20", "40", "28"),
    ("manager", "25", "50", "35"),
    ("architect", "30", "60", "42"),
    ("director", "40", "80", "55"),
    ("data scientist", "6", "20", "12"),
    ("devops", "5", "18", "10"),
    ("full stack", "5", "15", "9"),
    ("frontend", "4", "12", "7"),
    ("backend", "5", "14", "8.5"),
];

const FALLBACK: (&str, &str, &str) = ("4", "12", "7");

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SalaryBand {
    pub min: String,
    pub max: String,
    pub avg: String,
    pub currency: String,
}

impl SalaryBand {
    fn lpa(min: &str, max: &str, avg: &str) -> Self {
        Self {
            min: format!("{min} LPA"),
            max: format!("{max} LPA"),
            avg: format!("{avg} LPA"),
            currency: CURRENCY.to_string(),
        }
    }
}

/// Looks up the band for `title`. Always returns a band; unknown titles get
/// the 4–12 LPA default. `location` does not yet influence the estimate.
pub fn estimate_salary_range(title: &str, _location: &str) -> SalaryBand {
    let title_lower = title.to_lowercase();

    SALARY_TABLE
        .iter()
        .find(|(key, ..)| title_lower.contains(key))
        .map(|(_, min, max, avg)| SalaryBand::lpa(min, max, avg))
        .unwrap_or_else(|| SalaryBand::lpa(FALLBACK.0, FALLBACK.1, FALLBACK.2))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_table_entry_wins_for_overlapping_keys() {
        // "software engineer" precedes "senior" in the table.
        let band = estimate_salary_range("Senior Software Engineer", DEFAULT_LOCATION);
        assert_eq!(band.min, "4 LPA");
        assert_eq!(band.max, "12 LPA");
        assert_eq!(band.avg, "7 LPA");
    }

    #[test]
    fn test_senior_before_lead() {
        let band = estimate_salary_range("Senior Team Lead", DEFAULT_LOCATION);
        assert_eq!(band.avg, "18 LPA");
    }

    #[test]
    fn test_case_insensitive_lookup() {
        let band = estimate_salary_range("DATA SCIENTIST", DEFAULT_LOCATION);
        assert_eq!(band.min, "6 LPA");
        assert_eq!(band.max, "20 LPA");
    }

    #[test]
    fn test_fractional_band() {
        let band = estimate_salary_range("Backend Developer", DEFAULT_LOCATION);
        assert_eq!(band.avg, "8.5 LPA");
        let band = estimate_salary_range("Summer Intern", DEFAULT_LOCATION);
        assert_eq!(band.min, "1.5 LPA");
    }

    #[test]
    fn test_unknown_title_falls_back_to_default() {
        let band = estimate_salary_range("Astronaut", DEFAULT_LOCATION);
        assert_eq!(band, SalaryBand::lpa("4", "12", "7"));
        assert_eq!(band.currency, "INR");
    }

    #[test]
    fn test_empty_title_falls_back() {
        assert_eq!(estimate_salary_range("", "Bengaluru").avg, "7 LPA");
    }
}
