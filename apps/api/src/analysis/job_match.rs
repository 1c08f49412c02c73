//! Job Match Scorer: how much of a candidate's skill list a posting asks for,
//! with a bonus for title words the candidate's skills mention.

use serde::{Deserialize, Serialize};

use crate::jobs::JobListing;

const TITLE_WORD_BONUS: u32 = 5;

/// A listing annotated with its relevance to the candidate.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchedJob {
    #[serde(flatten)]
    pub listing: JobListing,
    pub match_score: u32,
}

/// Scores a posting 0–100 against `skills`.
///
/// base  = round(100 × skills found in title+description / skills)
/// bonus = 5 × title words found inside the joined skill list
///
/// A skill counted in the base can be counted again in the bonus.
pub fn calculate_job_match_score(skills: &[String], title: &str, description: &str) -> u32 {
    let job_text = format!("{title} {description}").to_lowercase();
    let skills_lower: Vec<String> = skills.iter().map(|s| s.to_lowercase()).collect();

    let base = if skills_lower.is_empty() {
        0
    } else {
        let matches = skills_lower
            .iter()
            .filter(|s| job_text.contains(s.as_str()))
            .count();
        let n = skills_lower.len();
        // Integer round-half-up of 100 × matches / n.
        ((200 * matches + n) / (2 * n)) as u32
    };

    let joined = skills_lower.join(" ");
    let title_matches = title
        .to_lowercase()
        .split_whitespace()
        .filter(|w| joined.contains(w))
        .count() as u32;

    (base + TITLE_WORD_BONUS * title_matches).min(100)
}

/// Scores every listing and orders them best first. Ties keep fetch order.
pub fn rank_jobs(skills: &[String], listings: Vec<JobListing>) -> Vec<MatchedJob> {
    let mut ranked: Vec<MatchedJob> = listings
        .into_iter()
        .map(|listing| {
            let context = listing
                .description
                .as_deref()
                .or(listing.tags.as_deref())
                .unwrap_or_default();
            let match_score = calculate_job_match_score(skills, &listing.title, context);
            MatchedJob {
                listing,
                match_score,
            }
        })
        .collect();

    ranked.sort_by(|a, b| b.match_score.cmp(&a.match_score));
    ranked
}
