// Deterministic resume analysis. No network calls and no LLM here; every
// function is pure and safe to call from request handlers directly.

pub mod ats;
pub mod handlers;
pub mod interview;
pub mod job_match;
pub mod salary;
pub mod skills;

pub use ats::{calculate_ats_score, AtsResult};
pub use interview::generate_interview_tips;
pub use job_match::calculate_job_match_score;
pub use salary::{estimate_salary_range, SalaryBand, DEFAULT_LOCATION};
pub use skills::{extract_skills, SkillSet};
