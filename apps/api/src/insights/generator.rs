//! Insights generator: the three free-text analyses of a resume plus the
//! keyword list used to search job boards.

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::errors::AppError;
use crate::insights::prompts::{
    KEYWORDS_MAX_TOKENS, KEYWORDS_PROMPT_TEMPLATE, ROADMAP_MAX_TOKENS, ROADMAP_PROMPT_TEMPLATE,
    SKILL_GAPS_MAX_TOKENS, SKILL_GAPS_PROMPT_TEMPLATE, SUMMARY_MAX_TOKENS,
    SUMMARY_PROMPT_TEMPLATE,
};
use crate::llm_client::prompts::{CAREER_ADVISOR_SYSTEM, LIST_ONLY_SYSTEM};
use crate::llm_client::LanguageModel;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResumeInsights {
    pub summary: String,
    pub skill_gaps: String,
    pub roadmap: String,
}

/// Runs the summary, skill-gap, and roadmap prompts concurrently.
pub async fn generate_insights(
    llm: &dyn LanguageModel,
    resume_text: &str,
) -> Result<ResumeInsights, AppError> {
    let summary_prompt = SUMMARY_PROMPT_TEMPLATE.replace("{resume_text}", resume_text);
    let gaps_prompt = SKILL_GAPS_PROMPT_TEMPLATE.replace("{resume_text}", resume_text);
    let roadmap_prompt = ROADMAP_PROMPT_TEMPLATE.replace("{resume_text}", resume_text);

    let (summary, skill_gaps, roadmap) = tokio::try_join!(
        llm.complete(&summary_prompt, CAREER_ADVISOR_SYSTEM, SUMMARY_MAX_TOKENS),
        llm.complete(&gaps_prompt, CAREER_ADVISOR_SYSTEM, SKILL_GAPS_MAX_TOKENS),
        llm.complete(&roadmap_prompt, CAREER_ADVISOR_SYSTEM, ROADMAP_MAX_TOKENS),
    )
    .map_err(|e| AppError::Llm(format!("Resume insights failed: {e}")))?;

    info!(
        "Generated insights: summary={} gaps={} roadmap={} chars",
        summary.len(),
        skill_gaps.len(),
        roadmap.len()
    );

    Ok(ResumeInsights {
        summary,
        skill_gaps,
        roadmap,
    })
}

/// Asks the model for a comma-separated list of job titles and keywords
/// suited to the candidate described by `summary`.
pub async fn suggest_search_keywords(
    llm: &dyn LanguageModel,
    summary: &str,
) -> Result<String, AppError> {
    let prompt = KEYWORDS_PROMPT_TEMPLATE.replace("{summary}", summary);
    let raw = llm
        .complete(&prompt, LIST_ONLY_SYSTEM, KEYWORDS_MAX_TOKENS)
        .await
        .map_err(|e| AppError::Llm(format!("Keyword suggestion failed: {e}")))?;

    Ok(clean_keywords(&raw))
}

fn clean_keywords(raw: &str) -> String {
    raw.replace(['\n', '\r'], "").trim().to_string()
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use async_trait::async_trait;

    use super::*;
    use crate::llm_client::LlmError;

    /// Echoes the requested token budget so each call is distinguishable.
    struct EchoModel {
        prompts: Mutex<Vec<String>>,
    }

    #[async_trait]
    impl LanguageModel for EchoModel {
        async fn complete(
            &self,
            prompt: &str,
            _system: &str,
            max_tokens: u32,
        ) -> Result<String, LlmError> {
            self.prompts.lock().unwrap().push(prompt.to_string());
            Ok(format!("answer-{max_tokens}"))
        }
    }

    struct FailingModel;

    #[async_trait]
    impl LanguageModel for FailingModel {
        async fn complete(&self, _: &str, _: &str, _: u32) -> Result<String, LlmError> {
            Err(LlmError::EmptyContent)
        }
    }

    #[tokio::test]
    async fn test_generate_insights_routes_each_prompt() {
        let model = EchoModel {
            prompts: Mutex::new(Vec::new()),
        };
        let insights = generate_insights(&model, "RESUME BODY").await.unwrap();

        assert_eq!(insights.summary, "answer-500");
        assert_eq!(insights.skill_gaps, "answer-400");
        assert_eq!(insights.roadmap, "answer-400");

        let prompts = model.prompts.lock().unwrap();
        assert_eq!(prompts.len(), 3);
        assert!(prompts.iter().all(|p| p.contains("RESUME BODY")));
        assert!(prompts.iter().all(|p| !p.contains("{resume_text}")));
    }

    #[tokio::test]
    async fn test_generate_insights_maps_llm_failure() {
        let err = generate_insights(&FailingModel, "text").await.unwrap_err();
        assert!(matches!(err, AppError::Llm(_)));
    }

    #[tokio::test]
    async fn test_suggest_keywords_substitutes_summary() {
        let model = EchoModel {
            prompts: Mutex::new(Vec::new()),
        };
        let keywords = suggest_search_keywords(&model, "Backend dev, 5 years")
            .await
            .unwrap();
        assert_eq!(keywords, "answer-100");
        assert!(model.prompts.lock().unwrap()[0].ends_with("Summary: Backend dev, 5 years"));
    }

    #[test]
    fn test_clean_keywords_strips_newlines() {
        assert_eq!(
            clean_keywords("  Rust Engineer,\nBackend Developer,\r\nSRE \n"),
            "Rust Engineer,Backend Developer,SRE"
        );
    }
}
