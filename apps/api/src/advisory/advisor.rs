//! Crop Advisor — runs one analysis: prompt → generative service → extraction.
//!
//! Exactly one upstream call per analysis. Every failure is returned as a
//! `RecommendationResult::Failure`; nothing here returns `Err`.

use std::sync::Arc;

use tracing::{info, warn};

use crate::advisory::extractor::{extract_recommendations, FAILURE_PREFIX};
use crate::advisory::models::{LocationData, RecommendationResult, SoilData, WeatherData};
use crate::advisory::prompts::build_prompt;
use crate::llm_client::TextGenerator;

/// Returned for every analysis while no Gemini credential is configured.
pub const NOT_CONFIGURED_ERROR: &str =
    "Gemini API not configured. Please set GEMINI_API_KEY environment variable.";

/// Holds the generative capability, if one was configured at startup.
#[derive(Clone)]
pub struct CropAdvisor {
    generator: Option<Arc<dyn TextGenerator>>,
}

impl CropAdvisor {
    pub fn new(generator: Arc<dyn TextGenerator>) -> Self {
        Self {
            generator: Some(generator),
        }
    }

    pub fn unconfigured() -> Self {
        Self { generator: None }
    }

    pub fn is_configured(&self) -> bool {
        self.generator.is_some()
    }

    pub async fn analyze(
        &self,
        soil: &SoilData,
        weather: &WeatherData,
        location: &LocationData,
    ) -> RecommendationResult {
        let Some(generator) = &self.generator else {
            warn!("Analysis requested but Gemini is not configured");
            return RecommendationResult::failure(NOT_CONFIGURED_ERROR);
        };

        let prompt = build_prompt(soil, weather, location);

        let text = match generator.generate(&prompt).await {
            Ok(text) => text,
            Err(e) => {
                warn!("Generation call failed: {e}");
                return RecommendationResult::failure(format!("{FAILURE_PREFIX}: {e}"));
            }
        };

        let result = extract_recommendations(&text);
        match &result {
            RecommendationResult::Success { .. } => {
                info!("Recommendations generated ({} chars of model output)", text.len())
            }
            RecommendationResult::Failure { error } => warn!("{error}"),
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    use async_trait::async_trait;
    use serde_json::json;

    use crate::llm_client::LlmError;

    /// Records prompts and replays a fixed reply.
    struct StubGenerator {
        reply: Result<String, u16>,
        prompts: Mutex<Vec<String>>,
    }

    impl StubGenerator {
        fn replying(text: &str) -> Arc<Self> {
            Arc::new(Self {
                reply: Ok(text.to_string()),
                prompts: Mutex::new(Vec::new()),
            })
        }

        fn failing(status: u16) -> Arc<Self> {
            Arc::new(Self {
                reply: Err(status),
                prompts: Mutex::new(Vec::new()),
            })
        }
    }

    #[async_trait]
    impl TextGenerator for StubGenerator {
        async fn generate(&self, prompt: &str) -> Result<String, LlmError> {
            self.prompts.lock().unwrap().push(prompt.to_string());
            self.reply.clone().map_err(|status| LlmError::Api {
                status,
                message: "API key not valid".to_string(),
            })
        }
    }

    #[tokio::test]
    async fn test_unconfigured_advisor_returns_fixed_error() {
        let result = CropAdvisor::unconfigured()
            .analyze(&SoilData::default(), &WeatherData::default(), &LocationData::default())
            .await;
        assert_eq!(result, RecommendationResult::failure(NOT_CONFIGURED_ERROR));
    }

    #[tokio::test]
    async fn test_sends_one_prompt_and_extracts_reply() {
        let stub = StubGenerator::replying("Sure! {\"general_advice\": \"Mulch\"}");
        let advisor = CropAdvisor::new(stub.clone());
        let soil = SoilData {
            soil_type: Some(json!("Sandy")),
            ..SoilData::default()
        };

        let result = advisor
            .analyze(&soil, &WeatherData::default(), &LocationData::default())
            .await;

        match result {
            RecommendationResult::Success {
                recommendations, ..
            } => assert_eq!(recommendations, json!({"general_advice": "Mulch"})),
            other => panic!("expected success, got {other:?}"),
        }
        let prompts = stub.prompts.lock().unwrap();
        assert_eq!(prompts.len(), 1);
        assert!(prompts[0].contains("- Soil Type: Sandy"));
    }

    #[tokio::test]
    async fn test_upstream_error_is_wrapped() {
        let advisor = CropAdvisor::new(StubGenerator::failing(400));
        let result = advisor
            .analyze(&SoilData::default(), &WeatherData::default(), &LocationData::default())
            .await;

        assert_eq!(
            result,
            RecommendationResult::failure(
                "Error generating recommendations: API error (status 400): API key not valid"
            )
        );
    }

    #[tokio::test]
    async fn test_reply_without_json_is_still_success() {
        let advisor = CropAdvisor::new(StubGenerator::replying("Plant beans."));
        let result = advisor
            .analyze(&SoilData::default(), &WeatherData::default(), &LocationData::default())
            .await;

        assert!(result.is_success());
    }
}
