use std::sync::Arc;

use tracing::{error, info};

use crate::{
    config::{PlannerConfig, DEFAULT_TEMPERATURE},
    core::{
        generator::TextGenerator,
        links::{LinkRewriter, MapsLinkRewriter},
    },
    error::{PlannerError, Result},
    services::prompting::{build_trip_prompt, CONNECTIVITY_PROMPT},
    types::{ConnectivityReport, TripPlanText, TripRequest},
};

/// Temperature used for the connectivity self test.
pub const SELF_TEST_TEMPERATURE: f64 = 0.1;

/// Builds prompts, calls the generation service and post-processes replies.
#[derive(Clone, Debug)]
pub struct TripPlanner {
    generator: Arc<dyn TextGenerator>,
    rewriter: Arc<dyn LinkRewriter>,
    temperature: f64,
}

impl TripPlanner {
    pub fn new(generator: Arc<dyn TextGenerator>) -> Self {
        Self {
            generator,
            rewriter: Arc::new(MapsLinkRewriter::new()),
            temperature: DEFAULT_TEMPERATURE,
        }
    }

    pub fn from_config(generator: Arc<dyn TextGenerator>, config: &PlannerConfig) -> Self {
        Self::new(generator).with_temperature(config.temperature)
    }

    pub fn with_temperature(mut self, temperature: f64) -> Self {
        self.temperature = temperature;
        self
    }

    pub fn with_rewriter(mut self, rewriter: Arc<dyn LinkRewriter>) -> Self {
        self.rewriter = rewriter;
        self
    }

    /// Produce a map-linked travel plan for `request`.
    ///
    /// Every failure, including an empty reply, comes back as
    /// [`PlannerError::Generation`].
    pub async fn recommend(&self, request: &TripRequest) -> Result<TripPlanText> {
        let prompt = build_trip_prompt(request);
        info!(destination = %request.destination, "Requesting travel plan");

        let raw = match self.generator.generate(&prompt, self.temperature).await {
            Ok(text) if !text.trim().is_empty() => text,
            Ok(_) => return Err(self.generation_failure(PlannerError::EmptyResponse)),
            Err(err) => return Err(self.generation_failure(err)),
        };

        let html = self.rewriter.rewrite_links(&raw);
        info!(destination = %request.destination, "Successfully generated travel plan");

        Ok(TripPlanText { raw, html })
    }

    /// Send a fixed prompt to check that the service answers.
    pub async fn self_test(&self) -> ConnectivityReport {
        match self
            .generator
            .generate(CONNECTIVITY_PROMPT, SELF_TEST_TEMPERATURE)
            .await
        {
            Ok(text) if !text.is_empty() => ConnectivityReport {
                success: true,
                message: text,
            },
            Ok(_) => ConnectivityReport {
                success: false,
                message: "No response from API".to_string(),
            },
            Err(err) => {
                let message = format!("API Test Error: {err}");
                error!(code = err.error_code(), "{}", message);
                ConnectivityReport {
                    success: false,
                    message,
                }
            }
        }
    }

    fn generation_failure(&self, cause: PlannerError) -> PlannerError {
        let err = PlannerError::generation(cause);
        error!(code = err.error_code(), "{}", err);
        err
    }
}
