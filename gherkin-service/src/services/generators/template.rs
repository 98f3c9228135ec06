use async_trait::async_trait;

use super::{GenerationError, GherkinGenerator};
use crate::models::GenerationRequest;

const LOGIN_SCENARIO: &str = "Scenario: Successful login
  Given I am on the login page
  When I enter my valid credentials (username and password)
  And I click on the \"Login\" button
  Then I should be redirected to my account dashboard";

/// Placeholder backend that answers every request with the same scenario.
#[derive(Debug, Default, Clone)]
pub struct TemplateGenerator;

impl TemplateGenerator {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl GherkinGenerator for TemplateGenerator {
    fn name(&self) -> &'static str {
        "template"
    }

    async fn generate(&self, request: &GenerationRequest) -> Result<String, GenerationError> {
        tracing::debug!(
            client_request_id = request.request_id,
            domain = %request.domain,
            "Serving template scenario"
        );
        Ok(LOGIN_SCENARIO.to_string())
    }
}
