use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use super::{GenerationError, GherkinGenerator};
use crate::models::GenerationRequest;

#[derive(Debug, Clone)]
enum Behavior {
    Respond(String),
    Fail(String),
    Panic,
}

/// Scriptable backend for tests: fixed output, failure, panic, or delay.
#[derive(Debug)]
pub struct MockGenerator {
    behavior: Behavior,
    delay: Option<Duration>,
    calls: AtomicUsize,
}

impl MockGenerator {
    pub fn responding(gherkin: impl Into<String>) -> Self {
        Self::with_behavior(Behavior::Respond(gherkin.into()))
    }

    pub fn failing(reason: impl Into<String>) -> Self {
        Self::with_behavior(Behavior::Fail(reason.into()))
    }

    pub fn panicking() -> Self {
        Self::with_behavior(Behavior::Panic)
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn with_behavior(behavior: Behavior) -> Self {
        Self {
            behavior,
            delay: None,
            calls: AtomicUsize::new(0),
        }
    }
}

#[async_trait]
impl GherkinGenerator for MockGenerator {
    fn name(&self) -> &'static str {
        "mock"
    }

    async fn generate(&self, _request: &GenerationRequest) -> Result<String, GenerationError> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }

        match &self.behavior {
            Behavior::Respond(gherkin) => Ok(gherkin.clone()),
            Behavior::Fail(reason) => Err(GenerationError::Backend(reason.clone())),
            Behavior::Panic => panic!("mock generator panicked"),
        }
    }
}
