use serde_json::Value;
use tracing::debug;

use crate::config::GreetingConfig;
use crate::errors::Result;
use crate::event::Event;
use crate::response::GreetingResponse;

/// Builds the greeting body for an already-resolved name.
pub fn greeting_body(name: &str, platform: &str) -> String {
    format!("Hello {}, welcome to {}!", name, platform)
}

/// The greeting handler.
///
/// Holds only immutable configuration, so one instance built at cold start
/// can serve every invocation by shared reference.
#[derive(Debug, Clone, Default)]
pub struct Greeter {
    config: GreetingConfig,
}

impl Greeter {
    pub fn new(config: GreetingConfig) -> Self {
        Self { config }
    }

    /// Always succeeds with status 200.
    pub fn greet(&self, event: &Event) -> GreetingResponse {
        let name = event.resolve_name(&self.config.default_name);
        debug!(name = %name, defaulted = event.name().is_none(), "resolved greeting name");
        GreetingResponse::ok(greeting_body(&name, &self.config.platform))
    }

    /// Entry point for runners: a raw platform payload in, a response out.
    ///
    /// The only failure is a payload that is not a mapping; it is returned
    /// as-is for the platform to report.
    pub fn handle(&self, payload: Value) -> Result<GreetingResponse> {
        let event = Event::from_value(payload)?;
        Ok(self.greet(&event))
    }
}
