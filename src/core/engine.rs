use crate::config::{OutputFormat, MAX_REPEAT};
use crate::domain::model::GreetingMessage;
use crate::domain::ports::GreetingProvider;
use crate::utils::error::Result;
use crate::utils::validation;

pub struct GreetingEngine<P: GreetingProvider> {
    provider: P,
}

impl<P: GreetingProvider> GreetingEngine<P> {
    pub fn new(provider: P) -> Self {
        Self { provider }
    }

    pub fn render(&self, format: OutputFormat) -> Result<String> {
        let greeting = self.provider.greeting();
        match format {
            OutputFormat::Text => Ok(greeting.to_string()),
            OutputFormat::Json => Ok(serde_json::to_string(&GreetingMessage {
                message: greeting,
            })?),
        }
    }

    /// Renders the greeting `repeat` times, one entry per call to the provider.
    pub fn run(&self, format: OutputFormat, repeat: usize) -> Result<Vec<String>> {
        validation::validate_range("repeat", repeat, 1, MAX_REPEAT)?;

        tracing::debug!("Rendering greeting {} time(s) as {}", repeat, format);

        let mut lines = Vec::with_capacity(repeat);
        for call in 1..=repeat {
            let line = self.render(format)?;
            tracing::debug!(call, "rendered {} bytes", line.len());
            lines.push(line);
        }

        Ok(lines)
    }
}
