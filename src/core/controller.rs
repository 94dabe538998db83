use crate::domain::model::{Greeting, GREETING};
use crate::domain::ports::GreetingProvider;

/// Provider of the CI/CD smoke greeting.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HelloController;

impl HelloController {
    pub fn new() -> Self {
        Self
    }

    /// The greeting as a plain string slice.
    pub fn hello(&self) -> &'static str {
        GREETING
    }
}

impl GreetingProvider for HelloController {
    fn greeting(&self) -> Greeting {
        Greeting::new()
    }
}
