use serde::Serialize;
use std::fmt;

pub const GREETING: &str = "Hello from CI/CD!";

/// The fixed greeting text. Copying it copies a `'static` reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Greeting(&'static str);

impl Greeting {
    pub const fn new() -> Self {
        Greeting(GREETING)
    }

    pub const fn as_str(&self) -> &'static str {
        self.0
    }
}

impl Default for Greeting {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Greeting {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

impl AsRef<str> for Greeting {
    fn as_ref(&self) -> &str {
        self.0
    }
}

impl PartialEq<str> for Greeting {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for Greeting {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

/// JSON body for `--format json`.
#[derive(Debug, Clone, Serialize)]
pub struct GreetingMessage {
    pub message: Greeting,
}
