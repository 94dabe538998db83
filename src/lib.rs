pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use config::{OutputFormat, Settings};
pub use crate::core::{controller::HelloController, engine::GreetingEngine};
pub use domain::model::{Greeting, GREETING};
pub use domain::ports::GreetingProvider;
pub use utils::error::{HelloError, Result};
