pub mod controller;
pub mod engine;

pub use crate::domain::model::{Greeting, GREETING};
pub use crate::domain::ports::GreetingProvider;
pub use crate::utils::error::Result;
