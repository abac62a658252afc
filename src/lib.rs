#![cfg_attr(debug_assertions, allow(dead_code, unused_variables,))]

mod queue;
pub use queue::Queue;

mod error;
pub use error::{Error, Result};

mod config;
pub use config::DemoConfig;

pub mod logger;
