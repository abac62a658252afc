use std::str::FromStr;

use anyhow::Context;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DemoConfig {
    pub initial_size: usize,
    pub rounds: usize,
    pub log_level: log::LevelFilter,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            initial_size: 0,
            rounds: 1,
            log_level: log::LevelFilter::Info,
        }
    }
}

impl DemoConfig {
    pub const INITIAL_SIZE: &'static str = "QUEUE_INITIAL_SIZE";
    pub const ROUNDS: &'static str = "QUEUE_ROUNDS";
    pub const LOG_LEVEL: &'static str = "QUEUE_LOG";

    pub fn load_from_env() -> anyhow::Result<Self> {
        simple_env_load::load_env_from([".dev.env"]);
        Self::load_with(|key| std::env::var(key).ok())
    }

    /// Builds a config from `lookup`, falling back to the defaults for missing keys
    pub fn load_with(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        fn get<T>(
            lookup: &impl Fn(&str) -> Option<String>,
            key: &str,
            default: T,
        ) -> anyhow::Result<T>
        where
            T: FromStr,
            T::Err: std::error::Error + Send + Sync + 'static,
        {
            match lookup(key) {
                Some(value) => value
                    .trim()
                    .parse()
                    .with_context(|| anyhow::anyhow!("invalid value for `{key}`: {value:?}")),
                None => Ok(default),
            }
        }

        let default = Self::default();
        Ok(Self {
            initial_size: get(&lookup, Self::INITIAL_SIZE, default.initial_size)?,
            rounds: get(&lookup, Self::ROUNDS, default.rounds)?,
            log_level: get(&lookup, Self::LOG_LEVEL, default.log_level)?,
        })
    }
}
