// Application state shared with the router

use std::sync::Arc;
use crate::config::environment::EnvironmentVariables;

#[derive(Debug, Clone)]
pub struct AppState {
    pub environment: Arc<EnvironmentVariables>,
}

impl AppState {
    pub fn new(environment: EnvironmentVariables) -> Self {
        Self {
            environment: Arc::new(environment),
        }
    }

    /// Loads the configuration from the process environment (and .env)
    pub fn from_env() -> anyhow::Result<Self> {
        let environment: EnvironmentVariables = EnvironmentVariables::load()?;

        if cfg!(debug_assertions) {
            tracing::debug!("Loaded environment configuration: {:#?}", environment);
        }

        Ok(Self::new(environment))
    }
}
