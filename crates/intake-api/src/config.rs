use std::env;
use std::net::SocketAddr;
use std::sync::Arc;

use intake_services::evaluation::{EvaluationGateway, HttpEvaluationGateway, InMemoryEvaluationGateway};

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";

/// Startup configuration, read from `INTAKE_*` environment variables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    pub bind_addr: SocketAddr,
    /// Base URL of the evaluation backend. Unset means the in-process
    /// demo gateway.
    pub evaluation_endpoint: Option<String>,
    pub log_json: bool,
}

impl ApiConfig {
    pub fn from_env() -> eyre::Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> eyre::Result<Self> {
        let bind_addr = lookup("INTAKE_BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        let bind_addr = bind_addr
            .parse()
            .map_err(|e| eyre::eyre!("invalid INTAKE_BIND_ADDR {bind_addr:?}: {e}"))?;

        let evaluation_endpoint = lookup("INTAKE_EVALUATION_ENDPOINT")
            .map(|url| url.trim().to_string())
            .filter(|url| !url.is_empty());

        let log_json = match lookup("INTAKE_LOG_JSON").as_deref() {
            None | Some("") => true,
            Some("1" | "true" | "yes") => true,
            Some("0" | "false" | "no") => false,
            Some(other) => eyre::bail!("invalid INTAKE_LOG_JSON {other:?}: expected true or false"),
        };

        Ok(Self {
            bind_addr,
            evaluation_endpoint,
            log_json,
        })
    }

    pub fn evaluation_gateway(&self) -> Arc<dyn EvaluationGateway> {
        match &self.evaluation_endpoint {
            Some(url) => Arc::new(HttpEvaluationGateway::new(url.clone())),
            None => Arc::new(InMemoryEvaluationGateway::demo()),
        }
    }
}
