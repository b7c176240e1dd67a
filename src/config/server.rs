//! HTTP listener configuration.

use std::env;
use std::path::Path;

const LOCAL_BIND_ADDRESS: &str = "127.0.0.1:8080";
const CONTAINER_BIND_ADDRESS: &str = "0.0.0.0:8080";

/// Configuration for the HTTP server listener
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub bind_address: String,
}

impl ServerConfig {
    /// Load configuration from environment variables.
    ///
    /// `BIND_ADDRESS` wins when set. Otherwise the server listens on all
    /// interfaces inside Kubernetes or Docker and on localhost elsewhere.
    pub fn from_env() -> Self {
        let bind_override = env::var("BIND_ADDRESS").ok().filter(|v| !v.trim().is_empty());
        let container = is_container_environment(
            env::var("KUBERNETES_SERVICE_HOST").ok().as_deref(),
            env::var("DOCKER_CONTAINER").ok().as_deref(),
            Path::new("/.dockerenv").exists(),
        );

        Self {
            bind_address: detect_bind_address(container, bind_override.as_deref()),
        }
    }
}

/// Whether the process appears to run inside a container
pub fn is_container_environment(
    k8s_service_host: Option<&str>,
    docker_container: Option<&str>,
    dockerenv_exists: bool,
) -> bool {
    k8s_service_host.is_some() || docker_container.is_some() || dockerenv_exists
}

/// Pick the listen address from the container flag and an explicit override
pub fn detect_bind_address(container: bool, bind_override: Option<&str>) -> String {
    if let Some(bind) = bind_override {
        return bind.trim().to_string();
    }

    if container {
        CONTAINER_BIND_ADDRESS.to_string()
    } else {
        LOCAL_BIND_ADDRESS.to_string()
    }
}
