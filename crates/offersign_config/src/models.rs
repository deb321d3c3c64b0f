// --- File: crates/offersign_config/src/models.rs ---

use serde::{Deserialize, Serialize};

// --- General Server Config ---
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    /// Upper bound on concurrently processed requests.
    #[serde(default = "default_max_in_flight")]
    pub max_in_flight: usize,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    3000
}

fn default_max_in_flight() -> usize {
    64
}

impl Default for ServerConfig {
    fn default() -> Self {
        ServerConfig {
            host: default_host(),
            port: default_port(),
            max_in_flight: default_max_in_flight(),
        }
    }
}

// --- Agent Auth Config ---
// Shared secret compared against the inbound `x-agent-auth` header.
// Loaded from config or the MY_AGENT_TOKEN env var.
#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct AgentAuthConfig {
    pub shared_secret: Option<String>,
}

// --- DocuSign Config ---
// Holds the non-secret service-account identity. The signing private key is
// loaded separately from the PRIVATE_KEY env var (see lib.rs) and injected at
// startup rather than carried here.
#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct DocusignConfig {
    pub client_id: Option<String>,          // dsJWTClientId
    pub oauth_host: Option<String>,         // dsOauthServer
    pub impersonated_user_guid: Option<String>, // impersonatedUserGuid
    pub template_id: Option<String>,        // TEMPLATE_ID
}

impl DocusignConfig {
    /// OAuth host with any scheme and trailing slash stripped.
    pub fn bare_oauth_host(&self) -> Option<String> {
        self.oauth_host.as_deref().map(|host| {
            host.trim_start_matches("https://")
                .trim_start_matches("http://")
                .trim_end_matches('/')
                .to_string()
        })
    }

    /// Base URL of the OAuth endpoints.
    pub fn oauth_base_url(&self) -> Option<String> {
        self.bare_oauth_host().map(|host| format!("https://{host}"))
    }
}

// --- Unified App Configuration ---
#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub agent_auth: Option<AgentAuthConfig>,
    #[serde(default)]
    pub docusign: Option<DocusignConfig>,
}
