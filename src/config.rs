use serde::Deserialize;

/// Value written by the `.env` template before a real key is filled in
const PLACEHOLDER_API_KEY: &str = "your_real_serpapi_key_here";

/// Application configuration loaded from environment variables
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// SerpAPI key; search is disabled when unset
    #[serde(default)]
    pub serpapi_key: Option<String>,

    /// SerpAPI search endpoint
    #[serde(default = "default_serpapi_endpoint")]
    pub serpapi_endpoint: String,

    /// Server host address
    #[serde(default = "default_host")]
    pub host: String,

    /// Server port
    #[serde(default = "default_port")]
    pub port: u16,

    /// Timeout applied to every outbound SerpAPI request, in seconds
    ///
    /// Defaults to 30; overridable for slow networks and tests. Must be non-zero.
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
}

fn default_serpapi_endpoint() -> String {
    "https://serpapi.com/search.json".to_string()
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    8000
}

fn default_request_timeout_secs() -> u64 {
    30
}

impl Default for Config {
    fn default() -> Self {
        Self {
            serpapi_key: None,
            serpapi_endpoint: default_serpapi_endpoint(),
            host: default_host(),
            port: default_port(),
            request_timeout_secs: default_request_timeout_secs(),
        }
    }
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        envy::from_env::<Config>()
            .map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))?
            .validate()
    }

    /// Rejects settings that would make every request fail
    pub fn validate(self) -> anyhow::Result<Self> {
        if self.request_timeout_secs == 0 {
            anyhow::bail!("Failed to load config: REQUEST_TIMEOUT_SECS must be greater than 0");
        }
        Ok(self)
    }

    /// Returns the SerpAPI key if one is actually configured
    ///
    /// Blank values and the template placeholder are treated as missing.
    pub fn serpapi_key(&self) -> Option<&str> {
        self.serpapi_key
            .as_deref()
            .map(str::trim)
            .filter(|key| !key.is_empty() && *key != PLACEHOLDER_API_KEY)
    }

    /// Address the HTTP listener binds to
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
