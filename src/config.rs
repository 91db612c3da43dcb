use serde::{Deserialize, Serialize};

/// Main configuration structure loaded from landing_forge.toml and environment variables
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct Config {
    pub generation: GenerationConfig,
    pub http: HttpConfig,
    /// Runtime configuration loaded from environment variables
    #[serde(skip)]
    pub runtime: RuntimeConfig,
}

/// Model settings for generative mode
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct GenerationConfig {
    pub model: String,
    pub max_tokens: u32,
    pub base_url: String,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            model: "claude-sonnet-4-20250514".to_string(),
            max_tokens: 4096,
            base_url: "https://api.anthropic.com".to_string(),
        }
    }
}

/// HTTP transport settings
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct HttpConfig {
    pub bind: std::net::SocketAddr,
    /// Whole-request timeout applied by the transport layer; 0 disables it
    pub request_timeout_ms: u64,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            bind: std::net::SocketAddr::from(([127, 0, 0, 1], 3000)),
            request_timeout_ms: 60_000,
        }
    }
}

/// Runtime configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    /// Presence of this credential switches generation to the generative path
    pub anthropic_api_key: Option<String>,
    pub log_level: String,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            anthropic_api_key: None,
            log_level: "landing_forge=info,tower_http=info".to_string(),
        }
    }
}

impl RuntimeConfig {
    pub fn load_from_env() -> Self {
        Self {
            anthropic_api_key: std::env::var("ANTHROPIC_API_KEY")
                .ok()
                .filter(|k| !k.trim().is_empty()),
            log_level: std::env::var("RUST_LOG")
                .unwrap_or_else(|_| "landing_forge=info,tower_http=info".to_string()),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            generation: GenerationConfig::default(),
            http: HttpConfig::default(),
            runtime: RuntimeConfig::default(),
        }
    }
}

impl Config {
    /// Load configuration from TOML file and environment variables
    /// Uses LANDING_FORGE_CONFIG environment variable or defaults to "landing_forge.toml"
    pub fn load() -> anyhow::Result<Self> {
        if let Ok(env_path) = std::env::var("LF_ENV_FILE") {
            let _ = dotenvy::from_path(env_path);
        } else {
            let _ = dotenvy::dotenv();
        }

        let config_path = std::env::var("LANDING_FORGE_CONFIG")
            .unwrap_or_else(|_| "landing_forge.toml".to_string());

        let mut config: Config = if let Ok(content) = std::fs::read_to_string(&config_path) {
            toml::from_str(&content)?
        } else {
            tracing::debug!("Config file {} not found, using defaults", config_path);
            Self::default()
        };

        config.apply_env_overrides();
        config.runtime = RuntimeConfig::load_from_env();
        config.validate();

        Ok(config)
    }

    fn apply_env_overrides(&mut self) {
        if let Ok(model) = std::env::var("ANTHROPIC_MODEL")
            && !model.trim().is_empty()
        {
            self.generation.model = model;
        }
        if let Ok(base) = std::env::var("ANTHROPIC_BASE_URL")
            && !base.trim().is_empty()
        {
            self.generation.base_url = base;
        }
        if let Ok(v) = std::env::var("LF_MAX_TOKENS") {
            match v.parse::<u32>() {
                Ok(n) => self.generation.max_tokens = n,
                Err(_) => tracing::warn!("Ignoring invalid LF_MAX_TOKENS '{}'", v),
            }
        }
        if let Ok(v) = std::env::var("LF_HTTP_BIND") {
            match v.parse() {
                Ok(addr) => self.http.bind = addr,
                Err(_) => tracing::warn!("Ignoring invalid LF_HTTP_BIND '{}'", v),
            }
        }
        if let Ok(v) = std::env::var("LF_HTTP_REQUEST_TIMEOUT_MS") {
            match v.parse::<u64>() {
                Ok(ms) => self.http.request_timeout_ms = ms,
                Err(_) => tracing::warn!("Ignoring invalid LF_HTTP_REQUEST_TIMEOUT_MS '{}'", v),
            }
        }
    }

    /// Clamp values into usable ranges
    pub fn validate(&mut self) {
        if self.generation.max_tokens == 0 {
            tracing::warn!("max_tokens 0 is not usable, using 1");
            self.generation.max_tokens = 1;
        } else if self.generation.max_tokens > 8192 {
            tracing::warn!(
                "max_tokens {} exceeds max 8192, clamping to 8192",
                self.generation.max_tokens
            );
            self.generation.max_tokens = 8192;
        }
        if !self.generation.base_url.starts_with("http://")
            && !self.generation.base_url.starts_with("https://")
        {
            tracing::warn!(
                "Generation base URL '{}' doesn't start with http:// or https://",
                self.generation.base_url
            );
        }
    }

    pub fn generative_enabled(&self) -> bool {
        self.runtime.anthropic_api_key.is_some()
    }
}
