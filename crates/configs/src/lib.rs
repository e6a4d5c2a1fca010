use anyhow::Result;
use serde::Deserialize;
use anyhow::anyhow;

#[derive(Debug, Clone, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub database: DatabaseConfig,
    #[serde(default)]
    pub cors: CorsConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    #[serde(default)]
    pub worker_threads: Option<usize>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self { host: "127.0.0.1".into(), port: 8081, worker_threads: Some(4) }
    }
}

#[derive(Debug, Clone, Deserialize, Default)]
pub struct DatabaseConfig {
    /// MongoDB connection string; filled from `MONGO_URL` when absent in TOML.
    #[serde(default)]
    pub mongo_url: String,
    /// Database name; filled from `DB_NAME` when absent in TOML.
    #[serde(default)]
    pub db_name: String,
    /// Collection holding restaurant documents.
    #[serde(default = "default_collection")]
    pub collection: String,
}

fn default_collection() -> String { "restaurants".to_string() }

#[derive(Debug, Clone, Deserialize)]
pub struct CorsConfig {
    /// Comma-separated allowed origins; `*` means unrestricted.
    #[serde(default = "default_cors_origins")]
    pub origins: String,
}

fn default_cors_origins() -> String { "*".to_string() }

impl Default for CorsConfig {
    fn default() -> Self {
        Self { origins: default_cors_origins() }
    }
}

pub fn load_default() -> Result<AppConfig> {
    let path = std::env::var("CONFIG_PATH").unwrap_or_else(|_| "config.toml".to_string());
    load_from_file(&path)
}

pub fn load_from_file(path: &str) -> Result<AppConfig> {
    let content = std::fs::read_to_string(path)?;
    let cfg: AppConfig = toml::from_str(&content)?;
    Ok(cfg)
}

impl AppConfig {
    /// Load `config.toml` when present, otherwise start from defaults, then
    /// fill from env vars and validate. Missing store coordinates are a hard
    /// error so the process fails fast at startup.
    pub fn load_and_validate() -> Result<Self> {
        let mut cfg = load_default().unwrap_or_default();
        cfg.normalize_and_validate()?;
        Ok(cfg)
    }

    pub fn normalize_and_validate(&mut self) -> Result<()> {
        self.server.normalize()?;
        self.database.normalize_from_env();
        self.database.validate()?;
        self.cors.normalize_from_env();
        Ok(())
    }
}

impl ServerConfig {
    fn normalize(&mut self) -> Result<()> {
        if self.host.trim().is_empty() {
            self.host = "127.0.0.1".to_string();
        }
        if self.port == 0 {
            return Err(anyhow!("server.port must be in 1..=65535"));
        }
        if let Some(w) = self.worker_threads {
            if w == 0 { self.worker_threads = Some(4); }
        } else {
            self.worker_threads = Some(4);
        }
        Ok(())
    }
}

impl DatabaseConfig {
    pub fn normalize_from_env(&mut self) {
        if self.mongo_url.trim().is_empty() {
            if let Ok(url) = std::env::var("MONGO_URL") {
                self.mongo_url = url;
            }
        }
        if self.db_name.trim().is_empty() {
            if let Ok(name) = std::env::var("DB_NAME") {
                self.db_name = name;
            }
        }
        if self.collection.trim().is_empty() {
            self.collection = default_collection();
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.mongo_url.trim().is_empty() {
            return Err(anyhow!("database.mongo_url is empty; set it in config.toml or the MONGO_URL env var"));
        }
        let lower = self.mongo_url.to_lowercase();
        if !(lower.starts_with("mongodb://") || lower.starts_with("mongodb+srv://")) {
            return Err(anyhow!("database.mongo_url must start with mongodb:// or mongodb+srv://"));
        }
        if self.db_name.trim().is_empty() {
            return Err(anyhow!("database.db_name is empty; set it in config.toml or the DB_NAME env var"));
        }
        Ok(())
    }
}

impl CorsConfig {
    pub fn normalize_from_env(&mut self) {
        if let Ok(origins) = std::env::var("CORS_ORIGINS") {
            if !origins.trim().is_empty() {
                self.origins = origins;
            }
        }
        if self.origins.trim().is_empty() {
            self.origins = default_cors_origins();
        }
    }

    /// Parsed origin list; `None` means unrestricted.
    pub fn origin_list(&self) -> Option<Vec<String>> {
        if self.origins.trim() == "*" {
            return None;
        }
        Some(
            self.origins
                .split(',')
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .collect(),
        )
    }
}
