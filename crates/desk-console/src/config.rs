use desk_accounts::{AccountPolicy, TokenPolicy};
use serde::Deserialize;

#[derive(Deserialize, Clone, Debug)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub accounts: AccountPolicy,
    pub tokens: TokenPolicy,
    pub admin: AdminConfig,
}

#[derive(Deserialize, Clone, Debug)]
#[serde(default)]
pub struct ServerConfig {
    pub bind: String,
    pub port: u16,
}

#[derive(Deserialize, Clone, Debug)]
#[serde(default)]
pub struct AdminConfig {
    pub secure_cookie: bool,
    pub superusers: Vec<SuperuserConfig>,
}

/// Superuser created at startup unless the email is already taken.
#[derive(Deserialize, Clone, Debug)]
pub struct SuperuserConfig {
    pub email: String,
    pub password: String,
    #[serde(default)]
    pub name: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig::default(),
            accounts: AccountPolicy::default(),
            tokens: TokenPolicy::default(),
            admin: AdminConfig::default(),
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: "0.0.0.0".into(),
            port: 3000,
        }
    }
}

impl Default for AdminConfig {
    fn default() -> Self {
        Self {
            secure_cookie: true,
            superusers: Vec::new(),
        }
    }
}

pub fn parse(contents: &str) -> Result<Config, toml::de::Error> {
    toml::from_str(contents)
}

pub fn load(path: &str) -> Config {
    match std::fs::read_to_string(path) {
        Ok(contents) => match parse(&contents) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!("failed to parse config {path}: {e}, using defaults");
                Config::default()
            }
        },
        Err(e) => {
            tracing::warn!("failed to read config {path}: {e}, using defaults");
            Config::default()
        }
    }
}
