use anyhow::{Context, Result};

#[derive(Debug, Clone)]
pub struct Config {
    pub together_api_key: String,
    pub serper_api_key: Option<String>,
    pub serply_api_key: Option<String>,
    pub together_url: String,
    pub model: String,
    pub log_dir: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        Ok(Self {
            together_api_key: std::env::var("TOGETHER_API_KEY")
                .context("TOGETHER_API_KEY must be set")?,
            serper_api_key: std::env::var("SERPER_API_KEY").ok(),
            serply_api_key: std::env::var("SERPLY_API_KEY").ok(),
            together_url: std::env::var("TOGETHER_URL")
                .unwrap_or_else(|_| "https://api.together.xyz/inference".into()),
            model: std::env::var("TOGETHER_MODEL")
                .unwrap_or_else(|_| "mistralai/Mixtral-8x7B-Instruct-v0.1".into()),
            log_dir: std::env::var("LOG_DIR").unwrap_or_else(|_| "logs".into()),
        })
    }

    pub fn serper_api_key(&self) -> Result<&str> {
        self.serper_api_key
            .as_deref()
            .context("SERPER_API_KEY must be set for this command")
    }

    pub fn serply_api_key(&self) -> Result<&str> {
        self.serply_api_key
            .as_deref()
            .context("SERPLY_API_KEY must be set for this command")
    }
}
