use std::env;
use std::error::Error;
use std::fmt;

const DEFAULT_INFERENCE_URL: &str = "https://api-inference.huggingface.co/models/gpt2";

pub struct AppConfig {
    pub port: u16,
    pub api_key: String,
    pub inference_url: String,
}

#[derive(Debug)]
pub enum ConfigError {
    MissingApiKey,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingApiKey => {
                write!(f, "HF_API_KEY is not set; export a Hugging Face API token before starting")
            }
        }
    }
}

impl Error for ConfigError {}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        let port = env::var("PORT")
            .ok()
            .and_then(|value| value.parse::<u16>().ok())
            .unwrap_or(5000);

        let api_key = env::var("HF_API_KEY")
            .ok()
            .filter(|value| !value.trim().is_empty())
            .ok_or(ConfigError::MissingApiKey)?;

        let inference_url =
            env::var("HF_INFERENCE_URL").unwrap_or_else(|_| DEFAULT_INFERENCE_URL.to_string());

        Ok(Self {
            port,
            api_key,
            inference_url,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::ConfigError;

    #[test]
    fn missing_api_key_names_the_variable() {
        assert!(ConfigError::MissingApiKey.to_string().contains("HF_API_KEY"));
    }
}
