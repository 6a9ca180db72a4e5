use std::error::Error;
use std::fmt;

use reqwest::StatusCode;
use serde::{Deserialize, Serialize};

/// Fixed decoding parameters sent with every generation request.
#[derive(Debug, Serialize)]
pub struct GenerationParameters {
    pub max_length: u32,
    pub temperature: f64,
    pub top_p: f64,
    pub top_k: u32,
}

impl Default for GenerationParameters {
    fn default() -> Self {
        Self {
            max_length: 150,
            temperature: 0.7,
            top_p: 0.9,
            top_k: 50,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct GenerationPayload<'a> {
    pub inputs: &'a str,
    pub parameters: GenerationParameters,
}

/// One element of the inference API's response array.
#[derive(Debug, Deserialize)]
pub struct Generation {
    pub generated_text: String,
}

#[derive(Debug)]
pub enum HfError {
    /// The inference API answered with a non-200 status.
    Api { status: u16, body: String },
    /// The request never produced an HTTP response.
    Transport(reqwest::Error),
    /// The response could not be interpreted as a generation.
    Unexpected(String),
}

impl fmt::Display for HfError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Api { status, body } => write!(f, "API error: {status} - {body}"),
            Self::Transport(err) => write!(f, "Request error: {err}"),
            Self::Unexpected(message) => write!(f, "Server error: {message}"),
        }
    }
}

impl Error for HfError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Transport(err) => Some(err),
            _ => None,
        }
    }
}

impl HfError {
    /// Status to relay to the caller: the upstream status for API errors,
    /// 500 for everything else.
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Api { status, .. } => {
                StatusCode::from_u16(*status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
            }
            Self::Transport(_) | Self::Unexpected(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

#[derive(Clone)]
pub struct HfClient {
    client: reqwest::Client,
    inference_url: String,
    api_key: String,
}

impl HfClient {
    pub fn new(inference_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            inference_url: inference_url.into(),
            api_key: api_key.into(),
        }
    }

    /// Forward `query` to the inference API and return the first generation,
    /// trimmed of surrounding whitespace.
    pub async fn generate(&self, query: &str) -> Result<String, HfError> {
        let payload = GenerationPayload {
            inputs: query,
            parameters: GenerationParameters::default(),
        };

        let response = self
            .client
            .post(&self.inference_url)
            .bearer_auth(&self.api_key)
            .json(&payload)
            .send()
            .await
            .map_err(HfError::Transport)?;

        let status = response.status();
        if status != StatusCode::OK {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<unable to read response body>".to_string());
            return Err(HfError::Api {
                status: status.as_u16(),
                body,
            });
        }

        let generations: Vec<Generation> = response
            .json()
            .await
            .map_err(|err| HfError::Unexpected(err.to_string()))?;

        let first = generations
            .into_iter()
            .next()
            .ok_or_else(|| HfError::Unexpected("inference API returned no generations".to_string()))?;

        Ok(first.generated_text.trim().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn payload_carries_fixed_parameters() {
        let payload = GenerationPayload {
            inputs: "hello",
            parameters: GenerationParameters::default(),
        };

        assert_eq!(
            serde_json::to_value(&payload).unwrap(),
            json!({
                "inputs": "hello",
                "parameters": {
                    "max_length": 150,
                    "temperature": 0.7,
                    "top_p": 0.9,
                    "top_k": 50,
                }
            })
        );
    }

    #[test]
    fn api_error_message_carries_status_and_body() {
        let err = HfError::Api {
            status: 503,
            body: "overloaded".to_string(),
        };
        assert_eq!(err.to_string(), "API error: 503 - overloaded");
        assert_eq!(err.status_code(), StatusCode::SERVICE_UNAVAILABLE);
    }

    #[test]
    fn unexpected_error_maps_to_internal_server_error() {
        let err = HfError::Unexpected("inference API returned no generations".to_string());
        assert_eq!(
            err.to_string(),
            "Server error: inference API returned no generations"
        );
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn empty_generation_list_parses() {
        let generations: Vec<Generation> = serde_json::from_str("[]").unwrap();
        assert!(generations.is_empty());
    }
}
