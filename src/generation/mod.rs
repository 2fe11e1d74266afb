//! Generation 모듈 - 언어 생성 서비스 클라이언트
//!
//! Ollama `/api/generate` (stream: false)를 호출합니다.
//! 생성 호출은 항상 타임아웃 아래에서 실행되며 재시도하지 않습니다.

use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use url::Url;

// ============================================================================
// Types
// ============================================================================

#[derive(Debug, Error)]
pub enum GenerationError {
    #[error("generation timed out after {0:?}")]
    Timeout(Duration),
    #[error("generation request failed: {0}")]
    Transport(String),
    #[error("generation service returned {status}: {body}")]
    Status { status: u16, body: String },
    #[error("generation returned empty output")]
    Empty,
    #[error("malformed generation response: {0}")]
    Malformed(String),
}

/// 생성 옵션
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GenerateOptions {
    pub temperature: f32,
    pub num_predict: u32,
}

impl GenerateOptions {
    /// 목록형 답변 생성
    pub const ANSWER: Self = Self {
        temperature: 0.3,
        num_predict: 600,
    };
    /// 회사 설명 (1-2문장)
    pub const DESCRIPTION: Self = Self {
        temperature: 0.3,
        num_predict: 100,
    };
    /// 이름 음역 (짧고 결정적)
    pub const TRANSLITERATION: Self = Self {
        temperature: 0.0,
        num_predict: 30,
    };
}

// ============================================================================
// Generator Trait
// ============================================================================

/// 언어 생성 서비스 트레이트
#[async_trait]
pub trait Generator: Send + Sync {
    async fn generate(
        &self,
        prompt: &str,
        options: GenerateOptions,
    ) -> Result<String, GenerationError>;

    fn name(&self) -> &str;
}

/// 타임아웃 아래에서 생성 (공백뿐인 출력은 Empty)
pub async fn generate_with_timeout(
    generator: &dyn Generator,
    prompt: &str,
    options: GenerateOptions,
    timeout: Duration,
) -> Result<String, GenerationError> {
    let output = tokio::time::timeout(timeout, generator.generate(prompt, options))
        .await
        .map_err(|_| GenerationError::Timeout(timeout))??;

    let trimmed = output.trim();
    if trimmed.is_empty() {
        return Err(GenerationError::Empty);
    }
    Ok(trimmed.to_string())
}

// ============================================================================
// Ollama
// ============================================================================

#[derive(Debug, Serialize)]
struct OllamaRequest<'a> {
    model: &'a str,
    prompt: &'a str,
    stream: bool,
    options: GenerateOptions,
}

#[derive(Debug, Deserialize)]
struct OllamaResponse {
    response: String,
}

/// Ollama 생성 클라이언트
#[derive(Debug, Clone)]
pub struct OllamaGenerator {
    client: reqwest::Client,
    endpoint: Url,
    model: String,
}

impl OllamaGenerator {
    /// # Arguments
    /// * `base_url` - Ollama 서버 주소 (예: http://localhost:11434)
    /// * `model` - 모델 이름
    pub fn new(base_url: &Url, model: impl Into<String>) -> anyhow::Result<Self> {
        use anyhow::Context;

        let endpoint = base_url
            .join("api/generate")
            .context("Failed to build Ollama endpoint URL")?;
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(60))
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            client,
            endpoint,
            model: model.into(),
        })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

#[async_trait]
impl Generator for OllamaGenerator {
    async fn generate(
        &self,
        prompt: &str,
        options: GenerateOptions,
    ) -> Result<String, GenerationError> {
        let request = OllamaRequest {
            model: &self.model,
            prompt,
            stream: false,
            options,
        };

        let response = self
            .client
            .post(self.endpoint.clone())
            .json(&request)
            .send()
            .await
            .map_err(|e| GenerationError::Transport(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| GenerationError::Transport(e.to_string()))?;

        if !status.is_success() {
            return Err(GenerationError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let parsed: OllamaResponse =
            serde_json::from_str(&body).map_err(|e| GenerationError::Malformed(e.to_string()))?;
        Ok(parsed.response)
    }

    fn name(&self) -> &str {
        &self.model
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use std::sync::Mutex;

    /// 미리 정해진 응답을 돌려주는 테스트용 생성기
    pub(crate) struct ScriptedGenerator {
        reply: Result<String, fn() -> GenerationError>,
        delay: Option<Duration>,
        pub prompts: Mutex<Vec<String>>,
    }

    impl ScriptedGenerator {
        pub(crate) fn replying(text: &str) -> Self {
            Self {
                reply: Ok(text.to_string()),
                delay: None,
                prompts: Mutex::new(Vec::new()),
            }
        }

        pub(crate) fn failing() -> Self {
            Self {
                reply: Err(|| GenerationError::Transport("connection refused".into())),
                delay: None,
                prompts: Mutex::new(Vec::new()),
            }
        }

        pub(crate) fn slow(delay: Duration) -> Self {
            Self {
                reply: Ok("late".into()),
                delay: Some(delay),
                prompts: Mutex::new(Vec::new()),
            }
        }

        pub(crate) fn calls(&self) -> usize {
            self.prompts.lock().unwrap().len()
        }
    }

    #[async_trait]
    impl Generator for ScriptedGenerator {
        async fn generate(
            &self,
            prompt: &str,
            _options: GenerateOptions,
        ) -> Result<String, GenerationError> {
            self.prompts.lock().unwrap().push(prompt.to_string());
            if let Some(delay) = self.delay {
                tokio::time::sleep(delay).await;
            }
            match &self.reply {
                Ok(text) => Ok(text.clone()),
                Err(make) => Err(make()),
            }
        }

        fn name(&self) -> &str {
            "scripted"
        }
    }

    #[tokio::test]
    async fn test_generate_with_timeout_trims() {
        let generator = ScriptedGenerator::replying("  hello \n");
        let out = generate_with_timeout(
            &generator,
            "p",
            GenerateOptions::ANSWER,
            Duration::from_secs(1),
        )
        .await
        .unwrap();
        assert_eq!(out, "hello");
    }

    #[tokio::test]
    async fn test_generate_with_timeout_empty() {
        let generator = ScriptedGenerator::replying("   ");
        let err = generate_with_timeout(
            &generator,
            "p",
            GenerateOptions::ANSWER,
            Duration::from_secs(1),
        )
        .await
        .unwrap_err();
        assert!(matches!(err, GenerationError::Empty));
    }

    #[tokio::test]
    async fn test_generate_with_timeout_times_out_once() {
        let generator = ScriptedGenerator::slow(Duration::from_secs(5));
        let err = generate_with_timeout(
            &generator,
            "p",
            GenerateOptions::ANSWER,
            Duration::from_millis(20),
        )
        .await
        .unwrap_err();
        assert!(matches!(err, GenerationError::Timeout(_)));
        assert_eq!(generator.calls(), 1);
    }

    #[test]
    fn test_ollama_endpoint() {
        let base = Url::parse("http://localhost:11434").unwrap();
        let generator = OllamaGenerator::new(&base, "llama3.1:8b").unwrap();
        assert_eq!(
            generator.endpoint().as_str(),
            "http://localhost:11434/api/generate"
        );
        assert_eq!(generator.name(), "llama3.1:8b");
    }

    #[test]
    fn test_request_shape() {
        let request = OllamaRequest {
            model: "m",
            prompt: "p",
            stream: false,
            options: GenerateOptions::TRANSLITERATION,
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["stream"], false);
        assert_eq!(json["options"]["num_predict"], 30);
    }
}
