//! 임베딩 모듈 - 텍스트 벡터화
//!
//! - gemini: Gemini API 임베딩 (인덱스 빌드용, 레이트 리미터 포함)
//! - hash: 결정적 오프라인 특성 해싱 임베딩 (테스트/API 키 없는 환경)
//!
//! ## 사용법
//! ```rust,ignore
//! let embedder = create_embedder(EmbedderKind::Hash)?;
//! let vector = embedder.embed_query("fintech startups in Bangalore").await?;
//! ```

mod gemini;
mod hash;

use std::sync::Arc;

use anyhow::Result;
use async_trait::async_trait;

use crate::config::EmbedderKind;

pub use gemini::{get_api_key, has_api_key, GeminiEmbedding, DEFAULT_DIMENSION};
pub use hash::HashEmbedding;

// ============================================================================
// EmbeddingProvider Trait
// ============================================================================

/// 임베딩 프로바이더 트레이트
///
/// 문서(요약문)와 질의는 같은 벡터 공간에 매핑되어야 합니다.
#[async_trait]
pub trait EmbeddingProvider: Send + Sync {
    /// 문서 텍스트 임베딩
    async fn embed(&self, text: &str) -> Result<Vec<f32>>;

    /// 질의 텍스트 임베딩 (기본 구현: 문서와 동일)
    async fn embed_query(&self, text: &str) -> Result<Vec<f32>> {
        self.embed(text).await
    }

    /// 배치 임베딩 (기본 구현: 순차 호출)
    async fn embed_batch(&self, texts: &[String]) -> Result<Vec<Vec<f32>>> {
        let mut results = Vec::with_capacity(texts.len());
        for text in texts {
            results.push(self.embed(text).await?);
        }
        Ok(results)
    }

    /// 임베딩 차원 수
    fn dimension(&self) -> usize;

    /// 프로바이더 이름
    fn name(&self) -> &str;
}

// ============================================================================
// Factory Function
// ============================================================================

/// 설정된 종류의 임베딩 프로바이더 생성
pub fn create_embedder(kind: EmbedderKind) -> Result<Arc<dyn EmbeddingProvider>> {
    let embedder: Arc<dyn EmbeddingProvider> = match kind {
        EmbedderKind::Gemini => Arc::new(GeminiEmbedding::from_env()?),
        EmbedderKind::Hash => Arc::new(HashEmbedding::default()),
    };
    tracing::info!(
        "Using {} embedding (dimension: {})",
        embedder.name(),
        embedder.dimension()
    );
    Ok(embedder)
}

// ============================================================================
// Tests
// ============================================================================
