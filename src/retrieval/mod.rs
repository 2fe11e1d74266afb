//! Retrieval 모듈 - 질의 임베딩 + 필터 검색
//!
//! 유사도 임계값과 금액 범위를 통과한 후보만 반환합니다.

use std::cmp::Ordering;
use std::sync::Arc;
use std::time::Duration;

use serde::Serialize;
use thiserror::Error;

use crate::config::PipelineConfig;
use crate::embedding::EmbeddingProvider;
use crate::index::{DocumentMetadata, IndexHit, VectorIndex};
use crate::query::FilterSpec;

// ============================================================================
// Types
// ============================================================================

#[derive(Debug, Error)]
pub enum RetrievalError {
    #[error("query embedding timed out after {0:?}")]
    EmbeddingTimeout(Duration),
    #[error("query embedding failed: {0:#}")]
    Embedding(anyhow::Error),
    #[error("index search failed: {0:#}")]
    Index(anyhow::Error),
}

/// 검색 후보
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Candidate {
    pub metadata: DocumentMetadata,
    pub summary: String,
    /// 1 - 코사인 거리
    pub score: f32,
}

impl Candidate {
    pub fn from_hit(hit: IndexHit) -> Self {
        Self {
            score: 1.0 - hit.distance,
            metadata: hit.metadata,
            summary: hit.summary,
        }
    }

    /// 정규화된 금액 (루피)
    pub fn amount(&self) -> f64 {
        self.metadata.amount
    }

    pub fn row_id(&self) -> u64 {
        self.metadata.row_id
    }
}

/// 점수 내림차순, 같으면 row_id 오름차순
pub(crate) fn by_score(a: &Candidate, b: &Candidate) -> Ordering {
    b.score
        .partial_cmp(&a.score)
        .unwrap_or(Ordering::Equal)
        .then_with(|| a.row_id().cmp(&b.row_id()))
}

// ============================================================================
// Retriever
// ============================================================================

#[derive(Clone)]
pub struct Retriever {
    embedder: Arc<dyn EmbeddingProvider>,
    index: Arc<dyn VectorIndex>,
    threshold: f32,
    pool: usize,
    embed_timeout: Duration,
}

impl Retriever {
    pub fn new(
        embedder: Arc<dyn EmbeddingProvider>,
        index: Arc<dyn VectorIndex>,
        config: &PipelineConfig,
    ) -> Self {
        Self {
            embedder,
            index,
            threshold: config.similarity_threshold,
            pool: config.candidate_pool,
            embed_timeout: config.embed_timeout,
        }
    }

    /// 질의 검색
    ///
    /// 1. 질의 임베딩 (타임아웃)
    /// 2. 메타데이터 필터 적용 검색 (후보 풀 크기)
    /// 3. score > threshold 만 유지
    /// 4. 금액 범위 후처리 (범위가 있으면 금액 0 제외)
    ///
    /// # Arguments
    /// * `query` - 원본 질의 텍스트
    /// * `filter` - 분석된 필터
    pub async fn retrieve(
        &self,
        query: &str,
        filter: &FilterSpec,
    ) -> Result<Vec<Candidate>, RetrievalError> {
        let embedding = tokio::time::timeout(self.embed_timeout, self.embedder.embed_query(query))
            .await
            .map_err(|_| RetrievalError::EmbeddingTimeout(self.embed_timeout))?
            .map_err(RetrievalError::Embedding)?;

        let hits = self
            .index
            .query(&embedding, &filter.metadata_filter(), self.pool)
            .await
            .map_err(RetrievalError::Index)?;
        let hit_count = hits.len();

        let mut candidates: Vec<Candidate> = hits
            .into_iter()
            .map(Candidate::from_hit)
            .filter(|c| c.score > self.threshold)
            .filter(|c| filter.amount_in_bounds(c.amount()))
            .collect();
        candidates.sort_by(by_score);

        tracing::debug!(
            hits = hit_count,
            candidates = candidates.len(),
            threshold = self.threshold,
            "Retrieved candidates"
        );
        Ok(candidates)
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::embedding::HashEmbedding;
    use crate::index::tests::sample_store;
    use crate::index::{build_index, InMemoryIndex};
    use anyhow::Result;
    use async_trait::async_trait;

    async fn retriever() -> Retriever {
        let embedder: Arc<dyn EmbeddingProvider> = Arc::new(HashEmbedding::default());
        let index: Arc<dyn VectorIndex> = Arc::new(InMemoryIndex::new());
        build_index(&sample_store(), embedder.as_ref(), index.as_ref(), false)
            .await
            .unwrap();
        Retriever::new(embedder, index, &PipelineConfig::default())
    }

    #[tokio::test]
    async fn test_scores_above_threshold() {
        let r = retriever().await;
        let candidates = r
            .retrieve("fintech startups in Bangalore", &FilterSpec::default())
            .await
            .unwrap();
        assert!(!candidates.is_empty());
        assert!(candidates.iter().all(|c| c.score > 0.25));
        assert!(candidates.windows(2).all(|w| w[0].score >= w[1].score));
    }

    #[tokio::test]
    async fn test_metadata_filter_applied() {
        let r = retriever().await;
        let filter = FilterSpec {
            sector: Some("Fintech".into()),
            city: Some("Bangalore".into()),
            year: Some(2022),
            ..Default::default()
        };
        let candidates = r
            .retrieve("fintech companies in Bangalore in 2022", &filter)
            .await
            .unwrap();
        assert!(!candidates.is_empty());
        for c in &candidates {
            assert_eq!(c.metadata.sector, "Fintech");
            assert_eq!(c.metadata.city.as_deref(), Some("Bangalore"));
            assert_eq!(c.metadata.year, Some(2022));
        }
    }

    #[tokio::test]
    async fn test_amount_bounds_exclude_zero() {
        let r = retriever().await;
        let filter = FilterSpec {
            sector: Some("Fintech".into()),
            min_amount: Some(1.0),
            ..Default::default()
        };
        let candidates = r.retrieve("fintech funding", &filter).await.unwrap();
        assert!(candidates.iter().all(|c| c.amount() > 0.0));
        assert!(candidates.iter().all(|c| c.metadata.company != "Zerodha"));
    }

    #[tokio::test]
    async fn test_idempotent() {
        let r = retriever().await;
        let filter = FilterSpec::default();
        let first = r.retrieve("edtech funding 2021", &filter).await.unwrap();
        let second = r.retrieve("edtech funding 2021", &filter).await.unwrap();
        assert_eq!(first, second);
    }

    struct SlowEmbedder;

    #[async_trait]
    impl EmbeddingProvider for SlowEmbedder {
        async fn embed(&self, _text: &str) -> Result<Vec<f32>> {
            tokio::time::sleep(Duration::from_secs(5)).await;
            Ok(vec![1.0])
        }
        fn dimension(&self) -> usize {
            1
        }
        fn name(&self) -> &str {
            "slow"
        }
    }

    #[tokio::test]
    async fn test_embedding_timeout() {
        let config = PipelineConfig::builder()
            .embed_timeout(Duration::from_millis(20))
            .build()
            .unwrap();
        let r = Retriever::new(Arc::new(SlowEmbedder), Arc::new(InMemoryIndex::new()), &config);
        let err = r.retrieve("anything", &FilterSpec::default()).await.unwrap_err();
        assert!(matches!(err, RetrievalError::EmbeddingTimeout(_)));
    }

    #[test]
    fn test_candidate_score_from_distance() {
        let meta =
            DocumentMetadata::from_record(&crate::records::tests::record(0, "A", 1.0, "SaaS", "Pune", 2020))
                .unwrap();
        let c = Candidate::from_hit(IndexHit {
            metadata: meta,
            summary: String::new(),
            distance: 0.3,
        });
        assert!((c.score - 0.7).abs() < 1e-6);
    }
}
