//! Index 모듈 - 펀딩 레코드 임베딩 인덱스
//!
//! - memory: 정확한 코사인 검색 + JSON 스냅샷
//! - lance: LanceDB (코사인 거리, SQL 조건 필터)
//!
//! 인덱싱 가능한 레코드 하나당 문서 하나를 저장하며, 증분 갱신 없이 전체를 교체합니다.

mod lance;
mod memory;

use std::cmp::Ordering;

use anyhow::{bail, Context, Result};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::embedding::EmbeddingProvider;
use crate::records::{format_amount, FundingRecord, RecordStore};

pub use lance::LanceIndex;
pub use memory::InMemoryIndex;

// ============================================================================
// Types
// ============================================================================

/// 인덱스 문서에 투영된 레코드 필드
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocumentMetadata {
    pub row_id: u64,
    pub company: String,
    pub sector: String,
    pub city: Option<String>,
    pub state: Option<String>,
    /// 쉼표로 연결된 투자자 목록
    pub investors: Option<String>,
    /// ISO 날짜 (YYYY-MM-DD)
    pub date: Option<String>,
    pub year: Option<i32>,
    /// 정규화된 금액 (루피)
    pub amount: f64,
    pub amount_raw: String,
}

impl DocumentMetadata {
    /// 레코드에서 메타데이터 투영 (인덱싱 불가능한 레코드는 None)
    pub fn from_record(record: &FundingRecord) -> Option<Self> {
        Some(Self {
            row_id: record.row_id,
            company: record.company.clone()?,
            sector: record.sector.clone()?,
            city: record.city.clone(),
            state: record.state.clone(),
            investors: record.investors_display(),
            date: record.date.map(|d| d.format("%Y-%m-%d").to_string()),
            year: record.year,
            amount: record.amount,
            amount_raw: record.amount_raw.clone(),
        })
    }
}

/// 인덱스 문서
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndexedDocument {
    pub summary: String,
    pub embedding: Vec<f32>,
    pub metadata: DocumentMetadata,
}

/// 인덱스 수준 등호 필터 (대소문자 무시)
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MetadataFilter {
    pub sector: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub year: Option<i32>,
    pub company: Option<String>,
}

impl MetadataFilter {
    pub fn is_empty(&self) -> bool {
        self.sector.is_none()
            && self.city.is_none()
            && self.state.is_none()
            && self.year.is_none()
            && self.company.is_none()
    }

    pub fn matches(&self, metadata: &DocumentMetadata) -> bool {
        fn eq(wanted: &Option<String>, actual: Option<&str>) -> bool {
            match (wanted, actual) {
                (None, _) => true,
                (Some(w), Some(a)) => w.to_lowercase() == a.to_lowercase(),
                (Some(_), None) => false,
            }
        }

        eq(&self.sector, Some(&metadata.sector))
            && eq(&self.company, Some(&metadata.company))
            && eq(&self.city, metadata.city.as_deref())
            && eq(&self.state, metadata.state.as_deref())
            && self.year.map_or(true, |y| metadata.year == Some(y))
    }

    /// LanceDB `only_if` 조건식 (필터가 없으면 None)
    ///
    /// 문자열 값은 작은따옴표를 이스케이프합니다.
    pub fn to_sql_predicate(&self) -> Option<String> {
        let mut clauses = Vec::new();
        let text_fields = [
            ("sector", &self.sector),
            ("city", &self.city),
            ("state", &self.state),
            ("company", &self.company),
        ];
        for (column, value) in text_fields {
            if let Some(value) = value {
                clauses.push(format!(
                    "lower({}) = '{}'",
                    column,
                    value.to_lowercase().replace('\'', "''")
                ));
            }
        }
        if let Some(year) = self.year {
            clauses.push(format!("year = {}", year));
        }

        if clauses.is_empty() {
            None
        } else {
            Some(clauses.join(" AND "))
        }
    }
}

/// 검색 결과 (코사인 거리)
#[derive(Debug, Clone, PartialEq)]
pub struct IndexHit {
    pub metadata: DocumentMetadata,
    pub summary: String,
    pub distance: f32,
}

/// 거리 오름차순, 같으면 row_id 오름차순
pub(crate) fn order_hits(hits: &mut [IndexHit]) {
    hits.sort_by(|a, b| {
        a.distance
            .partial_cmp(&b.distance)
            .unwrap_or(Ordering::Equal)
            .then_with(|| a.metadata.row_id.cmp(&b.metadata.row_id))
    });
}

// ============================================================================
// VectorIndex Trait
// ============================================================================

/// 벡터 인덱스 트레이트
///
/// 빌드 이후에는 읽기 전용이며 여러 요청이 동시에 조회합니다.
#[async_trait]
pub trait VectorIndex: Send + Sync {
    /// 기존 문서를 모두 교체
    async fn replace_all(&self, documents: &[IndexedDocument]) -> Result<usize>;

    /// 필터를 적용한 최근접 검색 (거리 오름차순)
    async fn query(
        &self,
        embedding: &[f32],
        filter: &MetadataFilter,
        top_k: usize,
    ) -> Result<Vec<IndexHit>>;

    async fn count(&self) -> Result<usize>;

    /// 저장된 임베딩 차원 (비어 있으면 None)
    async fn dimension(&self) -> Result<Option<usize>>;

    fn name(&self) -> &str;
}

// ============================================================================
// Build
// ============================================================================

/// 인덱스 빌드 결과
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuildOutcome {
    /// 기존 인덱스 재사용
    Reused { documents: usize },
    /// 새로 빌드
    Built { documents: usize },
}

impl BuildOutcome {
    pub fn documents(&self) -> usize {
        match self {
            BuildOutcome::Reused { documents } | BuildOutcome::Built { documents } => *documents,
        }
    }
}

/// 레코드 요약문
///
/// `"{company} received {amount} funding in {sector} sector on {date} ({year}), {city}, {state}"`
/// 형식이며 없는 부분은 생략합니다.
pub fn summarize_record(record: &FundingRecord) -> String {
    let mut text = record.company_name().to_string();

    let amount = if record.amount_raw.trim().is_empty() || record.amount <= 0.0 {
        None
    } else {
        Some(format_amount(record.amount))
    };
    match amount {
        Some(amount) => text.push_str(&format!(" received {} funding", amount)),
        None => text.push_str(" received funding"),
    }

    if let Some(sector) = &record.sector {
        text.push_str(&format!(" in {} sector", sector));
    }
    if let Some(date) = record.date {
        text.push_str(&format!(" on {}", date.format("%Y-%m-%d")));
    }
    if let Some(year) = record.year {
        text.push_str(&format!(" ({})", year));
    }
    for place in [&record.city, &record.state].into_iter().flatten() {
        text.push_str(", ");
        text.push_str(place);
    }
    text
}

/// 인덱스 빌드 (재사용 정책 포함)
///
/// `force`가 아니고 기존 인덱스가 비어 있지 않으며 차원이 같으면 재사용합니다.
/// 그렇지 않으면 모든 요약문을 한 번의 배치로 임베딩하여 전체를 교체합니다.
///
/// # Arguments
/// * `store` - 레코드 저장소
/// * `embedder` - 임베딩 프로바이더
/// * `index` - 대상 인덱스
/// * `force` - 재사용하지 않고 강제 재빌드
pub async fn build_index(
    store: &RecordStore,
    embedder: &dyn EmbeddingProvider,
    index: &dyn VectorIndex,
    force: bool,
) -> Result<BuildOutcome> {
    if !force {
        let existing = index.count().await.context("Failed to count index documents")?;
        let dimension = index.dimension().await?;
        if existing > 0 && dimension == Some(embedder.dimension()) {
            tracing::info!("Reusing {} index with {} documents", index.name(), existing);
            return Ok(BuildOutcome::Reused {
                documents: existing,
            });
        }
        if existing > 0 {
            tracing::warn!(
                "Index dimension {:?} differs from embedder dimension {}, rebuilding",
                dimension,
                embedder.dimension()
            );
        }
    }

    let (summaries, metadata): (Vec<String>, Vec<DocumentMetadata>) = store
        .indexable()
        .filter_map(|record| {
            DocumentMetadata::from_record(record).map(|meta| (summarize_record(record), meta))
        })
        .unzip();

    if summaries.is_empty() {
        bail!("No indexable records (company and sector are required)");
    }

    tracing::info!(
        "Embedding {} record summaries with {}",
        summaries.len(),
        embedder.name()
    );
    let embeddings = embedder
        .embed_batch(&summaries)
        .await
        .context("Failed to embed record summaries")?;

    if embeddings.len() != summaries.len() {
        bail!(
            "Embedding count mismatch: {} documents, {} embeddings",
            summaries.len(),
            embeddings.len()
        );
    }

    let documents: Vec<IndexedDocument> = summaries
        .into_iter()
        .zip(embeddings)
        .zip(metadata)
        .map(|((summary, embedding), metadata)| IndexedDocument {
            summary,
            embedding,
            metadata,
        })
        .collect();

    let written = index
        .replace_all(&documents)
        .await
        .context("Failed to write index")?;
    tracing::info!("Built {} index with {} documents", index.name(), written);

    Ok(BuildOutcome::Built { documents: written })
}

// ============================================================================
// Utility Functions
// ============================================================================

/// 코사인 거리 (1 - 코사인 유사도)
///
/// 길이가 다르거나 영벡터가 포함되면 1.0 (유사도 0)을 반환합니다.
pub fn cosine_distance(a: &[f32], b: &[f32]) -> f32 {
    if a.len() != b.len() || a.is_empty() {
        return 1.0;
    }

    let dot: f32 = a.iter().zip(b).map(|(x, y)| x * y).sum();
    let norm_a = a.iter().map(|x| x * x).sum::<f32>().sqrt();
    let norm_b = b.iter().map(|x| x * x).sum::<f32>().sqrt();

    if norm_a == 0.0 || norm_b == 0.0 {
        return 1.0;
    }
    1.0 - dot / (norm_a * norm_b)
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::embedding::HashEmbedding;
    use crate::records::tests::record;

    pub(crate) fn sample_store() -> RecordStore {
        let mut records = vec![
            record(0, "Razorpay", 750_000_000.0, "Fintech", "Bangalore", 2022),
            record(1, "Cred", 2_150_000_000.0, "Fintech", "Bangalore", 2021),
            record(2, "Byju's", 1_500_000_000.0, "Edtech", "Bangalore", 2020),
            record(3, "Swiggy", 5_000_000_000.0, "Foodtech", "Bangalore", 2021),
            record(4, "Zerodha", 0.0, "Fintech", "Bangalore", 2022),
            record(5, "Unacademy", 800_000_000.0, "Edtech", "Bangalore", 2021),
            record(6, "PhonePe", 3_000_000_000.0, "Fintech", "Pune", 2022),
        ];
        // 섹터가 없으면 인덱싱 불가
        let mut orphan = record(7, "Orphan", 10_000_000.0, "Gaming", "Delhi", 2021);
        orphan.sector = None;
        records.push(orphan);
        RecordStore::new(records)
    }

    #[test]
    fn test_summarize_record() {
        let mut r = record(0, "Razorpay", 750_000_000.0, "Fintech", "Bangalore", 2022);
        r.state = Some("Karnataka".into());
        let summary = summarize_record(&r);
        assert!(summary.starts_with("Razorpay received ₹75 Cr funding in Fintech sector"));
        assert!(summary.contains("(2022)"));
        assert!(summary.ends_with(", Bangalore, Karnataka"));
    }

    #[test]
    fn test_summarize_skips_missing_parts() {
        let mut r = record(0, "Acme", 0.0, "SaaS", "Pune", 2020);
        r.city = None;
        r.date = None;
        r.year = None;
        assert_eq!(summarize_record(&r), "Acme received funding in SaaS sector");
    }

    #[test]
    fn test_metadata_filter_matches_case_insensitive() {
        let meta = DocumentMetadata::from_record(&record(
            1, "Cred", 1.0, "Fintech", "Bangalore", 2021,
        ))
        .unwrap();
        let filter = MetadataFilter {
            sector: Some("FINTECH".into()),
            city: Some("bangalore".into()),
            year: Some(2021),
            ..Default::default()
        };
        assert!(filter.matches(&meta));

        let filter = MetadataFilter {
            state: Some("Karnataka".into()),
            ..Default::default()
        };
        assert!(!filter.matches(&meta));
    }

    #[test]
    fn test_sql_predicate() {
        assert_eq!(MetadataFilter::default().to_sql_predicate(), None);

        let filter = MetadataFilter {
            sector: Some("Fintech".into()),
            year: Some(2022),
            company: Some("Byju's".into()),
            ..Default::default()
        };
        assert_eq!(
            filter.to_sql_predicate().unwrap(),
            "lower(sector) = 'fintech' AND lower(company) = 'byju''s' AND year = 2022"
        );
    }

    #[test]
    fn test_cosine_distance() {
        assert!(cosine_distance(&[1.0, 0.0], &[1.0, 0.0]).abs() < 1e-6);
        assert!((cosine_distance(&[1.0, 0.0], &[0.0, 1.0]) - 1.0).abs() < 1e-6);
        assert_eq!(cosine_distance(&[0.0, 0.0], &[1.0, 0.0]), 1.0);
        assert_eq!(cosine_distance(&[1.0], &[1.0, 0.0]), 1.0);
    }

    #[tokio::test]
    async fn test_build_index_then_reuse() {
        let store = sample_store();
        let embedder = HashEmbedding::new(64);
        let index = InMemoryIndex::new();

        let outcome = build_index(&store, &embedder, &index, false).await.unwrap();
        assert_eq!(outcome, BuildOutcome::Built { documents: 7 });
        assert_eq!(index.count().await.unwrap(), store.indexable().count());

        let outcome = build_index(&store, &embedder, &index, false).await.unwrap();
        assert_eq!(outcome, BuildOutcome::Reused { documents: 7 });

        let outcome = build_index(&store, &embedder, &index, true).await.unwrap();
        assert_eq!(outcome, BuildOutcome::Built { documents: 7 });
    }

    #[tokio::test]
    async fn test_build_index_rebuilds_on_dimension_change() {
        let store = sample_store();
        let index = InMemoryIndex::new();
        build_index(&store, &HashEmbedding::new(32), &index, false)
            .await
            .unwrap();

        let outcome = build_index(&store, &HashEmbedding::new(64), &index, false)
            .await
            .unwrap();
        assert!(matches!(outcome, BuildOutcome::Built { .. }));
        assert_eq!(index.dimension().await.unwrap(), Some(64));
    }

    #[tokio::test]
    async fn test_build_index_requires_indexable_records() {
        let index = InMemoryIndex::new();
        let result = build_index(&RecordStore::default(), &HashEmbedding::new(8), &index, false).await;
        assert!(result.is_err());
    }
}
