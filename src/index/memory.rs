//! 인메모리 벡터 인덱스
//!
//! 필터를 먼저 적용한 뒤 전체 문서에 대해 정확한 코사인 거리를 계산합니다.
//! 스냅샷 경로가 있으면 교체 시 JSON으로 저장하고 열 때 복원합니다.

use std::path::{Path, PathBuf};
use std::sync::RwLock;

use anyhow::{Context, Result};
use async_trait::async_trait;

use super::{cosine_distance, order_hits, IndexHit, IndexedDocument, MetadataFilter, VectorIndex};

#[derive(Debug, Default)]
pub struct InMemoryIndex {
    documents: RwLock<Vec<IndexedDocument>>,
    snapshot: Option<PathBuf>,
}

impl InMemoryIndex {
    /// 저장 없는 빈 인덱스
    pub fn new() -> Self {
        Self::default()
    }

    /// JSON 스냅샷으로 열기 (파일이 없으면 빈 인덱스)
    ///
    /// # Arguments
    /// * `path` - index.json 경로
    pub fn open(path: &Path) -> Result<Self> {
        let documents = if path.exists() {
            let raw = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read index snapshot: {}", path.display()))?;
            serde_json::from_str(&raw).context("Failed to parse index snapshot")?
        } else {
            Vec::new()
        };

        tracing::debug!(
            "Opened in-memory index with {} documents from {:?}",
            documents.len(),
            path
        );
        Ok(Self {
            documents: RwLock::new(documents),
            snapshot: Some(path.to_path_buf()),
        })
    }

    fn write_snapshot(path: &Path, documents: &[IndexedDocument]) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).context("Failed to create index directory")?;
        }
        let json = serde_json::to_vec(documents).context("Failed to serialize index")?;
        let tmp = path.with_extension(format!("json.{}.tmp", uuid::Uuid::new_v4()));
        std::fs::write(&tmp, json).context("Failed to write index snapshot")?;
        std::fs::rename(&tmp, path).context("Failed to replace index snapshot")?;
        Ok(())
    }
}

#[async_trait]
impl VectorIndex for InMemoryIndex {
    async fn replace_all(&self, documents: &[IndexedDocument]) -> Result<usize> {
        if let Some(path) = &self.snapshot {
            Self::write_snapshot(path, documents)?;
        }

        let mut guard = self
            .documents
            .write()
            .map_err(|_| anyhow::anyhow!("Index lock poisoned"))?;
        *guard = documents.to_vec();
        Ok(guard.len())
    }

    async fn query(
        &self,
        embedding: &[f32],
        filter: &MetadataFilter,
        top_k: usize,
    ) -> Result<Vec<IndexHit>> {
        let guard = self
            .documents
            .read()
            .map_err(|_| anyhow::anyhow!("Index lock poisoned"))?;

        let mut hits: Vec<IndexHit> = guard
            .iter()
            .filter(|doc| filter.matches(&doc.metadata))
            .map(|doc| IndexHit {
                metadata: doc.metadata.clone(),
                summary: doc.summary.clone(),
                distance: cosine_distance(embedding, &doc.embedding),
            })
            .collect();

        order_hits(&mut hits);
        hits.truncate(top_k);
        Ok(hits)
    }

    async fn count(&self) -> Result<usize> {
        let guard = self
            .documents
            .read()
            .map_err(|_| anyhow::anyhow!("Index lock poisoned"))?;
        Ok(guard.len())
    }

    async fn dimension(&self) -> Result<Option<usize>> {
        let guard = self
            .documents
            .read()
            .map_err(|_| anyhow::anyhow!("Index lock poisoned"))?;
        Ok(guard.first().map(|doc| doc.embedding.len()))
    }

    fn name(&self) -> &str {
        "in-memory"
    }
}
