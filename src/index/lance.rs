//! LanceDB 벡터 인덱스
//!
//! 코사인 거리로 검색하며 메타데이터 필터는 `only_if` SQL 조건으로 전달합니다.
//! ref: https://lancedb.github.io/lancedb/

use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result};
use arrow_array::{
    Array, FixedSizeListArray, Float32Array, Float64Array, Int32Array, Int64Array, RecordBatch,
    RecordBatchIterator, StringArray,
};
use arrow_schema::{DataType, Field, Schema};
use async_trait::async_trait;
use futures::TryStreamExt;
use lancedb::connection::Connection;
use lancedb::query::{ExecutableQuery, QueryBase};
use lancedb::DistanceType;

use super::{order_hits, DocumentMetadata, IndexHit, IndexedDocument, MetadataFilter, VectorIndex};

/// 레코드 테이블 이름
const TABLE_NAME: &str = "funding_records";

// ============================================================================
// LanceIndex
// ============================================================================

pub struct LanceIndex {
    db: Connection,
}

impl LanceIndex {
    /// LanceDB 인덱스 열기
    ///
    /// # Arguments
    /// * `path` - .lance 디렉토리 경로
    pub async fn open(path: &Path) -> Result<Self> {
        if let Some(parent) = path.parent() {
            if !parent.exists() {
                tokio::fs::create_dir_all(parent)
                    .await
                    .context("Failed to create LanceDB directory")?;
            }
        }

        let path_str = path
            .to_str()
            .ok_or_else(|| anyhow::anyhow!("Invalid path encoding"))?;

        let db = lancedb::connect(path_str)
            .execute()
            .await
            .context("Failed to connect to LanceDB")?;

        Ok(Self { db })
    }

    fn create_schema(dimension: i32) -> Schema {
        Schema::new(vec![
            Field::new("row_id", DataType::Int64, false),
            Field::new("company", DataType::Utf8, false),
            Field::new("sector", DataType::Utf8, false),
            Field::new("city", DataType::Utf8, true),
            Field::new("state", DataType::Utf8, true),
            Field::new("investors", DataType::Utf8, true),
            Field::new("date", DataType::Utf8, true),
            Field::new("year", DataType::Int32, true),
            Field::new("amount", DataType::Float64, false),
            Field::new("amount_raw", DataType::Utf8, false),
            Field::new("summary", DataType::Utf8, false),
            Field::new(
                "embedding",
                DataType::FixedSizeList(
                    Arc::new(Field::new("item", DataType::Float32, true)),
                    dimension,
                ),
                false,
            ),
        ])
    }

    /// 문서들을 Arrow RecordBatch로 변환
    fn documents_to_batch(documents: &[IndexedDocument]) -> Result<RecordBatch> {
        let first = documents
            .first()
            .ok_or_else(|| anyhow::anyhow!("Cannot create batch from empty documents"))?;
        let dimension = first.embedding.len();
        if let Some(bad) = documents.iter().find(|d| d.embedding.len() != dimension) {
            anyhow::bail!(
                "Embedding dimension mismatch for row {}: expected {}, got {}",
                bad.metadata.row_id,
                dimension,
                bad.embedding.len()
            );
        }
        let dimension = i32::try_from(dimension).context("Embedding dimension too large")?;

        let meta: Vec<&DocumentMetadata> = documents.iter().map(|d| &d.metadata).collect();

        let embeddings_flat: Vec<f32> = documents
            .iter()
            .flat_map(|d| d.embedding.iter().copied())
            .collect();
        let field = Arc::new(Field::new("item", DataType::Float32, true));
        let embeddings = FixedSizeListArray::try_new(
            field,
            dimension,
            Arc::new(Float32Array::from(embeddings_flat)) as Arc<dyn Array>,
            None,
        )
        .context("Failed to create embedding array")?;

        let row_ids: Vec<i64> = meta.iter().map(|m| m.row_id as i64).collect();

        RecordBatch::try_new(
            Arc::new(Self::create_schema(dimension)),
            vec![
                Arc::new(Int64Array::from(row_ids)),
                Arc::new(StringArray::from_iter_values(meta.iter().map(|m| &m.company))),
                Arc::new(StringArray::from_iter_values(meta.iter().map(|m| &m.sector))),
                Arc::new(StringArray::from_iter(meta.iter().map(|m| m.city.as_deref()))),
                Arc::new(StringArray::from_iter(meta.iter().map(|m| m.state.as_deref()))),
                Arc::new(StringArray::from_iter(meta.iter().map(|m| m.investors.as_deref()))),
                Arc::new(StringArray::from_iter(meta.iter().map(|m| m.date.as_deref()))),
                Arc::new(Int32Array::from_iter(meta.iter().map(|m| m.year))),
                Arc::new(Float64Array::from_iter_values(meta.iter().map(|m| m.amount))),
                Arc::new(StringArray::from_iter_values(meta.iter().map(|m| &m.amount_raw))),
                Arc::new(StringArray::from_iter_values(documents.iter().map(|d| &d.summary))),
                Arc::new(embeddings),
            ],
        )
        .context("Failed to create RecordBatch")
    }

    async fn table_exists(&self) -> bool {
        self.db
            .table_names()
            .execute()
            .await
            .map(|names| names.iter().any(|n| n == TABLE_NAME))
            .unwrap_or(false)
    }

    async fn open_table(&self) -> Result<lancedb::table::Table> {
        self.db
            .open_table(TABLE_NAME)
            .execute()
            .await
            .context("Failed to open table")
    }

    fn batch_to_hits(batch: &RecordBatch) -> Result<Vec<IndexHit>> {
        fn column<'a, T: 'static>(batch: &'a RecordBatch, name: &str) -> Result<&'a T> {
            batch
                .column_by_name(name)
                .and_then(|c| c.as_any().downcast_ref::<T>())
                .ok_or_else(|| anyhow::anyhow!("Missing {} column", name))
        }
        fn optional(array: &StringArray, i: usize) -> Option<String> {
            (!array.is_null(i)).then(|| array.value(i).to_string())
        }

        let row_ids = column::<Int64Array>(batch, "row_id")?;
        let companies = column::<StringArray>(batch, "company")?;
        let sectors = column::<StringArray>(batch, "sector")?;
        let cities = column::<StringArray>(batch, "city")?;
        let states = column::<StringArray>(batch, "state")?;
        let investors = column::<StringArray>(batch, "investors")?;
        let dates = column::<StringArray>(batch, "date")?;
        let years = column::<Int32Array>(batch, "year")?;
        let amounts = column::<Float64Array>(batch, "amount")?;
        let amount_raws = column::<StringArray>(batch, "amount_raw")?;
        let summaries = column::<StringArray>(batch, "summary")?;
        // LanceDB가 자동 추가하는 거리 컬럼
        let distances = column::<Float32Array>(batch, "_distance")?;

        Ok((0..batch.num_rows())
            .map(|i| IndexHit {
                metadata: DocumentMetadata {
                    row_id: row_ids.value(i) as u64,
                    company: companies.value(i).to_string(),
                    sector: sectors.value(i).to_string(),
                    city: optional(cities, i),
                    state: optional(states, i),
                    investors: optional(investors, i),
                    date: optional(dates, i),
                    year: (!years.is_null(i)).then(|| years.value(i)),
                    amount: amounts.value(i),
                    amount_raw: amount_raws.value(i).to_string(),
                },
                summary: summaries.value(i).to_string(),
                distance: distances.value(i),
            })
            .collect())
    }
}

#[async_trait]
impl VectorIndex for LanceIndex {
    async fn replace_all(&self, documents: &[IndexedDocument]) -> Result<usize> {
        if self.table_exists().await {
            self.db
                .drop_table(TABLE_NAME)
                .await
                .context("Failed to drop existing table")?;
        }
        if documents.is_empty() {
            return Ok(0);
        }

        let batch = Self::documents_to_batch(documents)?;
        let schema = batch.schema();
        let batches = RecordBatchIterator::new(vec![Ok(batch)], schema);
        self.db
            .create_table(TABLE_NAME, batches)
            .execute()
            .await
            .context("Failed to create table")?;

        Ok(documents.len())
    }

    async fn query(
        &self,
        embedding: &[f32],
        filter: &MetadataFilter,
        top_k: usize,
    ) -> Result<Vec<IndexHit>> {
        if !self.table_exists().await {
            return Ok(vec![]);
        }

        let table = self.open_table().await?;
        let mut query = table
            .vector_search(embedding.to_vec())
            .context("Failed to create vector search")?
            .distance_type(DistanceType::Cosine)
            .limit(top_k);
        if let Some(predicate) = filter.to_sql_predicate() {
            tracing::debug!("Lance filter: {}", predicate);
            query = query.only_if(predicate);
        }

        let batches: Vec<RecordBatch> = query
            .execute()
            .await
            .context("Failed to execute vector search")?
            .try_collect()
            .await
            .context("Failed to read search results")?;

        let mut hits = Vec::new();
        for batch in &batches {
            hits.extend(Self::batch_to_hits(batch)?);
        }
        order_hits(&mut hits);
        hits.truncate(top_k);
        Ok(hits)
    }

    async fn count(&self) -> Result<usize> {
        if !self.table_exists().await {
            return Ok(0);
        }
        let table = self.open_table().await?;
        table.count_rows(None).await.context("Failed to count rows")
    }

    async fn dimension(&self) -> Result<Option<usize>> {
        if !self.table_exists().await {
            return Ok(None);
        }
        let table = self.open_table().await?;
        let schema = table.schema().await.context("Failed to read table schema")?;
        let dimension = schema
            .field_with_name("embedding")
            .ok()
            .and_then(|field| match field.data_type() {
                DataType::FixedSizeList(_, n) => usize::try_from(*n).ok(),
                _ => None,
            });
        Ok(dimension)
    }

    fn name(&self) -> &str {
        "lancedb"
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::records::tests::record;
    use tempfile::TempDir;

    fn doc(row_id: u64, company: &str, sector: &str, embedding: Vec<f32>) -> IndexedDocument {
        let r = record(row_id, company, 5.0e7, sector, "Bangalore", 2021);
        IndexedDocument {
            summary: format!("{} summary", company),
            embedding,
            metadata: DocumentMetadata::from_record(&r).unwrap(),
        }
    }

    #[tokio::test]
    async fn test_lance_replace_and_count() {
        let temp_dir = TempDir::new().unwrap();
        let index = LanceIndex::open(&temp_dir.path().join("index.lance"))
            .await
            .unwrap();

        assert_eq!(index.count().await.unwrap(), 0);
        assert_eq!(index.dimension().await.unwrap(), None);

        let docs = vec![
            doc(0, "Razorpay", "Fintech", vec![1.0, 0.0, 0.0]),
            doc(1, "Byju's", "Edtech", vec![0.0, 1.0, 0.0]),
        ];
        assert_eq!(index.replace_all(&docs).await.unwrap(), 2);
        assert_eq!(index.count().await.unwrap(), 2);
        assert_eq!(index.dimension().await.unwrap(), Some(3));

        // 전체 교체
        index.replace_all(&docs[..1]).await.unwrap();
        assert_eq!(index.count().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_lance_cosine_search_with_filter() {
        let temp_dir = TempDir::new().unwrap();
        let index = LanceIndex::open(&temp_dir.path().join("index.lance"))
            .await
            .unwrap();
        index
            .replace_all(&[
                doc(0, "Razorpay", "Fintech", vec![1.0, 0.0, 0.0]),
                doc(1, "Byju's", "Edtech", vec![0.9, 0.1, 0.0]),
                doc(2, "Cred", "Fintech", vec![0.0, 1.0, 0.0]),
            ])
            .await
            .unwrap();

        let hits = index
            .query(&[1.0, 0.0, 0.0], &MetadataFilter::default(), 10)
            .await
            .unwrap();
        assert_eq!(hits.len(), 3);
        assert_eq!(hits[0].metadata.company, "Razorpay");
        assert!(hits[0].distance.abs() < 1e-4);

        let filter = MetadataFilter {
            company: Some("byju's".into()),
            ..Default::default()
        };
        let hits = index.query(&[1.0, 0.0, 0.0], &filter, 10).await.unwrap();
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].metadata.sector, "Edtech");
        assert_eq!(hits[0].metadata.year, Some(2021));
    }
}
