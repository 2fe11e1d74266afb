//! Record DB - rusqlite 기반 레코드 스냅샷
//!
//! `ingest` 명령으로 가져온 데이터셋을 저장하고, 이후 모든 명령이
//! 이 스냅샷에서 레코드를 로드합니다.
//! 저장 위치: ~/.funding-rag/records.db

use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use anyhow::{Context, Result};
use chrono::{DateTime, NaiveDate, Utc};
use rusqlite::{params, Connection, OpenFlags};
use serde::Serialize;

use super::FundingRecord;

// ============================================================================
// Data Directory
// ============================================================================

/// 데이터 디렉토리 경로 (~/.funding-rag/)
pub fn get_data_dir() -> PathBuf {
    dirs::data_local_dir()
        .or_else(dirs::home_dir)
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".funding-rag")
}

// ============================================================================
// Types
// ============================================================================

/// 스냅샷 통계
#[derive(Debug, Clone, Serialize)]
pub struct RecordDbStats {
    pub record_count: usize,
    /// 마지막 import 원본 경로
    pub source: Option<String>,
    pub imported_at: Option<DateTime<Utc>>,
    pub db_path: PathBuf,
}

// ============================================================================
// RecordDb
// ============================================================================

/// 레코드 스냅샷 저장소
pub struct RecordDb {
    conn: Arc<Mutex<Connection>>,
    db_path: PathBuf,
}

impl RecordDb {
    /// 저장소 열기 (없으면 생성)
    ///
    /// # Arguments
    /// * `path` - DB 파일 경로
    pub fn open(path: &Path) -> Result<Self> {
        if let Some(parent) = path.parent() {
            if !parent.exists() {
                std::fs::create_dir_all(parent).context("Failed to create database directory")?;
            }
        }

        let conn = Connection::open_with_flags(
            path,
            OpenFlags::SQLITE_OPEN_READ_WRITE
                | OpenFlags::SQLITE_OPEN_CREATE
                | OpenFlags::SQLITE_OPEN_NO_MUTEX,
        )
        .context("Failed to open SQLite database")?;

        let db = Self {
            conn: Arc::new(Mutex::new(conn)),
            db_path: path.to_path_buf(),
        };

        db.initialize()?;
        Ok(db)
    }

    /// 데이터 디렉토리 아래 기본 위치에서 열기
    pub fn open_in(data_dir: &Path) -> Result<Self> {
        Self::open(&data_dir.join("records.db"))
    }

    /// 기본 위치에서 열기 (~/.funding-rag/records.db)
    pub fn open_default() -> Result<Self> {
        Self::open_in(&get_data_dir())
    }

    pub fn db_path(&self) -> &Path {
        &self.db_path
    }

    /// 스키마 초기화
    fn initialize(&self) -> Result<()> {
        let conn = self.conn.lock().map_err(|e| anyhow::anyhow!("Lock error: {}", e))?;

        conn.execute_batch(
            r#"
            CREATE TABLE IF NOT EXISTS funding_records (
                row_id INTEGER PRIMARY KEY,
                company TEXT,
                amount_raw TEXT NOT NULL,
                amount REAL NOT NULL,
                sector TEXT,
                city TEXT,
                state TEXT,
                investors TEXT NOT NULL DEFAULT '[]',
                date TEXT,
                year INTEGER,
                round TEXT
            );

            CREATE INDEX IF NOT EXISTS idx_records_company ON funding_records(company);
            CREATE INDEX IF NOT EXISTS idx_records_year ON funding_records(year);

            CREATE TABLE IF NOT EXISTS import_meta (
                key TEXT PRIMARY KEY,
                value TEXT NOT NULL
            );
            "#,
        )
        .context("Failed to create record tables")?;

        tracing::debug!("Record DB initialized at {:?}", self.db_path);
        Ok(())
    }

    /// 스냅샷 전체 교체 (부분 갱신 없음)
    ///
    /// # Arguments
    /// * `records` - 새 레코드 집합
    /// * `source` - 원본 데이터셋 경로 (메타데이터)
    pub fn replace_all(&self, records: &[FundingRecord], source: &str) -> Result<usize> {
        let mut conn = self.conn.lock().map_err(|e| anyhow::anyhow!("Lock error: {}", e))?;
        let tx = conn.transaction().context("Failed to begin transaction")?;

        tx.execute("DELETE FROM funding_records", [])
            .context("Failed to clear records")?;

        {
            let mut stmt = tx.prepare(
                "INSERT INTO funding_records
                 (row_id, company, amount_raw, amount, sector, city, state, investors, date, year, round)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11)",
            )?;

            for record in records {
                let investors = serde_json::to_string(&record.investors)
                    .context("Failed to serialize investors")?;
                stmt.execute(params![
                    record.row_id as i64,
                    record.company,
                    record.amount_raw,
                    record.amount,
                    record.sector,
                    record.city,
                    record.state,
                    investors,
                    record.date.map(|d| d.format("%Y-%m-%d").to_string()),
                    record.year,
                    record.round,
                ])
                .with_context(|| format!("Failed to insert record {}", record.row_id))?;
            }
        }

        let now = Utc::now().to_rfc3339();
        tx.execute(
            "INSERT OR REPLACE INTO import_meta (key, value) VALUES ('source', ?1), ('imported_at', ?2)",
            params![source, now],
        )
        .context("Failed to write import metadata")?;

        tx.commit().context("Failed to commit records")?;

        tracing::info!("Stored {} records in {:?}", records.len(), self.db_path);
        Ok(records.len())
    }

    /// 전체 레코드 로드 (row_id 순)
    pub fn load_all(&self) -> Result<Vec<FundingRecord>> {
        let conn = self.conn.lock().map_err(|e| anyhow::anyhow!("Lock error: {}", e))?;

        let mut stmt = conn.prepare(
            "SELECT row_id, company, amount_raw, amount, sector, city, state, investors, date, year, round
             FROM funding_records ORDER BY row_id",
        )?;

        let records = stmt
            .query_map([], |row| {
                let investors: String = row.get(7)?;
                let date: Option<String> = row.get(8)?;
                Ok(FundingRecord {
                    row_id: row.get::<_, i64>(0)? as u64,
                    company: row.get(1)?,
                    amount_raw: row.get(2)?,
                    amount: row.get(3)?,
                    sector: row.get(4)?,
                    city: row.get(5)?,
                    state: row.get(6)?,
                    investors: serde_json::from_str(&investors).unwrap_or_default(),
                    date: date.and_then(|d| NaiveDate::parse_from_str(&d, "%Y-%m-%d").ok()),
                    year: row.get(9)?,
                    round: row.get(10)?,
                })
            })?
            .collect::<rusqlite::Result<Vec<_>>>()
            .context("Failed to read records")?;

        Ok(records)
    }

    /// 스냅샷 통계
    pub fn stats(&self) -> Result<RecordDbStats> {
        let conn = self.conn.lock().map_err(|e| anyhow::anyhow!("Lock error: {}", e))?;

        let count: i64 = conn
            .query_row("SELECT COUNT(*) FROM funding_records", [], |row| row.get(0))
            .unwrap_or(0);

        let meta = |key: &str| -> Option<String> {
            conn.query_row(
                "SELECT value FROM import_meta WHERE key = ?1",
                params![key],
                |row| row.get(0),
            )
            .ok()
        };

        Ok(RecordDbStats {
            record_count: count as usize,
            source: meta("source"),
            imported_at: meta("imported_at").and_then(|s| parse_datetime(&s)),
            db_path: self.db_path.clone(),
        })
    }
}

// ============================================================================
// Helper Functions
// ============================================================================

/// RFC3339 문자열을 DateTime<Utc>로 파싱
fn parse_datetime(s: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(s)
        .map(|dt| dt.with_timezone(&Utc))
        .ok()
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::records::tests::record;
    use tempfile::TempDir;

    fn create_test_db() -> (TempDir, RecordDb) {
        let dir = TempDir::new().unwrap();
        let db = RecordDb::open_in(dir.path()).unwrap();
        (dir, db)
    }

    #[test]
    fn test_replace_and_load() {
        let (_dir, db) = create_test_db();

        let mut first = record(0, "Razorpay", 5e7, "Fintech", "Bangalore", 2021);
        first.investors = vec!["Sequoia".to_string(), "Tiger Global".to_string()];
        let records = vec![first, record(1, "Swiggy", 8e8, "Foodtech", "Bangalore", 2020)];

        assert_eq!(db.replace_all(&records, "sample.csv").unwrap(), 2);

        let loaded = db.load_all().unwrap();
        assert_eq!(loaded, records);
    }

    #[test]
    fn test_replace_is_wholesale() {
        let (_dir, db) = create_test_db();

        db.replace_all(
            &[
                record(0, "A", 1e7, "Fintech", "Pune", 2020),
                record(1, "B", 1e7, "Fintech", "Pune", 2020),
            ],
            "first.csv",
        )
        .unwrap();
        db.replace_all(&[record(0, "C", 1e7, "Edtech", "Delhi", 2021)], "second.csv")
            .unwrap();

        let loaded = db.load_all().unwrap();
        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded[0].company_name(), "C");
    }

    #[test]
    fn test_stats() {
        let (_dir, db) = create_test_db();

        let empty = db.stats().unwrap();
        assert_eq!(empty.record_count, 0);
        assert!(empty.source.is_none());

        db.replace_all(&[record(0, "A", 1e7, "Fintech", "Pune", 2020)], "data.csv")
            .unwrap();

        let stats = db.stats().unwrap();
        assert_eq!(stats.record_count, 1);
        assert_eq!(stats.source.as_deref(), Some("data.csv"));
        assert!(stats.imported_at.is_some());
    }
}
