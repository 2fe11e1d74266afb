//! CLI 모듈
//!
//! funding-rag CLI 명령어 정의 및 구현

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{bail, Context as _, Result};
use clap::{Parser, Subcommand};

use crate::cache::TranslationCache;
use crate::config::Settings;
use crate::embedding::{create_embedder, has_api_key, EmbeddingProvider};
use crate::index::{build_index, VectorIndex};
use crate::lang::Language;
use crate::pipeline::{open_index, Context, Pipeline};
use crate::query::QueryAnalyzer;
use crate::records::{
    format_amount, format_crores, load_csv, summarize, FundingRecord, RecordDb, RecordFilter,
    RecordStore,
};
use crate::synthesis::Answer;

// ============================================================================
// CLI Definition
// ============================================================================

#[derive(Parser)]
#[command(name = "funding-rag")]
#[command(version, about = "Multilingual Q&A over Indian startup funding records", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// CSV 데이터셋을 가져오고 인덱스 빌드
    Ingest {
        /// 데이터셋 CSV 경로
        csv: PathBuf,
    },

    /// 질문에 답변
    Ask {
        /// 질의
        query: String,

        /// 답변 언어 (en, hi, te, ta, kn, mr, gu, bn)
        #[arg(short, long, default_value = "en")]
        language: String,

        /// JSON으로 출력
        #[arg(long)]
        json: bool,
    },

    /// 질의 분석 결과만 출력
    Analyze {
        query: String,

        #[arg(short, long, default_value = "en")]
        language: String,
    },

    /// 데이터셋 통계
    Stats {
        #[arg(short, long)]
        sector: Option<String>,

        #[arg(short, long)]
        city: Option<String>,

        #[arg(short, long)]
        year: Option<i32>,
    },

    /// 상태 확인
    Status,
}

// ============================================================================
// CLI Runner
// ============================================================================

/// CLI 명령어 실행
pub async fn run(cli: Cli) -> Result<()> {
    let settings = Settings::from_env()?;

    match cli.command {
        Commands::Ingest { csv } => cmd_ingest(&settings, csv).await,
        Commands::Ask {
            query,
            language,
            json,
        } => cmd_ask(&settings, &query, &language, json).await,
        Commands::Analyze { query, language } => cmd_analyze(&settings, &query, &language),
        Commands::Stats { sector, city, year } => cmd_stats(&settings, sector, city, year),
        Commands::Status => cmd_status(&settings).await,
    }
}

// ============================================================================
// Command Implementations
// ============================================================================

/// 데이터셋 수집 명령어 (ingest)
///
/// CSV를 레코드 스냅샷에 저장한 뒤 임베딩 인덱스를 빌드합니다.
/// 스냅샷이 교체되므로 인덱스는 항상 새로 빌드합니다.
async fn cmd_ingest(settings: &Settings, csv: PathBuf) -> Result<()> {
    println!("[*] Loading dataset: {}", csv.display());
    let records = load_csv(&csv)?;
    if records.is_empty() {
        bail!("Dataset {} has no rows", csv.display());
    }

    let db = RecordDb::open(&settings.records_db_path())?;
    let embedder = create_embedder(settings.embedder)?;
    let index = open_index(settings).await?;

    println!(
        "[*] Building {} index with {} embeddings...",
        index.name(),
        embedder.name()
    );
    let documents = ingest_records(
        records,
        &csv.display().to_string(),
        &db,
        embedder.as_ref(),
        index.as_ref(),
    )
    .await?;
    println!("[OK] Index built ({} documents)", documents);
    Ok(())
}

/// 레코드를 스냅샷에 쓰고 인덱스를 재빌드, 색인된 문서 수 반환
///
/// 레코드 수가 같아도 내용이 바뀌었을 수 있으므로 기존 인덱스를 재사용하지 않습니다.
async fn ingest_records(
    records: Vec<FundingRecord>,
    source: &str,
    db: &RecordDb,
    embedder: &dyn EmbeddingProvider,
    index: &dyn VectorIndex,
) -> Result<usize> {
    let written = db
        .replace_all(&records, source)
        .context("Failed to write record snapshot")?;
    println!("[OK] {} records saved to {}", written, db.db_path().display());

    let store = RecordStore::new(records);
    let indexable = store.indexable().count();
    println!(
        "[*] {} indexable records ({} skipped without company or sector)",
        indexable,
        store.len() - indexable
    );

    let outcome = build_index(&store, embedder, index, true)
        .await
        .context("Index build failed")?;
    tracing::info!(documents = outcome.documents(), source, "Dataset ingested");
    Ok(outcome.documents())
}

/// 질의 명령어 (ask)
async fn cmd_ask(settings: &Settings, query: &str, language: &str, json: bool) -> Result<()> {
    if !json {
        println!("[*] Preparing pipeline...");
    }
    let context = Context::from_settings(settings)
        .await
        .context("Pipeline initialization failed")?;
    let pipeline = Pipeline::with_context(Arc::new(context));

    let answer = pipeline.answer(query, language).await?;

    if json {
        println!("{}", serde_json::to_string_pretty(&answer)?);
    } else {
        print_answer(&answer);
    }
    Ok(())
}

/// 분석 명령어 (analyze)
fn cmd_analyze(settings: &Settings, query: &str, language: &str) -> Result<()> {
    let language: Language = language.parse()?;
    let store = open_store(settings)?;
    let analyzer = QueryAnalyzer::new(store.vocabulary().clone(), settings.pipeline.coverage);

    let analysis = analyzer.analyze(query, language);
    println!("{}", serde_json::to_string_pretty(&analysis)?);
    Ok(())
}

/// 통계 명령어 (stats)
fn cmd_stats(
    settings: &Settings,
    sector: Option<String>,
    city: Option<String>,
    year: Option<i32>,
) -> Result<()> {
    let store = open_store(settings)?;
    let filter = RecordFilter {
        sector,
        city,
        year,
        ..Default::default()
    };
    let matched = store.filter(&filter);
    if matched.is_empty() {
        println!("[!] No records match the filter.");
        return Ok(());
    }

    let stats = summarize(matched.iter().copied());
    println!("[OK] {} deals, {} companies", stats.deal_count, stats.company_count);
    println!("     Total:   ₹{} Cr", format_crores(stats.total_amount));
    println!("     Average: {}", format_amount(stats.average_amount));

    if !stats.top_sectors.is_empty() {
        println!("\n  Top sectors:");
        for (i, (name, amount)) in stats.top_sectors.iter().enumerate() {
            println!("    {}. {:<20} ₹{} Cr", i + 1, name, format_crores(*amount));
        }
    }
    if !stats.top_companies.is_empty() {
        println!("\n  Top companies:");
        for (i, (name, amount)) in stats.top_companies.iter().enumerate() {
            println!("    {}. {:<20} ₹{} Cr", i + 1, name, format_crores(*amount));
        }
    }
    if !stats.top_investors.is_empty() {
        println!("\n  Most active investors:");
        for (i, (name, deals)) in stats.top_investors.iter().enumerate() {
            println!("    {}. {:<20} {} deals", i + 1, name, deals);
        }
    }
    Ok(())
}

/// 상태 명령어 (status)
///
/// 시스템 상태를 확인합니다.
async fn cmd_status(settings: &Settings) -> Result<()> {
    println!("funding-rag v{}", env!("CARGO_PKG_VERSION"));
    println!();

    println!("[*] Data directory: {}", settings.data_dir.display());

    if has_api_key() {
        println!("[OK] API key: configured");
    } else {
        println!("[!] API key: not set (using offline hash embeddings)");
        println!("    export GEMINI_API_KEY=your-key");
    }
    println!(
        "[*] Embedder: {:?}, index: {:?}",
        settings.embedder, settings.index_backend
    );

    if settings.generation_enabled {
        println!(
            "[*] Generation: {} ({})",
            settings.ollama_url, settings.ollama_model
        );
    } else {
        println!("[*] Generation: off");
    }

    match RecordDb::open(&settings.records_db_path()).and_then(|db| db.stats()) {
        Ok(stats) => {
            println!("[OK] Records: {}", stats.record_count);
            if let Some(source) = &stats.source {
                println!("     Source: {}", source);
            }
            if let Some(imported_at) = stats.imported_at {
                println!("     Imported: {}", imported_at.format("%Y-%m-%d %H:%M"));
            }
        }
        Err(e) => println!("[!] Record snapshot unavailable: {}", e),
    }

    match open_index(settings).await {
        Ok(index) => match index.count().await {
            Ok(count) => println!("[OK] Index: {} documents", count),
            Err(e) => tracing::debug!("Index count failed: {}", e),
        },
        Err(e) => println!("[!] Index unavailable: {}", e),
    }

    let cache = TranslationCache::open(&settings.translation_cache_path());
    println!("[*] Translation cache: {} entries", cache.len());

    Ok(())
}

// ============================================================================
// Helper Functions
// ============================================================================

fn open_store(settings: &Settings) -> Result<RecordStore> {
    let db = RecordDb::open(&settings.records_db_path())?;
    let records = db.load_all()?;
    if records.is_empty() {
        bail!("No records found. Run 'funding-rag ingest <csv>' first");
    }
    Ok(RecordStore::new(records))
}

fn print_answer(answer: &Answer) {
    let intent = answer
        .intent
        .map_or_else(|| "-".to_string(), |i| i.to_string());
    println!("\n[OK] intent: {} ({:?})\n", intent, answer.origin);
    println!("{}", answer.answer);

    if answer.sources.is_empty() {
        return;
    }
    println!("\nSources ({}):", answer.sources.len());
    for (i, source) in answer.sources.iter().enumerate() {
        let mut line = format!(
            "  {}. {} • {} • {}",
            i + 1,
            source.company,
            source.amount,
            source.sector
        );
        if let Some(city) = &source.city {
            line.push_str(&format!(" • {}", city));
        }
        if let Some(date) = &source.date {
            line.push_str(&format!(" • {}", date));
        } else if let Some(year) = source.year {
            line.push_str(&format!(" • {}", year));
        }
        if let Some(score) = source.score {
            line.push_str(&format!(" [{:.3}]", score));
        }
        println!("{}", line);
        if let Some(investors) = &source.investors {
            println!("     Investors: {}", truncate_text(investors, 80));
        }
    }
}

/// 텍스트 자르기 (UTF-8 안전)
fn truncate_text(text: &str, max_chars: usize) -> String {
    let cleaned = text.replace('\n', " ").replace('\r', "");
    let cleaned = cleaned.trim();

    if cleaned.chars().count() <= max_chars {
        cleaned.to_string()
    } else {
        let truncated: String = cleaned.chars().take(max_chars).collect();
        format!("{}...", truncated)
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_text() {
        assert_eq!(truncate_text("short", 10), "short");
        assert_eq!(truncate_text("a\nb", 10), "a b");
        assert_eq!(truncate_text("Sequoia Capital", 7), "Sequoia...");
    }

    #[test]
    fn test_truncate_text_multibyte() {
        assert_eq!(truncate_text("फिनटेक कंपनी", 3), "फिन...");
    }

    #[test]
    fn test_parse_ask_command() {
        let cli = Cli::parse_from(["funding-rag", "ask", "fintech in 2022", "-l", "hi", "--json"]);
        match cli.command {
            Commands::Ask {
                query,
                language,
                json,
            } => {
                assert_eq!(query, "fintech in 2022");
                assert_eq!(language, "hi");
                assert!(json);
            }
            _ => panic!("expected ask"),
        }
    }

    #[test]
    fn test_parse_ingest() {
        let cli = Cli::parse_from(["funding-rag", "ingest", "data.csv"]);
        match cli.command {
            Commands::Ingest { csv } => assert_eq!(csv, PathBuf::from("data.csv")),
            _ => panic!("expected ingest"),
        }
    }

    #[tokio::test]
    async fn test_reingest_same_count_rebuilds_index() {
        use crate::config::EmbedderKind;
        use crate::index::{InMemoryIndex, MetadataFilter};
        use crate::records::tests::record;
        use tempfile::TempDir;

        let dir = TempDir::new().unwrap();
        let db = RecordDb::open_in(dir.path()).unwrap();
        let embedder = create_embedder(EmbedderKind::Hash).unwrap();
        let index = InMemoryIndex::new();

        let first = vec![
            record(1, "Zomato", 100.0, "Food", "Gurgaon", 2020),
            record(2, "Swiggy", 200.0, "Food", "Bangalore", 2020),
        ];
        let second = vec![
            record(1, "Razorpay", 300.0, "Fintech", "Bangalore", 2021),
            record(2, "Cred", 400.0, "Fintech", "Bangalore", 2021),
        ];

        ingest_records(first, "first.csv", &db, embedder.as_ref(), &index)
            .await
            .unwrap();
        let documents = ingest_records(second, "second.csv", &db, embedder.as_ref(), &index)
            .await
            .unwrap();
        assert_eq!(documents, 2);

        let query = embedder.embed_query("fintech funding").await.unwrap();
        let hits = index
            .query(&query, &MetadataFilter::default(), 10)
            .await
            .unwrap();
        let mut companies: Vec<_> = hits.iter().map(|h| h.metadata.company.as_str()).collect();
        companies.sort();
        assert_eq!(companies, vec!["Cred", "Razorpay"]);

        let stored: Vec<_> = db.load_all().unwrap().into_iter().filter_map(|r| r.company).collect();
        assert!(stored.contains(&"Razorpay".to_string()));
        assert!(!stored.contains(&"Zomato".to_string()));
    }
}
