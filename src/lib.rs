//! funding-rag - 스타트업 투자 데이터 다국어 RAG
//!
//! 인도 스타트업 투자 레코드에 대한 자연어 질의를
//! 질의 분석 → 필터 벡터 검색 → 순위 → 현지화 답변 합성으로 처리합니다.

pub mod cache;
pub mod cli;
pub mod config;
pub mod embedding;
pub mod error;
pub mod generation;
pub mod index;
pub mod lang;
pub mod pipeline;
pub mod query;
pub mod ranking;
pub mod records;
pub mod retrieval;
pub mod synthesis;

// Re-exports
pub use config::{PipelineConfig, Settings, YearRange};
pub use embedding::{EmbeddingProvider, GeminiEmbedding, HashEmbedding, get_api_key, has_api_key};
pub use error::PipelineError;
pub use generation::{Generator, OllamaGenerator};
pub use index::{InMemoryIndex, LanceIndex, VectorIndex};
pub use lang::Language;
pub use pipeline::{AnswerRequest, Context, Pipeline};
pub use query::{Intent, QueryAnalyzer};
pub use records::{FundingRecord, RecordStore};
pub use synthesis::{Answer, AnswerOrigin, SourceRecord};
