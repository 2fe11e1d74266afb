//! Config 모듈 - 파이프라인 설정
//!
//! - PipelineConfig: 검색/합성 파라미터 (빌더로 검증)
//! - Settings: 환경 변수 기반 런타임 설정

use std::env;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::{bail, Context, Result};
use serde::Serialize;
use url::Url;

use crate::lang::Language;
use crate::records::get_data_dir;

// ============================================================================
// YearRange
// ============================================================================

/// 데이터셋이 다루는 연도 범위 (양 끝 포함)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct YearRange {
    pub min: i32,
    pub max: i32,
}

impl Default for YearRange {
    fn default() -> Self {
        Self {
            min: 2010,
            max: 2025,
        }
    }
}

impl YearRange {
    pub fn contains(&self, year: i32) -> bool {
        (self.min..=self.max).contains(&year)
    }
}

// ============================================================================
// PipelineConfig
// ============================================================================

/// 파이프라인 파라미터
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PipelineConfig {
    /// score(= 1 - distance)가 이 값을 넘어야 후보로 인정
    pub similarity_threshold: f32,
    /// 인덱스에서 가져올 후보 수
    pub candidate_pool: usize,
    /// 목록 답변에 표시할 기본 항목 수
    pub display_count: usize,
    /// 답변에 포함할 최대 출처 수
    pub max_sources: usize,
    pub max_query_chars: usize,
    pub coverage: YearRange,
    /// 생성 프롬프트에 넣을 상세 행 수
    pub context_rows: usize,
    pub embed_timeout: Duration,
    pub generation_timeout: Duration,
    pub transliteration_timeout: Duration,
    /// 생성 분기를 허용할 언어
    pub generation_languages: Vec<Language>,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            similarity_threshold: 0.25,
            candidate_pool: 100,
            display_count: 15,
            max_sources: 5,
            max_query_chars: 500,
            coverage: YearRange::default(),
            context_rows: 15,
            embed_timeout: Duration::from_secs(15),
            generation_timeout: Duration::from_secs(20),
            transliteration_timeout: Duration::from_secs(5),
            generation_languages: vec![Language::En],
        }
    }
}

impl PipelineConfig {
    pub fn builder() -> PipelineConfigBuilder {
        PipelineConfigBuilder::default()
    }

    /// 해당 언어에 생성 분기를 사용할지
    pub fn generates_for(&self, language: Language) -> bool {
        self.generation_languages.contains(&language)
    }
}

/// 검증을 거쳐 PipelineConfig를 만드는 빌더
#[derive(Debug, Clone, Default)]
pub struct PipelineConfigBuilder {
    config: PipelineConfig,
}

impl PipelineConfigBuilder {
    pub fn similarity_threshold(mut self, threshold: f32) -> Self {
        self.config.similarity_threshold = threshold;
        self
    }

    pub fn candidate_pool(mut self, pool: usize) -> Self {
        self.config.candidate_pool = pool;
        self
    }

    pub fn display_count(mut self, count: usize) -> Self {
        self.config.display_count = count;
        self
    }

    pub fn max_sources(mut self, count: usize) -> Self {
        self.config.max_sources = count;
        self
    }

    pub fn max_query_chars(mut self, chars: usize) -> Self {
        self.config.max_query_chars = chars;
        self
    }

    pub fn coverage(mut self, min: i32, max: i32) -> Self {
        self.config.coverage = YearRange { min, max };
        self
    }

    pub fn context_rows(mut self, rows: usize) -> Self {
        self.config.context_rows = rows;
        self
    }

    pub fn embed_timeout(mut self, timeout: Duration) -> Self {
        self.config.embed_timeout = timeout;
        self
    }

    pub fn generation_timeout(mut self, timeout: Duration) -> Self {
        self.config.generation_timeout = timeout;
        self
    }

    pub fn transliteration_timeout(mut self, timeout: Duration) -> Self {
        self.config.transliteration_timeout = timeout;
        self
    }

    pub fn generation_languages(mut self, languages: Vec<Language>) -> Self {
        self.config.generation_languages = languages;
        self
    }

    /// 설정 검증 후 생성
    ///
    /// # Errors
    /// - threshold가 [0, 1) 범위 밖
    /// - candidate_pool 또는 display_count가 0
    /// - max_sources가 1..=5 범위 밖
    /// - coverage.min > coverage.max
    pub fn build(self) -> Result<PipelineConfig> {
        let c = &self.config;
        if !(0.0..1.0).contains(&c.similarity_threshold) {
            bail!(
                "similarity_threshold ({}) must be in [0, 1)",
                c.similarity_threshold
            );
        }
        if c.candidate_pool == 0 {
            bail!("candidate_pool must be greater than zero");
        }
        if c.display_count == 0 {
            bail!("display_count must be greater than zero");
        }
        if !(1..=5).contains(&c.max_sources) {
            bail!("max_sources ({}) must be between 1 and 5", c.max_sources);
        }
        if c.max_query_chars == 0 {
            bail!("max_query_chars must be greater than zero");
        }
        if c.coverage.min > c.coverage.max {
            bail!(
                "coverage min ({}) must not exceed max ({})",
                c.coverage.min,
                c.coverage.max
            );
        }
        Ok(self.config)
    }
}

// ============================================================================
// Settings
// ============================================================================

/// 벡터 인덱스 백엔드
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum IndexBackend {
    Lance,
    Memory,
}

/// 임베딩 제공자
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EmbedderKind {
    Gemini,
    Hash,
}

/// 환경 변수에서 읽는 런타임 설정
#[derive(Debug, Clone)]
pub struct Settings {
    pub data_dir: PathBuf,
    pub index_backend: IndexBackend,
    pub embedder: EmbedderKind,
    pub ollama_url: Url,
    pub ollama_model: String,
    pub generation_enabled: bool,
    pub pipeline: PipelineConfig,
}

pub const DEFAULT_OLLAMA_URL: &str = "http://localhost:11434";
pub const DEFAULT_OLLAMA_MODEL: &str = "llama3.1:8b";

impl Settings {
    /// 환경 변수에서 설정 로드
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// 키 조회 함수로 설정 로드 (테스트에서 환경 변수 대신 사용)
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let data_dir = get("FUNDING_RAG_DATA_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(get_data_dir);

        let index_backend = match get("FUNDING_RAG_INDEX").as_deref().map(str::trim) {
            None | Some("lance") => IndexBackend::Lance,
            Some("memory") => IndexBackend::Memory,
            Some(other) => bail!("FUNDING_RAG_INDEX must be 'lance' or 'memory', got '{}'", other),
        };

        let has_key = get("GEMINI_API_KEY").is_some() || get("GOOGLE_AI_API_KEY").is_some();
        let embedder = match get("FUNDING_RAG_EMBEDDER").as_deref().map(str::trim) {
            None if has_key => EmbedderKind::Gemini,
            None => EmbedderKind::Hash,
            Some("gemini") => EmbedderKind::Gemini,
            Some("hash") => EmbedderKind::Hash,
            Some(other) => bail!(
                "FUNDING_RAG_EMBEDDER must be 'gemini' or 'hash', got '{}'",
                other
            ),
        };

        let raw_url = get("OLLAMA_BASE_URL").unwrap_or_else(|| DEFAULT_OLLAMA_URL.to_string());
        let ollama_url = Url::parse(raw_url.trim())
            .with_context(|| format!("Invalid OLLAMA_BASE_URL: {}", raw_url))?;
        if !matches!(ollama_url.scheme(), "http" | "https") {
            bail!("OLLAMA_BASE_URL must use http or https: {}", raw_url);
        }

        let ollama_model = get("OLLAMA_MODEL").unwrap_or_else(|| DEFAULT_OLLAMA_MODEL.to_string());

        let generation_enabled = match get("FUNDING_RAG_GENERATION").as_deref().map(str::trim) {
            None | Some("on") => true,
            Some("off") => false,
            Some(other) => bail!("FUNDING_RAG_GENERATION must be 'on' or 'off', got '{}'", other),
        };

        let mut builder = PipelineConfig::builder();
        if let Some(raw) = get("FUNDING_RAG_GENERATION_LANGS") {
            let languages = raw
                .split(',')
                .map(str::trim)
                .filter(|tag| !tag.is_empty())
                .map(|tag| tag.parse::<Language>())
                .collect::<std::result::Result<Vec<_>, _>>()
                .context("Invalid FUNDING_RAG_GENERATION_LANGS")?;
            builder = builder.generation_languages(languages);
        }
        if let Some(raw) = get("FUNDING_RAG_THRESHOLD") {
            let threshold: f32 = raw
                .trim()
                .parse()
                .with_context(|| format!("Invalid FUNDING_RAG_THRESHOLD: {}", raw))?;
            builder = builder.similarity_threshold(threshold);
        }
        let pipeline = builder.build().context("Invalid pipeline configuration")?;

        Ok(Self {
            data_dir,
            index_backend,
            embedder,
            ollama_url,
            ollama_model,
            generation_enabled,
            pipeline,
        })
    }

    pub fn records_db_path(&self) -> PathBuf {
        self.data_dir.join("records.db")
    }

    pub fn lance_path(&self) -> PathBuf {
        self.data_dir.join("index.lance")
    }

    pub fn snapshot_path(&self) -> PathBuf {
        self.data_dir.join("index.json")
    }

    pub fn translation_cache_path(&self) -> PathBuf {
        self.data_dir.join("translation_cache.json")
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn settings(vars: &[(&str, &str)]) -> Result<Settings> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Settings::from_lookup(|key| map.get(key).cloned())
    }

    #[test]
    fn test_default_config() {
        let config = PipelineConfig::builder().build().unwrap();
        assert_eq!(config.similarity_threshold, 0.25);
        assert_eq!(config.candidate_pool, 100);
        assert_eq!(config.max_sources, 5);
        assert_eq!(config.coverage, YearRange { min: 2010, max: 2025 });
        assert!(config.generates_for(Language::En));
        assert!(!config.generates_for(Language::Hi));
    }

    #[test]
    fn test_builder_validation() {
        assert!(PipelineConfig::builder().similarity_threshold(1.0).build().is_err());
        assert!(PipelineConfig::builder().similarity_threshold(-0.1).build().is_err());
        assert!(PipelineConfig::builder().candidate_pool(0).build().is_err());
        assert!(PipelineConfig::builder().max_sources(6).build().is_err());
        assert!(PipelineConfig::builder().coverage(2025, 2010).build().is_err());
        assert!(PipelineConfig::builder().coverage(2020, 2020).build().is_ok());
    }

    #[test]
    fn test_year_range_contains() {
        let range = YearRange::default();
        assert!(range.contains(2010));
        assert!(range.contains(2025));
        assert!(!range.contains(2009));
        assert!(!range.contains(2030));
    }

    #[test]
    fn test_settings_defaults() {
        let s = settings(&[("FUNDING_RAG_DATA_DIR", "/tmp/frag")]).unwrap();
        assert_eq!(s.data_dir, PathBuf::from("/tmp/frag"));
        assert_eq!(s.index_backend, IndexBackend::Lance);
        assert_eq!(s.embedder, EmbedderKind::Hash);
        assert_eq!(s.ollama_url.as_str(), "http://localhost:11434/");
        assert_eq!(s.ollama_model, DEFAULT_OLLAMA_MODEL);
        assert!(s.generation_enabled);
        assert_eq!(s.records_db_path(), PathBuf::from("/tmp/frag/records.db"));
    }

    #[test]
    fn test_settings_api_key_selects_gemini() {
        let s = settings(&[("GEMINI_API_KEY", "k")]).unwrap();
        assert_eq!(s.embedder, EmbedderKind::Gemini);

        let s = settings(&[("GEMINI_API_KEY", "k"), ("FUNDING_RAG_EMBEDDER", "hash")]).unwrap();
        assert_eq!(s.embedder, EmbedderKind::Hash);
    }

    #[test]
    fn test_settings_overrides() {
        let s = settings(&[
            ("FUNDING_RAG_INDEX", "memory"),
            ("FUNDING_RAG_GENERATION", "off"),
            ("FUNDING_RAG_GENERATION_LANGS", "en, hi"),
            ("FUNDING_RAG_THRESHOLD", "0.4"),
        ])
        .unwrap();
        assert_eq!(s.index_backend, IndexBackend::Memory);
        assert!(!s.generation_enabled);
        assert_eq!(
            s.pipeline.generation_languages,
            vec![Language::En, Language::Hi]
        );
        assert_eq!(s.pipeline.similarity_threshold, 0.4);
    }

    #[test]
    fn test_settings_rejects_invalid_values() {
        assert!(settings(&[("FUNDING_RAG_INDEX", "qdrant")]).is_err());
        assert!(settings(&[("OLLAMA_BASE_URL", "not a url")]).is_err());
        assert!(settings(&[("OLLAMA_BASE_URL", "ftp://host")]).is_err());
        assert!(settings(&[("FUNDING_RAG_THRESHOLD", "high")]).is_err());
        assert!(settings(&[("FUNDING_RAG_THRESHOLD", "1.5")]).is_err());
        assert!(settings(&[("FUNDING_RAG_GENERATION_LANGS", "en,xx")]).is_err());
    }
}
