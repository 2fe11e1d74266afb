//! Pipeline 모듈 - 질의 처리 오케스트레이션
//!
//! 검증 → 분석 → (회사 조회 | 검색 → 순위 → 합성)
//!
//! `Context`는 한 번 만들어진 뒤 변경되지 않으며 `Arc`로 공유됩니다.

use std::sync::{Arc, OnceLock};
use std::time::Instant;

use anyhow::{bail, Context as _, Result};
use serde::Deserialize;
use tracing::Instrument;
use uuid::Uuid;

use crate::cache::{TranslationCache, Transliterator};
use crate::config::{IndexBackend, PipelineConfig, Settings};
use crate::embedding::{create_embedder, EmbeddingProvider};
use crate::error::PipelineError;
use crate::generation::{Generator, OllamaGenerator};
use crate::index::{build_index, InMemoryIndex, LanceIndex, VectorIndex};
use crate::lang::Language;
use crate::query::{Analysis, Intent, QueryAnalyzer};
use crate::ranking::rank;
use crate::records::{RecordDb, RecordStore};
use crate::retrieval::Retriever;
use crate::synthesis::{Answer, Synthesizer};

// ============================================================================
// Request
// ============================================================================

/// serde 기반 호출자용 요청
#[derive(Debug, Clone, Deserialize)]
pub struct AnswerRequest {
    pub query: String,
    #[serde(default = "default_language")]
    pub language: String,
}

fn default_language() -> String {
    Language::En.tag().to_string()
}

// ============================================================================
// Context
// ============================================================================

/// 설정된 인덱스 백엔드 열기
pub async fn open_index(settings: &Settings) -> Result<Arc<dyn VectorIndex>> {
    let index: Arc<dyn VectorIndex> = match settings.index_backend {
        IndexBackend::Lance => Arc::new(LanceIndex::open(&settings.lance_path()).await?),
        IndexBackend::Memory => Arc::new(InMemoryIndex::open(&settings.snapshot_path())?),
    };
    Ok(index)
}

/// 요청 간 공유되는 불변 상태
pub struct Context {
    store: Arc<RecordStore>,
    analyzer: QueryAnalyzer,
    retriever: Retriever,
    synthesizer: Synthesizer,
    config: PipelineConfig,
    documents: usize,
}

impl Context {
    /// 설정에서 컨텍스트 부트스트랩
    ///
    /// 1. 레코드 스냅샷 열기
    /// 2. 임베딩 제공자 + 인덱스 백엔드 생성
    /// 3. 인덱스 재사용 또는 빌드
    /// 4. 번역 캐시 열기
    /// 5. 생성 서비스 연결 (활성화된 경우)
    pub async fn from_settings(settings: &Settings) -> Result<Self> {
        let db = RecordDb::open(&settings.records_db_path())?;
        let records = db.load_all()?;
        if records.is_empty() {
            bail!(
                "No funding records in {}. Run 'funding-rag ingest <csv>' first",
                db.db_path().display()
            );
        }
        let store = RecordStore::new(records);

        let embedder = create_embedder(settings.embedder)?;
        let index = open_index(settings).await?;

        let cache = Arc::new(TranslationCache::open(&settings.translation_cache_path()));
        cache.preload_aliases();

        let generator: Option<Arc<dyn Generator>> = if settings.generation_enabled {
            let ollama = OllamaGenerator::new(&settings.ollama_url, settings.ollama_model.clone())
                .context("Failed to configure generation service")?;
            tracing::info!("Generation service: {}", ollama.endpoint());
            Some(Arc::new(ollama))
        } else {
            None
        };

        Self::assemble(
            store,
            embedder,
            index,
            cache,
            generator,
            settings.pipeline.clone(),
        )
        .await
    }

    /// 준비된 구성 요소로 컨텍스트 조립 (필요하면 인덱스 빌드)
    pub async fn assemble(
        store: RecordStore,
        embedder: Arc<dyn EmbeddingProvider>,
        index: Arc<dyn VectorIndex>,
        cache: Arc<TranslationCache>,
        generator: Option<Arc<dyn Generator>>,
        config: PipelineConfig,
    ) -> Result<Self> {
        if store.is_empty() {
            bail!("Cannot build a pipeline context from an empty record store");
        }

        let outcome = build_index(&store, embedder.as_ref(), index.as_ref(), false).await?;
        if outcome.documents() == 0 {
            bail!("Index is empty: no record has both a company and a sector");
        }
        tracing::info!(
            records = store.len(),
            documents = outcome.documents(),
            embedder = embedder.name(),
            index = index.name(),
            "Pipeline context ready"
        );

        let store = Arc::new(store);
        let analyzer = QueryAnalyzer::new(store.vocabulary().clone(), config.coverage);
        let retriever = Retriever::new(embedder, index, &config);
        let transliterator =
            Transliterator::new(cache, generator.clone(), config.transliteration_timeout);
        let synthesizer = Synthesizer::new(store.clone(), transliterator, generator, config.clone());

        Ok(Self {
            store,
            analyzer,
            retriever,
            synthesizer,
            config,
            documents: outcome.documents(),
        })
    }

    pub fn store(&self) -> &RecordStore {
        &self.store
    }

    pub fn analyzer(&self) -> &QueryAnalyzer {
        &self.analyzer
    }

    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    /// 인덱싱된 문서 수
    pub fn documents(&self) -> usize {
        self.documents
    }

    /// 검증을 통과한 질의 처리
    async fn run(&self, query: &str, language: Language) -> Answer {
        let plan = match self.analyzer.analyze(query, language) {
            Analysis::OutOfCoverage(gap) => {
                tracing::debug!(?gap, "Query outside dataset coverage");
                return self.synthesizer.out_of_coverage(&gap, language).await;
            }
            Analysis::Plan(plan) => plan,
        };
        tracing::debug!(intent = %plan.intent, filter = ?plan.filter, "Analyzed query");

        if plan.intent == Intent::CompanyLookup {
            return self.synthesizer.company_lookup(&plan, language).await;
        }

        // 집계/비교 통계는 직접 필터로 계산하므로 후보가 없어도 합성 (출처만 비게 됨)
        let store_backed = matches!(plan.intent, Intent::Aggregation | Intent::Comparison);
        let candidates = match self.retriever.retrieve(query, &plan.filter).await {
            Ok(candidates) => candidates,
            Err(e) if store_backed => {
                tracing::warn!(error = %e, "Retrieval failed, answering from record store");
                Vec::new()
            }
            Err(e) => {
                tracing::error!(error = %e, "Retrieval failed");
                return self.synthesizer.no_results(language).with_plan(&plan);
            }
        };
        if candidates.is_empty() && !store_backed {
            return self.synthesizer.no_results(language).with_plan(&plan);
        }

        let ranked = rank(candidates, &plan.filter, plan.intent);
        self.synthesizer
            .synthesize(query, &plan, &ranked, language)
            .await
    }
}

// ============================================================================
// Pipeline
// ============================================================================

/// 라이브러리 경계
///
/// 컨텍스트는 한 번만 설치할 수 있으며, 설치 전 요청은 `NotReady`입니다.
#[derive(Default)]
pub struct Pipeline {
    context: OnceLock<Arc<Context>>,
}

impl Pipeline {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_context(context: Arc<Context>) -> Self {
        let pipeline = Self::new();
        let _ = pipeline.context.set(context);
        pipeline
    }

    /// 컨텍스트 설치 (이미 설치되어 있으면 전달된 컨텍스트를 돌려줌)
    pub fn install(&self, context: Arc<Context>) -> Result<(), Arc<Context>> {
        self.context.set(context)
    }

    pub fn context(&self) -> Option<&Arc<Context>> {
        self.context.get()
    }

    pub fn is_ready(&self) -> bool {
        self.context.get().is_some()
    }

    /// 질의에 답변
    ///
    /// # Arguments
    /// * `query` - 사용자 질의 (공백 제외 1자 이상)
    /// * `language` - 언어 태그 (빈 문자열은 `en`)
    pub async fn answer(&self, query: &str, language: &str) -> Result<Answer, PipelineError> {
        let request_id = Uuid::new_v4();
        let span = tracing::info_span!("answer", %request_id, language = %language);
        self.answer_inner(query, language).instrument(span).await
    }

    pub async fn handle(&self, request: AnswerRequest) -> Result<Answer, PipelineError> {
        self.answer(&request.query, &request.language).await
    }

    async fn answer_inner(&self, query: &str, language: &str) -> Result<Answer, PipelineError> {
        let started = Instant::now();
        let (query, language) = self.validate(query, language)?;
        let context = self.context.get().ok_or(PipelineError::NotReady)?;

        let answer = context.run(query, language).await;

        let intent = answer
            .intent
            .map_or_else(|| "none".to_string(), |i| i.to_string());
        tracing::info!(
            intent = %intent,
            sources = answer.sources.len(),
            origin = ?answer.origin,
            elapsed_ms = started.elapsed().as_millis() as u64,
            "Answered query"
        );
        Ok(answer)
    }

    fn validate<'q>(
        &self,
        query: &'q str,
        language: &str,
    ) -> Result<(&'q str, Language), PipelineError> {
        let language: Language = language
            .parse()
            .map_err(|e: crate::lang::UnsupportedLanguage| PipelineError::Validation(e.to_string()))?;

        let query = query.trim();
        if query.is_empty() {
            return Err(PipelineError::Validation("query is empty".into()));
        }

        let max_chars = self
            .context
            .get()
            .map(|c| c.config.max_query_chars)
            .unwrap_or_else(|| PipelineConfig::default().max_query_chars);
        let chars = query.chars().count();
        if chars > max_chars {
            return Err(PipelineError::Validation(format!(
                "query is {} characters, limit is {}",
                chars, max_chars
            )));
        }

        Ok((query, language))
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::embedding::HashEmbedding;
    use crate::generation::tests::ScriptedGenerator;
    use crate::records::read_records;
    use crate::synthesis::AnswerOrigin;

    const FIXTURE: &str = include_str!("../../data/sample_funding.csv");

    async fn context(generator: Option<Arc<dyn Generator>>) -> Arc<Context> {
        let records = read_records(FIXTURE.as_bytes()).unwrap();
        let cache = Arc::new(TranslationCache::in_memory());
        cache.preload_aliases();
        let config = PipelineConfig::builder()
            .generation_timeout(std::time::Duration::from_millis(200))
            .build()
            .unwrap();
        Arc::new(
            Context::assemble(
                RecordStore::new(records),
                Arc::new(HashEmbedding::default()),
                Arc::new(InMemoryIndex::new()),
                cache,
                generator,
                config,
            )
            .await
            .unwrap(),
        )
    }

    async fn pipeline() -> Pipeline {
        Pipeline::with_context(context(None).await)
    }

    #[tokio::test]
    async fn test_fintech_bangalore_2022() {
        let pipeline = pipeline().await;
        let answer = pipeline
            .answer("fintech startups in Bangalore 2022", "en")
            .await
            .unwrap();

        assert!(!answer.sources.is_empty());
        assert!(answer.sources.len() <= 5);
        for source in &answer.sources {
            assert_eq!(source.sector, "Fintech");
            assert_eq!(source.city.as_deref(), Some("Bangalore"));
            assert_eq!(source.year, Some(2022));
            assert!(source.score.unwrap() > 0.25);
        }
    }

    #[tokio::test]
    async fn test_out_of_range_year() {
        let pipeline = pipeline().await;
        let answer = pipeline.answer("2030 funding", "en").await.unwrap();
        assert!(answer.answer.contains("2010-2025"));
        assert!(answer.answer.contains("2030"));
        assert!(answer.sources.is_empty());
        assert_eq!(answer.origin, AnswerOrigin::Terminal);
    }

    #[tokio::test]
    async fn test_year_comparison() {
        let pipeline = pipeline().await;
        let answer = pipeline
            .answer("Compare 2020 and 2021 funding", "en")
            .await
            .unwrap();
        assert_eq!(answer.intent, Some(Intent::Comparison));
        assert!(answer.answer.contains("**Comparison: 2020 vs 2021**"));
        for source in &answer.sources {
            assert!(matches!(source.year, Some(2020) | Some(2021)));
        }
    }

    #[tokio::test]
    async fn test_failing_generator_matches_template() {
        let failing: Arc<dyn Generator> = Arc::new(ScriptedGenerator::failing());
        let with_failing = Pipeline::with_context(context(Some(failing)).await);
        let template_only = pipeline().await;

        let query = "fintech startups in Bangalore 2022";
        let a = with_failing.answer(query, "en").await.unwrap();
        let b = template_only.answer(query, "en").await.unwrap();
        assert_eq!(a.answer, b.answer);
        assert_eq!(a.sources, b.sources);
        assert_eq!(a.origin, AnswerOrigin::Template);
    }

    #[tokio::test]
    async fn test_company_lookup_skips_retrieval() {
        let pipeline = pipeline().await;
        let answer = pipeline.answer("Tell me about Meesho", "en").await.unwrap();
        assert_eq!(answer.intent, Some(Intent::CompanyLookup));
        assert!(answer.answer.contains("- Number of Rounds: 2"));
        assert_eq!(answer.sources.len(), 2);
        assert!(answer.sources.iter().all(|s| s.score.is_none()));
    }

    #[tokio::test]
    async fn test_aggregation_matches_store_total() {
        let pipeline = pipeline().await;
        let answer = pipeline
            .answer("What is the total funding for fintech in 2022?", "en")
            .await
            .unwrap();
        assert_eq!(answer.intent, Some(Intent::Aggregation));

        let context = pipeline.context().unwrap();
        let expected: f64 = context
            .store()
            .records()
            .iter()
            .filter(|r| r.sector.as_deref() == Some("Fintech") && r.year == Some(2022))
            .map(|r| r.amount)
            .sum();
        let expected = format!("(₹{} Cr)", crate::records::format_crores(expected));
        assert!(answer.answer.contains(&expected), "{}", answer.answer);
    }

    #[tokio::test]
    async fn test_native_aggregation_without_candidates() {
        // 높은 임계값으로 검색 후보를 모두 걸러도 집계는 저장소에서 계산
        let records = read_records(FIXTURE.as_bytes()).unwrap();
        let config = PipelineConfig::builder()
            .similarity_threshold(0.99)
            .build()
            .unwrap();
        let cache = Arc::new(TranslationCache::in_memory());
        cache.preload_aliases();
        let context = Context::assemble(
            RecordStore::new(records),
            Arc::new(HashEmbedding::default()),
            Arc::new(InMemoryIndex::new()),
            cache,
            None,
            config,
        )
        .await
        .unwrap();
        let pipeline = Pipeline::with_context(Arc::new(context));

        let answer = pipeline
            .answer("2021 में मुंबई में कुल फंडिंग कितनी थी", "hi")
            .await
            .unwrap();
        assert_eq!(answer.intent, Some(Intent::Aggregation));
        assert_eq!(answer.origin, AnswerOrigin::Template);
        assert!(answer.sources.is_empty());

        let store = pipeline.context().unwrap().store();
        let expected: f64 = store
            .records()
            .iter()
            .filter(|r| r.city.as_deref() == Some("Mumbai") && r.year == Some(2021))
            .map(|r| r.amount)
            .sum();
        assert!(expected > 0.0);
        let expected = format!("₹{} ", crate::records::format_crores(expected));
        assert!(answer.answer.contains(&expected), "{}", answer.answer);
    }

    #[tokio::test]
    async fn test_hindi_sector_alias() {
        let pipeline = pipeline().await;
        let answer = pipeline.answer("2021 में फिनटेक कंपनियां", "hi").await.unwrap();
        let filter = answer.filter.unwrap();
        assert_eq!(filter.sector.as_deref(), Some("Fintech"));
        assert_eq!(filter.year, Some(2021));
    }

    #[tokio::test]
    async fn test_validation_errors() {
        let pipeline = pipeline().await;
        assert!(matches!(
            pipeline.answer("   ", "en").await,
            Err(PipelineError::Validation(_))
        ));
        assert!(matches!(
            pipeline.answer(&"a".repeat(501), "en").await,
            Err(PipelineError::Validation(_))
        ));
        assert!(matches!(
            pipeline.answer("fintech", "fr").await,
            Err(PipelineError::Validation(_))
        ));
        // 빈 언어는 영어
        assert!(pipeline.answer("fintech", "").await.is_ok());
    }

    #[tokio::test]
    async fn test_not_ready() {
        let pipeline = Pipeline::new();
        assert_eq!(
            pipeline.answer("fintech", "en").await.unwrap_err(),
            PipelineError::NotReady
        );
    }

    #[tokio::test]
    async fn test_install_once() {
        let pipeline = Pipeline::new();
        let ctx = context(None).await;
        assert!(pipeline.install(ctx.clone()).is_ok());
        assert!(pipeline.install(ctx).is_err());
        assert!(pipeline.is_ready());
    }

    #[tokio::test]
    async fn test_handle_defaults_to_english() {
        let pipeline = pipeline().await;
        let request: AnswerRequest = serde_json::from_str(r#"{"query": "2030 funding"}"#).unwrap();
        assert_eq!(request.language, "en");
        let answer = pipeline.handle(request).await.unwrap();
        assert!(answer.sources.is_empty());
    }

    #[tokio::test]
    async fn test_empty_store_rejected() {
        let result = Context::assemble(
            RecordStore::new(Vec::new()),
            Arc::new(HashEmbedding::default()),
            Arc::new(InMemoryIndex::new()),
            Arc::new(TranslationCache::in_memory()),
            None,
            PipelineConfig::default(),
        )
        .await;
        assert!(result.is_err());
    }
}
