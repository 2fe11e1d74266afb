//! Synthesis 모듈 - 답변 합성
//!
//! - templates: 의도별 현지화 템플릿 (순수 함수)
//! - prompt: 생성 프롬프트 구성 및 출력 후처리
//!
//! 집계/비교 통계는 항상 Record Store 직접 필터로 계산하고,
//! 출처는 같은 일치 집합에 속한 후보에서만 고릅니다.
//! 생성 분기가 실패하면 같은 후보로 템플릿 답변을 만듭니다.

pub mod prompt;
pub mod templates;

use std::collections::{BTreeMap, HashMap, HashSet};
use std::sync::Arc;

use serde::Serialize;

use crate::cache::Transliterator;
use crate::config::PipelineConfig;
use crate::generation::{generate_with_timeout, GenerateOptions, Generator};
use crate::lang::aliases::state_of_city;
use crate::lang::{fill, Language};
use crate::query::{ComparisonAxis, CoverageGap, FilterSpec, Intent, QueryPlan};
use crate::records::{format_amount, summarize, FundingRecord, RecordFilter, RecordStore};
use crate::retrieval::Candidate;
use templates::{
    CompanyProfile, ComparisonSide, LeadingCompany, ListItem, ListSummary, RoundLine,
};

// ============================================================================
// Types
// ============================================================================

/// 답변 생성 경로
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AnswerOrigin {
    Template,
    Generated,
    /// 범위 밖 / 결과 없음
    Terminal,
}

/// 인용 출처
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SourceRecord {
    pub company: String,
    /// 표시용 금액
    pub amount: String,
    pub amount_value: f64,
    pub sector: String,
    pub city: Option<String>,
    pub state: Option<String>,
    pub investors: Option<String>,
    pub date: Option<String>,
    pub year: Option<i32>,
    /// 회사 조회에서 직접 인용한 레코드는 점수 없음
    #[serde(skip_serializing_if = "Option::is_none")]
    pub score: Option<f32>,
    #[serde(skip)]
    pub row_id: u64,
}

impl SourceRecord {
    pub fn from_candidate(candidate: &Candidate) -> Self {
        let m = &candidate.metadata;
        Self {
            company: m.company.clone(),
            amount: format_amount(m.amount),
            amount_value: m.amount,
            sector: m.sector.clone(),
            city: m.city.clone(),
            state: m.state.clone(),
            investors: m.investors.clone(),
            date: m.date.clone(),
            year: m.year,
            score: Some(candidate.score),
            row_id: m.row_id,
        }
    }

    pub fn from_record(record: &FundingRecord) -> Self {
        Self {
            company: record.company_name().to_string(),
            amount: format_amount(record.amount),
            amount_value: record.amount,
            sector: record.sector.clone().unwrap_or_default(),
            city: record.city.clone(),
            state: record.state.clone(),
            investors: record.investors_display(),
            date: record.date.map(|d| d.format("%Y-%m-%d").to_string()),
            year: record.year,
            score: None,
            row_id: record.row_id,
        }
    }
}

/// 최종 답변
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Answer {
    pub answer: String,
    pub sources: Vec<SourceRecord>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub intent: Option<Intent>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filter: Option<FilterSpec>,
    pub origin: AnswerOrigin,
}

impl Answer {
    pub fn terminal(text: String) -> Self {
        Self {
            answer: text,
            sources: Vec::new(),
            intent: None,
            filter: None,
            origin: AnswerOrigin::Terminal,
        }
    }

    fn new(text: String, sources: Vec<SourceRecord>, origin: AnswerOrigin) -> Self {
        Self {
            answer: text,
            sources,
            intent: None,
            filter: None,
            origin,
        }
    }

    /// 관측용 의도/필터 첨부
    pub fn with_plan(mut self, plan: &QueryPlan) -> Self {
        self.intent = Some(plan.intent);
        self.filter = Some(plan.filter.clone());
        self
    }
}

// ============================================================================
// Synthesizer
// ============================================================================

pub struct Synthesizer {
    store: Arc<RecordStore>,
    transliterator: Transliterator,
    generator: Option<Arc<dyn Generator>>,
    config: PipelineConfig,
}

impl Synthesizer {
    pub fn new(
        store: Arc<RecordStore>,
        transliterator: Transliterator,
        generator: Option<Arc<dyn Generator>>,
        config: PipelineConfig,
    ) -> Self {
        Self {
            store,
            transliterator,
            generator,
            config,
        }
    }

    async fn local(&self, name: &str, language: Language) -> String {
        self.transliterator.localize(name, language).await
    }

    async fn local_opt(&self, name: Option<&str>, language: Language) -> Option<String> {
        match name {
            Some(name) => Some(self.local(name, language).await),
            None => None,
        }
    }

    // ------------------------------------------------------------------------
    // Terminal answers
    // ------------------------------------------------------------------------

    pub async fn out_of_coverage(&self, gap: &CoverageGap, language: Language) -> Answer {
        let pack = language.pack();
        let text = match gap {
            CoverageGap::YearOutOfRange { year, min, max } => templates::out_of_range(
                pack,
                *year,
                crate::config::YearRange {
                    min: *min,
                    max: *max,
                },
            ),
            CoverageGap::UnsupportedSector { sector, supported } => {
                let mut names = Vec::with_capacity(supported.len());
                for name in supported {
                    names.push(self.local(name, language).await);
                }
                templates::unsupported_sector(pack, &self.local(sector, language).await, &names)
            }
        };
        Answer::terminal(text)
    }

    pub fn no_results(&self, language: Language) -> Answer {
        Answer::terminal(templates::no_results(language.pack(), self.config.coverage))
    }

    // ------------------------------------------------------------------------
    // Dispatch
    // ------------------------------------------------------------------------

    /// 의도별 답변 합성
    ///
    /// # Arguments
    /// * `query` - 원본 질의
    /// * `plan` - 분석 결과
    /// * `ranked` - 순위가 매겨진 전체 후보 (잘리지 않음)
    /// * `language` - 답변 언어
    pub async fn synthesize(
        &self,
        query: &str,
        plan: &QueryPlan,
        ranked: &[Candidate],
        language: Language,
    ) -> Answer {
        let answer = match (plan.intent, &plan.comparison) {
            (Intent::Aggregation, _) => self.aggregation(&plan.filter, ranked, language).await,
            (Intent::Comparison, Some(axis)) => {
                self.comparison(&plan.filter, axis, ranked, language).await
            }
            (Intent::CompanyLookup, _) => return self.company_lookup(plan, language).await,
            _ => self.listing(query, plan, ranked, language).await,
        };
        answer.with_plan(plan)
    }

    /// 일치 집합에 속한 후보만 출처로 (순위 순서 유지)
    fn sources_within(&self, ranked: &[Candidate], rows: &HashSet<u64>) -> Vec<SourceRecord> {
        ranked
            .iter()
            .filter(|c| rows.contains(&c.row_id()))
            .take(self.config.max_sources)
            .map(SourceRecord::from_candidate)
            .collect()
    }

    /// 필터 범위 표시 ("Fintech • Bangalore • 2022")
    async fn scope(&self, filter: &FilterSpec, language: Language) -> String {
        let mut parts = Vec::new();
        for name in [&filter.company, &filter.sector, &filter.city, &filter.state]
            .into_iter()
            .flatten()
        {
            parts.push(self.local(name, language).await);
        }
        if let Some(year) = filter.year {
            parts.push(year.to_string());
        }
        parts.join(" • ")
    }

    // ------------------------------------------------------------------------
    // Aggregation
    // ------------------------------------------------------------------------

    async fn aggregation(
        &self,
        filter: &FilterSpec,
        ranked: &[Candidate],
        language: Language,
    ) -> Answer {
        let matched = self.store.filter(&filter.record_filter());
        if matched.is_empty() {
            return self.no_results(language);
        }

        let stats = summarize(matched.iter().copied());
        let rows: HashSet<u64> = matched.iter().map(|r| r.row_id).collect();

        let mut sectors = Vec::with_capacity(stats.top_sectors.len());
        for (sector, amount) in &stats.top_sectors {
            sectors.push((self.local(sector, language).await, *amount));
        }
        let scope = self.scope(filter, language).await;

        tracing::debug!(
            deals = stats.deal_count,
            total = stats.total_amount,
            "Aggregated direct filter"
        );
        Answer::new(
            templates::aggregation(language.pack(), &scope, &stats, &sectors),
            self.sources_within(ranked, &rows),
            AnswerOrigin::Template,
        )
    }

    // ------------------------------------------------------------------------
    // Comparison
    // ------------------------------------------------------------------------

    async fn comparison(
        &self,
        filter: &FilterSpec,
        axis: &ComparisonAxis,
        ranked: &[Candidate],
        language: Language,
    ) -> Answer {
        let base = filter.record_filter();
        let (filter_a, filter_b, label_a, label_b) = match axis {
            ComparisonAxis::Years(a, b) => (
                RecordFilter {
                    year: Some(*a),
                    ..base.clone()
                },
                RecordFilter {
                    year: Some(*b),
                    ..base
                },
                a.to_string(),
                b.to_string(),
            ),
            ComparisonAxis::Sectors(a, b) => (
                RecordFilter {
                    sector: Some(a.clone()),
                    ..base.clone()
                },
                RecordFilter {
                    sector: Some(b.clone()),
                    ..base
                },
                self.local(a, language).await,
                self.local(b, language).await,
            ),
        };

        let matched_a = self.store.filter(&filter_a);
        let matched_b = self.store.filter(&filter_b);
        if matched_a.is_empty() && matched_b.is_empty() {
            return self.no_results(language);
        }

        let side = |label: String, matched: &[&FundingRecord]| {
            let stats = summarize(matched.iter().copied());
            ComparisonSide {
                label,
                companies: stats.company_count,
                deals: stats.deal_count,
                total_amount: stats.total_amount,
            }
        };
        let a = side(label_a, &matched_a);
        let b = side(label_b, &matched_b);

        let rows: HashSet<u64> = matched_a
            .iter()
            .chain(matched_b.iter())
            .map(|r| r.row_id)
            .collect();

        Answer::new(
            templates::comparison(language.pack(), &a, &b),
            self.sources_within(ranked, &rows),
            AnswerOrigin::Template,
        )
    }

    // ------------------------------------------------------------------------
    // Company lookup
    // ------------------------------------------------------------------------

    /// 회사 조회 (검색 없이 Record Store에서 직접)
    pub async fn company_lookup(&self, plan: &QueryPlan, language: Language) -> Answer {
        let Some(name) = plan.filter.company.as_deref() else {
            return self.no_results(language).with_plan(plan);
        };

        let mut rounds = self.store.company_rounds(name);
        if rounds.is_empty() {
            return self.external_company(name, language).await.with_plan(plan);
        }

        let canonical = rounds[0].company_name().to_string();
        let total_amount: f64 = rounds.iter().map(|r| r.amount).sum();
        let round_count = rounds.len();
        let sector = primary_sector(&rounds);
        let location = rounds.iter().find_map(|r| {
            let city = r.city.as_deref()?;
            let state = r.state.as_deref().or_else(|| state_of_city(city));
            Some((city.to_string(), state.map(str::to_string)))
        });

        rounds.sort_by(|a, b| {
            b.amount
                .total_cmp(&a.amount)
                .then_with(|| a.row_id.cmp(&b.row_id))
        });
        rounds.truncate(self.config.max_sources);

        let location = match location {
            Some((city, state)) => {
                let mut text = self.local(&city, language).await;
                if let Some(state) = self.local_opt(state.as_deref(), language).await {
                    text.push_str(", ");
                    text.push_str(&state);
                }
                Some(text)
            }
            None => None,
        };

        let profile = CompanyProfile {
            name: self.local(&canonical, language).await,
            sector: self.local_opt(sector.as_deref(), language).await,
            total_amount,
            rounds: round_count,
            location,
            top_rounds: rounds
                .iter()
                .map(|r| RoundLine {
                    amount: r.amount,
                    year: r.year,
                    investors: r.investors_display(),
                })
                .collect(),
        };

        Answer::new(
            templates::company_profile(language.pack(), &profile),
            rounds.iter().map(|r| SourceRecord::from_record(r)).collect(),
            AnswerOrigin::Template,
        )
        .with_plan(plan)
    }

    /// 데이터셋 밖 회사: 생성 서비스 설명 + 범위 안내 (출처 없음)
    ///
    /// 생성된 설명은 캐시에 남겨 같은 회사를 다시 물으면 생성 서비스를 호출하지 않습니다.
    async fn external_company(&self, name: &str, language: Language) -> Answer {
        let pack = language.pack();
        let cache = self.transliterator.cache();
        let generated = match (cache.get_description(name, language), &self.generator) {
            (Some(cached), _) => Some(cached),
            (None, Some(generator)) => {
                let prompt = fill(pack.prompts.company_lookup, &[("company", name)]);
                match generate_with_timeout(
                    generator.as_ref(),
                    &prompt,
                    GenerateOptions::DESCRIPTION,
                    self.config.generation_timeout,
                )
                .await
                {
                    Ok(raw) => {
                        let description = prompt::post_process(&raw, language);
                        if let Some(description) = &description {
                            cache.insert_description(name, language, description).await;
                        }
                        description
                    }
                    Err(e) => {
                        tracing::warn!(error = %e, company = name, "Company description failed");
                        None
                    }
                }
            }
            (None, None) => None,
        };

        let origin = if generated.is_some() {
            AnswerOrigin::Generated
        } else {
            AnswerOrigin::Template
        };
        let description =
            generated.unwrap_or_else(|| pack.messages.generic_description.to_string());
        let display = self.local(name, language).await;

        Answer::new(
            templates::external_company(pack, &display, &description, self.config.coverage),
            Vec::new(),
            origin,
        )
    }

    // ------------------------------------------------------------------------
    // Ranked list / generic retrieval
    // ------------------------------------------------------------------------

    async fn listing(
        &self,
        query: &str,
        plan: &QueryPlan,
        ranked: &[Candidate],
        language: Language,
    ) -> Answer {
        if ranked.is_empty() {
            return self.no_results(language);
        }

        let summary = list_summary(ranked);
        let sources: Vec<SourceRecord> = ranked
            .iter()
            .take(self.config.max_sources)
            .map(SourceRecord::from_candidate)
            .collect();

        if let Some(text) = self.try_generate(query, ranked, summary, language).await {
            return Answer::new(text, sources, AnswerOrigin::Generated);
        }

        let limit = plan
            .filter
            .requested_count
            .unwrap_or(self.config.display_count);
        let pack = language.pack();

        let text = if plan.group_by_company {
            let groups = group_by_company(ranked);
            let mut items = Vec::new();
            for group in groups.iter().take(limit) {
                items.push(self.list_item(&group.item, language).await);
            }
            match groups.first() {
                Some(top) => {
                    let leader = LeadingCompany {
                        company: self.local(&top.leader.company, language).await,
                        ..top.leader.clone()
                    };
                    templates::grouped_listing(pack, summary, &leader, &items)
                }
                None => templates::listing(pack, summary, &items),
            }
        } else {
            let mut items = Vec::new();
            for candidate in ranked.iter().take(limit) {
                items.push(self.list_item(&ListItem::from(candidate), language).await);
            }
            templates::listing(pack, summary, &items)
        };

        Answer::new(text, sources, AnswerOrigin::Template)
    }

    async fn list_item(&self, item: &ListItem, language: Language) -> ListItem {
        ListItem {
            company: self.local(&item.company, language).await,
            sector: self.local_opt(item.sector.as_deref(), language).await,
            city: self.local_opt(item.city.as_deref(), language).await,
            ..item.clone()
        }
    }

    /// 생성 분기 (실패하면 None → 템플릿)
    async fn try_generate(
        &self,
        query: &str,
        ranked: &[Candidate],
        summary: ListSummary,
        language: Language,
    ) -> Option<String> {
        let generator = self.generator.as_ref()?;
        if !self.config.generates_for(language) {
            return None;
        }

        let prompt = prompt::build_prompt(query, ranked, summary, language, self.config.context_rows);
        match generate_with_timeout(
            generator.as_ref(),
            &prompt,
            GenerateOptions::ANSWER,
            self.config.generation_timeout,
        )
        .await
        {
            Ok(raw) => {
                let text = prompt::post_process(&raw, language);
                if text.is_none() {
                    tracing::warn!("Generated answer empty after post-processing, using template");
                }
                text
            }
            Err(e) => {
                tracing::warn!(error = %e, "Generation failed, using template");
                None
            }
        }
    }
}

// ============================================================================
// Helper Functions
// ============================================================================

impl From<&Candidate> for ListItem {
    fn from(candidate: &Candidate) -> Self {
        let m = &candidate.metadata;
        Self {
            company: m.company.clone(),
            amount: (m.amount > 0.0).then_some(m.amount),
            year: m.year,
            sector: Some(m.sector.clone()),
            city: m.city.clone(),
        }
    }
}

/// 고유 회사 수와 총액
fn list_summary(ranked: &[Candidate]) -> ListSummary {
    let companies: HashSet<String> = ranked
        .iter()
        .map(|c| c.metadata.company.to_lowercase())
        .collect();
    ListSummary {
        companies: companies.len(),
        total_amount: ranked.iter().map(Candidate::amount).sum(),
    }
}

/// 가장 많이 나타난 섹터 (동률이면 이름순 첫 번째)
fn primary_sector(rounds: &[&FundingRecord]) -> Option<String> {
    let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
    for sector in rounds.iter().filter_map(|r| r.sector.as_deref()) {
        *counts.entry(sector).or_default() += 1;
    }
    counts
        .into_iter()
        .max_by(|a, b| a.1.cmp(&b.1).then_with(|| b.0.cmp(a.0)))
        .map(|(sector, _)| sector.to_string())
}

struct CompanyGroup {
    item: ListItem,
    leader: LeadingCompany,
}

/// 회사별 합산 (총액 내림차순, 같으면 이름순)
fn group_by_company(ranked: &[Candidate]) -> Vec<CompanyGroup> {
    let mut order: Vec<String> = Vec::new();
    let mut groups: HashMap<String, CompanyGroup> = HashMap::new();

    for c in ranked {
        let m = &c.metadata;
        let key = m.company.to_lowercase();
        let group = groups.entry(key.clone()).or_insert_with(|| {
            order.push(key);
            CompanyGroup {
                item: ListItem {
                    company: m.company.clone(),
                    amount: None,
                    year: None,
                    sector: Some(m.sector.clone()),
                    city: m.city.clone(),
                },
                leader: LeadingCompany {
                    company: m.company.clone(),
                    total_amount: 0.0,
                    rounds: 0,
                    largest_round: 0.0,
                    largest_round_year: None,
                },
            }
        });

        group.leader.total_amount += m.amount;
        group.leader.rounds += 1;
        if m.amount > group.leader.largest_round {
            group.leader.largest_round = m.amount;
            group.leader.largest_round_year = m.year;
        }
    }

    let mut result: Vec<CompanyGroup> = order
        .into_iter()
        .filter_map(|key| groups.remove(&key))
        .map(|mut group| {
            let total = group.leader.total_amount;
            group.item.amount = (total > 0.0).then_some(total);
            group
        })
        .collect();
    result.sort_by(|a, b| {
        b.leader
            .total_amount
            .total_cmp(&a.leader.total_amount)
            .then_with(|| a.leader.company.cmp(&b.leader.company))
    });
    result
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::TranslationCache;
    use crate::generation::tests::ScriptedGenerator;
    use crate::index::tests::sample_store;
    use crate::index::DocumentMetadata;
    use crate::query::SortDirection;
    use std::time::Duration;

    fn synthesizer(generator: Option<Arc<dyn Generator>>) -> Synthesizer {
        let cache = Arc::new(TranslationCache::in_memory());
        cache.preload_aliases();
        let config = PipelineConfig::builder()
            .generation_timeout(Duration::from_millis(200))
            .build()
            .unwrap();
        Synthesizer::new(
            Arc::new(sample_store()),
            Transliterator::new(cache, None, Duration::from_millis(50)),
            generator,
            config,
        )
    }

    /// 저장소 레코드를 점수와 함께 후보로 변환
    fn candidates(store: &RecordStore, rows: &[u64]) -> Vec<Candidate> {
        rows.iter()
            .enumerate()
            .map(|(i, row)| Candidate {
                metadata: DocumentMetadata::from_record(store.get(*row).unwrap()).unwrap(),
                summary: String::new(),
                score: 0.9 - i as f32 * 0.05,
            })
            .collect()
    }

    fn plan(intent: Intent, filter: FilterSpec) -> QueryPlan {
        QueryPlan {
            intent,
            filter,
            comparison: None,
            group_by_company: false,
        }
    }

    #[tokio::test]
    async fn test_aggregation_totals_match_direct_filter() {
        let s = synthesizer(None);
        let store = sample_store();
        let filter = FilterSpec {
            sector: Some("Fintech".into()),
            ..Default::default()
        };
        let ranked = candidates(&store, &[0, 2, 1, 6]);
        let answer = s
            .synthesize("total fintech funding", &plan(Intent::Aggregation, filter.clone()), &ranked, Language::En)
            .await;

        let expected: f64 = store
            .filter(&filter.record_filter())
            .iter()
            .map(|r| r.amount)
            .sum();
        let expected_text = format!("(₹{} Cr)", crate::records::format_crores(expected));
        assert!(answer.answer.contains(&expected_text), "{}", answer.answer);
        assert!(answer.answer.contains("**Total Companies**: 4"));
        // Byju's(Edtech)는 일치 집합 밖
        assert!(answer.sources.iter().all(|s| s.sector == "Fintech"));
        assert_eq!(answer.sources.len(), 3);
        assert_eq!(answer.intent, Some(Intent::Aggregation));
    }

    #[tokio::test]
    async fn test_aggregation_empty_match_is_no_results() {
        let s = synthesizer(None);
        let filter = FilterSpec {
            sector: Some("Gaming".into()),
            ..Default::default()
        };
        let answer = s
            .synthesize("total gaming funding", &plan(Intent::Aggregation, filter), &[], Language::En)
            .await;
        assert!(answer.answer.starts_with("Sorry, no relevant information"));
        assert!(answer.sources.is_empty());
    }

    #[tokio::test]
    async fn test_year_comparison() {
        let s = synthesizer(None);
        let store = sample_store();
        let mut p = plan(Intent::Comparison, FilterSpec::default());
        p.comparison = Some(ComparisonAxis::Years(2021, 2022));
        let ranked = candidates(&store, &[3, 0, 2]);
        let answer = s.synthesize("compare 2021 and 2022", &p, &ranked, Language::En).await;

        assert!(answer.answer.contains("**Comparison: 2021 vs 2022**"));
        assert!(answer.answer.contains("**Growth**: "));
        // 2020년(Byju's)은 어느 쪽에도 속하지 않음
        let companies: Vec<&str> = answer.sources.iter().map(|s| s.company.as_str()).collect();
        assert_eq!(companies, vec!["Swiggy", "Razorpay"]);
    }

    #[tokio::test]
    async fn test_company_lookup_in_dataset() {
        let s = synthesizer(None);
        let filter = FilterSpec {
            company: Some("swiggy".into()),
            ..Default::default()
        };
        let answer = s
            .company_lookup(&plan(Intent::CompanyLookup, filter), Language::En)
            .await;
        assert!(answer.answer.starts_with("**Swiggy**"));
        assert!(answer.answer.contains("A Foodtech company"));
        assert_eq!(answer.sources.len(), 1);
        assert!(answer.sources[0].score.is_none());
    }

    #[tokio::test]
    async fn test_company_lookup_outside_dataset_falls_back() {
        let failing: Arc<dyn Generator> = Arc::new(ScriptedGenerator::failing());
        let s = synthesizer(Some(failing));
        let filter = FilterSpec {
            company: Some("Zepto".into()),
            ..Default::default()
        };
        let answer = s
            .company_lookup(&plan(Intent::CompanyLookup, filter), Language::En)
            .await;
        assert!(answer.answer.contains("A startup company"));
        assert!(answer.answer.contains("not present in our funding database"));
        assert!(answer.sources.is_empty());
        assert_eq!(answer.origin, AnswerOrigin::Template);
    }

    #[tokio::test]
    async fn test_company_lookup_outside_dataset_generated() {
        let generator: Arc<dyn Generator> =
            Arc::new(ScriptedGenerator::replying("Zepto is a quick-commerce grocery delivery startup."));
        let s = synthesizer(Some(generator));
        let filter = FilterSpec {
            company: Some("Zepto".into()),
            ..Default::default()
        };
        let answer = s
            .company_lookup(&plan(Intent::CompanyLookup, filter), Language::En)
            .await;
        assert!(answer.answer.contains("quick-commerce"));
        assert_eq!(answer.origin, AnswerOrigin::Generated);
    }

    #[tokio::test]
    async fn test_company_description_cached_across_lookups() {
        let scripted = Arc::new(ScriptedGenerator::replying(
            "Zepto is a quick-commerce grocery delivery startup.",
        ));
        let generator: Arc<dyn Generator> = scripted.clone();
        let s = synthesizer(Some(generator));
        let filter = FilterSpec {
            company: Some("Zepto".into()),
            ..Default::default()
        };

        let first = s
            .company_lookup(&plan(Intent::CompanyLookup, filter.clone()), Language::En)
            .await;
        let second = s
            .company_lookup(&plan(Intent::CompanyLookup, filter), Language::En)
            .await;

        assert_eq!(scripted.calls(), 1);
        assert_eq!(first.answer, second.answer);
        assert_eq!(second.origin, AnswerOrigin::Generated);
    }

    #[tokio::test]
    async fn test_listing_template() {
        let s = synthesizer(None);
        let store = sample_store();
        let filter = FilterSpec {
            requested_count: Some(2),
            sort: SortDirection::HighestAmount,
            ..Default::default()
        };
        let ranked = candidates(&store, &[3, 6, 1, 2]);
        let answer = s
            .synthesize("top 2", &plan(Intent::RankedList, filter), &ranked, Language::En)
            .await;

        assert!(answer.answer.starts_with("**Total 4 companies"));
        assert!(answer.answer.contains("1. **Swiggy** • ₹500 Cr • 2021 • Foodtech • Bangalore"));
        assert!(answer.answer.contains("2. **PhonePe**"));
        assert!(!answer.answer.contains("3. "));
        assert_eq!(answer.sources.len(), 4);
        assert_eq!(answer.origin, AnswerOrigin::Template);
    }

    #[tokio::test]
    async fn test_listing_generation_failure_matches_template() {
        let store = sample_store();
        let ranked = candidates(&store, &[0, 1, 6]);
        let p = plan(Intent::GenericRetrieval, FilterSpec::default());

        let failing: Arc<dyn Generator> = Arc::new(ScriptedGenerator::failing());
        let with_failing = synthesizer(Some(failing))
            .synthesize("fintech", &p, &ranked, Language::En)
            .await;
        let template_only = synthesizer(None)
            .synthesize("fintech", &p, &ranked, Language::En)
            .await;

        assert_eq!(with_failing, template_only);
    }

    #[tokio::test]
    async fn test_listing_generated_branch() {
        let store = sample_store();
        let ranked = candidates(&store, &[0, 1]);
        let p = plan(Intent::GenericRetrieval, FilterSpec::default());

        let generator: Arc<dyn Generator> = Arc::new(ScriptedGenerator::replying(
            "Total 2 companies.\n1. Razorpay • Unknown\n2. Cred • ₹215 Cr",
        ));
        let answer = synthesizer(Some(generator))
            .synthesize("fintech", &p, &ranked, Language::En)
            .await;
        assert_eq!(answer.origin, AnswerOrigin::Generated);
        assert!(!answer.answer.to_lowercase().contains("unknown"));
        assert_eq!(answer.sources.len(), 2);
    }

    #[tokio::test]
    async fn test_generation_skipped_for_other_languages() {
        let store = sample_store();
        let ranked = candidates(&store, &[0]);
        let generator = Arc::new(ScriptedGenerator::replying("anything"));
        let dyn_generator: Arc<dyn Generator> = generator.clone();
        let answer = synthesizer(Some(dyn_generator))
            .synthesize(
                "फिनटेक",
                &plan(Intent::GenericRetrieval, FilterSpec::default()),
                &ranked,
                Language::Hi,
            )
            .await;
        assert_eq!(answer.origin, AnswerOrigin::Template);
        assert_eq!(generator.calls(), 0);
        assert!(answer.answer.contains("फिनटेक"));
    }

    #[tokio::test]
    async fn test_grouped_listing() {
        let store = sample_store();
        let ranked = candidates(&store, &[3, 6, 1, 0]);
        let mut p = plan(Intent::RankedList, FilterSpec::default());
        p.group_by_company = true;
        let answer = synthesizer(None)
            .synthesize("most funded", &p, &ranked, Language::En)
            .await;
        assert!(answer.answer.contains("**Most Funded Company**: Swiggy"));
        assert!(answer.answer.contains("- Largest Round: ₹500 Cr (2021)"));
    }

    #[tokio::test]
    async fn test_out_of_coverage_answer() {
        let answer = synthesizer(None)
            .out_of_coverage(
                &CoverageGap::YearOutOfRange {
                    year: 2030,
                    min: 2010,
                    max: 2025,
                },
                Language::En,
            )
            .await;
        assert!(answer.answer.contains("Data for 2030 is not available"));
        assert!(answer.sources.is_empty());
        assert_eq!(answer.origin, AnswerOrigin::Terminal);
    }

    #[test]
    fn test_primary_sector_tie_breaks_by_name() {
        let store = sample_store();
        let rounds: Vec<&FundingRecord> = vec![store.get(0).unwrap(), store.get(2).unwrap()];
        assert_eq!(primary_sector(&rounds).as_deref(), Some("Edtech"));
    }
}
