//! Query 모듈 - 질의 분석기
//!
//! 질의 텍스트와 언어 태그로부터 의도(Intent)와 구조화된 필터(FilterSpec)를 추출합니다.
//!
//! - rules: 우선순위 의도 분류 규칙 테이블
//! - extract: 별칭 매칭 및 필터 추출

pub mod extract;
pub mod rules;

use std::fmt;

use serde::Serialize;

use crate::config::YearRange;
use crate::index::MetadataFilter;
use crate::lang::Language;
use crate::records::{RecordFilter, Vocabulary};
use rules::Signals;

// ============================================================================
// Types
// ============================================================================

/// 질의 의도
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Intent {
    Aggregation,
    Comparison,
    RankedList,
    CompanyLookup,
    GenericRetrieval,
}

impl fmt::Display for Intent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Intent::Aggregation => "aggregation",
            Intent::Comparison => "comparison",
            Intent::RankedList => "ranked_list",
            Intent::CompanyLookup => "company_lookup",
            Intent::GenericRetrieval => "generic_retrieval",
        };
        f.write_str(name)
    }
}

/// 정렬 방향
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SortDirection {
    #[default]
    Similarity,
    HighestAmount,
    LowestAmount,
    MostRecent,
}

/// 구조화된 질의 필터 (모든 필드는 독립적으로 선택적)
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct FilterSpec {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sector: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub year: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_amount: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_amount: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub requested_count: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    pub sort: SortDirection,
}

impl FilterSpec {
    /// 인덱스 수준 등호 필터
    pub fn metadata_filter(&self) -> MetadataFilter {
        MetadataFilter {
            sector: self.sector.clone(),
            city: self.city.clone(),
            state: self.state.clone(),
            year: self.year,
            company: self.company.clone(),
        }
    }

    /// Record Store 직접 필터 (금액 범위 포함)
    pub fn record_filter(&self) -> RecordFilter {
        RecordFilter {
            sector: self.sector.clone(),
            city: self.city.clone(),
            state: self.state.clone(),
            year: self.year,
            company: self.company.clone(),
            min_amount: self.min_amount,
            max_amount: self.max_amount,
        }
    }

    pub fn has_amount_bounds(&self) -> bool {
        self.min_amount.is_some() || self.max_amount.is_some()
    }

    /// 금액 범위 검사 (범위가 있으면 금액 0은 제외)
    pub fn amount_in_bounds(&self, amount: f64) -> bool {
        if !self.has_amount_bounds() {
            return true;
        }
        amount > 0.0
            && self.min_amount.map_or(true, |min| amount >= min)
            && self.max_amount.map_or(true, |max| amount <= max)
    }
}

/// 비교 축
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ComparisonAxis {
    Years(i32, i32),
    Sectors(String, String),
}

/// 분석 결과 계획
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QueryPlan {
    pub intent: Intent,
    pub filter: FilterSpec,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comparison: Option<ComparisonAxis>,
    /// 회사별 합산 (RankedList 전용)
    pub group_by_company: bool,
}

/// 데이터셋 범위 밖 질의
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CoverageGap {
    YearOutOfRange { year: i32, min: i32, max: i32 },
    UnsupportedSector { sector: String, supported: Vec<String> },
}

/// 분석 결과
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Analysis {
    Plan(QueryPlan),
    OutOfCoverage(CoverageGap),
}

// ============================================================================
// QueryAnalyzer
// ============================================================================

/// 질의 분석기
///
/// 인덱스 빌드 시점에 확정된 어휘를 보유하며 이후 변경되지 않습니다.
#[derive(Debug, Clone)]
pub struct QueryAnalyzer {
    vocabulary: Vocabulary,
    coverage: YearRange,
}

impl QueryAnalyzer {
    pub fn new(vocabulary: Vocabulary, coverage: YearRange) -> Self {
        Self {
            vocabulary,
            coverage,
        }
    }

    pub fn vocabulary(&self) -> &Vocabulary {
        &self.vocabulary
    }

    pub fn coverage(&self) -> YearRange {
        self.coverage
    }

    /// 언어 태그 문자열로 분석 (알 수 없는 태그는 영어 테이블)
    pub fn analyze_tag(&self, text: &str, tag: &str) -> Analysis {
        self.analyze(text, Language::from_tag(tag).unwrap_or_default())
    }

    /// 질의 분석
    ///
    /// # Arguments
    /// * `text` - 원본 질의
    /// * `language` - 호출자가 지정한 언어
    pub fn analyze(&self, text: &str, language: Language) -> Analysis {
        let lowered = text.to_lowercase();
        let vocab = &self.vocabulary;

        // 1. 범위 검사 (terminal)
        let years = extract::years(&lowered);
        if let Some(&year) = years.iter().find(|y| !self.coverage.contains(**y)) {
            return Analysis::OutOfCoverage(CoverageGap::YearOutOfRange {
                year,
                min: self.coverage.min,
                max: self.coverage.max,
            });
        }

        if let Some(sector) = extract::unsupported_sector(&lowered, language, vocab) {
            return Analysis::OutOfCoverage(CoverageGap::UnsupportedSector {
                sector,
                supported: vocab.sectors.iter().cloned().collect(),
            });
        }

        // 2. 필터 추출
        let sectors = extract::distinct_canonicals(&extract::sector_matches(&lowered, language, vocab));
        let cities = extract::city_matches(&lowered, language, vocab);
        let state = if cities.is_empty() {
            extract::state_matches(&lowered, language, vocab)
                .into_iter()
                .next()
                .map(|m| m.canonical)
        } else {
            None
        };
        let (min_amount, max_amount) = extract::amount_bounds(&lowered, language);
        let company = extract::company(text, &lowered, language, vocab);

        let mut distinct_years: Vec<i32> = Vec::new();
        for year in &years {
            if !distinct_years.contains(year) {
                distinct_years.push(*year);
            }
        }

        let mut filter = FilterSpec {
            sector: sectors.first().cloned(),
            city: cities.first().map(|m| m.canonical.clone()),
            state,
            year: distinct_years.first().copied(),
            min_amount,
            max_amount,
            requested_count: extract::requested_count(&lowered, language),
            company: None,
            sort: extract::sort_direction(&lowered, language),
        };

        let axis = match (distinct_years.as_slice(), sectors.as_slice()) {
            ([a, b, ..], _) => Some(ComparisonAxis::Years(*a, *b)),
            (_, [a, b, ..]) => Some(ComparisonAxis::Sectors(a.clone(), b.clone())),
            _ => None,
        };

        // 3. 의도 분류
        let intent = rules::classify(&Signals {
            text: &lowered,
            language,
            comparison_axis: axis.is_some(),
            company: company.is_some(),
        });

        let comparison = if intent == Intent::Comparison { axis } else { None };
        match &comparison {
            Some(ComparisonAxis::Years(..)) => filter.year = None,
            Some(ComparisonAxis::Sectors(..)) => filter.sector = None,
            None => {}
        }

        filter.company = match (&company, intent) {
            (Some(mention), Intent::CompanyLookup) => Some(mention.name.clone()),
            (Some(mention), _) if mention.in_dataset => Some(mention.name.clone()),
            _ => None,
        };

        let group_by_company =
            intent == Intent::RankedList && extract::wants_company_grouping(&lowered, language);

        tracing::debug!(
            %intent,
            language = %language,
            ?filter,
            "Query analyzed"
        );

        Analysis::Plan(QueryPlan {
            intent,
            filter,
            comparison,
            group_by_company,
        })
    }
}

// ============================================================================
// Tests
// ============================================================================
