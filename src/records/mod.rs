//! Records 모듈 - 펀딩 레코드 저장소
//!
//! - amount: 금액 파싱/포맷팅 (루피 단위)
//! - loader: CSV 데이터셋 로더
//! - store: SQLite 스냅샷 (ingest 결과 보관)
//!
//! 로드된 레코드는 프로세스 수명 동안 불변이며,
//! 모든 집계 통계의 기준(source of truth)입니다.

mod amount;
mod loader;
mod store;

use std::collections::{BTreeSet, HashMap};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

pub use amount::{
    format_amount, format_crores, format_indian_number, format_lakhs, parse_amount,
    unit_multiplier, CRORE, LAKH,
};
pub use loader::{load_csv, read_records};
pub use store::{get_data_dir, RecordDb, RecordDbStats};

// ============================================================================
// Types
// ============================================================================

/// 펀딩 이벤트 레코드 (불변)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FundingRecord {
    /// 데이터셋 내 위치 (안정적인 식별자)
    pub row_id: u64,
    pub company: Option<String>,
    /// 원본 금액 문자열
    pub amount_raw: String,
    /// 정규화된 금액 (루피, 항상 >= 0)
    pub amount: f64,
    pub sector: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub investors: Vec<String>,
    pub date: Option<NaiveDate>,
    pub year: Option<i32>,
    /// 펀딩 라운드 (Seed, Series A, ...)
    pub round: Option<String>,
}

impl FundingRecord {
    /// 인덱싱 대상 여부 (회사명과 섹터가 모두 있어야 함)
    pub fn is_indexable(&self) -> bool {
        self.company.is_some() && self.sector.is_some()
    }

    /// 회사명 (없으면 빈 문자열)
    pub fn company_name(&self) -> &str {
        self.company.as_deref().unwrap_or("")
    }

    /// 투자자 목록 표시 문자열
    pub fn investors_display(&self) -> Option<String> {
        if self.investors.is_empty() {
            None
        } else {
            Some(self.investors.join(", "))
        }
    }
}

/// 레코드 직접 필터 (모든 필드는 선택적, 문자열은 대소문자 무시)
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecordFilter {
    pub sector: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub year: Option<i32>,
    pub company: Option<String>,
    pub min_amount: Option<f64>,
    pub max_amount: Option<f64>,
}

impl RecordFilter {
    /// 레코드가 필터를 만족하는지 확인
    pub fn matches(&self, record: &FundingRecord) -> bool {
        if !field_matches(&self.sector, &record.sector)
            || !field_matches(&self.city, &record.city)
            || !field_matches(&self.state, &record.state)
            || !field_matches(&self.company, &record.company)
        {
            return false;
        }

        if let Some(year) = self.year {
            if record.year != Some(year) {
                return false;
            }
        }

        if self.min_amount.is_some() || self.max_amount.is_some() {
            // 금액 미상 레코드는 금액 조건을 만족하지 않음
            if record.amount <= 0.0 {
                return false;
            }
            if self.min_amount.is_some_and(|min| record.amount < min) {
                return false;
            }
            if self.max_amount.is_some_and(|max| record.amount > max) {
                return false;
            }
        }

        true
    }
}

fn field_matches(wanted: &Option<String>, actual: &Option<String>) -> bool {
    match (wanted, actual) {
        (None, _) => true,
        (Some(w), Some(a)) => w.to_lowercase() == a.to_lowercase(),
        (Some(_), None) => false,
    }
}

/// 인덱스 빌드 시점에 확정되는 닫힌 어휘 집합
#[derive(Debug, Clone, Default, Serialize)]
pub struct Vocabulary {
    pub sectors: BTreeSet<String>,
    pub cities: BTreeSet<String>,
    pub states: BTreeSet<String>,
    pub companies: BTreeSet<String>,
    /// (최소 연도, 최대 연도)
    pub years: Option<(i32, i32)>,
}

impl Vocabulary {
    /// 대소문자 무시하고 섹터 정식 명칭 조회
    pub fn sector(&self, name: &str) -> Option<&str> {
        find_ci(&self.sectors, name)
    }

    pub fn city(&self, name: &str) -> Option<&str> {
        find_ci(&self.cities, name)
    }

    pub fn state(&self, name: &str) -> Option<&str> {
        find_ci(&self.states, name)
    }

    pub fn company(&self, name: &str) -> Option<&str> {
        find_ci(&self.companies, name)
    }
}

fn find_ci<'a>(set: &'a BTreeSet<String>, name: &str) -> Option<&'a str> {
    let lower = name.to_lowercase();
    set.iter()
        .find(|item| item.to_lowercase() == lower)
        .map(String::as_str)
}

/// 집계 통계
#[derive(Debug, Clone, Default, Serialize)]
pub struct FundingStats {
    /// 펀딩 건수
    pub deal_count: usize,
    /// 고유 회사 수
    pub company_count: usize,
    /// 총 금액 (루피)
    pub total_amount: f64,
    /// 금액이 확인된 건의 평균
    pub average_amount: f64,
    /// 섹터별 금액 상위 5개
    pub top_sectors: Vec<(String, f64)>,
    /// 투자 건수 상위 5명
    pub top_investors: Vec<(String, usize)>,
    /// 회사별 금액 상위 5개
    pub top_companies: Vec<(String, f64)>,
}

/// 레코드 집합의 통계 계산
pub fn summarize<'a, I>(records: I) -> FundingStats
where
    I: IntoIterator<Item = &'a FundingRecord>,
{
    let mut deal_count = 0;
    let mut total_amount = 0.0;
    let mut priced = 0usize;
    let mut companies: HashMap<String, f64> = HashMap::new();
    let mut sectors: HashMap<String, f64> = HashMap::new();
    let mut investors: HashMap<String, usize> = HashMap::new();

    for record in records {
        deal_count += 1;
        total_amount += record.amount;
        if record.amount > 0.0 {
            priced += 1;
        }
        if let Some(company) = &record.company {
            *companies.entry(company.clone()).or_default() += record.amount;
        }
        if let Some(sector) = &record.sector {
            *sectors.entry(sector.clone()).or_default() += record.amount;
        }
        for investor in &record.investors {
            *investors.entry(investor.clone()).or_default() += 1;
        }
    }

    FundingStats {
        deal_count,
        company_count: companies.len(),
        total_amount,
        average_amount: if priced > 0 {
            total_amount / priced as f64
        } else {
            0.0
        },
        top_sectors: top_n_by_amount(sectors, 5),
        top_investors: top_n_by_count(investors, 5),
        top_companies: top_n_by_amount(companies, 5),
    }
}

fn top_n_by_amount(map: HashMap<String, f64>, n: usize) -> Vec<(String, f64)> {
    let mut items: Vec<(String, f64)> = map.into_iter().collect();
    items.sort_by(|a, b| b.1.total_cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    items.truncate(n);
    items
}

fn top_n_by_count(map: HashMap<String, usize>, n: usize) -> Vec<(String, usize)> {
    let mut items: Vec<(String, usize)> = map.into_iter().collect();
    items.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    items.truncate(n);
    items
}

// ============================================================================
// RecordStore
// ============================================================================

/// 읽기 전용 레코드 저장소
///
/// 시작 시 한 번 로드되고 이후 변경되지 않습니다.
#[derive(Debug, Clone, Default)]
pub struct RecordStore {
    records: Vec<FundingRecord>,
    by_row: HashMap<u64, usize>,
    by_company: HashMap<String, Vec<usize>>,
    vocabulary: Vocabulary,
}

impl RecordStore {
    /// 레코드 목록으로 저장소 생성
    pub fn new(records: Vec<FundingRecord>) -> Self {
        let mut by_row = HashMap::with_capacity(records.len());
        let mut by_company: HashMap<String, Vec<usize>> = HashMap::new();
        let mut vocabulary = Vocabulary::default();

        for (pos, record) in records.iter().enumerate() {
            by_row.insert(record.row_id, pos);

            if let Some(company) = &record.company {
                by_company
                    .entry(company.to_lowercase())
                    .or_default()
                    .push(pos);
            }

            if !record.is_indexable() {
                continue;
            }

            if let Some(company) = &record.company {
                vocabulary.companies.insert(company.clone());
            }
            if let Some(sector) = &record.sector {
                vocabulary.sectors.insert(sector.clone());
            }
            if let Some(city) = &record.city {
                vocabulary.cities.insert(city.clone());
            }
            if let Some(state) = &record.state {
                vocabulary.states.insert(state.clone());
            }
            if let Some(year) = record.year {
                vocabulary.years = Some(match vocabulary.years {
                    Some((min, max)) => (min.min(year), max.max(year)),
                    None => (year, year),
                });
            }
        }

        Self {
            records,
            by_row,
            by_company,
            vocabulary,
        }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// 전체 레코드
    pub fn records(&self) -> &[FundingRecord] {
        &self.records
    }

    /// row_id로 조회
    pub fn get(&self, row_id: u64) -> Option<&FundingRecord> {
        self.by_row.get(&row_id).map(|&pos| &self.records[pos])
    }

    /// 인덱싱 대상 레코드
    pub fn indexable(&self) -> impl Iterator<Item = &FundingRecord> {
        self.records.iter().filter(|r| r.is_indexable())
    }

    pub fn vocabulary(&self) -> &Vocabulary {
        &self.vocabulary
    }

    /// 직접 필터 (유사도 임계값과 무관한 정확한 집합)
    pub fn filter(&self, filter: &RecordFilter) -> Vec<&FundingRecord> {
        self.records.iter().filter(|r| filter.matches(r)).collect()
    }

    /// 회사명으로 전체 라운드 조회 (대소문자 무시)
    pub fn company_rounds(&self, company: &str) -> Vec<&FundingRecord> {
        self.by_company
            .get(&company.to_lowercase())
            .map(|positions| positions.iter().map(|&pos| &self.records[pos]).collect())
            .unwrap_or_default()
    }

    /// 전체 데이터셋 통계
    pub fn stats(&self) -> FundingStats {
        summarize(&self.records)
    }
}

// ============================================================================
// Helper Functions
// ============================================================================

/// 결측 표기 정규화
///
/// "", "unknown", "nan", "undisclosed" 등은 None으로 처리합니다.
pub fn clean_field(value: &str) -> Option<String> {
    let trimmed = value.trim();
    let lower = trimmed.to_lowercase();
    match lower.as_str() {
        "" | "unknown" | "nan" | "none" | "null" | "n/a" | "na" | "-" | "undisclosed"
        | "not disclosed" => None,
        _ => Some(trimmed.to_string()),
    }
}

// ============================================================================
// Tests
// ============================================================================
