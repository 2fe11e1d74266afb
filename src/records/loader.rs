//! CSV 데이터셋 로더
//!
//! 헤더 이름의 여러 표기(`Startup Name` / `Company`, `Sector_Standardized` / `Sector` 등)를
//! 대소문자 무시로 해석하여 `FundingRecord`로 변환합니다.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result};
use chrono::{Datelike, NaiveDate};

use super::amount::parse_amount;
use super::{clean_field, FundingRecord};

/// 필드별 허용 헤더 (소문자, 공백/밑줄/따옴표 제거 후 비교)
const COMPANY_HEADERS: &[&str] = &["startupname", "company", "companyname", "startup"];
const AMOUNT_HEADERS: &[&str] = &["amountcleaned", "amount", "amountinusd", "amountinr"];
const AMOUNT_NUMERIC_HEADERS: &[&str] = &["amountinrnumeric", "amountnumeric"];
const SECTOR_HEADERS: &[&str] = &[
    "sectorstandardized",
    "sector",
    "industryvertical",
    "industry",
];
const CITY_HEADERS: &[&str] = &["citystandardized", "city", "citylocation", "location"];
const STATE_HEADERS: &[&str] = &["statestandardized", "state"];
const INVESTOR_HEADERS: &[&str] = &["investorsname", "investors", "investor"];
const DATE_HEADERS: &[&str] = &["dateparsed", "date", "fundingdate"];
const YEAR_HEADERS: &[&str] = &["year"];
const ROUND_HEADERS: &[&str] = &["fundingstage", "round", "investmentntype", "investmenttype", "stage"];

/// 날짜 포맷 후보
const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%d/%m/%Y", "%d-%m-%Y", "%d.%m.%Y", "%Y/%m/%d"];

/// 헤더 → 컬럼 인덱스 매핑
#[derive(Debug, Default)]
struct ColumnMap {
    company: Option<usize>,
    amount: Option<usize>,
    amount_numeric: Option<usize>,
    sector: Option<usize>,
    city: Option<usize>,
    state: Option<usize>,
    investors: Option<usize>,
    date: Option<usize>,
    year: Option<usize>,
    round: Option<usize>,
}

impl ColumnMap {
    fn from_headers(headers: &csv::StringRecord) -> Self {
        let normalized: Vec<String> = headers.iter().map(normalize_header).collect();
        let find = |candidates: &[&str]| {
            candidates
                .iter()
                .find_map(|c| normalized.iter().position(|h| h == c))
        };

        Self {
            company: find(COMPANY_HEADERS),
            amount: find(AMOUNT_HEADERS),
            amount_numeric: find(AMOUNT_NUMERIC_HEADERS),
            sector: find(SECTOR_HEADERS),
            city: find(CITY_HEADERS),
            state: find(STATE_HEADERS),
            investors: find(INVESTOR_HEADERS),
            date: find(DATE_HEADERS),
            year: find(YEAR_HEADERS),
            round: find(ROUND_HEADERS),
        }
    }
}

/// CSV 파일에서 레코드 로드
///
/// # Arguments
/// * `path` - CSV 파일 경로
pub fn load_csv(path: &Path) -> Result<Vec<FundingRecord>> {
    let file = File::open(path)
        .with_context(|| format!("Failed to open dataset: {}", path.display()))?;
    let records = read_records(file)
        .with_context(|| format!("Failed to read dataset: {}", path.display()))?;

    tracing::info!("Loaded {} funding records from {:?}", records.len(), path);
    Ok(records)
}

/// 임의의 reader에서 레코드 읽기
pub fn read_records<R: Read>(reader: R) -> Result<Vec<FundingRecord>> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let headers = csv_reader
        .headers()
        .context("Failed to read CSV header")?
        .clone();
    let columns = ColumnMap::from_headers(&headers);

    if columns.company.is_none() {
        anyhow::bail!("Dataset has no company column (expected 'Startup Name' or 'Company')");
    }

    let mut records = Vec::new();
    for (row, result) in csv_reader.records().enumerate() {
        let row_data = match result {
            Ok(r) => r,
            Err(e) => {
                tracing::warn!("Skipping malformed CSV row {}: {}", row + 1, e);
                continue;
            }
        };
        records.push(parse_row(records.len() as u64, &row_data, &columns));
    }

    Ok(records)
}

/// CSV 한 행을 레코드로 변환
fn parse_row(row_id: u64, row: &csv::StringRecord, columns: &ColumnMap) -> FundingRecord {
    let get = |idx: Option<usize>| idx.and_then(|i| row.get(i)).unwrap_or("");

    let amount_raw = get(columns.amount).to_string();
    let amount = get(columns.amount_numeric)
        .replace(',', "")
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite() && *v > 0.0)
        .unwrap_or_else(|| parse_amount(&amount_raw));

    let date = parse_date(get(columns.date));
    let year = get(columns.year)
        .trim()
        .split('.')
        .next()
        .and_then(|y| y.parse::<i32>().ok())
        .or_else(|| date.map(|d| d.year()));

    FundingRecord {
        row_id,
        company: clean_field(get(columns.company)),
        amount_raw,
        amount,
        sector: clean_field(get(columns.sector)),
        city: clean_field(get(columns.city)),
        state: clean_field(get(columns.state)),
        investors: split_investors(get(columns.investors)),
        date,
        year,
        round: clean_field(get(columns.round)),
    }
}

// ============================================================================
// Helper Functions
// ============================================================================

fn normalize_header(header: &str) -> String {
    header
        .chars()
        .filter(|c| c.is_alphanumeric())
        .flat_map(char::to_lowercase)
        .collect()
}

fn parse_date(value: &str) -> Option<NaiveDate> {
    let value = value.trim();
    if value.is_empty() {
        return None;
    }
    // "2021-03-04 00:00:00" 형태 처리
    let value = value.split_whitespace().next().unwrap_or(value);
    DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(value, fmt).ok())
}

fn split_investors(value: &str) -> Vec<String> {
    value
        .split([',', ';'])
        .filter_map(clean_field)
        .collect()
}

// ============================================================================
// Tests
// ============================================================================
