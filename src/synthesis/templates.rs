//! 답변 템플릿
//!
//! 모든 함수는 순수 함수입니다. 이름 현지화는 호출 측에서 끝낸 값을 받습니다.

use crate::config::YearRange;
use crate::lang::{fill, LanguagePack};
use crate::records::{format_amount, format_crores, format_lakhs, FundingStats};

// ============================================================================
// Inputs
// ============================================================================

/// 목록 한 줄
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListItem {
    pub company: String,
    /// 금액이 0이면 None
    pub amount: Option<f64>,
    pub year: Option<i32>,
    pub sector: Option<String>,
    pub city: Option<String>,
}

/// 목록 전체 요약
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ListSummary {
    pub companies: usize,
    pub total_amount: f64,
}

/// 회사별 합산 결과의 1위
#[derive(Debug, Clone, PartialEq)]
pub struct LeadingCompany {
    pub company: String,
    pub total_amount: f64,
    pub rounds: usize,
    pub largest_round: f64,
    pub largest_round_year: Option<i32>,
}

/// 비교 한쪽
#[derive(Debug, Clone, PartialEq)]
pub struct ComparisonSide {
    pub label: String,
    pub companies: usize,
    pub deals: usize,
    pub total_amount: f64,
}

/// 데이터셋 내 회사 요약
#[derive(Debug, Clone, PartialEq)]
pub struct CompanyProfile {
    pub name: String,
    pub sector: Option<String>,
    pub total_amount: f64,
    pub rounds: usize,
    pub location: Option<String>,
    pub top_rounds: Vec<RoundLine>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RoundLine {
    pub amount: f64,
    pub year: Option<i32>,
    pub investors: Option<String>,
}

// ============================================================================
// Terminal messages
// ============================================================================

pub fn out_of_range(pack: &LanguagePack, year: i32, coverage: YearRange) -> String {
    fill(
        pack.messages.out_of_range,
        &[
            ("year", &year.to_string()),
            ("min", &coverage.min.to_string()),
            ("max", &coverage.max.to_string()),
        ],
    )
}

pub fn no_results(pack: &LanguagePack, coverage: YearRange) -> String {
    fill(
        pack.messages.no_results,
        &[
            ("min", &coverage.min.to_string()),
            ("max", &coverage.max.to_string()),
        ],
    )
}

pub fn unsupported_sector(pack: &LanguagePack, sector: &str, supported: &[String]) -> String {
    fill(
        pack.messages.unsupported_sector,
        &[("sector", sector), ("supported", &supported.join(", "))],
    )
}

// ============================================================================
// Aggregation / Comparison
// ============================================================================

/// 집계 답변
///
/// # Arguments
/// * `scope` - 필터 범위 표시 (예: "Fintech • Bangalore • 2022"), 비어 있으면 생략
/// * `stats` - 직접 필터로 계산한 통계
/// * `top_sectors` - 현지화된 섹터명과 금액
pub fn aggregation(
    pack: &LanguagePack,
    scope: &str,
    stats: &FundingStats,
    top_sectors: &[(String, f64)],
) -> String {
    let l = &pack.labels;
    let mut lines = Vec::new();
    if !scope.is_empty() {
        lines.push(format!("**{}**", scope));
        lines.push(String::new());
    }

    lines.push(format!(
        "**{}**: ₹{} L (₹{} {})",
        l.total_funding,
        format_lakhs(stats.total_amount),
        format_crores(stats.total_amount),
        l.crores
    ));
    lines.push(format!("**{}**: {}", l.total_companies, stats.company_count));
    lines.push(format!("**{}**: {}", l.deals, stats.deal_count));
    if stats.average_amount > 0.0 {
        lines.push(format!("**{}**: {}", l.average, format_amount(stats.average_amount)));
    }

    if !top_sectors.is_empty() {
        lines.push(String::new());
        lines.push(format!("**{}**:", l.top_sectors));
        for (i, (sector, amount)) in top_sectors.iter().enumerate() {
            lines.push(format!(
                "{}. {}: ₹{} {}",
                i + 1,
                sector,
                format_crores(*amount),
                l.crores
            ));
        }
    }
    lines.join("\n")
}

/// (b - a) / a * 100, a가 0이면 None
pub fn growth_percent(a: f64, b: f64) -> Option<f64> {
    if a > 0.0 {
        Some((b - a) / a * 100.0)
    } else {
        None
    }
}

pub fn comparison(pack: &LanguagePack, a: &ComparisonSide, b: &ComparisonSide) -> String {
    let l = &pack.labels;
    let mut lines = vec![
        format!("**{}: {} vs {}**", l.comparison, a.label, b.label),
        String::new(),
    ];

    for side in [a, b] {
        lines.push(format!("**{}**", side.label));
        lines.push(format!("- {}: {}", l.companies_heading, side.companies));
        lines.push(format!("- {}: {}", l.deals, side.deals));
        lines.push(format!(
            "- {}: ₹{} {}",
            l.funding,
            format_crores(side.total_amount),
            l.crores
        ));
        lines.push(String::new());
    }

    match growth_percent(a.total_amount, b.total_amount) {
        Some(growth) => lines.push(format!("**{}**: {:+.1}%", l.growth, growth)),
        None => lines.push(fill(pack.messages.growth_unavailable, &[("a", &a.label)])),
    }
    lines.join("\n")
}

// ============================================================================
// Company lookup
// ============================================================================

pub fn company_profile(pack: &LanguagePack, profile: &CompanyProfile) -> String {
    let l = &pack.labels;
    let description = match &profile.sector {
        Some(sector) => fill(pack.messages.company_description, &[("sector", sector)]),
        None => pack.messages.generic_description.to_string(),
    };

    let mut lines = vec![
        format!("**{}**", profile.name),
        description,
        String::new(),
        format!("**{}**", l.funding_summary),
        format!(
            "- {}: ₹{} {}",
            l.total_funding,
            format_crores(profile.total_amount),
            l.crores
        ),
        format!("- {}: {}", l.rounds, profile.rounds),
    ];
    if let Some(sector) = &profile.sector {
        lines.push(format!("- {}: {}", l.primary_sector, sector));
    }
    if let Some(location) = &profile.location {
        lines.push(format!("- {}: {}", l.location, location));
    }

    if !profile.top_rounds.is_empty() {
        lines.push(String::new());
        lines.push(format!("**{}**", l.funding_rounds));
        for (i, round) in profile.top_rounds.iter().enumerate() {
            // 비공개 금액(0)은 ₹0 대신 생략
            let mut line = format!("{}.", i + 1);
            match (round.amount > 0.0, round.year) {
                (true, Some(year)) => line.push_str(&format!(" {} ({})", format_amount(round.amount), year)),
                (true, None) => line.push_str(&format!(" {}", format_amount(round.amount))),
                (false, Some(year)) => line.push_str(&format!(" {}", year)),
                (false, None) => {}
            }
            if let Some(investors) = &round.investors {
                line.push_str(&format!(" {} {}", l.from, investors));
            }
            lines.push(line);
        }
    }
    lines.join("\n")
}

/// 데이터셋 밖 회사: 설명 + 범위 안내
pub fn external_company(
    pack: &LanguagePack,
    name: &str,
    description: &str,
    coverage: YearRange,
) -> String {
    let note = fill(
        pack.messages.not_in_dataset,
        &[
            ("min", &coverage.min.to_string()),
            ("max", &coverage.max.to_string()),
        ],
    );
    format!("**{}**\n{}\n\n{}", name, description, note)
}

// ============================================================================
// Ranked list / generic retrieval
// ============================================================================

pub fn summary_line(pack: &LanguagePack, summary: ListSummary) -> String {
    let l = &pack.labels;
    format!(
        "**{} {} {}, ₹{} {} {}**",
        l.total,
        summary.companies,
        l.companies,
        format_crores(summary.total_amount),
        l.crores,
        l.total_funding.to_lowercase()
    )
}

fn item_line(index: usize, item: &ListItem) -> String {
    let mut parts = vec![format!("{}. **{}**", index, item.company)];
    if let Some(amount) = item.amount {
        parts.push(format_amount(amount));
    }
    if let Some(year) = item.year {
        parts.push(year.to_string());
    }
    parts.extend(item.sector.iter().cloned());
    parts.extend(item.city.iter().cloned());
    parts.join(" • ")
}

pub fn listing(pack: &LanguagePack, summary: ListSummary, items: &[ListItem]) -> String {
    let mut lines = vec![summary_line(pack, summary), String::new()];
    lines.extend(items.iter().enumerate().map(|(i, item)| item_line(i + 1, item)));
    lines.join("\n")
}

/// 회사별 합산 목록 (1위 회사 강조)
pub fn grouped_listing(
    pack: &LanguagePack,
    summary: ListSummary,
    leader: &LeadingCompany,
    items: &[ListItem],
) -> String {
    let l = &pack.labels;
    let mut largest = format_amount(leader.largest_round);
    if let Some(year) = leader.largest_round_year {
        largest.push_str(&format!(" ({})", year));
    }

    let mut lines = vec![
        summary_line(pack, summary),
        String::new(),
        format!("**{}**: {}", l.most_funded, leader.company),
        format!(
            "- {}: ₹{} {}",
            l.total,
            format_crores(leader.total_amount),
            l.crores
        ),
        format!("- {}: {}", l.rounds, leader.rounds),
        format!("- {}: {}", l.largest_round, largest),
        String::new(),
    ];
    lines.extend(items.iter().enumerate().map(|(i, item)| item_line(i + 1, item)));
    lines.join("\n")
}

// ============================================================================
// Tests
// ============================================================================
