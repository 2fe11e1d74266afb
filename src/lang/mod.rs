//! Lang 모듈 - 언어 태그와 언어별 데이터 테이블
//!
//! 언어별 분기 대신 `Language::pack()` 한 번의 조회로
//! 라벨, 키워드, 메시지 템플릿을 가져옵니다.
//!
//! - packs: 8개 언어의 정적 테이블
//! - aliases: 섹터/도시/주/회사 별칭 테이블

pub mod aliases;
mod packs;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

// ============================================================================
// Language
// ============================================================================

/// 지원 언어
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    Hi,
    Te,
    Ta,
    Kn,
    Mr,
    Gu,
    Bn,
}

/// 지원하지 않는 언어 태그
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unsupported language '{0}' (expected one of: en, hi, te, ta, kn, mr, gu, bn)")]
pub struct UnsupportedLanguage(pub String);

impl Language {
    pub const ALL: [Language; 8] = [
        Language::En,
        Language::Hi,
        Language::Te,
        Language::Ta,
        Language::Kn,
        Language::Mr,
        Language::Gu,
        Language::Bn,
    ];

    pub fn tag(self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Hi => "hi",
            Language::Te => "te",
            Language::Ta => "ta",
            Language::Kn => "kn",
            Language::Mr => "mr",
            Language::Gu => "gu",
            Language::Bn => "bn",
        }
    }

    /// 태그로 조회 (대소문자/공백 무시)
    pub fn from_tag(tag: &str) -> Option<Self> {
        let tag = tag.trim().to_lowercase();
        Self::ALL.into_iter().find(|lang| lang.tag() == tag)
    }

    pub fn is_english(self) -> bool {
        self == Language::En
    }

    /// 언어별 데이터 테이블
    pub fn pack(self) -> &'static LanguagePack {
        match self {
            Language::En => &packs::EN,
            Language::Hi => &packs::HI,
            Language::Te => &packs::TE,
            Language::Ta => &packs::TA,
            Language::Kn => &packs::KN,
            Language::Mr => &packs::MR,
            Language::Gu => &packs::GU,
            Language::Bn => &packs::BN,
        }
    }
}

impl FromStr for Language {
    type Err = UnsupportedLanguage;

    /// 빈 문자열은 영어로 간주
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().is_empty() {
            return Ok(Language::En);
        }
        Self::from_tag(s).ok_or_else(|| UnsupportedLanguage(s.to_string()))
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

// ============================================================================
// LanguagePack
// ============================================================================

/// 답변 템플릿 라벨
#[derive(Debug)]
pub struct Labels {
    pub total_funding: &'static str,
    pub total_companies: &'static str,
    pub deals: &'static str,
    pub average: &'static str,
    pub top_sectors: &'static str,
    pub comparison: &'static str,
    pub year: &'static str,
    pub sector: &'static str,
    pub companies: &'static str,
    /// 항목 제목으로 쓰는 표기 ("- Companies: 4")
    pub companies_heading: &'static str,
    pub funding: &'static str,
    pub growth: &'static str,
    pub total: &'static str,
    pub crores: &'static str,
    pub funding_summary: &'static str,
    pub rounds: &'static str,
    pub primary_sector: &'static str,
    pub location: &'static str,
    pub funding_rounds: &'static str,
    pub from: &'static str,
    pub most_funded: &'static str,
    pub largest_round: &'static str,
}

/// 의도 분류 및 필터 추출용 키워드 (소문자)
#[derive(Debug)]
pub struct Keywords {
    pub comparison: &'static [&'static str],
    pub aggregation: &'static [&'static str],
    pub ranked_list: &'static [&'static str],
    pub highest: &'static [&'static str],
    pub lowest: &'static [&'static str],
    pub recent: &'static [&'static str],
    /// 회사별 합산 요청 ("most funded")
    pub most_funded: &'static [&'static str],
    /// 개수 표현과 함께 쓰이는 명사 ("5 companies")
    pub list_nouns: &'static [&'static str],
    /// 금액 앞에 오는 하한/상한 표현
    pub above_before: &'static [&'static str],
    pub below_before: &'static [&'static str],
    /// 금액 뒤에 오는 후치사 표현 (से ज्यादा 등)
    pub above_after: &'static [&'static str],
    pub below_after: &'static [&'static str],
    /// 생성 결과에서 제거할 "unknown" 표기
    pub unknown_words: &'static [&'static str],
}

/// 메시지 템플릿 (`{key}` 자리표시자)
#[derive(Debug)]
pub struct Messages {
    /// {year}, {min}, {max}
    pub out_of_range: &'static str,
    pub no_results: &'static str,
    /// {sector}, {supported}
    pub unsupported_sector: &'static str,
    /// {min}, {max}
    pub not_in_dataset: &'static str,
    /// {sector}
    pub company_description: &'static str,
    pub generic_description: &'static str,
    /// {a}
    pub growth_unavailable: &'static str,
}

/// 생성 서비스 프롬프트 조각
#[derive(Debug)]
pub struct Prompts {
    /// {company}
    pub company_lookup: &'static str,
    pub task: &'static str,
    pub data: &'static str,
    pub question: &'static str,
    pub instructions_header: &'static str,
    pub instructions: &'static [&'static str],
    pub answer: &'static str,
    /// 음역 프롬프트에 쓰이는 문자 체계 이름
    pub script: &'static str,
}

/// 언어별 데이터 테이블
#[derive(Debug)]
pub struct LanguagePack {
    pub language: Language,
    pub labels: Labels,
    pub keywords: Keywords,
    pub messages: Messages,
    pub prompts: Prompts,
}

/// 템플릿 자리표시자 치환
///
/// # Arguments
/// * `template` - `{key}` 형식의 자리표시자를 포함한 문자열
/// * `values` - (key, value) 쌍
pub fn fill(template: &str, values: &[(&str, &str)]) -> String {
    values
        .iter()
        .fold(template.to_string(), |acc, (key, value)| {
            acc.replace(&format!("{{{}}}", key), value)
        })
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tag_roundtrip() {
        for lang in Language::ALL {
            assert_eq!(Language::from_tag(lang.tag()), Some(lang));
            assert_eq!(lang.pack().language, lang);
        }
    }

    #[test]
    fn test_parse_language() {
        assert_eq!("HI".parse::<Language>().unwrap(), Language::Hi);
        assert_eq!("".parse::<Language>().unwrap(), Language::En);
        assert!("fr".parse::<Language>().is_err());
    }

    #[test]
    fn test_fill() {
        let text = fill(
            Language::En.pack().messages.out_of_range,
            &[("year", "2030"), ("min", "2010"), ("max", "2025")],
        );
        assert_eq!(
            text,
            "Sorry, this dataset only covers 2010-2025. Data for 2030 is not available."
        );
    }

    #[test]
    fn test_every_pack_is_complete() {
        for lang in Language::ALL {
            let pack = lang.pack();
            assert!(!pack.keywords.aggregation.is_empty(), "{}", lang);
            assert!(!pack.keywords.comparison.is_empty(), "{}", lang);
            assert!(!pack.keywords.unknown_words.is_empty(), "{}", lang);
            assert!(pack.messages.out_of_range.contains("{year}"), "{}", lang);
            assert!(pack.messages.unsupported_sector.contains("{supported}"), "{}", lang);
            assert!(pack.prompts.company_lookup.contains("{company}"), "{}", lang);
        }
    }
}
