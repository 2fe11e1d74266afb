//! 의도 분류 규칙 테이블
//!
//! 규칙은 우선순위 순서로 평가되며 처음 일치하는 규칙이 의도를 결정합니다.

use super::extract::contains_any;
use super::Intent;
use crate::lang::{Keywords, Language};

/// 규칙이 참조하는 키워드 분류
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeywordClass {
    Comparison,
    Aggregation,
    RankedList,
}

impl KeywordClass {
    fn words(self, keywords: &Keywords) -> &'static [&'static str] {
        match self {
            KeywordClass::Comparison => keywords.comparison,
            KeywordClass::Aggregation => keywords.aggregation,
            KeywordClass::RankedList => keywords.ranked_list,
        }
    }

    /// 해당 언어 + 영어 키워드 중 하나라도 포함되는지
    pub fn matches(self, text: &str, language: Language) -> bool {
        let own = self.words(&language.pack().keywords);
        if contains_any(text, own) {
            return true;
        }
        !language.is_english() && contains_any(text, self.words(&Language::En.pack().keywords))
    }
}

/// 키워드 외 추가 조건
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Requirement {
    Nothing,
    /// 서로 다른 연도 2개 이상 또는 섹터 2개 이상
    ComparisonAxis,
    /// 회사명이 해석됨
    Company,
}

#[derive(Debug, Clone, Copy)]
pub struct IntentRule {
    pub intent: Intent,
    pub keywords: Option<KeywordClass>,
    pub requires: Requirement,
}

/// 우선순위 순 규칙
pub static RULES: [IntentRule; 5] = [
    IntentRule {
        intent: Intent::Comparison,
        keywords: Some(KeywordClass::Comparison),
        requires: Requirement::ComparisonAxis,
    },
    IntentRule {
        intent: Intent::Aggregation,
        keywords: Some(KeywordClass::Aggregation),
        requires: Requirement::Nothing,
    },
    IntentRule {
        intent: Intent::RankedList,
        keywords: Some(KeywordClass::RankedList),
        requires: Requirement::Nothing,
    },
    IntentRule {
        intent: Intent::CompanyLookup,
        keywords: None,
        requires: Requirement::Company,
    },
    IntentRule {
        intent: Intent::GenericRetrieval,
        keywords: None,
        requires: Requirement::Nothing,
    },
];

/// 분류 입력
#[derive(Debug, Clone, Copy)]
pub struct Signals<'a> {
    /// 소문자 질의
    pub text: &'a str,
    pub language: Language,
    pub comparison_axis: bool,
    pub company: bool,
}

impl IntentRule {
    pub fn matches(&self, signals: &Signals<'_>) -> bool {
        let requirement = match self.requires {
            Requirement::Nothing => true,
            Requirement::ComparisonAxis => signals.comparison_axis,
            Requirement::Company => signals.company,
        };
        requirement
            && self
                .keywords
                .map_or(true, |class| class.matches(signals.text, signals.language))
    }
}

/// 첫 번째로 일치하는 규칙의 의도
pub fn classify(signals: &Signals<'_>) -> Intent {
    RULES
        .iter()
        .find(|rule| rule.matches(signals))
        .map(|rule| rule.intent)
        .unwrap_or(Intent::GenericRetrieval)
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn signals(text: &str, language: Language) -> Signals<'_> {
        Signals {
            text,
            language,
            comparison_axis: false,
            company: false,
        }
    }

    #[test]
    fn test_rule_order() {
        assert_eq!(RULES[0].intent, Intent::Comparison);
        assert_eq!(RULES[4].intent, Intent::GenericRetrieval);
    }

    #[test]
    fn test_comparison_requires_axis() {
        let mut s = signals("compare fintech funding", Language::En);
        assert_eq!(classify(&s), Intent::GenericRetrieval);

        s.comparison_axis = true;
        assert_eq!(classify(&s), Intent::Comparison);
    }

    #[test]
    fn test_aggregation_before_ranked_list() {
        let s = signals("total funding of top startups", Language::En);
        assert_eq!(classify(&s), Intent::Aggregation);
    }

    #[test]
    fn test_native_keywords() {
        let s = signals("2021 में कुल फंडिंग", Language::Hi);
        assert_eq!(classify(&s), Intent::Aggregation);

        let s = signals("టాప్ 5 కంపెనీలు", Language::Te);
        assert_eq!(classify(&s), Intent::RankedList);
    }

    #[test]
    fn test_english_keywords_apply_to_other_languages() {
        let s = signals("fintech में top 5", Language::Hi);
        assert_eq!(classify(&s), Intent::RankedList);
    }

    #[test]
    fn test_short_keywords_need_word_boundary() {
        // "top" inside "laptop" is not a ranked-list cue
        let s = signals("laptop startups", Language::En);
        assert_eq!(classify(&s), Intent::GenericRetrieval);
    }

    #[test]
    fn test_company_lookup() {
        let mut s = signals("tell me about swiggy", Language::En);
        s.company = true;
        assert_eq!(classify(&s), Intent::CompanyLookup);
    }
}
