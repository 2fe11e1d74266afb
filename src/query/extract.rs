//! 필터 추출 - 별칭 매칭, 금액 범위, 정렬 방향, 요청 개수, 회사명
//!
//! 각 추출은 독립적이며 실패하면 해당 필터만 비어 있게 됩니다.

use std::sync::LazyLock;

use regex::Regex;

use super::SortDirection;
use crate::lang::aliases::{self, AliasTable, CITIES, SECTORS, STATES};
use crate::lang::{Keywords, Language};
use crate::records::{unit_multiplier, Vocabulary};

/// 인도 문자 용어는 조사가 붙으므로 부분 일치, 단 이 길이(문자 수) 이하는 단어 경계 필요
const SHORT_TERM_CHARS: usize = 3;

/// 금액 표현 앞쪽 탐색 범위 (문자 수)
const CUE_WINDOW_CHARS: usize = 24;

/// 요청 개수 상한
const MAX_REQUESTED_COUNT: usize = 50;

/// 회사명 후보의 최대 단어 수
const MAX_COMPANY_WORDS: usize = 3;

const GENERIC_WORDS: &[&str] = &["it", "this", "that", "they", "them", "the"];

/// 조회 문구 캡처에 들어 있으면 회사명이 아닌 단어 (기능어, 일반 명사)
const NON_NAME_WORDS: &[&str] = &[
    "a", "an", "the", "in", "of", "for", "across", "on", "at", "to", "from", "with", "by",
    "and", "or", "is", "are", "was", "were", "all", "any", "some", "my", "our", "your",
    "happening", "going", "doing", "new", "funding", "fundings", "funded", "investment",
    "investments", "investor", "investors", "invest", "money", "capital", "news", "scene",
    "market", "markets", "ecosystem", "industry", "sector", "sectors", "startup", "startups",
    "company", "companies", "india", "indian", "tech", "technology", "trend", "trends",
    "deal", "deals", "round", "rounds", "data", "dataset", "फंडिंग", "निवेश", "स्टार्टअप",
    "कंपनी", "कंपनियों", "कंपनियां",
];

static WORD_CHAR_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\w$").expect("valid word regex"));

pub(crate) static YEAR_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b(20\d{2})\b").expect("valid year regex"));

static AMOUNT_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(₹|\brs\.?|\binr\b|\$)?\s*(\d[\d,]*(?:\.\d+)?)(?:\s*([\p{L}\p{M}]+))?")
        .expect("valid amount regex")
});

static BETWEEN_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"between\s+(₹|rs\.?|inr|\$)?\s*(\d[\d,]*(?:\.\d+)?)\s*([\p{L}\p{M}]+)?\s+(?:and|to|-)\s+(₹|rs\.?|inr|\$)?\s*(\d[\d,]*(?:\.\d+)?)\s*([\p{L}\p{M}]+)?",
    )
    .expect("valid between regex")
});

static COUNT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b(\d{1,3})\b").expect("valid count regex"));

static LOOKUP_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        r"(?:what|tell me) (?:does|do|is|about) ([\w\s]+?)(?:\s+do|\s+company)?(?:\?|\.|\s*$)",
        r"tell (?:me )?about ([\w\s]+)",
        r"about ([\w\s]+)",
        r"what is ([\w\s]+)",
        r"([\w\s]+?) (?:क्या|काय|શું|என்ன|ఏమి|ಏನು|কী) (?:करती|करते|કરે|செய்கிற|చేస్తుంది|ಮಾಡುತ್ತದೆ|করে)",
        r"([\w\s]+?) (?:के बारे में|बद्दल|વિશે|பற்றி|గురించి|ಬಗ್ಗೆ|সম্পর্কে|बताओ|सांगा|કહો|சொல்லுங்கள்|చెప్పండి|ಹೇಳಿ|বলুন)",
    ]
    .iter()
    .map(|p| Regex::new(p).expect("valid lookup regex"))
    .collect()
});

// ============================================================================
// Term Matching
// ============================================================================

fn is_word_char(c: char) -> bool {
    let mut buf = [0u8; 4];
    WORD_CHAR_RE.is_match(c.encode_utf8(&mut buf))
}

fn is_bounded(text: &str, start: usize, end: usize) -> bool {
    let before = text[..start].chars().next_back();
    let after = text[end..].chars().next();
    !before.is_some_and(is_word_char) && !after.is_some_and(is_word_char)
}

/// 라틴 문자 용어나 짧은 용어는 단어 경계 필요 ("country"의 "count" 방지)
fn needs_boundary(term: &str) -> bool {
    term.is_ascii() || term.chars().count() <= SHORT_TERM_CHARS
}

/// 용어의 모든 출현 위치 (`needs_boundary` 또는 `always_bounded`이면 단어 경계 검사)
fn find_all(text: &str, term: &str, always_bounded: bool) -> Vec<(usize, usize)> {
    if term.is_empty() {
        return Vec::new();
    }
    let bounded = always_bounded || needs_boundary(term);

    text.match_indices(term)
        .map(|(start, m)| (start, start + m.len()))
        .filter(|&(start, end)| !bounded || is_bounded(text, start, end))
        .collect()
}

/// 용어 포함 여부
pub(crate) fn contains_term(text: &str, term: &str) -> bool {
    !find_all(text, term, false).is_empty()
}

pub(crate) fn contains_any(text: &str, terms: &[&str]) -> bool {
    terms.iter().any(|t| contains_term(text, t))
}

/// 해당 언어 + 영어 키워드
pub(crate) fn keywords(
    language: Language,
    pick: fn(&Keywords) -> &'static [&'static str],
) -> impl Iterator<Item = &'static str> {
    let own = pick(&language.pack().keywords);
    let english: &'static [&'static str] = if language.is_english() {
        &[]
    } else {
        pick(&Language::En.pack().keywords)
    };
    own.iter().chain(english.iter()).copied()
}

/// 매칭 결과
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct TermMatch {
    pub start: usize,
    pub end: usize,
    pub canonical: String,
}

/// 여러 용어를 매칭하고 겹치는 매치는 더 긴 용어를 채택
///
/// 결과는 텍스트 위치 순입니다.
pub(crate) fn match_terms(text: &str, candidates: &[(String, String)]) -> Vec<TermMatch> {
    let mut found: Vec<TermMatch> = candidates
        .iter()
        .flat_map(|(term, canonical)| {
            find_all(text, term, false)
                .into_iter()
                .map(move |(start, end)| TermMatch {
                    start,
                    end,
                    canonical: canonical.clone(),
                })
        })
        .collect();

    found.sort_by(|a, b| {
        (b.end - b.start)
            .cmp(&(a.end - a.start))
            .then(a.start.cmp(&b.start))
    });

    let mut accepted: Vec<TermMatch> = Vec::new();
    for m in found {
        if accepted.iter().all(|a| m.end <= a.start || m.start >= a.end) {
            accepted.push(m);
        }
    }
    accepted.sort_by_key(|m| m.start);
    accepted
}

/// 위치 순 서로 다른 정식 명칭
pub(crate) fn distinct_canonicals(matches: &[TermMatch]) -> Vec<String> {
    let mut out: Vec<String> = Vec::new();
    for m in matches {
        if !out.contains(&m.canonical) {
            out.push(m.canonical.clone());
        }
    }
    out
}

/// 별칭 테이블 + 어휘 이름으로 후보 목록 구성 (어휘에 없는 정식 명칭은 제외)
fn vocabulary_candidates<'v>(
    table: &AliasTable,
    language: Language,
    names: impl Iterator<Item = &'v String>,
    resolve: impl Fn(&str) -> Option<&'v str>,
) -> Vec<(String, String)> {
    let mut candidates: Vec<(String, String)> = table
        .terms(language)
        .filter_map(|(term, canonical)| {
            resolve(canonical).map(|name| (term.to_string(), name.to_string()))
        })
        .collect();
    candidates.extend(names.map(|name| (name.to_lowercase(), name.clone())));
    candidates
}

// ============================================================================
// Sector / City / State
// ============================================================================

pub(crate) fn sector_matches(text: &str, language: Language, vocab: &Vocabulary) -> Vec<TermMatch> {
    let candidates =
        vocabulary_candidates(&SECTORS, language, vocab.sectors.iter(), |c| vocab.sector(c));
    match_terms(text, &candidates)
}

pub(crate) fn city_matches(text: &str, language: Language, vocab: &Vocabulary) -> Vec<TermMatch> {
    let candidates =
        vocabulary_candidates(&CITIES, language, vocab.cities.iter(), |c| vocab.city(c));
    match_terms(text, &candidates)
}

pub(crate) fn state_matches(text: &str, language: Language, vocab: &Vocabulary) -> Vec<TermMatch> {
    let candidates =
        vocabulary_candidates(&STATES, language, vocab.states.iter(), |c| vocab.state(c));
    match_terms(text, &candidates)
}

/// 데이터셋이 다루지 않는 섹터 언급 (어휘에 있는 경우 제외)
pub(crate) fn unsupported_sector(text: &str, language: Language, vocab: &Vocabulary) -> Option<String> {
    let candidates: Vec<(String, String)> = aliases::UNSUPPORTED_SECTORS
        .terms(language)
        .map(|(term, canonical)| (term.to_string(), canonical.to_string()))
        .collect();

    match_terms(text, &candidates)
        .into_iter()
        .map(|m| m.canonical)
        .find(|canonical| vocab.sector(canonical).is_none())
}

// ============================================================================
// Years
// ============================================================================

/// 텍스트에 나타난 모든 연도 (위치 순)
pub(crate) fn years(text: &str) -> Vec<i32> {
    YEAR_RE
        .captures_iter(text)
        .filter_map(|c| c.get(1)?.as_str().parse().ok())
        .collect()
}

// ============================================================================
// Amount Bounds
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq)]
struct AmountMention {
    start: usize,
    end: usize,
    value: f64,
}

fn parse_number(s: &str) -> Option<f64> {
    s.replace(',', "").parse::<f64>().ok().filter(|v| v.is_finite())
}

/// 단위 또는 통화 기호가 있는 숫자만 금액으로 인식
fn amount_mentions(text: &str) -> Vec<AmountMention> {
    AMOUNT_RE
        .captures_iter(text)
        .filter_map(|caps| {
            let whole = caps.get(0)?;
            let number = parse_number(caps.get(2)?.as_str())?;
            let unit = caps.get(3).and_then(|m| unit_multiplier(m.as_str()));
            let currency = caps.get(1).is_some();

            if unit.is_none() && !currency {
                return None;
            }

            // 단위가 아닌 단어는 매치 범위에서 제외
            let end = match (unit, caps.get(3)) {
                (None, Some(_)) => caps.get(2)?.end(),
                _ => whole.end(),
            };

            Some(AmountMention {
                start: whole.start(),
                end,
                value: number * unit.unwrap_or(1.0),
            })
        })
        .collect()
}

/// 앞쪽 N글자 창
fn window_before(text: &str, start: usize) -> &str {
    let before = &text[..start];
    let idx = before
        .char_indices()
        .rev()
        .nth(CUE_WINDOW_CHARS - 1)
        .map(|(i, _)| i)
        .unwrap_or(0);
    &before[idx..]
}

/// 창 안에서 가장 마지막에 나타난 신호 위치
fn last_cue(window: &str, cues: impl Iterator<Item = &'static str>) -> Option<usize> {
    cues.flat_map(|cue| find_all(window, cue, false))
        .map(|(start, _)| start)
        .max()
}

/// 최소/최대 금액 추출
pub(crate) fn amount_bounds(text: &str, language: Language) -> (Option<f64>, Option<f64>) {
    if let Some(bounds) = between_bounds(text) {
        return bounds;
    }

    let mut min = None;
    let mut max = None;

    for mention in amount_mentions(text) {
        let window = window_before(text, mention.start);
        let above = last_cue(window, keywords(language, |k| k.above_before));
        let below = last_cue(window, keywords(language, |k| k.below_before));

        match (above, below) {
            (Some(a), Some(b)) if a > b => min = min.or(Some(mention.value)),
            (Some(_), None) => min = min.or(Some(mention.value)),
            (_, Some(_)) => max = max.or(Some(mention.value)),
            (None, None) => {
                let after = text[mention.end..].trim_start();
                if keywords(language, |k| k.above_after).any(|cue| after.starts_with(cue)) {
                    min = min.or(Some(mention.value));
                } else if keywords(language, |k| k.below_after).any(|cue| after.starts_with(cue)) {
                    max = max.or(Some(mention.value));
                }
            }
        }
    }

    (min, max)
}

/// "between X and Y" (첫 번째 숫자에 단위가 없으면 두 번째 단위를 공유)
fn between_bounds(text: &str) -> Option<(Option<f64>, Option<f64>)> {
    let caps = BETWEEN_RE.captures(text)?;

    let first = parse_number(caps.get(2)?.as_str())?;
    let second = parse_number(caps.get(5)?.as_str())?;
    let first_unit = caps.get(3).and_then(|m| unit_multiplier(m.as_str()));
    let second_unit = caps.get(6).and_then(|m| unit_multiplier(m.as_str()));
    let currency = caps.get(1).is_some() || caps.get(4).is_some();

    if first_unit.is_none() && second_unit.is_none() && !currency {
        return None;
    }

    let a = first * first_unit.or(second_unit).unwrap_or(1.0);
    let b = second * second_unit.unwrap_or(1.0);
    Some((Some(a.min(b)), Some(a.max(b))))
}

// ============================================================================
// Sort / Count / Grouping
// ============================================================================

/// 정렬 방향 (lowest → most recent → highest 순서로 검사)
pub(crate) fn sort_direction(text: &str, language: Language) -> SortDirection {
    let has = |pick: fn(&Keywords) -> &'static [&'static str]| {
        keywords(language, pick).any(|k| contains_term(text, k))
    };

    if has(|k| k.lowest) {
        SortDirection::LowestAmount
    } else if has(|k| k.recent) {
        SortDirection::MostRecent
    } else if has(|k| k.highest) {
        SortDirection::HighestAmount
    } else {
        SortDirection::Similarity
    }
}

/// 목록 키워드/명사에 인접한 1-3자리 숫자
pub(crate) fn requested_count(text: &str, language: Language) -> Option<usize> {
    let cues: Vec<&'static str> = keywords(language, |k| k.ranked_list)
        .chain(keywords(language, |k| k.list_nouns))
        .collect();

    COUNT_RE.captures_iter(text).find_map(|caps| {
        let m = caps.get(1)?;
        let before = text[..m.start()].trim_end();
        let after = text[m.end()..].trim_start();

        let adjacent = cues
            .iter()
            .any(|cue| before.ends_with(cue) || after.starts_with(cue));
        if !adjacent {
            return None;
        }

        let n: usize = m.as_str().parse().ok()?;
        Some(n.clamp(1, MAX_REQUESTED_COUNT))
    })
}

/// "most funded" 류 표현
pub(crate) fn wants_company_grouping(text: &str, language: Language) -> bool {
    keywords(language, |k| k.most_funded).any(|k| contains_term(text, k))
}

// ============================================================================
// Company
// ============================================================================

/// 해석된 회사명
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct CompanyMention {
    pub name: String,
    /// 어휘(데이터셋)에 존재
    pub in_dataset: bool,
}

/// 회사명 해석
///
/// 1. 현지어 회사명 역음역
/// 2. 어휘 회사명 언급 (긴 이름 우선, 단어 경계)
/// 3. 조회 문구 패턴
pub(crate) fn company(
    original: &str,
    text: &str,
    language: Language,
    vocab: &Vocabulary,
) -> Option<CompanyMention> {
    if let Some(english) = aliases::reverse_transliterate(original) {
        return Some(resolve_company(english, vocab));
    }

    let mut names: Vec<&String> = vocab.companies.iter().collect();
    names.sort_by_key(|name| std::cmp::Reverse(name.chars().count()));
    if let Some(name) = names
        .into_iter()
        .find(|name| !find_all(text, &name.to_lowercase(), true).is_empty())
    {
        return Some(CompanyMention {
            name: name.clone(),
            in_dataset: true,
        });
    }

    LOOKUP_PATTERNS.iter().find_map(|pattern| {
        let captured = pattern.captures(text)?.get(1)?.as_str();
        let name = clean_company_name(captured);
        if is_rejected_name(&name, language) {
            return None;
        }
        Some(resolve_company(&title_case(&name), vocab))
    })
}

fn resolve_company(name: &str, vocab: &Vocabulary) -> CompanyMention {
    match vocab.company(name) {
        Some(known) => CompanyMention {
            name: known.to_string(),
            in_dataset: true,
        },
        None => CompanyMention {
            name: name.to_string(),
            in_dataset: false,
        },
    }
}

fn clean_company_name(captured: &str) -> String {
    let mut name = captured.split_whitespace().collect::<Vec<_>>().join(" ");
    for suffix in [" company", " startup"] {
        if let Some(stripped) = name.strip_suffix(suffix) {
            name = stripped.to_string();
        }
    }
    if let Some(stripped) = name.strip_prefix("the ") {
        name = stripped.to_string();
    }
    name.replace(['.', '?'], "").trim().to_string()
}

fn is_rejected_name(name: &str, language: Language) -> bool {
    if name.chars().count() < 2 || GENERIC_WORDS.contains(&name) {
        return true;
    }
    if name.split_whitespace().count() > MAX_COMPANY_WORDS {
        return true;
    }
    if name.chars().any(|c| c.is_ascii_digit()) {
        return true;
    }
    if name
        .split_whitespace()
        .any(|word| NON_NAME_WORDS.contains(&word))
    {
        return true;
    }

    // 섹터/도시 별칭이나 의도 키워드가 들어간 문구는 회사명이 아님
    let alias_hit = SECTORS
        .terms(language)
        .chain(CITIES.terms(language))
        .any(|(term, _)| contains_term(name, term));
    let keyword_hit = keywords(language, |k| k.aggregation)
        .chain(keywords(language, |k| k.comparison))
        .chain(keywords(language, |k| k.ranked_list))
        .chain(keywords(language, |k| k.list_nouns))
        .chain(keywords(language, |k| k.highest))
        .chain(keywords(language, |k| k.lowest))
        .chain(keywords(language, |k| k.recent))
        .any(|k| contains_term(name, k));

    alias_hit || keyword_hit
}

/// 라틴 문자 단어만 첫 글자 대문자
fn title_case(name: &str) -> String {
    name.split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) if first.is_ascii_alphabetic() => {
                    first.to_ascii_uppercase().to_string() + chars.as_str()
                }
                _ => word.to_string(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn vocab() -> Vocabulary {
        let mut v = Vocabulary::default();
        for s in ["Fintech", "Edtech", "Healthtech", "Foodtech", "E-Commerce"] {
            v.sectors.insert(s.to_string());
        }
        for c in ["Bangalore", "Mumbai", "Delhi"] {
            v.cities.insert(c.to_string());
        }
        for s in ["Karnataka", "Maharashtra"] {
            v.states.insert(s.to_string());
        }
        for c in ["Swiggy", "Razorpay", "Ola"] {
            v.companies.insert(c.to_string());
        }
        v.years = Some((2015, 2023));
        v
    }

    #[test]
    fn test_contains_term_boundaries() {
        assert!(contains_term("top 5 startups", "top"));
        assert!(!contains_term("laptop deals", "top"));
        assert!(contains_term("show healthtech firms", "healthtech"));
        assert!(!contains_term("startups", "up"));
    }

    #[test]
    fn test_latin_terms_need_word_boundary() {
        assert!(!contains_term("startups across the country", "count"));
        assert!(!contains_term("overall picture", "over"));
        assert!(!contains_term("trendy apps", "trend"));
        assert!(contains_term("deal count in 2021", "count"));
        // 인도 문자는 조사가 붙어도 일치
        assert!(contains_term("फिनटेकमें निवेश", "फिनटेक"));
    }

    #[test]
    fn test_longest_alias_wins() {
        let m = sector_matches("healthtech companies", Language::En, &vocab());
        assert_eq!(m.len(), 1);
        assert_eq!(m[0].canonical, "Healthtech");

        let m = sector_matches("food delivery startups", Language::En, &vocab());
        assert_eq!(m[0].canonical, "Foodtech");
    }

    #[test]
    fn test_sector_alias_outside_vocabulary_dropped() {
        // "saas" resolves to SaaS, which is not in the vocabulary
        assert!(sector_matches("saas startups", Language::En, &vocab()).is_empty());
    }

    #[test]
    fn test_native_city_alias() {
        let m = city_matches("बेंगलुरु में फिनटेक", Language::Hi, &vocab());
        assert_eq!(m[0].canonical, "Bangalore");
    }

    #[test]
    fn test_unsupported_sector() {
        assert_eq!(
            unsupported_sector("crypto startups in 2021", Language::En, &vocab()),
            Some("Crypto".to_string())
        );
        assert_eq!(unsupported_sector("fintech startups", Language::En, &vocab()), None);
    }

    #[test]
    fn test_amount_bounds() {
        assert_eq!(
            amount_bounds("startups that raised above 5 crore", Language::En),
            (Some(50_000_000.0), None)
        );
        assert_eq!(
            amount_bounds("deals under ₹50 lakh", Language::En),
            (None, Some(5_000_000.0))
        );
        assert_eq!(
            amount_bounds("between 5 and 10 crore", Language::En),
            (Some(50_000_000.0), Some(100_000_000.0))
        );
        assert_eq!(
            amount_bounds("10 करोड़ से ज्यादा फंडिंग", Language::Hi),
            (Some(100_000_000.0), None)
        );
    }

    #[test]
    fn test_plain_numbers_are_not_amounts() {
        assert_eq!(amount_bounds("top 5 companies over 2021", Language::En), (None, None));
        assert_eq!(amount_bounds("between 2020 and 2021", Language::En), (None, None));
    }

    #[test]
    fn test_sort_direction_order() {
        assert_eq!(
            sort_direction("lowest funded startups", Language::En),
            SortDirection::LowestAmount
        );
        assert_eq!(
            sort_direction("latest top deals", Language::En),
            SortDirection::MostRecent
        );
        assert_eq!(
            sort_direction("biggest rounds", Language::En),
            SortDirection::HighestAmount
        );
        assert_eq!(
            sort_direction("fintech in pune", Language::En),
            SortDirection::Similarity
        );
    }

    #[test]
    fn test_requested_count() {
        assert_eq!(requested_count("top 5 fintech startups", Language::En), Some(5));
        assert_eq!(requested_count("show 7 largest rounds", Language::En), Some(7));
        assert_eq!(requested_count("टॉप 3 कंपनियां", Language::Hi), Some(3));
        assert_eq!(requested_count("top 500 companies", Language::En), Some(50));
        assert_eq!(requested_count("funding in 2021", Language::En), None);
    }

    #[test]
    fn test_company_from_vocabulary() {
        let mention = company("Total funding of Swiggy", "total funding of swiggy", Language::En, &vocab());
        assert_eq!(
            mention,
            Some(CompanyMention {
                name: "Swiggy".to_string(),
                in_dataset: true
            })
        );
    }

    #[test]
    fn test_company_from_native_script() {
        let mention = company("स्विगी क्या करती है", "स्विगी क्या करती है", Language::Hi, &vocab());
        assert_eq!(mention.unwrap().name, "Swiggy");
    }

    #[test]
    fn test_company_from_lookup_pattern() {
        let mention = company("What does Zepto do?", "what does zepto do?", Language::En, &vocab()).unwrap();
        assert_eq!(mention.name, "Zepto");
        assert!(!mention.in_dataset);
    }

    #[test]
    fn test_lookup_pattern_rejections() {
        let v = vocab();
        assert!(company("", "what is the total funding in 2021", Language::En, &v).is_none());
        assert!(company("", "tell me about fintech", Language::En, &v).is_none());
        assert!(company("", "what is it", Language::En, &v).is_none());
        assert!(company("", "what is the average deal size", Language::En, &v).is_none());
    }

    #[test]
    fn test_ordinary_questions_are_not_companies() {
        let v = vocab();
        for query in [
            "what is the funding scene in india?",
            "tell me about recent investments",
            "what is happening in indian tech",
            "tell me about the newest deals",
            "what is going on with startup funding",
        ] {
            assert!(company("", query, Language::En, &v).is_none(), "{}", query);
        }
        // 짧은 고유명사는 계속 인식
        let mention = company("", "tell me about cure fit", Language::En, &v).unwrap();
        assert_eq!(mention.name, "Cure Fit");
    }

    #[test]
    fn test_title_case() {
        assert_eq!(title_case("urban company"), "Urban Company");
        assert_eq!(title_case("मीशो"), "मीशो");
    }
}
