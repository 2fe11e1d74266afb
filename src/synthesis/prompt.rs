//! 생성 프롬프트 구성 및 출력 후처리

use std::sync::LazyLock;

use regex::{Regex, RegexBuilder};

use crate::lang::{Language, LanguagePack};
use crate::records::{format_amount, format_crores};
use crate::retrieval::Candidate;

use super::templates::ListSummary;

/// 목록 항목 줄 ("1.", "2)", "-", "*", "•")
static LIST_ITEM_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*(\d+[.)]|[-*•])\s").expect("valid list item regex"));

static BLANK_RUN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\n[ \t]*(\n[ \t]*)+").expect("valid blank run regex"));

/// 제거 후 남는 빈 구분자
static EMPTY_SEPARATOR_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\s*[•|,]\s*){2,}").expect("valid separator regex"));

const SENTENCE_END: [char; 4] = ['.', '!', '?', '।'];

/// 프롬프트 생성
///
/// # Arguments
/// * `query` - 원본 질의
/// * `candidates` - 순위가 매겨진 전체 후보
/// * `summary` - 전체 후보 요약 (회사 수, 총액)
/// * `language` - 답변 언어
/// * `context_rows` - 상세 행 수
pub fn build_prompt(
    query: &str,
    candidates: &[Candidate],
    summary: ListSummary,
    language: Language,
    context_rows: usize,
) -> String {
    let pack = language.pack();
    let p = &pack.prompts;
    let mut out = String::new();

    out.push_str(p.task);
    out.push_str("\n\n");
    out.push_str(&format!(
        "DATASET OVERVIEW: {} records, {} companies, ₹{} Cr total funding\n\n",
        candidates.len(),
        summary.companies,
        format_crores(summary.total_amount)
    ));

    out.push_str(&format!("{}:\n", p.data));
    for (i, c) in candidates.iter().take(context_rows).enumerate() {
        out.push_str(&format!("{}. {}\n", i + 1, context_row(c)));
    }

    out.push_str(&format!("\n{}: {}\n\n", p.question, query));
    out.push_str(&format!("{}:\n", p.instructions_header));
    for (i, line) in p.instructions.iter().enumerate() {
        out.push_str(&format!("{}. {}\n", i + 1, line));
    }
    if !language.is_english() {
        out.push_str(&format!(
            "{}. Respond entirely in {}\n",
            p.instructions.len() + 1,
            p.script
        ));
    }
    out.push_str(&format!("\n{}:", p.answer));
    out
}

/// 상세 행 (없는 필드는 생략)
fn context_row(c: &Candidate) -> String {
    let m = &c.metadata;
    let mut parts = vec![format!("Company: {}", m.company)];
    if m.amount > 0.0 {
        parts.push(format!("Amount: {}", format_amount(m.amount)));
    }
    if let Some(date) = &m.date {
        parts.push(format!("Date: {}", date));
    } else if let Some(year) = m.year {
        parts.push(format!("Year: {}", year));
    }
    parts.push(format!("Sector: {}", m.sector));
    if let Some(city) = &m.city {
        parts.push(format!("City: {}", city));
    }
    if let Some(state) = &m.state {
        parts.push(format!("State: {}", state));
    }
    if let Some(investors) = &m.investors {
        parts.push(format!("Investors: {}", investors));
    }
    parts.join(" | ")
}

/// 생성 출력 후처리
///
/// 1. "unknown" 표기 제거 (영어 + 해당 언어)
/// 2. 연속 빈 줄 축소
/// 3. 마지막 줄이 목록 항목이 아니면 끝의 미완성 문장 제거
///
/// 남는 내용이 없으면 None.
pub fn post_process(raw: &str, language: Language) -> Option<String> {
    let stripped = strip_unknown(raw, language.pack());
    let collapsed = BLANK_RUN_RE.replace_all(&stripped, "\n\n");
    let text = collapsed.trim();
    if text.is_empty() {
        return None;
    }

    let result = trim_incomplete_sentence(text).trim().to_string();
    if result.is_empty() {
        None
    } else {
        Some(result)
    }
}

fn strip_unknown(raw: &str, pack: &LanguagePack) -> String {
    let mut words: Vec<&str> = Language::En.pack().keywords.unknown_words.to_vec();
    words.extend(pack.keywords.unknown_words.iter().copied());
    // 긴 표현 먼저 ("not disclosed" > "disclosed")
    words.sort_by_key(|w| std::cmp::Reverse(w.chars().count()));

    let pattern = words
        .iter()
        .map(|w| regex::escape(w))
        .collect::<Vec<_>>()
        .join("|");
    let Ok(re) = RegexBuilder::new(&pattern).case_insensitive(true).build() else {
        return raw.to_string();
    };

    raw.lines()
        .filter_map(|line| {
            if !re.is_match(line) {
                return Some(line.to_string());
            }
            let removed = re.replace_all(line, "");
            let cleaned = EMPTY_SEPARATOR_RE.replace_all(&removed, " • ");
            let cleaned = cleaned
                .trim_end_matches(|c: char| c.is_whitespace() || matches!(c, '•' | '|' | ','));
            // 값이 모두 지워진 줄과 라벨만 남은 줄("- Investors:")은 버림
            let content = LIST_ITEM_RE.replace(cleaned, "");
            if content.trim().is_empty() || cleaned.ends_with(':') {
                None
            } else {
                Some(cleaned.to_string())
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn trim_incomplete_sentence(text: &str) -> &str {
    let last_line = text.lines().last().unwrap_or("");
    if LIST_ITEM_RE.is_match(last_line) || text.ends_with(SENTENCE_END) {
        return text;
    }
    match last_sentence_end(text) {
        Some(end) => &text[..end],
        None => text,
    }
}

/// 마지막 문장 끝 위치 (종결 부호 뒤가 공백이나 텍스트 끝이어야 함, "₹1,234.56"의 소수점 제외)
fn last_sentence_end(text: &str) -> Option<usize> {
    text.char_indices()
        .filter(|&(pos, c)| {
            SENTENCE_END.contains(&c)
                && text[pos + c.len_utf8()..]
                    .chars()
                    .next()
                    .map_or(true, char::is_whitespace)
        })
        .map(|(pos, c)| pos + c.len_utf8())
        .last()
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::index::DocumentMetadata;
    use crate::records::tests::record;

    fn candidate(company: &str, amount: f64) -> Candidate {
        Candidate {
            metadata: DocumentMetadata::from_record(&record(0, company, amount, "Fintech", "Pune", 2021))
                .unwrap(),
            summary: String::new(),
            score: 0.8,
        }
    }

    #[test]
    fn test_build_prompt_limits_rows() {
        let candidates: Vec<Candidate> =
            (0..20).map(|i| candidate(&format!("Co{}", i), 1.0e7)).collect();
        let prompt = build_prompt(
            "fintech in pune",
            &candidates,
            ListSummary {
                companies: 20,
                total_amount: 20.0e7,
            },
            Language::En,
            15,
        );
        assert!(prompt.contains("DATASET OVERVIEW: 20 records, 20 companies, ₹20 Cr total funding"));
        assert!(prompt.contains("15. Company: Co14"));
        assert!(!prompt.contains("Co15 "));
        assert!(prompt.contains("QUESTION: fintech in pune"));
        assert!(prompt.trim_end().ends_with("ANSWER:"));
    }

    #[test]
    fn test_build_prompt_native_language() {
        let prompt = build_prompt(
            "फिनटेक",
            &[candidate("Cred", 1.0e7)],
            ListSummary {
                companies: 1,
                total_amount: 1.0e7,
            },
            Language::Hi,
            15,
        );
        assert!(prompt.contains("प्रश्न: फिनटेक"));
        assert!(prompt.contains("Respond entirely in Devanagari Hindi"));
    }

    #[test]
    fn test_post_process_strips_unknown() {
        let raw = "1. **Cred** • Unknown • 2021 • Fintech\n2. **Acme** • ₹5 Cr • unknown";
        let out = post_process(raw, Language::En).unwrap();
        assert!(!out.to_lowercase().contains("unknown"));
        assert!(out.contains("1. **Cred** • 2021 • Fintech"));
        assert!(out.ends_with("2. **Acme** • ₹5 Cr"));
    }

    #[test]
    fn test_post_process_drops_label_only_lines() {
        let raw = "**Cred**\n- Investors: Unknown\n- Year: 2021";
        assert_eq!(
            post_process(raw, Language::En).as_deref(),
            Some("**Cred**\n- Year: 2021")
        );
    }

    #[test]
    fn test_post_process_collapses_blank_lines() {
        let out = post_process("Line one.\n\n\n\nLine two.", Language::En).unwrap();
        assert_eq!(out, "Line one.\n\nLine two.");
    }

    #[test]
    fn test_post_process_cuts_incomplete_sentence() {
        let out = post_process("Fintech led funding. Razorpay raised the most and", Language::En);
        assert_eq!(out.as_deref(), Some("Fintech led funding."));

        let out = post_process("कुल 5 कंपनियां। Razorpay ने", Language::Hi);
        assert_eq!(out.as_deref(), Some("कुल 5 कंपनियां।"));
    }

    #[test]
    fn test_post_process_keeps_decimal_amounts() {
        let raw = "Fintech led with ₹1,234.56 Cr across 4 companies in Bangalore";
        assert_eq!(post_process(raw, Language::En).as_deref(), Some(raw));

        let out = post_process("Total ₹12.5 Cr raised. Cred took ₹4.2 Cr and", Language::En);
        assert_eq!(out.as_deref(), Some("Total ₹12.5 Cr raised."));
    }

    #[test]
    fn test_post_process_keeps_trailing_list_item() {
        let raw = "Total 2 companies.\n1. Cred • ₹10 Cr\n2. Acme • ₹5 Cr";
        assert_eq!(post_process(raw, Language::En).as_deref(), Some(raw));
    }

    #[test]
    fn test_post_process_empty() {
        assert_eq!(post_process("  \n unknown \n", Language::En), None);
    }
}
