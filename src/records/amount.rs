//! 금액 파싱 및 포맷팅 - 루피(INR) 단위 정규화
//!
//! 데이터셋의 금액 문자열("₹5 Cr", "₹0.02 L", "1,50,00,000")을
//! 루피 단위의 f64로 정규화하고, 인도식 자릿수 구분으로 다시 표시합니다.

use std::sync::LazyLock;

use regex::Regex;

/// 1 크로르 = 10,000,000 루피
pub const CRORE: f64 = 10_000_000.0;
/// 1 라크 = 100,000 루피
pub const LAKH: f64 = 100_000.0;

/// 숫자 + 단위 토큰 (콤마 포함 숫자, 선택적 소수부)
static NUMBER_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(\d[\d,]*(?:\.\d+)?)\s*([\p{L}\p{M}]+)?").expect("valid amount regex")
});

// ============================================================================
// Parsing
// ============================================================================

/// 금액 문자열을 루피 단위 숫자로 변환
///
/// 통화 기호와 콤마를 제거하고 첫 번째 숫자에 단위 배수를 적용합니다.
/// 파싱할 수 없는 값은 0을 반환합니다 (음수도 0).
///
/// # Examples
/// ```
/// use funding_rag::records::parse_amount;
/// assert_eq!(parse_amount("₹5 Cr"), 50_000_000.0);
/// assert_eq!(parse_amount("₹0.02 L"), 2_000.0);
/// assert_eq!(parse_amount("Unknown"), 0.0);
/// ```
pub fn parse_amount(raw: &str) -> f64 {
    let trimmed = raw.trim();
    if trimmed.is_empty() || trimmed.starts_with('-') {
        return 0.0;
    }

    let Some(caps) = NUMBER_RE.captures(trimmed) else {
        return 0.0;
    };

    let number = caps
        .get(1)
        .and_then(|m| m.as_str().replace(',', "").parse::<f64>().ok())
        .unwrap_or(0.0);

    let multiplier = caps
        .get(2)
        .and_then(|m| unit_multiplier(m.as_str()))
        .unwrap_or(1.0);

    let value = number * multiplier;
    if value.is_finite() && value > 0.0 {
        value
    } else {
        0.0
    }
}

/// 단위 단어를 배수로 변환
///
/// 영어 약어와 인도 언어 단위(करोड़, లక్ష 등)를 모두 인식합니다.
pub fn unit_multiplier(word: &str) -> Option<f64> {
    let lower = word.to_lowercase();
    let multiplier = match lower.as_str() {
        "cr" | "crs" | "crore" | "crores" => CRORE,
        "l" | "lac" | "lacs" | "lakh" | "lakhs" => LAKH,
        "m" | "mn" | "million" | "millions" => 1_000_000.0,
        "b" | "bn" | "billion" | "billions" => 1_000_000_000.0,
        "k" | "thousand" | "thousands" => 1_000.0,
        // Hindi / Marathi
        "करोड़" | "करोड" | "कोटी" => CRORE,
        "लाख" => LAKH,
        // Telugu
        "కోట్లు" | "కోటి" => CRORE,
        "లక్ష" | "లక్షలు" => LAKH,
        // Tamil
        "கோடி" => CRORE,
        "லட்சம்" => LAKH,
        // Kannada
        "ಕೋಟಿ" => CRORE,
        "ಲಕ್ಷ" => LAKH,
        // Gujarati
        "કરોડ" => CRORE,
        "લાખ" => LAKH,
        // Bengali
        "কোটি" => CRORE,
        "লাখ" => LAKH,
        _ => return None,
    };
    Some(multiplier)
}

// ============================================================================
// Formatting
// ============================================================================

/// 인도식 자릿수 구분 (마지막 3자리, 이후 2자리씩)
///
/// 소수점 이하는 최대 2자리이며 뒤쪽 0은 제거합니다.
/// `12345678.5` → `"1,23,45,678.5"`
pub fn format_indian_number(value: f64) -> String {
    let value = if value.is_finite() { value } else { 0.0 };
    let fixed = format!("{:.2}", value.abs());
    let (integer, decimal) = fixed.split_once('.').unwrap_or((fixed.as_str(), ""));
    let decimal = decimal.trim_end_matches('0');

    let grouped = if integer.len() > 3 {
        let (head, last_three) = integer.split_at(integer.len() - 3);
        let mut parts: Vec<&str> = Vec::new();
        let mut end = head.len();
        while end > 0 {
            let start = end.saturating_sub(2);
            parts.push(&head[start..end]);
            end = start;
        }
        parts.reverse();
        format!("{},{}", parts.join(","), last_three)
    } else {
        integer.to_string()
    };

    let sign = if value < 0.0 && fixed != "0.00" { "-" } else { "" };
    if decimal.is_empty() {
        format!("{}{}", sign, grouped)
    } else {
        format!("{}{}.{}", sign, grouped, decimal)
    }
}

/// 루피 금액을 크로르 단위 숫자 문자열로 (인도식 구분)
pub fn format_crores(amount: f64) -> String {
    format_indian_number(amount / CRORE)
}

/// 루피 금액을 라크 단위 숫자 문자열로 (소수 2자리 고정)
pub fn format_lakhs(amount: f64) -> String {
    format!("{:.2}", amount / LAKH)
}

/// 표시용 금액 (`₹5 Cr`, `₹12.5 L`, `₹75,000`)
pub fn format_amount(amount: f64) -> String {
    if amount >= CRORE {
        format!("₹{} Cr", format_crores(amount))
    } else if amount >= LAKH {
        format!("₹{} L", format_indian_number(amount / LAKH))
    } else {
        format!("₹{}", format_indian_number(amount))
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_units() {
        assert_eq!(parse_amount("₹5 Cr"), 50_000_000.0);
        assert_eq!(parse_amount("₹0.02 L"), 2_000.0);
        assert_eq!(parse_amount("$1.5M"), 1_500_000.0);
        assert_eq!(parse_amount("250K"), 250_000.0);
        assert_eq!(parse_amount("3 crore"), 30_000_000.0);
        assert_eq!(parse_amount("2 करोड़"), 20_000_000.0);
    }

    #[test]
    fn test_parse_plain_and_commas() {
        assert_eq!(parse_amount("1,50,00,000"), 15_000_000.0);
        assert_eq!(parse_amount("₹ 2,500"), 2_500.0);
        assert_eq!(parse_amount("Rs. 40000"), 40_000.0);
    }

    #[test]
    fn test_parse_unparseable_is_zero() {
        assert_eq!(parse_amount(""), 0.0);
        assert_eq!(parse_amount("Unknown"), 0.0);
        assert_eq!(parse_amount("undisclosed"), 0.0);
        assert_eq!(parse_amount("-5 Cr"), 0.0);
    }

    #[test]
    fn test_unknown_unit_word_is_ignored() {
        // 단위가 아닌 단어는 배수 1
        assert_eq!(parse_amount("5 startups"), 5.0);
        assert_eq!(unit_multiplier("fintech"), None);
    }

    #[test]
    fn test_format_indian_number() {
        assert_eq!(format_indian_number(0.0), "0");
        assert_eq!(format_indian_number(999.0), "999");
        assert_eq!(format_indian_number(1000.0), "1,000");
        assert_eq!(format_indian_number(100000.0), "1,00,000");
        assert_eq!(format_indian_number(12345678.5), "1,23,45,678.5");
        assert_eq!(format_indian_number(976.18), "976.18");
        assert_eq!(format_indian_number(1.10), "1.1");
    }

    #[test]
    fn test_format_amount() {
        assert_eq!(format_amount(50_000_000.0), "₹5 Cr");
        assert_eq!(format_amount(1_250_000.0), "₹12.5 L");
        assert_eq!(format_amount(75_000.0), "₹75,000");
        assert_eq!(format_crores(123_400_000.0), "12.34");
        assert_eq!(format_lakhs(2_000.0), "0.02");
    }
}
