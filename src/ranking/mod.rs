//! Ranking 모듈 - 의도/정렬 방향에 따른 후보 재정렬
//!
//! 안정 정렬이며 잘라내지 않습니다. 표시 개수 제한은 합성 단계에서 적용합니다.

use std::cmp::Ordering;

use crate::query::{FilterSpec, Intent, SortDirection};
use crate::retrieval::{by_score, Candidate};

/// 실제 적용할 정렬 방향
///
/// 순위 목록 의도에 정렬 키워드가 없으면 금액 내림차순으로 정렬합니다.
pub fn effective_sort(filter: &FilterSpec, intent: Intent) -> SortDirection {
    match (filter.sort, intent) {
        (SortDirection::Similarity, Intent::RankedList) => SortDirection::HighestAmount,
        (sort, _) => sort,
    }
}

/// 후보 재정렬
///
/// # Arguments
/// * `candidates` - 검색 후보 (점수 내림차순)
/// * `filter` - 정렬 방향을 담은 필터
/// * `intent` - 질의 의도
pub fn rank(mut candidates: Vec<Candidate>, filter: &FilterSpec, intent: Intent) -> Vec<Candidate> {
    match effective_sort(filter, intent) {
        SortDirection::HighestAmount => {
            candidates.sort_by(|a, b| {
                b.amount()
                    .total_cmp(&a.amount())
                    .then_with(|| by_score(a, b))
            });
        }
        SortDirection::LowestAmount => {
            // 금액 미상(0)은 오름차순에서 제외
            candidates.retain(|c| c.amount() > 0.0);
            candidates.sort_by(|a, b| {
                a.amount()
                    .total_cmp(&b.amount())
                    .then_with(|| by_score(a, b))
            });
        }
        SortDirection::MostRecent => {
            candidates.sort_by(|a, b| recency(b, a).then_with(|| by_score(a, b)));
        }
        SortDirection::Similarity => candidates.sort_by(by_score),
    }
    candidates
}

/// (연도, 날짜) 비교, 값이 없으면 가장 오래된 것으로 취급
fn recency(a: &Candidate, b: &Candidate) -> Ordering {
    let key = |c: &Candidate| (c.metadata.year, c.metadata.date.clone());
    // Option의 순서에서 None < Some 이므로 내림차순 정렬 시 None이 뒤로 감
    key(a).cmp(&key(b))
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::index::DocumentMetadata;
    use crate::records::tests::record;

    fn candidate(row_id: u64, amount: f64, year: Option<i32>, score: f32) -> Candidate {
        let mut metadata =
            DocumentMetadata::from_record(&record(row_id, "Co", amount, "Fintech", "Pune", 2020))
                .unwrap();
        metadata.year = year;
        metadata.date = year.map(|y| format!("{}-06-01", y));
        Candidate {
            metadata,
            summary: String::new(),
            score,
        }
    }

    fn ids(candidates: &[Candidate]) -> Vec<u64> {
        candidates.iter().map(|c| c.row_id()).collect()
    }

    fn filter(sort: SortDirection) -> FilterSpec {
        FilterSpec {
            sort,
            ..Default::default()
        }
    }

    #[test]
    fn test_highest_amount_keeps_zero() {
        let ranked = rank(
            vec![
                candidate(0, 10.0, Some(2020), 0.9),
                candidate(1, 0.0, Some(2020), 0.8),
                candidate(2, 50.0, Some(2020), 0.5),
                candidate(3, 50.0, Some(2020), 0.7),
            ],
            &filter(SortDirection::HighestAmount),
            Intent::GenericRetrieval,
        );
        assert_eq!(ids(&ranked), vec![3, 2, 0, 1]);
    }

    #[test]
    fn test_lowest_amount_drops_zero() {
        let ranked = rank(
            vec![
                candidate(0, 10.0, None, 0.9),
                candidate(1, 0.0, None, 0.8),
                candidate(2, 5.0, None, 0.5),
            ],
            &filter(SortDirection::LowestAmount),
            Intent::RankedList,
        );
        assert_eq!(ids(&ranked), vec![2, 0]);
    }

    #[test]
    fn test_most_recent_missing_last() {
        let ranked = rank(
            vec![
                candidate(0, 1.0, None, 0.99),
                candidate(1, 1.0, Some(2019), 0.5),
                candidate(2, 1.0, Some(2023), 0.4),
                candidate(3, 1.0, Some(2023), 0.6),
            ],
            &filter(SortDirection::MostRecent),
            Intent::GenericRetrieval,
        );
        assert_eq!(ids(&ranked), vec![3, 2, 1, 0]);
    }

    #[test]
    fn test_similarity_default() {
        let ranked = rank(
            vec![
                candidate(0, 100.0, None, 0.3),
                candidate(1, 1.0, None, 0.9),
            ],
            &FilterSpec::default(),
            Intent::GenericRetrieval,
        );
        assert_eq!(ids(&ranked), vec![1, 0]);
    }

    #[test]
    fn test_ranked_list_defaults_to_amount() {
        assert_eq!(
            effective_sort(&FilterSpec::default(), Intent::RankedList),
            SortDirection::HighestAmount
        );
        assert_eq!(
            effective_sort(&filter(SortDirection::MostRecent), Intent::RankedList),
            SortDirection::MostRecent
        );
        assert_eq!(
            effective_sort(&FilterSpec::default(), Intent::Aggregation),
            SortDirection::Similarity
        );
    }

    #[test]
    fn test_no_truncation() {
        let candidates: Vec<Candidate> = (0..40)
            .map(|i| candidate(i, i as f64, Some(2020), 0.5))
            .collect();
        let ranked = rank(candidates, &filter(SortDirection::HighestAmount), Intent::RankedList);
        assert_eq!(ranked.len(), 40);
    }
}
