//! 파이프라인 경계 오류
//!
//! 범위 밖 / 결과 없음 / 데이터셋에 없는 회사는 오류가 아니라 답변으로 처리합니다.

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PipelineError {
    #[error("invalid request: {0}")]
    Validation(String),
    #[error("pipeline is not ready: no context installed")]
    NotReady,
}
