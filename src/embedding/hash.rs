//! 특성 해싱 임베딩
//!
//! 단어와 문자 3-gram을 SHA-256으로 버킷에 매핑한 뒤 L2 정규화합니다.
//! 네트워크 없이 결정적으로 동작하므로 테스트와 API 키가 없는 환경에서 사용합니다.

use anyhow::Result;
use async_trait::async_trait;
use sha2::{Digest, Sha256};

use super::EmbeddingProvider;

pub const DEFAULT_HASH_DIMENSION: usize = 384;

const WORD_WEIGHT: f32 = 1.0;
const TRIGRAM_WEIGHT: f32 = 0.5;

#[derive(Debug, Clone)]
pub struct HashEmbedding {
    dimension: usize,
}

impl Default for HashEmbedding {
    fn default() -> Self {
        Self::new(DEFAULT_HASH_DIMENSION)
    }
}

impl HashEmbedding {
    pub fn new(dimension: usize) -> Self {
        Self {
            dimension: dimension.max(1),
        }
    }

    /// 텍스트를 정규화된 벡터로 변환 (빈 텍스트는 영벡터)
    pub fn vectorize(&self, text: &str) -> Vec<f32> {
        let mut vector = vec![0.0f32; self.dimension];
        let lowered = text.to_lowercase();

        for token in tokens(&lowered) {
            self.add_feature(&mut vector, &format!("w:{}", token), WORD_WEIGHT);

            let chars: Vec<char> = format!(" {} ", token).chars().collect();
            for gram in chars.windows(3) {
                let gram: String = gram.iter().collect();
                self.add_feature(&mut vector, &format!("g:{}", gram), TRIGRAM_WEIGHT);
            }
        }

        let norm = vector.iter().map(|v| v * v).sum::<f32>().sqrt();
        if norm > 0.0 {
            for v in &mut vector {
                *v /= norm;
            }
        }
        vector
    }

    fn add_feature(&self, vector: &mut [f32], feature: &str, weight: f32) {
        let digest = Sha256::digest(feature.as_bytes());
        let mut bucket = [0u8; 8];
        bucket.copy_from_slice(&digest[..8]);
        let index = (u64::from_le_bytes(bucket) % self.dimension as u64) as usize;
        let sign = if digest[8] & 1 == 0 { 1.0 } else { -1.0 };
        vector[index] += sign * weight;
    }
}

/// 공백과 ASCII 구두점으로 분리 (인도계 문자의 결합 기호는 유지)
fn tokens(text: &str) -> impl Iterator<Item = &str> {
    text.split(|c: char| c.is_whitespace() || c.is_ascii_punctuation())
        .filter(|t| !t.is_empty())
}

#[async_trait]
impl EmbeddingProvider for HashEmbedding {
    async fn embed(&self, text: &str) -> Result<Vec<f32>> {
        Ok(self.vectorize(text))
    }

    async fn embed_batch(&self, texts: &[String]) -> Result<Vec<Vec<f32>>> {
        Ok(texts.iter().map(|t| self.vectorize(t)).collect())
    }

    fn dimension(&self) -> usize {
        self.dimension
    }

    fn name(&self) -> &str {
        "hash-embedding"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dot(a: &[f32], b: &[f32]) -> f32 {
        a.iter().zip(b).map(|(x, y)| x * y).sum()
    }

    #[test]
    fn test_deterministic() {
        let embedder = HashEmbedding::default();
        assert_eq!(
            embedder.vectorize("Razorpay fintech Bangalore"),
            embedder.vectorize("Razorpay fintech Bangalore")
        );
    }

    #[test]
    fn test_normalized() {
        let embedder = HashEmbedding::default();
        let v = embedder.vectorize("Swiggy received funding in Foodtech sector");
        assert!((dot(&v, &v) - 1.0).abs() < 1e-5);
    }

    #[test]
    fn test_empty_is_zero() {
        let embedder = HashEmbedding::new(16);
        let v = embedder.vectorize("  ");
        assert_eq!(v.len(), 16);
        assert!(v.iter().all(|x| *x == 0.0));
    }

    #[test]
    fn test_case_insensitive() {
        let embedder = HashEmbedding::default();
        assert_eq!(embedder.vectorize("FINTECH"), embedder.vectorize("fintech"));
    }

    #[test]
    fn test_shared_words_are_closer() {
        let embedder = HashEmbedding::default();
        let doc = embedder.vectorize("Razorpay received funding in Fintech sector, Bangalore");
        let near = embedder.vectorize("fintech bangalore");
        let far = embedder.vectorize("gaming studios");
        assert!(dot(&doc, &near) > dot(&doc, &far));
    }

    #[test]
    fn test_devanagari_tokens_kept_whole() {
        let collected: Vec<&str> = tokens("फिनटेक कंपनियां, 2021").collect();
        assert_eq!(collected, vec!["फिनटेक", "कंपनियां", "2021"]);
    }
}
