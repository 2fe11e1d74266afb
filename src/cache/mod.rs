//! Cache 모듈 - 이름 현지화 캐시
//!
//! - TranslationCache: (언어, 원문) → 현지어 표기, JSON 파일에 보관
//!   (데이터셋 밖 회사 설명도 `<언어>:description` 구역에 함께 보관)
//! - Transliterator: 캐시 우선, 없으면 생성 서비스로 음역 후 캐시에 추가
//!
//! 캐시 저장은 best-effort입니다. 실패해도 질의는 실패하지 않습니다.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::{Arc, RwLock};
use std::time::Duration;

use anyhow::{Context, Result};

use crate::generation::{generate_with_timeout, GenerateOptions, Generator};
use crate::lang::aliases::{CITIES, COMPANIES, SECTORS};
use crate::lang::Language;

/// 언어 태그 → (원문 → 현지어)
type Entries = BTreeMap<String, BTreeMap<String, String>>;

// ============================================================================
// TranslationCache
// ============================================================================

#[derive(Debug, Default)]
pub struct TranslationCache {
    path: Option<PathBuf>,
    entries: RwLock<Entries>,
    /// 파일 쓰기 직렬화
    write_lock: tokio::sync::Mutex<()>,
}

impl TranslationCache {
    /// 파일 없는 캐시
    pub fn in_memory() -> Self {
        Self::default()
    }

    /// 캐시 파일 열기
    ///
    /// 파일이 없거나 손상되었으면 빈 캐시로 시작합니다.
    pub fn open(path: &Path) -> Self {
        let entries = match Self::load(path) {
            Ok(entries) => entries,
            Err(e) => {
                tracing::warn!(error = %e, "Could not load translation cache, starting empty");
                Entries::new()
            }
        };
        let count: usize = entries.values().map(BTreeMap::len).sum();
        tracing::debug!("Loaded {} cached translations from {:?}", count, path);

        Self {
            path: Some(path.to_path_buf()),
            entries: RwLock::new(entries),
            write_lock: tokio::sync::Mutex::new(()),
        }
    }

    fn load(path: &Path) -> Result<Entries> {
        if !path.exists() {
            return Ok(Entries::new());
        }
        let raw = std::fs::read_to_string(path).context("Failed to read translation cache")?;
        serde_json::from_str(&raw).context("Failed to parse translation cache")
    }

    /// 별칭 테이블의 현지어 섹터/도시/회사 표기를 미리 채움 (기존 항목 유지)
    pub fn preload_aliases(&self) {
        let Ok(mut entries) = self.entries.write() else {
            return;
        };
        for table in [&SECTORS, &CITIES, &COMPANIES] {
            for entry in table.entries.iter().filter(|e| !e.language.is_english()) {
                if let Some(native) = entry.terms.first() {
                    entries
                        .entry(entry.language.tag().to_string())
                        .or_default()
                        .entry(entry.canonical.to_string())
                        .or_insert_with(|| native.to_string());
                }
            }
        }
    }

    pub fn get(&self, text: &str, language: Language) -> Option<String> {
        let entries = self.entries.read().ok()?;
        entries.get(language.tag())?.get(text).cloned()
    }

    /// 캐시된 회사 설명 (회사명 대소문자 무시)
    pub fn get_description(&self, company: &str, language: Language) -> Option<String> {
        let entries = self.entries.read().ok()?;
        entries
            .get(&description_key(language))?
            .get(&company.trim().to_lowercase())
            .cloned()
    }

    /// 회사 설명 추가 후 저장
    pub async fn insert_description(&self, company: &str, language: Language, description: &str) {
        if let Ok(mut entries) = self.entries.write() {
            entries
                .entry(description_key(language))
                .or_default()
                .insert(company.trim().to_lowercase(), description.to_string());
        }

        if let Err(e) = self.persist().await {
            tracing::warn!(error = %e, "Failed to persist description cache");
        }
    }

    pub fn len(&self) -> usize {
        self.entries
            .read()
            .map(|e| e.values().map(BTreeMap::len).sum())
            .unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// 항목 추가 후 파일에 저장 (실패 시 경고만 남김)
    pub async fn insert(&self, text: &str, language: Language, translation: &str) {
        if let Ok(mut entries) = self.entries.write() {
            entries
                .entry(language.tag().to_string())
                .or_default()
                .insert(text.to_string(), translation.to_string());
        }

        if let Err(e) = self.persist().await {
            tracing::warn!(error = %e, "Failed to persist translation cache");
        }
    }

    /// 임시 파일에 쓴 뒤 rename으로 교체 (읽는 쪽은 부분 파일을 보지 않음)
    pub async fn persist(&self) -> Result<()> {
        let Some(path) = &self.path else {
            return Ok(());
        };
        let _guard = self.write_lock.lock().await;

        let json = {
            let entries = self
                .entries
                .read()
                .map_err(|_| anyhow::anyhow!("Translation cache lock poisoned"))?;
            serde_json::to_vec_pretty(&*entries).context("Failed to serialize translation cache")?
        };

        if let Some(parent) = path.parent() {
            tokio::fs::create_dir_all(parent)
                .await
                .context("Failed to create cache directory")?;
        }
        let tmp = path.with_extension(format!("json.{}.tmp", uuid::Uuid::new_v4()));
        tokio::fs::write(&tmp, json)
            .await
            .context("Failed to write translation cache")?;
        if let Err(e) = tokio::fs::rename(&tmp, path).await {
            let _ = tokio::fs::remove_file(&tmp).await;
            return Err(e).context("Failed to replace translation cache");
        }
        Ok(())
    }
}

fn description_key(language: Language) -> String {
    format!("{}:description", language.tag())
}

// ============================================================================
// Transliterator
// ============================================================================

/// 라틴 문자 비율이 이 값을 넘으면 음역 실패로 간주
const MAX_ASCII_RATIO: f64 = 0.5;

/// 이름 현지화
#[derive(Clone)]
pub struct Transliterator {
    cache: Arc<TranslationCache>,
    generator: Option<Arc<dyn Generator>>,
    timeout: Duration,
}

impl Transliterator {
    pub fn new(
        cache: Arc<TranslationCache>,
        generator: Option<Arc<dyn Generator>>,
        timeout: Duration,
    ) -> Self {
        Self {
            cache,
            generator,
            timeout,
        }
    }

    pub fn cache(&self) -> &TranslationCache {
        &self.cache
    }

    /// 이름을 대상 언어 문자로 표기
    ///
    /// 영어이거나 음역에 실패하면 원래 이름을 그대로 반환합니다.
    pub async fn localize(&self, name: &str, language: Language) -> String {
        let name = name.trim();
        if language.is_english() || name.is_empty() {
            return name.to_string();
        }
        if let Some(cached) = self.cache.get(name, language) {
            return cached;
        }

        let Some(generator) = &self.generator else {
            return name.to_string();
        };

        let prompt = format!(
            "Write ONLY '{}' in {} Unicode script. No explanation:",
            name,
            language.pack().prompts.script
        );
        match generate_with_timeout(
            generator.as_ref(),
            &prompt,
            GenerateOptions::TRANSLITERATION,
            self.timeout,
        )
        .await
        {
            Ok(output) => match clean_transliteration(&output) {
                Some(native) => {
                    self.cache.insert(name, language, &native).await;
                    native
                }
                None => {
                    tracing::debug!("Rejected transliteration for {}: {:?}", name, output);
                    name.to_string()
                }
            },
            Err(e) => {
                tracing::warn!(error = %e, name, "Transliteration failed");
                name.to_string()
            }
        }
    }
}

/// 첫 줄만 사용하고 따옴표 제거, 라틴 문자가 절반을 넘으면 거부
fn clean_transliteration(output: &str) -> Option<String> {
    let line = output.lines().next()?.replace(['"', '\''], "");
    let line = line.trim();
    if line.is_empty() {
        return None;
    }

    let total = line.chars().count();
    let ascii = line.chars().filter(char::is_ascii).count();
    if ascii as f64 > total as f64 * MAX_ASCII_RATIO {
        return None;
    }
    Some(line.to_string())
}

// ============================================================================
// Tests
// ============================================================================
