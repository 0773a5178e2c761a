use anyhow::Result;
use futures_util::future::BoxFuture;

use super::Translator;
use crate::cache::{CacheKey, CacheManager};

/// Serves repeated sentences from the translation cache.
///
/// Only successful translations are stored.
pub struct CachedTranslator {
    inner: Box<dyn Translator>,
    cache: CacheManager,
    backend: String,
    endpoint: String,
    model: String,
    prompt_hash: String,
}

impl CachedTranslator {
    pub fn new(
        inner: Box<dyn Translator>,
        cache: CacheManager,
        backend: String,
        endpoint: String,
        model: String,
    ) -> Self {
        Self {
            inner,
            cache,
            backend,
            endpoint,
            model,
            prompt_hash: String::new(),
        }
    }

    /// Keys entries on the prompt too, for backends driven by one.
    pub fn with_prompt_hash(mut self, prompt_hash: String) -> Self {
        self.prompt_hash = prompt_hash;
        self
    }

    fn key<'a>(&'a self, text: &'a str, target_language: &'a str) -> CacheKey<'a> {
        CacheKey {
            backend: self.backend.as_str(),
            endpoint: self.endpoint.as_str(),
            model: self.model.as_str(),
            prompt_hash: self.prompt_hash.as_str(),
            target_language,
            source_text: text,
        }
    }

    async fn lookup_or_translate(&self, text: &str, target_language: &str) -> Result<String> {
        let key = self.key(text, target_language);

        if let Some(cached) = self.cache.get(&key)? {
            return Ok(cached);
        }

        let translated = self.inner.translate(text, target_language).await?;
        self.cache.put(&key, &translated)?;
        Ok(translated)
    }
}

impl Translator for CachedTranslator {
    fn translate<'a>(
        &'a self,
        text: &'a str,
        target_language: &'a str,
    ) -> BoxFuture<'a, Result<String>> {
        Box::pin(self.lookup_or_translate(text, target_language))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use tempfile::TempDir;

    struct CountingTranslator {
        calls: Arc<AtomicUsize>,
        fail: bool,
    }

    impl Translator for CountingTranslator {
        fn translate<'a>(
            &'a self,
            text: &'a str,
            target_language: &'a str,
        ) -> BoxFuture<'a, Result<String>> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            let fail = self.fail;
            Box::pin(async move {
                if fail {
                    anyhow::bail!("API request failed with status 503: unavailable");
                }
                Ok::<_, anyhow::Error>(format!("{target_language}:{text}"))
            })
        }
    }

    fn cached_with_prompt(
        temp_dir: &TempDir,
        fail: bool,
        prompt_hash: &str,
    ) -> (CachedTranslator, Arc<AtomicUsize>) {
        let calls = Arc::new(AtomicUsize::new(0));
        let inner = CountingTranslator {
            calls: Arc::clone(&calls),
            fail,
        };
        let cache = CacheManager::open(temp_dir.path().join("translations.db")).unwrap();
        let translator = CachedTranslator::new(
            Box::new(inner),
            cache,
            "google".to_string(),
            "https://translate.googleapis.com".to_string(),
            String::new(),
        )
        .with_prompt_hash(prompt_hash.to_string());
        (translator, calls)
    }

    fn cached(temp_dir: &TempDir, fail: bool) -> (CachedTranslator, Arc<AtomicUsize>) {
        cached_with_prompt(temp_dir, fail, "")
    }

    #[tokio::test]
    async fn test_second_request_is_served_from_cache() {
        let temp_dir = TempDir::new().unwrap();
        let (translator, calls) = cached(&temp_dir, false);

        let first = translator.translate("Hello.", "ja").await.unwrap();
        let second = translator.translate("Hello.", "ja").await.unwrap();

        assert_eq!(first, "ja:Hello.");
        assert_eq!(second, "ja:Hello.");
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_different_target_misses_cache() {
        let temp_dir = TempDir::new().unwrap();
        let (translator, calls) = cached(&temp_dir, false);

        translator.translate("Hello.", "ja").await.unwrap();
        let french = translator.translate("Hello.", "fr").await.unwrap();

        assert_eq!(french, "fr:Hello.");
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn test_failures_are_not_cached() {
        let temp_dir = TempDir::new().unwrap();
        let (translator, calls) = cached(&temp_dir, true);

        assert!(translator.translate("Hello.", "ja").await.is_err());
        assert!(translator.translate("Hello.", "ja").await.is_err());
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn test_changed_prompt_misses_cache() {
        let temp_dir = TempDir::new().unwrap();

        let (before, before_calls) = cached_with_prompt(&temp_dir, false, "old-prompt");
        before.translate("Hello.", "ja").await.unwrap();
        before.translate("Hello.", "ja").await.unwrap();
        assert_eq!(before_calls.load(Ordering::SeqCst), 1);

        let (after, after_calls) = cached_with_prompt(&temp_dir, false, "new-prompt");
        after.translate("Hello.", "ja").await.unwrap();
        assert_eq!(after_calls.load(Ordering::SeqCst), 1);
    }
}
