use anyhow::{Context, Result};
use rusqlite::{Connection, OptionalExtension};
use sha2::{Digest, Sha256};
use std::path::PathBuf;

use crate::paths;

/// Everything that determines a translation result.
#[derive(Debug, Clone, Copy)]
pub struct CacheKey<'a> {
    pub backend: &'a str,
    pub endpoint: &'a str,
    pub model: &'a str,
    /// Empty for backends that do not use a prompt.
    pub prompt_hash: &'a str,
    pub target_language: &'a str,
    pub source_text: &'a str,
}

impl CacheKey<'_> {
    pub fn digest(&self) -> String {
        let cache_input = serde_json::json!({
            "backend": self.backend,
            "endpoint": self.endpoint,
            "model": self.model,
            "prompt_hash": self.prompt_hash,
            "target_language": self.target_language,
            "source_text": self.source_text,
        });

        let mut hasher = Sha256::new();
        hasher.update(cache_input.to_string().as_bytes());
        hex::encode(hasher.finalize())
    }
}

/// Sentence translations stored in `SQLite`.
pub struct CacheManager {
    db_path: PathBuf,
}

impl CacheManager {
    /// Opens (and creates if needed) `translations.db` in the cache directory.
    pub fn new() -> Result<Self> {
        let cache_dir = paths::cache_dir()?;

        std::fs::create_dir_all(&cache_dir).with_context(|| {
            format!("Failed to create cache directory: {}", cache_dir.display())
        })?;

        Self::open(cache_dir.join("translations.db"))
    }

    pub fn open(db_path: PathBuf) -> Result<Self> {
        let manager = Self { db_path };
        manager.init_db()?;
        Ok(manager)
    }

    fn init_db(&self) -> Result<()> {
        let conn = self.connect()?;

        conn.execute(
            "CREATE TABLE IF NOT EXISTS translations (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                cache_key TEXT UNIQUE NOT NULL,
                backend TEXT NOT NULL,
                source_text TEXT NOT NULL,
                translated_text TEXT NOT NULL,
                target_language TEXT NOT NULL,
                created_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP,
                accessed_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP
            )",
            [],
        )
        .context("Failed to create translations table")?;

        Ok(())
    }

    fn connect(&self) -> Result<Connection> {
        Connection::open(&self.db_path)
            .with_context(|| format!("Failed to open cache database: {}", self.db_path.display()))
    }

    pub fn get(&self, key: &CacheKey<'_>) -> Result<Option<String>> {
        let digest = key.digest();
        let conn = self.connect()?;

        let result: Option<String> = conn
            .query_row(
                "SELECT translated_text FROM translations WHERE cache_key = ?1",
                [&digest],
                |row| row.get(0),
            )
            .optional()
            .context("Failed to read translation cache")?;

        if result.is_some() {
            conn.execute(
                "UPDATE translations SET accessed_at = CURRENT_TIMESTAMP WHERE cache_key = ?1",
                [&digest],
            )?;
        }

        Ok(result)
    }

    pub fn put(&self, key: &CacheKey<'_>, translated_text: &str) -> Result<()> {
        let digest = key.digest();
        let conn = self.connect()?;

        conn.execute(
            "INSERT OR REPLACE INTO translations
             (cache_key, backend, source_text, translated_text, target_language)
             VALUES (?1, ?2, ?3, ?4, ?5)",
            [
                digest.as_str(),
                key.backend,
                key.source_text,
                translated_text,
                key.target_language,
            ],
        )
        .context("Failed to insert translation into cache")?;

        Ok(())
    }
}
