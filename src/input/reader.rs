use anyhow::{Context, Result, bail};
use std::fs;
use std::io::{self, Read};

const MAX_INPUT_SIZE: usize = 1024 * 1024; // 1MB

/// Where the one-shot command reads its English text from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    /// Positional words, joined with single spaces.
    Args(Vec<String>),
    File(String),
    Stdin,
}

impl InputSource {
    /// Positional text wins over `--file`; with neither, stdin is read.
    pub fn select(text: Vec<String>, file: Option<String>) -> Self {
        if !text.is_empty() {
            Self::Args(text)
        } else if let Some(path) = file {
            Self::File(path)
        } else {
            Self::Stdin
        }
    }

    pub fn read(&self) -> Result<String> {
        match self {
            Self::Args(words) => Ok(words.join(" ")),
            Self::File(path) => read_file(path),
            Self::Stdin => read_limited(io::stdin().lock(), "input"),
        }
    }
}

fn read_file(path: &str) -> Result<String> {
    let metadata = fs::metadata(path).with_context(|| format!("Failed to access file: {path}"))?;

    let size = metadata.len() as usize;
    if size > MAX_INPUT_SIZE {
        bail!(too_large(size, "file"));
    }

    fs::read_to_string(path).with_context(|| format!("Failed to read file: {path}"))
}

fn read_limited<R: Read>(mut reader: R, what: &str) -> Result<String> {
    let mut buffer = Vec::new();
    let mut chunk = [0u8; 8192];

    loop {
        let bytes_read = reader
            .read(&mut chunk)
            .context("Failed to read from stdin")?;

        if bytes_read == 0 {
            break;
        }

        buffer.extend_from_slice(&chunk[..bytes_read]);

        if buffer.len() > MAX_INPUT_SIZE {
            bail!(too_large(buffer.len(), what));
        }
    }

    String::from_utf8(buffer).context("Input is not valid UTF-8")
}

fn too_large(size: usize, what: &str) -> String {
    format!(
        "Input size ({:.1} MB) exceeds maximum allowed size (1 MB).\n\n\
         Consider splitting the {what} into smaller parts.",
        size as f64 / 1024.0 / 1024.0
    )
}
