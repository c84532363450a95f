use std::fs;
use std::io::{Read, Write};
use std::path::{Path, PathBuf};

#[derive(Debug, thiserror::Error)]
pub enum IoError {
    #[error("File not found: {0}")]
    NotFound(PathBuf),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// Decodes raw document bytes as UTF-8.
///
/// A leading byte-order mark is dropped. Invalid sequences are replaced with
/// U+FFFD rather than rejected.
pub fn decode(bytes: &[u8]) -> String {
    let bytes = bytes.strip_prefix(UTF8_BOM).unwrap_or(bytes);
    match std::str::from_utf8(bytes) {
        Ok(text) => text.to_string(),
        Err(e) => {
            log::warn!(
                "input is not valid UTF-8 (first error at byte {}); replacing invalid sequences",
                e.valid_up_to()
            );
            String::from_utf8_lossy(bytes).into_owned()
        }
    }
}

/// Reads a document from `path`, or from standard input when `path` is `None`.
pub fn read_document(path: Option<&Path>) -> Result<String, IoError> {
    let bytes = match path {
        Some(path) => {
            if !path.exists() {
                return Err(IoError::NotFound(path.to_path_buf()));
            }
            log::info!("reading {}", path.display());
            fs::read(path)?
        }
        None => {
            log::info!("reading standard input");
            let mut buf = Vec::new();
            std::io::stdin().lock().read_to_end(&mut buf)?;
            buf
        }
    };
    Ok(decode(&bytes))
}

/// Writes `content` to `path`, or to standard output when `path` is `None`.
pub fn write_document(path: Option<&Path>, content: &str) -> Result<(), IoError> {
    match path {
        Some(path) => {
            // Create parent directories if they don't exist
            if let Some(parent) = path.parent()
                && !parent.as_os_str().is_empty()
            {
                fs::create_dir_all(parent)?;
            }
            fs::write(path, content)?;
        }
        None => {
            let mut out = std::io::stdout().lock();
            out.write_all(content.as_bytes())?;
            out.flush()?;
        }
    }
    Ok(())
}
