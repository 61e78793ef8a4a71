//! Word list loading utilities
//!
//! Reads a line-delimited word list into a `Dictionary`.

use super::Dictionary;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

/// Error reading a word list
#[derive(Debug, Error)]
pub enum DictionaryError {
    #[error("Dictionary file not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("Failed to read dictionary {}: {source}", .path.display())]
    Unreadable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Load words from a file
///
/// One word per line. Lines are trimmed and lowercased; blank lines are
/// skipped.
///
/// # Errors
///
/// Returns `DictionaryError::NotFound` if the file does not exist and
/// `DictionaryError::Unreadable` for any other I/O failure (including a file
/// that is not valid UTF-8).
///
/// # Examples
/// ```no_run
/// use spelling_bee::wordlists::loader::load_from_file;
///
/// let words = load_from_file("EnglishWords.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Dictionary, DictionaryError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| {
        if source.kind() == io::ErrorKind::NotFound {
            DictionaryError::NotFound(path.to_path_buf())
        } else {
            DictionaryError::Unreadable {
                path: path.to_path_buf(),
                source,
            }
        }
    })?;

    let words = words_from_text(&content);
    debug!(path = %path.display(), words = words.len(), "loaded dictionary");
    Ok(words)
}

/// Parse line-delimited text into a dictionary
///
/// # Examples
/// ```
/// use spelling_bee::wordlists::loader::words_from_text;
///
/// let words = words_from_text("Plant\n  plane \n\n");
/// assert_eq!(words.len(), 2);
/// assert!(words.contains("plant"));
/// ```
#[must_use]
pub fn words_from_text(text: &str) -> Dictionary {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_lowercase)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn words_from_text_normalizes_lines() {
        let words = words_from_text("PLANT\n\tplane\r\nPlants  \n");

        assert_eq!(words.len(), 3);
        assert!(words.contains("plant"));
        assert!(words.contains("plane"));
        assert!(words.contains("plants"));
    }

    #[test]
    fn words_from_text_skips_blank_lines() {
        let words = words_from_text("\n\n   \nplant\n\n");
        assert_eq!(words.len(), 1);
    }

    #[test]
    fn words_from_text_deduplicates() {
        let words = words_from_text("plant\nPLANT\nPlant");
        assert_eq!(words.len(), 1);
    }

    #[test]
    fn words_from_text_empty() {
        assert!(words_from_text("").is_empty());
    }

    #[test]
    fn load_from_file_reads_words() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "plant").unwrap();
        writeln!(file, "Plane").unwrap();
        writeln!(file, "plants").unwrap();

        let words = load_from_file(file.path()).unwrap();
        assert_eq!(words.len(), 3);
        assert!(words.contains("plane"));
    }

    #[test]
    fn load_from_file_missing_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.txt");

        let err = load_from_file(&missing).unwrap_err();
        assert!(matches!(err, DictionaryError::NotFound(ref p) if *p == missing));
        assert!(err.to_string().starts_with("Dictionary file not found"));
    }

    #[test]
    fn load_from_file_invalid_utf8_is_unreadable() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(&[0xff, 0xfe, b'\n']).unwrap();

        let err = load_from_file(file.path()).unwrap_err();
        assert!(matches!(err, DictionaryError::Unreadable { .. }));
    }
}
