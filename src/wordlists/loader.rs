//! Word list loading utilities
//!
//! Loads a custom dictionary from a file, one word per line.

use super::Dictionary;
use std::fs;
use std::io;
use std::path::Path;

/// Load a dictionary from a file
///
/// Blank lines and lines starting with `#` are ignored; invalid words are
/// skipped by [`Dictionary::from_words`].
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use cordle::wordlists::loader::load_from_file;
///
/// let dictionary = load_from_file("data/words.txt").unwrap();
/// println!("Loaded {} words", dictionary.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Dictionary> {
    let content = fs::read_to_string(path)?;
    Ok(parse_word_list(&content))
}

/// Parse word list text into a dictionary
#[must_use]
pub fn parse_word_list(content: &str) -> Dictionary {
    Dictionary::from_words(
        content
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty() && !line.starts_with('#')),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn parse_skips_comments_and_blanks() {
        let dictionary = parse_word_list("# header\ncrane\n\n  slate  \n#ignored\nox\n");

        assert_eq!(dictionary.len(), 3);
        assert_eq!(dictionary.words_of_length(5), ["crane", "slate"]);
    }

    #[test]
    fn load_from_temp_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "apple\nberry\nkiwi").unwrap();

        let dictionary = load_from_file(file.path()).unwrap();
        assert_eq!(dictionary.lengths(), vec![4, 5]);
    }

    #[test]
    fn load_missing_file_fails() {
        let dir = tempfile::tempdir().unwrap();
        assert!(load_from_file(dir.path().join("missing.txt")).is_err());
    }
}
