//! Line-oriented root seed files.
//!
//! One root per line. Lines are trimmed; blank lines and lines starting with
//! `#` are skipped.

use std::fmt::Write as _;
use std::path::Path;

use tracing::{info, warn};

use crate::error::SeedError;
use crate::graphemes;

/// Roots listed in seed-file text, in file order. No validation is done.
#[must_use]
pub fn parse_seed(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(str::to_string)
        .collect()
}

/// Read a seed file. Bytes that are not valid UTF-8 are dropped.
///
/// # Errors
/// Returns `SeedError::Read` if the file cannot be read.
pub fn load_seed_file(path: impl AsRef<Path>) -> Result<Vec<String>, SeedError> {
    let path = path.as_ref();
    let bytes = std::fs::read(path).map_err(|source| SeedError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let text = match String::from_utf8(bytes) {
        Ok(text) => text,
        Err(e) => {
            warn!(path = %path.display(), "seed file is not valid UTF-8, dropping bad bytes");
            graphemes::decode_lossy(e.as_bytes())
        }
    };
    let roots = parse_seed(&text);
    info!(path = %path.display(), count = roots.len(), "read seed file");
    Ok(roots)
}

/// Write `roots` as a seed file readable by [`load_seed_file`].
///
/// # Errors
/// Returns `SeedError::Write` if the file cannot be written.
pub fn save_seed_file<I, S>(path: impl AsRef<Path>, roots: I) -> Result<(), SeedError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let path = path.as_ref();
    let mut content = String::from("# Root seed file\n# Format: one root per line\n\n");
    for root in roots {
        let _ = writeln!(content, "{}", root.as_ref());
    }
    std::fs::write(path, content).map_err(|source| SeedError::Write {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_seed_skips_comments_and_blanks() {
        let text = "# header\n\n  كتب  \n#درس\n\t\nزرع\r\n";
        assert_eq!(parse_seed(text), vec!["كتب", "زرع"]);
    }

    #[test]
    fn test_parse_seed_keeps_invalid_entries() {
        // validation happens when the roots are loaded into the index
        assert_eq!(parse_seed("xyz\nكاتب"), vec!["xyz", "كاتب"]);
    }
}
