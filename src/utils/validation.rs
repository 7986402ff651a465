//! Centralized validation and helper functions.

use std::path::Path;

/// Maximum number of meta-information lines read from one header (DOS protection)
pub const MAX_HEADER_LINES: usize = 100_000;

/// Leading bytes of every gzip (and bgzip) stream
pub const GZIP_MAGIC: [u8; 2] = [0x1f, 0x8b];

/// Check if reading another header line would exceed the maximum allowed.
///
/// Call this with the current count BEFORE adding a new line.
/// Returns an error message if adding would exceed the limit, None if safe to add.
#[must_use]
pub fn check_header_line_limit(count: usize) -> Option<String> {
    if count >= MAX_HEADER_LINES {
        Some(format!(
            "Too many header lines: adding another would exceed maximum of {MAX_HEADER_LINES}"
        ))
    } else {
        None
    }
}

/// True if the bytes start with the gzip magic number
#[must_use]
pub fn is_gzip(content: &[u8]) -> bool {
    content.starts_with(&GZIP_MAGIC)
}

/// True if the path carries a gzip-style extension (`.gz`, `.bgz`)
#[must_use]
pub fn has_gzip_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("gz") || e.eq_ignore_ascii_case("bgz"))
}

/// Split a comma-separated tag list as given on the command line.
///
/// Surrounding whitespace is dropped and empty entries are skipped, so `""`
/// yields an empty list.
///
/// # Examples
///
/// ```
/// use vcf_header_tags::utils::validation::split_tag_list;
///
/// assert_eq!(split_tag_list("ID, Number,Type"), vec!["ID", "Number", "Type"]);
/// assert!(split_tag_list("").is_empty());
/// ```
#[must_use]
pub fn split_tag_list(list: &str) -> Vec<String> {
    list.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_header_line_limit() {
        assert!(check_header_line_limit(100).is_none());
        assert!(check_header_line_limit(MAX_HEADER_LINES - 1).is_none());
        assert!(check_header_line_limit(MAX_HEADER_LINES).is_some());
        assert!(check_header_line_limit(MAX_HEADER_LINES + 1).is_some());
    }

    #[test]
    fn test_is_gzip() {
        assert!(is_gzip(&[0x1f, 0x8b, 0x08, 0x04]));
        assert!(!is_gzip(b"##fileformat=VCFv4.2"));
        assert!(!is_gzip(&[0x1f]));
        assert!(!is_gzip(&[]));
    }

    #[test]
    fn test_has_gzip_extension() {
        assert!(has_gzip_extension(Path::new("sample.vcf.gz")));
        assert!(has_gzip_extension(Path::new("sample.vcf.BGZ")));
        assert!(!has_gzip_extension(Path::new("sample.vcf")));
        assert!(!has_gzip_extension(Path::new("gz")));
    }

    #[test]
    fn test_split_tag_list() {
        assert_eq!(split_tag_list("ID,Description"), vec!["ID", "Description"]);
        assert_eq!(split_tag_list(" ID , ,Description "), vec!["ID", "Description"]);
        assert!(split_tag_list("").is_empty());
        assert!(split_tag_list(" , ").is_empty());
    }
}
