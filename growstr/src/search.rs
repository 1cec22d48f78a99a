//! Byte search routines behind `GrowableString::find` and `find_substring`.

/// Position of the first `needle` byte at or after `offset`.
#[must_use]
pub fn find_byte(haystack: &[u8], offset: usize, needle: u8) -> Option<usize> {
    haystack
        .get(offset..)?
        .iter()
        .position(|&b| b == needle)
        .map(|i| i + offset)
}

/// Position of the first full occurrence of `needle` at or after `offset`.
///
/// Scans for the first byte of `needle`, then verifies the rest; a partial
/// match resumes the scan one byte further. An empty needle never matches.
#[must_use]
pub fn find_bytes(haystack: &[u8], offset: usize, needle: &[u8]) -> Option<usize> {
    let first = *needle.first()?;
    let mut from = offset;
    while let Some(start) = find_byte(haystack, from, first) {
        match haystack.get(start..start + needle.len()) {
            Some(window) if window == needle => return Some(start),
            Some(_) => from = start + 1,
            None => return None,
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_byte() {
        assert_eq!(find_byte(b"hello world", 0, b'o'), Some(4));
        assert_eq!(find_byte(b"hello world", 5, b'o'), Some(7));
        assert_eq!(find_byte(b"hello world", 11, b'o'), None);
        assert_eq!(find_byte(b"hello world", 20, b'x'), None);
    }

    #[test]
    fn test_partial_match_is_not_a_match() {
        assert_eq!(find_bytes(b"abcabd", 0, b"abd"), Some(3));
        assert_eq!(find_bytes(b"abcab", 0, b"abd"), None);
        assert_eq!(find_bytes(b"ab", 0, b"abc"), None);
    }

    #[test]
    fn test_find_bytes_offset() {
        assert_eq!(find_bytes(b"one two one", 0, b"one"), Some(0));
        assert_eq!(find_bytes(b"one two one", 1, b"one"), Some(8));
        assert_eq!(find_bytes(b"one", 0, b""), None);
    }
}
