//! Log truncation for untrusted response bodies
//!
//! The public address endpoint is outside our control; when it misbehaves we
//! log what it sent, but only a bounded, single-line prefix of it.

/// Maximum number of bytes kept from a body in log output.
const TRUNCATE_LIMIT: usize = 128;

/// Largest char boundary not after `index`.
fn floor_char_boundary(s: &str, index: usize) -> usize {
    if index >= s.len() {
        s.len()
    } else {
        let mut i = index;
        while i > 0 && !s.is_char_boundary(i) {
            i -= 1;
        }
        i
    }
}

/// Truncate a body for logging and escape control characters so a hostile
/// response cannot inject fake log lines.
pub fn truncate_for_log(s: &str) -> String {
    let head = &s[..floor_char_boundary(s, TRUNCATE_LIMIT)];
    let escaped: String = head.escape_debug().collect();
    if head.len() == s.len() {
        escaped
    } else {
        format!("{escaped}... [truncated, total {} bytes]", s.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_string_unchanged() {
        assert_eq!(truncate_for_log("203.0.113.7"), "203.0.113.7");
    }

    #[test]
    fn exactly_at_limit() {
        let s = "a".repeat(TRUNCATE_LIMIT);
        assert_eq!(truncate_for_log(&s), s);
    }

    #[test]
    fn over_limit_truncated() {
        let s = "a".repeat(TRUNCATE_LIMIT + 100);
        let result = truncate_for_log(&s);
        assert!(result.contains(&format!("[truncated, total {} bytes]", TRUNCATE_LIMIT + 100)));
        assert!(result.len() < s.len());
    }

    #[test]
    fn newlines_are_escaped() {
        let result = truncate_for_log("<html>\nERROR fake line");
        assert!(!result.contains('\n'));
        assert!(result.contains("\\n"));
    }

    #[test]
    fn multibyte_chars_safe() {
        let s = "é".repeat(200);
        let result = truncate_for_log(&s);
        assert!(result.contains("... [truncated, total 400 bytes]"));
    }
}
