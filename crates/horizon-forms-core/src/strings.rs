//! Small string helpers.

/// Shorten `s` to at most `max_len` characters, appending `append`.
///
/// The cut is made at the last word boundary that fits (a boundary is any
/// position followed by whitespace or ASCII punctuation). Without one, the
/// string is cut hard.
pub fn truncate(s: &str, max_len: usize, append: &str) -> String {
    let len = s.chars().count();
    if len <= max_len {
        return s.to_owned();
    }

    let budget = max_len.saturating_sub(append.chars().count());
    if budget < 1 {
        return append.to_owned();
    }

    let chars: Vec<char> = s.chars().collect();
    let cut = (1..=budget.min(len - 1))
        .rev()
        .find(|&end| is_boundary(chars[end]))
        .unwrap_or(budget);

    let mut out: String = chars[..cut].iter().collect();
    out.push_str(append);
    out
}

fn is_boundary(c: char) -> bool {
    c.is_whitespace() || (c.is_ascii() && !c.is_ascii_alphanumeric())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_string_unchanged() {
        assert_eq!(truncate("abc", 10, "..."), "abc");
        assert_eq!(truncate("abcdefghij", 10, "..."), "abcdefghij");
    }

    #[test]
    fn test_cut_at_word_boundary() {
        assert_eq!(truncate("one two three four", 12, "..."), "one two...");
    }

    #[test]
    fn test_cut_before_punctuation() {
        assert_eq!(truncate("'a', 'b', 'c', 'd'", 12, "..."), "'a', 'b',...");
    }

    #[test]
    fn test_hard_cut_without_boundary() {
        assert_eq!(truncate("abcdefghijklmnop", 8, "..."), "abcde...");
    }

    #[test]
    fn test_tiny_budget() {
        assert_eq!(truncate("abcdef", 3, "..."), "...");
    }
}
