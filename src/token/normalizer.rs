/// Removes all whitespace and turns `,` decimal separators into `.`.
pub fn normalize(input: &str) -> String {
    input
        .chars()
        .filter(|c| !c.is_whitespace())
        .map(|c| if c == ',' { '.' } else { c })
        .collect()
}

/// Removes all whitespace, leaving commas untouched.
pub fn strip_whitespace(input: &str) -> String {
    input.chars().filter(|c| !c.is_whitespace()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_spaces_and_commas() {
        assert_eq!(normalize("1,5"), "1.5");
        assert_eq!(normalize(" 3 / 1,5 "), "3/1.5");
        assert_eq!(normalize("20    -30/  3 +4  *2   ^3"), "20-30/3+4*2^3");
        assert_eq!(normalize("1\t+\n2"), "1+2");
    }

    #[test]
    fn test_normalize_is_idempotent() {
        let once = normalize("1 + (2*   (2.5+2,5+  (3-   2)))-(3/1,5)");
        assert_eq!(normalize(&once), once);
        assert_eq!(normalize("3+4*2/(1-5)^2^3"), "3+4*2/(1-5)^2^3");
    }

    #[test]
    fn test_normalize_empty() {
        assert_eq!(normalize(""), "");
        assert_eq!(normalize("   "), "");
    }

    #[test]
    fn test_strip_whitespace_keeps_commas() {
        assert_eq!(strip_whitespace("1 , 5"), "1,5");
    }
}
