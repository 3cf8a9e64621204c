//! Small phrasing helpers shared by the derivers.

/// Join items as prose: "a", "a and b", "a, b and c"
pub fn join_natural(items: &[String]) -> String {
    match items {
        [] => String::new(),
        [only] => only.clone(),
        [head @ .., last] => format!("{} and {}", head.join(", "), last),
    }
}

/// Lowercased copy of every item
pub fn lowercase_all(items: &[String]) -> Vec<String> {
    items.iter().map(|item| item.to_lowercase()).collect()
}

/// Uppercase the first character
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Trim and end with exactly one period
pub fn as_sentence(s: &str) -> String {
    format!("{}.", s.trim().trim_end_matches('.'))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_join_natural() {
        assert_eq!(join_natural(&[]), "");
        assert_eq!(join_natural(&strings(&["A"])), "A");
        assert_eq!(join_natural(&strings(&["A", "B"])), "A and B");
        assert_eq!(join_natural(&strings(&["A", "B", "C"])), "A, B and C");
    }

    #[test]
    fn test_capitalize() {
        assert_eq!(capitalize("no major side effects"), "No major side effects");
        assert_eq!(capitalize(""), "");
    }

    #[test]
    fn test_as_sentence() {
        assert_eq!(as_sentence("Apply 3-4 drops"), "Apply 3-4 drops.");
        assert_eq!(as_sentence("Apply 3-4 drops. "), "Apply 3-4 drops.");
    }

    #[test]
    fn test_lowercase_all() {
        assert_eq!(lowercase_all(&strings(&["Oily", "DRY"])), vec!["oily", "dry"]);
    }
}
