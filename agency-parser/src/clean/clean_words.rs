use crate::normalize::{compile_pattern, RuleTableError};
use itertools::Itertools;
use regex::Regex;

/// builds a case-insensitive pattern matching any of the words as a whole
/// word. only the word itself is matched, so adjacent occurrences sharing a
/// separator ("and and", "inbound/outbound") are all found.
pub fn clean_words(words: &[&str]) -> Result<Regex, RuleTableError> {
    let alternatives = words.iter().map(|w| regex::escape(w)).join("|");
    compile_pattern(&format!(r"\b(?:{alternatives})\b"), true)
}

#[cfg(test)]
mod test {
    use super::clean_words;

    #[test]
    fn test_whole_words_only() {
        let re = clean_words(&["and"]).expect("should compile");
        assert_eq!(re.replace_all("Main and 1st", "&"), "Main & 1st");
        assert_eq!(re.replace_all("Anderson Rd", "&"), "Anderson Rd");
        assert_eq!(re.replace_all("AND Main", "&"), "& Main");
    }

    #[test]
    fn test_adjacent_words_all_match() {
        let re = clean_words(&["inbound", "outbound"]).expect("should compile");
        assert_eq!(re.find_iter("Inbound/Outbound").count(), 2);
        assert_eq!(re.replace_all("Inbound Outbound City Hall", ""), "  City Hall");
    }

    #[test]
    fn test_words_are_escaped() {
        let re = clean_words(&["a+b"]).expect("should compile");
        assert!(re.is_match("route a+b north"));
        assert!(!re.is_match("route aab north"));
    }
}
