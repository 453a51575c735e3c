use super::clean_words;
use crate::normalize::{compile_pattern, RuleTableError};
use regex::Regex;

/// generic, agency-independent label cleanup primitives. every pattern is
/// compiled once in [`LabelCleaner::new`] and every primitive is idempotent.
#[derive(Clone, Debug)]
pub struct LabelCleaner {
    and_word: Regex,
    ampersand: Regex,
    at_word: Regex,
    at_sign: Regex,
    slash: Regex,
    ordinals: Vec<(Regex, &'static str)>,
    street_types: Vec<(Regex, &'static str)>,
    paren_open_space: Regex,
    paren_close_space: Regex,
    empty_parens: Regex,
    spaces: Regex,
}

const ORDINALS: [(&str, &str); 10] = [
    ("first", "1st"),
    ("second", "2nd"),
    ("third", "3rd"),
    ("fourth", "4th"),
    ("fifth", "5th"),
    ("sixth", "6th"),
    ("seventh", "7th"),
    ("eighth", "8th"),
    ("ninth", "9th"),
    ("tenth", "10th"),
];

const STREET_TYPES: [(&str, &str); 17] = [
    ("avenue", "Ave"),
    ("street", "St"),
    ("road", "Rd"),
    ("drive", "Dr"),
    ("boulevard", "Blvd"),
    ("crescent", "Cres"),
    ("court", "Ct"),
    ("place", "Pl"),
    ("lane", "Ln"),
    ("trail", "Trl"),
    ("parkway", "Pkwy"),
    ("highway", "Hwy"),
    ("terrace", "Ter"),
    ("circle", "Cir"),
    ("centre|center", "Ctr"),
    ("heights", "Hts"),
    ("square", "Sq"),
];

/// dangling separators removed from both ends of a label
const LABEL_EDGE_SEPARATORS: [char; 7] = ['-', ',', ';', ':', '/', '&', '@'];

impl LabelCleaner {
    pub fn new() -> Result<LabelCleaner, RuleTableError> {
        let ordinals = ORDINALS
            .iter()
            .map(|(word, ordinal)| {
                let re = compile_pattern(&format!(r"\b{word}\b"), true)?;
                Ok((re, *ordinal))
            })
            .collect::<Result<Vec<_>, RuleTableError>>()?;
        let street_types = STREET_TYPES
            .iter()
            .map(|(words, abbreviation)| {
                let re = compile_pattern(&format!(r"\b(?:{words})\b"), true)?;
                Ok((re, *abbreviation))
            })
            .collect::<Result<Vec<_>, RuleTableError>>()?;
        Ok(LabelCleaner {
            and_word: clean_words(&["and"])?,
            ampersand: compile_pattern(r"\s*&\s*", false)?,
            at_word: clean_words(&["at"])?,
            at_sign: compile_pattern(r"\s*@\s*", false)?,
            slash: compile_pattern(r"\s*/\s*", false)?,
            ordinals,
            street_types,
            paren_open_space: compile_pattern(r"\(\s+", false)?,
            paren_close_space: compile_pattern(r"\s+\)", false)?,
            empty_parens: compile_pattern(r"\(\s*\)", false)?,
            spaces: compile_pattern(r"\s+", false)?,
        })
    }

    /// "Main and 1st" -> "Main & 1st", with single spaces around every "&"
    pub fn clean_and(&self, label: &str) -> String {
        let replaced = self.and_word.replace_all(label, "&");
        self.ampersand.replace_all(&replaced, " & ").into_owned()
    }

    /// "Main at 1st" -> "Main @ 1st", with single spaces around every "@"
    pub fn clean_at(&self, label: &str) -> String {
        let replaced = self.at_word.replace_all(label, "@");
        self.at_sign.replace_all(&replaced, " @ ").into_owned()
    }

    /// "Main St/1 Ave" -> "Main St / 1 Ave"
    pub fn clean_slashes(&self, label: &str) -> String {
        self.slash.replace_all(label, " / ").into_owned()
    }

    /// spelled-out ordinals become numeric: "First Street" -> "1st Street"
    pub fn clean_numbers(&self, label: &str) -> String {
        self.ordinals
            .iter()
            .fold(label.to_string(), |acc, (re, ordinal)| {
                re.replace_all(&acc, *ordinal).into_owned()
            })
    }

    /// street types become their abbreviations: "Main Street" -> "Main St"
    pub fn clean_street_types(&self, label: &str) -> String {
        self.street_types
            .iter()
            .fold(label.to_string(), |acc, (re, abbreviation)| {
                re.replace_all(&acc, *abbreviation).into_owned()
            })
    }

    /// final cleanup: tightens parentheses, drops empty ones, collapses
    /// whitespace and trims dangling separators from both ends.
    pub fn clean_label(&self, label: &str) -> String {
        let mut label = self.paren_open_space.replace_all(label, "(").into_owned();
        label = self.paren_close_space.replace_all(&label, ")").into_owned();
        while self.empty_parens.is_match(&label) {
            label = self.empty_parens.replace_all(&label, "").into_owned();
        }
        label = self.spaces.replace_all(&label, " ").into_owned();
        trim_label_edges(&label).to_string()
    }
}

fn trim_label_edges(label: &str) -> &str {
    label.trim_matches(|c: char| c.is_whitespace() || LABEL_EDGE_SEPARATORS.contains(&c))
}

#[cfg(test)]
mod test {
    use super::LabelCleaner;

    fn cleaner() -> LabelCleaner {
        LabelCleaner::new().expect("test invariant failed: cleaner should build")
    }

    #[test]
    fn test_clean_and() {
        let c = cleaner();
        assert_eq!(c.clean_and("Main and 1st"), "Main & 1st");
        assert_eq!(c.clean_and("Main&1st"), "Main & 1st");
        assert_eq!(c.clean_and("Sandy Anderson"), "Sandy Anderson");
    }

    #[test]
    fn test_clean_and_at_repeated_words() {
        let c = cleaner();
        let and_once = c.clean_and("Main and and 1st");
        assert_eq!(c.clean_label(&and_once), "Main & & 1st");
        assert_eq!(c.clean_and(&and_once), and_once);
        let at_once = c.clean_at("Gate at AT Main");
        assert_eq!(c.clean_label(&at_once), "Gate @ @ Main");
        assert_eq!(c.clean_at(&at_once), at_once);
    }

    #[test]
    fn test_clean_at() {
        let c = cleaner();
        assert_eq!(c.clean_at("Main St AT 1st Ave"), "Main St @ 1st Ave");
        assert_eq!(c.clean_at("Main St@1st Ave"), "Main St @ 1st Ave");
        assert_eq!(c.clean_at("Station Gate"), "Station Gate");
    }

    #[test]
    fn test_clean_slashes() {
        let c = cleaner();
        assert_eq!(c.clean_slashes("Main St/1 Ave"), "Main St / 1 Ave");
        assert_eq!(c.clean_slashes("Main St  /   1 Ave"), "Main St / 1 Ave");
    }

    #[test]
    fn test_clean_numbers() {
        let c = cleaner();
        assert_eq!(c.clean_numbers("First Street"), "1st Street");
        assert_eq!(c.clean_numbers("third ave & TENTH st"), "3rd ave & 10th st");
        assert_eq!(c.clean_numbers("Firsthand"), "Firsthand");
    }

    #[test]
    fn test_clean_street_types() {
        let c = cleaner();
        assert_eq!(c.clean_street_types("Main Street"), "Main St");
        assert_eq!(c.clean_street_types("Town Centre"), "Town Ctr");
        assert_eq!(c.clean_street_types("Broadway BOULEVARD"), "Broadway Blvd");
        assert_eq!(c.clean_street_types("Streetsville"), "Streetsville");
        assert_eq!(c.clean_street_types("Transit Terminal"), "Transit Terminal");
    }

    #[test]
    fn test_clean_label() {
        let c = cleaner();
        assert_eq!(c.clean_label("  Main   St ( North ) "), "Main St (North)");
        assert_eq!(c.clean_label("Main St () - "), "Main St");
        assert_eq!(c.clean_label("& Main St"), "Main St");
        assert_eq!(c.clean_label("Main St (( ))"), "Main St");
    }

    #[test]
    fn test_primitives_are_idempotent() {
        let c = cleaner();
        let fixtures = [
            "Main Street and First Avenue",
            "City Hall / Main St",
            "Bayside at  Main (  West ) -",
            "King's Heights & Centre",
            "Main and and 1st at at Gate",
        ];
        for fixture in fixtures {
            let once = c.clean_label(&c.clean_street_types(&c.clean_slashes(&c.clean_at(
                &c.clean_and(&c.clean_numbers(fixture)),
            ))));
            let twice = c.clean_label(&c.clean_street_types(&c.clean_slashes(&c.clean_at(
                &c.clean_and(&c.clean_numbers(&once)),
            ))));
            assert_eq!(once, twice, "not idempotent for '{fixture}'");
        }
    }
}
