use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Regex for the first run of decimal digits in a display string.
    /// Used to derive numeric values from price strings like "RM50/jam"
    /// - "RM50/jam" -> 50
    /// - "RM120 per month" -> 120
    /// - "negotiable" -> no match (caller falls back to a sentinel)
    pub static ref DIGIT_RUN_REGEX: Regex = Regex::new(r"\d+").unwrap();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digit_run_matches_first_run() {
        let m = DIGIT_RUN_REGEX.find("RM50/jam").unwrap();
        assert_eq!(m.as_str(), "50");

        let m = DIGIT_RUN_REGEX.find("RM120 per 4 weeks").unwrap();
        assert_eq!(m.as_str(), "120");
    }

    #[test]
    fn test_digit_run_no_digits() {
        assert!(DIGIT_RUN_REGEX.find("RM negotiable").is_none());
        assert!(DIGIT_RUN_REGEX.find("").is_none());
    }
}
