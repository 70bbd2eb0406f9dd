use lazy_static::lazy_static;
use regex::{Captures, Regex};

lazy_static! {
    /// First letter of each whitespace-separated word
    /// - "not repaired" -> "Not Repaired"
    /// - "left lane" -> "Left Lane"
    static ref WORD_START_REGEX: Regex = Regex::new(r"(^|\s)\w").unwrap();
}

/// Title-case a backend status string for display.
pub fn title_case(value: &str) -> String {
    WORD_START_REGEX
        .replace_all(value, |caps: &Captures| caps[0].to_uppercase())
        .into_owned()
}

/// Title-case a snake_case category field ("left_lane" -> "Left Lane").
pub fn humanize_category(value: &str) -> String {
    title_case(&value.replace('_', " "))
}

/// Remove the trailing country suffix from a formatted geocoder address.
pub fn strip_country_suffix(formatted: &str, suffix: &str) -> String {
    match formatted.strip_suffix(suffix) {
        Some(stripped) => stripped.to_string(),
        None => formatted.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_title_case_statuses() {
        assert_eq!(title_case("not repaired"), "Not Repaired");
        assert_eq!(title_case("temporarily repaired"), "Temporarily Repaired");
        assert_eq!(title_case("repaired"), "Repaired");
        assert_eq!(title_case("removed"), "Removed");
    }

    #[test]
    fn test_title_case_leaves_cased_input_alone() {
        assert_eq!(title_case("Already Cased"), "Already Cased");
        assert_eq!(title_case(""), "");
    }

    #[test]
    fn test_humanize_category() {
        assert_eq!(humanize_category("left_lane"), "Left Lane");
        assert_eq!(humanize_category("curbside"), "Curbside");
    }

    #[test]
    fn test_strip_country_suffix() {
        assert_eq!(
            strip_country_suffix("123 Main St, Indiana, PA 15701, USA", ", USA"),
            "123 Main St, Indiana, PA 15701"
        );
        // No suffix present: address is returned unchanged
        assert_eq!(
            strip_country_suffix("123 Main St, Indiana, PA 15701", ", USA"),
            "123 Main St, Indiana, PA 15701"
        );
    }
}
