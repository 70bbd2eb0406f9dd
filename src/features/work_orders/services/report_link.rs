/// Sort direction selected in the generate-report popup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    Ascending,
    Descending,
}

impl SortOrder {
    fn sign(self) -> &'static str {
        match self {
            SortOrder::Ascending => "+",
            SortOrder::Descending => "-",
        }
    }
}

/// Build the report endpoint URL: `/api/report/?sort_by=<+|-><field>`,
/// with the sign percent-encoded so it survives query parsing.
pub fn report_url(base_url: &str, sort_by: &str, order: SortOrder) -> String {
    let sort_param = format!("{}{}", order.sign(), sort_by);
    format!(
        "{}/api/report/?sort_by={}",
        base_url,
        urlencoding::encode(&sort_param)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ascending_sign_is_percent_encoded() {
        assert_eq!(
            report_url("http://127.0.0.1:5000", "report_date", SortOrder::Ascending),
            "http://127.0.0.1:5000/api/report/?sort_by=%2Breport_date"
        );
    }

    #[test]
    fn test_descending_sign_survives_encoding() {
        assert_eq!(
            report_url("http://127.0.0.1:5000", "size", SortOrder::Descending),
            "http://127.0.0.1:5000/api/report/?sort_by=-size"
        );
    }
}
