use chrono::NaiveDateTime;

/// Cuts `text` down to `max_chars` characters and marks the cut with an
/// ellipsis. Text within the limit passes through unchanged; absent text
/// renders as an empty string.
pub(crate) fn truncate(text: Option<&str>, max_chars: usize) -> String {
    match text {
        Some(text) if text.chars().count() > max_chars => {
            let cut: String = text.chars().take(max_chars).collect();
            format!("{cut}...")
        }
        Some(text) => text.to_string(),
        None => String::new(),
    }
}

/// "Mar 5, 2024" style, or "N/A" when the backend has no date on record.
pub(crate) fn format_date(date: Option<NaiveDateTime>) -> String {
    match date {
        Some(date) => date.format("%b %-d, %Y").to_string(),
        None => "N/A".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn truncate_cuts_and_marks() {
        assert_eq!(truncate(Some("hello world"), 5), "hello...");
        assert_eq!(truncate(Some("hi"), 5), "hi");
        assert_eq!(truncate(None, 5), "");
    }

    #[test]
    fn truncate_counts_chars_not_bytes() {
        assert_eq!(truncate(Some("crème brûlée"), 5), "crème...");
    }

    #[test]
    fn exact_limit_is_untouched() {
        assert_eq!(truncate(Some("12345"), 5), "12345");
    }

    #[test]
    fn dates_render_abbreviated() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 5)
            .unwrap()
            .and_hms_opt(10, 15, 0)
            .unwrap();
        assert_eq!(format_date(Some(date)), "Mar 5, 2024");
        assert_eq!(format_date(None), "N/A");
    }
}
