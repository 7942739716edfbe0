//! Event folder name parsing for the `dd-mm-yyyy - Label` convention.
//!
//! Event folders sit at the third level of the photo tree and carry both the
//! date and the label of the event in their name:
//!
//! ```text
//! 06-01-2025 - Gala                         → 2025-01-06, "Gala"
//! 06-01-2025  - Training - Part 1           → 2025-01-06, "Training - Part 1"
//! 31-02-2025 - Not A Real Day               → 2025-02-31, "Not A Real Day"
//! ```
//!
//! Only the shape of the date token is checked. The parser never consults a
//! calendar, so impossible dates pass as long as the digits line up.

/// Separator between the date token and the event label.
pub const SEPARATOR: &str = " - ";

/// Result of parsing an event folder name like `06-01-2025 - Gala`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedFolder {
    /// Date rewritten as `yyyy-mm-dd`.
    pub date_iso: String,
    /// Trimmed label after the first separator. Embedded separators are kept.
    pub name: String,
}

/// Parse an event folder name.
///
/// Returns `None` when the name has no `" - "` separator or when the first
/// segment (trimmed) is not exactly two digits, dash, two digits, dash, four
/// digits.
pub fn parse_event_folder(folder_name: &str) -> Option<ParsedFolder> {
    let (date_part, name_part) = folder_name.split_once(SEPARATOR)?;
    let (dd, mm, yyyy) = split_date_token(date_part.trim())?;

    Some(ParsedFolder {
        date_iso: format!("{yyyy}-{mm}-{dd}"),
        name: name_part.trim().to_string(),
    })
}

/// Split a `dd-mm-yyyy` token into its digit groups.
fn split_date_token(token: &str) -> Option<(&str, &str, &str)> {
    let mut groups = token.split('-');
    let dd = groups.next()?;
    let mm = groups.next()?;
    let yyyy = groups.next()?;
    if groups.next().is_some() {
        return None;
    }

    let digits = |s: &str, len: usize| s.len() == len && s.bytes().all(|b| b.is_ascii_digit());
    if digits(dd, 2) && digits(mm, 2) && digits(yyyy, 4) {
        Some((dd, mm, yyyy))
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parsed(date_iso: &str, name: &str) -> Option<ParsedFolder> {
        Some(ParsedFolder {
            date_iso: date_iso.to_string(),
            name: name.to_string(),
        })
    }

    #[test]
    fn simple_event_name() {
        assert_eq!(
            parse_event_folder("06-01-2025 - Gala"),
            parsed("2025-01-06", "Gala")
        );
    }

    #[test]
    fn label_keeps_embedded_separators() {
        assert_eq!(
            parse_event_folder("06-01-2025 - Training - Part 1"),
            parsed("2025-01-06", "Training - Part 1")
        );
    }

    #[test]
    fn extra_whitespace_is_trimmed() {
        assert_eq!(
            parse_event_folder("06-01-2025  - Professional Development -  100 Seater  "),
            parsed("2025-01-06", "Professional Development -  100 Seater")
        );
    }

    #[test]
    fn impossible_calendar_dates_are_accepted() {
        assert_eq!(
            parse_event_folder("31-02-2025 - Leap"),
            parsed("2025-02-31", "Leap")
        );
        assert_eq!(
            parse_event_folder("32-13-9999 - Nowhere"),
            parsed("9999-13-32", "Nowhere")
        );
    }

    #[test]
    fn empty_label_after_separator() {
        assert_eq!(parse_event_folder("06-01-2025 - "), parsed("2025-01-06", ""));
    }

    #[test]
    fn missing_separator_fails() {
        assert_eq!(parse_event_folder("06-01-2025"), None);
        assert_eq!(parse_event_folder("06-01-2025-Gala"), None);
        assert_eq!(parse_event_folder("06-01-2025 -Gala"), None);
    }

    #[test]
    fn wrong_date_shape_fails() {
        assert_eq!(parse_event_folder("6-1-2025 - Gala"), None);
        assert_eq!(parse_event_folder("2025-01-06 - Gala"), None);
        assert_eq!(parse_event_folder("06-01-25 - Gala"), None);
        assert_eq!(parse_event_folder("06/01/2025 - Gala"), None);
        assert_eq!(parse_event_folder("06-01-2025-01 - Gala"), None);
        assert_eq!(parse_event_folder("ab-cd-efgh - Gala"), None);
    }

    #[test]
    fn missing_date_fails() {
        assert_eq!(parse_event_folder(" - Gala"), None);
        assert_eq!(parse_event_folder("Gala - 06-01-2025"), None);
        assert_eq!(parse_event_folder("not-a-date folder"), None);
        assert_eq!(parse_event_folder(""), None);
    }

    #[test]
    fn non_ascii_digits_rejected() {
        assert_eq!(parse_event_folder("٠٦-٠١-٢٠٢٥ - Gala"), None);
    }
}
