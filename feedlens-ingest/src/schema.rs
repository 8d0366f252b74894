//! Required-column check for uploaded feedback tables.

use feedlens_core::{FeedbackError, Result};

pub const REQUIRED_COLUMNS: [&str; 4] = ["bot_message", "isuseful", "created_at", "created_by"];

/// Positions of the required columns in the header row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnIndex {
    pub bot_message: usize,
    pub is_useful: usize,
    pub created_at: usize,
    pub created_by: usize,
}

fn normalize_header(h: &str) -> &str {
    h.strip_prefix('\u{feff}').unwrap_or(h)
}

fn position<'a, I>(headers: I, name: &str) -> Option<usize>
where
    I: IntoIterator<Item = &'a str>,
{
    headers.into_iter().position(|h| normalize_header(h) == name)
}

/// Required column names absent from `headers`, in required order.
pub fn missing_columns<'a, I>(headers: I) -> Vec<&'static str>
where
    I: IntoIterator<Item = &'a str> + Clone,
{
    REQUIRED_COLUMNS
        .into_iter()
        .filter(|name| position(headers.clone(), name).is_none())
        .collect()
}

/// Verify the required columns are present and locate them.
/// Additional columns are ignored.
pub fn validate_headers<'a, I>(headers: I) -> Result<ColumnIndex>
where
    I: IntoIterator<Item = &'a str> + Clone,
{
    let missing = missing_columns(headers.clone());
    if !missing.is_empty() {
        return Err(FeedbackError::MissingColumns(
            missing.into_iter().map(str::to_string).collect(),
        ));
    }

    let find = |name: &str| {
        position(headers.clone(), name)
            .ok_or_else(|| FeedbackError::MissingColumns(vec![name.to_string()]))
    };

    Ok(ColumnIndex {
        bot_message: find("bot_message")?,
        is_useful: find("isuseful")?,
        created_at: find("created_at")?,
        created_by: find("created_by")?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_columns_present_in_any_order() {
        let headers = ["id", "created_by", "isuseful", "bot_message", "created_at", "extra"];
        let idx = validate_headers(headers).unwrap();
        assert_eq!(
            idx,
            ColumnIndex {
                bot_message: 3,
                is_useful: 2,
                created_at: 4,
                created_by: 1,
            }
        );
    }

    #[test]
    fn test_missing_created_by_is_reported() {
        let headers = ["bot_message", "isuseful", "created_at"];
        assert_eq!(missing_columns(headers), vec!["created_by"]);
        let err = validate_headers(headers).unwrap_err();
        match err {
            FeedbackError::MissingColumns(cols) => assert_eq!(cols, vec!["created_by"]),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_header_names_are_case_sensitive() {
        let headers = ["Bot_Message", "isuseful", "created_at", "created_by"];
        assert_eq!(missing_columns(headers), vec!["bot_message"]);
    }

    #[test]
    fn test_bom_on_first_header_is_ignored() {
        let headers = ["\u{feff}bot_message", "isuseful", "created_at", "created_by"];
        assert_eq!(validate_headers(headers).unwrap().bot_message, 0);
    }

    #[test]
    fn test_empty_header_row_misses_everything() {
        let headers: [&str; 0] = [];
        assert_eq!(missing_columns(headers).len(), 4);
    }
}
