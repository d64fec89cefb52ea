//! Line tokenizer for the dataset files.
//!
//! Every file uses the same dialect: each field is enclosed in double quotes
//! and fields are separated by commas. Commas inside quotes (the reservation
//! flight list) are plain content. The enclosing quotes are stripped; nothing
//! inside them is trimmed.

use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RecordError {
    #[error("expected {expected} fields, found {found}")]
    ArityMismatch { expected: usize, found: usize },
    #[error("field is not enclosed in double quotes")]
    BadQuoting,
    #[error("unterminated quoted field")]
    UnterminatedQuote,
}

/// Split a data line into exactly `arity` borrowed field slices.
pub fn split_fields(line: &str, arity: usize) -> Result<Vec<&str>, RecordError> {
    let mut fields = Vec::with_capacity(arity);
    let mut rest = line;
    loop {
        let after_open = rest.strip_prefix('"').ok_or(RecordError::BadQuoting)?;
        let end = after_open.find('"').ok_or(RecordError::UnterminatedQuote)?;
        fields.push(&after_open[..end]);
        rest = &after_open[end + 1..];
        if rest.is_empty() {
            break;
        }
        rest = rest.strip_prefix(',').ok_or(RecordError::BadQuoting)?;
    }
    if fields.len() != arity {
        return Err(RecordError::ArityMismatch {
            expected: arity,
            found: fields.len(),
        });
    }
    Ok(fields)
}

/// Parse the reservation flight-list field `['ID1', 'ID2']` into its ids.
///
/// Returns `None` on missing brackets, unquoted tokens, or empty entries.
pub fn parse_id_list(field: &str) -> Option<Vec<&str>> {
    let inner = field.trim().strip_prefix('[')?.strip_suffix(']')?;
    let mut ids = Vec::new();
    for raw in inner.split(',') {
        let token = raw
            .trim()
            .strip_prefix('\'')?
            .strip_suffix('\'')?
            .trim();
        if token.is_empty() {
            return None;
        }
        ids.push(token);
    }
    Some(ids)
}
