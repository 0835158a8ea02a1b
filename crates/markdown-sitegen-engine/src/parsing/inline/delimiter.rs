use crate::parsing::ParseError;

use super::types::{InlineStyle, SpanKind, TextSpan};

/// Splits every `Plain` span on a paired literal delimiter.
///
/// Pieces outside the delimiter (even positions) stay `Plain`; pieces inside
/// (odd positions) take `style`. Empty pieces are dropped. Non-plain spans
/// pass through unchanged.
///
/// # Errors
/// `ParseError::UnbalancedDelimiter` if a plain span contains an odd number
/// of delimiter occurrences.
pub fn split_by_delimiter(
    spans: Vec<TextSpan>,
    delimiter: &str,
    style: InlineStyle,
) -> Result<Vec<TextSpan>, ParseError> {
    debug_assert!(!delimiter.is_empty(), "delimiter must not be empty");

    let mut out = Vec::with_capacity(spans.len());
    for span in spans {
        if !span.is_plain() {
            out.push(span);
            continue;
        }

        if span.text.matches(delimiter).count() % 2 == 1 {
            return Err(ParseError::UnbalancedDelimiter {
                delimiter: delimiter.to_string(),
                text: span.text,
            });
        }

        for (i, piece) in span.text.split(delimiter).enumerate() {
            if piece.is_empty() {
                continue;
            }
            let kind = if i % 2 == 0 {
                SpanKind::Plain
            } else {
                style.into()
            };
            out.push(TextSpan::new(piece, kind));
        }
    }
    Ok(out)
}
