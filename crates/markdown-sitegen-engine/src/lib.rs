pub mod html;
pub mod io;
pub mod parsing;

#[cfg(test)]
pub mod tests;

// Re-export key types for easier usage
pub use html::{Attributes, Node, StructureError};
pub use io::*;
pub use parsing::{MAX_QUOTE_DEPTH, ParseError, markdown_to_html_node};

/// Any failure turning Markdown into an HTML string.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error(transparent)]
    Structure(#[from] StructureError),
}

/// Parses and renders a document in one step.
pub fn markdown_to_html(markdown: &str) -> Result<String, Error> {
    Ok(markdown_to_html_node(markdown)?.render()?)
}

#[cfg(test)]
mod lib_tests {
    use super::*;

    #[test]
    fn heading_round_trip() {
        assert_eq!(markdown_to_html("# Title").unwrap(), "<div><h1>Title</h1></div>");
    }

    #[test]
    fn parse_errors_surface() {
        assert!(matches!(
            markdown_to_html("a * b"),
            Err(Error::Parse(ParseError::UnbalancedDelimiter { .. }))
        ));
    }

    #[test]
    fn structure_errors_surface() {
        assert!(matches!(
            markdown_to_html(""),
            Err(Error::Structure(StructureError::NoChildren { .. }))
        ));
    }
}
