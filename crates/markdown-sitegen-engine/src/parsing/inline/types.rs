/// The kind of an inline span.
///
/// Link and image targets live inside their variants, so a target exists
/// exactly when the span is a link or an image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SpanKind {
    /// Text not (yet) part of any construct.
    Plain,
    Bold,
    Italic,
    BoldItalic,
    Code,
    Link {
        url: String,
    },
    Image {
        src: String,
    },
}

/// Styles that are expressed with a paired literal delimiter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InlineStyle {
    BoldItalic,
    Bold,
    Italic,
    Code,
}

impl From<InlineStyle> for SpanKind {
    fn from(style: InlineStyle) -> Self {
        match style {
            InlineStyle::BoldItalic => SpanKind::BoldItalic,
            InlineStyle::Bold => SpanKind::Bold,
            InlineStyle::Italic => SpanKind::Italic,
            InlineStyle::Code => SpanKind::Code,
        }
    }
}

/// A typed, contiguous run of inline text.
///
/// For images `text` is the alt text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextSpan {
    pub text: String,
    pub kind: SpanKind,
}

impl TextSpan {
    pub fn new(text: impl Into<String>, kind: SpanKind) -> Self {
        Self {
            text: text.into(),
            kind,
        }
    }

    pub fn plain(text: impl Into<String>) -> Self {
        Self::new(text, SpanKind::Plain)
    }

    pub fn link(text: impl Into<String>, url: impl Into<String>) -> Self {
        Self::new(text, SpanKind::Link { url: url.into() })
    }

    pub fn image(alt: impl Into<String>, src: impl Into<String>) -> Self {
        Self::new(alt, SpanKind::Image { src: src.into() })
    }

    pub fn is_plain(&self) -> bool {
        matches!(self.kind, SpanKind::Plain)
    }

    /// The link URL or image source, if this span has one.
    pub fn target(&self) -> Option<&str> {
        match &self.kind {
            SpanKind::Link { url } => Some(url),
            SpanKind::Image { src } => Some(src),
            _ => None,
        }
    }
}
