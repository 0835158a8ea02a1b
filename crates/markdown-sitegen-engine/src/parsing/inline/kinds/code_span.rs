/// Inline code, delimited by single backticks.
///
/// Code content is not otherwise special-cased: it is split out by the same
/// paired-delimiter pass as emphasis, just last in precedence.
pub struct CodeSpan;

impl CodeSpan {
    /// The backtick that opens and closes a code span.
    pub const TICK: &'static str = "`";
}
