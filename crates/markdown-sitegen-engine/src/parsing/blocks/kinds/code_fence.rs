/// A code block fenced with three backticks at both ends.
pub struct CodeFence;

impl CodeFence {
    pub const BACKTICKS: &'static str = "```";

    /// Opening and closing fences must be distinct, so the block needs at
    /// least two fences' worth of characters.
    pub fn is_fenced(block: &str) -> bool {
        block.len() >= 2 * Self::BACKTICKS.len()
            && block.starts_with(Self::BACKTICKS)
            && block.ends_with(Self::BACKTICKS)
    }

    /// The text between the fences, trimmed.
    ///
    /// Anything after the opening fence on its line (such as a language
    /// name) is part of the content.
    pub fn content(block: &str) -> &str {
        if !Self::is_fenced(block) {
            return block;
        }
        let fence = Self::BACKTICKS.len();
        block[fence..block.len() - fence].trim()
    }
}
