//! Prompt template for next-word prediction

/// Templates for generating prompts
pub struct PromptTemplate;

impl PromptTemplate {
    /// Prompt asking for exactly one next word.
    ///
    /// `text` is embedded verbatim; it must already be sanitized.
    pub fn next_word(text: &str) -> String {
        format!(
            r#"Based on the following input text, predict ONLY the next single word that would most naturally follow.
Return just the single word without any punctuation, explanation, or additional context.

Input text: "{}"

Next word:"#,
            text
        )
    }
}
