/// Word separator. Tabs and newlines are ordinary characters.
pub const WORD_DELIMITER: char = ' ';

#[derive(Debug, Default, Clone, Copy)]
pub struct Tokenizer;

impl Tokenizer {
    pub const fn new() -> Self {
        Self
    }

    /// Splits `text` on runs of spaces, skipping empty words.
    pub fn tokenize(&self, text: &str) -> Vec<String> {
        text.split(WORD_DELIMITER)
            .filter(|word| !word.is_empty())
            .map(String::from)
            .collect()
    }
}
