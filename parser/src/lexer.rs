//! Lexer (tokenizer) for structured identifiers.

/// Separator between the words of an identifier.
pub const DEFAULT_SEPARATOR: char = '_';

/// Split an identifier into lowercase word tokens.
///
/// Empty segments (leading, trailing or doubled separators) are dropped.
pub fn tokenize(identifier: &str, separator: char) -> Vec<String> {
    identifier
        .split(separator)
        .filter(|word| !word.is_empty())
        .map(str::to_ascii_lowercase)
        .collect()
}
