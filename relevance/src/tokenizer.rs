/// Lowercases and splits on runs of non-word characters, keeping tokens of
/// at least two characters. Underscores count as word characters, so
/// `foo_bar` stays a single token. Single-character fragments carry no
/// lexical signal and are discarded.
pub fn tokenize(text: &str) -> Vec<String> {
    text.to_lowercase()
        .split(|c: char| !c.is_alphanumeric() && c != '_')
        .filter(|token| token.chars().count() >= 2)
        .map(str::to_string)
        .collect()
}
