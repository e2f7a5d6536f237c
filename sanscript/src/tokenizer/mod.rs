//! Line and word splitting, and the case helpers used for capitalized
//! spellings.

use crate::scheme::Result;

pub mod case_handling;

/// Splits a word into everything before its last character, and the last
/// character itself.
pub fn split_last_char(word: &str) -> (&str, &str) {
    match word.char_indices().next_back() {
        Some((i, _)) => (&word[..i], &word[i..]),
        None => ("", ""),
    }
}

/// Rewrites every whitespace-delimited word of every line with `f`, passing
/// it the word without its final character and reattaching that character
/// unchanged. Words are re-joined with single spaces; line breaks are kept.
pub fn map_word_interiors<F>(text: &str, mut f: F) -> Result<String>
where
    F: FnMut(&str) -> Result<String>,
{
    let mut lines = Vec::new();

    for line in text.split('\n') {
        let mut words = Vec::new();
        for word in line.split_whitespace() {
            let (interior, last) = split_last_char(word);
            words.push(f(interior)? + last);
        }
        lines.push(words.join(" "));
    }

    Ok(lines.join("\n"))
}
