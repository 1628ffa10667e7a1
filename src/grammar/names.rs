//! Field names as sequences of lexer tokens.
//!
//! Only `a`-`z` and `$` have tokens of their own, so a field name may only
//! consist of these characters.

use itertools::Itertools;

use crate::error::NameError;

/// Lexer token that terminates every encoded name.
pub const NUL_BYTE: &str = "NUL_BYTE";

/// Lexer token for the `$` character.
pub const DOLLAR: &str = "DOLLAR";

const LETTERS: [&str; 26] = [
    "A", "B", "C", "D", "E", "F", "G", "H", "I", "J", "K", "L", "M",
    "N", "O", "P", "Q", "R", "S", "T", "U", "V", "W", "X", "Y", "Z",
];

fn marker(c: char) -> Option<&'static str> {
    match c {
        '$' => Some(DOLLAR),
        'a'..='z' => Some(LETTERS[(c as u8 - b'a') as usize]),
        _ => None,
    }
}

/// Map a field name to the lexer tokens that recognize it, followed by [`NUL_BYTE`].
pub fn markers(name: &str) -> Result<Vec<&'static str>, NameError> {
    let mut result = Vec::with_capacity(name.len() + 1);

    for (position, character) in name.chars().enumerate() {
        match marker(character) {
            Some(token) => result.push(token),
            None => {
                return Err(NameError::UnsupportedCharacter {
                    name: name.to_string(),
                    character,
                    position,
                });
            },
        }
    }

    result.push(NUL_BYTE);
    Ok(result)
}

/// Like [`markers`] but returns the tokens as a single space-separated grammar fragment.
pub fn transliterate(name: &str) -> Result<String, NameError> {
    Ok(markers(name)?.into_iter().join(" "))
}
