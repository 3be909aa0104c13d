//! Score tokenizer and token classifier
//!
//! Token grammar: `(pitch_octave | "/") sep duration ["+"]` where
//! `pitch_octave` is a letter in c..b (either case) followed by an octave
//! digit 0-5, `sep` is `-` (explicit tick count) or `=` (computed duration)
//! and a trailing `+` marks a cut.

use crate::error::{Error, Result};

/// Note or pause discriminator, carrying only the fields its kind has
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    /// Pitched note; letter case distinguishes natural from sharp variant
    Note { letter: char, octave: u8 },
    /// Rest
    Pause,
}

/// Duration specification, as written in the token
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LengthSpec {
    /// Explicit tick count (`-` separator)
    Ticks(u32),
    /// Computed duration (`=` separator), resolved against ticks_per_whole
    Auto(String),
}

/// One classified score token
#[derive(Debug, Clone)]
pub struct Token {
    /// Original token text, kept for error reporting
    pub text: String,
    pub kind: TokenKind,
    pub length: LengthSpec,
    /// Trailing `+`: shorten by cut_ticks and pad with a compensating pause
    pub cut: bool,
}

/// Split a merged track line into classified tokens
pub fn tokenize(track: &str) -> Result<Vec<Token>> {
    track.split_whitespace().map(parse_token).collect()
}

fn parse_token(text: &str) -> Result<Token> {
    let invalid = || Error::InvalidToken(text.to_string());
    let bytes = text.as_bytes();

    let (kind, sep_at) = if bytes.first() == Some(&b'/') {
        (TokenKind::Pause, 1)
    } else if bytes.len() >= 2 && is_pitch_letter(bytes[0]) && matches!(bytes[1], b'0'..=b'5') {
        let kind = TokenKind::Note {
            letter: bytes[0] as char,
            octave: bytes[1] - b'0',
        };
        (kind, 2)
    } else {
        return Err(invalid());
    };

    let explicit = match bytes.get(sep_at) {
        Some(b'-') => true,
        Some(b'=') => false,
        _ => return Err(invalid()),
    };

    let rest = &text[sep_at + 1..];
    let (spec, cut) = match rest.strip_suffix('+') {
        Some(stripped) => (stripped, true),
        None => (rest, false),
    };
    if spec.is_empty() {
        return Err(invalid());
    }

    let length = if explicit {
        if !spec.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid());
        }
        LengthSpec::Ticks(spec.parse().map_err(|_| invalid())?)
    } else {
        LengthSpec::Auto(spec.to_string())
    };

    Ok(Token {
        text: text.to_string(),
        kind,
        length,
        cut,
    })
}

fn is_pitch_letter(b: u8) -> bool {
    matches!(b.to_ascii_lowercase(), b'a'..=b'g')
}

#[cfg(test)]
mod tests {
    use super::*;

    fn one(text: &str) -> Token {
        parse_token(text).unwrap()
    }

    #[test]
    fn test_note_token() {
        let tok = one("c1-10");
        assert_eq!(
            tok.kind,
            TokenKind::Note {
                letter: 'c',
                octave: 1
            }
        );
        assert_eq!(tok.length, LengthSpec::Ticks(10));
        assert!(!tok.cut);
        assert_eq!(tok.text, "c1-10");
    }

    #[test]
    fn test_letter_case_preserved() {
        assert_eq!(
            one("C2=4").kind,
            TokenKind::Note {
                letter: 'C',
                octave: 2
            }
        );
    }

    #[test]
    fn test_pause_token() {
        let tok = one("/=4");
        assert_eq!(tok.kind, TokenKind::Pause);
        assert_eq!(tok.length, LengthSpec::Auto("4".to_string()));
    }

    #[test]
    fn test_computed_specs_kept_verbatim() {
        assert_eq!(one("d3=4.").length, LengthSpec::Auto("4.".to_string()));
        assert_eq!(one("d3=4,3").length, LengthSpec::Auto("4,3".to_string()));
    }

    #[test]
    fn test_cut_marker() {
        let tok = one("g4=8+");
        assert!(tok.cut);
        assert_eq!(tok.length, LengthSpec::Auto("8".to_string()));

        let tok = one("/-10+");
        assert!(tok.cut);
        assert_eq!(tok.length, LengthSpec::Ticks(10));
    }

    #[test]
    fn test_tokenize_splits_on_whitespace() {
        let tokens = tokenize("  c1-10   /=4\td2=4. ").unwrap();
        assert_eq!(tokens.len(), 3);
    }

    #[test]
    fn test_invalid_tokens() {
        for text in [
            "h1-10", // no such pitch letter
            "c6-10", // octave out of range
            "c-10",  // missing octave
            "c1~10", // bad separator
            "c1-",   // empty duration
            "c1-+",  // empty duration with cut
            "c1-4x", // explicit ticks must be digits
            "/4",    // pause missing separator
            "x",
        ] {
            assert!(
                matches!(parse_token(text), Err(Error::InvalidToken(t)) if t == text),
                "expected invalid token for {:?}",
                text
            );
        }
    }
}
