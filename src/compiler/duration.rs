//! Computed-duration resolution

use super::token::{LengthSpec, Token};
use crate::error::{Error, Result};

/// Token with its duration resolved to ticks
#[derive(Debug, Clone)]
pub struct ResolvedToken {
    pub token: Token,
    /// Duration in ticks, before cut compensation
    pub ticks: u32,
}

/// Resolve a token's duration against the whole-note tick count
pub fn resolve(token: Token, ticks_per_whole: u32) -> Result<ResolvedToken> {
    let ticks = match &token.length {
        LengthSpec::Ticks(n) => *n,
        LengthSpec::Auto(spec) => auto_ticks(spec, ticks_per_whole)?,
    };
    Ok(ResolvedToken { token, ticks })
}

/// Ticks for a computed duration spec
///
/// Shapes, in priority order: `N` is a 1/N fraction of a whole note, `N.`
/// is the dotted (1.5x) fraction, `A,B` divides the 1/A fraction further by
/// the tuplet count B. The real-valued result is truncated toward zero; a
/// zero divisor is rejected.
fn auto_ticks(spec: &str, ticks_per_whole: u32) -> Result<u32> {
    let whole = f64::from(ticks_per_whole);

    let value = if let Some(n) = divisor(spec) {
        whole / n
    } else if let Some(n) = spec.strip_suffix('.').and_then(divisor) {
        whole / n * 1.5
    } else if let Some((a, b)) = spec.split_once(',') {
        match (divisor(a), divisor(b)) {
            (Some(a), Some(b)) => whole / a / b,
            _ => return Err(Error::InvalidDuration(spec.to_string())),
        }
    } else {
        return Err(Error::InvalidDuration(spec.to_string()));
    };

    Ok(value as u32)
}

/// Parse a non-zero all-digits divisor
fn divisor(s: &str) -> Option<f64> {
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    s.parse::<u32>().ok().filter(|&n| n > 0).map(f64::from)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simple_fraction() {
        assert_eq!(auto_ticks("4", 96).unwrap(), 24);
        assert_eq!(auto_ticks("1", 96).unwrap(), 96);
        assert_eq!(auto_ticks("16", 96).unwrap(), 6);
    }

    #[test]
    fn test_dotted() {
        assert_eq!(auto_ticks("4.", 96).unwrap(), 36);
        assert_eq!(auto_ticks("8.", 96).unwrap(), 18);
    }

    #[test]
    fn test_tuplet() {
        assert_eq!(auto_ticks("4,3", 96).unwrap(), 8);
        assert_eq!(auto_ticks("2,3", 96).unwrap(), 16);
    }

    #[test]
    fn test_truncates_toward_zero() {
        // 96 / 7 = 13.714...
        assert_eq!(auto_ticks("7", 96).unwrap(), 13);
        // 96 / 8 * 1.5 = 18, but 96 / 5 * 1.5 = 28.8
        assert_eq!(auto_ticks("5.", 96).unwrap(), 28);
    }

    #[test]
    fn test_invalid_shapes() {
        for spec in ["", "4x", "4.5", ".4", "4,", ",4", "4,x", "4,2,3"] {
            assert!(
                matches!(auto_ticks(spec, 96), Err(Error::InvalidDuration(s)) if s == spec),
                "expected invalid duration for {:?}",
                spec
            );
        }
    }

    #[test]
    fn test_zero_divisor_rejected() {
        for spec in ["0", "0.", "0,2", "4,0"] {
            assert!(auto_ticks(spec, 96).is_err(), "zero divisor in {:?}", spec);
        }
    }

    #[test]
    fn test_explicit_ticks_pass_through() {
        let token = crate::compiler::token::tokenize("c1-10").unwrap().remove(0);
        assert_eq!(resolve(token, 96).unwrap().ticks, 10);
    }
}
