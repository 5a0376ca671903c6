use crate::charset::CharacterSet;
use crate::error::{Error, Result};
use crate::rle::{self, Run};
use std::fmt;
use std::str::FromStr;

/// Longest text, in characters, that [`Obfuscated::runs`] will describe.
pub const MAX_DECODED_CHARS: u64 = 1 << 30;

/// The obfuscated form of a text: dividends, one shared divisor and the
/// character table.
///
/// # Layout
///
/// The `Display` and `FromStr` implementations use three lines, in order:
///
/// ```text
/// 111 9
/// 5
/// "ab"
/// ```
///
/// the dividends separated by single spaces, the divisor, and the character
/// set as one JSON string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Obfuscated {
    pub integers: Vec<u64>,
    pub divisor: u64,
    pub charset: CharacterSet,
}

impl Obfuscated {
    pub fn new(integers: Vec<u64>, divisor: u64, charset: CharacterSet) -> Self {
        Self {
            integers,
            divisor,
            charset,
        }
    }

    /// Recovers the run sequence: the quotient of each dividend picks the
    /// character and the remainder is its run length.
    ///
    /// Fails with [`Error::Parse`] when the runs add up to more than
    /// [`MAX_DECODED_CHARS`].
    pub fn runs(&self) -> Result<Vec<Run>> {
        if self.divisor == 0 {
            return Err(Error::ZeroDivisor);
        }

        let runs = self
            .integers
            .iter()
            .map(|&value| -> Result<Run> {
                let quotient = value / self.divisor;
                let character = usize::try_from(quotient)
                    .ok()
                    .and_then(|i| self.charset.get(i))
                    .ok_or(Error::InvalidQuotient {
                        value,
                        quotient,
                        len: self.charset.len(),
                    })?;
                Ok(Run::new(character, value % self.divisor))
            })
            .collect::<Result<Vec<_>>>()?;

        let total = runs
            .iter()
            .try_fold(0u64, |total, run| total.checked_add(run.count))
            .filter(|&total| total <= MAX_DECODED_CHARS);
        if total.is_none() {
            return Err(Error::Parse(format!(
                "decoded text would exceed {MAX_DECODED_CHARS} characters"
            )));
        }
        Ok(runs)
    }

    /// Reconstructs the original text.
    pub fn decode(&self) -> Result<String> {
        Ok(rle::expand(&self.runs()?))
    }
}

impl fmt::Display for Obfuscated {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, value) in self.integers.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{value}")?;
        }
        writeln!(f)?;
        writeln!(f, "{}", self.divisor)?;
        write!(f, "{}", self.charset)
    }
}

impl FromStr for Obfuscated {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let lines: Vec<&str> = s.lines().collect();
        let [integers, divisor, charset] = lines.as_slice() else {
            return Err(Error::Parse(format!("expected 3 lines, found {}", lines.len())));
        };

        let integers = integers
            .split_whitespace()
            .map(|token| {
                token
                    .parse::<u64>()
                    .map_err(|e| Error::Parse(format!("bad integer {token:?}: {e}")))
            })
            .collect::<Result<Vec<_>>>()?;

        let divisor = divisor
            .trim()
            .parse::<u64>()
            .map_err(|e| Error::Parse(format!("bad divisor {divisor:?}: {e}")))?;

        let chars: String = serde_json::from_str(charset.trim())
            .map_err(|e| Error::Parse(format!("bad character set {charset:?}: {e}")))?;
        let charset: CharacterSet = chars.chars().collect();
        if charset.len() != chars.chars().count() {
            return Err(Error::Parse("character set contains duplicates".into()));
        }

        Ok(Self::new(integers, divisor, charset))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Obfuscated {
        Obfuscated::new(vec![111, 9], 5, CharacterSet::from_iter(['a', 'b']))
    }

    #[test]
    fn test_runs() {
        // 111 = 22 * 5 + 1 is out of range for a two-character set.
        let err = sample().runs().unwrap_err();
        assert!(matches!(
            err,
            Error::InvalidQuotient {
                value: 111,
                quotient: 22,
                len: 2
            }
        ));
    }

    #[test]
    fn test_decode() {
        let obfuscated = Obfuscated::new(vec![1, 5, 3, 10], 4, CharacterSet::from_text("abc"));
        assert_eq!(obfuscated.decode().unwrap(), "abaaacc");
    }

    #[test]
    fn test_decode_empty() {
        let obfuscated = Obfuscated::new(Vec::new(), 1, CharacterSet::default());
        assert_eq!(obfuscated.decode().unwrap(), "");
    }

    #[test]
    fn test_zero_divisor() {
        let obfuscated = Obfuscated::new(vec![1], 0, CharacterSet::from_text("a"));
        assert!(matches!(obfuscated.decode(), Err(Error::ZeroDivisor)));
    }

    #[test]
    fn test_display_layout() {
        assert_eq!(sample().to_string(), "111 9\n5\n\"ab\"");
    }

    #[test]
    fn test_parse_layout() {
        let parsed: Obfuscated = "111 9\n5\n\"ab\"\n".parse().unwrap();
        assert_eq!(parsed, sample());
    }

    #[test]
    fn test_parse_escaped_charset() {
        let original = Obfuscated::new(
            vec![2],
            3,
            CharacterSet::from_iter([' ', '\n', '\\', '"', '\t', '\u{7f}', '\u{1}']),
        );
        let parsed: Obfuscated = original.to_string().parse().unwrap();
        assert_eq!(parsed, original);
    }

    #[test]
    fn test_parse_json_escapes() {
        let parsed: Obfuscated = "1\n1\n\"\\u0041\\/\"".parse().unwrap();
        assert_eq!(parsed.charset.as_slice(), &['A', '/']);
    }

    #[test]
    fn test_parse_empty_integers() {
        let parsed: Obfuscated = "\n1\n\"\"".parse().unwrap();
        assert!(parsed.integers.is_empty());
        assert!(parsed.charset.is_empty());
    }

    #[test]
    fn test_parse_errors() {
        for bad in [
            "1 2\n3",
            "1 x\n3\n\"ab\"",
            "1 2\n-3\n\"ab\"",
            "1 2\n3\nab",
            "1 2\n3\n\"aa\"",
            "1 2\n3\n\"a\\q\"",
            "1\n1\n\"a\"b\"",
            "1\n1\n\"\\u{41\"",
        ] {
            assert!(
                matches!(bad.parse::<Obfuscated>(), Err(Error::Parse(_))),
                "{bad:?} should not parse"
            );
        }
    }

    #[test]
    fn test_oversized_runs_rejected() {
        let parsed: Obfuscated = "18446744073709551614\n18446744073709551615\n\"a\""
            .parse()
            .unwrap();
        assert!(matches!(parsed.runs(), Err(Error::Parse(_))));
        assert!(matches!(parsed.decode(), Err(Error::Parse(_))));
    }

    #[test]
    fn test_run_total_overflow_rejected() {
        let half = u64::MAX / 2 + 1;
        let obfuscated = Obfuscated::new(vec![half - 1, half - 1], half, CharacterSet::from_text("a"));
        assert!(matches!(obfuscated.decode(), Err(Error::Parse(_))));
    }

    #[test]
    fn test_runs_at_limit_accepted() {
        let obfuscated = Obfuscated::new(
            vec![MAX_DECODED_CHARS],
            MAX_DECODED_CHARS + 1,
            CharacterSet::from_text("a"),
        );
        let runs = obfuscated.runs().unwrap();
        assert_eq!(runs, vec![Run::new('a', MAX_DECODED_CHARS)]);
    }
}
