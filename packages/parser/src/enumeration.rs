//! Enumeration labels and their numbering schemes.
//!
//! A label is the structural marker of a line, such as the `a` in `(a)` or
//! the `ii` in `(ii)`. The tree builder only asks two questions of a label:
//! whether it opens its scheme, and whether it could directly follow some
//! other label. Which scheme a glyph like `i` belongs to is not settled
//! here; that is decided during placement with one line of lookahead.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A numbering system with a successor relation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Scheme {
    /// a, b, ..., z, aa, bb, ...
    LowerAlpha,
    /// A, B, ..., Z, AA, BB, ...
    UpperAlpha,
    /// i, ii, iii, iv, ...
    LowerRoman,
    /// I, II, III, IV, ...
    UpperRoman,
    /// 1, 2, 3, ...
    Digit,
}

impl Scheme {
    /// All schemes, in the order they are tried when comparing glyphs.
    pub const ALL: [Scheme; 5] = [
        Scheme::LowerAlpha,
        Scheme::UpperAlpha,
        Scheme::LowerRoman,
        Scheme::UpperRoman,
        Scheme::Digit,
    ];

    /// Position of `text` within this scheme, starting at 1.
    ///
    /// Returns `None` when the text is not a member of the scheme.
    ///
    /// # Examples
    /// ```
    /// use uscode_parser::enumeration::Scheme;
    ///
    /// assert_eq!(Scheme::LowerAlpha.ordinal("c"), Some(3));
    /// assert_eq!(Scheme::LowerAlpha.ordinal("aa"), Some(27));
    /// assert_eq!(Scheme::UpperRoman.ordinal("IX"), Some(9));
    /// assert_eq!(Scheme::Digit.ordinal("x"), None);
    /// ```
    #[must_use]
    pub fn ordinal(&self, text: &str) -> Option<u32> {
        match self {
            Self::LowerAlpha => alpha_ordinal(text, 'a'),
            Self::UpperAlpha => alpha_ordinal(text, 'A'),
            Self::LowerRoman => roman_ordinal(&text.to_ascii_uppercase())
                .filter(|_| text.chars().all(|c| c.is_ascii_lowercase())),
            Self::UpperRoman => {
                roman_ordinal(text).filter(|_| text.chars().all(|c| c.is_ascii_uppercase()))
            }
            Self::Digit => {
                if !text.is_empty() && text.chars().all(|c| c.is_ascii_digit()) {
                    text.parse().ok()
                } else {
                    None
                }
            }
        }
    }

    /// Name used in logs and in the title dump.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::LowerAlpha => "lower_alpha",
            Self::UpperAlpha => "upper_alpha",
            Self::LowerRoman => "lower_roman",
            Self::UpperRoman => "upper_roman",
            Self::Digit => "digit",
        }
    }
}

/// Alphabetic labels run a..z, then aa..zz, then aaa..zzz.
fn alpha_ordinal(text: &str, base: char) -> Option<u32> {
    let mut chars = text.chars();
    let first = chars.next()?;
    let offset = (first as u32).checked_sub(base as u32)?;
    if offset >= 26 {
        return None;
    }
    if chars.any(|c| c != first) {
        return None;
    }
    let repeats = u32::try_from(text.chars().count()).ok()?;
    (repeats - 1).checked_mul(26)?.checked_add(offset + 1)
}

fn roman_value(c: char) -> Option<u32> {
    match c {
        'I' => Some(1),
        'V' => Some(5),
        'X' => Some(10),
        'L' => Some(50),
        'C' => Some(100),
        'D' => Some(500),
        'M' => Some(1000),
        _ => None,
    }
}

/// Parse an upper-case roman numeral, accepting only the canonical form.
fn roman_ordinal(text: &str) -> Option<u32> {
    if text.is_empty() {
        return None;
    }
    let values: Vec<u32> = text.chars().map(roman_value).collect::<Option<_>>()?;
    let mut total = 0;
    for (i, value) in values.iter().enumerate() {
        match values.get(i + 1) {
            Some(next) if next > value => total -= *value as i64,
            _ => total += *value as i64,
        }
    }
    let total = u32::try_from(total).ok().filter(|t| *t > 0)?;
    (to_roman(total) == text).then_some(total)
}

fn to_roman(mut value: u32) -> String {
    const TABLE: [(u32, &str); 13] = [
        (1000, "M"),
        (900, "CM"),
        (500, "D"),
        (400, "CD"),
        (100, "C"),
        (90, "XC"),
        (50, "L"),
        (40, "XL"),
        (10, "X"),
        (9, "IX"),
        (5, "V"),
        (4, "IV"),
        (1, "I"),
    ];
    let mut out = String::new();
    for (n, glyph) in TABLE {
        while value >= n {
            out.push_str(glyph);
            value -= n;
        }
    }
    out
}

/// A structural label with its (provisional) scheme.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Enumeration {
    text: String,
    scheme: Scheme,
    nested: bool,
}

impl Enumeration {
    /// Create a label with an explicit scheme.
    #[must_use]
    pub fn new(text: impl Into<String>, scheme: Scheme) -> Self {
        Self {
            text: text.into(),
            scheme,
            nested: false,
        }
    }

    /// Classify a bare label text.
    ///
    /// Digits are `Digit`. Valid roman numerals are roman, except single
    /// glyphs and doubled letters other than `i`, which read as alphabetic
    /// (`v` after `u`, `xx` after `ww`). The lone `i`/`I` is roman, so it
    /// opens a scheme and goes through ambiguity resolution on placement.
    ///
    /// # Examples
    /// ```
    /// use uscode_parser::enumeration::{Enumeration, Scheme};
    ///
    /// assert_eq!(Enumeration::parse("iv").scheme(), Scheme::LowerRoman);
    /// assert_eq!(Enumeration::parse("v").scheme(), Scheme::LowerAlpha);
    /// assert_eq!(Enumeration::parse("12").scheme(), Scheme::Digit);
    /// ```
    #[must_use]
    pub fn parse(text: impl Into<String>) -> Self {
        let text = text.into();
        let scheme = classify(&text);
        Self::new(text, scheme)
    }

    /// Mark the label as already resolved to a nested continuation.
    #[must_use]
    pub fn with_nested(mut self, nested: bool) -> Self {
        self.nested = nested;
        self
    }

    /// The label glyphs, without parentheses.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[must_use]
    pub fn scheme(&self) -> Scheme {
        self.scheme
    }

    /// Whether upstream classification already resolved this label as
    /// nested under the preceding one.
    #[must_use]
    pub fn was_nested(&self) -> bool {
        self.nested
    }

    /// Whether this label opens its scheme (`a`, `A`, `i`, `I`, `1`).
    #[must_use]
    pub fn is_first_in_scheme(&self) -> bool {
        self.scheme.ordinal(&self.text) == Some(1)
    }

    /// Whether this label could immediately follow `previous`.
    ///
    /// Any scheme containing both glyphs counts, so `ii` follows `i`
    /// (roman) and `j` follows `i` (alphabetic).
    #[must_use]
    pub fn could_be_next_after(&self, previous: &Enumeration) -> bool {
        Scheme::ALL.iter().any(|scheme| {
            match (scheme.ordinal(&self.text), scheme.ordinal(&previous.text)) {
                (Some(this), Some(prev)) => prev.checked_add(1) == Some(this),
                _ => false,
            }
        })
    }
}

impl fmt::Display for Enumeration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

fn classify(text: &str) -> Scheme {
    if Scheme::Digit.ordinal(text).is_some() {
        return Scheme::Digit;
    }

    let mut chars = text.chars();
    let first = chars.next();
    let repeated = chars.all(|c| Some(c) == first);
    let lower = text.chars().all(|c| c.is_ascii_lowercase());

    let (roman, alpha) = if lower {
        (Scheme::LowerRoman, Scheme::LowerAlpha)
    } else {
        (Scheme::UpperRoman, Scheme::UpperAlpha)
    };

    let roman_glyph = matches!(first, Some('i') | Some('I'));
    if roman.ordinal(text).is_some() && (!repeated || roman_glyph) {
        roman
    } else {
        alpha
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alpha_ordinals() {
        assert_eq!(Scheme::LowerAlpha.ordinal("a"), Some(1));
        assert_eq!(Scheme::LowerAlpha.ordinal("z"), Some(26));
        assert_eq!(Scheme::LowerAlpha.ordinal("bb"), Some(28));
        assert_eq!(Scheme::LowerAlpha.ordinal("ab"), None);
        assert_eq!(Scheme::LowerAlpha.ordinal("A"), None);
        assert_eq!(Scheme::UpperAlpha.ordinal("J"), Some(10));
        assert_eq!(Scheme::LowerAlpha.ordinal(""), None);
    }

    #[test]
    fn test_roman_ordinals() {
        assert_eq!(Scheme::LowerRoman.ordinal("i"), Some(1));
        assert_eq!(Scheme::LowerRoman.ordinal("iv"), Some(4));
        assert_eq!(Scheme::LowerRoman.ordinal("xiv"), Some(14));
        assert_eq!(Scheme::UpperRoman.ordinal("XL"), Some(40));
        // Non-canonical forms are rejected
        assert_eq!(Scheme::LowerRoman.ordinal("iiii"), None);
        assert_eq!(Scheme::LowerRoman.ordinal("ic"), None);
        // Case must match the scheme
        assert_eq!(Scheme::LowerRoman.ordinal("IV"), None);
        assert_eq!(Scheme::UpperRoman.ordinal("iv"), None);
    }

    #[test]
    fn test_digit_ordinals() {
        assert_eq!(Scheme::Digit.ordinal("1"), Some(1));
        assert_eq!(Scheme::Digit.ordinal("42"), Some(42));
        assert_eq!(Scheme::Digit.ordinal("4a"), None);
    }

    #[test]
    fn test_classify() {
        assert_eq!(Enumeration::parse("a").scheme(), Scheme::LowerAlpha);
        assert_eq!(Enumeration::parse("A").scheme(), Scheme::UpperAlpha);
        assert_eq!(Enumeration::parse("i").scheme(), Scheme::LowerRoman);
        assert_eq!(Enumeration::parse("I").scheme(), Scheme::UpperRoman);
        assert_eq!(Enumeration::parse("ii").scheme(), Scheme::LowerRoman);
        assert_eq!(Enumeration::parse("x").scheme(), Scheme::LowerAlpha);
        assert_eq!(Enumeration::parse("xx").scheme(), Scheme::LowerAlpha);
        assert_eq!(Enumeration::parse("xi").scheme(), Scheme::LowerRoman);
        assert_eq!(Enumeration::parse("V").scheme(), Scheme::UpperAlpha);
        assert_eq!(Enumeration::parse("3").scheme(), Scheme::Digit);
    }

    #[test]
    fn test_is_first_in_scheme() {
        assert!(Enumeration::parse("a").is_first_in_scheme());
        assert!(Enumeration::parse("A").is_first_in_scheme());
        assert!(Enumeration::parse("i").is_first_in_scheme());
        assert!(Enumeration::parse("I").is_first_in_scheme());
        assert!(Enumeration::parse("1").is_first_in_scheme());
        assert!(!Enumeration::parse("b").is_first_in_scheme());
        assert!(!Enumeration::parse("ii").is_first_in_scheme());
        // Alphabetic `i` is the ninth letter, not an opener
        assert!(!Enumeration::new("i", Scheme::LowerAlpha).is_first_in_scheme());
    }

    #[test]
    fn test_could_be_next_after() {
        let a = Enumeration::parse("a");
        let b = Enumeration::parse("b");
        let i = Enumeration::parse("i");
        let ii = Enumeration::parse("ii");
        let j = Enumeration::parse("j");
        let h = Enumeration::parse("h");

        assert!(b.could_be_next_after(&a));
        assert!(!a.could_be_next_after(&b));
        assert!(ii.could_be_next_after(&i));
        assert!(j.could_be_next_after(&i));
        assert!(i.could_be_next_after(&h));
        assert!(!ii.could_be_next_after(&h));
        assert!(Enumeration::parse("2").could_be_next_after(&Enumeration::parse("1")));
        assert!(!Enumeration::parse("B").could_be_next_after(&a));
        assert!(Enumeration::parse("aa").could_be_next_after(&Enumeration::parse("z")));
    }

    #[test]
    fn test_could_be_next_after_largest_digit() {
        let max = Enumeration::parse(u32::MAX.to_string());
        assert_eq!(Scheme::Digit.ordinal(max.text()), Some(u32::MAX));
        assert!(!Enumeration::parse("5").could_be_next_after(&max));
        assert!(!max.could_be_next_after(&max));
        assert!(max.could_be_next_after(&Enumeration::parse((u32::MAX - 1).to_string())));
    }

    #[test]
    fn test_alpha_ordinal_repeats() {
        assert_eq!(Scheme::LowerAlpha.ordinal("zzz"), Some(78));
        assert_eq!(Scheme::UpperAlpha.ordinal("BB"), Some(28));
    }

    #[test]
    fn test_nested_flag() {
        let label = Enumeration::parse("c");
        assert!(!label.was_nested());
        assert!(label.with_nested(true).was_nested());
    }

    #[test]
    fn test_scheme_serialization() {
        let json = r#""lower_roman""#;
        let scheme: Scheme = serde_json::from_str(json).unwrap();
        assert_eq!(scheme, Scheme::LowerRoman);
        assert_eq!(scheme.as_str(), "lower_roman");
    }
}
