// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Exact decimal ratings.
//!
//! A rating is kept as a signed mantissa and a decimal scale so that
//! comparisons against the threshold never suffer float rounding.
//! The token text the rating was parsed from is kept for display.

use std::borrow::Cow;
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// Maximum significant digits accepted in a rating token.
const MAX_DIGITS: usize = 18;

/// A decimal rating such as `9.12` or `-2.50`.
#[derive(Debug, Clone)]
pub struct Rating {
    mantissa: i64,
    scale: u32,
    text: Cow<'static, str>,
}

impl Rating {
    /// Build a rating with fixed display text, for constants.
    pub const fn from_static(mantissa: i64, scale: u32, text: &'static str) -> Self {
        Self {
            mantissa,
            scale,
            text: Cow::Borrowed(text),
        }
    }

    /// The token text this rating was parsed from.
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Mantissa rescaled to `scale` decimal places.
    fn widened(&self, scale: u32) -> i128 {
        i128::from(self.mantissa) * 10_i128.pow(scale - self.scale)
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

impl PartialEq for Rating {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Rating {}

impl PartialOrd for Rating {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Rating {
    fn cmp(&self, other: &Self) -> Ordering {
        let scale = self.scale.max(other.scale);
        self.widened(scale).cmp(&other.widened(scale))
    }
}

/// Errors from parsing a rating token.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseRatingError {
    #[error("empty rating")]
    Empty,

    #[error("invalid rating: {0}")]
    Invalid(String),

    #[error("rating has too many digits: {0}")]
    TooLong(String),
}

impl FromStr for Rating {
    type Err = ParseRatingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err(ParseRatingError::Empty);
        }

        let (negative, unsigned) = match s.as_bytes()[0] {
            b'-' => (true, &s[1..]),
            b'+' => (false, &s[1..]),
            _ => (false, s),
        };

        let (int_part, frac_part) = unsigned.split_once('.').unwrap_or((unsigned, ""));
        let all_digits = |p: &str| p.bytes().all(|b| b.is_ascii_digit());
        if int_part.len() + frac_part.len() == 0 || !all_digits(int_part) || !all_digits(frac_part)
        {
            return Err(ParseRatingError::Invalid(s.to_string()));
        }

        // Trailing fractional zeros carry no value.
        let frac_part = frac_part.trim_end_matches('0');
        let digits = format!("{int_part}{frac_part}");
        let significant = digits.trim_start_matches('0');
        if significant.len() > MAX_DIGITS || frac_part.len() > MAX_DIGITS {
            return Err(ParseRatingError::TooLong(s.to_string()));
        }

        let magnitude: i64 = if significant.is_empty() {
            0
        } else {
            significant
                .parse()
                .map_err(|_| ParseRatingError::TooLong(s.to_string()))?
        };

        Ok(Self {
            mantissa: if negative { -magnitude } else { magnitude },
            scale: frac_part.len() as u32,
            text: Cow::Owned(s.to_string()),
        })
    }
}

#[cfg(test)]
#[path = "rating_tests.rs"]
mod tests;
