// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Host range expansion: `db-[a:f].example.com`, `www[01:50:2].example.com`
//!
//! Numeric bounds are inclusive. A start bound with a leading zero pads every
//! value to its width. Several ranges in one name expand as a cartesian
//! product with the leftmost range varying slowest.

use regex::Regex;
use std::sync::LazyLock;
use thiserror::Error;

/// Matches one `[...]` group without nested brackets.
#[allow(clippy::expect_used)]
static BRACKET_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[([^\[\]]*)\]").expect("constant regex pattern is valid"));

/// Most host names a single token may expand to. Larger patterns are
/// rejected so one line cannot stall parsing or exhaust memory.
pub const MAX_EXPANDED_HOSTS: usize = 10_000;

/// Errors from parsing a range pattern
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RangeError {
    #[error("unbalanced brackets in '{0}'")]
    Unbalanced(String),

    #[error("range '[{0}]' must be [start:end] or [start:end:step]")]
    Syntax(String),

    #[error("range start '{start}' is after end '{end}'")]
    Reversed { start: String, end: String },

    #[error("range bounds '{start}' and '{end}' are not both numbers or both letters")]
    MixedBounds { start: String, end: String },

    #[error("letter range bounds '{start}' and '{end}' must be single letters of the same case")]
    LetterBounds { start: String, end: String },

    #[error("invalid range step '{0}'")]
    Step(String),

    #[error("pattern '{0}' expands to too many hosts")]
    TooLarge(String),
}

/// Turns a host name token into the names it stands for.
pub trait HostExpander {
    fn expand(&self, token: &str) -> Result<HostPattern, RangeError>;
}

/// Expands `[start:end(:step)]` ranges.
#[derive(Debug, Clone, Copy, Default)]
pub struct RangeExpander;

impl HostExpander for RangeExpander {
    fn expand(&self, token: &str) -> Result<HostPattern, RangeError> {
        HostPattern::parse(token)
    }
}

/// Treats every token as a single literal host name.
#[derive(Debug, Clone, Copy, Default)]
pub struct LiteralExpander;

impl HostExpander for LiteralExpander {
    fn expand(&self, token: &str) -> Result<HostPattern, RangeError> {
        Ok(HostPattern::literal(token))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Literal(String),
    Numeric {
        start: u64,
        step: u64,
        count: usize,
        width: usize,
    },
    Letters {
        start: u8,
        step: u8,
        count: usize,
    },
}

impl Segment {
    fn count(&self) -> usize {
        match self {
            Segment::Literal(_) => 1,
            Segment::Numeric { count, .. } | Segment::Letters { count, .. } => *count,
        }
    }

    fn push_value(&self, index: usize, out: &mut String) {
        match self {
            Segment::Literal(text) => out.push_str(text),
            Segment::Numeric {
                start, step, width, ..
            } => {
                let value = start + step * index as u64;
                out.push_str(&format!("{:0width$}", value, width = *width));
            }
            Segment::Letters { start, step, .. } => {
                let value = start + step * index as u8;
                out.push(value as char);
            }
        }
    }
}

/// A finite set of host names described by one token.
///
/// Names are produced lazily by [`HostPattern::iter`], which can be called
/// any number of times.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostPattern {
    segments: Vec<Segment>,
    len: usize,
}

impl HostPattern {
    /// A pattern standing for exactly `name`.
    pub fn literal(name: &str) -> Self {
        Self {
            segments: vec![Segment::Literal(name.to_string())],
            len: 1,
        }
    }

    /// Parse a token, expanding every bracketed range in it.
    pub fn parse(token: &str) -> Result<Self, RangeError> {
        let mut segments = Vec::new();
        let mut last = 0;
        for caps in BRACKET_PATTERN.captures_iter(token) {
            let (Some(whole), Some(body)) = (caps.get(0), caps.get(1)) else {
                continue;
            };
            push_literal(&mut segments, &token[last..whole.start()], token)?;
            segments.push(parse_range(body.as_str())?);
            last = whole.end();
        }
        push_literal(&mut segments, &token[last..], token)?;

        let len = segments
            .iter()
            .try_fold(1usize, |acc, seg| acc.checked_mul(seg.count()))
            .filter(|&len| len <= MAX_EXPANDED_HOSTS)
            .ok_or_else(|| RangeError::TooLarge(token.to_string()))?;
        Ok(Self { segments, len })
    }

    /// Number of names this pattern expands to.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// True when the pattern contains at least one range.
    pub fn is_range(&self) -> bool {
        self.segments
            .iter()
            .any(|seg| !matches!(seg, Segment::Literal(_)))
    }

    pub fn iter(&self) -> HostPatternIter<'_> {
        HostPatternIter {
            pattern: self,
            next: 0,
        }
    }
}

impl<'a> IntoIterator for &'a HostPattern {
    type Item = String;
    type IntoIter = HostPatternIter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over the names of a [`HostPattern`].
#[derive(Debug, Clone)]
pub struct HostPatternIter<'a> {
    pattern: &'a HostPattern,
    next: usize,
}

impl Iterator for HostPatternIter<'_> {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        if self.next >= self.pattern.len {
            return None;
        }

        // Mixed-radix decomposition, rightmost segment fastest.
        let segments = &self.pattern.segments;
        let mut digits = vec![0; segments.len()];
        let mut rem = self.next;
        for (digit, seg) in digits.iter_mut().zip(segments).rev() {
            let count = seg.count();
            *digit = rem % count;
            rem /= count;
        }

        let mut name = String::new();
        for (seg, digit) in segments.iter().zip(digits) {
            seg.push_value(digit, &mut name);
        }
        self.next += 1;
        Some(name)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let left = self.pattern.len.saturating_sub(self.next);
        (left, Some(left))
    }
}

impl ExactSizeIterator for HostPatternIter<'_> {}

fn push_literal(segments: &mut Vec<Segment>, text: &str, token: &str) -> Result<(), RangeError> {
    if text.contains(['[', ']']) {
        return Err(RangeError::Unbalanced(token.to_string()));
    }
    if !text.is_empty() {
        segments.push(Segment::Literal(text.to_string()));
    }
    Ok(())
}

fn parse_range(body: &str) -> Result<Segment, RangeError> {
    let parts: Vec<&str> = body.split(':').collect();
    let (start, end, step) = match parts.as_slice() {
        [start, end] => (*start, *end, None),
        [start, end, step] => (*start, *end, Some(*step)),
        _ => return Err(RangeError::Syntax(body.to_string())),
    };
    if start.is_empty() || end.is_empty() {
        return Err(RangeError::Syntax(body.to_string()));
    }

    let step = match step {
        None => 1,
        Some(raw) => match raw.parse::<u64>() {
            Ok(n) if n > 0 => n,
            _ => return Err(RangeError::Step(raw.to_string())),
        },
    };

    let numeric = |s: &str| s.bytes().all(|b| b.is_ascii_digit());
    let letters = |s: &str| s.bytes().all(|b| b.is_ascii_alphabetic());

    if numeric(start) && numeric(end) {
        numeric_segment(start, end, step)
    } else if letters(start) && letters(end) {
        letter_segment(start, end, step)
    } else {
        Err(RangeError::MixedBounds {
            start: start.to_string(),
            end: end.to_string(),
        })
    }
}

fn numeric_segment(start: &str, end: &str, step: u64) -> Result<Segment, RangeError> {
    let overflow = || RangeError::TooLarge(format!("[{start}:{end}]"));
    let lo: u64 = start.parse().map_err(|_| overflow())?;
    let hi: u64 = end.parse().map_err(|_| overflow())?;
    if lo > hi {
        return Err(RangeError::Reversed {
            start: start.to_string(),
            end: end.to_string(),
        });
    }
    let count = usize::try_from((hi - lo) / step + 1).map_err(|_| overflow())?;
    let width = if start.len() > 1 && start.starts_with('0') {
        start.len()
    } else {
        0
    };
    Ok(Segment::Numeric {
        start: lo,
        step,
        count,
        width,
    })
}

fn letter_segment(start: &str, end: &str, step: u64) -> Result<Segment, RangeError> {
    let bounds_error = || RangeError::LetterBounds {
        start: start.to_string(),
        end: end.to_string(),
    };
    let (&[lo], &[hi]) = (start.as_bytes(), end.as_bytes()) else {
        return Err(bounds_error());
    };
    if lo.is_ascii_lowercase() != hi.is_ascii_lowercase() {
        return Err(bounds_error());
    }
    if lo > hi {
        return Err(RangeError::Reversed {
            start: start.to_string(),
            end: end.to_string(),
        });
    }
    // Steps past the alphabet collapse to a single value.
    let step = u8::try_from(step).unwrap_or(u8::MAX).min(26);
    Ok(Segment::Letters {
        start: lo,
        step,
        count: usize::from((hi - lo) / step) + 1,
    })
}

#[cfg(test)]
#[path = "range_tests.rs"]
mod tests;
