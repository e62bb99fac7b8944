//! # Cycle notation
//!
//! Reading and writing permutations as products of cycles, the way TAOCP
//! writes them:
//!
//! - numbers separated by spaces or commas, `(1 3 6 7)(2,3,4)`;
//! - single lowercase letters standing for `a = 1` to `z = 26`, which may be
//!   run together or separated the same way, `(acfg)(b, c, d)`.
//!
//! Both styles cannot be mixed in one input, including across the
//! permutations of a product. Whitespace between cycles is
//! ignored and `()` is an empty cycle, skipped by the parser. A product of
//! several permutations separates them with `;`.
//!
//! ```
//! use taocp_perm::notation::{format_cycles, format_letters, parse_cycles};
//! use taocp_perm::permutation::product_a;
//!
//! let knuth = parse_cycles("(acfg)(bcd)(aed)(fade)(bgfae)").unwrap();
//! let product = product_a(knuth);
//! assert_eq!(format_cycles(&product), "(1 4 7)(2 3 5)");
//! assert_eq!(format_letters(&product).as_deref(), Some("(adg)(bce)"));
//! ```

use std::{iter::Peekable, str::CharIndices};

use itertools::Itertools;
use thiserror::Error;

use crate::permutation::{Cycle, Factors};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NotationError {
    #[error("unexpected {found:?} at byte {position}")]
    UnexpectedChar { found: char, position: usize },

    #[error("cycle opened at byte {0} is never closed")]
    Unclosed(usize),

    #[error("number at byte {0} is too large")]
    Overflow(usize),

    #[error("element 0 at byte {0}, elements are numbered from 1")]
    Zero(usize),

    #[error("letters and numbers mixed at byte {0}")]
    MixedNotation(usize),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Style {
    Numbers,
    Letters,
}

struct Parser<'a> {
    chars: Peekable<CharIndices<'a>>,
    style: Option<Style>,
}

impl<'a> Parser<'a> {
    fn new(input: &'a str) -> Self {
        Parser {
            chars: input.char_indices().peekable(),
            style: None,
        }
    }

    fn skip_whitespace(&mut self) {
        while self.chars.next_if(|(_, c)| c.is_whitespace()).is_some() {}
    }

    fn set_style(&mut self, style: Style, position: usize) -> Result<(), NotationError> {
        match self.style {
            Some(s) if s != style => Err(NotationError::MixedNotation(position)),
            _ => {
                self.style = Some(style);
                Ok(())
            }
        }
    }

    fn cycles(&mut self) -> Result<Vec<Cycle>, NotationError> {
        let mut cycles = Vec::new();
        loop {
            self.skip_whitespace();
            match self.chars.next() {
                None => return Ok(cycles),
                Some((open, '(')) => {
                    let cycle = self.cycle(open)?;
                    if !cycle.is_empty() {
                        cycles.push(cycle);
                    }
                }
                Some((position, found)) => {
                    return Err(NotationError::UnexpectedChar { found, position })
                }
            }
        }
    }

    /// Elements up to and including the closing parenthesis.
    fn cycle(&mut self, open: usize) -> Result<Cycle, NotationError> {
        let mut elements = Vec::new();
        loop {
            let Some(&(position, c)) = self.chars.peek() else {
                return Err(NotationError::Unclosed(open));
            };
            match c {
                ')' => {
                    self.chars.next();
                    return Ok(Cycle::new(elements));
                }
                c if c == ',' || c.is_whitespace() => {
                    self.chars.next();
                }
                '0'..='9' => {
                    self.set_style(Style::Numbers, position)?;
                    elements.push(self.number(position)?);
                }
                'a'..='z' => {
                    self.set_style(Style::Letters, position)?;
                    self.chars.next();
                    elements.push(c as usize - 'a' as usize + 1);
                }
                found => return Err(NotationError::UnexpectedChar { found, position }),
            }
        }
    }

    fn number(&mut self, start: usize) -> Result<usize, NotationError> {
        let mut value: usize = 0;
        while let Some((_, c)) = self.chars.next_if(|(_, c)| c.is_ascii_digit()) {
            let digit = c as usize - '0' as usize;
            value = value
                .checked_mul(10)
                .and_then(|v| v.checked_add(digit))
                .ok_or(NotationError::Overflow(start))?;
        }
        if value == 0 {
            return Err(NotationError::Zero(start));
        }
        Ok(value)
    }
}

/// Parses a list of cycles such as `(1 3 6 7)(2 3 4)` or `(acfg)(bcd)`.
///
/// Cycles are returned as written; they are neither normalized nor checked
/// for disjointness.
pub fn parse_cycles(input: &str) -> Result<Vec<Cycle>, NotationError> {
    let cycles = Parser::new(input).cycles()?;
    log::trace!("parsed {} cycles from {input:?}", cycles.len());
    Ok(cycles)
}

/// Parses the factors of a product. Without `;` the input is one flat list of
/// cycles, otherwise every `;`-separated part is one permutation.
///
/// ```
/// # use taocp_perm::notation::parse_factors;
/// # use taocp_perm::permutation::{product_a, Factors};
/// let factors = parse_factors("(1 2 3)(4 6); (1 3 2)(4 6)").unwrap();
/// assert!(matches!(factors, Factors::Permutations(ref p) if p.len() == 2));
/// assert!(product_a(factors).is_empty());
/// ```
pub fn parse_factors(input: &str) -> Result<Factors, NotationError> {
    if !input.contains(';') {
        return parse_cycles(input).map(Factors::Cycles);
    }
    let mut offset = 0;
    let mut style = None;
    let mut perms = Vec::new();
    for part in input.split(';') {
        let mut parser = Parser::new(part);
        parser.style = style;
        let perm = parser.cycles().map_err(|e| e.shifted(offset))?;
        style = parser.style;
        perms.push(perm);
        offset += part.len() + 1;
    }
    log::trace!("parsed {} permutations from {input:?}", perms.len());
    Ok(Factors::Permutations(perms))
}

impl NotationError {
    /// Moves the reported position by `offset` bytes.
    fn shifted(self, offset: usize) -> Self {
        match self {
            NotationError::UnexpectedChar { found, position } => NotationError::UnexpectedChar {
                found,
                position: position + offset,
            },
            NotationError::Unclosed(p) => NotationError::Unclosed(p + offset),
            NotationError::Overflow(p) => NotationError::Overflow(p + offset),
            NotationError::Zero(p) => NotationError::Zero(p + offset),
            NotationError::MixedNotation(p) => NotationError::MixedNotation(p + offset),
        }
    }
}

/// Writes a cycle form in numeric notation; the identity is `()`.
pub fn format_cycles(cycles: &[Cycle]) -> String {
    if cycles.is_empty() {
        return "()".to_string();
    }
    cycles.iter().join("")
}

/// Writes a cycle form in letter notation, or `None` when some element is
/// outside `1..=26`.
pub fn format_letters(cycles: &[Cycle]) -> Option<String> {
    if cycles.is_empty() {
        return Some("()".to_string());
    }
    let mut out = String::new();
    for cycle in cycles {
        out.push('(');
        for &x in cycle {
            let letter = u8::try_from(x)
                .ok()
                .filter(|x| (1..=26).contains(x))
                .map(|x| char::from(b'a' + x - 1))?;
            out.push(letter);
        }
        out.push(')');
    }
    Some(out)
}

#[cfg(test)]
mod tests {
    use insta::assert_snapshot;

    use super::*;
    use crate::permutation::{invert, product_a, product_b};

    #[test]
    fn numbers() {
        let cycles = parse_cycles(" (1 3 6 7)(2,3,4) (1, 5 ,4)\n").unwrap();
        assert_eq!(
            cycles,
            vec![
                Cycle::from([1, 3, 6, 7]),
                Cycle::from([2, 3, 4]),
                Cycle::from([1, 5, 4])
            ]
        );
        assert_eq!(parse_cycles("(12 103)").unwrap(), vec![Cycle::from([12, 103])]);
    }

    #[test]
    fn letters() {
        let cycles = parse_cycles("(acfg)(b c d)").unwrap();
        assert_eq!(
            cycles,
            vec![Cycle::from([1, 3, 6, 7]), Cycle::from([2, 3, 4])]
        );
    }

    #[test]
    fn empty_and_identity() {
        assert_eq!(parse_cycles("").unwrap(), Vec::<Cycle>::new());
        assert_eq!(parse_cycles("()( )").unwrap(), Vec::<Cycle>::new());
        assert_snapshot!(format_cycles(&[]), @"()");
        assert_eq!(format_letters(&[]).as_deref(), Some("()"));
    }

    #[test]
    fn errors() {
        assert_eq!(parse_cycles("(1 2"), Err(NotationError::Unclosed(0)));
        assert_eq!(
            parse_cycles("(1 2) x"),
            Err(NotationError::UnexpectedChar {
                found: 'x',
                position: 6
            })
        );
        assert_eq!(
            parse_cycles("(1 A)"),
            Err(NotationError::UnexpectedChar {
                found: 'A',
                position: 3
            })
        );
        assert_eq!(parse_cycles("(1 0 2)"), Err(NotationError::Zero(3)));
        assert_eq!(parse_cycles("(a 2)"), Err(NotationError::MixedNotation(3)));
        assert_eq!(
            parse_cycles("(99999999999999999999999)"),
            Err(NotationError::Overflow(1))
        );
        assert_eq!(
            parse_factors("(1 2); (3 x)"),
            Err(NotationError::MixedNotation(10))
        );
        assert_eq!(
            parse_factors("(1 2); (3 X)"),
            Err(NotationError::UnexpectedChar {
                found: 'X',
                position: 10
            })
        );
        assert_eq!(parse_factors("(1 2);;(3 0)"), Err(NotationError::Zero(10)));
    }

    #[test]
    fn style_is_shared_across_factors() {
        assert_eq!(
            parse_factors("(1 2);(a b)"),
            Err(NotationError::MixedNotation(7))
        );
        assert_eq!(
            parse_factors("(a b); (3 4)"),
            Err(NotationError::MixedNotation(8))
        );
        assert!(parse_factors("(a b);(c d)").is_ok());
    }

    #[test]
    fn commas_separate_letters() {
        assert_eq!(
            parse_cycles("(a, b)(c,d ,e)").unwrap(),
            vec![Cycle::from([1, 2]), Cycle::from([3, 4, 5])]
        );
    }

    #[test]
    fn error_messages() {
        assert_snapshot!(
            parse_cycles("(1 2").unwrap_err(),
            @"cycle opened at byte 0 is never closed"
        );
        assert_snapshot!(
            parse_cycles("(a 2)").unwrap_err(),
            @"letters and numbers mixed at byte 3"
        );
    }

    #[test]
    fn factors() {
        let flat = parse_factors("(1 2 3)(4 6)").unwrap();
        assert_eq!(
            flat,
            Factors::Cycles(vec![Cycle::from([1, 2, 3]), Cycle::from([4, 6])])
        );
        let nested = parse_factors("(1 2 3)(4 6);(3 5)(1 4)").unwrap();
        assert_eq!(
            nested,
            Factors::Permutations(vec![
                vec![Cycle::from([1, 2, 3]), Cycle::from([4, 6])],
                vec![Cycle::from([3, 5]), Cycle::from([1, 4])],
            ])
        );
        assert_eq!(product_a(flat), product_b(parse_factors("(1 2 3);(4 6)").unwrap()));
    }

    #[test]
    fn knuth_in_letters() {
        let knuth = parse_cycles("(acfg)(bcd)(aed)(fade)(bgfae)").unwrap();
        let product = product_a(knuth.clone());
        assert_snapshot!(format_cycles(&product), @"(1 4 7)(2 3 5)");
        assert_snapshot!(format_letters(&product).unwrap(), @"(adg)(bce)");
        assert_eq!(product_b(knuth), product);
    }

    #[test]
    fn inverse_in_letters() {
        let p = parse_cycles("(abc)(df)").unwrap();
        assert_snapshot!(format_letters(&invert(&p)).unwrap(), @"(acb)(df)");
    }

    #[test]
    fn letters_out_of_range() {
        assert_eq!(format_letters(&[Cycle::from([1, 27])]), None);
        assert_eq!(format_letters(&[Cycle::from([0, 2])]), None);
        assert_eq!(
            format_letters(&[Cycle::from([1, 26])]).as_deref(),
            Some("(az)")
        );
    }
}
