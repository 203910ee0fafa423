//! Parse the terms and complexes making up each side of a reaction equation

use crate::io::equation_parse::ParseError;
use crate::reaction_network::complex::{Complex, Term};

/// Scans a single term, splitting the leading coefficient from the species identifier
struct TermScanner {
    source: Vec<char>,
    current: usize,
}

impl TermScanner {
    fn new(source: &str) -> Self {
        TermScanner {
            source: source.chars().collect(),
            current: 0,
        }
    }

    /// Consume the leading run of digits, which may be empty
    fn read_coefficient(&mut self) -> String {
        let start = self.current;
        while TermScanner::is_digit(self.peek()) {
            self.advance();
        }
        self.source[start..self.current].iter().collect()
    }

    /// Everything after the current position
    fn remainder(&self) -> String {
        self.source[self.current..].iter().collect()
    }

    fn advance(&mut self) -> char {
        let char_at_current = self.source[self.current];
        self.current += 1;
        char_at_current
    }

    fn peek(&self) -> char {
        if self.is_at_end() {
            return '\0';
        }
        self.source[self.current]
    }

    fn is_digit(c: char) -> bool {
        c.is_ascii_digit()
    }

    fn is_at_end(&self) -> bool {
        self.current >= self.source.len()
    }
}

/// Parse a single term such as `2b` or `H2O` into a [`Term`]
///
/// Surrounding whitespace is ignored. A missing coefficient defaults to 1.
///
/// # Errors
/// [`ParseError::MalformedTerm`] if no species remains after the coefficient, if the species
/// contains whitespace, or if the coefficient is zero or too large.
///
/// # Examples
/// ```rust
/// use crnrs_core::io::equation_parse::parse_term;
/// let term = parse_term(" 2H2O ").unwrap();
/// assert_eq!(term.species, "H2O");
/// assert_eq!(term.coefficient, 2);
/// ```
pub fn parse_term(text: &str) -> Result<Term, ParseError> {
    let trimmed = text.trim();
    let malformed = || ParseError::MalformedTerm(trimmed.to_string());

    let mut scanner = TermScanner::new(trimmed);
    let digits = scanner.read_coefficient();
    let remainder = scanner.remainder();
    let species = remainder.trim();
    if species.is_empty() || species.chars().any(char::is_whitespace) {
        return Err(malformed());
    }

    let coefficient = if digits.is_empty() {
        1
    } else {
        digits.parse::<u32>().map_err(|_| malformed())?
    };
    if coefficient == 0 {
        return Err(malformed());
    }
    Ok(Term::new(species, coefficient))
}

/// Parse one side of a reaction equation such as `a + 2b` into a canonical [`Complex`]
///
/// # Errors
/// [`ParseError::MalformedComplex`] if the side, or any piece between `+` separators, is blank.
/// Errors from [`parse_term`] are passed through.
///
/// # Examples
/// ```rust
/// use crnrs_core::io::equation_parse::parse_complex;
/// let complex = parse_complex("c + 2a").unwrap();
/// assert_eq!(complex.to_string(), "2a + c");
/// ```
pub fn parse_complex(text: &str) -> Result<Complex, ParseError> {
    let mut terms = Vec::new();
    for piece in text.split('+') {
        if piece.trim().is_empty() {
            return Err(ParseError::MalformedComplex(text.trim().to_string()));
        }
        terms.push(parse_term(piece)?);
    }
    Ok(Complex::new(terms))
}
