//! This module provides the Term and Complex structs, representing one side of a reaction
use std::fmt::{Display, Formatter};

/// Identifier of a chemical species, compared as a plain string
pub type Species = String;

/// A species together with its stoichiometric coefficient
///
/// Terms order by species first and coefficient second.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Term {
    /// Species identifier
    pub species: Species,
    /// Stoichiometric coefficient, at least 1 for any parsed term
    pub coefficient: u32,
}

impl Term {
    pub fn new(species: &str, coefficient: u32) -> Term {
        Term {
            species: species.to_string(),
            coefficient,
        }
    }
}

impl Display for Term {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        if self.coefficient == 1 {
            write!(f, "{}", self.species)
        } else {
            write!(f, "{}{}", self.coefficient, self.species)
        }
    }
}

/// Represents a complex, the multiset of species on one side of a reaction
///
/// The terms are always stored in ascending order. Repeated species are kept as separate
/// terms, so `a + a` holds two `a` terms rather than a single `2a`.
#[derive(Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Complex {
    terms: Vec<Term>,
}

impl Complex {
    /// Create a new complex, sorting the provided terms into canonical order
    ///
    /// # Examples
    /// ```rust
    /// use crnrs_core::reaction_network::complex::{Complex, Term};
    /// let complex = Complex::new(vec![Term::new("c", 1), Term::new("a", 2)]);
    /// assert_eq!(complex.to_string(), "2a + c");
    /// ```
    pub fn new(mut terms: Vec<Term>) -> Complex {
        terms.sort();
        Complex { terms }
    }

    /// Terms of the complex in canonical order
    pub fn terms(&self) -> &[Term] {
        &self.terms
    }

    /// Number of terms (repeated species counted separately)
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Iterate over the species identifiers of the complex, in canonical order
    pub fn species(&self) -> impl Iterator<Item = &str> {
        self.terms.iter().map(|t| t.species.as_str())
    }

    /// Total coefficient of `species` in the complex, summed over repeated terms
    ///
    /// Summed as `i64` since repeated terms may each be as large as `u32::MAX`.
    pub fn coefficient_of(&self, species: &str) -> i64 {
        self.terms
            .iter()
            .filter(|t| t.species == species)
            .map(|t| i64::from(t.coefficient))
            .sum()
    }
}

impl Display for Complex {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        for (position, term) in self.terms.iter().enumerate() {
            if position > 0 {
                write!(f, " + ")?;
            }
            write!(f, "{}", term)?;
        }
        Ok(())
    }
}
