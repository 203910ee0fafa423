//! This module provides a struct for representing directed reactions
use std::fmt::{Display, Formatter};

use super::complex::Complex;

/// Represents one directed elementary reaction, `source -> destination`
///
/// Reactions order lexicographically by source complex, then destination complex.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Reaction {
    /// Complex consumed by the reaction
    pub source: Complex,
    /// Complex produced by the reaction
    pub destination: Complex,
}

impl Reaction {
    pub fn new(source: Complex, destination: Complex) -> Reaction {
        Reaction {
            source,
            destination,
        }
    }

    /// The same reaction running in the opposite direction
    pub fn reversed(&self) -> Reaction {
        Reaction {
            source: self.destination.clone(),
            destination: self.source.clone(),
        }
    }

    /// Net change in the amount of `species` each time the reaction fires
    pub fn net_change(&self, species: &str) -> i64 {
        self.destination.coefficient_of(species) - self.source.coefficient_of(species)
    }
}

impl Display for Reaction {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.source, self.destination)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reaction_network::complex::Term;

    fn complex(terms: &[(&str, u32)]) -> Complex {
        Complex::new(terms.iter().map(|(s, n)| Term::new(s, *n)).collect())
    }

    #[test]
    fn display() {
        let reaction = Reaction::new(complex(&[("c", 1), ("a", 1)]), complex(&[("d", 1)]));
        assert_eq!(reaction.to_string(), "a + c -> d");
        assert_eq!(reaction.reversed().to_string(), "d -> a + c");
    }

    #[test]
    fn net_change() {
        // 2b -> a + b
        let reaction = Reaction::new(complex(&[("b", 2)]), complex(&[("a", 1), ("b", 1)]));
        assert_eq!(reaction.net_change("a"), 1);
        assert_eq!(reaction.net_change("b"), -1);
        assert_eq!(reaction.net_change("q"), 0);
    }

    #[test]
    fn ordering_by_source_then_destination() {
        let first = Reaction::new(complex(&[("a", 1)]), complex(&[("b", 2)]));
        let second = Reaction::new(complex(&[("a", 1)]), complex(&[("c", 1)]));
        let third = Reaction::new(complex(&[("a", 1), ("c", 1)]), complex(&[("d", 1)]));
        let mut reactions = vec![third.clone(), second.clone(), first.clone()];
        reactions.sort();
        assert_eq!(reactions, vec![first, second, third]);
    }
}
