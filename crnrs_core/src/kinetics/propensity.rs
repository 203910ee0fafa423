//! This module provides the Propensity struct, the symbolic mass-action rate of one reaction
use std::fmt::{Display, Formatter};

use crate::reaction_network::complex::Complex;
use crate::utils::notation::power;

/// Symbolic propensity factor of a reaction, such as `k1(a c)` or `k3(b^2)`
///
/// Under mass-action kinetics the rate only depends on the source complex: the rate constant
/// times every source species raised to its coefficient.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Propensity {
    /// Index of the reaction in the network, which is also the index of its rate constant
    pub rate_constant: usize,
    /// Symbol written in front of the index to label the rate constant
    pub prefix: String,
    /// Source complex of the reaction
    pub source: Complex,
}

impl Propensity {
    pub fn new(rate_constant: usize, prefix: &str, source: &Complex) -> Propensity {
        Propensity {
            rate_constant,
            prefix: prefix.to_string(),
            source: source.clone(),
        }
    }

    /// Label of the rate constant (`k0`, `k1`, ...)
    pub fn label(&self) -> String {
        format!("{}{}", self.prefix, self.rate_constant)
    }
}

impl Display for Propensity {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let factors: Vec<String> = self
            .source
            .terms()
            .iter()
            .map(|t| power(&t.species, t.coefficient))
            .collect();
        write!(f, "{}({})", self.label(), factors.join(" "))
    }
}
