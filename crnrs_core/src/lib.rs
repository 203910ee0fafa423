//! Core rust implementation of crnrs, a crate for turning chemical reaction equations into
//! symbolic mass-action rate equations.

pub mod configuration;
pub mod io;
pub mod kinetics;
pub mod reaction_network;
mod utils;

use crate::configuration::Configuration;
use crate::io::equation_parse::{parse_network, NetworkParseError};
use crate::kinetics::rate_equation::RateEquations;

/// The two text renderings produced from a list of reaction equations
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Derivation {
    /// One `source -> destination` line per canonical reaction
    pub network: String,
    /// One `d<species>/dt = ...` line per species
    pub rate_equations: String,
}

/// Parse reaction equations and derive the canonical network and its rate equations
///
/// # Parameters
/// - `lines`: reaction equations, one per item, blank items are skipped
/// - `configuration`: rendering options for the rate equations
///
/// # Examples
/// ```rust
/// use crnrs_core::configuration::Configuration;
/// use crnrs_core::derive;
/// let derivation = derive(["a <-> 2b"], &Configuration::default()).unwrap();
/// assert_eq!(derivation.network, "a -> 2b\n2b -> a\n");
/// assert_eq!(
///     derivation.rate_equations,
///     "da/dt = -k0(a) + k1(b^2)\ndb/dt = k0(a)*2 + -k1(b^2)*2\n"
/// );
/// ```
pub fn derive<I, S>(lines: I, configuration: &Configuration) -> Result<Derivation, NetworkParseError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let network = parse_network(lines)?;
    let rate_equations = RateEquations::with_configuration(&network, configuration);
    Ok(Derivation {
        network: network.render(),
        rate_equations: rate_equations.render(),
    })
}
