//! Mass-action rate equations of a reaction network
//!
//! Every reaction `i` contributes, for each species `s` with coefficient `n` in its source
//! complex, the term `-n * k_i(...)` to `ds/dt`, and for each species in its destination
//! complex the term `+n * k_i(...)`. Terms are never combined or cancelled.
use std::fmt::{Display, Formatter};

use indexmap::IndexMap;
use log::debug;

use crate::configuration::{configuration, Configuration, TermOrder};
use crate::kinetics::propensity::Propensity;
use crate::reaction_network::complex::Species;
use crate::reaction_network::network::ReactionNetwork;
use crate::utils::notation::scaled;

/// Whether a term consumes or produces its species
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Flux {
    /// The species is in the source complex, the term is negative
    Consumption,
    /// The species is in the destination complex, the term is positive
    Production,
}

/// One additive term of a species' derivative
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct RateTerm {
    /// Index of the reaction the term comes from
    pub reaction: usize,
    /// Sign of the term
    pub flux: Flux,
    /// Stoichiometric coefficient multiplying the propensity
    pub coefficient: u32,
}

/// The right-hand sides of the mass-action ODE system, one per species
///
/// # Examples
/// ```rust
/// use crnrs_core::io::equation_parse::parse_network;
/// use crnrs_core::configuration::Configuration;
/// use crnrs_core::kinetics::rate_equation::RateEquations;
/// let network = parse_network(["a + c -> d"]).unwrap();
/// let equations = RateEquations::with_configuration(&network, &Configuration::default());
/// assert_eq!(
///     equations.render(),
///     "da/dt = -k0(a c)\ndc/dt = -k0(a c)\ndd/dt = k0(a c)\n"
/// );
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RateEquations {
    /// Propensity factor of each reaction, indexed by reaction
    propensities: Vec<Propensity>,
    /// Terms of each species' derivative, species in ascending order, terms in reaction order
    terms: IndexMap<Species, Vec<RateTerm>>,
    term_order: TermOrder,
}

impl RateEquations {
    /// Build the rate equations of `network` using the global configuration
    pub fn new(network: &ReactionNetwork) -> Self {
        RateEquations::with_configuration(network, &configuration())
    }

    /// Build the rate equations of `network` using an explicit configuration
    pub fn with_configuration(network: &ReactionNetwork, configuration: &Configuration) -> Self {
        let propensities: Vec<Propensity> = network
            .reactions()
            .iter()
            .enumerate()
            .map(|(index, reaction)| {
                Propensity::new(index, &configuration.rate_constant_prefix, &reaction.source)
            })
            .collect();

        // Seed with the sorted species so that the map iterates in ascending order
        let mut terms: IndexMap<Species, Vec<RateTerm>> = network
            .species()
            .into_iter()
            .map(|species| (species, Vec::new()))
            .collect();

        for (index, reaction) in network.reactions().iter().enumerate() {
            for term in reaction.source.terms() {
                terms.entry(term.species.clone()).or_default().push(RateTerm {
                    reaction: index,
                    flux: Flux::Consumption,
                    coefficient: term.coefficient,
                });
            }
            for term in reaction.destination.terms() {
                terms.entry(term.species.clone()).or_default().push(RateTerm {
                    reaction: index,
                    flux: Flux::Production,
                    coefficient: term.coefficient,
                });
            }
        }
        debug!(
            "Built rate equations for {} species from {} reactions",
            terms.len(),
            propensities.len()
        );

        RateEquations {
            propensities,
            terms,
            term_order: configuration.term_order,
        }
    }

    /// Propensity factors, indexed by reaction
    pub fn propensities(&self) -> &[Propensity] {
        &self.propensities
    }

    /// Species with a rate equation, in ascending order
    pub fn species(&self) -> impl Iterator<Item = &str> {
        self.terms.keys().map(|s| s.as_str())
    }

    /// Terms of the derivative of `species` in reaction order, or None for an unknown species
    pub fn terms(&self, species: &str) -> Option<&[RateTerm]> {
        self.terms.get(species).map(|t| t.as_slice())
    }

    /// Render a single term, such as `-k3(b^2)*2`
    pub fn render_term(&self, term: &RateTerm) -> String {
        let propensity = &self.propensities[term.reaction];
        let signed = match term.flux {
            Flux::Consumption => format!("-{}", propensity),
            Flux::Production => propensity.to_string(),
        };
        scaled(&signed, term.coefficient)
    }

    /// Rendered terms of the derivative of `species`, in the configured order
    pub fn rendered_terms(&self, species: &str) -> Option<Vec<String>> {
        let mut rendered: Vec<String> = self
            .terms(species)?
            .iter()
            .map(|t| self.render_term(t))
            .collect();
        if self.term_order == TermOrder::Lexicographic {
            rendered.sort();
        }
        Some(rendered)
    }

    /// Render the equation of one species, such as `dd/dt = -k4(d) + -k5(d) + k1(a c)`
    pub fn render_equation(&self, species: &str) -> Option<String> {
        let rendered = self.rendered_terms(species)?;
        Some(format!("d{}/dt = {}", species, rendered.join(" + ")))
    }

    /// Rendered terms of every species, species in ascending order
    pub fn rendered(&self) -> IndexMap<Species, Vec<String>> {
        self.terms
            .keys()
            .filter_map(|s| self.rendered_terms(s).map(|t| (s.clone(), t)))
            .collect()
    }

    /// Render every equation, one line per species in ascending order
    pub fn render(&self) -> String {
        self.terms
            .keys()
            .filter_map(|s| self.render_equation(s))
            .map(|line| format!("{}\n", line))
            .collect()
    }
}

impl Display for RateEquations {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.render())
    }
}
