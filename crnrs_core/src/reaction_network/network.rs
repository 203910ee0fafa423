//! This module provides the ReactionNetwork struct for representing an entire chemical reaction
//! network
use std::collections::BTreeSet;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

use log::debug;
use nalgebra::DMatrix;

use crate::configuration::Configuration;
use crate::io::equation_parse::{parse_network, NetworkParseError};
use crate::kinetics::rate_equation::RateEquations;
use crate::reaction_network::complex::Species;
use crate::reaction_network::reaction::Reaction;

/// Represents a Chemical Reaction Network (CRN)
///
/// The reactions are kept sorted, and the position of a reaction in that order is the index of
/// its rate constant. Duplicate reactions are kept, and each copy gets its own rate constant.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ReactionNetwork {
    reactions: Vec<Reaction>,
}

impl ReactionNetwork {
    /// Create a new network from any collection of directed reactions
    ///
    /// # Examples
    /// ```rust
    /// use crnrs_core::io::equation_parse::parse_equation;
    /// use crnrs_core::reaction_network::network::ReactionNetwork;
    /// let reactions = parse_equation("a <-> 2b").unwrap();
    /// let network = ReactionNetwork::new(reactions);
    /// assert_eq!(network.render(), "a -> 2b\n2b -> a\n");
    /// ```
    pub fn new<I: IntoIterator<Item = Reaction>>(reactions: I) -> Self {
        let mut reactions: Vec<Reaction> = reactions.into_iter().collect();
        reactions.sort();
        debug!("Constructed reaction network with {} reactions", reactions.len());
        ReactionNetwork { reactions }
    }

    /// Reactions in canonical order
    pub fn reactions(&self) -> &[Reaction] {
        &self.reactions
    }

    pub fn len(&self) -> usize {
        self.reactions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.reactions.is_empty()
    }

    /// Set of every species occurring on either side of any reaction
    pub fn species(&self) -> BTreeSet<Species> {
        self.reactions
            .iter()
            .flat_map(|r| r.source.species().chain(r.destination.species()))
            .map(|s| s.to_string())
            .collect()
    }

    /// Render the network with one `source -> destination` line per reaction
    pub fn render(&self) -> String {
        self.reactions
            .iter()
            .map(|r| format!("{}\n", r))
            .collect()
    }

    /// Build the mass-action rate equations of the network using the global configuration
    pub fn rate_equations(&self) -> RateEquations {
        RateEquations::new(self)
    }

    /// Stoichiometric matrix of the network
    ///
    /// Rows are species in ascending order (as returned by [`ReactionNetwork::species`]),
    /// columns are reactions in canonical order, and each entry is the net change of the
    /// species when the reaction fires once.
    pub fn stoichiometric_matrix(&self) -> DMatrix<i64> {
        let species: Vec<Species> = self.species().into_iter().collect();
        DMatrix::from_fn(species.len(), self.reactions.len(), |row, column| {
            self.reactions[column].net_change(&species[row])
        })
    }

    /// Render the stoichiometric matrix as a table
    ///
    /// The header holds the rate constant label of each reaction column, and each following
    /// line starts with a species name. Columns are right aligned and separated by a space.
    pub fn render_stoichiometric_matrix(&self, configuration: &Configuration) -> String {
        let matrix = self.stoichiometric_matrix();
        let species: Vec<Species> = self.species().into_iter().collect();
        let labels: Vec<String> = RateEquations::with_configuration(self, configuration)
            .propensities()
            .iter()
            .map(|p| p.label())
            .collect();
        let name_width = species.iter().map(|s| s.len()).max().unwrap_or(0);
        let column_width = labels.iter().map(|l| l.len()).max().unwrap_or(0).max(3);

        let mut table = format!("{:name_width$}", "");
        for label in &labels {
            table.push_str(&format!(" {:>column_width$}", label));
        }
        table.push('\n');
        for (row, name) in species.iter().enumerate() {
            table.push_str(&format!("{:name_width$}", name));
            for column in 0..matrix.ncols() {
                table.push_str(&format!(" {:>column_width$}", matrix[(row, column)]));
            }
            table.push('\n');
        }
        table
    }
}

impl Display for ReactionNetwork {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.render())
    }
}

impl FromStr for ReactionNetwork {
    type Err = NetworkParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_network(s.lines())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::equation_parse::parse_equation;

    const EXAMPLE: &str = "    a <-> 2b
a + c <-> d
    d  -> b + e
b + e  -> a + c
";

    #[test]
    fn render_example() {
        let network: ReactionNetwork = EXAMPLE.parse().unwrap();
        assert_eq!(
            network.render(),
            "a -> 2b\n\
             a + c -> d\n\
             b + e -> a + c\n\
             2b -> a\n\
             d -> a + c\n\
             d -> b + e\n"
        );
        assert_eq!(format!("{}", network), network.render());
    }

    #[test]
    fn species_of_example() {
        let network: ReactionNetwork = EXAMPLE.parse().unwrap();
        let expected: BTreeSet<String> = ["a", "b", "c", "d", "e"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        assert_eq!(network.species(), expected);
    }

    #[test]
    fn construction_order_does_not_matter() {
        let mut reactions = parse_equation("d -> b + e").unwrap();
        reactions.extend(parse_equation("a <-> 2b").unwrap());
        let forward = ReactionNetwork::new(reactions.clone());
        reactions.reverse();
        let backward = ReactionNetwork::new(reactions);
        assert_eq!(forward, backward);
        assert_eq!(forward.render(), backward.render());
    }

    #[test]
    fn duplicate_reactions_are_kept() {
        let network: ReactionNetwork = "a -> b\na -> b".parse().unwrap();
        assert_eq!(network.len(), 2);
        assert_eq!(network.render(), "a -> b\na -> b\n");
    }

    #[test]
    fn empty_network() {
        let network = ReactionNetwork::new(Vec::new());
        assert!(network.is_empty());
        assert!(network.species().is_empty());
        assert_eq!(network.render(), "");
        let matrix = network.stoichiometric_matrix();
        assert_eq!(matrix.shape(), (0, 0));
    }

    #[test]
    fn stoichiometric_matrix_of_example() {
        let network: ReactionNetwork = EXAMPLE.parse().unwrap();
        let expected = DMatrix::from_row_slice(
            5,
            6,
            &[
                -1, -1, 1, 1, 1, 0, // a
                2, 0, -1, -2, 0, 1, // b
                0, -1, 1, 0, 1, 0, // c
                0, 1, 0, 0, -1, -1, // d
                0, 0, -1, 0, 0, 1, // e
            ],
        );
        assert_eq!(network.stoichiometric_matrix(), expected);
    }

    #[test]
    fn large_repeated_coefficients() {
        let network: ReactionNetwork = "4294967295a + 4294967295a -> b".parse().unwrap();
        let matrix = network.stoichiometric_matrix();
        assert_eq!(matrix[(0, 0)], -2 * i64::from(u32::MAX));
        assert_eq!(matrix[(1, 0)], 1);
    }

    #[test]
    fn stoichiometric_table() {
        let network: ReactionNetwork = "a <-> 2b".parse().unwrap();
        assert_eq!(
            network.render_stoichiometric_matrix(&Configuration::default()),
            "   k0  k1\n\
             a  -1   1\n\
             b   2  -2\n"
        );
    }

    #[test]
    fn stoichiometric_table_uses_rate_constant_prefix() {
        use crate::configuration::ConfigurationBuilder;
        let network: ReactionNetwork = "substrate -> product".parse().unwrap();
        let configuration = ConfigurationBuilder::default()
            .rate_constant_prefix("rate")
            .build()
            .unwrap();
        assert_eq!(
            network.render_stoichiometric_matrix(&configuration),
            "          rate0\n\
             product       1\n\
             substrate    -1\n"
        );
    }

    #[test]
    fn autocatalytic_column_nets_out() {
        let network: ReactionNetwork = "a + b -> 2b".parse().unwrap();
        let matrix = network.stoichiometric_matrix();
        assert_eq!(matrix[(0, 0)], -1);
        assert_eq!(matrix[(1, 0)], 1);
    }
}
