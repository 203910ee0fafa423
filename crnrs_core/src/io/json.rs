//! Module providing JSON IO for reaction networks
use std::fs;
use std::path::Path;

use indexmap::IndexMap;
use log::debug;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::configuration::Configuration;
use crate::kinetics::rate_equation::RateEquations;
use crate::reaction_network::complex::{Complex, Term};
use crate::reaction_network::network::ReactionNetwork;
use crate::reaction_network::reaction::Reaction;

// region JSON Network
/// Represents a JSON serialized network
///
/// Only `reactions` is read back, `species` and `rate_equations` are derived data written for
/// the reader's benefit.
#[derive(Serialize, Deserialize)]
struct JsonNetwork {
    reactions: Vec<JsonReaction>,
    #[serde(default)]
    species: Vec<String>,
    #[serde(default)]
    rate_equations: IndexMap<String, Vec<String>>,
}

#[derive(Serialize, Deserialize)]
struct JsonReaction {
    source: Vec<JsonTerm>,
    destination: Vec<JsonTerm>,
}

#[derive(Serialize, Deserialize)]
struct JsonTerm {
    species: String,
    coefficient: u32,
}
// endregion JSON Network

// region Conversions
impl From<&Term> for JsonTerm {
    fn from(t: &Term) -> Self {
        Self {
            species: t.species.clone(),
            coefficient: t.coefficient,
        }
    }
}

impl TryFrom<JsonTerm> for Term {
    type Error = JsonError;

    fn try_from(t: JsonTerm) -> Result<Self, Self::Error> {
        if t.coefficient == 0 || !is_valid_species(&t.species) {
            return Err(JsonError::InvalidTerm {
                species: t.species,
                coefficient: t.coefficient,
            });
        }
        Ok(Term::new(&t.species, t.coefficient))
    }
}

/// A species must survive being written as an equation and parsed again
fn is_valid_species(species: &str) -> bool {
    match species.chars().next() {
        None => false,
        Some(first) if first.is_ascii_digit() => false,
        Some(_) => {
            !species.chars().any(|c| c.is_whitespace() || c == '+') && !species.contains("->")
        }
    }
}

fn complex_from_json(terms: Vec<JsonTerm>) -> Result<Complex, JsonError> {
    if terms.is_empty() {
        return Err(JsonError::EmptyComplex);
    }
    let terms = terms
        .into_iter()
        .map(Term::try_from)
        .collect::<Result<Vec<Term>, JsonError>>()?;
    Ok(Complex::new(terms))
}

impl ReactionNetwork {
    /// Read a network from a JSON file
    pub fn read_json<P: AsRef<Path>>(path: P) -> Result<ReactionNetwork, JsonError> {
        let network_str = match fs::read_to_string(path) {
            Ok(data) => data,
            Err(err) => return Err(JsonError::UnableToRead(format!("{:?}", err))),
        };
        ReactionNetwork::from_json_str(&network_str)
    }

    /// Read a network from a JSON string
    ///
    /// # Examples
    /// ```rust
    /// use crnrs_core::reaction_network::network::ReactionNetwork;
    /// let data = r#"{"reactions": [
    ///     {"source": [{"species": "a", "coefficient": 1}],
    ///      "destination": [{"species": "b", "coefficient": 2}]}
    /// ]}"#;
    /// let network = ReactionNetwork::from_json_str(data).unwrap();
    /// assert_eq!(network.render(), "a -> 2b\n");
    /// ```
    pub fn from_json_str(data: &str) -> Result<ReactionNetwork, JsonError> {
        let json_network = match serde_json::from_str::<JsonNetwork>(data) {
            Ok(network) => network,
            Err(err) => return Err(JsonError::UnableToParse(format!("{:?}", err))),
        };
        ReactionNetwork::from_json(json_network)
    }

    /// Write the network, its species and its rate equations as a JSON document
    pub fn to_json_string(&self, configuration: &Configuration) -> Result<String, JsonError> {
        let json_network = self.to_json(configuration);
        Ok(serde_json::to_string_pretty(&json_network)?)
    }

    fn from_json(json_network: JsonNetwork) -> Result<Self, JsonError> {
        let mut reactions: Vec<Reaction> = Vec::with_capacity(json_network.reactions.len());
        for rxn in json_network.reactions {
            let source = complex_from_json(rxn.source)?;
            let destination = complex_from_json(rxn.destination)?;
            reactions.push(Reaction::new(source, destination));
        }
        debug!("Read {} reactions from JSON", reactions.len());
        Ok(ReactionNetwork::new(reactions))
    }

    fn to_json(&self, configuration: &Configuration) -> JsonNetwork {
        let json_reactions: Vec<JsonReaction> = self
            .reactions()
            .iter()
            .map(|r| JsonReaction {
                source: r.source.terms().iter().map(JsonTerm::from).collect(),
                destination: r.destination.terms().iter().map(JsonTerm::from).collect(),
            })
            .collect();
        let rate_equations = RateEquations::with_configuration(self, configuration);
        JsonNetwork {
            reactions: json_reactions,
            species: self.species().into_iter().collect(),
            rate_equations: rate_equations.rendered(),
        }
    }
}

#[derive(Error, Debug)]
pub enum JsonError {
    #[error("Unable to read file due to {0}")]
    UnableToRead(String),
    #[error("Unable to parse json due to {0}")]
    UnableToParse(String),
    #[error("Invalid term with species `{species}` and coefficient {coefficient}")]
    InvalidTerm { species: String, coefficient: u32 },
    #[error("Reaction has an empty source or destination complex")]
    EmptyComplex,
    #[error("Serde json error")]
    SerdeJsonError(#[from] serde_json::Error),
}

// endregion Conversions

#[cfg(test)]
mod json_tests {
    use super::*;
    use crate::io::equation_parse::parse_network;
    use serde_json::Value;
    use std::io::Write;

    const EXAMPLE: [&str; 4] = ["a <-> 2b", "a + c <-> d", "d -> b + e", "b + e -> a + c"];

    #[test]
    fn json_reaction() {
        let data = r#"{
"source":[{"species":"a","coefficient":1},{"species":"c","coefficient":1}],
"destination":[{"species":"d","coefficient":1}]
}"#;
        let reaction: JsonReaction = serde_json::from_str(data).unwrap();
        assert_eq!(reaction.source.len(), 2);
        assert_eq!(reaction.source[1].species, "c");
        assert_eq!(reaction.destination[0].coefficient, 1);
    }

    #[test]
    fn to_json() {
        let network = parse_network(["a + c -> d"]).unwrap();
        let json = network.to_json_string(&Configuration::default()).unwrap();
        let value: Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["species"], serde_json::json!(["a", "c", "d"]));
        assert_eq!(value["reactions"][0]["source"][1]["species"], "c");
        assert_eq!(value["reactions"][0]["destination"][0]["coefficient"], 1);
        assert_eq!(value["rate_equations"]["d"], serde_json::json!(["k0(a c)"]));
        assert_eq!(value["rate_equations"]["a"], serde_json::json!(["-k0(a c)"]));
    }

    #[test]
    fn rate_equation_keys_are_sorted() {
        let network = parse_network(EXAMPLE).unwrap();
        let json_network = network.to_json(&Configuration::default());
        let keys: Vec<&String> = json_network.rate_equations.keys().collect();
        assert_eq!(keys, vec!["a", "b", "c", "d", "e"]);
        assert_eq!(
            json_network.rate_equations["b"],
            vec!["k0(a)*2", "-k2(b e)", "-k3(b^2)*2", "k5(d)"]
        );
    }

    #[test]
    fn json_conversion() {
        let network = parse_network(EXAMPLE).unwrap();
        let json = network.to_json_string(&Configuration::default()).unwrap();
        let read_back = ReactionNetwork::from_json_str(&json).unwrap();
        assert_eq!(read_back, network);
    }

    #[test]
    fn derived_fields_are_optional() {
        let data = r#"{"reactions":[
{"source":[{"species":"b","coefficient":2}],"destination":[{"species":"a","coefficient":1}]},
{"source":[{"species":"a","coefficient":1}],"destination":[{"species":"b","coefficient":2}]}
]}"#;
        let network = ReactionNetwork::from_json_str(data).unwrap();
        assert_eq!(network.render(), "a -> 2b\n2b -> a\n");
    }

    #[test]
    fn zero_coefficient() {
        let data = r#"{"reactions":[
{"source":[{"species":"a","coefficient":0}],"destination":[{"species":"b","coefficient":1}]}
]}"#;
        match ReactionNetwork::from_json_str(data) {
            Err(JsonError::InvalidTerm { species, coefficient }) => {
                assert_eq!(species, "a");
                assert_eq!(coefficient, 0);
            }
            _ => panic!("Zero coefficient should have been rejected"),
        }
    }

    #[test]
    fn invalid_species() {
        for species in ["", "2b", "a b", "a+b", "a->b"] {
            let data = format!(
                r#"{{"reactions":[{{"source":[{{"species":"{}","coefficient":1}}],"destination":[{{"species":"x","coefficient":1}}]}}]}}"#,
                species
            );
            assert!(
                matches!(
                    ReactionNetwork::from_json_str(&data),
                    Err(JsonError::InvalidTerm { .. })
                ),
                "species `{}` should have been rejected",
                species
            );
        }
    }

    #[test]
    fn empty_complex() {
        let data = r#"{"reactions":[{"source":[],"destination":[{"species":"b","coefficient":1}]}]}"#;
        assert!(matches!(
            ReactionNetwork::from_json_str(data),
            Err(JsonError::EmptyComplex)
        ));
    }

    #[test]
    fn malformed_json() {
        assert!(matches!(
            ReactionNetwork::from_json_str("{\"reactions\": ["),
            Err(JsonError::UnableToParse(_))
        ));
    }

    #[test]
    fn read_json() {
        let network = parse_network(EXAMPLE).unwrap();
        let json = network.to_json_string(&Configuration::default()).unwrap();
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(json.as_bytes()).unwrap();
        let read_back = ReactionNetwork::read_json(file.path()).unwrap();
        assert_eq!(read_back.render(), network.render());
    }

    #[test]
    fn read_missing_file() {
        assert!(matches!(
            ReactionNetwork::read_json("this/file/does/not/exist.json"),
            Err(JsonError::UnableToRead(_))
        ));
    }
}
