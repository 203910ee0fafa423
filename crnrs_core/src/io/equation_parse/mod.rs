//! Module for parsing reaction equations such as `a + c <-> d` into directed reactions

use log::{debug, trace};
use thiserror::Error;

use crate::io::equation_parse::arrow::Arrow;
use crate::reaction_network::network::ReactionNetwork;
use crate::reaction_network::reaction::Reaction;

mod arrow;
mod term;

pub use term::{parse_complex, parse_term};

/// Parse one reaction equation into its directed reactions
///
/// A reversible equation (`<->`) yields the forward reaction followed by the reverse reaction,
/// an irreversible one (`->`) yields a single reaction.
///
/// # Parameters
/// - `line`: &str holding one reaction equation
///
/// # Returns
/// Parse result which is
/// - `Ok`: the directed reactions described by the line
/// - `Err`: the [`ParseError`] describing what is wrong with the line
///
/// # Examples
/// ```rust
/// use crnrs_core::io::equation_parse::parse_equation;
/// let reactions = parse_equation("a <-> 2b").unwrap();
/// assert_eq!(reactions.len(), 2);
/// assert_eq!(reactions[0].to_string(), "a -> 2b");
/// assert_eq!(reactions[1].to_string(), "2b -> a");
/// ```
pub fn parse_equation(line: &str) -> Result<Vec<Reaction>, ParseError> {
    let arrow = match Arrow::detect(line) {
        Some(arrow) => arrow,
        None => return Err(ParseError::MissingArrow(line.trim().to_string())),
    };
    let malformed = || ParseError::MalformedEquation(line.trim().to_string());

    let (source, destination) = line.split_once(arrow.symbol()).ok_or_else(malformed)?;
    // A second arrow on either side means the line does not split into exactly two sides
    if source.trim().is_empty()
        || destination.trim().is_empty()
        || Arrow::detect(source).is_some()
        || Arrow::detect(destination).is_some()
    {
        return Err(malformed());
    }

    let source = parse_complex(source)?;
    let destination = parse_complex(destination)?;
    trace!("Parsed `{}` as {:?} equation", line.trim(), arrow);
    let forward = Reaction::new(source, destination);
    Ok(match arrow {
        Arrow::Reversible => {
            let reverse = forward.reversed();
            vec![forward, reverse]
        }
        Arrow::Irreversible => vec![forward],
    })
}

/// Parse reaction equations, one per line, into the flattened list of directed reactions
///
/// Blank lines are skipped. The reactions are returned in input order, not canonical order.
pub fn parse_reactions<I, S>(lines: I) -> Result<Vec<Reaction>, NetworkParseError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut reactions = Vec::new();
    for (index, line) in lines.into_iter().enumerate() {
        let line = line.as_ref();
        if line.trim().is_empty() {
            continue;
        }
        match parse_equation(line) {
            Ok(parsed) => reactions.extend(parsed),
            Err(source) => {
                return Err(NetworkParseError {
                    line_number: index + 1,
                    line: line.to_string(),
                    source,
                })
            }
        }
    }
    Ok(reactions)
}

/// Parse reaction equations, one per line, into a [`ReactionNetwork`]
///
/// Parsing is all or nothing, the first bad line aborts with an error naming that line.
///
/// # Examples
/// ```rust
/// use crnrs_core::io::equation_parse::parse_network;
/// let network = parse_network(["a <-> 2b", "", "a + c -> d"]).unwrap();
/// assert_eq!(network.render(), "a -> 2b\na + c -> d\n2b -> a\n");
/// ```
pub fn parse_network<I, S>(lines: I) -> Result<ReactionNetwork, NetworkParseError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let reactions = parse_reactions(lines)?;
    debug!("Parsed {} directed reactions", reactions.len());
    Ok(ReactionNetwork::new(reactions))
}

/// Enum representing possible errors parsing a single reaction equation
#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum ParseError {
    /// The line contains neither `->` nor `<->`
    #[error("No reaction arrow (`->` or `<->`) found in `{0}`")]
    MissingArrow(String),
    /// Splitting on the arrow did not give exactly two non-empty sides
    #[error("Equation `{0}` must have exactly one arrow with a complex on each side")]
    MalformedEquation(String),
    /// A side of the equation is empty, or has an empty term between `+` separators
    #[error("Complex `{0}` contains an empty term")]
    MalformedComplex(String),
    /// A term has no species after its coefficient, or an invalid coefficient
    #[error("Term `{0}` is not a positive coefficient followed by a species")]
    MalformedTerm(String),
}

/// Error parsing a list of reaction equations, pointing at the offending line
#[derive(Debug, Error, PartialEq, Eq, Clone)]
#[error("Unable to parse reaction equation on line {line_number}: `{line}`")]
pub struct NetworkParseError {
    /// 1-based number of the offending line, blank lines included
    pub line_number: usize,
    /// Text of the offending line
    pub line: String,
    /// What is wrong with the line
    #[source]
    pub source: ParseError,
}
