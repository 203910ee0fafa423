//! Rendering options shared by the rate equation builder and the JSON writer
use std::sync::{LazyLock, RwLock};

use derive_builder::Builder;

/// Process-wide default configuration, read whenever rate equations are built without an
/// explicit [`Configuration`]
pub static CONFIGURATION: LazyLock<RwLock<Configuration>> =
    LazyLock::new(|| RwLock::new(Configuration::default()));

/// Options controlling how rate equations are rendered
///
/// # Examples
/// ```rust
/// use crnrs_core::configuration::{ConfigurationBuilder, TermOrder};
/// let configuration = ConfigurationBuilder::default()
///     .term_order(TermOrder::Lexicographic)
///     .rate_constant_prefix("r")
///     .build()
///     .unwrap();
/// assert_eq!(configuration.rate_constant_prefix, "r");
/// ```
#[derive(Builder, Clone, Debug, PartialEq, Eq)]
pub struct Configuration {
    /// Order of the terms within one species' derivative
    #[builder(default = "TermOrder::ReactionIndex")]
    pub term_order: TermOrder,
    /// Symbol placed in front of the reaction index to label a rate constant (`k` gives `k0`)
    #[builder(default = "String::from(\"k\")", setter(into))]
    pub rate_constant_prefix: String,
}

impl Default for Configuration {
    fn default() -> Self {
        Configuration {
            term_order: TermOrder::ReactionIndex,
            rate_constant_prefix: String::from("k"),
        }
    }
}

/// Enum used to specify how the terms of a derivative are ordered
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TermOrder {
    /// Ascending index of the originating reaction, consumption before production
    ReactionIndex,
    /// Lexicographic order of the rendered term text
    Lexicographic,
}

/// Get a copy of the current process-wide configuration
///
/// A poisoned lock still yields the last written value.
pub fn configuration() -> Configuration {
    match CONFIGURATION.read() {
        Ok(guard) => guard.clone(),
        Err(poisoned) => poisoned.into_inner().clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_defaults_match_default() {
        let built = ConfigurationBuilder::default().build().unwrap();
        assert_eq!(built, Configuration::default());
        assert_eq!(built.term_order, TermOrder::ReactionIndex);
        assert_eq!(built.rate_constant_prefix, "k");
    }

    #[test]
    fn builder_overrides() {
        let built = ConfigurationBuilder::default()
            .term_order(TermOrder::Lexicographic)
            .rate_constant_prefix("rate")
            .build()
            .unwrap();
        assert_eq!(built.term_order, TermOrder::Lexicographic);
        assert_eq!(built.rate_constant_prefix, "rate");
    }
}
