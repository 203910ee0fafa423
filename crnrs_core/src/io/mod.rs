//! Module for reading and writing reaction networks
pub mod equation_parse;
pub mod json;
