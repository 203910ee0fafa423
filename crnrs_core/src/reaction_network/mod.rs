//! Module providing the ReactionNetwork struct and its building blocks (complexes and reactions)

pub mod complex;
pub mod network;
pub mod reaction;
