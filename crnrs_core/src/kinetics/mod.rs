//! Module for deriving symbolic mass-action kinetics from a reaction network

pub mod propensity;
pub mod rate_equation;
