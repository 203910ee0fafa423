use std::collections::BTreeSet;

use crnrs_core::configuration::Configuration;
use crnrs_core::io::equation_parse::NetworkParseError;

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

fn to_py_err(err: NetworkParseError) -> PyErr {
    PyValueError::new_err(format!("{} ({})", err, err.source))
}

#[pyclass(name = "ReactionNetwork")]
struct PyReactionNetwork {
    inner: crnrs_core::reaction_network::network::ReactionNetwork,
}

#[pymethods]
impl PyReactionNetwork {
    #[new]
    fn new(equations: Vec<String>) -> PyResult<Self> {
        let inner = crnrs_core::io::equation_parse::parse_network(&equations).map_err(to_py_err)?;
        Ok(PyReactionNetwork { inner })
    }

    fn species(&self) -> BTreeSet<String> {
        self.inner.species()
    }

    fn render(&self) -> String {
        self.inner.render()
    }

    fn rate_equations(&self) -> String {
        self.inner.rate_equations().render()
    }

    fn __len__(&self) -> usize {
        self.inner.len()
    }

    fn __repr__(&self) -> String {
        self.inner.render()
    }
}

/// Parse reaction equations, returning the network and rate equation renderings
#[pyfunction]
fn derive(equations: Vec<String>) -> PyResult<(String, String)> {
    let derivation =
        crnrs_core::derive(&equations, &Configuration::default()).map_err(to_py_err)?;
    Ok((derivation.network, derivation.rate_equations))
}

/// A Python module implemented in Rust. The name of this function must match
/// the `lib.name` setting in the `Cargo.toml`, else Python will not be able to
/// import the module.
#[pymodule]
fn _core(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(derive, m)?)?;
    m.add_class::<PyReactionNetwork>()?;
    Ok(())
}
