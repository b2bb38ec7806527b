//! Python adapter layer.
//!
//! Translates host values into core types and back; carries no logic of its own.
//! Two binding styles live side by side: [`math::fact`] unpacks its argument tuple
//! by hand, while [`math::fib`] and [`PyParticle`] let PyO3 generate the marshaling.

use pyo3::exceptions::{PyOverflowError, PyValueError};
use pyo3::prelude::*;

use crate::error::Error;

pub mod math;
pub mod particle;

pub use particle::PyParticle;

pub(crate) fn py_err(e: Error) -> PyErr {
    match e {
        Error::Overflow { .. } => PyOverflowError::new_err(e.to_string()),
        Error::InvalidMass(_) | Error::DimensionMismatch { .. } => {
            PyValueError::new_err(e.to_string())
        }
    }
}

/// Add every class and function of this crate to `m`.
///
/// The `#[pymodule]` entry point delegates here; an embedding application can
/// call it once at startup on a module of its own instead of importing the
/// compiled extension.
pub fn register(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyParticle>()?;
    m.add_function(wrap_pyfunction!(math::fact, m)?)?;
    m.add_function(wrap_pyfunction!(math::fib, m)?)?;
    log::debug!("registered pyglue bindings on module {}", m.name()?);
    Ok(())
}
