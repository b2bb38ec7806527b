//! Native helpers exposed to Python.
//!
//! - [`core`](crate::core): the point-mass [`Particle`](crate::core::Particle) and the
//!   integer helpers [`factorial`](crate::core::factorial) /
//!   [`fibonacci`](crate::core::fibonacci). Pure Rust, no host awareness.
//! - [`config`]: per-particle switches (position update rule, mass policy).
//! - [`error`]: crate error type.
//! - `python` (feature `python`): PyO3 adapter with the explicit
//!   `python::register` entry point.

pub mod config;
pub mod core;
pub mod error;

#[cfg(feature = "python")]
pub mod python;

#[cfg(feature = "python")]
use pyo3::prelude::*;

/// The pyglue Python module entry point.
#[cfg(feature = "python")]
#[pymodule]
fn pyglue(m: &Bound<'_, PyModule>) -> PyResult<()> {
    python::register(m)
}
