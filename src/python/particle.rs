use numpy::{PyArray1, ToPyArray};
use pyo3::prelude::*;

use super::py_err;
use crate::config::ParticleConfig;
use crate::core::{vec3_from_slice, Particle, DIM};
use crate::error::Error;

/// Read any iterable of floats (list, tuple, float32/float64 NumPy array) into a 3-vector.
fn vec3_arg(what: &'static str, obj: &Bound<'_, PyAny>) -> PyResult<[f64; DIM]> {
    let xs = obj
        .try_iter()?
        .take(DIM + 1)
        .map(|item| item?.extract::<f64>())
        .collect::<PyResult<Vec<f64>>>()?;
    if xs.len() > DIM {
        // Only DIM + 1 items were drained; report the real length when it is known.
        return Err(py_err(Error::DimensionMismatch {
            what,
            expected: DIM,
            got: obj.len().unwrap_or(xs.len()),
        }));
    }
    vec3_from_slice(what, &xs).map_err(py_err)
}

fn opt_vec3_arg(what: &'static str, obj: Option<&Bound<'_, PyAny>>) -> PyResult<[f64; DIM]> {
    match obj {
        Some(o) => vec3_arg(what, o),
        None => Ok([0.0; DIM]),
    }
}

/// Python-facing wrapper around the native [`Particle`].
///
/// `position` and `velocity` are returned as fresh float64 NumPy arrays, so
/// writing into them never touches the particle.
#[pyclass(name = "Particle", module = "pyglue")]
pub struct PyParticle {
    inner: Particle,
}

#[pymethods]
impl PyParticle {
    /// Create a particle.
    ///
    /// Parameters
    /// - mass: particle mass (not validated unless strict_mass=True)
    /// - charge: stored only
    /// - position, velocity: length-3 float sequences; default to zeros
    /// - accumulate: add each impulse displacement to the position instead of replacing it
    /// - strict_mass: reject non-finite or non-positive masses
    ///
    /// Errors: raises ValueError on wrong vector length or rejected mass.
    #[new]
    #[pyo3(signature = (mass=0.0, charge=0.0, position=None, velocity=None, *, accumulate=false, strict_mass=false))]
    fn new(
        mass: f64,
        charge: f64,
        position: Option<&Bound<'_, PyAny>>,
        velocity: Option<&Bound<'_, PyAny>>,
        accumulate: bool,
        strict_mass: bool,
    ) -> PyResult<Self> {
        let r = opt_vec3_arg("position", position)?;
        let v = opt_vec3_arg("velocity", velocity)?;
        let config = ParticleConfig::from_flags(accumulate, strict_mass);
        let inner = Particle::with_config(mass, charge, r, v, config).map_err(py_err)?;
        Ok(Self { inner })
    }

    #[getter(mass)]
    fn mass_attr(&self) -> f64 {
        self.inner.mass()
    }

    #[setter(mass)]
    fn assign_mass(&mut self, mass: f64) -> PyResult<()> {
        self.set_mass(mass)
    }

    #[getter(charge)]
    fn charge_attr(&self) -> f64 {
        self.inner.charge()
    }

    #[getter(position)]
    fn position_attr<'py>(&self, py: Python<'py>) -> Bound<'py, PyArray1<f64>> {
        self.inner.position().as_slice().to_pyarray(py)
    }

    #[getter(velocity)]
    fn velocity_attr<'py>(&self, py: Python<'py>) -> Bound<'py, PyArray1<f64>> {
        self.inner.velocity().as_slice().to_pyarray(py)
    }

    fn get_mass(&self) -> f64 {
        self.inner.mass()
    }

    /// Overwrite the mass. Unconditional unless the particle was built with strict_mass=True.
    fn set_mass(&mut self, mass: f64) -> PyResult<()> {
        self.inner.try_set_mass(mass).map_err(py_err)
    }

    fn get_charge(&self) -> f64 {
        self.inner.charge()
    }

    fn get_position<'py>(&self, py: Python<'py>) -> Bound<'py, PyArray1<f64>> {
        self.position_attr(py)
    }

    fn get_velocity<'py>(&self, py: Python<'py>) -> Bound<'py, PyArray1<f64>> {
        self.velocity_attr(py)
    }

    /// Apply `force` (length-3 float sequence) over time step `dt`.
    fn apply_impulse(&mut self, force: &Bound<'_, PyAny>, dt: f64) -> PyResult<()> {
        let f = vec3_arg("force", force)?;
        self.inner.apply_impulse(f, dt);
        Ok(())
    }

    fn __repr__(&self) -> String {
        self.inner.to_string()
    }
}
