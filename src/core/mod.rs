//! Native core: the point-mass [`Particle`] and the integer helpers in [`math`].
//!
//! Nothing in here knows about Python; the adapter in `crate::python` converts
//! host values to these types and back.

pub mod math;
pub mod particle;

pub use math::{factorial, fibonacci};
pub use particle::{vec3_from_slice, Particle, DIM};
