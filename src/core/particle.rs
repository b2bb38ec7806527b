use std::fmt;

use crate::config::{MassPolicy, ParticleConfig, PositionUpdate};
use crate::error::{Error, Result};

/// Fixed spatial dimension (3D).
pub const DIM: usize = 3;

/// A point mass driven by impulsive forces.
///
/// Fields:
/// - `mass`: expected > 0; only checked under [`MassPolicy::Strict`]
/// - `charge`: stored and reported, never used by any update
/// - `r`: position [x, y, z]
/// - `v`: velocity [vx, vy, vz]
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Particle {
    mass: f64,
    charge: f64,
    r: [f64; DIM],
    v: [f64; DIM],
    config: ParticleConfig,
}

impl Particle {
    /// Create a particle with the default configuration. Performs no validation:
    /// a zero mass is stored as-is and shows up later as inf/NaN velocities.
    pub fn new(mass: f64, charge: f64, r: [f64; DIM], v: [f64; DIM]) -> Self {
        Self {
            mass,
            charge,
            r,
            v,
            config: ParticleConfig::default(),
        }
    }

    /// Create a particle with an explicit configuration.
    ///
    /// Errors:
    /// - `Error::InvalidMass` if the policy is strict and `mass` is not finite and > 0.
    pub fn with_config(
        mass: f64,
        charge: f64,
        r: [f64; DIM],
        v: [f64; DIM],
        config: ParticleConfig,
    ) -> Result<Self> {
        check_mass(config.mass_policy, mass)?;
        Ok(Self {
            mass,
            charge,
            r,
            v,
            config,
        })
    }

    /// Current mass.
    #[inline]
    pub fn mass(&self) -> f64 {
        self.mass
    }

    /// Stored charge.
    #[inline]
    pub fn charge(&self) -> f64 {
        self.charge
    }

    /// Position (x, y, z).
    #[inline]
    pub fn position(&self) -> &[f64; DIM] {
        &self.r
    }

    /// Velocity (vx, vy, vz).
    #[inline]
    pub fn velocity(&self) -> &[f64; DIM] {
        &self.v
    }

    /// Update rule and mass policy this particle was built with.
    #[inline]
    pub fn config(&self) -> ParticleConfig {
        self.config
    }

    /// Overwrite the mass unconditionally, regardless of the configured policy.
    #[inline]
    pub fn set_mass(&mut self, mass: f64) {
        self.mass = mass;
    }

    /// Overwrite the mass, honouring the configured [`MassPolicy`].
    /// On error the stored mass is left unchanged.
    pub fn try_set_mass(&mut self, mass: f64) -> Result<()> {
        check_mass(self.config.mass_policy, mass)?;
        self.mass = mass;
        Ok(())
    }

    /// Apply `force` over the time step `dt`.
    ///
    /// Each axis is updated independently:
    /// `v' = v + dt / m * f`, then the displacement `(v' + v) * dt / 2` either
    /// replaces the position ([`PositionUpdate::Overwrite`], the default) or is
    /// added to it ([`PositionUpdate::Accumulate`]).
    pub fn apply_impulse(&mut self, force: [f64; DIM], dt: f64) {
        let accumulate = self.config.position_update == PositionUpdate::Accumulate;
        for k in 0..DIM {
            let v_new = self.v[k] + dt / self.mass * force[k];
            let dr = (v_new + self.v[k]) * dt / 2.0;
            self.r[k] = if accumulate { self.r[k] + dr } else { dr };
            self.v[k] = v_new;
        }

        if self.v.iter().any(|c| !c.is_finite()) {
            log::warn!(
                "impulse produced non-finite velocity {:?} (mass={}, dt={})",
                self.v,
                self.mass,
                dt
            );
        } else {
            log::trace!("impulse dt={} -> r={:?} v={:?}", dt, self.r, self.v);
        }
    }
}

impl fmt::Display for Particle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Particle(mass={}, charge={}, position={:?}, velocity={:?})",
            self.mass, self.charge, self.r, self.v
        )
    }
}

fn check_mass(policy: MassPolicy, mass: f64) -> Result<()> {
    match policy {
        MassPolicy::Unchecked => Ok(()),
        MassPolicy::Strict if mass.is_finite() && mass > 0.0 => Ok(()),
        MassPolicy::Strict => Err(Error::InvalidMass(mass)),
    }
}

/// Convert a slice into a fixed 3-vector.
///
/// Errors:
/// - `Error::DimensionMismatch` naming `what` if the slice length is not [`DIM`].
pub fn vec3_from_slice(what: &'static str, xs: &[f64]) -> Result<[f64; DIM]> {
    <[f64; DIM]>::try_from(xs).map_err(|_| Error::DimensionMismatch {
        what,
        expected: DIM,
        got: xs.len(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_particle_reads_back() {
        let p = Particle::new(2.0, -1.5, [0.0, 1.0, 2.0], [2.0, -3.0, 0.5]);
        assert_eq!(p.mass(), 2.0);
        assert_eq!(p.charge(), -1.5);
        assert_eq!(p.position(), &[0.0, 1.0, 2.0]);
        assert_eq!(p.velocity(), &[2.0, -3.0, 0.5]);
        assert_eq!(p.config(), ParticleConfig::default());
    }

    #[test]
    fn default_is_all_zero() {
        let p = Particle::default();
        assert_eq!(p.mass(), 0.0);
        assert_eq!(p.charge(), 0.0);
        assert_eq!(p.position(), &[0.0; DIM]);
        assert_eq!(p.velocity(), &[0.0; DIM]);
    }

    #[test]
    fn impulse_from_rest() {
        let mut p = Particle::new(2.0, 0.0, [0.0; DIM], [0.0; DIM]);
        p.apply_impulse([4.0, 0.0, 0.0], 1.0);
        assert_eq!(p.velocity(), &[2.0, 0.0, 0.0]);
        assert_eq!(p.position(), &[1.0, 0.0, 0.0]);
    }

    #[test]
    fn overwrite_discards_previous_position() {
        let mut p = Particle::new(1.0, 0.0, [10.0, 20.0, 30.0], [1.0, 0.0, 0.0]);
        p.apply_impulse([0.0; DIM], 2.0);
        assert_eq!(p.velocity(), &[1.0, 0.0, 0.0]);
        assert_eq!(p.position(), &[2.0, 0.0, 0.0]);
    }

    #[test]
    fn accumulate_adds_displacement() -> Result<()> {
        let cfg = ParticleConfig::default().with_position_update(PositionUpdate::Accumulate);
        let mut p = Particle::with_config(1.0, 0.0, [10.0, 20.0, 30.0], [1.0, 0.0, 0.0], cfg)?;
        p.apply_impulse([0.0; DIM], 2.0);
        assert_eq!(p.position(), &[12.0, 20.0, 30.0]);
        p.apply_impulse([0.0; DIM], 2.0);
        assert_eq!(p.position(), &[14.0, 20.0, 30.0]);
        Ok(())
    }

    #[test]
    fn set_mass_accepts_anything() {
        let mut p = Particle::new(1.0, 0.0, [0.0; DIM], [0.0; DIM]);
        for m in [3.5, 0.0, -2.0] {
            p.set_mass(m);
            assert_eq!(p.mass(), m);
        }
    }

    #[test]
    fn strict_policy_rejects_bad_mass() {
        let cfg = ParticleConfig::default().with_mass_policy(MassPolicy::Strict);
        for m in [0.0, -1.0, f64::INFINITY] {
            let err = Particle::with_config(m, 0.0, [0.0; DIM], [0.0; DIM], cfg).unwrap_err();
            assert!(err.to_string().contains("invalid mass"));
        }
        let err = Particle::with_config(f64::NAN, 0.0, [0.0; DIM], [0.0; DIM], cfg).unwrap_err();
        assert!(matches!(err, Error::InvalidMass(m) if m.is_nan()));
    }

    #[test]
    fn try_set_mass_keeps_old_value_on_error() -> Result<()> {
        let cfg = ParticleConfig::default().with_mass_policy(MassPolicy::Strict);
        let mut p = Particle::with_config(1.0, 0.0, [0.0; DIM], [0.0; DIM], cfg)?;
        assert_eq!(p.try_set_mass(0.0), Err(Error::InvalidMass(0.0)));
        assert_eq!(p.mass(), 1.0);
        p.try_set_mass(4.0)?;
        assert_eq!(p.mass(), 4.0);
        Ok(())
    }

    #[test]
    fn unchecked_try_set_mass_accepts_zero() -> Result<()> {
        let mut p = Particle::new(1.0, 0.0, [0.0; DIM], [0.0; DIM]);
        p.try_set_mass(0.0)?;
        assert_eq!(p.mass(), 0.0);
        Ok(())
    }

    #[test]
    fn zero_mass_goes_non_finite() {
        let mut p = Particle::new(0.0, 0.0, [0.0; DIM], [0.0; DIM]);
        p.apply_impulse([1.0, 0.0, 0.0], 1.0);
        assert!(p.velocity()[0].is_infinite());
        // inf * 0 on the unforced axes
        assert!(p.velocity()[1].is_nan());
    }

    #[test]
    fn display_lists_all_fields() {
        let p = Particle::new(1.0, 3.0, [0.0, 1.0, 2.0], [0.0, 1.0, 2.0]);
        assert_eq!(
            p.to_string(),
            "Particle(mass=1, charge=3, position=[0.0, 1.0, 2.0], velocity=[0.0, 1.0, 2.0])"
        );
    }

    #[test]
    fn vec3_from_slice_checks_length() -> Result<()> {
        assert_eq!(vec3_from_slice("force", &[1.0, 2.0, 3.0])?, [1.0, 2.0, 3.0]);
        let err = vec3_from_slice("force", &[1.0, 2.0]).unwrap_err();
        assert_eq!(
            err,
            Error::DimensionMismatch {
                what: "force",
                expected: 3,
                got: 2
            }
        );
        Ok(())
    }
}
