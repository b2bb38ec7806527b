//! Runtime knobs for [`Particle`](crate::core::Particle).
//!
//! The defaults reproduce the historical behaviour exactly: position is
//! overwritten by each impulse step and mass is never validated.

/// How [`Particle::apply_impulse`](crate::core::Particle::apply_impulse) updates position.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PositionUpdate {
    /// `p' = (v' + v) * dt / 2`; the previous position is discarded.
    #[default]
    Overwrite,
    /// `p' = p + (v' + v) * dt / 2` (trapezoidal step).
    Accumulate,
}

/// Whether mass is checked on construction and on `try_set_mass`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MassPolicy {
    /// Any value is stored; zero mass leads to inf/NaN during impulse application.
    #[default]
    Unchecked,
    /// Mass must be finite and > 0.
    Strict,
}

/// Per-particle configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ParticleConfig {
    /// Position rule for impulse steps.
    pub position_update: PositionUpdate,
    /// Mass validation on construction and `try_set_mass`.
    pub mass_policy: MassPolicy,
}

impl ParticleConfig {
    /// Replace the position update rule.
    pub fn with_position_update(mut self, position_update: PositionUpdate) -> Self {
        self.position_update = position_update;
        self
    }

    /// Replace the mass policy.
    pub fn with_mass_policy(mut self, mass_policy: MassPolicy) -> Self {
        self.mass_policy = mass_policy;
        self
    }

    /// Convenience for the two boolean switches exposed to Python.
    pub fn from_flags(accumulate: bool, strict_mass: bool) -> Self {
        Self::default()
            .with_position_update(if accumulate {
                PositionUpdate::Accumulate
            } else {
                PositionUpdate::Overwrite
            })
            .with_mass_policy(if strict_mass {
                MassPolicy::Strict
            } else {
                MassPolicy::Unchecked
            })
    }
}
