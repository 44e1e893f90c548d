//! Controller configuration type definitions
//!
//! All values are in the controller's process units (encoder ticks, degrees,
//! ...) and per-cycle terms assume the fixed cycle period in `period_s`.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Errors rejected at configuration validation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// A gain coefficient is NaN or infinite
    NonFiniteGain,
    /// A threshold/clamp bound is negative (or NaN)
    NegativeBound,
    /// Cycle period is zero, negative, or non-finite
    InvalidPeriod,
}

/// One tuning profile: proportional, integral, derivative and feedforward
/// coefficients
///
/// Immutable once constructed; a controller is parameterized by two of these
/// (a coarse and a refined profile).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Gains {
    /// Proportional gain (Kp)
    pub kp: f64,
    /// Integral gain (Ki)
    pub ki: f64,
    /// Derivative gain (Kd)
    pub kd: f64,
    /// Feedforward gain (Kf), applied to the setpoint
    pub kf: f64,
}

impl Gains {
    /// Create a tuning profile
    pub const fn new(kp: f64, ki: f64, kd: f64, kf: f64) -> Self {
        Self { kp, ki, kd, kf }
    }

    /// Check if any coefficient is non-zero
    pub fn is_configured(&self) -> bool {
        self.kp != 0.0 || self.ki != 0.0 || self.kd != 0.0 || self.kf != 0.0
    }

    /// Check that every coefficient is a finite number
    pub fn is_finite(&self) -> bool {
        self.kp.is_finite() && self.ki.is_finite() && self.kd.is_finite() && self.kf.is_finite()
    }
}

/// Dual-zone PID controller configuration
///
/// Set once at construction, immutable thereafter. There is no runtime
/// re-tuning surface; reconstructing the controller is the way to change
/// any of these.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PidConfig {
    /// Tuning used while far from the target
    pub coarse: Gains,
    /// Tuning used once the error magnitude drops below `refined_range`
    pub refined: Gains,
    /// Error magnitude below which `refined` gains apply
    pub refined_range: f64,
    /// Error magnitude below which the integral accumulates
    ///
    /// Outside this band the accumulated integral is frozen, not decayed.
    pub integral_threshold: f64,
    /// Symmetric clamp bound on the accumulated integral
    pub max_integral: f64,
    /// Maximum allowed output change per cycle
    ///
    /// Bounds mechanical jerk. `f64::INFINITY` disables slew limiting.
    pub slew_limit: f64,
    /// Error magnitude below which output is forced to zero
    ///
    /// Inside the deadband the controller also resets its error/integral
    /// history, to avoid dithering around the target.
    pub deadband: f64,
    /// Fixed control-cycle period in seconds
    ///
    /// All integral/derivative math assumes calls arrive exactly this far
    /// apart; the controller never measures wall-clock time itself.
    pub period_s: f64,
}

impl Default for PidConfig {
    fn default() -> Self {
        Self {
            coarse: Gains::new(0.5, 0.0, 0.02, 0.0),
            refined: Gains::new(0.3, 0.05, 0.02, 0.0),
            refined_range: 15.0,      // switch to refined gains within 15 units
            integral_threshold: 30.0, // accumulate only within 30 units
            max_integral: 50.0,
            slew_limit: 6.0, // max output step per cycle
            deadband: 0.5,
            period_s: 0.005, // 200 Hz control loop
        }
    }
}

impl PidConfig {
    /// Validate the configuration
    ///
    /// Rejects non-finite gains, negative (or NaN) bounds, and a
    /// non-positive cycle period. Positive-infinite bounds are accepted:
    /// an infinite `slew_limit` or `integral_threshold` simply disables
    /// that clamp.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.coarse.is_finite() || !self.refined.is_finite() {
            return Err(ConfigError::NonFiniteGain);
        }
        // NaN fails the >= comparison and lands here as well
        let bounds = [
            self.refined_range,
            self.integral_threshold,
            self.max_integral,
            self.slew_limit,
            self.deadband,
        ];
        if !bounds.iter().all(|b| *b >= 0.0) {
            return Err(ConfigError::NegativeBound);
        }
        if !(self.period_s.is_finite() && self.period_s > 0.0) {
            return Err(ConfigError::InvalidPeriod);
        }
        Ok(())
    }
}
