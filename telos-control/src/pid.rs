//! Dual-zone PID controller
//!
//! Closed-loop control law for one axis of a motorized mechanism. Each
//! control cycle it turns a setpoint and a measured process value into a
//! signed, bounded, slew-limited speed command.
//!
//! Two tuning profiles are held at once: `coarse` gains apply while the
//! error is large, `refined` gains take over once the error magnitude drops
//! below the configured range. This allows aggressive correction far from
//! the target and gentler correction near it.
//!
//! The controller assumes a fixed call cadence of `period_s` seconds and is
//! meant to be owned by exactly one control loop; it performs no I/O and
//! never blocks.

use libm::fabs;
use telos_core::config::{ConfigError, PidConfig};

/// Dual-zone PID controller for one axis of control
///
/// One instance is constructed per physical axis (left drivetrain side,
/// heading, lift, ...) and lives as long as its control loop. State is
/// mutated on every [`calculate`] call; configuration is immutable after
/// construction.
///
/// [`calculate`]: DualZonePid::calculate
#[derive(Debug, Clone)]
pub struct DualZonePid {
    config: PidConfig,
    /// Setpoint from the most recent cycle
    target: f64,
    /// Process value from the most recent cycle
    current: f64,
    /// Process value from the previous cycle, for derivative on measurement
    ///
    /// `None` until the first cycle (or after a reset), which defines the
    /// first-cycle derivative as zero instead of an unbounded spike.
    prev_value: Option<f64>,
    error: f64,
    prev_error: f64,
    /// Accumulated integral of the error
    total_error: f64,
    derivative: f64,
    prev_speed: f64,
    speed: f64,
}

impl DualZonePid {
    /// Create a controller from a validated configuration
    pub fn new(config: PidConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            config,
            target: 0.0,
            current: 0.0,
            prev_value: None,
            error: 0.0,
            prev_error: 0.0,
            total_error: 0.0,
            derivative: 0.0,
            prev_speed: 0.0,
            speed: 0.0,
        })
    }

    /// Run one control cycle
    ///
    /// `target` and `current` are in the controller's process units and must
    /// be finite; non-finite values propagate through the math and are the
    /// caller's responsibility to prevent. `speed_limit` bounds the output
    /// magnitude and must be non-negative (a negative limit saturates to
    /// zero in release builds, so the clamp can never invert).
    ///
    /// Returns a signed speed with `|speed| <= speed_limit`.
    pub fn calculate(&mut self, target: f64, current: f64, speed_limit: f64) -> f64 {
        debug_assert!(speed_limit >= 0.0, "speed_limit must be non-negative");
        let speed_limit = if speed_limit >= 0.0 { speed_limit } else { 0.0 };
        let dt = self.config.period_s;

        self.target = target;
        self.current = current;
        self.error = target - current;

        // Deadband: inside it the axis is considered settled. Output and
        // error/integral history are dropped so the controller cannot
        // dither around the target; slew continuity is intentionally not
        // preserved across this branch.
        if fabs(self.error) < self.config.deadband {
            self.error = 0.0;
            self.total_error = 0.0;
            self.speed = 0.0;
            self.prev_error = 0.0;
            self.prev_speed = 0.0;
            self.prev_value = Some(current);
            return 0.0;
        }

        // Integral term: trapezoidal accumulation, gated so that only
        // near-target error integrates. A large error freezes the
        // accumulator rather than decaying it.
        if fabs(self.error) < self.config.integral_threshold {
            self.total_error += (self.error + self.prev_error) / 2.0 * dt;
        }

        // Clamp unconditionally; prior cycles may have left the
        // accumulator outside the bound.
        self.total_error = self
            .total_error
            .clamp(-self.config.max_integral, self.config.max_integral);

        // Derivative on measurement, not on error, so a setpoint step does
        // not spike the output. No history yet means zero rate.
        self.derivative = match self.prev_value {
            Some(prev) => -(current - prev) / dt,
            None => 0.0,
        };

        // Zone selection: refined gains near the target, coarse otherwise.
        let gains = if fabs(self.error) < self.config.refined_range {
            &self.config.refined
        } else {
            &self.config.coarse
        };

        let mut raw_speed =
            gains.kp * self.error + gains.ki * self.total_error + gains.kd * self.derivative;

        // Feedforward scales the setpoint, not the error.
        raw_speed += gains.kf * target;

        let clamped_speed = raw_speed.clamp(-speed_limit, speed_limit);

        // Back-calculation anti-windup: feed the clipped-off amount back
        // into the accumulator so the integral cannot wind up while the
        // output is saturated. Uses the same zone's Ki.
        self.total_error += (clamped_speed - raw_speed) * gains.ki * dt;

        // Slew-rate limit relative to the previous cycle's output.
        self.speed = clamped_speed;
        let delta_speed = clamped_speed - self.prev_speed;
        if delta_speed > self.config.slew_limit {
            self.speed = self.prev_speed + self.config.slew_limit;
        } else if delta_speed < -self.config.slew_limit {
            self.speed = self.prev_speed - self.config.slew_limit;
        }

        self.speed = self.speed.clamp(-speed_limit, speed_limit);

        self.prev_error = self.error;
        self.prev_speed = self.speed;
        self.prev_value = Some(current);

        self.speed
    }

    /// Reset all controller state
    ///
    /// Configuration is untouched. Derivative history is cleared, so the
    /// next cycle's derivative term is zero.
    pub fn reset(&mut self) {
        self.target = 0.0;
        self.current = 0.0;
        self.prev_value = None;
        self.error = 0.0;
        self.prev_error = 0.0;
        self.total_error = 0.0;
        self.derivative = 0.0;
        self.prev_speed = 0.0;
        self.speed = 0.0;
    }

    /// Reset and seed the derivative history with a known process value
    ///
    /// Use this right before re-entering a control loop so the first cycle
    /// already has a meaningful rate instead of zero.
    pub fn reset_to(&mut self, current: f64) {
        self.reset();
        self.current = current;
        self.prev_value = Some(current);
    }

    /// Get the configuration
    pub fn config(&self) -> &PidConfig {
        &self.config
    }

    /// Setpoint from the most recent cycle
    pub fn target(&self) -> f64 {
        self.target
    }

    /// Process value from the most recent cycle
    pub fn current(&self) -> f64 {
        self.current
    }

    /// Error from the most recent cycle
    pub fn error(&self) -> f64 {
        self.error
    }

    /// Accumulated integral term
    ///
    /// Useful for telemetry and tuning.
    pub fn total_error(&self) -> f64 {
        self.total_error
    }

    /// Derivative term from the most recent cycle
    pub fn derivative(&self) -> f64 {
        self.derivative
    }

    /// Output from the most recent cycle
    pub fn output(&self) -> f64 {
        self.speed
    }
}
