//! Actuation trait
//!
//! A control law produces a number; something else owns the hardware. This
//! trait is the whole seam between the two: an external loop reads a sensor,
//! runs the controller, and forwards the bounded command through here.

/// Errors that can occur when applying a command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ActuatorError {
    /// Actuator is disabled
    Disabled,
    /// Command magnitude exceeds what the actuator accepts
    CommandOutOfRange,
}

/// Trait for anything that accepts a bounded, signed actuation command
///
/// Implementations wrap a motor group, a simulation, or a log sink. The
/// command is in the actuator's native output units (volts, millivolts,
/// PWM counts); sign is direction.
pub trait Actuator {
    /// Apply a signed command
    ///
    /// Callers are expected to keep `|command|` within [`max_command`];
    /// implementations may reject anything outside it.
    ///
    /// [`max_command`]: Actuator::max_command
    fn set_command(&mut self, command: f64) -> Result<(), ActuatorError>;

    /// Largest command magnitude this actuator accepts
    fn max_command(&self) -> f64;

    /// Bring the mechanism to rest
    ///
    /// The default sends a zero command and ignores a disabled actuator,
    /// which is already stopped.
    fn stop(&mut self) {
        let _ = self.set_command(0.0);
    }
}
