//! Hardware abstraction traits
//!
//! These traits define the interface between the control laws and
//! hardware-specific implementations.

pub mod actuator;

pub use actuator::{Actuator, ActuatorError};
