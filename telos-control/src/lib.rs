//! Control-law implementations
//!
//! This crate provides the closed-loop controllers that turn a setpoint and
//! a measured process value into a bounded actuation command:
//!
//! - Dual-zone PID with integral threshold gating, back-calculation
//!   anti-windup, derivative on measurement, and slew-rate limiting
//!
//! Controllers hold no hardware. Wiring their output to a mechanism goes
//! through [`telos_core::traits::Actuator`].

#![no_std]
#![deny(unsafe_code)]

#[cfg(test)]
extern crate std;

pub mod pid;

pub use pid::DualZonePid;
