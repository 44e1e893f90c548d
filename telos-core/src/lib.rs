//! Board-agnostic core types for the Telos motion-control library
//!
//! This crate contains everything the control laws depend on that is not a
//! control law itself:
//!
//! - Tuning and controller configuration types, validated at construction
//! - The actuation trait that separates control math from hardware

#![no_std]
#![deny(unsafe_code)]

#[cfg(test)]
extern crate std;

pub mod config;
pub mod traits;
