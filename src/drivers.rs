//! Peripheral Drivers
//!
//! High-level drivers for external ICs.
//! These provide domain-specific abstractions over the HAL layer.

pub mod qn800x;
