//! QN8006/QN8007 FM Transmitter Driver
//!
//! This library drives the QN800x family of single-chip FM transmitters over
//! I2C and encodes the RDS (Radio Data System) subcarrier protocol defined by
//! IEC 62106. Broadcast parameters such as frequency, output power, audio
//! routing and station text are turned into the exact register writes the
//! chip expects.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                    APPLICATION LAYER                         │
//! │  fm-beacon binary  │  PS:RT scheduler                        │
//! ├─────────────────────────────────────────────────────────────┤
//! │                      DRIVER LAYER                            │
//! │  Qn800x device handle: RDS sequencing, scalar setters        │
//! ├─────────────────────────────────────────────────────────────┤
//! │                    RDS ENCODER (pure)                        │
//! │  Group words  │  PS / RT buffers  │  AF list  │  Bursts      │
//! ├─────────────────────────────────────────────────────────────┤
//! │                  REGISTER ACCESS LAYER                       │
//! │        embedded-hal I2C  │  embedded-hal DelayNs             │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Design Principles
//!
//! - **Type-driven design**: register values are newtypes and enums that
//!   cannot hold out-of-range values
//! - **Functional core, imperative shell**: RDS bursts are built by pure
//!   functions; only the device handle touches the bus
//! - **Explicit error handling**: bus failures and invalid arguments are
//!   returned as [`error::Error`], never swallowed
//! - **Injected time**: pacing goes through `DelayNs` so host tests run on a
//!   virtual clock

#![cfg_attr(feature = "embedded", no_std)]
#![deny(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

// Re-export dependencies needed by applications (only in embedded mode)
#[cfg(feature = "embedded")]
pub use embassy_stm32;
#[cfg(feature = "embedded")]
pub use embassy_time;

#[macro_use]
mod fmt;

/// Hardware Abstraction Layer
///
/// Register access over a generic embedded-hal I2C bus.
pub mod hal;

/// Peripheral Drivers
///
/// The QN800x device handle.
pub mod drivers;

/// RDS Encoding
///
/// Group words, text buffers, alternate frequencies and register bursts.
pub mod rds;

/// Radio Control Logic
///
/// Transmission scheduling on top of the driver.
pub mod radio;

/// Driver error types
pub mod error;

/// Shared types used across modules
pub mod types;

/// System configuration and constants
pub mod config;

/// Prelude module for common imports
pub mod prelude {
    //! Convenient re-exports for common types and traits.

    pub use crate::config::TransmitterConfig;
    pub use crate::drivers::qn800x::Qn800x;
    pub use crate::error::{Argument, Error};
    pub use crate::radio::schedule::{RdsScheduler, RdsSlot};
    pub use crate::rds::{AfList, GroupVersion, GroupWord, PsName, RadioText};
    pub use crate::types::*;

    // Common traits
    pub use embedded_hal::delay::DelayNs;
    pub use embedded_hal::i2c::I2c;
}
