//! Radio Control Logic
//!
//! Policy that sits above the driver: deciding what to transmit next.

pub mod schedule;
