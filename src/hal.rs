//! Hardware Abstraction Layer
//!
//! Register access on top of `embedded-hal` traits. The driver never names a
//! concrete MCU peripheral, so the same code runs against embassy on target
//! and against mocks on the host.

pub mod i2c;
