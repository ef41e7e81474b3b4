//! RDS (IEC 62106) Encoding
//!
//! Pure construction of the groups the QN800x transmits: group words for
//! 0A/0B (Programme Service) and 2A (Radio Text), the text buffers they are
//! cut from, and the alternate frequency list. Sequencing the groups onto
//! the chip lives in the driver.

pub mod af;
pub mod encoder;
pub mod group;
pub mod text;

pub use af::AfList;
pub use encoder::{RdsBurst, RdsEncoder};
pub use group::{GroupVersion, GroupWord};
pub use text::{PsName, RadioText, TextError};

/// RDS subcarrier bit rate in milli-bits per second (1187.5 bit/s)
pub const BIT_RATE_MILLI_BPS: u32 = 1_187_500;

/// Bits in one group: four blocks of 16 data + 10 check bits
pub const BITS_PER_GROUP: u32 = 4 * 26;

/// Time on air for one group in microseconds (about 87.6 ms)
#[must_use]
pub const fn group_duration_us() -> u32 {
    // bits / (bit/s) in us, bit rate scaled by 1000
    (BITS_PER_GROUP as u64 * 1_000_000_000 / BIT_RATE_MILLI_BPS as u64) as u32
}
