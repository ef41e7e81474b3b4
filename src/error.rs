//! Driver errors
//!
//! Bus failures are propagated as-is: retrying inside the driver would shift
//! the RDS pacing the chip relies on. Everything else is an argument the
//! register map cannot represent.

use core::fmt;

/// Which argument was rejected
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Argument {
    /// Frequency outside 76.0 - 108.0 MHz (tenths of MHz)
    Frequency(u16),
    /// Output power above 15
    Power(u8),
    /// RDS deviation above 127
    RdsDeviation(u8),
    /// Pilot deviation other than 7, 8, 9 or 10 percent
    PilotDeviation(u8),
    /// Sample rate other than 32, 40, 44 (44.1) or 48 kHz
    SampleRate(u8),
    /// Crystal trim above 61
    CrystalTrim(u8),
    /// Crystal selection code 7 or above 15
    CrystalCode(u8),
    /// RDS pacing shorter than one group transmission
    Pacing(u32),
}

impl fmt::Display for Argument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Frequency(v) => write!(f, "frequency {v} (x0.1 MHz) out of range"),
            Self::Power(v) => write!(f, "power level {v} out of range"),
            Self::RdsDeviation(v) => write!(f, "RDS deviation {v} out of range"),
            Self::PilotDeviation(v) => write!(f, "pilot deviation {v}% not supported"),
            Self::SampleRate(v) => write!(f, "sample rate {v} kHz not supported"),
            Self::CrystalTrim(v) => write!(f, "crystal trim {v} out of range"),
            Self::CrystalCode(v) => write!(f, "crystal code {v} not supported"),
            Self::Pacing(v) => write!(f, "RDS pacing {v} ms too short"),
        }
    }
}

#[cfg(feature = "embedded")]
impl defmt::Format for Argument {
    fn format(&self, f: defmt::Formatter) {
        match self {
            Self::Frequency(v) => defmt::write!(f, "Frequency({})", v),
            Self::Power(v) => defmt::write!(f, "Power({})", v),
            Self::RdsDeviation(v) => defmt::write!(f, "RdsDeviation({})", v),
            Self::PilotDeviation(v) => defmt::write!(f, "PilotDeviation({})", v),
            Self::SampleRate(v) => defmt::write!(f, "SampleRate({})", v),
            Self::CrystalTrim(v) => defmt::write!(f, "CrystalTrim({})", v),
            Self::CrystalCode(v) => defmt::write!(f, "CrystalCode({})", v),
            Self::Pacing(v) => defmt::write!(f, "Pacing({}ms)", v),
        }
    }
}

/// Driver error, generic over the bus error type
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Error<E> {
    /// The I2C transaction failed
    Bus(E),
    /// An argument has no register encoding
    InvalidArgument(Argument),
}

impl<E> Error<E> {
    /// Get the rejected argument, if this is an argument error
    #[must_use]
    pub const fn argument(&self) -> Option<Argument> {
        match self {
            Self::InvalidArgument(arg) => Some(*arg),
            Self::Bus(_) => None,
        }
    }

    /// Check if this is a bus failure
    #[must_use]
    pub const fn is_bus(&self) -> bool {
        matches!(self, Self::Bus(_))
    }
}

impl<E> From<Argument> for Error<E> {
    fn from(arg: Argument) -> Self {
        Self::InvalidArgument(arg)
    }
}

impl<E: fmt::Debug> fmt::Display for Error<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bus(e) => write!(f, "I2C bus error: {e:?}"),
            Self::InvalidArgument(arg) => write!(f, "invalid argument: {arg}"),
        }
    }
}

#[cfg(feature = "embedded")]
impl<E> defmt::Format for Error<E> {
    fn format(&self, f: defmt::Formatter) {
        match self {
            Self::Bus(_) => defmt::write!(f, "Bus"),
            Self::InvalidArgument(arg) => defmt::write!(f, "InvalidArgument({})", arg),
        }
    }
}

/// Driver result
pub type DriverResult<T, E> = Result<T, Error<E>>;
