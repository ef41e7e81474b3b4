//! Shared types used across the driver
//!
//! Register values are wrapped in types that can only hold encodable values.
//! Constructors from raw numbers return `None` for anything the chip's
//! register map cannot represent.

use core::fmt;

/// Transmit frequency in tenths of a MHz
///
/// 1078 is 107.8 MHz. The chip tunes 76.0 - 108.0 MHz in 50 kHz channels;
/// this type works on the 100 kHz grid used by broadcast FM.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Frequency(u16);

impl Frequency {
    /// Minimum supported frequency (76.0 MHz)
    pub const MIN_TENTHS_MHZ: u16 = 760;

    /// Maximum supported frequency (108.0 MHz)
    pub const MAX_TENTHS_MHZ: u16 = 1080;

    /// Create a new Frequency from tenths of a MHz, returns None if out of range
    #[must_use]
    pub const fn from_tenths_mhz(tenths: u16) -> Option<Self> {
        if tenths >= Self::MIN_TENTHS_MHZ && tenths <= Self::MAX_TENTHS_MHZ {
            Some(Self(tenths))
        } else {
            None
        }
    }

    /// Create a new Frequency from kHz (truncated to the 100 kHz grid)
    #[must_use]
    pub const fn from_khz(khz: u32) -> Option<Self> {
        let tenths = khz / 100;
        if tenths > u16::MAX as u32 {
            return None;
        }
        Self::from_tenths_mhz(tenths as u16)
    }

    /// Get the frequency in tenths of a MHz
    #[must_use]
    pub const fn as_tenths_mhz(self) -> u16 {
        self.0
    }

    /// Get the frequency in kHz
    #[must_use]
    pub const fn as_khz(self) -> u32 {
        self.0 as u32 * 100
    }

    /// Channel index for the CH / `CH_STEP` registers
    ///
    /// Frequency = 76 MHz + CH * 50 kHz, so CH = (f*10 - 7600) / 5.
    #[must_use]
    pub const fn channel(self) -> Channel {
        Channel((self.0 * 10 - 7600) / 5)
    }

    /// RDS alternate frequency code (1 = 87.6 MHz ... 204 = 107.9 MHz)
    #[must_use]
    pub const fn af_code(self) -> Option<u8> {
        if self.0 >= 876 && self.0 <= 1079 {
            Some((self.0 - 875) as u8)
        } else {
            None
        }
    }
}

impl fmt::Debug for Frequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Frequency({}.{} MHz)", self.0 / 10, self.0 % 10)
    }
}

#[cfg(feature = "embedded")]
impl defmt::Format for Frequency {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(f, "{}.{} MHz", self.0 / 10, self.0 % 10);
    }
}

/// 10-bit channel index split across CH (low 8 bits) and `CH_STEP` (high 2 bits)
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Channel(u16);

impl Channel {
    /// Raw channel index
    #[must_use]
    pub const fn index(self) -> u16 {
        self.0
    }

    /// Low 8 bits for the CH register
    #[must_use]
    pub const fn low(self) -> u8 {
        (self.0 & 0xFF) as u8
    }

    /// High 2 bits for the `CH_STEP` register
    #[must_use]
    pub const fn high(self) -> u8 {
        ((self.0 >> 8) & 0x03) as u8
    }

    /// Rebuild a channel from the two register bytes
    #[must_use]
    pub const fn from_registers(high: u8, low: u8) -> Self {
        Self((((high & 0x03) as u16) << 8) | low as u16)
    }
}

/// RF output power code (0-15), spanning roughly 101.5 to 124 dBuV
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct PowerLevel(u8);

impl PowerLevel {
    /// Lowest code
    pub const MIN: Self = Self(0);

    /// Highest code
    pub const MAX: Self = Self(15);

    /// Create a power level, returns None above 15
    #[must_use]
    pub const fn new(level: u8) -> Option<Self> {
        if level <= Self::MAX.0 {
            Some(Self(level))
        } else {
            None
        }
    }

    /// Get the power code
    #[must_use]
    pub const fn level(self) -> u8 {
        self.0
    }
}

#[cfg(feature = "embedded")]
impl defmt::Format for PowerLevel {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(f, "PA{}", self.0);
    }
}

/// RDS subcarrier deviation (7-bit register field)
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RdsDeviation(u8);

impl RdsDeviation {
    /// Largest encodable deviation
    pub const MAX: u8 = 127;

    /// Create an RDS deviation, returns None above 127
    #[must_use]
    pub const fn new(value: u8) -> Option<Self> {
        if value <= Self::MAX {
            Some(Self(value))
        } else {
            None
        }
    }

    /// Get the raw deviation value
    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }
}

/// Stereo pilot deviation as a percentage of 75 kHz
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum PilotDeviation {
    /// 7%
    Percent7,
    /// 8%
    Percent8,
    /// 9%
    #[default]
    Percent9,
    /// 10%
    Percent10,
}

impl PilotDeviation {
    /// Look up a percentage, returns None for anything but 7-10
    #[must_use]
    pub const fn from_percent(percent: u8) -> Option<Self> {
        match percent {
            7 => Some(Self::Percent7),
            8 => Some(Self::Percent8),
            9 => Some(Self::Percent9),
            10 => Some(Self::Percent10),
            _ => None,
        }
    }

    /// Get the percentage
    #[must_use]
    pub const fn percent(self) -> u8 {
        match self {
            Self::Percent7 => 7,
            Self::Percent8 => 8,
            Self::Percent9 => 9,
            Self::Percent10 => 10,
        }
    }

    /// `GAIN_TXPLT` register value
    #[must_use]
    pub const fn as_reg(self) -> u8 {
        match self {
            Self::Percent7 => 0b0001_1100,
            Self::Percent8 => 0b0010_0000,
            Self::Percent9 => 0b0010_0100,
            Self::Percent10 => 0b0010_1000,
        }
    }
}

/// I2S sample rate in master mode (16-bit frames)
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum SampleRate {
    /// 32 kHz
    Khz32,
    /// 40 kHz
    Khz40,
    /// 44.1 kHz
    Khz44_1,
    /// 48 kHz
    #[default]
    Khz48,
}

impl SampleRate {
    /// Look up a rate in kHz (44 selects 44.1 kHz)
    #[must_use]
    pub const fn from_khz(khz: u8) -> Option<Self> {
        match khz {
            32 => Some(Self::Khz32),
            40 => Some(Self::Khz40),
            44 => Some(Self::Khz44_1),
            48 => Some(Self::Khz48),
            _ => None,
        }
    }

    /// Rate in Hz
    #[must_use]
    pub const fn as_hz(self) -> u32 {
        match self {
            Self::Khz32 => 32_000,
            Self::Khz40 => 40_000,
            Self::Khz44_1 => 44_100,
            Self::Khz48 => 48_000,
        }
    }

    /// IIS register value (master mode, 16-bit I2S)
    #[must_use]
    pub const fn as_reg(self) -> u8 {
        match self {
            Self::Khz32 => 0b0100_1001,
            Self::Khz40 => 0b0101_1001,
            Self::Khz44_1 => 0b0110_1001,
            Self::Khz48 => 0b0111_1001,
        }
    }
}

/// Reference crystal frequency selection
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum CrystalFrequency {
    /// 11.289 MHz
    Mhz11_289,
    /// 12.000 MHz
    Mhz12,
    /// 12.288 MHz
    Mhz12_288,
    /// 13.000 MHz
    Mhz13,
    /// 16.367 MHz
    Mhz16_367,
    /// 18.414 MHz
    Mhz18_414,
    /// 19.200 MHz
    Mhz19_2,
    /// 22.579 MHz
    Mhz22_579,
    /// 24.000 MHz
    Mhz24,
    /// 24.576 MHz
    Mhz24_576,
    /// 26.000 MHz
    #[default]
    Mhz26,
    /// 32.734 MHz
    Mhz32_734,
    /// 36.828 MHz
    Mhz36_828,
    /// 38.400 MHz
    Mhz38_4,
    /// 7.600 MHz
    Mhz7_6,
}

impl CrystalFrequency {
    /// Look up a selection code; 7 is reserved
    #[must_use]
    pub const fn from_code(code: u8) -> Option<Self> {
        match code {
            0 => Some(Self::Mhz11_289),
            1 => Some(Self::Mhz12),
            2 => Some(Self::Mhz12_288),
            3 => Some(Self::Mhz13),
            4 => Some(Self::Mhz16_367),
            5 => Some(Self::Mhz18_414),
            6 => Some(Self::Mhz19_2),
            8 => Some(Self::Mhz22_579),
            9 => Some(Self::Mhz24),
            10 => Some(Self::Mhz24_576),
            11 => Some(Self::Mhz26),
            12 => Some(Self::Mhz32_734),
            13 => Some(Self::Mhz36_828),
            14 => Some(Self::Mhz38_4),
            15 => Some(Self::Mhz7_6),
            _ => None,
        }
    }

    /// Selection code for ANACTL1
    #[must_use]
    pub const fn code(self) -> u8 {
        match self {
            Self::Mhz11_289 => 0,
            Self::Mhz12 => 1,
            Self::Mhz12_288 => 2,
            Self::Mhz13 => 3,
            Self::Mhz16_367 => 4,
            Self::Mhz18_414 => 5,
            Self::Mhz19_2 => 6,
            Self::Mhz22_579 => 8,
            Self::Mhz24 => 9,
            Self::Mhz24_576 => 10,
            Self::Mhz26 => 11,
            Self::Mhz32_734 => 12,
            Self::Mhz36_828 => 13,
            Self::Mhz38_4 => 14,
            Self::Mhz7_6 => 15,
        }
    }
}

/// Crystal load capacitance trim (0 = 10 pF ... 61 = 30 pF)
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CrystalTrim(u8);

impl CrystalTrim {
    /// Largest trim step
    pub const MAX: u8 = 61;

    /// Create a trim value, returns None above 61
    #[must_use]
    pub const fn new(trim: u8) -> Option<Self> {
        if trim <= Self::MAX {
            Some(Self(trim))
        } else {
            None
        }
    }

    /// Get the trim step
    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }
}

impl Default for CrystalTrim {
    fn default() -> Self {
        Self(16)
    }
}

/// Analog audio input impedance
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum InputImpedance {
    /// 10 kOhm
    K10,
    /// 20 kOhm
    #[default]
    K20,
    /// 40 kOhm
    K40,
    /// 80 kOhm
    K80,
}

impl InputImpedance {
    /// Two-bit field value
    #[must_use]
    pub const fn bits(self) -> u8 {
        match self {
            Self::K10 => 0,
            Self::K20 => 1,
            Self::K40 => 2,
            Self::K80 => 3,
        }
    }
}

/// Reference clock source
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ClockSource {
    /// On-chip oscillator with an external crystal
    #[default]
    Crystal,
    /// External clock fed into XCLK
    External,
}

/// Transmit mode flags written with SYSTEM0/SYSTEM1
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TransmitMode {
    /// Stereo multiplex (false = mono)
    pub stereo: bool,
    /// Digital I2S audio input (false = analog)
    pub digital_input: bool,
    /// RDS subcarrier enabled
    pub rds: bool,
}

impl Default for TransmitMode {
    fn default() -> Self {
        Self {
            stereo: true,
            digital_input: false,
            rds: true,
        }
    }
}

/// Programme Type code (5 bits)
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct ProgrammeType(u8);

impl ProgrammeType {
    /// No programme type
    pub const NONE: Self = Self(0);

    /// News
    pub const NEWS: Self = Self(1);

    /// Current affairs
    pub const CURRENT_AFFAIRS: Self = Self(2);

    /// Information
    pub const INFORMATION: Self = Self(3);

    /// Pop music
    pub const POP_MUSIC: Self = Self(10);

    /// Build a PTY, keeping only the low 5 bits
    #[must_use]
    pub const fn new(raw: u16) -> Self {
        Self((raw & 0x1F) as u8)
    }

    /// Get the 5-bit code
    #[must_use]
    pub const fn code(self) -> u8 {
        self.0
    }
}

#[cfg(feature = "embedded")]
impl defmt::Format for ProgrammeType {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(f, "PTY{}", self.0);
    }
}

/// Programme Identification code
///
/// High byte: country nibble and coverage-area nibble. Low byte: programme
/// reference number.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct ProgrammeIdentification(u16);

impl ProgrammeIdentification {
    /// Create from the 16-bit code
    #[must_use]
    pub const fn new(code: u16) -> Self {
        Self(code)
    }

    /// Create from the two register bytes
    #[must_use]
    pub const fn from_bytes(high: u8, low: u8) -> Self {
        Self(((high as u16) << 8) | low as u16)
    }

    /// Get the 16-bit code
    #[must_use]
    pub const fn code(self) -> u16 {
        self.0
    }

    /// High byte
    #[must_use]
    pub const fn high(self) -> u8 {
        (self.0 >> 8) as u8
    }

    /// Low byte
    #[must_use]
    pub const fn low(self) -> u8 {
        (self.0 & 0xFF) as u8
    }

    /// Country nibble
    #[must_use]
    pub const fn country(self) -> u8 {
        (self.0 >> 12) as u8
    }

    /// Coverage-area nibble
    #[must_use]
    pub const fn coverage(self) -> u8 {
        ((self.0 >> 8) & 0x0F) as u8
    }

    /// Programme reference number
    #[must_use]
    pub const fn reference(self) -> u8 {
        self.low()
    }
}

impl fmt::Debug for ProgrammeIdentification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PI({:04X})", self.0)
    }
}

#[cfg(feature = "embedded")]
impl defmt::Format for ProgrammeIdentification {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(f, "PI({=u16:04X})", self.0);
    }
}
