//! System configuration and hardware constants
//!
//! Register addresses, timing constants and the default transmitter setup.
//! All chip-specific numbers are centralized here.

use crate::hal::i2c::I2cAddress;
use crate::rds::{AfList, GroupVersion};
use crate::types::{
    ClockSource, CrystalFrequency, CrystalTrim, Frequency, InputImpedance, PilotDeviation,
    PowerLevel, ProgrammeIdentification, ProgrammeType, RdsDeviation, TransmitMode,
};

/// QN8006 / QN8007 I2C address
pub const QN800X_I2C_ADDR: u8 = I2cAddress::QN800X.addr();

/// I2C bus frequency used by the beacon binary
pub const I2C_FREQUENCY_HZ: u32 = 400_000;

/// Default RDS pacing per group in milliseconds
pub const RDS_GROUP_PACING_MS: u32 = 100;

/// Shortest accepted pacing: one group on air (~87.6 ms) plus margin
pub const RDS_MIN_PACING_MS: u32 = 90;

/// Status bytes read before each RDS group
pub const RDS_STATUS_LEN: usize = 7;

/// Index of the SYSTEM1 copy (toggle bit carrier) in the RDS status read
pub const RDS_STATUS_SYSTEM1: usize = 3;

/// Status bytes read for analog read-modify-write operations
pub const ANALOG_STATUS_LEN: usize = 8;

/// Index of the ANACTL1 copy in the analog status read
pub const ANALOG_STATUS_ANACTL1: usize = 5;

/// Default gap between baseband reset assert and release
pub const BASEBAND_RESET_GAP_MS: u32 = 20;

/// Default programme identification: country code D, local coverage, ref 34
pub const DEFAULT_PI: ProgrammeIdentification = ProgrammeIdentification::new(0xD022);

/// Default number of PS cycles per scheduling round
pub const DEFAULT_PS_PER_ROUND: u32 = 6;

/// Default number of RT cycles per scheduling round
pub const DEFAULT_RT_PER_ROUND: u32 = 2;

/// QN800x register map
pub mod reg {
    //! Register sub-addresses

    /// Device modes
    pub const SYSTEM0: u8 = 0x00;
    /// Device modes, resets, RDS ready toggle
    pub const SYSTEM1: u8 = 0x01;
    /// Analog control: crystal select, mute, baseband reset
    pub const ANACTL1: u8 = 0x03;
    /// TX input impedance, crystal cap load
    pub const REG_VGA: u8 = 0x04;
    /// I2S parameters
    pub const IIS: u8 = 0x07;
    /// Lower 8 bits of the channel index
    pub const CH: u8 = 0x08;
    /// Channel step, upper 2 bits of the channel index
    pub const CH_STEP: u8 = 0x0B;
    /// Total TX frequency deviation
    pub const TX_FDEV: u8 = 0x0E;
    /// Pilot deviation gain, I2S buffer clear
    pub const GAIN_TXPLT: u8 = 0x0F;
    /// First of eight RDS data registers (RDS0..RDS7 = 0x10..0x17)
    pub const RDS0: u8 = 0x10;
    /// RDS deviation and mode
    pub const RDSFDEV: u8 = 0x18;
    /// XCLK pin control
    pub const REG_XLT3: u8 = 0x49;
    /// PA gain calibration / output power
    pub const PAG_CAL: u8 = 0x5A;
}

/// Register bit fields
pub mod bits {
    //! Bit masks within registers

    /// SYSTEM1: software reset
    pub const SYSTEM1_SWRST: u8 = 1 << 7;
    /// SYSTEM1: RDS ready toggle
    pub const SYSTEM1_RDSRDY: u8 = 1 << 2;
    /// SYSTEM0 base value: transmit, channel from CH[9:0]
    pub const SYSTEM0_TX: u8 = 0b0100_0001;
    /// SYSTEM0: digital I2S input
    pub const SYSTEM0_I2S: u8 = 1 << 2;
    /// SYSTEM0: RDS enable
    pub const SYSTEM0_RDS: u8 = 1 << 1;
    /// SYSTEM1 base value after init: 50 us pre-emphasis, no idle timeout
    pub const SYSTEM1_TX: u8 = 0b0000_0011;
    /// SYSTEM1: mono
    pub const SYSTEM1_MONO: u8 = 1 << 4;
    /// ANACTL1: mute
    pub const ANACTL1_MUTE: u8 = 1 << 7;
    /// ANACTL1: baseband reset (active low)
    pub const ANACTL1_BB_RESET: u8 = 1 << 5;
    /// ANACTL1 base value when selecting the crystal
    pub const ANACTL1_XSEL_BASE: u8 = 0b0010_0000;
    /// REG_XLT3 value for the internal crystal oscillator
    pub const XLT3_CRYSTAL: u8 = 0b0000_0100;
    /// REG_XLT3 value for an external clock on XCLK
    pub const XLT3_EXTERNAL: u8 = 0b0001_0100;
    /// PAG_CAL: gain calibration disabled
    pub const PAG_CAL_DISABLE: u8 = 0b0100_0000;
    /// PAG_CAL: output power field
    pub const PAG_CAL_POWER: u8 = 0b0000_1111;
    /// RDSFDEV: RDS mode bit kept at its reset value
    pub const RDSFDEV_MODE: u8 = 1 << 7;
}

/// Complete transmitter setup applied by `Qn800x::configure`
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TransmitterConfig {
    /// Reference clock
    pub clock: ClockSource,
    /// Crystal frequency selection
    pub crystal: CrystalFrequency,
    /// Crystal load trim
    pub crystal_trim: CrystalTrim,
    /// Audio input impedance
    pub input_impedance: InputImpedance,
    /// Stereo / digital input / RDS flags
    pub mode: TransmitMode,
    /// Carrier frequency
    pub frequency: Frequency,
    /// RF output power
    pub power: PowerLevel,
    /// Total frequency deviation register value
    pub total_deviation: u8,
    /// RDS subcarrier deviation
    pub rds_deviation: RdsDeviation,
    /// Stereo pilot deviation
    pub pilot_deviation: PilotDeviation,
    /// Programme identification
    pub pi: ProgrammeIdentification,
    /// Programme type sent with every group
    pub pty: ProgrammeType,
    /// Group version used for PS
    pub ps_version: GroupVersion,
    /// Alternate frequencies for 0A groups
    pub alternate_frequencies: AfList,
    /// Delay after each RDS group
    pub rds_pacing_ms: u32,
}

/// Default total deviation register value
pub const DEFAULT_TOTAL_DEVIATION: u8 = 108;

/// Default RDS deviation register value
pub const DEFAULT_RDS_DEVIATION: u8 = 6;

/// Default carrier frequency in tenths of a MHz (107.8 MHz)
pub const DEFAULT_FREQUENCY_TENTHS_MHZ: u16 = 1078;

impl Default for TransmitterConfig {
    fn default() -> Self {
        Self {
            clock: ClockSource::Crystal,
            crystal: CrystalFrequency::Mhz26,
            crystal_trim: CrystalTrim::default(),
            input_impedance: InputImpedance::default(),
            mode: TransmitMode::default(),
            frequency: default_frequency(),
            power: PowerLevel::MAX,
            total_deviation: DEFAULT_TOTAL_DEVIATION,
            rds_deviation: default_rds_deviation(),
            pilot_deviation: PilotDeviation::Percent9,
            pi: DEFAULT_PI,
            pty: ProgrammeType::NONE,
            ps_version: GroupVersion::B,
            alternate_frequencies: AfList::new(),
            rds_pacing_ms: RDS_GROUP_PACING_MS,
        }
    }
}

/// Build the default carrier frequency
#[must_use]
pub const fn default_frequency() -> Frequency {
    match Frequency::from_tenths_mhz(DEFAULT_FREQUENCY_TENTHS_MHZ) {
        Some(freq) => freq,
        None => panic!("default frequency out of range"),
    }
}

const fn default_rds_deviation() -> RdsDeviation {
    match RdsDeviation::new(DEFAULT_RDS_DEVIATION) {
        Some(dev) => dev,
        None => panic!("default RDS deviation out of range"),
    }
}
