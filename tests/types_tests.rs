//! Tests for shared types
//!
//! Tests range checks and register encodings of the value types.
//! Run with: cargo test --target x86_64-unknown-linux-gnu --no-default-features --features std --test types_tests

use qn800x_tx::error::{Argument, Error};
use qn800x_tx::types::{
    Channel, CrystalFrequency, CrystalTrim, Frequency, InputImpedance, PilotDeviation, PowerLevel,
    ProgrammeIdentification, ProgrammeType, RdsDeviation, SampleRate,
};

// ============================================================================
// Frequency Tests
// ============================================================================

#[test]
fn frequency_valid_range() {
    assert!(Frequency::from_tenths_mhz(760).is_some());
    assert!(Frequency::from_tenths_mhz(1080).is_some());
    assert!(Frequency::from_tenths_mhz(759).is_none());
    assert!(Frequency::from_tenths_mhz(1081).is_none());
}

#[test]
fn frequency_from_khz_truncates_to_grid() {
    let freq = Frequency::from_khz(107_850).unwrap();
    assert_eq!(freq.as_tenths_mhz(), 1078);
    assert_eq!(freq.as_khz(), 107_800);
    assert!(Frequency::from_khz(u32::MAX).is_none());
}

#[test]
fn frequency_channel_index() {
    let freq = Frequency::from_tenths_mhz(1078).unwrap();
    let channel = freq.channel();
    assert_eq!(channel.index(), 636);
    assert_eq!(channel.low(), 0x7C);
    assert_eq!(channel.high(), 0x02);
}

#[test]
fn channel_survives_register_split() {
    for tenths in Frequency::MIN_TENTHS_MHZ..=Frequency::MAX_TENTHS_MHZ {
        let channel = Frequency::from_tenths_mhz(tenths).unwrap().channel();
        assert_eq!(Channel::from_registers(channel.high(), channel.low()), channel);
    }
}

#[test]
fn frequency_af_codes() {
    assert_eq!(Frequency::from_tenths_mhz(876).unwrap().af_code(), Some(1));
    assert_eq!(Frequency::from_tenths_mhz(1079).unwrap().af_code(), Some(204));
    assert_eq!(Frequency::from_tenths_mhz(875).unwrap().af_code(), None);
    assert_eq!(Frequency::from_tenths_mhz(1080).unwrap().af_code(), None);
}

#[test]
fn frequency_debug_shows_mhz() {
    let freq = Frequency::from_tenths_mhz(977).unwrap();
    assert_eq!(format!("{freq:?}"), "Frequency(97.7 MHz)");
}

// ============================================================================
// Level Tests
// ============================================================================

#[test]
fn power_level_range() {
    assert_eq!(PowerLevel::new(15), Some(PowerLevel::MAX));
    assert_eq!(PowerLevel::new(0), Some(PowerLevel::MIN));
    assert!(PowerLevel::new(16).is_none());
}

#[test]
fn rds_deviation_range() {
    assert_eq!(RdsDeviation::new(127).map(RdsDeviation::value), Some(127));
    assert!(RdsDeviation::new(128).is_none());
}

#[test]
fn crystal_trim_range() {
    assert_eq!(CrystalTrim::default().value(), 16);
    assert!(CrystalTrim::new(61).is_some());
    assert!(CrystalTrim::new(62).is_none());
}

// ============================================================================
// Lookup Table Tests
// ============================================================================

#[test]
fn pilot_deviation_lookup() {
    for percent in 7..=10 {
        let pilot = PilotDeviation::from_percent(percent).unwrap();
        assert_eq!(pilot.percent(), percent);
        assert_eq!(pilot.as_reg(), percent * 4);
    }
    assert!(PilotDeviation::from_percent(6).is_none());
    assert!(PilotDeviation::from_percent(11).is_none());
}

#[test]
fn sample_rate_lookup() {
    assert_eq!(SampleRate::from_khz(44), Some(SampleRate::Khz44_1));
    assert_eq!(SampleRate::Khz44_1.as_hz(), 44_100);
    assert_eq!(SampleRate::Khz32.as_reg(), 0x49);
    assert_eq!(SampleRate::Khz48.as_reg(), 0x79);
    assert!(SampleRate::from_khz(0).is_none());
}

#[test]
fn crystal_codes() {
    assert_eq!(CrystalFrequency::default(), CrystalFrequency::Mhz26);
    assert_eq!(CrystalFrequency::Mhz26.code(), 11);
    assert!(CrystalFrequency::from_code(7).is_none());
    assert!(CrystalFrequency::from_code(16).is_none());
    for code in (0..=15).filter(|&c| c != 7) {
        assert_eq!(CrystalFrequency::from_code(code).unwrap().code(), code);
    }
}

#[test]
fn input_impedance_bits() {
    assert_eq!(InputImpedance::default(), InputImpedance::K20);
    assert_eq!(InputImpedance::K10.bits(), 0);
    assert_eq!(InputImpedance::K80.bits(), 3);
}

// ============================================================================
// RDS Identity Tests
// ============================================================================

#[test]
fn programme_type_constants() {
    assert_eq!(ProgrammeType::NEWS.code(), 1);
    assert_eq!(ProgrammeType::POP_MUSIC.code(), 10);
    assert_eq!(ProgrammeType::new(0xFFFF).code(), 31);
}

#[test]
fn programme_identification_fields() {
    let pi = ProgrammeIdentification::new(0xD022);
    assert_eq!(pi.high(), 0xD0);
    assert_eq!(pi.low(), 0x22);
    assert_eq!(pi.country(), 0xD);
    assert_eq!(pi.coverage(), 0);
    assert_eq!(pi.reference(), 0x22);
    assert_eq!(ProgrammeIdentification::from_bytes(0xD0, 0x22), pi);
    assert_eq!(format!("{pi:?}"), "PI(D022)");
}

// ============================================================================
// Error Tests
// ============================================================================

#[test]
fn argument_error_conversion() {
    let err: Error<()> = Argument::Power(16).into();
    assert_eq!(err.argument(), Some(Argument::Power(16)));
    assert!(!err.is_bus());
}

#[test]
fn error_display() {
    let err: Error<&str> = Error::InvalidArgument(Argument::PilotDeviation(11));
    assert_eq!(err.to_string(), "invalid argument: pilot deviation 11% not supported");
    let err: Error<&str> = Error::Bus("nack");
    assert_eq!(err.to_string(), "I2C bus error: \"nack\"");
}
