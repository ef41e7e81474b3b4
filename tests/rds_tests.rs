//! Tests for RDS group construction
//!
//! Tests group words, text buffers, alternate frequencies and the encoder.
//! Run with: cargo test --target x86_64-unknown-linux-gnu --no-default-features --features std --test rds_tests

use qn800x_tx::config::{DEFAULT_PI, RDS_MIN_PACING_MS};
use qn800x_tx::rds::{
    group_duration_us, AfList, GroupVersion, GroupWord, PsName, RadioText, RdsBurst, RdsEncoder,
    TextError,
};
use qn800x_tx::types::{Frequency, ProgrammeIdentification, ProgrammeType};

fn mhz(tenths: u16) -> Frequency {
    Frequency::from_tenths_mhz(tenths).unwrap()
}

// ============================================================================
// Group Word Tests
// ============================================================================

#[test]
fn ps_word_fields() {
    for version in [GroupVersion::A, GroupVersion::B] {
        for pty in 0..32 {
            for segment in 0..4 {
                let word =
                    GroupWord::programme_service(version, ProgrammeType::new(pty), segment, false);
                assert_eq!(word.group_type(), 0);
                assert_eq!(word.version(), version);
                assert_eq!(word.programme_type().code(), pty as u8);
                assert_eq!(word.ps_segment(), segment);
                assert!(word.music());
                assert!(!word.decoder_id());
                assert!(!word.traffic_programme());
                assert!(!word.traffic_announcement());
            }
        }
    }
}

#[test]
fn ps_word_stereo_flag_only_on_last_segment() {
    let di: Vec<bool> = (0..4)
        .map(|s| GroupWord::programme_service(GroupVersion::A, ProgrammeType::NONE, s, true))
        .map(GroupWord::decoder_id)
        .collect();
    assert_eq!(di, [false, false, false, true]);
}

#[test]
fn ps_word_known_values() {
    let pty = ProgrammeType::CURRENT_AFFAIRS;
    assert_eq!(GroupWord::programme_service(GroupVersion::A, pty, 0, true).raw(), 0x0048);
    assert_eq!(GroupWord::programme_service(GroupVersion::A, pty, 3, true).raw(), 0x004F);
    assert_eq!(GroupWord::programme_service(GroupVersion::B, pty, 1, false).raw(), 0x0849);
}

#[test]
fn ps_word_segment_wraps_to_two_bits() {
    let word = GroupWord::programme_service(GroupVersion::B, ProgrammeType::NONE, 6, false);
    assert_eq!(word.ps_segment(), 2);
    assert_eq!(word.raw(), 0x080A);
}

#[test]
fn rt_word_fields() {
    for pty in [0, 1, 10, 31] {
        for segment in 0..16 {
            for ab in [false, true] {
                let word = GroupWord::radio_text(ProgrammeType::new(pty), segment, ab);
                assert_eq!(word.group_type(), 2);
                assert_eq!(word.version(), GroupVersion::A);
                assert_eq!(word.programme_type().code(), pty as u8);
                assert_eq!(word.rt_segment(), segment);
                assert_eq!(word.text_ab(), ab);
            }
        }
    }
}

#[test]
fn rt_word_known_values() {
    assert_eq!(GroupWord::radio_text(ProgrammeType::NONE, 0, false).raw(), 0x2000);
    assert_eq!(GroupWord::radio_text(ProgrammeType::new(31), 15, true).raw(), 0x23FF);
}

#[test]
fn pty_is_masked_to_five_bits() {
    let pty = ProgrammeType::new(0x25);
    assert_eq!(pty.code(), 5);
    let word = GroupWord::radio_text(pty, 0, false);
    assert_eq!(word.group_type(), 2);
    assert_eq!(word.programme_type().code(), 5);
}

#[test]
fn word_bytes_are_big_endian() {
    assert_eq!(GroupWord::from_raw(0x204F).to_bytes(), [0x20, 0x4F]);
}

// ============================================================================
// Text Buffer Tests
// ============================================================================

#[test]
fn ps_name_pads_short_names() {
    let ps = PsName::new("").unwrap();
    assert_eq!(ps.as_bytes(), b"        ");
    let ps = PsName::new("RADIO").unwrap();
    assert_eq!(ps.segment(2), *b"O ");
}

#[test]
fn ps_name_rejects_non_ascii() {
    assert_eq!(PsName::new("CAF\u{e9}"), Err(TextError::NonAscii { index: 3 }));
    assert_eq!(PsName::new("A\tB"), Err(TextError::NonAscii { index: 1 }));
}

#[test]
fn radio_text_terminates_short_text() {
    let rt = RadioText::new("Hi").unwrap();
    assert_eq!(&rt.as_bytes()[..4], &[b'H', b'i', RadioText::END_OF_TEXT, b' ']);
    assert!(rt.as_bytes()[3..].iter().all(|&b| b == b' '));
}

#[test]
fn radio_text_full_length_has_no_terminator() {
    let text = "x".repeat(64);
    let rt = RadioText::new(&text).unwrap();
    assert!(!rt.as_bytes().contains(&RadioText::END_OF_TEXT));
}

#[test]
fn radio_text_rejects_65_chars() {
    let text = "x".repeat(65);
    assert_eq!(
        RadioText::new(&text),
        Err(TextError::TooLong { max: 64, len: 65 })
    );
}

#[test]
fn text_error_display() {
    let err = TextError::TooLong { max: 8, len: 9 };
    assert_eq!(err.to_string(), "text of 9 chars exceeds 8");
}

// ============================================================================
// Alternate Frequency Tests
// ============================================================================

#[test]
fn af_list_codes_frequencies() {
    let af = AfList::from_frequencies(&[mhz(977), mhz(939), mhz(1078)]).unwrap();
    assert_eq!(af.len(), 3);
    assert_eq!(af.to_bytes(), [227, 102, 64, 203, 205, 205, 205, 205]);
}

#[test]
fn af_list_holds_seven_frequencies() {
    let mut af = AfList::new();
    for tenths in 900..907 {
        af.push(mhz(tenths)).unwrap();
    }
    assert_eq!(af.to_bytes()[0], 231);
    assert_eq!(af.push(mhz(950)), Err(mhz(950)));
}

#[test]
fn af_list_rejects_uncodable_frequency() {
    let mut af = AfList::new();
    assert_eq!(af.push(mhz(800)), Err(mhz(800)));
    assert_eq!(af.push(mhz(1080)), Err(mhz(1080)));
    assert!(af.is_empty());
}

// ============================================================================
// Encoder Tests
// ============================================================================

#[test]
fn burst_layout_is_pi_word_c_d() {
    let pi = ProgrammeIdentification::new(0xD022);
    let word = GroupWord::from_raw(0x0849);
    let burst = RdsBurst::from_blocks(pi, word, [1, 2], [3, 4]);
    assert_eq!(burst.as_bytes(), &[0xD0, 0x22, 0x08, 0x49, 1, 2, 3, 4]);
    assert_eq!(burst.group_word(), word);
}

#[test]
fn encoder_ps_groups_cover_name() {
    let encoder = RdsEncoder::new(DEFAULT_PI, AfList::new());
    let ps = PsName::new("TESTFM12").unwrap();

    let bursts: Vec<RdsBurst> = encoder
        .ps_groups(&ps, ProgrammeType::NONE, GroupVersion::B, false)
        .collect();

    assert_eq!(bursts.len(), 4);
    let name: Vec<u8> = bursts.iter().flat_map(|b| b.as_bytes()[6..].to_vec()).collect();
    assert_eq!(name, b"TESTFM12");
    for (segment, burst) in bursts.iter().enumerate() {
        assert_eq!(burst.group_word().ps_segment(), segment as u8);
        assert_eq!(&burst.as_bytes()[4..6], &[0xD0, 0x22]);
    }
}

#[test]
fn encoder_rt_groups_cover_text() {
    let encoder = RdsEncoder::new(DEFAULT_PI, AfList::new());
    let rt = RadioText::new("Now playing").unwrap();

    let text: Vec<u8> = encoder
        .rt_groups(&rt, ProgrammeType::POP_MUSIC, true)
        .flat_map(|b| b.as_bytes()[4..].to_vec())
        .collect();

    assert_eq!(text.as_slice(), rt.as_bytes().as_slice());
}

#[test]
fn encoder_pi_can_change() {
    let mut encoder = RdsEncoder::new(DEFAULT_PI, AfList::new());
    encoder.set_pi(ProgrammeIdentification::from_bytes(0xC2, 0x01));
    let ps = PsName::new("X").unwrap();

    let burst = encoder.ps_group(&ps, ProgrammeType::NONE, GroupVersion::A, false, 0);

    assert_eq!(&burst.as_bytes()[..2], &[0xC2, 0x01]);
    assert_eq!(encoder.pi().code(), 0xC201);
}

// ============================================================================
// Timing Tests
// ============================================================================

#[test]
fn group_takes_about_88_ms() {
    assert_eq!(group_duration_us(), 87_578);
    assert!(group_duration_us() < RDS_MIN_PACING_MS * 1000);
}
