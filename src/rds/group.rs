//! RDS block B group words
//!
//! Bit layout of the 16-bit word written to RDS2/RDS3:
//!
//! ```text
//!  15..12  11  10  9..5  4      3    2    1..0 / 3..0
//!  group   B0  TP  PTY   TA/AB  M/S  DI   segment
//! ```
//!
//! For group 2A the A/B text flag sits at bit 4 and the segment counter
//! takes the full low nibble, so M/S and DI do not exist there.

use crate::types::ProgrammeType;

const GROUP_TYPE_SHIFT: u16 = 12;
const VERSION_B: u16 = 1 << 11;
const TRAFFIC_PROGRAMME: u16 = 1 << 10;
const PTY_SHIFT: u16 = 5;
const PTY_MASK: u16 = 0x1F << PTY_SHIFT;
const FLAG_BIT4: u16 = 1 << 4;
const MUSIC: u16 = 1 << 3;
const DECODER_ID: u16 = 1 << 2;
const PS_SEGMENT_MASK: u16 = 0b11;
const RT_SEGMENT_MASK: u16 = 0b1111;

/// Group version: A carries alternate frequencies in block C, B repeats PI
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum GroupVersion {
    /// Version A (0A: block C holds the AF list)
    #[default]
    A,
    /// Version B (0B: block C repeats the PI code)
    B,
}

#[cfg(feature = "embedded")]
impl defmt::Format for GroupVersion {
    fn format(&self, f: defmt::Formatter) {
        match self {
            Self::A => defmt::write!(f, "A"),
            Self::B => defmt::write!(f, "B"),
        }
    }
}

/// Block B of an RDS group
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct GroupWord(u16);

impl GroupWord {
    /// Group 0A template (music flag set)
    pub const TEMPLATE_0A: u16 = 0b0000_0000_0000_1000;

    /// Group 0B template (version bit and music flag set)
    pub const TEMPLATE_0B: u16 = 0b0000_1000_0000_1000;

    /// Group 2A template
    pub const TEMPLATE_2A: u16 = 0b0010_0000_0000_0000;

    /// Basic tuning and switching group (0A / 0B) for one PS segment
    ///
    /// `segment` is reduced to its low two bits. `stereo` only sets the DI
    /// bit on segment 3, which is where receivers read the stereo flag.
    #[must_use]
    pub const fn programme_service(
        version: GroupVersion,
        pty: ProgrammeType,
        segment: u8,
        stereo: bool,
    ) -> Self {
        let template = match version {
            GroupVersion::A => Self::TEMPLATE_0A,
            GroupVersion::B => Self::TEMPLATE_0B,
        };
        let segment = segment as u16 & PS_SEGMENT_MASK;
        let mut word = template | Self::pty_bits(pty) | segment;
        if stereo && segment == 3 {
            word |= DECODER_ID;
        }
        Self(word)
    }

    /// Radio Text group (2A) for one RT segment
    ///
    /// `segment` is reduced to its low four bits. `text_ab` is the A/B flag
    /// receivers use to notice a new text.
    #[must_use]
    pub const fn radio_text(pty: ProgrammeType, segment: u8, text_ab: bool) -> Self {
        let mut word =
            Self::TEMPLATE_2A | Self::pty_bits(pty) | (segment as u16 & RT_SEGMENT_MASK);
        if text_ab {
            word |= FLAG_BIT4;
        }
        Self(word)
    }

    /// Wrap a raw block B value
    #[must_use]
    pub const fn from_raw(raw: u16) -> Self {
        Self(raw)
    }

    const fn pty_bits(pty: ProgrammeType) -> u16 {
        ((pty.code() as u16) << PTY_SHIFT) & PTY_MASK
    }

    /// Raw 16-bit value
    #[must_use]
    pub const fn raw(self) -> u16 {
        self.0
    }

    /// Big-endian bytes for RDS2 / RDS3
    #[must_use]
    pub const fn to_bytes(self) -> [u8; 2] {
        self.0.to_be_bytes()
    }

    /// Group type number (0-15)
    #[must_use]
    pub const fn group_type(self) -> u8 {
        (self.0 >> GROUP_TYPE_SHIFT) as u8
    }

    /// Group version
    #[must_use]
    pub const fn version(self) -> GroupVersion {
        if self.0 & VERSION_B == 0 {
            GroupVersion::A
        } else {
            GroupVersion::B
        }
    }

    /// Traffic programme flag
    #[must_use]
    pub const fn traffic_programme(self) -> bool {
        self.0 & TRAFFIC_PROGRAMME != 0
    }

    /// Programme type
    #[must_use]
    pub const fn programme_type(self) -> ProgrammeType {
        ProgrammeType::new((self.0 & PTY_MASK) >> PTY_SHIFT)
    }

    /// Traffic announcement flag (group 0)
    #[must_use]
    pub const fn traffic_announcement(self) -> bool {
        self.0 & FLAG_BIT4 != 0
    }

    /// Text A/B flag (group 2)
    #[must_use]
    pub const fn text_ab(self) -> bool {
        self.0 & FLAG_BIT4 != 0
    }

    /// Music (true) / speech (false) flag (group 0)
    #[must_use]
    pub const fn music(self) -> bool {
        self.0 & MUSIC != 0
    }

    /// Decoder identification bit for this segment (group 0)
    #[must_use]
    pub const fn decoder_id(self) -> bool {
        self.0 & DECODER_ID != 0
    }

    /// PS segment address (group 0)
    #[must_use]
    pub const fn ps_segment(self) -> u8 {
        (self.0 & PS_SEGMENT_MASK) as u8
    }

    /// RT segment address (group 2)
    #[must_use]
    pub const fn rt_segment(self) -> u8 {
        (self.0 & RT_SEGMENT_MASK) as u8
    }
}

impl core::fmt::Debug for GroupWord {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let version = match self.version() {
            GroupVersion::A => 'A',
            GroupVersion::B => 'B',
        };
        write!(f, "GroupWord({}{}, {:016b})", self.group_type(), version, self.0)
    }
}

#[cfg(feature = "embedded")]
impl defmt::Format for GroupWord {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(f, "Group{}{} {=u16:04X}", self.group_type(), self.version(), self.0);
    }
}
