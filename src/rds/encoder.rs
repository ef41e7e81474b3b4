//! RDS group encoder
//!
//! Builds the eight bytes loaded into RDS0..RDS7 for one group. Blocks A-D
//! map to register pairs: A = PI, B = group word, C = AF / PI / text,
//! D = text. Nothing here touches the bus.

use super::af::AfList;
use super::group::{GroupVersion, GroupWord};
use super::text::{PsName, RadioText};
use crate::types::{ProgrammeIdentification, ProgrammeType};

/// Bytes of one group as loaded into RDS0..RDS7
pub const GROUP_BYTES: usize = 8;

/// One RDS group ready for the data registers
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RdsBurst {
    bytes: [u8; GROUP_BYTES],
}

impl RdsBurst {
    /// Assemble a group from its four blocks
    #[must_use]
    pub const fn from_blocks(pi: ProgrammeIdentification, word: GroupWord, c: [u8; 2], d: [u8; 2]) -> Self {
        let b = word.to_bytes();
        Self {
            bytes: [pi.high(), pi.low(), b[0], b[1], c[0], c[1], d[0], d[1]],
        }
    }

    /// Register payload, RDS0 first
    #[must_use]
    pub const fn as_bytes(&self) -> &[u8; GROUP_BYTES] {
        &self.bytes
    }

    /// Block B decoded back into a group word
    #[must_use]
    pub const fn group_word(&self) -> GroupWord {
        GroupWord::from_raw(u16::from_be_bytes([self.bytes[2], self.bytes[3]]))
    }
}

/// Station-wide RDS parameters shared by every group
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RdsEncoder {
    pi: ProgrammeIdentification,
    af: AfList,
}

impl RdsEncoder {
    /// Create an encoder for a station
    #[must_use]
    pub const fn new(pi: ProgrammeIdentification, af: AfList) -> Self {
        Self { pi, af }
    }

    /// Programme identification
    #[must_use]
    pub const fn pi(&self) -> ProgrammeIdentification {
        self.pi
    }

    /// Change the programme identification
    pub fn set_pi(&mut self, pi: ProgrammeIdentification) {
        self.pi = pi;
    }

    /// Alternate frequencies sent in 0A groups
    #[must_use]
    pub const fn alternate_frequencies(&self) -> &AfList {
        &self.af
    }

    /// Replace the alternate frequency list
    pub fn set_alternate_frequencies(&mut self, af: AfList) {
        self.af = af;
    }

    /// Group 0A/0B carrying PS characters `2*segment` and `2*segment + 1`
    #[must_use]
    pub fn ps_group(
        &self,
        text: &PsName,
        pty: ProgrammeType,
        version: GroupVersion,
        stereo: bool,
        segment: u8,
    ) -> RdsBurst {
        let word = GroupWord::programme_service(version, pty, segment, stereo);
        let block_c = match version {
            GroupVersion::A => self.af.segment(segment),
            GroupVersion::B => [self.pi.high(), self.pi.low()],
        };
        RdsBurst::from_blocks(self.pi, word, block_c, text.segment(segment))
    }

    /// Group 2A carrying RT characters `4*segment .. 4*segment + 4`
    #[must_use]
    pub fn rt_group(
        &self,
        text: &RadioText,
        pty: ProgrammeType,
        text_ab: bool,
        segment: u8,
    ) -> RdsBurst {
        let word = GroupWord::radio_text(pty, segment, text_ab);
        let [c0, c1, d0, d1] = text.segment(segment);
        RdsBurst::from_blocks(self.pi, word, [c0, c1], [d0, d1])
    }

    /// All four PS groups in transmission order
    pub fn ps_groups<'a>(
        &'a self,
        text: &'a PsName,
        pty: ProgrammeType,
        version: GroupVersion,
        stereo: bool,
    ) -> impl Iterator<Item = RdsBurst> + 'a {
        (0..PsName::SEGMENTS).map(move |segment| self.ps_group(text, pty, version, stereo, segment))
    }

    /// All sixteen RT groups in transmission order
    pub fn rt_groups<'a>(
        &'a self,
        text: &'a RadioText,
        pty: ProgrammeType,
        text_ab: bool,
    ) -> impl Iterator<Item = RdsBurst> + 'a {
        (0..RadioText::SEGMENTS).map(move |segment| self.rt_group(text, pty, text_ab, segment))
    }
}
