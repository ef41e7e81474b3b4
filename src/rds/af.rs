//! Alternate Frequency list (method A) for group 0A
//!
//! Eight bytes, two per 0A segment: a count byte `224 + n` followed by up to
//! seven frequency codes, padded with the filler code.

use heapless::Vec;

use crate::types::Frequency;

/// Bytes carried by the four 0A segments
pub const AF_BYTES: usize = 8;

/// Frequencies that fit next to the count byte
pub const MAX_ALTERNATE_FREQUENCIES: usize = AF_BYTES - 1;

/// Count byte for "no alternate frequencies"
pub const AF_COUNT_BASE: u8 = 224;

/// Filler code for unused slots
pub const AF_FILLER: u8 = 205;

/// Alternate frequency list
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct AfList {
    codes: Vec<u8, MAX_ALTERNATE_FREQUENCIES>,
}

impl AfList {
    /// Empty list (count byte 224, all fillers)
    #[must_use]
    pub const fn new() -> Self {
        Self { codes: Vec::new() }
    }

    /// Append a frequency
    ///
    /// Returns the frequency back if it cannot be coded (outside
    /// 87.6 - 107.9 MHz) or the list is already full.
    pub fn push(&mut self, freq: Frequency) -> Result<(), Frequency> {
        let code = freq.af_code().ok_or(freq)?;
        self.codes.push(code).map_err(|_| freq)
    }

    /// Build a list from frequencies, the first usually being this station
    ///
    /// # Errors
    ///
    /// Returns the first frequency that could not be added.
    pub fn from_frequencies(freqs: &[Frequency]) -> Result<Self, Frequency> {
        let mut list = Self::new();
        for &freq in freqs {
            list.push(freq)?;
        }
        Ok(list)
    }

    /// Number of frequencies in the list
    #[must_use]
    pub fn len(&self) -> usize {
        self.codes.len()
    }

    /// Check if the list holds no frequencies
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    /// The eight bytes sent in block C of the 0A groups
    #[must_use]
    pub fn to_bytes(&self) -> [u8; AF_BYTES] {
        let mut bytes = [AF_FILLER; AF_BYTES];
        // len <= 7, the cast cannot truncate
        bytes[0] = AF_COUNT_BASE + self.codes.len() as u8;
        bytes[1..=self.codes.len()].copy_from_slice(&self.codes);
        bytes
    }

    /// The two bytes carried by `segment` (0-3)
    #[must_use]
    pub fn segment(&self, segment: u8) -> [u8; 2] {
        let bytes = self.to_bytes();
        let start = usize::from(segment % 4) * 2;
        [bytes[start], bytes[start + 1]]
    }
}
