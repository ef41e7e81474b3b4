//! Programme Service and Radio Text buffers

use core::fmt;

/// Why a text could not be turned into an RDS buffer
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TextError {
    /// More characters than the buffer holds
    TooLong {
        /// Buffer capacity
        max: usize,
        /// Characters supplied
        len: usize,
    },
    /// Character outside printable ASCII
    NonAscii {
        /// Byte offset of the offending character
        index: usize,
    },
}

impl fmt::Display for TextError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TooLong { max, len } => write!(f, "text of {len} chars exceeds {max}"),
            Self::NonAscii { index } => write!(f, "non-ASCII character at {index}"),
        }
    }
}

#[cfg(feature = "embedded")]
impl defmt::Format for TextError {
    fn format(&self, f: defmt::Formatter) {
        match self {
            Self::TooLong { max, len } => defmt::write!(f, "TooLong({}>{})", len, max),
            Self::NonAscii { index } => defmt::write!(f, "NonAscii@{}", index),
        }
    }
}

const PS_LEN: usize = 8;
const RT_LEN: usize = 64;

fn check_ascii(text: &str) -> Result<(), TextError> {
    match text.bytes().position(|b| !(0x20..0x7F).contains(&b)) {
        Some(index) => Err(TextError::NonAscii { index }),
        None => Ok(()),
    }
}

/// Eight-character Programme Service name
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct PsName([u8; PS_LEN]);

impl PsName {
    /// Characters in a PS name
    pub const LEN: usize = PS_LEN;

    /// Characters carried by one group 0 segment
    pub const CHARS_PER_SEGMENT: usize = 2;

    /// Segments needed to send the whole name
    pub const SEGMENTS: u8 = (Self::LEN / Self::CHARS_PER_SEGMENT) as u8;

    /// Build a PS name, padding with spaces to eight characters
    ///
    /// # Errors
    ///
    /// Fails for texts longer than eight characters or with bytes outside
    /// printable ASCII.
    pub fn new(text: &str) -> Result<Self, TextError> {
        if text.len() > Self::LEN {
            return Err(TextError::TooLong { max: Self::LEN, len: text.len() });
        }
        check_ascii(text)?;

        let mut buf = [b' '; Self::LEN];
        buf[..text.len()].copy_from_slice(text.as_bytes());
        Ok(Self(buf))
    }

    /// Wrap eight raw bytes as-is
    #[must_use]
    pub const fn from_bytes(bytes: [u8; Self::LEN]) -> Self {
        Self(bytes)
    }

    /// The two characters sent in `segment` (0-3)
    #[must_use]
    pub fn segment(&self, segment: u8) -> [u8; Self::CHARS_PER_SEGMENT] {
        let start = usize::from(segment % Self::SEGMENTS) * Self::CHARS_PER_SEGMENT;
        [self.0[start], self.0[start + 1]]
    }

    /// Raw bytes
    #[must_use]
    pub const fn as_bytes(&self) -> &[u8; Self::LEN] {
        &self.0
    }
}

impl fmt::Debug for PsName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PsName({:?})", core::str::from_utf8(&self.0).unwrap_or("<binary>"))
    }
}

#[cfg(feature = "embedded")]
impl defmt::Format for PsName {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(f, "PS \"{=[u8]:a}\"", &self.0[..]);
    }
}

/// 64-character Radio Text buffer (group 2A)
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct RadioText([u8; RT_LEN]);

impl RadioText {
    /// Characters in a Radio Text buffer
    pub const LEN: usize = RT_LEN;

    /// Characters carried by one group 2A segment
    pub const CHARS_PER_SEGMENT: usize = 4;

    /// Segments needed to send the whole buffer
    pub const SEGMENTS: u8 = (Self::LEN / Self::CHARS_PER_SEGMENT) as u8;

    /// End-of-text marker for messages shorter than the buffer
    pub const END_OF_TEXT: u8 = 0x0D;

    /// Build a Radio Text buffer
    ///
    /// Texts shorter than 64 characters get a carriage return terminator and
    /// are padded with spaces, so receivers stop displaying at the real end.
    ///
    /// # Errors
    ///
    /// Fails for texts longer than 64 characters or with bytes outside
    /// printable ASCII.
    pub fn new(text: &str) -> Result<Self, TextError> {
        if text.len() > Self::LEN {
            return Err(TextError::TooLong { max: Self::LEN, len: text.len() });
        }
        check_ascii(text)?;

        let mut buf = [b' '; Self::LEN];
        buf[..text.len()].copy_from_slice(text.as_bytes());
        if text.len() < Self::LEN {
            buf[text.len()] = Self::END_OF_TEXT;
        }
        Ok(Self(buf))
    }

    /// Wrap 64 raw bytes as-is
    #[must_use]
    pub const fn from_bytes(bytes: [u8; Self::LEN]) -> Self {
        Self(bytes)
    }

    /// The four characters sent in `segment` (0-15)
    #[must_use]
    pub fn segment(&self, segment: u8) -> [u8; Self::CHARS_PER_SEGMENT] {
        let start = usize::from(segment % Self::SEGMENTS) * Self::CHARS_PER_SEGMENT;
        let mut chars = [0u8; Self::CHARS_PER_SEGMENT];
        chars.copy_from_slice(&self.0[start..start + Self::CHARS_PER_SEGMENT]);
        chars
    }

    /// Raw bytes
    #[must_use]
    pub const fn as_bytes(&self) -> &[u8; Self::LEN] {
        &self.0
    }
}

impl fmt::Debug for RadioText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "RadioText({:?})", core::str::from_utf8(&self.0).unwrap_or("<binary>"))
    }
}

#[cfg(feature = "embedded")]
impl defmt::Format for RadioText {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(f, "RT \"{=[u8]:a}\"", &self.0[..]);
    }
}
