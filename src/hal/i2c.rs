//! I2C Register Access
//!
//! Sub-addressed burst writes and sequential status reads over any
//! `embedded-hal` 1.0 I2C bus. Every call is one blocking bus transaction.

use embedded_hal::i2c::I2c;

/// Largest payload written in one burst (the eight RDS data registers)
pub const MAX_BURST: usize = 8;

/// I2C operation result
pub type I2cResult<T, E> = Result<T, E>;

/// I2C device address wrapper
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct I2cAddress(u8);

impl I2cAddress {
    /// QN8006 / QN8007 FM transmitter address
    pub const QN800X: Self = Self(0x2B);

    /// Create from 7-bit address
    #[must_use]
    pub const fn new(addr: u8) -> Self {
        Self(addr & 0x7F)
    }

    /// Get the 7-bit address
    #[must_use]
    pub const fn addr(self) -> u8 {
        self.0
    }
}

#[cfg(feature = "embedded")]
impl defmt::Format for I2cAddress {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(f, "0x{=u8:02X}", self.0);
    }
}

/// Register access for one device on an I2C bus
pub struct RegisterBus<I2C> {
    i2c: I2C,
    addr: I2cAddress,
}

impl<I2C: I2c> RegisterBus<I2C> {
    /// Create a register bus for the device at `addr`
    #[must_use]
    pub fn new(i2c: I2C, addr: I2cAddress) -> Self {
        Self { i2c, addr }
    }

    /// Device address
    #[must_use]
    pub const fn address(&self) -> I2cAddress {
        self.addr
    }

    /// Write `values` starting at `base_reg`
    ///
    /// The device auto-increments its register pointer after each byte, so
    /// the whole payload lands in consecutive registers. Payloads longer than
    /// [`MAX_BURST`] do not compile.
    pub fn write<const N: usize>(
        &mut self,
        base_reg: u8,
        values: &[u8; N],
    ) -> I2cResult<(), I2C::Error> {
        const { assert!(N <= MAX_BURST, "burst longer than MAX_BURST") };

        let mut buf = [0u8; MAX_BURST + 1];
        buf[0] = base_reg;
        buf[1..=N].copy_from_slice(values);
        self.i2c.write(self.addr.addr(), &buf[..=N])
    }

    /// Write a single register
    pub fn write_reg(&mut self, reg: u8, value: u8) -> I2cResult<(), I2C::Error> {
        self.i2c.write(self.addr.addr(), &[reg, value])
    }

    /// Read `N` bytes from the device's current register pointer
    pub fn read<const N: usize>(&mut self) -> I2cResult<[u8; N], I2C::Error> {
        let mut buf = [0u8; N];
        self.i2c.read(self.addr.addr(), &mut buf)?;
        Ok(buf)
    }

    /// Give back the underlying bus
    pub fn release(self) -> I2C {
        self.i2c
    }
}
