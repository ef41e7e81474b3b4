//! `QN8006` / `QN8007` FM Transmitter Driver
//!
//! Owns the I2C bus and the pacing delay for one chip. RDS groups are loaded
//! into RDS0..RDS7 and latched by flipping the RDS ready bit in SYSTEM1; the
//! chip then needs one group time on air before the next group may be
//! loaded, so every group is followed by a blocking delay.
//!
//! All methods take `&mut self`. Sharing one chip between threads requires
//! wrapping the whole driver in a mutex: the RDS registers and the toggle bit
//! must not see interleaved updates.

use embedded_hal::delay::DelayNs;
use embedded_hal::i2c::I2c;

use crate::config::{
    bits, reg, TransmitterConfig, ANALOG_STATUS_ANACTL1, ANALOG_STATUS_LEN, DEFAULT_PI,
    RDS_GROUP_PACING_MS, RDS_MIN_PACING_MS, RDS_STATUS_LEN, RDS_STATUS_SYSTEM1,
};
use crate::error::{Argument, DriverResult, Error};
use crate::hal::i2c::{I2cAddress, RegisterBus};
use crate::rds::{AfList, GroupVersion, PsName, RadioText, RdsBurst, RdsEncoder};
use crate::types::{
    ClockSource, CrystalFrequency, CrystalTrim, Frequency, InputImpedance, PilotDeviation,
    PowerLevel, ProgrammeIdentification, ProgrammeType, RdsDeviation, SampleRate, TransmitMode,
};

/// `QN800x` driver
pub struct Qn800x<I2C, D> {
    bus: RegisterBus<I2C>,
    delay: D,
    encoder: RdsEncoder,
    pacing_ms: u32,
    ps_completed: u32,
    rt_completed: u32,
}

impl<I2C, D> Qn800x<I2C, D>
where
    I2C: I2c,
    D: DelayNs,
{
    /// Create a driver with the default PI code and no alternate frequencies
    ///
    /// Version A groups announce "no AF" (`224, 205...`) until
    /// [`set_alternate_frequencies`](Self::set_alternate_frequencies) is called.
    #[must_use]
    pub fn new(i2c: I2C, delay: D) -> Self {
        Self::with_pi(i2c, delay, DEFAULT_PI)
    }

    /// Create a driver for a station with its own PI code
    #[must_use]
    pub fn with_pi(i2c: I2C, delay: D, pi: ProgrammeIdentification) -> Self {
        Self {
            bus: RegisterBus::new(i2c, I2cAddress::QN800X),
            delay,
            encoder: RdsEncoder::new(pi, AfList::new()),
            pacing_ms: RDS_GROUP_PACING_MS,
            ps_completed: 0,
            rt_completed: 0,
        }
    }

    /// Give back the bus and the delay
    pub fn release(self) -> (I2C, D) {
        (self.bus.release(), self.delay)
    }

    /// Programme identification sent in block A
    #[must_use]
    pub const fn pi(&self) -> ProgrammeIdentification {
        self.encoder.pi()
    }

    /// Change the programme identification
    pub fn set_pi(&mut self, pi: ProgrammeIdentification) {
        self.encoder.set_pi(pi);
    }

    /// Replace the alternate frequencies sent with 0A groups
    pub fn set_alternate_frequencies(&mut self, af: AfList) {
        self.encoder.set_alternate_frequencies(af);
    }

    /// RDS encoder used for outgoing groups
    #[must_use]
    pub const fn encoder(&self) -> &RdsEncoder {
        &self.encoder
    }

    /// Delay after each RDS group in milliseconds
    #[must_use]
    pub const fn group_pacing_ms(&self) -> u32 {
        self.pacing_ms
    }

    /// Set the delay after each RDS group
    ///
    /// # Errors
    ///
    /// Rejects anything shorter than one group on air plus margin
    /// ([`RDS_MIN_PACING_MS`]).
    pub fn set_group_pacing_ms(&mut self, ms: u32) -> DriverResult<(), I2C::Error> {
        if ms < RDS_MIN_PACING_MS {
            warn!(
                "RDS pacing {}ms below {}ms, keeping {}ms",
                ms,
                RDS_MIN_PACING_MS,
                self.pacing_ms
            );
            return Err(Error::InvalidArgument(Argument::Pacing(ms)));
        }
        self.pacing_ms = ms;
        Ok(())
    }

    /// Apply a complete transmitter configuration
    ///
    /// Clock, crystal and trim go first so the PLL locks on the right
    /// reference before the channel is programmed.
    ///
    /// # Errors
    ///
    /// Stops at the first failing bus write, or if the pacing is too short.
    pub fn configure(&mut self, config: &TransmitterConfig) -> DriverResult<(), I2C::Error> {
        self.set_group_pacing_ms(config.rds_pacing_ms)?;
        self.set_pi(config.pi);
        self.set_alternate_frequencies(config.alternate_frequencies.clone());

        self.set_clock_source(config.clock)?;
        self.set_crystal(config.crystal)?;
        self.tune_crystal(config.crystal_trim, config.input_impedance)?;
        self.init_transmit(config.mode)?;
        self.set_frequency(config.frequency)?;
        self.set_power(config.power)?;
        self.set_deviation(config.total_deviation)?;
        self.set_rds_deviation(config.rds_deviation)?;
        if config.mode.stereo {
            self.write_reg(reg::GAIN_TXPLT, config.pilot_deviation.as_reg())?;
        }

        info!("QN800x configured: {} {}", config.frequency, config.power);
        Ok(())
    }

    // ------------------------------------------------------------------
    // Reset and clocking
    // ------------------------------------------------------------------

    /// Assert (`true`) or release (`false`) the software reset bit
    pub fn software_reset(&mut self, reset: bool) -> DriverResult<(), I2C::Error> {
        let value = if reset { bits::SYSTEM1_SWRST } else { 0 };
        self.write_reg(reg::SYSTEM1, value)
    }

    /// Pulse the audio baseband reset (also clears the RDS path)
    ///
    /// ANACTL1 is read back before each edge so the other analog settings
    /// survive the reset.
    pub fn baseband_reset(&mut self, gap_ms: u32) -> DriverResult<(), I2C::Error> {
        let anactl1 = self.read_anactl1()?;
        self.write_reg(reg::ANACTL1, anactl1 & !bits::ANACTL1_BB_RESET)?;

        self.delay.delay_ms(gap_ms);

        let anactl1 = self.read_anactl1()?;
        self.write_reg(reg::ANACTL1, anactl1 | bits::ANACTL1_BB_RESET)?;

        debug!("baseband reset, gap {}ms", gap_ms);
        Ok(())
    }

    /// Select the reference clock source
    pub fn set_clock_source(&mut self, source: ClockSource) -> DriverResult<(), I2C::Error> {
        let value = match source {
            ClockSource::Crystal => bits::XLT3_CRYSTAL,
            ClockSource::External => bits::XLT3_EXTERNAL,
        };
        self.write_reg(reg::REG_XLT3, value)
    }

    /// Select the reference crystal frequency
    pub fn set_crystal(&mut self, crystal: CrystalFrequency) -> DriverResult<(), I2C::Error> {
        self.write_reg(reg::ANACTL1, bits::ANACTL1_XSEL_BASE | crystal.code())
    }

    /// Select the crystal by raw code (0-15, 7 reserved)
    ///
    /// # Errors
    ///
    /// Returns [`Argument::CrystalCode`] for codes without a crystal.
    pub fn set_crystal_code(&mut self, code: u8) -> DriverResult<(), I2C::Error> {
        let crystal =
            CrystalFrequency::from_code(code).ok_or(Argument::CrystalCode(code))?;
        self.set_crystal(crystal)
    }

    /// Trim the crystal load and set the audio input impedance
    ///
    /// Both share REG_VGA: impedance in bits 7..6, trim below.
    pub fn tune_crystal(
        &mut self,
        trim: CrystalTrim,
        impedance: InputImpedance,
    ) -> DriverResult<(), I2C::Error> {
        let value = (impedance.bits() << 6) | (trim.value() & 0b0011_1111);
        self.write_reg(reg::REG_VGA, value)
    }

    // ------------------------------------------------------------------
    // RF setup
    // ------------------------------------------------------------------

    /// Enter transmit mode
    ///
    /// Writes SYSTEM0 and SYSTEM1 in one burst.
    pub fn init_transmit(&mut self, mode: TransmitMode) -> DriverResult<(), I2C::Error> {
        let mut system0 = bits::SYSTEM0_TX;
        if mode.digital_input {
            system0 |= bits::SYSTEM0_I2S;
        }
        if mode.rds {
            system0 |= bits::SYSTEM0_RDS;
        }

        let mut system1 = bits::SYSTEM1_TX;
        if !mode.stereo {
            system1 |= bits::SYSTEM1_MONO;
        }

        self.write(reg::SYSTEM0, &[system0, system1])
    }

    /// Tune the carrier
    pub fn set_frequency(&mut self, freq: Frequency) -> DriverResult<(), I2C::Error> {
        let channel = freq.channel();
        self.write_reg(reg::CH, channel.low())?;
        self.write_reg(reg::CH_STEP, channel.high())?;

        debug!("tuned to {} (ch {})", freq, channel.index());
        Ok(())
    }

    /// Tune the carrier from tenths of a MHz (1078 = 107.8 MHz)
    ///
    /// # Errors
    ///
    /// Returns [`Argument::Frequency`] outside 76.0 - 108.0 MHz.
    pub fn set_frequency_tenths_mhz(&mut self, tenths: u16) -> DriverResult<(), I2C::Error> {
        let freq = Frequency::from_tenths_mhz(tenths).ok_or(Argument::Frequency(tenths))?;
        self.set_frequency(freq)
    }

    /// Set the RF output power (gain calibration stays disabled)
    pub fn set_power(&mut self, power: PowerLevel) -> DriverResult<(), I2C::Error> {
        let value = bits::PAG_CAL_DISABLE | (power.level() & bits::PAG_CAL_POWER);
        self.write_reg(reg::PAG_CAL, value)
    }

    /// Set the RF output power from a raw code
    ///
    /// # Errors
    ///
    /// Returns [`Argument::Power`] above 15.
    pub fn set_power_level(&mut self, level: u8) -> DriverResult<(), I2C::Error> {
        let power = PowerLevel::new(level).ok_or(Argument::Power(level))?;
        self.set_power(power)
    }

    /// Set the total deviation of the multiplex signal (0-255)
    pub fn set_deviation(&mut self, total: u8) -> DriverResult<(), I2C::Error> {
        self.write_reg(reg::TX_FDEV, total)
    }

    /// Set the RDS subcarrier deviation
    pub fn set_rds_deviation(&mut self, dev: RdsDeviation) -> DriverResult<(), I2C::Error> {
        self.write_reg(reg::RDSFDEV, bits::RDSFDEV_MODE | dev.value())
    }

    /// Set the stereo pilot deviation in percent of 75 kHz
    ///
    /// # Errors
    ///
    /// Only 7, 8, 9 and 10 are encodable; anything else returns
    /// [`Argument::PilotDeviation`] without touching the chip.
    pub fn set_pilot_deviation(&mut self, percent: u8) -> DriverResult<(), I2C::Error> {
        let pilot =
            PilotDeviation::from_percent(percent).ok_or(Argument::PilotDeviation(percent))?;
        self.write_reg(reg::GAIN_TXPLT, pilot.as_reg())
    }

    // ------------------------------------------------------------------
    // Audio setup
    // ------------------------------------------------------------------

    /// Mute or unmute the audio
    pub fn set_mute(&mut self, mute: bool) -> DriverResult<(), I2C::Error> {
        let anactl1 = self.read_anactl1()?;
        let value = if mute {
            anactl1 | bits::ANACTL1_MUTE
        } else {
            anactl1 & !bits::ANACTL1_MUTE
        };
        self.write_reg(reg::ANACTL1, value)
    }

    /// Set the I2S master-mode sample rate in kHz (44 selects 44.1 kHz)
    ///
    /// # Errors
    ///
    /// Only 32, 40, 44 and 48 are encodable; anything else returns
    /// [`Argument::SampleRate`] without touching the chip.
    pub fn set_sample_rate(&mut self, khz: u8) -> DriverResult<(), I2C::Error> {
        let rate = SampleRate::from_khz(khz).ok_or(Argument::SampleRate(khz))?;
        self.write_reg(reg::IIS, rate.as_reg())
    }

    // ------------------------------------------------------------------
    // RDS
    // ------------------------------------------------------------------

    /// Send the whole PS name as four group 0A or 0B segments
    ///
    /// Blocks for four pacing intervals. The PS counter only advances once
    /// the fourth segment has been latched; a bus error aborts the cycle and
    /// leaves the counter alone.
    pub fn send_ps(
        &mut self,
        text: &PsName,
        pty: ProgrammeType,
        version: GroupVersion,
        stereo: bool,
    ) -> DriverResult<(), I2C::Error> {
        for segment in 0..PsName::SEGMENTS {
            let burst = self.encoder.ps_group(text, pty, version, stereo, segment);
            self.transmit_group(&burst)?;
        }

        self.ps_completed = self.ps_completed.saturating_add(1);
        trace!("PS cycle {} sent", self.ps_completed);
        Ok(())
    }

    /// Send the whole 64-character Radio Text as sixteen group 2A segments
    ///
    /// `text_ab` is set on every segment; flip it whenever the text changes
    /// so receivers clear their display.
    pub fn send_rt(
        &mut self,
        text: &RadioText,
        pty: ProgrammeType,
        text_ab: bool,
    ) -> DriverResult<(), I2C::Error> {
        for segment in 0..RadioText::SEGMENTS {
            let burst = self.encoder.rt_group(text, pty, text_ab, segment);
            self.transmit_group(&burst)?;
        }

        self.rt_completed = self.rt_completed.saturating_add(1);
        trace!("RT cycle {} sent", self.rt_completed);
        Ok(())
    }

    /// Completed PS cycles, optionally clearing the counter after reading
    pub fn completed_ps(&mut self, reset: bool) -> u32 {
        let count = self.ps_completed;
        if reset {
            self.ps_completed = 0;
        }
        count
    }

    /// Completed RT cycles, optionally clearing the counter after reading
    pub fn completed_rt(&mut self, reset: bool) -> u32 {
        let count = self.rt_completed;
        if reset {
            self.rt_completed = 0;
        }
        count
    }

    /// Load one group and hand it to the chip
    ///
    /// The current SYSTEM1 value is read back first so the toggle is relative
    /// to what the chip holds, then written inverted in bit 2 to latch.
    fn transmit_group(&mut self, burst: &RdsBurst) -> DriverResult<(), I2C::Error> {
        let status: [u8; RDS_STATUS_LEN] = self.bus.read().map_err(Error::Bus)?;
        let system1 = status[RDS_STATUS_SYSTEM1] ^ bits::SYSTEM1_RDSRDY;

        self.write(reg::RDS0, burst.as_bytes())?;
        self.write_reg(reg::SYSTEM1, system1)?;

        self.delay.delay_ms(self.pacing_ms);
        Ok(())
    }

    // ------------------------------------------------------------------
    // Register helpers
    // ------------------------------------------------------------------

    fn read_anactl1(&mut self) -> DriverResult<u8, I2C::Error> {
        let status: [u8; ANALOG_STATUS_LEN] = self.bus.read().map_err(Error::Bus)?;
        Ok(status[ANALOG_STATUS_ANACTL1])
    }

    fn write<const N: usize>(
        &mut self,
        base: u8,
        values: &[u8; N],
    ) -> DriverResult<(), I2C::Error> {
        self.bus.write(base, values).map_err(Error::Bus)
    }

    fn write_reg(&mut self, reg: u8, value: u8) -> DriverResult<(), I2C::Error> {
        self.bus.write_reg(reg, value).map_err(Error::Bus)
    }
}
