//! FM Beacon Application
//!
//! Entry point for an STM32G474 board driving a QN8007 over I2C1.
//! Brings the transmitter up, then loops PS and RT cycles forever.

#![no_std]
#![no_main]

use defmt::{error, info, warn};
use embassy_executor::Spawner;
use embassy_stm32::gpio::{Level, Output, Speed};
use embassy_stm32::i2c::I2c as Stm32I2c;
use embassy_stm32::time::Hertz;
use embassy_time::{Delay, Duration, Timer};
use {defmt_rtt as _, panic_probe as _};

use qn800x_tx::config::{BASEBAND_RESET_GAP_MS, I2C_FREQUENCY_HZ};
use qn800x_tx::prelude::*;

/// Station name
const PS_NAME: &[u8; 8] = b"QN8007TX";

/// Radio Text messages, alternated every round
const RADIO_TEXTS: [&str; 2] = [
    "Embedded Rust FM beacon on a QN8007",
    "RDS groups 0B and 2A, 100 ms pacing",
];

/// Main entry point
#[embassy_executor::main]
async fn main(_spawner: Spawner) {
    info!("FM Beacon v{}", env!("CARGO_PKG_VERSION"));

    let p = embassy_stm32::init(embassy_stm32::Config::default());

    // Status LED toggles once per RDS cycle (PA5 on Nucleo boards)
    let mut led = Output::new(p.PA5, Level::Low, Speed::Low);

    // PB8 = SCL, PB9 = SDA for I2C1 on STM32G474
    let i2c = Stm32I2c::new_blocking(
        p.I2C1,
        p.PB8,
        p.PB9,
        Hertz(I2C_FREQUENCY_HZ),
        Default::default(),
    );

    info!("I2C1 initialized at {}Hz", I2C_FREQUENCY_HZ);

    let config = TransmitterConfig::default();
    let mut tx = Qn800x::new(i2c, Delay);

    if let Err(e) = bring_up(&mut tx, &config).await {
        error!("transmitter bring-up failed: {}", e);
        loop {
            Timer::after(Duration::from_secs(1)).await;
        }
    }

    info!("transmitting on {}", config.frequency);

    let ps = PsName::from_bytes(*PS_NAME);
    let texts = RADIO_TEXTS.map(|text| RadioText::new(text).unwrap());
    let scheduler = RdsScheduler::default();
    let mut round: usize = 0;

    loop {
        let slot = scheduler.next_slot(tx.completed_ps(false), tx.completed_rt(false));
        let text_ab = round % 2 == 1;

        let result = match slot {
            RdsSlot::Ps => tx.send_ps(&ps, config.pty, config.ps_version, config.mode.stereo),
            RdsSlot::Rt => tx.send_rt(&texts[round % texts.len()], config.pty, text_ab),
            RdsSlot::EndOfRound => {
                tx.completed_ps(true);
                tx.completed_rt(true);
                round = round.wrapping_add(1);
                Ok(())
            }
        };

        match result {
            Ok(()) => led.toggle(),
            Err(e) => {
                warn!("RDS {} aborted: {}", slot, e);
                Timer::after(Duration::from_millis(500)).await;
            }
        }
    }
}

/// Reset the chip and apply the configuration
async fn bring_up<I2C: I2c, D: DelayNs>(
    tx: &mut Qn800x<I2C, D>,
    config: &TransmitterConfig,
) -> Result<(), Error<I2C::Error>> {
    tx.software_reset(true)?;
    Timer::after(Duration::from_millis(10)).await;
    tx.software_reset(false)?;

    tx.configure(config)?;
    tx.baseband_reset(BASEBAND_RESET_GAP_MS)?;
    tx.set_mute(false)
}
