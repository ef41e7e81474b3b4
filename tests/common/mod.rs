//! Test doubles shared by the integration tests
//!
//! `SimulatedChip` is a QN800x register file behind the embedded-hal I2C
//! trait: writes land at their sub-address with auto-increment, reads return
//! the status layout the driver expects (SYSTEM1 at index 3, ANACTL1 at
//! index 5). `VirtualClock` records delays instead of sleeping.

#![allow(dead_code)]

use embedded_hal::delay::DelayNs;
use embedded_hal::i2c::{ErrorKind, ErrorType, I2c, Operation, SevenBitAddress};

pub const QN800X_ADDR: u8 = 0x2B;
pub const SYSTEM1: u8 = 0x01;
pub const ANACTL1: u8 = 0x03;
pub const RDS0: u8 = 0x10;

/// One write transaction as seen on the bus
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Write {
    pub reg: u8,
    pub data: Vec<u8>,
}

#[derive(Debug)]
pub struct SimulatedChip {
    pub registers: [u8; 0x60],
    pub writes: Vec<Write>,
    pub reads: usize,
    /// Length of each read, in order
    pub read_lens: Vec<usize>,
    /// SYSTEM1 value observed by each status read, in order
    pub system1_reads: Vec<u8>,
    transactions: usize,
    fail_at: Option<usize>,
}

impl SimulatedChip {
    pub fn new() -> Self {
        Self {
            registers: [0; 0x60],
            writes: Vec::new(),
            reads: 0,
            read_lens: Vec::new(),
            system1_reads: Vec::new(),
            transactions: 0,
            fail_at: None,
        }
    }

    /// Fail the `n`th bus transaction (0-based) and every one after it
    pub fn failing_at(n: usize) -> Self {
        Self {
            fail_at: Some(n),
            ..Self::new()
        }
    }

    /// Writes to the RDS data registers
    pub fn rds_bursts(&self) -> Vec<&Write> {
        self.writes.iter().filter(|w| w.reg == RDS0).collect()
    }

    /// Values written to SYSTEM1
    pub fn system1_writes(&self) -> Vec<u8> {
        self.writes
            .iter()
            .filter(|w| w.reg == SYSTEM1 && w.data.len() == 1)
            .map(|w| w.data[0])
            .collect()
    }

    /// Writes to a given register
    pub fn writes_to(&self, reg: u8) -> Vec<&Write> {
        self.writes.iter().filter(|w| w.reg == reg).collect()
    }

    fn status_byte(&self, index: usize) -> u8 {
        match index {
            3 => self.registers[usize::from(SYSTEM1)],
            5 => self.registers[usize::from(ANACTL1)],
            _ => 0,
        }
    }
}

impl ErrorType for SimulatedChip {
    type Error = ErrorKind;
}

impl I2c<SevenBitAddress> for SimulatedChip {
    fn transaction(
        &mut self,
        address: SevenBitAddress,
        operations: &mut [Operation<'_>],
    ) -> Result<(), Self::Error> {
        assert_eq!(address, QN800X_ADDR, "wrong device address");

        let n = self.transactions;
        self.transactions += 1;
        if self.fail_at.is_some_and(|at| n >= at) {
            return Err(ErrorKind::Other);
        }

        for op in operations.iter_mut() {
            match op {
                Operation::Write(bytes) => {
                    let (&reg, data) = bytes.split_first().expect("empty write");
                    for (i, &value) in data.iter().enumerate() {
                        self.registers[usize::from(reg) + i] = value;
                    }
                    self.writes.push(Write {
                        reg,
                        data: data.to_vec(),
                    });
                }
                Operation::Read(buf) => {
                    for (i, byte) in buf.iter_mut().enumerate() {
                        *byte = self.status_byte(i);
                    }
                    self.reads += 1;
                    self.read_lens.push(buf.len());
                    self.system1_reads.push(self.registers[usize::from(SYSTEM1)]);
                }
            }
        }
        Ok(())
    }
}

/// Delay source that only keeps time
#[derive(Debug, Default)]
pub struct VirtualClock {
    pub elapsed_ns: u64,
    pub sleeps_ms: Vec<u32>,
}

impl VirtualClock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn elapsed_ms(&self) -> u64 {
        self.elapsed_ns / 1_000_000
    }
}

impl DelayNs for VirtualClock {
    fn delay_ns(&mut self, ns: u32) {
        self.elapsed_ns += u64::from(ns);
    }

    fn delay_ms(&mut self, ms: u32) {
        self.elapsed_ns += u64::from(ms) * 1_000_000;
        self.sleeps_ms.push(ms);
    }
}
