//! Odin32K machine emulation.
//!
//! The Odin32K is an 8-bit microcomputer built around a W65C02 CPU with
//! 32 KiB of system RAM, two 8 KiB ROM banks, and a small memory-mapped
//! I/O region (stubbed in this revision). This crate provides everything
//! around the CPU: the cycle-accurate memory bus, the wall-clock pacer,
//! the trace emitter, ROM image loading, and the boot/run driver.

mod bus;
mod config;
mod odin;
mod pacer;
mod rom;
mod trace;

pub use bus::{OdinBus, SYSRAM_SIZE};
pub use config::{EmuConfig, RamInit, Verbosity, DEFAULT_CLOCK_HZ};
pub use odin::{Odin32K, RunState};
pub use pacer::Pacer;
pub use rom::{RomError, RomImage, ROM_SIZE};
pub use trace::{RegSnapshot, Tracer};
