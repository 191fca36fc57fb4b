//! Core traits for the Odin32K emulation.

mod bus;
mod cpu;
mod simple_bus;

pub use bus::Bus;
pub use cpu::Cpu;
pub use simple_bus::{Access, SimpleBus};
