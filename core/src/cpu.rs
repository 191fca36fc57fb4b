use crate::Bus;

/// A CPU that can execute instructions.
///
/// The type parameter `B` is the bus type this CPU operates on.
///
/// There are no interrupt lines here: no Odin32K device can raise one in
/// the current revision. A future IRQ source would be polled between
/// instructions, never mid-instruction.
pub trait Cpu<B: Bus> {
    /// Execute one instruction. Returns cycles consumed.
    fn step(&mut self, bus: &mut B) -> u32;

    /// Reset the CPU and fetch the reset vector (these vector reads are
    /// architectural and consume cycles on the bus).
    fn reset(&mut self, bus: &mut B);

    /// Get the current program counter.
    fn pc(&self) -> u16;
}
