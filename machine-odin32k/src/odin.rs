//! The Odin32K machine: power-on, main loop, single-step.

use std::io::{self, BufRead, Write};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use cpu_65c02::Wdc65c02;
use poppy_core::Cpu;

use crate::bus::OdinBus;
use crate::config::{EmuConfig, Verbosity};
use crate::pacer::Pacer;
use crate::rom::RomImage;
use crate::trace::{RegSnapshot, Tracer};

/// Machine lifecycle.
///
/// `Boot` until the reset vector has been fetched, `Running` through the
/// fetch/execute loop, `Halted` once the guest executes the HALT
/// extension. `Halted` is terminal for the current run.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RunState {
    Boot,
    Running,
    Halted,
}

/// The whole machine: CPU plus bus, with run statistics.
///
/// The bus exclusively owns the RAM/ROM arrays and the pacer; the CPU
/// exclusively owns the register file. Everything reaches memory through
/// bus reads and writes.
pub struct Odin32K {
    config: EmuConfig,
    cpu: Wdc65c02,
    bus: OdinBus,
    state: RunState,
    stop: Arc<AtomicBool>,
    instructions: u64,
    cycles: u64,
}

impl Odin32K {
    /// Machine with trace output on stdout.
    pub fn new(config: EmuConfig) -> Self {
        Self::with_tracer(config, Tracer::new(config.verbosity))
    }

    /// Machine with trace output captured in memory, for tests.
    pub fn with_trace_buffer(config: EmuConfig) -> Self {
        Self::with_tracer(config, Tracer::with_memory_sink(config.verbosity))
    }

    fn with_tracer(config: EmuConfig, tracer: Tracer) -> Self {
        let pacer = Pacer::new(config.clock_hz, config.pacing);
        Self {
            config,
            cpu: Wdc65c02::new(),
            bus: OdinBus::new(pacer, tracer),
            state: RunState::Boot,
            stop: Arc::new(AtomicBool::new(false)),
            instructions: 0,
            cycles: 0,
        }
    }

    pub fn load_rom0(&mut self, image: &RomImage) {
        self.bus.load_rom0(image);
    }

    pub fn load_rom1(&mut self, image: &RomImage) {
        self.bus.load_rom1(image);
    }

    /// Initialize RAM, fetch the reset vector (two architectural bus
    /// cycles), and enter `Running`.
    pub fn power_on(&mut self) {
        self.bus.init_ram(self.config.ram_init);
        self.bus.pacer_mut().resync();
        self.cpu.reset(&mut self.bus);
        self.cycles += 2; // the vector fetch
        log::info!("reset vector -> PC=${:04X}", self.cpu.pc());
        self.bus.tracer_mut().init(self.cpu.pc());
        self.state = RunState::Running;
    }

    /// Execute one instruction, emitting trace lines around it.
    /// Returns the cycles consumed.
    pub fn step(&mut self) -> u32 {
        if self.state != RunState::Running {
            return 0;
        }

        if self.bus.tracer().verbosity() >= Verbosity::Instructions {
            let pc = self.cpu.pc();
            let opcode = self.bus.peek(pc);
            let operand1 = self.bus.peek(pc.wrapping_add(1));
            let operand2 = self.bus.peek(pc.wrapping_add(2));
            self.bus.tracer_mut().instruction(pc, opcode, operand1, operand2);
        }

        let cycles = self.cpu.step(&mut self.bus);
        self.cycles += cycles as u64;
        self.instructions += 1;

        if self.bus.tracer().verbosity() >= Verbosity::Registers {
            let regs = RegSnapshot {
                pc: self.cpu.pc(),
                a: self.cpu.a(),
                x: self.cpu.x(),
                y: self.cpu.y(),
                sp: self.cpu.sp(),
                p: self.cpu.status(),
            };
            self.bus.tracer_mut().registers(regs);
        }

        if self.cpu.halted() {
            log::info!(
                "guest HALT at PC=${:04X} after {} instructions",
                self.cpu.pc(),
                self.instructions
            );
            self.state = RunState::Halted;
        }
        cycles
    }

    /// Drive the fetch/execute loop until halt or a stop request.
    pub fn run(&mut self) -> RunState {
        if self.config.wait_at_begin {
            self.pause_for_input();
        }
        while self.state == RunState::Running {
            if self.stop.load(Ordering::Relaxed) {
                log::info!("stop requested, leaving the run loop");
                break;
            }
            if self.config.step_mode {
                self.pause_for_input();
            }
            self.step();
        }
        self.state
    }

    /// Block on one line of input (prompt on stderr, stdout stays clean
    /// for the trace), then resync the pacer so paused wall-clock time
    /// is not charged against the guest.
    fn pause_for_input(&mut self) {
        let _ = write!(io::stderr(), "step> ");
        let _ = io::stderr().flush();
        let mut line = String::new();
        let _ = io::stdin().lock().read_line(&mut line);
        self.bus.pacer_mut().resync();
    }

    /// Shared flag observed at the top of the run loop. Set it from a
    /// signal handler or another thread for a cooperative stop; bus
    /// cycles are never cancelled in flight.
    pub fn stop_handle(&self) -> Arc<AtomicBool> {
        Arc::clone(&self.stop)
    }

    pub fn state(&self) -> RunState {
        self.state
    }

    pub fn cpu(&self) -> &Wdc65c02 {
        &self.cpu
    }

    pub fn bus(&self) -> &OdinBus {
        &self.bus
    }

    pub fn bus_mut(&mut self) -> &mut OdinBus {
        &mut self.bus
    }

    /// Instructions retired since power-on.
    pub fn instructions(&self) -> u64 {
        self.instructions
    }

    /// Cycles consumed since power-on, vector fetch included.
    pub fn cycles(&self) -> u64 {
        self.cycles
    }

    /// Captured trace text when built with `with_trace_buffer`.
    pub fn trace_contents(&self) -> Option<&str> {
        self.bus.tracer().contents()
    }
}
