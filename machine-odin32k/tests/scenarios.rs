//! End-to-end Odin32K scenarios.
//!
//! Each test builds an 8 KiB ROM image with a small machine-code program
//! and its reset vector, powers the machine on, and runs to the HALT
//! extension.

use machine_odin32k::{
    EmuConfig, Odin32K, RamInit, RomImage, RunState, Verbosity, ROM_SIZE,
};

// Status register bit masks
const FLAG_C: u8 = 0x01;
const FLAG_Z: u8 = 0x02;
const FLAG_V: u8 = 0x40;
const FLAG_N: u8 = 0x80;

/// ROM0 image with `program` placed at `origin` and the reset vector
/// pointing there. `origin` must sit in the $E000-$FFFF window.
fn rom_with_program(origin: u16, program: &[u8]) -> RomImage {
    let mut bytes = vec![0u8; ROM_SIZE];
    let offset = (origin - 0xE000) as usize;
    bytes[offset..offset + program.len()].copy_from_slice(program);
    bytes[0x1FFC] = origin as u8;
    bytes[0x1FFD] = (origin >> 8) as u8;
    RomImage::from_bytes(&bytes)
}

/// Free-running, silent machine with the given program in ROM0.
fn boot(program: &[u8]) -> Odin32K {
    let _ = env_logger::builder().is_test(true).try_init();
    let config = EmuConfig {
        pacing: false,
        ..EmuConfig::default()
    };
    let mut machine = Odin32K::new(config);
    machine.load_rom0(&rom_with_program(0xE000, program));
    machine.power_on();
    machine
}

#[test]
fn scenario_ldx_dex_halt() {
    // LDX #$05; DEX; HALT
    let mut machine = boot(&[0xA2, 0x05, 0xCA, 0x02]);
    let state = machine.run();

    assert_eq!(state, RunState::Halted);
    assert_eq!(machine.cpu().x(), 0x04);
    assert_eq!(machine.cpu().status() & FLAG_Z, 0);
    assert_eq!(machine.cpu().status() & FLAG_N, 0);
    assert_eq!(machine.cpu().pc(), 0xE004, "PC just past the HALT byte");
    // Vector fetch (2) + LDX (2) + DEX (2) + HALT (1)
    assert_eq!(machine.cycles(), 7);
    assert_eq!(machine.instructions(), 3);
}

#[test]
fn scenario_adc_signed_overflow() {
    // LDA #$7F; ADC #$01; HALT - initial C = 0
    let mut machine = boot(&[0xA9, 0x7F, 0x69, 0x01, 0x02]);
    machine.run();

    let cpu = machine.cpu();
    assert_eq!(cpu.a(), 0x80);
    assert_ne!(cpu.status() & FLAG_N, 0);
    assert_eq!(cpu.status() & FLAG_Z, 0);
    assert_ne!(cpu.status() & FLAG_V, 0);
    assert_eq!(cpu.status() & FLAG_C, 0);
}

#[test]
fn scenario_adc_carry_wrap() {
    // LDA #$FF; ADC #$01; HALT - initial C = 0
    let mut machine = boot(&[0xA9, 0xFF, 0x69, 0x01, 0x02]);
    machine.run();

    let cpu = machine.cpu();
    assert_eq!(cpu.a(), 0x00);
    assert_ne!(cpu.status() & FLAG_Z, 0);
    assert_eq!(cpu.status() & FLAG_N, 0);
    assert_eq!(cpu.status() & FLAG_V, 0);
    assert_ne!(cpu.status() & FLAG_C, 0);
}

#[test]
fn scenario_stack_push_pull() {
    // LDX #$FF; TXS; LDA #$AA; PHA; PLA; HALT
    let mut machine = boot(&[0xA2, 0xFF, 0x9A, 0xA9, 0xAA, 0x48, 0x68, 0x02]);
    machine.run();

    let cpu = machine.cpu();
    assert_eq!(cpu.sp(), 0xFF);
    assert_eq!(cpu.a(), 0xAA);
    assert_eq!(cpu.status() & FLAG_Z, 0);
    assert_ne!(cpu.status() & FLAG_N, 0);
    assert_eq!(machine.bus().peek(0x01FF), 0xAA, "stack slot keeps the byte");
}

#[test]
fn scenario_jmp_skips_halt() {
    // $E000: JMP $E005; $E003: HALT; $E004: BRK; $E005: NOP; $E006: HALT
    let _ = env_logger::builder().is_test(true).try_init();
    let config = EmuConfig {
        pacing: false,
        verbosity: Verbosity::Instructions,
        ..EmuConfig::default()
    };
    let mut machine = Odin32K::with_trace_buffer(config);
    machine.load_rom0(&rom_with_program(
        0xE000,
        &[0x4C, 0x05, 0xE0, 0x02, 0x00, 0xEA, 0x02],
    ));
    machine.power_on();
    let state = machine.run();

    assert_eq!(state, RunState::Halted);
    assert_eq!(machine.cpu().pc(), 0xE007, "halted on the second HALT");

    // The trace shows exactly one NOP executed (and no first-HALT hit)
    let trace = machine.trace_contents().unwrap();
    let nops = trace
        .lines()
        .filter(|line| line.starts_with("X ") && line.ends_with("NOP"))
        .count();
    assert_eq!(nops, 1, "exactly one NOP in the instruction trace:\n{trace}");
    assert!(trace.lines().any(|l| l == "X $E000 $4C JMP $E005"));
}

#[test]
fn scenario_jsr_rts() {
    // $E000: JSR $E006; $E003: HALT; pad; $E006: LDA #$42; RTS
    let mut machine = boot(&[0x20, 0x06, 0xE0, 0x02, 0x00, 0x00, 0xA9, 0x42, 0x60]);
    let sp_at_boot = machine.cpu().sp();
    machine.run();

    let cpu = machine.cpu();
    assert_eq!(cpu.a(), 0x42);
    assert_eq!(cpu.sp(), sp_at_boot, "JSR/RTS leaves SP where it started");
    assert_eq!(cpu.pc(), 0xE004, "halted just past the HALT byte");
}

#[test]
fn reset_vector_selects_entry_point() {
    let _ = env_logger::builder().is_test(true).try_init();
    let config = EmuConfig {
        pacing: false,
        ..EmuConfig::default()
    };
    let mut machine = Odin32K::new(config);
    // Program at $F800 instead of the usual $E000
    machine.load_rom0(&rom_with_program(0xF800, &[0x02]));
    machine.power_on();

    assert_eq!(machine.cpu().pc(), 0xF800);
    machine.run();
    assert_eq!(machine.state(), RunState::Halted);
}

#[test]
fn guest_reads_open_bus_and_ram() {
    // LDA $8000; STA $10; LDA $B000; STA $11; HALT
    let mut machine = boot(&[
        0xAD, 0x00, 0x80, 0x85, 0x10, 0xAD, 0x00, 0xB0, 0x85, 0x11, 0x02,
    ]);
    machine.run();

    let io_byte = machine.bus().peek(0x0010);
    let open_byte = machine.bus().peek(0x0011);
    for byte in [io_byte, open_byte] {
        assert_ne!(byte, 0x00, "placeholder is never $00");
        assert_ne!(byte, 0xFF, "placeholder is never $FF");
    }
}

#[test]
fn guest_writes_to_rom_are_discarded() {
    // LDA #$77; STA $E000; LDA $E000; STA $10; HALT
    let mut machine = boot(&[
        0xA9, 0x77, 0x8D, 0x00, 0xE0, 0xAD, 0x00, 0xE0, 0x85, 0x10, 0x02,
    ]);
    machine.run();

    // $E000 holds the LDA #$77 opcode ($A9), not the stored byte
    assert_eq!(machine.bus().peek(0x0010), 0xA9);
}

#[test]
fn rom1_window_is_readable() {
    let _ = env_logger::builder().is_test(true).try_init();
    let config = EmuConfig {
        pacing: false,
        ..EmuConfig::default()
    };
    let mut machine = Odin32K::new(config);
    // LDA $C123; STA $10; HALT
    machine.load_rom0(&rom_with_program(
        0xE000,
        &[0xAD, 0x23, 0xC1, 0x85, 0x10, 0x02],
    ));
    let mut rom1 = vec![0u8; ROM_SIZE];
    rom1[0x0123] = 0x6B;
    machine.load_rom1(&RomImage::from_bytes(&rom1));
    machine.power_on();
    machine.run();

    assert_eq!(machine.bus().peek(0x0010), 0x6B);
}

#[test]
fn random_ram_init_differs_from_zero() {
    let _ = env_logger::builder().is_test(true).try_init();
    let config = EmuConfig {
        pacing: false,
        ram_init: RamInit::Random,
        ..EmuConfig::default()
    };
    let mut machine = Odin32K::new(config);
    machine.load_rom0(&rom_with_program(0xE000, &[0x02]));
    machine.power_on();

    let nonzero = (0u16..0x8000)
        .filter(|&addr| machine.bus().peek(addr) != 0)
        .count();
    assert!(nonzero > 0x4000, "random fill leaves RAM mostly non-zero");
}

#[test]
fn full_verbosity_trace_records_bus_accesses_in_order() {
    let _ = env_logger::builder().is_test(true).try_init();
    let config = EmuConfig {
        pacing: false,
        verbosity: Verbosity::BusAccesses,
        ..EmuConfig::default()
    };
    let mut machine = Odin32K::with_trace_buffer(config);
    // LDA #$3C; STA $10; HALT
    machine.load_rom0(&rom_with_program(0xE000, &[0xA9, 0x3C, 0x85, 0x10, 0x02]));
    machine.power_on();
    machine.run();

    let trace = machine.trace_contents().unwrap();
    let lines: Vec<&str> = trace.lines().collect();

    // The two vector reads come first, before the I line is emitted
    assert_eq!(lines[0], "R $FFFC $00");
    assert_eq!(lines[1], "R $FFFD $E0");
    assert_eq!(lines[2], "I $E000");

    // The STA's write appears after its operand fetch, in program order
    let w_line = lines
        .iter()
        .position(|l| *l == "W $0010 $3C")
        .expect("write line present");
    let x_sta = lines
        .iter()
        .position(|l| l.starts_with("X $E002"))
        .expect("STA instruction line present");
    assert!(x_sta < w_line, "bus lines never reorder across instructions");

    // Register dumps follow each instruction
    assert!(lines.iter().any(|l| l.starts_with("> PC $E002 A $3C")));
}

#[test]
fn stop_request_is_observed_before_execution() {
    let _ = env_logger::builder().is_test(true).try_init();
    let config = EmuConfig {
        pacing: false,
        ..EmuConfig::default()
    };
    // Endless loop: JMP $E000
    let mut machine = Odin32K::new(config);
    machine.load_rom0(&rom_with_program(0xE000, &[0x4C, 0x00, 0xE0]));
    machine.power_on();

    machine.stop_handle().store(true, std::sync::atomic::Ordering::Relaxed);
    let state = machine.run();

    assert_eq!(state, RunState::Running, "stop leaves the machine un-halted");
    assert_eq!(machine.instructions(), 0, "no instruction ran after the stop");
}

#[test]
fn step_is_inert_before_power_on() {
    let config = EmuConfig {
        pacing: false,
        ..EmuConfig::default()
    };
    let mut machine = Odin32K::new(config);
    assert_eq!(machine.state(), RunState::Boot);
    assert_eq!(machine.step(), 0, "stepping in Boot does nothing");
    assert_eq!(machine.instructions(), 0);
}
