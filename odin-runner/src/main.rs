//! PoppyEMU - a research emulator for the Odin32K.
//!
//! Runs an Odin32K with ROM0 (and optionally ROM1) loaded from raw
//! 8192-byte binaries. Trace output goes to stdout; diagnostics and
//! errors go to stderr.

use std::path::PathBuf;
use std::process;

use machine_odin32k::{EmuConfig, Odin32K, RamInit, RomImage, RunState, Verbosity};

// ---------------------------------------------------------------------------
// CLI argument parsing
// ---------------------------------------------------------------------------

struct CliArgs {
    rom0: PathBuf,
    rom1: Option<PathBuf>,
    config: EmuConfig,
}

fn usage() -> ! {
    eprintln!("Usage: poppyemu [OPTIONS] ROM0 [ROM1]");
    eprintln!();
    eprintln!("ROM images are raw 8192-byte binaries; short files are zero-padded.");
    eprintln!("ROM0 maps at $E000-$FFFF (vectors in the top six bytes),");
    eprintln!("ROM1 at $C000-$DFFF.");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --clock-hz N      target CPU clock in Hz (default 4000000)");
    eprintln!("  --no-pacing       free-run instead of pacing to the clock");
    eprintln!("  --ram-init MODE   power-on RAM fill: zero | random (default zero)");
    eprintln!("  --verbose N       trace level 0-3 (silent, instructions,");
    eprintln!("                    registers, bus accesses)");
    eprintln!("  -v, -vv, -vvv     shorthand for --verbose 1/2/3");
    eprintln!("  --step            pause for a line of input before each instruction");
    eprintln!("  --wait            pause for a line of input before starting");
    process::exit(1);
}

fn parse_args() -> CliArgs {
    let args: Vec<String> = std::env::args().collect();
    let mut config = EmuConfig::default();
    let mut roms: Vec<PathBuf> = Vec::new();

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--clock-hz" => {
                i += 1;
                match args.get(i).and_then(|s| s.parse::<u32>().ok()) {
                    Some(hz) if hz > 0 => config.clock_hz = hz,
                    _ => {
                        eprintln!("poppyemu: --clock-hz needs a positive integer");
                        usage();
                    }
                }
            }
            "--no-pacing" => {
                config.pacing = false;
            }
            "--ram-init" => {
                i += 1;
                match args.get(i).map(String::as_str) {
                    Some("zero") => config.ram_init = RamInit::Zero,
                    Some("random") => config.ram_init = RamInit::Random,
                    _ => {
                        eprintln!("poppyemu: --ram-init needs 'zero' or 'random'");
                        usage();
                    }
                }
            }
            "--verbose" => {
                i += 1;
                match args.get(i).and_then(|s| s.parse::<u8>().ok()) {
                    Some(level) if level <= 3 => {
                        config.verbosity = Verbosity::from_level(level)
                    }
                    _ => {
                        eprintln!("poppyemu: --verbose needs a level 0-3");
                        usage();
                    }
                }
            }
            "-v" => config.verbosity = Verbosity::Instructions,
            "-vv" => config.verbosity = Verbosity::Registers,
            "-vvv" => config.verbosity = Verbosity::BusAccesses,
            "--step" => {
                config.step_mode = true;
            }
            "--wait" => {
                config.wait_at_begin = true;
            }
            "--help" | "-h" => usage(),
            arg if arg.starts_with('-') => {
                eprintln!("poppyemu: unknown option '{arg}'");
                usage();
            }
            rom => roms.push(PathBuf::from(rom)),
        }
        i += 1;
    }

    match roms.len() {
        1 => CliArgs {
            rom0: roms.remove(0),
            rom1: None,
            config,
        },
        2 => {
            let rom1 = roms.pop();
            CliArgs {
                rom0: roms.remove(0),
                rom1,
                config,
            }
        }
        _ => {
            eprintln!("poppyemu: expected ROM0 and optionally ROM1");
            usage();
        }
    }
}

fn main() {
    env_logger::init();
    let cli = parse_args();

    let rom0 = RomImage::load(&cli.rom0).unwrap_or_else(|e| {
        eprintln!("poppyemu: {e}");
        process::exit(1);
    });
    log::info!(
        "{}: reset vector ${:04X}",
        cli.rom0.display(),
        rom0.reset_vector()
    );

    let mut machine = Odin32K::new(cli.config);
    machine.load_rom0(&rom0);

    if let Some(rom1_path) = &cli.rom1 {
        let rom1 = RomImage::load(rom1_path).unwrap_or_else(|e| {
            eprintln!("poppyemu: {e}");
            process::exit(1);
        });
        machine.load_rom1(&rom1);
    }

    machine.power_on();
    let state = machine.run();

    match state {
        RunState::Halted => {
            log::info!(
                "clean halt: {} instructions, {} cycles",
                machine.instructions(),
                machine.cycles()
            );
            process::exit(0);
        }
        // The run loop only returns un-halted when the stop flag was
        // raised; report an interrupted run, not a clean halt
        state => {
            log::info!(
                "interrupted in state {state:?} after {} instructions",
                machine.instructions()
            );
            process::exit(130);
        }
    }
}
