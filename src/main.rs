//! ROM runner for the 6502 core.
//!
//! Loads a cartridge, steps the CPU from $C000 printing a nestest-style trace, and stops on the
//! first unimplemented opcode. With `--log`, every step is checked against a reference trace.
//! Usage: nes6502 [path/to/game.nes] [--log nestest.log] [--max-steps N] [--quiet]

use std::error::Error;
use std::fs;
use std::path::PathBuf;

use ansi_term::Colour::{Green, Red, Yellow};
use clap::Parser;
use log::info;

use nes6502::{CPU, GamePak, trace};

#[derive(Parser, Debug)]
#[command(version, about = "Step an iNES ROM through the 6502 core", long_about = None)]
struct Args {
    /// iNES ROM to execute
    #[arg(default_value = "test/nestest.nes")]
    rom: PathBuf,

    /// Reference trace (nestest.log format) to check each step against
    #[arg(long)]
    log: Option<PathBuf>,

    /// Stop after this many instructions
    #[arg(long, default_value_t = 10_000)]
    max_steps: usize,

    /// Do not print the per-instruction trace
    #[arg(short, long)]
    quiet: bool,
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    let pak = GamePak::load(&args.rom)?;
    info!(
        "loaded {}: {} KiB PRG, {} KiB CHR",
        args.rom.display(),
        pak.prg_rom.len() / 1024,
        pak.chr_rom.len() / 1024
    );

    let reference = args.log.as_ref().map(fs::read_to_string).transpose()?;
    let mut expected_lines = reference.as_deref().map(str::lines);

    let mut cpu = CPU::new();

    for step in 0..args.max_steps {
        let instruction = cpu.decode(&pak)?;

        if let Some(lines) = expected_lines.as_mut() {
            let Some(line) = lines.next() else {
                info!("reference log exhausted after {step} steps");
                return Ok(());
            };
            if let Err(mismatch) = trace::LogLine::parse(line)?.check(&cpu, &instruction) {
                println!("{} step {step}: {mismatch}", Red.bold().paint("MISMATCH"));
                println!("  expected: {line}");
                println!("  actual:   {}", trace::format_state(&cpu, &instruction));
                return Err(mismatch.into());
            }
        }

        if !args.quiet {
            println!("{}", trace::format_state(&cpu, &instruction));
        }

        match cpu.step(&instruction) {
            Ok(()) => {}
            Err(nes6502::Error::UnimplementedOpcode { opcode, mnemonic }) => {
                println!(
                    "{} ${:04X}: {} (${:02X}) is unimplemented; ran {} instructions",
                    Yellow.bold().paint("STOP"),
                    cpu.pc,
                    mnemonic,
                    opcode,
                    step
                );
                return Ok(());
            }
            Err(e) => return Err(e.into()),
        }
    }

    println!(
        "{} step limit {} reached at ${:04X}",
        Green.bold().paint("DONE"),
        args.max_steps,
        cpu.pc
    );
    Ok(())
}
