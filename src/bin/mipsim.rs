// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 itsakeyfut
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use std::io::{self, BufRead, Write};

use clap::Parser;
use log::{error, info};
use mipsim::core::config::BootConfig;
use mipsim::core::cpu::Disassembler;
use mipsim::core::error::Result;
use mipsim::core::loader::Image;
use mipsim::core::system::System;

/// MIPS-32 instruction-level simulator
#[derive(Parser)]
#[command(name = "mipsim")]
#[command(about = "MIPS-32 instruction-execution simulator", long_about = None)]
struct Args {
    /// Path to a raw flat program image
    image: String,

    /// Address to load the image at
    #[arg(short = 'l', long, default_value = "0x00400000")]
    load_addr: String,

    /// Initial program counter; defaults to the load address
    #[arg(short = 'e', long)]
    entry: Option<String>,

    /// Number of instructions to execute in one-shot mode; if omitted,
    /// drops into the interactive shell instead
    #[arg(short = 'n', long)]
    instructions: Option<u64>,

    /// Optional TOML boot config (overrides image/load_addr/entry)
    #[arg(short = 'c', long)]
    config: Option<String>,
}

fn parse_u32(value: &str) -> std::result::Result<u32, std::num::ParseIntError> {
    if let Some(hex) = value.strip_prefix("0x").or_else(|| value.strip_prefix("0X")) {
        u32::from_str_radix(hex, 16)
    } else {
        value.parse()
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    info!("mipsim v{}", env!("CARGO_PKG_VERSION"));

    let args = Args::parse();

    let config = if let Some(path) = &args.config {
        BootConfig::load_file(path)?.apply_env_overrides()
    } else {
        let load_addr = parse_u32(&args.load_addr).unwrap_or(mipsim::core::cpu::DEFAULT_PC);
        let entry = args.entry.as_deref().and_then(|e| parse_u32(e).ok());
        BootConfig {
            load_addr,
            entry,
            image: args.image.clone(),
            instruction_limit: args.instructions.unwrap_or(100_000),
            log_level: "info".to_string(),
        }
        .apply_env_overrides()
    };

    info!("loading image from: {}", config.image);
    let image = Image::load_file(&config.image).map_err(|e| {
        error!("failed to load image: {}", e);
        e
    })?;
    info!("image loaded: {} bytes", image.len());

    let mut system = System::new();
    system.boot(&config, &image)?;
    info!("entry point: 0x{:08X}", system.pc());

    if let Some(n) = args.instructions {
        run_one_shot(&mut system, n)
    } else {
        run_interactive(&mut system)
    }
}

fn run_one_shot(system: &mut System, instructions: u64) -> Result<()> {
    let executed = system.step_n(instructions)?;
    info!("executed {} instructions", executed);
    info!("final pc: 0x{:08X}", system.pc());
    info!("halted: {}", !system.running());
    Ok(())
}

fn run_interactive(system: &mut System) -> Result<()> {
    println!("mipsim interactive shell. Commands: run, step [n], reg, mem <addr> [count], quit");
    let stdin = io::stdin();
    let mut line = String::new();

    loop {
        print!("(mipsim) ");
        io::stdout().flush().ok();
        line.clear();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        let mut parts = line.split_whitespace();
        match parts.next() {
            Some("run") => {
                let executed = system.run(u64::MAX)?;
                println!("ran {} instructions, halted={}", executed, !system.running());
            }
            Some("step") => {
                let n: u64 = parts.next().and_then(|s| s.parse().ok()).unwrap_or(1);
                let executed = system.step_n(n)?;
                println!("executed {} instructions, pc=0x{:08X}", executed, system.pc());
            }
            Some("reg") => print_registers(system),
            Some("mem") => {
                if let Some(addr_str) = parts.next() {
                    let addr = parse_u32(addr_str).unwrap_or(0);
                    let count: u32 = parts.next().and_then(|s| s.parse().ok()).unwrap_or(4);
                    print_memory(system, addr, count);
                } else {
                    println!("usage: mem <addr> [count]");
                }
            }
            Some("quit") | Some("exit") => break,
            Some(other) => println!("unknown command: {}", other),
            None => {}
        }
    }
    Ok(())
}

fn print_registers(system: &System) {
    let cpu = system.cpu();
    for i in 0u8..32 {
        print!("r{:<2}=0x{:08X} ", i, cpu.reg(i));
        if i % 4 == 3 {
            println!();
        }
    }
    println!("pc =0x{:08X} hi=0x{:08X} lo=0x{:08X}", cpu.pc(), cpu.hi(), cpu.lo());
    let instr = cpu.current_instruction();
    println!("last: {}", Disassembler::disassemble(instr, cpu.pc()));
}

fn print_memory(system: &System, addr: u32, count: u32) {
    let mem = system.memory();
    for i in 0..count {
        let a = addr.wrapping_add(i * 4);
        match mem.read32(a) {
            Ok(word) => println!("0x{:08X}: 0x{:08X}", a, word),
            Err(e) => println!("0x{:08X}: <error: {}>", a, e),
        }
    }
}
