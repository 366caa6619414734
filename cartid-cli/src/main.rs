//! cartid CLI
//!
//! Command-line interface for identifying cartridge dumps by their header
//! metadata.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use cartid_lib::{CartridgeLoader, CartridgeMetadata, Platform};

#[derive(Parser)]
#[command(name = "cartid")]
#[command(about = "Identify cartridge dumps by their header metadata", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Identify one or more cartridge images
    Identify {
        /// Image files to identify
        #[arg(required = true)]
        files: Vec<PathBuf>,

        /// Emit metadata as JSON, one object per file
        #[arg(long)]
        json: bool,
    },

    /// List all supported platforms
    List,
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    let failures = match cli.command {
        Commands::Identify { files, json } => run_identify(&files, json),
        Commands::List => {
            run_list();
            0
        }
    };

    if failures > 0 {
        std::process::exit(1);
    }
}

fn run_identify(files: &[PathBuf], json: bool) -> usize {
    let loader = CartridgeLoader::new();
    let mut failures = 0;

    for path in files {
        match loader.load(path) {
            Ok(meta) if json => match serde_json::to_string_pretty(&meta) {
                Ok(out) => println!("{out}"),
                Err(err) => {
                    eprintln!("{}: serialization failed: {err}", path.display());
                    failures += 1;
                }
            },
            Ok(meta) => print_metadata(path, &meta),
            Err(err) => {
                eprintln!(
                    "{} {}: {err}",
                    "\u{26A0}".if_supports_color(Stdout, |t| t.yellow()),
                    path.display()
                );
                failures += 1;
            }
        }
    }

    failures
}

fn print_metadata(path: &PathBuf, meta: &CartridgeMetadata) {
    println!(
        "{}: {}",
        path.display().if_supports_color(Stdout, |t| t.bold()),
        meta.platform
            .display_name()
            .if_supports_color(Stdout, |t| t.cyan())
    );

    print_field("name", meta.internal_name.as_deref());
    match (&meta.game_code, &meta.game_id) {
        (Some(code), Some(id)) => println!("  {:<8} {code} ({id})", "code:"),
        (Some(code), None) => print_field("code", Some(code)),
        _ => print_field("code", None),
    }
    print_field("region", meta.region);
    print_field("unit", meta.unit);

    if let Some(cart) = &meta.cartridge {
        if let Some(map_speed) = &cart.map_speed {
            match map_speed.speed {
                Some(speed) => println!("  {:<8} {} ({speed})", "mapping:", map_speed.mapping),
                None => println!("  {:<8} {}", "mapping:", map_speed.mapping),
            }
        }
        if let Some(hw) = &cart.hardware {
            let mut parts = Vec::new();
            if let Some(coproc) = hw.coprocessor {
                parts.push(coproc.to_string());
            }
            if hw.has_rom {
                parts.push("rom".to_string());
            }
            if hw.has_ram {
                parts.push("ram".to_string());
            }
            if hw.has_battery {
                parts.push("battery".to_string());
            }
            println!("  {:<8} {}", "chipset:", parts.join(" + "));
        }
        if let Some(rom_size) = cart.rom_size {
            println!("  {:<8} {}", "rom:", format_size(rom_size));
        }
        if let Some(ram_size) = cart.ram_size {
            println!("  {:<8} {}", "ram:", format_size(ram_size));
        }
    }

    println!("  {:<8} {}", "size:", format_size(meta.size));
    println!(
        "  {:<8} {}",
        "sha1:",
        meta.fingerprint
            .as_str()
            .if_supports_color(Stdout, |t| t.dimmed())
    );
}

fn print_field(label: &str, value: Option<&str>) {
    let shown = value.unwrap_or("-");
    println!("  {:<8} {shown}", format!("{label}:"));
}

fn format_size(bytes: u64) -> String {
    if bytes >= 1024 * 1024 && bytes % (1024 * 1024) == 0 {
        format!("{} MiB", bytes / (1024 * 1024))
    } else if bytes >= 1024 && bytes % 1024 == 0 {
        format!("{} KiB", bytes / 1024)
    } else {
        format!("{bytes} bytes")
    }
}

fn run_list() {
    for platform in Platform::all() {
        println!(
            "{:<6} {} ({})",
            platform
                .short_name()
                .if_supports_color(Stdout, |t| t.cyan()),
            platform.display_name(),
            platform.file_extensions().join(", ")
        );
    }
}
