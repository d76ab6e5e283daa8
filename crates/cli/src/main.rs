#![deny(unsafe_code)]
//! CLI binary for the confetti engine.
//!
//! Subcommands:
//! - `render <effect>` — run an effect N frames, write the last frame as PNG
//! - `list` — print available effects and palettes

mod error;

use clap::{Parser, Subcommand};
use confetti_core::{Effect, Palette};
use confetti_effects::pixel::RasterSurface;
use confetti_effects::EffectKind;
use error::CliError;
use std::path::PathBuf;
use std::process;

#[derive(Parser)]
#[command(name = "confetti", about = "Confetti engine CLI")]
struct Cli {
    /// Output as JSON instead of human-readable text.
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Run an effect for N frames and write the final frame as a PNG.
    Render {
        /// Effect name (e.g. "confetti").
        effect: String,

        /// Surface width in pixels.
        #[arg(short = 'W', long, default_value_t = 800)]
        width: usize,

        /// Surface height in pixels.
        #[arg(short = 'H', long, default_value_t = 600)]
        height: usize,

        /// Number of frames to tick.
        #[arg(short, long, default_value_t = 120)]
        frames: usize,

        /// PRNG seed for deterministic output.
        #[arg(long, default_value_t = 42)]
        seed: u64,

        /// Palette name (festive, pastel, neon, gold, winter).
        #[arg(short, long, default_value = "festive")]
        palette: String,

        /// Output file path.
        #[arg(short, long, default_value = "frame.png")]
        output: PathBuf,

        /// Effect parameters as a JSON string.
        #[arg(long, default_value = "{}")]
        params: String,
    },
    /// List available effects and palettes.
    List,
}

fn run(cli: Cli) -> Result<(), CliError> {
    match cli.command {
        Command::List => {
            let effects = EffectKind::list_effects();
            let palettes = Palette::list_names();
            if cli.json {
                let info = serde_json::json!({
                    "effects": effects,
                    "palettes": palettes,
                });
                println!("{}", serde_json::to_string_pretty(&info)?);
            } else {
                println!("Effects:");
                for name in effects {
                    println!("  {name}");
                }
                println!("Palettes:");
                println!("  {}", palettes.join(", "));
            }
        }
        Command::Render {
            effect,
            width,
            height,
            frames,
            seed,
            palette,
            output,
            params,
        } => {
            let params: serde_json::Value = serde_json::from_str(&params)
                .map_err(|e| CliError::Input(format!("invalid --params JSON: {e}")))?;

            let palette =
                Palette::from_name(&palette).map_err(|e| CliError::Input(e.to_string()))?;

            let mut surface = RasterSurface::new(width, height)?;
            let mut eff = EffectKind::from_name(
                &effect,
                width as f64,
                height as f64,
                seed,
                palette,
                &params,
            )?;

            eff.start();
            (0..frames).try_for_each(|_| eff.tick(&mut surface))?;

            confetti_effects::snapshot::write_png(&surface, &output)?;

            if cli.json {
                let info = serde_json::json!({
                    "effect": effect,
                    "width": width,
                    "height": height,
                    "frames": frames,
                    "seed": seed,
                    "output": output.display().to_string(),
                });
                println!("{}", serde_json::to_string_pretty(&info)?);
            } else {
                eprintln!(
                    "rendered {effect} ({width}x{height}, {frames} frames, seed {seed}) -> {}",
                    output.display()
                );
            }
        }
    }

    Ok(())
}

fn main() {
    let cli = Cli::parse();
    let json_mode = cli.json;
    if let Err(e) = run(cli) {
        if json_mode {
            let j = serde_json::json!({"error": e.to_string(), "exit_code": e.exit_code()});
            eprintln!("{}", serde_json::to_string_pretty(&j).unwrap_or_default());
        } else {
            eprintln!("error: {e}");
        }
        process::exit(e.exit_code());
    }
}
