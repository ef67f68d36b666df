use anyhow::{Context, bail};
use clap::{Parser, Subcommand};
use rust_qr_gen::config;
use rust_qr_gen::{Encoder, RenderOptions, parse_hex_color, read, render, render_text};
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "qrtool", version, about = "RustQR encoder CLI tools")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Encode text and write a PNG image
    Encode {
        #[arg(long)]
        text: String,
        #[arg(long)]
        output: PathBuf,
        /// Pixels per module (defaults to QR_RENDER_SCALE or 8)
        #[arg(long)]
        scale: Option<u32>,
        /// Quiet zone in modules
        #[arg(long, default_value_t = config::QUIET_ZONE_MODULES)]
        quiet: u32,
        #[arg(long, default_value = "#000000")]
        fg: String,
        #[arg(long, default_value = "#ffffff")]
        bg: String,
    },
    /// Print the symbol to the terminal
    Ascii {
        #[arg(long)]
        text: String,
    },
    /// Show version, chosen mask and every mask's penalty
    Inspect {
        #[arg(long)]
        text: String,
    },
    /// Encode, read back and compare
    Verify {
        #[arg(long)]
        text: String,
    },
}

fn main() -> anyhow::Result<()> {
    init_tracing();
    let cli = Cli::parse();

    match cli.command {
        Command::Encode {
            text,
            output,
            scale,
            quiet,
            fg,
            bg,
        } => encode_cmd(&text, &output, scale, quiet, &fg, &bg),
        Command::Ascii { text } => ascii_cmd(&text),
        Command::Inspect { text } => inspect_cmd(&text),
        Command::Verify { text } => verify_cmd(&text),
    }
}

fn init_tracing() {
    let default_level = if config::debug_enabled() { "debug" } else { "warn" };
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn encode_cmd(
    text: &str,
    output: &Path,
    scale: Option<u32>,
    quiet: u32,
    fg: &str,
    bg: &str,
) -> anyhow::Result<()> {
    let options = RenderOptions::new(
        scale.unwrap_or_else(config::render_scale),
        quiet,
        parse_hex_color(fg)?,
        parse_hex_color(bg)?,
    )?;

    let start = Instant::now();
    let code = Encoder::new().encode(text)?;
    let image = render(&code, &options);
    image
        .save(output)
        .with_context(|| format!("failed to write {}", output.display()))?;

    println!(
        "Wrote {} ({}x{} px): version {}, mask {}, {:.2?}",
        output.display(),
        image.width(),
        image.height(),
        code.version().number(),
        code.mask_pattern().id(),
        start.elapsed()
    );
    Ok(())
}

fn ascii_cmd(text: &str) -> anyhow::Result<()> {
    let code = Encoder::new().encode(text)?;
    print!("{}", render_text(&code, config::QUIET_ZONE_MODULES as usize));
    Ok(())
}

fn inspect_cmd(text: &str) -> anyhow::Result<()> {
    let report = Encoder::new().encode_with_report(text.as_bytes())?;
    let code = &report.code;
    println!("Bytes:   {}", text.len());
    println!(
        "Version: {} ({}x{})",
        code.version().number(),
        code.size(),
        code.size()
    );
    println!("Mask:    {}", code.mask_pattern().id());
    println!("Dark:    {}", code.modules().count_dark());
    println!();
    println!("mask  runs  blocks  balance  total");
    for (id, penalty) in report.penalties.iter().enumerate() {
        let marker = if id == code.mask_pattern().id() as usize {
            "*"
        } else {
            ""
        };
        println!(
            "{:>4}  {:>4}  {:>6}  {:>7}  {:>5} {}",
            id,
            penalty.runs,
            penalty.blocks,
            penalty.balance,
            penalty.total(),
            marker
        );
    }
    Ok(())
}

fn verify_cmd(text: &str) -> anyhow::Result<()> {
    let code = Encoder::new().encode(text)?;
    let decoded = read(&code).context("encoded symbol could not be read back")?;
    let round_trip = decoded.text()?;
    if round_trip != text {
        bail!("round trip mismatch: got {:?}", round_trip);
    }
    println!(
        "OK: version {}, mask {}, {} bytes",
        decoded.version.number(),
        decoded.mask_pattern.id(),
        decoded.bytes.len()
    );
    Ok(())
}
