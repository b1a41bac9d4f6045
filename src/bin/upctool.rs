use clap::{Parser, Subcommand, ValueEnum};
use rust_upcean::decoder::checksum::{compute_check_digit, expand_upce_to_upca};
use rust_upcean::tools::synth::synth_luma_row;
use rust_upcean::tools::{LumaImage, ToolError, load_luma, save_luma, scan_image};
use rust_upcean::{BarcodeFormat, DecodeHints, UpcEanFormat};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::time::Instant;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "upctool", version, about = "RustUPCEAN CLI tools")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Clone, Copy, ValueEnum)]
enum FormatArg {
    Ean13,
    Ean8,
    Upca,
    Upce,
}

impl From<FormatArg> for BarcodeFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Ean13 => BarcodeFormat::Ean13,
            FormatArg::Ean8 => BarcodeFormat::Ean8,
            FormatArg::Upca => BarcodeFormat::UpcA,
            FormatArg::Upce => BarcodeFormat::UpcE,
        }
    }
}

#[derive(Subcommand)]
enum Command {
    /// Scan an image for a UPC/EAN symbol
    Decode {
        #[arg(long)]
        image: PathBuf,
        /// Scan every row, read rows reversed and widen tolerances
        #[arg(long)]
        try_harder: bool,
        /// Restrict to one family (default: all)
        #[arg(long, value_enum)]
        format: Option<FormatArg>,
    },
    /// Render an ideal symbol to an image file
    Synth {
        #[arg(long, value_enum)]
        format: FormatArg,
        /// Full digit string, or the payload without its check digit
        #[arg(long)]
        code: String,
        /// Pixels per module
        #[arg(long, default_value_t = 3)]
        unit: usize,
        #[arg(long, default_value_t = 60)]
        height: usize,
        #[arg(long)]
        out: PathBuf,
    },
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let outcome = match cli.command {
        Command::Decode {
            image,
            try_harder,
            format,
        } => decode_cmd(&image, try_harder, format),
        Command::Synth {
            format,
            code,
            unit,
            height,
            out,
        } => synth_cmd(format.into(), &code, unit, height, &out),
    };

    match outcome {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::from(1),
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::from(2)
        }
    }
}

fn decode_cmd(image: &Path, try_harder: bool, format: Option<FormatArg>) -> Result<bool, ToolError> {
    let img = load_luma(image)?;
    let formats: Vec<UpcEanFormat> = match format {
        Some(f) => vec![BarcodeFormat::from(f).into()],
        None => UpcEanFormat::ALL.to_vec(),
    };
    let hints = if try_harder {
        DecodeHints::try_harder()
    } else {
        DecodeHints::from_env()
    };

    println!("Image: {} ({}x{})", image.display(), img.width, img.height);
    let started = Instant::now();
    let hit = scan_image(&img, &formats, &hints);
    let elapsed = started.elapsed();

    match hit {
        Some(hit) => {
            println!(
                "{}: {} (row {}, pixels {}..{}{})",
                hit.result.format,
                hit.result.text,
                hit.row,
                hit.result.span.begin,
                hit.result.span.end,
                if hit.reversed { ", reversed" } else { "" }
            );
            println!("Decoded in {:.2?}", elapsed);
            Ok(true)
        }
        None => {
            println!("No UPC/EAN symbol found ({:.2?})", elapsed);
            Ok(false)
        }
    }
}

fn synth_cmd(
    format: BarcodeFormat,
    code: &str,
    unit: usize,
    height: usize,
    out: &Path,
) -> Result<bool, ToolError> {
    let text = if code.len() + 1 == format.digit_count() {
        let payload = match format {
            // The UPC-E check digit is computed over its UPC-A expansion
            BarcodeFormat::UpcE => expand_upce_to_upca(code)?,
            _ => code.to_string(),
        };
        format!("{code}{}", compute_check_digit(&payload)?)
    } else {
        code.to_string()
    };

    let row = synth_luma_row(format, &text, unit.max(1))?;
    let img = LumaImage::from_repeated_row(&row, height.max(1));
    save_luma(out, &img)?;
    println!("Wrote {} {} to {} ({}x{})", format, text, out.display(), img.width, img.height);
    Ok(true)
}
