use std::io::Read;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};

use caesar_shift::algos::caesar::{normalize_shift, Caesar};
use caesar_shift::traits::{Decryptor, Encryptor};
use caesar_shift::utils::parse_shift;

/// Caesar cipher text encoder/decoder
#[derive(Parser, Debug)]
#[command(name = "caesar", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Shift letters forward
    Encode(TransformArgs),
    /// Shift letters back
    Decode(TransformArgs),
}

#[derive(Args, Debug)]
struct TransformArgs {
    /// Shift amount; malformed values fall back to 0
    #[arg(short, long, default_value = "3", allow_hyphen_values = true)]
    shift: String,

    /// Text to transform; reads stdin when omitted
    text: Option<String>,

    /// Copy the result to the system clipboard
    #[arg(long)]
    copy: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .init();

    let cli = Cli::parse();
    let (args, decode) = match cli.command {
        Command::Encode(args) => (args, false),
        Command::Decode(args) => (args, true),
    };

    let text = match args.text {
        Some(text) => text,
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("failed to read stdin")?;
            buf
        }
    };

    let shift = parse_shift(&args.shift);
    tracing::debug!(shift, normalized = normalize_shift(shift), decode, "transforming input");

    let cipher = Caesar::new(shift);
    let output = if decode {
        cipher.decrypt(&text)
    } else {
        cipher.encrypt(&text)
    };

    if args.copy {
        copy_to_clipboard(&output);
    }

    // Mirror the input's trailing newline so piped text stays intact.
    if output.ends_with('\n') {
        print!("{output}");
    } else {
        println!("{output}");
    }

    Ok(())
}

fn copy_to_clipboard(text: &str) {
    if text.is_empty() {
        return;
    }
    match arboard::Clipboard::new().and_then(|mut clipboard| clipboard.set_text(text.to_owned())) {
        Ok(()) => tracing::debug!("copied output to clipboard"),
        Err(err) => tracing::warn!("clipboard unavailable: {err}"),
    }
}
