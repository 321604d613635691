use std::path::PathBuf;
use std::process;

use anyhow::Context;
use clap::Parser;
use log::LevelFilter;
use rsa_blocks::rsa::{generate_keypair_with, KeyGenConfig, DEFAULT_ROUNDS};
use rsa_blocks::util::{format_blocks, read_message, write_blocks, BlockFormat};

/// Generate an RSA key pair, encrypt a message block by block and decrypt it again
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Message to encrypt (ASCII)
    #[arg(default_value = "Hallo Welt", conflicts_with = "input")]
    message: String,

    /// Bit length of each prime
    #[arg(short, long, default_value_t = 2048)]
    bits: u32,

    /// Miller-Rabin rounds per primality check
    #[arg(short, long, default_value_t = DEFAULT_ROUNDS)]
    rounds: u32,

    /// Read the message from a file instead
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Also write the encrypted blocks to a file
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Print blocks as hex instead of decimal
    #[arg(long)]
    hex: bool,
}

fn run(args: Args) -> anyhow::Result<()> {
    let message = match &args.input {
        Some(path) => read_message(path)
            .with_context(|| format!("cannot read message from {}", path.display()))?,
        None => args.message.clone(),
    };
    let format = if args.hex {
        BlockFormat::Hex
    } else {
        BlockFormat::Decimal
    };

    let config = KeyGenConfig::default()
        .with_bit_length(args.bits)
        .with_rounds(args.rounds);
    log::info!("generating key pair from two {}-bit primes", config.bit_length);
    let keypair = generate_keypair_with(&config, &mut rand::rngs::OsRng)
        .context("key generation failed")?;

    let blocks = keypair
        .public_key
        .encrypt(&message)
        .context("encryption failed")?;
    let decrypted = keypair
        .private_key
        .decrypt(&blocks)
        .context("decryption failed")?;

    if let Some(path) = &args.output {
        write_blocks(path, &blocks, format)
            .with_context(|| format!("cannot write blocks to {}", path.display()))?;
        log::info!("wrote {} block(s) to {}", blocks.len(), path.display());
    }

    println!("Encrypted Message:");
    print!("{}", format_blocks(&blocks, format));
    println!("Decrypted Message: {}", decrypted);
    Ok(())
}

fn main() {
    env_logger::builder()
        .filter_level(LevelFilter::Info)
        .parse_default_env()
        .init();

    if let Err(e) = run(Args::parse()) {
        log::error!("{:#}", e);
        process::exit(1);
    }
}
