use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use env_logger::Env;
use log::{LevelFilter, debug};
use shroud_core::{AlphabetRegistry, Shroud, token};
use std::time::Instant;

#[derive(Parser)]
#[command(
    name = "shroud",
    author,
    version,
    about = "Configurable-alphabet stream cipher with length-concealing padding"
)]
struct Cli {
    #[arg(long, global = true)]
    debug: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the built-in alphabets.
    Alphabets,
    /// Draw a secure random token, e.g. to use as a secret key.
    Token {
        #[arg(long, default_value = "alphanum")]
        alphabet: String,
        #[arg(long, value_name = "N", default_value_t = 32)]
        length: usize,
    },
    /// Encode a message with a repeating key.
    Encode {
        #[arg(long)]
        alphabet: String,
        #[arg(long)]
        key: String,
        #[arg(long, value_name = "TEXT")]
        message: String,
        /// Also print the plaintext signature.
        #[arg(long)]
        sign: bool,
    },
    /// Decode a message produced by `encode`.
    Decode {
        #[arg(long)]
        alphabet: String,
        #[arg(long)]
        key: String,
        #[arg(long, value_name = "TEXT")]
        message: String,
    },
    /// Encode with length-concealing padding to an exact size.
    Wencode {
        #[arg(long)]
        alphabet: String,
        #[arg(long)]
        key: String,
        #[arg(long, value_name = "TEXT")]
        message: String,
        #[arg(long, value_name = "N")]
        target: usize,
        /// Also print the plaintext signature.
        #[arg(long)]
        sign: bool,
    },
    /// Strip padding from a message produced by `wencode`.
    Wdecode {
        #[arg(long)]
        alphabet: String,
        #[arg(long)]
        key: String,
        #[arg(long, value_name = "TEXT")]
        message: String,
    },
    /// Round-trip every built-in alphabet with random keys and texts.
    Selftest {
        #[arg(long, default_value_t = 4)]
        rounds: usize,
        /// Print every generated vector, not just failures.
        #[arg(long)]
        show_vectors: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.debug);
    match cli.command {
        Commands::Alphabets => cmd_alphabets(),
        Commands::Token { alphabet, length } => cmd_token(&alphabet, length),
        Commands::Encode {
            alphabet,
            key,
            message,
            sign,
        } => cmd_encode(&alphabet, &key, &message, sign),
        Commands::Decode {
            alphabet,
            key,
            message,
        } => cmd_decode(&alphabet, &key, &message),
        Commands::Wencode {
            alphabet,
            key,
            message,
            target,
            sign,
        } => cmd_wencode(&alphabet, &key, &message, target, sign),
        Commands::Wdecode {
            alphabet,
            key,
            message,
        } => cmd_wdecode(&alphabet, &key, &message),
        Commands::Selftest {
            rounds,
            show_vectors,
        } => cmd_selftest(rounds, show_vectors),
    }
}

fn init_logging(debug: bool) {
    let default = if debug { "debug" } else { "info" };
    let mut builder = env_logger::Builder::from_env(Env::default().default_filter_or(default));
    builder.format_timestamp(None);
    if debug {
        builder.filter_level(LevelFilter::Debug);
    }
    let _ = builder.try_init();
}

fn build_cipher(alphabet: &str, key: &str) -> Result<Shroud> {
    Shroud::new(alphabet, key)
        .with_context(|| format!("building cipher over alphabet '{alphabet}'"))
}

fn cmd_alphabets() -> Result<()> {
    for spec in AlphabetRegistry::builtin().entries() {
        println!("{:<18} {} symbols", spec.name, spec.symbols.chars().count());
    }
    Ok(())
}

fn cmd_token(alphabet: &str, length: usize) -> Result<()> {
    let drawn = token(alphabet, length)
        .with_context(|| format!("drawing token from alphabet '{alphabet}'"))?;
    println!("{drawn}");
    Ok(())
}

fn cmd_encode(alphabet: &str, key: &str, message: &str, sign: bool) -> Result<()> {
    let mut cipher = build_cipher(alphabet, key)?;
    if sign {
        let (ciphertext, signature) = cipher.encode_signed(message)?;
        println!("{ciphertext}");
        println!("signature: {signature}");
    } else {
        println!("{}", cipher.encode(message)?);
    }
    Ok(())
}

fn cmd_decode(alphabet: &str, key: &str, message: &str) -> Result<()> {
    let mut cipher = build_cipher(alphabet, key)?;
    println!("{}", cipher.decode(message)?);
    Ok(())
}

fn cmd_wencode(alphabet: &str, key: &str, message: &str, target: usize, sign: bool) -> Result<()> {
    let mut cipher = build_cipher(alphabet, key)?;
    if sign {
        let (ciphertext, signature) = cipher.wencode_signed(message, target)?;
        println!("{ciphertext}");
        println!("signature: {signature}");
    } else {
        println!("{}", cipher.wencode(message, target)?);
    }
    Ok(())
}

fn cmd_wdecode(alphabet: &str, key: &str, message: &str) -> Result<()> {
    let mut cipher = build_cipher(alphabet, key)?;
    let recovered = cipher.wdecode(message)?;
    if recovered.is_empty() {
        bail!("no padding envelope found; wrong key or alphabet?");
    }
    println!("{recovered}");
    Ok(())
}

fn cmd_selftest(rounds: usize, show_vectors: bool) -> Result<()> {
    let started = Instant::now();
    let registry = AlphabetRegistry::builtin();
    let mut vectors = 0usize;
    for spec in registry.entries() {
        let alphabet = registry.get(spec.name)?;
        let key_len = alphabet.len() * 2;
        for round in 0..rounds {
            for text_len in [key_len / 2 + 3, key_len * 2] {
                let key = alphabet.token(key_len);
                let text = alphabet.token(text_len);
                let mut cipher = build_cipher(spec.name, &key)?;

                let (ciphertext, signature) = cipher.encode_signed(&text)?;
                let decoded = cipher.decode(&ciphertext)?;
                if decoded != text || !cipher.verify(&signature) {
                    report_vector(spec.name, round, &key, &text, &ciphertext, &decoded);
                    bail!("encode/decode self-test failed for alphabet '{}'", spec.name);
                }

                let target = text_len * 3;
                let (padded, signature) = cipher.wencode_signed(&text, target)?;
                let recovered = cipher.wdecode(&padded)?;
                if recovered != text
                    || !cipher.verify(&signature)
                    || padded.chars().count() != target
                {
                    report_vector(spec.name, round, &key, &text, &padded, &recovered);
                    bail!("wencode/wdecode self-test failed for alphabet '{}'", spec.name);
                }

                if show_vectors {
                    report_vector(spec.name, round, &key, &text, &padded, &recovered);
                }
                vectors += 2;
                debug!(
                    "selftest alphabet={} round={} text_len={} target={}",
                    spec.name, round, text_len, target
                );
            }
        }
    }
    println!(
        "self-test passed: {} vectors across {} alphabets in {:.2?}",
        vectors,
        registry.entries().len(),
        started.elapsed()
    );
    Ok(())
}

fn report_vector(
    alphabet: &str,
    round: usize,
    key: &str,
    text: &str,
    encoded: &str,
    decoded: &str,
) {
    println!("{}", ".".repeat(72));
    println!("alphabet:  {alphabet} (round {round})");
    println!("key:       {key}");
    println!("text:      {text}");
    println!("encoded:   {encoded}");
    println!("decoded:   {decoded}");
}
