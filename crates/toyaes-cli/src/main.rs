use clap::{Parser, Subcommand};

mod enc;
mod hex;
mod key_schedule;
mod mul_table;

/// toyaes command-line tool: AES-GCM file encryption and AES table dumps.
#[derive(Parser)]
#[command(name = "toyaes")]
#[command(version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print GF(2^8) multiplication tables for MixColumns coefficients.
    MulTable {
        /// Coefficient in hex (repeatable). Defaults to 02 03 0e 0b 0d 09.
        #[arg(long = "coeff")]
        coeffs: Vec<String>,
    },
    /// Print the expanded AES key schedule, one round key per line.
    KeySchedule {
        /// Key in hex (16, 24 or 32 bytes).
        key: String,
    },
    /// Authenticated encryption/decryption of a file.
    Enc {
        /// Cipher algorithm (aes-128-gcm, aes-192-gcm, aes-256-gcm).
        #[arg(short, long, default_value = "aes-256-gcm")]
        cipher: String,
        /// Decrypt mode (key is read from TOYAES_KEY).
        #[arg(short, long)]
        decrypt: bool,
        /// Input file.
        #[arg(short, long)]
        input: String,
        /// Output file.
        #[arg(short, long)]
        output: String,
        /// Additional authenticated data.
        #[arg(long, default_value = "")]
        aad: String,
    },
}

fn main() {
    let cli = Cli::parse();

    let result = match &cli.command {
        Commands::MulTable { coeffs } => mul_table::run(coeffs),
        Commands::KeySchedule { key } => key_schedule::run(key),
        Commands::Enc {
            cipher,
            decrypt,
            input,
            output,
            aad,
        } => enc::run(cipher, *decrypt, input, output, aad),
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
