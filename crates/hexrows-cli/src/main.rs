use clap::Parser;
use std::io::Read;
use std::process;

use hexrows_core::tokenize::{group_rows, tokenize};
use hexrows_core::validate::check_hex;
use hexrows_render::render::render_lines;
use hexrows_render::schema::ListingV1;
use hexrows_render::serialize::{to_minified_json, to_pretty_json};

#[derive(Debug, Parser)]
#[command(
    name = "hexrows",
    version,
    about = "Format a hex string as rows of 0x.. byte literals"
)]
struct Cli {
    /// Hex string to format ("-" reads it from stdin)
    hex: String,
    /// Tokens per output row
    #[arg(long, default_value_t = 8)]
    width: usize,
    /// Emit a short final row instead of dropping trailing tokens
    #[arg(long)]
    keep_partial: bool,
    /// Reject input that is not a whole number of hex pairs
    #[arg(long)]
    strict: bool,
    /// Output the rows as a JSON listing instead of literal lines
    #[arg(long)]
    json: bool,
    /// Minify the JSON listing (only with --json)
    #[arg(long)]
    min: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.width == 0 {
        eprintln!("--width must be at least 1");
        process::exit(2);
    }

    let input = if cli.hex == "-" {
        let mut buf = String::new();
        if let Err(e) = std::io::stdin().read_to_string(&mut buf) {
            eprintln!("{e}");
            process::exit(1);
        }
        buf.trim().to_string()
    } else {
        cli.hex
    };

    if cli.strict {
        if let Err(e) = check_hex(&input) {
            // Exact error string, stable for CI / integrations.
            eprintln!("{e}");
            process::exit(2);
        }
    }

    let tokens = tokenize(&input);
    let rows = group_rows(&tokens, cli.width, cli.keep_partial);

    if cli.json {
        let listing = ListingV1::from_rows(cli.width, &rows);

        let out = if cli.min {
            to_minified_json(&listing)?
        } else {
            to_pretty_json(&listing)?
        };

        println!("{out}");
    } else {
        print!("{}", render_lines(&rows));
    }

    Ok(())
}
