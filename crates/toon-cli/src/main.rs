use std::fs::File;
use std::io::{stdin, Read};
use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, ValueEnum};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum DelimArg {
    Comma,
    Tab,
    Pipe,
}

impl From<DelimArg> for toon::Delimiter {
    fn from(arg: DelimArg) -> Self {
        match arg {
            DelimArg::Comma => toon::Delimiter::Comma,
            DelimArg::Tab => toon::Delimiter::Tab,
            DelimArg::Pipe => toon::Delimiter::Pipe,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "toon-cli", about = "JSON <-> TOON conversion", version)]
struct Args {
    /// Decode TOON to JSON (default encodes JSON to TOON)
    #[arg(short, long)]
    decode: bool,

    /// Delimiter for array values
    #[arg(long, value_enum, default_value_t = DelimArg::Comma)]
    delimiter: DelimArg,

    /// Delimiter assumed outside array scopes
    #[arg(long, value_enum, default_value_t = DelimArg::Comma)]
    document_delimiter: DelimArg,

    /// Spaces per indentation level
    #[arg(long, default_value_t = 2)]
    indent: usize,

    /// Emit `#` length markers in array headers
    #[arg(long, default_value_t = false)]
    length_markers: bool,

    /// Accept length mismatches and loose indentation when decoding
    #[arg(long, default_value_t = false)]
    lenient: bool,

    /// Pretty-print JSON output when decoding
    #[arg(long, default_value_t = false)]
    pretty: bool,

    /// Input file (defaults to stdin)
    input: Option<PathBuf>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let mut buf = String::new();
    match &args.input {
        Some(path) => {
            let mut f = File::open(path)?;
            f.read_to_string(&mut buf)?;
        }
        None => {
            stdin().read_to_string(&mut buf)?;
        }
    }

    if args.decode {
        let options = toon::DecodeOptions {
            indent: args.indent,
            strict: !args.lenient,
            document_delimiter: args.document_delimiter.into(),
        };
        let value = toon::decode_from_str(&buf, &options)?;
        let json = value.to_json();
        if args.pretty {
            println!("{}", serde_json::to_string_pretty(&json)?);
        } else {
            println!("{}", serde_json::to_string(&json)?);
        }
    } else {
        let options = toon::EncodeOptions {
            indent: args.indent,
            document_delimiter: args.document_delimiter.into(),
            array_delimiter: args.delimiter.into(),
            length_markers: args.length_markers,
            ..toon::EncodeOptions::default()
        };
        let value: serde_json::Value = serde_json::from_str(&buf)?;
        println!("{}", toon::encode_to_string(&value, &options)?);
    }

    Ok(())
}
