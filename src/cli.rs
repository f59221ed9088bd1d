use clap::Parser;
use std::path::PathBuf;

/// Parse EPUB and TXT novel manuscripts into normalized JSON
#[derive(Parser, Debug)]
#[command(name = "novel2json", version, about)]
pub struct Cli {
    /// Path to the input file (.epub or .txt)
    pub input: PathBuf,

    /// Also write the result envelope to this path as pretty-printed JSON
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}
