use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "fvgen", about = "Corner-case test vector generator for the vector FPU")]
pub struct Cli {
    /// Number of operand triples to generate
    #[arg(short = 'n', long, default_value_t = 1000)]
    pub count: u64,

    /// Element width in bits, 32 or 64
    #[arg(short = 'w', long, default_value_t = 32)]
    pub sew: u32,

    /// Corner lane selector: 0 patches every lane from the selector word,
    /// 1-3 (64-bit) or 1-6 (32-bit) patches that lane only
    #[arg(short = 'c', long, default_value_t = 1)]
    pub corner: u8,

    /// Output file for the hex stream
    #[arg(short, long, value_name = "FILE", default_value = "data_in.hex")]
    pub output: PathBuf,

    /// Seed for a reproducible stream; OS entropy when omitted
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Write zeros for the second and third operand of every triple
    #[arg(long)]
    pub first_only: bool,

    /// Print a per-field binary dump of each triple to stdout
    #[arg(short, long)]
    pub dump: bool,
}
