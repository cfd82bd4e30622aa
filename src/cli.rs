use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(author, version, about, propagate_version = true)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Generate the comparison index and one chart page per instance type and region.
    Generate(GenerateArgs),

    /// Print the payment plans for one instance type in one region.
    Rates(RatesArgs),
}

#[derive(Parser)]
pub struct InputArgs {
    /// Path to the formatted EC2 pricing document.
    #[clap(long = "input", env = "PRICING_PATH", default_value = "price.fmt.json")]
    pub input: PathBuf,
}

#[derive(Parser)]
pub struct GenerateArgs {
    #[clap(flatten)]
    pub input: InputArgs,

    /// Directory receiving `index.html` and the chart pages.
    #[clap(long = "output-dir", env = "OUTPUT_DIR", default_value = "out")]
    pub output_dir: PathBuf,
}

#[derive(Parser)]
pub struct RatesArgs {
    #[clap(flatten)]
    pub input: InputArgs,

    /// Instance type, for example `t2.micro`.
    pub instance_type: String,

    /// Region, for example `us-east-1`.
    pub region: String,
}
