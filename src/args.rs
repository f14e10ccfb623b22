use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "stint", version, about = "A command-line tracker for internship applications")]
pub struct Cli {
    /// Path of the internship storage file (overrides config.json)
    #[arg(short, long)]
    pub file: Option<PathBuf>,

    /// Directory containing config.json
    #[arg(long, default_value = ".")]
    pub config_dir: PathBuf,

    /// Verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}
