use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "social-pulse",
    about = "Interactive social media usage dashboard, filterable by year",
    version,
    long_about = None
)]
pub struct Args {
    /// Dataset to load (.csv, .json or .parquet)
    #[arg(short, long, default_value = "projectk.csv")]
    pub data: PathBuf,

    /// Initial year filter; anything that is not a number shows all years
    #[arg(short, long)]
    pub year: Option<String>,

    /// Print the four chart specifications as JSON and exit
    #[arg(long)]
    pub print: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}
