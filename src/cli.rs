use clap::Parser;

#[derive(Parser, Debug, Default)]
#[command(version, long_version = crate::version::long_version(), about = "Patient waiting room and visit history")]
pub struct Cli {
    /// Path to config file
    #[arg(short, long)]
    pub config: Option<String>,

    /// Start with an empty patient history
    #[arg(long)]
    pub no_seed: bool,

    /// Write debug logs to this file
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<String>,
}
