use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "vehicle-info")]
#[command(version)]
#[command(about = "Look up Indian vehicle registration details")]
pub struct Cli {
    /// Registration number, e.g. MH02FB2727. Prompted for if omitted.
    pub plate: Option<String>,

    /// Also save the report to a file
    #[arg(short, long)]
    pub save: bool,

    /// Directory for saved reports
    #[arg(long, value_name = "DIR")]
    pub reports_dir: Option<PathBuf>,

    /// Skip the live lookup and show demo data
    #[arg(long)]
    pub offline: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,
}
