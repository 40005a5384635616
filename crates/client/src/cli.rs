//! Command line arguments.
//!
//! Every selection flag can also be set through a `CONTEST_*` environment
//! variable (or a `.env` file). Flags win over the environment, which wins
//! over the selection file.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use contest_content::ConfigOverrides;

use crate::catalog::CatalogSection;

/// Contest scoring simulator
#[derive(Parser, Debug)]
#[command(name = "contest")]
#[command(about = "Score a monster's contest performance", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Directory holding the content catalogs and config.toml
    #[arg(long, global = true, env = "CONTENT_DATA_DIR")]
    pub data_dir: Option<PathBuf>,

    /// Also write logs to a per-session file
    #[arg(long, global = true, env = "CONTEST_LOG_FILE")]
    pub log_file: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Evaluate a contest selection
    Evaluate(EvaluateArgs),

    /// List the content catalogs
    Catalog(CatalogArgs),
}

#[derive(Args, Debug, Default)]
pub struct EvaluateArgs {
    /// Selection file applied on top of the data directory's config.toml
    #[arg(short, long, env = "CONTEST_CONFIG")]
    pub config: Option<PathBuf>,

    /// Monster id (e.g. fenrir_adult)
    #[arg(short, long, env = "CONTEST_MONSTER")]
    pub monster: Option<String>,

    /// Personality id (e.g. daring)
    #[arg(short, long, env = "CONTEST_NATURE")]
    pub nature: Option<String>,

    /// Active mood id (e.g. elegance)
    #[arg(long, env = "CONTEST_MOOD")]
    pub mood: Option<String>,

    /// Comma-separated gambit ids, in slot order; leave a slot blank to skip it
    #[arg(short, long, env = "CONTEST_GAMBITS", value_delimiter = ',')]
    pub gambits: Option<Vec<String>>,

    /// Comma-separated stage ids
    #[arg(short, long, env = "CONTEST_STAGES", value_delimiter = ',')]
    pub stages: Option<Vec<String>>,

    /// Comma-separated judge ids
    #[arg(short, long, env = "CONTEST_JUDGES", value_delimiter = ',')]
    pub judges: Option<Vec<String>>,

    /// Number of appeal uses (0 or less disables the appeal)
    #[arg(short, long, env = "CONTEST_APPEAL_USES", allow_negative_numbers = true)]
    pub appeal_uses: Option<i32>,

    /// Print the evaluation as JSON
    #[arg(long)]
    pub json: bool,
}

impl EvaluateArgs {
    /// The selection fields given on the command line.
    pub fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            monster: self.monster.clone(),
            nature: self.nature.clone(),
            mood: self.mood.clone(),
            gambits: self.gambits.clone(),
            stages: self.stages.clone(),
            judges: self.judges.clone(),
            appeal_uses: self.appeal_uses,
        }
    }
}

#[derive(Args, Debug)]
pub struct CatalogArgs {
    /// Which catalog to list
    #[arg(value_enum, default_value_t = CatalogSection::All)]
    pub section: CatalogSection,

    /// Print the catalogs as JSON
    #[arg(long)]
    pub json: bool,
}
