use crate::export::json_csv::DEFAULT_INDEX_COLUMN;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use ta_toolkit_common::ContainmentPolicy;

#[derive(Parser)]
#[command(name = "ta-tool")]
#[command(about = "Marking helpers: unzip submissions, check class usage, convert JSON to CSV", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Debug logging (lists every checked file)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Check which students define classes in their Python code
    Check {
        /// Homework root: one subfolder per student
        #[arg(required = true)]
        root: PathBuf,

        /// Output CSV (default: class_usage_result.csv)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Roster spreadsheet (column A group, column B name)
        #[arg(short, long)]
        roster: Option<PathBuf>,

        /// Skip name and group correction
        #[arg(long, conflicts_with = "roster")]
        no_roster: bool,

        /// Similarity threshold for fuzzy name matching (0.0-1.0)
        #[arg(long)]
        threshold: Option<f64>,

        /// Containment pass policy (first/best/off)
        #[arg(long)]
        containment: Option<ContainmentPolicy>,
    },

    /// Extract every zip in a folder into a folder of the same name
    Unzip {
        /// Folder containing the archives
        #[arg(required = true)]
        base_dir: PathBuf,
    },

    /// Convert a JSON list of objects to CSV
    Json2csv {
        /// Input JSON file
        #[arg(required = true)]
        input: PathBuf,

        /// Output CSV file
        #[arg(short, long, default_value = "output.csv")]
        output: PathBuf,

        /// Name of the leading sequence column
        #[arg(long, default_value = DEFAULT_INDEX_COLUMN)]
        index_column: String,
    },

    /// Zip a folder, e.g. to build a demo submission bundle
    Pack {
        /// Folder to pack
        #[arg(required = true)]
        folder: PathBuf,

        /// Output archive (default: <folder>.zip next to the folder)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Show or edit settings
    Config {
        /// Set the default roster spreadsheet
        #[arg(long)]
        set_roster: Option<PathBuf>,

        /// Set the default similarity threshold
        #[arg(long)]
        set_threshold: Option<f64>,

        /// Show settings
        #[arg(long)]
        show: bool,
    },
}
