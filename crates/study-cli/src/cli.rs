//! Command-line argument definitions.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "studygraph",
    version,
    about = "Exam study planner: relation graph, topic communities, priorities, effort"
)]
pub struct Cli {
    /// Path to a TOML configuration file
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Log level filter (error, warn, info, debug, trace)
    #[arg(long, global = true, default_value = "info")]
    pub log_level: String,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Analyze a syllabus against past exam questions
    Analyze(AnalyzeArgs),
    /// Pre-fetch reference content for every syllabus topic into the cache
    Fetch(FetchArgs),
}

#[derive(Args, Debug)]
pub struct AnalyzeArgs {
    /// Syllabus file (module headers and comma-separated topic lists)
    #[arg(long)]
    pub syllabus: PathBuf,

    /// Question paper file; omit to rank by effort alone
    #[arg(long)]
    pub questions: Option<PathBuf>,

    /// Directory of pre-fetched .txt content files (offline mode)
    #[arg(long)]
    pub content_dir: Option<PathBuf>,

    /// Write the relation graph and communities as JSON to this file
    #[arg(long)]
    pub graph_out: Option<PathBuf>,

    /// Print the full report as JSON instead of the study table
    #[arg(long)]
    pub json: bool,

    /// Override the display edge threshold
    #[arg(long)]
    pub display_threshold: Option<f32>,

    /// Override the clustering edge threshold
    #[arg(long)]
    pub cluster_threshold: Option<f32>,
}

#[derive(Args, Debug)]
pub struct FetchArgs {
    /// Syllabus file listing the topics to fetch
    #[arg(long)]
    pub syllabus: PathBuf,

    /// Cache directory (defaults to the platform cache location)
    #[arg(long)]
    pub cache_dir: Option<PathBuf>,
}
