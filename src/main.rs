use std::path::PathBuf;

use clap::{
    CommandFactory, Parser, Subcommand,
    builder::{
        Styles,
        styling::{AnsiColor, Effects},
    },
};
use clap_complete::{Shell, generate};

use trackscope::{cli, config, warning};

fn styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::White.on_default() | Effects::BOLD)
        .usage(AnsiColor::White.on_default() | Effects::BOLD)
        .literal(AnsiColor::BrightBlue.on_default())
        .placeholder(AnsiColor::BrightGreen.on_default())
}

#[derive(Parser, Debug, Clone)]
#[clap(
  version = env!("CARGO_PKG_VERSION"),
  name=env!("CARGO_PKG_NAME"),
  bin_name=env!("CARGO_PKG_NAME"),
  author=env!("CARGO_PKG_AUTHORS"),
  about=env!("CARGO_PKG_DESCRIPTION"),
  styles=styles(),
)]
struct Cli {
    #[clap(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Look up a track and show its details, audio features and playback option
    Analyze(AnalyzeOptions),

    /// Preview a dataset and show its statistics
    Dataset(DatasetOptions),

    /// List the artists of a dataset
    Artists(ArtistsOptions),

    /// List the songs of one artist in a dataset
    Songs(SongsOptions),

    /// Get shell completions
    Completions(CompletionsOption),
}

#[derive(Parser, Debug, Clone)]
pub struct AnalyzeOptions {
    /// Track title
    #[clap(long)]
    pub track: String,

    /// Artist name
    #[clap(long)]
    pub artist: String,

    /// Write the bar, radar and tempo gauge charts to this JSON file
    #[clap(long)]
    pub charts: Option<PathBuf>,

    /// Open the playback option in the default browser
    #[clap(long)]
    pub open: bool,
}

#[derive(Parser, Debug, Clone)]
pub struct DatasetOptions {
    /// CSV file to load (defaults to TRACKSCOPE_DATASET or songs.csv)
    #[clap(long)]
    pub file: Option<PathBuf>,

    /// Number of rows to preview
    #[clap(long)]
    pub rows: Option<usize>,
}

#[derive(Parser, Debug, Clone)]
pub struct ArtistsOptions {
    /// CSV file to load (defaults to TRACKSCOPE_DATASET or songs.csv)
    #[clap(long)]
    pub file: Option<PathBuf>,

    /// Search for artists
    #[clap(long)]
    pub search: Option<String>,
}

#[derive(Parser, Debug, Clone)]
pub struct SongsOptions {
    /// CSV file to load (defaults to TRACKSCOPE_DATASET or songs.csv)
    #[clap(long)]
    pub file: Option<PathBuf>,

    /// Artist whose songs to list
    #[clap(long)]
    pub artist: String,
}

#[derive(Parser, Debug, Clone)]
pub struct CompletionsOption {
    shell: Shell,
}

#[tokio::main]
async fn main() {
    if let Err(e) = config::load_env().await {
        warning!("Cannot load environment. Err: {}", e);
    }

    let cli = Cli::parse();

    match cli.command {
        Command::Analyze(opt) => cli::analyze(opt.track, opt.artist, opt.charts, opt.open).await,
        Command::Dataset(opt) => cli::dataset(opt.file, opt.rows).await,
        Command::Artists(opt) => cli::artists(opt.file, opt.search).await,
        Command::Songs(opt) => cli::songs(opt.file, opt.artist).await,
        Command::Completions(opt) => {
            let mut cmd = Cli::command_for_update();
            let name = cmd.get_name().to_string();
            generate(opt.shell, &mut cmd, name, &mut std::io::stdout())
        }
    }
}
