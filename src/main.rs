use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use video_console::{Player, PlayerConfig};

#[derive(Parser, Debug)]
#[command(name = "video-console")]
#[command(about = "Load a video catalog and report on it", long_about = None)]
struct Args {
    /// Path to the video list (`Title | id | tag1,tag2` per line)
    #[arg(short = 'c', long, default_value = "data/videos.txt")]
    catalog: String,

    /// Verbose logging
    #[arg(short = 'v', long)]
    verbose: bool,

    /// Seed for random video selection
    #[arg(long)]
    seed: Option<u64>,

    /// Reason recorded when a video is flagged without one
    #[arg(long)]
    default_flag_reason: Option<String>,

    /// Also list every video in the catalog
    #[arg(short = 'l', long)]
    list: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging
    let log_level = if args.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    // Expand ~ in paths
    let catalog_path = shellexpand::tilde(&args.catalog);
    let catalog = video_console::loader::load_catalog(PathBuf::from(catalog_path.as_ref()).as_path())?;

    let mut config = PlayerConfig::new();
    if let Some(seed) = args.seed {
        config = config.with_seed(seed);
    }
    if let Some(reason) = args.default_flag_reason {
        config = config.with_default_flag_reason(reason);
    }

    let player = Player::with_config(catalog, config);

    print!("{}", player.number_of_videos());
    if args.list {
        print!("{}", player.show_all_videos());
    }

    Ok(())
}
