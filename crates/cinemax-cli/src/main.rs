use std::time::Duration;

use anyhow::Result;
use clap::Parser;
use console::style;
use indicatif::{ProgressBar, ProgressStyle};

use cinemax_core::{
    Config, DEFAULT_CHANNEL_HANDLE, DEFAULT_MIN_MOVIE_MINUTES, DEFAULT_STOPLIST, YouTubeClient,
    build_catalog, format_clip_readable, format_movie_readable,
};

#[derive(Parser)]
#[command(name = "cinemax")]
#[command(
    about = "Fetch a YouTube channel's uploads and extract movie metadata from titles and descriptions"
)]
struct Cli {
    /// Channel handle to fetch, without the leading '@'
    #[arg(default_value = DEFAULT_CHANNEL_HANDLE)]
    handle: String,

    /// Minimum runtime in minutes for a video to count as a movie
    #[arg(short, long, default_value_t = DEFAULT_MIN_MOVIE_MINUTES)]
    min_minutes: u64,

    /// Also list the videos excluded as trailers/shorts
    #[arg(short, long)]
    clips: bool,
}

fn create_spinner(msg: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .tick_chars("⠁⠂⠄⡀⢀⠠⠐⠈ ")
            .template("{spinner:.cyan} {msg}")
            .unwrap(),
    );
    pb.set_message(msg.to_string());
    pb.enable_steady_tick(Duration::from_millis(80));
    pb
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Validate the API key early
    let mut config = match Config::from_env(&cli.handle) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{} {}", style("Error:").red().bold(), e);
            std::process::exit(1);
        }
    };
    config.min_movie_minutes = cli.min_minutes;

    println!(
        "\n{}  {}\n",
        style("cinemax").cyan().bold(),
        style("Channel Movie Fetcher").dim()
    );

    let client = YouTubeClient::new(&config.api_key);

    // Step 1: Resolve the channel handle
    let spinner = create_spinner("Resolving channel handle...");
    let channel_id = client.resolve_channel_id(&config.channel_handle).await?;
    spinner.finish_with_message(format!(
        "{} Channel resolved: {}",
        style("✓").green().bold(),
        style(&channel_id).dim()
    ));

    // Step 2: Page through the channel's uploads, newest first
    let spinner = create_spinner("Listing channel videos...");
    let videos = client.list_channel_videos(&channel_id).await?;
    spinner.finish_with_message(format!(
        "{} Listed {} videos",
        style("✓").green().bold(),
        videos.len()
    ));

    // Step 3: Batch detail lookups
    let spinner = create_spinner("Fetching video details...");
    let video_ids: Vec<String> = videos.iter().map(|v| v.video_id.clone()).collect();
    let details = client.fetch_video_details(&video_ids).await?;
    spinner.finish_with_message(format!(
        "{} Fetched details for {} videos",
        style("✓").green().bold(),
        details.len()
    ));

    // Step 4: Classify and print
    let catalog = build_catalog(&videos, &details, DEFAULT_STOPLIST, config.min_movie_minutes);

    if catalog.movies.is_empty() {
        println!("\n{}", style("No full movies found.").yellow());
    } else {
        for movie in &catalog.movies {
            println!("\n{}", style("New Movie Added!").green().bold());
            print!("{}", format_movie_readable(movie));
        }
        println!(
            "\n{} {} movies",
            style("Total:").dim(),
            style(catalog.movies.len()).cyan()
        );
    }

    if cli.clips && !catalog.clips.is_empty() {
        println!(
            "\n{} {} below {} minutes",
            style("Clips:").bold(),
            catalog.clips.len(),
            config.min_movie_minutes
        );
        for clip in &catalog.clips {
            println!("  {}", format_clip_readable(clip));
        }
    }

    Ok(())
}
