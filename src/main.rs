use clap::Parser;
use std::error::Error;

mod args;
use args::Args;

fn main() -> Result<(), Box<dyn Error>> {
    // Initialize logging
    env_logger::init();

    // Parse command-line arguments
    let config = Args::parse().into_config()?;

    ::log::info!("Building search index for: {}", config.root_dir.display());

    let start_time = std::time::Instant::now();
    let summary = search_index::run(&config)?;

    ::log::info!(
        "Indexing complete - {} pages in {:.2} seconds",
        summary.pages,
        start_time.elapsed().as_secs_f64()
    );

    let file_name = summary
        .output
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| summary.output.display().to_string());
    println!("OK: generated {} with {} pages.", file_name, summary.pages);

    Ok(())
}
