use clap::Parser;
use search_index::{IndexError, IndexerConfig};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "search-index")]
#[command(about = "Builds a client-side search index from a directory of static HTML pages")]
#[command(version)]
pub struct Args {
    /// Directory containing the HTML pages (defaults to the current directory)
    pub root: Option<PathBuf>,

    /// Output file (defaults to search-index.js inside the page directory)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Path to JSON configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Global variable assigned in the output script
    #[arg(long)]
    pub global_var: Option<String>,

    /// Additional file names that are not content pages (repeatable)
    #[arg(short, long)]
    pub exclude: Vec<String>,
}

impl Args {
    /// Load the configuration file (if any) and apply command-line overrides
    pub fn into_config(self) -> Result<IndexerConfig, IndexError> {
        let mut config = match &self.config {
            Some(path) => {
                ::log::info!("Loading configuration from file: {}", path.display());
                IndexerConfig::from_file(path)?
            }
            None => IndexerConfig::default(),
        };

        if let Some(root) = self.root {
            config.root_dir = root;
        }
        if let Some(output) = self.output {
            config.output = Some(output);
        }
        if let Some(global_var) = self.global_var {
            config.global_var = global_var;
        }
        config.filter.excluded_files.extend(self.exclude);

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_arguments_gives_defaults() {
        let config = Args::parse_from(["search-index"]).into_config().unwrap();
        assert_eq!(config.root_dir, PathBuf::from("."));
        assert_eq!(config.output_path(), PathBuf::from("./search-index.js"));
        assert_eq!(config.global_var, "window.SEARCH_INDEX");
    }

    #[test]
    fn test_overrides() {
        let args = Args::parse_from([
            "search-index",
            "site",
            "--output",
            "out.js",
            "--global-var",
            "INDEX",
            "-e",
            "menu.html",
            "-e",
            "nav.html",
        ]);
        let config = args.into_config().unwrap();
        assert_eq!(config.root_dir, PathBuf::from("site"));
        assert_eq!(config.output_path(), PathBuf::from("out.js"));
        assert_eq!(config.global_var, "INDEX");
        assert!(config.filter.excluded_files.contains(&"menu.html".to_string()));
        assert!(config.filter.excluded_files.contains(&"nav.html".to_string()));
        assert!(config.filter.excluded_files.contains(&"404.html".to_string()));
    }
}
