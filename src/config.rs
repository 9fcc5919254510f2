use crate::error::IndexError;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Output file written when no explicit output path is configured
pub const DEFAULT_OUTPUT: &str = "search-index.js";

/// Global variable the search widget reads the index from
pub const DEFAULT_GLOBAL_VAR: &str = "window.SEARCH_INDEX";

/// Short Portuguese function words that never become keywords
pub const DEFAULT_STOPWORDS: &[&str] = &[
    "a", "o", "as", "os", "e", "é", "de", "da", "do", "das", "dos", "em", "no", "na", "nos",
    "nas", "um", "uma", "uns", "umas", "ao", "aos", "à", "às", "por", "pelo", "pela", "pelos",
    "pelas", "para", "com", "sem", "que", "se", "ou", "mas", "mais", "como", "sobre", "entre",
    "seu", "sua", "seus", "suas", "este", "esta", "estes", "estas", "esse", "essa", "esses",
    "essas", "isso", "isto", "aquele", "aquela", "num", "numa", "não", "sim", "já", "também",
    "muito", "quando", "onde", "qual", "quais", "foi", "são", "ser", "ter", "tem", "há",
];

/// Configuration for the file filter applied to scanned entries
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageFilterConfig {
    /// File names that are layout fragments rather than content pages
    #[serde(default = "default_excluded_files")]
    pub excluded_files: Vec<String>,

    /// Regex patterns for file names to include (if empty, every `.html` file is included)
    #[serde(default)]
    pub include_patterns: Vec<String>,

    /// Regex patterns for file names to exclude (these take precedence over include patterns)
    #[serde(default)]
    pub exclude_patterns: Vec<String>,
}

impl Default for PageFilterConfig {
    fn default() -> Self {
        Self {
            excluded_files: default_excluded_files(),
            include_patterns: Vec::new(),
            exclude_patterns: Vec::new(),
        }
    }
}

/// Length thresholds and caps used while composing keywords
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeywordLimits {
    /// Minimum characters for a token taken from the file name
    #[serde(default = "default_filename_min_len")]
    pub filename_min_len: usize,

    /// Minimum characters for a title or body term
    #[serde(default = "default_term_min_len")]
    pub term_min_len: usize,

    /// Number of top-ranked title terms kept
    #[serde(default = "default_title_terms")]
    pub title_terms: usize,

    /// Number of top-ranked body terms kept
    #[serde(default = "default_body_terms")]
    pub body_terms: usize,
}

impl Default for KeywordLimits {
    fn default() -> Self {
        Self {
            filename_min_len: default_filename_min_len(),
            term_min_len: default_term_min_len(),
            title_terms: default_title_terms(),
            body_terms: default_body_terms(),
        }
    }
}

/// Configuration for one indexing run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IndexerConfig {
    /// Directory scanned (non-recursively) for pages
    #[serde(default = "default_root_dir")]
    pub root_dir: PathBuf,

    /// Output artifact; defaults to `search-index.js` inside `root_dir`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output: Option<PathBuf>,

    /// Global variable assigned in the output script
    #[serde(default = "default_global_var")]
    pub global_var: String,

    /// Which directory entries count as content pages
    #[serde(default)]
    pub filter: PageFilterConfig,

    /// Replaces the built-in stopword list
    #[serde(default = "default_stopwords")]
    pub stopwords: Vec<String>,

    /// Added on top of `stopwords`
    #[serde(default)]
    pub extra_stopwords: Vec<String>,

    #[serde(default)]
    pub limits: KeywordLimits,
}

impl Default for IndexerConfig {
    fn default() -> Self {
        Self {
            root_dir: default_root_dir(),
            output: None,
            global_var: default_global_var(),
            filter: PageFilterConfig::default(),
            stopwords: default_stopwords(),
            extra_stopwords: Vec::new(),
            limits: KeywordLimits::default(),
        }
    }
}

impl IndexerConfig {
    /// Create a configuration that scans the given directory with default values
    pub fn new(root_dir: impl Into<PathBuf>) -> Self {
        Self {
            root_dir: root_dir.into(),
            ..Self::default()
        }
    }

    /// Load configuration from a JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, IndexError> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|source| IndexError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&contents)
    }

    /// Load configuration from a JSON string
    pub fn from_json(json: &str) -> Result<Self, IndexError> {
        serde_json::from_str(json).map_err(IndexError::ConfigParse)
    }

    /// Path the index artifact is written to
    pub fn output_path(&self) -> PathBuf {
        match &self.output {
            Some(path) => path.clone(),
            None => self.root_dir.join(DEFAULT_OUTPUT),
        }
    }

    /// The effective stopword list (`stopwords` followed by `extra_stopwords`)
    pub fn all_stopwords(&self) -> impl Iterator<Item = &str> {
        self.stopwords
            .iter()
            .chain(self.extra_stopwords.iter())
            .map(String::as_str)
    }
}

fn default_root_dir() -> PathBuf {
    PathBuf::from(".")
}

fn default_global_var() -> String {
    DEFAULT_GLOBAL_VAR.to_string()
}

/// Shared layout partials and the error page
fn default_excluded_files() -> Vec<String> {
    ["header.html", "footer.html", "aside.html", "404.html"]
        .into_iter()
        .map(String::from)
        .collect()
}

fn default_stopwords() -> Vec<String> {
    DEFAULT_STOPWORDS.iter().map(|w| w.to_string()).collect()
}

fn default_filename_min_len() -> usize {
    3
}

fn default_term_min_len() -> usize {
    4
}

fn default_title_terms() -> usize {
    6
}

fn default_body_terms() -> usize {
    20
}
