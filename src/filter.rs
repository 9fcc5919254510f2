use crate::config::PageFilterConfig;
use regex::Regex;
use std::collections::HashSet;

/// File filter that uses the exclusion set and regex patterns to decide which files are pages
#[derive(Debug)]
pub struct PageFilter {
    excluded: HashSet<String>,
    include_regexes: Vec<Regex>,
    exclude_regexes: Vec<Regex>,
}

impl Default for PageFilter {
    fn default() -> Self {
        Self {
            excluded: PageFilterConfig::default()
                .excluded_files
                .into_iter()
                .collect(),
            include_regexes: Vec::new(),
            exclude_regexes: Vec::new(),
        }
    }
}

impl PageFilter {
    /// Create a new page filter from configuration
    pub fn new(config: &PageFilterConfig) -> Result<Self, regex::Error> {
        let include_regexes = config
            .include_patterns
            .iter()
            .map(|pattern| Regex::new(pattern))
            .collect::<Result<Vec<_>, _>>()?;

        let exclude_regexes = config
            .exclude_patterns
            .iter()
            .map(|pattern| Regex::new(pattern))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            excluded: config.excluded_files.iter().cloned().collect(),
            include_regexes,
            exclude_regexes,
        })
    }

    /// Determine if a directory entry is a content page
    pub fn should_index(&self, file_name: &str) -> bool {
        if !has_html_extension(file_name) {
            return false;
        }

        if self.excluded.contains(file_name) {
            ::log::trace!("Skipping excluded fragment: {}", file_name);
            return false;
        }

        // Exclusions take precedence
        if self.exclude_regexes.iter().any(|re| re.is_match(file_name)) {
            ::log::trace!("Skipping file matching exclude pattern: {}", file_name);
            return false;
        }

        // If include patterns are specified, at least one must match
        self.include_regexes.is_empty()
            || self
                .include_regexes
                .iter()
                .any(|re| re.is_match(file_name))
    }
}

/// Case-insensitive `.html` suffix check
pub fn has_html_extension(file_name: &str) -> bool {
    file_name.to_lowercase().ends_with(".html")
}
