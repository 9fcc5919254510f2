use crate::config::IndexerConfig;
use crate::crawlers::{Crawler, FilesystemCrawler};
use crate::error::IndexError;
use crate::filter::PageFilter;
use crate::keywords::KeywordComposer;
use crate::parsers::Parser;
use crate::results::PageRecord;
use crate::utils::{decode_lossy, file_stem};

/// Builder that scans a page source and produces the index records
pub struct Pages<C: Crawler> {
    crawler: C,
    filter: PageFilter,
    composer: KeywordComposer,
}

impl Pages<FilesystemCrawler> {
    /// Create a builder for the directory and settings of a configuration
    pub fn from_config(config: &IndexerConfig) -> Result<Self, IndexError> {
        Ok(Self::new(FilesystemCrawler::new(&config.root_dir))
            .with_filter(PageFilter::new(&config.filter)?)
            .with_composer(KeywordComposer::from_config(config)))
    }
}

impl<C: Crawler> Pages<C> {
    /// Create a new builder over the given source with default settings
    pub fn new(crawler: C) -> Self {
        Self {
            crawler,
            filter: PageFilter::default(),
            composer: KeywordComposer::default(),
        }
    }

    /// Replace the file filter
    pub fn with_filter(mut self, filter: PageFilter) -> Self {
        self.filter = filter;
        self
    }

    /// Replace the keyword composer
    pub fn with_composer(mut self, composer: KeywordComposer) -> Self {
        self.composer = composer;
        self
    }

    /// Candidate page names, sorted
    pub fn candidates(&self) -> Result<Vec<String>, IndexError> {
        let mut names: Vec<String> = self
            .crawler
            .list()?
            .into_iter()
            .filter(|name| self.filter.should_index(name))
            .collect();
        names.sort();
        Ok(names)
    }

    /// Scan the source and build one record per readable page, in file name order
    pub fn generate(&self) -> Result<Vec<PageRecord>, IndexError> {
        ::log::info!("Scanning pages in {}", self.crawler.location());

        let records: Vec<PageRecord> = self
            .candidates()?
            .into_iter()
            .filter_map(|name| match self.crawler.fetch(&name) {
                Ok(bytes) => Some(self.build_record(name, &decode_lossy(&bytes))),
                Err(e) => {
                    ::log::debug!("Skipping unreadable page {}: {}", name, e);
                    None
                }
            })
            .collect();

        ::log::info!("Indexed {} pages", records.len());
        Ok(records)
    }

    /// Build the record of one page from its file name and markup
    pub fn build_record(&self, name: String, html: &str) -> PageRecord {
        let fields = Parser::parse(html);

        // A blank title is kept; only a missing one falls back to the file name
        let title = match &fields.title {
            Some(title) => title.clone(),
            None => file_stem(&name).to_string(),
        };

        let keywords = self.composer.compose(&name, &title, &fields);
        ::log::debug!("Page {}: {:?} with {} keywords", name, title, keywords.len());

        PageRecord::new(title, name, keywords)
    }
}
