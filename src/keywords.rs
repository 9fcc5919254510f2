//! Keyword composition.
//!
//! A page's keywords come from three sources, in priority order:
//! tokens of the file name, the most frequent title terms and the most
//! frequent terms of the headings and meta tags. The concatenation is
//! deduplicated keeping the first occurrence.

use crate::config::{DEFAULT_STOPWORDS, IndexerConfig, KeywordLimits};
use crate::parsers::PageFields;
use crate::parsers::text::{normalize_tokens, tokens};
use crate::utils::file_stem;
use std::collections::{HashMap, HashSet};

/// Set of normalized words excluded from keyword candidacy
#[derive(Debug, Clone)]
pub struct Stopwords(HashSet<String>);

impl Default for Stopwords {
    fn default() -> Self {
        Self::new(DEFAULT_STOPWORDS.iter().copied())
    }
}

impl Stopwords {
    pub fn new<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self(
            words
                .into_iter()
                .map(|w| normalize_tokens(w.as_ref()))
                .filter(|w| !w.is_empty())
                .collect(),
        )
    }

    pub fn contains(&self, token: &str) -> bool {
        self.0.contains(token)
    }

    /// Whether a normalized token may become a keyword
    pub fn accepts(&self, token: &str, min_len: usize) -> bool {
        !token.is_empty() && token.chars().count() >= min_len && !self.contains(token)
    }
}

/// Builds the keyword list of a page
#[derive(Debug, Clone, Default)]
pub struct KeywordComposer {
    stopwords: Stopwords,
    limits: KeywordLimits,
}

impl KeywordComposer {
    pub fn new(stopwords: Stopwords, limits: KeywordLimits) -> Self {
        Self { stopwords, limits }
    }

    pub fn from_config(config: &IndexerConfig) -> Self {
        Self::new(Stopwords::new(config.all_stopwords()), config.limits)
    }

    pub fn stopwords(&self) -> &Stopwords {
        &self.stopwords
    }

    /// Tokens of the file name without its extension, `_` and `-` acting as separators
    pub fn filename_tokens(&self, file_name: &str) -> Vec<String> {
        let stem = file_stem(file_name).replace(['_', '-'], " ");
        tokens(&stem)
            .into_iter()
            .filter(|token| self.stopwords.accepts(token, self.limits.filename_min_len))
            .collect()
    }

    /// Most frequent terms of the page title (already plain text)
    pub fn title_terms(&self, title: &str) -> Vec<String> {
        top_terms(
            title,
            &self.stopwords,
            self.limits.term_min_len,
            self.limits.title_terms,
        )
    }

    /// Most frequent terms of the headings, meta description and meta keywords
    pub fn body_terms(&self, fields: &PageFields) -> Vec<String> {
        top_terms(
            &fields.body_text(),
            &self.stopwords,
            self.limits.term_min_len,
            self.limits.body_terms,
        )
    }

    /// Final keyword list for one page; may be empty
    pub fn compose(&self, file_name: &str, title: &str, fields: &PageFields) -> Vec<String> {
        let candidates = self
            .filename_tokens(file_name)
            .into_iter()
            .chain(self.title_terms(title))
            .chain(self.body_terms(fields));
        dedupe(candidates)
    }
}

/// Ranks the accepted tokens of `text` by descending frequency
///
/// Ties keep first-seen order. At most `limit` terms are returned.
pub fn top_terms(text: &str, stopwords: &Stopwords, min_len: usize, limit: usize) -> Vec<String> {
    let mut counts: Vec<(String, usize)> = Vec::new();
    let mut positions: HashMap<String, usize> = HashMap::new();

    for token in tokens(text) {
        if !stopwords.accepts(&token, min_len) {
            continue;
        }
        match positions.get(&token) {
            Some(&i) => {
                if let Some(entry) = counts.get_mut(i) {
                    entry.1 += 1;
                }
            }
            None => {
                positions.insert(token.clone(), counts.len());
                counts.push((token, 1));
            }
        }
    }

    // sort_by is stable
    counts.sort_by(|a, b| b.1.cmp(&a.1));
    counts.into_iter().take(limit).map(|(term, _)| term).collect()
}

/// Drops repeated keywords (compared after normalization), keeping the first occurrence
pub fn dedupe<I>(keywords: I) -> Vec<String>
where
    I: IntoIterator<Item = String>,
{
    let mut seen = HashSet::new();
    keywords
        .into_iter()
        .filter(|keyword| {
            let key = normalize_tokens(keyword);
            !key.is_empty() && seen.insert(key)
        })
        .collect()
}
