use regex::Regex;
use scraper::{ElementRef, Html};
use std::sync::LazyLock;

/// Elements whose contents are code, never visible text
const HIDDEN_ELEMENTS: [&str; 2] = ["script", "style"];

/// Runs of characters that are neither word characters nor accented Latin letters
static NON_WORD: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[^\w\x{00C0}-\x{017F}]+").expect("token pattern is valid")
});

/// Strips markup from an HTML fragment and returns its visible text
///
/// `<script>` and `<style>` contents are dropped, character entities are
/// decoded and whitespace runs are collapsed to single spaces.
pub fn strip_tags(html: &str) -> String {
    if !html.contains(['<', '&']) {
        return collapse_whitespace(html);
    }

    let fragment = Html::parse_fragment(html);
    visible_text(fragment.root_element())
}

/// Collects the text below an element, skipping script and style blocks
pub fn visible_text(element: ElementRef<'_>) -> String {
    let mut text = String::new();

    for node in element.descendants() {
        let Some(chunk) = node.value().as_text() else {
            continue;
        };

        let hidden = node.ancestors().any(|ancestor| {
            ancestor
                .value()
                .as_element()
                .is_some_and(|el| HIDDEN_ELEMENTS.contains(&el.name()))
        });
        if hidden {
            continue;
        }

        // Tags separate words
        text.push_str(chunk);
        text.push(' ');
    }

    collapse_whitespace(&text)
}

/// Collapses every whitespace run to a single space and trims the ends
pub fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Lowercases text and reduces it to space-separated word tokens
pub fn normalize_tokens(text: &str) -> String {
    let lowered = text.to_lowercase();
    let spaced = NON_WORD.replace_all(&lowered, " ");
    collapse_whitespace(&spaced)
}

/// Normalizes text and splits it into tokens
pub fn tokens(text: &str) -> Vec<String> {
    normalize_tokens(text)
        .split(' ')
        .filter(|token| !token.is_empty())
        .map(String::from)
        .collect()
}
