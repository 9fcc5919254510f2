use crate::parsers::PageFields;
use crate::parsers::text::{strip_tags, visible_text};
use regex::Regex;
use scraper::{Html, Selector};
use std::sync::LazyLock;

/// First `<title>` element of the raw markup, content captured unparsed
static TITLE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?is)<title[^>]*>(.*?)</title>").expect("title pattern is valid")
});
static H1: LazyLock<Selector> = LazyLock::new(|| selector("h1"));
static H2: LazyLock<Selector> = LazyLock::new(|| selector("h2"));
static H3: LazyLock<Selector> = LazyLock::new(|| selector("h3"));
static META_KEYWORDS: LazyLock<Selector> =
    LazyLock::new(|| selector(r#"meta[name="keywords"]"#));
static META_DESCRIPTION: LazyLock<Selector> =
    LazyLock::new(|| selector(r#"meta[name="description"]"#));

fn selector(css: &str) -> Selector {
    Selector::parse(css).expect("static selector is valid")
}

/// Parses an HTML page and extracts the fields used for indexing
///
/// Every field is optional in the markup; a missing element yields
/// `None` or an empty list. Text is entity-decoded exactly once.
pub fn parse(html: &str) -> PageFields {
    // The tokenizer already decodes title text, so the raw source is stripped instead
    let title = TITLE
        .captures(html)
        .and_then(|caps| caps.get(1))
        .map(|m| strip_tags(m.as_str()));

    let doc = Html::parse_document(html);

    let headings = |sel: &Selector| -> Vec<String> { doc.select(sel).map(visible_text).collect() };
    let h1 = headings(&H1);
    let h2 = headings(&H2);
    let h3 = headings(&H3);

    let meta_content = |sel: &Selector| {
        doc.select(sel)
            .next()
            .and_then(|el| el.value().attr("content"))
            .map(str::to_string)
    };
    let meta_keywords = meta_content(&META_KEYWORDS);
    let meta_description = meta_content(&META_DESCRIPTION);

    ::log::trace!(
        "HTML parser found title {:?}, {} headings",
        title,
        h1.len() + h2.len() + h3.len()
    );

    PageFields {
        title,
        h1,
        h2,
        h3,
        meta_keywords,
        meta_description,
    }
}
