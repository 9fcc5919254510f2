use std::path::Path;

/// Decode bytes as UTF-8, dropping malformed sequences instead of replacing them
pub fn decode_lossy(bytes: &[u8]) -> String {
    let mut text = String::with_capacity(bytes.len());
    for chunk in bytes.utf8_chunks() {
        text.push_str(chunk.valid());
    }
    text
}

/// File name without its final extension (`price-list.html` -> `price-list`)
///
/// A `.html` suffix is removed case-insensitively, even when nothing precedes it.
pub fn file_stem(file_name: &str) -> &str {
    let html_stem = file_name
        .len()
        .checked_sub(HTML_EXTENSION.len())
        .and_then(|split| {
            let ext = file_name.get(split..)?;
            ext.eq_ignore_ascii_case(HTML_EXTENSION)
                .then(|| file_name.get(..split))
                .flatten()
        });

    html_stem.unwrap_or_else(|| {
        Path::new(file_name)
            .file_stem()
            .and_then(|stem| stem.to_str())
            .unwrap_or(file_name)
    })
}

const HTML_EXTENSION: &str = ".html";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_lossy_drops_invalid_bytes() {
        let bytes = b"caf\xc3\xa9 \xff\xfeok";
        assert_eq!(decode_lossy(bytes), "café ok");
    }

    #[test]
    fn test_decode_lossy_valid_input() {
        assert_eq!(decode_lossy("Língua".as_bytes()), "Língua");
        assert_eq!(decode_lossy(b""), "");
    }

    #[test]
    fn test_file_stem() {
        assert_eq!(file_stem("price-list.html"), "price-list");
        assert_eq!(file_stem("Index.HTML"), "Index");
        assert_eq!(file_stem("a.b.html"), "a.b");
        assert_eq!(file_stem("noext"), "noext");
        assert_eq!(file_stem("notes.txt"), "notes");
    }

    #[test]
    fn test_file_stem_bare_extension() {
        assert_eq!(file_stem(".html"), "");
        assert_eq!(file_stem(".HTML"), "");
        assert_eq!(file_stem("página.Html"), "página");
    }
}
