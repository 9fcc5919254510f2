use crate::parsers::text;

#[cfg(test)]
mod strip_tags_tests {
    use super::*;

    #[test]
    fn test_plain_text() {
        assert_eq!(text::strip_tags("Hello,   world!"), "Hello, world!");
        assert_eq!(text::strip_tags(""), "");
        assert_eq!(text::strip_tags("  \n\t  "), "");
    }

    #[test]
    fn test_removes_tags() {
        let html = "<p>Hello <b>bold</b> <a href=\"x.html\">link</a></p>";
        assert_eq!(text::strip_tags(html), "Hello bold link");
    }

    #[test]
    fn test_tags_separate_words() {
        assert_eq!(text::strip_tags("<li>um</li><li>dois</li>"), "um dois");
    }

    #[test]
    fn test_script_and_style_blocks_removed() {
        let html = "<style>h1 { color: red }</style><script>var x=1;</script><h1>Welcome</h1>";
        assert_eq!(text::strip_tags(html), "Welcome");

        // Markup inside a script must not leak as text
        let html = "<script>document.write('<p>hidden</p>')</script>visible";
        assert_eq!(text::strip_tags(html), "visible");
    }

    #[test]
    fn test_decodes_entities() {
        assert_eq!(text::strip_tags("Caf&eacute; &amp; P&atilde;o"), "Café & Pão");
        assert_eq!(text::strip_tags("&lt;tag&gt; &#65;&#x42;"), "<tag> AB");
    }

    #[test]
    fn test_collapses_whitespace() {
        let html = "<div>\n   Linha 1\n\n\t<span>Linha   2</span>\n</div>";
        assert_eq!(text::strip_tags(html), "Linha 1 Linha 2");
    }

    #[test]
    fn test_malformed_markup() {
        assert_eq!(text::strip_tags("<p>unclosed <b>bold"), "unclosed bold");
        assert_eq!(text::strip_tags("stray </div> close"), "stray close");
    }
}

#[cfg(test)]
mod normalize_tests {
    use super::*;

    #[test]
    fn test_lowercases_and_strips_punctuation() {
        assert_eq!(
            text::normalize_tokens("Olá, Mundo! Tudo bem?"),
            "olá mundo tudo bem"
        );
        assert_eq!(text::normalize_tokens("price-list.v2"), "price list v2");
    }

    #[test]
    fn test_keeps_accents_digits_and_underscore() {
        assert_eq!(
            text::normalize_tokens("Ação 2024 Língua_Portuguesa"),
            "ação 2024 língua_portuguesa"
        );
    }

    #[test]
    fn test_collapses_and_trims() {
        assert_eq!(text::normalize_tokens("  --  a  ...  b  "), "a b");
        assert_eq!(text::normalize_tokens("?!"), "");
    }

    #[test]
    fn test_tokens() {
        assert_eq!(text::tokens("Fonética — Conteúdos"), vec!["fonética", "conteúdos"]);
        assert!(text::tokens("").is_empty());
        assert!(text::tokens(" , ; ").is_empty());
    }

    #[test]
    fn test_collapse_whitespace() {
        assert_eq!(text::collapse_whitespace("  Home \n  Page  "), "Home Page");
    }
}
