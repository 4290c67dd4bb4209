//! URL detection and linkification for free-text messages
//!
//! The historical feed replaced every URL in a message with a link to the
//! *first* URL found. That behavior is kept as [`LinkMode::ReplaceAllWithFirst`]
//! and stays the default; [`LinkMode::EachOwnTarget`] links every URL to itself.

use std::ops::Range;
use std::sync::LazyLock;

use regex::Regex;

/// Scheme, dotted host with a 2-3 letter final label, optional path.
const URL_PATTERN: &str = r"(?:http|https|ftp|ftps)://[a-zA-Z0-9\-.]+\.[a-zA-Z]{2,3}(?:/\S*)?";

static URL_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(URL_PATTERN).expect("valid regex"));

/// How URL occurrences are turned into links
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LinkMode {
    /// Every occurrence links to the first matched URL
    #[default]
    ReplaceAllWithFirst,
    /// Every occurrence links to itself
    EachOwnTarget,
}

impl std::str::FromStr for LinkMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "legacy" | "first" | "replace_all_with_first" => Ok(LinkMode::ReplaceAllWithFirst),
            "each" | "own" | "each_own_target" => Ok(LinkMode::EachOwnTarget),
            _ => Err(format!("Unknown link mode: {}", s)),
        }
    }
}

/// Byte span of the first URL in `text`
pub fn find_first_url(text: &str) -> Option<Range<usize>> {
    URL_RE.find(text).map(|m| m.range())
}

/// Render `text` as an HTML fragment with URLs turned into `rel="nofollow"` links.
///
/// Text between links is escaped, so the anchors are the only markup in the result.
pub fn linkify(text: &str, mode: LinkMode) -> String {
    let Some(first) = find_first_url(text) else {
        return escape_html(text);
    };
    let first_url = &text[first];

    let mut html = String::with_capacity(text.len() + 64);
    let mut last = 0;
    for m in URL_RE.find_iter(text) {
        html.push_str(&escape_html(&text[last..m.start()]));
        let target = match mode {
            LinkMode::ReplaceAllWithFirst => first_url,
            LinkMode::EachOwnTarget => m.as_str(),
        };
        html.push_str(&anchor(target));
        last = m.end();
    }
    html.push_str(&escape_html(&text[last..]));
    html
}

fn anchor(url: &str) -> String {
    let url = escape_html(url);
    format!("<a href=\"{}\" rel=\"nofollow\">{}</a>", url, url)
}

/// Escape text for embedding in HTML element content or a quoted attribute
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    // ===== find_first_url tests =====

    #[test]
    fn finds_first_url_span() {
        let text = "see http://ex.com/a now";
        let span = find_first_url(text).unwrap();
        assert_eq!(&text[span], "http://ex.com/a");
    }

    #[test]
    fn supports_all_schemes() {
        for url in [
            "http://ex.com",
            "https://ex.com",
            "ftp://files.ex.org",
            "ftps://files.ex.net/pub",
        ] {
            let span = find_first_url(url).unwrap();
            assert_eq!(&url[span], url);
        }
    }

    #[test]
    fn requires_dotted_host_with_short_tld() {
        assert!(find_first_url("http://localhost/a").is_none());
        assert!(find_first_url("mailto://x.y").is_none());
        assert!(find_first_url("no links here").is_none());
    }

    #[test]
    fn host_stops_at_three_letter_label_when_path_absent() {
        let text = "http://example.comx";
        let span = find_first_url(text).unwrap();
        assert_eq!(&text[span], "http://example.com");
    }

    // ===== linkify tests =====

    #[test]
    fn no_url_passes_through() {
        assert_eq!(
            linkify("need 5 for tonight", LinkMode::ReplaceAllWithFirst),
            "need 5 for tonight"
        );
    }

    #[test]
    fn single_url_becomes_link() {
        assert_eq!(
            linkify("join http://ut.ex.com/srv", LinkMode::ReplaceAllWithFirst),
            "join <a href=\"http://ut.ex.com/srv\" rel=\"nofollow\">http://ut.ex.com/srv</a>"
        );
    }

    #[test]
    fn legacy_mode_links_every_url_to_first() {
        let html = linkify(
            "check http://ex.com/a and http://ex.org/b",
            LinkMode::ReplaceAllWithFirst,
        );
        assert_eq!(
            html,
            "check <a href=\"http://ex.com/a\" rel=\"nofollow\">http://ex.com/a</a> and \
             <a href=\"http://ex.com/a\" rel=\"nofollow\">http://ex.com/a</a>"
        );
        assert!(!html.contains("ex.org"));
    }

    #[test]
    fn each_mode_links_every_url_to_itself() {
        let html = linkify(
            "check http://ex.com/a and http://ex.org/b",
            LinkMode::EachOwnTarget,
        );
        assert!(html.contains("<a href=\"http://ex.com/a\" rel=\"nofollow\">http://ex.com/a</a>"));
        assert!(html.contains("<a href=\"http://ex.org/b\" rel=\"nofollow\">http://ex.org/b</a>"));
    }

    #[test]
    fn surrounding_text_is_escaped() {
        let html = linkify("<b>hi</b> http://ex.com", LinkMode::ReplaceAllWithFirst);
        assert!(html.starts_with("&lt;b&gt;hi&lt;/b&gt; <a href="));
    }

    #[test]
    fn url_quotes_are_escaped_in_anchor() {
        let html = linkify("http://ex.com/\"x", LinkMode::ReplaceAllWithFirst);
        assert_eq!(
            html,
            "<a href=\"http://ex.com/&quot;x\" rel=\"nofollow\">http://ex.com/&quot;x</a>"
        );
    }

    #[test]
    fn link_mode_from_str() {
        assert_eq!(
            "legacy".parse::<LinkMode>().unwrap(),
            LinkMode::ReplaceAllWithFirst
        );
        assert_eq!("EACH".parse::<LinkMode>().unwrap(), LinkMode::EachOwnTarget);
        assert!("sometimes".parse::<LinkMode>().is_err());
    }
}
