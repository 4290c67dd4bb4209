//! Feed renderer
//!
//! Renders a feed to the auto-refreshing HTML listing.

use super::interpreter::RecordBody;
use super::linkify::escape_html;
use super::view::{Contact, RenderedFeed, ViewModel};

/// Page-level settings for the HTML listing
#[derive(Debug, Clone)]
pub struct PageOptions {
    pub title: String,
    pub refresh_secs: u32,
}

/// Render a feed to a complete HTML document
pub fn render_page(feed: &RenderedFeed, options: &PageOptions) -> String {
    let title = escape_html(&options.title);
    let mut buf = String::new();

    // Header
    buf.push_str("<!DOCTYPE html>\n<html>\n<head>\n");
    buf.push_str(&format!(
        "<meta http-equiv=\"refresh\" content=\"{}\" />\n",
        options.refresh_secs
    ));
    buf.push_str(&format!("<title>{}</title>\n", title));
    buf.push_str("<link rel=\"stylesheet\" href=\"style.css\" />\n");
    buf.push_str("</head>\n<body>\n<div id=\"all\">\n");
    buf.push_str(&format!("<h1>{}</h1>\n", title));

    buf.push_str("<ul id=\"list\">\n");
    for entry in &feed.entries {
        buf.push_str(&render_entry(entry));
    }
    buf.push_str("</ul>\n");

    buf.push_str("</div>\n</body>\n</html>\n");

    buf
}

fn render_entry(entry: &ViewModel) -> String {
    let mut buf = String::new();

    buf.push_str(&format!("<li><h2>{}</h2>", escape_html(entry.type_label)));

    match &entry.body {
        // Already escaped apart from the link anchors
        RecordBody::Message { html } => {
            buf.push_str(&format!("<div class=\"info\">{}</div>", html));
        }
        RecordBody::Tags { tags, skill } => {
            let chips: Vec<String> = tags
                .iter()
                .map(|t| format!("<div class=\"tag\">{}</div>", escape_html(t)))
                .collect();
            buf.push_str(&format!("<div class=\"tags\">{}</div>", chips.join(" ")));
            buf.push_str(&format!(
                "<div class=\"skill\">Skill: <span class=\"{}\">{}</span></div>",
                skill.css_class(),
                skill.label()
            ));
        }
    }

    buf.push_str(&render_contact(&entry.contact));
    buf.push_str(&format!(
        "<div class=\"time\">{}</div></li>\n",
        escape_html(&entry.relative_time)
    ));

    buf
}

fn render_contact(contact: &Contact) -> String {
    format!(
        "<div class=\"contact\"><span class=\"user\">{}</span> in \
         <span class=\"channel\">#{}</span> on <span class=\"network\">{}</span></div>",
        escape_html(&contact.user),
        escape_html(&contact.channel),
        escape_html(&contact.network)
    )
}
