use std::fmt::Write;

use crate::parsing::blocks::{Block, ListKind};

/// Label on an idle copy button. The live state is tracked by
/// [`crate::copy::CopyButton`] on whichever front end hosts the page.
pub const COPY_LABEL: &str = "Copy";

/// Renders blocks as an HTML fragment, one element per block.
///
/// Formatted text is inserted as-is: it already went through the inline
/// formatter (and its escaping). Code is always escaped here.
pub fn render(blocks: &[Block]) -> String {
    let mut out = String::new();
    for block in blocks {
        render_block(&mut out, block);
        out.push('\n');
    }
    out
}

/// Renders a standalone HTML page containing the fragment under a title.
pub fn render_page(title: &str, blocks: &[Block]) -> String {
    let title = html_escape::encode_text(title);
    let mut out = String::new();
    out.push_str("<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\" />\n");
    let _ = writeln!(out, "<title>{title}</title>");
    out.push_str("</head>\n<body>\n<article class=\"response\">\n");
    let _ = writeln!(out, "<h1 class=\"response-title\">{title}</h1>");
    out.push_str(&render(blocks));
    out.push_str("</article>\n</body>\n</html>\n");
    out
}

pub fn render_block(out: &mut String, block: &Block) {
    // Writing into a String cannot fail.
    let _ = match block {
        Block::Heading { level, text } => write!(out, "<h{level}>{text}</h{level}>"),
        Block::Paragraph { text } => write!(out, "<p>{text}</p>"),
        Block::List { kind, items } => {
            let tag = match kind {
                ListKind::Ordered => "ol",
                ListKind::Unordered => "ul",
            };
            let _ = write!(out, "<{tag}>");
            for item in items {
                let _ = write!(out, "<li>{item}</li>");
            }
            write!(out, "</{tag}>")
        }
        Block::Code { language, lines } => render_code(out, language.as_deref(), lines),
        Block::Rule => write!(out, "<hr />"),
    };
}

fn render_code(out: &mut String, language: Option<&str>, lines: &[String]) -> std::fmt::Result {
    let source = lines.join("\n");
    let (label, class) = match language {
        Some(lang) => (
            format!("Code block type {lang}"),
            format!(" class=\"language-{}\"", html_escape::encode_double_quoted_attribute(lang)),
        ),
        None => ("Code block".to_string(), String::new()),
    };

    write!(
        out,
        "<div class=\"code-block\" role=\"group\" aria-label=\"{}\">",
        html_escape::encode_double_quoted_attribute(&label)
    )?;
    write!(
        out,
        "<pre><code{class}>{}</code></pre>",
        html_escape::encode_text(&source)
    )?;
    write!(
        out,
        "<button type=\"button\" class=\"copy-button\" aria-label=\"Copy code to clipboard\">{COPY_LABEL}</button></div>"
    )
}
