use crate::parsing::blocks::Block;

/// Renders blocks as an indented outline, one line per block header,
/// list item or code line.
///
/// Labels carry no trailing whitespace of their own. Text after a label is
/// appended verbatim, so paragraphs, items and code lines keep any trailing
/// spaces they had.
pub fn render(blocks: &[Block]) -> String {
    let mut lines: Vec<String> = vec![];

    for block in blocks {
        let name = block.kind_name();
        match block {
            Block::Heading { level, text } => {
                lines.push(labelled(&format!("{name}({level})"), text.as_str()));
            }
            Block::Paragraph { text } => lines.push(labelled(name, text.as_str())),
            Block::List { kind, items } => {
                let order = if kind.is_ordered() { "ordered" } else { "unordered" };
                lines.push(format!("{name}({order})"));
                for (n, item) in items.iter().enumerate() {
                    let marker = if kind.is_ordered() {
                        format!("  {}.", n + 1)
                    } else {
                        "  -".to_string()
                    };
                    lines.push(labelled(&marker, item.as_str()));
                }
            }
            Block::Code { language, lines: code } => {
                match language {
                    Some(lang) => lines.push(format!("{name}({lang})")),
                    None => lines.push(name.to_string()),
                }
                for line in code {
                    lines.push(labelled("  |", line));
                }
            }
            Block::Rule => lines.push(name.to_string()),
        }
    }

    lines.join("\n")
}

fn labelled(label: &str, text: &str) -> String {
    if text.is_empty() {
        label.to_string()
    } else {
        format!("{label} {text}")
    }
}
