/// A run of formatted text sharing one style.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Segment {
    pub text: String,
    pub strong: bool,
    pub emphasis: bool,
    pub code: bool,
}

#[derive(Debug, Clone, Copy)]
enum Tag {
    Strong,
    Emphasis,
    Code,
}

const TAGS: [(&str, Tag, bool); 6] = [
    ("<strong>", Tag::Strong, true),
    ("</strong>", Tag::Strong, false),
    ("<em>", Tag::Emphasis, true),
    ("</em>", Tag::Emphasis, false),
    ("<code>", Tag::Code, true),
    ("</code>", Tag::Code, false),
];

#[derive(Default)]
struct Depths {
    strong: u32,
    emphasis: u32,
    code: u32,
}

impl Depths {
    fn apply(&mut self, tag: Tag, open: bool) {
        let depth = match tag {
            Tag::Strong => &mut self.strong,
            Tag::Emphasis => &mut self.emphasis,
            Tag::Code => &mut self.code,
        };
        *depth = if open {
            depth.saturating_add(1)
        } else {
            depth.saturating_sub(1)
        };
    }
}

/// Splits inline markup into styled segments.
///
/// Only the tags the inline rules emit are recognised; any other `<` is
/// literal text. Tags may close out of order (`<strong><em>a</strong></em>`),
/// so styles are tracked as independent depth counters rather than a stack.
pub(super) fn split(markup: &str) -> Vec<Segment> {
    let mut out = vec![];
    let mut depths = Depths::default();
    let mut pending = String::new();
    let mut rest = markup;

    while let Some(lt) = rest.find('<') {
        pending.push_str(&rest[..lt]);
        rest = &rest[lt..];

        match TAGS.iter().find(|(lit, _, _)| rest.starts_with(lit)) {
            Some((lit, tag, open)) => {
                flush(&mut out, &mut pending, &depths);
                depths.apply(*tag, *open);
                rest = &rest[lit.len()..];
            }
            None => {
                pending.push('<');
                rest = &rest[1..];
            }
        }
    }
    pending.push_str(rest);
    flush(&mut out, &mut pending, &depths);
    out
}

fn flush(out: &mut Vec<Segment>, pending: &mut String, depths: &Depths) {
    if pending.is_empty() {
        return;
    }
    let text = html_escape::decode_html_entities(pending.as_str()).into_owned();
    pending.clear();
    out.push(Segment {
        text,
        strong: depths.strong > 0,
        emphasis: depths.emphasis > 0,
        code: depths.code > 0,
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parsing::inline::format_inline;
    use pretty_assertions::assert_eq;

    fn seg(text: &str, strong: bool, emphasis: bool, code: bool) -> Segment {
        Segment {
            text: text.to_string(),
            strong,
            emphasis,
            code,
        }
    }

    #[test]
    fn plain_text_is_one_segment() {
        assert_eq!(split("hello"), vec![seg("hello", false, false, false)]);
    }

    #[test]
    fn empty_markup_has_no_segments() {
        assert_eq!(split(""), vec![]);
    }

    #[test]
    fn styles_follow_tags() {
        let text = format_inline("a **b** *c* `d`");
        assert_eq!(
            text.segments(),
            vec![
                seg("a ", false, false, false),
                seg("b", true, false, false),
                seg(" ", false, false, false),
                seg("c", false, true, false),
                seg(" ", false, false, false),
                seg("d", false, false, true),
            ]
        );
    }

    #[test]
    fn crossed_tags_keep_both_styles() {
        assert_eq!(
            split("<strong><em>x</strong></em>"),
            vec![seg("x", true, true, false)]
        );
    }

    #[test]
    fn escaped_angle_brackets_are_literal() {
        let text = format_inline("if a < b && c > d");
        assert_eq!(
            text.segments(),
            vec![seg("if a < b && c > d", false, false, false)]
        );
    }

    #[test]
    fn unknown_tags_stay_literal() {
        assert_eq!(split("<b>x</b>"), vec![seg("<b>x</b>", false, false, false)]);
    }
}
