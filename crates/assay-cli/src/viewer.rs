use assay_engine::{Block, Clipboard, CopyButton, CopyState, FormattedText, ListKind, Segment};
use crossterm::event::KeyCode;
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block as Panel, Borders, Paragraph, Wrap},
};
use std::time::{Duration, Instant};

const RULE_WIDTH: usize = 40;
const PAGE: u16 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Continue,
    Quit,
}

/// A code block in the response together with its copy button.
struct CodeTarget {
    block: usize,
    button: CopyButton,
}

/// Scrollable view of a parsed response with a focusable copy button per
/// code block.
pub struct Viewer<C: Clipboard> {
    title: String,
    blocks: Vec<Block>,
    code: Vec<CodeTarget>,
    focused: Option<usize>,
    /// First visible row, counted after wrapping.
    scroll: u16,
    /// Text width of the body at the last draw; zero before the first draw.
    width: u16,
    clipboard: C,
}

impl<C: Clipboard> Viewer<C> {
    pub fn new(title: String, blocks: Vec<Block>, clipboard: C, feedback: Duration) -> Self {
        let code: Vec<CodeTarget> = blocks
            .iter()
            .enumerate()
            .filter(|(_, b)| matches!(b, Block::Code { .. }))
            .map(|(block, _)| CodeTarget {
                block,
                button: CopyButton::new(feedback),
            })
            .collect();
        let focused = if code.is_empty() { None } else { Some(0) };

        Self {
            title,
            blocks,
            code,
            focused,
            scroll: 0,
            width: 0,
            clipboard,
        }
    }

    pub fn handle_key(&mut self, key: KeyCode, now: Instant) -> Action {
        match key {
            KeyCode::Char('q') | KeyCode::Esc => return Action::Quit,
            KeyCode::Down | KeyCode::Char('j') => self.scroll_down(1),
            KeyCode::Up | KeyCode::Char('k') => self.scroll_up(1),
            KeyCode::PageDown | KeyCode::Char(' ') => self.scroll_down(PAGE),
            KeyCode::PageUp => self.scroll_up(PAGE),
            KeyCode::Home | KeyCode::Char('g') => self.scroll = 0,
            KeyCode::Tab => self.focus_next(),
            KeyCode::BackTab => self.focus_previous(),
            KeyCode::Char('c') | KeyCode::Enter => {
                self.copy_focused(now);
            }
            _ => {}
        }
        Action::Continue
    }

    /// Lets expired copy feedback fall back to `Copy`.
    pub fn tick(&mut self, now: Instant) {
        for target in &mut self.code {
            target.button.tick(now);
        }
    }

    pub fn focus_next(&mut self) {
        if self.code.is_empty() {
            return;
        }
        let next = self.focused.map_or(0, |i| (i + 1) % self.code.len());
        self.focus(next);
    }

    pub fn focus_previous(&mut self) {
        if self.code.is_empty() {
            return;
        }
        let prev = match self.focused {
            Some(0) | None => self.code.len() - 1,
            Some(i) => i - 1,
        };
        self.focus(prev);
    }

    /// Copies the focused code block's raw source.
    pub fn copy_focused(&mut self, now: Instant) -> Option<CopyState> {
        let target = self.code.get_mut(self.focused?)?;
        let source = self.blocks[target.block].source()?;
        Some(target.button.press(&mut self.clipboard, &source, now))
    }

    pub fn focused_state(&self) -> Option<CopyState> {
        self.focused.map(|i| self.code[i].button.state())
    }

    pub fn scroll(&self) -> u16 {
        self.scroll
    }

    fn focus(&mut self, index: usize) {
        self.focused = Some(index);
        let (lines, starts) = self.lines();
        let rows = self.row_offsets(&lines);
        if let Some(&start) = starts.get(index) {
            self.scroll = to_row(rows[start]);
        }
    }

    fn scroll_down(&mut self, n: u16) {
        self.scroll = self.scroll.saturating_add(n).min(self.max_scroll());
    }

    /// Scrolling stops once the last row reaches the top of the body.
    fn max_scroll(&self) -> u16 {
        let (lines, _) = self.lines();
        let total = self.row_offsets(&lines).last().copied().unwrap_or(0);
        to_row(total.saturating_sub(1))
    }

    /// Row at which each line starts once wrapped to the body width, with
    /// the total row count as the final entry.
    fn row_offsets(&self, lines: &[Line<'static>]) -> Vec<usize> {
        let mut offsets = Vec::with_capacity(lines.len() + 1);
        let mut row = 0;
        offsets.push(row);
        for line in lines {
            row += self.wrapped_rows(line);
            offsets.push(row);
        }
        offsets
    }

    fn wrapped_rows(&self, line: &Line<'static>) -> usize {
        if self.width == 0 {
            return 1;
        }
        Paragraph::new(line.clone())
            .wrap(Wrap { trim: false })
            .line_count(self.width)
    }

    fn scroll_up(&mut self, n: u16) {
        self.scroll = self.scroll.saturating_sub(n);
    }

    /// Renders every block into terminal lines, returning them with the
    /// first line index of each code block.
    pub fn lines(&self) -> (Vec<Line<'static>>, Vec<usize>) {
        let mut lines = vec![];
        let mut starts = vec![];
        let mut code = self.code.iter().enumerate();

        for (i, block) in self.blocks.iter().enumerate() {
            if i > 0 {
                lines.push(Line::default());
            }
            match block {
                Block::Heading { level, text } => {
                    lines.push(Line::from(text_spans(text)).style(heading_style(*level)));
                }
                Block::Paragraph { text } => lines.push(Line::from(text_spans(text))),
                Block::List { kind, items } => {
                    for (n, item) in items.iter().enumerate() {
                        let marker = match kind {
                            ListKind::Ordered => format!("  {}. ", n + 1),
                            ListKind::Unordered => "  • ".to_string(),
                        };
                        let mut spans = vec![Span::styled(marker, Style::default().fg(Color::Cyan))];
                        spans.extend(text_spans(item));
                        lines.push(Line::from(spans));
                    }
                }
                Block::Code { language, lines: code_lines } => {
                    starts.push(lines.len());
                    let (index, target) = match code.next() {
                        Some(entry) => entry,
                        None => continue,
                    };
                    let focused = self.focused == Some(index);
                    lines.push(code_header(language.as_deref(), target.button.state(), focused));
                    for line in code_lines {
                        lines.push(Line::from(vec![
                            Span::styled("│ ", border_style()),
                            Span::styled(line.clone(), Style::default().fg(Color::Green)),
                        ]));
                    }
                    lines.push(Line::styled("└─", border_style()));
                }
                Block::Rule => lines.push(Line::styled("─".repeat(RULE_WIDTH), border_style())),
            }
        }

        (lines, starts)
    }

    pub fn draw(&mut self, f: &mut Frame) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(1)].as_ref())
            .split(f.area());

        // Inside the left and right borders.
        self.width = chunks[0].width.saturating_sub(2);
        self.scroll = self.scroll.min(self.max_scroll());

        let (lines, _) = self.lines();
        let content = if lines.is_empty() {
            vec![Line::from("The response is empty")]
        } else {
            lines
        };

        let body = Paragraph::new(content)
            .block(Panel::default().borders(Borders::ALL).title(self.title.clone()))
            .wrap(Wrap { trim: false })
            .scroll((self.scroll, 0));
        f.render_widget(body, chunks[0]);

        let help_text = Line::from(vec![
            Span::raw("q: Quit | "),
            Span::raw("↑/k ↓/j: Scroll | "),
            Span::raw("Tab/Shift-Tab: Code block | "),
            Span::raw("c/Enter: Copy"),
        ]);
        f.render_widget(Paragraph::new(vec![help_text]), chunks[1]);
    }
}

fn to_row(row: usize) -> u16 {
    u16::try_from(row).unwrap_or(u16::MAX)
}

fn text_spans(text: &FormattedText) -> Vec<Span<'static>> {
    text.segments()
        .into_iter()
        .map(|seg| {
            let style = segment_style(&seg);
            Span::styled(seg.text, style)
        })
        .collect()
}

fn segment_style(seg: &Segment) -> Style {
    let mut style = Style::default();
    if seg.strong {
        style = style.add_modifier(Modifier::BOLD);
    }
    if seg.emphasis {
        style = style.add_modifier(Modifier::ITALIC);
    }
    if seg.code {
        style = style.fg(Color::Yellow);
    }
    style
}

fn heading_style(level: u8) -> Style {
    let style = Style::default().add_modifier(Modifier::BOLD);
    match level {
        1 => style.fg(Color::Cyan).add_modifier(Modifier::UNDERLINED),
        2 => style.fg(Color::Cyan),
        _ => style,
    }
}

fn border_style() -> Style {
    Style::default().fg(Color::DarkGray)
}

fn code_header(language: Option<&str>, state: CopyState, focused: bool) -> Line<'static> {
    let button_style = match state {
        CopyState::Copied => Style::default().fg(Color::Black).bg(Color::Green),
        CopyState::Failed => Style::default().fg(Color::White).bg(Color::Red),
        CopyState::Idle if focused => Style::default().fg(Color::Black).bg(Color::Yellow),
        CopyState::Idle => border_style(),
    };
    Line::from(vec![
        Span::styled(format!("┌─ {} ", language.unwrap_or("code")), border_style()),
        Span::styled(format!("[{}]", state.label()), button_style),
    ])
}
