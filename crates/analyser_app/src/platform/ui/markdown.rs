//! Styled terminal lines for a markdown report.

use analyser_engine::{parse_blocks, Block, BlockKind, Span as MdSpan, SpanStyle};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};

pub fn markdown_lines(markdown: &str) -> Vec<Line<'static>> {
    let blocks = parse_blocks(markdown);
    let mut lines = Vec::new();
    let mut previous: Option<&BlockKind> = None;

    for block in &blocks {
        if let Some(prev) = previous {
            let tight = matches!(
                (prev, &block.kind),
                (BlockKind::ListItem { .. }, BlockKind::ListItem { .. })
                    | (BlockKind::TableRow, BlockKind::TableRow)
            );
            if !tight {
                lines.push(Line::default());
            }
        }
        push_block(&mut lines, block);
        previous = Some(&block.kind);
    }
    lines
}

fn push_block(lines: &mut Vec<Line<'static>>, block: &Block) {
    match &block.kind {
        BlockKind::Heading(level) => {
            let mut base = Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD);
            if *level <= 2 {
                base = base.add_modifier(Modifier::UNDERLINED);
            }
            push_spans(lines, "", &block.spans, base);
        }
        BlockKind::ListItem { depth, marker } => {
            let prefix = format!("{}{} ", "  ".repeat(*depth), marker);
            push_spans(lines, &prefix, &block.spans, Style::default());
        }
        BlockKind::CodeBlock { .. } => {
            let style = Style::default().fg(Color::Yellow);
            for line in block.text().lines() {
                lines.push(Line::from(Span::styled(format!("    {line}"), style)));
            }
        }
        BlockKind::Quote => {
            let style = Style::default().add_modifier(Modifier::ITALIC);
            push_spans(lines, "│ ", &block.spans, style);
        }
        BlockKind::Rule => {
            lines.push(Line::from(Span::styled(
                "─".repeat(40),
                Style::default().fg(Color::DarkGray),
            )));
        }
        BlockKind::Paragraph | BlockKind::TableRow => {
            push_spans(lines, "", &block.spans, Style::default());
        }
    }
}

/// Emits spans as one or more lines, splitting on hard breaks. Every line
/// after the first is indented to the width of `prefix`.
fn push_spans(lines: &mut Vec<Line<'static>>, prefix: &str, spans: &[MdSpan], base: Style) {
    let continuation = " ".repeat(prefix.chars().count());
    let mut current: Vec<Span<'static>> = vec![Span::raw(prefix.to_string())];

    for md_span in spans {
        let style = base.patch(span_style(md_span.style));
        let mut parts = md_span.text.split('\n');
        if let Some(first) = parts.next() {
            if !first.is_empty() {
                current.push(Span::styled(first.to_string(), style));
            }
        }
        for part in parts {
            lines.push(Line::from(std::mem::take(&mut current)));
            current.push(Span::raw(continuation.clone()));
            if !part.is_empty() {
                current.push(Span::styled(part.to_string(), style));
            }
        }
    }
    lines.push(Line::from(current));
}

fn span_style(style: SpanStyle) -> Style {
    let mut out = Style::default();
    if style.strong {
        out = out.add_modifier(Modifier::BOLD);
    }
    if style.emphasis {
        out = out.add_modifier(Modifier::ITALIC);
    }
    if style.strikethrough {
        out = out.add_modifier(Modifier::CROSSED_OUT);
    }
    if style.code {
        out = out.fg(Color::Yellow);
    }
    if style.link {
        out = out.fg(Color::Blue).add_modifier(Modifier::UNDERLINED);
    }
    out
}
