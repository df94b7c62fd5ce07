//! Markdown rendering for analysis reports.
//!
//! The terminal form and the `text` output format work on [`Block`]s, a flat
//! list of styled lines-to-be. The `html` output format goes straight through
//! pulldown-cmark's HTML writer.

use pulldown_cmark::{html, CodeBlockKind, Event, HeadingLevel, Options, Parser, Tag, TagEnd};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BlockKind {
    Heading(u8),
    Paragraph,
    /// `depth` starts at 0 for top-level items.
    ListItem { depth: usize, marker: String },
    CodeBlock { language: Option<String> },
    Quote,
    TableRow,
    Rule,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SpanStyle {
    pub strong: bool,
    pub emphasis: bool,
    pub strikethrough: bool,
    pub code: bool,
    pub link: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span {
    pub text: String,
    pub style: SpanStyle,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Block {
    pub kind: BlockKind,
    pub spans: Vec<Span>,
}

impl Block {
    fn new(kind: BlockKind) -> Self {
        Self {
            kind,
            spans: Vec::new(),
        }
    }

    /// Concatenated text of all spans, without styling.
    pub fn text(&self) -> String {
        self.spans.iter().map(|span| span.text.as_str()).collect()
    }
}

fn options() -> Options {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_STRIKETHROUGH);
    options.insert(Options::ENABLE_TASKLISTS);
    options
}

/// Renders markdown into an HTML fragment.
pub fn render_html(markdown: &str) -> String {
    let parser = Parser::new_ext(markdown, options());
    let mut out = String::new();
    html::push_html(&mut out, parser);
    out
}

/// Parses markdown into display blocks.
pub fn parse_blocks(markdown: &str) -> Vec<Block> {
    let mut builder = BlockBuilder::default();
    for event in Parser::new_ext(markdown, options()) {
        builder.push_event(event);
    }
    builder.finish()
}

/// Renders markdown as plain terminal text: setext-underlined headings,
/// indented lists and code.
pub fn render_plain_text(markdown: &str) -> String {
    let blocks = parse_blocks(markdown);
    let mut out = String::new();
    let mut previous: Option<&BlockKind> = None;

    for block in &blocks {
        if let Some(prev) = previous {
            let tight = matches!(
                (prev, &block.kind),
                (BlockKind::ListItem { .. }, BlockKind::ListItem { .. })
                    | (BlockKind::TableRow, BlockKind::TableRow)
            );
            out.push_str(if tight { "\n" } else { "\n\n" });
        }
        let text = block.text();
        match &block.kind {
            BlockKind::Heading(level) => {
                out.push_str(&text);
                let underline = match level {
                    1 => Some('='),
                    2 => Some('-'),
                    _ => None,
                };
                if let Some(ch) = underline {
                    out.push('\n');
                    out.extend(std::iter::repeat(ch).take(text.chars().count().max(3)));
                }
            }
            BlockKind::ListItem { depth, marker } => {
                out.push_str(&"  ".repeat(*depth));
                out.push_str(marker);
                out.push(' ');
                out.push_str(&text);
            }
            BlockKind::CodeBlock { .. } => {
                let indented: Vec<String> = text.lines().map(|line| format!("    {line}")).collect();
                out.push_str(&indented.join("\n"));
            }
            BlockKind::Quote => {
                let quoted: Vec<String> = text.lines().map(|line| format!("> {line}")).collect();
                out.push_str(&quoted.join("\n"));
            }
            BlockKind::Rule => out.push_str("----"),
            BlockKind::Paragraph | BlockKind::TableRow => out.push_str(&text),
        }
        previous = Some(&block.kind);
    }

    if !out.is_empty() {
        out.push('\n');
    }
    out
}

#[derive(Default)]
struct BlockBuilder {
    blocks: Vec<Block>,
    current: Option<Block>,
    style: SpanStyle,
    /// Next ordinal for ordered lists, `None` for bullets.
    lists: Vec<Option<u64>>,
    quote_depth: usize,
    in_cell_row: bool,
}

impl BlockBuilder {
    fn push_event(&mut self, event: Event<'_>) {
        match event {
            Event::Start(tag) => self.start(tag),
            Event::End(tag) => self.end(tag),
            Event::Text(text) => self.push_text(&text, self.style),
            Event::Code(text) => {
                let style = SpanStyle {
                    code: true,
                    ..self.style
                };
                self.push_text(&text, style);
            }
            Event::Html(text) | Event::InlineHtml(text) => self.push_text(&text, self.style),
            Event::SoftBreak => self.push_text(" ", self.style),
            Event::HardBreak => self.push_text("\n", self.style),
            Event::TaskListMarker(checked) => {
                self.push_text(if checked { "[x] " } else { "[ ] " }, self.style)
            }
            Event::Rule => {
                self.flush();
                self.blocks.push(Block::new(BlockKind::Rule));
            }
            _ => {}
        }
    }

    fn start(&mut self, tag: Tag<'_>) {
        match tag {
            Tag::Heading { level, .. } => self.open(BlockKind::Heading(heading_level(level))),
            Tag::Paragraph => {
                // Loose list items wrap their text in a paragraph.
                let reuse_item = matches!(
                    &self.current,
                    Some(Block { kind: BlockKind::ListItem { .. }, spans }) if spans.is_empty()
                );
                if !reuse_item {
                    let kind = if self.quote_depth > 0 {
                        BlockKind::Quote
                    } else {
                        BlockKind::Paragraph
                    };
                    self.open(kind);
                }
            }
            Tag::List(start) => {
                self.flush();
                self.lists.push(start);
            }
            Tag::Item => {
                let depth = self.lists.len().saturating_sub(1);
                let marker = match self.lists.last_mut() {
                    Some(Some(next)) => {
                        let marker = format!("{next}.");
                        *next += 1;
                        marker
                    }
                    _ => "•".to_string(),
                };
                self.open(BlockKind::ListItem { depth, marker });
            }
            Tag::CodeBlock(kind) => {
                let language = match kind {
                    CodeBlockKind::Fenced(lang) if !lang.trim().is_empty() => {
                        Some(lang.trim().to_string())
                    }
                    _ => None,
                };
                self.open(BlockKind::CodeBlock { language });
            }
            Tag::BlockQuote { .. } => {
                self.flush();
                self.quote_depth += 1;
            }
            Tag::TableHead | Tag::TableRow => {
                self.open(BlockKind::TableRow);
                self.in_cell_row = false;
            }
            Tag::TableCell => {
                if self.in_cell_row {
                    self.push_text(" | ", SpanStyle::default());
                }
                self.in_cell_row = true;
            }
            Tag::Emphasis => self.style.emphasis = true,
            Tag::Strong => self.style.strong = true,
            Tag::Strikethrough => self.style.strikethrough = true,
            Tag::Link { .. } => self.style.link = true,
            _ => {}
        }
    }

    fn end(&mut self, tag: TagEnd) {
        match tag {
            TagEnd::Heading { .. }
            | TagEnd::Paragraph
            | TagEnd::Item
            | TagEnd::TableHead
            | TagEnd::TableRow => self.flush(),
            TagEnd::CodeBlock => {
                if let Some(Block { spans, .. }) = self.current.as_mut() {
                    if let Some(last) = spans.last_mut() {
                        let trimmed = last.text.trim_end_matches('\n').len();
                        last.text.truncate(trimmed);
                    }
                }
                self.flush();
            }
            TagEnd::List { .. } => {
                self.flush();
                self.lists.pop();
            }
            TagEnd::BlockQuote { .. } => {
                self.flush();
                self.quote_depth = self.quote_depth.saturating_sub(1);
            }
            TagEnd::Emphasis => self.style.emphasis = false,
            TagEnd::Strong => self.style.strong = false,
            TagEnd::Strikethrough => self.style.strikethrough = false,
            TagEnd::Link => self.style.link = false,
            _ => {}
        }
    }

    fn open(&mut self, kind: BlockKind) {
        self.flush();
        self.current = Some(Block::new(kind));
    }

    fn push_text(&mut self, text: &str, style: SpanStyle) {
        if text.is_empty() {
            return;
        }
        let block = self.current.get_or_insert_with(|| Block::new(BlockKind::Paragraph));
        if let Some(last) = block.spans.last_mut().filter(|last| last.style == style) {
            last.text.push_str(text);
            return;
        }
        block.spans.push(Span {
            text: text.to_string(),
            style,
        });
    }

    fn flush(&mut self) {
        if let Some(block) = self.current.take() {
            let keep = !block.spans.is_empty() || matches!(block.kind, BlockKind::CodeBlock { .. });
            if keep {
                self.blocks.push(block);
            }
        }
    }

    fn finish(mut self) -> Vec<Block> {
        self.flush();
        self.blocks
    }
}

fn heading_level(level: HeadingLevel) -> u8 {
    match level {
        HeadingLevel::H1 => 1,
        HeadingLevel::H2 => 2,
        HeadingLevel::H3 => 3,
        HeadingLevel::H4 => 4,
        HeadingLevel::H5 => 5,
        HeadingLevel::H6 => 6,
    }
}
