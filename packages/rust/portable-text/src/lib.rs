//! Portable text to HTML rendering.
//!
//! Turns the block arrays stored on pages and services into the markup the
//! site templates embed. Output is always escaped; the only tags emitted are
//! the ones written here.

mod image;

use askama::filters::{Escaper, Html};
use tracing::{debug, instrument};

use aderyn_shared::{Block, BlockStyle, ImageBlock, ListKind, MarkDef, Span, TextBlock};

pub use image::ImageUrlBuilder;

/// Wrapper around every rendered body, shared with plain-text bodies.
pub const PROSE_OPEN: &str = r#"<div class="prose prose-lg max-w-none">"#;
pub const PROSE_CLOSE: &str = "</div>";

/// Rendered size of embedded images.
const IMAGE_WIDTH: u32 = 800;
const IMAGE_HEIGHT: u32 = 600;

// ---------------------------------------------------------------------------
// Renderer
// ---------------------------------------------------------------------------

/// Renders block arrays. Without an image builder, image blocks are dropped.
#[derive(Debug, Clone, Default)]
pub struct Renderer {
    images: Option<ImageUrlBuilder>,
}

impl Renderer {
    pub fn new(images: Option<ImageUrlBuilder>) -> Self {
        Self { images }
    }

    /// Render `blocks` to an HTML fragment inside the prose wrapper. No blocks, no markup.
    #[instrument(skip_all, fields(blocks = blocks.len()))]
    pub fn render(&self, blocks: &[Block]) -> String {
        if blocks.is_empty() {
            return String::new();
        }
        let mut out = String::from(PROSE_OPEN);
        let mut lists = ListStack::default();

        for block in blocks {
            match block {
                Block::Text(text) => match text.list_item {
                    Some(kind) => lists.item(&mut out, kind, text.level.unwrap_or(1), &render_spans(text)),
                    None => {
                        lists.close_all(&mut out);
                        render_text_block(&mut out, text);
                    }
                },
                Block::Image(img) => {
                    lists.close_all(&mut out);
                    self.render_image(&mut out, img);
                }
                Block::Unknown => {
                    lists.close_all(&mut out);
                    debug!("skipping unsupported block type");
                }
            }
        }
        lists.close_all(&mut out);
        out.push_str(PROSE_CLOSE);

        out
    }

    fn render_image(&self, out: &mut String, img: &ImageBlock) {
        let Some(asset) = &img.asset else {
            return;
        };
        let Some(src) = self
            .images
            .as_ref()
            .and_then(|b| b.url(&asset.id, IMAGE_WIDTH, IMAGE_HEIGHT))
        else {
            debug!(asset = %asset.id, "no image URL for asset");
            return;
        };

        let alt = img.alt.as_deref().unwrap_or("");
        out.push_str(&format!(
            r#"<div class="my-8"><img src="{}" alt="{}" width="{IMAGE_WIDTH}" height="{IMAGE_HEIGHT}" class="rounded-lg shadow-md">"#,
            escape_html(&src),
            escape_html(alt),
        ));
        if !alt.is_empty() {
            out.push_str(&format!(
                r#"<p class="text-sm text-gray-600 mt-2 text-center italic">{}</p>"#,
                escape_html(alt)
            ));
        }
        out.push_str("</div>");
    }
}

/// Render with no image support.
pub fn render(blocks: &[Block]) -> String {
    Renderer::default().render(blocks)
}

// ---------------------------------------------------------------------------
// Text blocks
// ---------------------------------------------------------------------------

fn render_text_block(out: &mut String, block: &TextBlock) {
    let (tag, class) = match block.style {
        BlockStyle::H1 => ("h1", "text-4xl font-bold text-gray-900 mb-6 mt-8"),
        BlockStyle::H2 => ("h2", "text-3xl font-semibold text-gray-900 mb-4 mt-6"),
        BlockStyle::H3 => ("h3", "text-2xl font-semibold text-gray-900 mb-3 mt-5"),
        BlockStyle::H4 => ("h4", "text-xl font-semibold text-gray-900 mb-2 mt-4"),
        BlockStyle::Blockquote => ("blockquote", "border-l-4 border-blue-500 pl-4 my-6 italic text-gray-600"),
        BlockStyle::Normal | BlockStyle::Other => ("p", "text-gray-700 mb-4 leading-relaxed"),
    };
    out.push_str(&format!(r#"<{tag} class="{class}">{}</{tag}>"#, render_spans(block)));
}

fn render_spans(block: &TextBlock) -> String {
    block
        .children
        .iter()
        .map(|span| render_span(span, &block.mark_defs))
        .collect()
}

/// Wrap a span's text in its marks; the first mark is outermost.
fn render_span(span: &Span, defs: &[MarkDef]) -> String {
    let mut html = escape_html(&span.text).replace('\n', "<br>");
    for mark in span.marks.iter().rev() {
        html = match mark.as_str() {
            "strong" => format!("<strong>{html}</strong>"),
            "em" => format!("<em>{html}</em>"),
            "code" => format!("<code>{html}</code>"),
            "underline" => format!(r#"<span class="underline">{html}</span>"#),
            "strike-through" => format!("<del>{html}</del>"),
            key => match defs.iter().find(|d| d.key == key) {
                Some(def) => render_annotation(def, html),
                None => html,
            },
        };
    }
    html
}

fn render_annotation(def: &MarkDef, inner: String) -> String {
    match (def.kind.as_str(), def.href.as_deref()) {
        ("link", Some(href)) if !href.is_empty() => {
            let rel = if href.starts_with('/') {
                ""
            } else {
                r#" rel="noreferrer noopener""#
            };
            format!(
                r#"<a href="{}"{rel} class="text-blue-600 hover:text-blue-800 underline">{inner}</a>"#,
                escape_html(href)
            )
        }
        _ => inner,
    }
}

// ---------------------------------------------------------------------------
// Lists
// ---------------------------------------------------------------------------

/// Open lists, innermost last. Each open list has one unclosed `<li>`.
#[derive(Default)]
struct ListStack {
    open: Vec<(ListKind, u32)>,
}

impl ListStack {
    fn item(&mut self, out: &mut String, kind: ListKind, level: u32, content: &str) {
        let level = level.max(1);

        while let Some(&(open_kind, open_level)) = self.open.last() {
            if open_level > level || (open_level == level && open_kind != kind) {
                self.close_one(out);
            } else {
                break;
            }
        }

        match self.open.last() {
            Some(&(_, open_level)) if open_level == level => out.push_str("</li>"),
            _ => {
                out.push_str(open_tag(kind));
                self.open.push((kind, level));
            }
        }

        out.push_str("<li>");
        out.push_str(content);
    }

    fn close_one(&mut self, out: &mut String) {
        if let Some((kind, _)) = self.open.pop() {
            out.push_str("</li>");
            out.push_str(close_tag(kind));
        }
    }

    fn close_all(&mut self, out: &mut String) {
        while !self.open.is_empty() {
            self.close_one(out);
        }
    }
}

fn open_tag(kind: ListKind) -> &'static str {
    match kind {
        ListKind::Bullet => r#"<ul class="list-disc list-inside mb-4 space-y-2 text-gray-700">"#,
        ListKind::Number => r#"<ol class="list-decimal list-inside mb-4 space-y-2 text-gray-700">"#,
    }
}

fn close_tag(kind: ListKind) -> &'static str {
    match kind {
        ListKind::Bullet => "</ul>",
        ListKind::Number => "</ol>",
    }
}

/// Escape text for use in element content and quoted attributes.
pub fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    // Writing to a String never fails.
    let _ = Html.write_escaped_str(&mut out, s);
    out
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
