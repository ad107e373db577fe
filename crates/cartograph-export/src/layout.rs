//! Page layout for the documentation report.
//!
//! Layout is computed into a [`RenderedDocument`] before any PDF object is
//! created, so page composition can be inspected without parsing PDF bytes.
//! Coordinates are millimetres measured from the top-left corner of the page.

use serde::{Deserialize, Serialize};

use cartograph_core::models::line::{FormattedLine, LineKind};

use crate::metrics::{self, FontWeight};
use crate::styles::DocumentStyles;

/// Why a page was started.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PageOrigin {
    /// The opening page carrying the title block.
    First,
    /// A fresh page for the next explanation.
    Explanation,
    /// Content ran past the bottom margin.
    Overflow,
}

/// A single positioned line of text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextBlock {
    pub text: String,
    pub weight: FontWeight,
    pub size_pt: f32,
    pub x_mm: f32,
    pub baseline_mm: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page {
    pub origin: PageOrigin,
    /// Whether the logo is drawn in the top-right corner.
    pub has_logo: bool,
    pub blocks: Vec<TextBlock>,
}

/// The laid-out report: pages in order, each with its text blocks in order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderedDocument {
    pub pages: Vec<Page>,
}

impl RenderedDocument {
    /// Page breaks issued between explanations.
    pub fn explanation_breaks(&self) -> usize {
        self.count_origin(PageOrigin::Explanation)
    }

    /// Page breaks issued because content overflowed a page.
    pub fn overflow_breaks(&self) -> usize {
        self.count_origin(PageOrigin::Overflow)
    }

    /// All text blocks across all pages, in document order.
    pub fn blocks(&self) -> impl Iterator<Item = &TextBlock> {
        self.pages.iter().flat_map(|p| p.blocks.iter())
    }

    fn count_origin(&self, origin: PageOrigin) -> usize {
        self.pages.iter().filter(|p| p.origin == origin).count()
    }
}

#[derive(Clone, Copy)]
enum Align {
    Left,
    Center,
}

/// Lay out one section per explanation.
///
/// The title block opens the first page. Every section after the first
/// starts on a new page. `logo` says whether a logo will be available to
/// draw; it is placed on the first page and each explanation page.
pub fn layout_document(
    sections: &[Vec<FormattedLine>],
    styles: &DocumentStyles,
    logo: bool,
) -> RenderedDocument {
    let mut layout = Layout::new(styles, logo);
    layout.title_block();

    for (index, lines) in sections.iter().enumerate() {
        layout.section(index + 1, lines);
        if index + 1 < sections.len() {
            layout.new_page(PageOrigin::Explanation);
        }
    }

    RenderedDocument {
        pages: layout.pages,
    }
}

struct Layout<'a> {
    styles: &'a DocumentStyles,
    logo: bool,
    pages: Vec<Page>,
    y: f32,
}

impl<'a> Layout<'a> {
    fn new(styles: &'a DocumentStyles, logo: bool) -> Self {
        Self {
            styles,
            logo,
            pages: vec![Page {
                origin: PageOrigin::First,
                has_logo: logo,
                blocks: Vec::new(),
            }],
            y: styles.margin_top_mm,
        }
    }

    fn new_page(&mut self, origin: PageOrigin) {
        self.pages.push(Page {
            origin,
            has_logo: self.logo && origin != PageOrigin::Overflow,
            blocks: Vec::new(),
        });
        self.y = self.styles.margin_top_mm;
    }

    fn title_block(&mut self) {
        let s = self.styles;
        self.cell(&s.product_name, FontWeight::Bold, s.title_size, s.cell_height_mm, Align::Center, 0.0);
        self.advance(s.title_gap_mm);
        self.cell(&s.subtitle, FontWeight::Bold, s.subtitle_size, s.cell_height_mm, Align::Center, 0.0);
        self.advance(s.title_block_gap_mm);
    }

    fn section(&mut self, number: usize, lines: &[FormattedLine]) {
        let s = self.styles;
        self.cell(
            &format!("Table {number}"),
            FontWeight::Bold,
            s.label_size,
            s.cell_height_mm,
            Align::Left,
            0.0,
        );
        self.advance(s.label_gap_mm);

        for line in lines {
            match line.kind {
                LineKind::Heading => {
                    self.paragraph(&line.text, FontWeight::Bold, s.heading_size, 0.0);
                    self.advance(s.heading_gap_mm);
                }
                LineKind::Subheading => {
                    self.paragraph(&line.text, FontWeight::Bold, s.subheading_size, 0.0);
                    self.advance(s.subheading_gap_mm);
                }
                LineKind::Column => {
                    self.paragraph(&line.text, FontWeight::Bold, s.body_size, s.column_indent_mm);
                    self.advance(s.item_gap_mm);
                }
                LineKind::Property => {
                    let text = format!("- {}", line.text);
                    self.paragraph(&text, FontWeight::Regular, s.body_size, s.property_indent_mm);
                    self.advance(s.item_gap_mm);
                }
                LineKind::Text => {
                    self.paragraph(&line.text, FontWeight::Regular, s.body_size, 0.0);
                    self.advance(s.paragraph_gap_mm);
                }
            }
        }

        self.advance(s.section_gap_mm);
    }

    /// Wrapped text, one `line_height_mm` row per line. Empty text still
    /// takes one row.
    fn paragraph(&mut self, text: &str, weight: FontWeight, size_pt: f32, indent_mm: f32) {
        let s = self.styles;
        let text = metrics::sanitize(text);
        let width = s.content_width_mm() - indent_mm - 2.0 * s.cell_padding_mm;

        let mut rows = metrics::wrap_text(&text, weight, size_pt, width);
        if rows.is_empty() {
            rows.push(String::new());
        }

        for row in rows {
            self.cell(&row, weight, size_pt, s.line_height_mm, Align::Left, indent_mm);
            self.advance(s.line_height_mm);
        }
    }

    /// Place one line of text in a cell of height `height_mm` at the current
    /// position, breaking the page first if the cell would not fit. Does not
    /// move the cursor.
    fn cell(
        &mut self,
        text: &str,
        weight: FontWeight,
        size_pt: f32,
        height_mm: f32,
        align: Align,
        indent_mm: f32,
    ) {
        if self.y + height_mm > self.styles.page_break_y_mm() {
            self.new_page(PageOrigin::Overflow);
        }

        let text = metrics::sanitize(text);
        if text.is_empty() {
            return;
        }

        let s = self.styles;
        let x_mm = match align {
            Align::Left => s.margin_left_mm + indent_mm + s.cell_padding_mm,
            Align::Center => {
                let width = metrics::text_width_mm(&text, weight, size_pt);
                s.margin_left_mm + (s.content_width_mm() - width) / 2.0
            }
        };
        let baseline_mm = self.y + height_mm / 2.0 + 0.3 * metrics::size_mm(size_pt);

        if let Some(page) = self.pages.last_mut() {
            page.blocks.push(TextBlock {
                text,
                weight,
                size_pt,
                x_mm,
                baseline_mm,
            });
        }
    }

    fn advance(&mut self, mm: f32) {
        self.y += mm;
    }
}
