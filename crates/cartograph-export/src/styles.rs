use serde::{Deserialize, Serialize};

/// Document styling configuration for the PDF report.
///
/// All lengths are millimetres, font sizes are points.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocumentStyles {
    pub page_width_mm: f32,
    pub page_height_mm: f32,

    pub margin_left_mm: f32,
    pub margin_right_mm: f32,
    pub margin_top_mm: f32,
    /// Content that would cross this distance from the bottom edge moves to
    /// a new page.
    pub margin_bottom_mm: f32,

    /// Horizontal padding inside every text cell.
    pub cell_padding_mm: f32,
    /// Height of single-line cells (title, subtitle, table label).
    pub cell_height_mm: f32,
    /// Line height of wrapped paragraphs.
    pub line_height_mm: f32,

    pub product_name: String,
    pub subtitle: String,

    pub title_size: f32,
    pub subtitle_size: f32,
    pub label_size: f32,
    pub heading_size: f32,
    pub subheading_size: f32,
    pub body_size: f32,

    pub title_gap_mm: f32,
    pub title_block_gap_mm: f32,
    pub label_gap_mm: f32,
    pub heading_gap_mm: f32,
    pub subheading_gap_mm: f32,
    pub item_gap_mm: f32,
    pub paragraph_gap_mm: f32,
    pub section_gap_mm: f32,

    pub column_indent_mm: f32,
    pub property_indent_mm: f32,

    pub logo: LogoPlacement,
}

/// Where the logo goes on a page. Height follows the image aspect ratio.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct LogoPlacement {
    pub x_mm: f32,
    pub y_mm: f32,
    pub width_mm: f32,
}

impl DocumentStyles {
    /// Width between the left and right margins.
    pub fn content_width_mm(&self) -> f32 {
        self.page_width_mm - self.margin_left_mm - self.margin_right_mm
    }

    /// Lowest y (from the top edge) content may reach.
    pub fn page_break_y_mm(&self) -> f32 {
        self.page_height_mm - self.margin_bottom_mm
    }
}

impl Default for DocumentStyles {
    fn default() -> Self {
        Self {
            page_width_mm: 210.0,
            page_height_mm: 297.0,
            margin_left_mm: 15.0,
            margin_right_mm: 15.0,
            margin_top_mm: 10.0,
            margin_bottom_mm: 15.0,
            cell_padding_mm: 1.0,
            cell_height_mm: 10.0,
            line_height_mm: 6.0,
            product_name: "CARTOGRAPH AI".to_string(),
            subtitle: "DISCOVERY".to_string(),
            title_size: 16.0,
            subtitle_size: 12.0,
            label_size: 12.0,
            heading_size: 12.0,
            subheading_size: 11.0,
            body_size: 11.0,
            title_gap_mm: 8.0,
            title_block_gap_mm: 15.0,
            label_gap_mm: 8.0,
            heading_gap_mm: 4.0,
            subheading_gap_mm: 2.0,
            item_gap_mm: 1.0,
            paragraph_gap_mm: 4.0,
            section_gap_mm: 8.0,
            column_indent_mm: 5.0,
            property_indent_mm: 20.0,
            logo: LogoPlacement {
                x_mm: 170.0,
                y_mm: 10.0,
                width_mm: 30.0,
            },
        }
    }
}
