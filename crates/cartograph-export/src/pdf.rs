use printpdf::image_crate::{DynamicImage, RgbImage};
use printpdf::{BuiltinFont, Image, ImageTransform, Mm, PdfDocument, PdfLayerReference};

use crate::error::ExportError;
use crate::layout::RenderedDocument;
use crate::logo::LogoAsset;
use crate::metrics::FontWeight;
use crate::styles::DocumentStyles;

const LAYER_NAME: &str = "content";

/// Serialize a laid-out document to PDF bytes.
///
/// Uses the built-in Helvetica faces, so no font files are embedded. The
/// logo is drawn on pages flagged `has_logo` when `logo` is loaded.
pub fn generate_pdf(
    document: &RenderedDocument,
    styles: &DocumentStyles,
    logo: &LogoAsset,
) -> Result<Vec<u8>, ExportError> {
    let width = Mm(styles.page_width_mm);
    let height = Mm(styles.page_height_mm);

    let (doc, first_page, first_layer) =
        PdfDocument::new(styles.product_name.as_str(), width, height, LAYER_NAME);

    let regular = doc
        .add_builtin_font(BuiltinFont::Helvetica)
        .map_err(|e| ExportError::Pdf(e.to_string()))?;
    let bold = doc
        .add_builtin_font(BuiltinFont::HelveticaBold)
        .map_err(|e| ExportError::Pdf(e.to_string()))?;

    for (index, page) in document.pages.iter().enumerate() {
        let layer = if index == 0 {
            doc.get_page(first_page).get_layer(first_layer)
        } else {
            let (page_index, layer_index) = doc.add_page(width, height, LAYER_NAME);
            doc.get_page(page_index).get_layer(layer_index)
        };

        for block in &page.blocks {
            let font = match block.weight {
                FontWeight::Regular => &regular,
                FontWeight::Bold => &bold,
            };
            layer.use_text(
                block.text.as_str(),
                block.size_pt,
                Mm(block.x_mm),
                Mm(styles.page_height_mm - block.baseline_mm),
                font,
            );
        }

        if page.has_logo
            && let LogoAsset::Loaded(image) = logo
        {
            place_logo(&layer, image, styles);
        }
    }

    doc.save_to_bytes().map_err(|e| ExportError::Pdf(e.to_string()))
}

/// Scale the logo to the configured width by choosing its DPI, and anchor
/// its top edge at the configured y.
fn place_logo(layer: &PdfLayerReference, image: &RgbImage, styles: &DocumentStyles) {
    let placement = styles.logo;
    let (px_width, px_height) = image.dimensions();
    if px_width == 0 || px_height == 0 {
        return;
    }

    let dpi = px_width as f32 * 25.4 / placement.width_mm;
    let height_mm = placement.width_mm * px_height as f32 / px_width as f32;

    Image::from_dynamic_image(&DynamicImage::ImageRgb8(image.clone())).add_to_layer(
        layer.clone(),
        ImageTransform {
            translate_x: Some(Mm(placement.x_mm)),
            translate_y: Some(Mm(styles.page_height_mm - placement.y_mm - height_mm)),
            dpi: Some(dpi),
            ..Default::default()
        },
    );
}
