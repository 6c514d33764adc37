use std::path::{Path, PathBuf};

use printpdf::{Mm, PdfDocument};

use crate::error::{AppError, Result};

// System locations tried when no font is configured. Vietnamese
// summaries need a Unicode-capable face, so the builtin Type1 fonts
// are not an option.
const FONT_CANDIDATES: &[&str] = &[
    "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/TTF/DejaVuSans.ttf",
    "/usr/share/fonts/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/truetype/noto/NotoSans-Regular.ttf",
    "/System/Library/Fonts/Supplemental/Arial Unicode.ttf",
    "C:\\Windows\\Fonts\\arial.ttf",
];

// Wrap widths in characters, sized for the A4 text column at the
// font sizes used below.
const TITLE_WRAP_CHARS: usize = 55;
const BODY_WRAP_CHARS: usize = 85;

/// Locate the TTF to embed: the configured path if set, otherwise the
/// first existing candidate. A missing font is a fatal export error,
/// never a silent fallback to a non-Unicode face.
pub fn find_font(configured: Option<&Path>) -> Result<PathBuf> {
    if let Some(path) = configured {
        if path.exists() {
            return Ok(path.to_path_buf());
        }
        return Err(AppError::Export(format!(
            "configured PDF font not found: {}",
            path.display()
        )));
    }

    FONT_CANDIDATES
        .iter()
        .map(PathBuf::from)
        .find(|p| p.exists())
        .ok_or_else(|| {
            AppError::Export(
                "no Unicode TTF font found; set pdf_font_path in the config".to_string(),
            )
        })
}

/// Render the summary into a single-section A4 document: title
/// heading, blank line, then each summary line as a wrapped paragraph.
/// Pages are added as the text column fills.
pub fn to_pdf(title: &str, summary: &str, font_path: Option<&Path>) -> Result<Vec<u8>> {
    let font_file = find_font(font_path)?;
    let font_data = std::fs::read(&font_file).map_err(|e| {
        AppError::Export(format!("failed to read font {}: {}", font_file.display(), e))
    })?;

    let (doc, first_page, first_layer) =
        PdfDocument::new(title, Mm(210.0), Mm(297.0), "Layer 1");

    let font = doc
        .add_external_font(font_data.as_slice())
        .map_err(|e| AppError::Export(format!("failed to embed font: {}", e)))?;

    let mut layer = doc.get_page(first_page).get_layer(first_layer);
    // Text column runs from 20mm margins; the cursor starts at the top
    // of the column and moves down one line at a time.
    let mut y = 277.0;

    for line in textwrap::wrap(title, TITLE_WRAP_CHARS) {
        layer.use_text(line.as_ref(), 16.0, Mm(20.0), Mm(y), &font);
        y -= 8.0;
    }

    // Blank line between heading and body.
    y -= 6.0;

    for paragraph in summary.split('\n') {
        let wrapped = if paragraph.trim().is_empty() {
            vec![]
        } else {
            textwrap::wrap(paragraph, BODY_WRAP_CHARS)
        };

        for line in wrapped {
            if y < 20.0 {
                let (page, layer_index) = doc.add_page(Mm(210.0), Mm(297.0), "Layer 1");
                layer = doc.get_page(page).get_layer(layer_index);
                y = 277.0;
            }
            layer.use_text(line.as_ref(), 11.0, Mm(20.0), Mm(y), &font);
            y -= 6.0;
        }

        // Paragraph spacing, also for blank source lines.
        y -= 3.0;
    }

    doc.save_to_bytes()
        .map_err(|e| AppError::Export(format!("failed to serialize PDF: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_configured_font_is_an_export_error() {
        let result = to_pdf(
            "Title",
            "Body",
            Some(Path::new("/nonexistent/NoSuchFont.ttf")),
        );
        assert!(matches!(result, Err(AppError::Export(_))));
    }

    #[test]
    fn produces_a_pdf_header_when_a_system_font_exists() {
        // Skipped on machines without any of the candidate fonts.
        if find_font(None).is_err() {
            return;
        }

        let bytes = to_pdf(
            "Tóm tắt bài báo",
            "Đoạn một của bản tóm tắt.\nĐoạn hai, dài hơn một chút để buộc xuống dòng.",
            None,
        )
        .unwrap();

        assert!(bytes.starts_with(b"%PDF"));
        assert!(bytes.len() > 1000);
    }

    #[test]
    fn long_summaries_paginate_without_error() {
        if find_font(None).is_err() {
            return;
        }

        let long_summary =
            "Một dòng tóm tắt khá dài để kiểm tra việc ngắt trang.\n".repeat(200);
        let bytes = to_pdf("Bài dài", &long_summary, None).unwrap();
        assert!(bytes.starts_with(b"%PDF"));
    }
}
