//! PDF text extraction.
//!
//! Text is pulled page by page with `lopdf` and the pages are joined with a
//! blank line. Layout, images and annotations are ignored.

use lopdf::Document;
use thiserror::Error;
use tracing::debug;

#[derive(Error, Debug)]
pub enum PdfError {
    #[error("Failed to read PDF: {0}")]
    Parse(#[from] lopdf::Error),

    #[error("Failed to extract text from page {page}: {source}")]
    Page {
        page: u32,
        #[source]
        source: lopdf::Error,
    },

    #[error("PDF appears to be empty or contains no extractable text.")]
    NoText,
}

/// Plain text of an uploaded document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractedDocument {
    pub text: String,
    pub page_count: usize,
}

/// Extract the text of every page from an in-memory PDF.
pub fn extract_pdf_text(bytes: &[u8]) -> Result<ExtractedDocument, PdfError> {
    let document = Document::load_mem(bytes)?;
    let pages = document.get_pages();
    let page_count = pages.len();

    let texts = pages
        .keys()
        .map(|&page| {
            document
                .extract_text(&[page])
                .map_err(|source| PdfError::Page { page, source })
        })
        .collect::<Result<Vec<_>, _>>()?;

    let text = texts.join("\n\n");
    if text.trim().is_empty() {
        return Err(PdfError::NoText);
    }

    debug!(
        "Extracted {} chars from {} page(s)",
        text.chars().count(),
        page_count
    );

    Ok(ExtractedDocument { text, page_count })
}

#[cfg(test)]
mod tests {
    use super::*;
    use lopdf::content::{Content, Operation};
    use lopdf::{Object, Stream, dictionary};

    /// Build a PDF with one page per entry; `None` yields a page with no text.
    fn build_pdf(pages: &[Option<&str>]) -> Vec<u8> {
        let mut doc = Document::with_version("1.5");
        let pages_id = doc.new_object_id();
        let font_id = doc.add_object(dictionary! {
            "Type" => "Font",
            "Subtype" => "Type1",
            "BaseFont" => "Helvetica",
            "Encoding" => "WinAnsiEncoding",
        });
        let resources_id = doc.add_object(dictionary! {
            "Font" => dictionary! {
                "F1" => font_id,
            },
        });

        let mut kids: Vec<Object> = Vec::new();
        for text in pages {
            let operations = match text {
                Some(text) => vec![
                    Operation::new("BT", vec![]),
                    Operation::new("Tf", vec!["F1".into(), 12.into()]),
                    Operation::new("Td", vec![72.into(), 720.into()]),
                    Operation::new("Tj", vec![Object::string_literal(*text)]),
                    Operation::new("ET", vec![]),
                ],
                None => vec![],
            };
            let content = Content { operations };
            let content_id =
                doc.add_object(Stream::new(dictionary! {}, content.encode().unwrap()));
            let page_id = doc.add_object(dictionary! {
                "Type" => "Page",
                "Parent" => pages_id,
                "Contents" => content_id,
                "Resources" => resources_id,
                "MediaBox" => vec![0.into(), 0.into(), 612.into(), 792.into()],
            });
            kids.push(page_id.into());
        }

        let count = kids.len() as i64;
        doc.objects.insert(
            pages_id,
            Object::Dictionary(dictionary! {
                "Type" => "Pages",
                "Kids" => kids,
                "Count" => count,
            }),
        );
        let catalog_id = doc.add_object(dictionary! {
            "Type" => "Catalog",
            "Pages" => pages_id,
        });
        doc.trailer.set("Root", catalog_id);

        let mut bytes = Vec::new();
        doc.save_to(&mut bytes).unwrap();
        bytes
    }

    #[test]
    fn test_extracts_all_pages_in_order() {
        let bytes = build_pdf(&[Some("Photosynthesis basics"), Some("Chlorophyll absorbs light")]);
        let doc = extract_pdf_text(&bytes).unwrap();

        assert_eq!(doc.page_count, 2);
        let first = doc.text.find("Photosynthesis").unwrap();
        let second = doc.text.find("Chlorophyll").unwrap();
        assert!(first < second);
        assert!(doc.text.contains("\n\n"));
    }

    #[test]
    fn test_blank_document_is_no_text() {
        let bytes = build_pdf(&[None, None]);
        assert!(matches!(extract_pdf_text(&bytes), Err(PdfError::NoText)));
    }

    #[test]
    fn test_garbage_is_parse_error() {
        let result = extract_pdf_text(b"definitely not a pdf");
        assert!(matches!(result, Err(PdfError::Parse(_))));
    }
}
