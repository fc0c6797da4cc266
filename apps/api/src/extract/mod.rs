//! Document Text Extraction — turns an uploaded résumé into lowercase
//! plain text for the matcher.
//!
//! Unsupported or unparseable documents degrade to an empty string
//! rather than failing the request; the matcher then reports 0% for
//! every group, which is the defined behavior for that case.

use std::io::{Cursor, Read};

use tracing::warn;

pub const PDF_MIME: &str = "application/pdf";
pub const DOCX_MIME: &str =
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document";
pub const TEXT_MIME: &str = "text/plain";

/// Extracts lowercase plain text from a document.
///
/// Carried in `AppState` as `Arc<dyn TextExtractor>` so tests can swap
/// in a passthrough implementation.
pub trait TextExtractor: Send + Sync {
    fn extract(&self, data: &[u8], mime: &str) -> String;
}

/// Production extractor: PDF via `pdf-extract`, OOXML `.docx` via its
/// zip container, plain text as-is.
pub struct DocumentTextExtractor;

impl TextExtractor for DocumentTextExtractor {
    fn extract(&self, data: &[u8], mime: &str) -> String {
        let text = match mime {
            PDF_MIME => extract_pdf(data),
            DOCX_MIME => extract_docx(data),
            TEXT_MIME => String::from_utf8_lossy(data).into_owned(),
            other => {
                warn!("unsupported resume type '{other}', treating as empty");
                String::new()
            }
        };
        text.to_lowercase()
    }
}

fn extract_pdf(data: &[u8]) -> String {
    match pdf_extract::extract_text_from_mem(data) {
        Ok(text) => text,
        Err(e) => {
            warn!("PDF extraction failed, treating as empty: {e}");
            String::new()
        }
    }
}

/// A .docx file is a zip archive; the document body lives in
/// `word/document.xml`.
fn extract_docx(data: &[u8]) -> String {
    let mut archive = match zip::ZipArchive::new(Cursor::new(data)) {
        Ok(a) => a,
        Err(e) => {
            warn!("docx is not a readable zip archive, treating as empty: {e}");
            return String::new();
        }
    };

    let mut xml = String::new();
    match archive.by_name("word/document.xml") {
        Ok(mut file) => {
            if let Err(e) = file.read_to_string(&mut xml) {
                warn!("failed to read docx document body, treating as empty: {e}");
                return String::new();
            }
        }
        Err(e) => {
            warn!("docx has no word/document.xml, treating as empty: {e}");
            return String::new();
        }
    }

    strip_markup(&xml)
}

/// Replaces every markup tag with a space, so text runs separated only
/// by tags stay separate tokens.
pub(crate) fn strip_markup(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut in_tag = false;
    for c in input.chars() {
        match c {
            '<' => {
                in_tag = true;
                out.push(' ');
            }
            '>' => in_tag = false,
            _ if !in_tag => out.push(c),
            _ => {}
        }
    }
    out
}
