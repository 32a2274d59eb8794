//! Text extraction from various file formats
//!
//! Extractors work on bytes the caller has already read. They return the raw
//! document text; normalization happens in the manager.

use crate::error::{Result, SkillMatchError};
use quick_xml::events::Event;
use quick_xml::Reader;
use std::io::{Cursor, Read};
use zip::ZipArchive;

pub trait TextExtractor {
    fn extract(&self, bytes: &[u8]) -> Result<String>;
}

pub struct PdfExtractor;

impl TextExtractor for PdfExtractor {
    fn extract(&self, bytes: &[u8]) -> Result<String> {
        pdf_extract::extract_text_from_mem(bytes).map_err(|e| {
            SkillMatchError::ExtractionFailure(format!("Failed to extract text from PDF: {}", e))
        })
    }
}

pub struct PlainTextExtractor;

impl TextExtractor for PlainTextExtractor {
    fn extract(&self, bytes: &[u8]) -> Result<String> {
        // Undecodable sequences become U+FFFD instead of failing the upload.
        Ok(String::from_utf8_lossy(bytes).into_owned())
    }
}

/// Reads body paragraphs out of a WordprocessingML package.
pub struct DocxExtractor;

const DOCUMENT_PART: &str = "word/document.xml";

impl TextExtractor for DocxExtractor {
    fn extract(&self, bytes: &[u8]) -> Result<String> {
        let mut archive = ZipArchive::new(Cursor::new(bytes))?;

        let mut xml = String::new();
        archive
            .by_name(DOCUMENT_PART)
            .map_err(|e| {
                SkillMatchError::ExtractionFailure(format!("DOCX is missing {}: {}", DOCUMENT_PART, e))
            })?
            .read_to_string(&mut xml)
            .map_err(|e| SkillMatchError::ExtractionFailure(format!("Failed to read {}: {}", DOCUMENT_PART, e)))?;

        let paragraphs = self.paragraphs(&xml)?;
        Ok(paragraphs.join("\n"))
    }
}

impl DocxExtractor {
    /// Body paragraph texts in document order.
    ///
    /// Only top-level paragraphs count. Tables, text boxes, drawings and
    /// alternate-content blocks are skipped, together with any paragraphs
    /// nested inside them; the surrounding paragraph keeps collecting runs
    /// once the skipped block ends.
    pub fn paragraphs(&self, xml: &str) -> Result<Vec<String>> {
        let mut reader = Reader::from_str(xml);

        let mut paragraphs = Vec::new();
        let mut current: Option<String> = None;
        let mut paragraph_depth = 0usize;
        let mut skip_depth = 0usize;
        let mut in_text = false;

        loop {
            match reader.read_event()? {
                Event::Start(e) => match e.local_name().as_ref() {
                    name if is_skipped_container(name) => skip_depth += 1,
                    _ if skip_depth > 0 => {}
                    b"p" => {
                        if paragraph_depth == 0 {
                            current = Some(String::new());
                        }
                        paragraph_depth += 1;
                    }
                    b"t" => in_text = true,
                    _ => {}
                },
                Event::End(e) => match e.local_name().as_ref() {
                    name if is_skipped_container(name) => skip_depth = skip_depth.saturating_sub(1),
                    _ if skip_depth > 0 => {}
                    b"p" => {
                        paragraph_depth = paragraph_depth.saturating_sub(1);
                        if paragraph_depth == 0 {
                            if let Some(text) = current.take() {
                                paragraphs.push(text);
                            }
                        }
                    }
                    b"t" => in_text = false,
                    _ => {}
                },
                Event::Empty(e) if skip_depth == 0 => match e.local_name().as_ref() {
                    b"p" if paragraph_depth == 0 => paragraphs.push(String::new()),
                    b"tab" => {
                        if let Some(text) = current.as_mut() {
                            text.push('\t');
                        }
                    }
                    b"br" | b"cr" => {
                        if let Some(text) = current.as_mut() {
                            text.push('\n');
                        }
                    }
                    _ => {}
                },
                Event::Text(t) if in_text && skip_depth == 0 => {
                    if let Some(text) = current.as_mut() {
                        text.push_str(&t.unescape()?);
                    }
                }
                Event::Eof => break,
                _ => {}
            }
        }

        Ok(paragraphs)
    }
}

/// Elements whose contents are not part of the enclosing paragraph's text.
fn is_skipped_container(local_name: &[u8]) -> bool {
    matches!(
        local_name,
        b"tbl" | b"txbxContent" | b"drawing" | b"pict" | b"AlternateContent"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    const BODY: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<w:document xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main">
  <w:body>
    <w:p><w:r><w:t>Jane Smith</w:t></w:r></w:p>
    <w:p><w:r><w:t xml:space="preserve">Skills: </w:t></w:r><w:r><w:t>Python &amp; SQL</w:t></w:r></w:p>
    <w:p/>
    <w:tbl><w:tr><w:tc><w:p><w:r><w:t>table cell</w:t></w:r></w:p></w:tc></w:tr></w:tbl>
    <w:p><w:r><w:t>Docker</w:t><w:tab/><w:t>Kubernetes</w:t></w:r></w:p>
  </w:body>
</w:document>"#;

    #[test]
    fn test_docx_paragraphs_in_order() {
        let paragraphs = DocxExtractor.paragraphs(BODY).unwrap();
        assert_eq!(
            paragraphs,
            vec![
                "Jane Smith".to_string(),
                "Skills: Python & SQL".to_string(),
                String::new(),
                "Docker\tKubernetes".to_string(),
            ]
        );
    }

    const TEXT_BOX_BODY: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<w:document xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main"
            xmlns:mc="http://schemas.openxmlformats.org/markup-compatibility/2006"
            xmlns:wps="http://schemas.microsoft.com/office/word/2010/wordprocessingShape"
            xmlns:v="urn:schemas-microsoft-com:vml">
  <w:body>
    <w:p>
      <w:r><w:t xml:space="preserve">Before </w:t></w:r>
      <w:r>
        <mc:AlternateContent>
          <mc:Choice Requires="wps">
            <w:drawing><wps:txbx><w:txbxContent><w:p><w:r><w:t>Box</w:t></w:r></w:p></w:txbxContent></wps:txbx></w:drawing>
          </mc:Choice>
          <mc:Fallback>
            <w:pict><v:textbox><w:txbxContent><w:p><w:r><w:t>Box</w:t></w:r></w:p></w:txbxContent></v:textbox></w:pict>
          </mc:Fallback>
        </mc:AlternateContent>
      </w:r>
      <w:r><w:t>After kubernetes</w:t></w:r>
    </w:p>
    <w:p><w:r><w:t>Next</w:t></w:r></w:p>
  </w:body>
</w:document>"#;

    #[test]
    fn test_text_box_does_not_cut_paragraph_short() {
        let paragraphs = DocxExtractor.paragraphs(TEXT_BOX_BODY).unwrap();
        assert_eq!(
            paragraphs,
            vec!["Before After kubernetes".to_string(), "Next".to_string()]
        );
    }

    #[test]
    fn test_docx_rejects_non_zip() {
        let result = DocxExtractor.extract(b"definitely not a zip archive");
        assert!(matches!(result, Err(SkillMatchError::ExtractionFailure(_))));
    }

    #[test]
    fn test_plain_text_replaces_invalid_utf8() {
        let text = PlainTextExtractor.extract(b"python \xff\xfe sql").unwrap();
        assert!(text.starts_with("python "));
        assert!(text.ends_with(" sql"));
        assert!(text.contains('\u{FFFD}'));
    }

    #[test]
    fn test_pdf_rejects_garbage() {
        let result = PdfExtractor.extract(b"this is not a pdf");
        assert!(matches!(result, Err(SkillMatchError::ExtractionFailure(_))));
    }
}
