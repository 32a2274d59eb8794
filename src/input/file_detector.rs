//! File type detection

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileType {
    Pdf,
    Docx,
    Text,
    Unsupported,
}

impl FileType {
    pub fn from_extension(ext: &str) -> Self {
        match ext.to_lowercase().as_str() {
            "pdf" => FileType::Pdf,
            "docx" => FileType::Docx,
            "txt" => FileType::Text,
            _ => FileType::Unsupported,
        }
    }

    /// Sniff the type from a filename. Only the suffix after the last `.`
    /// is consulted, so a bare `.pdf` still counts as a PDF.
    pub fn from_filename(filename: &str) -> Self {
        filename
            .rsplit_once('.')
            .map(|(_, ext)| Self::from_extension(ext))
            .unwrap_or(FileType::Unsupported)
    }

    pub fn label(&self) -> &'static str {
        match self {
            FileType::Pdf => "PDF",
            FileType::Docx => "DOCX",
            FileType::Text => "TXT",
            FileType::Unsupported => "unsupported",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extension_is_case_insensitive() {
        assert_eq!(FileType::from_filename("Resume.PDF"), FileType::Pdf);
        assert_eq!(FileType::from_filename("cv.DocX"), FileType::Docx);
        assert_eq!(FileType::from_filename("notes.txt"), FileType::Text);
    }

    #[test]
    fn test_bare_extension_filenames() {
        assert_eq!(FileType::from_filename(".pdf"), FileType::Pdf);
        assert_eq!(FileType::from_filename(".DOCX"), FileType::Docx);
        assert_eq!(FileType::from_filename(".txt"), FileType::Text);
        assert_eq!(FileType::from_filename("archive.tar.gz"), FileType::Unsupported);
    }

    #[test]
    fn test_unknown_and_missing_extensions() {
        assert_eq!(FileType::from_filename("resume.xyz"), FileType::Unsupported);
        assert_eq!(FileType::from_filename("resume.doc"), FileType::Unsupported);
        assert_eq!(FileType::from_filename("README"), FileType::Unsupported);
        assert_eq!(FileType::from_filename(""), FileType::Unsupported);
    }
}
