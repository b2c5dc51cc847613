use unicode_normalization::UnicodeNormalization;

pub trait Preprocessor {
    // Default preprocessor for recognized text
    fn process(&self, text: &str) -> String {
        let text = text.trim();
        if text.is_empty() {
            return String::new();
        }

        // Unicode normalization (NFKC)
        let text: String = text.nfkc().collect();

        // Normalize line endings, keep line structure for correction review
        text.replace("\r\n", "\n").trim().to_string()
    }
}

pub struct OcrPreprocessor;
impl Preprocessor for OcrPreprocessor {}
