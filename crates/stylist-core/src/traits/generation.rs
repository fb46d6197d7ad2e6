use crate::errors::ExtractionError;

/// External language-generation service.
///
/// Used optionally inside the intent extractor; any error triggers the
/// rule-based fallback and never propagates past the extractor.
pub trait IGenerativeModel: Send + Sync {
    /// Generate a completion for the given prompt.
    fn generate(&self, prompt: &str) -> Result<String, ExtractionError>;

    /// Cheap availability probe; `false` skips the service path entirely.
    fn is_available(&self) -> bool {
        true
    }
}
