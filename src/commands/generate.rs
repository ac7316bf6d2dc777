//! Generate command
//!
//! Thin wrapper that turns CLI options into a `GenerationRequest` and runs it
//! through the service.

use crate::core::Language;
use crate::service::{
    Filters, GenerationRequest, GenerationResponse, RequestError, SortBy, SortOrder, WordService,
};

/// Options for a generation run, as collected from the command line
#[derive(Debug, Clone)]
pub struct GenerateOptions {
    pub letters: String,
    pub language: Language,
    pub min_length: usize,
    pub max_length: usize,
    pub min_complexity: Option<u8>,
    pub max_complexity: Option<u8>,
    pub sort_by: Option<SortBy>,
    pub sort_order: Option<SortOrder>,
}

impl GenerateOptions {
    /// Convert the options into a service request
    #[must_use]
    pub fn into_request(self) -> GenerationRequest {
        let filters = Filters {
            min_complexity: self.min_complexity,
            max_complexity: self.max_complexity,
            sort_by: self.sort_by,
            sort_order: self.sort_order,
        };

        let mut request = GenerationRequest::new(self.letters);
        request.language = self.language;
        request.min_length = self.min_length;
        request.max_length = self.max_length;
        request.filters = (filters != Filters::default()).then_some(filters);
        request
    }
}

/// Run a generation request through the service
///
/// # Errors
/// Returns `RequestError` when the options describe an invalid request.
pub fn run_generate(
    service: &WordService,
    options: GenerateOptions,
) -> Result<GenerationResponse, RequestError> {
    service.generate(&options.into_request())
}
