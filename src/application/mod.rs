//! Application layer - request handling over the domain core.

mod document_cache;
mod dto;
mod generate_document;

pub use document_cache::{CacheKey, DocumentCache};
pub use dto::{
    GenerateDocumentRequest, GenerateDocumentResponse, GenerationMetadata, PrimaryMotifDto,
    ResponseDto,
};
pub use generate_document::{GenerateDocumentError, GenerateValuesDocumentHandler};
