// Resume file ingestion: uploaded bytes in, plain text out.

pub mod extractor;
pub mod handlers;
