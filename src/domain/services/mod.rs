pub mod document_format;
