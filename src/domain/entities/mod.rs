pub mod deleted_document;
