pub mod console_confirm;
pub mod http_document_api;
