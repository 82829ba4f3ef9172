// Exportar los módulos principales del proyecto
pub mod common;
pub mod domain;
pub mod application;
pub mod infrastructure;
pub mod interfaces;

// Re-exportaciones públicas comunes
pub use application::ports::trash_ports::{ConfirmPrompt, DocumentApi};
pub use application::services::trash_view::TrashView;
pub use domain::entities::deleted_document::DeletedDocument;
pub use infrastructure::services::http_document_api::HttpDocumentApi;
