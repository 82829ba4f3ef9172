use async_trait::async_trait;

use crate::common::errors::Result;
use crate::domain::entities::deleted_document::DeletedDocument;

/// Port for the remote document API used by the trash view
#[async_trait]
pub trait DocumentApi: Send + Sync {
    /// List the documents currently in the trash
    async fn list_deleted_documents(&self) -> Result<Vec<DeletedDocument>>;

    /// Restore a document from the trash
    async fn restore_document(&self, id: &str) -> Result<()>;

    /// Permanently delete a document from the trash
    async fn permanently_delete(&self, id: &str) -> Result<()>;
}

/// Blocking yes/no confirmation supplied by the host environment
#[cfg_attr(test, mockall::automock)]
pub trait ConfirmPrompt: Send + Sync {
    fn confirm(&self, message: &str) -> bool;
}
