use serde::Serialize;

use crate::domain::entities::deleted_document::DeletedDocument;
use crate::domain::services::document_format::{
    format_deleted_on, format_size, language_flag, truncate_summary, type_badge,
};

/// DTO representing one rendered tile of the trash list
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DocumentTileDto {
    pub id: String,
    pub name: String,
    pub type_badge: String,
    pub size_label: String,
    pub deleted_on_label: String,
    pub summary: String,
    pub language_flag: &'static str,
}

impl DocumentTileDto {
    pub fn from_document(doc: &DeletedDocument, summary_max_chars: usize) -> Self {
        Self {
            id: doc.id.clone(),
            name: doc.name.clone(),
            type_badge: type_badge(&doc.doc_type),
            size_label: format_size(doc.size_bytes),
            deleted_on_label: format_deleted_on(&doc.deleted_at),
            summary: truncate_summary(&doc.summary, summary_max_chars),
            language_flag: language_flag(&doc.language),
        }
    }
}

/// Interaction on a tile.
///
/// `Open` is the parent tile click. `Restore` and `PermanentlyDelete` come from
/// the action controls nested inside the tile and are consumed by the view,
/// never forwarded to the open handler.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TileEvent {
    Open { id: String },
    Restore { id: String },
    PermanentlyDelete { id: String },
}

/// Result of a restore or permanent-delete action
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MutationOutcome {
    /// The remote call succeeded and the list was fetched again
    Completed,
    /// The user declined the confirmation; nothing was sent
    Cancelled,
    /// The remote call failed; carries the message now shown by the view
    Failed(String),
}

/// Render state of the trash view, in priority order
#[derive(Debug, Clone, PartialEq)]
pub enum TrashViewState {
    Loading,
    Error(String),
    Empty,
    Populated {
        tiles: Vec<DocumentTileDto>,
        /// Message from a failed restore/delete, shown alongside the list
        error: Option<String>,
    },
}

pub const EMPTY_TITLE: &str = "Trash is empty";
pub const EMPTY_HINT: &str = "Deleted documents will appear here";
pub const PERMANENT_DELETE_CONFIRMATION: &str =
    "Are you sure you want to permanently delete this document? This action cannot be undone.";
