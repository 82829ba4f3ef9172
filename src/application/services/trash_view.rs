use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

use tokio::sync::RwLock;
use tracing::{debug, info, instrument, warn};

use crate::application::dtos::trash_dto::{
    DocumentTileDto, MutationOutcome, TileEvent, TrashViewState, PERMANENT_DELETE_CONFIRMATION,
};
use crate::application::ports::trash_ports::{ConfirmPrompt, DocumentApi};
use crate::domain::entities::deleted_document::{sort_by_deleted_at_desc, DeletedDocument};

pub const FETCH_FALLBACK_MESSAGE: &str = "Failed to load trash";
pub const RESTORE_FALLBACK_MESSAGE: &str = "Failed to restore document";
pub const DELETE_FALLBACK_MESSAGE: &str = "Failed to delete document";

/// Handler for a click on the tile itself
pub type OpenHandler = Arc<dyn Fn(&str) + Send + Sync>;

struct ViewState {
    documents: Vec<DeletedDocument>,
    error: Option<String>,
    loading: bool,
    activated: bool,
    refresh_token: Option<u64>,
    /// Sequence number of the most recently issued fetch
    latest_fetch: u64,
}

/// View-model for the list of deleted documents.
///
/// Clones share the same state, so a fetch started from one clone can be
/// superseded by a fetch started from another.
#[derive(Clone)]
pub struct TrashView {
    api: Arc<dyn DocumentApi>,
    confirm: Arc<dyn ConfirmPrompt>,
    on_open: Option<OpenHandler>,
    summary_max_chars: usize,
    state: Arc<RwLock<ViewState>>,
}

impl TrashView {
    pub fn new(
        api: Arc<dyn DocumentApi>,
        confirm: Arc<dyn ConfirmPrompt>,
        summary_max_chars: usize,
    ) -> Self {
        Self {
            api,
            confirm,
            on_open: None,
            summary_max_chars,
            state: Arc::new(RwLock::new(ViewState {
                documents: Vec::new(),
                error: None,
                loading: true,
                activated: false,
                refresh_token: None,
                latest_fetch: 0,
            })),
        }
    }

    pub fn with_open_handler(mut self, handler: OpenHandler) -> Self {
        self.on_open = Some(handler);
        self
    }

    /// First activation: fetches the trash once.
    pub async fn activate(&self) {
        {
            let mut state = self.state.write().await;
            if state.activated {
                debug!("Vista de papelera ya activada");
                return;
            }
            state.activated = true;
        }
        self.fetch().await;
    }

    /// Updates the external refresh token.
    ///
    /// Only a change of value triggers a fetch. Before activation the token is
    /// just recorded; `activate` performs the first fetch.
    pub async fn set_refresh<T: Hash + ?Sized>(&self, token: &T) {
        let mut hasher = DefaultHasher::new();
        token.hash(&mut hasher);
        let hashed = hasher.finish();

        let should_fetch = {
            let mut state = self.state.write().await;
            if state.refresh_token == Some(hashed) {
                return;
            }
            state.refresh_token = Some(hashed);
            state.activated
        };

        if should_fetch {
            debug!("Token de refresco cambiado, recargando papelera");
            self.fetch().await;
        }
    }

    /// Fetches the trash and replaces the held list.
    ///
    /// A response is applied only if no newer fetch was issued meanwhile.
    #[instrument(skip(self))]
    pub async fn fetch(&self) {
        let seq = {
            let mut state = self.state.write().await;
            state.latest_fetch += 1;
            state.loading = true;
            state.error = None;
            state.latest_fetch
        };

        let result = self.api.list_deleted_documents().await;

        let mut state = self.state.write().await;
        if seq != state.latest_fetch {
            debug!(
                "Descartando respuesta obsoleta de papelera (seq={}, latest={})",
                seq, state.latest_fetch
            );
            return;
        }

        state.loading = false;
        match result {
            Ok(mut documents) => {
                sort_by_deleted_at_desc(&mut documents);
                debug!("Papelera cargada con {} documentos", documents.len());
                state.documents = documents;
                state.error = None;
            }
            Err(e) => {
                warn!("Error al cargar la papelera: {}", e);
                state.documents.clear();
                state.error = Some(e.display_message(FETCH_FALLBACK_MESSAGE));
            }
        }
    }

    /// Restores a document and fetches the list again on success.
    #[instrument(skip(self))]
    pub async fn restore(&self, id: &str) -> MutationOutcome {
        info!("Restaurando documento {}", id);

        match self.api.restore_document(id).await {
            Ok(()) => {
                self.fetch().await;
                MutationOutcome::Completed
            }
            Err(e) => {
                warn!("Error al restaurar documento {}: {}", id, e);
                self.fail_mutation(e.display_message(RESTORE_FALLBACK_MESSAGE)).await
            }
        }
    }

    /// Asks for confirmation, then permanently deletes a document and fetches
    /// the list again on success.
    #[instrument(skip(self))]
    pub async fn permanently_delete(&self, id: &str) -> MutationOutcome {
        if !self.confirm.confirm(PERMANENT_DELETE_CONFIRMATION) {
            debug!("Eliminación permanente de {} cancelada por el usuario", id);
            return MutationOutcome::Cancelled;
        }

        info!("Eliminando permanentemente documento {}", id);

        match self.api.permanently_delete(id).await {
            Ok(()) => {
                self.fetch().await;
                MutationOutcome::Completed
            }
            Err(e) => {
                warn!("Error al eliminar permanentemente documento {}: {}", id, e);
                self.fail_mutation(e.display_message(DELETE_FALLBACK_MESSAGE)).await
            }
        }
    }

    /// Routes a tile interaction.
    ///
    /// Action controls stop here; only `Open` reaches the open handler.
    pub async fn dispatch(&self, event: TileEvent) -> Option<MutationOutcome> {
        match event {
            TileEvent::Open { id } => {
                if let Some(handler) = &self.on_open {
                    handler(&id);
                }
                None
            }
            TileEvent::Restore { id } => Some(self.restore(&id).await),
            TileEvent::PermanentlyDelete { id } => Some(self.permanently_delete(&id).await),
        }
    }

    /// Current render state
    pub async fn state(&self) -> TrashViewState {
        let state = self.state.read().await;

        if state.loading {
            return TrashViewState::Loading;
        }

        if state.documents.is_empty() {
            return match &state.error {
                Some(message) => TrashViewState::Error(message.clone()),
                None => TrashViewState::Empty,
            };
        }

        let tiles = state
            .documents
            .iter()
            .map(|doc| DocumentTileDto::from_document(doc, self.summary_max_chars))
            .collect();

        TrashViewState::Populated {
            tiles,
            error: state.error.clone(),
        }
    }

    /// Documents currently held, in display order
    pub async fn documents(&self) -> Vec<DeletedDocument> {
        self.state.read().await.documents.clone()
    }

    async fn fail_mutation(&self, message: String) -> MutationOutcome {
        self.state.write().await.error = Some(message.clone());
        MutationOutcome::Failed(message)
    }
}
