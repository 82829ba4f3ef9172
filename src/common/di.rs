use std::sync::Arc;

use crate::application::ports::trash_ports::{ConfirmPrompt, DocumentApi};
use crate::application::services::trash_view::TrashView;
use crate::common::config::AppConfig;
use crate::common::errors::Result;
use crate::infrastructure::services::console_confirm::ConsoleConfirmPrompt;
use crate::infrastructure::services::http_document_api::HttpDocumentApi;

/// Servicios ya cableados para el binario
#[derive(Clone)]
pub struct AppState {
    pub config: AppConfig,
    pub trash_view: TrashView,
}

impl AppState {
    /// Construye el estado con el cliente HTTP y el prompt de consola
    pub fn from_config(config: AppConfig, assume_yes: bool) -> Result<Self> {
        let api: Arc<dyn DocumentApi> = Arc::new(HttpDocumentApi::new(&config.api)?);
        let confirm: Arc<dyn ConfirmPrompt> = Arc::new(ConsoleConfirmPrompt::stdio(assume_yes));
        Ok(Self::with_adapters(config, api, confirm))
    }

    /// Construye el estado con adaptadores arbitrarios
    pub fn with_adapters(
        config: AppConfig,
        api: Arc<dyn DocumentApi>,
        confirm: Arc<dyn ConfirmPrompt>,
    ) -> Self {
        let trash_view = TrashView::new(api, confirm, config.display.summary_max_chars);
        Self { config, trash_view }
    }
}
