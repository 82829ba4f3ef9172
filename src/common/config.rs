use std::time::Duration;

use tracing::warn;

/// Configuración del cliente de la API de documentos
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// URL base de la API (sin barra final)
    pub base_url: String,
    /// Token bearer opcional
    pub auth_token: Option<String>,
    /// Timeout por petición (ms)
    pub request_timeout_ms: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8086/api".to_string(),
            auth_token: None,
            request_timeout_ms: 15_000, // 15 segundos
        }
    }
}

impl ApiConfig {
    /// Obtiene un Duration para las peticiones HTTP
    pub fn request_timeout(&self) -> Duration {
        Duration::from_millis(self.request_timeout_ms)
    }
}

/// Configuración de presentación de la papelera
#[derive(Debug, Clone)]
pub struct DisplayConfig {
    /// Máximo de caracteres del resumen antes de truncar
    pub summary_max_chars: usize,
    /// Intervalo entre refrescos en modo `watch` (s)
    pub poll_interval_secs: u64,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            summary_max_chars: 100,
            poll_interval_secs: 30,
        }
    }
}

impl DisplayConfig {
    pub fn poll_interval(&self) -> Duration {
        Duration::from_secs(self.poll_interval_secs.max(1))
    }
}

/// Configuración global de la aplicación
#[derive(Debug, Clone, Default)]
pub struct AppConfig {
    pub api: ApiConfig,
    pub display: DisplayConfig,
}

impl AppConfig {
    /// Carga la configuración desde variables de entorno
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Carga la configuración desde una función de búsqueda arbitraria
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(url) = lookup("TRASH_API_URL").filter(|v| !v.trim().is_empty()) {
            config.api.base_url = url.trim().trim_end_matches('/').to_string();
        }

        config.api.auth_token = lookup("TRASH_API_TOKEN").filter(|v| !v.trim().is_empty());

        if let Some(ms) = parse_number(&lookup, "TRASH_API_TIMEOUT_MS") {
            config.api.request_timeout_ms = ms;
        }

        if let Some(secs) = parse_number(&lookup, "TRASH_POLL_INTERVAL_SECS") {
            config.display.poll_interval_secs = secs.max(1);
        }

        if let Some(chars) = parse_number(&lookup, "TRASH_SUMMARY_MAX_CHARS") {
            config.display.summary_max_chars = chars as usize;
        }

        config
    }
}

fn parse_number<F>(lookup: &F, key: &str) -> Option<u64>
where
    F: Fn(&str) -> Option<String>,
{
    let raw = lookup(key)?;
    match raw.trim().parse::<u64>() {
        Ok(value) => Some(value),
        Err(e) => {
            warn!("Ignoring invalid value for {}: {:?} ({})", key, raw, e);
            None
        }
    }
}
