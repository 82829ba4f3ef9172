use std::fmt::{Display, Formatter, Result as FmtResult};
use std::error::Error as StdError;
use thiserror::Error;

/// Tipos de errores comunes en toda la aplicación
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Documento no encontrado
    NotFound,
    /// Entrada inválida o validación fallida
    InvalidInput,
    /// Error de acceso o permisos
    AccessDenied,
    /// Tiempo de espera agotado
    Timeout,
    /// Error interno del sistema o del servicio remoto
    InternalError,
}

impl Display for ErrorKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            ErrorKind::NotFound => write!(f, "Not Found"),
            ErrorKind::InvalidInput => write!(f, "Invalid Input"),
            ErrorKind::AccessDenied => write!(f, "Access Denied"),
            ErrorKind::Timeout => write!(f, "Timeout"),
            ErrorKind::InternalError => write!(f, "Internal Error"),
        }
    }
}

/// Error base de dominio que proporciona contexto detallado
#[derive(Error, Debug)]
#[error("{kind}: {message}")]
pub struct DomainError {
    /// Tipo de error
    pub kind: ErrorKind,
    /// Tipo de entidad afectada (ej: "Document", "Trash")
    pub entity_type: &'static str,
    /// Identificador de la entidad si está disponible
    pub entity_id: Option<String>,
    /// Mensaje descriptivo del error
    pub message: String,
    /// Detalle proporcionado por la API remota (campo `detail` del cuerpo de error)
    pub detail: Option<String>,
    /// Error fuente (opcional)
    #[source]
    pub source: Option<Box<dyn StdError + Send + Sync>>,
}

/// Resultado estándar del crate
pub type Result<T> = std::result::Result<T, DomainError>;

impl DomainError {
    /// Crea un nuevo error de dominio
    pub fn new<S: Into<String>>(
        kind: ErrorKind,
        entity_type: &'static str,
        message: S,
    ) -> Self {
        Self {
            kind,
            entity_type,
            entity_id: None,
            message: message.into(),
            detail: None,
            source: None,
        }
    }

    /// Crea un error de tiempo agotado
    pub fn timeout<S: Into<String>>(entity_type: &'static str, message: S) -> Self {
        Self::new(ErrorKind::Timeout, entity_type, message)
    }

    /// Crea un error interno
    pub fn internal_error<S: Into<String>>(entity_type: &'static str, message: S) -> Self {
        Self::new(ErrorKind::InternalError, entity_type, message)
    }

    /// Crea un error de validación
    pub fn validation_error<S: Into<String>>(entity_type: &'static str, message: S) -> Self {
        Self::new(ErrorKind::InvalidInput, entity_type, message)
    }

    /// Establece el ID de la entidad
    pub fn with_id<S: Into<String>>(mut self, entity_id: S) -> Self {
        self.entity_id = Some(entity_id.into());
        self
    }

    /// Adjunta el detalle devuelto por la API
    pub fn with_detail<S: Into<String>>(mut self, detail: S) -> Self {
        self.detail = Some(detail.into());
        self
    }

    /// Establece el error fuente
    pub fn with_source<E: StdError + Send + Sync + 'static>(mut self, source: E) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    /// Texto a mostrar al usuario.
    ///
    /// Prefiere el detalle de la API, luego el mensaje propio del error y,
    /// si ambos están vacíos, el texto de respaldo indicado.
    pub fn display_message(&self, fallback: &str) -> String {
        if let Some(detail) = self.detail.as_deref().filter(|d| !d.trim().is_empty()) {
            return detail.to_string();
        }
        if !self.message.trim().is_empty() {
            return self.message.clone();
        }
        fallback.to_string()
    }
}

/// Trait para añadir contexto a los errores
pub trait ErrorContext<T, E> {
    fn with_context<C, F>(self, context: F) -> std::result::Result<T, DomainError>
    where
        C: Into<String>,
        F: FnOnce() -> C;

    fn with_error_kind(self, kind: ErrorKind, entity_type: &'static str) -> std::result::Result<T, DomainError>;
}

impl<T, E: StdError + Send + Sync + 'static> ErrorContext<T, E> for std::result::Result<T, E> {
    fn with_context<C, F>(self, context: F) -> std::result::Result<T, DomainError>
    where
        C: Into<String>,
        F: FnOnce() -> C,
    {
        self.map_err(|e| {
            DomainError::new(ErrorKind::InternalError, "Unknown", context()).with_source(e)
        })
    }

    fn with_error_kind(self, kind: ErrorKind, entity_type: &'static str) -> std::result::Result<T, DomainError> {
        self.map_err(|e| {
            let message = format!("{}", e);
            DomainError::new(kind, entity_type, message).with_source(e)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detail_takes_precedence_over_message() {
        let err = DomainError::internal_error("Trash", "Request failed with status 500")
            .with_detail("X");

        assert_eq!(err.display_message("fallback"), "X");
    }

    #[test]
    fn test_message_used_without_detail() {
        let err = DomainError::internal_error("Trash", "Failed to fetch trash");

        assert_eq!(err.display_message("fallback"), "Failed to fetch trash");
    }

    #[test]
    fn test_blank_detail_and_message_use_fallback() {
        let err = DomainError::internal_error("Trash", "").with_detail("  ");

        assert_eq!(err.display_message("Failed to load trash"), "Failed to load trash");
    }

    #[test]
    fn test_with_error_kind_keeps_source() {
        let io: std::result::Result<(), std::io::Error> =
            Err(std::io::Error::new(std::io::ErrorKind::Other, "broken pipe"));

        let err = io.with_error_kind(ErrorKind::Timeout, "Document").unwrap_err();

        assert_eq!(err.kind, ErrorKind::Timeout);
        assert_eq!(err.message, "broken pipe");
        assert!(err.source.is_some());
    }

    #[test]
    fn test_with_id_records_entity() {
        let err = DomainError::timeout("Document", "operation timed out").with_id("doc-1");

        assert_eq!(err.kind, ErrorKind::Timeout);
        assert_eq!(err.entity_id.as_deref(), Some("doc-1"));
        assert_eq!(err.to_string(), "Timeout: operation timed out");
    }
}
