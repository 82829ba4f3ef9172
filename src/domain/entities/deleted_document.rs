use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Documento en la papelera, tal como lo devuelve la API remota.
///
/// Es una proyección de solo lectura: el cliente nunca la construye ni la
/// modifica, solo la muestra.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeletedDocument {
    pub id: String,
    pub name: String,
    #[serde(rename = "type", alias = "document_type")]
    pub doc_type: String,
    #[serde(alias = "size_bytes")]
    pub size_bytes: u64,
    #[serde(alias = "deleted_at")]
    pub deleted_at: DateTime<Utc>,
    #[serde(alias = "deleted_by", default)]
    pub deleted_by: String,
    #[serde(default)]
    pub summary: String,
    #[serde(default = "default_language")]
    pub language: String,
}

fn default_language() -> String {
    "en".to_string()
}

/// Ordena los documentos del más reciente al más antiguo.
///
/// El orden es estable: empates conservan el orden de la API.
pub fn sort_by_deleted_at_desc(documents: &mut [DeletedDocument]) {
    documents.sort_by(|a, b| b.deleted_at.cmp(&a.deleted_at));
}
