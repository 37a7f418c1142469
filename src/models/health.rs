use serde::Serialize;

use crate::storage::StorageMode;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthResponse {
    pub ok: bool,
    pub mode: StorageMode,
    pub mongo_provided: bool,
}
