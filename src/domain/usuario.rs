use serde::{Deserialize, Serialize};

/// Account as listed by `/usuarios`.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Usuario {
    pub id: i64,
    pub username: String,
    #[serde(default)]
    pub email: Option<String>,
    pub rol: String,
    #[serde(default)]
    pub activo: bool,
    #[serde(default)]
    pub fecha_creacion: Option<String>,
}

/// Body sent to `PUT /usuarios/{id}/rol`.
#[derive(Clone, Debug, Serialize)]
pub struct ActualizarRolRequest {
    pub rol: String,
}

/// Body returned by `PUT /usuarios/{id}/rol`.
#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RolActualizado {
    #[serde(default)]
    pub username: Option<String>,
    pub nuevo_rol: String,
}

/// Body returned by `PUT /usuarios/{id}/activar`.
#[derive(Clone, Debug, Deserialize)]
pub struct ActivacionActualizada {
    pub activo: bool,
}
