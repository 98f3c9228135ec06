use serde::Serialize;

#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthStatus {
    pub is_alive: bool,
}

impl HealthStatus {
    pub const ALIVE: HealthStatus = HealthStatus { is_alive: true };
}
