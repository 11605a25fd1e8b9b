use serde::{Deserialize, Serialize};

/// Which days of the week and at what time the drawing happens. Stored as a
/// JSON blob in the single-row `megasena_config` table.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DrawSchedule {
    #[serde(default)]
    pub dias: Vec<String>,
    #[serde(default)]
    pub horario: String,
}
