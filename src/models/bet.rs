use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// One set of six picked numbers. Slots may hold empty strings while the user
/// is still filling the card; empty slots never match a drawn number.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BetCombination {
    #[serde(rename = "nome", default)]
    pub label: String,
    #[serde(rename = "numeros")]
    pub numbers: Vec<String>,
}

/// A saved set of bets as stored in `megasena_apostas`. The combinations are
/// kept as a JSON string column and decoded on demand; rows are replaced
/// wholesale on save and removed by explicit delete, never mutated in place.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct SavedBet {
    pub id: i32,
    pub nome: String,
    pub apostas: String,
    pub notificar_email: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl SavedBet {
    /// Decodes the stored combinations. Unparseable rows decode to an empty
    /// list rather than erroring, matching how saved data was always handled.
    pub fn combinations(&self) -> Vec<BetCombination> {
        serde_json::from_str(&self.apostas).unwrap_or_default()
    }
}

#[derive(Debug, Deserialize)]
pub struct CreateSavedBet {
    pub nome: Option<String>,
    pub apostas: Vec<BetCombination>,
    pub notificar_email: Option<String>,
}

/// API shape for a saved row: same as `SavedBet` but with the combinations
/// decoded into an array.
#[derive(Debug, Serialize)]
pub struct SavedBetResponse {
    pub id: i32,
    pub nome: String,
    pub apostas: Vec<BetCombination>,
    pub notificar_email: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl From<SavedBet> for SavedBetResponse {
    fn from(bet: SavedBet) -> Self {
        let apostas = bet.combinations();
        Self {
            id: bet.id,
            nome: bet.nome,
            apostas,
            notificar_email: bet.notificar_email,
            created_at: bet.created_at,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct CheckRequest {
    pub apostas: Vec<BetCombination>,
}
