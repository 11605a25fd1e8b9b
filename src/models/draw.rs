use serde::{Deserialize, Serialize};

/// One prize bracket of a drawing. `faixa` 1 is the jackpot (all six numbers).
///
/// Field names follow the Caixa portal API so responses stay byte-compatible
/// with what frontends already consume.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PrizeTier {
    #[serde(rename = "faixa")]
    pub tier: i32,
    #[serde(rename = "descricaoFaixa")]
    pub description: String,
    #[serde(rename = "numeroDeGanhadores")]
    pub winner_count: i64,
    #[serde(rename = "valorPremio")]
    pub prize_amount: f64,
}

/// Result of one Mega-Sena drawing as served by the Caixa portal API.
///
/// Deserialization is lenient: absent fields default, so a payload missing its
/// prize breakdown still yields a usable result (the evaluator degrades the
/// message instead of failing). A payload without a drawing number is treated
/// as "not found" by the upstream client.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DrawResult {
    #[serde(rename = "numero")]
    pub drawing_id: i64,
    #[serde(rename = "dataApuracao")]
    pub draw_date: String,
    #[serde(rename = "listaDezenas")]
    pub drawn_numbers: Vec<String>,
    #[serde(rename = "acumulado")]
    pub accumulated: bool,
    #[serde(rename = "valorEstimadoProximoConcurso")]
    pub estimated_next_prize: f64,
    #[serde(rename = "dataProximoConcurso")]
    pub next_draw_date: String,
    #[serde(rename = "listaRateioPremio")]
    pub prize_tiers: Vec<PrizeTier>,
}

impl DrawResult {
    pub fn tier_for_rank(&self, rank: i32) -> Option<&PrizeTier> {
        self.prize_tiers.iter().find(|t| t.tier == rank)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_upstream_payload() {
        let payload = r#"{
            "numero": 2700,
            "dataApuracao": "01/02/2025",
            "listaDezenas": ["04", "08", "15", "16", "23", "42"],
            "acumulado": true,
            "valorEstimadoProximoConcurso": 50000000.0,
            "dataProximoConcurso": "04/02/2025",
            "listaRateioPremio": [
                {"faixa": 1, "descricaoFaixa": "6 acertos", "numeroDeGanhadores": 0, "valorPremio": 0.0},
                {"faixa": 2, "descricaoFaixa": "5 acertos", "numeroDeGanhadores": 48, "valorPremio": 55101.33}
            ]
        }"#;

        let draw: DrawResult = serde_json::from_str(payload).unwrap();
        assert_eq!(draw.drawing_id, 2700);
        assert_eq!(draw.drawn_numbers.len(), 6);
        assert!(draw.accumulated);
        assert_eq!(draw.tier_for_rank(2).unwrap().winner_count, 48);
        assert!(draw.tier_for_rank(4).is_none());
    }

    #[test]
    fn missing_fields_default_instead_of_failing() {
        let draw: DrawResult = serde_json::from_str(r#"{"numero": 10}"#).unwrap();
        assert_eq!(draw.drawing_id, 10);
        assert!(draw.drawn_numbers.is_empty());
        assert!(draw.prize_tiers.is_empty());
    }

    #[test]
    fn serializes_with_upstream_field_names() {
        let draw = DrawResult {
            drawing_id: 2700,
            ..Default::default()
        };
        let json = serde_json::to_value(&draw).unwrap();
        assert_eq!(json["numero"], 2700);
        assert!(json.get("listaDezenas").is_some());
    }
}
