//! Bet evaluation: match counting and prize tier classification.
//!
//! Everything here is pure and side-effect free; the same functions back both
//! the interactive check endpoint and the notification decider.

use std::collections::HashSet;

use serde::Serialize;

use crate::format::{format_brl, format_count};
use crate::models::draw::{DrawResult, PrizeTier};
use crate::models::bet::BetCombination;

/// Outcome of checking one combination against one drawing.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MatchResult {
    pub match_count: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tier: Option<PrizeTier>,
    pub message: String,
}

/// Counts how many distinct picked numbers appear among the drawn numbers.
///
/// Comparison is exact trimmed string equality: "01" and "1" are different
/// numbers. Empty slots never match, and a number repeated within the same
/// combination counts once (set intersection, not multiset).
pub fn match_count(numbers: &[String], drawn: &[String]) -> usize {
    let drawn: HashSet<&str> = drawn.iter().map(|d| d.trim()).collect();
    let picked: HashSet<&str> = numbers
        .iter()
        .map(|n| n.trim())
        .filter(|n| !n.is_empty())
        .collect();
    picked.iter().filter(|n| drawn.contains(**n)).count()
}

/// Checks a combination against a drawing and classifies the result.
///
/// Full match pays tier 1, one short pays tier 2, two short pays tier 3. Other
/// hit counts get a plain message with no tier lookup.
pub fn evaluate(draw: &DrawResult, combination: &BetCombination) -> MatchResult {
    let hits = match_count(&combination.numbers, &draw.drawn_numbers);
    let cardinality = draw.drawn_numbers.len();

    if hits == 0 {
        return MatchResult {
            match_count: 0,
            tier: None,
            message: "Você não acertou nenhum número.".to_string(),
        };
    }

    if hits == cardinality {
        tier_result(draw, 1, hits, true)
    } else if hits + 1 == cardinality {
        tier_result(draw, 2, hits, false)
    } else if hits + 2 == cardinality {
        tier_result(draw, 3, hits, false)
    } else {
        MatchResult {
            match_count: hits,
            tier: None,
            message: format!("Você acertou {hits} números."),
        }
    }
}

// When the upstream payload lacks the expected tier the message interpolates
// blanks instead of failing; malformed prize data must not break a check.
fn tier_result(draw: &DrawResult, rank: i32, hits: usize, jackpot: bool) -> MatchResult {
    let tier = draw.tier_for_rank(rank).cloned();
    let winners = tier
        .as_ref()
        .map(|t| format_count(t.winner_count))
        .unwrap_or_default();
    let prize = tier
        .as_ref()
        .map(|t| format_brl(t.prize_amount))
        .unwrap_or_default();

    let message = if jackpot {
        format!(
            "Parabéns! Você e mais {winners} pessoas acertaram todos os números! \
             Valor do prêmio: {prize}"
        )
    } else {
        format!(
            "Você e mais {winners} pessoas acertaram {hits} números! \
             Valor do prêmio: {prize}"
        )
    };

    MatchResult {
        match_count: hits,
        tier,
        message,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    fn combination(numbers: &[&str]) -> BetCombination {
        BetCombination {
            label: String::new(),
            numbers: strings(numbers),
        }
    }

    fn draw() -> DrawResult {
        DrawResult {
            drawing_id: 2700,
            draw_date: "01/02/2025".to_string(),
            drawn_numbers: strings(&["04", "08", "15", "16", "23", "42"]),
            accumulated: false,
            estimated_next_prize: 50_000_000.0,
            next_draw_date: "04/02/2025".to_string(),
            prize_tiers: vec![
                PrizeTier {
                    tier: 1,
                    description: "6 acertos".to_string(),
                    winner_count: 2,
                    prize_amount: 25_000_000.0,
                },
                PrizeTier {
                    tier: 2,
                    description: "5 acertos".to_string(),
                    winner_count: 48,
                    prize_amount: 55_101.33,
                },
                PrizeTier {
                    tier: 3,
                    description: "4 acertos".to_string(),
                    winner_count: 3_412,
                    prize_amount: 1_103.21,
                },
            ],
        }
    }

    #[test]
    fn full_match_is_jackpot() {
        let result = evaluate(&draw(), &combination(&["04", "08", "15", "16", "23", "42"]));
        assert_eq!(result.match_count, 6);
        assert_eq!(result.tier.as_ref().unwrap().tier, 1);
        assert!(result.message.contains("Parabéns"));
        assert!(result.message.contains("R$ 25.000.000,00"));
    }

    #[test]
    fn no_overlap_gives_zero_match_message() {
        let result = evaluate(&draw(), &combination(&["01", "02", "03", "05", "06", "07"]));
        assert_eq!(result.match_count, 0);
        assert!(result.tier.is_none());
        assert_eq!(result.message, "Você não acertou nenhum número.");
    }

    #[test]
    fn five_hits_pay_second_tier() {
        let result = evaluate(&draw(), &combination(&["04", "08", "15", "16", "23", "99"]));
        assert_eq!(result.match_count, 5);
        assert_eq!(result.tier.as_ref().unwrap().tier, 2);
        assert!(result.message.contains("5 números"));
    }

    #[test]
    fn duplicates_do_not_inflate_the_count() {
        let result = evaluate(&draw(), &combination(&["04", "08", "15", "16", "99", "99"]));
        assert_eq!(result.match_count, 4);
        assert_eq!(result.tier.as_ref().unwrap().tier, 3);
    }

    #[test]
    fn intermediate_counts_get_plain_message() {
        let result = evaluate(&draw(), &combination(&["04", "08", "15", "01", "02", "03"]));
        assert_eq!(result.match_count, 3);
        assert!(result.tier.is_none());
        assert_eq!(result.message, "Você acertou 3 números.");
    }

    #[test]
    fn count_ignores_slot_order() {
        let forward = combination(&["04", "08", "15", "16", "23", "42"]);
        let mut reversed = forward.clone();
        reversed.numbers.reverse();
        let d = draw();
        assert_eq!(
            match_count(&forward.numbers, &d.drawn_numbers),
            match_count(&reversed.numbers, &d.drawn_numbers)
        );
    }

    #[test]
    fn empty_slots_never_match() {
        assert_eq!(
            match_count(&strings(&["04", "08", "", "", "", ""]), &draw().drawn_numbers),
            2
        );
    }

    #[test]
    fn no_numeric_normalization() {
        // "4" is not "04"
        assert_eq!(
            match_count(&strings(&["4", "8", "15", "16", "23", "42"]), &draw().drawn_numbers),
            4
        );
    }

    #[test]
    fn missing_tier_degrades_message_instead_of_failing() {
        let mut d = draw();
        d.prize_tiers.clear();
        let result = evaluate(&d, &combination(&["04", "08", "15", "16", "23", "42"]));
        assert_eq!(result.match_count, 6);
        assert!(result.tier.is_none());
        assert!(result.message.contains("Parabéns"));
    }
}
