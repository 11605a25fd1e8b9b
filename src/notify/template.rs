//! HTML rendering for the result e-mail. Same layout as the site: drawn
//! numbers as circles, an "Acumulou!" card on rollover, the prize breakdown
//! and each saved bet with its matched numbers highlighted.

use std::fmt::Write;

use crate::format::{format_brl, format_count};
use crate::lottery::evaluator::match_count;
use crate::models::bet::BetCombination;
use crate::models::draw::DrawResult;

const HIT_COLOR: &str = "#d4edda";
const MISS_COLOR: &str = "#e9ecef";

pub fn render(draw: &DrawResult, combinations: &[BetCombination]) -> String {
    let mut html = String::with_capacity(4096);

    html.push_str(
        "<html><body style=\"font-family: Arial, sans-serif; background-color: #f6f9fc; \
         padding: 20px;\"><div style=\"background-color: #ffffff; padding: 20px; \
         border-radius: 5px;\">",
    );
    let _ = write!(
        html,
        "<h1 style=\"text-align: center;\">Resultado do Sorteio #{}</h1>",
        draw.drawing_id
    );

    if draw.accumulated {
        let _ = write!(
            html,
            "<div style=\"background-color: {HIT_COLOR}; padding: 16px; border-radius: 8px; \
             color: #155724; margin-bottom: 20px; text-align: center;\">\
             <strong>Acumulou!</strong> O sorteio #{} acumulou!<br/>\
             O prêmio estimado para o próximo sorteio é de <strong>{}</strong>.</div>",
            draw.drawing_id,
            format_brl(draw.estimated_next_prize)
        );
    }

    html.push_str("<p style=\"font-weight: bold;\">Dezenas Sorteadas:</p><div>");
    for dezena in &draw.drawn_numbers {
        let _ = write!(html, "{}", ball(dezena, MISS_COLOR));
    }
    html.push_str("</div>");

    let _ = write!(
        html,
        "<p><b>Data:</b> {}</p><p><b>Prêmio Próximo Sorteio:</b> {}</p>",
        draw.draw_date,
        format_brl(draw.estimated_next_prize)
    );

    for tier in &draw.prize_tiers {
        if tier.winner_count == 0 {
            continue;
        }
        let _ = write!(
            html,
            "<p style=\"font-weight: bold; margin-bottom: 0;\">{}: {} ganhadores</p>\
             <p style=\"margin-top: 0;\">Valor do prêmio: {}</p>",
            tier.description,
            format_count(tier.winner_count),
            format_brl(tier.prize_amount)
        );
    }

    html.push_str("<p style=\"font-weight: bold;\">Sua(s) Aposta(s):</p>");
    for (index, combination) in combinations.iter().enumerate() {
        let name = if combination.label.is_empty() {
            String::new()
        } else {
            format!(" ({})", combination.label)
        };
        let _ = write!(
            html,
            "<div style=\"margin-bottom: 16px; background-color: #f8f9fa; padding: 12px; \
             border-radius: 8px;\"><p style=\"font-weight: bold;\">Aposta #{}{}</p><div>",
            index + 1,
            name
        );
        for numero in &combination.numbers {
            let color = if !numero.trim().is_empty()
                && draw.drawn_numbers.iter().any(|d| d.trim() == numero.trim())
            {
                HIT_COLOR
            } else {
                MISS_COLOR
            };
            let _ = write!(html, "{}", ball(numero, color));
        }
        let hits = match_count(&combination.numbers, &draw.drawn_numbers);
        let _ = write!(
            html,
            "</div><p>Você acertou {hits} número(s).</p></div>"
        );
    }

    html.push_str("</div></body></html>");
    html
}

fn ball(numero: &str, color: &str) -> String {
    format!(
        "<span style=\"display: inline-block; width: 36px; height: 36px; margin: 4px; \
         border-radius: 50%; background-color: {color}; text-align: center; \
         font-weight: bold; line-height: 36px;\">{numero}</span>"
    )
}
