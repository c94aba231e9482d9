//! # Budget Export
//!
//! Plain-text rendering of a computed budget, in the two shapes the sales
//! desk shares: a WhatsApp message body and an e-mail body. Only the text is
//! produced here; opening a share link is the caller's concern.
//!
//! Rendering is deterministic: dates come from the budget metadata, never
//! from the clock.

use chrono::{DateTime, Utc};

use crate::budget::{Budget, BudgetTotals};
use crate::units::Reais;

/// Format an amount as Brazilian currency: `R$ 1.234,56`.
///
/// Rounds to whole cents; everything upstream stays unrounded.
pub fn format_brl(amount: Reais) -> String {
    let cents = (amount.value() * 100.0).round() as i64;
    let sign = if cents < 0 { "-" } else { "" };
    let cents = cents.abs();

    let digits = (cents / 100).to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(c);
    }

    format!("{sign}R$ {grouped},{:02}", cents % 100)
}

/// Format a square-meter quantity with a decimal comma: `3,75`
pub fn format_m2(value: f64) -> String {
    format!("{value:.2}").replace('.', ",")
}

/// Format a timestamp the way quotes are dated: `dd/mm/aaaa`
pub fn format_date(when: DateTime<Utc>) -> String {
    when.format("%d/%m/%Y").to_string()
}

/// The figures block shared by every export shape.
fn summary_block(budget: &Budget, totals: &BudgetTotals) -> String {
    let mut lines = vec![
        format!("Cliente: {}", budget.customer.name),
        format!("Data: {}", format_date(budget.meta.created)),
    ];

    for area in &totals.per_area {
        lines.push(format!(
            "Área {}: {}m × {}m",
            area.input.label, area.input.span_length_m, area.input.beam_spacing_m
        ));
    }

    lines.push(format!(
        "Área Linear Total: {} m²",
        format_m2(totals.total_linear_area_m2)
    ));
    lines.push(format!(
        "Custo Total: {}",
        format_brl(Reais(totals.total_cost))
    ));
    lines.push(format!(
        "Custo por m²: {}",
        format_brl(Reais(totals.cost_per_linear_m2))
    ));

    lines.join("\n")
}

/// WhatsApp message body for a computed budget.
pub fn whatsapp_message(budget: &Budget, totals: &BudgetTotals) -> String {
    format!(
        "*Orçamento Lajecalc*\n\n{}\n\nObrigado por escolher a Lajecalc!",
        summary_block(budget, totals)
    )
}

/// E-mail body for a computed budget.
pub fn email_body(budget: &Budget, totals: &BudgetTotals) -> String {
    format!(
        "Olá {},\n\nSegue o orçamento solicitado:\n\n{}\n\nObrigado por escolher a Lajecalc!",
        budget.customer.name,
        summary_block(budget, totals)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::budget::Budget;
    use crate::customer::Customer;
    use crate::estimation::slab::SlabInput;

    fn computed_budget() -> (Budget, BudgetTotals) {
        let customer = Customer::new("Maria Souza", "maria@example.com", "(41) 99999-0000");
        let mut budget = Budget::new("Carlos", "ORC-2026-014", customer);
        budget.add_area(SlabInput::new("Sala", 5.0, 0.12));
        let totals = budget.totals().unwrap();
        (budget, totals)
    }

    #[test]
    fn test_format_brl() {
        assert_eq!(format_brl(Reais(0.0)), "R$ 0,00");
        assert_eq!(format_brl(Reais(1234.5)), "R$ 1.234,50");
        assert_eq!(format_brl(Reais(1_234_567.891)), "R$ 1.234.567,89");
        assert_eq!(format_brl(Reais(-10.0)), "-R$ 10,00");
    }

    #[test]
    fn test_format_brl_rounds_to_cents() {
        assert_eq!(format_brl(Reais(28.8024)), "R$ 28,80");
        assert_eq!(format_brl(Reais(34.3776)), "R$ 34,38");
    }

    #[test]
    fn test_format_m2() {
        assert_eq!(format_m2(3.75), "3,75");
        assert_eq!(format_m2(1.2), "1,20");
    }

    #[test]
    fn test_whatsapp_message() {
        let (budget, totals) = computed_budget();
        let message = whatsapp_message(&budget, &totals);

        assert!(message.starts_with("*Orçamento Lajecalc*"));
        assert!(message.contains("Cliente: Maria Souza"));
        assert!(message.contains(&format!("Data: {}", format_date(budget.meta.created))));
        assert!(message.contains("Área Sala: 5m × 0.12m"));
        assert!(message.contains("Área Linear Total: 1,20 m²"));
        assert!(message.contains("Custo Total: R$ 34,38"));
        assert!(message.ends_with("Obrigado por escolher a Lajecalc!"));
    }

    #[test]
    fn test_email_body() {
        let (budget, totals) = computed_budget();
        let body = email_body(&budget, &totals);

        assert!(body.starts_with("Olá Maria Souza,"));
        assert!(body.contains("Segue o orçamento solicitado:"));
        assert!(body.contains("Custo por m²:"));
    }

    #[test]
    fn test_rendering_is_deterministic() {
        let (budget, totals) = computed_budget();
        assert_eq!(
            whatsapp_message(&budget, &totals),
            whatsapp_message(&budget, &totals)
        );
    }
}
