//! # Lajecalc CLI Application
//!
//! Terminal front-end for quick slab estimates: prompts for the area
//! dimensions, runs the engine against the catalog price book, and prints
//! the costed result plus its JSON form.

use std::io::{self, BufRead, Write};

use anyhow::Result;

use laje_core::catalog::{PriceBook, SpacingDivisor};
use laje_core::estimation::slab::{calculate, SlabInput};
use laje_core::export::{format_brl, format_m2};
use laje_core::units::{Centimeters, Meters, Reais};

fn prompt_f64(prompt: &str, default: f64) -> f64 {
    print!("{}", prompt);
    if io::stdout().flush().is_err() {
        return default;
    }

    let mut input = String::new();
    if io::stdin().lock().read_line(&mut input).is_err() {
        return default;
    }

    input.trim().replace(',', ".").parse().unwrap_or(default)
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .init();

    println!("Lajecalc CLI - Orçamento de Lajes");
    println!("=================================");
    println!();

    let span_m = prompt_f64("Comprimento da vigota (m) [5.0]: ", 5.0);
    let spacing_cm = prompt_f64("Largura entre vigotas (cm) [12.0]: ", 12.0);
    let ie_raw = prompt_f64("IE (0.4 ou 0.5) [0.5]: ", 0.5);
    let with_freight = prompt_f64("Incluir frete no total? (1 = sim, 0 = não) [1]: ", 1.0) != 0.0;

    let divisor = match SpacingDivisor::from_value(ie_raw) {
        Ok(d) => d,
        Err(e) => {
            eprintln!("Erro: {}", e);
            if let Ok(json) = serde_json::to_string_pretty(&e) {
                eprintln!();
                eprintln!("Error JSON:");
                eprintln!("{}", json);
            }
            return Ok(());
        }
    };

    let spacing: Meters = Centimeters(spacing_cm).into();

    let mut input = SlabInput::new("CLI", span_m, spacing.value());
    input.spacing_divisor = divisor;
    input.include_freight_in_total = with_freight;

    println!();
    println!("Calculando com preços de catálogo...");
    println!();

    match calculate(&input, &PriceBook::default()) {
        Ok(result) => {
            println!("═══════════════════════════════════════");
            println!("  RESULTADO DO ORÇAMENTO");
            println!("═══════════════════════════════════════");
            println!();
            println!("Entrada:");
            println!("  Comprimento: {:.2} m", input.span_length_m);
            println!("  Largura:     {:.2} m ({})", input.beam_spacing_m, divisor);
            println!();
            println!("Quantidades:");
            println!("  Área linear: {} m²", format_m2(result.linear_area_m2));
            println!("  Área plana:  {} m²", format_m2(result.plan_area_m2));
            println!("  Placas EPS:  {} un", result.insulation_units);
            println!();
            println!("Custos:");
            println!("  Vigotas: {}", format_brl(Reais(result.beam_cost)));
            println!("  EPS:     {}", format_brl(Reais(result.insulation_cost)));
            println!(
                "  Frete:   {} {}",
                format_brl(Reais(result.freight_cost)),
                if with_freight {
                    "(incluído no total)"
                } else {
                    "(informativo)"
                }
            );
            println!();
            println!("═══════════════════════════════════════");
            println!("  TOTAL: {}", format_brl(Reais(result.total_cost)));
            println!(
                "  Custo por m² (plano):  {}",
                format_brl(Reais(result.cost_per_plan_m2))
            );
            println!(
                "  Custo por m² (linear): {}",
                format_brl(Reais(result.cost_per_linear_m2))
            );
            println!("═══════════════════════════════════════");

            println!();
            println!("JSON Output:");
            if let Ok(json) = serde_json::to_string_pretty(&result) {
                println!("{}", json);
            }
        }
        Err(e) => {
            eprintln!("Erro: {}", e);
            if let Ok(json) = serde_json::to_string_pretty(&e) {
                eprintln!();
                eprintln!("Error JSON:");
                eprintln!("{}", json);
            }
        }
    }

    Ok(())
}
