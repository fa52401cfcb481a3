use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use log::{info, warn};

use dca_optimizer::utils::format_utc_day;
use dca_optimizer::{
    BlindScenario, Cli, ConstraintParams, RiskMetrics, ScenarioSummary, StrategyComparison,
    evaluate, load_price_series, score, simulate_blind, solve_with_deadline,
};

fn main() -> Result<()> {
    // A. Init logging
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    // B. Parse args and load the series
    let args = Cli::parse();
    let series = load_price_series(&args.data)?;
    let (first, last) = (
        series.first().context("price series is empty")?,
        series.last().context("price series is empty")?,
    );
    info!(
        "loaded {} periods, window {} to {}",
        series.len(),
        format_utc_day(first.timestamp),
        format_utc_day(last.timestamp)
    );
    let final_close = last.close;

    let params = ConstraintParams {
        total_budget: args.total_budget,
        monthly_cap: args.monthly_cap,
        weekly_cap: args.weekly_cap,
        min_per_trade: args.min_per_trade,
        max_per_trade: args.max_per_trade,
        fee_percent: args.fee_percent,
    };

    // C. Optimized schedule. Infeasible or timed-out solves are terminal
    // for the scenario; there is nothing sensible to report instead.
    let time_limit = Duration::from_secs(args.solve_timeout_secs);
    let optimized_plan = solve_with_deadline(&series, &params, time_limit)
        .with_context(|| format!("optimizing schedule for {}", args.label))?;
    let optimized = score(&optimized_plan, final_close);

    // D. Blind baselines, one per requested cadence
    let mut blind = Vec::with_capacity(args.cadences.len());
    for cadence_days in args.cadences.iter().copied() {
        let plan = simulate_blind(&series, args.total_budget, cadence_days)
            .with_context(|| format!("blind baseline with {cadence_days}-day cadence"))?;
        blind.push(BlindScenario {
            cadence_days,
            summary: score(&plan, final_close),
        });
    }

    // E. Risk diagnostics never block the strategy results
    let risk = match evaluate(&series, args.frequency) {
        Ok(metrics) => metrics,
        Err(err) => {
            warn!("risk metrics unavailable: {err}");
            RiskMetrics::unavailable()
        }
    };

    let comparison = StrategyComparison {
        label: args.label.clone(),
        optimized,
        blind,
        risk,
    };

    if args.json {
        println!("{}", serde_json::to_string_pretty(&comparison)?);
    } else {
        print_report(&comparison);
    }
    Ok(())
}

fn print_report(comparison: &StrategyComparison) {
    println!("Strategy comparison for {}", comparison.label);
    println!();
    print_scenario("Optimized schedule", &comparison.optimized, None);
    for blind in &comparison.blind {
        print_scenario("Blind DCA", &blind.summary, Some(blind.cadence_days));
    }

    println!("Risk profile of the underlying series:");
    println!(
        "   - Max drawdown: {}",
        fmt_metric(comparison.risk.max_drawdown)
    );
    println!(
        "   - Annualized volatility: {}",
        fmt_metric(comparison.risk.volatility)
    );
    println!(
        "   - Sharpe ratio: {}",
        fmt_metric(comparison.risk.sharpe_ratio)
    );
}

fn print_scenario(label: &str, summary: &ScenarioSummary, cadence_days: Option<u32>) {
    println!("{label}");
    println!("   - Total invested: {:.2}", summary.total_invested);
    println!("   - Units acquired: {:.6}", summary.total_units);
    println!("   - Portfolio value: {:.2}", summary.final_value);
    println!("   - Profit: {:.2}", summary.profit);
    println!("   - Purchases: {}", summary.trade_count);
    if let Some(days) = cadence_days {
        println!("   - Cadence (days): {days}");
    }
    println!();
}

fn fmt_metric(value: Option<f64>) -> String {
    match value {
        Some(v) => format!("{v:.4}"),
        None => "unavailable".to_string(),
    }
}
