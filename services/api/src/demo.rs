use std::path::PathBuf;

use chrono::{Local, NaiveDate};
use clap::Args;

use crate::infra::parse_date;
use dealdesk::desk::blotter;
use dealdesk::desk::{
    InboxStats, Prioritized, Settlement, SettlementId, SettlementStatus, SettlementTriage, Trade,
    TradeId, TradeSide, TradeStatus, TradeTriage,
};
use dealdesk::error::AppError;

#[derive(Args, Debug, Default)]
pub(crate) struct InboxArgs {
    /// Blotter CSV export to rank
    #[arg(long)]
    pub(crate) path: PathBuf,
    /// Calendar day to rank for, defaults to today
    #[arg(long, value_parser = parse_date)]
    pub(crate) today: Option<NaiveDate>,
}

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Calendar day to rank for, defaults to today
    #[arg(long, value_parser = parse_date)]
    pub(crate) today: Option<NaiveDate>,
}

/// Rank a real blotter export and print the trade inbox.
pub(crate) fn run_inbox(args: InboxArgs) -> Result<(), AppError> {
    let today = args.today.unwrap_or_else(|| Local::now().date_naive());
    let trades = blotter::import_from_path(&args.path)?;

    let triage = TradeTriage::new();
    let ranked = triage.prioritize(trades, today);
    let stats = triage.inbox_stats(&ranked);

    println!("Trade inbox for {today} ({})", args.path.display());
    print_stats(&stats);
    for entry in &ranked {
        print_entry(
            entry.item.trade_id.0.as_str(),
            triage.band(entry.priority.score).label(),
            entry,
        );
    }

    Ok(())
}

/// Run the triage engines over canned desk data and print both inboxes.
pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let today = args.today.unwrap_or_else(|| Local::now().date_naive());

    let trades = TradeTriage::new();
    let ranked_trades = trades.prioritize(sample_trades(today), today);
    let trade_stats = trades.inbox_stats(&ranked_trades);

    println!("Trade inbox for {today}");
    print_stats(&trade_stats);
    for entry in &ranked_trades {
        print_entry(
            entry.item.trade_id.0.as_str(),
            trades.band(entry.priority.score).label(),
            entry,
        );
    }

    let settlements = SettlementTriage::new();
    let ranked_settlements = settlements.prioritize(sample_settlements(today), today);
    let settlement_stats = settlements.inbox_stats(&ranked_settlements);

    println!();
    println!("Settlement inbox for {today}");
    print_stats(&settlement_stats);
    for entry in &ranked_settlements {
        print_entry(
            entry.item.settlement_id.0.as_str(),
            settlements.band(entry.priority.score).label(),
            entry,
        );
    }

    Ok(())
}

fn print_stats(stats: &InboxStats) {
    println!(
        "  {} item(s): {} critical, {} high, {} medium, {} low",
        stats.total, stats.critical, stats.high, stats.medium, stats.low
    );
}

fn print_entry<T>(reference: &str, band: &str, entry: &Prioritized<T>) {
    println!(
        "  [{:>3}] {:<8} {}  {}",
        entry.priority.score, band, reference, entry.priority.suggested_action
    );
    for reason in &entry.priority.reasons {
        println!("          - {} (+{})", reason.label, reason.weight);
    }
}

fn iso(date: NaiveDate, offset_days: i64) -> String {
    (date + chrono::Duration::days(offset_days))
        .format("%Y-%m-%d")
        .to_string()
}

fn sample_trades(today: NaiveDate) -> Vec<Trade> {
    vec![
        Trade {
            trade_id: TradeId("TRD-2201".to_string()),
            counterparty: "Meridian Capital".to_string(),
            facility: "Term Loan B".to_string(),
            notional_usd: 75_000_000,
            status: TradeStatus::InDueDiligence,
            settlement_date: Some(iso(today, 6)),
            flagged_items: 5,
            open_questions: 12,
            dd_progress_pct: Some(20),
        },
        Trade {
            trade_id: TradeId("TRD-2202".to_string()),
            counterparty: "Harbor Point".to_string(),
            facility: "Revolver".to_string(),
            notional_usd: 18_000_000,
            status: TradeStatus::AwaitingSettlement,
            settlement_date: Some(iso(today, -1)),
            flagged_items: 0,
            open_questions: 2,
            dd_progress_pct: None,
        },
        Trade {
            trade_id: TradeId("TRD-2203".to_string()),
            counterparty: "Sable Ridge".to_string(),
            facility: "Second Lien".to_string(),
            notional_usd: 9_500_000,
            status: TradeStatus::Draft,
            settlement_date: None,
            flagged_items: 0,
            open_questions: 0,
            dd_progress_pct: None,
        },
    ]
}

fn sample_settlements(today: NaiveDate) -> Vec<Settlement> {
    vec![
        Settlement {
            settlement_id: SettlementId("STL-3301".to_string()),
            trade_id: TradeId("TRD-2202".to_string()),
            side: TradeSide::Buy,
            amount_usd: 60_000_000,
            status: SettlementStatus::Pending,
            settlement_date: Some(iso(today, -2)),
        },
        Settlement {
            settlement_id: SettlementId("STL-3302".to_string()),
            trade_id: TradeId("TRD-2201".to_string()),
            side: TradeSide::Sell,
            amount_usd: 12_000_000,
            status: SettlementStatus::Failed,
            settlement_date: Some(iso(today, 2)),
        },
    ]
}
