use super::common::{date, settlement, today};
use crate::desk::domain::{SettlementStatus, TradeSide};
use crate::desk::priority::{ReasonKind, UrgencyBand};
use crate::desk::settlements::SettlementTriage;

#[test]
fn overdue_large_buy_settlement_combines_deadline_and_amount() {
    let mut late = settlement("0001");
    late.side = TradeSide::Buy;
    late.amount_usd = 60_000_000;
    late.settlement_date = Some(date(-2));

    let triage = SettlementTriage::new();
    let result = triage.calculate_priority(&late, today());

    assert_eq!(result.score, 65);
    assert_eq!(result.reasons.len(), 2);

    let deadline = &result.reasons[0];
    assert_eq!(deadline.kind, ReasonKind::Deadline);
    assert_eq!(deadline.weight, 50);
    assert!(deadline.label.contains("overdue"));

    let amount = &result.reasons[1];
    assert_eq!(amount.kind, ReasonKind::Amount);
    assert_eq!(amount.weight, 15);

    assert!(result.suggested_action.contains("overdue"));
    assert_eq!(triage.band(result.score), UrgencyBand::High);
}

#[test]
fn amount_just_below_the_threshold_contributes_nothing() {
    let mut sizeable = settlement("0002");
    sizeable.amount_usd = 49_999_999;

    let triage = SettlementTriage::new();
    let result = triage.calculate_priority(&sizeable, today());

    assert_eq!(result.score, 0);
    assert!(result.reasons.is_empty());
}

#[test]
fn failed_settlement_carries_a_status_reason() {
    let mut failed = settlement("0003");
    failed.status = SettlementStatus::Failed;

    let triage = SettlementTriage::new();
    let result = triage.calculate_priority(&failed, today());

    assert_eq!(result.score, 35);
    assert_eq!(result.reasons[0].kind, ReasonKind::Status);
    assert!(result.suggested_action.contains("failed"));
}

#[test]
fn quiet_settlement_gets_the_neutral_suggestion() {
    let triage = SettlementTriage::new();
    let result = triage.calculate_priority(&settlement("0004"), today());

    assert_eq!(result.score, 0);
    assert!(result.reasons.is_empty());
    assert_eq!(result.suggested_action, "Monitor settlement pipeline");
}

#[test]
fn settlement_deadline_tiers_differ_from_the_trade_engine() {
    let mut soon = settlement("0005");
    soon.settlement_date = Some(date(2));

    let triage = SettlementTriage::new();
    let result = triage.calculate_priority(&soon, today());
    assert_eq!(result.score, 25);

    let mut week_out = settlement("0006");
    week_out.settlement_date = Some(date(6));
    let result = triage.calculate_priority(&week_out, today());
    assert_eq!(result.score, 10);
}
