//! Integration scenarios for the desk triage workflow.
//!
//! Everything here goes through the public crate surface: the triage
//! engines, the desk service facade, and the HTTP router, so the suite
//! proves the inbox contract without reaching into private modules.

mod common {
    use std::collections::BTreeMap;
    use std::sync::{Arc, Mutex};

    use chrono::{Duration, NaiveDate};

    use dealdesk::desk::{
        DeskRepository, DeskService, EscalationAlert, EscalationError, EscalationPublisher,
        RepositoryError, Settlement, SettlementId, SettlementStatus, Trade, TradeId, TradeSide,
        TradeStatus,
    };

    pub(super) fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 3, 16).expect("valid date")
    }

    pub(super) fn date(offset_days: i64) -> String {
        (today() + Duration::days(offset_days))
            .format("%Y-%m-%d")
            .to_string()
    }

    pub(super) fn draft_trade(id: &str) -> Trade {
        Trade {
            trade_id: TradeId(format!("TRD-{id}")),
            counterparty: "Meridian Capital".to_string(),
            facility: "Term Loan B".to_string(),
            notional_usd: 25_000_000,
            status: TradeStatus::Draft,
            settlement_date: None,
            flagged_items: 0,
            open_questions: 0,
            dd_progress_pct: None,
        }
    }

    pub(super) fn stuck_dd_trade(id: &str) -> Trade {
        Trade {
            status: TradeStatus::InDueDiligence,
            flagged_items: 5,
            open_questions: 12,
            dd_progress_pct: Some(20),
            ..draft_trade(id)
        }
    }

    pub(super) fn overdue_settlement(id: &str) -> Settlement {
        Settlement {
            settlement_id: SettlementId(format!("STL-{id}")),
            trade_id: TradeId(format!("TRD-{id}")),
            side: TradeSide::Buy,
            amount_usd: 60_000_000,
            status: SettlementStatus::Pending,
            settlement_date: Some(date(-2)),
        }
    }

    #[derive(Default)]
    pub(super) struct MemoryDesk {
        trades: Mutex<BTreeMap<TradeId, Trade>>,
        settlements: Mutex<BTreeMap<SettlementId, Settlement>>,
    }

    impl DeskRepository for MemoryDesk {
        fn insert_trade(&self, trade: Trade) -> Result<(), RepositoryError> {
            let mut guard = self.trades.lock().expect("lock");
            if guard.contains_key(&trade.trade_id) {
                return Err(RepositoryError::Conflict);
            }
            guard.insert(trade.trade_id.clone(), trade);
            Ok(())
        }

        fn fetch_trade(&self, id: &TradeId) -> Result<Option<Trade>, RepositoryError> {
            let guard = self.trades.lock().expect("lock");
            Ok(guard.get(id).cloned())
        }

        fn pending_trades(&self) -> Result<Vec<Trade>, RepositoryError> {
            let guard = self.trades.lock().expect("lock");
            Ok(guard
                .values()
                .filter(|trade| trade.status.is_open())
                .cloned()
                .collect())
        }

        fn insert_settlement(&self, settlement: Settlement) -> Result<(), RepositoryError> {
            let mut guard = self.settlements.lock().expect("lock");
            if guard.contains_key(&settlement.settlement_id) {
                return Err(RepositoryError::Conflict);
            }
            guard.insert(settlement.settlement_id.clone(), settlement);
            Ok(())
        }

        fn pending_settlements(&self) -> Result<Vec<Settlement>, RepositoryError> {
            let guard = self.settlements.lock().expect("lock");
            Ok(guard
                .values()
                .filter(|settlement| settlement.status.is_open())
                .cloned()
                .collect())
        }
    }

    #[derive(Default)]
    pub(super) struct MemoryEscalations {
        events: Mutex<Vec<EscalationAlert>>,
    }

    impl MemoryEscalations {
        pub(super) fn events(&self) -> Vec<EscalationAlert> {
            self.events.lock().expect("lock").clone()
        }
    }

    impl EscalationPublisher for MemoryEscalations {
        fn publish(&self, alert: EscalationAlert) -> Result<(), EscalationError> {
            self.events.lock().expect("lock").push(alert);
            Ok(())
        }
    }

    pub(super) fn build_service() -> (
        DeskService<MemoryDesk, MemoryEscalations>,
        Arc<MemoryDesk>,
        Arc<MemoryEscalations>,
    ) {
        let repository = Arc::new(MemoryDesk::default());
        let escalations = Arc::new(MemoryEscalations::default());
        let service = DeskService::new(repository.clone(), escalations.clone());
        (service, repository, escalations)
    }
}

mod triage {
    use super::common::*;
    use dealdesk::desk::{ReasonKind, SettlementTriage, TradeTriage};

    #[test]
    fn the_quiet_trade_and_the_stuck_trade_bracket_the_score_range() {
        let triage = TradeTriage::new();

        let quiet = triage.calculate_priority(&draft_trade("0001"), today());
        assert_eq!(quiet.score, 0);
        assert_eq!(quiet.suggested_action, "Monitor trade progress");

        let stuck = triage.calculate_priority(&stuck_dd_trade("0002"), today());
        assert_eq!(stuck.score, 88);
        let weights: Vec<u32> = stuck.reasons.iter().map(|reason| reason.weight).collect();
        assert_eq!(weights, vec![35, 25, 20, 8]);
    }

    #[test]
    fn overdue_settlements_carry_their_audit_trail() {
        let triage = SettlementTriage::new();
        let result = triage.calculate_priority(&overdue_settlement("0003"), today());

        assert_eq!(result.score, 65);
        assert_eq!(result.reasons[0].kind, ReasonKind::Deadline);
        assert!(result.reasons[0].label.contains("overdue"));
        assert_eq!(result.reasons[1].kind, ReasonKind::Amount);
        assert!(result.suggested_action.contains("overdue"));
    }

    #[test]
    fn rankings_are_reproducible_for_a_fixed_day() {
        let triage = TradeTriage::new();
        let trades = vec![draft_trade("0004"), stuck_dd_trade("0005")];

        let first = triage.prioritize(trades.clone(), today());
        let second = triage.prioritize(trades, today());

        let first_ids: Vec<&str> = first.iter().map(|entry| entry.item.trade_id.0.as_str()).collect();
        let second_ids: Vec<&str> = second.iter().map(|entry| entry.item.trade_id.0.as_str()).collect();
        assert_eq!(first_ids, second_ids);
        assert_eq!(first[0].priority, second[0].priority);
    }
}

mod service {
    use super::common::*;

    #[test]
    fn end_to_end_ingest_rank_and_escalate() {
        let (service, _, escalations) = build_service();

        service
            .ingest_trades(vec![draft_trade("0006"), stuck_dd_trade("0007")])
            .expect("trades ingest");
        service
            .ingest_settlements(vec![overdue_settlement("0008")])
            .expect("settlements ingest");

        let trade_inbox = service.trade_inbox(today()).expect("trade inbox");
        assert_eq!(trade_inbox.stats.total, 2);
        assert_eq!(trade_inbox.stats.critical, 1);
        assert_eq!(trade_inbox.entries[0].item.trade_id.0, "TRD-0007");

        let settlement_inbox = service.settlement_inbox(today()).expect("settlement inbox");
        assert_eq!(settlement_inbox.stats.total, 1);
        assert_eq!(settlement_inbox.stats.high, 1);

        let events = escalations.events();
        assert_eq!(events.len(), 1, "only the critical trade escalates");
        assert_eq!(events[0].reference, "TRD-0007");
    }
}

mod routing {
    use std::sync::Arc;

    use axum::body::{to_bytes, Body};
    use axum::http::{Request, StatusCode};
    use serde_json::Value;
    use tower::ServiceExt;

    use super::common::*;
    use dealdesk::desk::desk_router;

    #[tokio::test]
    async fn ingest_then_read_the_inbox_over_http() {
        let (service, _, _) = build_service();
        let router = desk_router(Arc::new(service));

        let trades = vec![draft_trade("0009"), stuck_dd_trade("0010")];
        let post = Request::builder()
            .method("POST")
            .uri("/api/v1/desk/trades")
            .header("content-type", "application/json")
            .body(Body::from(serde_json::to_vec(&trades).expect("serialize")))
            .expect("request");
        let response = router.clone().oneshot(post).await.expect("dispatch");
        assert_eq!(response.status(), StatusCode::ACCEPTED);

        let uri = format!("/api/v1/desk/trades/inbox?today={}", date(0));
        let get = Request::builder()
            .method("GET")
            .uri(uri)
            .body(Body::empty())
            .expect("request");
        let response = router.oneshot(get).await.expect("dispatch");
        assert_eq!(response.status(), StatusCode::OK);

        let body = to_bytes(response.into_body(), 1024 * 1024)
            .await
            .expect("body");
        let payload: Value = serde_json::from_slice(&body).expect("json");

        let entries = payload
            .get("entries")
            .and_then(Value::as_array)
            .expect("entries");
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].get("score").and_then(Value::as_u64), Some(88));
        assert_eq!(
            payload.pointer("/stats/total").and_then(Value::as_u64),
            Some(2)
        );
    }
}
