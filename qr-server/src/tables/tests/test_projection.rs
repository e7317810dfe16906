//! Session-aware table projection and list ordering

use super::*;
use shared::models::TableStatus;

#[test]
fn test_full_table_lifecycle_scenario() {
    let manager = test_manager();
    let t = base_ms();

    // createTicket(T3, 2 × 10.00) → total 22.00
    let ticket = manager.create_ticket(order("T3", &[("m2", 2)]), t).unwrap();
    assert_eq!(ticket.total, 22.0);

    // Immediately: Ordered
    assert_eq!(manager.project_table("T3", t).status, TableStatus::Ordered);
    // At T+121s: InPreparation
    assert_eq!(
        manager.project_table("T3", t + 121 * SEC).status,
        TableStatus::InPreparation
    );
    // At T+121s+20min+1s: PaymentDue
    let due = t + 121 * SEC + 20 * MIN + SEC;
    assert_eq!(manager.project_table("T3", due).status, TableStatus::PaymentDue);

    // Paid at p: Paid until p + window, then Empty
    assert!(manager.mark_paid("T3", due));
    assert_eq!(manager.project_table("T3", due).status, TableStatus::Paid);
    assert_eq!(
        manager.project_table("T3", due + 29 * SEC).status,
        TableStatus::Paid
    );
    let expired = due + 30 * SEC;
    let view = manager.project_table("T3", expired);
    assert_eq!(view.status, TableStatus::Empty);
    assert!(view.cleared);
    assert_eq!(view.last_ticket_at, None);
    assert_eq!(view.last_ticket, None);

    // The session closed exactly when the transition was observed
    assert_eq!(manager.table_flags("T3").session_start_at, None);

    // listTables shows T3 without a last ticket
    let t3 = manager
        .list_tables(expired)
        .into_iter()
        .find(|v| v.id == "T3")
        .unwrap();
    assert_eq!(t3.last_ticket_at, None);
}

#[test]
fn test_visible_last_ticket_payload() {
    let manager = test_manager();
    let t = base_ms();
    let ticket = manager.create_ticket(order("T2", &[("m1", 1)]), t).unwrap();

    let view = manager.project_table("T2", t + MIN);
    assert_eq!(view.status, TableStatus::Ordered);
    assert_eq!(view.last_ticket_at, Some(t));
    let last = view.last_ticket.unwrap();
    assert_eq!(last.total, ticket.total);
    assert_eq!(last.at, t);
    assert!(!view.cleared);
}

#[test]
fn test_new_session_hides_previous_ticket() {
    let manager = test_manager();
    let t = base_ms();
    manager.create_ticket(order("T1", &[("m1", 1)]), t).unwrap();

    // A new party sits down: the old ticket disappears from the view
    manager.start_session("T1", t + 40 * MIN);
    let view = manager.project_table("T1", t + 41 * MIN);
    assert_eq!(view.status, TableStatus::InProgress);
    assert_eq!(view.last_ticket_at, None);

    // The ticket itself is retained for the day summary
    assert_eq!(manager.day_summary(t + 41 * MIN).len(), 1);
}

#[test]
fn test_session_without_order_is_in_progress() {
    let manager = test_manager();
    let t = base_ms();
    manager.start_session("T6", t);
    let view = manager.project_table("T6", t + MIN);
    assert_eq!(view.status, TableStatus::InProgress);
    assert_eq!(view.session_start_at, Some(t));
}

#[test]
fn test_manual_close_forces_empty_and_suppresses_ticket() {
    let manager = test_manager();
    let t = base_ms();
    manager.create_ticket(order("T1", &[("m1", 1)]), t).unwrap();
    manager.close_table("T1");

    let view = manager.project_table("T1", t + MIN);
    assert_eq!(view.status, TableStatus::Empty);
    assert!(view.cleared);
    assert!(view.closed_manually);
    assert_eq!(view.last_ticket_at, None);

    manager.reopen_table("T1");
    let view = manager.project_table("T1", t + MIN);
    assert_eq!(view.status, TableStatus::Ordered);
    assert_eq!(view.last_ticket_at, Some(t));
}

#[test]
fn test_start_session_clears_manual_closure() {
    let manager = test_manager();
    let t = base_ms();
    manager.close_table("T7");
    manager.start_session("T7", t);
    let view = manager.project_table("T7", t);
    assert!(!view.closed_manually);
    assert_eq!(view.status, TableStatus::InProgress);
}

#[test]
fn test_new_order_overlay() {
    let manager = test_manager();
    let t = base_ms();
    manager.create_ticket(order("T1", &[("m1", 1)]), t).unwrap();
    // Second order lands while the first is still in preparation
    manager
        .create_ticket(order("T1", &[("m4", 2)]), t + 10 * MIN)
        .unwrap();

    let view = manager.project_table("T1", t + 10 * MIN + 30 * SEC);
    assert_eq!(view.status, TableStatus::NewOrder);

    // The overlay is transient: after 3 minutes the latest ticket's own
    // status shows again
    let view = manager.project_table("T1", t + 14 * MIN);
    assert_eq!(view.status, TableStatus::InPreparation);
}

#[test]
fn test_new_order_overlay_needs_in_flight_previous_ticket() {
    let manager = test_manager();
    let t = base_ms();
    manager.create_ticket(order("T1", &[("m1", 1)]), t).unwrap();
    manager.mark_paid("T1", t + MIN);

    // Previous ticket resolved (paid display long expired) → no overlay
    manager
        .create_ticket(order("T1", &[("m4", 1)]), t + 10 * MIN)
        .unwrap();
    let view = manager.project_table("T1", t + 10 * MIN + 30 * SEC);
    assert_eq!(view.status, TableStatus::Ordered);
}

#[test]
fn test_new_order_overlay_needs_two_tickets() {
    let manager = test_manager();
    let t = base_ms();
    manager.create_ticket(order("T1", &[("m1", 1)]), t).unwrap();
    assert_eq!(
        manager.project_table("T1", t + 30 * SEC).status,
        TableStatus::Ordered
    );
}

#[test]
fn test_reconcile_is_idempotent_and_session_scoped() {
    let manager = test_manager();
    let t = base_ms();
    manager.create_ticket(order("T1", &[("m1", 1)]), t).unwrap();
    manager.mark_paid("T1", t + 5 * MIN);

    let after = t + 5 * MIN + 31 * SEC;
    manager.reconcile("T1", after);
    assert_eq!(manager.table_flags("T1").session_start_at, None);
    manager.reconcile("T1", after);
    assert_eq!(manager.table_flags("T1").session_start_at, None);
}

#[test]
fn test_reconcile_spares_a_newer_session() {
    let manager = test_manager();
    let t = base_ms();
    manager.create_ticket(order("T1", &[("m1", 1)]), t).unwrap();
    manager.mark_paid("T1", t + 5 * MIN);

    // A new party arrived before the paid display expired
    let new_session = t + 5 * MIN + 10 * SEC;
    manager.start_session("T1", new_session);

    manager.reconcile("T1", t + 6 * MIN);
    assert_eq!(manager.table_flags("T1").session_start_at, Some(new_session));
}

#[test]
fn test_list_tables_ordering() {
    let manager = test_manager();
    let t = base_ms();
    manager.create_ticket(order("T5", &[("m1", 1)]), t).unwrap();
    manager
        .create_ticket(order("T2", &[("m1", 1)]), t + MIN)
        .unwrap();

    let views = manager.list_tables(t + 2 * MIN);
    assert_eq!(views.len(), 10);
    // Most recent visible ticket first
    assert_eq!(views[0].id, "T2");
    assert_eq!(views[1].id, "T5");
    // Ticket-less tables follow in natural numeric order
    let rest: Vec<&str> = views[2..].iter().map(|v| v.id.as_str()).collect();
    assert_eq!(rest, vec!["T1", "T3", "T4", "T6", "T7", "T8", "T9", "T10"]);
}

#[test]
fn test_writes_outside_table_set_never_listed() {
    let manager = test_manager();
    let t = base_ms();
    manager
        .create_ticket(order("T99", &[("m1", 1)]), t)
        .unwrap();

    let views = manager.list_tables(t);
    assert_eq!(views.len(), 10);
    assert!(views.iter().all(|v| v.id != "T99"));
    // The ticket still exists for the day summary
    assert_eq!(manager.day_summary(t).len(), 1);
}
