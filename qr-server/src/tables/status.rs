//! Status engine - pure derivation of a table's stage from ticket timestamps
//!
//! Level-triggered: the status is recomputed fresh from `(ticket, now)` on
//! every query instead of being advanced by transition calls, so there is no
//! stored state that could drift from the wall clock.

use shared::models::{TableStatus, Ticket};

/// Tunable time windows for status derivation (milliseconds)
#[derive(Debug, Clone, Copy)]
pub struct StatusWindows {
    /// Delay after creation before a ticket counts as auto-printed
    pub auto_print_buffer_ms: i64,
    /// Kitchen preparation window after the effective print instant
    pub prep_window_ms: i64,
    /// How long "Paid" stays on screen before the table reads Empty
    pub pay_clear_window_ms: i64,
}

impl Default for StatusWindows {
    fn default() -> Self {
        Self {
            auto_print_buffer_ms: 120 * 1000,
            prep_window_ms: 20 * 60 * 1000,
            pay_clear_window_ms: 30 * 1000,
        }
    }
}

/// The instant a ticket is considered printed: `printed_at` when staff printed
/// it, otherwise `created_at + buffer` once the auto-print buffer has elapsed.
pub fn effective_printed_at(ticket: &Ticket, now_ms: i64, windows: &StatusWindows) -> Option<i64> {
    if let Some(printed) = ticket.printed_at {
        return Some(printed);
    }
    if now_ms - ticket.created_at >= windows.auto_print_buffer_ms {
        return Some(ticket.created_at + windows.auto_print_buffer_ms);
    }
    None
}

/// Derive the displayed status from the table's latest visible ticket.
///
/// Evaluated in strict priority order:
/// 1. no ticket → Empty
/// 2. paid → Paid while the pay-clear window runs, then Empty
/// 3. not effectively printed → Ordered
/// 4. printed → InPreparation while the prep window runs, then PaymentDue
pub fn derive_status(ticket: Option<&Ticket>, now_ms: i64, windows: &StatusWindows) -> TableStatus {
    let Some(ticket) = ticket else {
        return TableStatus::Empty;
    };

    if let Some(paid_at) = ticket.paid_at {
        if now_ms - paid_at < windows.pay_clear_window_ms {
            return TableStatus::Paid;
        }
        return TableStatus::Empty;
    }

    let Some(printed_at) = effective_printed_at(ticket, now_ms, windows) else {
        return TableStatus::Ordered;
    };

    if now_ms - printed_at < windows.prep_window_ms {
        TableStatus::InPreparation
    } else {
        TableStatus::PaymentDue
    }
}
