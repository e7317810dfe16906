//! TableManager - ticket store, session flags and table projection
//!
//! Owns all per-table mutable state. Tickets are append-only: once created,
//! only the staff timestamps (`printed_at`, `paid_at`) ever change. Every
//! public method takes an explicit `now_ms` so the time-window logic stays
//! deterministic under test.
//!
//! # 并发模型
//!
//! 所有可变状态按桌台分片存放在 `DashMap` 中，entry 级访问串行化同一桌台的
//! 读写，互不相关的桌台永不竞争。不存在跨桌台的复合更新。

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use chrono::NaiveTime;
use chrono_tz::Tz;
use dashmap::DashMap;
use shared::models::{
    LastTicket, TableFlags, TableStatus, TableView, Ticket, TicketCreate, TicketItem,
    TicketSummary,
};

use crate::money;
use crate::services::MenuCatalog;
use crate::tables::status::{StatusWindows, derive_status};
use crate::utils::time::{business_day_key, format_time_hm, parse_cutoff};
use crate::utils::validation::{
    normalize_modifiers, validate_price, validate_quantity, validate_required_text,
};
use crate::utils::{AppError, AppResult};

/// Fallback display name for off-menu items without a caller-supplied name
const OFF_MENU_NAME: &str = "Article";

/// Per-table state: the table's ticket history plus its mutable flags
#[derive(Debug, Default)]
struct TableSlot {
    /// Tickets in creation order (append-only)
    tickets: Vec<Ticket>,
    flags: TableFlags,
}

/// Behavioral knobs for the table engine
#[derive(Debug, Clone)]
pub struct TableOptions {
    pub windows: StatusWindows,
    /// How long a repeat order triggers the NewOrder overlay
    pub new_order_window_ms: i64,
    /// The fixed, ordered set of physical tables
    pub table_ids: Vec<String>,
    /// Business-day rollover time
    pub cutoff: NaiveTime,
    /// Business timezone
    pub tz: Tz,
}

impl Default for TableOptions {
    fn default() -> Self {
        Self {
            windows: StatusWindows::default(),
            new_order_window_ms: 3 * 60 * 1000,
            table_ids: default_table_ids(10),
            cutoff: parse_cutoff("03:00"),
            tz: chrono_tz::Europe::Paris,
        }
    }
}

/// Physical table ids T1..Tn
pub fn default_table_ids(count: usize) -> Vec<String> {
    (1..=count).map(|i| format!("T{i}")).collect()
}

/// TableManager - single owner of tickets, sessions and projections
pub struct TableManager {
    options: TableOptions,
    catalog: Arc<MenuCatalog>,
    /// Ticket id sequence (TCK1, TCK2, ...)
    seq: AtomicU64,
    /// Per-table state; keys are arbitrary strings, only `options.table_ids`
    /// ever appear in the table list
    slots: DashMap<String, TableSlot>,
}

impl std::fmt::Debug for TableManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TableManager")
            .field("options", &self.options)
            .field("tables", &self.slots.len())
            .finish()
    }
}

impl TableManager {
    pub fn new(catalog: Arc<MenuCatalog>, options: TableOptions) -> Self {
        Self {
            options,
            catalog,
            seq: AtomicU64::new(0),
            slots: DashMap::new(),
        }
    }

    /// Business-day bucket for an instant
    pub fn business_day(&self, at_ms: i64) -> String {
        business_day_key(at_ms, self.options.cutoff, self.options.tz)
    }

    // ========================================================================
    // Checkout
    // ========================================================================

    /// Create a ticket from a validated item list.
    ///
    /// Resolves each item against the menu catalog (caller name/price are the
    /// fallback on miss), computes the fixed-surtax total, stamps creation
    /// time and business day, and appends the ticket. As a side effect the
    /// table is reopened and a session starts if none is active.
    pub fn create_ticket(&self, req: TicketCreate, now_ms: i64) -> AppResult<Ticket> {
        let table = req.table.trim().to_string();
        validate_required_text(&table, "table")?;
        if req.items.is_empty() {
            return Err(AppError::validation("items must not be empty"));
        }

        let mut items = Vec::with_capacity(req.items.len());
        for input in &req.items {
            validate_required_text(&input.id, "item id")?;
            validate_quantity(input.quantity, "quantity")?;

            // Catalog hit wins over caller-supplied name/price
            let (name, unit_price) = match self.catalog.lookup(&input.id) {
                Some(menu) => (menu.name.clone(), menu.price),
                None => (
                    input
                        .name
                        .as_deref()
                        .map(str::trim)
                        .filter(|n| !n.is_empty())
                        .unwrap_or(OFF_MENU_NAME)
                        .to_string(),
                    input.price.unwrap_or(0.0),
                ),
            };
            validate_price(unit_price, "price")?;

            items.push(TicketItem {
                id: input.id.clone(),
                name,
                quantity: input.quantity,
                unit_price,
                owner_name: input.owner_name.clone(),
                modifiers: normalize_modifiers(&input.modifiers),
            });
        }

        let total = money::ticket_total(&items);
        let id = format!("TCK{}", self.seq.fetch_add(1, Ordering::SeqCst) + 1);
        let ticket = Ticket {
            id: id.clone(),
            table: table.clone(),
            items,
            total,
            created_at: now_ms,
            business_day: self.business_day(now_ms),
            printed_at: None,
            paid_at: None,
            owner_name: req.owner_name,
        };

        let mut slot = self.slots.entry(table.clone()).or_default();
        slot.flags.closed_manually = false;
        if slot.flags.session_start_at.is_none() {
            slot.flags.session_start_at = Some(now_ms);
        }
        slot.tickets.push(ticket.clone());
        drop(slot);

        tracing::info!(ticket_id = %id, table = %table, total, "Ticket created");
        Ok(ticket)
    }

    // ========================================================================
    // Staff actions
    //
    // Absent tables/tickets are benign no-ops (`Ok(false)`), never errors:
    // unreliable clients retry, and retrying must be harmless.
    // ========================================================================

    /// Record the manual print instant on the day's last ticket.
    ///
    /// Only applies while the derived status is still `Ordered` - once the
    /// auto-print buffer has elapsed, a reprint must not rewind the
    /// preparation window.
    pub fn mark_printed(&self, table: &str, now_ms: i64) -> bool {
        let day = self.business_day(now_ms);
        let Some(mut slot) = self.slots.get_mut(table) else {
            return false;
        };
        let Some(idx) = last_ticket_index(&slot.tickets, &day) else {
            return false;
        };
        let still_ordered = derive_status(
            Some(&slot.tickets[idx]),
            now_ms,
            &self.options.windows,
        ) == TableStatus::Ordered;
        let ticket = &mut slot.tickets[idx];
        if still_ordered && ticket.printed_at.is_none() {
            ticket.printed_at = Some(now_ms);
            tracing::info!(ticket_id = %ticket.id, table, "Ticket printed");
            true
        } else {
            false
        }
    }

    /// Confirm payment of the day's last ticket
    pub fn mark_paid(&self, table: &str, now_ms: i64) -> bool {
        let day = self.business_day(now_ms);
        let Some(mut slot) = self.slots.get_mut(table) else {
            return false;
        };
        let Some(idx) = last_ticket_index(&slot.tickets, &day) else {
            return false;
        };
        let ticket = &mut slot.tickets[idx];
        if ticket.paid_at.is_none() {
            ticket.paid_at = Some(now_ms);
            tracing::info!(ticket_id = %ticket.id, table, "Payment confirmed");
            true
        } else {
            false
        }
    }

    /// Cancel a confirmed payment.
    ///
    /// Also restores the session when it auto-closed after the payment, so
    /// the table returns to its in-flight state instead of appearing empty.
    pub fn cancel_payment(&self, table: &str, now_ms: i64) -> bool {
        let day = self.business_day(now_ms);
        let Some(mut slot) = self.slots.get_mut(table) else {
            return false;
        };
        let Some(idx) = last_ticket_index(&slot.tickets, &day) else {
            return false;
        };
        if slot.tickets[idx].paid_at.is_none() {
            return false;
        }
        slot.tickets[idx].paid_at = None;
        let created_at = slot.tickets[idx].created_at;
        if slot.flags.session_start_at.is_none() {
            slot.flags.session_start_at = Some(created_at);
        }
        tracing::info!(ticket_id = %slot.tickets[idx].id, table, "Payment cancelled");
        true
    }

    /// Close the table manually (forces Empty, hides the last ticket)
    pub fn close_table(&self, table: &str) {
        let mut slot = self.slots.entry(table.to_string()).or_default();
        slot.flags.closed_manually = true;
        tracing::info!(table, "Table closed manually");
    }

    /// Undo a manual closure
    pub fn reopen_table(&self, table: &str) {
        let mut slot = self.slots.entry(table.to_string()).or_default();
        slot.flags.closed_manually = false;
        tracing::info!(table, "Table reopened");
    }

    /// Start a dining session (guests scanned the QR and sat down).
    ///
    /// A fresh session also clears any manual closure and hides the previous
    /// party's last ticket from the table view.
    pub fn start_session(&self, table: &str, now_ms: i64) {
        let mut slot = self.slots.entry(table.to_string()).or_default();
        slot.flags.session_start_at = Some(now_ms);
        slot.flags.closed_manually = false;
        tracing::info!(table, "Session started");
    }

    // ========================================================================
    // Reconcile + projection
    // ========================================================================

    /// Idempotently close out a finished session.
    ///
    /// When the session's last ticket was paid and its payment display has
    /// expired, the session ends. This is the only mutation a read path
    /// triggers, kept explicit here instead of hidden inside the projection.
    pub fn reconcile(&self, table: &str, now_ms: i64) {
        let day = self.business_day(now_ms);
        let Some(mut slot) = self.slots.get_mut(table) else {
            return;
        };
        let Some(session_start) = slot.flags.session_start_at else {
            return;
        };
        let Some(idx) = last_ticket_index(&slot.tickets, &day) else {
            return;
        };
        let ticket = &slot.tickets[idx];
        // Only the session that produced the ticket can be closed by it
        if ticket.created_at < session_start || ticket.paid_at.is_none() {
            return;
        }
        if derive_status(Some(ticket), now_ms, &self.options.windows) != TableStatus::Empty {
            return;
        }
        // End the shared borrow of the ticket before touching the flags
        let ticket_id = ticket.id.clone();
        slot.flags.session_start_at = None;
        tracing::debug!(table, ticket_id = %ticket_id, "Session auto-cleared after payment");
    }

    /// Project one table's display payload
    pub fn project_table(&self, table: &str, now_ms: i64) -> TableView {
        self.reconcile(table, now_ms);

        let day = self.business_day(now_ms);
        let Some(slot) = self.slots.get(table) else {
            return empty_view(table);
        };
        let flags = slot.flags.clone();

        let today: Vec<&Ticket> = slot
            .tickets
            .iter()
            .filter(|t| t.business_day == day)
            .collect();
        let last = today.last().copied();

        // A session started after the last ticket hides it: the new party
        // must not see the previous party's bill
        let visible = last.filter(|t| match flags.session_start_at {
            Some(start) => t.created_at >= start,
            None => true,
        });

        let base = derive_status(visible, now_ms, &self.options.windows);
        let auto_cleared =
            visible.map(|t| t.paid_at.is_some()).unwrap_or(false) && base == TableStatus::Empty;
        let cleared = flags.closed_manually || auto_cleared;

        let mut status = if flags.closed_manually {
            TableStatus::Empty
        } else if visible.is_none() && flags.session_start_at.is_some() {
            // Guests are seated but have not ordered yet
            TableStatus::InProgress
        } else {
            base
        };

        // NewOrder overlay: a repeat order just landed on a table whose
        // previous ticket is still in flight - a transient kitchen signal
        // that leaves the underlying timers untouched
        if !flags.closed_manually
            && !matches!(status, TableStatus::Empty | TableStatus::Paid)
            && today.len() >= 2
            && let Some(last) = last
            && now_ms - last.created_at <= self.options.new_order_window_ms
        {
            let previous = today[today.len() - 2];
            if matches!(
                derive_status(Some(previous), now_ms, &self.options.windows),
                TableStatus::InPreparation | TableStatus::PaymentDue
            ) {
                status = TableStatus::NewOrder;
            }
        }

        let (last_ticket_at, last_ticket) = match visible {
            Some(t) if !cleared => (
                Some(t.created_at),
                Some(LastTicket {
                    total: t.total,
                    at: t.created_at,
                }),
            ),
            _ => (None, None),
        };

        TableView {
            id: table.to_string(),
            status,
            last_ticket_at,
            last_ticket,
            cleared,
            closed_manually: flags.closed_manually,
            session_start_at: flags.session_start_at,
        }
    }

    /// Project and order the full table list.
    ///
    /// Tables with a visible last ticket come first, most recent first;
    /// ticket-less tables follow in natural numeric order.
    pub fn list_tables(&self, now_ms: i64) -> Vec<TableView> {
        let mut views: Vec<TableView> = self
            .options
            .table_ids
            .iter()
            .map(|id| self.project_table(id, now_ms))
            .collect();

        views.sort_by(|a, b| match (a.last_ticket_at, b.last_ticket_at) {
            (Some(x), Some(y)) => y.cmp(&x),
            (Some(_), None) => std::cmp::Ordering::Less,
            (None, Some(_)) => std::cmp::Ordering::Greater,
            (None, None) => match (table_index(&a.id), table_index(&b.id)) {
                (Some(x), Some(y)) => x.cmp(&y),
                _ => a.id.cmp(&b.id),
            },
        });
        views
    }

    /// All tickets of the current business day, in creation order
    pub fn day_summary(&self, now_ms: i64) -> Vec<TicketSummary> {
        let day = self.business_day(now_ms);
        let mut tickets: Vec<Ticket> = self
            .slots
            .iter()
            .flat_map(|slot| {
                slot.tickets
                    .iter()
                    .filter(|t| t.business_day == day)
                    .cloned()
                    .collect::<Vec<_>>()
            })
            .collect();
        tickets.sort_by(|a, b| a.created_at.cmp(&b.created_at).then(a.id.cmp(&b.id)));

        tickets
            .into_iter()
            .map(|t| TicketSummary {
                time: format_time_hm(t.created_at, self.options.tz),
                id: t.id,
                table: t.table,
                total: t.total,
                items: t.items,
                owner_name: t.owner_name,
                created_at: t.created_at,
            })
            .collect()
    }

    /// Current flags for a table (test hook and diagnostics)
    pub fn table_flags(&self, table: &str) -> TableFlags {
        self.slots
            .get(table)
            .map(|s| s.flags.clone())
            .unwrap_or_default()
    }
}

/// Index of the day's last ticket (tickets are stored in creation order)
fn last_ticket_index(tickets: &[Ticket], day: &str) -> Option<usize> {
    tickets.iter().rposition(|t| t.business_day == day)
}

/// Numeric part of a table id ("T3" → 3)
fn table_index(id: &str) -> Option<u32> {
    let digits: String = id.chars().filter(|c| c.is_ascii_digit()).collect();
    digits.parse().ok()
}

fn empty_view(table: &str) -> TableView {
    TableView {
        id: table.to_string(),
        status: TableStatus::Empty,
        last_ticket_at: None,
        last_ticket: None,
        cleared: false,
        closed_manually: false,
        session_start_at: None,
    }
}
