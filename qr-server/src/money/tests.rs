use super::*;

fn item(qty: i32, price: f64) -> TicketItem {
    TicketItem {
        id: "m1".to_string(),
        name: "Margherita".to_string(),
        quantity: qty,
        unit_price: price,
        owner_name: None,
        modifiers: vec![],
    }
}

fn line(qty: i32, price: f64) -> CartLine {
    CartLine {
        identity: "m1::".to_string(),
        item_id: "m1".to_string(),
        name: "Margherita".to_string(),
        quantity: qty,
        unit_price: price,
        modifiers: vec![],
        guest_name: "Alice".to_string(),
        is_owner: false,
    }
}

#[test]
fn test_to_decimal_precision() {
    // Classic floating point problem: 0.1 + 0.2 != 0.3
    let sum_f64 = 0.1_f64 + 0.2_f64;
    assert_ne!(sum_f64, 0.3);

    let sum_dec = to_decimal(0.1) + to_decimal(0.2);
    assert_eq!(to_f64(sum_dec), 0.3);
}

#[test]
fn test_round2_half_up() {
    assert_eq!(round2(2.005), 2.01);
    assert_eq!(round2(2.004), 2.0);
    assert_eq!(round2(22.0), 22.0);
}

#[test]
fn test_ticket_total_ten_percent_surtax() {
    // 2 × 10.00 = 20.00, +10% = 22.00
    assert_eq!(ticket_total(&[item(2, 10.0)]), 22.0);
}

#[test]
fn test_ticket_total_rounds_once_on_grand_total() {
    // 3 × 3.33 = 9.99, ×1.10 = 10.989 → 10.99
    assert_eq!(ticket_total(&[item(3, 3.33)]), 10.99);
}

#[test]
fn test_ticket_total_multiple_lines() {
    // 8.50 + 2 × 3.50 = 15.50, ×1.10 = 17.05
    assert_eq!(ticket_total(&[item(1, 8.5), item(2, 3.5)]), 17.05);
}

#[test]
fn test_cart_totals_match_ticket_formula() {
    let lines = [line(2, 10.0)];
    let totals = cart_totals(&lines);
    assert_eq!(totals.subtotal, 20.0);
    assert_eq!(totals.tax, 2.0);
    assert_eq!(totals.total, 22.0);
    assert_eq!(totals.total, ticket_total(&[item(2, 10.0)]));
}

#[test]
fn test_non_finite_price_defaults_to_zero() {
    assert_eq!(to_decimal(f64::NAN), Decimal::ZERO);
}
