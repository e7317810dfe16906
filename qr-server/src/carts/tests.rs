use super::*;
use shared::models::CartItemInput;

fn registry() -> CartRegistry {
    CartRegistry::new(Arc::new(MenuCatalog::default_menu()))
}

fn input(guest: &str, id: &str, quantity: i32, modifiers: &[&str]) -> CartItemInput {
    CartItemInput {
        guest: guest.to_string(),
        guest_name: Some(format!("Guest {guest}")),
        id: id.to_string(),
        name: None,
        quantity,
        price: None,
        modifiers: modifiers.iter().map(|m| m.to_string()).collect(),
    }
}

#[test]
fn test_identity_is_modifier_order_independent() {
    assert_eq!(
        item_identity("m1", &["a".to_string(), "b".to_string()]),
        item_identity("m1", &["b".to_string(), "a".to_string()])
    );
    assert_ne!(
        item_identity("m1", &["a".to_string()]),
        item_identity("m2", &["a".to_string()])
    );
}

#[test]
fn test_add_merges_same_identity() {
    let carts = registry();
    carts.add_item("T1", &input("g1", "m1", 1, &["a", "b"])).unwrap();
    carts.add_item("T1", &input("g1", "m1", 2, &["b", "a"])).unwrap();

    let snap = carts.snapshot("T1", None);
    assert_eq!(snap.items.len(), 1);
    assert_eq!(snap.items[0].quantity, 3);
    assert_eq!(snap.items[0].modifiers, vec!["a", "b"]);
}

#[test]
fn test_different_guests_do_not_merge() {
    let carts = registry();
    carts.add_item("T1", &input("g1", "m1", 1, &[])).unwrap();
    carts.add_item("T1", &input("g2", "m1", 1, &[])).unwrap();

    let snap = carts.snapshot("T1", None);
    assert_eq!(snap.items.len(), 2);
}

#[test]
fn test_catalog_price_wins_over_caller_price() {
    let carts = registry();
    let mut item = input("g1", "m1", 1, &[]);
    item.price = Some(99.0);
    carts.add_item("T1", &item).unwrap();

    let snap = carts.snapshot("T1", None);
    // Margherita is 8.50 in the catalog
    assert_eq!(snap.items[0].unit_price, 8.5);
    assert_eq!(snap.items[0].name, "Margherita");
}

#[test]
fn test_off_menu_item_uses_caller_name_and_price() {
    let carts = registry();
    let mut item = input("g1", "special", 2, &[]);
    item.name = Some("Plat du jour".to_string());
    item.price = Some(14.0);
    carts.add_item("T1", &item).unwrap();

    let snap = carts.snapshot("T1", None);
    assert_eq!(snap.items[0].name, "Plat du jour");
    assert_eq!(snap.items[0].unit_price, 14.0);
}

#[test]
fn test_add_rejects_invalid_input() {
    let carts = registry();
    assert!(carts.add_item("T1", &input("g1", "m1", 0, &[])).is_err());
    assert!(carts.add_item("T1", &input("g1", "m1", -1, &[])).is_err());
    assert!(carts.add_item("T1", &input("g1", "", 1, &[])).is_err());
    assert!(carts.add_item("", &input("g1", "m1", 1, &[])).is_err());
    // Nothing was stored
    assert!(carts.snapshot("T1", None).items.is_empty());
}

#[test]
fn test_adjust_to_zero_removes_line() {
    let carts = registry();
    let identity = carts.add_item("T1", &input("g1", "m1", 2, &[])).unwrap();

    carts.adjust_quantity("T1", "g1", &identity, -2);
    assert!(carts.snapshot("T1", None).items.is_empty());
}

#[test]
fn test_adjust_below_zero_removes_line() {
    let carts = registry();
    let identity = carts.add_item("T1", &input("g1", "m1", 1, &[])).unwrap();

    carts.adjust_quantity("T1", "g1", &identity, -5);
    assert!(carts.snapshot("T1", None).items.is_empty());
}

#[test]
fn test_adjust_missing_line_is_noop() {
    let carts = registry();
    carts.adjust_quantity("T1", "g1", "m1::", -1);
    carts.add_item("T1", &input("g1", "m1", 1, &[])).unwrap();
    carts.adjust_quantity("T1", "ghost", "m1::", -1);
    assert_eq!(carts.snapshot("T1", None).items[0].quantity, 1);
}

#[test]
fn test_snapshot_tags_owner_lines() {
    let carts = registry();
    carts.add_item("T1", &input("g1", "m1", 1, &[])).unwrap();
    carts.add_item("T1", &input("g2", "m4", 1, &[])).unwrap();

    let snap = carts.snapshot("T1", Some("g1"));
    let mine: Vec<_> = snap.items.iter().filter(|l| l.is_owner).collect();
    let theirs: Vec<_> = snap.items.iter().filter(|l| !l.is_owner).collect();
    assert_eq!(mine.len(), 1);
    assert_eq!(mine[0].item_id, "m1");
    assert_eq!(theirs.len(), 1);
    assert_eq!(theirs[0].guest_name, "Guest g2");
}

#[test]
fn test_snapshot_totals_use_ticket_rounding() {
    let carts = registry();
    // 2 × 10.00 (Regina) = 20.00, +10% = 22.00
    carts.add_item("T1", &input("g1", "m2", 2, &[])).unwrap();

    let snap = carts.snapshot("T1", None);
    assert_eq!(snap.totals.subtotal, 20.0);
    assert_eq!(snap.totals.tax, 2.0);
    assert_eq!(snap.totals.total, 22.0);
}

#[test]
fn test_clear_table_drops_all_guests() {
    let carts = registry();
    carts.add_item("T1", &input("g1", "m1", 1, &[])).unwrap();
    carts.add_item("T1", &input("g2", "m2", 1, &[])).unwrap();

    carts.clear_table("T1");
    assert!(carts.snapshot("T1", None).items.is_empty());
}

#[test]
fn test_adjust_with_extreme_deltas_saturates() {
    let carts = registry();
    carts.add_item("T1", &input("g1", "m1", 2, &[])).unwrap();
    let identity = item_identity("m1", &[]);

    // A hostile wire delta must not panic; the line caps at the limit
    carts.adjust_quantity("T1", "g1", &identity, i32::MAX);
    assert_eq!(carts.snapshot("T1", None).items[0].quantity, MAX_QUANTITY);

    // And the mirror image removes the line instead of wrapping around
    carts.adjust_quantity("T1", "g1", &identity, i32::MIN);
    assert!(carts.snapshot("T1", None).items.is_empty());
}

#[test]
fn test_merged_line_caps_at_quantity_limit() {
    let carts = registry();
    carts.add_item("T1", &input("g1", "m1", 9_000, &[])).unwrap();
    carts.add_item("T1", &input("g1", "m1", 9_000, &[])).unwrap();

    // The merged line stays checkout-valid
    assert_eq!(carts.snapshot("T1", None).items[0].quantity, MAX_QUANTITY);
}
