use vasari::SelectionStore;
use vasari::session::item_key;

fn generated(items: &[&str]) -> Vec<String> {
    items.iter().map(|i| i.to_string()).collect()
}

#[test]
fn test_keys_are_stable_across_calls() {
    assert_eq!(item_key("Admin"), item_key("Admin"));
    assert_ne!(item_key("Admin"), item_key("Customer"));
}

#[test]
fn test_select_and_deselect() {
    let mut store = SelectionStore::new();
    assert!(!store.is_selected("Admin"));

    store.select("Admin");
    assert!(store.is_selected("Admin"));
    assert_eq!(store.len(), 1);

    store.deselect("Admin");
    assert!(!store.is_selected("Admin"));
    assert!(store.is_empty());
}

#[test]
fn test_toggle_flips_selection() {
    let mut store = SelectionStore::new();
    assert!(store.toggle("Baker"));
    assert!(store.is_selected("Baker"));
    assert!(!store.toggle("Baker"));
    assert!(!store.is_selected("Baker"));
}

#[test]
fn test_selection_survives_regeneration() {
    let mut store = SelectionStore::new();
    let first_round = generated(&["Admin", "Baker", "Customer"]);
    store.select(&first_round[1]);

    // A later round lists the same item at a different position.
    let second_round = generated(&["Customer", "Manager", "Baker"]);
    assert_eq!(store.selected_from(&second_round), ["Baker"]);
}

#[test]
fn test_selected_from_preserves_list_order() {
    let mut store = SelectionStore::new();
    store.select("Customer");
    store.select("Admin");

    let items = generated(&["Admin", "Baker", "Customer"]);
    assert_eq!(store.selected_from(&items), ["Admin", "Customer"]);
}

#[test]
fn test_duplicate_texts_share_a_key() {
    let mut store = SelectionStore::new();
    store.select("Sign in");
    store.select("Sign in");
    assert_eq!(store.len(), 1);

    let items = generated(&["Sign in", "Sign in"]);
    assert_eq!(store.selected_from(&items), ["Sign in", "Sign in"]);
}

#[test]
fn test_clear_drops_everything() {
    let mut store = SelectionStore::new();
    store.select("Admin");
    store.select("Customer");
    assert_eq!(store.len(), 2);

    store.clear();
    assert!(store.is_empty());
    assert!(!store.is_selected("Admin"));
}
