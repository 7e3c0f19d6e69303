//! Wishlist Reducer

use crate::actions::{Action, BootstrapAction, WishlistAction};
use crate::domain_models::WishlistItem;
use crate::state::WishlistState;

pub fn reduce(mut state: WishlistState, action: &Action) -> WishlistState {
    match action {
        Action::Bootstrap(BootstrapAction::Hydrated(persisted)) => {
            state.items = Vec::new();
            for item in &persisted.wishlist {
                state = add(state, item);
            }
        }
        Action::Wishlist(WishlistAction::Add(item)) => state = add(state, item),
        Action::Wishlist(WishlistAction::Remove(product_id)) => {
            state.items.retain(|item| item.product_id() != product_id);
        }
        Action::Wishlist(WishlistAction::Toggle(item)) => {
            if state.contains(item.product_id()) {
                state.items.retain(|existing| existing.product_id() != item.product_id());
            } else {
                state = add(state, item);
            }
        }
        Action::Wishlist(WishlistAction::Clear) => state.items.clear(),
        _ => {}
    }
    state
}

fn add(mut state: WishlistState, item: &WishlistItem) -> WishlistState {
    if !state.contains(item.product_id()) {
        state.items.push(item.clone());
    }
    state
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain_models::{Product, ProductId};
    use chrono::{TimeZone, Utc};
    use pretty_assertions::assert_eq;
    use rust_decimal::Decimal;

    fn liked(id: &str, minute: u32) -> WishlistItem {
        WishlistItem::new(
            Product::new(id, id, Decimal::from(25)),
            Utc.with_ymd_and_hms(2024, 5, 1, 12, minute, 0).unwrap(),
        )
    }

    fn ids(state: &WishlistState) -> Vec<&str> {
        state.items.iter().map(|item| item.product_id().as_str()).collect()
    }

    #[test]
    fn test_add_existing_keeps_original_timestamp() {
        let state = reduce(
            WishlistState::default(),
            &Action::Wishlist(WishlistAction::Add(liked("w1", 0))),
        );
        let state = reduce(state, &Action::Wishlist(WishlistAction::Add(liked("w1", 30))));

        assert_eq!(state.count(), 1);
        assert_eq!(state.items[0].added_at, liked("w1", 0).added_at);
    }

    #[test]
    fn test_toggle_twice_restores_membership() {
        let start = reduce(
            WishlistState::default(),
            &Action::Wishlist(WishlistAction::Add(liked("w0", 0))),
        );

        let once = reduce(start.clone(), &Action::Wishlist(WishlistAction::Toggle(liked("w1", 1))));
        assert_eq!(ids(&once), vec!["w0", "w1"]);

        let twice = reduce(once, &Action::Wishlist(WishlistAction::Toggle(liked("w1", 2))));
        assert_eq!(twice, start);
    }

    #[test]
    fn test_toggle_on_empty_wishlist() {
        let state = reduce(
            WishlistState::default(),
            &Action::Wishlist(WishlistAction::Toggle(liked("w1", 0))),
        );
        assert_eq!(ids(&state), vec!["w1"]);

        let state = reduce(state, &Action::Wishlist(WishlistAction::Toggle(liked("w1", 1))));
        assert!(state.is_empty());
    }

    #[test]
    fn test_remove_and_clear() {
        let mut state = WishlistState::default();
        for id in ["a", "b", "c"] {
            state = reduce(state, &Action::Wishlist(WishlistAction::Add(liked(id, 0))));
        }
        state = reduce(state, &Action::Wishlist(WishlistAction::Remove(ProductId::new("b"))));
        state = reduce(state, &Action::Wishlist(WishlistAction::Remove(ProductId::new("zzz"))));
        assert_eq!(ids(&state), vec!["a", "c"]);

        state = reduce(state, &Action::Wishlist(WishlistAction::Clear));
        assert!(state.is_empty());
    }
}
