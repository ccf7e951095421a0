//! Favorites Store
//!
//! Session-lifetime favorites collection with field-level reactivity,
//! provided via context to every page.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::models::FavoriteItem;

/// Session state shared across views. Created empty at mount, discarded
/// with the session; nothing is persisted.
#[derive(Clone, Debug, Default, Store)]
pub struct FavoritesState {
    /// Insertion-ordered favorites collection.
    pub favorites: Vec<FavoriteItem>,
}

/// Type alias for the store
pub type FavoritesStore = Store<FavoritesState>;

/// Get the favorites store from context
pub fn use_favorites() -> FavoritesStore {
    expect_context::<FavoritesStore>()
}

/// Append an item to the collection. Unconditional: duplicates are allowed
/// here and only collapsed at removal time, matching the asymmetric
/// contract the rest of the app is written against.
pub fn store_add_favorite(store: &FavoritesStore, item: FavoriteItem) {
    add_favorite(&mut store.favorites().write(), item);
}

/// Drop every entry whose `name` equals `name`, byte for byte. No error
/// when nothing matches.
pub fn store_remove_favorite(store: &FavoritesStore, name: &str) {
    remove_favorite(&mut store.favorites().write(), name);
}

fn add_favorite(favorites: &mut Vec<FavoriteItem>, item: FavoriteItem) {
    favorites.push(item);
}

fn remove_favorite(favorites: &mut Vec<FavoriteItem>, name: &str) {
    favorites.retain(|fav| fav.name != name);
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Map;

    fn make_favorite(name: &str, id: &str) -> FavoriteItem {
        FavoriteItem {
            name: name.to_string(),
            id: id.to_string(),
            category: None,
            extra: Map::new(),
        }
    }

    #[test]
    fn adds_keep_insertion_order() {
        let mut favorites = Vec::new();
        for (i, name) in ["Luke Skywalker", "Leia Organa", "Han Solo"].into_iter().enumerate() {
            add_favorite(&mut favorites, make_favorite(name, &i.to_string()));
        }

        assert_eq!(favorites.len(), 3);
        assert_eq!(favorites[0].name, "Luke Skywalker");
        assert_eq!(favorites[1].name, "Leia Organa");
        assert_eq!(favorites[2].name, "Han Solo");
    }

    #[test]
    fn add_does_not_deduplicate() {
        let mut favorites = Vec::new();
        add_favorite(&mut favorites, make_favorite("R2-D2", "3"));
        add_favorite(&mut favorites, make_favorite("R2-D2", "3"));
        assert_eq!(favorites.len(), 2);
    }

    #[test]
    fn remove_drops_every_entry_with_that_name() {
        let mut favorites = Vec::new();
        add_favorite(&mut favorites, make_favorite("R2-D2", "3"));
        add_favorite(&mut favorites, make_favorite("C-3PO", "2"));
        add_favorite(&mut favorites, make_favorite("R2-D2", "3"));

        remove_favorite(&mut favorites, "R2-D2");

        assert_eq!(favorites.len(), 1);
        assert_eq!(favorites[0].name, "C-3PO");
    }

    #[test]
    fn removal_is_case_sensitive() {
        let mut favorites = Vec::new();
        add_favorite(&mut favorites, make_favorite("Leia", "5"));
        add_favorite(&mut favorites, make_favorite("leia", "5"));

        remove_favorite(&mut favorites, "Leia");
        assert_eq!(favorites.len(), 1);
        assert_eq!(favorites[0].name, "leia");

        remove_favorite(&mut favorites, "leia");
        assert!(favorites.is_empty());
    }

    #[test]
    fn removing_a_missing_name_is_a_no_op() {
        let mut favorites = vec![make_favorite("Yoda", "20")];
        remove_favorite(&mut favorites, "Chewbacca");
        assert_eq!(favorites.len(), 1);
    }
}
