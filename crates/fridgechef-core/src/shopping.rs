//! Shopping list derived from every recipe's missing items.
//!
//! The list always covers the whole catalog. It ignores the active filters
//! and the pantry contents.

use serde::Serialize;

use crate::catalog::Catalog;

/// Union of all `missing` lists, deduplicated, in first-seen order.
pub fn shopping_list(catalog: &Catalog) -> Vec<String> {
    shopping_items(catalog)
        .into_iter()
        .map(|item| item.name)
        .collect()
}

/// A shopping list entry with the recipes that call for it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShoppingItem {
    pub name: String,
    pub needed_by: Vec<u32>,
}

/// Same order as [`shopping_list`], annotated with recipe ids.
pub fn shopping_items(catalog: &Catalog) -> Vec<ShoppingItem> {
    let mut items: Vec<ShoppingItem> = Vec::new();
    for recipe in catalog {
        for name in &recipe.missing {
            match items.iter_mut().find(|item| &item.name == name) {
                Some(item) => item.needed_by.push(recipe.id),
                None => items.push(ShoppingItem {
                    name: name.clone(),
                    needed_by: vec![recipe.id],
                }),
            }
        }
    }
    items
}
