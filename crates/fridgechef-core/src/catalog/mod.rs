//! Static recipe catalog.
//!
//! The catalog is built once and never mutated. Every derived view
//! (filtering, partitions, shopping list) is computed over it on demand.

mod builtin;
mod recipe;

pub use recipe::{Difficulty, Recipe};

use std::collections::HashSet;

use serde::Serialize;

use crate::error::ValidationError;

/// Ordered, read-only list of recipes.
#[derive(Debug, Clone, Serialize)]
#[serde(transparent)]
pub struct Catalog {
    recipes: Vec<Recipe>,
}

impl Catalog {
    /// Build a catalog, rejecting duplicate ids and overlapping lists.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] for the first recipe that breaks an
    /// invariant.
    pub fn new(recipes: Vec<Recipe>) -> Result<Self, ValidationError> {
        let mut ids = HashSet::new();
        for recipe in &recipes {
            if !ids.insert(recipe.id) {
                return Err(ValidationError::DuplicateRecipeId(recipe.id));
            }
            validate_lists(recipe)?;
        }
        Ok(Self { recipes })
    }

    /// The six recipes bundled with the app.
    pub fn builtin() -> Self {
        Self {
            recipes: builtin::recipes(),
        }
    }

    pub fn get(&self, id: u32) -> Option<&Recipe> {
        self.recipes.iter().find(|r| r.id == id)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Recipe> {
        self.recipes.iter()
    }

    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a Recipe;
    type IntoIter = std::slice::Iter<'a, Recipe>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

fn validate_lists(recipe: &Recipe) -> Result<(), ValidationError> {
    let mut owned = HashSet::new();
    for name in &recipe.ingredients {
        if !owned.insert(name.as_str()) {
            return Err(ValidationError::DuplicateIngredient {
                recipe_id: recipe.id,
                name: name.clone(),
            });
        }
    }
    let mut missing = HashSet::new();
    for name in &recipe.missing {
        if owned.contains(name.as_str()) {
            return Err(ValidationError::OverlappingIngredients {
                recipe_id: recipe.id,
                name: name.clone(),
            });
        }
        if !missing.insert(name.as_str()) {
            return Err(ValidationError::DuplicateIngredient {
                recipe_id: recipe.id,
                name: name.clone(),
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn recipe(id: u32, ingredients: &[&str], missing: &[&str]) -> Recipe {
        Recipe {
            id,
            name: format!("Receita {id}"),
            time: "20 min".into(),
            difficulty: Difficulty::Easy,
            ingredients: ingredients.iter().map(|s| s.to_string()).collect(),
            missing: missing.iter().map(|s| s.to_string()).collect(),
            category: "Jantar".into(),
            servings: 2,
            calories: 200,
        }
    }

    #[test]
    fn builtin_catalog_passes_validation() {
        let builtin = Catalog::builtin();
        let rebuilt = Catalog::new(builtin.iter().cloned().collect()).unwrap();
        assert_eq!(rebuilt.len(), 6);
    }

    #[test]
    fn builtin_catalog_keeps_authoring_order() {
        let ids: Vec<u32> = Catalog::builtin().iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn rejects_duplicate_ids() {
        let err = Catalog::new(vec![recipe(1, &["Ovos"], &[]), recipe(1, &["Leite"], &[])])
            .unwrap_err();
        assert_eq!(err, ValidationError::DuplicateRecipeId(1));
    }

    #[test]
    fn rejects_name_in_both_lists() {
        let err = Catalog::new(vec![recipe(7, &["Ovos", "Leite"], &["Leite"])]).unwrap_err();
        assert!(matches!(
            err,
            ValidationError::OverlappingIngredients { recipe_id: 7, .. }
        ));
    }

    #[test]
    fn rejects_repeated_missing_item() {
        let err = Catalog::new(vec![recipe(2, &["Ovos"], &["Bacon", "Bacon"])]).unwrap_err();
        assert!(matches!(err, ValidationError::DuplicateIngredient { .. }));
    }

    #[test]
    fn get_finds_by_id() {
        let catalog = Catalog::builtin();
        assert_eq!(catalog.get(6).map(|r| r.name.as_str()), Some("Quiche de Legumes"));
        assert!(catalog.get(99).is_none());
    }
}
