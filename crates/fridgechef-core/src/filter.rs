//! Recipe filtering by prep-time bucket and difficulty.
//!
//! Everything here is a pure function of the catalog and the filter state.
//! Views are rebuilt on every call; the catalog never changes at runtime so
//! there is nothing to invalidate.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::catalog::{Catalog, Difficulty, Recipe};
use crate::error::ValidationError;

/// Prep-time bucket.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeFilter {
    #[default]
    All,
    /// Up to 30 minutes.
    Quick,
    /// 31 to 45 minutes.
    Medium,
    /// Over 45 minutes.
    Long,
}

impl TimeFilter {
    pub const ALL: [TimeFilter; 4] = [
        TimeFilter::All,
        TimeFilter::Quick,
        TimeFilter::Medium,
        TimeFilter::Long,
    ];

    /// Recipes whose time has no leading number only match `All`.
    pub fn matches(self, recipe: &Recipe) -> bool {
        match (self, recipe.minutes()) {
            (TimeFilter::All, _) => true,
            (_, None) => false,
            (TimeFilter::Quick, Some(minutes)) => minutes <= 30,
            (TimeFilter::Medium, Some(minutes)) => minutes > 30 && minutes <= 45,
            (TimeFilter::Long, Some(minutes)) => minutes > 45,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            TimeFilter::All => "Todos",
            TimeFilter::Quick => "Rápido (≤30min)",
            TimeFilter::Medium => "Médio (30-45min)",
            TimeFilter::Long => "Longo (>45min)",
        }
    }
}

impl fmt::Display for TimeFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let key = match self {
            TimeFilter::All => "all",
            TimeFilter::Quick => "quick",
            TimeFilter::Medium => "medium",
            TimeFilter::Long => "long",
        };
        f.write_str(key)
    }
}

impl FromStr for TimeFilter {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "all" | "todos" => Ok(TimeFilter::All),
            "quick" | "rápido" | "rapido" => Ok(TimeFilter::Quick),
            "medium" | "médio" | "medio" => Ok(TimeFilter::Medium),
            "long" | "longo" => Ok(TimeFilter::Long),
            other => Err(ValidationError::InvalidValue {
                field: "time".into(),
                message: format!("unknown time filter '{other}'"),
            }),
        }
    }
}

/// Difficulty selector: everything, or one exact level.
///
/// Serialized as a single string (`"all"`, `"easy"`, ...) so it reads
/// naturally in config files and JSON output.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum DifficultyFilter {
    #[default]
    All,
    Only(Difficulty),
}

impl DifficultyFilter {
    pub fn matches(self, recipe: &Recipe) -> bool {
        match self {
            DifficultyFilter::All => true,
            DifficultyFilter::Only(level) => recipe.difficulty == level,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            DifficultyFilter::All => "Todas",
            DifficultyFilter::Only(level) => level.label(),
        }
    }
}

impl fmt::Display for DifficultyFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DifficultyFilter::All => f.write_str("all"),
            DifficultyFilter::Only(Difficulty::Easy) => f.write_str("easy"),
            DifficultyFilter::Only(Difficulty::Medium) => f.write_str("medium"),
            DifficultyFilter::Only(Difficulty::Hard) => f.write_str("hard"),
        }
    }
}

impl FromStr for DifficultyFilter {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "all" | "todas" => Ok(DifficultyFilter::All),
            other => other.parse().map(DifficultyFilter::Only),
        }
    }
}

impl Serialize for DifficultyFilter {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for DifficultyFilter {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

impl From<Difficulty> for DifficultyFilter {
    fn from(level: Difficulty) -> Self {
        DifficultyFilter::Only(level)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterState {
    #[serde(default)]
    pub time: TimeFilter,
    #[serde(default)]
    pub difficulty: DifficultyFilter,
}

impl FilterState {
    pub fn new(time: TimeFilter, difficulty: DifficultyFilter) -> Self {
        Self { time, difficulty }
    }

    pub fn matches(&self, recipe: &Recipe) -> bool {
        self.time.matches(recipe) && self.difficulty.matches(recipe)
    }
}

/// At most one expanded recipe card.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SelectionState {
    selected: Option<u32>,
}

impl SelectionState {
    pub fn selected(&self) -> Option<u32> {
        self.selected
    }

    /// Select `id`, or clear the selection if `id` is already selected.
    pub fn toggle(&mut self, id: u32) -> Option<u32> {
        self.selected = if self.selected == Some(id) {
            None
        } else {
            Some(id)
        };
        self.selected
    }

    pub fn clear(&mut self) {
        self.selected = None;
    }
}

/// Recipes passing `filters`, in catalog order.
pub fn filter_recipes<'a>(catalog: &'a Catalog, filters: &FilterState) -> Vec<&'a Recipe> {
    catalog.iter().filter(|r| filters.matches(r)).collect()
}

/// The three recipe tabs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecipeTab {
    #[default]
    All,
    Complete,
    Missing,
}

impl FromStr for RecipeTab {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "all" => Ok(RecipeTab::All),
            "complete" => Ok(RecipeTab::Complete),
            "missing" | "incomplete" => Ok(RecipeTab::Missing),
            other => Err(ValidationError::InvalidValue {
                field: "tab".into(),
                message: format!("unknown tab '{other}'"),
            }),
        }
    }
}

/// Filtered recipes split by whether anything is missing.
///
/// `complete` and `incomplete` partition `all` and keep its order.
#[derive(Debug, Clone, Serialize)]
pub struct RecipeView<'a> {
    pub all: Vec<&'a Recipe>,
    pub complete: Vec<&'a Recipe>,
    pub incomplete: Vec<&'a Recipe>,
}

impl<'a> RecipeView<'a> {
    pub fn build(catalog: &'a Catalog, filters: &FilterState) -> Self {
        let all = filter_recipes(catalog, filters);
        let (complete, incomplete): (Vec<&Recipe>, Vec<&Recipe>) =
            all.iter().copied().partition(|r| r.is_complete());
        Self {
            all,
            complete,
            incomplete,
        }
    }

    pub fn tab(&self, tab: RecipeTab) -> &[&'a Recipe] {
        match tab {
            RecipeTab::All => &self.all,
            RecipeTab::Complete => &self.complete,
            RecipeTab::Missing => &self.incomplete,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.all.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn names<'a>(recipes: &[&'a Recipe]) -> Vec<&'a str> {
        recipes.iter().map(|r| r.name.as_str()).collect()
    }

    #[test]
    fn quick_keeps_thirty_minutes_and_under() {
        let catalog = Catalog::builtin();
        let filters = FilterState::new(TimeFilter::Quick, DifficultyFilter::All);
        assert_eq!(
            names(&filter_recipes(&catalog, &filters)),
            ["Omelete Caprese", "Frango Grelhado com Legumes"]
        );
    }

    #[test]
    fn medium_bucket_is_exclusive_at_thirty() {
        let catalog = Catalog::builtin();
        let filters = FilterState::new(TimeFilter::Medium, DifficultyFilter::All);
        assert_eq!(
            names(&filter_recipes(&catalog, &filters)),
            ["Arroz com Feijão Tropeiro", "Sopa de Frango"]
        );
    }

    #[test]
    fn long_bucket_is_over_forty_five() {
        let catalog = Catalog::builtin();
        let filters = FilterState::new(TimeFilter::Long, DifficultyFilter::All);
        assert_eq!(
            names(&filter_recipes(&catalog, &filters)),
            ["Batata Gratinada", "Quiche de Legumes"]
        );
    }

    #[test]
    fn hard_yields_only_the_quiche() {
        let catalog = Catalog::builtin();
        let filters = FilterState::new(TimeFilter::All, Difficulty::Hard.into());
        assert_eq!(names(&filter_recipes(&catalog, &filters)), ["Quiche de Legumes"]);
    }

    #[test]
    fn both_predicates_must_hold() {
        let catalog = Catalog::builtin();
        let filters = FilterState::new(TimeFilter::Medium, Difficulty::Easy.into());
        assert_eq!(names(&filter_recipes(&catalog, &filters)), ["Sopa de Frango"]);
    }

    #[test]
    fn malformed_time_only_matches_all() {
        let mut recipe = Catalog::builtin().get(1).cloned().unwrap();
        recipe.time = "rapidinho".into();
        assert!(TimeFilter::All.matches(&recipe));
        for bucket in [TimeFilter::Quick, TimeFilter::Medium, TimeFilter::Long] {
            assert!(!bucket.matches(&recipe), "{bucket} should not match");
        }
    }

    #[test]
    fn overlong_time_lands_in_long() {
        let mut recipe = Catalog::builtin().get(1).cloned().unwrap();
        recipe.time = "5000000000 min".into();
        assert!(TimeFilter::Long.matches(&recipe));
        assert!(!TimeFilter::Quick.matches(&recipe));
        assert!(!TimeFilter::Medium.matches(&recipe));
    }

    #[test]
    fn unfiltered_view_splits_complete_from_incomplete() {
        let catalog = Catalog::builtin();
        let view = RecipeView::build(&catalog, &FilterState::default());
        assert_eq!(view.all.len(), 6);
        assert_eq!(names(&view.complete), ["Omelete Caprese"]);
        assert_eq!(view.incomplete.len(), 5);
        assert_eq!(view.tab(RecipeTab::Missing).len(), 5);
    }

    #[test]
    fn toggle_selects_then_clears() {
        let mut selection = SelectionState::default();
        assert_eq!(selection.toggle(3), Some(3));
        assert_eq!(selection.toggle(4), Some(4));
        assert_eq!(selection.toggle(4), None);
        assert_eq!(selection.selected(), None);
    }

    #[test]
    fn filters_parse_cli_and_label_forms() {
        assert_eq!("quick".parse::<TimeFilter>().unwrap(), TimeFilter::Quick);
        assert_eq!("Longo".parse::<TimeFilter>().unwrap(), TimeFilter::Long);
        assert_eq!("all".parse::<DifficultyFilter>().unwrap(), DifficultyFilter::All);
        assert_eq!(
            "Difícil".parse::<DifficultyFilter>().unwrap(),
            DifficultyFilter::Only(Difficulty::Hard)
        );
        assert!("sometimes".parse::<TimeFilter>().is_err());
    }

    #[test]
    fn difficulty_filter_serializes_as_plain_string() {
        let json = serde_json::to_string(&DifficultyFilter::Only(Difficulty::Medium)).unwrap();
        assert_eq!(json, "\"medium\"");
        let parsed: DifficultyFilter = serde_json::from_str("\"all\"").unwrap();
        assert_eq!(parsed, DifficultyFilter::All);
    }

    fn any_filters() -> impl Strategy<Value = FilterState> {
        let time = prop::sample::select(TimeFilter::ALL.to_vec());
        let difficulty = prop::sample::select(vec![
            DifficultyFilter::All,
            DifficultyFilter::Only(Difficulty::Easy),
            DifficultyFilter::Only(Difficulty::Medium),
            DifficultyFilter::Only(Difficulty::Hard),
        ]);
        (time, difficulty).prop_map(|(time, difficulty)| FilterState { time, difficulty })
    }

    proptest! {
        #[test]
        fn partitions_cover_filtered_set_without_overlap(filters in any_filters()) {
            let catalog = Catalog::builtin();
            let view = RecipeView::build(&catalog, &filters);
            prop_assert_eq!(view.complete.len() + view.incomplete.len(), view.all.len());
            for recipe in &view.all {
                let in_complete = view.complete.iter().any(|r| r.id == recipe.id);
                let in_incomplete = view.incomplete.iter().any(|r| r.id == recipe.id);
                prop_assert!(in_complete ^ in_incomplete);
            }
            for recipe in view.complete.iter().chain(view.incomplete.iter()) {
                prop_assert!(filters.matches(recipe));
            }
        }
    }
}
