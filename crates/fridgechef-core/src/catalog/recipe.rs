//! Recipe record and difficulty levels.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    /// Label shown on recipe cards.
    pub fn label(self) -> &'static str {
        match self {
            Difficulty::Easy => "Fácil",
            Difficulty::Medium => "Médio",
            Difficulty::Hard => "Difícil",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Difficulty {
    type Err = ValidationError;

    /// Accepts the English variant names and the card labels, case-insensitive.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "easy" | "fácil" | "facil" => Ok(Difficulty::Easy),
            "medium" | "médio" | "medio" => Ok(Difficulty::Medium),
            "hard" | "difícil" | "dificil" => Ok(Difficulty::Hard),
            other => Err(ValidationError::InvalidValue {
                field: "difficulty".into(),
                message: format!("unknown difficulty '{other}'"),
            }),
        }
    }
}

/// A catalog entry.
///
/// `missing` is authored alongside `ingredients`; it is never recomputed
/// against the user's pantry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recipe {
    pub id: u32,
    pub name: String,
    /// Prep time as display text, e.g. "45 min".
    pub time: String,
    pub difficulty: Difficulty,
    pub ingredients: Vec<String>,
    #[serde(default)]
    pub missing: Vec<String>,
    pub category: String,
    pub servings: u32,
    pub calories: u32,
}

impl Recipe {
    /// Leading integer of `time`, ignoring leading whitespace.
    ///
    /// Returns `None` when the text does not start with a digit, so a
    /// malformed time never lands in any time bucket.
    pub fn minutes(&self) -> Option<u32> {
        parse_leading_minutes(&self.time)
    }

    pub fn is_complete(&self) -> bool {
        self.missing.is_empty()
    }

    /// Card badge: everything on hand, or how many items are missing.
    pub fn availability_label(&self) -> String {
        if self.is_complete() {
            "Tudo disponível".to_string()
        } else {
            format!("Falta {} item(s)", self.missing.len())
        }
    }
}

/// Overlong digit runs saturate at `u32::MAX` rather than failing.
fn parse_leading_minutes(text: &str) -> Option<u32> {
    let mut digits = text
        .trim_start()
        .chars()
        .map_while(|c| c.to_digit(10))
        .peekable();
    digits.peek()?;
    Some(digits.fold(0u32, |acc, d| acc.saturating_mul(10).saturating_add(d)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn recipe_with_time(time: &str) -> Recipe {
        Recipe {
            id: 1,
            name: "Teste".into(),
            time: time.into(),
            difficulty: Difficulty::Easy,
            ingredients: vec![],
            missing: vec![],
            category: "Almoço".into(),
            servings: 1,
            calories: 100,
        }
    }

    #[test]
    fn minutes_takes_leading_number() {
        assert_eq!(recipe_with_time("45 min").minutes(), Some(45));
        assert_eq!(recipe_with_time("  15min").minutes(), Some(15));
        assert_eq!(recipe_with_time("60").minutes(), Some(60));
    }

    #[test]
    fn minutes_saturates_on_overlong_numbers() {
        assert_eq!(recipe_with_time("5000000000 min").minutes(), Some(u32::MAX));
        assert_eq!(recipe_with_time("4294967295").minutes(), Some(u32::MAX));
    }

    #[test]
    fn minutes_is_none_without_leading_digits() {
        assert_eq!(recipe_with_time("cerca de 20 min").minutes(), None);
        assert_eq!(recipe_with_time("").minutes(), None);
        assert_eq!(recipe_with_time("-5 min").minutes(), None);
    }

    #[test]
    fn difficulty_parses_both_vocabularies() {
        assert_eq!("easy".parse::<Difficulty>().unwrap(), Difficulty::Easy);
        assert_eq!("Médio".parse::<Difficulty>().unwrap(), Difficulty::Medium);
        assert_eq!("DIFÍCIL".parse::<Difficulty>().unwrap(), Difficulty::Hard);
        assert!("impossível".parse::<Difficulty>().is_err());
    }

    #[test]
    fn availability_label_counts_missing() {
        let mut recipe = recipe_with_time("10 min");
        assert_eq!(recipe.availability_label(), "Tudo disponível");
        recipe.missing = vec!["Bacon".into(), "Farinha de Mandioca".into()];
        assert_eq!(recipe.availability_label(), "Falta 2 item(s)");
    }
}
