use super::{Difficulty, Recipe};

fn names(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| (*s).to_string()).collect()
}

#[allow(clippy::too_many_arguments)]
fn recipe(
    id: u32,
    name: &str,
    time: &str,
    difficulty: Difficulty,
    ingredients: &[&str],
    missing: &[&str],
    category: &str,
    servings: u32,
    calories: u32,
) -> Recipe {
    Recipe {
        id,
        name: name.into(),
        time: time.into(),
        difficulty,
        ingredients: names(ingredients),
        missing: names(missing),
        category: category.into(),
        servings,
        calories,
    }
}

pub(super) fn recipes() -> Vec<Recipe> {
    vec![
        recipe(
            1,
            "Omelete Caprese",
            "15 min",
            Difficulty::Easy,
            &["Ovos", "Tomate", "Queijo Mussarela"],
            &[],
            "Café da Manhã",
            2,
            280,
        ),
        recipe(
            2,
            "Frango Grelhado com Legumes",
            "30 min",
            Difficulty::Easy,
            &["Frango", "Tomate", "Cebola", "Alho"],
            &["Pimentão"],
            "Almoço",
            4,
            350,
        ),
        recipe(
            3,
            "Arroz com Feijão Tropeiro",
            "45 min",
            Difficulty::Medium,
            &["Arroz", "Feijão", "Ovos", "Cebola", "Alho"],
            &["Bacon", "Farinha de Mandioca"],
            "Almoço",
            6,
            420,
        ),
        recipe(
            4,
            "Batata Gratinada",
            "50 min",
            Difficulty::Medium,
            &["Batata", "Leite", "Queijo Mussarela"],
            &["Creme de Leite"],
            "Jantar",
            4,
            380,
        ),
        recipe(
            5,
            "Sopa de Frango",
            "40 min",
            Difficulty::Easy,
            &["Frango", "Batata", "Cebola", "Alho"],
            &["Cenoura"],
            "Jantar",
            6,
            220,
        ),
        recipe(
            6,
            "Quiche de Legumes",
            "60 min",
            Difficulty::Hard,
            &["Ovos", "Leite", "Queijo Mussarela", "Tomate", "Cebola"],
            &["Massa Pronta"],
            "Almoço",
            8,
            310,
        ),
    ]
}
