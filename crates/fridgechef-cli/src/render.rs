//! Plain-text rendering of each screen.

use std::fmt::Write;

use fridgechef_core::config::DisplayConfig;
use fridgechef_core::{
    Clock, FilterState, Pantry, Recipe, RecipeView, Screen, Session, ShoppingItem,
};

pub fn screen<C: Clock>(session: &Session<C>, display: &DisplayConfig) -> String {
    match session.screen() {
        Screen::Home => home(),
        Screen::Scanning => scanning(),
        Screen::Ingredients => ingredients(session.pantry()),
        Screen::Recipes => recipes(
            &session.view(),
            &session.filters(),
            session.selected_recipe().map(|r| r.id),
            display,
        ),
        Screen::Shopping => shopping(&session.shopping_items()),
    }
}

pub fn home() -> String {
    let mut out = String::new();
    out.push_str("== Meu App Geladeira ==\n");
    out.push_str("Seu assistente inteligente de cozinha. ");
    out.push_str("Fotografe sua geladeira e descubra receitas!\n\n");
    out.push_str("  scan    Fotografar Geladeira\n");
    out.push_str("  manual  Adicionar Ingredientes\n");
    out
}

pub fn scanning() -> String {
    "Analisando sua geladeira...\nNossa IA está identificando os ingredientes\n".to_string()
}

pub fn ingredients(pantry: &Pantry) -> String {
    let mut out = String::new();
    out.push_str("== Seus Ingredientes ==\n");
    let _ = writeln!(out, "Detectados ({})", pantry.len());
    if pantry.is_empty() {
        out.push_str("  Nenhum ingrediente adicionado ainda\n");
    } else {
        for (i, name) in pantry.iter().enumerate() {
            let _ = writeln!(out, "  [{}] {}", i + 1, name);
        }
    }
    out.push('\n');
    out.push_str("  add <nome>  rm <n>  search  rescan  back\n");
    if pantry.is_empty() {
        out.push_str("  (search fica disponível após adicionar um ingrediente)\n");
    }
    out
}

pub fn recipes(
    view: &RecipeView<'_>,
    filters: &FilterState,
    selected: Option<u32>,
    display: &DisplayConfig,
) -> String {
    let mut out = String::new();
    out.push_str("== Receitas Disponíveis ==\n");
    let _ = writeln!(out, "Encontramos {} receitas para você", view.all.len());
    let _ = writeln!(
        out,
        "Tempo: {}  |  Dificuldade: {}",
        filters.time.label(),
        filters.difficulty.label()
    );
    let _ = writeln!(
        out,
        "Todas ({})  Completas ({})  Faltam Itens ({})\n",
        view.all.len(),
        view.complete.len(),
        view.incomplete.len()
    );
    if view.is_empty() {
        out.push_str("  Nenhuma receita com esses filtros\n");
    }
    for recipe in &view.all {
        out.push_str(&card(recipe, display, selected == Some(recipe.id)));
    }
    out.push('\n');
    out.push_str("  time <all|quick|medium|long>  difficulty <all|easy|medium|hard>");
    out.push_str("  select <id>  shop  back\n");
    out
}

/// One recipe line, plus ingredient detail when `expanded`.
pub fn card(recipe: &Recipe, display: &DisplayConfig, expanded: bool) -> String {
    let mut out = String::new();
    let _ = write!(
        out,
        "  #{} {} ({}) - {} - {}",
        recipe.id, recipe.name, recipe.category, recipe.time, recipe.difficulty
    );
    if display.show_servings {
        let _ = write!(out, " - {} porções", recipe.servings);
    }
    if display.show_calories {
        let _ = write!(out, " - {} kcal", recipe.calories);
    }
    let _ = writeln!(out, " [{}]", recipe.availability_label());

    if expanded {
        let _ = writeln!(
            out,
            "      Ingredientes que você tem: {}",
            recipe.ingredients.join(", ")
        );
        if !recipe.missing.is_empty() {
            let _ = writeln!(out, "      Faltam comprar: {}", recipe.missing.join(", "));
        }
    }
    out
}

pub fn shopping(items: &[ShoppingItem]) -> String {
    let mut out = String::new();
    out.push_str("== Lista de Compras ==\n");
    out.push_str("Itens que faltam para completar suas receitas\n\n");
    if items.is_empty() {
        out.push_str("  Você tem todos os ingredientes!\n");
    } else {
        for item in items {
            let _ = writeln!(out, "  - {}  [Comprar Online]", item.name);
        }
        out.push_str("\n  [Comprar Todos os Itens]  Integração com mercados parceiros\n");
    }
    out.push_str("\n  back\n");
    out
}
