use clap::Args;
use fridgechef_core::{
    Catalog, Config, CoreError, DifficultyFilter, FilterState, RecipeTab, RecipeView, Result,
    TimeFilter,
};

use crate::render;

#[derive(Args)]
pub struct RecipesArgs {
    /// Prep-time bucket: all, quick (<=30), medium (31-45), long (>45)
    #[arg(long)]
    time: Option<TimeFilter>,
    /// Difficulty: all, easy, medium, hard
    #[arg(long)]
    difficulty: Option<DifficultyFilter>,
    /// Which tab to list: all, complete, missing
    #[arg(long, default_value = "all")]
    tab: RecipeTab,
    /// Print JSON instead of text
    #[arg(long)]
    json: bool,
}

#[derive(Args)]
pub struct RecipeArgs {
    /// Recipe id
    id: u32,
    /// Print JSON instead of text
    #[arg(long)]
    json: bool,
}

pub fn run_list(args: RecipesArgs) -> Result<()> {
    let config = Config::load_or_default();
    let defaults = config.filters.initial();
    let filters = FilterState::new(
        args.time.unwrap_or(defaults.time),
        args.difficulty.unwrap_or(defaults.difficulty),
    );

    let catalog = Catalog::builtin();
    let view = RecipeView::build(&catalog, &filters);

    if args.json {
        println!("{}", serde_json::to_string_pretty(view.tab(args.tab))?);
        return Ok(());
    }

    if args.tab == RecipeTab::All {
        print!("{}", render::recipes(&view, &filters, None, &config.display));
    } else {
        for recipe in view.tab(args.tab) {
            print!("{}", render::card(recipe, &config.display, false));
        }
    }
    Ok(())
}

pub fn run_show(args: RecipeArgs) -> Result<()> {
    let config = Config::load_or_default();
    let catalog = Catalog::builtin();
    let recipe = catalog
        .get(args.id)
        .ok_or_else(|| CoreError::Custom(format!("recipe {} not found", args.id)))?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(recipe)?);
    } else {
        print!("{}", render::card(recipe, &config.display, true));
    }
    Ok(())
}
