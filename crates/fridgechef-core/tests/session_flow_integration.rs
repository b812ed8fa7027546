//! Integration tests for the full screen flow.

use fridgechef_core::{
    Catalog, Config, Difficulty, DifficultyFilter, Event, ManualClock, RecipeTab, Screen,
    Session, TimeFilter, CANNED_INGREDIENTS, DETECTION_DELAY_MS,
};

fn new_session() -> (Session<ManualClock>, ManualClock) {
    let clock = ManualClock::new(1_700_000_000_000);
    (Session::new(clock.clone()), clock)
}

#[test]
fn test_scan_edit_browse_shop_round_trip() {
    let (mut session, clock) = new_session();
    assert_eq!(session.screen(), Screen::Home);

    session.start_detection();
    assert_eq!(session.screen(), Screen::Scanning);
    clock.advance(DETECTION_DELAY_MS);
    session.tick();
    assert_eq!(session.screen(), Screen::Ingredients);
    assert_eq!(session.pantry().len(), 10);

    // Drop "Leite", add "Cenoura"
    session.remove_ingredient(1);
    session.add_ingredient("Cenoura");
    assert_eq!(session.pantry().len(), 10);
    assert!(!session.pantry().contains("Leite"));
    assert_eq!(session.pantry().as_slice().last().map(String::as_str), Some("Cenoura"));

    session.search_recipes();
    assert_eq!(session.screen(), Screen::Recipes);

    session.set_time_filter(TimeFilter::Quick);
    let view = session.view();
    let names: Vec<&str> = view.all.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, ["Omelete Caprese", "Frango Grelhado com Legumes"]);
    assert_eq!(view.tab(RecipeTab::Complete).len(), 1);

    session.view_shopping_list();
    assert_eq!(session.screen(), Screen::Shopping);
    assert_eq!(session.shopping_list().len(), 6);

    session.back();
    assert_eq!(session.screen(), Screen::Recipes);
    session.back();
    assert_eq!(session.screen(), Screen::Ingredients);
    session.back();
    assert_eq!(session.screen(), Screen::Home);
    assert!(session.pantry().is_empty());
}

#[test]
fn test_rescan_overwrites_manual_edits() {
    let (mut session, clock) = new_session();
    session.start_detection();
    clock.advance(300);
    assert_eq!(session.pending_detections(), 1);

    clock.advance(DETECTION_DELAY_MS);
    session.tick();
    session.add_ingredient("Sal");
    session.scan_again();
    session.back(); // no-op while scanning
    clock.advance(100);
    assert_eq!(session.screen(), Screen::Scanning);

    clock.advance(DETECTION_DELAY_MS);
    session.tick();
    assert_eq!(session.screen(), Screen::Ingredients);
    assert_eq!(session.pantry().as_slice(), CANNED_INGREDIENTS);
}

#[test]
fn test_overlapping_timers_both_fire() {
    let (mut session, clock) = new_session();
    session.start_detection();
    clock.advance(DETECTION_DELAY_MS);
    session.tick();
    session.scan_again();

    clock.advance(DETECTION_DELAY_MS);
    session.tick();
    session.scan_again();
    // A result delivered out of band frees the user to scan again while the
    // first timer is still pending.
    session.dispatch(fridgechef_core::Action::DetectionCompleted(vec!["Uva".into()]));
    session.scan_again();
    assert_eq!(session.pending_detections(), 2);

    clock.advance(DETECTION_DELAY_MS * 2);
    let events = session.tick();
    let completions = events
        .iter()
        .filter(|e| matches!(e, Event::DetectionCompleted { .. }))
        .count();
    assert_eq!(completions, 2);
    assert_eq!(session.pantry().as_slice(), CANNED_INGREDIENTS);
    assert_eq!(session.pending_detections(), 0);
}

#[test]
fn test_late_result_overrides_manual_navigation() {
    let (mut session, clock) = new_session();
    session.start_detection();
    clock.advance(DETECTION_DELAY_MS);
    session.tick();
    session.scan_again();

    session.dispatch(fridgechef_core::Action::DetectionCompleted(vec!["Ovos".into()]));
    session.search_recipes();
    session.view_shopping_list();
    assert_eq!(session.screen(), Screen::Shopping);

    clock.advance(DETECTION_DELAY_MS);
    session.tick();
    assert_eq!(session.screen(), Screen::Ingredients);
    assert_eq!(session.pantry().len(), CANNED_INGREDIENTS.len());
}

#[test]
fn test_search_blocked_until_first_ingredient() {
    let (mut session, _clock) = new_session();
    session.add_manually();
    assert!(session.search_recipes().is_empty());
    assert_eq!(session.screen(), Screen::Ingredients);

    session.add_ingredient("   ");
    session.search_recipes();
    assert_eq!(session.screen(), Screen::Ingredients);

    session.add_ingredient("Ovos");
    session.search_recipes();
    assert_eq!(session.screen(), Screen::Recipes);
}

#[test]
fn test_shopping_list_ignores_pantry_and_filters() {
    let (mut session, _clock) = new_session();
    let expected = [
        "Pimentão",
        "Bacon",
        "Farinha de Mandioca",
        "Creme de Leite",
        "Cenoura",
        "Massa Pronta",
    ];
    assert_eq!(session.shopping_list(), expected);

    session.add_manually();
    session.add_ingredient("Bacon");
    session.add_ingredient("Cenoura");
    session.search_recipes();
    session.set_difficulty_filter(DifficultyFilter::Only(Difficulty::Hard));
    assert_eq!(session.view().all.len(), 1);
    assert_eq!(session.shopping_list(), expected);
}

#[test]
fn test_recipe_detail_toggles() {
    let (mut session, _clock) = new_session();
    session.add_manually();
    session.add_ingredient("Ovos");
    session.search_recipes();

    session.toggle_recipe(4);
    let detail = session.selected_recipe().unwrap();
    assert_eq!(detail.name, "Batata Gratinada");
    assert_eq!(detail.missing, ["Creme de Leite"]);
    assert_eq!(detail.availability_label(), "Falta 1 item(s)");

    session.toggle_recipe(4);
    assert!(session.selected_recipe().is_none());
}

#[test]
fn test_session_from_config() {
    let mut config = Config::default();
    config.set("detection.delay_ms", "50").unwrap();
    config.set("detection.canned_ingredients", "Maçã, Chocolate, Maçã").unwrap();
    config.set("filters.default_time", "long").unwrap();

    let clock = ManualClock::new(0);
    let mut session = Session::from_config(&config, clock.clone());
    assert_eq!(session.filters().time, TimeFilter::Long);

    session.start_detection();
    clock.advance(50);
    session.tick();
    assert_eq!(session.pantry().as_slice(), ["Maçã", "Chocolate"]);
}

#[test]
fn test_custom_catalog() {
    let mut recipes: Vec<_> = Catalog::builtin().iter().cloned().collect();
    recipes.truncate(2);
    let catalog = Catalog::new(recipes).unwrap();
    let session = Session::new(ManualClock::new(0)).with_catalog(catalog);
    assert_eq!(session.view().all.len(), 2);
    assert_eq!(session.shopping_list(), ["Pimentão"]);
}
