//! Integration tests for `Session` against a JSON store in a temp dir.

use rand::SeedableRng;
use rand::rngs::StdRng;

use dietmate_core::plan::PlanError;
use dietmate_core::{Prerequisite, Session, SessionError};
use dietmate_store::Store;
use dietmate_store::models::{DietType, MealSlot};
use dietmate_test_utils::{profile, recipe, temp_store};

#[test]
fn fresh_store_loads_an_empty_session() {
    let ts = temp_store();
    let session = Session::load(&ts.store).unwrap();
    assert!(session.profile.is_none());
    assert!(session.catalog.is_empty());
    assert!(session.current_plan.is_none());
}

#[test]
fn generate_requires_recipes_after_profile() {
    let ts = temp_store();
    let mut session = Session::load(&ts.store).unwrap();
    session
        .save_profile(&ts.store, profile(DietType::Omnivore, ""))
        .unwrap();

    let mut rng = StdRng::seed_from_u64(1);
    let err = session.generate_plan(&mut rng).unwrap_err();
    assert!(matches!(
        err,
        SessionError::MissingPrerequisite(Prerequisite::Recipes)
    ));
}

#[test]
fn full_flow_persists_and_reloads() {
    let ts = temp_store();
    let mut session = Session::load(&ts.store).unwrap();
    session
        .save_profile(&ts.store, profile(DietType::Vegetarian, ""))
        .unwrap();
    assert_eq!(session.load_sample_recipes(&ts.store).unwrap(), 7);

    let mut rng = StdRng::seed_from_u64(7);
    let plan_id = session.generate_plan(&mut rng).unwrap().id;
    session.save_plan(&ts.store).unwrap();

    let reloaded = Session::load(&ts.store).unwrap();
    assert_eq!(reloaded.catalog.len(), 7);
    assert_eq!(
        reloaded.profile.as_ref().map(|p| p.diet_type),
        Some(DietType::Vegetarian)
    );
    let record = reloaded.current_plan().unwrap();
    assert_eq!(record.id, plan_id);
    assert_eq!(record.profile_name, "Test User");
    assert!(
        record
            .plan
            .meals()
            .all(|m| m.recipe.diet == DietType::Vegetarian)
    );
    assert_eq!(reloaded.calorie_series().unwrap().len(), 7);
}

#[test]
fn failed_generation_keeps_previous_plan() {
    let ts = temp_store();
    let mut session = Session::load(&ts.store).unwrap();
    session
        .save_profile(&ts.store, profile(DietType::Vegan, ""))
        .unwrap();
    session.load_sample_recipes(&ts.store).unwrap();

    let mut rng = StdRng::seed_from_u64(3);
    let first = session.generate_plan(&mut rng).unwrap().clone();
    session.save_plan(&ts.store).unwrap();

    session
        .save_profile(&ts.store, profile(DietType::Vegan, "tofu,oats,banana,spinach,almond"))
        .unwrap();
    let err = session.generate_plan(&mut rng).unwrap_err();
    assert!(matches!(
        err,
        SessionError::Plan(PlanError::NoMatchingRecipes { .. })
    ));

    assert_eq!(session.current_plan().unwrap(), &first);
    assert_eq!(ts.store.load_plan().unwrap().as_ref(), Some(&first));
}

#[test]
fn invalid_catalog_is_not_persisted() {
    let ts = temp_store();
    let mut session = Session::load(&ts.store).unwrap();
    let dup = vec![
        recipe("Toast", MealSlot::Breakfast, DietType::Vegan, 100, &["Bread"]),
        recipe("Toast", MealSlot::Snack, DietType::Vegan, 150, &["Bread"]),
    ];

    let err = session.replace_catalog(&ts.store, dup).unwrap_err();
    assert!(matches!(err, SessionError::Catalog(_)), "got {err:?}");
    assert!(ts.store.load_recipes().unwrap().is_empty());
    assert!(session.catalog.is_empty());
}

#[test]
fn shopping_list_from_single_recipe_catalog() {
    let ts = temp_store();
    let mut session = Session::load(&ts.store).unwrap();
    session
        .save_profile(&ts.store, profile(DietType::Omnivore, ""))
        .unwrap();
    session
        .replace_catalog(
            &ts.store,
            vec![recipe(
                "Egg Scramble",
                MealSlot::Breakfast,
                DietType::Omnivore,
                280,
                &["Eggs", "Tomato", "Spinach"],
            )],
        )
        .unwrap();

    let mut rng = StdRng::seed_from_u64(11);
    session.generate_plan(&mut rng).unwrap();

    assert_eq!(
        session.shopping_list().unwrap(),
        vec!["Eggs", "Spinach", "Tomato"]
    );
    let series = session.calorie_series().unwrap();
    assert!(series.iter().all(|(_, total)| *total == 280 * 4));
}

#[test]
fn unreadable_plan_file_is_replaced_by_next_plan() {
    let ts = temp_store();
    let mut session = Session::load(&ts.store).unwrap();
    session
        .save_profile(&ts.store, profile(DietType::Omnivore, ""))
        .unwrap();
    session.load_sample_recipes(&ts.store).unwrap();
    std::fs::write(ts.config().plans_path(), "{ truncated").unwrap();

    let mut session = Session::load(&ts.store).unwrap();
    assert!(session.current_plan.is_none());
    assert_eq!(session.catalog.len(), 7);

    let mut rng = StdRng::seed_from_u64(5);
    let plan_id = session.generate_plan(&mut rng).unwrap().id;
    session.save_plan(&ts.store).unwrap();

    let reloaded = Session::load(&ts.store).unwrap();
    assert_eq!(reloaded.current_plan().unwrap().id, plan_id);
}

#[test]
fn unreadable_profile_still_fails_load() {
    let ts = temp_store();
    ts.store
        .save_profile(&profile(DietType::Vegan, ""))
        .unwrap();
    std::fs::write(ts.config().profile_path(), "not json").unwrap();

    let err = Session::load(&ts.store).unwrap_err();
    assert!(matches!(err, SessionError::Store(_)), "got {err:?}");
}
