//! Integration tests for the JSON file store.
//!
//! Each test gets its own temporary data directory.

use chrono::Utc;
use uuid::Uuid;

use dietmate_store::models::{
    DayPlan, DietType, Goal, MealPlan, MealSlot, PlanRecord, PlannedMeal, Sex,
};
use dietmate_store::{Store, StoreError};
use dietmate_test_utils::{profile, recipe, temp_store};

#[test]
fn empty_directory_reads_as_nothing_saved() {
    let ts = temp_store();
    assert!(ts.store.load_profile().unwrap().is_none());
    assert!(ts.store.load_recipes().unwrap().is_empty());
    assert!(ts.store.load_plan().unwrap().is_none());
}

#[test]
fn profile_roundtrip_creates_data_dir() {
    let ts = temp_store();
    let mut p = profile(DietType::Vegetarian, "peanut, shellfish");
    p.sex = Some(Sex::Female);
    p.goal = Some(Goal::Maintain);

    ts.store.save_profile(&p).unwrap();
    assert!(ts.config().profile_path().exists());

    let loaded = ts.store.load_profile().unwrap().expect("profile saved");
    assert_eq!(loaded, p);
}

#[test]
fn profile_save_overwrites_whole_record() {
    let ts = temp_store();
    ts.store
        .save_profile(&profile(DietType::Vegan, "soy"))
        .unwrap();
    ts.store
        .save_profile(&profile(DietType::Omnivore, ""))
        .unwrap();

    let loaded = ts.store.load_profile().unwrap().unwrap();
    assert_eq!(loaded.diet_type, DietType::Omnivore);
    assert_eq!(loaded.allergies, "");
}

#[test]
fn recipes_file_uses_cal_key() {
    let ts = temp_store();
    let recipes = vec![recipe(
        "Tofu Curry",
        MealSlot::Dinner,
        DietType::Vegan,
        440,
        &["Tofu", "Coconut milk"],
    )];
    ts.store.save_recipes(&recipes).unwrap();

    let raw = std::fs::read_to_string(ts.config().recipes_path()).unwrap();
    assert!(raw.contains("\"cal\": 440"), "unexpected file contents: {raw}");

    assert_eq!(ts.store.load_recipes().unwrap(), recipes);
}

#[test]
fn plan_roundtrip() {
    let ts = temp_store();
    let r = recipe("Smoothie", MealSlot::Snack, DietType::Vegan, 210, &["Banana"]);
    let record = PlanRecord {
        id: Uuid::new_v4(),
        generated_at: Utc::now(),
        profile_name: "Test User".to_owned(),
        plan: MealPlan {
            days: vec![DayPlan {
                day: 1,
                meals: vec![PlannedMeal {
                    slot: MealSlot::Snack,
                    recipe: r,
                }],
            }],
        },
    };

    ts.store.save_plan(&record).unwrap();
    assert_eq!(ts.store.load_plan().unwrap(), Some(record));
}

#[test]
fn corrupt_file_is_a_parse_error_with_path() {
    let ts = temp_store();
    let path = ts.config().profile_path();
    std::fs::create_dir_all(path.parent().unwrap()).unwrap();
    std::fs::write(&path, "{ not json").unwrap();

    let err = ts.store.load_profile().unwrap_err();
    assert!(matches!(err, StoreError::Parse { .. }), "got {err:?}");
    assert_eq!(err.path(), Some(path.as_path()));
    assert!(err.to_string().contains("profile.json"));
}

#[test]
fn unwritable_data_dir_is_an_io_error() {
    let ts = temp_store();
    // A regular file where the data directory should be.
    std::fs::write(ts.config().data_dir(), "blocker").unwrap();

    let err = ts
        .store
        .save_profile(&profile(DietType::Omnivore, ""))
        .unwrap_err();
    assert!(
        matches!(err, StoreError::CreateDir { .. } | StoreError::Write { .. }),
        "got {err:?}"
    );
}
