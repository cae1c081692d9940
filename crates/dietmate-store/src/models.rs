use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use thiserror::Error;
use uuid::Uuid;

/// Number of days in a generated plan.
pub const DAYS_PER_PLAN: u8 = 7;

// ---------------------------------------------------------------------------
// Enums
// ---------------------------------------------------------------------------

/// Error returned when a string does not name a known enum variant.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid {kind}: {value:?} (expected one of {expected})")]
pub struct ParseEnumError {
    pub kind: &'static str,
    pub value: String,
    pub expected: &'static str,
}

/// Lower-case the input and fold `-`/`_` into spaces so CLI spellings like
/// `lose-weight` match the stored `Lose Weight`.
fn normalize(s: &str) -> String {
    s.trim().to_lowercase().replace(['-', '_'], " ")
}

// ---------------------------------------------------------------------------

/// Diet preference of a profile, and diet tag of a recipe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DietType {
    #[default]
    Omnivore,
    Vegetarian,
    Vegan,
}

impl DietType {
    pub const ALL: [DietType; 3] = [Self::Omnivore, Self::Vegetarian, Self::Vegan];

    /// Whether a profile with this diet accepts a recipe tagged `recipe_diet`.
    ///
    /// Omnivore accepts every recipe; the other diets require an exact tag
    /// match. A vegetarian profile does not accept vegan-tagged recipes.
    pub fn accepts(self, recipe_diet: DietType) -> bool {
        self == Self::Omnivore || self == recipe_diet
    }
}

impl fmt::Display for DietType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Omnivore => "omnivore",
            Self::Vegetarian => "vegetarian",
            Self::Vegan => "vegan",
        };
        f.write_str(s)
    }
}

impl FromStr for DietType {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize(s).as_str() {
            "omnivore" => Ok(Self::Omnivore),
            "vegetarian" => Ok(Self::Vegetarian),
            "vegan" => Ok(Self::Vegan),
            _ => Err(ParseEnumError {
                kind: "diet type",
                value: s.to_owned(),
                expected: "omnivore, vegetarian, vegan",
            }),
        }
    }
}

// ---------------------------------------------------------------------------

/// Meal slot of a day, and the meal tag of a recipe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MealSlot {
    Breakfast,
    Lunch,
    Snack,
    Dinner,
}

impl MealSlot {
    /// Slots in the order they appear within a planned day.
    pub const ALL: [MealSlot; 4] = [Self::Breakfast, Self::Lunch, Self::Snack, Self::Dinner];
}

impl fmt::Display for MealSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Breakfast => "Breakfast",
            Self::Lunch => "Lunch",
            Self::Snack => "Snack",
            Self::Dinner => "Dinner",
        };
        f.write_str(s)
    }
}

impl FromStr for MealSlot {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize(s).as_str() {
            "breakfast" => Ok(Self::Breakfast),
            "lunch" => Ok(Self::Lunch),
            "snack" => Ok(Self::Snack),
            "dinner" => Ok(Self::Dinner),
            _ => Err(ParseEnumError {
                kind: "meal slot",
                value: s.to_owned(),
                expected: "Breakfast, Lunch, Snack, Dinner",
            }),
        }
    }
}

// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Sex {
    Male,
    Female,
    Other,
}

impl fmt::Display for Sex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Male => "Male",
            Self::Female => "Female",
            Self::Other => "Other",
        };
        f.write_str(s)
    }
}

impl FromStr for Sex {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize(s).as_str() {
            "male" => Ok(Self::Male),
            "female" => Ok(Self::Female),
            "other" => Ok(Self::Other),
            _ => Err(ParseEnumError {
                kind: "sex",
                value: s.to_owned(),
                expected: "Male, Female, Other",
            }),
        }
    }
}

// ---------------------------------------------------------------------------

/// Daily activity level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ActivityLevel {
    Low,
    Moderate,
    High,
}

impl fmt::Display for ActivityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Low => "Low",
            Self::Moderate => "Moderate",
            Self::High => "High",
        };
        f.write_str(s)
    }
}

impl FromStr for ActivityLevel {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize(s).as_str() {
            "low" => Ok(Self::Low),
            "moderate" => Ok(Self::Moderate),
            "high" => Ok(Self::High),
            _ => Err(ParseEnumError {
                kind: "activity level",
                value: s.to_owned(),
                expected: "Low, Moderate, High",
            }),
        }
    }
}

// ---------------------------------------------------------------------------

/// Weight goal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Goal {
    #[serde(rename = "Lose Weight")]
    LoseWeight,
    Maintain,
    #[serde(rename = "Gain Weight")]
    GainWeight,
}

impl fmt::Display for Goal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::LoseWeight => "Lose Weight",
            Self::Maintain => "Maintain",
            Self::GainWeight => "Gain Weight",
        };
        f.write_str(s)
    }
}

impl FromStr for Goal {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize(s).as_str() {
            "lose weight" | "lose" => Ok(Self::LoseWeight),
            "maintain" => Ok(Self::Maintain),
            "gain weight" | "gain" => Ok(Self::GainWeight),
            _ => Err(ParseEnumError {
                kind: "goal",
                value: s.to_owned(),
                expected: "Lose Weight, Maintain, Gain Weight",
            }),
        }
    }
}

// ---------------------------------------------------------------------------
// Recipe
// ---------------------------------------------------------------------------

/// A catalog recipe. Immutable once loaded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recipe {
    /// Display name, unique within a catalog.
    pub name: String,
    pub meal: MealSlot,
    pub diet: DietType,
    /// Energy in kcal. Stored under `cal` in recipe files.
    #[serde(rename = "cal", alias = "calories")]
    pub calories: u32,
    /// Grams of protein.
    pub protein: u32,
    /// Grams of carbohydrate.
    pub carbs: u32,
    /// Grams of fat.
    pub fat: u32,
    /// Bare ingredient names, in recipe order.
    pub ingredients: Vec<String>,
}

impl Recipe {
    /// Ingredient names joined with `", "` and lower-cased.
    ///
    /// This is the haystack allergy tokens are matched against.
    pub fn ingredient_text(&self) -> String {
        self.ingredients.join(", ").to_lowercase()
    }

    /// Whether any of the lower-cased `tokens` occurs as a substring of
    /// [`Recipe::ingredient_text`].
    pub fn mentions_any(&self, tokens: &[String]) -> bool {
        let text = self.ingredient_text();
        tokens.iter().any(|t| text.contains(t.as_str()))
    }
}

// ---------------------------------------------------------------------------
// Profile
// ---------------------------------------------------------------------------

/// The user's nutrition profile. Saved and loaded as a whole.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Profile {
    #[serde(default)]
    pub name: String,
    /// Age in years, kept as entered.
    #[serde(default)]
    pub age: String,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub sex: Option<Sex>,
    /// Weight in kg, kept as entered.
    #[serde(default)]
    pub weight: String,
    /// Height in cm, kept as entered.
    #[serde(default)]
    pub height: String,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub activity: Option<ActivityLevel>,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub goal: Option<Goal>,
    #[serde(default, deserialize_with = "empty_as_default")]
    pub diet_type: DietType,
    /// Comma-separated allergies or dislikes.
    #[serde(default)]
    pub allergies: String,
}

impl Profile {
    /// Allergy tokens: comma-split, trimmed, lower-cased, blanks dropped.
    pub fn allergy_tokens(&self) -> Vec<String> {
        self.allergies
            .split(',')
            .map(|a| a.trim().to_lowercase())
            .filter(|a| !a.is_empty())
            .collect()
    }

    pub fn age_years(&self) -> Option<u32> {
        self.age.trim().parse().ok()
    }

    pub fn weight_kg(&self) -> Option<f64> {
        parse_positive(&self.weight)
    }

    pub fn height_cm(&self) -> Option<f64> {
        parse_positive(&self.height)
    }
}

fn parse_positive(s: &str) -> Option<f64> {
    s.trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite() && *v > 0.0)
}

/// Deserialize an optional enum where an empty string means unset.
///
/// Profiles saved from a form with an untouched drop-down carry `""`.
fn empty_as_none<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr,
    T::Err: fmt::Display,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    match raw.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(s) => s.parse().map(Some).map_err(serde::de::Error::custom),
    }
}

/// Like [`empty_as_none`], for fields that have a default instead.
fn empty_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr + Default,
    T::Err: fmt::Display,
{
    empty_as_none(deserializer).map(Option::unwrap_or_default)
}

// ---------------------------------------------------------------------------
// Plan
// ---------------------------------------------------------------------------

/// A recipe assigned to one meal slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlannedMeal {
    pub slot: MealSlot,
    pub recipe: Recipe,
}

/// One day of a plan: four meals in [`MealSlot::ALL`] order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayPlan {
    /// 1-based day number.
    pub day: u8,
    pub meals: Vec<PlannedMeal>,
}

impl DayPlan {
    /// Display label, e.g. `"Day 3"`.
    pub fn label(&self) -> String {
        format!("Day {}", self.day)
    }

    pub fn meal(&self, slot: MealSlot) -> Option<&Recipe> {
        self.meals
            .iter()
            .find(|m| m.slot == slot)
            .map(|m| &m.recipe)
    }
}

/// A full week of meal assignments.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct MealPlan {
    pub days: Vec<DayPlan>,
}

impl MealPlan {
    /// Every planned meal, day by day, slot by slot.
    pub fn meals(&self) -> impl Iterator<Item = &PlannedMeal> {
        self.days.iter().flat_map(|d| d.meals.iter())
    }
}

/// The current plan as held by a session and written to the plans file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanRecord {
    pub id: Uuid,
    pub generated_at: DateTime<Utc>,
    /// Name on the profile the plan was generated for.
    pub profile_name: String,
    pub plan: MealPlan,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn oatmeal() -> Recipe {
        Recipe {
            name: "Oatmeal Bowl".to_owned(),
            meal: MealSlot::Breakfast,
            diet: DietType::Vegan,
            calories: 320,
            protein: 8,
            carbs: 45,
            fat: 9,
            ingredients: vec!["Oats".into(), "Banana".into(), "Almond milk".into()],
        }
    }

    #[test]
    fn diet_accepts_is_one_directional() {
        assert!(DietType::Omnivore.accepts(DietType::Vegan));
        assert!(DietType::Omnivore.accepts(DietType::Omnivore));
        assert!(DietType::Vegan.accepts(DietType::Vegan));
        assert!(!DietType::Vegan.accepts(DietType::Vegetarian));
        assert!(!DietType::Vegetarian.accepts(DietType::Vegan));
        assert!(!DietType::Vegetarian.accepts(DietType::Omnivore));
    }

    #[test]
    fn enum_display_parse_agree() {
        for diet in DietType::ALL {
            assert_eq!(diet.to_string().parse::<DietType>().unwrap(), diet);
        }
        for slot in MealSlot::ALL {
            assert_eq!(slot.to_string().parse::<MealSlot>().unwrap(), slot);
        }
        for goal in [Goal::LoseWeight, Goal::Maintain, Goal::GainWeight] {
            assert_eq!(goal.to_string().parse::<Goal>().unwrap(), goal);
        }
    }

    #[test]
    fn parse_accepts_cli_spellings() {
        assert_eq!("lose-weight".parse::<Goal>().unwrap(), Goal::LoseWeight);
        assert_eq!("GAIN_WEIGHT".parse::<Goal>().unwrap(), Goal::GainWeight);
        assert_eq!("Vegan".parse::<DietType>().unwrap(), DietType::Vegan);
        assert_eq!("dinner".parse::<MealSlot>().unwrap(), MealSlot::Dinner);
    }

    #[test]
    fn parse_rejects_unknown_values() {
        let err = "pescatarian".parse::<DietType>().unwrap_err();
        assert_eq!(err.kind, "diet type");
        assert!(err.to_string().contains("pescatarian"));
        assert!("brunch".parse::<MealSlot>().is_err());
    }

    #[test]
    fn recipe_reads_cal_and_calories_keys() {
        let json = r#"{"name":"Smoothie","meal":"Snack","diet":"vegan","cal":210,
            "protein":5,"carbs":35,"fat":6,"ingredients":["Banana","Spinach"]}"#;
        let r: Recipe = serde_json::from_str(json).unwrap();
        assert_eq!(r.calories, 210);
        assert_eq!(r.meal, MealSlot::Snack);

        let json = json.replace("\"cal\"", "\"calories\"");
        let r: Recipe = serde_json::from_str(&json).unwrap();
        assert_eq!(r.calories, 210);
    }

    #[test]
    fn recipe_writes_cal_key() {
        let value = serde_json::to_value(oatmeal()).unwrap();
        assert_eq!(value["cal"], 320);
        assert_eq!(value["meal"], "Breakfast");
        assert_eq!(value["diet"], "vegan");
        assert!(value.get("calories").is_none());
    }

    #[test]
    fn ingredient_matching_is_case_insensitive_substring() {
        let r = oatmeal();
        assert_eq!(r.ingredient_text(), "oats, banana, almond milk");
        assert!(r.mentions_any(&["banana".to_owned()]));
        assert!(r.mentions_any(&["milk".to_owned()]));
        assert!(!r.mentions_any(&["peanut".to_owned()]));
        assert!(!r.mentions_any(&[]));
    }

    #[test]
    fn allergy_tokens_are_trimmed_and_lowercased() {
        let profile = Profile {
            allergies: " Banana, ,NUTS ,  ".to_owned(),
            ..Profile::default()
        };
        assert_eq!(profile.allergy_tokens(), vec!["banana", "nuts"]);
        assert!(Profile::default().allergy_tokens().is_empty());
    }

    #[test]
    fn profile_reads_form_shaped_file() {
        let json = r#"{
            "name": "Sam", "age": "34", "sex": "", "weight": "70.5",
            "height": "abc", "activity": "Moderate", "goal": "Lose Weight",
            "diet_type": "", "allergies": "peanut"
        }"#;
        let p: Profile = serde_json::from_str(json).unwrap();
        assert_eq!(p.sex, None);
        assert_eq!(p.activity, Some(ActivityLevel::Moderate));
        assert_eq!(p.goal, Some(Goal::LoseWeight));
        // Blank diet_type falls back to omnivore.
        assert_eq!(p.diet_type, DietType::Omnivore);
        assert_eq!(p.age_years(), Some(34));
        assert_eq!(p.weight_kg(), Some(70.5));
        assert_eq!(p.height_cm(), None);
    }

    #[test]
    fn profile_diet_type_may_be_missing_or_set() {
        let p: Profile = serde_json::from_str(r#"{"name": "Sam"}"#).unwrap();
        assert_eq!(p.diet_type, DietType::Omnivore);

        let p: Profile = serde_json::from_str(r#"{"name": "Sam", "diet_type": "vegan"}"#).unwrap();
        assert_eq!(p.diet_type, DietType::Vegan);

        let json = r#"{"name": "Sam", "diet_type": "carnivore"}"#;
        assert!(serde_json::from_str::<Profile>(json).is_err());
    }

    #[test]
    fn profile_rejects_unknown_goal() {
        let json = r#"{"name": "Sam", "goal": "Bulk"}"#;
        assert!(serde_json::from_str::<Profile>(json).is_err());
    }

    #[test]
    fn day_plan_label_and_lookup() {
        let day = DayPlan {
            day: 3,
            meals: vec![PlannedMeal {
                slot: MealSlot::Breakfast,
                recipe: oatmeal(),
            }],
        };
        assert_eq!(day.label(), "Day 3");
        assert_eq!(day.meal(MealSlot::Breakfast).map(|r| r.calories), Some(320));
        assert!(day.meal(MealSlot::Dinner).is_none());
    }
}
