use serde::{Deserialize, Deserializer};
use serde_json::{Map, Value};

/// Number of paired ingredient/measure slots carried on every drink record
pub const INGREDIENT_SLOTS: usize = 15;

/// A single drink record as returned by the search endpoint
///
/// Only the fields the UI reads are typed. Everything else, including the
/// `strIngredientN`/`strMeasureN` slots, is kept in `fields` as it came off
/// the wire.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Drink {
    #[serde(rename = "idDrink", default)]
    pub id: Option<String>,
    #[serde(rename = "strDrink", default, deserialize_with = "null_as_empty")]
    pub name: String,
    #[serde(rename = "strDrinkThumb", default)]
    pub thumbnail: Option<String>,
    #[serde(rename = "strInstructions", default)]
    pub instructions: Option<String>,
    #[serde(rename = "strCategory", default)]
    pub category: Option<String>,
    #[serde(rename = "strGlass", default)]
    pub glass: Option<String>,
    #[serde(rename = "strAlcoholic", default)]
    pub alcoholic: Option<String>,
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

impl Drink {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: None,
            name: name.into(),
            thumbnail: None,
            instructions: None,
            category: None,
            glass: None,
            alcoholic: None,
            fields: Map::new(),
        }
    }

    pub fn with_instructions(mut self, instructions: impl Into<String>) -> Self {
        self.instructions = Some(instructions.into());
        self
    }

    /// Fill ingredient slot `slot` (1-based) with a name and an optional measure
    pub fn with_ingredient(mut self, slot: usize, name: &str, measure: Option<&str>) -> Self {
        self.fields
            .insert(ingredient_key(slot), Value::String(name.to_string()));
        let measure = measure.map_or(Value::Null, |m| Value::String(m.to_string()));
        self.fields.insert(measure_key(slot), measure);
        self
    }

    /// Ingredient name in `slot`, if present and non-empty
    pub fn ingredient(&self, slot: usize) -> Option<&str> {
        self.slot_text(&ingredient_key(slot))
    }

    /// Measure in `slot`, if present and non-empty
    pub fn measure(&self, slot: usize) -> Option<&str> {
        self.slot_text(&measure_key(slot))
    }

    pub fn ingredients(&self) -> Vec<String> {
        extract_ingredients(self)
    }

    fn slot_text(&self, key: &str) -> Option<&str> {
        self.fields
            .get(key)
            .and_then(Value::as_str)
            .filter(|text| !text.is_empty())
    }
}

fn ingredient_key(slot: usize) -> String {
    format!("strIngredient{}", slot)
}

fn measure_key(slot: usize) -> String {
    format!("strMeasure{}", slot)
}

/// Collect the filled ingredient slots of a drink in slot order
///
/// Each entry is the measure immediately followed by the ingredient name,
/// with no separator. A slot without an ingredient name is skipped even when
/// it carries a measure.
pub fn extract_ingredients(drink: &Drink) -> Vec<String> {
    (1..=INGREDIENT_SLOTS)
        .filter_map(|slot| {
            let name = drink.ingredient(slot)?;
            let measure = drink.measure(slot).unwrap_or_default();
            Some(format!("{}{}", measure, name))
        })
        .collect()
}
