use rstest::*;

use super::Drink;

/// Drink with a gap in slot 2, used to check slot skipping
#[fixture]
pub fn rum_and_lime() -> Drink {
    let mut drink = Drink::new("Daiquiri")
        .with_ingredient(1, "Rum", Some("2oz"))
        .with_ingredient(3, "Lime", Some("1oz"));
    drink.fields.insert(
        "strIngredient2".to_string(),
        serde_json::Value::String(String::new()),
    );
    drink.fields.insert(
        "strMeasure2".to_string(),
        serde_json::Value::String(String::new()),
    );
    drink
}

#[fixture]
pub fn margarita() -> Drink {
    Drink::new("Margarita")
        .with_instructions("Rub the rim of the glass with the lime slice.")
        .with_ingredient(1, "Tequila", Some("1 1/2 oz "))
        .with_ingredient(2, "Triple sec", Some("1/2 oz "))
        .with_ingredient(3, "Lime juice", Some("1 oz "))
        .with_ingredient(4, "Salt", None)
}

#[fixture]
pub fn mojito() -> Drink {
    Drink::new("Mojito")
        .with_instructions("Muddle mint leaves with sugar and lime juice.")
        .with_ingredient(1, "Light rum", Some("2-3 oz "))
        .with_ingredient(2, "Lime", Some("Juice of 1 "))
        .with_ingredient(3, "Mint", Some("2-4 "))
}
