use indexmap::IndexMap;

use super::Drink;

/// Drinks the user collected, keyed by display name in insertion order
#[derive(Debug, Clone, Default)]
pub struct ShoppingList {
    entries: IndexMap<String, Drink>,
}

impl ShoppingList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a drink under its name
    /// An existing entry with the same name is replaced in place and returned
    pub fn insert(&mut self, drink: Drink) -> Option<Drink> {
        self.entries.insert(drink.name.clone(), drink)
    }

    pub fn remove(&mut self, name: &str) -> Option<Drink> {
        self.entries.shift_remove(name)
    }

    pub fn get(&self, name: &str) -> Option<&Drink> {
        self.entries.get(name)
    }

    pub fn get_index(&self, index: usize) -> Option<(&String, &Drink)> {
        self.entries.get_index(index)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &Drink)> {
        self.entries.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::test_fixtures::{margarita, mojito};
    use rstest::*;

    #[rstest]
    fn test_insert_overwrites_same_name(margarita: Drink) {
        let mut list = ShoppingList::new();
        list.insert(margarita.clone());

        let replacement = Drink::new("Margarita").with_ingredient(1, "Mezcal", Some("2 oz "));
        let previous = list.insert(replacement.clone());

        assert_eq!(previous, Some(margarita));
        assert_eq!(list.len(), 1);
        assert_eq!(list.get("Margarita"), Some(&replacement));
    }

    #[rstest]
    fn test_overwrite_keeps_position(margarita: Drink, mojito: Drink) {
        let mut list = ShoppingList::new();
        list.insert(margarita);
        list.insert(mojito);
        list.insert(Drink::new("Margarita"));

        let names: Vec<&String> = list.iter().map(|(name, _)| name).collect();
        assert_eq!(names, vec!["Margarita", "Mojito"]);
    }

    #[rstest]
    fn test_remove_keeps_order_of_rest(margarita: Drink, mojito: Drink) {
        let mut list = ShoppingList::new();
        list.insert(Drink::new("Negroni"));
        list.insert(margarita);
        list.insert(mojito);

        assert!(list.remove("Margarita").is_some());

        let names: Vec<&String> = list.iter().map(|(name, _)| name).collect();
        assert_eq!(names, vec!["Negroni", "Mojito"]);
    }

    #[test]
    fn test_remove_missing_is_none() {
        let mut list = ShoppingList::new();

        assert!(list.remove("Nothing").is_none());
        assert!(list.is_empty());
    }
}
