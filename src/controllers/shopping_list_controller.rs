use tracing::{info, warn};

use crate::error::Result;
use crate::models::{Drink, ShoppingList};
use crate::notify::{Notifier, Severity};
use crate::print::{Printer, render_printable};

/// Add a drink to the shopping list
/// A drink with the same name replaces the earlier one
pub fn add_to_list(list: &mut ShoppingList, drink: Drink, notifier: &mut impl Notifier) {
    info!(drink = %drink.name, "adding to shopping list");
    list.insert(drink);
    notifier.notify("Ingredients added to shopping list.", Severity::Success);
}

/// Remove a drink by name, doing nothing if it is not on the list
pub fn remove_from_list(
    list: &mut ShoppingList,
    name: &str,
    notifier: &mut impl Notifier,
) -> Option<Drink> {
    let removed = list.remove(name);
    info!(drink = name, removed = removed.is_some(), "removing from shopping list");
    notifier.notify("Ingredient removed from shopping list.", Severity::Error);
    removed
}

/// Print the shopping list
///
/// An empty list is refused with an error notification and the printer is
/// never touched. Printer failures are reported and returned.
pub fn print_list(
    list: &ShoppingList,
    printer: &mut dyn Printer,
    notifier: &mut impl Notifier,
) -> Result<()> {
    if list.is_empty() {
        notifier.notify("Add items first! Nothing to print.", Severity::Error);
        return Ok(());
    }

    let document = render_printable(list);
    if let Err(err) = printer.print(&document) {
        warn!(error = %err, "printing failed");
        notifier.notify(&format!("Printing failed: {}", err), Severity::Error);
        return Err(err);
    }

    info!(drinks = list.len(), "shopping list printed");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::BarcartError;
    use crate::models::test_fixtures::{margarita, mojito};
    use crate::notify::Notification;
    use rstest::*;

    #[derive(Default)]
    struct RecordingPrinter {
        documents: Vec<String>,
        fail: bool,
    }

    impl Printer for RecordingPrinter {
        fn print(&mut self, document: &str) -> Result<()> {
            if self.fail {
                return Err(BarcartError::Io(std::io::Error::other("out of paper")));
            }
            self.documents.push(document.to_string());
            Ok(())
        }
    }

    #[rstest]
    fn test_add_twice_same_name_overwrites(margarita: Drink) {
        let mut list = ShoppingList::new();
        let mut notes: Vec<Notification> = Vec::new();
        let second = Drink::new("Margarita").with_ingredient(1, "Mezcal", None);

        add_to_list(&mut list, margarita, &mut notes);
        add_to_list(&mut list, second.clone(), &mut notes);

        assert_eq!(list.len(), 1);
        assert_eq!(list.get("Margarita"), Some(&second));
        assert!(notes.iter().all(|n| n.severity == Severity::Success));
    }

    #[rstest]
    #[case::empty(ShoppingList::new())]
    #[case::other_entries({
        let mut list = ShoppingList::new();
        list.insert(Drink::new("Mojito"));
        list
    })]
    fn test_remove_missing_leaves_list_unchanged(#[case] list: ShoppingList) {
        let mut list = list;
        let before: Vec<String> = list.iter().map(|(name, _)| name.clone()).collect();
        let mut notes: Vec<Notification> = Vec::new();

        let removed = remove_from_list(&mut list, "Margarita", &mut notes);

        let after: Vec<String> = list.iter().map(|(name, _)| name.clone()).collect();
        assert!(removed.is_none());
        assert_eq!(before, after);
    }

    #[rstest]
    fn test_add_then_remove_all_is_empty(margarita: Drink, mojito: Drink) {
        let mut list = ShoppingList::new();
        let mut notes: Vec<Notification> = Vec::new();
        let drinks = vec![margarita, mojito, Drink::new("Negroni")];
        let names: Vec<String> = drinks.iter().map(|d| d.name.clone()).collect();

        for drink in drinks {
            add_to_list(&mut list, drink, &mut notes);
        }
        assert_eq!(list.len(), 3);

        for name in &names {
            assert!(remove_from_list(&mut list, name, &mut notes).is_some());
        }
        assert!(list.is_empty());
    }

    #[test]
    fn test_print_empty_list_skips_printer() {
        let list = ShoppingList::new();
        let mut printer = RecordingPrinter::default();
        let mut notes: Vec<Notification> = Vec::new();

        print_list(&list, &mut printer, &mut notes).expect("Empty print should not error");

        assert!(printer.documents.is_empty());
        assert_eq!(
            notes,
            vec![Notification {
                message: "Add items first! Nothing to print.".to_string(),
                severity: Severity::Error,
            }]
        );
    }

    #[rstest]
    fn test_print_calls_printer_once_per_call(margarita: Drink) {
        let mut list = ShoppingList::new();
        list.insert(margarita);
        let mut printer = RecordingPrinter::default();
        let mut notes: Vec<Notification> = Vec::new();

        print_list(&list, &mut printer, &mut notes).expect("Failed to print");
        assert_eq!(printer.documents.len(), 1);

        print_list(&list, &mut printer, &mut notes).expect("Failed to print");
        assert_eq!(printer.documents.len(), 2);
        assert!(printer.documents[0].contains("1 1/2 oz Tequila"));
        assert!(notes.is_empty());
    }

    #[rstest]
    fn test_printer_failure_is_reported(margarita: Drink) {
        let mut list = ShoppingList::new();
        list.insert(margarita);
        let mut printer = RecordingPrinter {
            fail: true,
            ..Default::default()
        };
        let mut notes: Vec<Notification> = Vec::new();

        let result = print_list(&list, &mut printer, &mut notes);

        assert!(result.is_err());
        assert_eq!(list.len(), 1);
        assert!(notes[0].message.contains("out of paper"));
    }
}
