use std::fs;
use std::io::Write;
use std::path::PathBuf;
use std::process::{Command, Stdio};

use tracing::info;

use crate::config::PrintTarget;
use crate::error::{BarcartError, Result};
use crate::models::ShoppingList;

pub const PRINT_TITLE: &str = "Shopping List & Ingredients";

/// Something that can put a finished document on paper (or the next best thing)
pub trait Printer {
    fn print(&mut self, document: &str) -> Result<()>;
}

/// Writes the document to a file, replacing any previous print
pub struct FilePrinter {
    path: PathBuf,
}

impl FilePrinter {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl Printer for FilePrinter {
    fn print(&mut self, document: &str) -> Result<()> {
        fs::write(&self.path, document)?;
        info!(path = %self.path.display(), "shopping list written");
        Ok(())
    }
}

/// Pipes the document into a spooler command such as `lpr`
pub struct CommandPrinter {
    command: String,
}

impl CommandPrinter {
    pub fn new(command: impl Into<String>) -> Self {
        Self {
            command: command.into(),
        }
    }
}

impl Printer for CommandPrinter {
    fn print(&mut self, document: &str) -> Result<()> {
        let mut parts = self.command.split_whitespace();
        let program = parts.next().unwrap_or_default();

        let mut child = Command::new(program)
            .args(parts)
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()?;

        // Dropping stdin closes the pipe so the spooler sees EOF
        let written = match child.stdin.take() {
            Some(mut stdin) => stdin.write_all(document.as_bytes()),
            None => Ok(()),
        };

        // Always reap the child, even when the spooler hung up early
        let status = child.wait()?;
        written?;
        if !status.success() {
            return Err(BarcartError::PrintCommand {
                program: program.to_string(),
                status,
            });
        }

        info!(command = %self.command, "shopping list sent to printer");
        Ok(())
    }
}

pub fn printer_for(target: &PrintTarget) -> Box<dyn Printer> {
    match target {
        PrintTarget::File(path) => Box::new(FilePrinter::new(path.clone())),
        PrintTarget::Command(command) => Box::new(CommandPrinter::new(command.clone())),
    }
}

/// Lay out the shopping list for paper
///
/// Only the list itself goes out: no search results, pictures or key hints.
pub fn render_printable(list: &ShoppingList) -> String {
    let mut output = String::new();

    output.push_str(PRINT_TITLE);
    output.push('\n');
    output.push_str(&"=".repeat(PRINT_TITLE.len()));
    output.push('\n');

    for (name, drink) in list.iter() {
        output.push_str(&format!("\n{}\n", name));
        for ingredient in drink.ingredients() {
            output.push_str(&format!("  - {}\n", ingredient));
        }
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Drink;
    use crate::models::test_fixtures::{margarita, mojito};
    use rstest::*;

    #[rstest]
    fn test_render_printable_lists_each_drink(margarita: Drink, mojito: Drink) {
        let mut list = ShoppingList::new();
        list.insert(margarita);
        list.insert(mojito);

        let output = render_printable(&list);

        assert!(output.starts_with("Shopping List & Ingredients\n"));
        assert!(output.contains("\nMargarita\n  - 1 1/2 oz Tequila\n"));
        assert!(output.contains("  - Salt\n"));
        assert!(output.contains("\nMojito\n  - 2-3 oz Light rum\n"));
        assert!(output.find("Margarita") < output.find("Mojito"));
    }

    #[rstest]
    fn test_render_printable_leaves_out_instructions(margarita: Drink) {
        let mut list = ShoppingList::new();
        list.insert(margarita);

        let output = render_printable(&list);

        assert!(!output.contains("Rub the rim"));
    }

    #[rstest]
    fn test_file_printer_writes_document(margarita: Drink) {
        let path = std::env::temp_dir().join(format!("barcart-print-{}.txt", std::process::id()));
        let mut list = ShoppingList::new();
        list.insert(margarita);
        let document = render_printable(&list);

        FilePrinter::new(&path)
            .print(&document)
            .expect("Failed to print to file");

        let written = fs::read_to_string(&path).expect("Failed to read printed file");
        assert_eq!(written, document);
        let _ = fs::remove_file(&path);
    }

    #[cfg(unix)]
    #[test]
    fn test_command_printer_reports_early_hangup() {
        // `true` exits without reading, so a document larger than the pipe
        // buffer cannot be written in full
        let mut printer = CommandPrinter::new("true");
        let document = "- 1 oz Lime juice\n".repeat(64 * 1024);

        let result = printer.print(&document);

        match result {
            Err(BarcartError::Io(err)) => {
                assert_eq!(err.kind(), std::io::ErrorKind::BrokenPipe)
            }
            other => panic!("Expected broken pipe, got {:?}", other),
        }
    }

    #[cfg(unix)]
    #[test]
    fn test_command_printer_reports_exit_status() {
        let mut printer = CommandPrinter::new("false");

        let result = printer.print("");

        match result {
            Err(BarcartError::PrintCommand { program, status }) => {
                assert_eq!(program, "false");
                assert!(!status.success());
            }
            other => panic!("Expected PrintCommand error, got {:?}", other),
        }
    }

    #[test]
    fn test_command_printer_missing_program_fails() {
        let mut printer = CommandPrinter::new("barcart-no-such-spooler --now");

        let result = printer.print("anything");

        assert!(matches!(result, Err(BarcartError::Io(_))));
    }
}
