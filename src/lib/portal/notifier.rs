use std::io::{self, BufRead, Write};

use log::{info, warn};

/// A trait, necessary for every entity that shows blocking messages to the user
/// and asks them for confirmation.
pub trait Notifier {
    fn alert(&self, message: &str);
    fn confirm(&self, question: &str) -> bool;
}

impl<T: Notifier + ?Sized> Notifier for &T {
    fn alert(&self, message: &str) {
        (**self).alert(message)
    }

    fn confirm(&self, question: &str) -> bool {
        (**self).confirm(question)
    }
}

/// Prints alerts to stderr and reads `y/N` answers from stdin.
pub struct ConsoleNotifier {
    pub assume_yes: bool,
}

impl Notifier for ConsoleNotifier {
    fn alert(&self, message: &str) {
        warn!("Alert: {}", message);
        eprintln!("{}", message);
    }

    fn confirm(&self, question: &str) -> bool {
        if self.assume_yes {
            info!("Confirmed without asking: {}", question);
            return true;
        }
        eprint!("{} [y/N] ", question);
        let _ = io::stderr().flush();
        let mut answer = String::new();
        if io::stdin().lock().read_line(&mut answer).is_err() {
            return false;
        }
        matches!(answer.trim().to_lowercase().as_str(), "y" | "yes" | "s" | "si" | "sí")
    }
}
