#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Success,
    Error,
    Neutral,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub message: String,
    pub severity: Severity,
}

/// Destination for user-facing messages
///
/// Notifications are cosmetic. Nothing reads them back to make decisions.
pub trait Notifier {
    fn notify(&mut self, message: &str, severity: Severity);
}

/// Collects notifications in order, handy wherever nothing is drawn
impl Notifier for Vec<Notification> {
    fn notify(&mut self, message: &str, severity: Severity) {
        self.push(Notification {
            message: message.to_string(),
            severity,
        });
    }
}
