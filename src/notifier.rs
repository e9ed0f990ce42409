use crate::error::NotifyError;
use tracing::info;

/// Customer messaging contract. The processor sends at most one
/// confirmation per order and treats delivery as all-or-nothing.
pub trait Notifier {
    fn send_order_confirmation(&mut self, email: &str, order_id: u32) -> Result<(), NotifyError>;
}

/// Notifier that reports confirmations through the logging pipeline
/// instead of a real delivery channel.
pub struct ConsoleNotifier;

impl ConsoleNotifier {
    pub fn new() -> Self {
        Self
    }
}

impl Default for ConsoleNotifier {
    fn default() -> Self {
        Self::new()
    }
}

impl Notifier for ConsoleNotifier {
    fn send_order_confirmation(&mut self, email: &str, order_id: u32) -> Result<(), NotifyError> {
        info!(to = %email, order_id, "order confirmation sent");
        Ok(())
    }
}
