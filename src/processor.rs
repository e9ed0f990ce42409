use crate::error::{ProcessingError, StoreError};
use crate::notifier::Notifier;
use crate::order::Order;
use crate::store::OrderStore;
use rust_decimal::Decimal;
use tracing::warn;

/// Orders strictly above this amount trigger a confirmation email.
const CONFIRMATION_THRESHOLD: Decimal = Decimal::ONE_HUNDRED;

/// Coordinates the order workflow across its two collaborators.
///
/// The processor owns its store and notifier for its whole lifetime. Each
/// `process_order` call runs the same linear sequence and reports the
/// outcome as a single boolean.
pub struct OrderProcessor<S: OrderStore, N: Notifier> {
    store: S,
    notifier: N,
}

impl<S: OrderStore, N: Notifier> OrderProcessor<S, N> {
    pub fn new(store: S, notifier: N) -> Self {
        Self { store, notifier }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn notifier(&self) -> &N {
        &self.notifier
    }

    /// Processes a single order and reports whether it completed.
    ///
    /// Orders without a strictly positive amount are rejected outright.
    /// For the rest the processor ensures the store connection and
    /// persists the order, then sends a confirmation when the amount
    /// exceeds the notification threshold. On success the order is marked
    /// processed. Any collaborator failure stops the sequence, leaves the
    /// flag untouched, and yields `false`; the cause is logged at `warn`.
    pub fn process_order(&mut self, order: &mut Order) -> bool {
        if order.total_amount <= Decimal::ZERO {
            return false;
        }

        match self.persist_and_notify(order) {
            Ok(()) => {
                order.is_processed = true;
                true
            }
            Err(e) => {
                warn!(order_id = order.id, error = %e, "order processing failed");
                false
            }
        }
    }

    /// The fallible part of the run. The first error stops the sequence.
    fn persist_and_notify(&mut self, order: &Order) -> Result<(), ProcessingError> {
        self.ensure_connection()?;
        self.store.save(order)?;

        if should_send_confirmation(order.total_amount) {
            self.notifier
                .send_order_confirmation(&order.customer_email, order.id)?;
        }

        Ok(())
    }

    fn ensure_connection(&mut self) -> Result<(), StoreError> {
        if !self.store.is_connected() {
            self.store.connect()?;
        }
        Ok(())
    }
}

fn should_send_confirmation(amount: Decimal) -> bool {
    amount > CONFIRMATION_THRESHOLD
}
