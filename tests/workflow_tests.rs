use orderflow::error::NotifyError;
use orderflow::notifier::{ConsoleNotifier, Notifier};
use orderflow::order::Order;
use orderflow::processor::OrderProcessor;
use orderflow::store::{InMemoryStore, OrderStore};
use rust_decimal_macros::dec;

struct FailingNotifier;

impl Notifier for FailingNotifier {
    fn send_order_confirmation(&mut self, _email: &str, _order_id: u32) -> Result<(), NotifyError> {
        Err(NotifyError("delivery refused".to_string()))
    }
}

#[derive(Default)]
struct RecordingNotifier {
    sent: Vec<(String, u32)>,
}

impl Notifier for RecordingNotifier {
    fn send_order_confirmation(&mut self, email: &str, order_id: u32) -> Result<(), NotifyError> {
        self.sent.push((email.to_string(), order_id));
        Ok(())
    }
}

#[test]
fn test_processor_connects_store_on_first_order() {
    let mut processor = OrderProcessor::new(InMemoryStore::new(), ConsoleNotifier::new());
    let mut order = Order::new(1, "test@mail.com", dec!(50));

    assert!(!processor.store().is_connected());
    assert!(processor.process_order(&mut order));

    assert!(processor.store().is_connected());
    assert_eq!(processor.store().get_order(1).unwrap().unwrap().id, 1);
}

#[test]
fn test_store_holds_pre_finalize_copy() {
    let mut processor = OrderProcessor::new(InMemoryStore::connected(), ConsoleNotifier::new());
    let mut order = Order::new(7, "buyer@mail.com", dec!(150));

    assert!(processor.process_order(&mut order));

    // The save happens before the flag is set, so the stored record still
    // shows the order as pending.
    assert!(order.is_processed);
    let stored = processor.store().get_order(7).unwrap().unwrap();
    assert!(!stored.is_processed);
}

#[test]
fn test_reprocessing_saves_latest_state() {
    let mut processor = OrderProcessor::new(InMemoryStore::connected(), ConsoleNotifier::new());
    let mut order = Order::new(3, "test@mail.com", dec!(80));

    assert!(processor.process_order(&mut order));
    assert!(processor.process_order(&mut order));

    // The second run saved the already-marked order over the first copy.
    let stored = processor.store().get_order(3).unwrap().unwrap();
    assert!(stored.is_processed);
}

#[test]
fn test_failed_notification_keeps_saved_order() {
    let mut processor = OrderProcessor::new(InMemoryStore::connected(), FailingNotifier);
    let mut order = Order::new(9, "buyer@mail.com", dec!(500));

    assert!(!processor.process_order(&mut order));

    // No rollback: the order stays saved, only the flag reports the failure.
    assert!(!order.is_processed);
    assert!(processor.store().get_order(9).unwrap().is_some());
}

#[test]
fn test_mixed_batch_final_state() {
    let mut processor =
        OrderProcessor::new(InMemoryStore::connected(), RecordingNotifier::default());
    let mut orders = vec![
        Order::new(1, "alice@example.com", dec!(50)),
        Order::new(2, "bob@example.com", dec!(150)),
        Order::new(3, "carol@example.com", dec!(100)),
        Order::new(4, "dave@example.com", dec!(0)),
        Order::new(5, "erin@example.com", dec!(-5)),
    ];

    let results: Vec<bool> = orders
        .iter_mut()
        .map(|order| processor.process_order(order))
        .collect();

    assert_eq!(results, vec![true, true, true, false, false]);
    assert_eq!(
        processor.notifier().sent,
        vec![("bob@example.com".to_string(), 2)]
    );

    // Only the processed orders made it into the store.
    for id in [1, 2, 3] {
        assert!(processor.store().get_order(id).unwrap().is_some());
    }
    for id in [4, 5] {
        assert!(processor.store().get_order(id).unwrap().is_none());
    }
}
