pub mod error;
pub mod notifier;
pub mod order;
pub mod processor;
pub mod reader;
pub mod store;
pub mod writer;
