use crate::error::StoreError;
use crate::order::Order;
use std::collections::HashMap;

/// Persistence contract for orders. Implementations report their own
/// connection state; `save` and `get_order` only succeed while connected.
pub trait OrderStore {
    fn is_connected(&self) -> bool;
    fn connect(&mut self) -> Result<(), StoreError>;
    /// Persists the order, replacing any previous record with the same id.
    fn save(&mut self, order: &Order) -> Result<(), StoreError>;
    fn get_order(&self, id: u32) -> Result<Option<Order>, StoreError>;
}

/// Hash-map backed store with a simulated connection.
pub struct InMemoryStore {
    connected: bool,
    orders: HashMap<u32, Order>,
}

impl InMemoryStore {
    /// Creates a store that still needs `connect` before use.
    pub fn new() -> Self {
        Self {
            connected: false,
            orders: HashMap::new(),
        }
    }

    /// Creates a store that is already connected.
    pub fn connected() -> Self {
        Self {
            connected: true,
            orders: HashMap::new(),
        }
    }
}

impl Default for InMemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl OrderStore for InMemoryStore {
    fn is_connected(&self) -> bool {
        self.connected
    }

    fn connect(&mut self) -> Result<(), StoreError> {
        self.connected = true;
        Ok(())
    }

    fn save(&mut self, order: &Order) -> Result<(), StoreError> {
        if !self.connected {
            return Err(StoreError::NotConnected);
        }
        self.orders.insert(order.id, order.clone());
        Ok(())
    }

    fn get_order(&self, id: u32) -> Result<Option<Order>, StoreError> {
        if !self.connected {
            return Err(StoreError::NotConnected);
        }
        Ok(self.orders.get(&id).cloned())
    }
}
