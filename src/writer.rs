use crate::error::RecordError;
use crate::order::Order;
use std::io::Write;

pub struct OrderWriter<W: Write> {
    writer: csv::Writer<W>,
}

impl<W: Write> OrderWriter<W> {
    pub fn new(sink: W) -> Self {
        Self {
            writer: csv::Writer::from_writer(sink),
        }
    }

    pub fn write_orders(
        &mut self,
        orders: impl IntoIterator<Item = Order>,
    ) -> Result<(), RecordError> {
        for mut order in orders {
            // Normalize so 50.0 and 50.00 both print as 50.
            order.total_amount = order.total_amount.normalize();
            self.writer.serialize(order)?;
        }
        self.writer.flush()?;
        Ok(())
    }
}
