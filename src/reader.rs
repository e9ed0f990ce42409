use crate::error::RecordError;
use crate::order::Order;
use std::io::Read;

pub struct OrderReader<R: Read> {
    reader: csv::Reader<R>,
}

impl<R: Read> OrderReader<R> {
    pub fn new(source: R) -> Self {
        let reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .flexible(true)
            .from_reader(source);
        Self { reader }
    }

    pub fn orders(self) -> impl Iterator<Item = Result<Order, RecordError>> {
        self.reader
            .into_deserialize()
            .map(|result| result.map_err(RecordError::from))
    }
}
