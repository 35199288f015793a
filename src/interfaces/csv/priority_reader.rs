use crate::domain::priority::{PriorityEntry, PriorityList};
use crate::error::{CustomizationError, Result};
use std::io::Read;

/// Reads a merchant priority list from a CSV source with `name,priority` columns.
///
/// Wraps `csv::Reader` with whitespace trimming and flexible record lengths,
/// yielding rows lazily in file order.
pub struct PriorityReader<R: Read> {
    reader: csv::Reader<R>,
}

impl<R: Read> PriorityReader<R> {
    /// Creates a new `PriorityReader` from any `Read` source (e.g., File, Stdin).
    pub fn new(source: R) -> Self {
        let reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .flexible(true)
            .from_reader(source);
        Self { reader }
    }

    /// Returns an iterator that lazily reads and deserializes entries.
    pub fn entries(self) -> impl Iterator<Item = Result<PriorityEntry>> {
        self.reader
            .into_deserialize()
            .map(|result| result.map_err(CustomizationError::from))
    }

    /// Reads every row, stopping at the first malformed one.
    pub fn into_priority_list(self) -> Result<PriorityList> {
        self.entries().collect()
    }
}
