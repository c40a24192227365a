use crate::table::AirportTable;

/// Computes great-circle distances between airports of a table, by code.
#[derive(Clone, Copy, Debug)]
pub struct DistanceCalculator<'a> {
    table: &'a AirportTable,
}

impl<'a> DistanceCalculator<'a> {
    pub fn new(table: &'a AirportTable) -> Self {
        DistanceCalculator { table }
    }

    pub fn table(&self) -> &'a AirportTable {
        self.table
    }

    /// Distance in miles between `origin` and `destination`.
    ///
    /// Returns `None` when either code is not in the table. Both codes are always looked up,
    /// so the result does not depend on argument order.
    pub fn distance_miles(&self, origin: &str, destination: &str) -> Option<f64> {
        let origin = self.table.lookup(origin)?;
        let destination = self.table.lookup(destination)?;

        Some(origin.distance_miles_to(destination))
    }
}

impl Default for DistanceCalculator<'static> {
    fn default() -> Self {
        DistanceCalculator::new(crate::airports())
    }
}
