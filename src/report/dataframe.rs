use polars::prelude::*;

use super::Report;

impl Report {
    /// Converts the records into a two-column `DataFrame` (`headline`, `sentiment`).
    ///
    /// # Errors
    ///
    /// Returns a `PolarsError` if the frame cannot be assembled.
    pub fn to_dataframe(&self) -> PolarsResult<DataFrame> {
        let headlines: Vec<&str> = self.records.iter().map(|r| r.headline.as_str()).collect();
        let sentiments: Vec<&str> = self.records.iter().map(|r| r.sentiment.as_str()).collect();
        df!(
            "headline" => headlines,
            "sentiment" => sentiments,
        )
    }
}
