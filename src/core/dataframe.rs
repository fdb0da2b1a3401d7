use polars::prelude::*;

/// Trait for converting annotated news into Polars DataFrames.
///
/// Gives the export collaborators a columnar view without going through CSV.
pub trait ToDataFrame {
    /// Converts the object into a Polars DataFrame.
    fn to_dataframe(&self) -> PolarsResult<DataFrame>;
}
