pub mod rainfall;
pub mod series;
pub mod station;
pub mod table;
pub mod timestamp;

pub use rainfall::{RainfallRow, RainfallTable};
pub use series::{SeriesFile, StationSeries};
pub use station::{CoordinateTable, StationCoordinate};
pub use table::{Table, TableRow};
pub use timestamp::{normalize_timestamp, NormalizedTimestamp};
