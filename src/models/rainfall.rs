use crate::models::NormalizedTimestamp;

/// One timestamped row of hourly rainfall, one value per station column.
#[derive(Debug, Clone, PartialEq)]
pub struct RainfallRow {
    pub line: u64,
    pub timestamp: NormalizedTimestamp,
    pub values: Vec<f64>,
}

/// Validated rainfall table: station names from the header and the rows in file order.
#[derive(Debug, Clone)]
pub struct RainfallTable {
    pub station_names: Vec<String>,
    pub rows: Vec<RainfallRow>,
}

impl RainfallTable {
    pub fn new(station_names: Vec<String>, rows: Vec<RainfallRow>) -> Self {
        Self {
            station_names,
            rows,
        }
    }

    pub fn station_count(&self) -> usize {
        self.station_names.len()
    }

    pub fn time_steps(&self) -> usize {
        self.rows.len()
    }

    pub fn first_timestamp(&self) -> Option<NormalizedTimestamp> {
        self.rows.first().map(|r| r.timestamp)
    }

    pub fn last_timestamp(&self) -> Option<NormalizedTimestamp> {
        self.rows.last().map(|r| r.timestamp)
    }

    /// Values of one station column, in row order.
    pub fn column(&self, index: usize) -> impl Iterator<Item = f64> + '_ {
        self.rows
            .iter()
            .filter_map(move |row| row.values.get(index).copied())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(line: u64, ts: &str, values: Vec<f64>) -> RainfallRow {
        RainfallRow {
            line,
            timestamp: NormalizedTimestamp::parse(ts).unwrap(),
            values,
        }
    }

    #[test]
    fn test_columns_and_bounds() {
        let table = RainfallTable::new(
            vec!["A".to_string(), "B".to_string()],
            vec![
                row(2, "01/06/2024 00:00", vec![5.0, 0.1]),
                row(3, "01/06/2024 01:00", vec![0.0, 2.5]),
            ],
        );

        assert_eq!(table.station_count(), 2);
        assert_eq!(table.time_steps(), 2);
        assert_eq!(table.column(1).collect::<Vec<_>>(), vec![0.1, 2.5]);
        assert_eq!(
            table.first_timestamp().unwrap().to_string(),
            "2024 06 01 0 0 0"
        );
        assert_eq!(
            table.last_timestamp().unwrap().to_string(),
            "2024 06 01 1 0 0"
        );
    }
}
