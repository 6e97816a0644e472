//! Spreadsheet-friendly CSV output

use std::fs::File;
use std::io::Write;
use std::path::Path;

use chrono::NaiveDate;
use log::info;
use rust_decimal::Decimal;
use serde::Serialize;

use super::ExportError;
use crate::schedule::{Period, Schedule};

/// One CSV line; header names match `COLUMNS`
#[derive(Debug, Serialize)]
struct CsvRow<'a> {
    #[serde(rename = "Period")]
    period: u32,
    #[serde(rename = "Date")]
    date: NaiveDate,
    #[serde(rename = "Description")]
    description: &'a str,
    #[serde(rename = "Amortization Expense")]
    expense: Decimal,
    #[serde(rename = "Accumulated Amortization")]
    accumulated: Decimal,
    #[serde(rename = "Book Value")]
    book_value: Decimal,
}

impl<'a> From<&'a Period> for CsvRow<'a> {
    fn from(p: &'a Period) -> Self {
        Self {
            period: p.period,
            date: p.date,
            description: p.description(),
            expense: p.expense,
            accumulated: p.accumulated,
            book_value: p.book_value,
        }
    }
}

/// Write the schedule to any writer, one record per period.
///
/// Amounts are plain decimal text so spreadsheet formulas can use them.
pub fn write_csv<W: Write>(schedule: &Schedule, writer: W) -> Result<(), ExportError> {
    let mut csv_writer = ::csv::Writer::from_writer(writer);
    for period in schedule.periods() {
        csv_writer.serialize(CsvRow::from(period))?;
    }
    csv_writer.flush()?;
    Ok(())
}

/// Write the schedule to a CSV file at `path`
pub fn export_csv_file<P: AsRef<Path>>(schedule: &Schedule, path: P) -> Result<(), ExportError> {
    let path = path.as_ref();
    let file = File::create(path)?;
    write_csv(schedule, file)?;
    info!("Wrote {} rows to {}", schedule.periods().len(), path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schedule::{compute_schedule, Method, COLUMNS};
    use rust_decimal_macros::dec;

    fn schedule() -> Schedule {
        compute_schedule(
            dec!(1500),
            dec!(300),
            NaiveDate::from_ymd_opt(2024, 1, 31).unwrap(),
            NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
            Method::SumOfYearsDigits,
        )
        .unwrap()
    }

    #[test]
    fn test_csv_layout() {
        let mut buf = Vec::new();
        write_csv(&schedule(), &mut buf).unwrap();
        let text = String::from_utf8(buf).unwrap();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[0], COLUMNS.join(","));
        assert_eq!(lines[1], "0,2024-01-31,Initial Value,0.00,0.00,1500.00");
        // 1200 over 3 months: 600 / 400 / 200
        assert_eq!(lines[2], "1,2024-01-31,Amortization,600.00,600.00,900.00");
        assert_eq!(lines[3], "2,2024-02-29,Amortization,400.00,1000.00,500.00");
        assert_eq!(lines[4], "3,2024-03-31,Amortization,200.00,1200.00,300.00");
        assert_eq!(lines.len(), 5);
    }

    #[test]
    fn test_csv_reads_back_as_numbers() {
        let mut buf = Vec::new();
        write_csv(&schedule(), &mut buf).unwrap();

        let mut reader = ::csv::Reader::from_reader(buf.as_slice());
        let books: Vec<Decimal> = reader
            .records()
            .map(|r| r.unwrap()[5].parse::<Decimal>().unwrap())
            .collect();
        assert_eq!(books, vec![dec!(1500), dec!(900), dec!(500), dec!(300)]);
    }

    #[test]
    fn test_export_to_file() {
        let path = std::env::temp_dir().join(format!("schedule_export_{}.csv", std::process::id()));
        export_csv_file(&schedule(), &path).unwrap();
        let text = std::fs::read_to_string(&path).unwrap();
        std::fs::remove_file(&path).ok();
        assert_eq!(text.lines().count(), 5);
    }
}
