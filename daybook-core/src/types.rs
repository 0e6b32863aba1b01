//! Core domain types for daybook
//!
//! | Term | Definition |
//! |------|------------|
//! | **Record** | One persisted fact entered by the user, tagged with its creation date |
//! | **Diary entry** | A free-text note, stored in the `diary` table |
//! | **Savings** | An amount put aside, stored in the `savings` table |
//!
//! Records are append-only: once saved they are never edited or deleted.

use crate::db::Database;
use crate::error::Result;
use chrono::{Local, NaiveDate};
use rusqlite::params;

/// Today's date on the host's local calendar
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// A single user record waiting to be persisted
#[derive(Debug, Clone, PartialEq)]
pub enum Record {
    /// Free-text diary entry (may be empty)
    Diary { date: NaiveDate, entry: String },
    /// Amount saved; not validated
    Savings { date: NaiveDate, amount: f64 },
}

impl Record {
    /// Diary entry stamped with today's date
    pub fn diary(entry: impl Into<String>) -> Self {
        Self::dated_diary(today(), entry)
    }

    /// Savings amount stamped with today's date
    pub fn savings(amount: f64) -> Self {
        Self::dated_savings(today(), amount)
    }

    pub fn dated_diary(date: NaiveDate, entry: impl Into<String>) -> Self {
        Record::Diary {
            date,
            entry: entry.into(),
        }
    }

    pub fn dated_savings(date: NaiveDate, amount: f64) -> Self {
        Record::Savings { date, amount }
    }

    /// Creation date of the record
    pub fn date(&self) -> NaiveDate {
        match self {
            Record::Diary { date, .. } | Record::Savings { date, .. } => *date,
        }
    }

    /// Table the record is stored in
    pub fn table(&self) -> &'static str {
        match self {
            Record::Diary { .. } => "diary",
            Record::Savings { .. } => "savings",
        }
    }

    /// Insert the record, returning its new row id
    ///
    /// Dates are stored as ISO-8601 (`YYYY-MM-DD`).
    pub fn save(&self, db: &Database) -> Result<i64> {
        let id = match self {
            Record::Diary { date, entry } => db.insert(
                "INSERT INTO diary (date, entry) VALUES (?1, ?2)",
                params![date.to_string(), entry],
            )?,
            Record::Savings { date, amount } => db.insert(
                "INSERT INTO savings (date, amount) VALUES (?1, ?2)",
                params![date.to_string(), amount],
            )?,
        };

        tracing::info!(table = self.table(), id, date = %self.date(), "Record saved");
        Ok(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn memory_db() -> Database {
        let db = Database::open_in_memory().unwrap();
        db.initialize().unwrap();
        db
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_constructors_stamp_today() {
        let before = today();
        let record = Record::diary("hello");
        let after = today();

        assert!(record.date() == before || record.date() == after);
        assert!(Record::savings(3.0).date() >= before);
    }

    #[test]
    fn test_table_per_variant() {
        assert_eq!(Record::diary("x").table(), "diary");
        assert_eq!(Record::savings(1.0).table(), "savings");
    }

    #[test]
    fn test_save_diary_entry() {
        let db = memory_db();
        Record::dated_diary(date(2024, 3, 9), "Went hiking")
            .save(&db)
            .unwrap();

        let mut lines = Vec::new();
        db.visit_diary(|d, e| {
            lines.push(format!("{d} - {e}"));
            Ok(())
        })
        .unwrap();
        assert_eq!(lines, ["2024-03-09 - Went hiking"]);
    }

    #[test]
    fn test_save_empty_diary_entry() {
        let db = memory_db();
        Record::diary("").save(&db).unwrap();
        assert_eq!(db.visit_diary(|_, _| Ok(())).unwrap(), 1);
    }

    #[test]
    fn test_save_savings_returns_ids() {
        let db = memory_db();
        let first = Record::savings(12.5).save(&db).unwrap();
        let second = Record::savings(-2.0).save(&db).unwrap();

        assert!(second > first);
        assert_eq!(db.total_savings().unwrap(), Some(10.5));
    }

    #[test]
    fn test_save_without_tables_fails() {
        let db = Database::open_in_memory().unwrap();
        assert!(Record::diary("lost").save(&db).is_err());
        assert!(Record::savings(1.0).save(&db).is_err());
    }
}
