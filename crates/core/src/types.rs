/// All database primary keys are SQLite INTEGER rowids.
pub type DbId = i64;

/// Calendar dates (due dates, payment dates) carry no time or zone.
pub type Date = chrono::NaiveDate;
