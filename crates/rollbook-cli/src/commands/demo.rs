//! Demo roster command
//!
//! Usage: rollbook demo [--db <PATH>]
//!
//! Materializes the Student schema into a fresh store, commits the two
//! sample students in one batch, and prints the read-back.

use clap::Args;
use std::path::PathBuf;

use chrono::{DateTime, TimeZone, Utc};
use rollbook_core::model::Student;
use rollbook_core::schema::student_table;
use rollbook_store::Store;

#[derive(Debug, Args)]
pub struct DemoArgs {
    /// Path to a fresh SQLite file; defaults to an in-memory store
    #[arg(long)]
    pub db: Option<PathBuf>,
}

/// Execute demo command
pub fn execute(args: DemoArgs) -> Result<(), Box<dyn std::error::Error>> {
    let mut store = match &args.db {
        Some(path) => Store::at_path(path)?,
        None => Store::in_memory()?,
    };
    store.materialize(&student_table())?;

    let albert_einstein = Student::new("Albert Einstein", "albert.einstein@zurich.edu", 6)
        .with_birthday(date(1879, 3, 14)?);
    let alan_turing = Student::new("Alan Turing", "alan.turing@sherborne.edu", 11)
        .with_birthday(date(1912, 6, 23)?);

    store.add([albert_einstein, alan_turing])?;
    let persisted = store.commit()?;

    if let Some(id) = persisted.first().and_then(|s| s.id) {
        println!("New student ID is {}.", id);
    }

    for student in store.list_students()? {
        println!("{}", student);
    }

    Ok(())
}

fn date(year: i32, month: u32, day: u32) -> Result<DateTime<Utc>, Box<dyn std::error::Error>> {
    Utc.with_ymd_and_hms(year, month, day, 0, 0, 0)
        .single()
        .ok_or_else(|| format!("invalid date {}-{}-{}", year, month, day).into())
}
