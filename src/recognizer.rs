//! Boundary with the external text recognizer.
//!
//! The recognizer reads course codes and times out of one cropped column
//! and knows nothing about days. The day is attached here, from the
//! column's position in the grid.

use crate::columns::ColumnGrid;
use crate::days::DaySlot;
use crate::image::RgbImageBuf;
use log::{debug, warn};
use serde::{Deserialize, Serialize};
use std::fmt;

/// One class block as read by the recognizer; carries no day.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct RawEntry {
    pub course_code: String,
    pub start_time: String,
    pub end_time: String,
}

/// A recognized class block stamped with the day of its column.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ScheduleEntry {
    pub course_code: String,
    pub day: DaySlot,
    pub start_time: String,
    pub end_time: String,
}

impl ScheduleEntry {
    pub fn from_raw(raw: RawEntry, day: DaySlot) -> Self {
        Self {
            course_code: raw.course_code,
            day,
            start_time: raw.start_time,
            end_time: raw.end_time,
        }
    }
}

/// Reads class entries out of a single cropped day column.
pub trait ColumnRecognizer {
    type Error;

    fn recognize(&mut self, column: &RgbImageBuf) -> Result<Vec<RawEntry>, Self::Error>;
}

/// What came out of feeding a grid to the recognizer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ReadOutcome {
    /// Entries from every readable active column, in physical column order.
    Entries(Vec<ScheduleEntry>),
    /// No column was flagged as holding content; the caller should fall back.
    NoActiveColumns,
    /// Active columns existed but none of them yielded an entry; the caller
    /// should fall back.
    NoEntries,
}

/// Feed each non-empty column of `grid` to `recognizer` and stamp every
/// returned entry with that column's day.
///
/// A column the recognizer fails on is logged and read as empty; the
/// remaining columns are still read.
pub fn read_schedule<R>(grid: &ColumnGrid, recognizer: &mut R) -> ReadOutcome
where
    R: ColumnRecognizer,
    R::Error: fmt::Display,
{
    let mut entries = Vec::new();
    let mut active = 0usize;
    for column in grid.active_columns() {
        active += 1;
        let raw = match recognizer.recognize(&column.image) {
            Ok(raw) => raw,
            Err(err) => {
                warn!(
                    "read_schedule day={} slot={} recognizer failed: {}",
                    column.day, column.physical_index, err
                );
                continue;
            }
        };
        debug!("read_schedule day={} entries={}", column.day, raw.len());
        entries.extend(raw.into_iter().map(|r| ScheduleEntry::from_raw(r, column.day)));
    }
    if active == 0 {
        return ReadOutcome::NoActiveColumns;
    }
    if entries.is_empty() {
        debug!("read_schedule active={} but no entries read", active);
        return ReadOutcome::NoEntries;
    }
    ReadOutcome::Entries(entries)
}
