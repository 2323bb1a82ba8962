//! Day identities and the physical-slot lookup table.
//!
//! Days are a fixed, ordered set (Sunday first). Which day sits in which
//! physical column is a property of the table layout, never of the image:
//! the timetables this crate targets are written right-to-left, so the
//! leftmost column is the last day.

use crate::boundaries::DAY_COLUMNS;
use serde::{Deserialize, Serialize};

/// Logical day of the week, in timetable order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum DaySlot {
    Sunday,
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
}

impl DaySlot {
    pub const ALL: [DaySlot; DAY_COLUMNS] = [
        DaySlot::Sunday,
        DaySlot::Monday,
        DaySlot::Tuesday,
        DaySlot::Wednesday,
        DaySlot::Thursday,
        DaySlot::Friday,
        DaySlot::Saturday,
    ];

    /// Logical index, 0 for Sunday through 6 for Saturday.
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn from_index(index: usize) -> Option<DaySlot> {
        Self::ALL.get(index).copied()
    }

    pub fn english_name(self) -> &'static str {
        match self {
            DaySlot::Sunday => "Sunday",
            DaySlot::Monday => "Monday",
            DaySlot::Tuesday => "Tuesday",
            DaySlot::Wednesday => "Wednesday",
            DaySlot::Thursday => "Thursday",
            DaySlot::Friday => "Friday",
            DaySlot::Saturday => "Saturday",
        }
    }

    /// Name as printed in the header of the source timetables.
    pub fn arabic_name(self) -> &'static str {
        match self {
            DaySlot::Sunday => "الأحد",
            DaySlot::Monday => "الاثنين",
            DaySlot::Tuesday => "الثلاثاء",
            DaySlot::Wednesday => "الأربعاء",
            DaySlot::Thursday => "الخميس",
            DaySlot::Friday => "الجمعة",
            DaySlot::Saturday => "السبت",
        }
    }
}

impl std::fmt::Display for DaySlot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.english_name())
    }
}

/// Reading direction of the day columns.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum TableDirection {
    /// First day in the rightmost day column.
    #[default]
    RightToLeft,
    /// First day in the leftmost day column.
    LeftToRight,
}

/// Physical column index → logical day.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DayLayout {
    slots: [DaySlot; DAY_COLUMNS],
}

impl DayLayout {
    pub fn new(direction: TableDirection) -> Self {
        let slots = match direction {
            TableDirection::LeftToRight => DaySlot::ALL,
            TableDirection::RightToLeft => {
                std::array::from_fn(|p| DaySlot::ALL[DAY_COLUMNS - 1 - p])
            }
        };
        Self { slots }
    }

    /// Day shown in physical column `physical` (0 = leftmost).
    ///
    /// # Panics
    /// If `physical >= 7`.
    pub fn day_at(&self, physical: usize) -> DaySlot {
        self.slots[physical]
    }

    /// Physical column holding `day`.
    pub fn physical_of(&self, day: DaySlot) -> usize {
        self.slots
            .iter()
            .position(|&d| d == day)
            .unwrap_or(day.index())
    }

    pub fn slots(&self) -> &[DaySlot; DAY_COLUMNS] {
        &self.slots
    }
}

impl Default for DayLayout {
    fn default() -> Self {
        Self::new(TableDirection::default())
    }
}
