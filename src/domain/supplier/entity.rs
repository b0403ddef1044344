//! Supplier entity as consumed by the scheduling engine.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

use crate::domain::foundation::{SupplierId, Timestamp, ValidationError};

/// Whether a supplier currently takes part in ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum SupplierStatus {
    #[default]
    Active,
    Inactive,
}

/// How a supplier's recurring order days are expressed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScheduleMode {
    /// Days of the week, Sunday = 0 through Saturday = 6.
    ByWeekday,
    /// Days of the month, 1 through 31.
    ByMonthDay,
}

/// How often a nominal order day turns into a reminder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ReminderPolicy {
    /// Every nominal order day is reminded on its own.
    #[default]
    EachOccurrence,
    /// One reminder per calendar week, silenced once any order exists that week.
    WeeklyUntilFulfilled,
}

impl fmt::Display for ReminderPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ReminderPolicy::EachOccurrence => "EachOccurrence",
            ReminderPolicy::WeeklyUntilFulfilled => "WeeklyUntilFulfilled",
        };
        write!(f, "{}", s)
    }
}

/// A supplier with its recurring order schedule.
///
/// `schedule_mode` selects which of `weekdays` / `month_days` is consulted.
/// A mode whose day set is empty, or no mode at all, means the supplier is
/// never scheduled.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Supplier {
    pub id: SupplierId,
    pub name: String,
    #[serde(default)]
    pub status: SupplierStatus,
    #[serde(default)]
    pub schedule_mode: Option<ScheduleMode>,
    #[serde(default)]
    pub weekdays: BTreeSet<u8>,
    #[serde(default)]
    pub month_days: BTreeSet<u8>,
    #[serde(default)]
    pub reminder_policy: ReminderPolicy,
    /// Set when the supplier has been soft-deleted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deleted_at: Option<Timestamp>,
}

impl Supplier {
    /// Creates an active supplier ordering on the given weekdays.
    ///
    /// # Errors
    ///
    /// - `EmptyField` if the name is blank
    /// - `OutOfRange` if a weekday is not in 0..=6
    pub fn by_weekday(
        id: SupplierId,
        name: impl Into<String>,
        weekdays: impl IntoIterator<Item = u8>,
        reminder_policy: ReminderPolicy,
    ) -> Result<Self, ValidationError> {
        let supplier = Self {
            id,
            name: name.into(),
            status: SupplierStatus::Active,
            schedule_mode: Some(ScheduleMode::ByWeekday),
            weekdays: weekdays.into_iter().collect(),
            month_days: BTreeSet::new(),
            reminder_policy,
            deleted_at: None,
        };
        supplier.validate()?;
        Ok(supplier)
    }

    /// Creates an active supplier ordering on the given days of the month.
    ///
    /// # Errors
    ///
    /// - `EmptyField` if the name is blank
    /// - `OutOfRange` if a day is not in 1..=31
    pub fn by_month_day(
        id: SupplierId,
        name: impl Into<String>,
        month_days: impl IntoIterator<Item = u8>,
        reminder_policy: ReminderPolicy,
    ) -> Result<Self, ValidationError> {
        let supplier = Self {
            id,
            name: name.into(),
            status: SupplierStatus::Active,
            schedule_mode: Some(ScheduleMode::ByMonthDay),
            weekdays: BTreeSet::new(),
            month_days: month_days.into_iter().collect(),
            reminder_policy,
            deleted_at: None,
        };
        supplier.validate()?;
        Ok(supplier)
    }

    /// Returns a copy with the given status.
    pub fn with_status(mut self, status: SupplierStatus) -> Self {
        self.status = status;
        self
    }

    /// Returns a soft-deleted copy.
    pub fn deleted(mut self, at: Timestamp) -> Self {
        self.deleted_at = Some(at);
        self
    }

    /// Checks field ranges. An empty day set is not an error.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.name.trim().is_empty() {
            return Err(ValidationError::empty_field("name"));
        }
        if let Some(day) = self.weekdays.iter().find(|d| **d > 6) {
            return Err(ValidationError::out_of_range("weekdays", 0, 6, i32::from(*day)));
        }
        if let Some(day) = self.month_days.iter().find(|d| **d == 0 || **d > 31) {
            return Err(ValidationError::out_of_range("month_days", 1, 31, i32::from(*day)));
        }
        Ok(())
    }

    /// True if the supplier may produce obligations at all.
    pub fn is_schedulable(&self) -> bool {
        self.status == SupplierStatus::Active && self.deleted_at.is_none()
    }
}
