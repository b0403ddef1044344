//! Immutable snapshots published by the projection store.

use chrono::NaiveDate;
use serde::Serialize;

use crate::domain::calendar::DateWindow;
use crate::domain::scheduling::{summarize, Obligation, ObligationSummary};

/// Load state of the store as seen by the UI.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum StoreStatus {
    /// Nothing fetched yet.
    Idle,
    /// A window fetch is in flight.
    Loading,
    /// Obligations reflect the latest fetched data.
    Ready,
    /// The last fetch failed; obligations are from the previous success.
    Failed { message: String },
}

/// Everything the UI reads, replaced as a whole on every publish.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectionSnapshot {
    pub window: DateWindow,
    pub today: NaiveDate,
    /// Laid-out obligations for `window`.
    pub calendar: Vec<Obligation>,
    /// Obligations due `today`, sent ones excluded.
    pub due_today: Vec<Obligation>,
    pub due_today_summary: ObligationSummary,
    pub status: StoreStatus,
    /// Window request this snapshot's calendar answers.
    pub generation: u64,
}

impl ProjectionSnapshot {
    /// Empty snapshot for a window nobody has fetched yet.
    pub fn initial(window: DateWindow, today: NaiveDate) -> Self {
        Self {
            window,
            today,
            calendar: Vec::new(),
            due_today: Vec::new(),
            due_today_summary: ObligationSummary::default(),
            status: StoreStatus::Idle,
            generation: 0,
        }
    }

    pub(crate) fn with_calendar(
        &self,
        window: DateWindow,
        today: NaiveDate,
        calendar: Vec<Obligation>,
        generation: u64,
    ) -> Self {
        Self {
            window,
            today,
            calendar,
            status: StoreStatus::Ready,
            generation,
            ..self.clone()
        }
    }

    pub(crate) fn with_due_today(&self, today: NaiveDate, due_today: Vec<Obligation>) -> Self {
        Self {
            today,
            due_today_summary: summarize(&due_today),
            due_today,
            ..self.clone()
        }
    }

    pub(crate) fn with_status(&self, status: StoreStatus) -> Self {
        Self {
            status,
            ..self.clone()
        }
    }

    /// Obligations on the calendar that cover `date`.
    pub fn obligations_on(&self, date: NaiveDate) -> impl Iterator<Item = &Obligation> {
        self.calendar.iter().filter(move |o| o.covers(date))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::SupplierId;
    use crate::domain::supplier::{ReminderPolicy, Supplier};

    fn date(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, d).unwrap()
    }

    fn reminder(on: NaiveDate) -> Obligation {
        let s = Supplier::by_weekday(SupplierId::new(), "Bakery", [1], ReminderPolicy::EachOccurrence)
            .unwrap();
        Obligation::reminder(&s, on, date(6))
    }

    #[test]
    fn initial_snapshot_is_idle_and_empty() {
        let snap = ProjectionSnapshot::initial(DateWindow::week_of(date(6)), date(6));
        assert_eq!(snap.status, StoreStatus::Idle);
        assert!(snap.calendar.is_empty());
        assert_eq!(snap.generation, 0);
    }

    #[test]
    fn with_calendar_marks_ready_and_keeps_due_today() {
        let snap = ProjectionSnapshot::initial(DateWindow::week_of(date(6)), date(6))
            .with_due_today(date(6), vec![reminder(date(6))]);
        let next = snap.with_calendar(DateWindow::week_of(date(13)), date(6), vec![reminder(date(11))], 3);

        assert_eq!(next.status, StoreStatus::Ready);
        assert_eq!(next.generation, 3);
        assert_eq!(next.calendar.len(), 1);
        assert_eq!(next.due_today.len(), 1);
        assert_eq!(next.due_today_summary.today, 1);
    }

    #[test]
    fn failed_status_keeps_previous_obligations() {
        let snap = ProjectionSnapshot::initial(DateWindow::week_of(date(6)), date(6))
            .with_calendar(DateWindow::week_of(date(6)), date(6), vec![reminder(date(4))], 1);
        let failed = snap.with_status(StoreStatus::Failed {
            message: "down".to_string(),
        });
        assert_eq!(failed.calendar, snap.calendar);
    }

    #[test]
    fn obligations_on_filters_by_coverage() {
        let snap = ProjectionSnapshot::initial(DateWindow::week_of(date(6)), date(6))
            .with_calendar(
                DateWindow::week_of(date(6)),
                date(6),
                vec![reminder(date(4)), reminder(date(6))],
                1,
            );
        assert_eq!(snap.obligations_on(date(6)).count(), 1);
        assert_eq!(snap.obligations_on(date(5)).count(), 0);
    }

    #[test]
    fn status_serializes_with_state_tag() {
        let json = serde_json::to_string(&StoreStatus::Failed {
            message: "down".to_string(),
        })
        .unwrap();
        assert_eq!(json, r#"{"state":"failed","message":"down"}"#);
    }
}
