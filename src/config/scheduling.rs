//! Scheduling configuration

use chrono::NaiveDate;
use serde::Deserialize;

use crate::domain::calendar::DateWindow;

/// Which window the calendar opens on
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum InitialView {
    #[default]
    Week,
    Month,
}

/// Scheduling configuration
#[derive(Debug, Clone, Deserialize, Default)]
pub struct SchedulingConfig {
    /// Window shown before the UI picks one
    #[serde(default)]
    pub initial_view: InitialView,
}

impl SchedulingConfig {
    /// The window the store starts on for a given day
    pub fn initial_window(&self, today: NaiveDate) -> DateWindow {
        match self.initial_view {
            InitialView::Week => DateWindow::week_of(today),
            InitialView::Month => DateWindow::month_of(today),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_default_view_is_week() {
        let config = SchedulingConfig::default();
        let window = config.initial_window(date(2024, 3, 6));
        assert_eq!(window, DateWindow::week_of(date(2024, 3, 6)));
    }

    #[test]
    fn test_month_view() {
        let config = SchedulingConfig {
            initial_view: InitialView::Month,
        };
        let window = config.initial_window(date(2024, 3, 6));
        assert_eq!(window.start(), date(2024, 3, 1));
        assert_eq!(window.end(), date(2024, 3, 31));
    }

    #[test]
    fn test_view_deserialization() {
        let config: SchedulingConfig = serde_json::from_str(r#"{"initial_view":"month"}"#).unwrap();
        assert_eq!(config.initial_view, InitialView::Month);
    }
}
