//! ProjectionStore - the single owner of calendar state.
//!
//! The store fetches suppliers and orders through the repository ports, runs
//! the pure projector, and publishes an immutable `ProjectionSnapshot` on a
//! `tokio::sync::watch` channel. Readers never see a half-updated snapshot.
//!
//! ## Request ordering
//!
//! Every fetch carries a generation number taken when the request starts.
//! When the response arrives the store compares it against the current
//! generation and drops the response if a newer request has started since:
//!
//! ```text
//! set_window(A)  gen 1 ──────────────── response ─▶ superseded, dropped
//! set_window(B)        gen 2 ── response ─▶ applied
//! ```
//!
//! The state lock is never held while a repository call is in flight.

use std::sync::Arc;

use chrono::NaiveDate;
use thiserror::Error;
use tokio::sync::{watch, Mutex};
use tracing::{debug, error, info};

use crate::config::SchedulingConfig;
use crate::domain::calendar::DateWindow;
use crate::domain::foundation::{DomainError, SupplierId};
use crate::domain::order::OrderBook;
use crate::domain::scheduling::{assign_rows, project_range, project_single_day};
use crate::domain::supplier::Supplier;
use crate::ports::{Clock, OrderRepository, SupplierRepository};

use super::snapshot::{ProjectionSnapshot, StoreStatus};

/// Errors surfaced by store refreshes.
#[derive(Debug, Clone, Error)]
pub enum StoreError {
    #[error(transparent)]
    Repository(#[from] DomainError),
}

/// What happened to a refresh once its response arrived.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RefreshOutcome {
    /// The response was projected and published.
    Applied,
    /// A newer request started first; the response was dropped.
    Superseded,
}

struct StoreState {
    suppliers: Arc<Vec<Supplier>>,
    window: DateWindow,
    suppliers_generation: u64,
    window_generation: u64,
    due_today_generation: u64,
}

impl StoreState {
    fn supplier_ids(&self) -> Vec<SupplierId> {
        self.suppliers.iter().map(|s| s.id).collect()
    }
}

/// Owns the current window, supplier list and published projections.
pub struct ProjectionStore {
    supplier_repository: Arc<dyn SupplierRepository>,
    order_repository: Arc<dyn OrderRepository>,
    clock: Arc<dyn Clock>,
    state: Mutex<StoreState>,
    publisher: watch::Sender<Arc<ProjectionSnapshot>>,
}

impl ProjectionStore {
    /// Creates a store whose window is the week or month containing today.
    ///
    /// Nothing is fetched until one of the refresh methods runs.
    pub fn new(
        supplier_repository: Arc<dyn SupplierRepository>,
        order_repository: Arc<dyn OrderRepository>,
        clock: Arc<dyn Clock>,
        config: &SchedulingConfig,
    ) -> Self {
        let today = clock.today();
        let window = config.initial_window(today);
        let (publisher, _) = watch::channel(Arc::new(ProjectionSnapshot::initial(window, today)));

        Self {
            supplier_repository,
            order_repository,
            clock,
            state: Mutex::new(StoreState {
                suppliers: Arc::new(Vec::new()),
                window,
                suppliers_generation: 0,
                window_generation: 0,
                due_today_generation: 0,
            }),
            publisher,
        }
    }

    /// Subscribes to snapshot changes.
    pub fn subscribe(&self) -> watch::Receiver<Arc<ProjectionSnapshot>> {
        self.publisher.subscribe()
    }

    /// The most recently published snapshot.
    pub fn snapshot(&self) -> Arc<ProjectionSnapshot> {
        self.publisher.borrow().clone()
    }

    /// Today according to the store's clock.
    pub fn today(&self) -> NaiveDate {
        self.clock.today()
    }

    /// The window the calendar is currently showing or loading.
    pub async fn window(&self) -> DateWindow {
        self.state.lock().await.window
    }

    /// Reloads the supplier list, then refetches the calendar and due-today.
    pub async fn refresh_suppliers(&self) -> Result<RefreshOutcome, StoreError> {
        let generation = {
            let mut state = self.state.lock().await;
            state.suppliers_generation += 1;
            state.suppliers_generation
        };

        let result = self.supplier_repository.list_active_suppliers().await;

        {
            let mut state = self.state.lock().await;
            if state.suppliers_generation != generation {
                debug!(
                    generation,
                    current = state.suppliers_generation,
                    "discarding stale supplier response"
                );
                return Ok(RefreshOutcome::Superseded);
            }
            match result {
                Ok(suppliers) => {
                    info!(count = suppliers.len(), "suppliers loaded");
                    state.suppliers = Arc::new(suppliers);
                }
                Err(err) => {
                    error!(error = %err, "failed to load suppliers");
                    self.publish(|snap| {
                        snap.with_status(StoreStatus::Failed {
                            message: err.to_string(),
                        })
                    });
                    return Err(err.into());
                }
            }
        }

        let (orders, due_today) = futures::try_join!(self.refresh_orders(), self.refresh_due_today())?;
        Ok(combine(orders, due_today))
    }

    /// Switches the calendar to `window` and fetches its orders.
    ///
    /// The snapshot goes to `Loading` right away; earlier obligations stay
    /// visible until the new ones arrive.
    pub async fn set_window(&self, window: DateWindow) -> Result<RefreshOutcome, StoreError> {
        let (generation, suppliers) = {
            let mut state = self.state.lock().await;
            state.window = window;
            state.window_generation += 1;
            self.publish(|snap| snap.with_status(StoreStatus::Loading));
            (state.window_generation, state.suppliers.clone())
        };
        debug!(generation, start = %window.start(), end = %window.end(), "window changed");

        self.load_window(window, generation, suppliers).await
    }

    /// Refetches orders for the current window.
    pub async fn refresh_orders(&self) -> Result<RefreshOutcome, StoreError> {
        let (window, generation, suppliers) = {
            let mut state = self.state.lock().await;
            state.window_generation += 1;
            (state.window, state.window_generation, state.suppliers.clone())
        };

        self.load_window(window, generation, suppliers).await
    }

    /// Refetches the obligations due today.
    pub async fn refresh_due_today(&self) -> Result<RefreshOutcome, StoreError> {
        let today = self.clock.today();
        let (generation, suppliers, ids) = {
            let mut state = self.state.lock().await;
            state.due_today_generation += 1;
            (
                state.due_today_generation,
                state.suppliers.clone(),
                state.supplier_ids(),
            )
        };

        // The whole week is fetched so weekly suppliers see fulfilling orders.
        let week = DateWindow::week_of(today);
        let result = self
            .order_repository
            .find_orders_in_range(&ids, week.start(), week.end())
            .await;

        let state = self.state.lock().await;
        if state.due_today_generation != generation {
            debug!(
                generation,
                current = state.due_today_generation,
                "discarding stale due-today response"
            );
            return Ok(RefreshOutcome::Superseded);
        }

        match result {
            Ok(records) => {
                let book = OrderBook::from_records(records);
                let due_today = project_single_day(&suppliers, &book, today, today);
                debug!(%today, count = due_today.len(), "due-today recomputed");
                self.publish(|snap| snap.with_due_today(today, due_today));
                Ok(RefreshOutcome::Applied)
            }
            Err(err) => {
                error!(error = %err, %today, "failed to load orders for today");
                self.publish(|snap| {
                    snap.with_status(StoreStatus::Failed {
                        message: err.to_string(),
                    })
                });
                Err(err.into())
            }
        }
    }

    /// Refetches everything an order save can change.
    pub async fn order_saved(&self) -> Result<RefreshOutcome, StoreError> {
        let (orders, due_today) = futures::try_join!(self.refresh_orders(), self.refresh_due_today())?;
        Ok(combine(orders, due_today))
    }

    async fn load_window(
        &self,
        window: DateWindow,
        generation: u64,
        suppliers: Arc<Vec<Supplier>>,
    ) -> Result<RefreshOutcome, StoreError> {
        let ids: Vec<SupplierId> = suppliers.iter().map(|s| s.id).collect();
        // Whole weeks, so fulfillment sees orders outside a clipped window.
        let fetch = window.expand_to_weeks();
        let result = self
            .order_repository
            .find_orders_in_range(&ids, fetch.start(), fetch.end())
            .await;
        let today = self.clock.today();

        let state = self.state.lock().await;
        if state.window_generation != generation {
            debug!(
                generation,
                current = state.window_generation,
                "discarding stale window response"
            );
            return Ok(RefreshOutcome::Superseded);
        }

        match result {
            Ok(records) => {
                let book = OrderBook::from_records(records);
                let calendar = assign_rows(project_range(&suppliers, &book, &window, today));
                debug!(
                    generation,
                    orders = book.len(),
                    obligations = calendar.len(),
                    "calendar recomputed"
                );
                self.publish(|snap| snap.with_calendar(window, today, calendar, generation));
                Ok(RefreshOutcome::Applied)
            }
            Err(err) => {
                error!(
                    error = %err,
                    start = %window.start(),
                    end = %window.end(),
                    "failed to load orders for window"
                );
                self.publish(|snap| {
                    snap.with_status(StoreStatus::Failed {
                        message: err.to_string(),
                    })
                });
                Err(err.into())
            }
        }
    }

    /// Replaces the published snapshot. Callers hold the state lock.
    fn publish(&self, update: impl FnOnce(&ProjectionSnapshot) -> ProjectionSnapshot) {
        let next = update(&self.publisher.borrow());
        self.publisher.send_replace(Arc::new(next));
    }
}

fn combine(a: RefreshOutcome, b: RefreshOutcome) -> RefreshOutcome {
    if a == RefreshOutcome::Applied || b == RefreshOutcome::Applied {
        RefreshOutcome::Applied
    } else {
        RefreshOutcome::Superseded
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::{FixedClock, InMemoryOrderRepository, InMemorySupplierRepository};
    use crate::config::InitialView;
    use crate::domain::order::{OrderRecord, OrderStatus};
    use crate::domain::scheduling::DisplayState;
    use crate::domain::supplier::ReminderPolicy;

    fn date(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, d).unwrap()
    }

    fn bakery() -> Supplier {
        Supplier::by_weekday(SupplierId::new(), "Bakery", [1, 3, 5], ReminderPolicy::EachOccurrence)
            .unwrap()
    }

    fn record(supplier: &Supplier, day: &str, status: OrderStatus) -> OrderRecord {
        OrderRecord {
            id: None,
            supplier_id: supplier.id,
            date: day.to_string(),
            status,
            lines: Vec::new(),
            notes: None,
        }
    }

    fn store_with(suppliers: Vec<Supplier>, records: Vec<OrderRecord>) -> ProjectionStore {
        ProjectionStore::new(
            Arc::new(InMemorySupplierRepository::with_suppliers(suppliers)),
            Arc::new(InMemoryOrderRepository::with_records(records)),
            Arc::new(FixedClock::new(date(6))),
            &SchedulingConfig::default(),
        )
    }

    #[test]
    fn new_store_starts_idle_on_current_week() {
        let store = store_with(vec![], vec![]);
        let snap = store.snapshot();
        assert_eq!(snap.status, StoreStatus::Idle);
        assert_eq!(snap.window, DateWindow::new(date(3), date(9)));
        assert_eq!(snap.today, date(6));
    }

    #[test]
    fn month_view_starts_on_current_month() {
        let store = ProjectionStore::new(
            Arc::new(InMemorySupplierRepository::new()),
            Arc::new(InMemoryOrderRepository::new()),
            Arc::new(FixedClock::new(date(6))),
            &SchedulingConfig {
                initial_view: InitialView::Month,
            },
        );
        assert_eq!(store.snapshot().window, DateWindow::new(date(1), date(31)));
    }

    #[tokio::test]
    async fn refresh_suppliers_projects_calendar_and_due_today() {
        let supplier = bakery();
        let store = store_with(
            vec![supplier.clone()],
            vec![record(&supplier, "2024-03-08", OrderStatus::Draft)],
        );

        let outcome = store.refresh_suppliers().await.unwrap();
        let snap = store.snapshot();

        assert_eq!(outcome, RefreshOutcome::Applied);
        assert_eq!(snap.status, StoreStatus::Ready);
        let states: Vec<_> = snap.calendar.iter().map(|o| o.display_state).collect();
        assert_eq!(
            states,
            vec![DisplayState::Empty, DisplayState::Today, DisplayState::Draft]
        );
        assert!(snap.calendar.iter().all(|o| o.row == 1));
        assert_eq!(snap.due_today.len(), 1);
        assert_eq!(snap.due_today_summary.today, 1);
    }

    #[tokio::test]
    async fn set_window_moves_calendar() {
        let supplier = bakery();
        let store = store_with(vec![supplier], vec![]);
        store.refresh_suppliers().await.unwrap();

        let next_week = DateWindow::week_of(date(13));
        store.set_window(next_week).await.unwrap();
        let snap = store.snapshot();

        assert_eq!(snap.window, next_week);
        assert_eq!(store.window().await, next_week);
        assert_eq!(snap.calendar.len(), 3);
        assert!(snap
            .calendar
            .iter()
            .all(|o| o.display_state == DisplayState::Future));
    }

    #[tokio::test]
    async fn subscribers_see_published_snapshots() {
        let store = store_with(vec![bakery()], vec![]);
        let mut rx = store.subscribe();

        store.refresh_suppliers().await.unwrap();

        assert!(rx.has_changed().unwrap());
        let snap = rx.borrow_and_update().clone();
        assert_eq!(snap.calendar.len(), 3);
    }

    #[tokio::test]
    async fn order_saved_refetches() {
        let supplier = bakery();
        let orders = Arc::new(InMemoryOrderRepository::new());
        let store = ProjectionStore::new(
            Arc::new(InMemorySupplierRepository::with_suppliers(vec![supplier.clone()])),
            orders.clone(),
            Arc::new(FixedClock::new(date(6))),
            &SchedulingConfig::default(),
        );
        store.refresh_suppliers().await.unwrap();
        assert_eq!(store.snapshot().due_today[0].display_state, DisplayState::Today);

        orders
            .save(record(&supplier, "2024-03-06", OrderStatus::Sent))
            .await
            .unwrap();
        store.order_saved().await.unwrap();
        let snap = store.snapshot();

        assert!(snap.due_today.is_empty());
        let wednesday: Vec<_> = snap.obligations_on(date(6)).collect();
        assert_eq!(wednesday.len(), 1);
        assert_eq!(wednesday[0].display_state, DisplayState::Sent);
    }

    #[tokio::test]
    async fn refresh_without_suppliers_yields_empty_calendar() {
        let store = store_with(vec![], vec![]);
        store.refresh_suppliers().await.unwrap();
        let snap = store.snapshot();
        assert_eq!(snap.status, StoreStatus::Ready);
        assert!(snap.calendar.is_empty());
        assert!(snap.due_today.is_empty());
    }
}
