//! In-memory order repository.
//!
//! Records are stored as received. Range reads compare the `YYYY-MM-DD`
//! strings directly, the way a text-dated table would, so a malformed date
//! can still be returned and must be handled by the caller.

use async_trait::async_trait;
use chrono::NaiveDate;
use std::sync::RwLock;

use crate::domain::calendar::{format_local_date, parse_local_date};
use crate::domain::foundation::{DomainError, ErrorCode, OrderId, SupplierId};
use crate::domain::order::{OrderRecord, OrderStatus};
use crate::ports::OrderRepository;

/// Order repository backed by a vector of records.
#[derive(Default)]
pub struct InMemoryOrderRepository {
    records: RwLock<Vec<OrderRecord>>,
}

impl InMemoryOrderRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a repository holding `records` verbatim, malformed ones included.
    pub fn with_records(records: Vec<OrderRecord>) -> Self {
        Self {
            records: RwLock::new(records),
        }
    }

    /// Number of stored records.
    pub fn len(&self) -> usize {
        self.records.read().map(|r| r.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

fn poisoned() -> DomainError {
    DomainError::new(ErrorCode::InternalError, "order store lock poisoned")
}

#[async_trait]
impl OrderRepository for InMemoryOrderRepository {
    async fn find_orders_in_range(
        &self,
        supplier_ids: &[SupplierId],
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<OrderRecord>, DomainError> {
        let start = format_local_date(start);
        let end = format_local_date(end);
        let records = self.records.read().map_err(|_| poisoned())?;
        Ok(records
            .iter()
            .filter(|r| supplier_ids.contains(&r.supplier_id))
            .filter(|r| start.as_str() <= r.date.as_str() && r.date.as_str() <= end.as_str())
            .cloned()
            .collect())
    }

    async fn find_orders_by_status(
        &self,
        statuses: &[OrderStatus],
    ) -> Result<Vec<OrderRecord>, DomainError> {
        let records = self.records.read().map_err(|_| poisoned())?;
        Ok(records
            .iter()
            .filter(|r| statuses.contains(&r.status))
            .cloned()
            .collect())
    }

    async fn save(&self, mut record: OrderRecord) -> Result<OrderRecord, DomainError> {
        let date = parse_local_date(&record.date)?;
        record.date = format_local_date(date);

        let mut records = self.records.write().map_err(|_| poisoned())?;
        let existing = records
            .iter()
            .position(|r| r.supplier_id == record.supplier_id && r.date == record.date);

        match existing {
            Some(index) => {
                record.id = record.id.or(records[index].id).or_else(|| Some(OrderId::new()));
                records[index] = record.clone();
            }
            None => {
                record.id = Some(record.id.unwrap_or_else(OrderId::new));
                records.push(record.clone());
            }
        }
        Ok(record)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn record(supplier_id: SupplierId, date: &str, status: OrderStatus) -> OrderRecord {
        OrderRecord {
            id: None,
            supplier_id,
            date: date.to_string(),
            status,
            lines: vec![],
            notes: None,
        }
    }

    #[tokio::test]
    async fn range_read_filters_by_supplier_and_date() {
        let a = SupplierId::new();
        let b = SupplierId::new();
        let repo = InMemoryOrderRepository::with_records(vec![
            record(a, "2024-03-02", OrderStatus::Sent),
            record(a, "2024-03-04", OrderStatus::Draft),
            record(b, "2024-03-05", OrderStatus::Draft),
            record(a, "2024-03-10", OrderStatus::Draft),
        ]);

        let found = repo
            .find_orders_in_range(&[a], date(2024, 3, 3), date(2024, 3, 9))
            .await
            .unwrap();

        assert_eq!(found.len(), 1);
        assert_eq!(found[0].date, "2024-03-04");
    }

    #[tokio::test]
    async fn range_read_with_no_suppliers_is_empty() {
        let repo = InMemoryOrderRepository::with_records(vec![record(
            SupplierId::new(),
            "2024-03-04",
            OrderStatus::Draft,
        )]);
        let found = repo
            .find_orders_in_range(&[], date(2024, 3, 1), date(2024, 3, 31))
            .await
            .unwrap();
        assert!(found.is_empty());
    }

    #[tokio::test]
    async fn status_read_returns_matching_records() {
        let a = SupplierId::new();
        let repo = InMemoryOrderRepository::with_records(vec![
            record(a, "2024-03-04", OrderStatus::Draft),
            record(a, "2024-03-05", OrderStatus::Sent),
            record(a, "2024-03-06", OrderStatus::Empty),
        ]);

        let drafts = repo.find_orders_by_status(&[OrderStatus::Draft]).await.unwrap();

        assert_eq!(drafts.len(), 1);
        assert_eq!(drafts[0].status, OrderStatus::Draft);
    }

    #[tokio::test]
    async fn save_assigns_id_and_upserts_by_natural_key() {
        let a = SupplierId::new();
        let repo = InMemoryOrderRepository::new();

        let first = repo.save(record(a, "2024-03-04", OrderStatus::Draft)).await.unwrap();
        assert!(first.id.is_some());

        let second = repo.save(record(a, "2024-03-04", OrderStatus::Sent)).await.unwrap();

        assert_eq!(repo.len(), 1);
        assert_eq!(second.id, first.id);
        assert_eq!(second.status, OrderStatus::Sent);
    }

    #[tokio::test]
    async fn save_rejects_malformed_dates() {
        let repo = InMemoryOrderRepository::new();
        let err = repo
            .save(record(SupplierId::new(), "4 March", OrderStatus::Draft))
            .await
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidDateFormat);
        assert!(repo.is_empty());
    }
}
