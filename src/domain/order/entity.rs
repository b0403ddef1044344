//! Order entity and the record form it travels in.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::calendar::{format_local_date, parse_local_date, CalendarError};
use crate::domain::foundation::{OrderId, SupplierId};

/// Lifecycle status of an order.
///
/// `Empty` marks an order that was explicitly cleared or skipped. It still
/// counts as an existing order for precedence and weekly fulfillment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    #[default]
    Empty,
    Draft,
    Sent,
}

impl OrderStatus {
    /// Returns true once the order has gone out to the supplier.
    pub fn is_sent(&self) -> bool {
        matches!(self, OrderStatus::Sent)
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            OrderStatus::Empty => "Empty",
            OrderStatus::Draft => "Draft",
            OrderStatus::Sent => "Sent",
        };
        write!(f, "{}", s)
    }
}

/// A single product line on an order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderLine {
    pub product: String,
    pub quantity: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
}

/// Order as delivered by the order repository, date still in wire form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<OrderId>,
    pub supplier_id: SupplierId,
    pub date: String,
    #[serde(default)]
    pub status: OrderStatus,
    #[serde(default)]
    pub lines: Vec<OrderLine>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// An order for one supplier on one calendar day.
///
/// `(supplier_id, date)` is the natural key: at most one order exists per pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: Option<OrderId>,
    pub supplier_id: SupplierId,
    pub date: NaiveDate,
    pub status: OrderStatus,
    pub lines: Vec<OrderLine>,
    pub notes: Option<String>,
}

impl Order {
    /// Creates an unsaved order with no lines.
    pub fn new(supplier_id: SupplierId, date: NaiveDate, status: OrderStatus) -> Self {
        Self {
            id: None,
            supplier_id,
            date,
            status,
            lines: Vec::new(),
            notes: None,
        }
    }

    /// Returns the natural key of this order.
    pub fn key(&self) -> (SupplierId, NaiveDate) {
        (self.supplier_id, self.date)
    }
}

impl TryFrom<OrderRecord> for Order {
    type Error = CalendarError;

    fn try_from(record: OrderRecord) -> Result<Self, Self::Error> {
        let date = parse_local_date(&record.date)?;
        Ok(Self {
            id: record.id,
            supplier_id: record.supplier_id,
            date,
            status: record.status,
            lines: record.lines,
            notes: record.notes,
        })
    }
}

impl From<&Order> for OrderRecord {
    fn from(order: &Order) -> Self {
        Self {
            id: order.id,
            supplier_id: order.supplier_id,
            date: format_local_date(order.date),
            status: order.status,
            lines: order.lines.clone(),
            notes: order.notes.clone(),
        }
    }
}
