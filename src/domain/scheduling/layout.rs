//! Row layout assigner for calendar grids.

use std::collections::{BTreeMap, HashMap};

use super::Obligation;
use crate::domain::foundation::SupplierId;

/// Stamps each obligation with its supplier's 1-based row.
///
/// Rows depend only on which suppliers appear: suppliers are ordered by
/// display name (ties broken by id) and numbered in that order. Dates never
/// influence the result, so rows stay put when the window moves. Obligations
/// keep their input order.
pub fn assign_rows(obligations: Vec<Obligation>) -> Vec<Obligation> {
    let mut names: BTreeMap<SupplierId, &str> = BTreeMap::new();
    for o in &obligations {
        names
            .entry(o.supplier_id)
            .and_modify(|name| {
                if o.supplier_name.as_str() < *name {
                    *name = o.supplier_name.as_str();
                }
            })
            .or_insert(o.supplier_name.as_str());
    }

    let mut ordered: Vec<(&str, SupplierId)> = names.into_iter().map(|(id, name)| (name, id)).collect();
    ordered.sort();

    let rows: HashMap<SupplierId, u32> = ordered
        .iter()
        .enumerate()
        .map(|(index, (_, id))| (*id, index as u32 + 1))
        .collect();

    obligations
        .into_iter()
        .map(|mut o| {
            o.row = rows.get(&o.supplier_id).copied().unwrap_or(1);
            o
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::supplier::{ReminderPolicy, Supplier};
    use chrono::NaiveDate;
    use uuid::Uuid;

    fn date(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, d).unwrap()
    }

    fn supplier(name: &str, id: u128) -> Supplier {
        Supplier::by_weekday(
            SupplierId::from_uuid(Uuid::from_u128(id)),
            name,
            [1],
            ReminderPolicy::EachOccurrence,
        )
        .unwrap()
    }

    fn rows_by_supplier(obligations: &[Obligation]) -> BTreeMap<SupplierId, u32> {
        obligations.iter().map(|o| (o.supplier_id, o.row)).collect()
    }

    #[test]
    fn rows_follow_supplier_names() {
        let zeta = supplier("Zeta", 1);
        let alpha = supplier("Alpha", 2);
        let obligations = vec![
            Obligation::reminder(&zeta, date(4), date(4)),
            Obligation::reminder(&alpha, date(5), date(4)),
        ];

        let laid_out = assign_rows(obligations);

        assert_eq!(laid_out[0].supplier_id, zeta.id);
        assert_eq!(laid_out[0].row, 2);
        assert_eq!(laid_out[1].row, 1);
    }

    #[test]
    fn all_obligations_of_a_supplier_share_a_row() {
        let a = supplier("A", 1);
        let b = supplier("B", 2);
        let laid_out = assign_rows(vec![
            Obligation::reminder(&b, date(4), date(4)),
            Obligation::reminder(&a, date(5), date(4)),
            Obligation::reminder(&b, date(6), date(4)),
        ]);

        let rows: Vec<u32> = laid_out.iter().map(|o| o.row).collect();
        assert_eq!(rows, vec![2, 1, 2]);
    }

    #[test]
    fn equal_names_break_ties_by_id() {
        let first = supplier("Same", 1);
        let second = supplier("Same", 2);
        let laid_out = assign_rows(vec![
            Obligation::reminder(&second, date(4), date(4)),
            Obligation::reminder(&first, date(4), date(4)),
        ]);

        let rows = rows_by_supplier(&laid_out);
        assert_eq!(rows[&first.id], 1);
        assert_eq!(rows[&second.id], 2);
    }

    #[test]
    fn rows_ignore_dates_and_input_order() {
        let a = supplier("A", 1);
        let b = supplier("B", 2);
        let c = supplier("C", 3);
        let week_one = vec![
            Obligation::reminder(&c, date(4), date(4)),
            Obligation::reminder(&a, date(6), date(4)),
            Obligation::reminder(&b, date(8), date(4)),
        ];
        let week_two = vec![
            Obligation::reminder(&b, date(11), date(4)),
            Obligation::reminder(&a, date(15), date(4)),
            Obligation::reminder(&c, date(12), date(4)),
        ];

        assert_eq!(
            rows_by_supplier(&assign_rows(week_one)),
            rows_by_supplier(&assign_rows(week_two))
        );
    }

    #[test]
    fn empty_input_yields_empty_output() {
        assert!(assign_rows(Vec::new()).is_empty());
    }
}
