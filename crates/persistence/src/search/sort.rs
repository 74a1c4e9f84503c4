//! Record ordering.

use std::cmp::Ordering;

use crate::types::{Consulta, SortDirection, SortKey};

/// Orders `records` by `key` in `direction`.
///
/// The sort is stable: records with equal keys keep their relative order.
/// With no key the input order is returned unchanged. Records whose
/// `created_at` cannot be parsed come first when ascending and last when
/// descending.
pub fn sort_records(
    records: Vec<Consulta>,
    key: Option<SortKey>,
    direction: SortDirection,
) -> Vec<Consulta> {
    let Some(key) = key else {
        return records;
    };

    match key {
        SortKey::CreatedAt => {
            let mut keyed: Vec<_> = records
                .into_iter()
                .map(|consulta| (consulta.created_instant(), consulta))
                .collect();

            keyed.sort_by(|(a, _), (b, _)| apply_direction(a.cmp(b), direction));

            keyed.into_iter().map(|(_, consulta)| consulta).collect()
        }
    }
}

fn apply_direction(ordering: Ordering, direction: SortDirection) -> Ordering {
    match direction {
        SortDirection::Asc => ordering,
        SortDirection::Desc => ordering.reverse(),
    }
}
