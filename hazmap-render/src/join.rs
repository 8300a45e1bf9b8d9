//! Name join between metric records and the geometry table.

use std::collections::HashMap;

use hazmap_bindings::HazardRecord;
use hazmap_spatial::GeometryTable;

/// Left-join records with the geometry table on exact, case-sensitive
/// display-name equality.
///
/// Every record is retained; a record without a table match carries `None`.
/// The table is expected to have unique names; on a duplicate, the first
/// occurrence in table order wins, which is invariant under permutation of
/// unrelated rows.
pub fn resolve_geometry<'t>(
    records: &[HazardRecord],
    table: &'t GeometryTable,
) -> Vec<(HazardRecord, Option<&'t str>)> {
    let mut by_name: HashMap<&str, Option<&str>> = HashMap::with_capacity(table.len());
    for entry in table.entries() {
        by_name
            .entry(entry.name.as_str())
            .or_insert(entry.wkt.as_deref());
    }

    records
        .iter()
        .map(|record| {
            let wkt = by_name.get(record.name.as_str()).copied().flatten();
            (record.clone(), wkt)
        })
        .collect()
}
