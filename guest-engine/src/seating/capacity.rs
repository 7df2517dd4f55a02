//! Event-wide capacity checks

use shared::models::{Guest, Table};

/// Sum of declared capacities
pub fn total_capacity(tables: &[Table]) -> u64 {
    tables.iter().map(|t| u64::from(t.capacity)).sum()
}

/// Coarse feasibility: enough seats overall, ignoring how they are spread
pub fn can_accommodate_all(guests: &[Guest], tables: &[Table]) -> bool {
    guests.len() as u64 <= total_capacity(tables)
}

/// Minimum number of new `default_capacity`-seat tables that closes the
/// shortfall, 0 when current capacity already covers every guest.
///
/// A `default_capacity` of 0 is treated as 1.
pub fn suggest_additional_tables(guests: &[Guest], tables: &[Table], default_capacity: u32) -> u32 {
    let capacity = total_capacity(tables);
    let guest_count = guests.len() as u64;
    if guest_count <= capacity {
        return 0;
    }

    let shortfall = guest_count - capacity;
    let per_table = u64::from(default_capacity.max(1));
    u32::try_from(shortfall.div_ceil(per_table)).unwrap_or(u32::MAX)
}
