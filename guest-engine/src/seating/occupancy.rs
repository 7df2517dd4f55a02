//! Table occupancy
//!
//! Occupancy is always derived from the current snapshot, never stored.

use shared::models::{Guest, OccupancyStatus, SeatingOverview, Table, TableOccupancy};
use std::collections::{HashMap, HashSet};

pub(crate) fn find_table(table_number: u32, tables: &[Table]) -> Option<&Table> {
    tables.iter().find(|t| t.table_number == table_number)
}

pub(crate) fn count_seated(table_number: u32, guests: &[Guest]) -> u32 {
    let count = guests
        .iter()
        .filter(|g| g.table_number == Some(table_number))
        .count();
    u32::try_from(count).unwrap_or(u32::MAX)
}

fn occupancy_of(table: &Table, occupied: u32) -> TableOccupancy {
    TableOccupancy {
        table_number: table.table_number,
        capacity: table.capacity,
        occupied,
        available: i64::from(table.capacity) - i64::from(occupied),
        status: OccupancyStatus::classify(occupied, table.capacity),
    }
}

/// Occupancy of one table
///
/// An unknown table number yields a zero-capacity, zero-occupied `Empty`
/// record even when guests reference that number. Lookups never fail.
pub fn get_occupancy(table_number: u32, guests: &[Guest], tables: &[Table]) -> TableOccupancy {
    let Some(table) = find_table(table_number, tables) else {
        return TableOccupancy {
            table_number,
            capacity: 0,
            occupied: 0,
            available: 0,
            status: OccupancyStatus::Empty,
        };
    };

    occupancy_of(table, count_seated(table_number, guests))
}

/// Occupancy of every table plus event totals
pub fn seating_overview(guests: &[Guest], tables: &[Table]) -> SeatingOverview {
    let mut counts: HashMap<u32, u32> = HashMap::new();
    let mut unassigned = 0;
    for guest in guests {
        match guest.table_number {
            Some(n) => *counts.entry(n).or_default() += 1,
            None => unassigned += 1,
        }
    }

    let mut ordered: Vec<&Table> = tables.iter().collect();
    ordered.sort_by_key(|t| t.table_number);

    let occupancies: Vec<TableOccupancy> = ordered
        .iter()
        .map(|t| occupancy_of(t, counts.get(&t.table_number).copied().unwrap_or(0)))
        .collect();

    let known: HashSet<u32> = tables.iter().map(|t| t.table_number).collect();
    let (seated, dangling) = counts.iter().fold((0usize, 0usize), |(s, d), (n, c)| {
        if known.contains(n) {
            (s + *c as usize, d)
        } else {
            (s, d + *c as usize)
        }
    });

    let mut overfull_tables = Vec::new();
    for o in occupancies.iter().filter(|o| o.status == OccupancyStatus::Overfull) {
        tracing::warn!(
            table_number = o.table_number,
            occupied = o.occupied,
            capacity = o.capacity,
            "Table is overfull"
        );
        overfull_tables.push(o.table_number);
    }

    SeatingOverview {
        total_capacity: tables.iter().map(|t| u64::from(t.capacity)).sum(),
        tables: occupancies,
        seated,
        unassigned,
        dangling,
        overfull_tables,
    }
}
