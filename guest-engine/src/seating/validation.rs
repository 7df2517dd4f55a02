//! Manual seat moves
//!
//! `validate_assignment` is advisory: it looks at the caller's snapshot and
//! nothing else. Between the check and the write another user may have
//! filled the table, so a caller that needs strict enforcement re-runs the
//! check against freshly loaded data right before persisting.

use super::occupancy::{find_table, get_occupancy};
use shared::error::{AppError, AppResult, ErrorCode};
use shared::i18n::{Locale, Message};
use shared::models::{AssignmentCheck, Guest, Table};
use std::collections::HashSet;

/// Check whether `guest_id` may be moved to `table_number`
///
/// In order:
/// 1. unknown table → invalid (`TableNotFound`)
/// 2. guest already sits there → valid no-op (`GuestAlreadySeated`)
/// 3. occupied >= capacity → invalid (`TableFull`, cites occupied/capacity)
/// 4. otherwise valid
///
/// The guest id is not looked up: an unknown id gets the table checks only.
pub fn validate_assignment(
    guest_id: &str,
    table_number: u32,
    guests: &[Guest],
    tables: &[Table],
    locale: Locale,
) -> AssignmentCheck {
    if find_table(table_number, tables).is_none() {
        return AssignmentCheck::invalid(
            ErrorCode::TableNotFound,
            Message::TableNotFound { table_number }.render(locale),
        );
    }

    let already_there = guests
        .iter()
        .any(|g| g.id == guest_id && g.table_number == Some(table_number));
    if already_there {
        return AssignmentCheck::valid(
            ErrorCode::GuestAlreadySeated,
            Message::AlreadySeated { table_number }.render(locale),
        );
    }

    let occupancy = get_occupancy(table_number, guests, tables);
    if occupancy.occupied >= occupancy.capacity {
        return AssignmentCheck::invalid(
            ErrorCode::TableFull,
            Message::TableFull {
                table_number,
                occupied: occupancy.occupied,
                capacity: occupancy.capacity,
            }
            .render(locale),
        );
    }

    AssignmentCheck::valid(ErrorCode::Success, Message::TableAvailable.render(locale))
}

/// Validate and, when allowed, seat the guest at `table_number`
///
/// An invalid check is returned as-is and the guest list is left untouched.
///
/// # Errors
///
/// `GuestNotFound` when no guest has `guest_id`.
pub fn move_guest(
    guests: &mut [Guest],
    guest_id: &str,
    table_number: u32,
    tables: &[Table],
    locale: Locale,
) -> AppResult<AssignmentCheck> {
    let index = guests
        .iter()
        .position(|g| g.id == guest_id)
        .ok_or_else(|| AppError::guest_not_found(guest_id))?;

    let check = validate_assignment(guest_id, table_number, guests, tables, locale);
    if check.valid {
        guests[index].table_number = Some(table_number);
        tracing::debug!(guest_id, table_number, "Guest moved");
    }

    Ok(check)
}

/// Remove a guest from their table, returning the previous table number
///
/// # Errors
///
/// `GuestNotFound` when no guest has `guest_id`.
pub fn unassign_guest(guests: &mut [Guest], guest_id: &str) -> AppResult<Option<u32>> {
    let guest = guests
        .iter_mut()
        .find(|g| g.id == guest_id)
        .ok_or_else(|| AppError::guest_not_found(guest_id))?;

    Ok(guest.table_number.take())
}

/// Strict snapshot check for callers that want one
///
/// The seating functions stay permissive and never call this.
///
/// # Errors
///
/// `DuplicateTableNumber` on the first repeated table number.
pub fn validate_tables(tables: &[Table]) -> AppResult<()> {
    let mut seen = HashSet::with_capacity(tables.len());
    for table in tables {
        if !seen.insert(table.table_number) {
            return Err(AppError::with_message(
                ErrorCode::DuplicateTableNumber,
                format!("Table number {} is used more than once", table.table_number),
            )
            .with_detail("table_number", table.table_number));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tables() -> Vec<Table> {
        vec![Table::new("t1", 1, 1), Table::new("t2", 2, 2)]
    }

    #[test]
    fn test_unknown_table_is_invalid() {
        let check = validate_assignment("a", 5, &[], &tables(), Locale::PtBr);
        assert!(!check.valid);
        assert_eq!(check.code, ErrorCode::TableNotFound);
        assert!(check.message.contains('5'));
    }

    #[test]
    fn test_same_table_is_noop() {
        let guests = vec![Guest::new("x", "X").seated_at(1)];
        let check = validate_assignment("x", 1, &guests, &tables(), Locale::En);
        assert!(check.valid);
        assert_eq!(check.code, ErrorCode::GuestAlreadySeated);
    }

    #[test]
    fn test_full_table_cites_ratio() {
        let guests = vec![Guest::new("x", "X").seated_at(1), Guest::new("y", "Y")];
        let check = validate_assignment("y", 1, &guests, &tables(), Locale::PtBr);
        assert!(!check.valid);
        assert_eq!(check.code, ErrorCode::TableFull);
        assert!(check.message.contains("1/1"));
    }

    #[test]
    fn test_zero_capacity_table_is_full() {
        let tables = vec![Table::new("t0", 0, 0)];
        let check = validate_assignment("y", 0, &[], &tables, Locale::En);
        assert!(!check.valid);
        assert!(check.message.contains("0/0"));
    }

    #[test]
    fn test_unknown_guest_gets_table_checks_only() {
        let check = validate_assignment("nobody", 2, &[], &tables(), Locale::En);
        assert!(check.valid);
        assert_eq!(check.code, ErrorCode::Success);

        let guests = vec![Guest::new("x", "X").seated_at(1)];
        let check = validate_assignment("nobody", 1, &guests, &tables(), Locale::En);
        assert!(!check.valid);
        assert_eq!(check.code, ErrorCode::TableFull);
    }

    #[test]
    fn test_move_guest_applies_only_valid_moves() {
        let mut guests = vec![Guest::new("x", "X").seated_at(1), Guest::new("y", "Y")];

        let check = move_guest(&mut guests, "y", 1, &tables(), Locale::En).unwrap();
        assert!(!check.valid);
        assert_eq!(guests[1].table_number, None);

        let check = move_guest(&mut guests, "y", 2, &tables(), Locale::En).unwrap();
        assert!(check.valid);
        assert_eq!(guests[1].table_number, Some(2));
    }

    #[test]
    fn test_move_unknown_guest_errors() {
        let mut guests = vec![Guest::new("x", "X")];
        let err = move_guest(&mut guests, "nope", 1, &tables(), Locale::En).unwrap_err();
        assert_eq!(err.code, ErrorCode::GuestNotFound);
    }

    #[test]
    fn test_unassign_guest() {
        let mut guests = vec![Guest::new("x", "X").seated_at(2)];
        assert_eq!(unassign_guest(&mut guests, "x").unwrap(), Some(2));
        assert_eq!(unassign_guest(&mut guests, "x").unwrap(), None);
        assert!(unassign_guest(&mut guests, "z").is_err());
    }

    #[test]
    fn test_validate_tables_rejects_duplicates() {
        assert!(validate_tables(&tables()).is_ok());

        let dup = vec![Table::new("a", 3, 4), Table::new("b", 3, 6)];
        let err = validate_tables(&dup).unwrap_err();
        assert_eq!(err.code, ErrorCode::DuplicateTableNumber);
    }
}
