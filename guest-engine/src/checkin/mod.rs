//! Guest check-in
//!
//! Guests scan the event QR code and are stamped as present. The seat they
//! were given is echoed back so they can find their table.

use shared::error::ErrorCode;
use shared::i18n::{Locale, Message};
use shared::models::{AttendanceSummary, CheckInOutcome, Guest};
use shared::types::Timestamp;

/// Mark `guest_id` as present at `now`
///
/// Repeated check-ins keep the first timestamp and report it back.
pub fn check_in(
    guests: &mut [Guest],
    guest_id: &str,
    now: Timestamp,
    locale: Locale,
) -> CheckInOutcome {
    let Some(guest) = guests.iter_mut().find(|g| g.id == guest_id) else {
        tracing::warn!(guest_id, "Check-in for unknown guest");
        return CheckInOutcome::Rejected {
            code: ErrorCode::GuestNotFound,
            message: Message::GuestNotFound.render(locale),
        };
    };

    if let Some(at) = guest.checked_in_at {
        tracing::debug!(guest_id, at, "Guest already checked in");
        return CheckInOutcome::AlreadyCheckedIn {
            at,
            code: ErrorCode::GuestAlreadyCheckedIn,
            message: Message::AlreadyCheckedIn {
                name: guest.name.clone(),
            }
            .render(locale),
        };
    }

    guest.checked_in_at = Some(now);
    tracing::info!(
        guest_id,
        table_number = ?guest.table_number,
        "Guest checked in"
    );

    CheckInOutcome::CheckedIn {
        table_number: guest.table_number,
        message: Message::CheckedIn {
            name: guest.name.clone(),
            table_number: guest.table_number,
        }
        .render(locale),
    }
}

pub fn attendance_summary(guests: &[Guest]) -> AttendanceSummary {
    let mut summary = AttendanceSummary {
        total: guests.len(),
        ..Default::default()
    };

    for guest in guests.iter().filter(|g| g.is_checked_in()) {
        summary.checked_in += 1;
        match guest.table_number {
            Some(n) => *summary.checked_in_by_table.entry(n).or_default() += 1,
            None => summary.checked_in_unassigned += 1,
        }
    }
    summary.pending = summary.total - summary.checked_in;

    summary
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_check_in_reports_table() {
        let mut guests = vec![Guest::new("g1", "Ana").seated_at(3)];
        let outcome = check_in(&mut guests, "g1", 1_000, Locale::PtBr);

        assert!(outcome.is_admitted());
        assert_eq!(outcome.code(), ErrorCode::Success);
        assert_eq!(
            outcome,
            CheckInOutcome::CheckedIn {
                table_number: Some(3),
                message: "Bem-vindo(a), Ana! Sua mesa é a 3".to_string(),
            }
        );
        assert_eq!(guests[0].checked_in_at, Some(1_000));
    }

    #[test]
    fn test_repeat_check_in_keeps_first_time() {
        let mut guests = vec![Guest::new("g1", "Ana")];
        check_in(&mut guests, "g1", 1_000, Locale::En);
        let outcome = check_in(&mut guests, "g1", 5_000, Locale::En);

        assert!(outcome.is_admitted());
        assert!(matches!(
            outcome,
            CheckInOutcome::AlreadyCheckedIn {
                at: 1_000,
                code: ErrorCode::GuestAlreadyCheckedIn,
                ..
            }
        ));
        assert_eq!(outcome.code(), ErrorCode::GuestAlreadyCheckedIn);
        assert_eq!(guests[0].checked_in_at, Some(1_000));

        let json = serde_json::to_value(&outcome).unwrap();
        assert_eq!(json["outcome"], "already_checked_in");
        assert_eq!(json["code"], 4003);
        assert_eq!(json["at"], 1_000);
    }

    #[test]
    fn test_unknown_guest_rejected() {
        let mut guests = vec![Guest::new("g1", "Ana")];
        let outcome = check_in(&mut guests, "zz", 1_000, Locale::En);

        assert!(!outcome.is_admitted());
        assert_eq!(outcome.message(), "Guest not found");
        assert_eq!(outcome.code(), ErrorCode::GuestNotFound);
    }

    #[test]
    fn test_attendance_summary() {
        let mut guests = vec![
            Guest::new("a", "A").seated_at(1),
            Guest::new("b", "B").seated_at(1),
            Guest::new("c", "C").seated_at(2),
            Guest::new("d", "D"),
        ];
        for id in ["a", "b", "d"] {
            check_in(&mut guests, id, 42, Locale::En);
        }

        let summary = attendance_summary(&guests);
        assert_eq!(summary.total, 4);
        assert_eq!(summary.checked_in, 3);
        assert_eq!(summary.pending, 1);
        assert_eq!(summary.checked_in_by_table.get(&1), Some(&2));
        assert_eq!(summary.checked_in_by_table.get(&2), None);
        assert_eq!(summary.checked_in_unassigned, 1);
    }

    #[test]
    fn test_empty_summary() {
        assert_eq!(attendance_summary(&[]), AttendanceSummary::default());
    }
}
