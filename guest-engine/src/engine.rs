//! Guest Engine
//!
//! One handle over the seating, plan and check-in functions that carries
//! the configured locale and default table size.

use crate::checkin;
use crate::core::EngineConfig;
use crate::plans;
use crate::seating;
use shared::error::AppResult;
use shared::models::{
    AssignmentCheck, AttendanceSummary, CheckInOutcome, EventPlanPurchase, Guest, PlanDecision,
    PlanType, SeatAssignment, SeatingOverview, Table, TableOccupancy,
};
use shared::types::Timestamp;
use shared::util::now_millis;

#[derive(Debug, Clone, Default)]
pub struct GuestEngine {
    config: EngineConfig,
}

impl GuestEngine {
    pub fn new(config: EngineConfig) -> Self {
        Self { config }
    }

    /// Load configuration from the environment and build the engine
    ///
    /// # Errors
    ///
    /// `ConfigError` when the environment holds an unusable value.
    pub fn from_env() -> AppResult<Self> {
        Ok(Self::new(EngineConfig::load()?))
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    // ==================== Seating ====================

    pub fn auto_distribute(&self, guests: &[Guest], tables: &[Table]) -> Vec<SeatAssignment> {
        seating::auto_distribute(guests, tables)
    }

    pub fn redistribute(&self, guests: &[Guest], tables: &[Table]) -> Vec<SeatAssignment> {
        seating::redistribute(guests, tables)
    }

    /// Distribute unassigned guests and write the result onto `guests`
    ///
    /// Returns the proposals that were applied.
    pub fn seat_unassigned(&self, guests: &mut [Guest], tables: &[Table]) -> Vec<SeatAssignment> {
        let distribution = seating::auto_distribute(guests, tables);
        let changed = seating::apply_distribution(guests, &distribution);
        tracing::info!(changed, "Unassigned guests seated");
        distribution
    }

    pub fn occupancy(
        &self,
        table_number: u32,
        guests: &[Guest],
        tables: &[Table],
    ) -> TableOccupancy {
        seating::get_occupancy(table_number, guests, tables)
    }

    pub fn overview(&self, guests: &[Guest], tables: &[Table]) -> SeatingOverview {
        seating::seating_overview(guests, tables)
    }

    pub fn validate_assignment(
        &self,
        guest_id: &str,
        table_number: u32,
        guests: &[Guest],
        tables: &[Table],
    ) -> AssignmentCheck {
        seating::validate_assignment(guest_id, table_number, guests, tables, self.config.locale)
    }

    /// # Errors
    ///
    /// `GuestNotFound` when no guest has `guest_id`.
    pub fn move_guest(
        &self,
        guests: &mut [Guest],
        guest_id: &str,
        table_number: u32,
        tables: &[Table],
    ) -> AppResult<AssignmentCheck> {
        seating::move_guest(guests, guest_id, table_number, tables, self.config.locale)
    }

    /// Extra tables needed at the configured default size
    pub fn suggest_additional_tables(&self, guests: &[Guest], tables: &[Table]) -> u32 {
        seating::suggest_additional_tables(guests, tables, self.config.default_table_capacity)
    }

    // ==================== Plans ====================

    pub fn evaluate_create_event(
        &self,
        account_plan: PlanType,
        current_event_count: u32,
    ) -> PlanDecision {
        plans::evaluate_create_event(account_plan, current_event_count, self.config.locale)
    }

    /// Count this period's events from their creation times, then evaluate
    ///
    /// # Errors
    ///
    /// `ValueOutOfRange` when `now` is not a representable date.
    pub fn evaluate_create_event_at(
        &self,
        account_plan: PlanType,
        created_at: &[Timestamp],
        now: Timestamp,
    ) -> AppResult<PlanDecision> {
        let count = plans::events_in_current_period(created_at, now)?;
        Ok(self.evaluate_create_event(account_plan, count))
    }

    pub fn evaluate_add_guests(
        &self,
        event_purchase: Option<&EventPlanPurchase>,
        account_plan: PlanType,
        proposed_guest_count: u32,
    ) -> PlanDecision {
        plans::evaluate_add_guests(
            event_purchase,
            account_plan,
            proposed_guest_count,
            self.config.locale,
        )
    }

    // ==================== Check-in ====================

    pub fn check_in(&self, guests: &mut [Guest], guest_id: &str, now: Timestamp) -> CheckInOutcome {
        checkin::check_in(guests, guest_id, now, self.config.locale)
    }

    /// Check in at the current wall-clock time
    pub fn check_in_now(&self, guests: &mut [Guest], guest_id: &str) -> CheckInOutcome {
        self.check_in(guests, guest_id, now_millis())
    }

    pub fn attendance(&self, guests: &[Guest]) -> AttendanceSummary {
        checkin::attendance_summary(guests)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::i18n::Locale;

    fn engine(locale: Locale, default_table_capacity: u32) -> GuestEngine {
        GuestEngine::new(EngineConfig {
            locale,
            default_table_capacity,
            ..Default::default()
        })
    }

    #[test]
    fn test_messages_follow_configured_locale() {
        let tables = vec![Table::new("t1", 1, 1)];
        let guests = vec![Guest::new("a", "A")];

        let pt = engine(Locale::PtBr, 10).validate_assignment("a", 1, &guests, &tables);
        let en = engine(Locale::En, 10).validate_assignment("a", 1, &guests, &tables);
        assert_eq!(pt.message, "Mesa disponível");
        assert_eq!(en.message, "Table available");
    }

    #[test]
    fn test_seat_unassigned_writes_back() {
        let tables = vec![Table::new("t1", 1, 2)];
        let mut guests = vec![Guest::new("a", "A"), Guest::new("b", "B"), Guest::new("c", "C")];

        let applied = engine(Locale::En, 10).seat_unassigned(&mut guests, &tables);
        assert_eq!(applied.len(), 2);
        assert_eq!(guests[0].table_number, Some(1));
        assert_eq!(guests[1].table_number, Some(1));
        assert_eq!(guests[2].table_number, None);
    }

    #[test]
    fn test_suggestion_uses_configured_capacity() {
        let guests: Vec<Guest> = (0..25).map(|i| Guest::new(format!("g{i}"), "G")).collect();
        let tables = vec![Table::new("t1", 1, 5)];
        assert_eq!(engine(Locale::En, 8).suggest_additional_tables(&guests, &tables), 3);
    }

    #[test]
    fn test_check_in_now_stamps_current_time() {
        let mut guests = vec![Guest::new("a", "Ana").seated_at(4)];
        let before = now_millis();

        let outcome = engine(Locale::En, 10).check_in_now(&mut guests, "a");
        assert!(outcome.is_admitted());
        assert!(guests[0].checked_in_at.is_some_and(|at| at >= before));
        assert_eq!(engine(Locale::En, 10).attendance(&guests).checked_in, 1);
    }

    #[test]
    fn test_create_event_from_history() {
        let engine = engine(Locale::En, 10);
        let now = 1_773_000_000_000; // March 2026
        let decision = engine
            .evaluate_create_event_at(PlanType::Free, &[now - 1_000], now)
            .unwrap();
        assert!(!decision.allowed);

        let decision = engine.evaluate_create_event_at(PlanType::Free, &[], now).unwrap();
        assert!(decision.allowed);
    }
}
