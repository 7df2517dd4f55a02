//! Plan Limit Evaluator
//!
//! Advisory checks run before a write. They do not lock anything, so two
//! concurrent additions can both pass; the API layer re-checks at write time
//! when it needs a hard guarantee.

use shared::error::ErrorCode;
use shared::i18n::{Locale, Message};
use shared::models::{EventPlanPurchase, PlanDecision, PlanType};

fn allowed(message: Message, limit: Option<u32>, locale: Locale) -> PlanDecision {
    PlanDecision {
        allowed: true,
        code: ErrorCode::Success,
        message: message.render(locale),
        limit,
    }
}

fn denied(code: ErrorCode, message: Message, limit: u32, locale: Locale) -> PlanDecision {
    PlanDecision {
        allowed: false,
        code,
        message: message.render(locale),
        limit: Some(limit),
    }
}

/// May the account create another event this period?
///
/// FREE accounts get one event per period. Paid tiers are not capped here;
/// their period allowances are enforced by the billing provider.
pub fn evaluate_create_event(
    account_plan: PlanType,
    current_event_count: u32,
    locale: Locale,
) -> PlanDecision {
    match account_plan.max_events_per_period() {
        0 => allowed(Message::EventCreationAllowed, None, locale),
        limit if current_event_count >= limit => {
            tracing::warn!(
                plan = %account_plan,
                current = current_event_count,
                max = limit,
                "Event creation limit reached"
            );
            denied(
                ErrorCode::EventLimitReached,
                Message::EventLimitReached {
                    plan: account_plan,
                    limit,
                },
                limit,
                locale,
            )
        }
        limit => allowed(Message::EventCreationAllowed, Some(limit), locale),
    }
}

/// The plan that sets an event's guest limit
///
/// A paid per-event purchase wins; anything else (no purchase, pending,
/// failed or refunded payment) falls back to the account plan.
pub fn resolve_effective_plan(
    event_purchase: Option<&EventPlanPurchase>,
    account_plan: PlanType,
) -> PlanType {
    match event_purchase {
        Some(purchase) if purchase.is_confirmed() => purchase.plan,
        Some(purchase) => {
            tracing::debug!(
                event_id = %purchase.event_id,
                plan = %purchase.plan,
                "Event plan not paid, using account plan"
            );
            account_plan
        }
        None => account_plan,
    }
}

/// May the event hold `proposed_guest_count` guests?
pub fn evaluate_add_guests(
    event_purchase: Option<&EventPlanPurchase>,
    account_plan: PlanType,
    proposed_guest_count: u32,
    locale: Locale,
) -> PlanDecision {
    let plan = resolve_effective_plan(event_purchase, account_plan);

    match plan.guest_limit() {
        Some(limit) if proposed_guest_count > limit => {
            tracing::warn!(
                plan = %plan,
                proposed = proposed_guest_count,
                max = limit,
                "Guest limit exceeded"
            );
            denied(
                ErrorCode::GuestLimitReached,
                Message::GuestLimitExceeded {
                    plan,
                    limit,
                    proposed: proposed_guest_count,
                },
                limit,
                locale,
            )
        }
        limit => allowed(Message::GuestsWithinLimit, limit, locale),
    }
}

/// Guests that still fit under `plan`, `None` when unlimited
pub fn remaining_guest_slots(plan: PlanType, current_guest_count: u32) -> Option<u32> {
    plan.guest_limit()
        .map(|limit| limit.saturating_sub(current_guest_count))
}
