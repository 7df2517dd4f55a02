//! 套餐模型
//!
//! 两个相互独立的套餐概念:
//! - [`AccountSubscription`]: 账户订阅，限制每个周期可创建的活动数
//! - [`EventPlanPurchase`]: 单个活动购买的套餐，限制该活动的宾客数

use crate::error::{AppError, AppResult};
use crate::types::Timestamp;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// 计划类型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PlanType {
    Free,
    Essential,
    Premium,
    Professional,
}

impl PlanType {
    pub fn as_str(&self) -> &'static str {
        match self {
            PlanType::Free => "FREE",
            PlanType::Essential => "ESSENTIAL",
            PlanType::Premium => "PREMIUM",
            PlanType::Professional => "PROFESSIONAL",
        }
    }

    /// 返回该计划单个活动允许的最大宾客数
    /// 0 表示无限制
    pub fn max_guests(&self) -> u32 {
        match self {
            PlanType::Free => 50,
            PlanType::Essential => 200,
            PlanType::Premium | PlanType::Professional => 0, // 无限
        }
    }

    /// 返回每个计费周期允许创建的活动数
    /// 0 表示无限制 (付费计划的周期额度由 Stripe 管理)
    pub fn max_events_per_period(&self) -> u32 {
        match self {
            PlanType::Free => 1,
            _ => 0,
        }
    }

    /// 宾客上限，`None` 表示无限制
    pub fn guest_limit(&self) -> Option<u32> {
        match self.max_guests() {
            0 => None,
            n => Some(n),
        }
    }
}

impl fmt::Display for PlanType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PlanType {
    type Err = AppError;

    fn from_str(s: &str) -> AppResult<Self> {
        match s.trim().to_ascii_uppercase().as_str() {
            "FREE" => Ok(PlanType::Free),
            "ESSENTIAL" => Ok(PlanType::Essential),
            "PREMIUM" => Ok(PlanType::Premium),
            "PROFESSIONAL" => Ok(PlanType::Professional),
            _ => Err(AppError::unknown_plan(s)),
        }
    }
}

/// 订阅状态
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SubscriptionStatus {
    /// 注册未付费
    Inactive,
    /// 付费正常
    Active,
    /// 扣费失败，Stripe 重试中
    PastDue,
    /// 主动终止/重试全败
    Canceled,
    /// 长期欠费
    Unpaid,
}

impl SubscriptionStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            SubscriptionStatus::Inactive => "inactive",
            SubscriptionStatus::Active => "active",
            SubscriptionStatus::PastDue => "past_due",
            SubscriptionStatus::Canceled => "canceled",
            SubscriptionStatus::Unpaid => "unpaid",
        }
    }

    /// 是否处于失去付费权益的状态
    pub fn is_blocked(&self) -> bool {
        matches!(
            self,
            SubscriptionStatus::Inactive | SubscriptionStatus::Canceled | SubscriptionStatus::Unpaid
        )
    }
}

/// 账户级订阅
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountSubscription {
    pub plan: PlanType,
    pub status: SubscriptionStatus,
}

impl AccountSubscription {
    pub fn new(plan: PlanType, status: SubscriptionStatus) -> Self {
        Self { plan, status }
    }

    /// 用于限额检查的套餐，订阅被封锁时降级为 FREE
    pub fn effective_plan(&self) -> PlanType {
        if self.status.is_blocked() {
            PlanType::Free
        } else {
            self.plan
        }
    }
}

impl Default for AccountSubscription {
    fn default() -> Self {
        Self {
            plan: PlanType::Free,
            status: SubscriptionStatus::Active,
        }
    }
}

/// 活动套餐支付状态
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentStatus {
    Pending,
    Paid,
    Failed,
    Refunded,
}

/// 单个活动购买的套餐
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventPlanPurchase {
    pub event_id: String,
    pub plan: PlanType,
    pub payment_status: PaymentStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub purchased_at: Option<Timestamp>,
}

impl EventPlanPurchase {
    /// 只有已支付的购买才会覆盖账户套餐
    pub fn is_confirmed(&self) -> bool {
        self.payment_status == PaymentStatus::Paid
    }
}

/// 套餐限额检查结果 (允许/拒绝)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanDecision {
    pub allowed: bool,
    pub code: crate::error::ErrorCode,
    pub message: String,
    /// 实际应用的上限，`None` 表示无限制
    pub limit: Option<u32>,
}
