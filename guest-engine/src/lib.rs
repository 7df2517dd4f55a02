//! Guest Engine - 宾客座位分配与套餐限制
//!
//! # 架构概述
//!
//! 对调用方提供的宾客/桌台快照做纯计算，不访问存储。
//! 调用方加载快照、调用本库，再自行持久化接受的结果。
//!
//! - **座位分配** (`seating`): 自动分配、手动换桌、占用统计
//! - **套餐限制** (`plans`): 按套餐限制活动创建数和宾客数
//! - **签到** (`checkin`): 扫码签到与到场统计
//!
//! # 模块结构
//!
//! ```text
//! guest-engine/src/
//! ├── core/          # 配置
//! ├── seating/       # 座位分配、占用、校验
//! ├── plans/         # 套餐限制、计费周期
//! ├── checkin/       # 签到
//! ├── utils/         # 日志
//! └── engine.rs      # GuestEngine 门面
//! ```

pub mod checkin;
pub mod core;
pub mod engine;
pub mod plans;
pub mod seating;
pub mod utils;

// Re-export 公共类型
pub use crate::core::EngineConfig;
pub use engine::GuestEngine;

// Re-export shared 中的统一错误类型
pub use shared::error::{AppError, AppResult, ErrorCategory, ErrorCode};

// Re-export 日志初始化函数
pub use utils::logger::{init_from_config, init_logger, init_logger_with_file};
