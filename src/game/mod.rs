//! 计分模块
//!
//! 包含场况、规则配置、听牌判定和台数计算

pub mod constants;
pub mod ready;
pub mod rules;
pub mod scenario;
pub mod scoring;

pub use ready::ReadyChecker;
pub use rules::{ConfigError, RuleKey, RulesConfig};
pub use scenario::{Flower, FlowerSet, Scenario, Wind};
pub use scoring::{score, Fan, FanKind, ScoreResult};
