//! 台湾十六张麻将计分引擎
//!
//! 胡牌拆解、听牌判定和台数计算

pub mod tile;
pub mod utils;
pub mod game;

// 重新导出常用类型
pub use tile::{
    decompose, is_win, MeldInHand, OpenMeld, Suit, Tile, TileCounts, TileError, WinShape,
    WinningDecomposition,
};
pub use utils::TileSet;
pub use game::{
    score, ConfigError, Fan, FanKind, Flower, FlowerSet, ReadyChecker, RuleKey, RulesConfig,
    Scenario, ScoreResult, Wind,
};

// Python 绑定模块
#[cfg(feature = "python")]
pub mod python;
