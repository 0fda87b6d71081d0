//! 牌相关模块
//!
//! 包含牌（Tile）、牌数数组（TileCounts）、面子（OpenMeld / MeldInHand）
//! 和胡牌拆解的实现

pub mod counts;
pub mod error;
pub mod meld;
pub mod tile;
pub mod win_check;

// 重新导出常用类型
pub use counts::TileCounts;
pub use error::TileError;
pub use meld::{MeldInHand, OpenMeld, OpenMeldKind};
pub use tile::{Suit, Tile};
pub use win_check::{
    count_concealed_triplets, count_kongs, decompose, is_men_qing, is_seven_pairs,
    is_thirteen_orphans, is_win, validate_tile_counts, WinShape, WinningDecomposition,
    MELDS_PER_HAND,
};
