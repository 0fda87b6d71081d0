use serde::{Deserialize, Serialize};

use super::error::TileError;

/// 麻将牌类型
///
/// 使用 0-33 的稠密编号表示 34 种牌：
/// - 0-8：萬子 1-9
/// - 9-17：筒子 1-9
/// - 18-26：條子 1-9
/// - 27-30：風牌（東南西北）
/// - 31-33：三元牌（中發白）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Tile(u8);

/// 花色
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Suit {
    Wan = 0,
    Tong = 1,
    Tiao = 2,
    /// 字牌（风牌和三元牌，没有数字）
    Honor = 3,
}

impl Suit {
    /// 三种数牌花色
    pub fn numbered() -> [Suit; 3] {
        [Suit::Wan, Suit::Tong, Suit::Tiao]
    }
}

const TILE_NAMES: [&str; Tile::COUNT] = [
    "1萬", "2萬", "3萬", "4萬", "5萬", "6萬", "7萬", "8萬", "9萬",
    "1筒", "2筒", "3筒", "4筒", "5筒", "6筒", "7筒", "8筒", "9筒",
    "1條", "2條", "3條", "4條", "5條", "6條", "7條", "8條", "9條",
    "東", "南", "西", "北",
    "中", "發", "白",
];

const TILE_UNICODE: [char; Tile::COUNT] = [
    '🀇', '🀈', '🀉', '🀊', '🀋', '🀌', '🀍', '🀎', '🀏',
    '🀙', '🀚', '🀛', '🀜', '🀝', '🀞', '🀟', '🀠', '🀡',
    '🀐', '🀑', '🀒', '🀓', '🀔', '🀕', '🀖', '🀗', '🀘',
    '🀀', '🀁', '🀂', '🀃',
    '🀄', '🀅', '🀆',
];

impl Tile {
    /// 牌的种类数
    pub const COUNT: usize = 34;

    /// 每种牌最多 4 张
    pub const MAX_COPIES: u8 = 4;

    /// 第一张字牌的编号
    pub const FIRST_HONOR: u8 = 27;

    pub const EAST: Tile = Tile(27);
    pub const SOUTH: Tile = Tile(28);
    pub const WEST: Tile = Tile(29);
    pub const NORTH: Tile = Tile(30);
    pub const RED: Tile = Tile(31);
    pub const GREEN: Tile = Tile(32);
    pub const WHITE: Tile = Tile(33);

    /// 国士无双需要的 13 种幺九字牌
    pub const THIRTEEN_ORPHANS: [Tile; 13] = [
        Tile(0), Tile(8), Tile(9), Tile(17), Tile(18), Tile(26),
        Tile(27), Tile(28), Tile(29), Tile(30), Tile(31), Tile(32), Tile(33),
    ];

    /// 创建一张牌，验证编号有效性
    pub const fn new(id: u8) -> Option<Self> {
        if (id as usize) < Self::COUNT {
            Some(Tile(id))
        } else {
            None
        }
    }

    /// 由花色和数字（1-9）创建数牌
    pub fn from_suit_rank(suit: Suit, rank: u8) -> Option<Self> {
        if suit == Suit::Honor || !(1..=9).contains(&rank) {
            return None;
        }
        Some(Tile(suit as u8 * 9 + rank - 1))
    }

    /// 遍历全部 34 种牌（按编号升序）
    pub fn all() -> impl Iterator<Item = Tile> {
        (0..Self::COUNT as u8).map(Tile)
    }

    /// 牌编号（0-33）
    #[inline]
    pub const fn id(self) -> u8 {
        self.0
    }

    /// 作为牌数数组下标
    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// 获取花色
    pub fn suit(self) -> Suit {
        match self.0 / 9 {
            0 => Suit::Wan,
            1 => Suit::Tong,
            2 => Suit::Tiao,
            _ => Suit::Honor,
        }
    }

    /// 获取数字（1-9），字牌返回 `None`
    pub fn rank(self) -> Option<u8> {
        if self.is_honor() {
            None
        } else {
            Some(self.0 % 9 + 1)
        }
    }

    #[inline]
    pub fn is_honor(self) -> bool {
        self.0 >= Self::FIRST_HONOR
    }

    #[inline]
    pub fn is_wind(self) -> bool {
        (27..=30).contains(&self.0)
    }

    #[inline]
    pub fn is_dragon(self) -> bool {
        (31..=33).contains(&self.0)
    }

    /// 是否为老头牌（数牌 1 或 9）
    pub fn is_terminal(self) -> bool {
        matches!(self.rank(), Some(1) | Some(9))
    }

    /// 是否为幺九字牌
    pub fn is_terminal_or_honor(self) -> bool {
        self.is_honor() || self.is_terminal()
    }

    /// 同花色的下一张牌（9 和字牌没有下一张）
    pub fn next_in_suit(self) -> Option<Tile> {
        match self.rank() {
            Some(rank) if rank < 9 => Some(Tile(self.0 + 1)),
            _ => None,
        }
    }

    /// 能否作为顺子的第一张（数牌 1-7）
    pub fn can_start_sequence(self) -> bool {
        matches!(self.rank(), Some(rank) if rank <= 7)
    }

    /// 中文牌名（如 "1萬"、"東"）
    pub fn name(self) -> &'static str {
        TILE_NAMES[self.index()]
    }

    /// Unicode 麻将牌符号
    pub fn to_unicode(self) -> char {
        TILE_UNICODE[self.index()]
    }
}

impl TryFrom<u8> for Tile {
    type Error = TileError;

    fn try_from(id: u8) -> Result<Self, Self::Error> {
        Tile::new(id).ok_or(TileError::InvalidTile(id))
    }
}

impl From<Tile> for u8 {
    fn from(tile: Tile) -> u8 {
        tile.0
    }
}

impl std::fmt::Display for Tile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
