use serde::{Deserialize, Serialize};

use crate::tile::Tile;

/// 牌集合位掩码
///
/// 使用 u64 的低 34 位表示 34 种牌是否在集合中，第 i 位对应编号 i。
/// 听牌集合最多 34 个元素，用位掩码避免每次探测都分配内存
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "Vec<Tile>", into = "Vec<Tile>")]
pub struct TileSet(u64);

impl TileSet {
    /// 创建空集合
    pub const fn new() -> Self {
        Self(0)
    }

    /// 插入一张牌，返回插入前是否不存在
    pub fn insert(&mut self, tile: Tile) -> bool {
        let bit = 1u64 << tile.id();
        let absent = self.0 & bit == 0;
        self.0 |= bit;
        absent
    }

    #[inline]
    pub fn contains(&self, tile: Tile) -> bool {
        self.0 & (1u64 << tile.id()) != 0
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.0.count_ones() as usize
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    /// 仅有一个元素时返回该牌
    pub fn single(&self) -> Option<Tile> {
        if self.len() == 1 {
            Tile::new(self.0.trailing_zeros() as u8)
        } else {
            None
        }
    }

    /// 按编号升序遍历
    pub fn iter(&self) -> impl Iterator<Item = Tile> + '_ {
        let bits = self.0;
        Tile::all().filter(move |t| bits & (1u64 << t.id()) != 0)
    }
}

impl FromIterator<Tile> for TileSet {
    fn from_iter<I: IntoIterator<Item = Tile>>(iter: I) -> Self {
        let mut set = TileSet::new();
        for tile in iter {
            set.insert(tile);
        }
        set
    }
}

impl From<Vec<Tile>> for TileSet {
    fn from(tiles: Vec<Tile>) -> Self {
        tiles.into_iter().collect()
    }
}

impl From<TileSet> for Vec<Tile> {
    fn from(set: TileSet) -> Self {
        set.iter().collect()
    }
}
