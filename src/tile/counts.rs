use std::ops::Index;

use serde::{Deserialize, Serialize};

use super::error::TileError;
use super::tile::Tile;

/// 牌数数组
///
/// 固定 34 格，第 i 格表示编号为 i 的牌有几张（0-4）。
/// 用于表示暗牌（不含胡张）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Vec<u8>", into = "Vec<u8>")]
pub struct TileCounts([u8; Tile::COUNT]);

impl TileCounts {
    /// 创建空的牌数数组
    pub const fn new() -> Self {
        Self([0; Tile::COUNT])
    }

    /// 从原始数组创建，验证每格不超过 4
    pub fn from_array(counts: [u8; Tile::COUNT]) -> Result<Self, TileError> {
        for tile in Tile::all() {
            let count = counts[tile.index()];
            if count > Tile::MAX_COPIES {
                return Err(TileError::TooManyCopies { tile, count });
            }
        }
        Ok(Self(counts))
    }

    /// 从牌列表创建
    pub fn from_tiles<I>(tiles: I) -> Result<Self, TileError>
    where
        I: IntoIterator<Item = Tile>,
    {
        let mut counts = Self::new();
        for tile in tiles {
            if !counts.add_tile(tile) {
                return Err(TileError::TooManyCopies {
                    tile,
                    count: Tile::MAX_COPIES + 1,
                });
            }
        }
        Ok(counts)
    }

    /// 添加一张牌
    ///
    /// # Returns
    ///
    /// - `true`：成功添加
    /// - `false`：该牌已有 4 张
    pub fn add_tile(&mut self, tile: Tile) -> bool {
        let count = &mut self.0[tile.index()];
        if *count >= Tile::MAX_COPIES {
            return false;
        }
        *count += 1;
        true
    }

    /// 添加多张相同的牌，超过 4 张时不做任何修改并返回 `false`
    pub fn add_copies(&mut self, tile: Tile, copies: u8) -> bool {
        let count = &mut self.0[tile.index()];
        if count.saturating_add(copies) > Tile::MAX_COPIES {
            return false;
        }
        *count += copies;
        true
    }

    /// 移除一张牌
    ///
    /// # Returns
    ///
    /// - `true`：成功移除
    /// - `false`：没有该牌
    pub fn remove_tile(&mut self, tile: Tile) -> bool {
        let count = &mut self.0[tile.index()];
        if *count == 0 {
            return false;
        }
        *count -= 1;
        true
    }

    #[inline]
    pub fn count(&self, tile: Tile) -> u8 {
        self.0[tile.index()]
    }

    #[inline]
    pub fn has_tile(&self, tile: Tile) -> bool {
        self.count(tile) > 0
    }

    /// 总牌数
    pub fn total(&self) -> usize {
        self.0.iter().map(|&c| c as usize).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.0.iter().all(|&c| c == 0)
    }

    /// 原始数组（搜索时复制一份再修改）
    #[inline]
    pub fn as_array(&self) -> &[u8; Tile::COUNT] {
        &self.0
    }

    /// 遍历所有数量大于 0 的牌
    pub fn iter(&self) -> impl Iterator<Item = (Tile, u8)> + '_ {
        Tile::all().filter_map(move |tile| {
            let count = self.count(tile);
            (count > 0).then_some((tile, count))
        })
    }

    /// 展开为排序后的牌列表
    pub fn to_tiles(&self) -> Vec<Tile> {
        let mut tiles = Vec::with_capacity(self.total());
        for (tile, count) in self.iter() {
            tiles.extend(std::iter::repeat(tile).take(count as usize));
        }
        tiles
    }

    /// 格式化为牌名（用于调试）
    pub fn format(&self) -> String {
        self.to_tiles()
            .iter()
            .map(|t| t.name())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl Default for TileCounts {
    fn default() -> Self {
        Self::new()
    }
}

impl Index<Tile> for TileCounts {
    type Output = u8;

    fn index(&self, tile: Tile) -> &u8 {
        &self.0[tile.index()]
    }
}

impl TryFrom<Vec<u8>> for TileCounts {
    type Error = TileError;

    fn try_from(counts: Vec<u8>) -> Result<Self, Self::Error> {
        let array: [u8; Tile::COUNT] = counts
            .as_slice()
            .try_into()
            .map_err(|_| TileError::WrongLength(counts.len()))?;
        Self::from_array(array)
    }
}

impl From<TileCounts> for Vec<u8> {
    fn from(counts: TileCounts) -> Vec<u8> {
        counts.0.to_vec()
    }
}
