use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};
use smallvec::SmallVec;

use super::counts::TileCounts;
use super::meld::{MeldInHand, OpenMeld};
use super::tile::Tile;

/// 胡牌需要的面子数（16 张麻将：5 组面子 + 1 对将，共 17 张）
pub const MELDS_PER_HAND: usize = 5;

/// 七对子 / 国士无双的总牌数
const SPECIAL_SHAPE_TILES: usize = 14;

/// 胡牌牌型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum WinShape {
    /// 基本胡牌型（5 组面子 + 1 对将）
    Standard,
    /// 七对子
    SevenPairs,
    /// 国士无双
    ThirteenOrphans,
}

/// 胡牌拆解结果
///
/// 七对子时 `melds` 是把第 2-7 对改写成的刻子，仅为了兼容下游格式；
/// 台数判定应使用 [`WinningDecomposition::real_melds`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WinningDecomposition {
    /// 胡牌牌型
    pub shape: WinShape,
    /// 将（对子）
    pub pair: Tile,
    /// 所有面子：副露在前，暗牌拆出的面子在后
    pub melds: SmallVec<[MeldInHand; 6]>,
}

impl WinningDecomposition {
    /// 真正的面子（只有基本胡牌型才有）
    pub fn real_melds(&self) -> &[MeldInHand] {
        match self.shape {
            WinShape::Standard => &self.melds,
            WinShape::SevenPairs | WinShape::ThirteenOrphans => &[],
        }
    }

    /// 真正的刻子和杠
    pub fn triplets(&self) -> impl Iterator<Item = &MeldInHand> + '_ {
        self.real_melds().iter().filter(|m| m.is_triplet_like())
    }

    /// 是否全部为顺子（且为基本胡牌型）
    pub fn is_all_sequences(&self) -> bool {
        self.shape == WinShape::Standard && self.melds.iter().all(|m| m.is_sequence())
    }

    /// 是否全部为刻子/杠（且为基本胡牌型）
    pub fn is_all_triplets(&self) -> bool {
        self.shape == WinShape::Standard && self.melds.iter().all(|m| m.is_triplet_like())
    }
}

impl Serialize for WinningDecomposition {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("WinningDecomposition", 3)?;
        state.serialize_field("shape", &self.shape)?;
        state.serialize_field("pair", &[self.pair, self.pair])?;
        state.serialize_field("melds", self.melds.as_slice())?;
        state.end()
    }
}

/// 胡牌拆解
///
/// # 参数
///
/// - `concealed`: 暗牌（不含胡张）
/// - `open_melds`: 副露（0-5 组）
/// - `winning_tile`: 胡张
///
/// # 算法
///
/// 1. 把胡张加入暗牌副本
/// 2. 无副露且共 14 张时检查七对子
/// 3. 基本胡牌型：依次尝试每种对子，剩余暗牌用回溯拆成 `5 - 副露数` 组面子。
///    从编号最小的牌开始，先试刻子再试顺子，返回第一个成功的拆解
/// 4. 无副露时检查国士无双
///
/// 无法胡牌返回 `None`，这是常见结果而非错误
pub fn decompose(
    concealed: &TileCounts,
    open_melds: &[OpenMeld],
    winning_tile: Tile,
) -> Option<WinningDecomposition> {
    let mut counts = *concealed.as_array();
    counts[winning_tile.index()] += 1;
    if counts[winning_tile.index()] > Tile::MAX_COPIES {
        return None;
    }

    if let Some(result) = check_seven_pairs(&counts, open_melds) {
        return Some(result);
    }

    if open_melds.len() <= MELDS_PER_HAND {
        let needed = MELDS_PER_HAND - open_melds.len();
        if let Some((pair, concealed_melds)) = search_standard(&mut counts, needed) {
            let mut melds: SmallVec<[MeldInHand; 6]> =
                open_melds.iter().map(OpenMeld::to_meld_in_hand).collect();
            melds.extend(concealed_melds);
            return Some(WinningDecomposition {
                shape: WinShape::Standard,
                pair,
                melds,
            });
        }
    }

    if open_melds.is_empty() && is_thirteen_orphans(&counts) {
        let pair = Tile::THIRTEEN_ORPHANS
            .iter()
            .copied()
            .find(|t| counts[t.index()] == 2)?;
        return Some(WinningDecomposition {
            shape: WinShape::ThirteenOrphans,
            pair,
            melds: SmallVec::new(),
        });
    }

    None
}

/// 便捷函数：是否胡牌
pub fn is_win(concealed: &TileCounts, open_melds: &[OpenMeld], winning_tile: Tile) -> bool {
    decompose(concealed, open_melds, winning_tile).is_some()
}

/// 检查七对子（必须无副露）
fn check_seven_pairs(
    counts: &[u8; Tile::COUNT],
    open_melds: &[OpenMeld],
) -> Option<WinningDecomposition> {
    if !open_melds.is_empty() || !is_seven_pairs(counts) {
        return None;
    }

    let pairs: SmallVec<[Tile; 7]> = Tile::all().filter(|t| counts[t.index()] == 2).collect();

    // 第一对作为将，其余 6 对改写成刻子，仅用于兼容拆解格式
    let melds = pairs[1..]
        .iter()
        .map(|&tile| MeldInHand::Triplet { tile, is_open: false })
        .collect();
    Some(WinningDecomposition {
        shape: WinShape::SevenPairs,
        pair: pairs[0],
        melds,
    })
}

/// 尝试每种对子，剩余的牌恰好拆成 `needed` 组面子
fn search_standard(
    counts: &mut [u8; Tile::COUNT],
    needed: usize,
) -> Option<(Tile, SmallVec<[MeldInHand; 5]>)> {
    if total(counts) != needed * 3 + 2 {
        return None;
    }

    let mut melds = SmallVec::new();
    for pair in Tile::all() {
        let idx = pair.index();
        if counts[idx] < 2 {
            continue;
        }
        counts[idx] -= 2;
        let found = extract_melds(counts, needed, &mut melds);
        counts[idx] += 2;
        if found {
            return Some((pair, melds));
        }
    }
    None
}

/// 回溯拆面子
///
/// 总是处理编号最小的剩余牌：先试刻子，再试以它开头的顺子。
/// 返回前恢复 `counts`，成功时 `melds` 按拆出顺序保存结果
fn extract_melds(
    counts: &mut [u8; Tile::COUNT],
    remaining: usize,
    melds: &mut SmallVec<[MeldInHand; 5]>,
) -> bool {
    let first = match counts.iter().position(|&c| c > 0) {
        Some(idx) => idx,
        None => return remaining == 0,
    };
    if remaining == 0 {
        return false;
    }
    let tile = match Tile::new(first as u8) {
        Some(tile) => tile,
        None => return false,
    };

    // 刻子
    if counts[first] >= 3 {
        counts[first] -= 3;
        melds.push(MeldInHand::Triplet { tile, is_open: false });
        let found = extract_melds(counts, remaining - 1, melds);
        counts[first] += 3;
        if found {
            return true;
        }
        melds.pop();
    }

    // 顺子（只有数牌 1-7 可以开头）
    if tile.can_start_sequence() && counts[first + 1] > 0 && counts[first + 2] > 0 {
        counts[first] -= 1;
        counts[first + 1] -= 1;
        counts[first + 2] -= 1;
        melds.push(MeldInHand::Sequence { start: tile, is_open: false });
        let found = extract_melds(counts, remaining - 1, melds);
        counts[first] += 1;
        counts[first + 1] += 1;
        counts[first + 2] += 1;
        if found {
            return true;
        }
        melds.pop();
    }

    false
}

/// 判断是否为七对子
///
/// 共 14 张，每种牌 0 张或恰好 2 张，且恰好 7 种为 2 张（四张相同不算两对）
pub fn is_seven_pairs(counts: &[u8; Tile::COUNT]) -> bool {
    if total(counts) != SPECIAL_SHAPE_TILES {
        return false;
    }
    counts.iter().all(|&c| c == 0 || c == 2) && counts.iter().filter(|&&c| c == 2).count() == 7
}

/// 判断是否为国士无双
///
/// 13 种幺九字牌各 1-2 张，恰好一种 2 张，且没有其他牌
pub fn is_thirteen_orphans(counts: &[u8; Tile::COUNT]) -> bool {
    let mut pair_count = 0;
    for tile in Tile::THIRTEEN_ORPHANS {
        match counts[tile.index()] {
            1 => {}
            2 => pair_count += 1,
            _ => return false,
        }
    }

    let others = Tile::all()
        .filter(|t| !t.is_terminal_or_honor())
        .any(|t| counts[t.index()] > 0);

    !others && pair_count == 1
}

/// 计算暗刻数量
///
/// 暗刻和暗杠都算。荣和（非自摸）时，胡牌前手里恰好有两张胡张、
/// 且拆解出该牌的暗刻，说明这组刻子是别人打出的牌补成的，扣掉一组。
/// 手里原本已有三张时，胡张补的是别的面子或将，刻子仍算暗刻。
/// 七对子和国士无双返回 0
///
/// # 参数
///
/// - `concealed`: 暗牌（不含胡张）
pub fn count_concealed_triplets(
    decomposition: &WinningDecomposition,
    concealed: &TileCounts,
    winning_tile: Tile,
    is_self_draw: bool,
) -> usize {
    let triplets = decomposition.triplets().filter(|m| !m.is_open()).count();

    let completed_by_discard = !is_self_draw
        && concealed.count(winning_tile) == 2
        && decomposition.real_melds().iter().any(|m| {
            matches!(m, MeldInHand::Triplet { tile, is_open: false } if *tile == winning_tile)
        });

    if completed_by_discard {
        triplets.saturating_sub(1)
    } else {
        triplets
    }
}

/// 计算杠的数量
pub fn count_kongs(decomposition: &WinningDecomposition) -> usize {
    decomposition
        .real_melds()
        .iter()
        .filter(|m| matches!(m, MeldInHand::Quad { .. }))
        .count()
}

/// 是否门清（无副露，暗杠允许）
pub fn is_men_qing(open_melds: &[OpenMeld]) -> bool {
    open_melds.iter().all(OpenMeld::is_concealed)
}

/// 检查牌数是否合法：暗牌 + 胡张 + 副露中同一种牌不超过 4 张
///
/// 副露组数不设上限，用 `usize` 计数
pub fn validate_tile_counts(
    concealed: &TileCounts,
    open_melds: &[OpenMeld],
    winning_tile: Tile,
) -> bool {
    let mut totals = [0usize; Tile::COUNT];
    for (tile, count) in concealed.iter() {
        totals[tile.index()] += count as usize;
    }
    totals[winning_tile.index()] += 1;
    for meld in open_melds {
        for tile in meld.tiles() {
            totals[tile.index()] += 1;
        }
    }
    totals.iter().all(|&c| c <= Tile::MAX_COPIES as usize)
}

#[inline]
fn total(counts: &[u8; Tile::COUNT]) -> usize {
    counts.iter().map(|&c| c as usize).sum()
}
