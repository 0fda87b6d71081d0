use serde::ser::SerializeStruct;
use serde::{Deserialize, Serialize, Serializer};
use smallvec::{smallvec, SmallVec};

use super::error::TileError;
use super::tile::Tile;

/// 副露种类
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OpenMeldKind {
    /// 吃（顺子）
    Chi,
    /// 碰（刻子）
    Pon,
    /// 明杠
    MingKong,
    /// 暗杠：亮出但不破门清
    AnKong,
}

/// 副露（已宣告的面子）
///
/// 只能通过构造函数创建：吃的起始牌一定是数牌 1-7，三张不会跨花色
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "MeldRecord", into = "MeldRecord")]
pub struct OpenMeld {
    kind: OpenMeldKind,
    /// 吃为最小的一张，其余为该牌
    tile: Tile,
}

impl OpenMeld {
    /// 创建吃，`start` 必须是数牌 1-7
    pub fn chi(start: Tile) -> Option<Self> {
        start.can_start_sequence().then_some(OpenMeld {
            kind: OpenMeldKind::Chi,
            tile: start,
        })
    }

    pub fn pon(tile: Tile) -> Self {
        OpenMeld { kind: OpenMeldKind::Pon, tile }
    }

    pub fn ming_kong(tile: Tile) -> Self {
        OpenMeld { kind: OpenMeldKind::MingKong, tile }
    }

    pub fn an_kong(tile: Tile) -> Self {
        OpenMeld { kind: OpenMeldKind::AnKong, tile }
    }

    #[inline]
    pub fn kind(&self) -> OpenMeldKind {
        self.kind
    }

    /// 代表牌：吃为最小的一张
    #[inline]
    pub fn tile(&self) -> Tile {
        self.tile
    }

    /// 副露包含的所有牌
    pub fn tiles(&self) -> SmallVec<[Tile; 4]> {
        match self.kind {
            OpenMeldKind::Chi => run_of_three(self.tile),
            OpenMeldKind::Pon => smallvec![self.tile; 3],
            OpenMeldKind::MingKong | OpenMeldKind::AnKong => smallvec![self.tile; 4],
        }
    }

    /// 是否为暗杠（不破门清）
    #[inline]
    pub fn is_concealed(&self) -> bool {
        self.kind == OpenMeldKind::AnKong
    }

    /// 转换为拆解结果中的面子
    ///
    /// 暗杠保留未副露标记
    pub fn to_meld_in_hand(&self) -> MeldInHand {
        let tile = self.tile;
        match self.kind {
            OpenMeldKind::Chi => MeldInHand::Sequence { start: tile, is_open: true },
            OpenMeldKind::Pon => MeldInHand::Triplet { tile, is_open: true },
            OpenMeldKind::MingKong => MeldInHand::Quad { tile, is_open: true },
            OpenMeldKind::AnKong => MeldInHand::Quad { tile, is_open: false },
        }
    }
}

/// 以 `start` 开头的三张连续牌
fn run_of_three(start: Tile) -> SmallVec<[Tile; 4]> {
    (0..3).filter_map(|k| Tile::new(start.id() + k)).collect()
}

/// 副露的传输格式：`{ "kind": "PON", "tiles": [5, 5, 5] }`
#[derive(Debug, Clone, Serialize, Deserialize)]
struct MeldRecord {
    kind: OpenMeldKind,
    tiles: Vec<Tile>,
}

impl TryFrom<MeldRecord> for OpenMeld {
    type Error = TileError;

    fn try_from(record: MeldRecord) -> Result<Self, Self::Error> {
        let mut tiles = record.tiles;
        tiles.sort();
        let first = *tiles
            .first()
            .ok_or_else(|| TileError::InvalidMeld("meld has no tiles".to_string()))?;

        let all_same = tiles.iter().all(|&t| t == first);
        let meld = match (record.kind, tiles.len()) {
            (OpenMeldKind::Chi, 3) => {
                OpenMeld::chi(first).filter(|m| m.tiles().as_slice() == tiles.as_slice())
            }
            (OpenMeldKind::Pon, 3) if all_same => Some(OpenMeld::pon(first)),
            (OpenMeldKind::MingKong, 4) if all_same => Some(OpenMeld::ming_kong(first)),
            (OpenMeldKind::AnKong, 4) if all_same => Some(OpenMeld::an_kong(first)),
            _ => None,
        };
        meld.ok_or_else(|| {
            let names: Vec<_> = tiles.iter().map(|t| t.name()).collect();
            TileError::InvalidMeld(format!("{:?} cannot be {}", record.kind, names.join(" ")))
        })
    }
}

impl From<OpenMeld> for MeldRecord {
    fn from(meld: OpenMeld) -> Self {
        MeldRecord {
            kind: meld.kind,
            tiles: meld.tiles().to_vec(),
        }
    }
}

/// 拆解结果中的面子（顺子 / 刻子 / 杠）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MeldInHand {
    /// 顺子（连续三张同花色数牌）
    Sequence { start: Tile, is_open: bool },
    /// 刻子（三张相同牌）
    Triplet { tile: Tile, is_open: bool },
    /// 杠（四张相同牌）
    Quad { tile: Tile, is_open: bool },
}

impl MeldInHand {
    /// 代表牌：顺子为最小的一张，刻子/杠为该牌
    pub fn tile(&self) -> Tile {
        match *self {
            MeldInHand::Sequence { start, .. } => start,
            MeldInHand::Triplet { tile, .. } | MeldInHand::Quad { tile, .. } => tile,
        }
    }

    pub fn is_open(&self) -> bool {
        match *self {
            MeldInHand::Sequence { is_open, .. }
            | MeldInHand::Triplet { is_open, .. }
            | MeldInHand::Quad { is_open, .. } => is_open,
        }
    }

    pub fn is_sequence(&self) -> bool {
        matches!(self, MeldInHand::Sequence { .. })
    }

    /// 刻子或杠
    pub fn is_triplet_like(&self) -> bool {
        matches!(self, MeldInHand::Triplet { .. } | MeldInHand::Quad { .. })
    }

    pub fn tiles(&self) -> SmallVec<[Tile; 4]> {
        match *self {
            MeldInHand::Sequence { start, .. } => run_of_three(start),
            MeldInHand::Triplet { tile, .. } => smallvec![tile; 3],
            MeldInHand::Quad { tile, .. } => smallvec![tile; 4],
        }
    }

    fn type_tag(&self) -> &'static str {
        match self {
            MeldInHand::Sequence { .. } => "SHUN",
            MeldInHand::Triplet { .. } => "KE",
            MeldInHand::Quad { .. } => "GANG",
        }
    }
}

impl Serialize for MeldInHand {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("MeldInHand", 3)?;
        state.serialize_field("type", self.type_tag())?;
        state.serialize_field("tiles", self.tiles().as_slice())?;
        state.serialize_field("isOpen", &self.is_open())?;
        state.end()
    }
}
