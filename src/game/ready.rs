use crate::tile::win_check::decompose;
use crate::tile::{OpenMeld, Tile, TileCounts};
use crate::utils::TileSet;

/// 听牌判定器
pub struct ReadyChecker;

impl ReadyChecker {
    /// 计算听牌集合
    ///
    /// 对 34 种牌逐一试作胡张，能拆解成功的即为所听的牌。
    /// 暗牌中已有 4 张的牌不可能再来，直接跳过
    ///
    /// # 参数
    ///
    /// - `concealed`: 暗牌（不含胡张）
    /// - `open_melds`: 副露
    ///
    /// # 返回
    ///
    /// 所听的牌（可能为空）
    pub fn waiting_tiles(concealed: &TileCounts, open_melds: &[OpenMeld]) -> TileSet {
        let waits: TileSet = Tile::all()
            .filter(|&tile| concealed.count(tile) < Tile::MAX_COPIES)
            .filter(|&tile| decompose(concealed, open_melds, tile).is_some())
            .collect();
        log::trace!(
            "waiting set for [{}]: {:?}",
            concealed.format(),
            waits.iter().map(Tile::name).collect::<Vec<_>>()
        );
        waits
    }

    /// 检查是否听牌
    pub fn is_ready(concealed: &TileCounts, open_melds: &[OpenMeld]) -> bool {
        Tile::all()
            .filter(|&tile| concealed.count(tile) < Tile::MAX_COPIES)
            .any(|tile| decompose(concealed, open_melds, tile).is_some())
    }

    /// 是否独听（只听一张）
    pub fn is_single_wait(concealed: &TileCounts, open_melds: &[OpenMeld]) -> bool {
        ReadyChecker::waiting_tiles(concealed, open_melds).len() == 1
    }
}
