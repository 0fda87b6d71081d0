use std::fmt;

use super::tile::Tile;

/// 数据模型构造错误
///
/// 引擎本身不会失败（无法胡牌用 `None` 表示），只有从外部数据构造牌、
/// 风位、花牌、副露或牌数数组时才可能返回此错误
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TileError {
    /// 牌编号超出 0-33
    InvalidTile(u8),
    /// 花牌编号超出 0-7
    InvalidFlower(u8),
    /// 风位编号不是 27-30
    InvalidWind(u8),
    /// 牌数数组长度不是 34
    WrongLength(usize),
    /// 同一种牌超过 4 张
    TooManyCopies { tile: Tile, count: u8 },
    /// 副露的牌无法组成声明的面子
    InvalidMeld(String),
}

impl fmt::Display for TileError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TileError::InvalidTile(id) => write!(f, "invalid tile id {id}, expected 0-33"),
            TileError::InvalidFlower(id) => write!(f, "invalid flower id {id}, expected 0-7"),
            TileError::InvalidWind(id) => write!(f, "invalid wind id {id}, expected 27-30"),
            TileError::WrongLength(len) => {
                write!(f, "tile count vector has {len} entries, expected {}", Tile::COUNT)
            }
            TileError::TooManyCopies { tile, count } => {
                write!(f, "{count} copies of {} exceed the limit of 4", tile.name())
            }
            TileError::InvalidMeld(reason) => write!(f, "invalid meld: {reason}"),
        }
    }
}

impl std::error::Error for TileError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            TileError::InvalidTile(40).to_string(),
            "invalid tile id 40, expected 0-33"
        );
        assert_eq!(
            TileError::WrongLength(13).to_string(),
            "tile count vector has 13 entries, expected 34"
        );
        let err = TileError::TooManyCopies { tile: Tile::EAST, count: 5 };
        assert_eq!(err.to_string(), "5 copies of 東 exceed the limit of 4");
    }
}
