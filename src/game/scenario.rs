use std::fmt;

use serde::{Deserialize, Serialize};

use crate::tile::{Tile, TileError};

/// 风位（圈风 / 门风）
///
/// 序列化为对应风牌的编号（27-30）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum Wind {
    #[default]
    East,
    South,
    West,
    North,
}

impl Wind {
    pub const ALL: [Wind; 4] = [Wind::East, Wind::South, Wind::West, Wind::North];

    /// 对应的风牌
    pub fn tile(self) -> Tile {
        match self {
            Wind::East => Tile::EAST,
            Wind::South => Tile::SOUTH,
            Wind::West => Tile::WEST,
            Wind::North => Tile::NORTH,
        }
    }

    /// 座位序号（東 0、南 1、西 2、北 3）
    pub fn seat_index(self) -> u8 {
        self as u8
    }

    /// 由风牌得到风位
    pub fn from_tile(tile: Tile) -> Option<Wind> {
        Wind::ALL.into_iter().find(|w| w.tile() == tile)
    }
}

impl TryFrom<u8> for Wind {
    type Error = TileError;

    fn try_from(id: u8) -> Result<Self, Self::Error> {
        Tile::new(id)
            .and_then(Wind::from_tile)
            .ok_or(TileError::InvalidWind(id))
    }
}

impl From<Wind> for u8 {
    fn from(wind: Wind) -> u8 {
        wind.tile().id()
    }
}

impl fmt::Display for Wind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tile().name())
    }
}

const FLOWER_NAMES: [&str; 8] = ["春", "夏", "秋", "冬", "梅", "蘭", "竹", "菊"];

/// 花牌（0-7）：0-3 春夏秋冬，4-7 梅兰竹菊
///
/// 花牌 `i` 与 `i + 4` 属于座位 `i`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Flower(u8);

impl Flower {
    pub const COUNT: u8 = 8;

    pub const fn new(id: u8) -> Option<Self> {
        if id < Self::COUNT {
            Some(Flower(id))
        } else {
            None
        }
    }

    pub fn id(self) -> u8 {
        self.0
    }

    /// 是否为四季花（春夏秋冬）
    pub fn is_season(self) -> bool {
        self.0 < 4
    }

    /// 所属座位
    pub fn seat(self) -> Wind {
        Wind::ALL[(self.0 % 4) as usize]
    }

    pub fn name(self) -> &'static str {
        FLOWER_NAMES[self.0 as usize]
    }
}

impl TryFrom<u8> for Flower {
    type Error = TileError;

    fn try_from(id: u8) -> Result<Self, Self::Error> {
        Flower::new(id).ok_or(TileError::InvalidFlower(id))
    }
}

impl From<Flower> for u8 {
    fn from(flower: Flower) -> u8 {
        flower.0
    }
}

/// 花牌集合（重复的花牌只算一次）
///
/// 序列化为升序的花牌编号列表
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "Vec<Flower>", into = "Vec<Flower>")]
pub struct FlowerSet(u8);

impl FlowerSet {
    const SEASONS: u8 = 0x0F;
    const PLANTS: u8 = 0xF0;

    pub const fn new() -> Self {
        FlowerSet(0)
    }

    pub fn insert(&mut self, flower: Flower) {
        self.0 |= 1 << flower.id();
    }

    pub fn contains(&self, flower: Flower) -> bool {
        self.0 & (1 << flower.id()) != 0
    }

    pub fn len(&self) -> usize {
        self.0.count_ones() as usize
    }

    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    /// 八张花牌齐全
    pub fn is_complete(&self) -> bool {
        self.0 == 0xFF
    }

    /// 春夏秋冬齐全
    pub fn has_all_seasons(&self) -> bool {
        self.0 & Self::SEASONS == Self::SEASONS
    }

    /// 梅兰竹菊齐全
    pub fn has_all_plants(&self) -> bool {
        self.0 & Self::PLANTS == Self::PLANTS
    }

    pub fn iter(&self) -> impl Iterator<Item = Flower> + '_ {
        let bits = self.0;
        (0..Flower::COUNT)
            .filter(move |i| bits & (1 << i) != 0)
            .map(Flower)
    }

    /// 属于指定座位的花牌数（正花）
    pub fn count_for_seat(&self, seat: Wind) -> usize {
        self.iter().filter(|f| f.seat() == seat).count()
    }
}

impl FromIterator<Flower> for FlowerSet {
    fn from_iter<I: IntoIterator<Item = Flower>>(iter: I) -> Self {
        let mut set = FlowerSet::new();
        for flower in iter {
            set.insert(flower);
        }
        set
    }
}

impl From<Vec<Flower>> for FlowerSet {
    fn from(flowers: Vec<Flower>) -> Self {
        flowers.into_iter().collect()
    }
}

impl From<FlowerSet> for Vec<Flower> {
    fn from(set: FlowerSet) -> Self {
        set.iter().collect()
    }
}

/// 和牌场况
///
/// 描述胡牌时的牌局状况，不涉及手牌本身
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Scenario {
    /// 是否自摸
    pub is_self_draw: bool,
    /// 是否为庄家
    pub is_dealer: bool,
    /// 连庄数
    pub dealer_streak: u32,
    /// 圈风
    pub round_wind: Wind,
    /// 门风
    pub seat_wind: Wind,
    /// 海底撈月 / 河底撈魚（最后一张牌）
    #[serde(rename = "isHaidi")]
    pub is_hai_di: bool,
    /// 杠上开花
    pub is_gang_shang_kai_hua: bool,
    /// 抢杠胡
    pub is_qiang_gang_hu: bool,
    /// 天胡
    pub is_tian_hu: bool,
    /// 地胡
    pub is_di_hu: bool,
    /// 花牌
    pub flowers: FlowerSet,
}

impl Scenario {
    /// 自摸场况
    pub fn self_draw() -> Self {
        Scenario {
            is_self_draw: true,
            ..Default::default()
        }
    }

    /// 设置圈风和门风
    pub fn with_winds(mut self, round_wind: Wind, seat_wind: Wind) -> Self {
        self.round_wind = round_wind;
        self.seat_wind = seat_wind;
        self
    }

    /// 设置庄家和连庄数
    pub fn with_dealer(mut self, streak: u32) -> Self {
        self.is_dealer = true;
        self.dealer_streak = streak;
        self
    }

    /// 设置花牌
    pub fn with_flowers<I: IntoIterator<Item = Flower>>(mut self, flowers: I) -> Self {
        self.flowers = flowers.into_iter().collect();
        self
    }
}
