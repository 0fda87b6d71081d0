use std::fmt;

use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};
use smallvec::SmallVec;

use crate::game::constants::*;
use crate::game::ready::ReadyChecker;
use crate::game::rules::{RuleKey, RulesConfig};
use crate::game::scenario::Scenario;
use crate::tile::win_check::{
    count_concealed_triplets, decompose, is_men_qing, is_seven_pairs, WinShape,
    WinningDecomposition,
};
use crate::tile::{OpenMeld, Suit, Tile, TileCounts};

/// 台型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FanKind {
    // 十六台
    HeavenlyHand,
    EarthlyHand,
    BigFourWinds,
    // 八台
    ThirteenOrphans,
    BigThreeDragons,
    SmallFourWinds,
    AllHonors,
    FullFlush,
    FiveConcealedTriplets,
    /// 八张花牌齐全
    EightFlowers,
    // 五台
    FourConcealedTriplets,
    // 四台
    HalfFlush,
    AllTriplets,
    SmallThreeDragons,
    SevenPairs,
    // 二台
    /// 平胡：五组顺子、非字牌将、荣和、无花
    AllSequences,
    /// 全求人：全部副露，单吊荣和
    AllBorrowed,
    ThreeConcealedTriplets,
    /// 花杠（春夏秋冬）
    SeasonSet,
    /// 花杠（梅兰竹菊）
    PlantSet,
    // 一台（或按次数计）
    /// 门清
    Concealed,
    /// 不求：门清自摸
    ConcealedSelfDraw,
    RedDragon,
    GreenDragon,
    WhiteDragon,
    RoundWind,
    SeatWind,
    /// 见花见字模式下的风刻（不区分圈风门风）
    WindTriplet,
    /// 花牌（正花，见花见字时每朵都算）
    Flowers,
    Dealer,
    DealerStreak,
    /// 拉庄
    StreakExtension,
    SelfDraw,
    /// 海底撈月（自摸最后一张）
    LastTileDraw,
    /// 河底撈魚（胡最后一张打出的牌）
    LastTileDiscard,
    /// 杠上开花
    KongReplacement,
    /// 抢杠
    RobbingKong,
    /// 独听
    SingleWait,
}

impl FanKind {
    /// 台型名称
    pub fn name(self) -> &'static str {
        match self {
            FanKind::HeavenlyHand => "天胡",
            FanKind::EarthlyHand => "地胡",
            FanKind::BigFourWinds => "大四喜",
            FanKind::ThirteenOrphans => "國士無雙",
            FanKind::BigThreeDragons => "大三元",
            FanKind::SmallFourWinds => "小四喜",
            FanKind::AllHonors => "字一色",
            FanKind::FullFlush => "清一色",
            FanKind::FiveConcealedTriplets => "五暗刻",
            FanKind::EightFlowers => "八仙過海",
            FanKind::FourConcealedTriplets => "四暗刻",
            FanKind::HalfFlush => "混一色",
            FanKind::AllTriplets => "碰碰胡",
            FanKind::SmallThreeDragons => "小三元",
            FanKind::SevenPairs => "七對子",
            FanKind::AllSequences => "平胡",
            FanKind::AllBorrowed => "全求人",
            FanKind::ThreeConcealedTriplets => "三暗刻",
            FanKind::SeasonSet => "花槓（春夏秋冬）",
            FanKind::PlantSet => "花槓（梅蘭竹菊）",
            FanKind::Concealed => "門清",
            FanKind::ConcealedSelfDraw => "不求",
            FanKind::RedDragon => "中",
            FanKind::GreenDragon => "發",
            FanKind::WhiteDragon => "白",
            FanKind::RoundWind => "圈風",
            FanKind::SeatWind => "門風",
            FanKind::WindTriplet => "字牌",
            FanKind::Flowers => "花牌",
            FanKind::Dealer => "莊家",
            FanKind::DealerStreak => "連莊",
            FanKind::StreakExtension => "拉莊",
            FanKind::SelfDraw => "自摸",
            FanKind::LastTileDraw => "海底撈月",
            FanKind::LastTileDiscard => "河底撈魚",
            FanKind::KongReplacement => "槓上開花",
            FanKind::RobbingKong => "搶槓",
            FanKind::SingleWait => "獨聽",
        }
    }

    /// 控制该台型的规则开关
    ///
    /// 见花见字的风刻由特殊模式本身控制，没有单独的开关
    pub fn rule_key(self) -> Option<RuleKey> {
        let key = match self {
            FanKind::HeavenlyHand => RuleKey::TianHu,
            FanKind::EarthlyHand => RuleKey::DiHu,
            FanKind::BigFourWinds => RuleKey::DaSiXi,
            FanKind::ThirteenOrphans => RuleKey::GuoShiWuShuang,
            FanKind::BigThreeDragons => RuleKey::DaSanYuan,
            FanKind::SmallFourWinds => RuleKey::XiaoSiXi,
            FanKind::AllHonors => RuleKey::ZiYiSe,
            FanKind::FullFlush => RuleKey::QingYiSe,
            FanKind::FiveConcealedTriplets => RuleKey::WuAnKe,
            FanKind::EightFlowers => RuleKey::BaXianGuoHai,
            FanKind::FourConcealedTriplets => RuleKey::SiAnKe,
            FanKind::HalfFlush => RuleKey::HunYiSe,
            FanKind::AllTriplets => RuleKey::PengPengHu,
            FanKind::SmallThreeDragons => RuleKey::XiaoSanYuan,
            FanKind::SevenPairs => RuleKey::QiDuiZi,
            FanKind::AllSequences => RuleKey::PingHu,
            FanKind::AllBorrowed => RuleKey::QuanQiuRen,
            FanKind::ThreeConcealedTriplets => RuleKey::SanAnKe,
            FanKind::SeasonSet | FanKind::PlantSet => RuleKey::HuaGang,
            FanKind::Concealed => RuleKey::MenQing,
            FanKind::ConcealedSelfDraw => RuleKey::BuQiu,
            FanKind::RedDragon | FanKind::GreenDragon | FanKind::WhiteDragon => {
                RuleKey::SanYuanPai
            }
            FanKind::RoundWind => RuleKey::QuanFeng,
            FanKind::SeatWind => RuleKey::MenFeng,
            FanKind::WindTriplet => return None,
            FanKind::Flowers => RuleKey::HuaPai,
            FanKind::Dealer => RuleKey::ZhuangJia,
            FanKind::DealerStreak => RuleKey::LianZhuang,
            FanKind::StreakExtension => RuleKey::LaZhuang,
            FanKind::SelfDraw => RuleKey::ZiMo,
            FanKind::LastTileDraw | FanKind::LastTileDiscard => RuleKey::HaiDi,
            FanKind::KongReplacement => RuleKey::GangShangKaiHua,
            FanKind::RobbingKong => RuleKey::QiangGang,
            FanKind::SingleWait => RuleKey::DuTing,
        };
        Some(key)
    }

    /// 固定台数（花牌、连庄、拉庄按场况计算，这里返回 1 台的单位值）
    pub fn points(self) -> u32 {
        match self {
            FanKind::HeavenlyHand => TIAN_HU,
            FanKind::EarthlyHand => DI_HU,
            FanKind::BigFourWinds => DA_SI_XI,
            FanKind::ThirteenOrphans => GUO_SHI_WU_SHUANG,
            FanKind::BigThreeDragons => DA_SAN_YUAN,
            FanKind::SmallFourWinds => XIAO_SI_XI,
            FanKind::AllHonors => ZI_YI_SE,
            FanKind::FullFlush => QING_YI_SE,
            FanKind::FiveConcealedTriplets => WU_AN_KE,
            FanKind::EightFlowers => BA_XIAN_GUO_HAI,
            FanKind::FourConcealedTriplets => SI_AN_KE,
            FanKind::HalfFlush => HUN_YI_SE,
            FanKind::AllTriplets => PENG_PENG_HU,
            FanKind::SmallThreeDragons => XIAO_SAN_YUAN,
            FanKind::SevenPairs => QI_DUI_ZI,
            FanKind::AllSequences => PING_HU,
            FanKind::AllBorrowed => QUAN_QIU_REN,
            FanKind::ThreeConcealedTriplets => SAN_AN_KE,
            FanKind::SeasonSet | FanKind::PlantSet => HUA_GANG,
            _ => ONE_FAN,
        }
    }

    fn for_dragon(tile: Tile) -> Option<FanKind> {
        match tile {
            Tile::RED => Some(FanKind::RedDragon),
            Tile::GREEN => Some(FanKind::GreenDragon),
            Tile::WHITE => Some(FanKind::WhiteDragon),
            _ => None,
        }
    }
}

impl fmt::Display for FanKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// 一项台型及其台数
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Fan {
    pub kind: FanKind,
    pub fan: u32,
}

impl Fan {
    pub fn name(&self) -> &'static str {
        self.kind.name()
    }
}

impl Serialize for Fan {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("Fan", 2)?;
        state.serialize_field("name", self.name())?;
        state.serialize_field("fan", &self.fan)?;
        state.end()
    }
}

/// 计分结果
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreResult {
    /// 所有台型（按判定顺序）
    pub fans: Vec<Fan>,
    /// 总台数
    pub total_fan: u32,
    /// 底分（未胡为 0）
    pub base_points: u32,
    /// 总分 = 总台数 × 底分
    pub total_points: u32,
    /// 是否胡牌
    pub is_winning: bool,
    /// 胡牌拆解
    #[serde(skip_serializing_if = "Option::is_none")]
    pub decomposition: Option<WinningDecomposition>,
}

impl ScoreResult {
    /// 未胡牌的结果
    pub fn not_winning() -> Self {
        ScoreResult {
            fans: Vec::new(),
            total_fan: 0,
            base_points: 0,
            total_points: 0,
            is_winning: false,
            decomposition: None,
        }
    }

    /// 是否包含某个台型
    pub fn has(&self, kind: FanKind) -> bool {
        self.fans.iter().any(|f| f.kind == kind)
    }

    /// 某个台型的台数合计（未出现为 0）
    pub fn fan_of(&self, kind: FanKind) -> u32 {
        self.fans.iter().filter(|f| f.kind == kind).map(|f| f.fan).sum()
    }

    /// 台型名称列表
    pub fn names(&self) -> Vec<&'static str> {
        self.fans.iter().map(Fan::name).collect()
    }
}

/// 计分过程中的台型记录
///
/// 每次加台前先查规则开关，已加入的台型供后续步骤判断互斥
struct FanSheet<'a> {
    rules: &'a RulesConfig,
    fans: Vec<Fan>,
}

impl<'a> FanSheet<'a> {
    fn new(rules: &'a RulesConfig) -> Self {
        FanSheet {
            rules,
            fans: Vec::with_capacity(16),
        }
    }

    fn enabled(&self, kind: FanKind) -> bool {
        match kind.rule_key() {
            Some(key) => self.rules.is_enabled(key),
            None => true,
        }
    }

    /// 按固定台数加台
    fn add(&mut self, kind: FanKind) -> bool {
        self.add_value(kind, kind.points())
    }

    /// 按指定台数加台，台数为 0 时不加
    fn add_value(&mut self, kind: FanKind, fan: u32) -> bool {
        if fan == 0 || !self.enabled(kind) {
            return false;
        }
        log::trace!("fan {} +{}", kind.name(), fan);
        self.fans.push(Fan { kind, fan });
        true
    }

    fn has(&self, kind: FanKind) -> bool {
        self.fans.iter().any(|f| f.kind == kind)
    }

    fn has_any(&self, kinds: &[FanKind]) -> bool {
        kinds.iter().any(|&k| self.has(k))
    }
}

/// 胡牌手的派生信息，各组判定共用
struct HandFacts<'a> {
    decomposition: &'a WinningDecomposition,
    scenario: &'a Scenario,
    /// 暗牌 + 副露 + 胡张
    all_tiles: [u8; Tile::COUNT],
    /// 暗牌 + 胡张
    concealed_with_winning: [u8; Tile::COUNT],
    wind_triplets: SmallVec<[Tile; 4]>,
    dragon_triplets: SmallVec<[Tile; 3]>,
    concealed_triplets: usize,
    men_qing: bool,
    /// 胡牌前暗牌张数
    concealed_before_win: usize,
    open_melds: &'a [OpenMeld],
}

impl<'a> HandFacts<'a> {
    fn new(
        concealed: &TileCounts,
        open_melds: &'a [OpenMeld],
        winning_tile: Tile,
        scenario: &'a Scenario,
        decomposition: &'a WinningDecomposition,
    ) -> Self {
        let mut concealed_with_winning = *concealed.as_array();
        concealed_with_winning[winning_tile.index()] += 1;

        let mut all_tiles = concealed_with_winning;
        for meld in open_melds {
            for tile in meld.tiles() {
                all_tiles[tile.index()] += 1;
            }
        }

        let mut wind_triplets = SmallVec::new();
        let mut dragon_triplets = SmallVec::new();
        for meld in decomposition.triplets() {
            let tile = meld.tile();
            if tile.is_wind() {
                wind_triplets.push(tile);
            } else if tile.is_dragon() {
                dragon_triplets.push(tile);
            }
        }

        HandFacts {
            decomposition,
            scenario,
            all_tiles,
            concealed_with_winning,
            wind_triplets,
            dragon_triplets,
            concealed_triplets: count_concealed_triplets(
                decomposition,
                concealed,
                winning_tile,
                scenario.is_self_draw,
            ),
            men_qing: is_men_qing(open_melds),
            concealed_before_win: concealed.total(),
            open_melds,
        }
    }

    fn present_tiles(&self) -> impl Iterator<Item = Tile> + '_ {
        Tile::all().filter(move |t| self.all_tiles[t.index()] > 0)
    }

    fn is_all_honors(&self) -> bool {
        self.present_tiles().all(Tile::is_honor)
    }

    /// 出现的数牌花色数，以及是否有字牌
    fn suit_profile(&self) -> (usize, bool) {
        let suits = Suit::numbered()
            .into_iter()
            .filter(|&s| self.present_tiles().any(|t| t.suit() == s))
            .count();
        let honors = self.present_tiles().any(Tile::is_honor);
        (suits, honors)
    }
}

/// 计算胡牌台数
///
/// # 参数
///
/// - `concealed`: 暗牌（不含胡张）
/// - `open_melds`: 副露
/// - `winning_tile`: 胡张
/// - `scenario`: 场况
/// - `rules`: 规则配置
///
/// # 返回
///
/// 计分结果。无法胡牌时返回空台型、总台数 0、`is_winning == false`，不视为错误
///
/// # 判定顺序
///
/// 1. 独立高台：国士无双（排除其他一切台型）、天胡、地胡、大四喜
/// 2. 高台牌型：大三元、小四喜、字一色、清一色、五暗刻
/// 3. 中台牌型：四暗刻、混一色、碰碰胡、小三元、七对子、平胡、全求人、三暗刻
/// 4. 逐项加台：门清、不求、三元牌、风牌、花牌、庄家、连庄、拉庄、自摸、海底、杠上开花、抢杠、独听
///
/// 顺序只影响互斥判断，不影响总台数
pub fn score(
    concealed: &TileCounts,
    open_melds: &[OpenMeld],
    winning_tile: Tile,
    scenario: &Scenario,
    rules: &RulesConfig,
) -> ScoreResult {
    let decomposition = match decompose(concealed, open_melds, winning_tile) {
        Some(decomposition) => decomposition,
        None => {
            log::debug!(
                "not a winning hand: [{}] + {}",
                concealed.format(),
                winning_tile.name()
            );
            return ScoreResult::not_winning();
        }
    };

    let facts = HandFacts::new(concealed, open_melds, winning_tile, scenario, &decomposition);
    let mut sheet = FanSheet::new(rules);

    let exclusive = check_exclusive_patterns(&facts, &mut sheet);
    if !exclusive {
        check_high_patterns(&facts, &mut sheet);
        check_mid_patterns(&facts, &mut sheet);
        check_flat_bonuses(&facts, concealed, &mut sheet);
    }

    let fans = sheet.fans;
    let total_fan: u32 = fans.iter().map(|f| f.fan).sum();
    log::debug!(
        "winning hand {:?} with pair {}: {} fan over {} categories",
        decomposition.shape,
        decomposition.pair.name(),
        total_fan,
        fans.len()
    );

    ScoreResult {
        fans,
        total_fan,
        base_points: BASE_POINTS,
        total_points: total_fan * BASE_POINTS,
        is_winning: true,
        decomposition: Some(decomposition),
    }
}

/// 第一组：独立高台
///
/// 返回 `true` 表示国士无双成立，其余判定全部跳过
fn check_exclusive_patterns(facts: &HandFacts, sheet: &mut FanSheet) -> bool {
    if facts.decomposition.shape == WinShape::ThirteenOrphans && sheet.add(FanKind::ThirteenOrphans)
    {
        return true;
    }

    if facts.scenario.is_tian_hu {
        sheet.add(FanKind::HeavenlyHand);
    }
    if facts.scenario.is_di_hu {
        sheet.add(FanKind::EarthlyHand);
    }
    if facts.wind_triplets.len() == 4 {
        sheet.add(FanKind::BigFourWinds);
    }
    false
}

/// 第二组：高台牌型
fn check_high_patterns(facts: &HandFacts, sheet: &mut FanSheet) {
    let pair = facts.decomposition.pair;

    if facts.dragon_triplets.len() == 3 {
        sheet.add(FanKind::BigThreeDragons);
    }
    if facts.wind_triplets.len() == 3 && pair.is_wind() {
        sheet.add(FanKind::SmallFourWinds);
    }
    if facts.is_all_honors() {
        sheet.add(FanKind::AllHonors);
    }
    if facts.suit_profile() == (1, false) {
        sheet.add(FanKind::FullFlush);
    }
    if facts.concealed_triplets == 5 {
        sheet.add(FanKind::FiveConcealedTriplets);
    }
}

/// 第三组：中台牌型
fn check_mid_patterns(facts: &HandFacts, sheet: &mut FanSheet) {
    let decomposition = facts.decomposition;
    let scenario = facts.scenario;

    if facts.concealed_triplets == 4 && !sheet.has(FanKind::FiveConcealedTriplets) {
        sheet.add(FanKind::FourConcealedTriplets);
    }

    if !sheet.has_any(&[FanKind::FullFlush, FanKind::AllHonors])
        && facts.suit_profile() == (1, true)
    {
        sheet.add(FanKind::HalfFlush);
    }

    if decomposition.is_all_triplets() {
        sheet.add(FanKind::AllTriplets);
    }

    if facts.dragon_triplets.len() == 2 && decomposition.pair.is_dragon() {
        sheet.add(FanKind::SmallThreeDragons);
    }

    // 由原始牌数重新判定，不依赖拆解中改写的刻子
    if facts.open_melds.is_empty() && is_seven_pairs(&facts.concealed_with_winning) {
        sheet.add(FanKind::SevenPairs);
    }

    if facts.men_qing
        && decomposition.is_all_sequences()
        && !decomposition.pair.is_honor()
        && !scenario.is_self_draw
        && scenario.flowers.is_empty()
    {
        sheet.add(FanKind::AllSequences);
    }

    if !scenario.is_self_draw
        && !facts.open_melds.is_empty()
        && !facts.open_melds.iter().any(OpenMeld::is_concealed)
        && facts.concealed_before_win == 1
    {
        sheet.add(FanKind::AllBorrowed);
    }

    if facts.concealed_triplets == 3
        && !sheet.has_any(&[FanKind::FourConcealedTriplets, FanKind::FiveConcealedTriplets])
    {
        sheet.add(FanKind::ThreeConcealedTriplets);
    }
}

/// 第四组：逐项加台
fn check_flat_bonuses(facts: &HandFacts, concealed: &TileCounts, sheet: &mut FanSheet) {
    let scenario = facts.scenario;
    let special_mode = sheet.rules.jian_hua_jian_zi;
    // 天胡、地胡不得加计门清、不求、自摸，即使这两台被规则关闭
    let heaven_or_earth = scenario.is_tian_hu || scenario.is_di_hu;

    if facts.men_qing && !heaven_or_earth {
        sheet.add(FanKind::Concealed);
        if scenario.is_self_draw {
            sheet.add(FanKind::ConcealedSelfDraw);
        }
    }

    // 大三元时仍逐一计算三元牌
    for &tile in &facts.dragon_triplets {
        if let Some(kind) = FanKind::for_dragon(tile) {
            sheet.add(kind);
        }
    }

    // 大四喜不得加计圈风、门风
    if !sheet.has(FanKind::BigFourWinds) {
        for &tile in &facts.wind_triplets {
            if special_mode {
                sheet.add(FanKind::WindTriplet);
                continue;
            }
            if tile == scenario.round_wind.tile() {
                sheet.add(FanKind::RoundWind);
            }
            if tile == scenario.seat_wind.tile() {
                sheet.add(FanKind::SeatWind);
            }
        }
    }

    check_flowers(scenario, special_mode, sheet);

    if scenario.is_dealer {
        sheet.add(FanKind::Dealer);
        sheet.add_value(FanKind::DealerStreak, scenario.dealer_streak);
        sheet.add_value(FanKind::StreakExtension, scenario.dealer_streak);
    }

    if scenario.is_self_draw && !heaven_or_earth {
        sheet.add(FanKind::SelfDraw);
    }

    if scenario.is_hai_di {
        if scenario.is_self_draw {
            sheet.add(FanKind::LastTileDraw);
        } else {
            sheet.add(FanKind::LastTileDiscard);
        }
    }

    if scenario.is_gang_shang_kai_hua {
        sheet.add(FanKind::KongReplacement);
    }
    if scenario.is_qiang_gang_hu {
        sheet.add(FanKind::RobbingKong);
    }

    if sheet.enabled(FanKind::SingleWait)
        && ReadyChecker::is_single_wait(concealed, facts.open_melds)
    {
        sheet.add(FanKind::SingleWait);
    }
}

/// 花牌
///
/// 八仙过海成立时取代其他花牌台；否则花杠每组 2 台，
/// 正花每张 1 台（见花见字时每朵花都算）
fn check_flowers(scenario: &Scenario, special_mode: bool, sheet: &mut FanSheet) {
    let flowers = &scenario.flowers;
    if flowers.is_complete() && sheet.add(FanKind::EightFlowers) {
        return;
    }

    if flowers.has_all_seasons() {
        sheet.add(FanKind::SeasonSet);
    }
    if flowers.has_all_plants() {
        sheet.add(FanKind::PlantSet);
    }

    let counted = if special_mode {
        flowers.len()
    } else {
        flowers.count_for_seat(scenario.seat_wind)
    };
    sheet.add_value(FanKind::Flowers, counted as u32);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::scenario::{Flower, Wind};

    fn t(id: u8) -> Tile {
        Tile::new(id).unwrap()
    }

    fn counts(entries: &[(u8, u8)]) -> TileCounts {
        let mut counts = TileCounts::new();
        for &(id, n) in entries {
            assert!(counts.add_copies(t(id), n));
        }
        counts
    }

    fn flowers(ids: &[u8]) -> Vec<Flower> {
        ids.iter().map(|&i| Flower::new(i).unwrap()).collect()
    }

    #[test]
    fn test_not_winning_result() {
        let hand = counts(&[(0, 1), (5, 1)]);
        let result = score(&hand, &[], t(9), &Scenario::default(), &RulesConfig::default());
        assert!(!result.is_winning);
        assert!(result.fans.is_empty());
        assert_eq!(result.total_fan, 0);
        assert_eq!(result.total_points, 0);
        assert!(result.decomposition.is_none());
    }

    #[test]
    fn test_all_triplets_hand() {
        let hand = counts(&[(0, 3), (3, 3), (6, 3), (9, 3), (12, 3), (15, 1)]);
        let result = score(&hand, &[], t(15), &Scenario::default(), &RulesConfig::default());
        assert!(result.is_winning);
        assert!(result.has(FanKind::AllTriplets));
        // 单吊 7筒、荣和：五暗刻
        assert!(result.has(FanKind::FiveConcealedTriplets));
        assert!(!result.has(FanKind::FourConcealedTriplets));
        assert!(!result.has(FanKind::ThreeConcealedTriplets));
        assert!(result.has(FanKind::Concealed));
        assert!(result.has(FanKind::SingleWait));
        assert_eq!(result.total_points, result.total_fan * BASE_POINTS);
    }

    #[test]
    fn test_heavenly_hand_suppression() {
        let hand = counts(&[(0, 3), (3, 3), (6, 3), (9, 3), (12, 3), (15, 1)]);
        let scenario = Scenario {
            is_tian_hu: true,
            ..Scenario::self_draw()
        };
        let result = score(&hand, &[], t(15), &scenario, &RulesConfig::default());
        assert!(result.has(FanKind::HeavenlyHand));
        assert!(!result.has(FanKind::SelfDraw));
        assert!(!result.has(FanKind::Concealed));
        assert!(!result.has(FanKind::ConcealedSelfDraw));

        // 关闭天胡只去掉天胡本身，压制仍然有效
        let rules = RulesConfig::default().with(RuleKey::TianHu, false);
        let result = score(&hand, &[], t(15), &scenario, &rules);
        assert!(!result.has(FanKind::HeavenlyHand));
        assert!(!result.has(FanKind::SelfDraw));
        assert!(!result.has(FanKind::Concealed));
        assert!(!result.has(FanKind::ConcealedSelfDraw));
    }

    #[test]
    fn test_thirteen_orphans_exclusive() {
        let mut hand = TileCounts::new();
        for tile in Tile::THIRTEEN_ORPHANS {
            hand.add_tile(tile);
        }
        let scenario = Scenario {
            is_tian_hu: true,
            ..Scenario::self_draw()
        }
        .with_dealer(2);
        let result = score(&hand, &[], Tile::EAST, &scenario, &RulesConfig::default());
        assert_eq!(result.names(), vec!["國士無雙"]);
        assert_eq!(result.total_fan, GUO_SHI_WU_SHUANG);
    }

    #[test]
    fn test_wind_bonuses() {
        // 東東東 南南南 123萬 456萬 789萬 白白
        let hand = counts(&[
            (27, 3), (28, 3), (0, 1), (1, 1), (2, 1), (3, 1), (4, 1), (5, 1), (6, 1), (7, 1),
            (8, 1), (33, 1),
        ]);
        let scenario = Scenario::default().with_winds(Wind::East, Wind::South);
        let result = score(&hand, &[], Tile::WHITE, &scenario, &RulesConfig::default());
        assert!(result.has(FanKind::RoundWind));
        assert!(result.has(FanKind::SeatWind));
        assert!(result.has(FanKind::HalfFlush));

        // 见花见字：每组风刻 1 台，不计圈风门风
        let rules = RulesConfig::default().with_special_mode(true);
        let result = score(&hand, &[], Tile::WHITE, &scenario, &rules);
        assert!(!result.has(FanKind::RoundWind));
        assert!(!result.has(FanKind::SeatWind));
        assert_eq!(result.fan_of(FanKind::WindTriplet), 2);
    }

    #[test]
    fn test_flowers() {
        let hand = counts(&[(0, 3), (3, 3), (6, 3), (9, 3), (12, 3), (15, 1)]);
        let scenario = Scenario::default()
            .with_winds(Wind::East, Wind::South)
            .with_flowers(flowers(&[0, 1, 2, 3, 5]));
        let result = score(&hand, &[], t(15), &scenario, &RulesConfig::default());
        assert!(result.has(FanKind::SeasonSet));
        assert!(!result.has(FanKind::PlantSet));
        // 南家正花：夏、蘭
        assert_eq!(result.fan_of(FanKind::Flowers), 2);

        let rules = RulesConfig::default().with_special_mode(true);
        let result = score(&hand, &[], t(15), &scenario, &rules);
        assert_eq!(result.fan_of(FanKind::Flowers), 5);

        let scenario = scenario.with_flowers(flowers(&[0, 1, 2, 3, 4, 5, 6, 7]));
        let result = score(&hand, &[], t(15), &scenario, &RulesConfig::default());
        assert!(result.has(FanKind::EightFlowers));
        assert!(!result.has(FanKind::SeasonSet));
        assert!(!result.has(FanKind::Flowers));
    }

    #[test]
    fn test_dealer_streak() {
        let hand = counts(&[(0, 3), (3, 3), (6, 3), (9, 3), (12, 3), (15, 1)]);
        let scenario = Scenario::default().with_dealer(3);
        let result = score(&hand, &[], t(15), &scenario, &RulesConfig::default());
        assert_eq!(result.fan_of(FanKind::Dealer), 1);
        assert_eq!(result.fan_of(FanKind::DealerStreak), 3);
        assert_eq!(result.fan_of(FanKind::StreakExtension), 3);

        let rules = RulesConfig::default().with(RuleKey::LaZhuang, false);
        let result = score(&hand, &[], t(15), &scenario, &rules);
        assert!(!result.has(FanKind::StreakExtension));

        // 连庄数为 0 时不加台
        let scenario = Scenario::default().with_dealer(0);
        let result = score(&hand, &[], t(15), &scenario, &RulesConfig::default());
        assert!(result.has(FanKind::Dealer));
        assert!(!result.has(FanKind::DealerStreak));
    }

    #[test]
    fn test_fan_serialize() {
        let fan = Fan { kind: FanKind::LastTileDiscard, fan: 1 };
        assert_eq!(serde_json::to_string(&fan).unwrap(), r#"{"name":"河底撈魚","fan":1}"#);

        let json = serde_json::to_value(ScoreResult::not_winning()).unwrap();
        assert_eq!(json["isWinning"], false);
        assert!(json.get("decomposition").is_none());
    }
}
