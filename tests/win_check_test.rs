//! 胡牌拆解测试
//!
//! 测试内容：
//! 1. 基本胡牌型、七对子、国士无双
//! 2. 牌数不对、跨花色无法成面子时拒绝
//! 3. 拆解顺序（编号小的牌优先，刻子优先于顺子）的确定性

use tw16_engine::tile::win_check::{
    count_concealed_triplets, decompose, is_win, validate_tile_counts, WinShape,
};
use tw16_engine::tile::{MeldInHand, OpenMeld, Tile, TileCounts};

fn t(id: u8) -> Tile {
    Tile::new(id).unwrap()
}

fn counts(entries: &[(u8, u8)]) -> TileCounts {
    let mut counts = TileCounts::new();
    for &(id, n) in entries {
        assert!(counts.add_copies(t(id), n), "too many copies of {}", id);
    }
    counts
}

#[test]
fn test_all_triplets_hand() {
    // 1萬 4萬 7萬 1筒 4筒 各三张 + 7筒 单吊
    let hand = counts(&[(0, 3), (3, 3), (6, 3), (9, 3), (12, 3), (15, 1)]);
    let result = decompose(&hand, &[], t(15)).expect("should win");

    assert_eq!(result.shape, WinShape::Standard);
    assert_eq!(result.pair, t(15));
    assert_eq!(result.melds.len(), 5);
    let tiles: Vec<_> = result.melds.iter().map(|m| m.tile()).collect();
    assert_eq!(tiles, vec![t(0), t(3), t(6), t(9), t(12)]);
    assert!(result.is_all_triplets());
}

#[test]
fn test_cross_suit_rejected() {
    // 1-9萬 各一张 + 1條 三张 + 9條 + 胡 9條：共 14 张，不是 17 张
    let mut entries: Vec<(u8, u8)> = (0..9).map(|id| (id, 1)).collect();
    entries.push((18, 3));
    entries.push((26, 1));
    let hand = counts(&entries);
    assert!(decompose(&hand, &[], t(26)).is_none());

    // 补足到 17 张，但 2筒 4筒 8筒 无法与其他牌组成面子
    entries.extend([(10, 1), (12, 1), (16, 1)]);
    let hand = counts(&entries);
    assert_eq!(hand.total(), 16);
    assert!(decompose(&hand, &[], t(26)).is_none());
}

#[test]
fn test_wrong_total_never_wins() {
    // 16 张暗牌 + 1 张副露：总数不对
    let hand = counts(&[(0, 3), (3, 3), (6, 3), (9, 3), (12, 3), (15, 1)]);
    let open = [OpenMeld::pon(Tile::EAST)];
    assert!(decompose(&hand, &open, t(15)).is_none());

    // 少一张
    let hand = counts(&[(0, 3), (3, 3), (6, 3), (9, 3), (15, 1)]);
    assert!(!is_win(&hand, &[], t(15)));
}

#[test]
fn test_seven_pairs_any_completing_tile() {
    let pairs = [0u8, 5, 11, 19, 27, 31, 33];
    for &missing in &pairs {
        let entries: Vec<(u8, u8)> = pairs
            .iter()
            .map(|&id| (id, if id == missing { 1 } else { 2 }))
            .collect();
        let hand = counts(&entries);
        let result = decompose(&hand, &[], t(missing)).expect("seven pairs");
        assert_eq!(result.shape, WinShape::SevenPairs);
        assert_eq!(result.pair, t(0));
        assert!(result.real_melds().is_empty());
    }
}

#[test]
fn test_seven_pairs_requires_no_open_melds() {
    let hand = counts(&[(0, 2), (5, 2), (11, 2), (19, 2), (27, 1)]);
    let open = [OpenMeld::pon(Tile::RED)];
    // 9 + 3 = 12 张，既不是七对子也不是基本牌型
    assert!(decompose(&hand, &open, Tile::EAST).is_none());
}

#[test]
fn test_thirteen_orphans_every_pair() {
    for &doubled in &Tile::THIRTEEN_ORPHANS {
        let mut hand = TileCounts::new();
        for tile in Tile::THIRTEEN_ORPHANS {
            hand.add_tile(tile);
        }
        let result = decompose(&hand, &[], doubled).expect("thirteen orphans");
        assert_eq!(result.shape, WinShape::ThirteenOrphans);
        assert_eq!(result.pair, doubled);
        assert!(result.melds.is_empty());
    }
}

#[test]
fn test_open_melds_first_in_decomposition() {
    // 副露：暗杠 9萬、吃 345條；暗牌：東東東 白白 789筒 234萬 + 胡 白
    let open = [OpenMeld::an_kong(t(8)), OpenMeld::chi(t(20)).unwrap()];
    let hand = counts(&[(1, 1), (2, 1), (3, 1), (15, 1), (16, 1), (17, 1), (27, 3), (33, 1)]);
    let result = decompose(&hand, &open, Tile::WHITE).expect("should win");

    assert_eq!(result.melds[0], MeldInHand::Quad { tile: t(8), is_open: false });
    assert_eq!(result.melds[1], MeldInHand::Sequence { start: t(20), is_open: true });
    assert_eq!(result.pair, Tile::WHITE);
    assert!(result.melds[2..].iter().all(|m| !m.is_open()));
    // 暗杠 + 東 暗刻
    assert_eq!(count_concealed_triplets(&result, &hand, Tile::WHITE, false), 2);
}

#[test]
fn test_triplet_preferred_over_sequences() {
    // 111222333萬：刻子优先
    let hand = counts(&[(0, 3), (1, 3), (2, 3), (18, 3), (27, 3), (33, 1)]);
    let result = decompose(&hand, &[], Tile::WHITE).unwrap();
    assert_eq!(result.melds[0], MeldInHand::Triplet { tile: t(0), is_open: false });
    assert_eq!(result.melds[1], MeldInHand::Triplet { tile: t(1), is_open: false });
    assert_eq!(result.melds[2], MeldInHand::Triplet { tile: t(2), is_open: false });
}

#[test]
fn test_decomposition_is_deterministic() {
    let hand = counts(&[(0, 2), (1, 2), (2, 2), (3, 2), (4, 2), (5, 2), (6, 1), (7, 1), (8, 2)]);
    let first = decompose(&hand, &[], t(8)).unwrap();
    for _ in 0..10 {
        assert_eq!(decompose(&hand, &[], t(8)).as_ref(), Some(&first));
    }
    // 输入不被修改
    assert_eq!(hand.count(t(8)), 2);
}

#[test]
fn test_honors_never_form_sequences() {
    // 東南西 不是顺子
    let hand = counts(&[(27, 1), (28, 1), (29, 1), (0, 3), (3, 3), (6, 3), (12, 3), (9, 1)]);
    assert_eq!(hand.total(), 16);
    assert!(decompose(&hand, &[], t(9)).is_none());

    // 8萬 9萬 1筒 不是顺子
    let hand = counts(&[(7, 1), (8, 1), (9, 1), (0, 3), (3, 3), (6, 3), (15, 3), (12, 1)]);
    assert_eq!(hand.total(), 16);
    assert!(decompose(&hand, &[], t(12)).is_none());
}

#[test]
fn test_validate_tile_counts_across_melds() {
    let hand = counts(&[(5, 1)]);
    let open = [OpenMeld::pon(t(5))];
    assert!(!validate_tile_counts(&hand, &open, t(5)));
    assert!(validate_tile_counts(&hand, &open, t(6)));
}
