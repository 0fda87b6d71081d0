//! 可执行文件入口（用于演示和调试）

use tw16_engine::{
    decompose, score, Flower, OpenMeld, ReadyChecker, RulesConfig, Scenario, Tile, TileCounts,
    Wind,
};

fn main() {
    println!("台湾十六张麻将计分引擎");

    // 暗牌：111萬 234萬 567筒 東東東 中 + 胡 中；副露：碰 發發發
    let concealed = TileCounts::from_tiles(
        [0, 0, 0, 1, 2, 3, 13, 14, 15, 27, 27, 27, 31]
            .into_iter()
            .filter_map(Tile::new),
    );
    let concealed = match concealed {
        Ok(counts) => counts,
        Err(err) => {
            eprintln!("手牌错误：{err}");
            return;
        }
    };
    let open_melds = [OpenMeld::pon(Tile::GREEN)];
    let winning_tile = Tile::RED;

    println!("暗牌：{}", concealed.format());
    let waits = ReadyChecker::waiting_tiles(&concealed, &open_melds);
    let names: Vec<_> = waits.iter().map(Tile::name).collect();
    println!("听牌：{}", names.join(" "));

    match decompose(&concealed, &open_melds, winning_tile) {
        Some(decomposition) => {
            print!("拆解：将 {}{} |", decomposition.pair, decomposition.pair);
            for meld in &decomposition.melds {
                let tiles: String = meld.tiles().iter().map(|t| t.name()).collect();
                print!(" {}", tiles);
            }
            println!();
        }
        None => println!("{} 无法胡牌", winning_tile),
    }

    let scenario = Scenario::self_draw()
        .with_winds(Wind::East, Wind::East)
        .with_dealer(1)
        .with_flowers([0, 4].into_iter().filter_map(Flower::new));

    for (label, rules) in [
        ("标准规则", RulesConfig::default()),
        ("见花见字", RulesConfig::default().with_special_mode(true)),
    ] {
        let result = score(&concealed, &open_melds, winning_tile, &scenario, &rules);
        println!("\n{}：", label);
        for fan in &result.fans {
            println!("  {:<8} {} 台", fan.name(), fan.fan);
        }
        println!("  合计 {} 台，{} 分", result.total_fan, result.total_points);
    }
}
