use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

use tw16_engine::game::ready::ReadyChecker;
use tw16_engine::game::rules::RulesConfig;
use tw16_engine::game::scenario::{Flower, Scenario, Wind};
use tw16_engine::game::scoring::score;
use tw16_engine::tile::win_check::decompose;
use tw16_engine::tile::{OpenMeld, Tile, TileCounts};

fn create_test_hand() -> TileCounts {
    // 11萬 234萬 567萬 123筒 456筒 789條 + 胡 1萬
    let ids = [0, 1, 2, 3, 4, 5, 6, 9, 10, 11, 12, 13, 14, 24, 25, 26];
    let mut hand = TileCounts::new();
    for id in ids {
        hand.add_tile(Tile::new(id).unwrap());
    }
    hand
}

fn test_scenario() -> Scenario {
    Scenario::self_draw()
        .with_winds(Wind::South, Wind::West)
        .with_dealer(1)
        .with_flowers([2, 6].into_iter().filter_map(Flower::new))
}

/// 多线程共享同一份规则配置，结果与单线程一致
#[test]
fn test_concurrent_scoring_matches_baseline() {
    let hand = Arc::new(create_test_hand());
    let open = Arc::new(vec![OpenMeld::pon(Tile::WHITE)]);
    let concealed = {
        let mut concealed = *hand;
        // 副露白板后暗牌少三张：去掉 789條
        for id in [24, 25, 26] {
            assert!(concealed.remove_tile(Tile::new(id).unwrap()));
        }
        Arc::new(concealed)
    };
    let rules = RulesConfig::default();
    let scenario = test_scenario();
    let winning = Tile::new(0).unwrap();

    let baseline = score(&concealed, &open, winning, &scenario, &rules);
    assert!(baseline.is_winning);

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let concealed = Arc::clone(&concealed);
            let open = Arc::clone(&open);
            let scenario = scenario.clone();
            thread::spawn(move || {
                (0..200)
                    .map(|_| score(&concealed, &open, winning, &scenario, &rules))
                    .last()
            })
        })
        .collect();

    for handle in handles {
        let result = handle.join().unwrap().unwrap();
        assert_eq!(result, baseline);
    }

    // 完整 16 张暗牌同样可以胡
    assert!(decompose(&hand, &[], winning).is_some());
}

/// 性能压力测试：单线程每秒至少 10,000 次计分
#[test]
#[ignore] // 默认忽略，需要时使用 cargo test -- --ignored
fn test_single_thread_performance() {
    let hand = create_test_hand();
    let rules = RulesConfig::default();
    let scenario = test_scenario();
    let winning = Tile::new(0).unwrap();

    let target_iterations = 10_000;
    let start = Instant::now();

    for _ in 0..target_iterations {
        let result = score(&hand, &[], winning, &scenario, &rules);
        assert!(result.is_winning);
    }

    let elapsed = start.elapsed();
    let iterations_per_second = target_iterations as f64 / elapsed.as_secs_f64();

    println!("单线程性能测试:");
    println!("  迭代次数: {}", target_iterations);
    println!("  耗时: {:?}", elapsed);
    println!("  每秒处理: {:.2} 次", iterations_per_second);

    assert!(
        iterations_per_second >= 10_000.0,
        "性能不达标: 期望 >= 10,000 次/秒, 实际 {:.2} 次/秒",
        iterations_per_second
    );
}

/// 多线程听牌计算（8 线程）
#[test]
#[ignore]
fn test_multithreaded_waiting_tiles() {
    // 16 张暗牌，至少听 1萬
    let hand = Arc::new(create_test_hand());
    let counter = Arc::new(AtomicU64::new(0));
    let num_threads = 8;
    let iterations_per_thread = 5_000;

    let start = Instant::now();
    let handles: Vec<_> = (0..num_threads)
        .map(|_| {
            let hand = Arc::clone(&hand);
            let counter = Arc::clone(&counter);
            thread::spawn(move || {
                for _ in 0..iterations_per_thread {
                    let waits = ReadyChecker::waiting_tiles(&hand, &[]);
                    assert!(!waits.is_empty());
                    counter.fetch_add(1, Ordering::Relaxed);
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }

    let elapsed = start.elapsed();
    let total_iterations = counter.load(Ordering::Relaxed);
    let iterations_per_second = total_iterations as f64 / elapsed.as_secs_f64();

    println!("多线程听牌测试 ({} 线程):", num_threads);
    println!("  总迭代次数: {}", total_iterations);
    println!("  耗时: {:?}", elapsed);
    println!("  每秒处理: {:.2} 次", iterations_per_second);

    assert_eq!(total_iterations, (num_threads * iterations_per_thread) as u64);
}

/// 压力测试：长时间运行
#[test]
#[ignore]
fn test_long_running_stress() {
    let hand = create_test_hand();
    let rules = RulesConfig::default().with_special_mode(true);
    let scenario = test_scenario();
    let winning = Tile::new(0).unwrap();

    let duration = Duration::from_secs(5);
    let start = Instant::now();
    let mut iterations = 0u64;

    while start.elapsed() < duration {
        let result = score(&hand, &[], winning, &scenario, &rules);
        assert!(result.is_winning);
        iterations += 1;
    }

    let elapsed = start.elapsed();
    let iterations_per_second = iterations as f64 / elapsed.as_secs_f64();

    println!("长时间运行压力测试:");
    println!("  运行时间: {:?}", elapsed);
    println!("  总迭代次数: {}", iterations);
    println!("  每秒处理: {:.2} 次", iterations_per_second);

    assert!(
        iterations_per_second >= 10_000.0,
        "长时间运行后性能下降: 期望 >= 10,000 次/秒, 实际 {:.2} 次/秒",
        iterations_per_second
    );
}
