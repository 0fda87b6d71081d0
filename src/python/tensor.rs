use numpy::PyArray1;
use pyo3::prelude::*;

use crate::game::ready::ReadyChecker;
use crate::python::engine::HandInput;
use crate::tile::Tile;

/// 听牌掩码
///
/// 在 Rust 侧直接生成 NumPy 数组，减少 Python 侧的转换
///
/// # 返回
///
/// 形状为 (34,) 的 bool 数组，第 i 位表示是否听编号为 i 的牌
#[pyfunction]
pub fn waiting_mask(hand_json: &str, py: Python) -> PyResult<Py<PyArray1<bool>>> {
    let input = HandInput::parse(hand_json)?;
    let waits = ReadyChecker::waiting_tiles(&input.concealed_counts, &input.open_melds);
    let mask: Vec<bool> = Tile::all().map(|t| waits.contains(t)).collect();
    Ok(PyArray1::from_vec(py, mask).into())
}

/// 全部牌数（暗牌 + 副露 + 胡张）
///
/// # 返回
///
/// 形状为 (34,) 的 u8 数组，超过 255 的计数截断为 255
#[pyfunction]
pub fn tile_histogram(hand_json: &str, py: Python) -> PyResult<Py<PyArray1<u8>>> {
    let input = HandInput::parse(hand_json)?;
    Ok(PyArray1::from_vec(py, histogram(&input)).into())
}

fn histogram(input: &HandInput) -> Vec<u8> {
    let mut counts = input.concealed_counts.as_array().to_vec();
    if let Some(tile) = input.winning_tile {
        counts[tile.index()] = counts[tile.index()].saturating_add(1);
    }
    for meld in &input.open_melds {
        for tile in meld.tiles() {
            counts[tile.index()] = counts[tile.index()].saturating_add(1);
        }
    }
    counts
}
