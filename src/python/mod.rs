//! Python 绑定模块
//!
//! 提供 PyO3 接口，以 JSON 交换数据，供 Python 侧出题或批量验算调用

// 允许 PyO3 宏生成的 non-local impl 定义（这是 PyO3 的正常行为）
#![allow(non_local_definitions)]

#[cfg(feature = "python")]
pub mod engine;
#[cfg(feature = "python")]
pub mod tensor;

#[cfg(feature = "python")]
use pyo3::prelude::*;

/// Python 模块初始化
#[cfg(feature = "python")]
#[pymodule]
fn tw16_engine(_py: Python, m: &PyModule) -> PyResult<()> {
    // 把 log 记录转发到 Python logging
    pyo3_log::init();

    m.add_function(pyo3::wrap_pyfunction!(engine::decompose, m)?)?;
    m.add_function(pyo3::wrap_pyfunction!(engine::waiting_tiles, m)?)?;
    m.add_function(pyo3::wrap_pyfunction!(engine::score, m)?)?;
    m.add_function(pyo3::wrap_pyfunction!(engine::validate_hand, m)?)?;
    m.add_function(pyo3::wrap_pyfunction!(engine::default_rules, m)?)?;
    m.add_function(pyo3::wrap_pyfunction!(engine::merge_rules, m)?)?;
    m.add_function(pyo3::wrap_pyfunction!(tensor::waiting_mask, m)?)?;
    m.add_function(pyo3::wrap_pyfunction!(tensor::tile_histogram, m)?)?;
    Ok(())
}
