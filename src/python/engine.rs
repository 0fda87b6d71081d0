use pyo3::prelude::*;
use serde::Deserialize;

use crate::game::ready::ReadyChecker;
use crate::game::rules::RulesConfig;
use crate::game::scenario::Scenario;
use crate::game::scoring;
use crate::tile::win_check;
use crate::tile::{OpenMeld, Tile, TileCounts};

/// 一手牌的 JSON 输入
///
/// ```json
/// { "concealedCounts": [34 个整数], "openMelds": [...], "winningTile": 5, "scenario": {...} }
/// ```
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct HandInput {
    pub concealed_counts: TileCounts,
    #[serde(default)]
    pub open_melds: Vec<OpenMeld>,
    pub winning_tile: Option<Tile>,
    #[serde(default)]
    pub scenario: Scenario,
}

impl HandInput {
    pub(crate) fn parse(json: &str) -> PyResult<Self> {
        serde_json::from_str(json).map_err(value_error)
    }

    fn winning_tile(&self) -> PyResult<Tile> {
        self.winning_tile
            .ok_or_else(|| value_error("winningTile required"))
    }
}

pub(crate) fn value_error(err: impl std::fmt::Display) -> PyErr {
    PyErr::new::<pyo3::exceptions::PyValueError, _>(err.to_string())
}

fn parse_rules(rules_json: Option<&str>) -> PyResult<RulesConfig> {
    match rules_json {
        Some(json) => RulesConfig::from_json(json).map_err(value_error),
        None => Ok(RulesConfig::default()),
    }
}

/// 胡牌拆解
///
/// # 参数
///
/// - `hand_json`: 手牌 JSON（需要 `winningTile`）
///
/// # 返回
///
/// 拆解结果 JSON，无法胡牌返回 `None`
#[pyfunction]
pub fn decompose(hand_json: &str) -> PyResult<Option<String>> {
    let input = HandInput::parse(hand_json)?;
    let winning_tile = input.winning_tile()?;
    win_check::decompose(&input.concealed_counts, &input.open_melds, winning_tile)
        .map(|d| serde_json::to_string(&d).map_err(value_error))
        .transpose()
}

/// 听牌集合（升序的牌编号），`winningTile` 可省略
#[pyfunction]
pub fn waiting_tiles(hand_json: &str) -> PyResult<Vec<u8>> {
    let input = HandInput::parse(hand_json)?;
    let waits = ReadyChecker::waiting_tiles(&input.concealed_counts, &input.open_melds);
    Ok(waits.iter().map(Tile::id).collect())
}

/// 计算台数
///
/// # 参数
///
/// - `hand_json`: 手牌 JSON（含场况）
/// - `rules_json`: 规则配置 JSON，省略时使用默认规则
///
/// # 返回
///
/// 计分结果 JSON
#[pyfunction]
#[pyo3(signature = (hand_json, rules_json = None))]
pub fn score(hand_json: &str, rules_json: Option<&str>) -> PyResult<String> {
    let input = HandInput::parse(hand_json)?;
    let rules = parse_rules(rules_json)?;
    let result = scoring::score(
        &input.concealed_counts,
        &input.open_melds,
        input.winning_tile()?,
        &input.scenario,
        &rules,
    );
    serde_json::to_string(&result).map_err(value_error)
}

/// 检查牌数是否合法（同一种牌不超过 4 张）
#[pyfunction]
pub fn validate_hand(hand_json: &str) -> PyResult<bool> {
    let input = HandInput::parse(hand_json)?;
    Ok(win_check::validate_tile_counts(
        &input.concealed_counts,
        &input.open_melds,
        input.winning_tile()?,
    ))
}

/// 默认规则配置 JSON
#[pyfunction]
pub fn default_rules() -> PyResult<String> {
    RulesConfig::default().to_json().map_err(value_error)
}

/// 将部分规则配置合并到默认配置上，返回完整 JSON
#[pyfunction]
pub fn merge_rules(rules_json: &str) -> PyResult<String> {
    parse_rules(Some(rules_json))?.to_json().map_err(value_error)
}
