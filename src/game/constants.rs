//! 台数常量定义
//!
//! 集中管理所有台数，依据中华民国麻将竞技协会规则

/// 底分（每台计 10 分）
pub const BASE_POINTS: u32 = 10;

// === 十六台 ===

/// 天胡
pub const TIAN_HU: u32 = 16;
/// 地胡
pub const DI_HU: u32 = 16;
/// 大四喜
pub const DA_SI_XI: u32 = 16;

// === 八台 ===

/// 国士无双
pub const GUO_SHI_WU_SHUANG: u32 = 8;
/// 大三元
pub const DA_SAN_YUAN: u32 = 8;
/// 小四喜
pub const XIAO_SI_XI: u32 = 8;
/// 字一色
pub const ZI_YI_SE: u32 = 8;
/// 清一色
pub const QING_YI_SE: u32 = 8;
/// 五暗刻
pub const WU_AN_KE: u32 = 8;
/// 八仙过海（八张花牌）
pub const BA_XIAN_GUO_HAI: u32 = 8;

// === 五台 ===

/// 四暗刻
pub const SI_AN_KE: u32 = 5;

// === 四台 ===

pub const HUN_YI_SE: u32 = 4;
pub const PENG_PENG_HU: u32 = 4;
pub const XIAO_SAN_YUAN: u32 = 4;
pub const QI_DUI_ZI: u32 = 4;

// === 二台 ===

pub const PING_HU: u32 = 2;
pub const QUAN_QIU_REN: u32 = 2;
pub const SAN_AN_KE: u32 = 2;
/// 花杠（每组完整的春夏秋冬或梅兰竹菊）
pub const HUA_GANG: u32 = 2;

// === 一台 ===

/// 门清、不求、自摸、庄家、圈风、门风、三元牌、独听、海底、杠上开花、抢杠等
pub const ONE_FAN: u32 = 1;
