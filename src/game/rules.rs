use std::fmt;

use serde::{Deserialize, Serialize};

/// 规则配置错误
#[derive(Debug)]
pub enum ConfigError {
    /// JSON 解析或序列化失败
    Json(serde_json::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Json(err) => write!(f, "invalid rules config: {err}"),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Json(err) => Some(err),
        }
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(err: serde_json::Error) -> Self {
        ConfigError::Json(err)
    }
}

/// 由一张 `(变体, 字段, JSON 键, 显示名)` 表生成 `RuleKey` 与 `RulesConfig`
macro_rules! rules_table {
    ($( $(#[$doc:meta])* $key:ident => $field:ident, $wire:literal, $label:literal; )*) => {
        /// 台型规则开关的键
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum RuleKey {
            $( $(#[$doc])* $key, )*
        }

        impl RuleKey {
            /// 全部规则键（按台数从高到低）
            pub const ALL: &'static [RuleKey] = &[ $( RuleKey::$key, )* ];

            /// JSON 中的键名（camelCase）
            pub fn wire_name(self) -> &'static str {
                match self {
                    $( RuleKey::$key => $wire, )*
                }
            }

            /// 显示名称
            pub fn label(self) -> &'static str {
                match self {
                    $( RuleKey::$key => $label, )*
                }
            }

            /// 由 JSON 键名查找
            pub fn from_wire_name(name: &str) -> Option<RuleKey> {
                match name {
                    $( $wire => Some(RuleKey::$key), )*
                    _ => None,
                }
            }
        }

        /// 台型规则配置
        ///
        /// 每个台型一个开关，另有见花见字特殊模式。
        /// 作为值对象按值传入计分，不保存任何全局状态
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
        #[serde(rename_all = "camelCase", default)]
        pub struct RulesConfig {
            /// 见花见字：每朵花 1 台、每组风刻 1 台（不区分圈风门风）
            pub jian_hua_jian_zi: bool,
            $( pub $field: bool, )*
        }

        impl Default for RulesConfig {
            /// 默认全部启用，特殊模式关闭
            fn default() -> Self {
                RulesConfig {
                    jian_hua_jian_zi: false,
                    $( $field: true, )*
                }
            }
        }

        impl RulesConfig {
            /// 读取存储的开关值（不考虑特殊模式）
            pub fn stored(&self, key: RuleKey) -> bool {
                match key {
                    $( RuleKey::$key => self.$field, )*
                }
            }

            /// 设置开关
            pub fn set(&mut self, key: RuleKey, enabled: bool) {
                match key {
                    $( RuleKey::$key => self.$field = enabled, )*
                }
            }
        }
    };
}

rules_table! {
    // 十六台
    TianHu => tian_hu, "tianHu", "天胡";
    DiHu => di_hu, "diHu", "地胡";
    DaSiXi => da_si_xi, "daSiXi", "大四喜";
    // 八台
    GuoShiWuShuang => guo_shi_wu_shuang, "guoShiWuShuang", "國士無雙";
    DaSanYuan => da_san_yuan, "daSanYuan", "大三元";
    XiaoSiXi => xiao_si_xi, "xiaoSiXi", "小四喜";
    ZiYiSe => zi_yi_se, "ziYiSe", "字一色";
    QingYiSe => qing_yi_se, "qingYiSe", "清一色";
    WuAnKe => wu_an_ke, "wuAnKe", "五暗刻";
    BaXianGuoHai => ba_xian_guo_hai, "baXianGuoHai", "八仙過海";
    // 五台
    SiAnKe => si_an_ke, "siAnKe", "四暗刻";
    // 四台
    HunYiSe => hun_yi_se, "hunYiSe", "混一色";
    PengPengHu => peng_peng_hu, "pengPengHu", "碰碰胡";
    XiaoSanYuan => xiao_san_yuan, "xiaoSanYuan", "小三元";
    QiDuiZi => qi_dui_zi, "qiDuiZi", "七對子";
    // 二台
    PingHu => ping_hu, "pingHu", "平胡";
    QuanQiuRen => quan_qiu_ren, "quanQiuRen", "全求人";
    SanAnKe => san_an_ke, "sanAnKe", "三暗刻";
    // 一台
    MenQing => men_qing, "menQing", "門清";
    BuQiu => bu_qiu, "buQiu", "不求";
    ZiMo => zi_mo, "ziMo", "自摸";
    ZhuangJia => zhuang_jia, "zhuangJia", "莊家";
    /// 见花见字时强制停用
    QuanFeng => quan_feng, "quanFeng", "圈風";
    /// 见花见字时强制停用
    MenFeng => men_feng, "menFeng", "門風";
    SanYuanPai => san_yuan_pai, "sanYuanPai", "三元牌";
    HuaPai => hua_pai, "huaPai", "花牌";
    DuTing => du_ting, "duTing", "獨聽";
    HaiDi => hai_di, "haiDi", "海底/河底";
    GangShangKaiHua => gang_shang_kai_hua, "gangShangKaiHua", "槓上開花";
    QiangGang => qiang_gang, "qiangGang", "搶槓";
    LianZhuang => lian_zhuang, "lianZhuang", "連莊";
    LaZhuang => la_zhuang, "laZhuang", "拉莊";
    HuaGang => hua_gang, "huaGang", "花槓";
}

impl RuleKey {
    /// 见花见字模式下强制停用的规则
    pub const DISABLED_BY_SPECIAL_MODE: [RuleKey; 2] = [RuleKey::QuanFeng, RuleKey::MenFeng];
}

impl fmt::Display for RuleKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl RulesConfig {
    /// 某个台型是否启用
    ///
    /// 见花见字模式下，圈风和门风无论存储值如何都视为停用
    pub fn is_enabled(&self, key: RuleKey) -> bool {
        if self.jian_hua_jian_zi && RuleKey::DISABLED_BY_SPECIAL_MODE.contains(&key) {
            return false;
        }
        self.stored(key)
    }

    /// 链式设置开关
    pub fn with(mut self, key: RuleKey, enabled: bool) -> Self {
        self.set(key, enabled);
        self
    }

    /// 链式设置见花见字模式
    pub fn with_special_mode(mut self, enabled: bool) -> Self {
        self.jian_hua_jian_zi = enabled;
        self
    }

    /// 从 JSON 读取配置
    ///
    /// 缺少的键取默认值（部分保存的配置合并到默认配置上），未知的键忽略
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// 序列化为 JSON
    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string(self)?)
    }
}
