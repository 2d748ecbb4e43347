//! 单件装备的属性汇总：基础属性 + HQ 加成 + 防御/伤害/格挡派生属性

pub mod bonus;

use std::collections::HashMap;

use bonus::ItemBonusType;

use crate::data::schema::ItemEntry;

/// 某一帧里被比较的一件装备（物品表条目 + 是否 HQ）
#[derive(Debug, Clone, Copy)]
pub struct EquippedItem<'a> {
    pub item: &'a ItemEntry,
    pub is_hq: bool,
}

impl<'a> EquippedItem<'a> {
    pub fn new(item: &'a ItemEntry, is_hq: bool) -> Self {
        Self { item, is_hq }
    }

    pub fn bonus_map(&self) -> StatBonusMap {
        aggregate(self.item, self.is_hq)
    }
}

/// 属性 id → 数值，构建后不再修改
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StatBonusMap(HashMap<u32, i16>);

impl StatBonusMap {
    /// 不存在的属性按 0 处理
    pub fn value(&self, stat: u32) -> i16 {
        self.0.get(&stat).copied().unwrap_or(0)
    }

    pub fn stats(&self) -> impl Iterator<Item = u32> + '_ {
        self.0.keys().copied()
    }

    fn add(&mut self, stat: u32, value: i16) {
        let slot = self.0.entry(stat).or_insert(0);
        *slot = slot.wrapping_add(value);
    }
}

#[cfg(test)]
impl StatBonusMap {
    fn get(&self, stat: u32) -> Option<i16> {
        self.0.get(&stat).copied()
    }

    fn contains(&self, stat: u32) -> bool {
        self.0.contains_key(&stat)
    }

    fn len(&self) -> usize {
        self.0.len()
    }
}

const DERIVED_STATS: [ItemBonusType; 6] = [
    ItemBonusType::Defense,
    ItemBonusType::MagicDefense,
    ItemBonusType::PhysicalDamage,
    ItemBonusType::MagicDamage,
    ItemBonusType::BlockStrength,
    ItemBonusType::BlockRate,
];

fn derived_value(item: &ItemEntry, stat: ItemBonusType) -> i16 {
    let raw = match stat {
        ItemBonusType::Defense => item.defense_phys,
        ItemBonusType::MagicDefense => item.defense_mag,
        ItemBonusType::PhysicalDamage => item.damage_phys,
        ItemBonusType::MagicDamage => item.damage_mag,
        ItemBonusType::BlockStrength => item.block,
        ItemBonusType::BlockRate => item.block_rate,
        _ => 0,
    };
    raw as i16
}

/// 计算一件装备的属性表
///
/// HQ 装备以 special 列表为准：base 中存在的属性叠加 special 值，
/// 只出现在 base 中的属性会被丢弃。
pub fn aggregate(item: &ItemEntry, is_hq: bool) -> StatBonusMap {
    let mut base = HashMap::new();
    for (stat, value) in item.base_stats() {
        base.insert(stat, value);
    }

    let mut map = if is_hq {
        let mut result = HashMap::new();
        for (stat, special) in item.special_stats() {
            let value = match base.get(&stat) {
                Some(base_value) => base_value.wrapping_add(special),
                None => special,
            };
            result.insert(stat, value);
        }
        StatBonusMap(result)
    } else {
        StatBonusMap(base)
    };

    for stat in DERIVED_STATS {
        map.add(stat.id(), derived_value(item, stat));
    }
    map
}
