use std::collections::BTreeSet;

use serde_derive::Serialize;

use crate::data::Catalog;
use crate::stats::EquippedItem;
use crate::stats::bonus::ItemBonusType;

pub const MATERIA_LABEL: &str = "Materia";

/// 对比结果中的一行
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DiffRow {
    /// None 表示魔晶石孔数行
    pub stat: Option<u32>,
    pub label: String,
    pub delta: i32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ItemComparison {
    pub item_level_delta: i32,
    pub rows: Vec<DiffRow>,
}

impl ItemComparison {
    /// 所有行（含魔晶石孔数）都为 0
    pub fn is_unchanged(&self) -> bool {
        self.rows.iter().all(|r| r.delta == 0)
    }

    pub fn changed_rows(&self) -> impl Iterator<Item = &DiffRow> {
        self.rows.iter().filter(|r| r.delta != 0)
    }
}

#[cfg(test)]
impl ItemComparison {
    fn materia_delta(&self) -> i32 {
        self.rows.first().map_or(0, |r| r.delta)
    }
}

/// 面板站在哪一边看差值
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum CompareSide {
    Equipped,
    Hovered,
}

impl CompareSide {
    pub fn compare(
        self,
        hovered: EquippedItem<'_>,
        equipped: EquippedItem<'_>,
        catalog: &Catalog,
    ) -> ItemComparison {
        match self {
            CompareSide::Equipped => compare(equipped, hovered, catalog),
            CompareSide::Hovered => compare(hovered, equipped, catalog),
        }
    }
}

pub fn stat_label(stat: u32, catalog: &Catalog) -> String {
    if let Some(name) = catalog.stat_name(stat) {
        return name.to_string();
    }
    match ItemBonusType::from_id(stat) {
        Some(t) => t.name().to_string(),
        None => format!("Stat #{stat}"),
    }
}

/// 以 `a` 为参照：属性行为 a - b，首行魔晶石孔数为 b - a
pub fn compare(a: EquippedItem<'_>, b: EquippedItem<'_>, catalog: &Catalog) -> ItemComparison {
    let map_a = a.bonus_map();
    let map_b = b.bonus_map();

    let materia = i32::from(b.item.materia_slot_count) - i32::from(a.item.materia_slot_count);
    let mut rows = vec![DiffRow {
        stat: None,
        label: MATERIA_LABEL.to_string(),
        delta: materia,
    }];

    let stats: BTreeSet<u32> = map_a.stats().chain(map_b.stats()).collect();
    rows.extend(stats.into_iter().map(|stat| DiffRow {
        stat: Some(stat),
        label: stat_label(stat, catalog),
        delta: i32::from(map_a.value(stat)) - i32::from(map_b.value(stat)),
    }));

    ItemComparison {
        item_level_delta: a.item.item_level as i32 - b.item.item_level as i32,
        rows,
    }
}
