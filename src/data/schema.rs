use bevy::asset::Asset;
use bevy::reflect::TypePath;
use serde_derive::Deserialize;

/// 静态物品表中的一条装备记录
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ItemEntry {
    pub id: u32,
    pub name: String,
    #[serde(default)] pub item_level: u32,
    /// 与 `base_param_value` 一一对应
    #[serde(default)] pub base_param: Vec<u32>,
    #[serde(default)] pub base_param_value: Vec<i16>,
    /// HQ 加成，与 `base_param_value_special` 一一对应
    #[serde(default)] pub base_param_special: Vec<u32>,
    #[serde(default)] pub base_param_value_special: Vec<i16>,
    #[serde(default)] pub defense_phys: u16,
    #[serde(default)] pub defense_mag: u16,
    #[serde(default)] pub damage_phys: u16,
    #[serde(default)] pub damage_mag: u16,
    #[serde(default)] pub block: u16,
    #[serde(default)] pub block_rate: u16,
    #[serde(default)] pub materia_slot_count: u8,
    #[serde(default)] pub equip_slot_category: EquipSlotCategory,
}

impl ItemEntry {
    pub fn base_stats(&self) -> impl Iterator<Item = (u32, i16)> + '_ {
        self.base_param
            .iter()
            .copied()
            .zip(self.base_param_value.iter().copied())
    }

    pub fn special_stats(&self) -> impl Iterator<Item = (u32, i16)> + '_ {
        self.base_param_special
            .iter()
            .copied()
            .zip(self.base_param_value_special.iter().copied())
    }
}

/// 物品可以占用的装备部位（多个部位可同时为 true）
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct EquipSlotCategory {
    pub main_hand: bool,
    pub off_hand: bool,
    pub head: bool,
    pub body: bool,
    pub gloves: bool,
    pub waist: bool,
    pub legs: bool,
    pub feet: bool,
    pub ears: bool,
    pub neck: bool,
    pub wrists: bool,
    pub finger_l: bool,
    pub finger_r: bool,
    pub soul_crystal: bool,
}

/// 属性 id → 显示名
#[derive(Debug, Clone, Deserialize)]
pub struct BaseParamEntry {
    pub id: u32,
    pub name: String,
}

/// 进入游戏时发放的初始物品
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct StarterKit {
    pub equipped: Vec<StarterEntry>,
    pub backpack: Vec<StarterEntry>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StarterEntry {
    pub id: u32,
    #[serde(default)] pub hq: bool,
    #[serde(default = "one")] pub count: u32,
}

fn one() -> u32 {
    1
}

#[derive(Asset, TypePath, Deserialize, Debug)]
pub struct CatalogFile {
    pub items: Vec<ItemEntry>,
    #[serde(default)]
    pub base_params: Vec<BaseParamEntry>,
    #[serde(default)]
    pub starter: StarterKit,
}
