use bevy::prelude::*;
use thiserror::Error;

use super::slot::{ArmorySlot, slot_for};
use crate::data::Catalog;
use crate::stats::EquippedItem;

/// 身上的一件装备：只记录 id 与品质，属性每帧从物品表重新读取
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GearPiece {
    pub item_id: u32,
    pub is_hq: bool,
}

/// 装备栏位置（两枚戒指各占一格）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GearPosition {
    MainHand,
    OffHand,
    Head,
    Body,
    Hands,
    Waist,
    Legs,
    Feet,
    Ears,
    Neck,
    Wrists,
    RingRight,
    RingLeft,
    SoulCrystal,
}

impl GearPosition {
    pub const ALL: [GearPosition; 14] = [
        GearPosition::MainHand,
        GearPosition::OffHand,
        GearPosition::Head,
        GearPosition::Body,
        GearPosition::Hands,
        GearPosition::Waist,
        GearPosition::Legs,
        GearPosition::Feet,
        GearPosition::Ears,
        GearPosition::Neck,
        GearPosition::Wrists,
        GearPosition::RingRight,
        GearPosition::RingLeft,
        GearPosition::SoulCrystal,
    ];

    pub fn slot(self) -> ArmorySlot {
        match self {
            GearPosition::MainHand => ArmorySlot::MainHand,
            GearPosition::OffHand => ArmorySlot::OffHand,
            GearPosition::Head => ArmorySlot::Head,
            GearPosition::Body => ArmorySlot::Body,
            GearPosition::Hands => ArmorySlot::Hands,
            GearPosition::Waist => ArmorySlot::Waist,
            GearPosition::Legs => ArmorySlot::Legs,
            GearPosition::Feet => ArmorySlot::Feet,
            GearPosition::Ears => ArmorySlot::Ears,
            GearPosition::Neck => ArmorySlot::Neck,
            GearPosition::Wrists => ArmorySlot::Wrists,
            GearPosition::RingRight | GearPosition::RingLeft => ArmorySlot::Rings,
            GearPosition::SoulCrystal => ArmorySlot::SoulCrystal,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            GearPosition::MainHand => "main",
            GearPosition::OffHand => "off",
            GearPosition::Head => "head",
            GearPosition::Body => "body",
            GearPosition::Hands => "hands",
            GearPosition::Waist => "waist",
            GearPosition::Legs => "legs",
            GearPosition::Feet => "feet",
            GearPosition::Ears => "ears",
            GearPosition::Neck => "neck",
            GearPosition::Wrists => "wrists",
            GearPosition::RingRight => "ring_r",
            GearPosition::RingLeft => "ring_l",
            GearPosition::SoulCrystal => "crystal",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.name().eq_ignore_ascii_case(s))
    }

    fn index(self) -> usize {
        self as usize
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum EquipError {
    #[error("物品表中不存在 id {0}")]
    UnknownItem(u32),
    #[error("{0} 不是装备")]
    NotEquippable(String),
}

/// 身上的全部装备
#[derive(Resource, Default, Debug)]
pub struct Equipment {
    gear: [Option<GearPiece>; GearPosition::ALL.len()],
}

impl Equipment {
    pub fn get(&self, position: GearPosition) -> Option<GearPiece> {
        self.gear[position.index()]
    }

    pub fn take(&mut self, position: GearPosition) -> Option<GearPiece> {
        self.gear[position.index()].take()
    }

    pub fn put(&mut self, position: GearPosition, piece: GearPiece) -> Option<GearPiece> {
        self.gear[position.index()].replace(piece)
    }

    /// 按物品分类找位置：优先空位，否则替换该分类第一个位置，返回被换下的装备
    pub fn equip(
        &mut self,
        piece: GearPiece,
        catalog: &Catalog,
    ) -> Result<(GearPosition, Option<GearPiece>), EquipError> {
        let position = self.position_for(piece, catalog)?;
        Ok((position, self.put(position, piece)))
    }

    /// 计算 `equip` 会占用的位置，不修改装备
    pub fn position_for(&self, piece: GearPiece, catalog: &Catalog) -> Result<GearPosition, EquipError> {
        let item = catalog
            .get(piece.item_id)
            .ok_or(EquipError::UnknownItem(piece.item_id))?;
        let slot = slot_for(&item.equip_slot_category)
            .ok_or_else(|| EquipError::NotEquippable(item.name.clone()))?;

        let mut positions = GearPosition::ALL.into_iter().filter(|p| p.slot() == slot);
        let first = positions
            .clone()
            .next()
            .ok_or_else(|| EquipError::NotEquippable(item.name.clone()))?;
        Ok(positions.find(|p| self.get(*p).is_none()).unwrap_or(first))
    }

    /// 当前装备中属于 `slot` 分类的物品，按装备栏顺序，每次调用重新构建
    pub fn items_in_slot<'a>(&self, slot: ArmorySlot, catalog: &'a Catalog) -> Vec<EquippedItem<'a>> {
        GearPosition::ALL
            .into_iter()
            .filter_map(|p| self.get(p))
            .filter_map(|piece| {
                let item = catalog.get(piece.item_id)?;
                (slot_for(&item.equip_slot_category) == Some(slot))
                    .then(|| EquippedItem::new(item, piece.is_hq))
            })
            .collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = (GearPosition, GearPiece)> + '_ {
        GearPosition::ALL
            .into_iter()
            .filter_map(|p| self.get(p).map(|piece| (p, piece)))
    }
}
