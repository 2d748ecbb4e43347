use serde_derive::Serialize;

use crate::data::schema::{EquipSlotCategory, ItemEntry};

/// 军械库分类：同一分类内的装备才互相比较
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ArmorySlot {
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
    Rings,
    SoulCrystal,
}

type SlotSelector = fn(&EquipSlotCategory) -> bool;

/// 按优先级判断装备分类，命中第一个即返回；左右戒指合并为 Rings
pub fn slot_for(category: &EquipSlotCategory) -> Option<ArmorySlot> {
    let table: [(SlotSelector, ArmorySlot); 14] = [
        (|c: &EquipSlotCategory| c.main_hand, ArmorySlot::MainHand),
        (|c: &EquipSlotCategory| c.off_hand, ArmorySlot::OffHand),
        (|c: &EquipSlotCategory| c.head, ArmorySlot::Head),
        (|c: &EquipSlotCategory| c.body, ArmorySlot::Body),
        (|c: &EquipSlotCategory| c.gloves, ArmorySlot::Hands),
        (|c: &EquipSlotCategory| c.waist, ArmorySlot::Waist),
        (|c: &EquipSlotCategory| c.legs, ArmorySlot::Legs),
        (|c: &EquipSlotCategory| c.feet, ArmorySlot::Feet),
        (|c: &EquipSlotCategory| c.ears, ArmorySlot::Ears),
        (|c: &EquipSlotCategory| c.neck, ArmorySlot::Neck),
        (|c: &EquipSlotCategory| c.wrists, ArmorySlot::Wrists),
        (|c: &EquipSlotCategory| c.finger_l, ArmorySlot::Rings),
        (|c: &EquipSlotCategory| c.finger_r, ArmorySlot::Rings),
        (|c: &EquipSlotCategory| c.soul_crystal, ArmorySlot::SoulCrystal),
    ];

    table
        .into_iter()
        .find(|(selector, _)| selector(category))
        .map(|(_, slot)| slot)
}

/// 可以参与对比的分类（魂晶不比较）
pub fn comparable_slot(item: &ItemEntry) -> Option<ArmorySlot> {
    match slot_for(&item.equip_slot_category) {
        Some(ArmorySlot::SoulCrystal) | None => None,
        slot => slot,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn main_hand_wins_over_off_hand() {
        // 双手武器同时占用主副手
        let category = EquipSlotCategory {
            main_hand: true,
            off_hand: true,
            ..Default::default()
        };
        assert_eq!(slot_for(&category), Some(ArmorySlot::MainHand));
    }

    #[test]
    fn body_wins_over_legs_for_robes() {
        let category = EquipSlotCategory {
            body: true,
            legs: true,
            ..Default::default()
        };
        assert_eq!(slot_for(&category), Some(ArmorySlot::Body));
    }

    #[test]
    fn either_finger_maps_to_rings() {
        let left = EquipSlotCategory { finger_l: true, ..Default::default() };
        let right = EquipSlotCategory { finger_r: true, ..Default::default() };
        assert_eq!(slot_for(&left), Some(ArmorySlot::Rings));
        assert_eq!(slot_for(&right), Some(ArmorySlot::Rings));
    }

    #[test]
    fn inert_categories_are_not_comparable() {
        let crystal = ItemEntry {
            equip_slot_category: EquipSlotCategory {
                soul_crystal: true,
                ..Default::default()
            },
            ..Default::default()
        };
        assert_eq!(slot_for(&crystal.equip_slot_category), Some(ArmorySlot::SoulCrystal));
        assert_eq!(comparable_slot(&crystal), None);

        let potion = ItemEntry::default();
        assert_eq!(comparable_slot(&potion), None);
    }
}
