use bevy::prelude::*;

use super::components::GearPosition;

/// 从背包装备一件物品
#[derive(Event)]
pub struct EquipEvent {
    pub index: usize, // 背包索引
}

#[derive(Event)]
pub struct UnequipEvent {
    pub position: GearPosition,
}
