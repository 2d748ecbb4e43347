use bevy::prelude::*;

/// 鼠标移到另一个物品上（原始 id，0 表示离开所有物品）
#[derive(Event, Debug, Clone, Copy)]
pub struct HoveredItemChanged(pub u64);
