use super::{components::*, events::*};
use crate::core::resources::CompareConfig;
use crate::data::Catalog;
use bevy::prelude::*;

/// 只保留本帧最后一次悬停变化；物品表中找不到的 id 同样清空目标
pub fn apply_hover_changes(
    mut ev_hover: EventReader<HoveredItemChanged>,
    mut hovered: ResMut<HoveredItem>,
    catalog: Res<Catalog>,
) {
    let Some(HoveredItemChanged(raw)) = ev_hover.read().last().copied() else {
        return;
    };

    let target = HoverTarget::decode(raw).filter(|t| catalog.get(t.item_id).is_some());
    if hovered.0 != target {
        debug!("hover target {:?} → {:?}", hovered.0, target);
        hovered.0 = target;
    }
}

pub fn poll_modifier(
    keys: Res<ButtonInput<KeyCode>>,
    config: Res<CompareConfig>,
    mut modifier: ResMut<ModifierState>,
) {
    modifier.held = keys.any_pressed(config.modifier.key_codes());
}
