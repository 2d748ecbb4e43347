//! 悬停目标与修饰键：对比界面的两个输入

pub mod components;
pub mod events;
mod systems;

use bevy::prelude::*;
use components::*;
use events::*;
use systems::*;

use crate::compare::ComparePhase;

pub struct HoverPlugin;
impl Plugin for HoverPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<HoveredItem>()
            .init_resource::<ModifierState>()
            .add_event::<HoveredItemChanged>()
            .add_systems(
                Update,
                (poll_modifier, apply_hover_changes).in_set(ComparePhase::Input),
            );
    }
}
