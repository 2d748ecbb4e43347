//! 悬停物品 vs 已装备物品：逐属性差值与两个浮动面板

pub mod components;
pub mod engine;
pub mod layout;
mod systems;

use bevy::prelude::*;
use bevy::ui::UiSystem;
use thiserror::Error;

use crate::core::states::AppState;
use components::{ComparisonFrame, PanelReveal};
use engine::CompareSide;
use systems::*;

/// 每帧对比流程的先后顺序
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub enum ComparePhase {
    /// 悬停目标与修饰键
    Input,
    Build,
    Render,
    Place,
}

#[derive(Debug, Error)]
pub enum DrawError {
    #[error("compare panel {0:?} has not been spawned")]
    PanelMissing(CompareSide),
    #[error("no primary window to place panels in")]
    NoPrimaryWindow,
}

pub struct ComparePlugin;
impl Plugin for ComparePlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<ComparisonFrame>()
            .init_resource::<PanelReveal>()
            .configure_sets(
                Update,
                (
                    ComparePhase::Input,
                    ComparePhase::Build,
                    ComparePhase::Render,
                    ComparePhase::Place,
                )
                    .chain()
                    .run_if(in_state(AppState::InGame)),
            )
            .add_systems(Startup, spawn_panels)
            .add_systems(Update, build_comparison.in_set(ComparePhase::Build))
            .add_systems(
                Update,
                render_panels
                    .pipe(report_draw_error)
                    .in_set(ComparePhase::Render),
            )
            .add_systems(
                Update,
                place_panels.pipe(report_draw_error).in_set(ComparePhase::Place),
            )
            .add_systems(PostUpdate, mark_panels_measured.after(UiSystem::Layout));
    }
}
