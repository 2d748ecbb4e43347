use bevy::prelude::*;

mod compare;
mod core;
mod data;
mod equipment;
mod hover;
mod interface;
mod inventory;
mod stats;

use crate::core::states;
use compare::ComparePlugin;
use crate::core::CorePlugin;
use equipment::EquipmentPlugin;
use hover::HoverPlugin;
use interface::{bag_ui::BagUiPlugin, debug_cli::DebugCliPlugin};
use inventory::InventoryPlugin;

fn main() {
    App::new()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "Gear Compare".into(),
                ..default()
            }),
            ..default()
        }))
        .add_plugins(CorePlugin)
        .add_plugins(data::DataPlugin)
        .add_plugins((EquipmentPlugin, InventoryPlugin))
        .add_plugins((HoverPlugin, ComparePlugin, BagUiPlugin))
        .add_plugins(DebugCliPlugin)
        .add_systems(Update, forward_log_event) // 简单打印
        .add_systems(Startup, |mut commands: Commands, mut next: ResMut<NextState<states::AppState>>| {
            commands.spawn(Camera2d);
            next.set(states::AppState::Loading);
        })
        .run();
}

fn forward_log_event(mut reader: EventReader<crate::core::events::LogEvent>) {
    for e in reader.read() {
        println!("> {}", e.0);
    }
}
