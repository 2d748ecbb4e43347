//! 背包格子：鼠标悬停产生 `HoveredItemChanged`，点击装备

use bevy::prelude::*;

use crate::compare::ComparePhase;
use crate::core::states::AppState;
use crate::data::Catalog;
use crate::equipment::events::EquipEvent;
use crate::hover::components::HoverTarget;
use crate::hover::events::HoveredItemChanged;
use crate::inventory::components::{Backpack, ItemStack};

const SLOT_BACKGROUND: Color = Color::srgb(0.16, 0.16, 0.2);
const HQ_TINT: Color = Color::srgb(0.95, 0.85, 0.45);

#[derive(Component)]
pub struct BagGrid;

/// 按钮对应的背包索引
#[derive(Component, Debug, Clone, Copy)]
pub struct BagSlot(pub usize);

pub struct BagUiPlugin;
impl Plugin for BagUiPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, spawn_bag_grid).add_systems(
            Update,
            (refresh_bag_grid, (emit_hover_changes, equip_on_click))
                .chain()
                .before(ComparePhase::Input)
                .run_if(in_state(AppState::InGame)),
        );
    }
}

fn spawn_bag_grid(mut commands: Commands) {
    commands.spawn((
        Name::new("Bag"),
        BagGrid,
        Node {
            position_type: PositionType::Absolute,
            left: Val::Px(16.0),
            bottom: Val::Px(16.0),
            width: Val::Px(640.0),
            flex_wrap: FlexWrap::Wrap,
            column_gap: Val::Px(4.0),
            row_gap: Val::Px(4.0),
            ..default()
        },
    ));
}

fn bag_label(name: &str, stack: &ItemStack) -> String {
    let mut label = name.to_string();
    if stack.is_hq {
        label.push_str(" HQ");
    }
    if stack.count > 1 {
        label.push_str(&format!(" ×{}", stack.count));
    }
    label
}

/// 背包变化时重建全部按钮
fn refresh_bag_grid(
    mut commands: Commands,
    backpack: Res<Backpack>,
    catalog: Res<Catalog>,
    grid: Query<Entity, With<BagGrid>>,
) {
    if !backpack.is_changed() && !catalog.is_changed() {
        return;
    }
    let Ok(grid) = grid.single() else {
        return;
    };

    commands.entity(grid).despawn_related::<Children>();
    let buttons: Vec<Entity> = backpack
        .slots
        .iter()
        .enumerate()
        .filter(|(_, stack)| !stack.is_empty())
        .map(|(index, stack)| {
            let name = catalog.get(stack.item_id).map_or("?", |e| e.name.as_str());
            let color = if stack.is_hq { HQ_TINT } else { Color::WHITE };
            commands
                .spawn((
                    Button,
                    BagSlot(index),
                    Node {
                        width: Val::Px(120.0),
                        height: Val::Px(44.0),
                        padding: UiRect::all(Val::Px(4.0)),
                        ..default()
                    },
                    BackgroundColor(SLOT_BACKGROUND),
                ))
                .with_child((
                    Text::new(bag_label(name, stack)),
                    TextFont {
                        font_size: 12.0,
                        ..default()
                    },
                    TextColor(color),
                ))
                .id()
        })
        .collect();
    commands.entity(grid).add_children(&buttons);
}

/// 任一按钮的交互状态变化时，重新确定鼠标下的物品
fn emit_hover_changes(
    changed: Query<(), (Changed<Interaction>, With<BagSlot>)>,
    slots: Query<(&Interaction, &BagSlot)>,
    backpack: Res<Backpack>,
    mut writer: EventWriter<HoveredItemChanged>,
) {
    if changed.is_empty() {
        return;
    }

    let raw = slots
        .iter()
        .find(|(interaction, _)| **interaction != Interaction::None)
        .and_then(|(_, slot)| backpack.get(slot.0))
        .map_or(0, |stack| {
            HoverTarget {
                item_id: stack.item_id,
                is_hq: stack.is_hq,
            }
            .encode()
        });
    writer.write(HoveredItemChanged(raw));
}

fn equip_on_click(
    slots: Query<(&Interaction, &BagSlot), Changed<Interaction>>,
    mut writer: EventWriter<EquipEvent>,
) {
    for (interaction, slot) in &slots {
        if *interaction == Interaction::Pressed {
            writer.write(EquipEvent { index: slot.0 });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_mark_quality_and_count() {
        let stack = ItemStack { item_id: 1, is_hq: true, count: 3 };
        assert_eq!(bag_label("Cotton Tunic", &stack), "Cotton Tunic HQ ×3");
        let single = ItemStack { item_id: 1, is_hq: false, count: 1 };
        assert_eq!(bag_label("Cotton Tunic", &single), "Cotton Tunic");
    }
}
