use bevy::prelude::*;
use bevy::window::PrimaryWindow;

use super::DrawError;
use super::components::*;
use super::engine::CompareSide;
use crate::core::resources::CompareConfig;
use crate::data::Catalog;
use crate::equipment::components::Equipment;
use crate::equipment::slot::comparable_slot;
use crate::hover::components::{HoverTarget, HoveredItem, ModifierState};
use crate::stats::EquippedItem;

const PANEL_BACKGROUND: Color = Color::srgba(0.06, 0.06, 0.09, 0.92);
const SEPARATOR: Color = Color::srgba(1.0, 1.0, 1.0, 0.25);
const NEUTRAL: Color = Color::WHITE;
const BETTER: Color = Color::srgb(0.41, 0.83, 0.38);
const WORSE: Color = Color::srgb(0.9, 0.27, 0.27);

fn delta_color(delta: i32) -> Color {
    match delta.signum() {
        1 => BETTER,
        -1 => WORSE,
        _ => NEUTRAL,
    }
}

/// 悬停物品与同分类已装备物品的对比内容；任何一步缺失都返回 None
pub fn build_frame(target: HoverTarget, equipment: &Equipment, catalog: &Catalog) -> Option<FrameContent> {
    let item = catalog.get(target.item_id)?;
    let slot = comparable_slot(item)?;
    let equipped = equipment.items_in_slot(slot, catalog);
    if equipped.is_empty() {
        return None;
    }

    let hovered = EquippedItem::new(item, target.is_hq);
    let entries = equipped
        .into_iter()
        .map(|other| PanelEntry {
            equipped: other.into(),
            equipped_view: CompareSide::Equipped.compare(hovered, other, catalog),
            hovered_view: CompareSide::Hovered.compare(hovered, other, catalog),
        })
        .collect();

    Some(FrameContent {
        slot,
        hovered: hovered.into(),
        entries,
    })
}

/// 每帧重新计算：装备可能在两帧之间被更换，不做缓存
pub fn build_comparison(
    modifier: Res<ModifierState>,
    hovered: Res<HoveredItem>,
    equipment: Res<Equipment>,
    catalog: Res<Catalog>,
    mut frame: ResMut<ComparisonFrame>,
) {
    let content = hovered
        .0
        .filter(|_| modifier.active())
        .and_then(|target| build_frame(target, &equipment, &catalog));
    frame.set_if_neq(ComparisonFrame(content));
}

pub fn spawn_panels(mut commands: Commands) {
    for side in [CompareSide::Equipped, CompareSide::Hovered] {
        commands.spawn((
            Name::new(format!("ComparePanel::{side:?}")),
            ComparePanel(side),
            Node {
                position_type: PositionType::Absolute,
                flex_direction: FlexDirection::Column,
                padding: UiRect::all(Val::Px(8.0)),
                row_gap: Val::Px(2.0),
                ..default()
            },
            BackgroundColor(PANEL_BACKGROUND),
            BorderRadius::all(Val::Px(4.0)),
            GlobalZIndex(10),
            Visibility::Hidden,
        ));
    }
}

fn spawn_line(commands: &mut Commands, line: &PanelLine, font_size: f32) -> Entity {
    let font = TextFont {
        font_size,
        ..default()
    };
    match line {
        PanelLine::Header {
            title,
            item_level,
            item_level_delta,
        } => commands
            .spawn((Text::new(format!("{title} ")), font.clone(), TextColor(NEUTRAL)))
            .with_child((
                TextSpan::new(format!("(iLvl {item_level})")),
                font,
                TextColor(delta_color(*item_level_delta)),
            ))
            .id(),
        PanelLine::Separator => commands
            .spawn((
                Node {
                    width: Val::Percent(100.0),
                    height: Val::Px(1.0),
                    margin: UiRect::vertical(Val::Px(3.0)),
                    ..default()
                },
                BackgroundColor(SEPARATOR),
            ))
            .id(),
        PanelLine::Stat { text, delta } => commands
            .spawn((Text::new(text.clone()), font, TextColor(delta_color(*delta))))
            .id(),
        PanelLine::NoDifference => commands
            .spawn((Text::new(NO_DIFFERENCE_TEXT), font, TextColor(NEUTRAL)))
            .id(),
        PanelLine::Spacer => commands
            .spawn(Node {
                height: Val::Px(font_size),
                ..default()
            })
            .id(),
    }
}

/// 对比内容变化时重建两个面板的子节点。新内容先隐藏，由 `place_panels` 在测量后显示
pub fn render_panels(
    mut commands: Commands,
    frame: Res<ComparisonFrame>,
    config: Res<CompareConfig>,
    mut reveal: ResMut<PanelReveal>,
    mut panels: Query<(Entity, &ComparePanel, &mut Visibility)>,
) -> Result<(), DrawError> {
    if !frame.is_changed() {
        return Ok(());
    }

    for side in [CompareSide::Equipped, CompareSide::Hovered] {
        let (entity, _, mut visibility) = panels
            .iter_mut()
            .find(|(_, panel, _)| panel.0 == side)
            .ok_or(DrawError::PanelMissing(side))?;

        commands.entity(entity).despawn_related::<Children>();
        *visibility = Visibility::Hidden;

        if let Some(content) = &frame.0 {
            let children: Vec<Entity> = content
                .panel_lines(side)
                .iter()
                .map(|line| spawn_line(&mut commands, line, config.panel.font_size))
                .collect();
            commands.entity(entity).add_children(&children);
        }
    }

    *reveal = if frame.0.is_some() {
        PanelReveal::AwaitingLayout
    } else {
        PanelReveal::Idle
    };
    Ok(())
}

/// UI 布局之后运行：此时面板的 `ComputedNode` 已对应新内容
pub fn mark_panels_measured(mut reveal: ResMut<PanelReveal>) {
    if *reveal == PanelReveal::AwaitingLayout {
        *reveal = PanelReveal::Measured;
    }
}

/// 用最近一次布局测得的面板尺寸计算位置；尺寸对应当前内容后才显示面板
pub fn place_panels(
    frame: Res<ComparisonFrame>,
    config: Res<CompareConfig>,
    mut reveal: ResMut<PanelReveal>,
    windows: Query<&Window, With<PrimaryWindow>>,
    mut panels: Query<(&ComparePanel, &ComputedNode, &mut Node, &mut Visibility)>,
) -> Result<(), DrawError> {
    if frame.0.is_none() {
        return Ok(());
    }

    let window = windows.single().map_err(|_| DrawError::NoPrimaryWindow)?;
    let screen = Vec2::new(window.width(), window.height());
    // 光标不在窗口内（例如由调试命令触发悬停）时以屏幕中心为准
    let cursor = window.cursor_position().unwrap_or(screen / 2.0);

    let size_of = |side: CompareSide| {
        panels
            .iter()
            .find(|(panel, ..)| panel.0 == side)
            .map(|(_, computed, ..)| computed.size() * computed.inverse_scale_factor())
            .ok_or(DrawError::PanelMissing(side))
    };
    let equip_size = size_of(CompareSide::Equipped)?;
    let compare_size = size_of(CompareSide::Hovered)?;

    let layout = config
        .layout
        .planner()
        .plan(equip_size, compare_size, cursor, screen);

    let show = *reveal == PanelReveal::Measured;
    for (panel, _, mut node, mut visibility) in &mut panels {
        let pos = match panel.0 {
            CompareSide::Equipped => layout.equip,
            CompareSide::Hovered => layout.compare,
        };
        let (left, top) = (Val::Px(pos.x), Val::Px(pos.y));
        if node.left != left || node.top != top {
            node.left = left;
            node.top = top;
        }
        if show {
            *visibility = Visibility::Visible;
        }
    }
    if show {
        *reveal = PanelReveal::Idle;
    }
    Ok(())
}

/// 绘制阶段的错误只记录，不向上抛
pub fn report_draw_error(In(result): In<Result<(), DrawError>>) {
    if let Err(err) = result {
        error!("绘制对比面板时出错: {err}");
    }
}
