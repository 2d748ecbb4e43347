use super::{components::*, events::*};
use crate::core::events::LogEvent;
use crate::data::Catalog;
use crate::equipment::components::{Equipment, GearPiece};
use bevy::prelude::*;

/// 处理 "give"：往背包里塞 ItemStack
pub fn give_item(
    mut ev_give: EventReader<GiveItemEvent>,
    mut backpack: ResMut<Backpack>,
    mut log: EventWriter<LogEvent>,
    catalog: Res<Catalog>,
) {
    for ev in ev_give.read() {
        let Some(entry) = catalog.get(ev.id) else {
            warn!("不存在物品 ID {}", ev.id);
            log.write(LogEvent(format!("不存在物品 ID {}", ev.id)));
            continue;
        };

        if backpack.insert(entry.id, ev.is_hq, ev.count) {
            let quality = if ev.is_hq { " (HQ)" } else { "" };
            info!("获得 {}{quality} ×{}", entry.name, ev.count);
            log.write(LogEvent(format!("获得 {}{quality} ×{}", entry.name, ev.count)));
        } else {
            warn!("背包已满或堆叠已达上限，无法获得 {}", entry.name);
            log.write(LogEvent(format!("背包已满或堆叠已达上限，无法获得 {}", entry.name)));
        }
    }
}

/// 打印背包内容
pub fn print_inventory(
    mut ev_list: EventReader<ListInventoryEvent>,
    mut log: EventWriter<LogEvent>,
    backpack: Res<Backpack>,
    catalog: Res<Catalog>,
) {
    if ev_list.is_empty() {
        return;
    }
    ev_list.clear();

    let mut empty = true;
    for (idx, stack) in backpack.slots.iter().enumerate() {
        if stack.is_empty() {
            continue;
        }
        empty = false;
        let name = catalog
            .get(stack.item_id)
            .map_or("<unknown>", |e| e.name.as_str());
        let quality = if stack.is_hq { " (HQ)" } else { "" };
        log.write(LogEvent(format!(
            "[{idx}] {name}{quality} ×{} (id={})",
            stack.count, stack.item_id
        )));
    }

    if empty {
        log.write(LogEvent("  (empty)".into()));
    }
}

/// 进入游戏时按物品表的 starter 配置发放初始装备与背包物品
pub fn grant_starter_kit(
    mut backpack: ResMut<Backpack>,
    mut equipment: ResMut<Equipment>,
    catalog: Res<Catalog>,
) {
    let starter = catalog.starter();

    for entry in &starter.equipped {
        let piece = GearPiece { item_id: entry.id, is_hq: entry.hq };
        match equipment.equip(piece, &catalog) {
            Ok((position, _)) => info!("初始装备 {} → {}", entry.id, position.name()),
            Err(err) => warn!("初始装备失败: {err}"),
        }
    }

    for entry in &starter.backpack {
        if catalog.get(entry.id).is_none() {
            warn!("初始物品不存在: {}", entry.id);
            continue;
        }
        if !backpack.insert(entry.id, entry.hq, entry.count) {
            warn!("背包已满，跳过初始物品 {}", entry.id);
        }
    }
}
