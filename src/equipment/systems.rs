use super::{components::*, events::*};
use crate::core::events::LogEvent;
use crate::data::Catalog;
use crate::inventory::{components::Backpack, events::ListInventoryEvent};
use bevy::prelude::*;

pub fn equip_item(
    mut ev_equip: EventReader<EquipEvent>,
    mut equip: ResMut<Equipment>,
    mut backpack: ResMut<Backpack>,
    mut list_event: EventWriter<ListInventoryEvent>,
    mut log_event: EventWriter<LogEvent>,
    catalog: Res<Catalog>,
) {
    for ev in ev_equip.read() {
        // 检查背包索引和物品
        let Some(stack) = backpack.get(ev.index).copied() else {
            log_event.write(LogEvent("该背包格为空或索引超出范围".to_string()));
            continue;
        };
        let piece = GearPiece {
            item_id: stack.item_id,
            is_hq: stack.is_hq,
        };

        let position = match equip.position_for(piece, &catalog) {
            Ok(position) => position,
            Err(err) => {
                log_event.write(LogEvent(err.to_string()));
                continue;
            }
        };

        // 先取出新装备再放回旧装备；旧装备放不回背包时整体回滚
        backpack.take_one(ev.index);
        if let Some(old) = equip.put(position, piece) {
            if !backpack.insert(old.item_id, old.is_hq, 1) {
                equip.put(position, old);
                if !backpack.insert(piece.item_id, piece.is_hq, 1) {
                    error!("回滚失败，物品 {} 丢失", piece.item_id);
                }
                log_event.write(LogEvent("背包已满，无法卸下原装备".to_string()));
                continue;
            }
        }

        let name = catalog
            .get(piece.item_id)
            .map_or("<unknown>", |e| e.name.as_str());
        log_event.write(LogEvent(format!("已装备 {}: {}", position.name(), name)));

        // 刷新背包显示
        list_event.write(ListInventoryEvent);
    }
}

/// 卸下装备
pub fn unequip_item(
    mut ev_unequip: EventReader<UnequipEvent>,
    mut equip: ResMut<Equipment>,
    mut backpack: ResMut<Backpack>,
    mut list_event: EventWriter<ListInventoryEvent>,
    mut log_event: EventWriter<LogEvent>,
    catalog: Res<Catalog>,
) {
    for ev in ev_unequip.read() {
        let slot_name = ev.position.name();
        let Some(piece) = equip.get(ev.position) else {
            log_event.write(LogEvent(format!("{slot_name} 槽位为空")));
            continue;
        };

        if !backpack.insert(piece.item_id, piece.is_hq, 1) {
            log_event.write(LogEvent("背包已满，无法卸下装备".to_string()));
            continue;
        }
        equip.take(ev.position);

        let name = catalog
            .get(piece.item_id)
            .map_or("<unknown>", |e| e.name.as_str());
        log_event.write(LogEvent(format!("已卸下 {slot_name}: {name}")));
        list_event.write(ListInventoryEvent);
    }
}
