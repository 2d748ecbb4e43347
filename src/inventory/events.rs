use bevy::prelude::*;

#[derive(Event)]
pub struct GiveItemEvent {
    pub id: u32,
    pub is_hq: bool,
    pub count: u32,
}

#[derive(Event)]
pub struct ListInventoryEvent; // 让 CLI 请求打印背包
