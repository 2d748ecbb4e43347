use bevy::prelude::*;

pub const BACKPACK_CAPACITY: usize = 30;

/// 玩家背包（挂在 Resource）
#[derive(Resource)]
pub struct Backpack {
    pub slots: Vec<ItemStack>, // 固定容量，空位用 count=0 占位
    pub capacity: usize,
}

impl Default for Backpack {
    fn default() -> Self {
        Self {
            slots: vec![ItemStack::default(); BACKPACK_CAPACITY],
            capacity: BACKPACK_CAPACITY,
        }
    }
}

/// 运行时物品实例：只引用物品表 id，HQ 与 NQ 分开堆叠
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ItemStack {
    pub item_id: u32,
    pub is_hq: bool,
    pub count: u32,
}

impl ItemStack {
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }
}

impl Backpack {
    /// 放入物品：先找同 id 同品质的堆叠，再找空位；背包满或堆叠数溢出时返回 false
    pub fn insert(&mut self, item_id: u32, is_hq: bool, count: u32) -> bool {
        if let Some(stack) = self
            .slots
            .iter_mut()
            .find(|s| !s.is_empty() && s.item_id == item_id && s.is_hq == is_hq)
        {
            return match stack.count.checked_add(count) {
                Some(total) => {
                    stack.count = total;
                    true
                }
                None => false,
            };
        }
        match self.slots.iter_mut().find(|s| s.is_empty()) {
            Some(slot) => {
                *slot = ItemStack { item_id, is_hq, count };
                true
            }
            None => false,
        }
    }

    /// 取出一个，堆叠清空后复位为空位
    pub fn take_one(&mut self, index: usize) -> Option<ItemStack> {
        let stack = self.slots.get_mut(index).filter(|s| !s.is_empty())?;
        let taken = ItemStack { count: 1, ..*stack };
        stack.count -= 1;
        if stack.count == 0 {
            *stack = ItemStack::default();
        }
        Some(taken)
    }

    pub fn get(&self, index: usize) -> Option<&ItemStack> {
        self.slots.get(index).filter(|s| !s.is_empty())
    }
}
