use bevy::prelude::*;

pub const HQ_ID_OFFSET: u64 = 1_000_000;
pub const MAX_HOVER_ID: u64 = 2_000_000;

/// 鼠标下的物品
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HoverTarget {
    pub item_id: u32,
    pub is_hq: bool,
}

impl HoverTarget {
    /// 解析悬停事件里的原始 id：超过 1_000_000 的是 HQ，0 与超过 2_000_000 的视为无效
    pub fn decode(raw: u64) -> Option<Self> {
        if raw == 0 || raw > MAX_HOVER_ID {
            return None;
        }
        let (id, is_hq) = if raw > HQ_ID_OFFSET {
            (raw - HQ_ID_OFFSET, true)
        } else {
            (raw, false)
        };
        Some(Self {
            item_id: u32::try_from(id).ok()?,
            is_hq,
        })
    }

    pub fn encode(self) -> u64 {
        let id = u64::from(self.item_id);
        if self.is_hq { id + HQ_ID_OFFSET } else { id }
    }
}

/// 当前悬停目标：由悬停事件写入，每帧的对比系统读取
#[derive(Resource, Debug, Default)]
pub struct HoveredItem(pub Option<HoverTarget>);

/// 修饰键状态，每帧轮询一次；`latched` 由调试命令打开，方便无键盘时测试
#[derive(Resource, Debug, Default)]
pub struct ModifierState {
    pub held: bool,
    pub latched: bool,
}

impl ModifierState {
    pub fn active(&self) -> bool {
        self.held || self.latched
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decode_splits_quality_offset() {
        assert_eq!(
            HoverTarget::decode(3001),
            Some(HoverTarget { item_id: 3001, is_hq: false })
        );
        assert_eq!(
            HoverTarget::decode(1_003_001),
            Some(HoverTarget { item_id: 3001, is_hq: true })
        );
        assert_eq!(
            HoverTarget::decode(1_000_000),
            Some(HoverTarget { item_id: 1_000_000, is_hq: false })
        );
    }

    #[test]
    fn decode_rejects_out_of_range_ids() {
        assert_eq!(HoverTarget::decode(0), None);
        assert_eq!(HoverTarget::decode(2_000_001), None);
        assert_eq!(HoverTarget::decode(u64::MAX), None);
    }

    #[test]
    fn encode_matches_decode() {
        let target = HoverTarget { item_id: 42, is_hq: true };
        assert_eq!(target.encode(), 1_000_042);
        assert_eq!(HoverTarget::decode(target.encode()), Some(target));
    }
}
