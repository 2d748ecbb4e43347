use bevy::math::Vec2;

/// 两个面板的最终左上角坐标
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PanelLayout {
    pub equip: Vec2,
    pub compare: Vec2,
    /// 是否放弃了左右并排而改为上下堆叠
    pub stacked: bool,
}

/// 以光标为中心摆放两个面板：装备面板在左，悬停物品面板在右；
/// 任一侧越出屏幕时改为上下堆叠，底部越界时整体上移。
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PanelLayoutPlanner {
    pub cursor_gap: f32,
    pub screen_margin: f32,
    pub stack_gap: f32,
}

impl Default for PanelLayoutPlanner {
    fn default() -> Self {
        Self {
            cursor_gap: 25.0,
            screen_margin: 5.0,
            stack_gap: 5.0,
        }
    }
}

impl PanelLayoutPlanner {
    pub fn plan(&self, equip_size: Vec2, compare_size: Vec2, cursor: Vec2, screen: Vec2) -> PanelLayout {
        let mut equip = Vec2::new(cursor.x - equip_size.x - self.cursor_gap, cursor.y);
        let mut compare = Vec2::new(cursor.x + self.cursor_gap, cursor.y);

        let left_out = equip.x - self.screen_margin < 0.0;
        let right_out = compare.x + compare_size.x + self.screen_margin > screen.x;
        let stacked = left_out || right_out;

        let overflow = if stacked {
            // 没越界的一侧留在原位，另一个面板放到它下面
            let top = if left_out {
                equip = Vec2::new(compare.x, compare.y + compare_size.y + self.stack_gap);
                compare.y
            } else {
                compare = Vec2::new(equip.x, equip.y + equip_size.y + self.stack_gap);
                equip.y
            };
            let total_height = equip_size.y + compare_size.y + self.stack_gap + self.screen_margin;
            top + total_height - screen.y
        } else {
            let min_height = equip_size.y.min(compare_size.y) + self.screen_margin;
            cursor.y + min_height - screen.y
        };

        if overflow > 0.0 {
            equip.y -= overflow;
            compare.y -= overflow;
        }

        PanelLayout {
            equip: clamp_to_screen(equip, equip_size, screen),
            compare: clamp_to_screen(compare, compare_size, screen),
            stacked,
        }
    }
}

/// 面板比屏幕还大时贴住左/上边缘，允许重叠
fn clamp_to_screen(pos: Vec2, size: Vec2, screen: Vec2) -> Vec2 {
    Vec2::new(pos.x.min(screen.x - size.x).max(0.0), pos.y.max(0.0))
}

#[cfg(test)]
mod tests {
    use super::*;

    const SCREEN: Vec2 = Vec2::new(1920.0, 1080.0);
    const PANEL: Vec2 = Vec2::new(200.0, 100.0);

    fn plan(cursor: Vec2) -> PanelLayout {
        PanelLayoutPlanner::default().plan(PANEL, PANEL, cursor, SCREEN)
    }

    #[test]
    fn side_by_side_around_cursor() {
        let layout = plan(Vec2::new(960.0, 300.0));
        assert!(!layout.stacked);
        assert_eq!(layout.equip, Vec2::new(735.0, 300.0));
        assert_eq!(layout.compare, Vec2::new(985.0, 300.0));
    }

    #[test]
    fn left_edge_stacks_equip_below_compare() {
        let layout = plan(Vec2::new(50.0, 300.0));
        assert!(layout.stacked);
        assert_eq!(layout.compare, Vec2::new(75.0, 300.0));
        assert_eq!(layout.equip, Vec2::new(75.0, 405.0));
        // 205 的总高度放得下，不需要上移
        assert_eq!(layout.equip.y - layout.compare.y, PANEL.y + 5.0);
    }

    #[test]
    fn right_edge_stacks_compare_below_equip() {
        let layout = plan(Vec2::new(1800.0, 300.0));
        assert!(layout.stacked);
        assert_eq!(layout.equip, Vec2::new(1575.0, 300.0));
        assert_eq!(layout.compare, Vec2::new(1575.0, 405.0));
    }

    #[test]
    fn side_by_side_bottom_overflow_shifts_both_up() {
        let layout = plan(Vec2::new(960.0, 1060.0));
        assert!(!layout.stacked);
        // 1060 + 100 + 5 - 1080 = 85
        assert_eq!(layout.equip, Vec2::new(735.0, 975.0));
        assert_eq!(layout.compare, Vec2::new(985.0, 975.0));
    }

    #[test]
    fn side_by_side_overflow_uses_shorter_panel() {
        let layout = PanelLayoutPlanner::default().plan(
            Vec2::new(200.0, 400.0),
            Vec2::new(200.0, 50.0),
            Vec2::new(960.0, 1000.0),
            SCREEN,
        );
        // 1000 + 50 + 5 - 1080 < 0
        assert_eq!(layout.equip.y, 1000.0);
        assert_eq!(layout.compare.y, 1000.0);
    }

    #[test]
    fn stacked_bottom_overflow_keeps_relative_offset() {
        let layout = plan(Vec2::new(1800.0, 1000.0));
        assert!(layout.stacked);
        // 1000 + 100 + 100 + 10 - 1080 = 130
        assert_eq!(layout.equip.y, 870.0);
        assert_eq!(layout.compare.y, 975.0);
        assert!(layout.compare.y + PANEL.y <= SCREEN.y);
    }

    #[test]
    fn oversized_panels_are_clamped_not_rejected() {
        let screen = Vec2::new(300.0, 200.0);
        let big = Vec2::new(400.0, 300.0);
        let layout = PanelLayoutPlanner::default().plan(big, big, Vec2::new(150.0, 100.0), screen);
        assert!(layout.stacked);
        assert_eq!(layout.equip.x, 0.0);
        assert_eq!(layout.compare.x, 0.0);
        assert!(layout.equip.y >= 0.0);
        assert!(layout.compare.y >= 0.0);
    }

    #[test]
    fn custom_gaps_are_respected() {
        let planner = PanelLayoutPlanner {
            cursor_gap: 40.0,
            screen_margin: 10.0,
            stack_gap: 8.0,
        };
        let layout = planner.plan(PANEL, PANEL, Vec2::new(960.0, 300.0), SCREEN);
        assert_eq!(layout.equip.x, 720.0);
        assert_eq!(layout.compare.x, 1000.0);

        let stacked = planner.plan(PANEL, PANEL, Vec2::new(100.0, 300.0), SCREEN);
        assert_eq!(stacked.equip.y, 408.0);
    }
}
