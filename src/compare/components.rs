use bevy::prelude::*;
use serde_derive::Serialize;

use super::engine::{CompareSide, DiffRow, ItemComparison};
use crate::equipment::slot::ArmorySlot;
use crate::stats::EquippedItem;

/// 对比面板根节点
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub struct ComparePanel(pub CompareSide);

/// 本帧要显示的对比内容；None 表示不显示面板
#[derive(Resource, Debug, Default, PartialEq)]
pub struct ComparisonFrame(pub Option<FrameContent>);

/// 面板内容重建后要等一次 UI 布局测出新尺寸，才能定位并显示
#[derive(Resource, Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum PanelReveal {
    #[default]
    Idle,
    /// 子节点已排队，尚未布局
    AwaitingLayout,
    /// 布局已按新内容算出 `ComputedNode`
    Measured,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ItemSummary {
    pub id: u32,
    pub name: String,
    pub item_level: u32,
    pub is_hq: bool,
}

impl From<EquippedItem<'_>> for ItemSummary {
    fn from(item: EquippedItem<'_>) -> Self {
        Self {
            id: item.item.id,
            name: item.item.name.clone(),
            item_level: item.item.item_level,
            is_hq: item.is_hq,
        }
    }
}

/// 与某一件已装备物品的双向对比
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PanelEntry {
    pub equipped: ItemSummary,
    /// 装备面板：已装备 - 悬停
    pub equipped_view: ItemComparison,
    /// 悬停面板：悬停 - 已装备
    pub hovered_view: ItemComparison,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FrameContent {
    pub slot: ArmorySlot,
    pub hovered: ItemSummary,
    pub entries: Vec<PanelEntry>,
}

/// 面板中的一行，渲染系统按顺序生成 UI 节点
#[derive(Debug, Clone, PartialEq)]
pub enum PanelLine {
    Header {
        title: String,
        item_level: u32,
        item_level_delta: i32,
    },
    Separator,
    Stat {
        text: String,
        delta: i32,
    },
    NoDifference,
    Spacer,
}

pub const NO_DIFFERENCE_TEXT: &str = "There's no difference";

pub fn format_row(row: &DiffRow) -> String {
    if row.delta > 0 {
        format!("{}: +{}", row.label, row.delta)
    } else {
        format!("{}: {}", row.label, row.delta)
    }
}

fn quality_suffix(is_hq: bool) -> &'static str {
    if is_hq { " (HQ)" } else { "" }
}

impl FrameContent {
    /// 生成某一侧面板的全部行；只显示非 0 的差值，全部为 0 时显示提示
    pub fn panel_lines(&self, side: CompareSide) -> Vec<PanelLine> {
        let numbered = self.entries.len() > 1;
        let mut lines = Vec::new();

        for (i, entry) in self.entries.iter().enumerate() {
            if i > 0 {
                lines.push(PanelLine::Spacer);
            }

            let (subject, view) = match side {
                CompareSide::Equipped => (&entry.equipped, &entry.equipped_view),
                CompareSide::Hovered => (&self.hovered, &entry.hovered_view),
            };
            let prefix = if numbered { format!("{}: ", i + 1) } else { String::new() };
            let title = match side {
                CompareSide::Equipped => format!("{prefix}Equipped: {}", subject.name),
                CompareSide::Hovered => format!("{prefix}{}", subject.name),
            };
            lines.push(PanelLine::Header {
                title: format!("{title}{}", quality_suffix(subject.is_hq)),
                item_level: subject.item_level,
                item_level_delta: view.item_level_delta,
            });

            lines.push(PanelLine::Separator);
            if view.is_unchanged() {
                lines.push(PanelLine::NoDifference);
                continue;
            }
            lines.extend(view.changed_rows().map(|row| PanelLine::Stat {
                text: format_row(row),
                delta: row.delta,
            }));
        }
        lines
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn summary(id: u32, name: &str, item_level: u32) -> ItemSummary {
        ItemSummary {
            id,
            name: name.into(),
            item_level,
            is_hq: false,
        }
    }

    fn view(rows: &[(Option<u32>, &str, i32)], item_level_delta: i32) -> ItemComparison {
        ItemComparison {
            item_level_delta,
            rows: rows
                .iter()
                .map(|(stat, label, delta)| DiffRow {
                    stat: *stat,
                    label: label.to_string(),
                    delta: *delta,
                })
                .collect(),
        }
    }

    fn frame(entries: Vec<PanelEntry>) -> FrameContent {
        FrameContent {
            slot: ArmorySlot::Head,
            hovered: summary(2, "New Hat", 20),
            entries,
        }
    }

    #[test]
    fn single_entry_lists_only_changed_rows() {
        let content = frame(vec![PanelEntry {
            equipped: summary(1, "Old Hat", 10),
            equipped_view: view(&[(None, "Materia", 1), (Some(3), "Vitality", -4), (Some(21), "Defense", 0)], -10),
            hovered_view: view(&[(None, "Materia", -1), (Some(3), "Vitality", 4), (Some(21), "Defense", 0)], 10),
        }]);

        let lines = content.panel_lines(CompareSide::Hovered);
        assert_eq!(
            lines,
            vec![
                PanelLine::Header {
                    title: "New Hat".into(),
                    item_level: 20,
                    item_level_delta: 10,
                },
                PanelLine::Separator,
                PanelLine::Stat { text: "Materia: -1".into(), delta: -1 },
                PanelLine::Stat { text: "Vitality: +4".into(), delta: 4 },
            ]
        );

        let lines = content.panel_lines(CompareSide::Equipped);
        assert_eq!(
            lines[0],
            PanelLine::Header {
                title: "Equipped: Old Hat".into(),
                item_level: 10,
                item_level_delta: -10,
            }
        );
    }

    #[test]
    fn identical_items_show_empty_state() {
        let same = view(&[(None, "Materia", 0), (Some(3), "Vitality", 0)], 0);
        let content = frame(vec![PanelEntry {
            equipped: summary(2, "New Hat", 20),
            equipped_view: same.clone(),
            hovered_view: same,
        }]);
        let lines = content.panel_lines(CompareSide::Equipped);
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[1], PanelLine::Separator);
        assert_eq!(lines[2], PanelLine::NoDifference);
    }

    #[test]
    fn multiple_equipped_items_are_numbered() {
        let rows = view(&[(None, "Materia", 0), (Some(27), "Critical Hit", 2)], 0);
        let entry = |id| PanelEntry {
            equipped: summary(id, "Ring", 5),
            equipped_view: rows.clone(),
            hovered_view: rows.clone(),
        };
        let content = frame(vec![entry(7), entry(8)]);
        let lines = content.panel_lines(CompareSide::Equipped);
        let titles: Vec<_> = lines
            .iter()
            .filter_map(|l| match l {
                PanelLine::Header { title, .. } => Some(title.as_str()),
                _ => None,
            })
            .collect();
        assert_eq!(titles, vec!["1: Equipped: Ring", "2: Equipped: Ring"]);
        assert!(lines.contains(&PanelLine::Spacer));
    }
}
