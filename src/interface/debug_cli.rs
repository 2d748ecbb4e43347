//! 文字 CLI：读取 stdin → 解析命令 → 执行并打印

use bevy::app::AppExit;
use bevy::prelude::*;
use once_cell::sync::Lazy;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use uuid::Uuid;

use crate::compare::components::ComparisonFrame;
use crate::core::{events::LogEvent, states::AppState};
use crate::data::Catalog;
use crate::equipment::components::{Equipment, GearPosition};
use crate::equipment::events::{EquipEvent, UnequipEvent};
use crate::hover::components::{HoverTarget, HoveredItem, ModifierState};
use crate::hover::events::HoveredItemChanged;
use crate::inventory::components::Backpack;
use crate::inventory::events::{GiveItemEvent, ListInventoryEvent};

static CLI_BUFFER: Lazy<Arc<Mutex<VecDeque<String>>>> =
    Lazy::new(|| Arc::new(Mutex::new(VecDeque::new())));

/// 插件入口
pub struct DebugCliPlugin;
impl Plugin for DebugCliPlugin {
    fn build(&self, app: &mut App) {
        {
            let buffer = CLI_BUFFER.clone();
            std::thread::spawn(move || {
                use std::io::{self, BufRead};
                let stdin = io::stdin();
                for line in stdin.lock().lines().map_while(Result::ok) {
                    let line = line.trim();
                    if line.is_empty() {
                        continue;
                    }
                    if let Ok(mut buf) = buffer.lock() {
                        buf.push_back(line.to_string());
                    }
                }
            });
        }
        app
            // 事件：原始输入行
            .add_event::<CliLine>()
            // 每帧从 buffer 取出所有命令行写入事件
            .add_systems(Update, read_stdin)
            // 仅在 InGame 处理命令
            .add_systems(
                Update,
                execute_cli_commands
                    .after(read_stdin)
                    .run_if(in_state(AppState::InGame)),
            );
    }
}

/* ---------------------------- 事件与枚举 ---------------------------- */

/// 终端敲的一整行
#[derive(Event)]
struct CliLine(String);

/// 我们支持的命令
#[derive(Debug, PartialEq)]
enum Command {
    Help,
    Status,
    Exit,
    Items(Option<String>), // None=全部；Some(token)=按 id/uuid/name 查询
    Give { id: u32, count: u32, hq: bool },
    Inventory,
    Gear,
    Equip { index: usize },
    Unequip(GearPosition),
    Hover(Option<usize>), // None=清空悬停
    Modifier(bool),
    Compare,
    Invalid(String),
    Unsupported(String),
}

/* ---------------------------- 读取 stdin ---------------------------- */

fn read_stdin(mut writer: EventWriter<CliLine>) {
    let Ok(mut buffer) = CLI_BUFFER.lock() else {
        return;
    };
    while let Some(line) = buffer.pop_front() {
        writer.write(CliLine(line));
    }
}

/* ---------------------------- 命令执行 ---------------------------- */

const HELP: &str = "命令列表:
  help                     查看帮助
  status                   查看当前状态
  exit / quit              退出程序
  items                    列出所有物品
  items <token>            用 id / uuid / 名称 查询单个物品
  give <id> [count] [hq]   给予物品
  inventory                查看背包
  gear                     查看身上装备
  equip <index>            装备背包中的物品
  unequip <slot>           卸下装备（main/off/head/body/hands/waist/legs/feet/ears/neck/wrists/ring_r/ring_l/crystal）
  hover <index> | none     模拟鼠标悬停背包物品
  modifier on | off        锁定修饰键
  compare                  以 JSON 打印当前对比结果";

#[allow(clippy::too_many_arguments)]
fn execute_cli_commands(
    mut line_reader: EventReader<CliLine>,
    mut app_exit: EventWriter<AppExit>,
    mut log: EventWriter<LogEvent>,
    state: Res<State<AppState>>,
    catalog: Res<Catalog>,
    backpack: Res<Backpack>,
    equipment: Res<Equipment>,
    hovered: Res<HoveredItem>,
    frame: Res<ComparisonFrame>,
    mut modifier: ResMut<ModifierState>,
    mut ev_give: EventWriter<GiveItemEvent>,
    mut ev_list: EventWriter<ListInventoryEvent>,
    mut ev_equip: EventWriter<EquipEvent>,
    mut ev_unequip: EventWriter<UnequipEvent>,
    mut ev_hover: EventWriter<HoveredItemChanged>,
) {
    for CliLine(input) in line_reader.read() {
        match parse_command(input) {
            Command::Help => {
                log.write(LogEvent(HELP.into()));
            }

            Command::Status => {
                log.write(LogEvent(format!(
                    "State: {:?}, Items Loaded: {}, Hovered: {:?}, Modifier: {}, Comparing: {}",
                    state.get(),
                    catalog.len(),
                    hovered.0,
                    modifier.active(),
                    frame.0.is_some()
                )));
            }

            Command::Exit => {
                log.write(LogEvent("Bye~".into()));
                app_exit.write(AppExit::Success);
            }

            Command::Items(None) => {
                for entry in catalog.items_sorted() {
                    log.write(LogEvent(format!(
                        "{} | {} | {} | iLvl {}",
                        uuid_from_id(entry.id),
                        entry.id,
                        entry.name,
                        entry.item_level
                    )));
                }
            }

            Command::Items(Some(t)) => {
                // 按三种字段匹配
                let found = catalog.items_sorted().into_iter().find(|e| {
                    e.id.to_string() == t
                        || e.name.eq_ignore_ascii_case(&t)
                        || uuid_from_id(e.id).to_string().eq_ignore_ascii_case(&t)
                });
                match found {
                    Some(e) => {
                        let stats = crate::stats::aggregate(e, false);
                        let mut stat_ids: Vec<u32> = stats.stats().collect();
                        stat_ids.sort_unstable();
                        let stat_text: Vec<String> = stat_ids
                            .into_iter()
                            .filter(|s| stats.value(*s) != 0)
                            .map(|s| {
                                format!(
                                    "{} {}",
                                    crate::compare::engine::stat_label(s, &catalog),
                                    stats.value(s)
                                )
                            })
                            .collect();
                        log.write(LogEvent(format!(
                            "==================================================
UUID    : {}
ID      : {}
Name    : {}
iLvl    : {}
Materia : {}
Stats   : {}
==================================================",
                            uuid_from_id(e.id),
                            e.id,
                            e.name,
                            e.item_level,
                            e.materia_slot_count,
                            stat_text.join(", ")
                        )));
                    }
                    None => {
                        log.write(LogEvent("未找到匹配物品".into()));
                    }
                }
            }

            Command::Give { id, count, hq } => {
                ev_give.write(GiveItemEvent { id, is_hq: hq, count });
            }

            Command::Inventory => {
                ev_list.write(ListInventoryEvent);
            }

            Command::Gear => {
                let mut empty = true;
                for (position, piece) in equipment.iter() {
                    empty = false;
                    let name = catalog
                        .get(piece.item_id)
                        .map_or("<unknown>", |e| e.name.as_str());
                    let quality = if piece.is_hq { " (HQ)" } else { "" };
                    log.write(LogEvent(format!("{:>8}: {name}{quality}", position.name())));
                }
                if empty {
                    log.write(LogEvent("  (nothing equipped)".into()));
                }
            }

            Command::Equip { index } => {
                ev_equip.write(EquipEvent { index });
            }

            Command::Unequip(position) => {
                ev_unequip.write(UnequipEvent { position });
            }

            Command::Hover(None) => {
                ev_hover.write(HoveredItemChanged(0));
            }

            Command::Hover(Some(index)) => match backpack.get(index) {
                Some(stack) => {
                    let target = HoverTarget {
                        item_id: stack.item_id,
                        is_hq: stack.is_hq,
                    };
                    ev_hover.write(HoveredItemChanged(target.encode()));
                }
                None => {
                    log.write(LogEvent("该背包格为空".into()));
                }
            },

            Command::Modifier(on) => {
                modifier.latched = on;
                log.write(LogEvent(format!("修饰键锁定: {on}")));
            }

            Command::Compare => match &frame.0 {
                Some(content) => match serde_json::to_string_pretty(content) {
                    Ok(json) => {
                        log.write(LogEvent(json));
                    }
                    Err(err) => {
                        log.write(LogEvent(format!("序列化失败: {err}")));
                    }
                },
                None => {
                    log.write(LogEvent(
                        "当前没有对比内容（需要悬停目标、修饰键和同部位的已装备物品）".into(),
                    ));
                }
            },

            Command::Invalid(msg) => {
                log.write(LogEvent(msg));
            }

            Command::Unsupported(cmd) => {
                log.write(LogEvent(format!("不支持的命令: {cmd}")));
            }
        }
    }
}

/* ---------------------------- 工具函数 ---------------------------- */

fn parse_command(input: &str) -> Command {
    let mut parts = input.split_whitespace();
    let cmd = parts.next().unwrap_or("").to_lowercase();
    match cmd.as_str() {
        "help" | "h" | "?" => Command::Help,
        "status" | "s" => Command::Status,
        "exit" | "quit" | "q" => Command::Exit,
        "items" | "item" | "i" => {
            let token = parts.next().map(|s| s.to_string());
            Command::Items(token)
        }
        "give" => {
            let Some(id) = parts.next().and_then(|s| s.parse().ok()) else {
                return Command::Invalid("用法: give <id> [count] [hq]".into());
            };
            let mut count = 1;
            let mut hq = false;
            for token in parts {
                if token.eq_ignore_ascii_case("hq") {
                    hq = true;
                } else if let Ok(n) = token.parse() {
                    count = n;
                }
            }
            Command::Give { id, count, hq }
        }
        "inventory" | "inv" => Command::Inventory,
        "gear" | "equipment" => Command::Gear,
        "equip" => match parts.next().and_then(|s| s.parse().ok()) {
            Some(index) => Command::Equip { index },
            None => Command::Invalid("用法: equip <index>".into()),
        },
        "unequip" => {
            let slot = parts.next().unwrap_or("");
            match GearPosition::parse(slot) {
                Some(position) => Command::Unequip(position),
                None => Command::Invalid(format!("未知装备槽: {slot}")),
            }
        }
        "hover" => match parts.next() {
            None | Some("none") | Some("off") => Command::Hover(None),
            Some(token) => match token.parse() {
                Ok(index) => Command::Hover(Some(index)),
                Err(_) => Command::Invalid("用法: hover <index> | none".into()),
            },
        },
        "modifier" | "mod" => match parts.next() {
            Some("off") | Some("0") => Command::Modifier(false),
            _ => Command::Modifier(true),
        },
        "compare" | "cmp" => Command::Compare,
        other => Command::Unsupported(other.into()),
    }
}

fn uuid_from_id(id: u32) -> Uuid {
    // 用固定 namespace + id 字节生成版本 5 UUID，保证可重复得到同一值
    Uuid::new_v5(&Uuid::NAMESPACE_OID, id.to_string().as_bytes())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_give_with_optional_count_and_quality() {
        assert_eq!(
            parse_command("give 3001"),
            Command::Give { id: 3001, count: 1, hq: false }
        );
        assert_eq!(
            parse_command("give 3001 hq 2"),
            Command::Give { id: 3001, count: 2, hq: true }
        );
        assert!(matches!(parse_command("give sword"), Command::Invalid(_)));
    }

    #[test]
    fn parses_hover_and_modifier() {
        assert_eq!(parse_command("hover 4"), Command::Hover(Some(4)));
        assert_eq!(parse_command("hover none"), Command::Hover(None));
        assert!(matches!(parse_command("hover x"), Command::Invalid(_)));
        assert_eq!(parse_command("modifier on"), Command::Modifier(true));
        assert_eq!(parse_command("MOD off"), Command::Modifier(false));
    }

    #[test]
    fn parses_gear_commands() {
        assert_eq!(parse_command("equip 2"), Command::Equip { index: 2 });
        assert_eq!(
            parse_command("unequip ring_l"),
            Command::Unequip(GearPosition::RingLeft)
        );
        assert!(matches!(parse_command("unequip tail"), Command::Invalid(_)));
        assert_eq!(parse_command("dance"), Command::Unsupported("dance".into()));
    }

    #[test]
    fn uuid_is_stable_per_id() {
        assert_eq!(uuid_from_id(3001), uuid_from_id(3001));
        assert_ne!(uuid_from_id(3001), uuid_from_id(3002));
    }
}
