use bevy::prelude::*;

/// 面向终端的一行输出
#[derive(Event)]
pub struct LogEvent(pub String);

pub fn announce_ready(mut writer: EventWriter<LogEvent>) {
    writer.write(LogEvent(
        "Gear compare ready. Hold the modifier key over a bag item (type `help` for commands)".into(),
    ));
}
