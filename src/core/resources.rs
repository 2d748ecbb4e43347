use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use bevy::prelude::*;
use serde_derive::Deserialize;

use crate::compare::layout::PanelLayoutPlanner;

pub const CONFIG_PATH: &str = "assets/config/compare.toml";

/// 对比面板的运行配置（assets/config/compare.toml）
#[derive(Resource, Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct CompareConfig {
    pub modifier: ModifierKey,
    pub layout: LayoutConfig,
    pub panel: PanelConfig,
}

/// 按住哪个键才显示对比
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModifierKey {
    #[default]
    Shift,
    Ctrl,
    Alt,
}

impl ModifierKey {
    pub fn key_codes(self) -> [KeyCode; 2] {
        match self {
            ModifierKey::Shift => [KeyCode::ShiftLeft, KeyCode::ShiftRight],
            ModifierKey::Ctrl => [KeyCode::ControlLeft, KeyCode::ControlRight],
            ModifierKey::Alt => [KeyCode::AltLeft, KeyCode::AltRight],
        }
    }
}

#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// 面板与光标的水平距离
    pub cursor_gap: f32,
    /// 面板与屏幕边缘的最小距离
    pub screen_margin: f32,
    /// 纵向堆叠时两个面板的间距
    pub stack_gap: f32,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            cursor_gap: 25.0,
            screen_margin: 5.0,
            stack_gap: 5.0,
        }
    }
}

impl LayoutConfig {
    pub fn planner(&self) -> PanelLayoutPlanner {
        PanelLayoutPlanner {
            cursor_gap: self.cursor_gap,
            screen_margin: self.screen_margin,
            stack_gap: self.stack_gap,
        }
    }
}

#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(default)]
pub struct PanelConfig {
    pub font_size: f32,
}

impl Default for PanelConfig {
    fn default() -> Self {
        Self { font_size: 14.0 }
    }
}

impl CompareConfig {
    pub fn from_toml_str(s: &str) -> Result<Self> {
        toml::from_str(s).context("could not parse compare config")
    }

    fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("could not read {}", path.display()))?;
        Self::from_toml_str(&text)
    }

    /// 文件不存在时静默使用默认值；解析失败时打印警告再回退
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        if !path.exists() {
            return Self::default();
        }
        match Self::load(path) {
            Ok(config) => {
                info!("Loaded compare config from {}", path.display());
                config
            }
            Err(err) => {
                warn!("{err:#}, falling back to defaults");
                Self::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_gives_defaults() {
        let config = CompareConfig::from_toml_str("").unwrap();
        assert_eq!(config.modifier, ModifierKey::Shift);
        assert_eq!(config.layout.cursor_gap, 25.0);
        assert_eq!(config.layout.screen_margin, 5.0);
        assert_eq!(config.layout.stack_gap, 5.0);
        assert_eq!(config.panel.font_size, 14.0);
    }

    #[test]
    fn partial_sections_keep_other_defaults() {
        let config = CompareConfig::from_toml_str(
            r#"
modifier = "ctrl"

[layout]
cursor_gap = 40.0
"#,
        )
        .unwrap();
        assert_eq!(config.modifier, ModifierKey::Ctrl);
        assert_eq!(config.layout.cursor_gap, 40.0);
        assert_eq!(config.layout.screen_margin, 5.0);
        assert_eq!(
            config.modifier.key_codes(),
            [KeyCode::ControlLeft, KeyCode::ControlRight]
        );
    }

    #[test]
    fn unknown_modifier_is_rejected() {
        assert!(CompareConfig::from_toml_str(r#"modifier = "meta""#).is_err());
    }

    #[test]
    fn missing_file_falls_back_to_defaults() {
        let config = CompareConfig::load_or_default("does/not/exist.toml");
        assert_eq!(config.layout.cursor_gap, 25.0);
    }
}
