pub mod loader;
pub mod schema;

use std::collections::HashMap;

use bevy::prelude::*;
use schema::{CatalogFile, ItemEntry, StarterKit};

use crate::core::states::AppState;

pub const CATALOG_PATH: &str = "data/catalog.ron";

// --------------------------- 资源 ---------------------------
#[derive(Resource, Default)]
pub struct CatalogAssets {
    handle: Option<Handle<CatalogFile>>,
}

/// 载入完成后按 id 建立索引的物品表，之后只读
#[derive(Resource, Default, Debug)]
pub struct Catalog {
    items: HashMap<u32, ItemEntry>,
    stat_names: HashMap<u32, String>,
    starter: StarterKit,
}

impl Catalog {
    pub fn from_file(file: &CatalogFile) -> Self {
        Self {
            items: file.items.iter().map(|e| (e.id, e.clone())).collect(),
            stat_names: file
                .base_params
                .iter()
                .map(|p| (p.id, p.name.clone()))
                .collect(),
            starter: file.starter.clone(),
        }
    }

    pub fn get(&self, id: u32) -> Option<&ItemEntry> {
        self.items.get(&id)
    }

    pub fn stat_name(&self, stat: u32) -> Option<&str> {
        self.stat_names.get(&stat).map(String::as_str)
    }

    /// 按 id 排序，方便稳定输出
    pub fn items_sorted(&self) -> Vec<&ItemEntry> {
        let mut items: Vec<_> = self.items.values().collect();
        items.sort_by_key(|e| e.id);
        items
    }

    pub fn starter(&self) -> &StarterKit {
        &self.starter
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }
}

// --------------------------- 插件 ---------------------------
pub struct DataPlugin;
impl Plugin for DataPlugin {
    fn build(&self, app: &mut App) {
        app
            // 注册资产类型 & Loader
            .init_asset::<CatalogFile>()
            .register_asset_loader(loader::RonCatalogLoader)
            .init_resource::<CatalogAssets>()
            .init_resource::<Catalog>()
            // Loading 流程
            .add_systems(OnEnter(AppState::Loading), start_loading)
            .add_systems(Update, check_loaded.run_if(in_state(AppState::Loading)));
    }
}

// --------------------------- 系统 ---------------------------
fn start_loading(mut catalog_assets: ResMut<CatalogAssets>, asset_server: Res<AssetServer>) {
    let handle: Handle<CatalogFile> = asset_server.load(CATALOG_PATH);
    catalog_assets.handle = Some(handle);
}

fn check_loaded(
    mut next: ResMut<NextState<AppState>>,
    mut catalog: ResMut<Catalog>,
    catalog_assets: Res<CatalogAssets>,
    files: Res<Assets<CatalogFile>>,
) {
    if let Some(h) = &catalog_assets.handle {
        if let Some(file) = files.get(h) {
            *catalog = Catalog::from_file(file);
            info!(
                "✔ Catalog loaded: {} items, {} stat names",
                file.items.len(),
                file.base_params.len()
            );
            next.set(AppState::InGame);
        }
    }
}

#[cfg(test)]
pub(crate) mod fixtures {
    use super::schema::{BaseParamEntry, CatalogFile, EquipSlotCategory, ItemEntry, StarterKit};
    use super::Catalog;

    pub fn head_item(id: u32, vitality: i16, defense: u16) -> ItemEntry {
        ItemEntry {
            id,
            name: format!("Helm {id}"),
            item_level: 10,
            base_param: vec![3],
            base_param_value: vec![vitality],
            defense_phys: defense,
            equip_slot_category: EquipSlotCategory {
                head: true,
                ..Default::default()
            },
            ..Default::default()
        }
    }

    pub fn ring_item(id: u32) -> ItemEntry {
        ItemEntry {
            id,
            name: format!("Ring {id}"),
            base_param: vec![27],
            base_param_value: vec![4],
            equip_slot_category: EquipSlotCategory {
                finger_l: true,
                finger_r: true,
                ..Default::default()
            },
            ..Default::default()
        }
    }

    pub fn catalog(items: Vec<ItemEntry>) -> Catalog {
        Catalog::from_file(&CatalogFile {
            items,
            base_params: vec![
                BaseParamEntry { id: 3, name: "Vitality".into() },
                BaseParamEntry { id: 21, name: "Defense".into() },
            ],
            starter: StarterKit::default(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::*;

    #[test]
    fn catalog_indexes_items_and_names() {
        let catalog = catalog(vec![head_item(2, 1, 1), head_item(1, 1, 1)]);
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.get(2).map(|e| e.name.as_str()), Some("Helm 2"));
        assert!(catalog.get(3).is_none());
        assert_eq!(catalog.stat_name(3), Some("Vitality"));
        let ids: Vec<u32> = catalog.items_sorted().iter().map(|e| e.id).collect();
        assert_eq!(ids, vec![1, 2]);
    }
}
