use bevy::asset::{io::Reader, AssetLoader, LoadContext};
use std::future::Future;
use thiserror::Error;

use super::schema::CatalogFile;

#[derive(Default)]
pub struct RonCatalogLoader;

#[derive(Debug, Error)]
pub enum CatalogLoaderError {
    #[error("Could not load asset: {0}")]
    Io(#[from] std::io::Error),
    #[error("Could not parse RON: {0}")]
    Ron(#[from] ron::error::SpannedError),
    #[error("Could not interpret bytes as UTF-8: {0}")]
    Utf8(#[from] std::str::Utf8Error),
}

pub fn parse_catalog(bytes: &[u8]) -> Result<CatalogFile, CatalogLoaderError> {
    let s = std::str::from_utf8(bytes)?;
    Ok(ron::de::from_str(s)?)
}

impl AssetLoader for RonCatalogLoader {
    type Asset = CatalogFile;
    type Settings = ();
    type Error = CatalogLoaderError;

    fn load(
        &self,
        reader: &mut dyn Reader,
        _settings: &Self::Settings,
        _load_context: &mut LoadContext,
    ) -> impl Future<Output = Result<Self::Asset, Self::Error>> + Send {
        async move {
            let mut bytes = Vec::new();
            reader.read_to_end(&mut bytes).await?;
            parse_catalog(&bytes)
        }
    }

    fn extensions(&self) -> &[&str] {
        &["catalog.ron"]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_items_with_defaults() {
        let src = r#"(
            items: [
                (
                    id: 3001,
                    name: "Bronze Sallet",
                    item_level: 5,
                    base_param: [3],
                    base_param_value: [2],
                    defense_phys: 12,
                    equip_slot_category: (head: true),
                ),
            ],
            base_params: [(id: 3, name: "Vitality")],
        )"#;
        let file = parse_catalog(src.as_bytes()).unwrap();
        assert_eq!(file.items.len(), 1);
        let item = &file.items[0];
        assert_eq!(item.defense_phys, 12);
        assert_eq!(item.block, 0);
        assert!(item.equip_slot_category.head);
        assert!(!item.equip_slot_category.body);
        assert_eq!(file.base_params[0].name, "Vitality");
    }

    #[test]
    fn bundled_catalog_is_consistent() {
        let file = parse_catalog(include_str!("../../assets/data/catalog.ron").as_bytes()).unwrap();
        let catalog = crate::data::Catalog::from_file(&file);
        let starter = catalog.starter();
        for entry in starter.equipped.iter().chain(&starter.backpack) {
            assert!(catalog.get(entry.id).is_some(), "starter item {} missing", entry.id);
        }
        for item in &file.items {
            assert_eq!(item.base_param.len(), item.base_param_value.len(), "{}", item.name);
            assert_eq!(
                item.base_param_special.len(),
                item.base_param_value_special.len(),
                "{}",
                item.name
            );
        }
    }

    #[test]
    fn rejects_invalid_utf8() {
        let err = parse_catalog(&[0xff, 0xfe]).unwrap_err();
        assert!(matches!(err, CatalogLoaderError::Utf8(_)));
    }

    #[test]
    fn rejects_malformed_ron() {
        let err = parse_catalog(b"(items: [").unwrap_err();
        assert!(matches!(err, CatalogLoaderError::Ron(_)));
    }
}
