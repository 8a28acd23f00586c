//! Choosing the temperature asset within a catalog item.

use climate_common::{ClimateError, ClimateResult};
use stac_client::{StacAsset, StacItem};

use crate::config::AssetSelector;

/// Resolve `selector` against `item`, returning the asset key and asset.
///
/// A missing asset means the catalog no longer matches the expected layout.
pub fn select_asset<'a>(
    item: &'a StacItem,
    selector: &AssetSelector,
) -> ClimateResult<(&'a str, &'a StacAsset)> {
    let found = match selector {
        AssetSelector::Position(position) => item.asset_at(*position),
        AssetSelector::Key(key) => item
            .assets
            .get_key_value(key.as_str())
            .map(|(k, asset)| (k.as_str(), asset)),
    };

    found.ok_or_else(|| {
        let keys: Vec<&str> = item.asset_keys().collect();
        ClimateError::ContractViolation(format!(
            "item {} has no asset at {:?} (assets: {:?})",
            item.id.as_deref().unwrap_or("<unnamed>"),
            selector,
            keys
        ))
    })
}
