//! Parsing catalog and signer payloads into typed schemas.

use climate_common::{BoundingBox, ClimateError, ErrorKind, RequestDate};
use stac_client::{SearchRequest, SearchResponse, SignResponse, StacError, StacItem};

// ============================================================================
// Search request
// ============================================================================

#[test]
fn test_search_request_wire_shape() {
    let date = RequestDate::parse("2022-07-15").unwrap();
    let req = SearchRequest::new(
        "noaa-nclimgrid-monthly",
        BoundingBox::WEST_VIRGINIA,
        date.stac_datetime(),
    );

    let json = serde_json::to_value(&req).unwrap();
    assert_eq!(
        json,
        serde_json::json!({
            "collections": ["noaa-nclimgrid-monthly"],
            "bbox": [-82.644739, 37.201483, -77.719519, 40.638801],
            "datetime": "2022-07-15T00:00:00Z"
        })
    );
}

// ============================================================================
// Search response
// ============================================================================

const NCLIMGRID_ITEM: &str = r#"{
  "type": "FeatureCollection",
  "features": [
    {
      "type": "Feature",
      "id": "nclimgrid-202207",
      "collection": "noaa-nclimgrid-monthly",
      "properties": {"datetime": "2022-07-01T00:00:00Z"},
      "assets": {
        "prcp": {"href": "https://nclimgridwesteurope.blob.core.windows.net/nclimgrid/nclimgrid-prcp/nclimgrid_prcp_202207.tif", "type": "image/tiff; application=geotiff; profile=cloud-optimized", "roles": ["data"]},
        "tavg": {"href": "https://nclimgridwesteurope.blob.core.windows.net/nclimgrid/nclimgrid-tavg/nclimgrid_tavg_202207.tif", "title": "Average temperature"},
        "tmax": {"href": "https://nclimgridwesteurope.blob.core.windows.net/nclimgrid/nclimgrid-tmax/nclimgrid_tmax_202207.tif"},
        "tmin": {"href": "https://nclimgridwesteurope.blob.core.windows.net/nclimgrid/nclimgrid-tmin/nclimgrid_tmin_202207.tif"}
      }
    }
  ],
  "links": []
}"#;

fn first_item(body: &str) -> StacItem {
    let resp: SearchResponse = serde_json::from_str(body).unwrap();
    resp.first_item().unwrap().unwrap()
}

#[test]
fn test_assets_keep_declaration_order() {
    let resp: SearchResponse = serde_json::from_str(NCLIMGRID_ITEM).unwrap();
    assert_eq!(resp.features.len(), 1);

    let item = resp.first_item().unwrap().unwrap();
    assert_eq!(item.id.as_deref(), Some("nclimgrid-202207"));
    let keys: Vec<_> = item.asset_keys().collect();
    assert_eq!(keys, ["prcp", "tavg", "tmax", "tmin"]);

    let (key, asset) = item.asset_at(1).unwrap();
    assert_eq!(key, "tavg");
    assert!(asset.href.ends_with("nclimgrid_tavg_202207.tif"));
    assert_eq!(asset.title.as_deref(), Some("Average temperature"));
}

#[test]
fn test_asset_optional_fields() {
    let item = first_item(NCLIMGRID_ITEM);
    let prcp = item.asset("prcp").unwrap();
    assert_eq!(prcp.roles, ["data"]);
    assert!(prcp.media_type.as_deref().unwrap().starts_with("image/tiff"));
    assert!(item.asset("missing").is_none());
    assert!(item.asset_at(4).is_none());
}

#[test]
fn test_missing_features_is_empty() {
    let resp: SearchResponse = serde_json::from_str(r#"{"type": "FeatureCollection"}"#).unwrap();
    assert!(resp.features.is_empty());
    assert!(resp.first_item().unwrap().is_none());
}

#[test]
fn test_null_features_is_empty() {
    let resp: SearchResponse =
        serde_json::from_str(r#"{"type": "FeatureCollection", "features": null}"#).unwrap();
    assert!(resp.features.is_empty());
    assert!(resp.first_item().unwrap().is_none());
}

#[test]
fn test_item_without_assets() {
    let item = first_item(r#"{"features": [{"id": "x"}]}"#);
    assert!(item.assets.is_empty());
    assert!(item.asset_at(1).is_none());
}

#[test]
fn test_first_asset_without_href_is_rejected() {
    let resp: SearchResponse =
        serde_json::from_str(r#"{"features": [{"assets": {"a": {"title": "no href"}}}]}"#).unwrap();
    assert!(resp.first_item().is_err());
}

#[test]
fn test_malformed_trailing_feature_is_ignored() {
    let item = first_item(
        r#"{"features": [
            {"id": "good", "assets": {"a": {"href": "https://h/a.tif"}}},
            {"id": "bad", "assets": {"a": {"title": "no href"}}}
        ]}"#,
    );
    assert_eq!(item.id.as_deref(), Some("good"));
    assert_eq!(item.asset("a").unwrap().href, "https://h/a.tif");
}

// ============================================================================
// Sign response
// ============================================================================

#[test]
fn test_sign_response_href() {
    let resp: SignResponse = serde_json::from_str(
        r#"{"href": "https://acct.blob.core.windows.net/c/x.tif?st=1&sig=abc", "msft:expiry": "2022-07-16T00:00:00Z"}"#,
    )
    .unwrap();
    let signed = resp.into_signed_url().unwrap();
    assert!(signed.as_str().contains("sig=abc"));
    assert_eq!(signed.expiry(), Some("2022-07-16T00:00:00Z"));
}

#[test]
fn test_sign_response_url_field() {
    let resp: SignResponse =
        serde_json::from_str(r#"{"url": "https://acct/x.tif?sig=1"}"#).unwrap();
    assert_eq!(resp.into_signed_url().unwrap().as_str(), "https://acct/x.tif?sig=1");
}

#[test]
fn test_sign_response_without_url_is_contract_violation() {
    let resp: SignResponse = serde_json::from_str(r#"{"msft:expiry": "soon"}"#).unwrap();
    let err = resp.into_signed_url().unwrap_err();
    assert!(matches!(err, StacError::MissingSignedUrl));

    let err: ClimateError = err.into();
    assert_eq!(err.kind(), ErrorKind::ContractViolation);
}
