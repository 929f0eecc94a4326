//! Wire models for the stock operation surface.
//!
//! Member names follow the remote service's JSON casing (PascalCase, with
//! acronyms like `SKU` spelled out explicitly).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use stocklink_core::{
    BatchId, BatchInventoryId, PurchaseOrderId, StockItemId, StockLocationId, VariationGroupId,
    VariationItemId,
};

// -------------------------
// Locations and stock levels
// -------------------------

/// A stock-holding location.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct StockLocation {
    pub stock_location_id: StockLocationId,
    pub location_name: String,
    #[serde(default)]
    pub bin_rack: Option<String>,
}

/// Stock level of one item at one location.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct StockItemLevel {
    pub stock_item_id: StockItemId,
    #[serde(rename = "SKU")]
    pub sku: String,
    pub location: StockLocation,
    pub stock_level: i32,
    pub stock_value: f64,
    pub minimum_level: i32,
    pub in_order_book: i32,
    pub due: i32,
    pub available: i32,
    pub unit_cost: f64,
}

/// Requested level change for one SKU at one location.
///
/// `level` is an absolute target for set operations and a signed delta for
/// adjust operations; the endpoint decides.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct StockLevelUpdate {
    #[serde(rename = "SKU")]
    pub sku: String,
    pub location_id: StockLocationId,
    pub level: i32,
}

// -------------------------
// Stock items
// -------------------------

/// Basic inventory view of a stock item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct StockItem {
    pub stock_item_id: StockItemId,
    pub item_number: String,
    pub item_title: String,
    #[serde(default)]
    pub barcode_number: Option<String>,
    pub purchase_price: f64,
    pub retail_price: f64,
    pub quantity: i32,
    pub in_order: i32,
    pub due: i32,
    pub minimum_level: i32,
    pub available: i32,
}

/// Extended view of a stock item; optional sections are populated according
/// to the requested [`DataRequirement`]s.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct StockItemFull {
    pub stock_item_id: StockItemId,
    pub item_number: String,
    pub item_title: String,
    #[serde(default)]
    pub barcode_number: Option<String>,
    pub purchase_price: f64,
    pub retail_price: f64,
    #[serde(default)]
    pub stock_levels: Vec<StockItemLevel>,
    #[serde(default)]
    pub extended_properties: Vec<ExtendedProperty>,
    #[serde(default)]
    pub images: Vec<StockItemImage>,
}

/// Free-form property attached to a stock item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ExtendedProperty {
    pub property_name: String,
    pub property_value: String,
    pub property_type: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct StockItemImage {
    pub source: String,
    pub is_main: bool,
}

/// Key-based stock item lookup: matches item number, barcode and supplier
/// fields, optionally narrowed to one location.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct SearchStockByKey {
    pub key: String,
    #[serde(default)]
    pub location_id: Option<StockLocationId>,
}

/// Partial update: selected fields of one stock item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct PartialUpdateParameter {
    pub stock_item_id: StockItemId,
    pub fields: Vec<PartialUpdateField>,
}

/// One field-name/value pair of a partial update.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct PartialUpdateField {
    pub field_name: String,
    pub value: Value,
}

/// Optional data sections to load with a full item query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DataRequirement {
    StockLevels,
    Pricing,
    Supplier,
    ExtendedProperties,
    Images,
}

/// Search axes for the full item query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StockSearchType {
    #[serde(rename = "SKU")]
    Sku,
    Title,
    Barcode,
}

// -------------------------
// Reports
// -------------------------

/// One entry in an item's stock change audit trail.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct StockItemChangeHistory {
    pub date: DateTime<Utc>,
    pub stock_level: i32,
    pub stock_value: f64,
    #[serde(default)]
    pub note: Option<String>,
    pub change_qty: i32,
    pub change_value: f64,
    #[serde(default)]
    pub change_source: Option<String>,
}

/// Server-side temporary file handed out for CSV exports.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct TempFile {
    pub file_name: String,
    #[serde(rename = "URL")]
    pub url: String,
}

/// Units sold per channel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct StockItemSoldStat {
    pub source: String,
    #[serde(default)]
    pub sub_source: Option<String>,
    pub quantity: i32,
    pub value: f64,
}

/// Stock consumed on one day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct StockConsumption {
    pub date: DateTime<Utc>,
    #[serde(rename = "StockConsumption")]
    pub consumed: i32,
}

/// Quantity due in from an open purchase order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct StockItemDuePo {
    pub purchase_order_id: PurchaseOrderId,
    pub supplier_name: String,
    pub expected_date: DateTime<Utc>,
    pub quantity: i32,
    pub unit_cost: f64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct StockItemReturn {
    pub return_date: DateTime<Utc>,
    pub quantity: i32,
    #[serde(default)]
    pub reason: Option<String>,
    #[serde(default)]
    pub channel_name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct StockItemScrap {
    pub created_date: DateTime<Utc>,
    pub user_name: String,
    #[serde(default)]
    pub scrap_reason: Option<String>,
    pub quantity: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct StockItemSold {
    pub sold_date: DateTime<Utc>,
    pub order_reference: String,
    pub quantity: i32,
    pub unit_price: f64,
    #[serde(default)]
    pub channel_name: Option<String>,
}

// -------------------------
// Variation groups
// -------------------------

/// A variation parent and its group metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct VariationGroup {
    pub variation_group_id: VariationGroupId,
    pub variation_group_name: String,
    pub parent_stock_item_id: StockItemId,
    #[serde(rename = "ParentSKU")]
    pub parent_sku: String,
}

/// Payload for creating a variation group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct VariationGroupTemplate {
    #[serde(rename = "ParentSKU")]
    pub parent_sku: String,
    pub variation_group_name: String,
    #[serde(default)]
    pub parent_title: Option<String>,
    pub variation_item_ids: Vec<StockItemId>,
}

/// One member of a variation group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct VariationItem {
    pub variation_item_id: VariationItemId,
    pub stock_item_id: StockItemId,
    #[serde(rename = "SKU")]
    pub sku: String,
    pub title: String,
}

/// Existence/status of a candidate variation parent SKU.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum VariationParentStatus {
    Exists,
    NotExists,
    AlreadyVariation,
}

/// Search axis for variation groups.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum VariationSearchType {
    #[serde(rename = "ParentSKU")]
    ParentSku,
    VariationName,
}

impl VariationSearchType {
    /// Wire name, as sent in the `searchType` parameter.
    pub fn as_str(&self) -> &'static str {
        match self {
            VariationSearchType::ParentSku => "ParentSKU",
            VariationSearchType::VariationName => "VariationName",
        }
    }
}

/// Key/value descriptor for server-enumerated options.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct EnumDescriptor {
    pub id: i32,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
}

// -------------------------
// Batches
// -------------------------

/// A batch of a batched stock item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct StockItemBatch {
    pub batch_id: BatchId,
    #[serde(rename = "SKU")]
    pub sku: String,
    pub batch_number: String,
    #[serde(default)]
    pub sell_by: Option<DateTime<Utc>>,
    #[serde(default)]
    pub expires_on: Option<DateTime<Utc>>,
    pub priority: i32,
    #[serde(default)]
    pub inventory: Vec<BatchInventory>,
}

/// Location-level inventory of one batch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct BatchInventory {
    pub batch_inventory_id: BatchInventoryId,
    pub location_id: StockLocationId,
    #[serde(default)]
    pub bin_rack: Option<String>,
    pub quantity: i32,
    pub stock_value: f64,
}

/// Book-in request for a batched stock item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct BatchedBookIn {
    pub stock_item_id: StockItemId,
    pub location_id: StockLocationId,
    pub batch_number: String,
    #[serde(default)]
    pub sell_by: Option<DateTime<Utc>>,
    #[serde(default)]
    pub expires_on: Option<DateTime<Utc>>,
    pub quantity: i32,
    pub unit_cost: f64,
    #[serde(default)]
    pub bin_rack: Option<String>,
}

/// Book-in request for a plain stock item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct BookInStockItem {
    pub stock_item_id: StockItemId,
    pub location_id: StockLocationId,
    pub quantity: i32,
    pub unit_cost: f64,
}
