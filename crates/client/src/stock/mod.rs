//! Remote stock operations.
//!
//! Each method is a declarative binding: endpoint, parameter set, declared
//! result type. All stock semantics live server-side; the client only
//! carries the call. Parameter names and endpoint strings are wire-exact.

pub mod models;

use chrono::{DateTime, Utc};

use stocklink_core::{PagedResult, StockItemId, StockLocationId, VariationGroupId};

use crate::api::ApiClient;
use crate::config::ApiConfig;
use crate::error::ApiError;
use crate::params::Params;
use crate::transport::{HttpTransport, Transport};

use models::{
    BatchedBookIn, BookInStockItem, DataRequirement, EnumDescriptor, PartialUpdateParameter,
    SearchStockByKey, StockConsumption, StockItem, StockItemBatch, StockItemChangeHistory,
    StockItemDuePo, StockItemFull, StockItemLevel, StockItemReturn, StockItemScrap,
    StockItemSold, StockItemSoldStat, StockLevelUpdate, StockSearchType, TempFile,
    VariationGroup, VariationGroupTemplate, VariationItem, VariationParentStatus,
    VariationSearchType,
};

/// Typed client for the `Stock/*` endpoint group.
pub struct StockClient<T: Transport = HttpTransport> {
    api: ApiClient<T>,
}

impl StockClient<HttpTransport> {
    /// Connect with the reqwest-backed transport.
    pub fn connect(config: &ApiConfig) -> Result<Self, ApiError> {
        Ok(Self::with_transport(HttpTransport::new(config)?))
    }
}

impl<T: Transport> StockClient<T> {
    /// Build over any transport; tests use this with in-process stubs.
    pub fn with_transport(transport: T) -> Self {
        Self {
            api: ApiClient::new(transport),
        }
    }

    /// Add items to a variation group; returns the new group rows.
    pub async fn add_variation_items(
        &self,
        variation_group_id: VariationGroupId,
        stock_item_ids: &[StockItemId],
    ) -> Result<Vec<VariationItem>, ApiError> {
        let params = Params::new()
            .id("pkVariationItemId", variation_group_id)
            .json("pkStockItemIds", stock_item_ids)?;
        self.api.call("Stock/AddVariationItems", params).await
    }

    /// Increase the stock level and value of a batched item.
    pub async fn book_in_stock_batch(
        &self,
        stock_item: &BatchedBookIn,
    ) -> Result<StockItemBatch, ApiError> {
        let params = Params::new().json("stockItem", stock_item)?;
        self.api.call("Stock/BookInStockBatch", params).await
    }

    /// Increase the stock level and value of a plain item.
    pub async fn book_in_stock_item(&self, stock_item: &BookInStockItem) -> Result<(), ApiError> {
        let params = Params::new().json("stockItem", stock_item)?;
        self.api.call_unit("Stock/BookInStockItem", params).await
    }

    /// Check whether a candidate parent SKU exists and its current status.
    pub async fn check_variation_parent_sku_exists(
        &self,
        parent_sku: &str,
    ) -> Result<VariationParentStatus, ApiError> {
        let params = Params::new().text("parentSKU", parent_sku);
        self.api
            .call("Stock/CheckVariationParentSKUExists", params)
            .await
    }

    /// Create stock item batches; returns them with server-assigned ids.
    pub async fn create_stock_batches(
        &self,
        batches: &[StockItemBatch],
    ) -> Result<Vec<StockItemBatch>, ApiError> {
        let params = Params::new().json("batches", batches)?;
        self.api.call("Stock/CreateStockBatches", params).await
    }

    /// Create a variation group from a parent template.
    pub async fn create_variation_group(
        &self,
        template: &VariationGroupTemplate,
    ) -> Result<VariationGroup, ApiError> {
        let params = Params::new().json("template", template)?;
        self.api.call("Stock/CreateVariationGroup", params).await
    }

    /// Delete a variation group.
    pub async fn delete_variation_group(
        &self,
        variation_group_id: VariationGroupId,
    ) -> Result<(), ApiError> {
        let params = Params::new().id("pkVariationGroupId", variation_group_id);
        self.api.call_unit("Stock/DeleteVariationGroup", params).await
    }

    /// Remove one item from a variation group.
    pub async fn delete_variation_item(
        &self,
        variation_group_id: VariationGroupId,
        stock_item_id: StockItemId,
    ) -> Result<(), ApiError> {
        let params = Params::new()
            .id("pkVariationItemId", variation_group_id)
            .id("pkStockItemId", stock_item_id);
        self.api.call_unit("Stock/DeleteVariationItem", params).await
    }

    /// Paged report of stock changes of an item at one location.
    pub async fn get_item_changes_history(
        &self,
        stock_item_id: StockItemId,
        location_id: StockLocationId,
        entries_per_page: i32,
        page_number: i32,
    ) -> Result<PagedResult<StockItemChangeHistory>, ApiError> {
        let params = Params::new()
            .id("stockItemId", stock_item_id)
            .id("locationId", location_id)
            .int("entriesPerPage", entries_per_page)
            .int("pageNumber", page_number);
        self.api.call("Stock/GetItemChangesHistory", params).await
    }

    /// CSV export of an item's stock change history.
    pub async fn get_item_changes_history_csv(
        &self,
        stock_item_id: StockItemId,
        location_id: StockLocationId,
    ) -> Result<TempFile, ApiError> {
        let params = Params::new()
            .id("stockItemId", stock_item_id)
            .id("locationId", location_id);
        self.api.call("Stock/GetItemChangesHistoryCSV", params).await
    }

    /// Sold-units statistics per channel.
    pub async fn get_sold_stat(
        &self,
        stock_item_id: StockItemId,
    ) -> Result<Vec<StockItemSoldStat>, ApiError> {
        let params = Params::new().id("stockItemId", stock_item_id);
        self.api.call("Stock/GetSoldStat", params).await
    }

    /// Stock consumption between two dates. A `None` location combines all
    /// locations.
    pub async fn get_stock_consumption(
        &self,
        stock_item_id: StockItemId,
        location_id: Option<StockLocationId>,
        start_date: DateTime<Utc>,
        end_date: DateTime<Utc>,
    ) -> Result<Vec<StockConsumption>, ApiError> {
        let params = Params::new()
            .id("stockItemId", stock_item_id)
            .json("locationId", &location_id)?
            .date_time("startDate", start_date)?
            .date_time("endDate", end_date)?;
        self.api.call("Stock/GetStockConsumption", params).await
    }

    /// Quantities due in from open purchase orders.
    pub async fn get_stock_due_po(
        &self,
        stock_item_id: StockItemId,
    ) -> Result<Vec<StockItemDuePo>, ApiError> {
        let params = Params::new().id("stockItemId", stock_item_id);
        self.api.call("Stock/GetStockDuePO", params).await
    }

    /// Return statistics of an item.
    pub async fn get_stock_item_return_stat(
        &self,
        stock_item_id: StockItemId,
    ) -> Result<Vec<StockItemReturn>, ApiError> {
        let params = Params::new().id("stockItemId", stock_item_id);
        self.api.call("Stock/GetStockItemReturnStat", params).await
    }

    /// Paged keyword search over stock items.
    #[allow(clippy::too_many_arguments)]
    pub async fn get_stock_items(
        &self,
        key_word: &str,
        location_id: Option<StockLocationId>,
        entries_per_page: i32,
        page_number: i32,
        exclude_composites: bool,
        exclude_variations: bool,
        exclude_batches: bool,
    ) -> Result<PagedResult<StockItem>, ApiError> {
        let params = Params::new()
            .text("keyWord", key_word)
            .json("locationId", &location_id)?
            .int("entriesPerPage", entries_per_page)
            .int("pageNumber", page_number)
            .boolean("excludeComposites", exclude_composites)
            .boolean("excludeVariations", exclude_variations)
            .boolean("excludeBatches", exclude_batches);
        self.api.call("Stock/GetStockItems", params).await
    }

    /// Stock items matching a key (item number, barcode, supplier fields).
    pub async fn get_stock_items_by_key(
        &self,
        stock_identifier: &SearchStockByKey,
    ) -> Result<Vec<StockItem>, ApiError> {
        let params = Params::new().json("stockIdentifier", stock_identifier)?;
        self.api.call("Stock/GetStockItemsByKey", params).await
    }

    /// Scrap statistics of an item.
    pub async fn get_stock_item_scrap_stat(
        &self,
        stock_item_id: StockItemId,
    ) -> Result<Vec<StockItemScrap>, ApiError> {
        let params = Params::new().id("stockItemId", stock_item_id);
        self.api.call("Stock/GetStockItemScrapStat", params).await
    }

    /// Keyword search returning the extended item view. The requested data
    /// sections and search axes are sent as JSON lists.
    #[allow(clippy::too_many_arguments)]
    pub async fn get_stock_items_full(
        &self,
        keyword: &str,
        load_composite_parents: bool,
        load_variation_parents: bool,
        entries_per_page: i32,
        page_number: i32,
        data_requirements: &[DataRequirement],
        search_types: &[StockSearchType],
    ) -> Result<Vec<StockItemFull>, ApiError> {
        let params = Params::new()
            .text("keyword", keyword)
            .boolean("loadCompositeParents", load_composite_parents)
            .boolean("loadVariationParents", load_variation_parents)
            .int("entriesPerPage", entries_per_page)
            .int("pageNumber", page_number)
            .json("dataRequirements", data_requirements)?
            .json("searchTypes", search_types)?;
        self.api.call("Stock/GetStockItemsFull", params).await
    }

    /// Stock level of an item across locations.
    pub async fn get_stock_level(
        &self,
        stock_item_id: StockItemId,
    ) -> Result<Vec<StockItemLevel>, ApiError> {
        let params = Params::new().id("stockItemId", stock_item_id);
        self.api.call("Stock/GetStockLevel", params).await
    }

    /// Sold-stock report of an item.
    pub async fn get_stock_sold(
        &self,
        stock_item_id: StockItemId,
    ) -> Result<Vec<StockItemSold>, ApiError> {
        let params = Params::new().id("stockItemId", stock_item_id);
        self.api.call("Stock/GetStockSold", params).await
    }

    /// Find a variation group by its exact name.
    pub async fn get_variation_group_by_name(
        &self,
        variation_name: &str,
    ) -> Result<VariationGroup, ApiError> {
        let params = Params::new().text("variationName", variation_name);
        self.api.call("Stock/GetVariationGroupByName", params).await
    }

    /// Find a variation group by its parent item id.
    pub async fn get_variation_group_by_parent_id(
        &self,
        parent_stock_item_id: StockItemId,
    ) -> Result<VariationGroup, ApiError> {
        let params = Params::new().id("pkStockItemId", parent_stock_item_id);
        self.api
            .call("Stock/GetVariationGroupByParentId", params)
            .await
    }

    /// Search axes the server supports for variation groups.
    pub async fn get_variation_group_search_types(
        &self,
    ) -> Result<Vec<EnumDescriptor>, ApiError> {
        self.api
            .call("Stock/GetVariationGroupSearchTypes", Params::new())
            .await
    }

    /// Items in a variation group.
    pub async fn get_variation_items(
        &self,
        variation_group_id: VariationGroupId,
    ) -> Result<Vec<VariationItem>, ApiError> {
        let params = Params::new().id("pkVariationItemId", variation_group_id);
        self.api.call("Stock/GetVariationItems", params).await
    }

    /// Rename a variation group.
    pub async fn rename_variation_group(
        &self,
        variation_group_id: VariationGroupId,
        variation_name: &str,
    ) -> Result<(), ApiError> {
        let params = Params::new()
            .id("pkVariationItemId", variation_group_id)
            .text("variationName", variation_name);
        self.api.call_unit("Stock/RenameVariationGroup", params).await
    }

    /// Paged search for variation groups.
    pub async fn search_variation_groups(
        &self,
        search_type: VariationSearchType,
        search_text: &str,
        page_number: i32,
        entries_per_page: i32,
    ) -> Result<PagedResult<VariationGroup>, ApiError> {
        let params = Params::new()
            .enumeration("searchType", search_type.as_str())
            .text("searchText", search_text)
            .int("pageNumber", page_number)
            .int("entriesPerPage", entries_per_page);
        self.api.call("Stock/SearchVariationGroups", params).await
    }

    /// Set the stock level of the given SKUs to absolute values; returns the
    /// resulting levels.
    pub async fn set_stock_level(
        &self,
        stock_levels: &[StockLevelUpdate],
        change_source: Option<&str>,
    ) -> Result<Vec<StockItemLevel>, ApiError> {
        let params = Params::new()
            .json("stockLevels", stock_levels)?
            .opt_text("changeSource", change_source);
        self.api.call("Stock/SetStockLevel", params).await
    }

    /// Check whether a SKU exists.
    pub async fn sku_exists(&self, sku: &str) -> Result<bool, ApiError> {
        let params = Params::new().text("SKU", sku);
        self.api.call("Stock/SKUExists", params).await
    }

    /// Update selected fields of a stock item.
    pub async fn update_stock_item_partial(
        &self,
        update: &PartialUpdateParameter,
    ) -> Result<(), ApiError> {
        let params = Params::new().json("update", update)?;
        self.api
            .call_unit("Stock/Update_StockItemPartial", params)
            .await
    }

    /// Adjust the stock level of the given SKUs by signed deltas; returns the
    /// resulting levels.
    pub async fn update_stock_levels_by_sku(
        &self,
        stock_levels: &[StockLevelUpdate],
        change_source: Option<&str>,
    ) -> Result<Vec<StockItemLevel>, ApiError> {
        let params = Params::new()
            .json("stockLevels", stock_levels)?
            .opt_text("changeSource", change_source);
        self.api.call("Stock/UpdateStockLevelsBySKU", params).await
    }

    /// Update the minimum level of an item at one location.
    pub async fn update_stock_minimum_level(
        &self,
        stock_item_id: StockItemId,
        location_id: StockLocationId,
        minimum_level: i32,
    ) -> Result<(), ApiError> {
        let params = Params::new()
            .id("stockItemId", stock_item_id)
            .id("locationId", location_id)
            .int("minimumLevel", minimum_level);
        self.api
            .call_unit("Stock/UpdateStockMinimumLevel", params)
            .await
    }
}
