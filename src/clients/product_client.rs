//! High-level API for the Product actor: catalog CRUD plus the two bulk
//! operations the order workflow consumes.

use crate::clients::actor_client::ActorClient;
use crate::framework::{FrameworkError, ResourceClient};
use crate::model::{Product, ProductCreate, ProductId, ProductUpdate, StockLevel};
use crate::product_actor::{ProductAction, ProductActionResult, ProductError, ProductStoreAction};
use async_trait::async_trait;
use tracing::{debug, instrument};

/// Client for interacting with the Product actor.
#[derive(Clone)]
pub struct ProductClient {
    inner: ResourceClient<Product>,
}

impl ProductClient {
    pub fn new(inner: ResourceClient<Product>) -> Self {
        Self { inner }
    }

    /// Adds a product to the catalog and returns its assigned id.
    #[instrument(skip(self))]
    pub async fn create_product(&self, params: ProductCreate) -> Result<ProductId, ProductError> {
        debug!("Sending request");
        self.inner.create(params).await.map_err(Self::map_error)
    }

    /// Updates a product's price and/or stock quantity.
    #[instrument(skip(self))]
    pub async fn update_product(
        &self,
        id: ProductId,
        update: ProductUpdate,
    ) -> Result<Product, ProductError> {
        debug!("Sending request");
        self.inner.update(id, update).await.map_err(Self::map_error)
    }

    /// Checks the current stock level for a product.
    #[instrument(skip(self))]
    pub async fn check_stock(&self, id: ProductId) -> Result<u32, ProductError> {
        debug!(%id, "Checking stock");
        let result = self
            .inner
            .perform_action(id, ProductAction::CheckStock)
            .await
            .map_err(Self::map_error)?;
        let ProductActionResult::CheckStock(level) = result;
        Ok(level)
    }

    /// Bulk lookup: returns only the products that exist, in request order.
    /// Missing ids are not an error.
    #[instrument(skip(self, ids))]
    pub async fn find_all_by_id(&self, ids: Vec<ProductId>) -> Result<Vec<Product>, ProductError> {
        debug!(requested = ids.len(), "Bulk lookup");
        self.inner.get_many(ids).await.map_err(Self::map_error)
    }

    /// Sets the listed products' stock to the given absolute quantities in
    /// one actor turn.
    #[instrument(skip(self, levels))]
    pub async fn update_quantities(&self, levels: Vec<StockLevel>) -> Result<(), ProductError> {
        debug!(count = levels.len(), "Bulk stock update");
        self.inner
            .perform_store_action(ProductStoreAction::UpdateQuantities(levels))
            .await
            .map_err(Self::map_error)
    }
}

#[async_trait]
impl ActorClient<Product> for ProductClient {
    type Error = ProductError;

    fn inner(&self) -> &ResourceClient<Product> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> ProductError {
        e.downcast_entity::<ProductError>()
            .unwrap_or_else(|other| ProductError::ActorCommunicationError(other.to_string()))
    }
}
