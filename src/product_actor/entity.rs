//! [`ActorEntity`] implementation for [`Product`], including the stock
//! actions used by the order workflow.

use super::actions::{ProductAction, ProductActionResult, ProductStoreAction};
use super::error::ProductError;
use crate::framework::ActorEntity;
use crate::model::{Product, ProductCreate, ProductId, ProductUpdate};
use async_trait::async_trait;
use std::collections::HashMap;

#[async_trait]
impl ActorEntity for Product {
    type Id = ProductId;
    type Create = ProductCreate;
    type Update = ProductUpdate;
    type Action = ProductAction;
    type ActionResult = ProductActionResult;
    type StoreAction = ProductStoreAction;
    type StoreActionResult = ();
    type Context = ();
    type Error = ProductError;

    fn from_create_params(id: ProductId, params: ProductCreate) -> Result<Self, ProductError> {
        Ok(Self::new(id, params.name, params.price, params.quantity))
    }

    async fn on_update(&mut self, update: ProductUpdate, _ctx: &()) -> Result<(), ProductError> {
        if let Some(price) = update.price {
            self.price = price;
        }
        if let Some(quantity) = update.quantity {
            self.quantity = quantity;
        }
        Ok(())
    }

    async fn handle_action(
        &mut self,
        action: ProductAction,
        _ctx: &(),
    ) -> Result<ProductActionResult, ProductError> {
        match action {
            ProductAction::CheckStock => Ok(ProductActionResult::CheckStock(self.quantity)),
        }
    }

    /// Applies a batch of absolute stock levels.
    ///
    /// Runs in one actor turn: no other request can observe some products
    /// updated and others not. Unknown ids are skipped, matching the bulk
    /// update contract (callers only send ids they just resolved).
    async fn handle_store_action(
        store: &mut HashMap<ProductId, Self>,
        action: ProductStoreAction,
        _ctx: &(),
    ) -> Result<(), ProductError> {
        match action {
            ProductStoreAction::UpdateQuantities(levels) => {
                for level in levels {
                    if let Some(product) = store.get_mut(&level.id) {
                        product.quantity = level.quantity;
                    }
                }
                Ok(())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::StockLevel;
    use rust_decimal::Decimal;

    fn product(id: u32, quantity: u32) -> Product {
        Product::new(ProductId(id), "Widget", Decimal::new(500, 2), quantity)
    }

    #[tokio::test]
    async fn check_stock_reports_quantity() {
        let mut p = product(1, 10);
        let result = p.handle_action(ProductAction::CheckStock, &()).await.unwrap();
        let ProductActionResult::CheckStock(level) = result;
        assert_eq!(level, 10);
    }

    #[tokio::test]
    async fn update_quantities_sets_absolute_levels() {
        let mut store = HashMap::new();
        store.insert(ProductId(1), product(1, 10));
        store.insert(ProductId(2), product(2, 4));

        let levels = vec![
            StockLevel {
                id: ProductId(1),
                quantity: 7,
            },
            StockLevel {
                id: ProductId(99),
                quantity: 1,
            },
        ];
        Product::handle_store_action(&mut store, ProductStoreAction::UpdateQuantities(levels), &())
            .await
            .unwrap();

        assert_eq!(store[&ProductId(1)].quantity, 7);
        assert_eq!(store[&ProductId(2)].quantity, 4);
        assert!(!store.contains_key(&ProductId(99)));
    }
}
