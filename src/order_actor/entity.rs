//! [`ActorEntity`] implementation for [`Order`]: the order-creation
//! workflow.
//!
//! The whole workflow runs in [`Order::on_create`] with the customer and
//! product clients injected as the actor's context. Validation goes
//! category by category, stopping at the first failure and reporting the
//! first offending line in request order. The bulk stock decrement is
//! issued only after every check has passed; the insert that follows a
//! successful hook happens in the same actor turn and cannot fail, so an
//! order is never persisted without its stock decrement.

use super::error::OrderError;
use crate::clients::actor_client::ActorClient;
use crate::clients::{CustomerClient, ProductClient};
use crate::framework::ActorEntity;
use crate::model::{Order, OrderCreate, OrderId, OrderLine, Product, ProductId, StockLevel};
use async_trait::async_trait;
use chrono::Utc;
use rust_decimal::Decimal;
use std::collections::HashMap;
use tracing::debug;

/// Dependencies of the order workflow.
pub type OrderContext = (CustomerClient, ProductClient);

#[async_trait]
impl ActorEntity for Order {
    type Id = OrderId;
    type Create = OrderCreate;
    type Update = ();
    type Action = ();
    type ActionResult = ();
    type StoreAction = ();
    type StoreActionResult = ();
    type Context = OrderContext;
    type Error = OrderError;

    /// Builds the order header and one line per requested entry. Rejects
    /// zero-quantity lines; unit prices are placeholders until `on_create`
    /// snapshots them from the resolved products.
    fn from_create_params(id: OrderId, params: OrderCreate) -> Result<Self, OrderError> {
        if let Some(req) = params.lines.iter().find(|l| l.quantity == 0) {
            return Err(OrderError::InvalidQuantity(req.product_id));
        }
        let lines = params
            .lines
            .iter()
            .map(|req| OrderLine {
                product_id: req.product_id,
                quantity: req.quantity,
                unit_price: Decimal::ZERO,
            })
            .collect();
        Ok(Self {
            id,
            customer_id: params.customer_id,
            created_at: Utc::now(),
            lines,
        })
    }

    async fn on_create(&mut self, ctx: &OrderContext) -> Result<(), OrderError> {
        let (customers, products) = ctx;

        // 1. The customer must exist.
        customers
            .get(self.customer_id)
            .await?
            .ok_or(OrderError::CustomerNotFound(self.customer_id))?;

        // 2. Bulk-resolve the requested products. An empty request resolves
        // to an empty set and fails here, so a persisted order always has at
        // least one line.
        let requested_ids: Vec<ProductId> = self.lines.iter().map(|l| l.product_id).collect();
        let resolved = products.find_all_by_id(requested_ids).await?;
        if resolved.is_empty() {
            return Err(OrderError::NoProductsFound);
        }
        let by_id: HashMap<ProductId, Product> =
            resolved.into_iter().map(|p| (p.id, p)).collect();

        // 3. First requested id that did not resolve, in request order.
        if let Some(line) = self
            .lines
            .iter()
            .find(|l| !by_id.contains_key(&l.product_id))
        {
            return Err(OrderError::ProductNotFound(line.product_id));
        }

        // 4. Stock check. Quantities are aggregated per product as lines are
        // walked, so duplicate entries for the same product cannot jointly
        // oversell; the line that pushes a product over its stock is the one
        // reported.
        let mut requested_totals: HashMap<ProductId, u32> = HashMap::new();
        for line in &self.lines {
            let product = by_id
                .get(&line.product_id)
                .ok_or(OrderError::ProductNotFound(line.product_id))?;
            let total = requested_totals.entry(line.product_id).or_insert(0);
            // A total past u32::MAX exceeds any representable stock.
            *total = total
                .checked_add(line.quantity)
                .ok_or(OrderError::InsufficientStock {
                    product_id: line.product_id,
                    requested: line.quantity,
                })?;
            if *total > product.quantity {
                return Err(OrderError::InsufficientStock {
                    product_id: line.product_id,
                    requested: line.quantity,
                });
            }
        }

        // 5. Snapshot unit prices from the resolved products.
        for line in &mut self.lines {
            if let Some(product) = by_id.get(&line.product_id) {
                line.unit_price = product.price;
            }
        }

        // 6. New absolute stock levels, one per touched product in
        // first-occurrence order, applied in one bulk update.
        let mut levels: Vec<StockLevel> = Vec::new();
        for line in &self.lines {
            if levels.iter().any(|level| level.id == line.product_id) {
                continue;
            }
            let product = by_id
                .get(&line.product_id)
                .ok_or(OrderError::ProductNotFound(line.product_id))?;
            let ordered = requested_totals.get(&line.product_id).copied().unwrap_or(0);
            levels.push(StockLevel {
                id: line.product_id,
                quantity: product.quantity - ordered,
            });
        }
        debug!(order_id = %self.id, levels = levels.len(), "Applying stock decrement");
        products.update_quantities(levels).await?;

        Ok(())
    }

    async fn on_update(&mut self, _update: (), _ctx: &OrderContext) -> Result<(), OrderError> {
        Ok(())
    }

    async fn handle_action(&mut self, _action: (), _ctx: &OrderContext) -> Result<(), OrderError> {
        Ok(())
    }

    async fn handle_store_action(
        _store: &mut HashMap<OrderId, Self>,
        _action: (),
        _ctx: &OrderContext,
    ) -> Result<(), OrderError> {
        Ok(())
    }
}
