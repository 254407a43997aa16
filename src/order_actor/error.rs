//! Error types for the Order actor.
//!
//! Every validation failure of the order workflow is its own tagged variant
//! rather than a formatted message, so callers and boundaries can branch on
//! the kind. [`OrderError::code`] gives each kind a stable machine-readable
//! code for mapping to distinct response codes.

use crate::customer_actor::CustomerError;
use crate::model::{CustomerId, OrderId, ProductId};
use crate::product_actor::ProductError;
use thiserror::Error;

/// Errors that can occur during order operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum OrderError {
    /// The ordering customer does not exist.
    #[error("Customer not found: {0}")]
    CustomerNotFound(CustomerId),

    /// None of the requested product ids resolved to a product.
    #[error("No matching products found")]
    NoProductsFound,

    /// A requested product id did not resolve; reports the first offender
    /// in request order.
    #[error("Product not found: {0}")]
    ProductNotFound(ProductId),

    /// A line requested a zero quantity; reports the first offender in
    /// request order.
    #[error("Invalid quantity for {0}: must be positive")]
    InvalidQuantity(ProductId),

    /// A requested quantity exceeds the product's available stock; reports
    /// the first offending line and its requested quantity.
    #[error("Insufficient stock for {product_id}: requested {requested}")]
    InsufficientStock {
        product_id: ProductId,
        requested: u32,
    },

    /// The requested order was not found.
    #[error("Order not found: {0}")]
    NotFound(OrderId),

    /// A customer lookup failed for infrastructure reasons.
    #[error(transparent)]
    Customer(#[from] CustomerError),

    /// A product operation failed for infrastructure reasons.
    #[error(transparent)]
    Product(#[from] ProductError),

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl OrderError {
    /// Stable machine-readable code for this error kind. A transport
    /// boundary maps these to distinct response codes instead of collapsing
    /// every failure into one generic message.
    pub fn code(&self) -> &'static str {
        match self {
            OrderError::CustomerNotFound(_) => "customer_not_found",
            OrderError::NoProductsFound => "no_products_found",
            OrderError::ProductNotFound(_) => "product_not_found",
            OrderError::InvalidQuantity(_) => "invalid_quantity",
            OrderError::InsufficientStock { .. } => "insufficient_stock",
            OrderError::NotFound(_) => "order_not_found",
            OrderError::Customer(_) => "customer_error",
            OrderError::Product(_) => "product_error",
            OrderError::ActorCommunicationError(_) => "actor_communication_error",
        }
    }
}

impl From<String> for OrderError {
    fn from(msg: String) -> Self {
        OrderError::ActorCommunicationError(msg)
    }
}
