//! End-to-end demo: wire the system, register a customer, stock a product
//! and place an order, with tracing enabled throughout.

use rust_decimal::Decimal;
use storefront::lifecycle::{setup_tracing, OrderSystem};
use storefront::model::{CustomerCreate, OrderCreate, OrderLineRequest, ProductCreate};
use tracing::{error, info, Instrument};

#[tokio::main]
async fn main() -> Result<(), String> {
    setup_tracing();

    info!("Starting storefront demo");

    let system = OrderSystem::new();

    let customer_params = CustomerCreate {
        name: "Alice".to_string(),
        email: "alice@example.com".to_string(),
    };

    let span = tracing::info_span!("customer_registration");
    let customer_id = async {
        info!("Registering customer");
        system
            .customer_client
            .create_customer(customer_params)
            .await
            .map_err(|e| e.to_string())
    }
    .instrument(span)
    .await?;

    info!(customer_id = %customer_id, "Customer registered");

    let product_params = ProductCreate {
        name: "Super Widget".to_string(),
        price: Decimal::new(2550, 2), // 25.50
        quantity: 100,
    };
    let product_id = async {
        info!("Adding product to catalog");
        system
            .product_client
            .create_product(product_params)
            .await
            .map_err(|e| e.to_string())
    }
    .await?;

    info!(product_id = %product_id, "Product created");

    let order_params = OrderCreate {
        customer_id,
        lines: vec![OrderLineRequest {
            product_id,
            quantity: 5,
        }],
    };

    let span = tracing::info_span!("order_processing");
    let order_result = async {
        info!("Placing order");
        system.order_client.create_order(order_params).await
    }
    .instrument(span)
    .await;

    match order_result {
        Ok(order) => info!(order_id = %order.id, lines = order.lines.len(), "Order placed"),
        Err(e) => {
            error!(error = %e, code = e.code(), "Order failed")
        }
    }

    system.shutdown().await?;

    info!("Demo complete");
    Ok(())
}
