//! Order actor tests with mocked customer and product collaborators.
//!
//! The Order actor runs for real; its context is wired from [`MockClient`]s
//! so each test scripts exactly the collaborator responses the workflow is
//! allowed to consume.

use rust_decimal::Decimal;
use storefront::clients::actor_client::ActorClient;
use storefront::clients::{CustomerClient, OrderClient, ProductClient};
use storefront::framework::mock::MockClient;
use storefront::framework::ResourceActor;
use storefront::model::{
    Customer, CustomerId, Order, OrderCreate, OrderLineRequest, Product, ProductId,
};
use storefront::order_actor::OrderError;

struct Harness {
    order_client: OrderClient,
    customer_mock: MockClient<Customer>,
    product_mock: MockClient<Product>,
    handle: tokio::task::JoinHandle<()>,
}

impl Harness {
    fn new() -> Self {
        let customer_mock = MockClient::<Customer>::new();
        let product_mock = MockClient::<Product>::new();

        let (actor, resource_client) = ResourceActor::<Order>::new(32);
        let handle = tokio::spawn(actor.run((
            CustomerClient::new(customer_mock.client()),
            ProductClient::new(product_mock.client()),
        )));

        Self {
            order_client: OrderClient::new(resource_client),
            customer_mock,
            product_mock,
            handle,
        }
    }

    /// Verifies the mocks and shuts the actor down.
    async fn finish(self) {
        self.customer_mock.verify();
        self.product_mock.verify();
        drop(self.order_client);
        self.handle.await.expect("Order actor task failed");
    }
}

fn test_customer() -> Customer {
    Customer::new(CustomerId(1), "Alice", "alice@example.com")
}

fn test_product(id: u32, price: Decimal, quantity: u32) -> Product {
    Product::new(ProductId(id), "Widget", price, quantity)
}

#[tokio::test]
async fn workflow_validates_snapshots_and_decrements() {
    let mut harness = Harness::new();
    let price = Decimal::new(500, 2);

    harness.customer_mock.expect_get(Ok(Some(test_customer())));
    harness
        .product_mock
        .expect_get_many(Ok(vec![test_product(10, price, 8)]));
    harness.product_mock.expect_store_action(Ok(()));

    let order = harness
        .order_client
        .create_order(OrderCreate {
            customer_id: CustomerId(1),
            lines: vec![OrderLineRequest {
                product_id: ProductId(10),
                quantity: 3,
            }],
        })
        .await
        .expect("Workflow should succeed");
    assert_eq!(order.customer_id, CustomerId(1));
    assert_eq!(order.lines.len(), 1);
    assert_eq!(order.lines[0].unit_price, price, "Price is snapshotted");

    harness.finish().await;
}

#[tokio::test]
async fn unknown_customer_stops_the_workflow_before_product_lookups() {
    let mut harness = Harness::new();

    harness.customer_mock.expect_get(Ok(None));

    let err = harness
        .order_client
        .create_order(OrderCreate {
            customer_id: CustomerId(42),
            lines: vec![OrderLineRequest {
                product_id: ProductId(10),
                quantity: 1,
            }],
        })
        .await
        .unwrap_err();
    assert_eq!(err, OrderError::CustomerNotFound(CustomerId(42)));

    // No product expectations were queued; verify() proves none were needed.
    harness.finish().await;
}

#[tokio::test]
async fn insufficient_stock_fails_without_a_stock_update() {
    let mut harness = Harness::new();

    harness.customer_mock.expect_get(Ok(Some(test_customer())));
    harness
        .product_mock
        .expect_get_many(Ok(vec![test_product(10, Decimal::new(500, 2), 2)]));

    let err = harness
        .order_client
        .create_order(OrderCreate {
            customer_id: CustomerId(1),
            lines: vec![OrderLineRequest {
                product_id: ProductId(10),
                quantity: 5,
            }],
        })
        .await
        .unwrap_err();
    assert_eq!(
        err,
        OrderError::InsufficientStock {
            product_id: ProductId(10),
            requested: 5,
        }
    );

    // No store-action expectation was queued, so a decrement attempt would
    // have panicked the mock. verify() confirms the queue is drained.
    harness.finish().await;
}

#[tokio::test]
async fn failed_workflow_stores_no_order() {
    let mut harness = Harness::new();

    harness.customer_mock.expect_get(Ok(Some(test_customer())));
    harness.product_mock.expect_get_many(Ok(vec![]));

    let err = harness
        .order_client
        .create_order(OrderCreate {
            customer_id: CustomerId(1),
            lines: vec![OrderLineRequest {
                product_id: ProductId(10),
                quantity: 1,
            }],
        })
        .await
        .unwrap_err();
    assert_eq!(err, OrderError::NoProductsFound);

    // Ids are minted only for stored orders, so the first id is unused.
    let fetched = harness.order_client.get(storefront::model::OrderId(1)).await;
    assert_eq!(fetched, Ok(None));

    harness.finish().await;
}
