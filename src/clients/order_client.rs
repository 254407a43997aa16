use crate::clients::actor_client::ActorClient;
use crate::framework::{FrameworkError, ResourceClient};
use crate::model::{Order, OrderCreate};
use crate::order_actor::OrderError;
use async_trait::async_trait;
use tracing::{debug, info, instrument};

/// Client for interacting with the Order actor.
///
/// The validation and persistence workflow runs in the Order actor's
/// `on_create` hook; this client only submits the request and surfaces
/// the typed result.
#[derive(Clone)]
pub struct OrderClient {
    inner: ResourceClient<Order>,
}

impl OrderClient {
    pub fn new(inner: ResourceClient<Order>) -> Self {
        Self { inner }
    }

    /// Places an order and returns the persisted order with its resolved
    /// line items and snapshotted prices.
    ///
    /// Failures come back as the workflow's tagged [`OrderError`] variants,
    /// recovered from the framework envelope by [`Self::map_error`].
    #[instrument(skip(self, params))]
    pub async fn create_order(&self, params: OrderCreate) -> Result<Order, OrderError> {
        debug!(?params, "create_order called");
        info!("Sending create_order to actor");
        let id = self.inner.create(params).await.map_err(Self::map_error)?;
        self.get(id).await?.ok_or(OrderError::NotFound(id))
    }
}

#[async_trait]
impl ActorClient<Order> for OrderClient {
    type Error = OrderError;

    fn inner(&self) -> &ResourceClient<Order> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> OrderError {
        e.downcast_entity::<OrderError>()
            .unwrap_or_else(|other| OrderError::ActorCommunicationError(other.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::framework::mock::{create_mock_client, expect_create, expect_get};
    use crate::model::{CustomerId, OrderId, OrderLine, OrderLineRequest, ProductId};
    use chrono::Utc;
    use rust_decimal::Decimal;

    #[tokio::test]
    async fn create_order_returns_the_persisted_order() {
        let (client, mut receiver) = create_mock_client::<Order>(10);
        let order_client = OrderClient::new(client);

        let create_task = tokio::spawn(async move {
            let params = OrderCreate {
                customer_id: CustomerId(1),
                lines: vec![OrderLineRequest {
                    product_id: ProductId(1),
                    quantity: 2,
                }],
            };
            order_client.create_order(params).await
        });

        let (_, responder) = expect_create(&mut receiver)
            .await
            .expect("Expected Create request");
        responder.send(Ok(OrderId(1))).unwrap();

        let stored = Order {
            id: OrderId(1),
            customer_id: CustomerId(1),
            created_at: Utc::now(),
            lines: vec![OrderLine {
                product_id: ProductId(1),
                quantity: 2,
                unit_price: Decimal::new(500, 2),
            }],
        };
        let (id, responder) = expect_get(&mut receiver)
            .await
            .expect("Expected Get request");
        assert_eq!(id, OrderId(1));
        responder.send(Ok(Some(stored.clone()))).unwrap();

        let order = create_task.await.unwrap().unwrap();
        assert_eq!(order, stored);
    }

    #[tokio::test]
    async fn create_order_recovers_typed_workflow_error() {
        let (client, mut receiver) = create_mock_client::<Order>(10);
        let order_client = OrderClient::new(client);

        let create_task = tokio::spawn(async move {
            let params = OrderCreate {
                customer_id: CustomerId(1),
                lines: vec![OrderLineRequest {
                    product_id: ProductId(1),
                    quantity: 11,
                }],
            };
            order_client.create_order(params).await
        });

        let (_, responder) = expect_create(&mut receiver)
            .await
            .expect("Expected Create request");
        responder
            .send(Err(FrameworkError::Entity(Box::new(
                OrderError::InsufficientStock {
                    product_id: ProductId(1),
                    requested: 11,
                },
            ))))
            .unwrap();

        // The typed variant survives the framework envelope.
        let err = create_task.await.unwrap().unwrap_err();
        assert_eq!(
            err,
            OrderError::InsufficientStock {
                product_id: ProductId(1),
                requested: 11,
            }
        );
        assert_eq!(err.code(), "insufficient_stock");
    }

    #[tokio::test]
    async fn closed_actor_surfaces_as_communication_error() {
        let (client, receiver) = create_mock_client::<Order>(10);
        drop(receiver);
        let order_client = OrderClient::new(client);

        let err = order_client
            .create_order(OrderCreate {
                customer_id: CustomerId(1),
                lines: vec![],
            })
            .await
            .unwrap_err();
        assert!(matches!(err, OrderError::ActorCommunicationError(_)));
    }
}
