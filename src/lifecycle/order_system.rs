use crate::clients::{CustomerClient, OrderClient, ProductClient};
use crate::framework::ResourceActor;
use crate::model::{Customer, Order, Product};
use tracing::{error, info};

/// Request channel capacity for each actor.
const ACTOR_BUFFER: usize = 32;

/// The runtime orchestrator for the storefront.
///
/// `OrderSystem` spawns one actor per resource, wires the order actor to
/// the customer and product clients it depends on, and owns the task
/// handles for graceful shutdown. Dependencies are wired explicitly here;
/// no actor resolves its collaborators from ambient state.
pub struct OrderSystem {
    /// Client for the Order actor.
    pub order_client: OrderClient,

    /// Client for the Customer actor.
    pub customer_client: CustomerClient,

    /// Client for the Product actor.
    pub product_client: ProductClient,

    /// Task handles for all running actors, joined on shutdown.
    handles: Vec<tokio::task::JoinHandle<()>>,
}

impl OrderSystem {
    /// Creates the system with all actors running.
    pub fn new() -> Self {
        // Create all actors first, then wire dependencies when starting
        // them. Customer and Product have no dependencies; the Order actor
        // receives both clients as its context.
        let (customer_actor, customer_resource_client) =
            ResourceActor::<Customer>::new(ACTOR_BUFFER);
        let customer_client = CustomerClient::new(customer_resource_client);

        let (product_actor, product_resource_client) = ResourceActor::<Product>::new(ACTOR_BUFFER);
        let product_client = ProductClient::new(product_resource_client);

        let (order_actor, order_resource_client) = ResourceActor::<Order>::new(ACTOR_BUFFER);
        let order_client = OrderClient::new(order_resource_client);

        let customer_handle = tokio::spawn(customer_actor.run(()));
        let product_handle = tokio::spawn(product_actor.run(()));
        let order_handle = tokio::spawn(order_actor.run((
            customer_client.clone(),
            product_client.clone(),
        )));

        Self {
            order_client,
            customer_client,
            product_client,
            handles: vec![customer_handle, product_handle, order_handle],
        }
    }

    /// Gracefully shuts down the system.
    ///
    /// Dropping the clients closes their channels; each actor drains its
    /// queue and exits its loop. The order actor's context holds clones of
    /// the customer and product clients, but the dependency graph is
    /// acyclic, so every channel still closes.
    pub async fn shutdown(self) -> Result<(), String> {
        info!("Shutting down system...");

        drop(self.order_client);
        drop(self.customer_client);
        drop(self.product_client);

        for handle in self.handles {
            if let Err(e) = handle.await {
                error!("Actor task failed: {:?}", e);
                return Err(format!("Actor task failed: {:?}", e));
            }
        }

        info!("System shutdown complete.");
        Ok(())
    }
}

impl Default for OrderSystem {
    fn default() -> Self {
        Self::new()
    }
}
