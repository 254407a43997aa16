//! Test doubles for resource clients.
//!
//! Two styles, both from the same building block (a client whose channel we
//! control):
//!
//! - [`MockClient`] with fluent expectation builders, for tests that script
//!   a sequence of responses up front and then [`MockClient::verify`] that
//!   everything was consumed.
//! - [`create_mock_client`] plus the `expect_*` helpers, for tests that want
//!   to inspect each request by hand and answer through the raw responder.

use crate::framework::{ActorEntity, FrameworkError, ResourceClient, ResourceRequest};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use tokio::sync::mpsc;

/// A scripted response for one expected request.
enum Expectation<T: ActorEntity> {
    Get {
        response: Result<Option<T>, FrameworkError>,
    },
    GetMany {
        response: Result<Vec<T>, FrameworkError>,
    },
    Create {
        response: Result<T::Id, FrameworkError>,
    },
    Action {
        response: Result<T::ActionResult, FrameworkError>,
    },
    StoreAction {
        response: Result<T::StoreActionResult, FrameworkError>,
    },
}

/// A mock client with expectation tracking.
///
/// Responses are consumed in FIFO order; a request that arrives with no
/// matching expectation queued panics the mock task, which surfaces in the
/// test as an `ActorDropped` error.
pub struct MockClient<T: ActorEntity> {
    client: ResourceClient<T>,
    expectations: Arc<Mutex<VecDeque<Expectation<T>>>>,
    _handle: tokio::task::JoinHandle<()>,
}

impl<T: ActorEntity> MockClient<T> {
    /// Creates a new mock client with no expectations.
    pub fn new() -> Self {
        let (sender, mut receiver) = mpsc::channel::<ResourceRequest<T>>(100);
        let expectations: Arc<Mutex<VecDeque<Expectation<T>>>> =
            Arc::new(Mutex::new(VecDeque::new()));
        let expectations_clone = expectations.clone();

        let handle = tokio::spawn(async move {
            while let Some(request) = receiver.recv().await {
                let expectation = expectations_clone
                    .lock()
                    .expect("mock expectation lock poisoned")
                    .pop_front();

                match (request, expectation) {
                    (
                        ResourceRequest::Get { respond_to, .. },
                        Some(Expectation::Get { response }),
                    ) => {
                        let _ = respond_to.send(response);
                    }
                    (
                        ResourceRequest::GetMany { respond_to, .. },
                        Some(Expectation::GetMany { response }),
                    ) => {
                        let _ = respond_to.send(response);
                    }
                    (
                        ResourceRequest::Create { respond_to, .. },
                        Some(Expectation::Create { response }),
                    ) => {
                        let _ = respond_to.send(response);
                    }
                    (
                        ResourceRequest::Action { respond_to, .. },
                        Some(Expectation::Action { response }),
                    ) => {
                        let _ = respond_to.send(response);
                    }
                    (
                        ResourceRequest::StoreAction { respond_to, .. },
                        Some(Expectation::StoreAction { response }),
                    ) => {
                        let _ = respond_to.send(response);
                    }
                    _ => {
                        panic!("Unexpected request or expectation mismatch");
                    }
                }
            }
        });

        Self {
            client: ResourceClient::new(sender),
            expectations,
            _handle: handle,
        }
    }

    /// Returns the client for use in tests.
    pub fn client(&self) -> ResourceClient<T> {
        self.client.clone()
    }

    fn push(&self, expectation: Expectation<T>) {
        self.expectations
            .lock()
            .expect("mock expectation lock poisoned")
            .push_back(expectation);
    }

    /// Scripts the response for the next `get` request.
    pub fn expect_get(&mut self, response: Result<Option<T>, FrameworkError>) {
        self.push(Expectation::Get { response });
    }

    /// Scripts the response for the next `get_many` request.
    pub fn expect_get_many(&mut self, response: Result<Vec<T>, FrameworkError>) {
        self.push(Expectation::GetMany { response });
    }

    /// Scripts the response for the next `create` request.
    pub fn expect_create(&mut self, response: Result<T::Id, FrameworkError>) {
        self.push(Expectation::Create { response });
    }

    /// Scripts the response for the next `perform_action` request.
    pub fn expect_action(&mut self, response: Result<T::ActionResult, FrameworkError>) {
        self.push(Expectation::Action { response });
    }

    /// Scripts the response for the next `perform_store_action` request.
    pub fn expect_store_action(&mut self, response: Result<T::StoreActionResult, FrameworkError>) {
        self.push(Expectation::StoreAction { response });
    }

    /// Panics if any scripted expectation was not consumed.
    pub fn verify(&self) {
        let exps = self
            .expectations
            .lock()
            .expect("mock expectation lock poisoned");
        if !exps.is_empty() {
            panic!("Not all expectations were met. {} remaining", exps.len());
        }
    }
}

impl<T: ActorEntity> Default for MockClient<T> {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// RAW CHANNEL HELPERS
// =============================================================================

/// Creates a mock client and the receiver its requests arrive on.
///
/// Useful when a test wants to assert on the request payload itself rather
/// than just script responses.
pub fn create_mock_client<T: ActorEntity>(
    buffer_size: usize,
) -> (ResourceClient<T>, mpsc::Receiver<ResourceRequest<T>>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (ResourceClient::new(sender), receiver)
}

/// Receives the next request and asserts it is a `Create`.
pub async fn expect_create<T: ActorEntity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(
    T::Create,
    tokio::sync::oneshot::Sender<Result<T::Id, FrameworkError>>,
)> {
    match receiver.recv().await {
        Some(ResourceRequest::Create { params, respond_to }) => Some((params, respond_to)),
        _ => None,
    }
}

/// Receives the next request and asserts it is a `Get`.
pub async fn expect_get<T: ActorEntity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(
    T::Id,
    tokio::sync::oneshot::Sender<Result<Option<T>, FrameworkError>>,
)> {
    match receiver.recv().await {
        Some(ResourceRequest::Get { id, respond_to }) => Some((id, respond_to)),
        _ => None,
    }
}

/// Receives the next request and asserts it is a `GetMany`.
pub async fn expect_get_many<T: ActorEntity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(
    Vec<T::Id>,
    tokio::sync::oneshot::Sender<Result<Vec<T>, FrameworkError>>,
)> {
    match receiver.recv().await {
        Some(ResourceRequest::GetMany { ids, respond_to }) => Some((ids, respond_to)),
        _ => None,
    }
}

/// Receives the next request and asserts it is an `Action`.
pub async fn expect_action<T: ActorEntity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(
    T::Id,
    T::Action,
    tokio::sync::oneshot::Sender<Result<T::ActionResult, FrameworkError>>,
)> {
    match receiver.recv().await {
        Some(ResourceRequest::Action {
            id,
            action,
            respond_to,
        }) => Some((id, action, respond_to)),
        _ => None,
    }
}

/// Receives the next request and asserts it is a `StoreAction`.
pub async fn expect_store_action<T: ActorEntity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(
    T::StoreAction,
    tokio::sync::oneshot::Sender<Result<T::StoreActionResult, FrameworkError>>,
)> {
    match receiver.recv().await {
        Some(ResourceRequest::StoreAction { action, respond_to }) => Some((action, respond_to)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Customer, CustomerCreate, CustomerId};

    #[tokio::test]
    async fn raw_mock_answers_create() {
        let (client, mut receiver) = create_mock_client::<Customer>(10);

        let create_task = tokio::spawn(async move {
            let params = CustomerCreate {
                name: "Test".to_string(),
                email: "test@example.com".to_string(),
            };
            client.create(params).await
        });

        let (payload, responder) = expect_create(&mut receiver)
            .await
            .expect("Expected Create request");
        assert_eq!(payload.name, "Test");
        responder.send(Ok(CustomerId(1))).unwrap();

        let result = create_task.await.unwrap();
        assert_eq!(result.unwrap(), CustomerId(1));
    }

    #[tokio::test]
    async fn scripted_mock_consumes_expectations_in_order() {
        let mut mock = MockClient::<Customer>::new();
        mock.expect_create(Ok(CustomerId(1)));
        mock.expect_get(Ok(Some(Customer::new(
            CustomerId(1),
            "Test",
            "test@example.com",
        ))));

        let client = mock.client();

        let params = CustomerCreate {
            name: "Test".to_string(),
            email: "test@example.com".to_string(),
        };
        let id = client.create(params).await.unwrap();
        assert_eq!(id, CustomerId(1));

        let fetched = client.get(CustomerId(1)).await.unwrap();
        assert_eq!(fetched.unwrap().email, "test@example.com");

        mock.verify();
    }
}
