//! [`ActorEntity`] implementation for [`Customer`].
//!
//! Customers are plain CRUD resources with no custom actions and no
//! dependencies; registration rejects blank names and emails.

use super::error::CustomerError;
use crate::framework::ActorEntity;
use crate::model::{Customer, CustomerCreate, CustomerId, CustomerUpdate};
use async_trait::async_trait;
use std::collections::HashMap;

#[async_trait]
impl ActorEntity for Customer {
    type Id = CustomerId;
    type Create = CustomerCreate;
    type Update = CustomerUpdate;
    type Action = ();
    type ActionResult = ();
    type StoreAction = ();
    type StoreActionResult = ();
    type Context = ();
    type Error = CustomerError;

    fn from_create_params(id: CustomerId, params: CustomerCreate) -> Result<Self, CustomerError> {
        if params.name.trim().is_empty() {
            return Err(CustomerError::ValidationError("name must not be empty".into()));
        }
        if params.email.trim().is_empty() {
            return Err(CustomerError::ValidationError("email must not be empty".into()));
        }
        Ok(Self::new(id, params.name, params.email))
    }

    async fn on_update(&mut self, update: CustomerUpdate, _ctx: &()) -> Result<(), CustomerError> {
        if let Some(name) = update.name {
            self.name = name;
        }
        if let Some(email) = update.email {
            self.email = email;
        }
        Ok(())
    }

    async fn handle_action(&mut self, _action: (), _ctx: &()) -> Result<(), CustomerError> {
        Ok(())
    }

    async fn handle_store_action(
        _store: &mut HashMap<CustomerId, Self>,
        _action: (),
        _ctx: &(),
    ) -> Result<(), CustomerError> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_rejects_blank_email() {
        let params = CustomerCreate {
            name: "Alice".to_string(),
            email: "  ".to_string(),
        };
        let result = Customer::from_create_params(CustomerId(1), params);
        assert!(matches!(result, Err(CustomerError::ValidationError(_))));
    }

    #[test]
    fn create_builds_customer() {
        let params = CustomerCreate {
            name: "Alice".to_string(),
            email: "alice@example.com".to_string(),
        };
        let customer = Customer::from_create_params(CustomerId(1), params).unwrap();
        assert_eq!(customer.id, CustomerId(1));
        assert_eq!(customer.name, "Alice");
    }
}
