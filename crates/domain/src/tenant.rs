use crate::shared::entity::{Entity, ID};

/// A `Tenant` is a law firm using the LexBase platform. Tenants are owned by
/// the platform core; this engine only enumerates them to scope its work.
#[derive(Debug, Clone)]
pub struct Tenant {
    pub id: ID,
    pub name: String,
}

impl Tenant {
    pub fn new(name: &str) -> Self {
        Self {
            id: Default::default(),
            name: name.to_string(),
        }
    }
}

impl Entity for Tenant {
    fn id(&self) -> &ID {
        &self.id
    }
}
