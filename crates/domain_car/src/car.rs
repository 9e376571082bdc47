//! Car and owner models

use serde::{Deserialize, Serialize};

use core_kernel::{CarId, OwnerId};

/// The registered owner of a car
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Owner {
    pub id: OwnerId,
    pub name: String,
    pub email: String,
}

/// A car tracked by the service
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Car {
    pub id: CarId,
    pub vin: String,
    pub make: String,
    pub model: String,
    pub year_of_manufacture: i32,
    pub owner: Option<Owner>,
}

impl Car {
    /// Returns the owner's identifier, if the car has an owner
    pub fn owner_id(&self) -> Option<OwnerId> {
        self.owner.as_ref().map(|o| o.id)
    }
}
