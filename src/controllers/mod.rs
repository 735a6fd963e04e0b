pub mod payments;
pub mod rooms;
pub mod tenants;
