pub use super::payment::Entity as Payment;
pub use super::room::Entity as Room;
pub use super::tenant::Entity as Tenant;
