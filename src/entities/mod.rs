pub mod prelude;

pub mod payment;
pub mod room;
pub mod tenant;
