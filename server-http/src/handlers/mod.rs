pub mod health;
pub mod tickets;

pub use health::health_check;
pub use tickets::dispatch;
