// Services module - business logic layer

pub mod delivery_service;
pub mod ratings;
pub mod scheduling;

pub use delivery_service::DeliveryService;
pub use scheduling::DeliveryRound;
