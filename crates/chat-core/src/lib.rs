pub mod event_bus;
pub mod ports;
pub mod reply;
pub mod session;
