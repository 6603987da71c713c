pub mod credentials;
pub mod group;
pub mod normalized_error;
pub mod notification;
pub mod registration;
pub mod session;
