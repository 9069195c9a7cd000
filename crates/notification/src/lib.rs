mod message;
mod service;

pub use message::*;
pub use service::*;
