mod health;
mod rpc;

pub use health::health;
pub use rpc::rpc_request;
