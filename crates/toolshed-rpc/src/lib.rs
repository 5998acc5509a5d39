pub mod jsonrpc;
pub mod wire;

pub use jsonrpc::{JsonRpcError, JsonRpcRequest, JsonRpcResponse};
pub use wire::{CallParams, CallResult, ListResult, ToolDescriptor};
