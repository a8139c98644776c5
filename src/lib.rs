//! Single-chain dApp gateway: a JSON-RPC proxy route, explorer balance
//! fetching with an explicit display state machine, and a process-wide
//! target-network binding.

pub mod balance;
pub mod config;
pub mod constants;
pub mod context;
pub mod explorer;
pub mod network;
pub mod price;
pub mod rpc;
