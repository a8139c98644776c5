pub mod forwarder;
pub mod routes;
