//! API layer - gRPC service implementations

mod service;

pub use service::GreeterImpl;

pub mod proto {
    tonic::include_proto!("salut.greeter.v1");
}
