pub mod client;
pub mod error;

pub use client::RecommendClient;
pub use error::ClientError;
