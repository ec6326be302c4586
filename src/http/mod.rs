pub mod client;
pub mod debug;

pub use client::{HttpClient, HttpResponseData};
pub use debug::HttpDebugConfig;
