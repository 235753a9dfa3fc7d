pub mod errors;
pub mod extractors;
pub mod handlers;
pub mod responses;
