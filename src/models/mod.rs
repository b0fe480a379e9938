pub mod cancellation;
pub mod pricing;
