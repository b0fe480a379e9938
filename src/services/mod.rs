pub mod pricing_service;
pub mod refund_service;
pub mod validation;
