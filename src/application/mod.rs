pub mod builders;
pub mod services;
