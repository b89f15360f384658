// handlers/public/mod.rs - Public handlers (no authentication required)
//
// Token acquisition endpoints under /api. Inputs arrive without a trusted
// user context and are validated by the auth service.

pub mod auth;

pub use auth::*;
