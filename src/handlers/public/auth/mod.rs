// handlers/public/auth/mod.rs - Public authentication handlers
//
// POST /api/register creates an account, POST /api/login returns a bearer
// token for the protected routes.

pub mod login;
pub mod register;
pub mod utils;

pub use login::login;
pub use register::{register, RegisterResponse};
pub use utils::{respond_with_token, TokenResponse};
