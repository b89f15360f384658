// handlers/mod.rs - Handler tiers
//
// Public (no auth, /api/register and /api/login) and Protected (bearer JWT,
// /api/users), plus system endpoints and the not-found fallback.

pub mod fallback;
pub mod protected;
pub mod public;
pub mod system;
