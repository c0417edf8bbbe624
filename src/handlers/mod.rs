// handlers/mod.rs - two security tiers
//
// Public (no auth) → Protected (bearer token, caller injected as AuthUser)
pub mod public; // Account creation and token acquisition
pub mod protected; // Owner-scoped reads under /api/*
