//! Authentication building blocks (JWT validation).
//!
//! Token issuance (login, refresh) is the external auth collaborator's
//! concern; this crate only validates incoming access tokens.

pub mod jwt;
