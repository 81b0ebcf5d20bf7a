//! Bearer-credential authentication: token signing/verification and the
//! request gate applied to the transfer endpoints.

pub mod jwt;
pub mod middleware;
