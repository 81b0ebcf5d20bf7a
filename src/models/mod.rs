//! Core data models for the file gateway.
//!
//! Only two ephemeral entities exist: the identity claims carried by a
//! bearer credential (see `auth::jwt`) and the stored object addressed by
//! its key. Nothing here is persisted by the gateway itself.

pub mod object;
