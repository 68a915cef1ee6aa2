// src/services/mod.rs
//
// Third-party backed collaborators used by the registration flow

pub mod avatar;
pub mod password;
pub mod tokens;
