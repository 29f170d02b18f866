//! # User accounts and login payloads
//!
//! [`User`] is what `/admin/users` returns. The password only ever travels
//! outward, inside [`NewUser`] or [`LoginRequest`]; no read model carries it.
//!
//! Identifiers are MongoDB-style `_id` strings on the wire. Every model accepts
//! a plain `id` as well so the client keeps working against backends that
//! rename the field.

use serde::{Deserialize, Serialize};

/// Account role. Decides which console a user lands on after login.
///
/// Decoding goes through [`Role::parse`]: only `"admin"` (any case) grants
/// the admin console, every other string is a regular user.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum Role {
    #[default]
    User,
    Admin,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::User => "user",
            Role::Admin => "admin",
        }
    }

    /// Lenient parse used for stored role strings. Anything that is not
    /// `"admin"` is treated as a regular user.
    pub fn parse(s: &str) -> Self {
        if s.trim().eq_ignore_ascii_case("admin") {
            Role::Admin
        } else {
            Role::User
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Role::User => "User",
            Role::Admin => "Admin",
        }
    }
}

impl From<String> for Role {
    fn from(s: String) -> Self {
        Role::parse(&s)
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A user account as listed by the admin API.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct User {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub role: Role,
}

/// Body of `POST /admin/user`.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub password: String,
    pub role: Role,
}

/// Body of `POST /auth/login`.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Successful login answer.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct LoginResponse {
    pub token: String,
    #[serde(default)]
    pub role: Role,
}
