//! Startup configuration, read from the environment after `.env` is loaded.

use std::{env, path::PathBuf};

use anyhow::Context;
use blake2::{Blake2b, Digest};

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:5000";
const DEFAULT_BOOKINGS_FILE: &str = "bookings.json";
const DEFAULT_STATIC_DIR: &str = ".";

#[derive(Debug, Clone)]
pub struct Config {
    pub bind_addr: String,
    pub bookings_file: PathBuf,
    /// Directory served at `/`; `index.html` is its index page.
    pub static_dir: PathBuf,
    pub admin: AdminCredentials,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        let username = env::var("ADMIN_USERNAME").context("ADMIN_USERNAME not set")?;
        let password = env::var("ADMIN_PASSWORD").context("ADMIN_PASSWORD not set")?;

        Ok(Self {
            bind_addr: env_or("BIND_ADDR", DEFAULT_BIND_ADDR),
            bookings_file: env_or("BOOKINGS_FILE", DEFAULT_BOOKINGS_FILE).into(),
            static_dir: env_or("STATIC_DIR", DEFAULT_STATIC_DIR).into(),
            admin: AdminCredentials::new(username, password),
        })
    }
}

fn env_or(name: &str, default: &str) -> String {
    env::var(name)
        .ok()
        .filter(|v| !v.is_empty())
        .unwrap_or_else(|| default.to_string())
}

/// The single admin account. Only a digest of the password is kept.
#[derive(Clone)]
pub struct AdminCredentials {
    username: String,
    hashed_password: String,
}

impl AdminCredentials {
    pub fn new<S1: Into<String>, S2: AsRef<str>>(username: S1, password: S2) -> Self {
        Self {
            username: username.into(),
            hashed_password: hash_password(password.as_ref()),
        }
    }

    pub fn matches(&self, username: &str, password: &str) -> bool {
        username == self.username && hash_password(password) == self.hashed_password
    }
}

impl std::fmt::Debug for AdminCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AdminCredentials")
            .field("username", &self.username)
            .finish()
    }
}

fn hash_password(password: &str) -> String {
    format!("{:x}", Blake2b::digest(password.as_bytes()))
}
