//! Populate the process environment from `.env` files at startup.
//!
//! Two alternative loaders are provided:
//!
//! - [`autoload()`] reads `.env`;
//! - [`autoload_env()`] reads `.env.<GO_ENV>`, or `.env` when `GO_ENV` is unset or empty.
//!
//! Both swallow every error. Their fallible counterparts, [`load`] and
//! [`load_env`], report what went wrong through [`LoadError`].

pub mod autoload;
pub mod autoload_env;
pub mod constants;
mod loader;

pub use autoload::{autoload, load};
pub use autoload_env::{autoload_env, env_file_name, load_env, selected_env_file};
pub use loader::LoadError;
