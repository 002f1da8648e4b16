//! doshell - A DOS-flavored command shell
//!
//! This library implements the core of the doshell command translator: a
//! mapping table loaded from an external text file, a per-command
//! argument-count policy, and the translation pipeline that turns DOS-style
//! command lines into native ones before running them through the platform
//! shell.
//!
//! # Modules
//!
//! - [`config`]: Configuration management and serialization
//! - [`mapping`]: DOS-to-native mapping table and file format
//! - [`policy`]: Per-command argument-count policy
//! - [`translator`]: Command-line parsing, validation and rewrite
//! - [`executor`]: Subprocess boundary with lazy output streaming
//! - [`menu`]: Interactive menu loop
//! - [`manual`]: User manual text

pub mod config;
pub mod executor;
pub mod manual;
pub mod mapping;
pub mod menu;
pub mod policy;
pub mod translator;
