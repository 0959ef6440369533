//! # Builders
//!
//! Fluent configuration for encoding operations.
//!
//! ## Modules
//!
//! - [`codec_config`] - Retry cap for the point-embedding rejection sampler
//!
//! ## Usage
//!
//! Every high-level entry point has a `_with` variant taking a [`CodecConfig`];
//! the plain variants use [`CodecConfig::default()`].
//!
//! [`CodecConfig`]: codec_config::CodecConfig
//! [`CodecConfig::default()`]: codec_config::CodecConfig

pub mod codec_config;
