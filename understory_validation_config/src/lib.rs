// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_validation_config --heading-base-level=0

//! Understory Validation Config: registration glue for form validation.
//!
//! [`ValidationHtmlConfiguration`] builds [`ValidationHtmlOptions`] from
//! defaults, lets an application adjust them through a callback, and
//! installs the resulting collaborators into a [`Container`]:
//!
//! - the validation controller factory,
//! - the base [`ValidationOptions`] (only these fields reach the base
//!   configuration),
//! - the default [`ValidationTrigger`],
//! - the `validate` binding behavior,
//! - the errors custom attribute and the container custom element, each only
//!   when its flag is set.
//!
//! ## `no_std` Support
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod options;
mod registration;

pub use options::{
    CustomMessage, ImplementationKey, MessageAlias, ValidationHtmlOptions, ValidationOptions,
    ValidationTrigger,
};
pub use registration::{Container, OptionsProvider, Registration, ValidationHtmlConfiguration};
