// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_shadow_styles --heading-base-level=0

//! Understory Shadow Styles: CSS delivery into shadow roots.
//!
//! Shadow roots do not see the enclosing document's CSS. Each component
//! therefore carries its own CSS, optionally layered on top of shared
//! (framework or application wide) CSS, and something has to put that CSS into
//! every shadow root the component renders into. This crate is that
//! something.
//!
//! ## Strategies
//!
//! [`ShadowDomStyles`] has three variants:
//!
//! - [`ShadowDomStyles::Noop`]: the component has no CSS.
//! - [`AdoptedStyleSheetsStyles`]: CSS text is compiled once per
//!   [`StyleSheetCache`] and assigned as the root's adopted stylesheet list.
//!   Applying replaces the whole list, so it is idempotent.
//! - [`StyleElementStyles`]: for hosts without adopted stylesheets. One style
//!   node per CSS text is appended on every application, so a root must be
//!   styled once.
//!
//! Both styled variants can hold a shared strategy. Shared styles always land
//! before local ones, letting local rules override them under the normal
//! cascade.
//!
//! ## Choosing a strategy
//!
//! [`supported`] answers whether a [`StyleHost`] can adopt stylesheets.
//! [`ShadowDomStylesFactory`] runs that probe once, owns the cache, builds the
//! shared styles from [`ShadowDomOptions`] and creates a strategy per
//! component:
//!
//! ```rust
//! use core::convert::Infallible;
//! use understory_shadow_styles::{
//!     CssSource, ShadowDomOptions, ShadowDomStylesFactory, StyleCapabilities, StyleDelivery, StyleHost,
//! };
//!
//! #[derive(Clone)]
//! struct Host;
//!
//! #[derive(Default)]
//! struct Root {
//!     adopted: Vec<String>,
//! }
//!
//! impl StyleHost for Host {
//!     type StyleSheet = String;
//!     type StyleElement = String;
//!     type ShadowRoot = Root;
//!     type Error = Infallible;
//!
//!     fn capabilities(&self) -> StyleCapabilities {
//!         StyleCapabilities::all()
//!     }
//!     fn compile_style_sheet(&self, css: &str) -> Result<String, Infallible> {
//!         Ok(css.to_owned())
//!     }
//!     fn set_adopted_style_sheets(&self, root: &mut Root, sheets: &[String]) -> Result<(), Infallible> {
//!         root.adopted = sheets.to_vec();
//!         Ok(())
//!     }
//!     fn create_style_element(&self, css: &str) -> Result<String, Infallible> {
//!         Ok(css.to_owned())
//!     }
//!     fn append_style_element(&self, _root: &mut Root, _element: String) -> Result<(), Infallible> {
//!         Ok(())
//!     }
//! }
//!
//! let options = ShadowDomOptions::new().shared_style(":host{display:block}");
//! let mut factory = ShadowDomStylesFactory::new(Host, &options).unwrap();
//! assert_eq!(factory.delivery(), StyleDelivery::AdoptedStyleSheets);
//!
//! let button = factory
//!     .create_styles([CssSource::from("button{color:red}")])
//!     .unwrap();
//!
//! let mut root = Root::default();
//! button.apply_to(&mut root).unwrap();
//! button.apply_to(&mut root).unwrap();
//! assert_eq!(root.adopted, [":host{display:block}", "button{color:red}"]);
//! ```
//!
//! Strategies can also be built by hand with [`AdoptedStyleSheetsStyles::new`]
//! and [`StyleElementStyles::new`] when a runtime manages its own hierarchy.
//!
//! ## Threading
//!
//! Shared strategies are held through `Rc`, so everything here lives on the
//! thread that owns the rendering context.
//!
//! ## Web
//!
//! On `wasm32`, `web::WebStyleHost` implements [`StyleHost`] with
//! `web_sys::CssStyleSheet` and `web_sys::ShadowRoot`.
//!
//! ## `no_std` Support
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod adopted;
mod cache;
mod factory;
mod host;
mod source;
mod style_element;
mod styles;

#[cfg(target_arch = "wasm32")]
pub mod web;

pub use adopted::AdoptedStyleSheetsStyles;
pub use cache::StyleSheetCache;
pub use factory::{ShadowDomOptions, ShadowDomStylesFactory, StyleDelivery};
pub use host::{StyleCapabilities, StyleHost, supported};
pub use source::CssSource;
pub use style_element::StyleElementStyles;
pub use styles::ShadowDomStyles;
