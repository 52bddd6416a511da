// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The host environment boundary.
//!
//! Style delivery never talks to a rendering engine directly. Everything it
//! needs (compiling CSS text, assigning a shadow root's adopted stylesheet
//! list, creating and inserting style nodes) goes through [`StyleHost`].

use alloc::rc::Rc;

bitflags::bitflags! {
    /// Style delivery mechanisms offered by a host's shadow roots.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct StyleCapabilities: u8 {
        /// Shadow roots expose a mutable, ordered adopted stylesheet list.
        const ADOPTED_STYLE_SHEETS = 0b0000_0001;
        /// Style nodes can be created and appended to shadow roots.
        const STYLE_ELEMENTS = 0b0000_0010;
    }
}

/// A host rendering environment that shadow root styles are delivered into.
///
/// The associated types are opaque handles owned by the host. Every operation
/// returns the host's own error type; style delivery propagates it unchanged.
pub trait StyleHost {
    /// A compiled, reusable stylesheet.
    ///
    /// Cloning must be cheap and must yield a handle to the same stylesheet.
    type StyleSheet: Clone;
    /// A style markup node that has not been inserted yet.
    type StyleElement;
    /// The isolated rendering context styles are applied to.
    type ShadowRoot;
    /// Failure raised by the host.
    type Error;

    /// Reports which delivery mechanisms this host's shadow roots support.
    ///
    /// Must be free of side effects.
    fn capabilities(&self) -> StyleCapabilities;

    /// Compiles CSS text into a stylesheet.
    fn compile_style_sheet(&self, css: &str) -> Result<Self::StyleSheet, Self::Error>;

    /// Replaces the root's adopted stylesheet list with `sheets`, in order.
    fn set_adopted_style_sheets(
        &self,
        root: &mut Self::ShadowRoot,
        sheets: &[Self::StyleSheet],
    ) -> Result<(), Self::Error>;

    /// Creates a fresh style node holding `css`.
    fn create_style_element(&self, css: &str) -> Result<Self::StyleElement, Self::Error>;

    /// Appends a style node to the root.
    fn append_style_element(
        &self,
        root: &mut Self::ShadowRoot,
        element: Self::StyleElement,
    ) -> Result<(), Self::Error>;
}

impl<H: StyleHost + ?Sized> StyleHost for Rc<H> {
    type StyleSheet = H::StyleSheet;
    type StyleElement = H::StyleElement;
    type ShadowRoot = H::ShadowRoot;
    type Error = H::Error;

    #[inline]
    fn capabilities(&self) -> StyleCapabilities {
        (**self).capabilities()
    }

    #[inline]
    fn compile_style_sheet(&self, css: &str) -> Result<Self::StyleSheet, Self::Error> {
        (**self).compile_style_sheet(css)
    }

    #[inline]
    fn set_adopted_style_sheets(
        &self,
        root: &mut Self::ShadowRoot,
        sheets: &[Self::StyleSheet],
    ) -> Result<(), Self::Error> {
        (**self).set_adopted_style_sheets(root, sheets)
    }

    #[inline]
    fn create_style_element(&self, css: &str) -> Result<Self::StyleElement, Self::Error> {
        (**self).create_style_element(css)
    }

    #[inline]
    fn append_style_element(
        &self,
        root: &mut Self::ShadowRoot,
        element: Self::StyleElement,
    ) -> Result<(), Self::Error> {
        (**self).append_style_element(root, element)
    }
}

/// Returns `true` if the host's shadow roots can adopt compiled stylesheets.
///
/// This is a pure query. Callers typically run it once per host and choose a
/// strategy from the answer; nothing here caches the result.
#[must_use]
#[inline]
pub fn supported<H: StyleHost + ?Sized>(host: &H) -> bool {
    host.capabilities()
        .contains(StyleCapabilities::ADOPTED_STYLE_SHEETS)
}
