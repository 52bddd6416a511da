// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The style delivery strategy shared by every shadow root.

use alloc::vec::Vec;
use core::fmt;

use crate::adopted::AdoptedStyleSheetsStyles;
use crate::host::StyleHost;
use crate::style_element::StyleElementStyles;

/// How a component's CSS reaches its shadow root.
///
/// A strategy is chosen once, when it is constructed, from the host's
/// [capabilities](crate::StyleHost::capabilities). It is immutable afterwards
/// and exposes a single operation, [`apply_to`](Self::apply_to).
///
/// Strategies compose: both styled variants may hold a *shared* strategy
/// (framework or application wide CSS) whose styles are applied before their
/// own, so local rules win ties under the host's cascade.
pub enum ShadowDomStyles<H: StyleHost> {
    /// Applies nothing. Used for components without CSS.
    Noop,
    /// Assigns the root's adopted stylesheet list.
    AdoptedStyleSheets(AdoptedStyleSheetsStyles<H>),
    /// Appends style nodes to the root.
    StyleElements(StyleElementStyles<H>),
}

impl<H: StyleHost> ShadowDomStyles<H> {
    /// Applies these styles to `root`.
    ///
    /// [`Noop`](Self::Noop) never touches `root` and never fails. The adopted
    /// stylesheet variant replaces the root's whole list on every call. The
    /// style element variant appends new nodes on every call, so it should be
    /// applied once per root.
    pub fn apply_to(&self, root: &mut H::ShadowRoot) -> Result<(), H::Error> {
        match self {
            Self::Noop => Ok(()),
            Self::AdoptedStyleSheets(styles) => styles.apply_to(root),
            Self::StyleElements(styles) => styles.apply_to(root),
        }
    }

    /// Returns `true` for the [`Noop`](Self::Noop) variant.
    #[must_use]
    #[inline]
    pub fn is_noop(&self) -> bool {
        matches!(self, Self::Noop)
    }

    /// Pushes the adopted stylesheets this strategy contributes, shared first.
    ///
    /// A style element strategy has no stylesheets to contribute; its nodes are
    /// inserted into `root` instead so that inherited styling still lands
    /// before the caller's own list is assigned.
    pub(crate) fn collect_adopted(
        &self,
        root: &mut H::ShadowRoot,
        out: &mut Vec<H::StyleSheet>,
    ) -> Result<(), H::Error> {
        match self {
            Self::Noop => Ok(()),
            Self::AdoptedStyleSheets(styles) => styles.collect_into(root, out),
            Self::StyleElements(styles) => styles.apply_to(root),
        }
    }
}

impl<H: StyleHost> From<AdoptedStyleSheetsStyles<H>> for ShadowDomStyles<H> {
    fn from(styles: AdoptedStyleSheetsStyles<H>) -> Self {
        Self::AdoptedStyleSheets(styles)
    }
}

impl<H: StyleHost> From<StyleElementStyles<H>> for ShadowDomStyles<H> {
    fn from(styles: StyleElementStyles<H>) -> Self {
        Self::StyleElements(styles)
    }
}

impl<H: StyleHost> fmt::Debug for ShadowDomStyles<H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Noop => f.write_str("Noop"),
            Self::AdoptedStyleSheets(styles) => f
                .debug_tuple("AdoptedStyleSheets")
                .field(styles)
                .finish(),
            Self::StyleElements(styles) => f.debug_tuple("StyleElements").field(styles).finish(),
        }
    }
}
