// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Fallback delivery through style nodes.

use alloc::rc::Rc;
use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

use crate::host::StyleHost;
use crate::styles::ShadowDomStyles;

/// Styles delivered by appending one style node per CSS text.
///
/// This is the fallback for hosts without adopted stylesheets. Nothing is
/// cached or deduplicated: every [`apply_to`](Self::apply_to) creates and
/// appends fresh nodes, so applying twice to the same root leaves two copies
/// of every node. The component runtime applies it once per shadow root.
pub struct StyleElementStyles<H: StyleHost> {
    host: H,
    local_styles: Vec<String>,
    shared: Option<Rc<ShadowDomStyles<H>>>,
}

impl<H: StyleHost> StyleElementStyles<H> {
    /// Builds the strategy from CSS texts, kept in the given order.
    pub fn new<I, T>(host: H, local_styles: I, shared: Option<Rc<ShadowDomStyles<H>>>) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        Self {
            host,
            local_styles: local_styles.into_iter().map(Into::into).collect(),
            shared,
        }
    }

    /// This strategy's own CSS texts, in insertion order.
    #[must_use]
    pub fn local_styles(&self) -> &[String] {
        &self.local_styles
    }

    /// The shared strategy applied before this one, if any.
    #[must_use]
    pub fn shared(&self) -> Option<&Rc<ShadowDomStyles<H>>> {
        self.shared.as_ref()
    }

    /// Applies the shared strategy, then appends a new style node for each
    /// local CSS text.
    pub fn apply_to(&self, root: &mut H::ShadowRoot) -> Result<(), H::Error> {
        if let Some(shared) = &self.shared {
            shared.apply_to(root)?;
        }
        for css in &self.local_styles {
            let element = self.host.create_style_element(css)?;
            self.host.append_style_element(root, element)?;
        }
        Ok(())
    }
}

impl<H: StyleHost> fmt::Debug for StyleElementStyles<H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StyleElementStyles")
            .field("local_styles", &self.local_styles)
            .field("shared", &self.shared)
            .finish_non_exhaustive()
    }
}
