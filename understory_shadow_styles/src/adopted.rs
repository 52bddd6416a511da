// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Delivery through constructable, adoptable stylesheets.

use alloc::rc::Rc;
use alloc::vec::Vec;
use core::fmt;

use crate::cache::StyleSheetCache;
use crate::host::StyleHost;
use crate::source::CssSource;
use crate::styles::ShadowDomStyles;

/// Styles delivered by assigning a shadow root's adopted stylesheet list.
///
/// Local CSS text is compiled through a shared [`StyleSheetCache`] when the
/// strategy is built, so identical text across components compiles once.
/// Applying assigns the complete list (shared stylesheets first, then local
/// ones) and therefore yields the same result no matter how often it runs.
///
/// Only construct this strategy for hosts where [`supported`](Self::supported)
/// returns `true`; otherwise [`apply_to`](Self::apply_to) returns whatever
/// error the host raises for the assignment.
pub struct AdoptedStyleSheetsStyles<H: StyleHost> {
    host: H,
    style_sheets: Vec<H::StyleSheet>,
    shared: Option<Rc<ShadowDomStyles<H>>>,
}

impl<H: StyleHost> AdoptedStyleSheetsStyles<H> {
    /// Builds the strategy, resolving every text source through `cache`.
    ///
    /// Compiled sources are kept as given and never enter the cache. Source
    /// order is preserved. The first compile failure is returned; texts
    /// compiled before it remain cached.
    pub fn new<I>(
        host: H,
        local_styles: I,
        cache: &mut StyleSheetCache<H::StyleSheet>,
        shared: Option<Rc<ShadowDomStyles<H>>>,
    ) -> Result<Self, H::Error>
    where
        I: IntoIterator<Item = CssSource<H::StyleSheet>>,
    {
        let style_sheets = local_styles
            .into_iter()
            .map(|source| match source {
                CssSource::Text(css) => cache.resolve(&host, &css),
                CssSource::Compiled(sheet) => Ok(sheet),
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self {
            host,
            style_sheets,
            shared,
        })
    }

    /// Returns `true` if `host` can adopt stylesheets.
    ///
    /// Same answer as [`crate::supported`].
    #[must_use]
    #[inline]
    pub fn supported(host: &H) -> bool {
        crate::host::supported(host)
    }

    /// This strategy's own stylesheets, in application order.
    #[must_use]
    pub fn style_sheets(&self) -> &[H::StyleSheet] {
        &self.style_sheets
    }

    /// The shared strategy applied before this one, if any.
    #[must_use]
    pub fn shared(&self) -> Option<&Rc<ShadowDomStyles<H>>> {
        self.shared.as_ref()
    }

    /// Sets `root`'s adopted stylesheets to the shared list followed by the
    /// local list, replacing whatever was adopted before.
    pub fn apply_to(&self, root: &mut H::ShadowRoot) -> Result<(), H::Error> {
        let mut sheets = Vec::new();
        self.collect_into(root, &mut sheets)?;
        self.host.set_adopted_style_sheets(root, &sheets)
    }

    pub(crate) fn collect_into(
        &self,
        root: &mut H::ShadowRoot,
        out: &mut Vec<H::StyleSheet>,
    ) -> Result<(), H::Error> {
        if let Some(shared) = &self.shared {
            shared.collect_adopted(root, out)?;
        }
        out.extend(self.style_sheets.iter().cloned());
        Ok(())
    }
}

impl<H: StyleHost> fmt::Debug for AdoptedStyleSheetsStyles<H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AdoptedStyleSheetsStyles")
            .field("style_sheets", &self.style_sheets.len())
            .field("shared", &self.shared)
            .finish_non_exhaustive()
    }
}
