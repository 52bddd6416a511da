// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per-host strategy selection and the shared style hierarchy.
//!
//! A [`ShadowDomStylesFactory`] is what a component runtime usually holds: it
//! probes the host once, owns the [`StyleSheetCache`], builds the shared
//! (application wide) styles described by [`ShadowDomOptions`], and hands out
//! one strategy per component definition with the shared styles as its
//! predecessor.

use alloc::rc::Rc;
use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

use log::{debug, warn};

use crate::adopted::AdoptedStyleSheetsStyles;
use crate::cache::StyleSheetCache;
use crate::host::{StyleCapabilities, StyleHost};
use crate::source::CssSource;
use crate::style_element::StyleElementStyles;
use crate::styles::ShadowDomStyles;

/// Shadow DOM style configuration.
///
/// ```rust
/// use understory_shadow_styles::ShadowDomOptions;
///
/// let options = ShadowDomOptions::new()
///     .shared_style(":host { box-sizing: border-box }")
///     .shared_style("*, *::before { box-sizing: inherit }");
/// assert_eq!(options.shared_styles().len(), 2);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ShadowDomOptions {
    shared_styles: Vec<String>,
}

impl ShadowDomOptions {
    /// Creates options without shared styles.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends CSS applied to every shadow root before component styles.
    #[must_use]
    pub fn shared_style(mut self, css: impl Into<String>) -> Self {
        self.shared_styles.push(css.into());
        self
    }

    /// Appends several shared CSS texts, in order.
    #[must_use]
    pub fn shared_styles_from<I, T>(mut self, styles: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        self.shared_styles
            .extend(styles.into_iter().map(Into::into));
        self
    }

    /// The configured shared CSS texts.
    #[must_use]
    pub fn shared_styles(&self) -> &[String] {
        &self.shared_styles
    }
}

/// The delivery mechanism chosen for a host.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum StyleDelivery {
    /// Compiled stylesheets assigned to the adopted stylesheet list.
    AdoptedStyleSheets,
    /// One style node per CSS text.
    StyleElements,
    /// The host cannot receive styles; everything is a no-op.
    Noop,
}

impl StyleDelivery {
    /// Picks the preferred mechanism among `capabilities`.
    #[must_use]
    pub fn select(capabilities: StyleCapabilities) -> Self {
        if capabilities.contains(StyleCapabilities::ADOPTED_STYLE_SHEETS) {
            Self::AdoptedStyleSheets
        } else if capabilities.contains(StyleCapabilities::STYLE_ELEMENTS) {
            Self::StyleElements
        } else {
            Self::Noop
        }
    }
}

/// Creates [`ShadowDomStyles`] for components of one host.
pub struct ShadowDomStylesFactory<H: StyleHost> {
    host: H,
    delivery: StyleDelivery,
    cache: StyleSheetCache<H::StyleSheet>,
    shared: Option<Rc<ShadowDomStyles<H>>>,
    noop: Rc<ShadowDomStyles<H>>,
}

impl<H: StyleHost + Clone> ShadowDomStylesFactory<H> {
    /// Probes `host` and builds the shared styles from `options`.
    ///
    /// The delivery mechanism is fixed here and never re-checked.
    pub fn new(host: H, options: &ShadowDomOptions) -> Result<Self, H::Error> {
        let delivery = StyleDelivery::select(host.capabilities());
        debug!(
            "shadow DOM styles use {delivery:?} ({} shared styles)",
            options.shared_styles.len()
        );
        let mut factory = Self {
            host,
            delivery,
            cache: StyleSheetCache::new(),
            shared: None,
            noop: Rc::new(ShadowDomStyles::Noop),
        };
        if !options.shared_styles.is_empty() {
            let sources = options
                .shared_styles
                .iter()
                .map(|css| CssSource::Text(css.clone()));
            let shared = factory.build(sources, None)?;
            factory.shared = Some(Rc::new(shared));
        }
        Ok(factory)
    }

    /// Creates the styles for one component from its local CSS.
    ///
    /// Without local CSS the shared styles are returned as they are, or the
    /// no-op strategy when there are none. On the style element path,
    /// compiled sources cannot be rendered as markup and are skipped.
    pub fn create_styles<I>(&mut self, local_styles: I) -> Result<Rc<ShadowDomStyles<H>>, H::Error>
    where
        I: IntoIterator<Item = CssSource<H::StyleSheet>>,
    {
        let mut local_styles = local_styles.into_iter().peekable();
        if local_styles.peek().is_none() {
            return Ok(Rc::clone(self.shared.as_ref().unwrap_or(&self.noop)));
        }
        let shared = self.shared.clone();
        Ok(Rc::new(self.build(local_styles, shared)?))
    }

    fn build(
        &mut self,
        local_styles: impl Iterator<Item = CssSource<H::StyleSheet>>,
        shared: Option<Rc<ShadowDomStyles<H>>>,
    ) -> Result<ShadowDomStyles<H>, H::Error> {
        match self.delivery {
            StyleDelivery::AdoptedStyleSheets => Ok(AdoptedStyleSheetsStyles::new(
                self.host.clone(),
                local_styles,
                &mut self.cache,
                shared,
            )?
            .into()),
            StyleDelivery::StyleElements => {
                let texts = local_styles.filter_map(|source| match source {
                    CssSource::Text(css) => Some(css),
                    CssSource::Compiled(_) => {
                        warn!("compiled stylesheet skipped: host only supports style elements");
                        None
                    }
                });
                Ok(StyleElementStyles::new(self.host.clone(), texts, shared).into())
            }
            StyleDelivery::Noop => Ok(ShadowDomStyles::Noop),
        }
    }
}

impl<H: StyleHost> ShadowDomStylesFactory<H> {
    /// The delivery mechanism chosen for the host.
    #[must_use]
    #[inline]
    pub fn delivery(&self) -> StyleDelivery {
        self.delivery
    }

    /// The shared styles every created strategy builds on, if configured.
    #[must_use]
    pub fn shared_styles(&self) -> Option<&Rc<ShadowDomStyles<H>>> {
        self.shared.as_ref()
    }

    /// The stylesheet cache used on the adopted stylesheet path.
    #[must_use]
    pub fn cache(&self) -> &StyleSheetCache<H::StyleSheet> {
        &self.cache
    }
}

impl<H: StyleHost> fmt::Debug for ShadowDomStylesFactory<H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ShadowDomStylesFactory")
            .field("delivery", &self.delivery)
            .field("cache", &self.cache)
            .field("shared", &self.shared)
            .finish_non_exhaustive()
    }
}
