// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Compiled stylesheet reuse.

use alloc::boxed::Box;
use core::fmt;

use hashbrown::HashMap;
use log::trace;

use crate::host::StyleHost;

/// A map from CSS text to the stylesheet compiled from it.
///
/// Keys are compared by exact string equality; no normalization is applied.
/// Resolving text that is already present returns a clone of the cached
/// handle, so every component sharing a cache also shares the compiled
/// stylesheet. Entries are never evicted: the set of distinct texts is bounded
/// by the component definitions of an application.
///
/// # Example
///
/// ```rust
/// use core::convert::Infallible;
/// use understory_shadow_styles::StyleSheetCache;
///
/// let mut compiles = 0;
/// let mut cache = StyleSheetCache::new();
/// for _ in 0..2 {
///     let sheet = cache
///         .get_or_try_insert_with("a{color:red}", |css| {
///             compiles += 1;
///             Ok::<_, Infallible>(css.len())
///         })
///         .unwrap();
///     assert_eq!(sheet, 12);
/// }
/// assert_eq!(compiles, 1);
/// assert_eq!(cache.len(), 1);
/// ```
pub struct StyleSheetCache<S> {
    sheets: HashMap<Box<str>, S>,
}

impl<S> Default for StyleSheetCache<S> {
    fn default() -> Self {
        Self {
            sheets: HashMap::new(),
        }
    }
}

impl<S> fmt::Debug for StyleSheetCache<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StyleSheetCache")
            .field("len", &self.sheets.len())
            .finish_non_exhaustive()
    }
}

impl<S> StyleSheetCache<S> {
    /// Creates an empty cache.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of cached stylesheets.
    #[must_use]
    #[inline]
    pub fn len(&self) -> usize {
        self.sheets.len()
    }

    /// Returns `true` if nothing has been compiled through this cache yet.
    #[must_use]
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.sheets.is_empty()
    }

    /// Returns the stylesheet cached for `css`, if any.
    #[must_use]
    pub fn get(&self, css: &str) -> Option<&S> {
        self.sheets.get(css)
    }

    /// Returns `true` if `css` has a cached stylesheet.
    #[must_use]
    pub fn contains(&self, css: &str) -> bool {
        self.sheets.contains_key(css)
    }
}

impl<S: Clone> StyleSheetCache<S> {
    /// Returns the stylesheet for `css`, compiling and inserting it on a miss.
    ///
    /// `compile` runs at most once per distinct text. If it fails, nothing is
    /// inserted and its error is returned.
    pub fn get_or_try_insert_with<E>(
        &mut self,
        css: &str,
        compile: impl FnOnce(&str) -> Result<S, E>,
    ) -> Result<S, E> {
        if let Some(sheet) = self.sheets.get(css) {
            trace!("stylesheet cache hit ({} bytes)", css.len());
            return Ok(sheet.clone());
        }
        let sheet = compile(css)?;
        trace!(
            "stylesheet cache miss ({} bytes), {} cached",
            css.len(),
            self.sheets.len() + 1
        );
        self.sheets.insert(Box::from(css), sheet.clone());
        Ok(sheet)
    }

    /// Returns the stylesheet for `css`, compiling it with `host` on a miss.
    pub fn resolve<H>(&mut self, host: &H, css: &str) -> Result<S, H::Error>
    where
        H: StyleHost<StyleSheet = S> + ?Sized,
    {
        self.get_or_try_insert_with(css, |css| host.compile_style_sheet(css))
    }
}
