// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! CSS inputs for style delivery.

use alloc::boxed::Box;
use alloc::string::String;

/// A single piece of component CSS.
///
/// Raw text is compiled (through a [`StyleSheetCache`](crate::StyleSheetCache))
/// when the adopted stylesheet path is taken. Already compiled stylesheets are
/// used as they are.
///
/// # Example
///
/// ```rust
/// use understory_shadow_styles::CssSource;
///
/// let text: CssSource<()> = CssSource::from(":host { display: block }");
/// assert_eq!(text.as_text(), Some(":host { display: block }"));
///
/// let compiled = CssSource::Compiled(7_u32);
/// assert!(compiled.is_compiled());
/// assert_eq!(compiled.as_text(), None);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum CssSource<S> {
    /// CSS source text.
    Text(String),
    /// A stylesheet the caller has already compiled.
    Compiled(S),
}

impl<S> CssSource<S> {
    /// Returns the CSS text, if this source is raw text.
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(css) => Some(css),
            Self::Compiled(_) => None,
        }
    }

    /// Returns `true` if this source is an already compiled stylesheet.
    #[must_use]
    #[inline]
    pub fn is_compiled(&self) -> bool {
        matches!(self, Self::Compiled(_))
    }
}

impl<S> From<&str> for CssSource<S> {
    fn from(css: &str) -> Self {
        Self::Text(String::from(css))
    }
}

impl<S> From<String> for CssSource<S> {
    fn from(css: String) -> Self {
        Self::Text(css)
    }
}

impl<S> From<Box<str>> for CssSource<S> {
    fn from(css: Box<str>) -> Self {
        Self::Text(css.into_string())
    }
}
