// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! An in-memory host used by the integration tests.

#![allow(dead_code, reason = "each test binary uses a different subset")]

use std::cell::Cell;
use std::fmt;
use std::rc::Rc;

use understory_shadow_styles::{StyleCapabilities, StyleHost};

/// A compiled stylesheet. `serial` counts compilations on the host.
#[derive(Debug, PartialEq, Eq)]
pub struct FakeSheet {
    pub css: String,
    pub serial: usize,
}

pub type Sheet = Rc<FakeSheet>;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StyleNode {
    pub css: String,
}

/// A shadow root. `adopted` is `None` when the root has no adopted list.
#[derive(Debug, Default, PartialEq)]
pub struct FakeRoot {
    pub adopted: Option<Vec<Sheet>>,
    pub style_nodes: Vec<StyleNode>,
}

impl FakeRoot {
    pub fn modern() -> Self {
        Self {
            adopted: Some(Vec::new()),
            style_nodes: Vec::new(),
        }
    }

    pub fn legacy() -> Self {
        Self::default()
    }

    pub fn adopted_css(&self) -> Vec<&str> {
        self.adopted
            .iter()
            .flatten()
            .map(|sheet| sheet.css.as_str())
            .collect()
    }

    pub fn node_css(&self) -> Vec<&str> {
        self.style_nodes.iter().map(|node| node.css.as_str()).collect()
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FakeError {
    UnsupportedProperty(&'static str),
    InvalidCss(String),
    NoDocument,
}

impl fmt::Display for FakeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnsupportedProperty(name) => write!(f, "shadow root has no '{name}' property"),
            Self::InvalidCss(css) => write!(f, "cannot compile '{css}'"),
            Self::NoDocument => f.write_str("no document to create style nodes in"),
        }
    }
}

impl std::error::Error for FakeError {}

#[derive(Clone, Debug)]
pub struct FakeHost {
    capabilities: StyleCapabilities,
    probes: Rc<Cell<usize>>,
    compiles: Rc<Cell<usize>>,
    reject: Option<String>,
}

impl FakeHost {
    pub fn with_capabilities(capabilities: StyleCapabilities) -> Self {
        Self {
            capabilities,
            probes: Rc::new(Cell::new(0)),
            compiles: Rc::new(Cell::new(0)),
            reject: None,
        }
    }

    /// Adopted stylesheets and style nodes.
    pub fn modern() -> Self {
        Self::with_capabilities(StyleCapabilities::all())
    }

    /// Style nodes only.
    pub fn legacy() -> Self {
        Self::with_capabilities(StyleCapabilities::STYLE_ELEMENTS)
    }

    /// Neither mechanism.
    pub fn headless() -> Self {
        Self::with_capabilities(StyleCapabilities::empty())
    }

    /// Fails to compile exactly `css`.
    pub fn rejecting(mut self, css: &str) -> Self {
        self.reject = Some(css.to_owned());
        self
    }

    pub fn probe_count(&self) -> usize {
        self.probes.get()
    }

    pub fn compile_count(&self) -> usize {
        self.compiles.get()
    }

    pub fn sheet(&self, css: &str) -> Sheet {
        self.compile_style_sheet(css).expect("fake sheet")
    }
}

impl StyleHost for FakeHost {
    type StyleSheet = Sheet;
    type StyleElement = StyleNode;
    type ShadowRoot = FakeRoot;
    type Error = FakeError;

    fn capabilities(&self) -> StyleCapabilities {
        self.probes.set(self.probes.get() + 1);
        self.capabilities
    }

    fn compile_style_sheet(&self, css: &str) -> Result<Sheet, FakeError> {
        if self.reject.as_deref() == Some(css) {
            return Err(FakeError::InvalidCss(css.to_owned()));
        }
        let serial = self.compiles.get() + 1;
        self.compiles.set(serial);
        Ok(Rc::new(FakeSheet {
            css: css.to_owned(),
            serial,
        }))
    }

    fn set_adopted_style_sheets(
        &self,
        root: &mut FakeRoot,
        sheets: &[Sheet],
    ) -> Result<(), FakeError> {
        let list = root
            .adopted
            .as_mut()
            .ok_or(FakeError::UnsupportedProperty("adoptedStyleSheets"))?;
        list.clear();
        list.extend(sheets.iter().cloned());
        Ok(())
    }

    fn create_style_element(&self, css: &str) -> Result<StyleNode, FakeError> {
        if !self.capabilities.contains(StyleCapabilities::STYLE_ELEMENTS) {
            return Err(FakeError::NoDocument);
        }
        Ok(StyleNode {
            css: css.to_owned(),
        })
    }

    fn append_style_element(&self, root: &mut FakeRoot, element: StyleNode) -> Result<(), FakeError> {
        root.style_nodes.push(element);
        Ok(())
    }
}
