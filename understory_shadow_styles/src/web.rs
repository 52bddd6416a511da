// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! [`StyleHost`] for browsers, backed by `web_sys`.
//!
//! ```no_run
//! # #[cfg(target_arch = "wasm32")]
//! fn style_root(
//!     root: &mut web_sys::ShadowRoot,
//! ) -> Result<(), wasm_bindgen::JsValue> {
//!     use understory_shadow_styles::web::WebStyleHost;
//!     use understory_shadow_styles::{CssSource, ShadowDomOptions, ShadowDomStylesFactory};
//!
//!     let window = web_sys::window().ok_or("no window")?;
//!     let host = WebStyleHost::new(&window)?;
//!     let mut factory = ShadowDomStylesFactory::new(host, &ShadowDomOptions::new())?;
//!     let styles = factory.create_styles([CssSource::from(":host { display: block }")])?;
//!     styles.apply_to(root)
//! }
//! ```

use js_sys::{Array, Reflect};
use wasm_bindgen::JsValue;
use web_sys::{CssStyleSheet, Document, Element, ShadowRoot, Window};

use crate::host::{StyleCapabilities, StyleHost};

/// A browser window and its document.
///
/// Cloning is cheap: both handles are references to JS objects.
#[derive(Clone, Debug)]
pub struct WebStyleHost {
    window: Window,
    document: Document,
}

impl WebStyleHost {
    /// Creates a host for `window`, failing if it has no document.
    pub fn new(window: &Window) -> Result<Self, JsValue> {
        let document = window
            .document()
            .ok_or_else(|| JsValue::from_str("window has no document"))?;
        Ok(Self {
            window: window.clone(),
            document,
        })
    }

    fn shadow_root_has(&self, property: &str) -> bool {
        Reflect::get(&self.window, &JsValue::from_str("ShadowRoot"))
            .and_then(|ctor| Reflect::get(&ctor, &JsValue::from_str("prototype")))
            .and_then(|proto| {
                if proto.is_object() {
                    Reflect::has(&proto, &JsValue::from_str(property))
                } else {
                    Ok(false)
                }
            })
            .unwrap_or(false)
    }
}

impl StyleHost for WebStyleHost {
    type StyleSheet = CssStyleSheet;
    type StyleElement = Element;
    type ShadowRoot = ShadowRoot;
    type Error = JsValue;

    fn capabilities(&self) -> StyleCapabilities {
        let mut capabilities = StyleCapabilities::STYLE_ELEMENTS;
        if self.shadow_root_has("adoptedStyleSheets") {
            capabilities |= StyleCapabilities::ADOPTED_STYLE_SHEETS;
        }
        capabilities
    }

    fn compile_style_sheet(&self, css: &str) -> Result<CssStyleSheet, JsValue> {
        let sheet = CssStyleSheet::new()?;
        sheet.replace_sync(css)?;
        Ok(sheet)
    }

    fn set_adopted_style_sheets(
        &self,
        root: &mut ShadowRoot,
        sheets: &[CssStyleSheet],
    ) -> Result<(), JsValue> {
        let list: Array = sheets.iter().collect();
        Reflect::set(root, &JsValue::from_str("adoptedStyleSheets"), &list)?;
        Ok(())
    }

    fn create_style_element(&self, css: &str) -> Result<Element, JsValue> {
        let element = self.document.create_element("style")?;
        element.set_text_content(Some(css));
        Ok(element)
    }

    fn append_style_element(&self, root: &mut ShadowRoot, element: Element) -> Result<(), JsValue> {
        root.append_child(&element)?;
        Ok(())
    }
}
