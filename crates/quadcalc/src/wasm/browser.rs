//! Browser WASM bindings for the calculator page
//!
//! The page's buttons call `cal(x)` with either a number (digits) or a
//! string token. Displays are written through `document.getElementById`,
//! rejections use `window.alert`, and unknown tokens go to the console.

// Note: This module is already conditionally compiled via #[cfg(feature = "wasm")] in mod.rs

use wasm_bindgen::prelude::*;
use web_sys::{console, Document};

use crate::config::CalcConfig;
use crate::core::{Calculator, Outcome};
use crate::render::{RenderTarget, Renderer, Snapshot};

/// The live page, as a render target
struct Page {
    document: Option<Document>,
}

impl Page {
    fn current() -> Self {
        Self {
            document: web_sys::window().and_then(|w| w.document()),
        }
    }
}

impl RenderTarget for Page {
    fn set_text(&mut self, id: &str, text: &str) -> bool {
        let Some(element) = self
            .document
            .as_ref()
            .and_then(|doc| doc.get_element_by_id(id))
        else {
            return false;
        };
        element.set_text_content(Some(text));
        true
    }
}

/// Browser Calculator - the main WASM entry point
#[derive(Debug)]
#[wasm_bindgen]
pub struct BrowserCalculator {
    calculator: Calculator,
    renderer: Renderer,
}

#[wasm_bindgen]
impl BrowserCalculator {
    /// Create a calculator bound to the `display` and `expression` elements
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self::with_config(&CalcConfig::default())
    }

    /// Create a calculator bound to custom element ids
    #[wasm_bindgen(js_name = withElements)]
    pub fn with_elements(
        display_id: &str,
        expression_id: &str,
        clear_refreshes_expression: bool,
    ) -> Self {
        let config = CalcConfig::new()
            .with_display_id(display_id)
            .with_expression_id(expression_id)
            .with_clear_refreshes_expression(clear_refreshes_expression);
        Self::with_config(&config)
    }

    /// Handle one button press
    ///
    /// Accepts a digit as a number, or any keypad token as a string.
    pub fn cal(&mut self, input: &JsValue) {
        let outcome = if let Some(value) = input.as_f64() {
            self.calculator.press_number(value)
        } else if let Some(token) = input.as_string() {
            self.calculator.press(&token)
        } else {
            console::warn_2(&"Unhandled cal() input:".into(), input);
            return;
        };

        match &outcome {
            Outcome::Rejected(rejection) => {
                if let Some(window) = web_sys::window() {
                    // a blocked dialog is not worth failing the press over
                    let _ = window.alert_with_message(&rejection.to_string());
                }
            }
            Outcome::Ignored(_) => {
                console::warn_2(&"Unhandled cal() input:".into(), input);
            }
            Outcome::Applied(_) => {}
        }

        self.renderer
            .apply(outcome.refresh(), &self.calculator, &mut Page::current());
    }

    /// Redraw both displays from the current state
    pub fn render(&self) {
        let mut page = Page::current();
        self.renderer.render_display(&self.calculator, &mut page);
        self.renderer.render_expression(&self.calculator, &mut page);
    }

    /// Current state as JSON
    #[wasm_bindgen(js_name = snapshotJson)]
    pub fn snapshot_json(&self) -> String {
        Snapshot::capture(&self.calculator)
            .to_json()
            .unwrap_or_else(|_| "{}".to_string())
    }
}

impl BrowserCalculator {
    fn with_config(config: &CalcConfig) -> Self {
        console_error_panic_hook::set_once();
        let calc = Self {
            calculator: Calculator::with_config(config),
            renderer: Renderer::new(config),
        };
        // the page shows the placeholder once the script loads
        calc.renderer
            .render_display(&calc.calculator, &mut Page::current());
        calc
    }
}

impl Default for BrowserCalculator {
    fn default() -> Self {
        Self::new()
    }
}

/// Initialize the calculator module in the browser
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
    console::log_1(&"Calculator WASM initialized".into());
}
