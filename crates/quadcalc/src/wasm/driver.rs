//! WASM Driver - the calculator page without a browser
//!
//! Wires a [`Calculator`] to a [`MockDom`] the same way the page does:
//! a click sends the button's token, the reducer runs, the displays named by
//! the returned [`Refresh`] are redrawn, and a rejection pops an alert.

use super::dom::{button_id, DomEvent, MockDom};
use crate::config::CalcConfig;
use crate::core::{Calculator, Outcome, Rejection};
use crate::driver::CalculatorDriver;
use crate::render::Renderer;

/// WASM Driver wrapping calculator, renderer and mock DOM
#[derive(Debug)]
pub struct WasmDriver {
    /// The calculator instance
    calculator: Calculator,
    /// Writes state into the DOM
    renderer: Renderer,
    /// Mock DOM for testing
    dom: MockDom,
    /// Most recent rejection
    last_rejection: Option<Rejection>,
}

impl Default for WasmDriver {
    fn default() -> Self {
        Self::new()
    }
}

impl WasmDriver {
    /// Creates a new WASM driver over the default page
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(&CalcConfig::default())
    }

    /// Creates a WASM driver using the given configuration
    #[must_use]
    pub fn with_config(config: &CalcConfig) -> Self {
        Self::with_dom(config, MockDom::calculator_with(config))
    }

    /// Creates a WASM driver over an existing DOM
    #[must_use]
    pub fn with_dom(config: &CalcConfig, dom: MockDom) -> Self {
        let calculator = Calculator::with_config(config);
        let renderer = Renderer::new(config);
        let mut dom = dom;
        // the page shows the placeholder on load
        renderer.render_display(&calculator, &mut dom);
        Self {
            calculator,
            renderer,
            dom,
            last_rejection: None,
        }
    }

    /// Returns a reference to the calculator
    #[must_use]
    pub fn calculator(&self) -> &Calculator {
        &self.calculator
    }

    /// Returns a reference to the DOM
    #[must_use]
    pub fn dom(&self) -> &MockDom {
        &self.dom
    }

    /// Returns a mutable reference to the DOM
    pub fn dom_mut(&mut self) -> &mut MockDom {
        &mut self.dom
    }

    /// Simulates clicking a keypad button by element id
    ///
    /// Returns `None` if there is no such button.
    pub fn click(&mut self, element_id: &str) -> Option<Outcome> {
        let token = self.dom.button_input(element_id)?.to_string();
        self.dom.dispatch_event(DomEvent::click(element_id));
        Some(self.handle(&token))
    }

    /// Simulates a numeric digit button (the page passes digits as numbers)
    pub fn click_number(&mut self, value: f64) -> Outcome {
        let outcome = self.calculator.press_number(value);
        self.after(&outcome);
        outcome
    }

    fn handle(&mut self, token: &str) -> Outcome {
        let outcome = self.calculator.press(token);
        self.after(&outcome);
        outcome
    }

    fn after(&mut self, outcome: &Outcome) {
        if let Some(rejection) = outcome.rejection() {
            self.last_rejection = Some(rejection);
            self.dom.alert(&rejection.to_string());
        }
        self.renderer
            .apply(outcome.refresh(), &self.calculator, &mut self.dom);
    }

    /// Gets the primary readout element's text
    #[must_use]
    pub fn display_element_text(&self) -> Option<&str> {
        self.dom.get_element_text(self.renderer.display_id())
    }

    /// Gets the expression trail element's text
    #[must_use]
    pub fn expression_element_text(&self) -> Option<&str> {
        self.dom.get_element_text(self.renderer.expression_id())
    }
}

impl CalculatorDriver for WasmDriver {
    fn press(&mut self, token: &str) -> Outcome {
        let id = button_id(token);
        match self.click(&id) {
            Some(outcome) => outcome,
            // not a keypad button: hand the raw token to the reducer
            None => self.handle(token),
        }
    }

    fn display_text(&self) -> String {
        self.display_element_text().unwrap_or_default().to_string()
    }

    fn expression_text(&self) -> String {
        self.expression_element_text().unwrap_or_default().to_string()
    }

    fn last_rejection(&self) -> Option<Rejection> {
        self.last_rejection
    }
}
