//! Mock DOM for testing the page without a browser
//!
//! Models just enough of the calculator page: the two text surfaces, the
//! keypad buttons (each carrying the token it sends in `data-input`), and the
//! blocking alert dialog.

use crate::config::CalcConfig;
use crate::core::{Operator, BACK_TOKEN, CLEAR_TOKEN};
use crate::render::RenderTarget;
use std::collections::HashMap;

/// Attribute holding the token a keypad button sends
pub const DATA_INPUT: &str = "data-input";

/// Represents a DOM element for testing
#[derive(Debug, Clone, PartialEq)]
pub struct DomElement {
    /// Element ID
    pub id: String,
    /// Element tag name
    pub tag: String,
    /// Text content
    pub text_content: String,
    /// Element attributes
    pub attributes: HashMap<String, String>,
    /// CSS classes
    pub classes: Vec<String>,
}

impl Default for DomElement {
    fn default() -> Self {
        Self::new("div")
    }
}

impl DomElement {
    /// Creates a new DOM element with the given tag
    #[must_use]
    pub fn new(tag: &str) -> Self {
        Self {
            id: String::new(),
            tag: tag.to_string(),
            text_content: String::new(),
            attributes: HashMap::new(),
            classes: Vec::new(),
        }
    }

    /// Creates an element with an ID
    #[must_use]
    pub fn with_id(mut self, id: &str) -> Self {
        self.id = id.to_string();
        self
    }

    /// Sets the text content
    #[must_use]
    pub fn with_text(mut self, text: &str) -> Self {
        self.text_content = text.to_string();
        self
    }

    /// Adds a class
    #[must_use]
    pub fn with_class(mut self, class: &str) -> Self {
        self.classes.push(class.to_string());
        self
    }

    /// Sets an attribute
    #[must_use]
    pub fn with_attr(mut self, key: &str, value: &str) -> Self {
        self.attributes.insert(key.to_string(), value.to_string());
        self
    }

    /// Sets text content
    pub fn set_text(&mut self, text: &str) {
        self.text_content = text.to_string();
    }

    /// Checks if element has a class
    #[must_use]
    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    /// Gets an attribute value
    #[must_use]
    pub fn get_attr(&self, key: &str) -> Option<&str> {
        self.attributes.get(key).map(String::as_str)
    }
}

/// Things that happen on the page
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomEvent {
    /// Click event on an element
    Click {
        /// The ID of the clicked element
        element_id: String,
    },
    /// Blocking alert dialog
    Alert {
        /// The message shown to the user
        message: String,
    },
}

impl DomEvent {
    /// Creates a click event
    #[must_use]
    pub fn click(element_id: &str) -> Self {
        Self::Click {
            element_id: element_id.to_string(),
        }
    }

    /// Creates an alert event
    #[must_use]
    pub fn alert(message: &str) -> Self {
        Self::Alert {
            message: message.to_string(),
        }
    }
}

/// Element id for the keypad button sending `token`
#[must_use]
pub fn button_id(token: &str) -> String {
    let name = match token {
        "." => "decimal",
        "=" => "equals",
        CLEAR_TOKEN => "clear",
        BACK_TOKEN => "back",
        "+" => "plus",
        "-" => "minus",
        "*" => "times",
        "/" => "divide",
        digit => digit,
    };
    format!("btn-{name}")
}

/// Mock DOM for testing the calculator page without a browser
#[derive(Debug, Default)]
pub struct MockDom {
    /// Elements by ID
    elements: HashMap<String, DomElement>,
    /// Event history for verification
    event_history: Vec<DomEvent>,
}

impl MockDom {
    /// Creates an empty mock DOM
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates the calculator page with the default element ids
    #[must_use]
    pub fn calculator() -> Self {
        Self::calculator_with(&CalcConfig::default())
    }

    /// Creates the calculator page using the element ids from `config`
    #[must_use]
    pub fn calculator_with(config: &CalcConfig) -> Self {
        let mut dom = Self::new();

        dom.register_element(
            DomElement::new("div")
                .with_id(&config.display_id)
                .with_class("display")
                .with_text("0"),
        );
        dom.register_element(
            DomElement::new("div")
                .with_id(&config.expression_id)
                .with_class("expression"),
        );

        let mut tokens: Vec<String> = (0..=9).map(|d: u8| d.to_string()).collect();
        tokens.extend(Operator::ALL.iter().map(|op| op.symbol().to_string()));
        tokens.extend([".", "=", CLEAR_TOKEN, BACK_TOKEN].map(String::from));

        for token in &tokens {
            dom.register_element(
                DomElement::new("button")
                    .with_id(&button_id(token))
                    .with_text(token)
                    .with_class("keypad-btn")
                    .with_attr(DATA_INPUT, token),
            );
        }

        dom
    }

    /// Registers an element for ID lookup
    pub fn register_element(&mut self, element: DomElement) {
        if !element.id.is_empty() {
            self.elements.insert(element.id.clone(), element);
        }
    }

    /// Removes an element, returning it if it existed
    pub fn remove_element(&mut self, id: &str) -> Option<DomElement> {
        self.elements.remove(id)
    }

    /// Gets an element by ID
    #[must_use]
    pub fn get_element(&self, id: &str) -> Option<&DomElement> {
        self.elements.get(id)
    }

    /// Gets element text by ID
    #[must_use]
    pub fn get_element_text(&self, id: &str) -> Option<&str> {
        self.elements.get(id).map(|e| e.text_content.as_str())
    }

    /// Returns the token a button sends when clicked
    #[must_use]
    pub fn button_input(&self, id: &str) -> Option<&str> {
        self.elements.get(id).and_then(|e| e.get_attr(DATA_INPUT))
    }

    /// Number of keypad buttons on the page
    #[must_use]
    pub fn button_count(&self) -> usize {
        self.elements
            .values()
            .filter(|e| e.has_class("keypad-btn"))
            .count()
    }

    /// Records an event
    pub fn dispatch_event(&mut self, event: DomEvent) {
        self.event_history.push(event);
    }

    /// Shows a blocking alert
    pub fn alert(&mut self, message: &str) {
        self.dispatch_event(DomEvent::alert(message));
    }

    /// Gets the event history
    #[must_use]
    pub fn event_history(&self) -> &[DomEvent] {
        &self.event_history
    }

    /// Messages of all alerts shown so far
    #[must_use]
    pub fn alerts(&self) -> Vec<&str> {
        self.event_history
            .iter()
            .filter_map(|event| match event {
                DomEvent::Alert { message } => Some(message.as_str()),
                DomEvent::Click { .. } => None,
            })
            .collect()
    }

    /// Clears event history
    pub fn clear_event_history(&mut self) {
        self.event_history.clear();
    }
}

impl RenderTarget for MockDom {
    fn set_text(&mut self, id: &str, text: &str) -> bool {
        match self.elements.get_mut(id) {
            Some(elem) => {
                elem.set_text(text);
                true
            }
            None => false,
        }
    }
}
