//! # Callback Module
//!
//! Event handlers that remember the context they were created with, and a
//! minimal stand-in for a GUI button that fires them.

use std::fmt;

/// Build a click handler bound to `username`.
///
/// The closure owns its own copy of the name, so it is `'static` even when
/// built from a borrowed string.
pub fn make_button_click_handler(username: &str) -> impl Fn() -> String + 'static {
    let username = username.to_string();
    move || {
        let greeting = format!("Welcome back, {}!", username);
        tracing::info!(user = %username, "Click handler fired");
        greeting
    }
}

/// Simulated button. Handlers run in registration order.
pub struct Button {
    label: String,
    handlers: Vec<Box<dyn Fn() -> String>>,
}

impl Button {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            handlers: Vec::new(),
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    /// Register a handler
    pub fn on_click<F>(&mut self, handler: F) -> &mut Self
    where
        F: Fn() -> String + 'static,
    {
        self.handlers.push(Box::new(handler));
        self
    }

    pub fn handler_count(&self) -> usize {
        self.handlers.len()
    }

    /// Fire every handler and collect what they return
    pub fn click(&self) -> Vec<String> {
        tracing::debug!(button = %self.label, handlers = self.handlers.len(), "Button clicked");
        self.handlers.iter().map(|handler| handler()).collect()
    }
}

impl fmt::Debug for Button {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Button")
            .field("label", &self.label)
            .field("handlers", &self.handlers.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    #[test]
    fn test_handler_remembers_username() {
        let handler = make_button_click_handler("Alice");
        assert_eq!(handler(), "Welcome back, Alice!");
        assert_eq!(handler(), "Welcome back, Alice!");
    }

    #[test]
    fn test_handlers_are_independent() {
        let alice = make_button_click_handler("Alice");
        let bob = make_button_click_handler("Bob");
        assert_eq!(bob(), "Welcome back, Bob!");
        assert_eq!(alice(), "Welcome back, Alice!");
    }

    #[test]
    fn test_button_fires_in_order() {
        let mut button = Button::new("Login");
        button
            .on_click(make_button_click_handler("Alice"))
            .on_click(|| "audit: login clicked".to_string());

        assert_eq!(button.handler_count(), 2);
        assert_eq!(
            button.click(),
            vec![
                "Welcome back, Alice!".to_string(),
                "audit: login clicked".to_string()
            ]
        );
    }

    #[test]
    fn test_handler_with_shared_counter() {
        let clicks = Rc::new(Cell::new(0u32));
        let mut button = Button::new("Counter");
        let counter = Rc::clone(&clicks);
        button.on_click(move || {
            counter.set(counter.get() + 1);
            format!("clicked {} times", counter.get())
        });

        button.click();
        let out = button.click();
        assert_eq!(clicks.get(), 2);
        assert_eq!(out, vec!["clicked 2 times".to_string()]);
    }

    #[test]
    fn test_handler_from_borrowed_name_outlives_it() {
        let mut button = Button::new("login");
        {
            let name = String::from("Dana");
            button.on_click(make_button_click_handler(name.as_str()));
        }
        assert_eq!(button.click(), vec!["Welcome back, Dana!".to_string()]);
    }

    #[test]
    fn test_empty_button() {
        let button = Button::new("Nothing");
        assert!(button.click().is_empty());
        assert_eq!(button.label(), "Nothing");
    }
}
