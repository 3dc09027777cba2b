//! Document (DOM) trait abstraction.
//!
//! The client core never touches a concrete DOM. Every mutation goes through
//! [`Document`], addressed by element id, so the same routing and rendering
//! code runs against a browser host or the in-memory document used by the
//! headless runner and the tests.
//!
//! Operations on ids that do not exist are silently ignored, mirroring how a
//! missing element lookup behaves in a browser.

/// DOM operations required by the client core.
pub trait Document: Send + Sync {
    /// Whether an element with this id exists.
    fn contains(&self, id: &str) -> bool;

    /// Ids of every element carrying `class`, in document order.
    fn ids_with_class(&self, class: &str) -> Vec<String>;

    /// Ids of every element whose attribute `name` equals `value`.
    fn ids_with_attr(&self, name: &str, value: &str) -> Vec<String>;

    /// Read an attribute.
    fn attr(&self, id: &str, name: &str) -> Option<String>;

    /// Set an attribute.
    fn set_attr(&self, id: &str, name: &str, value: &str);

    /// Add a class to an element.
    fn add_class(&self, id: &str, class: &str);

    /// Remove a class from an element.
    fn remove_class(&self, id: &str, class: &str);

    /// Whether the element carries a class.
    fn has_class(&self, id: &str, class: &str) -> bool;

    /// Toggle a class on an element.
    fn toggle_class(&self, id: &str, class: &str) {
        if self.has_class(id, class) {
            self.remove_class(id, class);
        } else {
            self.add_class(id, class);
        }
    }

    /// Replace the whole class list (space separated).
    fn set_class_name(&self, id: &str, class_name: &str);

    /// Set the text content. The text is never interpreted as markup.
    fn set_text(&self, id: &str, text: &str);

    /// Read the text content.
    fn text(&self, id: &str) -> Option<String>;

    /// Replace the inner HTML in a single assignment.
    fn set_inner_html(&self, id: &str, html: &str);

    /// Read the inner HTML.
    fn inner_html(&self, id: &str) -> Option<String>;

    /// Show or hide an element (`display: none`).
    fn set_visible(&self, id: &str, visible: bool);

    /// Whether the element is displayed.
    fn is_visible(&self, id: &str) -> bool;

    /// Set an inline style property.
    fn set_style(&self, id: &str, property: &str, value: &str);

    /// Read an inline style property.
    fn style(&self, id: &str, property: &str) -> Option<String>;

    /// Current value of a form control.
    fn value(&self, id: &str) -> Option<String>;

    /// Set the value of a form control.
    fn set_value(&self, id: &str, value: &str);

    /// Reset every control belonging to a form.
    fn reset_form(&self, form_id: &str);

    /// Enable or disable a control.
    fn set_disabled(&self, id: &str, disabled: bool);

    /// Whether a control is disabled.
    fn is_disabled(&self, id: &str) -> bool;

    /// Scroll the viewport back to the top.
    fn scroll_to_top(&self);
}
