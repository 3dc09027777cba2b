//! In-memory document.
//!
//! A flat element table keyed by id that implements [`Document`]. It backs
//! the headless runner and the tests: rendered fragments are stored as
//! inner-HTML strings rather than parsed into child elements.

use std::collections::{BTreeMap, HashMap};
use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::bindings::{fields, Binding};
use crate::render::esc_html;
use crate::traits::Document;
use crate::view_state::{AdminTab, Modal, Page};

/// A single element.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Element {
    pub tag: String,
    pub classes: Vec<String>,
    pub attrs: BTreeMap<String, String>,
    pub styles: BTreeMap<String, String>,
    pub text: String,
    pub inner_html: String,
    pub value: String,
    /// Value restored by a form reset.
    pub default_value: String,
    pub hidden: bool,
    pub disabled: bool,
    /// Owning form id.
    pub form: Option<String>,
}

impl Element {
    pub fn new(tag: &str) -> Self {
        Self {
            tag: tag.to_string(),
            ..Self::default()
        }
    }

    pub fn class(mut self, class: &str) -> Self {
        for c in class.split_whitespace() {
            if !self.classes.iter().any(|existing| existing == c) {
                self.classes.push(c.to_string());
            }
        }
        self
    }

    pub fn attr(mut self, name: &str, value: &str) -> Self {
        self.attrs.insert(name.to_string(), value.to_string());
        self
    }

    pub fn style(mut self, property: &str, value: &str) -> Self {
        self.styles.insert(property.to_string(), value.to_string());
        self
    }

    pub fn text(mut self, text: &str) -> Self {
        self.text = text.to_string();
        self.inner_html = esc_html(text);
        self
    }

    pub fn hidden(mut self) -> Self {
        self.hidden = true;
        self
    }

    /// Form control owned by `form_id`, with the value a reset restores.
    pub fn field(mut self, form_id: &str, default_value: &str) -> Self {
        self.form = Some(form_id.to_string());
        self.value = default_value.to_string();
        self.default_value = default_value.to_string();
        self
    }
}

/// Comparable copy of the whole document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentSnapshot {
    elements: BTreeMap<String, Element>,
    scroll_resets: usize,
}

#[derive(Debug, Default)]
struct Nodes {
    order: Vec<String>,
    elements: HashMap<String, Element>,
    scroll_resets: usize,
}

impl Nodes {
    fn ordered(&self) -> impl Iterator<Item = (&String, &Element)> {
        self.order
            .iter()
            .filter_map(move |id| self.elements.get(id).map(|el| (id, el)))
    }
}

/// In-memory [`Document`] implementation.
#[derive(Debug, Default)]
pub struct MemoryDocument {
    nodes: Mutex<Nodes>,
}

impl MemoryDocument {
    /// Empty document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace an element.
    pub fn insert(&self, id: &str, element: Element) {
        let mut nodes = self.nodes();
        if !nodes.elements.contains_key(id) {
            nodes.order.push(id.to_string());
        }
        nodes.elements.insert(id.to_string(), element);
    }

    /// Copy of one element.
    pub fn element(&self, id: &str) -> Option<Element> {
        self.nodes().elements.get(id).cloned()
    }

    /// How many times the viewport was scrolled to the top.
    pub fn scroll_resets(&self) -> usize {
        self.nodes().scroll_resets
    }

    pub fn snapshot(&self) -> DocumentSnapshot {
        let nodes = self.nodes();
        DocumentSnapshot {
            elements: nodes
                .elements
                .iter()
                .map(|(id, el)| (id.clone(), el.clone()))
                .collect(),
            scroll_resets: nodes.scroll_resets,
        }
    }

    fn nodes(&self) -> MutexGuard<'_, Nodes> {
        self.nodes.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn with_element<R>(&self, id: &str, f: impl FnOnce(&mut Element) -> R) -> Option<R> {
        let mut nodes = self.nodes();
        match nodes.elements.get_mut(id) {
            Some(el) => Some(f(el)),
            None => {
                tracing::trace!("Ignoring write to missing element #{}", id);
                None
            }
        }
    }

    /// The full page shell the client core expects: navigation, every page
    /// section, the body map, public containers, the admin dashboard and the
    /// create-form modals.
    pub fn app_shell() -> Self {
        let doc = Self::new();

        doc.insert(Binding::MainHeader.default_id(), Element::new("header"));
        doc.insert(Binding::MainFooter.default_id(), Element::new("footer"));
        doc.insert(Binding::MainNav.default_id(), Element::new("nav"));

        for page in Page::ALL {
            let mut link = Element::new("a")
                .class("nav-link")
                .attr("data-page", page.name());
            let mut section = Element::new("section").class("page");
            if page == Page::Home {
                link = link.class("active");
                section = section.class("active");
            }
            let link_id = match page {
                Page::Admin => Binding::AdminNavLink.default_id().to_string(),
                other => format!("nav-{}", other.name()),
            };
            if page == Page::Admin {
                link = link.hidden();
            }
            if page != Page::Illness {
                doc.insert(&link_id, link);
            }
            doc.insert(&page.element_id(), section);
        }

        for i in 1..=3 {
            doc.insert(&format!("reveal-{}", i), Element::new("div").class("scroll-reveal"));
        }

        doc.insert(
            Binding::HoverLabel.default_id(),
            Element::new("div").text("Hover to select"),
        );
        let regions = [
            ("part-head", "head", "Head"),
            ("part-neck", "neck", "Neck"),
            ("part-chest", "chest", "Chest"),
            ("part-shoulder-left", "shoulder", "Shoulder"),
            ("part-shoulder-right", "shoulder", "Shoulder"),
            ("part-abdomen", "abdomen", "Abdomen"),
            ("part-back", "back", "Back"),
            ("part-knee-left", "knee", "Knee"),
            ("part-knee-right", "knee", "Knee"),
            ("part-foot-left", "foot", "Foot"),
            ("part-foot-right", "foot", "Foot"),
        ];
        for (id, part, label) in regions {
            doc.insert(
                id,
                Element::new("path")
                    .class("body-part")
                    .attr("data-part", part)
                    .attr("data-label", label)
                    .style("fill", "transparent"),
            );
        }

        doc.insert(Binding::IllnessContent.default_id(), Element::new("div"));
        doc.insert(Binding::IllnessTitle.default_id(), Element::new("h1"));
        doc.insert(Binding::IllnessSubtitle.default_id(), Element::new("p"));
        doc.insert(Binding::PartBadge.default_id(), Element::new("span"));
        doc.insert(Binding::TipsContent.default_id(), Element::new("div"));

        let contact = Binding::ContactForm.default_id();
        doc.insert(contact, Element::new("form"));
        doc.insert(fields::CONTACT_NAME, Element::new("input").field(contact, ""));
        doc.insert(fields::CONTACT_EMAIL, Element::new("input").field(contact, ""));
        doc.insert(fields::CONTACT_MESSAGE, Element::new("textarea").field(contact, ""));
        doc.insert(
            Binding::ContactSubmit.default_id(),
            Element::new("button").text("Send Message"),
        );
        doc.insert(
            Binding::ContactSuccess.default_id(),
            Element::new("div").hidden(),
        );

        doc.insert(fields::LOGIN_FORM, Element::new("form"));
        doc.insert(
            fields::LOGIN_EMAIL,
            Element::new("input").field(fields::LOGIN_FORM, ""),
        );
        doc.insert(
            fields::LOGIN_PASSWORD,
            Element::new("input")
                .attr("type", "password")
                .field(fields::LOGIN_FORM, ""),
        );
        doc.insert(
            fields::LOGIN_PASSWORD_TOGGLE,
            Element::new("button").text("👁"),
        );
        doc.insert(Binding::LoginError.default_id(), Element::new("div").hidden());

        doc.insert(Binding::AdminUserInfo.default_id(), Element::new("div"));
        doc.insert(Binding::AdminPageTitle.default_id(), Element::new("h2"));
        doc.insert(Binding::TopbarDate.default_id(), Element::new("span"));
        for stat in [
            Binding::StatIllnesses,
            Binding::StatDoctors,
            Binding::StatMedicines,
            Binding::StatMessages,
        ] {
            doc.insert(stat.default_id(), Element::new("div").text("0"));
        }
        doc.insert(
            Binding::MessageBadge.default_id(),
            Element::new("span").hidden(),
        );

        for tab in AdminTab::ALL {
            let mut link = Element::new("a").class("sidebar-link");
            let mut panel = Element::new("div").class("admin-tab");
            if tab == AdminTab::Dashboard {
                link = link.class("active");
                panel = panel.class("active");
            }
            doc.insert(&tab.sidebar_id(), link);
            doc.insert(&tab.panel_id(), panel);
        }
        for table in [
            Binding::IllnessesTable,
            Binding::DoctorsTable,
            Binding::MedicinesTable,
            Binding::TipsTable,
            Binding::MessagesTable,
        ] {
            doc.insert(table.default_id(), Element::new("div"));
        }

        for modal in Modal::ALL {
            doc.insert(
                &modal.element_id(),
                Element::new("div").class("modal-overlay"),
            );
            doc.insert(&modal.form_id(), Element::new("form"));
        }
        let form = Modal::Illness.form_id();
        doc.insert(fields::ILLNESS_BODY_PART, Element::new("select").field(&form, ""));
        doc.insert(fields::ILLNESS_NAME, Element::new("input").field(&form, ""));
        doc.insert(fields::ILLNESS_DESCRIPTION, Element::new("textarea").field(&form, ""));
        doc.insert(fields::ILLNESS_SYMPTOMS, Element::new("textarea").field(&form, ""));
        doc.insert(fields::ILLNESS_CARE, Element::new("textarea").field(&form, ""));
        doc.insert(fields::ILLNESS_SEVERITY, Element::new("select").field(&form, "mild"));

        let form = Modal::Doctor.form_id();
        doc.insert(fields::DOCTOR_BODY_PART, Element::new("select").field(&form, ""));
        doc.insert(fields::DOCTOR_NAME, Element::new("input").field(&form, ""));
        doc.insert(fields::DOCTOR_SPECIALIZATION, Element::new("input").field(&form, ""));
        doc.insert(fields::DOCTOR_HOSPITAL, Element::new("input").field(&form, ""));
        doc.insert(fields::DOCTOR_PHONE, Element::new("input").field(&form, ""));
        doc.insert(fields::DOCTOR_EMAIL, Element::new("input").field(&form, ""));
        doc.insert(fields::DOCTOR_ADDRESS, Element::new("input").field(&form, ""));
        doc.insert(fields::DOCTOR_EXPERIENCE, Element::new("input").field(&form, ""));

        let form = Modal::Medicine.form_id();
        doc.insert(fields::MEDICINE_ILLNESS, Element::new("select").field(&form, ""));
        doc.insert(fields::MEDICINE_NAME, Element::new("input").field(&form, ""));
        doc.insert(fields::MEDICINE_DESCRIPTION, Element::new("textarea").field(&form, ""));
        doc.insert(fields::MEDICINE_DOSAGE, Element::new("input").field(&form, ""));
        doc.insert(fields::MEDICINE_SIDE_EFFECTS, Element::new("input").field(&form, ""));
        doc.insert(fields::MEDICINE_OTC, Element::new("select").field(&form, "1"));
        doc.insert(Binding::MedicineUploadGroup.default_id(), Element::new("div"));

        let form = Modal::Tip.form_id();
        doc.insert(fields::TIP_CATEGORY, Element::new("select").field(&form, "home_care"));
        doc.insert(fields::TIP_TITLE, Element::new("input").field(&form, ""));
        doc.insert(fields::TIP_DESCRIPTION, Element::new("textarea").field(&form, ""));
        doc.insert(fields::TIP_ICON, Element::new("input").field(&form, ""));

        doc.insert(Binding::Toast.default_id(), Element::new("div").class("toast"));

        doc
    }
}

/// Value of the first `<option value="...">` in a fragment.
fn first_option_value(html: &str) -> Option<String> {
    let start = html.find("<option value=\"")? + "<option value=\"".len();
    let end = html[start..].find('"')?;
    Some(html[start..start + end].to_string())
}

/// Text content of a fragment: tags dropped, common entities decoded.
fn strip_tags(html: &str) -> String {
    let mut out = String::with_capacity(html.len());
    let mut in_tag = false;
    for ch in html.chars() {
        match ch {
            '<' => in_tag = true,
            '>' if in_tag => in_tag = false,
            c if !in_tag => out.push(c),
            _ => {}
        }
    }
    out.replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&amp;", "&")
}

impl Document for MemoryDocument {
    fn contains(&self, id: &str) -> bool {
        self.nodes().elements.contains_key(id)
    }

    fn ids_with_class(&self, class: &str) -> Vec<String> {
        self.nodes()
            .ordered()
            .filter(|(_, el)| el.classes.iter().any(|c| c == class))
            .map(|(id, _)| id.clone())
            .collect()
    }

    fn ids_with_attr(&self, name: &str, value: &str) -> Vec<String> {
        self.nodes()
            .ordered()
            .filter(|(_, el)| el.attrs.get(name).map(String::as_str) == Some(value))
            .map(|(id, _)| id.clone())
            .collect()
    }

    fn attr(&self, id: &str, name: &str) -> Option<String> {
        self.nodes()
            .elements
            .get(id)
            .and_then(|el| el.attrs.get(name).cloned())
    }

    fn set_attr(&self, id: &str, name: &str, value: &str) {
        self.with_element(id, |el| {
            el.attrs.insert(name.to_string(), value.to_string());
        });
    }

    fn add_class(&self, id: &str, class: &str) {
        self.with_element(id, |el| {
            if !el.classes.iter().any(|c| c == class) {
                el.classes.push(class.to_string());
            }
        });
    }

    fn remove_class(&self, id: &str, class: &str) {
        self.with_element(id, |el| el.classes.retain(|c| c != class));
    }

    fn has_class(&self, id: &str, class: &str) -> bool {
        self.nodes()
            .elements
            .get(id)
            .map(|el| el.classes.iter().any(|c| c == class))
            .unwrap_or(false)
    }

    fn set_class_name(&self, id: &str, class_name: &str) {
        self.with_element(id, |el| {
            el.classes = class_name.split_whitespace().map(str::to_string).collect();
        });
    }

    fn set_text(&self, id: &str, text: &str) {
        self.with_element(id, |el| {
            el.text = text.to_string();
            el.inner_html = esc_html(text);
        });
    }

    fn text(&self, id: &str) -> Option<String> {
        self.nodes().elements.get(id).map(|el| el.text.clone())
    }

    fn set_inner_html(&self, id: &str, html: &str) {
        self.with_element(id, |el| {
            el.inner_html = html.to_string();
            el.text = strip_tags(html);
            if el.tag == "select" {
                el.value = first_option_value(html).unwrap_or_default();
            }
        });
    }

    fn inner_html(&self, id: &str) -> Option<String> {
        self.nodes().elements.get(id).map(|el| el.inner_html.clone())
    }

    fn set_visible(&self, id: &str, visible: bool) {
        self.with_element(id, |el| el.hidden = !visible);
    }

    fn is_visible(&self, id: &str) -> bool {
        self.nodes()
            .elements
            .get(id)
            .map(|el| !el.hidden)
            .unwrap_or(false)
    }

    fn set_style(&self, id: &str, property: &str, value: &str) {
        self.with_element(id, |el| {
            el.styles.insert(property.to_string(), value.to_string());
        });
    }

    fn style(&self, id: &str, property: &str) -> Option<String> {
        self.nodes()
            .elements
            .get(id)
            .and_then(|el| el.styles.get(property).cloned())
    }

    fn value(&self, id: &str) -> Option<String> {
        self.nodes().elements.get(id).map(|el| el.value.clone())
    }

    fn set_value(&self, id: &str, value: &str) {
        self.with_element(id, |el| el.value = value.to_string());
    }

    fn reset_form(&self, form_id: &str) {
        let mut nodes = self.nodes();
        for el in nodes.elements.values_mut() {
            if el.form.as_deref() == Some(form_id) {
                el.value = el.default_value.clone();
            }
        }
    }

    fn set_disabled(&self, id: &str, disabled: bool) {
        self.with_element(id, |el| el.disabled = disabled);
    }

    fn is_disabled(&self, id: &str) -> bool {
        self.nodes()
            .elements
            .get(id)
            .map(|el| el.disabled)
            .unwrap_or(false)
    }

    fn scroll_to_top(&self) {
        self.nodes().scroll_resets += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_class_queries_follow_document_order() {
        let doc = MemoryDocument::new();
        doc.insert("b", Element::new("div").class("page"));
        doc.insert("a", Element::new("div").class("page"));
        assert_eq!(doc.ids_with_class("page"), vec!["b", "a"]);
    }

    #[test]
    fn test_set_text_never_produces_markup() {
        let doc = MemoryDocument::new();
        doc.insert("label", Element::new("div"));
        doc.set_text("label", "<b>x</b>");
        assert_eq!(doc.text("label").unwrap(), "<b>x</b>");
        assert_eq!(doc.inner_html("label").unwrap(), "&lt;b&gt;x&lt;/b&gt;");
    }

    #[test]
    fn test_inner_html_text_is_decoded() {
        let doc = MemoryDocument::new();
        doc.insert("box", Element::new("div"));
        doc.set_inner_html("box", "<p>Error: a &amp; b</p>");
        assert_eq!(doc.text("box").unwrap(), "Error: a & b");
    }

    #[test]
    fn test_select_takes_first_option() {
        let doc = MemoryDocument::new();
        doc.insert("sel", Element::new("select"));
        doc.set_inner_html("sel", r#"<option value="4">Head</option><option value="7">Knee</option>"#);
        assert_eq!(doc.value("sel").unwrap(), "4");
    }

    #[test]
    fn test_reset_form_restores_defaults() {
        let doc = MemoryDocument::new();
        doc.insert("f", Element::new("form"));
        doc.insert("f-a", Element::new("input").field("f", "mild"));
        doc.insert("other", Element::new("input").field("g", ""));
        doc.set_value("f-a", "severe");
        doc.set_value("other", "kept");

        doc.reset_form("f");

        assert_eq!(doc.value("f-a").unwrap(), "mild");
        assert_eq!(doc.value("other").unwrap(), "kept");
    }

    #[test]
    fn test_missing_ids_are_ignored() {
        let doc = MemoryDocument::new();
        let before = doc.snapshot();
        doc.add_class("ghost", "active");
        doc.set_inner_html("ghost", "<p></p>");
        assert_eq!(doc.snapshot(), before);
        assert!(!doc.is_visible("ghost"));
    }

    #[test]
    fn test_toggle_class_default_method() {
        let doc = MemoryDocument::new();
        doc.insert("nav", Element::new("nav"));
        doc.toggle_class("nav", "open");
        assert!(doc.has_class("nav", "open"));
        doc.toggle_class("nav", "open");
        assert!(!doc.has_class("nav", "open"));
    }

    #[test]
    fn test_app_shell_layout() {
        let doc = MemoryDocument::app_shell();
        assert_eq!(doc.ids_with_class("page").len(), Page::ALL.len());
        assert!(doc.has_class("page-home", "active"));
        assert!(!doc.is_visible("admin-nav-link"));
        assert_eq!(doc.ids_with_attr("data-part", "knee").len(), 2);
        assert_eq!(doc.value(fields::ILLNESS_SEVERITY).unwrap(), "mild");
    }
}
