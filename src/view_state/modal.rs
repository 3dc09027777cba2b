//! Overlay forms of the admin panel.

use std::str::FromStr;

use super::AdminResource;

/// A create form shown as a modal overlay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Modal {
    Illness,
    Doctor,
    Medicine,
    Tip,
}

impl Modal {
    pub const ALL: [Modal; 4] = [Modal::Illness, Modal::Doctor, Modal::Medicine, Modal::Tip];

    pub const fn name(self) -> &'static str {
        match self {
            Modal::Illness => "illness",
            Modal::Doctor => "doctor",
            Modal::Medicine => "medicine",
            Modal::Tip => "tip",
        }
    }

    /// Overlay element id.
    pub fn element_id(self) -> String {
        format!("{}-modal", self.name())
    }

    /// Id of the form inside the overlay.
    pub fn form_id(self) -> String {
        format!("{}-form", self.name())
    }

    pub const fn resource(self) -> AdminResource {
        match self {
            Modal::Illness => AdminResource::Illnesses,
            Modal::Doctor => AdminResource::Doctors,
            Modal::Medicine => AdminResource::Medicines,
            Modal::Tip => AdminResource::Tips,
        }
    }

    /// Modal owning an overlay element id, if any.
    pub fn from_element_id(id: &str) -> Option<Modal> {
        id.strip_suffix("-modal").and_then(|name| name.parse().ok())
    }
}

/// Error for modal names with no create form.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown modal: {0}")]
pub struct UnknownModal(pub String);

impl FromStr for Modal {
    type Err = UnknownModal;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Modal::ALL
            .into_iter()
            .find(|modal| modal.name() == s)
            .ok_or_else(|| UnknownModal(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_modal_error() {
        let err = "message".parse::<Modal>().unwrap_err();
        assert_eq!(err.to_string(), "unknown modal: message");
    }

    #[test]
    fn test_ids() {
        assert_eq!(Modal::Medicine.element_id(), "medicine-modal");
        assert_eq!(Modal::Tip.form_id(), "tip-form");
    }

    #[test]
    fn test_from_element_id() {
        assert_eq!(Modal::from_element_id("doctor-modal"), Some(Modal::Doctor));
        assert_eq!(Modal::from_element_id("doctor-form"), None);
        assert_eq!(Modal::from_element_id("nurse-modal"), None);
    }
}
