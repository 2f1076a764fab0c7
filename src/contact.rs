use serde::{Deserialize, Serialize};

/// What the contact form hands to whoever delivers it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactMessage {
    pub fn new(name: &str, email: &str, message: &str) -> Self {
        Self {
            name: name.trim().to_string(),
            email: email.trim().to_string(),
            message: message.trim().to_string(),
        }
    }

    /// Mirrors the `required` attribute on all three fields.
    pub fn is_complete(&self) -> bool {
        [&self.name, &self.email, &self.message]
            .iter()
            .all(|field| !field.trim().is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn trims_fields() {
        let msg = ContactMessage::new("  Lan ", "lan@example.vn\n", " Xin chào ");
        assert_eq!(msg, ContactMessage {
            name: "Lan".to_string(),
            email: "lan@example.vn".to_string(),
            message: "Xin chào".to_string(),
        });
    }

    #[test]
    fn blank_fields_are_incomplete() {
        assert!(ContactMessage::new("Lan", "lan@example.vn", "Hi").is_complete());
        assert!(!ContactMessage::new("   ", "lan@example.vn", "Hi").is_complete());
        assert!(!ContactMessage::new("Lan", "", "Hi").is_complete());
        assert!(!ContactMessage::new("Lan", "lan@example.vn", "\t").is_complete());
        assert!(!ContactMessage::default().is_complete());
    }

    #[test]
    fn handoff_payload_has_three_keys() {
        let msg = ContactMessage::new("Lan", "lan@example.vn", "Hi");
        let value = serde_json::to_value(&msg).unwrap();
        assert_eq!(value, json!({
            "name": "Lan",
            "email": "lan@example.vn",
            "message": "Hi",
        }));
    }
}
