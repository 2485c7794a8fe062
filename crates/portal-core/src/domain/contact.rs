// ============================================================================
// Portal Core - Contact Entity
// File: crates/portal-core/src/domain/contact.rs
// Description: Contact form submission and the stored record
// ============================================================================

use portal_shared::{new_id, EntityId};
use serde::{Deserialize, Serialize};

/// Field values of a contact form submission, before an id is assigned.
///
/// No validation is applied: empty strings are valid values.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewContact {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl NewContact {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            message: message.into(),
        }
    }
}

/// A stored contact submission. Serialized as `{ id, name, email, message }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactRecord {
    pub id: EntityId,
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactRecord {
    /// Creates a record with a freshly generated v4 id. Fields are copied verbatim.
    pub fn create(contact: NewContact) -> Self {
        Self {
            id: new_id(),
            name: contact.name,
            email: contact.email,
            message: contact.message,
        }
    }

    pub fn fields(&self) -> NewContact {
        NewContact {
            name: self.name.clone(),
            email: self.email.clone(),
            message: self.message.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_copies_fields_verbatim() {
        let record = ContactRecord::create(NewContact::new("", " Jane ", "hi\n"));

        assert_eq!(record.name, "");
        assert_eq!(record.email, " Jane ");
        assert_eq!(record.message, "hi\n");
        assert_eq!(record.id.get_version_num(), 4);
    }

    #[test]
    fn test_identical_submissions_get_distinct_ids() {
        let contact = NewContact::new("John Doe", "john.doe@example.com", "hello");
        let first = ContactRecord::create(contact.clone());
        let second = ContactRecord::create(contact);

        assert_ne!(first.id, second.id);
        assert_eq!(first.fields(), second.fields());
    }

    #[test]
    fn test_record_wire_shape() {
        let record = ContactRecord::create(NewContact::new("a", "b", "c"));
        let value = serde_json::to_value(&record).unwrap();
        let object = value.as_object().unwrap();

        assert_eq!(object.len(), 4);
        assert_eq!(object["id"], record.id.to_string());
        assert_eq!(object["name"], "a");
        assert_eq!(object["email"], "b");
        assert_eq!(object["message"], "c");
    }
}
