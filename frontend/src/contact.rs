//! Local state of the contact form. Nothing is sent anywhere.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactField {
    Name,
    Email,
    Project,
    Message,
}

impl ContactField {
    pub const ALL: [ContactField; 4] = [
        ContactField::Name,
        ContactField::Email,
        ContactField::Project,
        ContactField::Message,
    ];

    /// Value of the input's `name` attribute.
    pub fn as_str(self) -> &'static str {
        match self {
            ContactField::Name => "name",
            ContactField::Email => "email",
            ContactField::Project => "project",
            ContactField::Message => "message",
        }
    }

    pub fn input_type(self) -> &'static str {
        match self {
            ContactField::Email => "email",
            _ => "text",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub project: String,
    pub message: String,
}

impl ContactForm {
    pub fn value(&self, field: ContactField) -> &str {
        match field {
            ContactField::Name => &self.name,
            ContactField::Email => &self.email,
            ContactField::Project => &self.project,
            ContactField::Message => &self.message,
        }
    }

    /// Copy with one field replaced, for handing to a state setter.
    pub fn with(&self, field: ContactField, value: String) -> Self {
        let mut next = self.clone();
        match field {
            ContactField::Name => next.name = value,
            ContactField::Email => next.email = value,
            ContactField::Project => next.project = value,
            ContactField::Message => next.message = value,
        }
        next
    }

    pub fn is_empty(&self) -> bool {
        ContactField::ALL.iter().all(|field| self.value(*field).is_empty())
    }
}
