#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Contact {
    /// The display name of a person
    pub name: String,

    /// A website, blank if unknown
    pub website: String,

    /// An e-mail address to get in contact, blank if unknown
    pub email: String,

    /// A phone number to get in contact
    pub phone: Option<String>,
}

impl Contact {
    pub fn is_empty(&self) -> bool {
        self.website.is_empty() && self.email.is_empty() && self.phone.is_none()
    }
}

#[cfg(test)]
pub mod tests {
    use super::*;

    #[test]
    fn empty_contact() {
        assert!(Contact::default().is_empty());
        let c = Contact {
            email: "foo@bar".into(),
            ..Default::default()
        };
        assert!(!c.is_empty());
        let c = Contact {
            phone: Some("+15414567890".into()),
            ..Default::default()
        };
        assert!(!c.is_empty());
    }
}
