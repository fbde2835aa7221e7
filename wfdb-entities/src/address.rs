#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Address {
    pub street               : String,
    pub city                 : String,
    pub state                : String,
    pub zip                  : String,
    /// Free-text directions, e.g. "On the south jetty"
    pub location_description : String,
}

impl Address {
    pub fn is_empty(&self) -> bool {
        self.street.is_empty()
            && self.city.is_empty()
            && self.state.is_empty()
            && self.zip.is_empty()
            && self.location_description.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_address() {
        assert!(Address::default().is_empty());
        let a = Address {
            city: "Newport".into(),
            ..Default::default()
        };
        assert!(!a.is_empty());
    }
}
