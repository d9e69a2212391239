#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Address {
    pub street1    : Option<String>,
    pub street2    : Option<String>,
    pub street3    : Option<String>,
    pub city       : Option<String>,
    pub state      : Option<String>,
    pub postalcode : Option<String>,
    pub country    : Option<String>,
}

impl Address {
    pub fn is_empty(&self) -> bool {
        self.street1.is_none()
            && self.street2.is_none()
            && self.street3.is_none()
            && self.city.is_none()
            && self.state.is_none()
            && self.postalcode.is_none()
            && self.country.is_none()
    }
}
