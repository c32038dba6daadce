#[derive(Debug, Clone, Default, Eq, PartialEq)]
pub struct Contact {
    pub phone: Option<String>,
    pub email: Option<String>,
}

impl Contact {
    pub fn is_empty(&self) -> bool {
        let Self { phone, email } = self;
        phone.is_none() && email.is_none()
    }
}
