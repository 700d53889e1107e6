use std::borrow::Cow;

use typed_builder::TypedBuilder;

/// Who pays a job, as it should appear on a financial statement.
#[derive(Clone, Debug, Eq, PartialEq, Hash, TypedBuilder)]
pub struct Employer<'a> {
    #[builder(setter(into))]
    pub name: Cow<'a, str>,

    /// Address on one line.
    #[builder(default, setter(into, strip_option))]
    pub address: Option<Cow<'a, str>>,

    #[builder(default, setter(into, strip_option))]
    pub phone: Option<Cow<'a, str>>,
}

impl<'a> Employer<'a> {
    /// The name, followed by a colon and the comma-joined address and phone
    /// when either is known. Blank address or phone values are ignored.
    pub fn name_address_phone(&self) -> String {
        let details: Vec<&str> = [self.address.as_deref(), self.phone.as_deref()]
            .iter()
            .flatten()
            .map(|s| s.trim())
            .filter(|s| !s.is_empty())
            .collect();
        if details.is_empty() {
            self.name.to_string()
        } else {
            format!("{}: {}", self.name, details.join(", "))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn name_address_phone() {
        let name_only = Employer::builder().name("Acme").build();
        assert_eq!("Acme", name_only.name_address_phone());

        let address = Employer::builder()
            .name("Acme")
            .address("1 Main St, Boston, MA 02110")
            .build();
        assert_eq!("Acme: 1 Main St, Boston, MA 02110", address.name_address_phone());

        let phone = Employer::builder().name("Acme").phone("617-555-0100").build();
        assert_eq!("Acme: 617-555-0100", phone.name_address_phone());

        let both = Employer::builder()
            .name("Acme")
            .address("1 Main St")
            .phone("617-555-0100")
            .build();
        assert_eq!("Acme: 1 Main St, 617-555-0100", both.name_address_phone());

        let blank = Employer::builder().name("Acme").address("  ").build();
        assert_eq!("Acme", blank.name_address_phone());
    }
}
