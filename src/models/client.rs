#[derive(sqlx::FromRow, Debug, Clone, PartialEq, Eq)]
pub struct Client {
    pub client_id: i32,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
}

/// A column `update_client` can change. `Phone` lives in the `phone` table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClientField {
    FirstName,
    LastName,
    Email,
    Phone,
}

impl ClientField {
    pub(crate) fn table(self) -> &'static str {
        match self {
            ClientField::Phone => "phone",
            _ => "client",
        }
    }

    pub(crate) fn column(self) -> &'static str {
        match self {
            ClientField::FirstName => "first_name",
            ClientField::LastName => "last_name",
            ClientField::Email => "email",
            ClientField::Phone => "phone_number",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ClientField::FirstName => "first name",
            ClientField::LastName => "last name",
            ClientField::Email => "email",
            ClientField::Phone => "phone number",
        }
    }
}

/// Declares a struct holding optional values for the four searchable and
/// updatable client fields, with a builder setter per field.
macro_rules! client_fields {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Default, PartialEq, Eq)]
        pub struct $name {
            pub first_name: Option<String>,
            pub last_name: Option<String>,
            pub email: Option<String>,
            pub phone: Option<String>,
        }

        impl $name {
            pub fn new() -> Self {
                Self::default()
            }

            pub fn first_name(mut self, value: impl Into<String>) -> Self {
                self.first_name = Some(value.into());
                self
            }

            pub fn last_name(mut self, value: impl Into<String>) -> Self {
                self.last_name = Some(value.into());
                self
            }

            pub fn email(mut self, value: impl Into<String>) -> Self {
                self.email = Some(value.into());
                self
            }

            pub fn phone(mut self, value: impl Into<String>) -> Self {
                self.phone = Some(value.into());
                self
            }
        }
    };
}

client_fields! {
    /// The set of fields to change on one client. Absent fields are left alone.
    ClientUpdate
}

client_fields! {
    /// Search criteria for `find_client`. A row matches when any supplied field is equal.
    ClientFilter
}

impl ClientUpdate {
    pub fn is_empty(&self) -> bool {
        self.changes().next().is_none()
    }

    /// Requested changes in a fixed order: first name, last name, email, phone.
    pub fn changes(&self) -> impl Iterator<Item = (ClientField, &str)> {
        [
            (ClientField::FirstName, self.first_name.as_deref()),
            (ClientField::LastName, self.last_name.as_deref()),
            (ClientField::Email, self.email.as_deref()),
            (ClientField::Phone, self.phone.as_deref()),
        ]
        .into_iter()
        .filter_map(|(field, value)| value.map(|v| (field, v)))
    }
}

impl ClientFilter {
    pub fn is_empty(&self) -> bool {
        self.criteria().next().is_none()
    }

    pub(crate) fn criteria(&self) -> impl Iterator<Item = (&'static str, &str)> {
        [
            ("client.first_name", self.first_name.as_deref()),
            ("client.last_name", self.last_name.as_deref()),
            ("client.email", self.email.as_deref()),
            ("phone.phone_number", self.phone.as_deref()),
        ]
        .into_iter()
        .filter_map(|(column, value)| value.map(|v| (column, v)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn update_lists_only_supplied_fields_in_order() {
        let update = ClientUpdate::new().phone("+70000000000").first_name("John");
        let changes: Vec<_> = update.changes().collect();
        assert_eq!(
            changes,
            vec![
                (ClientField::FirstName, "John"),
                (ClientField::Phone, "+70000000000"),
            ]
        );
    }

    #[test]
    fn builders_fill_the_matching_field() {
        let filter = ClientFilter::new().last_name("Best").phone("+79266925128");
        assert_eq!(filter.first_name, None);
        assert_eq!(filter.last_name.as_deref(), Some("Best"));
        assert_eq!(filter.phone.as_deref(), Some("+79266925128"));

        let update = ClientUpdate::new().email("kurt@mail.ru");
        assert_eq!(update.email.as_deref(), Some("kurt@mail.ru"));
        assert!(ClientUpdate::new().is_empty());
    }

    #[test]
    fn empty_filter_has_no_criteria() {
        assert!(ClientFilter::new().is_empty());
        assert!(!ClientFilter::new().email("a@b.c").is_empty());
    }
}
