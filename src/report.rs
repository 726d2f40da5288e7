//! Outcomes of directory operations. `Display` renders the status lines the
//! binary prints to stdout.

use std::fmt;

use crate::models::{ClientField, ClientRecord};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientAdded {
    pub client_id: i32,
    pub first_name: String,
    pub last_name: String,
    pub phone: Option<PhoneAdded>,
}

impl fmt::Display for ClientAdded {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Client {} {} added in the database under id {}",
            self.first_name, self.last_name, self.client_id
        )?;
        if let Some(phone) = &self.phone {
            write!(f, "\n{phone}")?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct PhoneAdded {
    pub phone_number: String,
    pub client_id: i32,
}

impl fmt::Display for PhoneAdded {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Phone number {} for client with id {} added to the database",
            self.phone_number, self.client_id
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldChange {
    /// `rows` is how many rows took the new value; only the phone path can exceed one.
    Changed { value: String, rows: u64 },
    NotFound,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateReport {
    pub client_id: i32,
    pub changes: Vec<(ClientField, FieldChange)>,
}

impl UpdateReport {
    pub fn change(&self, field: ClientField) -> Option<&FieldChange> {
        self.changes
            .iter()
            .find(|(f, _)| *f == field)
            .map(|(_, change)| change)
    }
}

impl fmt::Display for UpdateReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.changes.is_empty() {
            return write!(f, "No changes requested for client with id {}", self.client_id);
        }

        for (i, (field, change)) in self.changes.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            match change {
                FieldChange::Changed { value, rows } if *rows > 1 => write!(
                    f,
                    "Client's {} has been changed to {value} ({rows} rows)",
                    field.label()
                )?,
                FieldChange::Changed { value, .. } => {
                    write!(f, "Client's {} has been changed to {value}", field.label())?
                }
                FieldChange::NotFound => {
                    write!(f, "Client with id: {} not found", self.client_id)?
                }
            }
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PhoneDeletion {
    Deleted { phone_number: String },
    NotFound,
}

impl fmt::Display for PhoneDeletion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PhoneDeletion::Deleted { phone_number } => {
                write!(f, "Client's phone number {phone_number} successfully removed")
            }
            PhoneDeletion::NotFound => f.write_str("Number not found in database"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClientDeletion {
    Deleted { client_id: i32, phones_removed: u64 },
    NotFound,
}

impl fmt::Display for ClientDeletion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClientDeletion::Deleted { client_id, .. } => {
                write!(f, "Client with id {client_id} successfully removed")
            }
            ClientDeletion::NotFound => f.write_str("Client was not found in the database"),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchResult {
    pub rows: Vec<ClientRecord>,
}

impl SearchResult {
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }
}

impl fmt::Display for SearchResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.rows.is_empty() {
            return f.write_str("Client with the entered data is not in the database");
        }

        for (i, row) in self.rows.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(
                f,
                "{} {} <{}> {}",
                row.first_name,
                row.last_name,
                row.email,
                row.phone_number.as_deref().unwrap_or("(no phone)")
            )?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn client_added_includes_phone_line() {
        let report = ClientAdded {
            client_id: 1,
            first_name: "Joe".into(),
            last_name: "Fearless".into(),
            phone: Some(PhoneAdded {
                phone_number: "+79266847233".into(),
                client_id: 1,
            }),
        };
        assert_eq!(
            report.to_string(),
            "Client Joe Fearless added in the database under id 1\n\
             Phone number +79266847233 for client with id 1 added to the database"
        );
    }

    #[test]
    fn update_report_has_one_line_per_field() {
        let report = UpdateReport {
            client_id: 90,
            changes: vec![
                (
                    ClientField::FirstName,
                    FieldChange::Changed {
                        value: "John".into(),
                        rows: 1,
                    },
                ),
                (ClientField::Phone, FieldChange::NotFound),
            ],
        };
        assert_eq!(
            report.to_string(),
            "Client's first name has been changed to John\nClient with id: 90 not found"
        );
    }

    #[test]
    fn empty_search_reports_not_found() {
        assert_eq!(
            SearchResult::default().to_string(),
            "Client with the entered data is not in the database"
        );
    }

    #[test]
    fn search_rows_mark_missing_phone() {
        let result = SearchResult {
            rows: vec![ClientRecord {
                client_id: 2,
                first_name: "Maria".into(),
                last_name: "Unambiguous".into(),
                email: "soup88@mail.com".into(),
                phone_number: None,
            }],
        };
        assert_eq!(
            result.to_string(),
            "Maria Unambiguous <soup88@mail.com> (no phone)"
        );
    }
}
