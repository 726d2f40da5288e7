/// One row of a directory search: a client joined with one of its phones.
/// Clients without phones appear once with `phone_number` unset.
#[derive(sqlx::FromRow, Debug, Clone, PartialEq, Eq)]
pub struct ClientRecord {
    pub client_id: i32,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone_number: Option<String>,
}
