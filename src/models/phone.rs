#[derive(sqlx::FromRow, Debug, Clone, PartialEq, Eq)]
pub struct Phone {
    pub phone_id: i32,
    pub phone_number: Option<String>,
    pub client_id: Option<i32>,
}
