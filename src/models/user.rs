use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct User {
    pub id: i64,
    pub cd: String,
    pub name: String,
    pub email: String,
    pub is_active: bool,
}

impl User {
    pub fn state_label(&self) -> &'static str {
        if self.is_active { "active" } else { "inactive" }
    }
}
