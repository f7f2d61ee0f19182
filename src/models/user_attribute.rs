use serde::Serialize;

/// A kind of attribute users can carry (e.g. department, role).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AttributeType {
    pub id: i64,
    pub code: String,
    pub name: String,
    pub sort_order: i64,
    pub option_count: i64,
}

/// One of the values an attribute type allows.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AttributeOption {
    pub id: i64,
    pub type_id: i64,
    pub code: String,
    pub name: String,
    pub sort_order: i64,
}

/// The option a user holds for one attribute type.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UserAttribute {
    pub type_code: String,
    pub type_name: String,
    pub option_code: String,
    pub option_name: String,
}
