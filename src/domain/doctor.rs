use serde::{Deserialize, Serialize};

/// Department a doctor belongs to.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct Department {
    pub name: String,
}

/// Doctor profile as returned by the clinic API.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct Doctor {
    pub id: i32,
    #[serde(default)]
    pub avatar_url: Option<String>,
    pub full_name: String,
    #[serde(default)]
    pub specialization: String,
    #[serde(default)]
    pub department: Department,
}
