use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Employee {
    pub id: i64,            // ⇔ employees.id (assigned by storage)
    pub last_name: String,  // ⇔ employees.last_name
    pub first_name: String, // ⇔ employees.first_name
    pub email: String,      // ⇔ employees.email (login)
    #[serde(skip_serializing)]
    pub password: String, // ⇔ employees.password
}

impl Employee {
    pub fn new(id: i64, last_name: &str, first_name: &str, email: &str, password: &str) -> Self {
        Self {
            id,
            last_name: last_name.to_string(),
            first_name: first_name.to_string(),
            email: email.to_string(),
            password: password.to_string(),
        }
    }

    /// Snapshot used when storage has no row for the requested id.
    pub fn placeholder(id: i64) -> Self {
        Self::new(id, "", "", "", "")
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// True when this record is the administrator, matched either by the
    /// reserved id or by the reserved name marker.
    pub fn is_admin(&self, admin_id: i64, admin_marker: &str) -> bool {
        self.id == admin_id || self.first_name == admin_marker || self.last_name == admin_marker
    }
}
