use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::RegistrarResult;
use crate::validation;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Department {
    pub id: Uuid,
    pub name: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DepartmentRequest {
    pub name: String,
}

impl DepartmentRequest {
    pub fn validated(self) -> RegistrarResult<Self> {
        Ok(Self {
            name: validation::required("name", &self.name)?,
        })
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Faculty {
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub department_id: Option<Uuid>,
    pub created_at: DateTime<Utc>,
}

/// Faculty member as listed, with the department name resolved.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FacultyView {
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub department_id: Option<Uuid>,
    pub department_name: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FacultyRequest {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub department_id: Option<Uuid>,
}

impl FacultyRequest {
    pub fn validated(self) -> RegistrarResult<Self> {
        Ok(Self {
            first_name: validation::required("first_name", &self.first_name)?,
            last_name: validation::required("last_name", &self.last_name)?,
            email: validation::email("email", &self.email)?,
            department_id: self.department_id,
        })
    }
}
