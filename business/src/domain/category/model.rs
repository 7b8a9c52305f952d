use serde::{Deserialize, Serialize};

use super::errors::CategoryError;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: i64,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewCategory {
    pub name: String,
}

impl NewCategory {
    pub fn new(name: String) -> Result<Self, CategoryError> {
        if name.trim().is_empty() {
            return Err(CategoryError::NameEmpty);
        }
        Ok(Self { name })
    }
}

impl Category {
    pub fn rename(&self, name: String) -> Result<Self, CategoryError> {
        let renamed = NewCategory::new(name)?;
        Ok(Self {
            id: self.id,
            name: renamed.name,
        })
    }
}
