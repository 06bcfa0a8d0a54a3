//! Person record

use roster_types::User;

/// One person entry in the record store
///
/// The full name is derived once at construction and never recomputed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    id: u64,
    first_name: String,
    last_name: String,
    name: String,
    age: u32,
    gender: String,
    bio: String,
}

impl Record {
    /// Create a record, deriving its full name as `first + " " + last`
    pub fn new(
        id: u64,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        age: u32,
        gender: impl Into<String>,
        bio: impl Into<String>,
    ) -> Self {
        let first_name = first_name.into();
        let last_name = last_name.into();
        let name = format!("{} {}", first_name, last_name);
        Self {
            id,
            first_name,
            last_name,
            name,
            age,
            gender: gender.into(),
            bio: bio.into(),
        }
    }

    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    /// Derived full name
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn age(&self) -> u32 {
        self.age
    }

    pub fn gender(&self) -> &str {
        &self.gender
    }

    pub fn bio(&self) -> &str {
        &self.bio
    }

    /// Whether the full name or bio contains `needle` (case-sensitive)
    pub fn matches(&self, needle: &str) -> bool {
        self.name.contains(needle) || self.bio.contains(needle)
    }

    /// Project to the public wire shape
    pub fn to_user(&self) -> User {
        User {
            id: self.id,
            name: self.name.clone(),
            age: self.age,
            gender: self.gender.clone(),
            bio: self.bio.clone(),
        }
    }
}
