use crate::domain::error::DomainError;
use crate::domain::profile::UserProfile;
use serde::{Deserialize, Serialize};
use std::cmp;
use std::fmt;
use std::str::FromStr;

pub const DEFAULT_LIMIT: u64 = 100;

fn default_limit() -> u64 {
    DEFAULT_LIMIT
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListQuery {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ordering: Option<String>,
    #[serde(default)]
    pub offset: u64,
    #[serde(default = "default_limit")]
    pub limit: u64,
}

impl Default for ListQuery {
    fn default() -> Self {
        Self {
            ordering: None,
            offset: 0,
            limit: DEFAULT_LIMIT,
        }
    }
}

impl ListQuery {
    pub fn window(offset: u64, limit: u64) -> Self {
        Self {
            ordering: None,
            offset,
            limit,
        }
    }

    pub fn with_ordering(mut self, ordering: impl Into<String>) -> Self {
        self.ordering = Some(ordering.into());
        self
    }

    // A missing or empty expression means no ordering
    pub fn order_by(&self) -> Result<Option<OrderBy>, DomainError> {
        match self.ordering.as_deref() {
            None | Some("") => Ok(None),
            Some(expr) => expr.parse().map(Some),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserFilter {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_superuser: Option<bool>,
}

impl UserFilter {
    pub fn is_empty(&self) -> bool {
        self.full_name.is_none()
            && self.email.is_none()
            && self.is_active.is_none()
            && self.is_superuser.is_none()
    }

    pub fn matches(&self, profile: &UserProfile) -> bool {
        self.full_name
            .as_ref()
            .is_none_or(|name| *name == profile.full_name)
            && self.email.as_ref().is_none_or(|email| *email == profile.email)
            && self.is_active.is_none_or(|active| active == profile.is_active)
            && self
                .is_superuser
                .is_none_or(|superuser| superuser == profile.is_superuser)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProfileField {
    Id,
    FullName,
    Email,
    IsActive,
    IsSuperuser,
}

impl ProfileField {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProfileField::Id => "id",
            ProfileField::FullName => "full_name",
            ProfileField::Email => "email",
            ProfileField::IsActive => "is_active",
            ProfileField::IsSuperuser => "is_superuser",
        }
    }

    fn compare(&self, a: &UserProfile, b: &UserProfile) -> cmp::Ordering {
        match self {
            ProfileField::Id => a.id.cmp(&b.id),
            ProfileField::FullName => a.full_name.cmp(&b.full_name),
            ProfileField::Email => a.email.cmp(&b.email),
            ProfileField::IsActive => a.is_active.cmp(&b.is_active),
            ProfileField::IsSuperuser => a.is_superuser.cmp(&b.is_superuser),
        }
    }
}

impl FromStr for ProfileField {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "id" => Ok(ProfileField::Id),
            "full_name" => Ok(ProfileField::FullName),
            "email" => Ok(ProfileField::Email),
            "is_active" => Ok(ProfileField::IsActive),
            "is_superuser" => Ok(ProfileField::IsSuperuser),
            other => Err(DomainError::InvalidOrdering(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortKey {
    pub field: ProfileField,
    pub descending: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderBy {
    keys: Vec<SortKey>,
}

impl OrderBy {
    pub fn keys(&self) -> &[SortKey] {
        &self.keys
    }

    // Later keys only break ties
    pub fn compare(&self, a: &UserProfile, b: &UserProfile) -> cmp::Ordering {
        self.keys
            .iter()
            .fold(cmp::Ordering::Equal, |acc, key| {
                acc.then_with(|| {
                    let ord = key.field.compare(a, b);
                    if key.descending { ord.reverse() } else { ord }
                })
            })
    }
}

impl FromStr for OrderBy {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let keys = s
            .split(',')
            .map(|segment| {
                let (name, descending) = match segment.strip_prefix('-') {
                    Some(rest) => (rest, true),
                    None => (segment, false),
                };
                if name.is_empty() {
                    return Err(DomainError::InvalidOrdering(segment.to_string()));
                }
                Ok(SortKey {
                    field: name.parse()?,
                    descending,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { keys })
    }
}

impl fmt::Display for OrderBy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, key) in self.keys.iter().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            if key.descending {
                f.write_str("-")?;
            }
            f.write_str(key.field.as_str())?;
        }
        Ok(())
    }
}
