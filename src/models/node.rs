//! Raw tree node model
//!
//! A `RawNode` is one entry of the tree document exactly as exported, before any
//! identity normalization.

use serde::Deserialize;

use super::serde::{deserialize_id_list, deserialize_lenient_string};

/// One genealogy record from the tree document
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct RawNode {
    /// Internal tree node id
    #[serde(default, deserialize_with = "deserialize_lenient_string")]
    pub id: Option<String>,
    /// External profile id, present for people with their own profile
    #[serde(default, deserialize_with = "deserialize_lenient_string")]
    pub profile_id: Option<String>,
    #[serde(default, deserialize_with = "deserialize_lenient_string")]
    pub first_name: Option<String>,
    #[serde(default, deserialize_with = "deserialize_lenient_string")]
    pub last_name: Option<String>,
    #[serde(default, deserialize_with = "deserialize_lenient_string")]
    pub sex: Option<String>,
    #[serde(default, deserialize_with = "deserialize_lenient_string")]
    pub image: Option<String>,
    #[serde(default, deserialize_with = "deserialize_lenient_string")]
    pub profile_image_url: Option<String>,
    /// Links to this node's parents, by either kind of id
    #[serde(default, deserialize_with = "deserialize_id_list")]
    pub parent_ids: Vec<String>,
    /// Links to this node's partners, by either kind of id
    #[serde(default, deserialize_with = "deserialize_id_list")]
    pub partner_ids: Vec<String>,
}

impl RawNode {
    /// Create a node with only an internal id
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: Some(id.into()),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_profile_id(mut self, profile_id: impl Into<String>) -> Self {
        self.profile_id = Some(profile_id.into());
        self
    }

    #[must_use]
    pub fn with_name(mut self, first: impl Into<String>, last: impl Into<String>) -> Self {
        self.first_name = Some(first.into());
        self.last_name = Some(last.into());
        self
    }

    #[must_use]
    pub fn with_sex(mut self, sex: impl Into<String>) -> Self {
        self.sex = Some(sex.into());
        self
    }

    #[must_use]
    pub fn with_parents<I, S>(mut self, parents: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.parent_ids = parents.into_iter().map(Into::into).collect();
        self
    }

    #[must_use]
    pub fn with_partners<I, S>(mut self, partners: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.partner_ids = partners.into_iter().map(Into::into).collect();
        self
    }

    #[must_use]
    pub fn with_image(mut self, url: impl Into<String>) -> Self {
        self.profile_image_url = Some(url.into());
        self
    }

    /// Internal id, ignoring empty strings
    #[must_use]
    pub fn internal_id(&self) -> Option<&str> {
        non_empty(self.id.as_deref())
    }

    /// External profile id, ignoring empty strings
    #[must_use]
    pub fn external_id(&self) -> Option<&str> {
        non_empty(self.profile_id.as_deref())
    }

    /// Key this node is known by after normalization
    ///
    /// The external profile id wins over the internal id. `None` means the node is
    /// malformed and will be dropped.
    #[must_use]
    pub fn canonical_key(&self) -> Option<&str> {
        self.external_id().or_else(|| self.internal_id())
    }

    /// Image reference, preferring the profile image url
    #[must_use]
    pub fn image_reference(&self) -> Option<&str> {
        non_empty(self.profile_image_url.as_deref()).or_else(|| non_empty(self.image.as_deref()))
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}
