//! Owner resolution over the outcome of a bucket tag lookup.
//!
//! Every lookup outcome maps to an owner string: a tagged bucket yields its
//! `Owner` value, everything else yields `""`. The variants stay distinct so
//! callers can log or count absorbed failures without changing the response.

use std::collections::BTreeMap;

use crate::contract::{BucketRecord, OWNER_TAG_KEY};

pub type TagSet = BTreeMap<String, String>;

/// Outcome of fetching the tag set of a single bucket.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TagLookup {
    TagSet(TagSet),
    /// The bucket has no tag configuration at all.
    NoTagSet,
    Failed(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OwnerResolution {
    Found(String),
    Empty,
    Failed(String),
}

impl OwnerResolution {
    pub fn into_owner(self) -> String {
        match self {
            Self::Found(owner) => owner,
            Self::Empty | Self::Failed(_) => String::new(),
        }
    }

    pub fn failure_reason(&self) -> Option<&str> {
        match self {
            Self::Failed(reason) => Some(reason),
            Self::Found(_) | Self::Empty => None,
        }
    }
}

pub fn resolve_owner(lookup: TagLookup) -> OwnerResolution {
    match lookup {
        TagLookup::TagSet(mut tags) => match tags.remove(OWNER_TAG_KEY) {
            Some(owner) => OwnerResolution::Found(owner),
            None => OwnerResolution::Empty,
        },
        TagLookup::NoTagSet => OwnerResolution::Empty,
        TagLookup::Failed(reason) => OwnerResolution::Failed(reason),
    }
}

pub fn bucket_record(name: impl Into<String>, resolution: OwnerResolution) -> BucketRecord {
    BucketRecord::new(name, resolution.into_owner())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tags(pairs: &[(&str, &str)]) -> TagSet {
        pairs
            .iter()
            .map(|(key, value)| (key.to_string(), value.to_string()))
            .collect()
    }

    #[test]
    fn extracts_owner_from_tag_set() {
        let resolution = resolve_owner(TagLookup::TagSet(tags(&[
            ("Owner", "team-x"),
            ("Env", "prod"),
        ])));

        assert_eq!(resolution, OwnerResolution::Found("team-x".to_string()));
        assert_eq!(resolution.into_owner(), "team-x");
    }

    #[test]
    fn tag_set_without_owner_resolves_empty() {
        let resolution = resolve_owner(TagLookup::TagSet(tags(&[("Env", "prod")])));
        assert_eq!(resolution, OwnerResolution::Empty);
        assert_eq!(resolution.into_owner(), "");
    }

    #[test]
    fn owner_key_match_is_case_sensitive() {
        let resolution = resolve_owner(TagLookup::TagSet(tags(&[("owner", "team-y")])));
        assert_eq!(resolution, OwnerResolution::Empty);
    }

    #[test]
    fn missing_tag_set_resolves_empty() {
        let resolution = resolve_owner(TagLookup::NoTagSet);
        assert_eq!(resolution, OwnerResolution::Empty);
        assert_eq!(resolution.failure_reason(), None);
    }

    #[test]
    fn failed_lookup_collapses_to_empty_owner() {
        let resolution = resolve_owner(TagLookup::Failed("AccessDenied".to_string()));
        assert_eq!(resolution.failure_reason(), Some("AccessDenied"));

        let record = bucket_record("locked", resolution);
        assert_eq!(record, BucketRecord::new("locked", ""));
    }
}
