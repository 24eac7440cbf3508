use std::future::Future;

use bucket_owner_core::owner::TagLookup;

/// Lists every bucket visible to the configured credentials, in the order
/// the backing service returns them.
pub trait BucketLister {
    fn list_bucket_names(&self) -> impl Future<Output = Result<Vec<String>, String>> + Send;
}

/// Fetches the tag set of one bucket. Implementations report "no tag set"
/// separately from other failures and never return an error to the caller.
pub trait TagFetcher {
    fn fetch_tags(&self, bucket: &str) -> impl Future<Output = TagLookup> + Send;
}
