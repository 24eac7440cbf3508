use std::time::Instant;

use bucket_owner_core::config::AggregatorConfig;
use bucket_owner_core::contract::{ApiGatewayResponse, BucketRecord};
use bucket_owner_core::owner::{bucket_record, resolve_owner, OwnerResolution};
use bucket_owner_core::response::{error_response, success_response};
use futures::stream::{self, StreamExt};
use serde_json::json;

use crate::adapters::bucket_source::{BucketLister, TagFetcher};
use crate::logging::{log_error, log_info, log_warn};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedBucket {
    pub name: String,
    pub resolution: OwnerResolution,
}

impl ResolvedBucket {
    pub fn into_record(self) -> BucketRecord {
        bucket_record(self.name, self.resolution)
    }
}

pub async fn handle_bucket_owners_request(
    lister: &impl BucketLister,
    fetcher: &impl TagFetcher,
    config: &AggregatorConfig,
) -> ApiGatewayResponse {
    let started_at = Instant::now();

    let names = match lister.list_bucket_names().await {
        Ok(value) => value,
        Err(error) => {
            log_error(
                "bucket_listing_failed",
                json!({
                    "duration_ms": started_at.elapsed().as_millis(),
                    "error": error,
                }),
            );
            return error_response(
                500,
                "bucket_listing_failed",
                "Failed to list buckets",
                &config.response,
            );
        }
    };

    let listed = names.len();
    let names: Vec<String> = names
        .into_iter()
        .filter(|name| config.includes_bucket(name))
        .collect();
    log_info(
        "buckets_listed",
        json!({
            "listed": listed,
            "selected": names.len(),
            "name_prefix": config.name_prefix.clone(),
        }),
    );

    let resolved = resolve_bucket_owners(names, fetcher, config.concurrency).await;

    let owners_found = resolved
        .iter()
        .filter(|bucket| matches!(bucket.resolution, OwnerResolution::Found(_)))
        .count();
    let lookups_failed = resolved
        .iter()
        .filter(|bucket| bucket.resolution.failure_reason().is_some())
        .count();
    log_info(
        "request_completed",
        json!({
            "bucket_count": resolved.len(),
            "owners_found": owners_found,
            "lookups_failed": lookups_failed,
            "duration_ms": started_at.elapsed().as_millis(),
        }),
    );

    let records = resolved
        .into_iter()
        .map(ResolvedBucket::into_record)
        .collect();
    success_response(records, &config.response)
}

/// Resolves owners with at most `concurrency` lookups in flight. The output
/// has one entry per input name, in input order, whatever order the lookups
/// finish in.
pub async fn resolve_bucket_owners<F: TagFetcher>(
    names: Vec<String>,
    fetcher: &F,
    concurrency: usize,
) -> Vec<ResolvedBucket> {
    stream::iter(names)
        .map(move |name| resolve_bucket_owner(fetcher, name))
        .buffered(concurrency.max(1))
        .collect()
        .await
}

/// Never fails: lookup errors are absorbed into an empty owner.
pub async fn resolve_bucket_owner<F: TagFetcher>(fetcher: &F, name: String) -> ResolvedBucket {
    let resolution = resolve_owner(fetcher.fetch_tags(&name).await);
    if let Some(reason) = resolution.failure_reason() {
        log_warn(
            "owner_lookup_failed",
            json!({
                "bucket": name.clone(),
                "error": reason,
            }),
        );
    }
    ResolvedBucket { name, resolution }
}
