use aws_sdk_s3::error::{DisplayErrorContext, ProvideErrorMetadata};
use aws_sdk_s3::types::{Bucket, Tag};
use bucket_owner_core::config::AggregatorConfig;
use bucket_owner_core::contract::ApiGatewayResponse;
use bucket_owner_core::owner::TagLookup;
use bucket_owner_lambda::adapters::bucket_source::{BucketLister, TagFetcher};
use bucket_owner_lambda::handlers::bucket_owners::handle_bucket_owners_request;
use bucket_owner_lambda::logging::{log_error, log_info};
use lambda_runtime::{service_fn, Error, LambdaEvent};
use serde_json::{json, Value};

const NO_SUCH_TAG_SET: &str = "NoSuchTagSet";

struct S3BucketSource {
    s3_client: aws_sdk_s3::Client,
}

impl BucketLister for S3BucketSource {
    async fn list_bucket_names(&self) -> Result<Vec<String>, String> {
        let output = self
            .s3_client
            .list_buckets()
            .send()
            .await
            .map_err(|error| format!("failed to list buckets: {}", DisplayErrorContext(&error)))?;

        Ok(bucket_names_from(output.buckets()))
    }
}

impl TagFetcher for S3BucketSource {
    async fn fetch_tags(&self, bucket: &str) -> TagLookup {
        match self
            .s3_client
            .get_bucket_tagging()
            .bucket(bucket)
            .send()
            .await
        {
            Ok(output) => tag_lookup_from(output.tag_set()),
            Err(error) => classify_tagging_error(
                error.as_service_error().and_then(|service| service.code()),
                DisplayErrorContext(&error).to_string(),
            ),
        }
    }
}

/// Unnamed and empty-named entries are skipped; order is kept.
fn bucket_names_from(buckets: &[Bucket]) -> Vec<String> {
    buckets
        .iter()
        .filter_map(|bucket| bucket.name())
        .filter(|name| !name.is_empty())
        .map(str::to_string)
        .collect()
}

fn tag_lookup_from(tags: &[Tag]) -> TagLookup {
    TagLookup::TagSet(
        tags.iter()
            .map(|tag| (tag.key().to_string(), tag.value().to_string()))
            .collect(),
    )
}

fn classify_tagging_error(code: Option<&str>, message: String) -> TagLookup {
    match code {
        Some(NO_SUCH_TAG_SET) => TagLookup::NoTagSet,
        _ => TagLookup::Failed(message),
    }
}

struct RuntimeDependencies {
    config: AggregatorConfig,
    source: S3BucketSource,
}

async fn handle_request(
    _event: LambdaEvent<Value>,
    deps: &RuntimeDependencies,
) -> Result<ApiGatewayResponse, Error> {
    Ok(handle_bucket_owners_request(&deps.source, &deps.source, &deps.config).await)
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    let config = AggregatorConfig::from_env().map_err(|error| {
        log_error("config_invalid", json!({ "error": error.message() }));
        Error::from(error)
    })?;
    log_info(
        "cold_start",
        json!({
            "concurrency": config.concurrency,
            "cache_max_age_secs": config.response.cache_max_age_secs,
            "name_prefix": config.name_prefix.clone(),
        }),
    );

    let aws_config = aws_config::load_defaults(aws_config::BehaviorVersion::latest()).await;
    let deps = RuntimeDependencies {
        config,
        source: S3BucketSource {
            s3_client: aws_sdk_s3::Client::new(&aws_config),
        },
    };

    let shared = &deps;
    lambda_runtime::run(service_fn(move |event: LambdaEvent<Value>| async move {
        handle_request(event, shared).await
    }))
    .await
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tag(key: &str, value: &str) -> Tag {
        Tag::builder()
            .key(key)
            .value(value)
            .build()
            .expect("tag should build")
    }

    #[test]
    fn bucket_names_skip_missing_and_empty_names_in_order() {
        let buckets = vec![
            Bucket::builder().name("zeta-logs").build(),
            Bucket::builder().build(),
            Bucket::builder().name("").build(),
            Bucket::builder().name("alpha-assets").build(),
        ];

        assert_eq!(
            bucket_names_from(&buckets),
            vec!["zeta-logs".to_string(), "alpha-assets".to_string()]
        );
    }

    #[test]
    fn converts_tag_set_into_lookup_map() {
        let lookup = tag_lookup_from(&[tag("Owner", "team-x"), tag("Env", "prod")]);

        let TagLookup::TagSet(tags) = lookup else {
            panic!("expected a tag set");
        };
        assert_eq!(tags.get("Owner").map(String::as_str), Some("team-x"));
        assert_eq!(tags.get("Env").map(String::as_str), Some("prod"));
    }

    #[test]
    fn missing_tag_set_error_is_distinguished() {
        let lookup = classify_tagging_error(Some("NoSuchTagSet"), "service error".to_string());
        assert_eq!(lookup, TagLookup::NoTagSet);
    }

    #[test]
    fn other_errors_are_reported_as_failures() {
        let lookup = classify_tagging_error(Some("AccessDenied"), "access denied".to_string());
        assert_eq!(lookup, TagLookup::Failed("access denied".to_string()));

        let lookup = classify_tagging_error(None, "dispatch failure".to_string());
        assert_eq!(lookup, TagLookup::Failed("dispatch failure".to_string()));
    }
}
