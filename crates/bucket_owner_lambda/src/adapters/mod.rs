pub mod bucket_source;
