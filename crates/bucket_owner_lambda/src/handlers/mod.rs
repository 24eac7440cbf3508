pub mod bucket_owners;
