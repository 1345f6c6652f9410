// Adapters layer: readers and writers for the files the audit collaborates with.

pub mod catalog;
pub mod colors;
pub mod profiles;
pub mod store_xml;
