mod catalog;
mod client;
mod days;

pub use catalog::HttpAttractionCatalog;
pub use client::RemoteClient;
pub use days::HttpDayStore;

#[cfg(test)]
mod test_server;
