mod test_server;

pub use test_server::{TEST_SIGNING_SECRET, TestServer};
