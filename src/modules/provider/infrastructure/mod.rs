pub mod external;
pub mod http_client;
