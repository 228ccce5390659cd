pub mod credentials;
pub mod jwt;

pub use credentials::{AdminCredentials, ADMIN_USER_ID};
pub use jwt::{mint_access_token, verify_access_token, verify_access_token_at, Claims};
