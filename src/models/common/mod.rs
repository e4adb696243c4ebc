pub mod error_code;
pub mod list;
pub mod response;

pub use error_code::ErrorCode;
pub use list::ListResponse;
pub use response::ApiResponse;
