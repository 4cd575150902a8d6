//! Error handling for ragdesk.
//!
//! | Category | Raised by |
//! |----------|-----------|
//! | Network | transport failures (connect, timeout, reset) |
//! | Server | non-2xx status, failure envelopes, undecodable bodies |
//! | User | rejected input such as an empty folder name |
//! | System | local file reads for uploads |
//! | Configuration | invalid settings |

mod category;
mod desk_error;

pub use category::ErrorCategory;
pub use desk_error::DeskError;

/// Type alias for Results using DeskError.
pub type DeskResult<T> = Result<T, DeskError>;
