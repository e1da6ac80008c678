//! ntstatus: Windows NT status codes in Rust.
//!
//! [`StatusCode`] wraps the 32-bit `NTSTATUS` word returned by NT kernels and
//! NT-family protocols (SMB2, MS-RPC, LSA, ...). It can be turned into its
//! symbolic name with [`StatusCode::name`] and into an [`NtStatusError`] with
//! [`StatusCode::as_error`].
//!
//! ```
//! use ntstatus::StatusCode;
//!
//! let status = StatusCode::from_le_bytes([0x22, 0x00, 0x00, 0xC0]);
//!
//! assert_eq!(status, StatusCode::ACCESS_DENIED);
//! assert_eq!(status.name(), "ACCESS_DENIED");
//! assert_eq!(status.as_error().unwrap().to_string(), "ACCESS_DENIED");
//! assert!(StatusCode::SUCCESS.as_error().is_none());
//! ```

mod error;
pub use error::NtStatusError;

mod status;
pub use status::StatusCode;

#[macro_use]
mod fmt;
#[cfg(test)]
mod tests;

pub use fmt::{LogItem, LogOutput, Loggable, Logger};
