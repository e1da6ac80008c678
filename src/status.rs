mod catalog;

use crate::{fmt::LogItem, log_vec, Loggable, NtStatusError};

/// A Windows NT status code (`NTSTATUS`), as returned by NT kernels and
/// NT-family protocols such as SMB2 and MS-RPC.
///
/// Every named code is available as an associated constant, e.g.
/// [`StatusCode::TIMEOUT`] or [`StatusCode::ACCESS_DENIED`].
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct StatusCode(u32);

impl StatusCode {
    /// The name returned for codes that are not in the catalog.
    pub const UNKNOWN_NAME: &'static str = "UNKNOWN";

    /// Create a new `StatusCode` from a raw 32-bit word.
    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    /// The raw 32-bit value of this status code.
    pub const fn value(&self) -> u32 {
        self.0
    }

    /// Decode a status code from its little-endian wire representation.
    pub const fn from_le_bytes(bytes: [u8; 4]) -> Self {
        Self(u32::from_le_bytes(bytes))
    }

    /// The little-endian wire representation of this status code.
    pub const fn to_le_bytes(&self) -> [u8; 4] {
        self.0.to_le_bytes()
    }

    /// The symbolic name of this status code, without the `STATUS_` prefix.
    ///
    /// Returns [`StatusCode::UNKNOWN_NAME`] for codes that are not catalogued.
    pub const fn name(&self) -> &'static str {
        match catalog::lookup(self.0) {
            Some(name) => name,
            None => Self::UNKNOWN_NAME,
        }
    }

    /// Whether this status code is present in the catalog.
    pub const fn is_known(&self) -> bool {
        catalog::lookup(self.0).is_some()
    }

    /// The error described by this status code, if any.
    ///
    /// [`StatusCode::SUCCESS`] and codes that are not catalogued produce
    /// `None`. Every other catalogued code, including informational ones
    /// such as [`StatusCode::PENDING`], produces an error whose message is
    /// [`StatusCode::name`].
    pub const fn as_error(&self) -> Option<NtStatusError> {
        if self.0 == Self::SUCCESS.0 || !self.is_known() {
            None
        } else {
            Some(NtStatusError::new(*self))
        }
    }

    /// Whether [`StatusCode::as_error`] returns `None` for this code.
    pub const fn is_success(&self) -> bool {
        self.as_error().is_none()
    }

    /// Same as [`StatusCode::as_error`], shaped for use with `?`.
    pub fn to_result(&self) -> Result<(), NtStatusError> {
        match self.as_error() {
            Some(error) => Err(error),
            None => Ok(()),
        }
    }

    /// All catalogued status codes, in ascending order of value.
    pub fn known() -> impl Iterator<Item = StatusCode> {
        catalog::KNOWN.iter().copied()
    }
}

impl From<u32> for StatusCode {
    fn from(value: u32) -> Self {
        Self(value)
    }
}

impl From<StatusCode> for u32 {
    fn from(value: StatusCode) -> Self {
        value.0
    }
}

impl core::fmt::Display for StatusCode {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.name())
    }
}

impl core::fmt::Debug for StatusCode {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "StatusCode(0x{:08X}, {})", self.0, self.name())
    }
}

impl core::fmt::LowerHex for StatusCode {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::LowerHex::fmt(&self.0, f)
    }
}

impl core::fmt::UpperHex for StatusCode {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::UpperHex::fmt(&self.0, f)
    }
}

impl Loggable for StatusCode {
    fn as_log(&self) -> Vec<LogItem> {
        log_vec![
            (0, "NT status"),
            (1, "Name", self.name()),
            (1, "Code", format!("0x{:08X}", self.0)),
            (1, "Error", !self.is_success())
        ]
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn success_is_catalogued() {
        assert_eq!(StatusCode::SUCCESS.value(), 0);
        assert_eq!(StatusCode::new(0).name(), "SUCCESS");
        assert_eq!(StatusCode::default(), StatusCode::SUCCESS);
    }

    #[test]
    fn catalog_has_no_duplicates() {
        let mut values = HashSet::new();
        let mut names = HashSet::new();

        for code in StatusCode::known() {
            assert!(values.insert(code.value()), "duplicate value {code:?}");
            assert!(names.insert(code.name()), "duplicate name {code:?}");
        }

        assert_eq!(values.len(), catalog::KNOWN.len());
    }

    #[test]
    fn catalog_is_sorted() {
        let values: Vec<_> = StatusCode::known().map(|c| c.value()).collect();
        assert!(values.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn catalog_names_are_symbolic() {
        for code in StatusCode::known() {
            let name = code.name();

            assert!(!name.is_empty());
            assert_ne!(name, StatusCode::UNKNOWN_NAME);
            assert!(!name.starts_with("STATUS_"), "{name}");
            assert!(
                name.bytes()
                    .all(|b| b.is_ascii_uppercase() || b.is_ascii_digit() || b == b'_'),
                "{name}"
            );
            assert!(name.as_bytes()[0].is_ascii_uppercase(), "{name}");
        }
    }

    #[test]
    fn known_matches_is_known() {
        assert!(StatusCode::known().all(|c| c.is_known()));

        let known: HashSet<_> = StatusCode::known().collect();
        for value in (0..0x0001_0000).chain(0xC000_0000..0xC001_0000) {
            let code = StatusCode::new(value);
            assert_eq!(known.contains(&code), code.is_known(), "{code:?}");
        }
    }

    #[test]
    fn wire_representation() {
        assert_eq!(
            StatusCode::from_le_bytes([0x02, 0x01, 0x00, 0x00]),
            StatusCode::TIMEOUT
        );
        assert_eq!(
            StatusCode::LOGON_FAILURE.to_le_bytes(),
            [0x6D, 0x00, 0x00, 0xC0]
        );
    }

    #[test]
    fn formatting() {
        let code = StatusCode::ACCESS_DENIED;

        assert_eq!(code.to_string(), "ACCESS_DENIED");
        assert_eq!(format!("{code:?}"), "StatusCode(0xC0000022, ACCESS_DENIED)");
        assert_eq!(format!("{code:#010x}"), "0xc0000022");
        assert_eq!(format!("{code:X}"), "C0000022");

        let unknown = StatusCode::new(0xDEAD_BEEF);
        assert_eq!(unknown.to_string(), "UNKNOWN");
        assert_eq!(format!("{unknown:?}"), "StatusCode(0xDEADBEEF, UNKNOWN)");
    }

    #[test]
    fn conversions() {
        let code: StatusCode = 0xC000_0034.into();
        assert_eq!(code, StatusCode::OBJECT_NAME_NOT_FOUND);

        let value: u32 = StatusCode::BAD_NETWORK_NAME.into();
        assert_eq!(value, 0xC000_00CC);
    }
}
