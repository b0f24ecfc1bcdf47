// hcetag/src/types.rs
//! Payload and file id types shared across the crate.

use derive_more::{Display, From};

use crate::constants::{CC_FILE_ID, NDEF_FILE_ID};
use crate::Error;
use std::convert::TryFrom;

/// Two-byte file identifier, big-endian on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, From, Display)]
#[display(fmt = "{:04X}", _0)]
pub struct FileId(u16);

impl FileId {
    /// Capability container, E103
    pub const CAPABILITY_CONTAINER: Self = Self(CC_FILE_ID);
    /// NDEF file, E104
    pub const NDEF: Self = Self(NDEF_FILE_ID);

    /// Wrap a raw file id.
    pub const fn new(id: u16) -> Self {
        Self(id)
    }

    /// Raw file id.
    pub fn as_u16(&self) -> u16 {
        self.0
    }

    /// Wire form.
    pub fn to_be_bytes(&self) -> [u8; 2] {
        self.0.to_be_bytes()
    }

    /// From the wire form.
    pub fn from_be_bytes(bytes: [u8; 2]) -> Self {
        Self(u16::from_be_bytes(bytes))
    }
}

impl TryFrom<&[u8]> for FileId {
    type Error = Error;

    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        if bytes.len() != 2 {
            return Err(Error::InvalidLength {
                expected: 2,
                actual: bytes.len(),
            });
        }
        Ok(Self::from_be_bytes([bytes[0], bytes[1]]))
    }
}

/// What the active card/pass represents in the data layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum PayloadKind {
    /// A URL or profile link
    #[display(fmt = "link")]
    Link,
    /// Free text
    #[display(fmt = "text")]
    Text,
    /// A contact card served as text
    #[display(fmt = "contact")]
    Contact,
    /// Anything else the data layer defines
    #[display(fmt = "custom")]
    Custom,
}

impl Default for PayloadKind {
    fn default() -> Self {
        PayloadKind::Text
    }
}

/// The value the data layer wants broadcast to readers.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ActivePayload {
    /// What the payload represents
    pub kind: PayloadKind,
    /// Text served when there is no usable URI
    pub text: String,
    /// URI served as a URI record when present and not blank
    #[cfg_attr(feature = "serde", serde(default))]
    pub uri: Option<String>,
}

impl ActivePayload {
    /// Payload from its parts.
    pub fn new(kind: PayloadKind, text: impl Into<String>, uri: Option<String>) -> Self {
        Self {
            kind,
            text: text.into(),
            uri,
        }
    }

    /// A link payload whose display text is the URI itself.
    pub fn link(uri: impl Into<String>) -> Self {
        let uri = uri.into();
        Self {
            kind: PayloadKind::Link,
            text: uri.clone(),
            uri: Some(uri),
        }
    }

    /// A plain text payload.
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            kind: PayloadKind::Text,
            text: text.into(),
            uri: None,
        }
    }

    /// The URI if it is present and not blank.
    pub fn usable_uri(&self) -> Option<&str> {
        self.uri.as_deref().filter(|u| !u.trim().is_empty())
    }
}

/// Why the contactless link was torn down. Values follow the platform
/// HCE callback codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum DeactivationReason {
    /// Platform code 0
    #[display(fmt = "link loss")]
    LinkLoss,
    /// Platform code 1
    #[display(fmt = "deselected")]
    Deselected,
}

impl TryFrom<i32> for DeactivationReason {
    type Error = Error;

    fn try_from(code: i32) -> Result<Self, Self::Error> {
        match code {
            0 => Ok(Self::LinkLoss),
            1 => Ok(Self::Deselected),
            other => Err(Error::MalformedApdu(format!(
                "unknown deactivation reason {}",
                other
            ))),
        }
    }
}
