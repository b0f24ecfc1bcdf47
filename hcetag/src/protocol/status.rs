// hcetag/src/protocol/status.rs
//! Status words.

use derive_more::Display;

/// ISO 7816-4 status words produced by the emulated tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum StatusWord {
    /// 9000
    #[display(fmt = "9000 success")]
    Success,
    /// 6700
    #[display(fmt = "6700 wrong length")]
    WrongLength,
    /// 6985
    #[display(fmt = "6985 conditions of use not satisfied")]
    ConditionsNotSatisfied,
    /// 6A81
    #[display(fmt = "6A81 instruction not supported")]
    InstructionNotSupported,
    /// 6A82
    #[display(fmt = "6A82 file or application not found")]
    FileNotFound,
    /// 6F00
    #[display(fmt = "6F00 no precise diagnosis")]
    Unknown,
}

impl StatusWord {
    /// SW1SW2 as one value.
    pub const fn as_u16(&self) -> u16 {
        match self {
            Self::Success => 0x9000,
            Self::WrongLength => 0x6700,
            Self::ConditionsNotSatisfied => 0x6985,
            Self::InstructionNotSupported => 0x6A81,
            Self::FileNotFound => 0x6A82,
            Self::Unknown => 0x6F00,
        }
    }

    /// SW1 SW2 as they appear at the end of a response.
    pub const fn to_bytes(&self) -> [u8; 2] {
        self.as_u16().to_be_bytes()
    }

    /// Status word for a known SW1SW2 value.
    pub fn from_u16(sw: u16) -> Option<Self> {
        match sw {
            0x9000 => Some(Self::Success),
            0x6700 => Some(Self::WrongLength),
            0x6985 => Some(Self::ConditionsNotSatisfied),
            0x6A81 => Some(Self::InstructionNotSupported),
            0x6A82 => Some(Self::FileNotFound),
            0x6F00 => Some(Self::Unknown),
            _ => None,
        }
    }

    /// Whether this is 9000.
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success)
    }
}
