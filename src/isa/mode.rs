//! RISC-V Privilege Modes.
//!
//! This module defines the privilege levels a traced instruction can
//! retire in: User (U), Supervisor (S), and Machine (M). Simulators write
//! the mode column either numerically (`3`) or as a letter (`M`).

use serde::Serialize;

/// RISC-V privilege mode levels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum PrivilegeMode {
    /// User mode (U-mode).
    User = 0,

    /// Supervisor mode (S-mode).
    Supervisor = 1,

    /// Machine mode (M-mode).
    ///
    /// Highest privilege level, required for all implementations.
    Machine = 3,
}

impl PrivilegeMode {
    /// Converts a u8 value to a privilege mode.
    ///
    /// Returns `None` for the reserved encoding 2 and anything above 3.
    pub fn from_u8(val: u8) -> Option<Self> {
        match val {
            0 => Some(PrivilegeMode::User),
            1 => Some(PrivilegeMode::Supervisor),
            3 => Some(PrivilegeMode::Machine),
            _ => None,
        }
    }

    /// Parses the `mode` column of a trace record.
    ///
    /// # Arguments
    ///
    /// * `s` - Either the numeric encoding or the mode letter, any case
    ///
    /// # Returns
    ///
    /// The privilege mode, or `None` if the text is not recognized.
    pub fn from_trace(s: &str) -> Option<Self> {
        let s = s.trim();
        if let Ok(val) = s.parse::<u8>() {
            return Self::from_u8(val);
        }
        match s.to_ascii_uppercase().as_str() {
            "U" | "USER" => Some(PrivilegeMode::User),
            "S" | "SUPERVISOR" => Some(PrivilegeMode::Supervisor),
            "M" | "MACHINE" => Some(PrivilegeMode::Machine),
            _ => None,
        }
    }

    /// Converts a privilege mode to its u8 representation.
    pub fn to_u8(self) -> u8 {
        self as u8
    }

    /// Returns the human-readable name of the privilege mode.
    pub fn name(&self) -> &'static str {
        match self {
            PrivilegeMode::User => "User",
            PrivilegeMode::Supervisor => "Supervisor",
            PrivilegeMode::Machine => "Machine",
        }
    }
}

impl std::fmt::Display for PrivilegeMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}
