//! Mnemonic Canonicalization.
//!
//! Simulators print mnemonics in lower case with `.` separators and still
//! use a few legacy or pseudo-instruction names. Coverage bins exist only
//! for the canonical name of the real instruction, so every mnemonic is
//! upper-cased, `.` becomes `_`, and the result goes through a fixed
//! rename table.

/// Maps legacy and pseudo-instruction names to the instruction they alias.
///
/// Total: names outside the table map to themselves.
pub fn rename(name: &str) -> &str {
    match name {
        // Legacy simulator spelling of the move instructions
        "FMV_S_X" => "FMV_W_X",
        "FMV_X_S" => "FMV_X_W",
        // Sign-injection pseudo-instructions
        "FMV_S" => "FSGNJ_S",
        "FABS_S" => "FSGNJX_S",
        "FNEG_S" => "FSGNJN_S",
        "FMV_D" => "FSGNJ_D",
        "FABS_D" => "FSGNJX_D",
        "FNEG_D" => "FSGNJN_D",
        other => other,
    }
}

/// Returns the canonical instruction name for a raw trace mnemonic.
///
/// Idempotent and case-insensitive: `"fmv.s"`, `"FMV.S"` and `"FMV_S"`
/// all yield `"FSGNJ_S"`.
pub fn canonicalize(raw: &str) -> String {
    let upper = raw.trim().to_uppercase().replace('.', "_");
    rename(&upper).to_string()
}
