//! RISC-V General-Purpose Register Naming.
//!
//! Traces name destination registers either architecturally (`x5`) or by
//! their ABI alias (`t0`). This module maps both spellings onto the
//! register index 0-31.

/// ABI names of x0-x31, indexed by register number.
pub const ABI_NAMES: [&str; 32] = [
    "zero", "ra", "sp", "gp", "tp", "t0", "t1", "t2", "s0", "s1", "a0", "a1", "a2", "a3", "a4",
    "a5", "a6", "a7", "s2", "s3", "s4", "s5", "s6", "s7", "s8", "s9", "s10", "s11", "t3", "t4",
    "t5", "t6",
];

/// Resolves a register name to its index.
///
/// # Arguments
///
/// * `name` - `x0`-`x31`, an ABI name, or `fp` (alias of `s0`); any case
///
/// # Returns
///
/// The register index, or `None` if the name is not a general-purpose
/// register (e.g. a floating-point register such as `f3`).
pub fn index_of(name: &str) -> Option<usize> {
    let name = name.trim().to_ascii_lowercase();
    if let Some(num) = name.strip_prefix('x') {
        return num.parse::<usize>().ok().filter(|&idx| idx < 32);
    }
    if name == "fp" {
        return Some(8);
    }
    ABI_NAMES.iter().position(|&abi| abi == name)
}

/// Returns the architectural name (`x0`-`x31`) of a register index.
pub fn arch_name(idx: usize) -> Option<String> {
    (idx < 32).then(|| format!("x{}", idx))
}
