//! Canonical Instruction Names.
//!
//! `InstrName` enumerates every instruction the coverage model knows about,
//! spelled the way the instruction generator spells them: upper case, with
//! `_` in place of `.` (`FSGNJ_S`, `C_ADDI`, `AMOADD_W`). Each name carries
//! a fixed [`InstrGroup`].

use crate::isa::group::InstrGroup;
use std::fmt;

macro_rules! instr_names {
    ($($group:ident => [$($name:ident),* $(,)?]),* $(,)?) => {
        /// Canonical name of an instruction known to the instruction-set model.
        #[allow(non_camel_case_types, clippy::upper_case_acronyms)]
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, serde::Serialize)]
        pub enum InstrName {
            $($($name,)*)*
        }

        impl InstrName {
            /// Every known instruction, grouped in declaration order.
            pub const ALL: &'static [InstrName] = &[$($(InstrName::$name,)*)*];

            /// Looks up a canonical name.
            ///
            /// The lookup is exact: callers canonicalize raw mnemonics first.
            pub fn from_canonical(name: &str) -> Option<Self> {
                match name {
                    $($(stringify!($name) => Some(InstrName::$name),)*)*
                    _ => None,
                }
            }

            /// Returns the canonical spelling.
            pub fn as_str(self) -> &'static str {
                match self {
                    $($(InstrName::$name => stringify!($name),)*)*
                }
            }

            /// Returns the extension group the instruction belongs to.
            pub fn group(self) -> InstrGroup {
                match self {
                    $($(InstrName::$name => InstrGroup::$group,)*)*
                }
            }
        }
    };
}

instr_names! {
    RV32I => [
        LUI, AUIPC, JAL, JALR, BEQ, BNE, BLT, BGE, BLTU, BGEU, LB, LH, LW, LBU, LHU, SB, SH, SW,
        ADDI, SLTI, SLTIU, XORI, ORI, ANDI, SLLI, SRLI, SRAI, ADD, SUB, SLL, SLT, SLTU, XOR, SRL,
        SRA, OR, AND, NOP, FENCE, FENCE_I, ECALL, EBREAK, CSRRW, CSRRS, CSRRC, CSRRWI, CSRRSI,
        CSRRCI, URET, SRET, MRET, DRET, WFI, SFENCE_VMA,
    ],
    RV64I => [
        LWU, LD, SD, ADDIW, SLLIW, SRLIW, SRAIW, ADDW, SUBW, SLLW, SRLW, SRAW,
    ],
    RV32M => [MUL, MULH, MULHSU, MULHU, DIV, DIVU, REM, REMU],
    RV64M => [MULW, DIVW, DIVUW, REMW, REMUW],
    RV32A => [
        LR_W, SC_W, AMOSWAP_W, AMOADD_W, AMOAND_W, AMOOR_W, AMOXOR_W, AMOMIN_W, AMOMAX_W,
        AMOMINU_W, AMOMAXU_W,
    ],
    RV64A => [
        LR_D, SC_D, AMOSWAP_D, AMOADD_D, AMOAND_D, AMOOR_D, AMOXOR_D, AMOMIN_D, AMOMAX_D,
        AMOMINU_D, AMOMAXU_D,
    ],
    RV32F => [
        FLW, FSW, FMADD_S, FMSUB_S, FNMSUB_S, FNMADD_S, FADD_S, FSUB_S, FMUL_S, FDIV_S, FSQRT_S,
        FSGNJ_S, FSGNJN_S, FSGNJX_S, FMIN_S, FMAX_S, FCVT_W_S, FCVT_WU_S, FMV_X_W, FEQ_S, FLT_S,
        FLE_S, FCLASS_S, FCVT_S_W, FCVT_S_WU, FMV_W_X,
    ],
    RV32FC => [C_FLW, C_FSW, C_FLWSP, C_FSWSP],
    RV64F => [FCVT_L_S, FCVT_LU_S, FCVT_S_L, FCVT_S_LU],
    RV32D => [
        FLD, FSD, FMADD_D, FMSUB_D, FNMSUB_D, FNMADD_D, FADD_D, FSUB_D, FMUL_D, FDIV_D, FSQRT_D,
        FSGNJ_D, FSGNJN_D, FSGNJX_D, FMIN_D, FMAX_D, FCVT_S_D, FCVT_D_S, FEQ_D, FLT_D, FLE_D,
        FCLASS_D, FCVT_W_D, FCVT_WU_D, FCVT_D_W, FCVT_D_WU,
    ],
    RV32DC => [C_FLD, C_FSD, C_FLDSP, C_FSDSP],
    RV64D => [FCVT_L_D, FCVT_LU_D, FMV_X_D, FCVT_D_L, FCVT_D_LU, FMV_D_X],
    RV32C => [
        C_LW, C_SW, C_LWSP, C_SWSP, C_ADDI4SPN, C_ADDI, C_LI, C_ADDI16SP, C_LUI, C_SRLI, C_SRAI,
        C_ANDI, C_SUB, C_XOR, C_OR, C_AND, C_BEQZ, C_BNEZ, C_SLLI, C_MV, C_EBREAK, C_ADD, C_NOP,
        C_J, C_JAL, C_JR, C_JALR,
    ],
    RV64C => [C_ADDIW, C_SUBW, C_ADDW, C_LD, C_SD, C_LDSP, C_SDSP],
    RV128I => [LDU, LQ, SQ, ADDID, SLLID, SRLID, SRAID, ADDD, SUBD, SLLD, SRLD, SRAD],
    RV128C => [C_SRLI64, C_SRAI64, C_SLLI64, C_LQ, C_SQ, C_LQSP, C_SQSP],
    RV32V => [
        VSETVLI, VSETVL, VADD_VV, VADD_VX, VADD_VI, VSUB_VV, VSUB_VX, VAND_VV, VOR_VV, VXOR_VV,
        VMUL_VV, VLE_V, VSE_V,
    ],
    RV32B => [
        CLZ, CTZ, PCNT, ANDN, ORN, XNOR, PACK, PACKU, PACKH, MIN, MAX, MINU, MAXU, ROL, ROR, RORI,
        SBCLR, SBSET, SBINV, SBEXT, SBCLRI, SBSETI, SBINVI, SBEXTI, GREV, GREVI, GORC, GORCI,
        SHFL, UNSHFL, SHFLI, UNSHFLI, SLO, SRO, SLOI, SROI, SEXT_B, SEXT_H, CRC32_B, CRC32_H,
        CRC32_W, CRC32C_B, CRC32C_H, CRC32C_W, CLMUL, CLMULH, CLMULR, BDEP, BEXT, BFP, CMIX,
        CMOV, FSL, FSR, FSRI,
    ],
    RV64B => [
        CLZW, CTZW, PCNTW, PACKW, PACKUW, ROLW, RORW, RORIW, SBCLRW, SBSETW, SBINVW, SBEXTW,
        SBCLRIW, SBSETIW, SBINVIW, GREVW, GREVIW, GORCW, GORCIW, SHFLW, UNSHFLW, SLOW, SROW,
        SLOIW, SROIW, ADDWU, SUBWU, ADDIWU, ADDUW, SUBUW, SLLIU_W, CRC32_D, CRC32C_D, BMATOR,
        BMATXOR, BMATFLIP, CLMULW, CLMULHW, CLMULRW, BDEPW, BEXTW, BFPW, FSLW, FSRW, FSRIW,
    ],
    RV32X => [NMADD, NMSUB, NMAX],
}

impl fmt::Display for InstrName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}
