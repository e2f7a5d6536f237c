//! Identity keys of the well-known schemes.

/// The intermediate script every round trip passes through.
pub const DEVANAGARI: &str = "devanagari";

pub const HK: &str = "hk";
pub const IAST: &str = "iast";
pub const ISO: &str = "ISO";
pub const ITRANS: &str = "itrans";
pub const TITUS: &str = "titus";
/// See <https://sanskrit-coders.github.io/input/optitrans/#optitrans-v1>.
pub const OPTITRANS: &str = "optitrans";
pub const KOLKATA_V2: &str = "kolkata_v2";
pub const SLP1: &str = "slp1";
pub const VELTHUIS: &str = "velthuis";
pub const WX: &str = "wx";
