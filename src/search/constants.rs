// Defaults for the search driver and the command line
pub const DEFAULT_BUDGET: usize = 4;
pub const DEFAULT_TARGET: i64 = 114_514;
pub const DEFAULT_PRECISION: usize = 6;
pub const DEFAULT_MAX_EXPRESSIONS: u64 = 10_000_000;
pub const MAX_PRECISION: usize = 17;
// Largest |target| for which every integer is an exact f64
pub const MAX_EXACT_TARGET: i64 = 1 << 53;
