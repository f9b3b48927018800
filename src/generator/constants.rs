// Configuration constants for the generator module
pub const INITIAL_CAPACITY: usize = 100;
