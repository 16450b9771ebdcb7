pub mod camsort_core;
