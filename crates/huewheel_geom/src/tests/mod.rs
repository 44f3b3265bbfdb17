//! Cross-shape tests.
//!
//! These check the laws every shape has to satisfy together: handles land
//! back on the color they were placed for, and no pointer sample escapes
//! the channel ranges.

mod range_tests;
