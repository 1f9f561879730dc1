//! Timing comparison of one operation on two input classes
//!
//! Samples are averaged over many iterations, trimmed with the IQR rule and
//! compared with Welch's t-test. The verdict uses a combined score of the
//! mean ratio, the t statistic and the relative spread of both classes.

mod config;
mod tester;

pub use config::TestConfig;
pub use tester::{TimingAnalysis, TimingTester};
