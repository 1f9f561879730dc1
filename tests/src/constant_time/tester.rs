// src/constant_time/tester.rs
use statrs::distribution::{ContinuousCDF, StudentsT};
use std::time::Instant;

use super::config::TestConfig;

/// Summary statistics of a two-class timing comparison
#[derive(Debug)]
pub struct TimingAnalysis {
    pub mean_a: f64,
    pub mean_b: f64,
    pub std_dev_a: f64,
    pub std_dev_b: f64,
    pub mean_ratio: f64,
    pub t_statistic: f64,
    pub degrees_of_freedom: f64,
    pub p_value: f64,
    pub cohens_d: f64,
    pub combined_score: f64,
    pub is_constant_time: bool,
}

impl TimingAnalysis {
    /// One-line report for test failure messages
    pub fn summary(&self, operation: &str) -> String {
        format!(
            "{}: mean {:.0} ns vs {:.0} ns (ratio {:.3}), t={:.2}, df={:.1}, p={:.3e}, d={:.2}, score={:.3}",
            operation,
            self.mean_a,
            self.mean_b,
            self.mean_ratio,
            self.t_statistic,
            self.degrees_of_freedom,
            self.p_value,
            self.cohens_d,
            self.combined_score,
        )
    }
}

pub struct TimingTester {
    pub num_samples: usize,
    pub num_iterations: usize,
}

impl TimingTester {
    pub fn new(num_samples: usize, num_iterations: usize) -> Self {
        Self {
            num_samples,
            num_iterations,
        }
    }

    pub fn from_config(config: &TestConfig) -> Self {
        Self::new(config.num_samples, config.num_iterations)
    }

    /// Average nanoseconds per call of `f`, one entry per sample
    pub fn measure<F>(&self, mut f: F) -> Vec<u128>
    where
        F: FnMut(),
    {
        let mut times = Vec::with_capacity(self.num_samples);
        for _ in 0..self.num_samples {
            let start = Instant::now();
            for _ in 0..self.num_iterations {
                f();
            }
            let avg = start.elapsed().as_nanos() / self.num_iterations.max(1) as u128;
            times.push(avg);
        }
        times
    }

    /// Interleave the two classes sample by sample so drift hits both alike
    pub fn measure_pair<A, B>(&self, mut a: A, mut b: B) -> (Vec<u128>, Vec<u128>)
    where
        A: FnMut(),
        B: FnMut(),
    {
        let single = Self::new(1, self.num_iterations);
        let mut times_a = Vec::with_capacity(self.num_samples);
        let mut times_b = Vec::with_capacity(self.num_samples);
        for _ in 0..self.num_samples {
            times_a.extend(single.measure(&mut a));
            times_b.extend(single.measure(&mut b));
        }
        (times_a, times_b)
    }

    pub fn mean(times: &[u128]) -> f64 {
        let sum: u128 = times.iter().sum();
        sum as f64 / times.len() as f64
    }

    pub fn variance(times: &[u128], mean: f64) -> f64 {
        let ss: f64 = times
            .iter()
            .map(|&t| {
                let d = t as f64 - mean;
                d * d
            })
            .sum();
        ss / (times.len() as f64 - 1.0)
    }

    // IQR rule
    pub fn remove_outliers(times: &[u128]) -> Vec<u128> {
        if times.len() < 4 {
            return times.to_vec();
        }

        let mut sorted = times.to_vec();
        sorted.sort_unstable();
        let q1 = sorted[sorted.len() / 4] as f64;
        let q3 = sorted[sorted.len() * 3 / 4] as f64;
        let iqr = q3 - q1;
        let lower = q1 - 1.5 * iqr;
        let upper = q3 + 1.5 * iqr;

        times
            .iter()
            .filter(|&&t| (t as f64) >= lower && (t as f64) <= upper)
            .copied()
            .collect()
    }

    // Welch's t
    pub fn t_statistic(times_a: &[u128], times_b: &[u128]) -> f64 {
        let mean_a = Self::mean(times_a);
        let mean_b = Self::mean(times_b);
        let var_a = Self::variance(times_a, mean_a);
        let var_b = Self::variance(times_b, mean_b);
        let n_a = times_a.len() as f64;
        let n_b = times_b.len() as f64;
        (mean_a - mean_b).abs() / (var_a / n_a + var_b / n_b).sqrt()
    }

    // Welch-Satterthwaite
    pub fn degrees_of_freedom(times_a: &[u128], times_b: &[u128]) -> f64 {
        let mean_a = Self::mean(times_a);
        let mean_b = Self::mean(times_b);
        let term_a = Self::variance(times_a, mean_a) / times_a.len() as f64;
        let term_b = Self::variance(times_b, mean_b) / times_b.len() as f64;
        (term_a + term_b).powi(2)
            / (term_a.powi(2) / (times_a.len() as f64 - 1.0)
                + term_b.powi(2) / (times_b.len() as f64 - 1.0))
    }

    /// Two-tailed p-value of `t_stat` under Student's t with `df` degrees
    pub fn p_value(t_stat: f64, df: f64) -> f64 {
        if df < 1.0 || !df.is_finite() || !t_stat.is_finite() {
            return 0.0;
        }
        match StudentsT::new(0.0, 1.0, df) {
            Ok(dist) => (2.0 * (1.0 - dist.cdf(t_stat.abs()))).clamp(0.0, 1.0),
            Err(_) => 0.0,
        }
    }

    pub fn cohens_d(times_a: &[u128], times_b: &[u128]) -> f64 {
        let mean_a = Self::mean(times_a);
        let mean_b = Self::mean(times_b);
        let var_a = Self::variance(times_a, mean_a);
        let var_b = Self::variance(times_b, mean_b);
        let n_a = times_a.len() as f64;
        let n_b = times_b.len() as f64;
        let pooled = ((var_a * (n_a - 1.0) + var_b * (n_b - 1.0)) / (n_a + n_b - 2.0)).sqrt();
        (mean_a - mean_b).abs() / pooled
    }

    /// Mean ratio, t statistic and spread folded into one number near 1.0
    pub fn combined_score(mean_ratio: f64, t_stat: f64, rel_std_dev: f64) -> f64 {
        let score = 1.0 + (mean_ratio - 1.0) * 0.5 + (t_stat / 10.0) * 0.2 + rel_std_dev * 0.3;
        if !score.is_finite() || score < 1.0 {
            mean_ratio
        } else {
            score
        }
    }

    pub fn analyze(
        &self,
        times_a: &[u128],
        times_b: &[u128],
        config: &TestConfig,
    ) -> Result<TimingAnalysis, String> {
        let clean_a = Self::remove_outliers(times_a);
        let clean_b = Self::remove_outliers(times_b);
        if clean_a.len() < 2 || clean_b.len() < 2 {
            return Err("not enough samples left after outlier removal".to_string());
        }

        let mean_a = Self::mean(&clean_a);
        let mean_b = Self::mean(&clean_b);
        let std_dev_a = Self::variance(&clean_a, mean_a).sqrt();
        let std_dev_b = Self::variance(&clean_b, mean_b).sqrt();
        let mean_ratio = mean_a.max(mean_b) / mean_a.min(mean_b);

        let t_statistic = Self::t_statistic(&clean_a, &clean_b);
        let degrees_of_freedom = Self::degrees_of_freedom(&clean_a, &clean_b);
        let p_value = Self::p_value(t_statistic, degrees_of_freedom);
        let cohens_d = Self::cohens_d(&clean_a, &clean_b);

        let rel_std_dev = f64::max(std_dev_a / mean_a, std_dev_b / mean_b);
        let combined_score = Self::combined_score(mean_ratio, t_statistic, rel_std_dev);

        // a significant t counts only once the means also drift apart
        let t_flag = t_statistic > config.t_stat_threshold && mean_ratio > config.mean_ratio_max;
        let is_constant_time = combined_score <= config.combined_score_threshold && !t_flag;

        Ok(TimingAnalysis {
            mean_a,
            mean_b,
            std_dev_a,
            std_dev_b,
            mean_ratio,
            t_statistic,
            degrees_of_freedom,
            p_value,
            cohens_d,
            combined_score,
            is_constant_time,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outliers_trimmed() {
        let mut times = vec![100u128; 20];
        times.push(10_000);
        let clean = TimingTester::remove_outliers(&times);
        assert_eq!(clean.len(), 20);
        assert!(clean.iter().all(|&t| t == 100));
    }

    #[test]
    fn test_identical_classes_pass() {
        let a: Vec<u128> = (0..30).map(|i| 1000 + (i % 5)).collect();
        let b: Vec<u128> = (0..30).map(|i| 1000 + ((i + 2) % 5)).collect();
        let tester = TimingTester::new(30, 1);
        let analysis = tester.analyze(&a, &b, &TestConfig::default()).unwrap();
        assert!(analysis.mean_ratio < 1.01);
        assert!(analysis.is_constant_time, "{}", analysis.summary("synthetic"));
    }

    #[test]
    fn test_separated_classes_fail() {
        let a: Vec<u128> = (0..30).map(|i| 1000 + (i % 7)).collect();
        let b: Vec<u128> = (0..30).map(|i| 2000 + (i % 7)).collect();
        let tester = TimingTester::new(30, 1);
        let analysis = tester.analyze(&a, &b, &TestConfig::default()).unwrap();
        assert!(analysis.p_value < 1e-6);
        assert!(!analysis.is_constant_time);
    }

    #[test]
    fn test_p_value_range() {
        assert!((TimingTester::p_value(0.0, 20.0) - 1.0).abs() < 1e-9);
        let p = TimingTester::p_value(2.086, 20.0);
        assert!((p - 0.05).abs() < 0.002, "p = {}", p);
    }
}
