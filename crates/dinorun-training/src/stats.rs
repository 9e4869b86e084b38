//! Summary statistics over a batch of trial scores.

use std::fmt;

/// Distribution of fitness values across a population or a batch of trials.
#[derive(Debug, Clone, PartialEq)]
pub struct FitnessStats {
    /// Highest fitness.
    pub best: f32,
    /// Arithmetic mean.
    pub mean: f32,
    /// Lowest fitness.
    pub worst: f32,
    pub median: f32,
    /// Population standard deviation.
    pub std_dev: f32,
}

impl FitnessStats {
    /// Computes statistics from unsorted values.
    ///
    /// Returns `None` if `values` is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// # use dinorun_training::stats::FitnessStats;
    /// let stats = FitnessStats::new([30.0, 10.0, 20.0]).unwrap();
    /// assert_eq!(stats.best, 30.0);
    /// assert_eq!(stats.worst, 10.0);
    /// assert_eq!(stats.mean, 20.0);
    /// assert_eq!(stats.median, 20.0);
    /// ```
    #[expect(clippy::cast_precision_loss)]
    #[must_use]
    pub fn new<I>(values: I) -> Option<Self>
    where
        I: IntoIterator<Item = f32>,
    {
        let mut values = values.into_iter().collect::<Vec<_>>();
        values.sort_by(f32::total_cmp);

        let worst = *values.first()?;
        let best = *values.last()?;
        let n = values.len() as f32;
        let mean = values.iter().sum::<f32>() / n;
        let median = values[values.len() / 2];
        let variance = values.iter().map(|v| (v - mean).powi(2)).sum::<f32>() / n;

        Some(Self {
            best,
            mean,
            worst,
            median,
            std_dev: variance.sqrt(),
        })
    }
}

/// Fitness statistics of one finished generation.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationStats {
    /// Generation the statistics were collected in (1-based).
    pub generation: usize,
    pub fitness: FitnessStats,
}

impl fmt::Display for GenerationStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let FitnessStats {
            best, mean, worst, ..
        } = self.fitness;
        write!(
            f,
            "Generation {}: best {}, average {}, worst {}",
            self.generation,
            best.floor(),
            mean.floor(),
            worst.floor()
        )
    }
}
