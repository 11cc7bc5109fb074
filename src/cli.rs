//! CLI argument struct, built with `clap`'s derive API.

use crate::error::{GnError, Result};
use clap::Parser;
use std::path::PathBuf;

/// Divisive community detection via sampled Girvan-Newman edge betweenness.
#[derive(Debug, Parser)]
#[command(name = "gncut", version, about)]
pub struct Args {
    /// Path to the edge-list input file.
    pub input_file: PathBuf,

    /// Target number of communities. Signed so that a non-positive value
    /// reaches [`Self::validate`] (and its exit code 3) instead of being
    /// rejected by `clap`'s own parser with its own exit code.
    pub num_clusters: i64,

    /// Path to write the `<external_id> <community_index>` output to.
    pub output_file: PathBuf,

    /// Fraction of highest-degree nodes used as betweenness sample sources,
    /// in `(0, 1]`. `1.0` (the default) computes exact Brandes betweenness.
    #[arg(long, default_value_t = 1.0)]
    pub sample_rate: f64,
}

impl Args {
    /// Validates argument ranges that `clap` can't express declaratively:
    /// `num_clusters >= 1` and `0 < sample_rate <= 1`.
    pub fn validate(&self) -> Result<()> {
        if self.num_clusters < 1 {
            return Err(GnError::invalid_arguments("num_clusters must be at least 1"));
        }
        if !(self.sample_rate > 0.0 && self.sample_rate <= 1.0) {
            return Err(GnError::invalid_arguments(format!(
                "sample_rate must be in (0, 1], got {}",
                self.sample_rate
            )));
        }
        Ok(())
    }

    /// `num_clusters` as the `usize` the engine expects. Only meaningful
    /// after [`Self::validate`] has confirmed it is at least 1.
    pub fn num_clusters(&self) -> usize {
        self.num_clusters as usize
    }
}
