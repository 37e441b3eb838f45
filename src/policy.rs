//! Execution policies the candidate is exercised under.

use core::fmt;

use serde::Serialize;

/// How the candidate algorithm is asked to execute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum ExecutionPolicy {
    /// Single thread, element by element.
    #[serde(rename = "seq")]
    Sequenced,
    /// Single thread, block-oriented kernel.
    #[serde(rename = "unseq")]
    Unsequenced,
    /// Worker pool, element-by-element kernel per chunk.
    #[serde(rename = "par")]
    Parallel,
    /// Worker pool, block-oriented kernel per chunk.
    #[serde(rename = "par_unseq")]
    ParallelUnsequenced,
}

impl ExecutionPolicy {
    /// Every policy, in dispatch order.
    pub const ALL: [Self; 4] = [
        Self::Sequenced,
        Self::Unsequenced,
        Self::Parallel,
        Self::ParallelUnsequenced,
    ];

    /// Stable name for logs and reports.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Sequenced => "seq",
            Self::Unsequenced => "unseq",
            Self::Parallel => "par",
            Self::ParallelUnsequenced => "par_unseq",
        }
    }

    /// Whether the policy may use the worker pool.
    #[must_use]
    pub const fn is_parallel(self) -> bool {
        matches!(self, Self::Parallel | Self::ParallelUnsequenced)
    }

    /// Whether the policy uses the block-oriented kernel.
    #[must_use]
    pub const fn is_vectorized(self) -> bool {
        matches!(self, Self::Unsequenced | Self::ParallelUnsequenced)
    }

    /// Whether forward and bidirectional shapes are dispatched for this policy.
    ///
    /// Vectorized policies need random access; they are only dispatched with
    /// random-access views and their reversal.
    #[must_use]
    pub const fn accepts_sequential_shapes(self) -> bool {
        !self.is_vectorized()
    }
}

impl fmt::Display for ExecutionPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registry_splits_vectorized_policies() {
        crate::test_utils::init_test_logging();
        crate::test_phase!("registry_splits_vectorized_policies");
        let sequential: Vec<_> = ExecutionPolicy::ALL
            .into_iter()
            .filter(|p| p.accepts_sequential_shapes())
            .collect();
        crate::assert_with_log!(
            sequential == [ExecutionPolicy::Sequenced, ExecutionPolicy::Parallel],
            "policies with forward/bidirectional shapes",
            [ExecutionPolicy::Sequenced, ExecutionPolicy::Parallel],
            sequential
        );
        let names: Vec<_> = ExecutionPolicy::ALL.iter().map(ToString::to_string).collect();
        crate::assert_with_log!(
            names == ["seq", "unseq", "par", "par_unseq"],
            "names",
            ["seq", "unseq", "par", "par_unseq"],
            names
        );
        crate::test_complete!("registry_splits_vectorized_policies");
    }

    #[test]
    fn serialized_names_match_display() {
        crate::test_utils::init_test_logging();
        crate::test_phase!("serialized_names_match_display");
        for policy in ExecutionPolicy::ALL {
            let json = serde_json::to_value(policy).expect("serialize policy");
            crate::assert_with_log!(
                json.as_str() == Some(policy.as_str()),
                "json name",
                policy.as_str(),
                json
            );
        }
        crate::test_complete!("serialized_names_match_display");
    }
}
