//! Distance metric kind definitions and canonical naming.
//!
//! The canonical names returned by [`MetricKind::name`] appear in logs,
//! diagnostics, and serialized segment metadata. Consumers compare them for
//! exact equality, so spelling and casing are a compatibility contract:
//! changing any name is a breaking change.

use crate::error::{MetricError, MetricResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Placeholder name reported for raw codes that match no known kind.
///
/// Distinguishable on sight from every canonical name, so a data or version
/// mismatch shows up as such rather than being misread as a real metric.
pub const UNKNOWN_METRIC_NAME: &str = "METRIC_UNKNOWN";

/// Distance and similarity metric kinds understood by the segment engine.
///
/// The serde representation of each variant is its canonical name, so
/// metadata written through serde carries the same identifiers that appear
/// in logs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MetricKind {
    /// Inner product - higher is more similar
    #[serde(rename = "METRIC_INNER_PRODUCT")]
    InnerProduct,
    /// Squared Euclidean (L2) distance
    #[serde(rename = "METRIC_L2")]
    L2,
    /// Manhattan (L1) distance
    #[serde(rename = "METRIC_L1")]
    L1,
    /// Chebyshev (L-infinity) distance
    #[serde(rename = "METRIC_Linf")]
    Linf,
    /// Minkowski distance; the order p is supplied separately
    #[serde(rename = "METRIC_Lp")]
    Lp,
    /// Jaccard similarity over binary vectors
    #[serde(rename = "METRIC_Jaccard")]
    Jaccard,
    /// Tanimoto similarity over binary vectors
    #[serde(rename = "METRIC_Tanimoto")]
    Tanimoto,
    /// Hamming distance over binary vectors
    #[serde(rename = "METRIC_Hamming")]
    Hamming,
    /// Substructure match over binary vectors
    #[serde(rename = "METRIC_Substructure")]
    Substructure,
    /// Superstructure match over binary vectors
    #[serde(rename = "METRIC_Superstructure")]
    Superstructure,
    /// Canberra distance
    #[serde(rename = "METRIC_Canberra")]
    Canberra,
    /// Bray-Curtis dissimilarity
    #[serde(rename = "METRIC_BrayCurtis")]
    BrayCurtis,
    /// Jensen-Shannon divergence
    #[serde(rename = "METRIC_JensenShannon")]
    JensenShannon,
}

impl MetricKind {
    /// Every known kind, in code order.
    pub const ALL: [MetricKind; 13] = [
        MetricKind::InnerProduct,
        MetricKind::L2,
        MetricKind::L1,
        MetricKind::Linf,
        MetricKind::Lp,
        MetricKind::Jaccard,
        MetricKind::Tanimoto,
        MetricKind::Hamming,
        MetricKind::Substructure,
        MetricKind::Superstructure,
        MetricKind::Canberra,
        MetricKind::BrayCurtis,
        MetricKind::JensenShannon,
    ];

    /// Canonical name of this kind.
    ///
    /// Total and injective over the enum: every kind has exactly one name
    /// and no two kinds share one.
    pub const fn name(self) -> &'static str {
        match self {
            MetricKind::InnerProduct => "METRIC_INNER_PRODUCT",
            MetricKind::L2 => "METRIC_L2",
            MetricKind::L1 => "METRIC_L1",
            MetricKind::Linf => "METRIC_Linf",
            MetricKind::Lp => "METRIC_Lp",
            MetricKind::Jaccard => "METRIC_Jaccard",
            MetricKind::Tanimoto => "METRIC_Tanimoto",
            MetricKind::Hamming => "METRIC_Hamming",
            MetricKind::Substructure => "METRIC_Substructure",
            MetricKind::Superstructure => "METRIC_Superstructure",
            MetricKind::Canberra => "METRIC_Canberra",
            MetricKind::BrayCurtis => "METRIC_BrayCurtis",
            MetricKind::JensenShannon => "METRIC_JensenShannon",
        }
    }

    /// Raw code of this kind in the external engine's enumeration.
    ///
    /// Codes 10-19 are reserved there; the scipy-style metrics start at 20.
    pub const fn code(self) -> i32 {
        match self {
            MetricKind::InnerProduct => 0,
            MetricKind::L2 => 1,
            MetricKind::L1 => 2,
            MetricKind::Linf => 3,
            MetricKind::Lp => 4,
            MetricKind::Jaccard => 5,
            MetricKind::Tanimoto => 6,
            MetricKind::Hamming => 7,
            MetricKind::Substructure => 8,
            MetricKind::Superstructure => 9,
            MetricKind::Canberra => 20,
            MetricKind::BrayCurtis => 21,
            MetricKind::JensenShannon => 22,
        }
    }

    /// Parse a raw code from the external engine's enumeration.
    ///
    /// Codes outside the known set arise from corrupted metadata or from an
    /// engine version that added kinds this crate does not know yet; they
    /// are rejected rather than mapped to an arbitrary kind.
    pub fn from_code(code: i32) -> MetricResult<Self> {
        match code {
            0 => Ok(MetricKind::InnerProduct),
            1 => Ok(MetricKind::L2),
            2 => Ok(MetricKind::L1),
            3 => Ok(MetricKind::Linf),
            4 => Ok(MetricKind::Lp),
            5 => Ok(MetricKind::Jaccard),
            6 => Ok(MetricKind::Tanimoto),
            7 => Ok(MetricKind::Hamming),
            8 => Ok(MetricKind::Substructure),
            9 => Ok(MetricKind::Superstructure),
            20 => Ok(MetricKind::Canberra),
            21 => Ok(MetricKind::BrayCurtis),
            22 => Ok(MetricKind::JensenShannon),
            _ => Err(MetricError::UnknownCode(code)),
        }
    }

    /// Resolve a raw code to its canonical name for diagnostics.
    ///
    /// Unknown codes are logged and reported as [`UNKNOWN_METRIC_NAME`], so
    /// callers in a logging context never see an empty or garbage string.
    pub fn name_of_code(code: i32) -> &'static str {
        match Self::from_code(code) {
            Ok(kind) => kind.name(),
            Err(_) => {
                tracing::warn!("Unknown metric code: {}", code);
                UNKNOWN_METRIC_NAME
            }
        }
    }

    /// True if larger values mean more similar (inner product and the
    /// set-overlap family); false for distance kinds, where lower is closer.
    pub const fn is_similarity(self) -> bool {
        matches!(
            self,
            MetricKind::InnerProduct
                | MetricKind::Jaccard
                | MetricKind::Tanimoto
                | MetricKind::Substructure
                | MetricKind::Superstructure
        )
    }

    /// True if the kind is defined over binary vectors.
    pub const fn is_binary(self) -> bool {
        matches!(
            self,
            MetricKind::Jaccard
                | MetricKind::Tanimoto
                | MetricKind::Hamming
                | MetricKind::Substructure
                | MetricKind::Superstructure
        )
    }

    /// True if the kind needs an out-of-band parameter (the Minkowski order).
    pub const fn requires_argument(self) -> bool {
        matches!(self, MetricKind::Lp)
    }
}

impl fmt::Display for MetricKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for MetricKind {
    type Err = MetricError;

    /// Exact, case-sensitive match against the canonical names.
    fn from_str(s: &str) -> MetricResult<Self> {
        MetricKind::ALL
            .into_iter()
            .find(|kind| kind.name() == s)
            .ok_or_else(|| MetricError::UnknownName(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_names_are_total_and_non_empty() {
        for kind in MetricKind::ALL {
            assert!(!kind.name().is_empty(), "{:?} has an empty name", kind);
        }
    }

    #[test]
    fn test_names_are_injective() {
        let names: HashSet<&str> = MetricKind::ALL.iter().map(|k| k.name()).collect();
        assert_eq!(names.len(), MetricKind::ALL.len());
    }

    #[test]
    fn test_names_are_deterministic() {
        for kind in MetricKind::ALL {
            assert_eq!(kind.name(), kind.name());
        }
        assert_ne!(MetricKind::L2.name(), MetricKind::JensenShannon.name());
    }

    #[test]
    fn test_code_round_trip() {
        for kind in MetricKind::ALL {
            assert_eq!(MetricKind::from_code(kind.code()).unwrap(), kind);
        }
    }

    #[test]
    fn test_unknown_codes_rejected() {
        for code in [-1, 10, 19, 23, i32::MAX] {
            match MetricKind::from_code(code) {
                Err(MetricError::UnknownCode(c)) => assert_eq!(c, code),
                other => panic!("expected UnknownCode for {}, got {:?}", code, other),
            }
        }
    }

    #[test]
    fn test_name_of_code_falls_back_to_sentinel() {
        assert_eq!(MetricKind::name_of_code(1), "METRIC_L2");
        assert_eq!(MetricKind::name_of_code(22), "METRIC_JensenShannon");
        assert_eq!(MetricKind::name_of_code(13), UNKNOWN_METRIC_NAME);
        assert!(!MetricKind::name_of_code(-7).is_empty());
    }

    #[test]
    fn test_display_matches_name() {
        for kind in MetricKind::ALL {
            assert_eq!(kind.to_string(), kind.name());
        }
    }

    #[test]
    fn test_parse_round_trip() {
        for kind in MetricKind::ALL {
            assert_eq!(kind.name().parse::<MetricKind>().unwrap(), kind);
        }
    }

    #[test]
    fn test_parse_is_case_sensitive() {
        assert!("metric_l2".parse::<MetricKind>().is_err());
        match "METRIC_Cosine".parse::<MetricKind>() {
            Err(MetricError::UnknownName(s)) => assert_eq!(s, "METRIC_Cosine"),
            other => panic!("expected UnknownName, got {:?}", other),
        }
    }

    #[test]
    fn test_serde_uses_canonical_names() {
        for kind in MetricKind::ALL {
            let json = serde_json::to_string(&kind).unwrap();
            assert_eq!(json, format!("\"{}\"", kind.name()));
            let parsed: MetricKind = serde_json::from_str(&json).unwrap();
            assert_eq!(parsed, kind);
        }
        assert!(serde_json::from_str::<MetricKind>("\"METRIC_UNKNOWN\"").is_err());
    }

    #[test]
    fn test_similarity_classification() {
        assert!(MetricKind::InnerProduct.is_similarity());
        assert!(MetricKind::Jaccard.is_similarity());
        assert!(!MetricKind::L2.is_similarity());
        assert!(!MetricKind::Hamming.is_similarity());
    }

    #[test]
    fn test_binary_classification() {
        for kind in [
            MetricKind::Jaccard,
            MetricKind::Tanimoto,
            MetricKind::Hamming,
            MetricKind::Substructure,
            MetricKind::Superstructure,
        ] {
            assert!(kind.is_binary());
        }
        assert!(!MetricKind::L2.is_binary());
        assert!(!MetricKind::Canberra.is_binary());
    }

    #[test]
    fn test_only_lp_takes_an_argument() {
        for kind in MetricKind::ALL {
            assert_eq!(kind.requires_argument(), kind == MetricKind::Lp);
        }
    }
}
