//! Top-3 risk ranking over a probability distribution.

use crate::types::{ClassProbability, Distribution, RankedCrop, RiskRanking, RiskTier};
use crate::{CropcastError, Result};

/// Sort classes by probability descending and assign the three risk tiers.
///
/// The sort is stable: exact probability ties keep the classifier's native
/// label order. That ordering is an artifact of the sort, not a documented
/// guarantee of any classifier backend; revisit if the backend changes.
pub fn rank(distribution: &Distribution) -> Result<RiskRanking> {
    if distribution.len() < RiskTier::ALL.len() {
        return Err(CropcastError::InsufficientClasses {
            available: distribution.len(),
        });
    }

    let mut entries: Vec<&ClassProbability> = distribution.entries().iter().collect();
    entries.sort_by(|a, b| b.probability.total_cmp(&a.probability));

    Ok(RiskRanking::new(std::array::from_fn(|i| RankedCrop {
        tier: RiskTier::ALL[i],
        label: entries[i].label.clone(),
        probability: entries[i].probability,
    })))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn distribution(pairs: &[(&str, f64)]) -> Distribution {
        let labels: Vec<String> = pairs.iter().map(|(l, _)| l.to_string()).collect();
        let probs: Vec<f64> = pairs.iter().map(|(_, p)| *p).collect();
        Distribution::from_parts(&labels, probs).unwrap()
    }

    #[test]
    fn ranks_by_probability_descending() {
        let dist = distribution(&[("rice", 0.2), ("maize", 0.5), ("chickpea", 0.3)]);
        let ranking = rank(&dist).unwrap();

        let [low, medium, high] = ranking.entries();
        assert_eq!((low.label.as_str(), low.tier), ("maize", RiskTier::Low));
        assert_eq!(
            (medium.label.as_str(), medium.tier),
            ("chickpea", RiskTier::Medium)
        );
        assert_eq!((high.label.as_str(), high.tier), ("rice", RiskTier::High));
    }

    #[test]
    fn takes_only_the_top_three() {
        let dist = distribution(&[
            ("rice", 0.1),
            ("maize", 0.4),
            ("chickpea", 0.3),
            ("lentil", 0.2),
        ]);
        let ranking = rank(&dist).unwrap();

        let labels: Vec<&str> = ranking
            .entries()
            .iter()
            .map(|e| e.label.as_str())
            .collect();
        assert_eq!(labels, ["maize", "chickpea", "rice"]);
    }

    #[test]
    fn exact_ties_keep_native_label_order() {
        let dist = distribution(&[("rice", 0.25), ("maize", 0.25), ("chickpea", 0.5)]);
        let ranking = rank(&dist).unwrap();

        let [low, medium, high] = ranking.entries();
        assert_eq!(low.label, "chickpea");
        // rice precedes maize in the classifier's order, so it wins the tie
        assert_eq!(medium.label, "rice");
        assert_eq!(high.label, "maize");
    }

    #[test]
    fn fewer_than_three_classes_is_an_error() {
        let dist = distribution(&[("rice", 0.6), ("maize", 0.4)]);
        let err = rank(&dist).unwrap_err();
        assert!(matches!(
            err,
            CropcastError::InsufficientClasses { available: 2 }
        ));
    }

    #[test]
    fn tier_probabilities_are_monotone() {
        let dist = distribution(&[("a", 0.15), ("b", 0.35), ("c", 0.2), ("d", 0.3)]);
        let ranking = rank(&dist).unwrap();
        let [low, medium, high] = ranking.entries();
        assert!(low.probability >= medium.probability);
        assert!(medium.probability >= high.probability);
    }
}
