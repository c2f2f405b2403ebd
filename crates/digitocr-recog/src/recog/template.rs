//! Digit templates and nearest-template matching

use super::types::{FeatureVector, MatchResult};

/// Reference feature vectors for the digits, in ascending digit order.
///
/// Iteration order is part of the matching contract: ties go to the
/// earlier entry.
pub static DIGIT_TEMPLATES: [(char, FeatureVector); 10] = [
    ('0', FeatureVector::from_bits([1, 1, 1, 1, 1, 1, 1, 1, 0])),
    ('1', FeatureVector::from_bits([0, 1, 0, 0, 0, 0, 1, 0, 0])),
    ('2', FeatureVector::from_bits([1, 0, 1, 0, 1, 0, 1, 0, 0])),
    ('3', FeatureVector::from_bits([1, 0, 1, 1, 0, 1, 1, 0, 0])),
    ('4', FeatureVector::from_bits([0, 0, 1, 0, 0, 1, 0, 0, 0])),
    ('5', FeatureVector::from_bits([1, 1, 0, 0, 0, 1, 1, 0, 0])),
    ('6', FeatureVector::from_bits([1, 0, 1, 1, 1, 1, 1, 1, 0])),
    ('7', FeatureVector::from_bits([1, 0, 1, 0, 0, 0, 0, 0, 0])),
    ('8', FeatureVector::from_bits([1, 1, 1, 1, 1, 1, 1, 0, 0])),
    ('9', FeatureVector::from_bits([1, 1, 1, 0, 1, 0, 1, 0, 0])),
];

/// Look up the template of a digit.
pub fn template_for(digit: char) -> Option<&'static FeatureVector> {
    DIGIT_TEMPLATES
        .iter()
        .find(|(c, _)| *c == digit)
        .map(|(_, v)| v)
}

/// Match a vector against the built-in digit templates.
pub fn match_digit(features: &FeatureVector) -> MatchResult {
    match_against(&DIGIT_TEMPLATES, features)
}

/// Match a vector against an arbitrary template table.
///
/// Templates are visited in table order. The first template reaching a new
/// minimum distance wins, so ties resolve to the earlier entry, and an exact
/// match stops the scan. An empty table yields [`MatchResult::NO_MATCH`].
pub fn match_against(table: &[(char, FeatureVector)], features: &FeatureVector) -> MatchResult {
    let mut best = MatchResult::NO_MATCH;

    for (digit, template) in table {
        let distance = features.hamming_distance(template);
        tracing::trace!(%digit, distance, "template distance");

        if best.distance.is_none_or(|d| distance < d) {
            best = MatchResult {
                digit: *digit,
                distance: Some(distance),
            };
        }
        if distance == 0 {
            break;
        }
    }

    best
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::recog::UNKNOWN_CHAR;

    #[test]
    fn test_every_template_matches_itself() {
        for (digit, template) in &DIGIT_TEMPLATES {
            let m = match_digit(template);
            assert_eq!(m.digit, *digit);
            assert!(m.is_exact());
        }
    }

    #[test]
    fn test_templates_are_distinct() {
        for (i, (_, a)) in DIGIT_TEMPLATES.iter().enumerate() {
            for (_, b) in &DIGIT_TEMPLATES[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn test_blank_vector_ties_to_lowest_digit() {
        // '1', '4' and '7' all have two set bits; '1' comes first
        let m = match_digit(&FeatureVector::default());
        assert_eq!(m.digit, '1');
        assert_eq!(m.distance, Some(2));
    }

    #[test]
    fn test_nearest_template() {
        // '0' with the bottom-center bit missing: distance 1 from '0',
        // distance 2 from '8'
        let v = FeatureVector::from_bits([1, 1, 1, 1, 1, 1, 0, 1, 0]);
        let m = match_digit(&v);
        assert_eq!(m.digit, '0');
        assert_eq!(m.distance, Some(1));

        // '7' plus the middle-right bit: 1 from '7', 2 from '4'
        let v = FeatureVector::from_bits([1, 0, 1, 0, 0, 0, 0, 0, 1]);
        assert_eq!(match_digit(&v).digit, '7');
    }

    #[test]
    fn test_exact_match_stops_scan() {
        let v = FeatureVector::from_bits([1, 0, 1, 0, 0, 0, 0, 0, 0]);
        let table = [('a', v), ('b', v)];
        assert_eq!(match_against(&table, &v).digit, 'a');
    }

    #[test]
    fn test_empty_table_is_unknown() {
        let m = match_against(&[], &FeatureVector::default());
        assert_eq!(m.digit, UNKNOWN_CHAR);
        assert_eq!(m.distance, None);
        assert!(!m.is_exact());
    }

    #[test]
    fn test_partial_table() {
        let table = [DIGIT_TEMPLATES[7], DIGIT_TEMPLATES[4]];
        // blank ties between '7' and '4'; table order decides
        assert_eq!(match_against(&table, &FeatureVector::default()).digit, '7');
    }

    #[test]
    fn test_template_for() {
        assert_eq!(template_for('4'), Some(&DIGIT_TEMPLATES[4].1));
        assert_eq!(template_for('x'), None);
    }
}
