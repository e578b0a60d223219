use chrono::{NaiveDate, NaiveTime};
use natal::{
    compute_chart, match_celebrities, score_compatibility, score_detailed_compatibility, BirthData, ZodiacSign,
};

#[test]
fn test_all_pairs_bounded_and_symmetric() {
    for a in ZodiacSign::ALL {
        for b in ZodiacSign::ALL {
            let ab = score_compatibility(a, b);
            let ba = score_compatibility(b, a);
            assert_eq!(ab.overall_score, ba.overall_score, "{} / {}", a, b);
            for score in [ab.overall_score, ab.emotional, ab.communication, ab.passion, ab.values] {
                assert!(score <= 100);
            }
            assert!(ab.strengths.len() <= 5);
            assert!(!ab.challenges.is_empty() && ab.challenges.len() <= 4);
            assert!(!ab.advice.is_empty());
        }
    }
}

#[test]
fn test_aries_leo_scores_high() {
    let result = score_compatibility(ZodiacSign::Aries, ZodiacSign::Leo);
    assert!(result.overall_score >= 70);
}

#[test]
fn test_identical_charts() {
    let birth = BirthData::new(NaiveDate::from_ymd_opt(1990, 5, 15).unwrap())
        .with_time(NaiveTime::from_hms_opt(9, 0, 0).unwrap());
    let chart = compute_chart(&birth).unwrap();
    let base = score_compatibility(chart.sun_sign(), chart.sun_sign());
    let detailed = score_detailed_compatibility(&chart, &chart);

    assert_eq!(detailed.moon_adjustment, 5);
    let ascendant: i8 = if chart.ascendant().is_naturally_compatible_with(chart.sun_sign()) { 3 } else { -2 };
    assert_eq!(detailed.ascendant_adjustment, ascendant);
    let expected = (base.overall_score as i32 + 5 + ascendant as i32).clamp(0, 100) as u8;
    assert_eq!(detailed.result.overall_score, expected);
    // every body conjoins itself
    assert!(detailed.inter_aspects.len() >= 10);
}

#[test]
fn test_detailed_result_flattens() {
    let a = compute_chart(&BirthData::new(NaiveDate::from_ymd_opt(1988, 8, 2).unwrap())).unwrap();
    let b = compute_chart(&BirthData::new(NaiveDate::from_ymd_opt(1991, 1, 20).unwrap())).unwrap();
    let json = serde_json::to_value(score_detailed_compatibility(&a, &b)).unwrap();
    assert_eq!(json["signA"], "leo");
    assert_eq!(json["signB"], "aquarius");
    assert!(json["overallScore"].is_u64());
    assert!(json["moonAdjustment"].is_i64());
}

#[test]
fn test_celebrities_top_five_stable() {
    let chart = compute_chart(&BirthData::new(NaiveDate::from_ymd_opt(1993, 3, 30).unwrap())).unwrap();
    let first = match_celebrities(&chart);
    assert_eq!(first.len(), 5);
    for pair in first.windows(2) {
        assert!(pair[0].match_percentage >= pair[1].match_percentage);
    }
    assert_eq!(first, match_celebrities(&chart));
}
