use chrono::{Duration, FixedOffset, TimeZone, Utc};
use pom::{
    illumination, parse_date, MoonClock, Phase, PomError, Render, SearchConfig, Target,
};
use qtty::Days;

fn clock() -> MoonClock {
    MoonClock::new().expect("epoch")
}

#[test]
fn percentage_is_bounded_across_decades() {
    let c = clock();
    let mut t = Utc.with_ymd_and_hms(1950, 1, 1, 0, 0, 0).unwrap();
    let end = Utc.with_ymd_and_hms(2050, 1, 1, 0, 0, 0).unwrap();
    while t < end {
        let p = c.illumination(&t);
        assert!((-1e-9..=100.0 + 1e-9).contains(&p), "{p} at {t}");
        t = t + Duration::hours(97);
    }
}

#[test]
fn epoch_regression_baseline() {
    let c = clock();
    let p = c.illumination(&c.epoch());
    assert!((p - 8.530_222_938_578_259).abs() < 1e-9, "got {p}");
    assert_eq!(p, illumination(Days::new(0.0)));
}

#[test]
fn documented_full_and_new_moons() {
    let c = clock();
    // 2024-01-25 17:54 UTC full moon, 2024-01-11 11:57 UTC new moon,
    // 2000-01-21 04:40 UTC full moon (total lunar eclipse).
    let full = Utc.with_ymd_and_hms(2024, 1, 25, 17, 54, 0).unwrap();
    let new = Utc.with_ymd_and_hms(2024, 1, 11, 11, 57, 0).unwrap();
    let eclipse = Utc.with_ymd_and_hms(2000, 1, 21, 4, 40, 0).unwrap();
    assert_eq!(c.classify(&full).phase, Some(Phase::Full));
    assert_eq!(c.classify(&new).phase, Some(Phase::New));
    assert_eq!(c.classify(&eclipse).phase, Some(Phase::Full));
}

#[test]
fn quarters_follow_the_next_day() {
    let c = clock();
    let first = Utc.with_ymd_and_hms(2024, 1, 18, 3, 53, 0).unwrap();
    let last = Utc.with_ymd_and_hms(2024, 2, 2, 23, 18, 0).unwrap();
    assert_eq!(c.classify(&first).phase, Some(Phase::FirstQuarter));
    assert_eq!(c.classify(&last).phase, Some(Phase::LastQuarter));
}

#[test]
fn classifier_is_consistent_with_percentages() {
    let c = clock();
    let mut t = Utc.with_ymd_and_hms(2023, 1, 1, 0, 0, 0).unwrap();
    for _ in 0..(24 * 60) {
        let record = c.classify(&t);
        let now = record.illumination;
        let tomorrow = c.illumination(&(t + Duration::days(1)));
        match now.round() as i64 {
            100 => assert_eq!(record.phase, Some(Phase::Full)),
            0 => assert_eq!(record.phase, Some(Phase::New)),
            _ => {}
        }
        if tomorrow <= now {
            assert_ne!(record.phase, Some(Phase::FirstQuarter), "at {t}");
        }
        t = t + Duration::hours(7);
    }
}

#[test]
fn search_full_lands_within_a_month() {
    let c = clock();
    let start = Utc.with_ymd_and_hms(2031, 7, 14, 9, 0, 0).unwrap();
    let found = c
        .next_phase(Target::Full, &start, &SearchConfig::default())
        .unwrap();
    assert_eq!(c.illumination(&found).round(), 100.0);
    assert!(found - start <= Duration::days(30));
    assert_eq!(c.classify(&found).phase, Some(Phase::Full));
}

#[test]
fn search_keeps_the_callers_timezone() {
    let c = clock();
    let tz = FixedOffset::west_opt(5 * 3600).unwrap();
    let start = tz.with_ymd_and_hms(2023, 12, 31, 19, 0, 0).unwrap();
    let found = c
        .next_phase(Target::Full, &start, &SearchConfig::default())
        .unwrap();
    assert_eq!(pom::format_minute(&found), "2024-01-24T20:00:00-05:00");
}

#[test]
fn sample_week_produces_28_increasing_records() {
    let c = clock();
    let start = Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap();
    let records: Vec<_> = c.sample(&start, 7, 4).unwrap().iter().collect();
    assert_eq!(records.len(), 28);
    for pair in records.windows(2) {
        assert!(pair[0].instant < pair[1].instant);
        assert_eq!(pair[1].instant - pair[0].instant, Duration::hours(6));
    }
}

#[test]
fn explicit_date_renders_like_the_cli() {
    let c = clock();
    let instant = parse_date("2024-01-25:18").unwrap();
    let record = c.classify(&instant);
    assert_eq!(
        record.render(Render::Label).to_string(),
        "2024-01-25T18:00:00Z: Full moon at 100.0%"
    );
    assert_eq!(
        record.render(Render::Bar).to_string(),
        format!("2024-01-25T18:00:00Z: {}", "#".repeat(100))
    );
}

#[test]
fn malformed_dates_are_rejected() {
    assert!(matches!(
        parse_date("2024/01/25"),
        Err(PomError::InvalidDate { .. })
    ));
    assert!(matches!(parse_date("24-01"), Err(PomError::InvalidDate { .. })));
}

#[cfg(feature = "serde")]
#[test]
fn serde_record_roundtrips_through_json() {
    let c = clock();
    let record = c.classify(&Utc.with_ymd_and_hms(2024, 1, 25, 18, 0, 0).unwrap());
    let json = serde_json::to_string(&record).unwrap();
    assert!(json.contains("\"Full\""));
    let back: pom::PhaseRecord = serde_json::from_str(&json).unwrap();
    assert_eq!(back.phase, record.phase);
    assert_eq!(back.instant, record.instant);
}
