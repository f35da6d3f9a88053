//! Evaluator Integration Tests
//!
//! Exercise the evaluator end to end with a controllable clock and an
//! in-memory settings store, following a verification through its lifetime.

use assert_matches::assert_matches;
use chrono::TimeDelta;
use std::io::Write;
use verity_eligibility::{
    ConfigError, EligibilityEvaluator, RecencyOrdered, SettingKey, VerifyStudentConfig,
};
use verity_testkit::{day, init_test_tracing, FixedClock, InMemorySettings, VerificationBuilder};

type TestEvaluator = EligibilityEvaluator<FixedClock, InMemorySettings>;

fn evaluator(now_day: i64) -> (FixedClock, InMemorySettings, TestEvaluator) {
    init_test_tracing();
    let clock = FixedClock::at(day(now_day));
    let settings = InMemorySettings::with_windows(365, 28);
    let evaluator = EligibilityEvaluator::new(clock.clone(), settings.clone());
    (clock, settings, evaluator)
}

#[test]
fn test_verification_lifecycle_against_expiring_soon_window() {
    let (clock, _settings, evaluator) = evaluator(0);
    let verification = VerificationBuilder::new(1).created_on(0).expires_on(365).build();

    // Freshly issued: well outside the window
    assert_eq!(evaluator.is_expiring_soon(verification.expires_at), Ok(false));

    // 29 days left
    clock.advance_days(336);
    assert_eq!(evaluator.is_expiring_soon(verification.expires_at), Ok(false));

    // Exactly 28 days left: boundary is inclusive
    clock.advance_days(1);
    assert_eq!(evaluator.is_expiring_soon(verification.expires_at), Ok(true));

    // Expired a minute ago still reports expiring soon
    clock.set(day(365) + TimeDelta::minutes(1));
    assert_eq!(evaluator.is_expiring_soon(verification.expires_at), Ok(true));
}

#[test]
fn test_settings_are_read_at_call_time() {
    let (_clock, settings, evaluator) = evaluator(100);
    let expiration = Some(day(140));

    assert_eq!(evaluator.is_expiring_soon(expiration), Ok(false));
    settings.set(SettingKey::ExpiringSoonWindow, 40);
    assert_eq!(evaluator.is_expiring_soon(expiration), Ok(true));

    assert_eq!(evaluator.earliest_allowed_verification_date(), Ok(day(100 - 365)));
    settings.set(SettingKey::DaysGoodFor, 30);
    assert_eq!(evaluator.earliest_allowed_verification_date(), Ok(day(70)));
}

#[test]
fn test_missing_settings_surface_to_caller() {
    let (_clock, settings, evaluator) = evaluator(0);
    settings.remove(SettingKey::DaysGoodFor);
    settings.remove(SettingKey::ExpiringSoonWindow);

    assert_matches!(
        evaluator.earliest_allowed_verification_date(),
        Err(ConfigError::MissingSetting { key: SettingKey::DaysGoodFor })
    );
    assert_matches!(
        evaluator.is_expiring_soon(Some(day(10))),
        Err(ConfigError::MissingSetting { key: SettingKey::ExpiringSoonWindow })
    );
    // Nothing to evaluate without an expiration, so the store is never consulted
    assert_eq!(evaluator.is_expiring_soon(None), Ok(false));
}

#[test]
fn test_earliest_allowed_date_follows_the_clock() {
    let (clock, _settings, evaluator) = evaluator(400);
    assert_eq!(evaluator.earliest_allowed_verification_date(), Ok(day(35)));

    clock.advance(TimeDelta::hours(6));
    assert_eq!(
        evaluator.earliest_allowed_verification_date(),
        Ok(day(35) + TimeDelta::hours(6))
    );
}

#[test]
fn test_verification_for_deadline_across_reverifications() {
    let (_clock, _settings, evaluator) = evaluator(0);
    let first = VerificationBuilder::new(1).created_on(1).expires_on(10).build();
    let second = VerificationBuilder::new(2).created_on(5).expires_on(8).build();
    let candidates = RecencyOrdered::from_unordered(vec![first.clone(), second.clone()]);

    assert_eq!(evaluator.verification_for_instant(Some(day(6)), &candidates), Some(&second));
    assert_eq!(evaluator.verification_for_instant(Some(day(9)), &candidates), Some(&first));
    assert_eq!(evaluator.verification_for_instant(Some(day(20)), &candidates), None);
    assert_eq!(evaluator.verification_for_instant(None, &candidates), Some(&second));
}

#[test]
fn test_config_file_drives_evaluator() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "[verify_student]\ndays_good_for = 180\nexpiring_soon_window = 14").unwrap();
    let config = VerifyStudentConfig::load_from_file(file.path()).unwrap();

    let clock = FixedClock::at(day(200));
    let evaluator = EligibilityEvaluator::new(clock, config);

    assert_eq!(evaluator.earliest_allowed_verification_date(), Ok(day(20)));
    assert_eq!(evaluator.is_expiring_soon(Some(day(214))), Ok(true));
    assert_eq!(evaluator.is_expiring_soon(Some(day(215))), Ok(false));
}

#[test]
fn test_shared_evaluator_across_threads() {
    let (_clock, _settings, evaluator) = evaluator(50);
    let evaluator = std::sync::Arc::new(evaluator);

    let handles: Vec<_> = (0..4)
        .map(|offset| {
            let evaluator = std::sync::Arc::clone(&evaluator);
            std::thread::spawn(move || evaluator.is_expiring_soon(Some(day(50 + offset))))
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), Ok(true));
    }
}
