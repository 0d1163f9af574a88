mod common;

use std::fs;

use babybang::{
    DirResources, Locator, ReloadOutcome, SoundConfig, SoundError, SoundRegistry,
};
use common::{write, write_sounds, PLAYLIST};
use rand::{rngs::StdRng, Rng, SeedableRng};

fn registry_at(root: &std::path::Path) -> SoundRegistry {
    let config = SoundConfig::default()
        .with_locator(Locator::Path(PLAYLIST.to_string()))
        .with_default_locator("sounds/config/default.sounds");
    SoundRegistry::new(DirResources::new(root), config)
}

#[test]
fn skips_comments_blanks_and_missing_entries() {
    let dir = tempfile::tempdir().unwrap();
    write_sounds(dir.path(), &["a.wav", "b.wav"]);
    write(
        dir.path(),
        PLAYLIST,
        "a.wav\n# comment\n\nmissing.wav\nb.wav\n",
    );

    let registry = registry_at(dir.path());
    let report = registry.ensure_initialized().expect("first init reports");

    assert_eq!(report.outcome, ReloadOutcome::Loaded { count: 2 });
    assert_eq!(registry.sources(), ["a.wav", "b.wav"]);
    assert!(matches!(
        report.diagnostics.as_slice(),
        [SoundError::EntryNotFound { line: 4, path, .. }] if path == "missing.wav"
    ));
}

#[test]
fn loads_exactly_the_resolvable_entries() {
    let dir = tempfile::tempdir().unwrap();
    let mut playlist = String::new();
    let mut expected = Vec::new();

    for i in 0..6 {
        let good = format!("sounds/good{i}.wav");
        write_sounds(dir.path(), &[good.as_str()]);
        playlist.push_str(&good);
        playlist.push('\n');
        expected.push(good);

        // Interleave one missing and one corrupt entry
        if i % 2 == 0 {
            playlist.push_str(&format!("sounds/missing{i}.wav\n"));
        } else {
            let bad = format!("sounds/corrupt{i}.wav");
            write(dir.path(), &bad, b"RIFF but not really");
            playlist.push_str(&bad);
            playlist.push('\n');
        }
    }
    write(dir.path(), PLAYLIST, &playlist);

    let registry = registry_at(dir.path());
    let report = registry.reload_configured();

    assert_eq!(report.loaded(), 6);
    assert_eq!(registry.sources(), expected);
    assert_eq!(report.skipped_entries().count(), 6);
    let not_found = report
        .diagnostics
        .iter()
        .filter(|d| matches!(d, SoundError::EntryNotFound { .. }))
        .count();
    let failed = report
        .diagnostics
        .iter()
        .filter(|d| matches!(d, SoundError::EntryLoadFailed { .. }))
        .count();
    assert_eq!((not_found, failed), (3, 3));
}

#[test]
fn disable_clears_previous_sounds() {
    let dir = tempfile::tempdir().unwrap();
    write_sounds(dir.path(), &["a.wav"]);
    write(dir.path(), PLAYLIST, "a.wav");

    let registry = registry_at(dir.path());
    registry.reload_configured();
    assert_eq!(registry.len(), 1);

    let report = registry.reload(&Locator::Disabled);
    assert_eq!(report.outcome, ReloadOutcome::Disabled);
    assert!(registry.is_empty());
    assert!(registry.pick_random_default().is_none());
}

#[test]
fn missing_config_keeps_previous_sounds() {
    let dir = tempfile::tempdir().unwrap();
    write_sounds(dir.path(), &["a.wav", "b.wav"]);
    write(dir.path(), PLAYLIST, "a.wav\nb.wav");

    let registry = registry_at(dir.path());
    registry.reload_configured();

    let report = registry.reload(&Locator::Path("sounds/config/nope.sounds".into()));

    assert_eq!(report.outcome, ReloadOutcome::Unchanged { kept: 2 });
    assert!(report.config.is_none());
    assert!(matches!(
        report.diagnostics.as_slice(),
        [SoundError::ConfigNotFound { .. }]
    ));
    assert_eq!(registry.sources(), ["a.wav", "b.wav"]);
}

#[test]
fn missing_config_falls_back_to_default() {
    let dir = tempfile::tempdir().unwrap();
    write_sounds(dir.path(), &["default.wav"]);
    write(dir.path(), "sounds/config/default.sounds", "default.wav");

    let registry = registry_at(dir.path());
    let report = registry.reload(&Locator::Path("sounds/config/nope.sounds".into()));

    assert_eq!(report.loaded(), 1);
    assert_eq!(report.config.as_deref(), Some("sounds/config/default.sounds"));
    assert!(matches!(
        report.diagnostics.as_slice(),
        [SoundError::DefaultConfigUsed { .. }]
    ));
    assert_eq!(registry.sources(), ["default.wav"]);
}

#[test]
fn all_entries_failing_keeps_previous_sounds() {
    let dir = tempfile::tempdir().unwrap();
    write_sounds(dir.path(), &["a.wav"]);
    write(dir.path(), PLAYLIST, "a.wav");
    write(dir.path(), "broken.sounds", "gone.wav\n# nothing else\n");

    let registry = registry_at(dir.path());
    registry.reload_configured();

    let report = registry.reload(&Locator::Path("broken.sounds".into()));

    assert_eq!(report.outcome, ReloadOutcome::Unchanged { kept: 1 });
    assert!(matches!(
        report.diagnostics.last(),
        Some(SoundError::NoEntriesLoaded { kept: 1, .. })
    ));
    assert_eq!(registry.sources(), ["a.wav"]);
}

#[test]
fn unreadable_config_keeps_previous_sounds() {
    let dir = tempfile::tempdir().unwrap();
    write_sounds(dir.path(), &["a.wav"]);
    write(dir.path(), PLAYLIST, "a.wav");
    write(dir.path(), "binary.sounds", [0xffu8, 0xfe, 0x00, 0xc3]);

    let registry = registry_at(dir.path());
    registry.reload_configured();

    let report = registry.reload(&Locator::Path("binary.sounds".into()));

    assert!(report.is_unchanged());
    assert!(report.has_errors());
    assert!(matches!(
        report.diagnostics.as_slice(),
        [SoundError::Io { .. }]
    ));
    assert_eq!(registry.len(), 1);
}

#[test]
fn reload_picks_up_playlist_edits() {
    let dir = tempfile::tempdir().unwrap();
    write_sounds(dir.path(), &["a.wav", "b.wav", "c.wav"]);
    write(dir.path(), PLAYLIST, "a.wav");

    let registry = registry_at(dir.path());
    registry.reload_configured();
    assert_eq!(registry.sources(), ["a.wav"]);

    fs::write(dir.path().join(PLAYLIST), "c.wav\nb.wav\n").unwrap();
    registry.reload_configured();
    assert_eq!(registry.sources(), ["c.wav", "b.wav"]);
}

#[test]
fn empty_registry_never_picks() {
    let dir = tempfile::tempdir().unwrap();
    let registry = registry_at(dir.path());
    let mut rng = StdRng::seed_from_u64(3);

    for _ in 0..100 {
        assert!(registry.pick_random(&mut rng).is_none());
    }
}

#[test]
fn seeded_pick_matches_seeded_draw() {
    let dir = tempfile::tempdir().unwrap();
    let names = ["s0.wav", "s1.wav", "s2.wav", "s3.wav", "s4.wav"];
    write_sounds(dir.path(), &names);
    write(dir.path(), PLAYLIST, names.join("\n"));

    let registry = registry_at(dir.path());
    registry.reload_configured();

    for seed in 0..20 {
        let k = StdRng::seed_from_u64(seed).random_range(0..names.len());
        let clip = registry
            .pick_random(&mut StdRng::seed_from_u64(seed))
            .unwrap();
        assert_eq!(clip.source(), names[k]);
    }
}

#[test]
fn picks_cover_all_sounds_evenly() {
    let dir = tempfile::tempdir().unwrap();
    let names = ["w.wav", "x.wav", "y.wav", "z.wav"];
    write_sounds(dir.path(), &names);
    write(dir.path(), PLAYLIST, names.join("\n"));

    let registry = registry_at(dir.path());
    registry.reload_configured();

    let draws = 40_000;
    let mut counts = [0usize; 4];
    let mut rng = StdRng::seed_from_u64(42);
    for _ in 0..draws {
        let clip = registry.pick_random(&mut rng).unwrap();
        let idx = names.iter().position(|n| *n == clip.source()).unwrap();
        counts[idx] += 1;
    }

    let expected = draws / names.len();
    for count in counts {
        assert!(
            count.abs_diff(expected) < expected / 10,
            "uneven distribution: {counts:?}"
        );
    }
}
