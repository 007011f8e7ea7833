use naval_battle::{ScoreError, ScoreTable, WIN_BONUS};

#[test]
fn test_award_accumulates() {
    let mut table = ScoreTable::new();
    assert_eq!(table.award_win("ana").unwrap().points, WIN_BONUS);
    assert_eq!(table.award_win("  ana ").unwrap().points, 2 * WIN_BONUS);
    assert_eq!(table.award_win("bo").unwrap().points, WIN_BONUS);
    assert_eq!(table.total_for("ana"), 20);
    assert_eq!(table.total_for("nobody"), 0);
    assert_eq!(table.entries().len(), 3);
}

#[test]
fn test_empty_name_rejected() {
    let mut table = ScoreTable::new();
    assert!(matches!(table.award_win("   "), Err(ScoreError::EmptyPlayerName)));
    assert!(table.entries().is_empty());
}

#[test]
fn test_top_orders_and_limits() {
    let mut table = ScoreTable::new();
    for name in ["cy", "ana", "bo", "ana", "cy", "ana"] {
        table.award_win(name).unwrap();
    }
    let top = table.top(10);
    let names: Vec<_> = top.iter().map(|e| (e.player.as_str(), e.points)).collect();
    assert_eq!(names, vec![("ana", 30), ("cy", 20), ("bo", 10)]);
    assert_eq!(table.top(1).len(), 1);
}

#[test]
fn test_save_and_load() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("scores.json");

    let empty = ScoreTable::load(&path).unwrap();
    assert!(empty.entries().is_empty());

    let mut table = ScoreTable::new();
    table.award_win("ana").unwrap();
    table.award_win("bo").unwrap();
    table.save(&path).unwrap();

    let loaded = ScoreTable::load(&path).unwrap();
    assert_eq!(loaded, table);
}

#[test]
fn test_load_rejects_garbage() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("scores.json");
    std::fs::write(&path, "not json").unwrap();
    assert!(matches!(ScoreTable::load(&path), Err(ScoreError::Json(_))));
}

#[test]
fn test_entries_carry_timestamp() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("scores.json");

    let mut table = ScoreTable::new();
    assert!(table.award_win("ana").unwrap().recorded_at > 0);
    assert_eq!(table.award_win_at("bo", 1_700_000_000).unwrap().recorded_at, 1_700_000_000);
    table.save(&path).unwrap();

    let loaded = ScoreTable::load(&path).unwrap();
    assert_eq!(loaded.entries()[1].recorded_at, 1_700_000_000);
    assert_eq!(loaded.top(10)[1].recorded_at, 1_700_000_000);
}

#[test]
fn test_load_entries_without_timestamp() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("scores.json");
    std::fs::write(&path, r#"{"entries":[{"player":"ana","points":10}]}"#).unwrap();
    let table = ScoreTable::load(&path).unwrap();
    assert_eq!(table.entries()[0].recorded_at, 0);
    assert_eq!(table.total_for("ana"), 10);
}
