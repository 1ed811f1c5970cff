use std::{
    fs,
    path::PathBuf,
    sync::atomic::{AtomicUsize, Ordering},
};

use gravitas_models::{BatchError, BatchRunner, BodyState, InitialConditions, SimulationError};

/// Creates an empty directory unique to this test run.
fn scratch_dir(name: &str) -> PathBuf {
    static COUNTER: AtomicUsize = AtomicUsize::new(0);

    let dir = std::env::temp_dir().join(format!(
        "gravitas-{name}-{}-{}",
        std::process::id(),
        COUNTER.fetch_add(1, Ordering::Relaxed)
    ));
    let _ = fs::remove_dir_all(&dir);
    fs::create_dir_all(&dir).expect("scratch dir should be creatable");
    dir
}

#[test]
fn solar_system_writes_one_file_per_body() {
    let dir = scratch_dir("solar");
    let table = InitialConditions::solar_system();
    let mut completed = Vec::new();

    let records = BatchRunner::new(&dir)
        .run_with(&table, |record| completed.push(record.body.clone()))
        .expect("batch should succeed");

    assert_eq!(records.len(), 9);
    assert_eq!(
        completed,
        table.iter().map(|b| b.name().to_owned()).collect::<Vec<_>>()
    );

    for body in &table {
        let path = dir.join(format!("{}_motion.csv", body.name()));
        let text = fs::read_to_string(&path).expect("file should exist");
        let mut lines = text.lines();

        assert_eq!(lines.next(), Some("time,x,y,vx,vy"));
        let rows: Vec<&str> = lines.collect();
        assert_eq!(rows.len(), 1000, "{}", body.name());
        assert!(rows[0].starts_with("0.0,"));
        assert!(rows[999].starts_with("31540000.0,"));
    }

    for record in &records {
        assert_eq!(record.samples, 1000);
        assert!(record.stats.accepted > 0);
    }

    fs::remove_dir_all(dir).ok();
}

#[test]
fn failure_halts_the_batch_and_keeps_earlier_files() {
    let dir = scratch_dir("halt");
    let table = InitialConditions::new([
        ("Earth", BodyState::new(1.4710e11, 0.0, 0.0, 3.0287e4)),
        ("Origin", BodyState::new(0.0, 0.0, 0.0, 0.0)),
        ("Mars", BodyState::new(2.279e11, 0.0, 0.0, 2.41e4)),
    ])
    .expect("names are unique");

    let result = BatchRunner::new(&dir).run(&table);

    let Err(BatchError::Simulation { body, source }) = result else {
        panic!("expected a simulation error");
    };
    assert_eq!(body, "Origin");
    assert!(matches!(source, SimulationError::Solver(_)));
    assert!(dir.join("Earth_motion.csv").exists());
    assert!(!dir.join("Origin_motion.csv").exists());
    assert!(!dir.join("Mars_motion.csv").exists());

    fs::remove_dir_all(dir).ok();
}

#[test]
fn missing_output_dir_is_a_write_error() {
    let dir = scratch_dir("missing").join("does-not-exist");
    let table = InitialConditions::solar_system();

    let result = BatchRunner::new(&dir).run(&table);

    let Err(BatchError::Write { body, path, .. }) = result else {
        panic!("expected a write error");
    };
    assert_eq!(body, "Mercury");
    assert_eq!(path, dir.join("Mercury_motion.csv"));
}
