//! End-to-end flow tests with scripted collaborators

mod common;

use common::{csv_file, points, RecordingRenderer, ScriptedPicker};
use point_shift::loader::{LoadError, LoadOptions, RowErrorKind};
use point_shift::{run, Color, Delta, Outcome, RowPolicy, RunSettings};

#[test]
fn test_two_rows_render_original_then_translated() {
    let file = csv_file("x,y\n1.0,2.0\n3.0,4.0\n");
    let mut picker = ScriptedPicker::returning(file.path());
    let mut renderer = RecordingRenderer::default();

    let outcome = run(&mut picker, &mut renderer, &RunSettings::default()).unwrap();

    assert_eq!(
        outcome,
        Outcome::Rendered {
            points: 2,
            skipped: vec![]
        }
    );
    assert_eq!(renderer.calls.len(), 1);
    let (sets, colors) = &renderer.calls[0];
    assert_eq!(
        sets,
        &vec![
            points(&[(1.0, 2.0), (3.0, 4.0)]),
            points(&[(6.0, 5.0), (8.0, 7.0)]),
        ]
    );
    assert_eq!(colors, &vec![Color::BLUE, Color::RED]);
}

#[test]
fn test_cancelled_selection_renders_nothing() {
    let mut picker = ScriptedPicker::cancelling();
    let mut renderer = RecordingRenderer::default();

    let outcome = run(&mut picker, &mut renderer, &RunSettings::default()).unwrap();

    assert_eq!(outcome, Outcome::Cancelled);
    assert_eq!(picker.calls, 1);
    assert!(renderer.calls.is_empty());
}

#[test]
fn test_missing_file_renders_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let mut picker = ScriptedPicker::returning(dir.path().join("missing.csv"));
    let mut renderer = RecordingRenderer::default();

    let outcome = run(&mut picker, &mut renderer, &RunSettings::default()).unwrap();

    assert_eq!(outcome, Outcome::Empty { skipped: vec![] });
    assert!(renderer.calls.is_empty());
}

#[test]
fn test_header_only_renders_nothing() {
    let file = csv_file("x,y\n");
    let mut picker = ScriptedPicker::returning(file.path());
    let mut renderer = RecordingRenderer::default();

    let outcome = run(&mut picker, &mut renderer, &RunSettings::default()).unwrap();

    assert_eq!(outcome, Outcome::Empty { skipped: vec![] });
    assert!(renderer.calls.is_empty());
}

#[test]
fn test_malformed_row_aborts_without_render() {
    let file = csv_file("x,y\n1,2\n3,four\n");
    let mut picker = ScriptedPicker::returning(file.path());
    let mut renderer = RecordingRenderer::default();

    let err = run(&mut picker, &mut renderer, &RunSettings::default()).unwrap_err();

    let load_err = err.downcast_ref::<LoadError>().expect("LoadError in chain");
    match load_err {
        LoadError::MalformedRow(row) => {
            assert_eq!(row.line, 3);
            assert!(matches!(row.kind, RowErrorKind::NotANumber { column: 1, .. }));
        }
        other => panic!("Expected MalformedRow, got {:?}", other),
    }
    assert!(renderer.calls.is_empty());
}

#[test]
fn test_skip_policy_renders_valid_rows() {
    let file = csv_file("x,y\n1,2\nbad,row,here\n3,4\n");
    let mut picker = ScriptedPicker::returning(file.path());
    let mut renderer = RecordingRenderer::default();
    let settings = RunSettings {
        load: LoadOptions {
            policy: RowPolicy::Skip,
            ..LoadOptions::default()
        },
        ..RunSettings::default()
    };

    let outcome = run(&mut picker, &mut renderer, &settings).unwrap();

    match outcome {
        Outcome::Rendered { points, skipped } => {
            assert_eq!(points, 2);
            assert_eq!(skipped.len(), 1);
            assert_eq!(skipped[0].line, 3);
        }
        other => panic!("Expected Rendered, got {:?}", other),
    }
    assert_eq!(renderer.calls[0].0[1], points(&[(6.0, 5.0), (8.0, 7.0)]));
}

#[test]
fn test_every_row_skipped_is_empty() {
    let file = csv_file("x,y\na,b\n");
    let mut picker = ScriptedPicker::returning(file.path());
    let mut renderer = RecordingRenderer::default();
    let settings = RunSettings {
        load: LoadOptions {
            policy: RowPolicy::Skip,
            ..LoadOptions::default()
        },
        ..RunSettings::default()
    };

    let outcome = run(&mut picker, &mut renderer, &settings).unwrap();

    assert!(matches!(outcome, Outcome::Empty { ref skipped } if skipped.len() == 1));
    assert!(renderer.calls.is_empty());
}

#[test]
fn test_configured_delta_and_colors() {
    let file = csv_file("x,y\n0,0\n");
    let mut picker = ScriptedPicker::returning(file.path());
    let mut renderer = RecordingRenderer::default();
    let green = Color::rgb(0, 0x80, 0);
    let settings = RunSettings {
        delta: Delta::new(-1.0, 10.0),
        colors: [green, Color::BLUE],
        ..RunSettings::default()
    };

    run(&mut picker, &mut renderer, &settings).unwrap();

    let (sets, colors) = &renderer.calls[0];
    assert_eq!(sets[1], points(&[(-1.0, 10.0)]));
    assert_eq!(colors, &vec![green, Color::BLUE]);
}

#[test]
fn test_renderer_failure_is_propagated() {
    let file = csv_file("x,y\n1,1\n");
    let mut picker = ScriptedPicker::returning(file.path());
    let mut renderer = RecordingRenderer {
        fail_with: Some("no display".to_string()),
        ..RecordingRenderer::default()
    };

    let err = run(&mut picker, &mut renderer, &RunSettings::default()).unwrap_err();

    assert!(format!("{:#}", err).contains("no display"));
}
