use cabinet_bim_editor::{
    AppCommand, AppController, AppState, BimObject, BimObjectKind, Layer, ObjectPatch,
    TransformPatch,
};
use glam::Vec3;

fn wall(id: &str) -> BimObject {
    BimObject::new(id.to_string(), BimObjectKind::Wall, format!("Wand {id}"))
}

/// Deep-Equality-Abdruck des Szenen-Zustands für Vergleich über Undo/Redo.
fn scene_fingerprint(state: &AppState) -> Vec<BimObject> {
    state.scene.objects_iter().cloned().collect()
}

#[test]
fn test_undo_redo_roundtrip_over_mutation_sequence() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    let initial = scene_fingerprint(&state);

    // N Mutationen, Abdruck nach jedem Schritt festhalten
    let commands = vec![
        AppCommand::AddObject { object: wall("w1") },
        AppCommand::AddObject { object: wall("w2") },
        AppCommand::UpdateObject {
            id: "w1".into(),
            patch: ObjectPatch {
                name: Some("Wand Süd".into()),
                ..ObjectPatch::default()
            },
        },
        AppCommand::TransformObject {
            id: "w2".into(),
            patch: TransformPatch {
                position: Some(Vec3::new(4.0, 0.0, 1.5)),
                ..TransformPatch::default()
            },
        },
        AppCommand::DeleteObject { id: "w1".into() },
    ];

    let mut fingerprints = vec![initial];
    for command in commands {
        controller
            .handle_command(&mut state, command)
            .expect("Mutation sollte funktionieren");
        fingerprints.push(scene_fingerprint(&state));
    }
    let step_count = fingerprints.len() - 1;

    // N-mal Undo führt schrittweise exakt zu den früheren Abdrücken zurück
    for step in (0..step_count).rev() {
        controller
            .handle_command(&mut state, AppCommand::Undo)
            .expect("Undo sollte funktionieren");
        assert_eq!(scene_fingerprint(&state), fingerprints[step]);
    }
    assert!(!state.can_undo());

    // N-mal Redo stellt die Abdrücke in Vorwärtsrichtung wieder her
    for step in 1..=step_count {
        controller
            .handle_command(&mut state, AppCommand::Redo)
            .expect("Redo sollte funktionieren");
        assert_eq!(scene_fingerprint(&state), fingerprints[step]);
    }
    assert!(!state.can_redo());
}

#[test]
fn test_fresh_mutation_truncates_redo_tail() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    controller
        .handle_command(&mut state, AppCommand::AddObject { object: wall("w1") })
        .expect("AddObject sollte funktionieren");
    controller
        .handle_command(&mut state, AppCommand::Undo)
        .expect("Undo sollte funktionieren");
    assert!(state.can_redo());

    controller
        .handle_command(&mut state, AppCommand::AddObject { object: wall("w2") })
        .expect("AddObject sollte funktionieren");
    assert!(!state.can_redo());
}

#[test]
fn test_undo_restores_selection() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    controller
        .handle_command(&mut state, AppCommand::AddObject { object: wall("w1") })
        .expect("AddObject sollte funktionieren");
    assert!(state.selection.selected_object_ids.contains("w1"));

    controller
        .handle_command(&mut state, AppCommand::DeleteObject { id: "w1".into() })
        .expect("DeleteObject sollte funktionieren");
    assert!(state.selection.selected_object_ids.is_empty());

    controller
        .handle_command(&mut state, AppCommand::Undo)
        .expect("Undo sollte funktionieren");
    assert!(state.scene.contains_object("w1"));
    assert!(state.selection.selected_object_ids.contains("w1"));
}

#[test]
fn test_undo_after_remove_layer_restores_references() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    controller
        .handle_command(
            &mut state,
            AppCommand::AddLayer {
                layer: Layer::new("l1".into(), "Rohbau".into(), [0.6; 4]),
            },
        )
        .expect("AddLayer sollte funktionieren");
    let mut object = wall("w1");
    object.layer_id = Some("l1".into());
    controller
        .handle_command(&mut state, AppCommand::AddObject { object })
        .expect("AddObject sollte funktionieren");

    controller
        .handle_command(&mut state, AppCommand::RemoveLayer { id: "l1".into() })
        .expect("RemoveLayer sollte funktionieren");
    assert_eq!(state.scene.object("w1").unwrap().layer_id, None);
    assert!(state.scene.layer("l1").is_none());

    controller
        .handle_command(&mut state, AppCommand::Undo)
        .expect("Undo sollte funktionieren");
    assert_eq!(
        state.scene.object("w1").unwrap().layer_id.as_deref(),
        Some("l1")
    );
    assert!(state.scene.layer("l1").is_some());
}

#[test]
fn test_undo_on_empty_history_is_noop() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    controller
        .handle_command(&mut state, AppCommand::Undo)
        .expect("Undo auf leerer History sollte robust sein");
    assert_eq!(state.object_count(), 0);
}
