use cabinet_bim_editor::{
    AppCommand, AppController, AppState, BimObject, BimObjectKind, Building, Layer, Level, Site,
};

fn make_test_state() -> (AppController, AppState) {
    (AppController::new(), AppState::new())
}

/// Baut einen Zustand mit S1 → B1 → L1 und einem platzierten Objekt "obj-1".
fn make_populated_state() -> (AppController, AppState) {
    let (mut controller, mut state) = make_test_state();
    controller
        .handle_command(
            &mut state,
            AppCommand::AddSite {
                site: Site::new("S1".into(), "Standort".into(), 52.52, 13.405),
            },
        )
        .expect("AddSite sollte funktionieren");
    controller
        .handle_command(
            &mut state,
            AppCommand::AddBuilding {
                building: Building::new("B1".into(), "Haus A".into(), "S1".into()),
            },
        )
        .expect("AddBuilding sollte funktionieren");
    controller
        .handle_command(
            &mut state,
            AppCommand::AddLevel {
                level: Level::new("L1".into(), "EG".into(), "B1".into(), 0.0, 3.0),
            },
        )
        .expect("AddLevel sollte funktionieren");
    controller
        .handle_command(
            &mut state,
            AppCommand::AddObject {
                object: BimObject::new("obj-1".into(), BimObjectKind::Wall, "Wand Nord".into()),
            },
        )
        .expect("AddObject sollte funktionieren");
    (controller, state)
}

#[test]
fn test_commands_are_recorded_in_log() {
    let (mut controller, mut state) = make_test_state();

    controller
        .handle_command(&mut state, AppCommand::DeselectAllObjects)
        .expect("DeselectAllObjects sollte funktionieren");

    let last = state
        .command_log
        .entries()
        .last()
        .expect("Es sollte ein Command geloggt sein");
    match last {
        AppCommand::DeselectAllObjects => {}
        other => panic!("Unerwarteter letzter Command: {other:?}"),
    }
}

#[test]
fn test_add_object_selects_it() {
    let (_controller, state) = make_populated_state();
    assert_eq!(state.object_count(), 1);
    assert!(state.selection.selected_object_ids.contains("obj-1"));
    assert_eq!(
        state.selection.selection_anchor_object_id.as_deref(),
        Some("obj-1")
    );
}

#[test]
fn test_object_deletion_clears_selection() {
    // Szenario: Objekt selektieren, löschen — Selektion und Szene sind leer
    let (mut controller, mut state) = make_populated_state();
    controller
        .handle_command(
            &mut state,
            AppCommand::SelectObject {
                id: "obj-1".into(),
                additive: false,
            },
        )
        .expect("SelectObject sollte funktionieren");

    controller
        .handle_command(&mut state, AppCommand::DeleteObject { id: "obj-1".into() })
        .expect("DeleteObject sollte funktionieren");

    assert!(!state.selection.selected_object_ids.contains("obj-1"));
    assert!(state.scene.object("obj-1").is_none());
}

#[test]
fn test_layer_deletion_preserves_objects() {
    // Szenario: Objekt referenziert Layer; Layer löschen lässt das Objekt leben
    let (mut controller, mut state) = make_test_state();
    controller
        .handle_command(
            &mut state,
            AppCommand::AddLayer {
                layer: Layer::new("layer-2".into(), "Möbel".into(), [0.5; 4]),
            },
        )
        .expect("AddLayer sollte funktionieren");

    let mut object = BimObject::new("wall-1".into(), BimObjectKind::Wall, "Wand".into());
    object.layer_id = Some("layer-2".into());
    controller
        .handle_command(&mut state, AppCommand::AddObject { object })
        .expect("AddObject sollte funktionieren");

    controller
        .handle_command(&mut state, AppCommand::RemoveLayer { id: "layer-2".into() })
        .expect("RemoveLayer sollte funktionieren");

    let object = state
        .scene
        .object("wall-1")
        .expect("Objekt muss erhalten bleiben");
    assert_eq!(object.layer_id, None);
}

#[test]
fn test_new_objects_inherit_active_layer() {
    let (mut controller, mut state) = make_test_state();
    controller
        .handle_command(
            &mut state,
            AppCommand::AddLayer {
                layer: Layer::new("l1".into(), "Standard".into(), [0.7; 4]),
            },
        )
        .expect("AddLayer sollte funktionieren");
    controller
        .handle_command(
            &mut state,
            AppCommand::SetActiveLayer {
                id: Some("l1".into()),
            },
        )
        .expect("SetActiveLayer sollte funktionieren");

    controller
        .handle_command(
            &mut state,
            AppCommand::AddObject {
                object: BimObject::new("c1".into(), BimObjectKind::Cabinet, "Korpus".into()),
            },
        )
        .expect("AddObject sollte funktionieren");

    assert_eq!(
        state.scene.object("c1").unwrap().layer_id.as_deref(),
        Some("l1")
    );
}

#[test]
fn test_duplicate_object_id_fails_without_corrupting_state() {
    let (mut controller, mut state) = make_populated_state();
    let before = state.scene.object("obj-1").unwrap().clone();

    let result = controller.handle_command(
        &mut state,
        AppCommand::AddObject {
            object: BimObject::new("obj-1".into(), BimObjectKind::Door, "Tür".into()),
        },
    );
    assert!(result.is_err());

    assert_eq!(state.object_count(), 1);
    assert_eq!(state.scene.object("obj-1").unwrap(), &before);
}

#[test]
fn test_assign_object_to_level_updates_both_components() {
    let (mut controller, mut state) = make_populated_state();

    controller
        .handle_command(
            &mut state,
            AppCommand::AssignObjectToLevel {
                object_id: "obj-1".into(),
                level_id: "L1".into(),
            },
        )
        .expect("AssignObjectToLevel sollte funktionieren");

    // Beide Seiten sehen die Zuordnung
    assert_eq!(
        state.scene.object("obj-1").unwrap().level_id.as_deref(),
        Some("L1")
    );
    assert_eq!(
        state.hierarchy.object_ref("obj-1").unwrap().level_id,
        "L1"
    );
    assert!(state
        .hierarchy
        .level("L1")
        .unwrap()
        .objects
        .contains(&"obj-1".to_string()));
}

#[test]
fn test_remove_level_detaches_scene_objects() {
    let (mut controller, mut state) = make_populated_state();
    controller
        .handle_command(
            &mut state,
            AppCommand::AssignObjectToLevel {
                object_id: "obj-1".into(),
                level_id: "L1".into(),
            },
        )
        .expect("AssignObjectToLevel sollte funktionieren");

    controller
        .handle_command(&mut state, AppCommand::RemoveLevel { id: "L1".into() })
        .expect("RemoveLevel sollte funktionieren");

    // Objekt lebt weiter, Referenz und Registrierung sind gelöst
    let object = state
        .scene
        .object("obj-1")
        .expect("Objekt muss erhalten bleiben");
    assert_eq!(object.level_id, None);
    assert!(state.hierarchy.object_ref("obj-1").is_none());
}

#[test]
fn test_delete_object_unregisters_from_hierarchy() {
    let (mut controller, mut state) = make_populated_state();
    controller
        .handle_command(
            &mut state,
            AppCommand::AssignObjectToLevel {
                object_id: "obj-1".into(),
                level_id: "L1".into(),
            },
        )
        .expect("AssignObjectToLevel sollte funktionieren");

    controller
        .handle_command(&mut state, AppCommand::DeleteObject { id: "obj-1".into() })
        .expect("DeleteObject sollte funktionieren");

    assert!(state.hierarchy.object_ref("obj-1").is_none());
    assert!(state
        .hierarchy
        .level("L1")
        .unwrap()
        .objects
        .is_empty());
}

#[test]
fn test_drop_object_node_keeps_scene_reference_in_sync() {
    let (mut controller, mut state) = make_populated_state();
    controller
        .handle_command(
            &mut state,
            AppCommand::AddLevel {
                level: Level::new("L2".into(), "OG".into(), "B1".into(), 3.0, 3.0),
            },
        )
        .expect("AddLevel sollte funktionieren");
    controller
        .handle_command(
            &mut state,
            AppCommand::AssignObjectToLevel {
                object_id: "obj-1".into(),
                level_id: "L1".into(),
            },
        )
        .expect("AssignObjectToLevel sollte funktionieren");

    controller
        .handle_command(
            &mut state,
            AppCommand::DropNode {
                source_id: "obj-1".into(),
                target_id: "L2".into(),
            },
        )
        .expect("DropNode sollte funktionieren");

    assert_eq!(
        state.scene.object("obj-1").unwrap().level_id.as_deref(),
        Some("L2")
    );
    assert_eq!(state.hierarchy.object_ref("obj-1").unwrap().level_id, "L2");
}

#[test]
fn test_invalid_drop_is_rejected() {
    let (mut controller, mut state) = make_populated_state();

    let result = controller.handle_command(
        &mut state,
        AppCommand::DropNode {
            source_id: "S1".into(),
            target_id: "B1".into(),
        },
    );
    assert!(result.is_err());
}

#[test]
fn test_node_selection_via_commands() {
    let (mut controller, mut state) = make_populated_state();

    controller
        .handle_command(
            &mut state,
            AppCommand::SelectNode {
                id: "L1".into(),
                additive: false,
            },
        )
        .expect("SelectNode sollte funktionieren");

    assert!(state.hierarchy.is_selected("L1"));
    // expand_on_select klappt die Vorfahren auf
    assert!(state.hierarchy.is_expanded("S1"));
    assert!(state.hierarchy.is_expanded("B1"));

    controller
        .handle_command(&mut state, AppCommand::ClearNodeSelection)
        .expect("ClearNodeSelection sollte funktionieren");
    assert!(state.hierarchy.selected_ids().is_empty());
}

#[test]
fn test_apply_options_keeps_history_when_depth_unchanged() {
    let (mut controller, mut state) = make_populated_state();
    assert!(state.can_undo());

    let options = state.options.clone();
    controller
        .handle_command(&mut state, AppCommand::ApplyOptions { options })
        .expect("ApplyOptions sollte funktionieren");
    assert!(state.can_undo());
}
