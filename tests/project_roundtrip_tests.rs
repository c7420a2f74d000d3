use cabinet_bim_editor::{
    parse_project_json, project_from_document, write_project_json, BimObject, BimObjectKind,
    Building, HierarchyManager, Layer, Level, ObjectPatch, SceneModel, Site, Transform,
};
use glam::Vec3;
use indexmap::IndexMap;

/// Baut ein repräsentatives Projekt: zwei Standorte, Layer, platzierte Objekte.
fn make_project() -> (SceneModel, HierarchyManager) {
    let mut hierarchy = HierarchyManager::new();
    hierarchy
        .add_site(Site::new("S1".into(), "Standort Mitte".into(), 52.52, 13.405))
        .expect("Standort erwartet");
    hierarchy
        .add_site(Site::new("S2".into(), "Standort Süd".into(), 48.14, 11.58))
        .expect("Standort erwartet");
    hierarchy
        .add_building(Building::new("B1".into(), "Haus A".into(), "S1".into()))
        .expect("Gebäude erwartet");
    hierarchy
        .add_level(Level::new("L1".into(), "EG".into(), "B1".into(), 0.0, 3.0))
        .expect("Geschoss erwartet");
    hierarchy
        .add_level(Level::new("L2".into(), "OG".into(), "B1".into(), 3.0, 2.8))
        .expect("Geschoss erwartet");
    hierarchy.expand_node("S1");
    hierarchy.expand_node("B1");

    let mut scene = SceneModel::new();
    scene
        .add_layer(Layer::new("l-rohbau".into(), "Rohbau".into(), [0.6, 0.6, 0.6, 1.0]))
        .expect("Layer erwartet");
    scene
        .add_layer(Layer::new("l-moebel".into(), "Möbel".into(), [0.3, 0.5, 0.8, 1.0]))
        .expect("Layer erwartet");
    scene.set_active_layer(Some("l-moebel".into())).expect("aktiver Layer erwartet");

    let mut wall = BimObject::new("w1".into(), BimObjectKind::Wall, "Wand Nord".into());
    wall.layer_id = Some("l-rohbau".into());
    wall.level_id = Some("L1".into());
    wall.material_id = Some("mat-ks".into());
    wall.transform = Transform::at_position(Vec3::new(0.0, 0.0, 0.0));
    wall.geometry = serde_json::json!({ "start": [0.0, 0.0], "end": [4.5, 0.0], "thickness": 0.24 });
    let mut props = IndexMap::new();
    props.insert("fire_rating".to_string(), "F90".to_string());
    wall.properties = props;
    scene.add_object(wall).expect("Einfügen erwartet");

    let mut cabinet = BimObject::new("c1".into(), BimObjectKind::Cabinet, "Unterschrank".into());
    cabinet.layer_id = Some("l-moebel".into());
    cabinet.level_id = Some("L2".into());
    cabinet.transform = Transform::at_position(Vec3::new(1.2, 3.0, 0.6));
    scene.add_object(cabinet).expect("Einfügen erwartet");

    hierarchy
        .add_object_to_level("w1".into(), "Wand Nord".into(), "L1".into())
        .expect("Registrierung erwartet");
    hierarchy
        .add_object_to_level("c1".into(), "Unterschrank".into(), "L2".into())
        .expect("Registrierung erwartet");

    (scene, hierarchy)
}

#[test]
fn test_project_json_roundtrip_is_deep_equal() {
    let (scene, hierarchy) = make_project();

    let json = write_project_json(&scene, &hierarchy, Some("Küche Muster")).expect("Writer erwartet");
    let document = parse_project_json(&json).expect("Parser erwartet");
    assert_eq!(document.name.as_deref(), Some("Küche Muster"));

    let (restored_scene, restored_hierarchy) =
        project_from_document(document).expect("Aufbau erwartet");

    // Szene: Objekt-Reihenfolge, Layer-Referenzen, aktiver Layer
    let original_objects: Vec<&BimObject> = scene.objects_iter().collect();
    let restored_objects: Vec<&BimObject> = restored_scene.objects_iter().collect();
    assert_eq!(original_objects, restored_objects);
    assert_eq!(restored_scene.active_layer_id(), Some("l-moebel"));
    assert_eq!(restored_scene.layer_count(), 2);

    // Hierarchie: Verknüpfung, Expansion, Objekt-Registrierung
    assert_eq!(restored_hierarchy.to_document(), hierarchy.to_document());
    assert_eq!(restored_hierarchy.all_nodes(), hierarchy.all_nodes());
    assert!(restored_hierarchy.is_expanded("B1"));
    assert_eq!(restored_hierarchy.object_ref("w1").unwrap().level_id, "L1");
}

#[test]
fn test_second_roundtrip_is_stable() {
    let (scene, hierarchy) = make_project();

    let first = write_project_json(&scene, &hierarchy, None).expect("Writer erwartet");
    let (scene2, hierarchy2) =
        project_from_document(parse_project_json(&first).expect("Parser erwartet"))
            .expect("Aufbau erwartet");
    let second = write_project_json(&scene2, &hierarchy2, None).expect("Writer erwartet");

    assert_eq!(first, second);
}

#[test]
fn test_orphaned_level_reference_is_detached_on_load() {
    let (scene, hierarchy) = make_project();
    let json = write_project_json(&scene, &hierarchy, None).expect("Writer erwartet");

    // Geschoss L2 aus dem Dokument entfernen — c1 verweist dann ins Leere
    let mut document = parse_project_json(&json).expect("Parser erwartet");
    document.hierarchy.levels.retain(|level| level.id != "L2");
    document
        .hierarchy
        .buildings
        .iter_mut()
        .for_each(|building| building.levels.retain(|id| id != "L2"));

    let (restored_scene, restored_hierarchy) =
        project_from_document(document).expect("Aufbau erwartet");

    let cabinet = restored_scene
        .object("c1")
        .expect("Objekt muss erhalten bleiben");
    assert_eq!(cabinet.level_id, None);
    assert!(restored_hierarchy.object_ref("c1").is_none());
}

#[test]
fn test_update_after_roundtrip_behaves_identically() {
    let (scene, hierarchy) = make_project();
    let json = write_project_json(&scene, &hierarchy, None).expect("Writer erwartet");
    let (mut restored_scene, _) =
        project_from_document(parse_project_json(&json).expect("Parser erwartet"))
            .expect("Aufbau erwartet");

    restored_scene
        .update_object(
            "w1",
            ObjectPatch {
                material_id: Some("mat-beton".into()),
                ..ObjectPatch::default()
            },
        )
        .expect("Update erwartet");

    let wall = restored_scene.object("w1").unwrap();
    assert_eq!(wall.material_id.as_deref(), Some("mat-beton"));
    // Eigenschaften haben den Import überlebt
    assert_eq!(
        wall.properties.get("fire_rating").map(String::as_str),
        Some("F90")
    );
}
