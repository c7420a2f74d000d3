//! Cabinet BIM Editor — Headless-Werkzeug.
//!
//! Lädt ein Projektdokument, prüft Szene und Hierarchie und gibt die
//! Gebäudestruktur aus. Mit `--resave` wird das Dokument normalisiert
//! zurückgeschrieben (für Batch-Prüfungen und Format-Migrationen).

use cabinet_bim_editor::{
    parse_project_json, project_from_document, write_project_json, EditorOptions,
    HierarchyManager, NodeView, SceneModel,
};

fn main() -> anyhow::Result<()> {
    // Logger initialisieren
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    log::info!(
        "Cabinet BIM Editor v{} startet...",
        env!("CARGO_PKG_VERSION")
    );

    let args: Vec<String> = std::env::args().skip(1).collect();
    let (project_path, resave_path) = parse_args(&args)?;

    // Optionen neben der Binary (nur geladen, damit Fehlkonfiguration früh auffällt)
    let options = EditorOptions::load_from_file(&EditorOptions::config_path());
    log::debug!("History-Tiefe: {}", options.history_max_depth);

    let content = std::fs::read_to_string(&project_path)?;
    let document = parse_project_json(&content)?;
    let (scene, hierarchy) = project_from_document(document)?;

    print_summary(&scene, &hierarchy);
    print_tree(&hierarchy);

    if let Some(target) = resave_path {
        let json = write_project_json(&scene, &hierarchy, None)?;
        std::fs::write(&target, json)?;
        log::info!("Dokument normalisiert gespeichert nach: {}", target);
    }

    Ok(())
}

/// Parst `<projekt.json> [--resave <ziel.json>]`.
fn parse_args(args: &[String]) -> anyhow::Result<(String, Option<String>)> {
    let mut project_path = None;
    let mut resave_path = None;
    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--resave" => {
                resave_path = Some(
                    iter.next()
                        .ok_or_else(|| anyhow::anyhow!("--resave erwartet einen Zielpfad"))?
                        .clone(),
                );
            }
            _ => project_path = Some(arg.clone()),
        }
    }
    let project_path = project_path.ok_or_else(|| {
        anyhow::anyhow!("Aufruf: cabinet_bim_editor <projekt.json> [--resave <ziel.json>]")
    })?;
    Ok((project_path, resave_path))
}

/// Gibt die Kennzahlen des Projekts aus.
fn print_summary(scene: &SceneModel, hierarchy: &HierarchyManager) {
    println!(
        "Projekt: {} Standorte, {} Gebäude, {} Geschosse, {} Objekte, {} Layer",
        hierarchy.site_count(),
        hierarchy.building_count(),
        hierarchy.level_count(),
        scene.object_count(),
        scene.layer_count()
    );
}

/// Gibt die Gebäudestruktur als eingerückten Baum aus.
fn print_tree(hierarchy: &HierarchyManager) {
    for root in hierarchy.root_nodes() {
        print_node(hierarchy, &root, 0);
    }
}

fn print_node(hierarchy: &HierarchyManager, node: &NodeView, depth: usize) {
    println!("{}{} ({:?})", "  ".repeat(depth), node.name, node.node_type);
    for child_id in &node.children {
        if let Some(child) = hierarchy.node(child_id) {
            print_node(hierarchy, &child, depth + 1);
        }
    }
}
