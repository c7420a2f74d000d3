//! Application Controller für zentrale Command-Verarbeitung.

use super::use_cases;
use super::{AppCommand, AppState};

/// Orchestriert Commands und Use-Cases auf dem AppState.
#[derive(Default)]
pub struct AppController;

impl AppController {
    /// Erstellt einen neuen Controller.
    pub fn new() -> Self {
        Self
    }

    /// Führt mutierende Commands auf dem AppState aus.
    /// Dispatcht an die Use-Cases in `use_cases/`.
    pub fn handle_command(
        &mut self,
        state: &mut AppState,
        command: AppCommand,
    ) -> anyhow::Result<()> {
        state.command_log.record(&command);

        match command {
            // === Projekt-I/O ===
            AppCommand::NewProject => use_cases::file_io::new_project(state),
            AppCommand::LoadProject { path } => use_cases::file_io::load_project(state, &path)?,
            AppCommand::SaveProject { path } => use_cases::file_io::save_project(state, path)?,

            // === Objekte ===
            AppCommand::AddObject { object } => use_cases::editing::add_object(state, object)?,
            AppCommand::DeleteObject { id } => use_cases::editing::delete_object(state, &id),
            AppCommand::DeleteSelectedObjects => {
                use_cases::editing::delete_selected_objects(state)
            }
            AppCommand::UpdateObject { id, patch } => {
                use_cases::editing::update_object(state, &id, patch)?
            }
            AppCommand::TransformObject { id, patch } => {
                use_cases::editing::transform_object(state, &id, &patch)?
            }

            // === Objekt-Selektion ===
            AppCommand::SelectObject { id, additive } => {
                use_cases::selection::select_object(state, &id, additive)
            }
            AppCommand::SelectObjects { ids } => use_cases::selection::select_objects(state, &ids),
            AppCommand::DeselectAllObjects => use_cases::selection::deselect_all(state),

            // === Layer ===
            AppCommand::AddLayer { layer } => use_cases::layers::add_layer(state, layer)?,
            AppCommand::RemoveLayer { id } => use_cases::layers::remove_layer(state, &id),
            AppCommand::ToggleLayerVisibility { id } => {
                use_cases::layers::toggle_layer_visibility(state, &id)
            }
            AppCommand::SetLayerLocked { id, locked } => {
                use_cases::layers::set_layer_locked(state, &id, locked)
            }
            AppCommand::SetActiveLayer { id } => use_cases::layers::set_active_layer(state, id)?,

            // === Hierarchie-Struktur ===
            AppCommand::AddSite { site } => use_cases::structure::add_site(state, site)?,
            AppCommand::AddBuilding { building } => {
                use_cases::structure::add_building(state, building)?
            }
            AppCommand::AddLevel { level } => use_cases::structure::add_level(state, level)?,
            AppCommand::RemoveSite { id } => use_cases::structure::remove_site(state, &id),
            AppCommand::RemoveBuilding { id } => use_cases::structure::remove_building(state, &id),
            AppCommand::RemoveLevel { id } => use_cases::structure::remove_level(state, &id),
            AppCommand::MoveBuilding { id, target_site_id } => {
                use_cases::structure::move_building(state, &id, &target_site_id)?
            }
            AppCommand::MoveLevel {
                id,
                target_building_id,
            } => use_cases::structure::move_level(state, &id, &target_building_id)?,
            AppCommand::MoveObject {
                id,
                target_level_id,
            } => use_cases::structure::move_object(state, &id, &target_level_id)?,
            AppCommand::ReorderLevels {
                building_id,
                ordered_level_ids,
            } => use_cases::structure::reorder_levels(state, &building_id, &ordered_level_ids)?,
            AppCommand::RenameNode { id, name } => {
                use_cases::structure::rename_node(state, &id, name)?
            }
            AppCommand::DropNode {
                source_id,
                target_id,
            } => use_cases::structure::drop_node(state, &source_id, &target_id)?,

            // === Hierarchie-Interaktion ===
            AppCommand::SelectNode { id, additive } => {
                state.hierarchy.select_node(&id, additive)
            }
            AppCommand::DeselectNode { id } => state.hierarchy.deselect_node(&id),
            AppCommand::ClearNodeSelection => state.hierarchy.clear_selection(),
            AppCommand::ToggleNodeExpansion { id } => state.hierarchy.toggle_expansion(&id),
            AppCommand::ExpandAllNodes => state.hierarchy.expand_all(),
            AppCommand::CollapseAllNodes => state.hierarchy.collapse_all(),
            AppCommand::ToggleNodeVisibility { id } => {
                state.hierarchy.toggle_visibility(&id);
            }

            // === Platzierung ===
            AppCommand::AssignObjectToLevel {
                object_id,
                level_id,
            } => use_cases::placement::assign_object_to_level(state, &object_id, &level_id)?,
            AppCommand::DetachObjectFromLevel { object_id } => {
                use_cases::placement::detach_object_from_level(state, &object_id)
            }

            // === History ===
            AppCommand::Undo => use_cases::history::undo(state),
            AppCommand::Redo => use_cases::history::redo(state),

            // === Optionen ===
            AppCommand::ApplyOptions { options } => {
                let depth_changed = options.history_max_depth != state.options.history_max_depth;
                state.options = options;
                if depth_changed {
                    // Neue Tiefe greift nur für eine frische History
                    state.history = super::history::EditHistory::new_with_capacity(
                        state.options.history_max_depth,
                    );
                }
                log::info!("Optionen angewendet");
            }
            AppCommand::ResetOptions => {
                state.options = crate::shared::EditorOptions::default();
                log::info!("Optionen zurückgesetzt");
            }
        }

        Ok(())
    }
}
