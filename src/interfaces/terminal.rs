use std::fmt::Write;

use crate::application::dtos::trash_dto::{DocumentTileDto, TrashViewState, EMPTY_HINT, EMPTY_TITLE};

pub const LOADING_TEXT: &str = "Loading trash...";

/// Renders the view state as plain text for the terminal
pub fn render(state: &TrashViewState) -> String {
    match state {
        TrashViewState::Loading => format!("{}\n", LOADING_TEXT),
        TrashViewState::Error(message) => format!("{}\n", message),
        TrashViewState::Empty => format!("{}\n{}\n", EMPTY_TITLE, EMPTY_HINT),
        TrashViewState::Populated { tiles, error } => {
            let mut out = String::new();
            if let Some(message) = error {
                let _ = writeln!(out, "{}\n", message);
            }
            for (i, tile) in tiles.iter().enumerate() {
                if i > 0 {
                    out.push('\n');
                }
                render_tile(&mut out, tile);
            }
            out
        }
    }
}

fn render_tile(out: &mut String, tile: &DocumentTileDto) {
    let _ = writeln!(
        out,
        "[{}] {}  {}  {}",
        tile.type_badge, tile.name, tile.size_label, tile.language_flag
    );
    let _ = writeln!(out, "    {}", tile.deleted_on_label);
    if !tile.summary.is_empty() {
        let _ = writeln!(out, "    {}", tile.summary);
    }
    let _ = writeln!(out, "    id: {}", tile.id);
}
