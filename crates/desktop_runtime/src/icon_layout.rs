//! Draggable desktop icon positions, keyed by icon display name.
//!
//! Positions live independently from window geometry. Entries are written on every drag move
//! and never removed, so an uninstalled-then-reinstalled launcher keeps its spot.

use std::collections::BTreeMap;

use crate::model::WindowPosition;

/// X coordinate of the default icon column.
pub const ICON_COLUMN_X: i32 = 20;
/// Y coordinate of the first icon in the default column.
pub const ICON_ROW_ORIGIN_Y: i32 = 20;
/// Vertical distance between default icon slots.
pub const ICON_ROW_SPACING: i32 = 100;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct IconLayout {
    positions: BTreeMap<String, WindowPosition>,
}

impl IconLayout {
    /// Default slot for the icon at `index` in the launcher list.
    pub fn default_position(index: usize) -> WindowPosition {
        let row = i32::try_from(index).unwrap_or(i32::MAX / ICON_ROW_SPACING);
        WindowPosition::new(
            ICON_COLUMN_X,
            ICON_ROW_ORIGIN_Y.saturating_add(row.saturating_mul(ICON_ROW_SPACING)),
        )
    }

    /// Stored position for `icon_name`, falling back to the default slot for `index`.
    pub fn position(&self, icon_name: &str, index: usize) -> WindowPosition {
        self.positions
            .get(icon_name)
            .copied()
            .unwrap_or_else(|| Self::default_position(index))
    }

    /// Recorded position, if the icon has ever been moved.
    pub fn stored_position(&self, icon_name: &str) -> Option<WindowPosition> {
        self.positions.get(icon_name).copied()
    }

    pub fn set_position(&mut self, icon_name: &str, position: WindowPosition) {
        self.positions.insert(icon_name.to_string(), position);
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn unmoved_icons_use_deterministic_column_slots() {
        let layout = IconLayout::default();
        assert_eq!(layout.position("Terminal", 0), WindowPosition::new(20, 20));
        assert_eq!(layout.position("Terminal", 3), WindowPosition::new(20, 320));
        assert_eq!(layout.position("Terminal", 3), layout.position("Terminal", 3));
        assert_eq!(layout.stored_position("Terminal"), None);
    }

    #[test]
    fn set_then_get_returns_exact_position() {
        let mut layout = IconLayout::default();
        layout.set_position("Calculator", WindowPosition::new(10, 20));
        assert_eq!(layout.position("Calculator", 5), WindowPosition::new(10, 20));
    }

    #[test]
    fn later_writes_win() {
        let mut layout = IconLayout::default();
        layout.set_position("Files", WindowPosition::new(1, 1));
        layout.set_position("Files", WindowPosition::new(-40, 900));
        assert_eq!(layout.stored_position("Files"), Some(WindowPosition::new(-40, 900)));
    }

    #[test]
    fn huge_indices_saturate_instead_of_overflowing() {
        let slot = IconLayout::default_position(usize::MAX);
        assert_eq!(slot.x, ICON_COLUMN_X);
        assert!(slot.y > 0);
    }
}
