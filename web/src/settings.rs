use crate::utils::*;
use memorito_core as game;
use serde::{Deserialize, Serialize};

#[derive(Copy, Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub(crate) struct Settings {
    pub grid_size: game::GridSize,
}

impl StorageKey for Settings {
    const KEY: &'static str = "memorito:settings:v1";
}

/// Mirror of the grid-size text field: the raw text being edited plus the
/// last size that was actually adopted.
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct GridSizeField {
    text: String,
    size: game::GridSize,
}

impl GridSizeField {
    pub(crate) fn new(size: game::GridSize) -> Self {
        Self {
            text: size.to_string(),
            size,
        }
    }

    pub(crate) fn text(&self) -> &str {
        &self.text
    }

    pub(crate) fn size(&self) -> game::GridSize {
        self.size
    }

    /// Applies one edit of the field. Returns the new size only when the edit
    /// adopted a different valid size, which is what redeals the board.
    pub(crate) fn set_input(&mut self, value: &str) -> Option<game::GridSize> {
        if value.is_empty() {
            // mid-edit: keep the board and the last adopted size
            self.text.clear();
            return None;
        }

        match value.parse().ok().and_then(|n| game::GridSize::new(n).ok()) {
            Some(size) => {
                self.text = value.to_string();
                if size == self.size {
                    None
                } else {
                    self.size = size;
                    Some(size)
                }
            }
            None => {
                log::debug!("grid size input {:?} rejected", value);
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn field() -> GridSizeField {
        GridSizeField::new(game::GridSize::default())
    }

    #[test]
    fn empty_input_keeps_the_adopted_size() {
        let mut field = field();

        assert_eq!(field.set_input(""), None);
        assert_eq!(field.text(), "");
        assert_eq!(field.size().get(), 4);
    }

    #[test]
    fn out_of_range_and_non_numeric_input_is_rejected() {
        let mut field = field();

        for input in ["1", "11", "0", "abc", "4x", "-3", "2.5"] {
            assert_eq!(field.set_input(input), None, "input {:?}", input);
            assert_eq!(field.text(), "4");
            assert_eq!(field.size().get(), 4);
        }
    }

    #[test]
    fn new_valid_size_is_adopted_and_signals_a_redeal() {
        let mut field = field();

        let adopted = field.set_input("6");
        assert_eq!(adopted.map(game::GridSize::get), Some(6));
        assert_eq!(field.text(), "6");
        assert_eq!(field.size().get(), 6);
    }

    #[test]
    fn retyping_the_current_size_does_not_redeal() {
        let mut field = field();

        assert_eq!(field.set_input(""), None);
        assert_eq!(field.set_input("4"), None);
        assert_eq!(field.text(), "4");
        assert_eq!(field.size().get(), 4);
    }
}
