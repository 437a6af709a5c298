//! Converter screen state
//!
//! The state is an immutable value; every user action produces a new state
//! through [`reduce`]. The transliterator is never mutated.

use crate::core::converter::{toggle_direction, Direction, Transliterator};

/// Input/output buffers and the active direction
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConverterState {
    pub input: String,
    pub output: String,
    pub direction: Direction,
}

impl ConverterState {
    pub fn new(direction: Direction) -> Self {
        Self {
            input: String::new(),
            output: String::new(),
            direction,
        }
    }
}

/// User actions on the converter
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Input edited: replace the input and reconvert
    Edit(String),
    /// Flip the direction and swap the buffers verbatim
    ToggleDirection,
    /// Empty both buffers
    Clear,
    /// Append a table entry (Latin key or glyph, per direction) and reconvert
    AppendGlyph(String),
    /// Change direction without touching the buffers
    SetDirection(Direction),
}

/// Applies `action` to `state`
///
/// After `ToggleDirection` the previous output becomes the new input
/// unconverted; it is only reconverted by the next `Edit`.
pub fn reduce(state: &ConverterState, action: Action, transliterator: &Transliterator) -> ConverterState {
    match action {
        Action::Edit(text) => {
            let output = transliterator.convert(&text, state.direction);
            ConverterState {
                input: text,
                output,
                direction: state.direction,
            }
        }
        Action::ToggleDirection => {
            let (input, output) = toggle_direction(state.input.clone(), state.output.clone());
            ConverterState {
                input,
                output,
                direction: state.direction.flipped(),
            }
        }
        Action::Clear => ConverterState::new(state.direction),
        Action::AppendGlyph(id) => {
            let Some(entry) = transliterator.table().get(&id) else {
                log::debug!("unknown glyph id '{}'", id);
                return state.clone();
            };
            let piece = match state.direction {
                Direction::LatinToScript => &entry.latin_char,
                Direction::ScriptToLatin => &entry.script_char,
            };
            let input = format!("{}{}", state.input, piece);
            reduce(state, Action::Edit(input), transliterator)
        }
        Action::SetDirection(direction) => ConverterState {
            direction,
            ..state.clone()
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn apply(state: &ConverterState, action: Action) -> ConverterState {
        reduce(state, action, Transliterator::reference())
    }

    #[test]
    fn test_edit_converts() {
        let state = apply(&ConverterState::default(), Action::Edit("ha na".into()));
        assert_eq!(state.input, "ha na");
        assert_eq!(state.output, "\u{1BC2} \u{1BC9}");
        assert_eq!(state.direction, Direction::LatinToScript);
    }

    #[test]
    fn test_toggle_swaps_without_reconverting() {
        let state = apply(&ConverterState::default(), Action::Edit("horas".into()));
        let toggled = apply(&state, Action::ToggleDirection);

        assert_eq!(toggled.direction, Direction::ScriptToLatin);
        assert_eq!(toggled.input, "ho\u{1BD2}s");
        assert_eq!(toggled.output, "horas");

        // reconverted on the next edit
        let edited = apply(&toggled, Action::Edit(toggled.input.clone()));
        assert_eq!(edited.output, "horas");
    }

    #[test]
    fn test_reduce_is_pure() {
        let state = apply(&ConverterState::default(), Action::Edit("ha".into()));
        let before = state.clone();
        let _ = apply(&state, Action::ToggleDirection);
        let _ = apply(&state, Action::Clear);
        assert_eq!(state, before);
    }

    #[test]
    fn test_clear_keeps_direction() {
        let state = ConverterState {
            input: "\u{1BC2}".into(),
            output: "ha".into(),
            direction: Direction::ScriptToLatin,
        };
        let cleared = apply(&state, Action::Clear);
        assert_eq!(cleared, ConverterState::new(Direction::ScriptToLatin));
    }

    #[test]
    fn test_append_glyph() {
        let state = apply(&ConverterState::default(), Action::AppendGlyph("ha".into()));
        let state = apply(&state, Action::AppendGlyph("nga".into()));
        assert_eq!(state.input, "hanga");
        assert_eq!(state.output, "\u{1BC2}\u{1BC5}");

        let state = apply(&ConverterState::new(Direction::ScriptToLatin), Action::AppendGlyph("ma".into()));
        assert_eq!(state.input, "\u{1BD4}");
        assert_eq!(state.output, "ma");
    }

    #[test]
    fn test_append_unknown_glyph() {
        let state = apply(&ConverterState::default(), Action::Edit("ha".into()));
        assert_eq!(apply(&state, Action::AppendGlyph("zz".into())), state);
        // diacritics are not part of the converter alphabet
        assert_eq!(apply(&state, Action::AppendGlyph("i".into())), state);
    }

    #[test]
    fn test_set_direction() {
        let state = apply(&ConverterState::default(), Action::Edit("ha".into()));
        let state = apply(&state, Action::SetDirection(Direction::ScriptToLatin));
        assert_eq!(state.direction, Direction::ScriptToLatin);
        assert_eq!(state.input, "ha");
        assert_eq!(state.output, "\u{1BC2}");
    }
}
