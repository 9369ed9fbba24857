//! Property-style tests for the binding mapper over many macro lists.

use macro_tab::models::{KeyAction, Macro, MacroId, MouseAction, PlayMacroAction, RgbColor};
use macro_tab::services::{BindingError, BindingMapper, NO_SELECTION};

mod fixtures;
use fixtures::*;

/// Macro lists of length 0..=8 with ids that are not their positions.
fn macro_lists() -> Vec<Vec<Macro>> {
    (0..=8u32)
        .map(|len| {
            (0..len)
                .map(|i| Macro::new(1000 - i * 7, format!("Macro {i}")))
                .collect()
        })
        .collect()
}

#[test]
fn test_rehydrate_selects_position_of_every_macro() {
    for macros in macro_lists() {
        let mut mapper = BindingMapper::new();
        for (i, m) in macros.iter().enumerate() {
            assert!(mapper.rehydrate(&PlayMacroAction::new(m.id).into(), &macros));
            assert_eq!(mapper.selected_index(), i as isize);

            let binding = mapper.to_binding(&macros).unwrap();
            assert_eq!(binding.as_play_macro().unwrap().macro_id, m.id);
        }
    }
}

#[test]
fn test_rehydrate_non_macro_actions_is_not_applicable() {
    let others = [
        KeyAction::None,
        colored_keystroke(),
        KeyAction::Mouse(MouseAction {
            mouse_action: "scrollDown".to_string(),
            color: None,
        }),
    ];

    for macros in macro_lists() {
        for start in ["0", "3", "-1", "x"] {
            let mut mapper = BindingMapper::new();
            mapper.select_by_option_id(start);
            let before = mapper.selected_index();

            for action in &others {
                assert!(!mapper.rehydrate(action, &macros));
                assert_eq!(mapper.selected_index(), before);
            }
        }
    }
}

#[test]
fn test_rehydrate_unknown_id_is_dangling() {
    for macros in macro_lists() {
        let mut mapper = BindingMapper::new();
        assert!(mapper.rehydrate(&PlayMacroAction::new(MacroId(1)).into(), &macros));
        assert_eq!(mapper.selected_index(), NO_SELECTION);
        assert!(!mapper.is_valid(&macros));
    }
}

#[test]
fn test_validity_is_a_function_of_index_and_length() {
    let lists = macro_lists();
    let mut mapper = BindingMapper::new();

    // Walk through selections and list lengths in an arbitrary order; the
    // history must never matter
    for step in 0..60isize {
        let index = (step * 5) % 11 - 2;
        let macros = &lists[(step as usize * 3) % lists.len()];

        mapper.select_by_option_id(&index.to_string());
        let expected = index >= 0 && (index as usize) < macros.len();
        assert_eq!(mapper.is_valid(macros), expected, "index {index}, len {}", macros.len());
        assert_eq!(mapper.to_binding(macros).is_ok(), expected);
    }
}

#[test]
fn test_invalid_commit_produces_no_binding() {
    for macros in macro_lists() {
        let mut mapper = BindingMapper::new();
        mapper.select_by_option_id(&macros.len().to_string());

        assert_eq!(
            mapper.to_binding(&macros),
            Err(BindingError::InvalidSelection {
                index: macros.len() as isize,
                macro_count: macros.len(),
            })
        );
    }
}

#[test]
fn test_color_is_independent_of_selected_macro() {
    let colors = [None, Some(FIXTURE_COLOR), Some(RgbColor::new(1, 2, 3))];
    let macros = test_macros();

    for color in colors {
        let default_action: KeyAction = match color {
            Some(color) => PlayMacroAction::new(10).with_color(color).into(),
            None => PlayMacroAction::new(10).into(),
        };

        let mut mapper = BindingMapper::new();
        mapper.set_default_action(Some(&default_action));

        for i in 0..macros.len() {
            mapper.select_by_option_id(&i.to_string());
            assert_eq!(mapper.to_binding(&macros).unwrap().color(), color);
        }
    }
}
