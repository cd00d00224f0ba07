use super::io::{keycode_to_label, keycodes_from_names, keycodes_to_names};
use super::settings::SceneSettings;
use bevy::prelude::{ButtonInput, KeyCode, Resource};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub(super) const CONFIG_PATH: &str = "config/scene_config.ron";

#[derive(Debug, Clone, PartialEq, Eq)]
pub(super) struct CliOptions {
    pub(super) config_path: PathBuf,
}

impl Default for CliOptions {
    fn default() -> Self {
        Self {
            config_path: PathBuf::from(CONFIG_PATH),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(super) enum SceneAction {
    ToggleOrbit,
    ToggleWireframe,
    SlowDown,
    SpeedUp,
    ToggleSpinX,
    ToggleSpinY,
    ShrinkGoal,
}

pub(super) const ACTION_ORDER: [SceneAction; 7] = [
    SceneAction::ToggleOrbit,
    SceneAction::ToggleWireframe,
    SceneAction::SlowDown,
    SceneAction::SpeedUp,
    SceneAction::ToggleSpinX,
    SceneAction::ToggleSpinY,
    SceneAction::ShrinkGoal,
];

impl SceneAction {
    pub(super) fn label(self) -> &'static str {
        match self {
            Self::ToggleOrbit => "Orbit camera",
            Self::ToggleWireframe => "Wireframe",
            Self::SlowDown => "Slower spin",
            Self::SpeedUp => "Faster spin",
            Self::ToggleSpinX => "Spin ball about X",
            Self::ToggleSpinY => "Spin ball about Y",
            Self::ShrinkGoal => "Shrink goal",
        }
    }
}

#[derive(Resource, Debug, Clone, PartialEq)]
pub(super) struct SceneKeybinds {
    pub(super) toggle_orbit: Vec<KeyCode>,
    pub(super) toggle_wireframe: Vec<KeyCode>,
    pub(super) slow_down: Vec<KeyCode>,
    pub(super) speed_up: Vec<KeyCode>,
    pub(super) toggle_spin_x: Vec<KeyCode>,
    pub(super) toggle_spin_y: Vec<KeyCode>,
    pub(super) shrink_goal: Vec<KeyCode>,
}

impl Default for SceneKeybinds {
    fn default() -> Self {
        Self {
            toggle_orbit: vec![KeyCode::KeyO],
            toggle_wireframe: vec![KeyCode::KeyW],
            slow_down: vec![KeyCode::Minus, KeyCode::NumpadSubtract, KeyCode::ArrowDown],
            speed_up: vec![KeyCode::Equal, KeyCode::NumpadAdd, KeyCode::ArrowUp],
            toggle_spin_x: vec![KeyCode::Digit1, KeyCode::Numpad1],
            toggle_spin_y: vec![KeyCode::Digit2, KeyCode::Numpad2],
            shrink_goal: vec![KeyCode::Digit3, KeyCode::Numpad3],
        }
    }
}

impl SceneKeybinds {
    pub(super) fn keys_for(&self, action: SceneAction) -> &[KeyCode] {
        match action {
            SceneAction::ToggleOrbit => &self.toggle_orbit,
            SceneAction::ToggleWireframe => &self.toggle_wireframe,
            SceneAction::SlowDown => &self.slow_down,
            SceneAction::SpeedUp => &self.speed_up,
            SceneAction::ToggleSpinX => &self.toggle_spin_x,
            SceneAction::ToggleSpinY => &self.toggle_spin_y,
            SceneAction::ShrinkGoal => &self.shrink_goal,
        }
    }

    pub(super) fn keys_for_mut(&mut self, action: SceneAction) -> &mut Vec<KeyCode> {
        match action {
            SceneAction::ToggleOrbit => &mut self.toggle_orbit,
            SceneAction::ToggleWireframe => &mut self.toggle_wireframe,
            SceneAction::SlowDown => &mut self.slow_down,
            SceneAction::SpeedUp => &mut self.speed_up,
            SceneAction::ToggleSpinX => &mut self.toggle_spin_x,
            SceneAction::ToggleSpinY => &mut self.toggle_spin_y,
            SceneAction::ShrinkGoal => &mut self.shrink_goal,
        }
    }

    pub(super) fn action_just_pressed(
        &self,
        input: &ButtonInput<KeyCode>,
        action: SceneAction,
    ) -> bool {
        self.keys_for(action)
            .iter()
            .any(|key| input.just_pressed(*key))
    }

    pub(super) fn display_keys(&self, action: SceneAction) -> String {
        self.keys_for(action)
            .iter()
            .map(|key| keycode_to_label(*key))
            .collect::<Vec<_>>()
            .join(" / ")
    }

    pub(super) fn ensure_non_empty(&mut self) {
        for action in ACTION_ORDER {
            if self.keys_for(action).is_empty() {
                let fallback = SceneKeybinds::default();
                self.keys_for_mut(action).push(fallback.keys_for(action)[0]);
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub(super) struct PersistedKeybinds {
    pub(super) toggle_orbit: String,
    pub(super) toggle_wireframe: String,
    pub(super) slow_down: String,
    pub(super) speed_up: String,
    pub(super) toggle_spin_x: String,
    pub(super) toggle_spin_y: String,
    pub(super) shrink_goal: String,
}

impl Default for PersistedKeybinds {
    fn default() -> Self {
        Self::from_runtime(&SceneKeybinds::default())
    }
}

impl PersistedKeybinds {
    pub(super) fn from_runtime(bindings: &SceneKeybinds) -> Self {
        Self {
            toggle_orbit: keycodes_to_names(bindings.keys_for(SceneAction::ToggleOrbit)),
            toggle_wireframe: keycodes_to_names(bindings.keys_for(SceneAction::ToggleWireframe)),
            slow_down: keycodes_to_names(bindings.keys_for(SceneAction::SlowDown)),
            speed_up: keycodes_to_names(bindings.keys_for(SceneAction::SpeedUp)),
            toggle_spin_x: keycodes_to_names(bindings.keys_for(SceneAction::ToggleSpinX)),
            toggle_spin_y: keycodes_to_names(bindings.keys_for(SceneAction::ToggleSpinY)),
            shrink_goal: keycodes_to_names(bindings.keys_for(SceneAction::ShrinkGoal)),
        }
    }

    pub(super) fn to_runtime(&self) -> SceneKeybinds {
        let mut runtime = SceneKeybinds {
            toggle_orbit: keycodes_from_names(&self.toggle_orbit),
            toggle_wireframe: keycodes_from_names(&self.toggle_wireframe),
            slow_down: keycodes_from_names(&self.slow_down),
            speed_up: keycodes_from_names(&self.speed_up),
            toggle_spin_x: keycodes_from_names(&self.toggle_spin_x),
            toggle_spin_y: keycodes_from_names(&self.toggle_spin_y),
            shrink_goal: keycodes_from_names(&self.shrink_goal),
        };
        runtime.ensure_non_empty();
        runtime
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub(super) struct PersistedConfig {
    pub(super) settings: SceneSettings,
    pub(super) keybinds: PersistedKeybinds,
}

/// Live state driven by the keyboard and read by the per-frame systems.
#[derive(Resource, Debug, Clone, PartialEq)]
pub(super) struct SceneToggles {
    pub(super) orbit_enabled: bool,
    pub(super) spin_x: bool,
    pub(super) spin_y: bool,
    /// Degrees per reference frame.
    pub(super) animation_speed: f32,
    pub(super) wireframe: bool,
    pub(super) goal_scale: f32,
}

impl Default for SceneToggles {
    fn default() -> Self {
        Self {
            orbit_enabled: true,
            spin_x: false,
            spin_y: false,
            animation_speed: 2.0,
            wireframe: false,
            goal_scale: 1.0,
        }
    }
}

impl SceneToggles {
    pub(super) fn from_settings(settings: &SceneSettings) -> Self {
        Self {
            animation_speed: settings.initial_animation_speed,
            ..Self::default()
        }
    }

    /// Applies one key action. Returns `false` when the action was ignored.
    pub(super) fn apply(&mut self, action: SceneAction, settings: &SceneSettings) -> bool {
        match action {
            SceneAction::ToggleOrbit => self.orbit_enabled = !self.orbit_enabled,
            SceneAction::ToggleWireframe => self.wireframe = !self.wireframe,
            SceneAction::SlowDown => self.animation_speed /= settings.speed_step,
            SceneAction::SpeedUp => self.animation_speed *= settings.speed_step,
            SceneAction::ToggleSpinX => {
                if !self.orbit_enabled {
                    return false;
                }
                self.spin_x = !self.spin_x;
            }
            SceneAction::ToggleSpinY => {
                if !self.orbit_enabled {
                    return false;
                }
                self.spin_y = !self.spin_y;
            }
            SceneAction::ShrinkGoal => self.goal_scale *= settings.shrink_factor,
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    #[test]
    fn orbit_and_wireframe_flip() {
        let settings = SceneSettings::default();
        let mut toggles = SceneToggles::default();

        assert!(toggles.apply(SceneAction::ToggleOrbit, &settings));
        assert!(toggles.apply(SceneAction::ToggleWireframe, &settings));
        assert!(!toggles.orbit_enabled);
        assert!(toggles.wireframe);

        toggles.apply(SceneAction::ToggleWireframe, &settings);
        assert!(!toggles.wireframe);
    }

    #[test]
    fn spin_toggles_require_orbit() {
        let settings = SceneSettings::default();
        let mut toggles = SceneToggles {
            orbit_enabled: false,
            ..SceneToggles::default()
        };

        assert!(!toggles.apply(SceneAction::ToggleSpinX, &settings));
        assert!(!toggles.apply(SceneAction::ToggleSpinY, &settings));
        assert!(!toggles.spin_x);
        assert!(!toggles.spin_y);

        toggles.apply(SceneAction::ToggleOrbit, &settings);
        assert!(toggles.apply(SceneAction::ToggleSpinX, &settings));
        assert!(toggles.apply(SceneAction::ToggleSpinY, &settings));
        assert!(toggles.spin_x);
        assert!(toggles.spin_y);
    }

    #[test]
    fn speed_scales_by_step() {
        let settings = SceneSettings::default();
        let mut toggles = SceneToggles::default();

        toggles.apply(SceneAction::SpeedUp, &settings);
        assert_relative_eq!(toggles.animation_speed, 2.2, epsilon = 1e-5);

        toggles.apply(SceneAction::SlowDown, &settings);
        toggles.apply(SceneAction::SlowDown, &settings);
        assert_relative_eq!(toggles.animation_speed, 2.0 / 1.1, epsilon = 1e-5);
    }

    #[test]
    fn shrinking_compounds() {
        let settings = SceneSettings::default();
        let mut toggles = SceneToggles::default();

        for _ in 0..3 {
            toggles.apply(SceneAction::ShrinkGoal, &settings);
        }
        assert_relative_eq!(toggles.goal_scale, 0.95_f32.powi(3), epsilon = 1e-6);
    }

    #[test]
    fn persisted_keybinds_restore_runtime_bindings() {
        let runtime = SceneKeybinds::default();
        let restored = PersistedKeybinds::from_runtime(&runtime).to_runtime();

        assert_eq!(restored, runtime);
    }

    #[test]
    fn empty_or_unknown_bindings_fall_back_to_defaults() {
        let persisted = PersistedKeybinds {
            toggle_orbit: String::new(),
            shrink_goal: "NotAKey|Digit9".to_string(),
            ..PersistedKeybinds::default()
        };
        let runtime = persisted.to_runtime();

        assert_eq!(runtime.toggle_orbit, vec![KeyCode::KeyO]);
        assert_eq!(runtime.shrink_goal, vec![KeyCode::Digit9]);
    }

    #[test]
    fn just_pressed_matches_any_bound_key() {
        let bindings = SceneKeybinds::default();
        let mut input = ButtonInput::<KeyCode>::default();
        input.press(KeyCode::ArrowUp);

        assert!(bindings.action_just_pressed(&input, SceneAction::SpeedUp));
        assert!(!bindings.action_just_pressed(&input, SceneAction::SlowDown));
    }

    #[test]
    fn display_keys_uses_readable_labels() {
        let bindings = SceneKeybinds::default();

        assert_eq!(bindings.display_keys(SceneAction::SlowDown), "- / Num - / Down");
        assert_eq!(bindings.display_keys(SceneAction::SpeedUp), "= / Num + / Up");
        assert_eq!(bindings.display_keys(SceneAction::ToggleOrbit), "O");
    }

    proptest! {
        #[test]
        fn speed_up_then_down_is_identity(start in 0.01_f32..100.0, presses in 1_usize..20) {
            let settings = SceneSettings::default();
            let mut toggles = SceneToggles {
                animation_speed: start,
                ..SceneToggles::default()
            };

            for _ in 0..presses {
                toggles.apply(SceneAction::SpeedUp, &settings);
            }
            for _ in 0..presses {
                toggles.apply(SceneAction::SlowDown, &settings);
            }

            prop_assert!((toggles.animation_speed - start).abs() <= start * 1e-4);
        }

        #[test]
        fn shrinking_never_grows_the_goal(presses in 0_usize..200) {
            let settings = SceneSettings::default();
            let mut toggles = SceneToggles::default();
            let mut previous = toggles.goal_scale;

            for _ in 0..presses {
                toggles.apply(SceneAction::ShrinkGoal, &settings);
                prop_assert!(toggles.goal_scale <= previous);
                prop_assert!(toggles.goal_scale >= 0.0);
                previous = toggles.goal_scale;
            }
        }
    }
}
