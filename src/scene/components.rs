use bevy::prelude::*;

#[derive(Component)]
pub(super) struct SceneCamera;

#[derive(Component)]
pub(super) struct GoalRoot;

#[derive(Component)]
pub(super) struct Ball;

#[derive(Component)]
pub(super) struct StadiumRoot;

#[derive(Component)]
pub(super) struct StadiumRow;

#[derive(Component)]
pub(super) struct PlayerFigure;

#[derive(Component)]
pub(super) struct Trophy;

#[derive(Component)]
pub(super) struct HudRoot;

#[derive(Component)]
pub(super) struct HudStatusText;
