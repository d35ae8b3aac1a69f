//! Gesture handlers.
//!
//! Each handler is a pure function of the current parameters and one
//! gesture, returning the new value of the single parameter it drives.
//! Handlers keep no state between events; applying the same gesture twice
//! applies its effect twice.

use std::f64::consts::PI;

use glam::{DQuat, DVec2, DVec3};

use super::behavior::{InputKind, NavigationBehavior, ResponseKind};
use crate::camera::parameters::{CameraParameters, RotationMode, MAX_DISTANCE, MIN_DISTANCE};
use crate::camera::transform::rotation_only;
use crate::host::Viewport;
use crate::input::GestureEvent;
use crate::math::{AxisAngle, Turntable};
use crate::options::InteractionOptions;

/// What a handler sees besides the parameters.
#[derive(Debug, Clone, Copy)]
pub struct InteractionContext<'a> {
    /// Host viewport, `None` while detached.
    pub viewport: Option<Viewport>,
    /// Sensitivities and limits.
    pub settings: &'a InteractionOptions,
}

/// New value for one parameter.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ParameterUpdate {
    /// New orbit origin.
    Origin(DVec3),
    /// New distance.
    Distance(f64),
    /// New free rotation.
    AxisAngle(AxisAngle),
    /// New turntable rotation.
    Turntable(Turntable),
}

/// The available gesture handlers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Interaction {
    /// Scroll changes distance multiplicatively.
    ScrollZoom,
    /// Vertical drag changes distance multiplicatively.
    DragZoom,
    /// Drag moves the origin in the view plane.
    DragPan,
    /// Drag rotates freely on a virtual hemisphere.
    DragArcball,
    /// Drag adds to yaw and pitch.
    DragTurntable,
}

impl Interaction {
    /// Handler for a behavior, given the active rotation mode.
    ///
    /// Scrolling has no pan or rotate handler.
    #[must_use]
    pub const fn for_behavior(behavior: NavigationBehavior, mode: RotationMode) -> Option<Self> {
        match (behavior.input, behavior.response) {
            (InputKind::Scroll, ResponseKind::Zoom) => Some(Self::ScrollZoom),
            (InputKind::Scroll, ResponseKind::Pan | ResponseKind::Rotate) => None,
            (InputKind::Drag, ResponseKind::Pan) => Some(Self::DragPan),
            (InputKind::Drag, ResponseKind::Zoom) => Some(Self::DragZoom),
            (InputKind::Drag, ResponseKind::Rotate) => Some(match mode {
                RotationMode::Arcball => Self::DragArcball,
                RotationMode::Turntable => Self::DragTurntable,
            }),
        }
    }

    /// Gesture kind this handler consumes.
    #[must_use]
    pub const fn input_kind(&self) -> InputKind {
        match self {
            Self::ScrollZoom => InputKind::Scroll,
            Self::DragZoom | Self::DragPan | Self::DragArcball | Self::DragTurntable => {
                InputKind::Drag
            }
        }
    }

    /// Translate one gesture into a parameter update.
    ///
    /// Returns `None` for gestures this handler ignores (drag start/end,
    /// other input kinds) and for drags that need a viewport while none is
    /// available.
    #[must_use]
    pub fn apply(
        &self,
        params: &CameraParameters,
        gesture: &GestureEvent,
        ctx: &InteractionContext<'_>,
    ) -> Option<ParameterUpdate> {
        let settings = ctx.settings;
        match (self, *gesture) {
            (Self::ScrollZoom, GestureEvent::Scroll { delta }) => Some(ParameterUpdate::Distance(
                scroll_zoom(params.distance(), delta, settings.zoom_factor),
            )),
            (Self::DragZoom, GestureEvent::DragUpdate { delta, .. }) => {
                Some(ParameterUpdate::Distance(drag_zoom(
                    params.distance(),
                    delta.y,
                    settings.zoom_factor,
                    settings.drag_zoom_sensitivity,
                )))
            }
            (Self::DragPan, GestureEvent::DragUpdate { delta, .. }) => {
                drag_pan(params, delta, ctx.viewport?, settings.pan_speed)
                    .map(ParameterUpdate::Origin)
            }
            (Self::DragArcball, GestureEvent::DragUpdate { position, delta }) => drag_arcball(
                params.rotation().as_axis_angle(),
                position - delta,
                position,
                ctx.viewport?,
                settings.arcball_speed,
            )
            .map(ParameterUpdate::AxisAngle),
            (Self::DragTurntable, GestureEvent::DragUpdate { delta, .. }) => {
                Some(ParameterUpdate::Turntable(drag_turntable(
                    params.rotation().as_turntable(),
                    delta,
                    settings.turntable_speed.to_radians(),
                    settings.clamp_pitch,
                )))
            }
            _ => None,
        }
    }
}

/// Distance after scrolling `delta` units: `distance · zoom_factor^(-delta)`.
///
/// Positive deltas zoom in. Multiplicative, so successive scrolls compose
/// by adding their deltas. The result stays within
/// [`MIN_DISTANCE`, `MAX_DISTANCE`]; a non-numeric delta leaves the
/// distance unchanged.
#[must_use]
pub fn scroll_zoom(distance: f64, delta: f64, zoom_factor: f64) -> f64 {
    let zoomed = distance * zoom_factor.powf(-delta);
    if zoomed.is_nan() {
        return distance;
    }
    zoomed.clamp(MIN_DISTANCE, MAX_DISTANCE)
}

/// Distance after a vertical drag of `dy` pixels. Dragging up zooms in.
#[must_use]
pub fn drag_zoom(distance: f64, dy: f64, zoom_factor: f64, sensitivity: f64) -> f64 {
    scroll_zoom(distance, -dy * sensitivity, zoom_factor)
}

/// Origin after dragging `delta` pixels.
///
/// The delta is scaled to scene units at the origin's depth (so the point
/// under the cursor follows it at `speed == 1`), rotated into world space
/// and applied opposite to the drag so the scene moves with the pointer.
#[must_use]
pub fn drag_pan(
    params: &CameraParameters,
    delta: DVec2,
    viewport: Viewport,
    speed: f64,
) -> Option<DVec3> {
    if viewport.is_empty() {
        return None;
    }
    let units_per_pixel = 2.0 * params.distance() * (params.field_of_view() / 2.0).tan()
        / viewport.height
        * speed;
    let local = DVec3::new(-delta.x, -delta.y, 0.0) * units_per_pixel;
    Some(params.origin() + rotation_only(params).transform_vector3(local))
}

/// Point on the virtual arcball for a surface position.
///
/// The ball is centered on the viewport with a radius of half its smaller
/// side. Inside the ball the point lies on the hemisphere facing the
/// camera (camera-local -Z); outside it is projected onto the rim.
#[must_use]
pub fn hemisphere_point(position: DVec2, viewport: &Viewport) -> DVec3 {
    let radius = 0.5 * viewport.width.min(viewport.height);
    let v = (position - viewport.center()) / radius;
    let len2 = v.length_squared();
    if len2 <= 1.0 {
        DVec3::new(v.x, v.y, -(1.0 - len2).sqrt())
    } else {
        let rim = v / len2.sqrt();
        DVec3::new(rim.x, rim.y, 0.0)
    }
}

/// Rotation after dragging from `from` to `to` on the arcball.
///
/// The arc between the two hemisphere points is applied to the scene, so
/// the camera turns by its inverse. `speed` scales the arc angle.
#[must_use]
pub fn drag_arcball(
    rotation: AxisAngle,
    from: DVec2,
    to: DVec2,
    viewport: Viewport,
    speed: f64,
) -> Option<AxisAngle> {
    if viewport.is_empty() {
        return None;
    }
    let a = hemisphere_point(from, &viewport);
    let b = hemisphere_point(to, &viewport);
    let (axis, angle) = DQuat::from_rotation_arc(a, b).to_axis_angle();
    let arc = DQuat::from_axis_angle(axis, angle * speed);
    Some(AxisAngle::from_quat(rotation.to_quat() * arc.inverse()))
}

/// Turntable after dragging `delta` pixels at `radians_per_pixel`.
///
/// With `clamp_pitch` the pitch may not leave `[0, π]`: the view stops
/// when it looks straight along the up axis (0) or against it (π) instead
/// of flipping over the pole. A pitch already outside that range is only
/// prevented from moving further out.
#[must_use]
pub fn drag_turntable(
    turntable: Turntable,
    delta: DVec2,
    radians_per_pixel: f64,
    clamp_pitch: bool,
) -> Turntable {
    let yaw = turntable.yaw + delta.x * radians_per_pixel;
    let mut pitch = turntable.pitch + delta.y * radians_per_pixel;
    if clamp_pitch {
        pitch = pitch.clamp(turntable.pitch.min(0.0), turntable.pitch.max(PI));
    }
    Turntable::new(yaw, pitch)
}
