//! Editing session over a closed spline.

use std::f64::consts::PI;

use csp_core::{Result, SplineError, Validate};
use csp_geometry::{tessellate, ClosedSpline};
use csp_math::{dvec3, Point3};

use crate::config::EditorConfig;

/// Direction of a keyboard nudge, in screen terms.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Left,
    Right,
    Up,
    Down,
}

/// Discrete editing commands, typically bound to keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    RaiseOrder,
    LowerOrder,
    AddPoint,
    RemovePoint,
    Nudge(Direction),
    NextFragment,
    PreviousFragment,
}

/// Editable closed spline state.
///
/// After every mutation the grabbed index, the curve order and the selected
/// fragment all lie in `[0, N - 1]`, and the polygon is never empty.
#[derive(Debug, Clone)]
pub struct EditorSession {
    config: EditorConfig,
    control_points: Vec<Point3>,
    order: usize,
    selected_fragment: usize,
    grabbed: usize,
    dragging: bool,
}

impl EditorSession {
    pub fn new(config: EditorConfig) -> Result<Self> {
        config.validate()?;
        let mut session = Self {
            config,
            control_points: Vec::new(),
            order: config.initial_order,
            selected_fragment: 1,
            grabbed: 0,
            dragging: false,
        };
        session.reset();
        Ok(session)
    }

    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    pub fn control_points(&self) -> &[Point3] {
        &self.control_points
    }

    pub fn order(&self) -> usize {
        self.order
    }

    pub fn selected_fragment(&self) -> usize {
        self.selected_fragment
    }

    pub fn grabbed(&self) -> usize {
        self.grabbed
    }

    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    /// Replace the polygon with `config.initial_points` generated points.
    pub fn reset(&mut self) {
        self.control_points.clear();
        for _ in 0..self.config.initial_points {
            self.add_control_point();
        }
        log::debug!("reset to {} control points", self.control_points.len());
    }

    /// Append the next generated point of the default wavy ring.
    pub fn add_control_point(&mut self) {
        let p = generated_point(self.control_points.len());
        self.control_points.push(p);
        self.clamp_state();
    }

    /// Drop the last control point. The final remaining point cannot be removed.
    pub fn remove_control_point(&mut self) -> Result<()> {
        if self.control_points.len() <= 1 {
            log::warn!("refusing to remove the last control point");
            return Err(SplineError::InvalidOperation(
                "cannot remove the last control point".into(),
            ));
        }
        self.control_points.pop();
        self.clamp_state();
        Ok(())
    }

    pub fn set_control_point(&mut self, index: usize, p: Point3) -> Result<()> {
        let count = self.control_points.len();
        let slot = self
            .control_points
            .get_mut(index)
            .ok_or(SplineError::IndexOutOfRange { index, count })?;
        *slot = p;
        Ok(())
    }

    /// Set the curve order, clamped to `[0, N - 1]`.
    pub fn set_order(&mut self, order: usize) {
        self.order = order;
        self.clamp_state();
    }

    pub fn apply(&mut self, command: Command) -> Result<()> {
        let speed = self.config.nudge_speed;
        match command {
            Command::RaiseOrder => self.order += 1,
            Command::LowerOrder => self.order = self.order.saturating_sub(1),
            Command::AddPoint => self.add_control_point(),
            Command::RemovePoint => self.remove_control_point()?,
            Command::Nudge(direction) => {
                let p = &mut self.control_points[self.grabbed];
                // Screen y grows downward
                match direction {
                    Direction::Left => p.x -= speed,
                    Direction::Right => p.x += speed,
                    Direction::Up => p.y -= speed,
                    Direction::Down => p.y += speed,
                }
            }
            Command::NextFragment => self.selected_fragment += 1,
            Command::PreviousFragment => {
                self.selected_fragment = self.selected_fragment.saturating_sub(1)
            }
        }

        self.clamp_state();
        log::debug!(
            "{:?}: order={} fragment={} grabbed={} points={}",
            command,
            self.order,
            self.selected_fragment,
            self.grabbed,
            self.control_points.len()
        );
        Ok(())
    }

    /// Grab the control point closest to `world` in the xy plane and start dragging it.
    pub fn grab_nearest(&mut self, world: Point3) -> usize {
        let mut nearest = 0;
        let mut min_dist = f64::INFINITY;
        for (i, p) in self.control_points.iter().enumerate() {
            let dx = p.x - world.x;
            let dy = p.y - world.y;
            let dist = dx * dx + dy * dy;
            if dist < min_dist {
                nearest = i;
                min_dist = dist;
            }
        }

        self.grabbed = nearest;
        self.dragging = true;
        nearest
    }

    pub fn grab_at_screen(&mut self, x: i32, y: i32) -> usize {
        let world = self.config.viewport.to_world(x, y);
        self.grab_nearest(world)
    }

    pub fn release(&mut self) {
        self.dragging = false;
    }

    /// Move the grabbed point to `world`. Ignored unless a drag is in progress.
    pub fn drag_to(&mut self, world: Point3) {
        if !self.dragging {
            return;
        }
        self.control_points[self.grabbed] = world;
    }

    pub fn drag_to_screen(&mut self, x: i32, y: i32) {
        let world = self.config.viewport.to_world(x, y);
        self.drag_to(world);
    }

    /// Snapshot of the current curve.
    pub fn curve(&self) -> Result<ClosedSpline> {
        ClosedSpline::new(self.order, self.control_points.clone())
    }

    /// Sample the full curve at the configured step.
    pub fn sample_curve(&self) -> Result<Vec<Point3>> {
        let curve = self.curve()?;
        tessellate::sample_curve(&curve, self.config.sample_step)
    }

    /// Sample only the selected unit fragment at the configured step.
    pub fn sample_selected_fragment(&self) -> Result<Vec<Point3>> {
        let curve = self.curve()?;
        let (t0, t1) = curve.fragment(self.selected_fragment)?;
        tessellate::sample_range(&curve, t0, t1, self.config.sample_step)
    }

    fn clamp_state(&mut self) {
        let last = self.control_points.len().saturating_sub(1);
        self.grabbed = self.grabbed.min(last);
        self.order = self.order.min(last);
        self.selected_fragment = self.selected_fragment.min(last);
    }
}

/// Point `n` of the default ring: a slightly wavy circle arc starting at angle -3.
fn generated_point(n: usize) -> Point3 {
    let n = n as f64;
    let radius = (n * 1.5).sin() * 0.15 + 1.0;
    let angle = -3.0 + PI / 10.0 * n;
    dvec3(angle.cos() * radius, angle.sin() * radius + 0.5, 0.0)
}
