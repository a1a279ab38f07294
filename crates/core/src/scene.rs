//! Scene module - per-frame orchestration
//!
//! A [`Scene`] owns the level, the player pose and the framebuffer. Each call
//! to [`Scene::render_frame`] runs the same fixed sequence:
//!
//! 1. apply the actions queued since the previous frame
//! 2. clear the framebuffer to the background
//! 3. draw the minimap into the left half
//! 4. cast one ray per column of the right half
//!
//! The finished frame is then handed to a [`Presenter`] (file writer,
//! terminal, ...). A failed presentation is reported to the caller and the
//! scene stays usable for the next frame.

use arrayvec::ArrayVec;
use log::{debug, info, trace, warn};

use crate::error::RenderError;
use crate::framebuffer::Framebuffer;
use crate::map::TileMap;
use crate::minimap::{MinimapLayout, MinimapRenderer};
use crate::pose::PlayerPose;
use crate::raycast::{RayCaster, ViewRect};
use crate::types::{PlayerAction, Rgba, ACTION_QUEUE_CAPACITY, MOVE_STEP, SCREEN_HEIGHT, SCREEN_WIDTH, TURN_STEP};

/// Sink for finished frames.
pub trait Presenter {
    fn present(&mut self, frame: &Framebuffer) -> Result<(), RenderError>;
}

/// How the framebuffer is erased at the start of a frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Background {
    Solid(u32),
    Gradient,
}

impl Default for Background {
    fn default() -> Self {
        Background::Solid(Rgba::BACKGROUND.pack())
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SceneSettings {
    pub width: usize,
    pub height: usize,
    pub background: Background,
    pub move_step: f32,
    pub turn_step: f32,
    pub caster: RayCaster,
    pub minimap: MinimapRenderer,
}

impl Default for SceneSettings {
    fn default() -> Self {
        Self {
            width: SCREEN_WIDTH,
            height: SCREEN_HEIGHT,
            background: Background::default(),
            move_step: MOVE_STEP,
            turn_step: TURN_STEP,
            caster: RayCaster::default(),
            minimap: MinimapRenderer::default(),
        }
    }
}

/// Counters for one rendered frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FrameStats {
    pub frame: u64,
    pub columns: usize,
    pub wall_hits: usize,
}

pub struct Scene {
    map: TileMap,
    pose: PlayerPose,
    fb: Framebuffer,
    settings: SceneSettings,
    layout: MinimapLayout,
    view: ViewRect,
    pending: ArrayVec<PlayerAction, ACTION_QUEUE_CAPACITY>,
    running: bool,
    frame: u64,
}

impl Scene {
    pub fn new(map: TileMap, pose: PlayerPose, settings: SceneSettings) -> Self {
        let layout = MinimapLayout::fit(&map, settings.width / 2, settings.height);
        let view = ViewRect::right_half(settings.width, settings.height);
        let fill = match settings.background {
            Background::Solid(c) => c,
            Background::Gradient => Rgba::WHITE.pack(),
        };
        info!(
            "scene {}x{} map {}x{} cell {}x{}px",
            settings.width,
            settings.height,
            map.width(),
            map.height(),
            layout.cell_w,
            layout.cell_h
        );
        Self {
            fb: Framebuffer::new(settings.width, settings.height, fill),
            map,
            pose,
            settings,
            layout,
            view,
            pending: ArrayVec::new(),
            running: true,
            frame: 0,
        }
    }

    pub fn map(&self) -> &TileMap {
        &self.map
    }

    pub fn pose(&self) -> &PlayerPose {
        &self.pose
    }

    pub fn set_pose(&mut self, pose: PlayerPose) {
        self.pose = pose;
    }

    pub fn framebuffer(&self) -> &Framebuffer {
        &self.fb
    }

    pub fn settings(&self) -> &SceneSettings {
        &self.settings
    }

    pub fn minimap_layout(&self) -> MinimapLayout {
        self.layout
    }

    pub fn view(&self) -> ViewRect {
        self.view
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn frame_count(&self) -> u64 {
        self.frame
    }

    /// Queue an action for the next frame.
    ///
    /// `Quit` is not queued; it clears the running flag so the loop exits
    /// after the frame in progress.
    pub fn queue_action(&mut self, action: PlayerAction) {
        if action == PlayerAction::Quit {
            info!("quit requested at frame {}", self.frame);
            self.running = false;
            return;
        }
        if self.pending.try_push(action).is_err() {
            debug!("action queue full, dropping {}", action.as_str());
        }
    }

    pub fn pending_actions(&self) -> &[PlayerAction] {
        &self.pending
    }

    /// Render one complete frame into the framebuffer.
    pub fn render_frame(&mut self) -> FrameStats {
        for action in self.pending.drain(..) {
            self.pose
                .apply(action, self.settings.move_step, self.settings.turn_step);
        }

        match self.settings.background {
            Background::Solid(c) => self.fb.clear(c),
            Background::Gradient => self.fb.fill_gradient(),
        }

        let minimap = &self.settings.minimap;
        minimap.render(&mut self.fb, &self.map, &self.pose, &self.layout);
        minimap.render_gaze(&mut self.fb, &self.map, &self.pose, &self.layout, &self.settings.caster);

        let wall_hits = self
            .settings
            .caster
            .render(&mut self.fb, &self.map, &self.pose, self.view, &self.layout);

        self.frame += 1;
        let stats = FrameStats {
            frame: self.frame,
            columns: self.view.width,
            wall_hits,
        };
        trace!("{:?} pose {:?}", stats, self.pose);
        stats
    }

    /// Hand the current frame to `presenter`.
    ///
    /// Failures are logged and returned; the caller is expected to skip the
    /// frame and keep looping.
    pub fn present(&self, presenter: &mut dyn Presenter) -> Result<(), RenderError> {
        presenter.present(&self.fb).map_err(|e| {
            warn!("frame {} not presented: {}", self.frame, e);
            e
        })
    }
}
