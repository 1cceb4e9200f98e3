//! The frame loop: create once, then update → sample input → present until stopped.

use std::fmt::Write as _;

use log::{debug, info};

use cge_core::ScreenBuffer;
use cge_input::RawInput;

use crate::clock::FrameClock;
use crate::config::EngineConfig;
use crate::context::{Context, StopHandle};
use crate::error::Result;
use crate::platform::Platform;

/// Called once before the first frame. Returning `false` stops the loop
/// without running any frame.
pub type CreateFn<S> = Box<dyn FnMut(&mut S, &mut Context) -> bool>;

/// Called every frame with the elapsed seconds. Returning `false` stops the loop
/// after this frame has been presented.
pub type UpdateFn<S> = Box<dyn FnMut(&mut S, &mut Context, f32) -> bool>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopState {
    Created,
    Running,
    Stopped,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum StopReason {
    CreateDeclined,
    UpdateDeclined,
    Requested,
}

/// A single engine session: user state `S`, a platform `P`, and the two callbacks.
pub struct EngineLoop<S, P> {
    config: EngineConfig,
    user: S,
    platform: P,
    context: Context,
    raw: RawInput,
    on_create: CreateFn<S>,
    on_update: UpdateFn<S>,
    state: LoopState,
    frame_count: u64,
    title: String,
}

impl<S, P: Platform> EngineLoop<S, P> {
    /// Validate `config` and allocate the screen. Nothing runs until [`run`](Self::run).
    pub fn new(
        config: EngineConfig,
        user: S,
        platform: P,
        on_create: impl FnMut(&mut S, &mut Context) -> bool + 'static,
        on_update: impl FnMut(&mut S, &mut Context, f32) -> bool + 'static,
    ) -> Result<Self> {
        config.validate()?;
        let screen = ScreenBuffer::new(config.screen_width, config.screen_height)?;
        debug!(
            "engine '{}' created: screen {}x{}, cell {}x{}",
            config.app_name,
            config.screen_width,
            config.screen_height,
            config.cell_width,
            config.cell_height
        );

        let context = Context::new(
            screen,
            config.key_count,
            config.mouse_button_count,
            config.app_name.clone(),
        );
        let raw = RawInput::new(config.key_count, config.mouse_button_count);

        Ok(Self {
            config,
            user,
            platform,
            context,
            raw,
            on_create: Box::new(on_create),
            on_update: Box::new(on_update),
            state: LoopState::Created,
            frame_count: 0,
            title: String::new(),
        })
    }

    pub fn state(&self) -> LoopState {
        self.state
    }

    /// Frames fully run (updated, sampled and presented) so far.
    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn context(&self) -> &Context {
        &self.context
    }

    pub fn user_state(&self) -> &S {
        &self.user
    }

    pub fn platform(&self) -> &P {
        &self.platform
    }

    pub fn platform_mut(&mut self) -> &mut P {
        &mut self.platform
    }

    /// Handle that stops the loop from outside a callback.
    pub fn stop_handle(&self) -> StopHandle {
        self.context.stop_handle()
    }

    pub fn into_parts(self) -> (S, P) {
        (self.user, self.platform)
    }

    /// Open the platform, run the session to completion and close the platform.
    ///
    /// Blocks the calling thread. Running a loop that has already stopped does
    /// nothing.
    pub fn run(&mut self) -> Result<()> {
        if self.state == LoopState::Stopped {
            return Ok(());
        }

        if let Err(e) = self.platform.open(&self.config) {
            self.state = LoopState::Stopped;
            return Err(e.into());
        }

        let result = self.run_session();
        self.state = LoopState::Stopped;
        let closed = self.platform.close();

        match result {
            Ok(reason) => {
                info!(
                    "engine '{}' stopped after {} frames ({reason:?})",
                    self.config.app_name, self.frame_count
                );
                closed?;
                Ok(())
            }
            Err(e) => {
                if let Err(close_err) = closed {
                    log::warn!("platform close failed after frame error: {close_err:#}");
                }
                Err(e)
            }
        }
    }

    fn run_session(&mut self) -> Result<StopReason> {
        if !(self.on_create)(&mut self.user, &mut self.context) {
            info!("create callback declined; not entering the frame loop");
            return Ok(StopReason::CreateDeclined);
        }

        self.state = LoopState::Running;
        info!("engine '{}' running", self.config.app_name);

        let frame_delay = self.config.frame_delay();
        let mut clock = FrameClock::new(self.platform.now());

        while !self.context.is_stopping() {
            let frame = clock.tick(self.platform.now());
            self.context.begin_frame(frame);

            let keep_running = (self.on_update)(&mut self.user, &mut self.context, frame.dt);

            // Sampling and presentation happen even when the update asked to stop.
            self.platform.sample_input(&mut self.raw)?;
            self.context.apply_input(&self.raw);

            if self.config.show_fps_in_title {
                self.title.clear();
                // Writing into a String cannot fail.
                let _ = write!(self.title, "{} - FPS: {:.2}", self.config.app_name, frame.fps());
                self.platform.set_title(&self.title)?;
            }
            self.platform.present(self.context.screen())?;
            self.frame_count += 1;

            if !keep_running {
                return Ok(StopReason::UpdateDeclined);
            }
            if let Some(delay) = frame_delay {
                std::thread::sleep(delay);
            }
        }

        Ok(StopReason::Requested)
    }
}
