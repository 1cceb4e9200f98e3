//! In-memory platform: scripted input, a stepping clock and a record of every call.
//!
//! Useful for tests and for running game logic without a terminal.

use std::collections::VecDeque;
use std::time::Duration;

use anyhow::Result;

use cge_core::ScreenBuffer;
use cge_input::RawInput;

use crate::config::EngineConfig;
use crate::platform::Platform;

/// One call the loop made into the platform.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlatformCall {
    Open,
    SampleInput,
    Present,
    SetTitle(String),
    Close,
}

#[derive(Debug, Default)]
pub struct HeadlessPlatform {
    now: Duration,
    step: Duration,
    inputs: VecDeque<RawInput>,
    last_frame: Option<ScreenBuffer>,
    calls: Vec<PlatformCall>,
}

impl HeadlessPlatform {
    /// Every call to `now()` advances the clock by `step` after reading it.
    pub fn new(step: Duration) -> Self {
        Self {
            step,
            ..Self::default()
        }
    }

    /// Queue the sample returned by the next `sample_input`. With nothing queued
    /// the previous sample is left as it was.
    pub fn push_input(&mut self, raw: RawInput) {
        self.inputs.push_back(raw);
    }

    pub fn last_frame(&self) -> Option<&ScreenBuffer> {
        self.last_frame.as_ref()
    }

    pub fn calls(&self) -> &[PlatformCall] {
        &self.calls
    }

    pub fn presented(&self) -> usize {
        self.calls
            .iter()
            .filter(|c| **c == PlatformCall::Present)
            .count()
    }
}

impl Platform for HeadlessPlatform {
    fn open(&mut self, _config: &EngineConfig) -> Result<()> {
        self.calls.push(PlatformCall::Open);
        Ok(())
    }

    fn close(&mut self) -> Result<()> {
        self.calls.push(PlatformCall::Close);
        Ok(())
    }

    fn now(&mut self) -> Duration {
        let now = self.now;
        self.now += self.step;
        now
    }

    fn sample_input(&mut self, raw: &mut RawInput) -> Result<()> {
        self.calls.push(PlatformCall::SampleInput);
        if let Some(next) = self.inputs.pop_front() {
            *raw = next;
        }
        Ok(())
    }

    fn present(&mut self, screen: &ScreenBuffer) -> Result<()> {
        self.calls.push(PlatformCall::Present);
        self.last_frame = Some(screen.clone());
        Ok(())
    }

    fn set_title(&mut self, title: &str) -> Result<()> {
        self.calls.push(PlatformCall::SetTitle(title.to_string()));
        Ok(())
    }
}
