//! Tri-state edge detection over raw "is it down right now" samples.

/// Per-source edge flags for the current frame.
///
/// `pressed` and `released` are frame-local: they are true only on the frame the raw
/// signal changed. `held` stays true for every frame the source is down, including
/// the frame it went down.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct KeyState {
    pub held: bool,
    pub pressed: bool,
    pub released: bool,
}

/// Edge detector for a fixed number of input sources (keyboard codes or mouse buttons).
#[derive(Debug, Clone)]
pub struct InputTracker {
    states: Vec<KeyState>,
    previous: Vec<bool>,
}

impl InputTracker {
    /// Tracker for `count` sources, all up with no edges.
    pub fn new(count: usize) -> Self {
        Self {
            states: vec![KeyState::default(); count],
            previous: vec![false; count],
        }
    }

    pub fn len(&self) -> usize {
        self.states.len()
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    /// Advance one frame from a raw sample. Sources beyond the end of `raw` read as up.
    pub fn update(&mut self, raw: &[bool]) {
        for (i, (state, prev)) in self.states.iter_mut().zip(self.previous.iter_mut()).enumerate() {
            let now = raw.get(i).copied().unwrap_or(false);
            if now != *prev {
                if now {
                    state.pressed = !state.held;
                    state.held = true;
                } else {
                    state.released = true;
                    state.held = false;
                }
            } else {
                state.pressed = false;
                state.released = false;
            }
            *prev = now;
        }
    }

    /// Back to the initial state: everything up, no edges.
    pub fn reset(&mut self) {
        self.states.fill(KeyState::default());
        self.previous.fill(false);
    }

    /// State of source `index`; out-of-range indices read as idle.
    pub fn get(&self, index: usize) -> KeyState {
        self.states.get(index).copied().unwrap_or_default()
    }

    pub fn states(&self) -> &[KeyState] {
        &self.states
    }

    pub fn any_held(&self) -> impl Iterator<Item = usize> + '_ {
        self.indices_where(|s| s.held)
    }

    pub fn any_pressed(&self) -> impl Iterator<Item = usize> + '_ {
        self.indices_where(|s| s.pressed)
    }

    pub fn any_released(&self) -> impl Iterator<Item = usize> + '_ {
        self.indices_where(|s| s.released)
    }

    fn indices_where<'a>(&'a self, f: impl Fn(&KeyState) -> bool + 'a) -> impl Iterator<Item = usize> + 'a {
        self.states
            .iter()
            .enumerate()
            .filter_map(move |(i, s)| f(s).then_some(i))
    }

    /// Lowest printable ASCII code (`' '..='~'`) pressed this frame.
    pub fn pressed_char(&self) -> Option<char> {
        self.printable_where(|s| s.pressed)
    }

    /// Lowest printable ASCII code currently held.
    pub fn held_char(&self) -> Option<char> {
        self.printable_where(|s| s.held)
    }

    /// Lowest printable ASCII code released this frame.
    pub fn released_char(&self) -> Option<char> {
        self.printable_where(|s| s.released)
    }

    fn printable_where(&self, f: impl Fn(&KeyState) -> bool) -> Option<char> {
        (b' '..=b'~')
            .find(|&code| self.states.get(usize::from(code)).is_some_and(&f))
            .map(char::from)
    }
}
