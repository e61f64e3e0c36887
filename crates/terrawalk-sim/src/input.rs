/// Movement keys held during a tick.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MoveKeys {
    pub forward: bool,
    pub back: bool,
    pub left: bool,
    pub right: bool,
    /// Jump when walking, ascend when flying.
    pub jump: bool,
    /// Descend when flying.
    pub descend: bool,
}

impl MoveKeys {
    #[inline]
    pub fn any(&self) -> bool {
        self.forward || self.back || self.left || self.right || self.jump || self.descend
    }

    /// Local intent: x is strafe (right positive), z is forward, y is
    /// ascend/descend. Not normalized.
    pub fn intent(&self) -> (f64, f64, f64) {
        let axis = |pos: bool, neg: bool| f64::from(i8::from(pos) - i8::from(neg));
        (
            axis(self.right, self.left),
            axis(self.jump, self.descend),
            axis(self.forward, self.back),
        )
    }
}

/// Discrete events queued since the previous tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputEvent {
    /// A number key; 1 through 8 pick a hotbar slot, others deselect.
    SelectSlot(u8),
    /// Scroll wheel steps.
    CycleSlot(i32),
    ToggleFly,
    /// Place the selected item at the current target.
    PrimaryClick,
    /// Break the latest player block near the target.
    SecondaryClick,
}

/// Everything the simulation consumes for one tick.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct InputFrame {
    pub keys: MoveKeys,
    /// Pointer motion `(dx, dy)` in device units.
    pub look_delta: (f64, f64),
    pub events: Vec<InputEvent>,
}

impl InputFrame {
    pub fn idle() -> Self {
        Self::default()
    }

    pub fn holding(keys: MoveKeys) -> Self {
        Self {
            keys,
            ..Self::default()
        }
    }

    pub fn with_event(mut self, event: InputEvent) -> Self {
        self.events.push(event);
        self
    }
}
