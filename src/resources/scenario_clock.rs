use bevy::prelude::*;

/// Resource tracking scenario time: the monotonic clock that drives blink
/// sequences, kept separate from frame time so a scenario can be paused or
/// run accelerated without desynchronizing the lights.
#[derive(Resource, Debug, Clone)]
pub struct ScenarioClock {
    /// Elapsed scenario time in seconds.
    pub elapsed: f32,
    /// Multiplier applied to real time while running.
    pub acceleration: f32,
    /// While paused the clock holds its value.
    pub paused: bool,
}

impl Default for ScenarioClock {
    fn default() -> Self {
        Self {
            elapsed: 0.0,
            acceleration: 1.0,
            paused: false,
        }
    }
}

impl ScenarioClock {
    /// Advances the clock by a real-time delta, honouring pause and
    /// acceleration.
    pub fn advance(&mut self, delta: f32) {
        if !self.paused {
            self.elapsed += delta * self.acceleration;
        }
    }

    /// Formatted elapsed time for HUD display, `HH:MM:SS`.
    pub fn formatted(&self) -> String {
        let total = self.elapsed as u32;
        format!(
            "{:02}:{:02}:{:02}",
            total / 3600,
            (total / 60) % 60,
            total % 60
        )
    }
}

/// System advancing the scenario clock once per frame.
pub fn advance_scenario_clock(time: Res<Time>, mut clock: ResMut<ScenarioClock>) {
    clock.advance(time.delta_secs());
}
