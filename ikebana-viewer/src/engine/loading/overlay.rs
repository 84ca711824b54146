use bevy::prelude::*;

/// Whether the "optimizing" overlay should be shown.
#[derive(Resource, Default, Debug)]
pub struct LoadingIndicator {
    pub visible: bool,
}

impl LoadingIndicator {
    pub fn show(&mut self) {
        self.visible = true;
    }

    pub fn dismiss(&mut self) {
        self.visible = false;
    }
}
