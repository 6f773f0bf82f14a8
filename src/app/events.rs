use crate::artwork::ArtworkState;
use crossterm::event::Event;

pub enum AppEvent {
    Input(Event),
    ArtworkLoaded(String, ArtworkState),
    Tick,
}
