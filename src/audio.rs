//! Audio playback gate
//!
//! Two pre-loaded tracks: an ambient loop that may be blocked by autoplay
//! policy, and a short pop sample. Playback start is asynchronous; its outcome
//! arrives through a completion callback and is never awaited by callers.

use thiserror::Error;

/// Why playback did not start
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AudioError {
    /// The host refused to start playback (autoplay policy, decode failure)
    #[error("playback rejected: {0}")]
    Rejected(String),
    /// No media element backs this track
    #[error("audio track unavailable")]
    Unavailable,
}

/// Completion callback for [`MediaTrack::play`]
pub type PlayCallback = Box<dyn FnOnce(Result<(), AudioError>)>;

/// A playable, rewindable media handle
pub trait MediaTrack {
    fn set_volume(&self, volume: f32);
    fn set_looping(&self, looping: bool);
    /// Seek back to the start
    fn rewind(&self);
    /// Start playback; `done` is called once the host accepts or rejects it
    fn play(&self, done: PlayCallback);
}

/// Missing tracks report `Unavailable` instead of playing
impl<T: MediaTrack> MediaTrack for Option<T> {
    fn set_volume(&self, volume: f32) {
        if let Some(t) = self {
            t.set_volume(volume);
        }
    }

    fn set_looping(&self, looping: bool) {
        if let Some(t) = self {
            t.set_looping(looping);
        }
    }

    fn rewind(&self) {
        if let Some(t) = self {
            t.rewind();
        }
    }

    fn play(&self, done: PlayCallback) {
        match self {
            Some(t) => t.play(done),
            None => done(Err(AudioError::Unavailable)),
        }
    }
}

/// Track for hosts without audio output; playback always succeeds immediately
#[derive(Debug, Default, Clone, Copy)]
pub struct SilentTrack;

impl MediaTrack for SilentTrack {
    fn set_volume(&self, _volume: f32) {}
    fn set_looping(&self, _looping: bool) {}
    fn rewind(&self) {}
    fn play(&self, done: PlayCallback) {
        done(Ok(()));
    }
}

/// Ambient loop plus pop effect, with the one-way "first interaction" latch
pub struct AudioGate<T: MediaTrack> {
    ambient: T,
    pop: T,
    ambient_volume: f32,
    pop_volume: f32,
    has_unlocked_playback: bool,
}

impl<T: MediaTrack> AudioGate<T> {
    pub fn new(ambient: T, pop: T, ambient_volume: f32, pop_volume: f32) -> Self {
        let ambient_volume = ambient_volume.clamp(0.0, 1.0);
        let pop_volume = pop_volume.clamp(0.0, 1.0);
        ambient.set_looping(true);
        ambient.set_volume(ambient_volume);
        pop.set_volume(pop_volume);
        Self {
            ambient,
            pop,
            ambient_volume,
            pop_volume,
            has_unlocked_playback: false,
        }
    }

    pub fn ambient_volume(&self) -> f32 {
        self.ambient_volume
    }

    pub fn pop_volume(&self) -> f32 {
        self.pop_volume
    }

    pub fn has_unlocked_playback(&self) -> bool {
        self.has_unlocked_playback
    }

    /// Try to start the ambient loop without a user gesture.
    /// `on_blocked` runs if the host refuses.
    pub fn attempt_ambient_autoplay<F>(&self, on_blocked: F)
    where
        F: FnOnce(AudioError) + 'static,
    {
        self.ambient.play(Box::new(move |result| {
            if let Err(e) = result {
                log::info!("Initial audio playback failed: {}", e);
                on_blocked(e);
            }
        }));
    }

    /// Retry the ambient loop on the first user interaction only.
    /// Returns true when this call flipped the latch.
    pub fn unlock_on_first_interaction(&mut self) -> bool {
        if self.has_unlocked_playback {
            return false;
        }
        self.has_unlocked_playback = true;
        self.ambient.play(Box::new(|result| {
            if let Err(e) = result {
                log::warn!("Retry audio playback failed: {}", e);
            }
        }));
        true
    }

    /// Restart the pop sample. Failures are logged and dropped.
    pub fn play_pop(&self) {
        self.pop.rewind();
        self.pop.play(Box::new(|result| {
            if let Err(e) = result {
                log::warn!("Pop sound failed: {}", e);
            }
        }));
    }
}

/// HTML `<audio>` element backend
#[cfg(target_arch = "wasm32")]
pub mod web {
    use super::{AudioError, MediaTrack, PlayCallback};
    use wasm_bindgen::JsCast;
    use wasm_bindgen_futures::{JsFuture, spawn_local};
    use web_sys::HtmlAudioElement;

    pub struct HtmlMediaTrack {
        element: HtmlAudioElement,
    }

    impl HtmlMediaTrack {
        /// Look up an `<audio>` element by id
        pub fn from_id(document: &web_sys::Document, id: &str) -> Option<Self> {
            let element = document
                .get_element_by_id(id)
                .and_then(|el| el.dyn_into::<HtmlAudioElement>().ok());
            if element.is_none() {
                log::warn!("No <audio id=\"{}\"> element; track disabled", id);
            }
            element.map(|element| Self { element })
        }
    }

    impl MediaTrack for HtmlMediaTrack {
        fn set_volume(&self, volume: f32) {
            self.element.set_volume(volume as f64);
        }

        fn set_looping(&self, looping: bool) {
            self.element.set_loop(looping);
        }

        fn rewind(&self) {
            self.element.set_current_time(0.0);
        }

        fn play(&self, done: PlayCallback) {
            let promise = match self.element.play() {
                Ok(p) => p,
                Err(e) => {
                    // Report on a later turn so callers never see a reentrant callback
                    let error = AudioError::Rejected(format!("{:?}", e));
                    spawn_local(async move { done(Err(error)) });
                    return;
                }
            };
            spawn_local(async move {
                let result = JsFuture::from(promise)
                    .await
                    .map(|_| ())
                    .map_err(|e| AudioError::Rejected(describe_js_error(&e)));
                done(result);
            });
        }
    }

    fn describe_js_error(value: &wasm_bindgen::JsValue) -> String {
        value
            .dyn_ref::<js_sys::Error>()
            .map(|e| String::from(e.message()))
            .unwrap_or_else(|| format!("{:?}", value))
    }
}
