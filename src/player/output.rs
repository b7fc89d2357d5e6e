use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use std::time::Duration;

use rodio::{Decoder, OutputStream, OutputStreamBuilder, Sink};

use super::engine::{EngineError, PlaybackEngine};

/// Production engine on top of rodio: one `Sink` per loaded track.
pub struct RodioEngine {
    stream: OutputStream,
}

impl RodioEngine {
    pub fn new() -> Result<Self, EngineError> {
        let mut stream = OutputStreamBuilder::open_default_stream()
            .map_err(|e| EngineError::Operation(format!("no audio output device: {e}")))?;
        // rodio logs to stderr when OutputStream is dropped. That's useful in
        // debugging, but noisy for a long-running player.
        stream.log_on_drop(false);
        Ok(Self { stream })
    }
}

impl PlaybackEngine for RodioEngine {
    type Session = Sink;

    fn load(&mut self, locator: &Path) -> Result<Sink, EngineError> {
        let file = File::open(locator).map_err(|e| EngineError::Load {
            path: locator.to_path_buf(),
            reason: e.to_string(),
        })?;
        let source = Decoder::new(BufReader::new(file)).map_err(|e| EngineError::Load {
            path: locator.to_path_buf(),
            reason: e.to_string(),
        })?;

        let sink = Sink::connect_new(self.stream.mixer());
        sink.append(source);
        sink.pause();
        Ok(sink)
    }

    fn start(&mut self, session: &Sink) -> Result<(), EngineError> {
        session.play();
        Ok(())
    }

    fn pause(&mut self, session: &Sink) -> Result<(), EngineError> {
        session.pause();
        Ok(())
    }

    fn stop(&mut self, session: Sink) {
        session.stop();
    }

    fn seek(&mut self, session: &Sink, to: Duration) -> Result<(), EngineError> {
        session
            .try_seek(to)
            .map_err(|e| EngineError::Operation(format!("seek failed: {e}")))
    }

    fn current_time(&self, session: &Sink) -> Duration {
        session.get_pos()
    }
}
