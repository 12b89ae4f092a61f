use crate::core::constants::ANALYSER_FFT_SIZE;
use crate::core::{AudioFeatures, TrackKind};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys as web;

#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("audio context unavailable: {0}")]
    Context(String),
    #[error("audio graph error: {0}")]
    Graph(String),
    #[error("could not read file: {0}")]
    Read(String),
    #[error("could not decode audio: {0}")]
    Decode(String),
}

fn js_msg(e: JsValue) -> String {
    e.as_string().unwrap_or_else(|| format!("{:?}", e))
}

/// Live audio for one loaded track.
///
/// Owns the context, the analyser tap and the playing source. Created by
/// `open` when a file is accepted and released by `close` (or on drop) when
/// the file changes or the app unmounts.
pub struct AudioSession {
    ctx: web::AudioContext,
    analyser: web::AnalyserNode,
    source: Option<web::AudioBufferSourceNode>,
    kind: TrackKind,
    freq_buf: Vec<u8>,
    time_buf: Vec<u8>,
    closed: bool,
}

impl AudioSession {
    pub async fn open(file: &web::File, kind: TrackKind) -> Result<Self, SessionError> {
        let ctx = web::AudioContext::new().map_err(|e| SessionError::Context(js_msg(e)))?;
        let analyser =
            web::AnalyserNode::new(&ctx).map_err(|e| SessionError::Graph(js_msg(e)))?;
        analyser.set_fft_size(ANALYSER_FFT_SIZE);
        analyser
            .connect_with_audio_node(&ctx.destination())
            .map_err(|e| SessionError::Graph(js_msg(e)))?;
        let bins = analyser.frequency_bin_count() as usize;
        let window = analyser.fft_size() as usize;

        let mut session = Self {
            ctx,
            analyser,
            source: None,
            kind,
            freq_buf: vec![0; bins],
            time_buf: vec![128; window],
            closed: false,
        };

        if !kind.is_decodable() {
            log::info!("[audio] {:?} track accepted; playback not supported", kind);
            return Ok(session);
        }

        let bytes = JsFuture::from(file.array_buffer())
            .await
            .map_err(|e| SessionError::Read(js_msg(e)))?;
        let bytes: js_sys::ArrayBuffer = bytes
            .dyn_into()
            .map_err(|e| SessionError::Read(js_msg(e)))?;
        let decode = session
            .ctx
            .decode_audio_data(&bytes)
            .map_err(|e| SessionError::Decode(js_msg(e)))?;
        let decoded: web::AudioBuffer = JsFuture::from(decode)
            .await
            .map_err(|e| SessionError::Decode(js_msg(e)))?
            .dyn_into()
            .map_err(|e| SessionError::Decode(js_msg(e)))?;

        let source = web::AudioBufferSourceNode::new(&session.ctx)
            .map_err(|e| SessionError::Graph(js_msg(e)))?;
        source.set_buffer(Some(&decoded));
        source
            .connect_with_audio_node(&session.analyser)
            .map_err(|e| SessionError::Graph(js_msg(e)))?;
        source
            .start()
            .map_err(|e| SessionError::Graph(js_msg(e)))?;
        _ = session.ctx.resume();
        log::info!(
            "[audio] playing {:.1}s at {} Hz, {} bins",
            decoded.duration(),
            decoded.sample_rate(),
            bins
        );
        session.source = Some(source);
        Ok(session)
    }

    #[inline]
    pub fn kind(&self) -> TrackKind {
        self.kind
    }

    /// Read the analyser into the session's buffers and derive features.
    pub fn snapshot(&mut self) -> AudioFeatures {
        if self.closed {
            return AudioFeatures::SILENT;
        }
        self.analyser.get_byte_frequency_data(&mut self.freq_buf);
        self.analyser.get_byte_time_domain_data(&mut self.time_buf);
        AudioFeatures::from_buffers(&self.freq_buf, &self.time_buf)
    }

    pub fn close(mut self) {
        self.shutdown();
    }

    fn shutdown(&mut self) {
        if self.closed {
            return;
        }
        self.closed = true;
        if let Some(src) = self.source.take() {
            _ = src.stop();
            _ = src.disconnect();
        }
        _ = self.analyser.disconnect();
        _ = self.ctx.close();
        log::debug!("[audio] session closed");
    }
}

impl Drop for AudioSession {
    fn drop(&mut self) {
        self.shutdown();
    }
}
