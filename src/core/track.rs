/// Kind of user-supplied track, derived from the file name.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TrackKind {
    Midi,
    Mp3,
}

impl TrackKind {
    /// Classify by extension (case-insensitive). Returns `None` for anything
    /// we do not load; callers ignore such files.
    pub fn from_file_name(name: &str) -> Option<TrackKind> {
        let (_, ext) = name.rsplit_once('.')?;
        match ext.to_ascii_lowercase().as_str() {
            "mid" | "midi" => Some(TrackKind::Midi),
            "mp3" => Some(TrackKind::Mp3),
            _ => None,
        }
    }

    /// Whether the browser decoder can turn this track into samples.
    #[inline]
    pub fn is_decodable(self) -> bool {
        matches!(self, TrackKind::Mp3)
    }

    /// Overlay verb for a loaded track. Only decodable tracks produce sound.
    #[inline]
    pub fn status_label(self) -> &'static str {
        if self.is_decodable() {
            "Playing"
        } else {
            "Loaded"
        }
    }
}
