use super::stream::Stream;
use crate::error::{FemoError, Result};

/// Drop `margin` samples from both ends of a session.
pub fn try_trim_session(stream: &Stream, margin: usize) -> Result<Stream> {
    if stream.len() <= 2 * margin {
        return Err(FemoError::InsufficientStream(format!(
            "session {} has {} samples, cannot trim {} from each end",
            stream.key(),
            stream.len(),
            margin
        )));
    }
    Ok(stream.sub_stream(margin, stream.len() - margin))
}

/// Like [`try_trim_session`], but sessions no longer than `2 * margin` are
/// returned unchanged so a batch over heterogeneous recordings still completes.
pub fn trim_session(stream: &Stream, margin: usize) -> Stream {
    try_trim_session(stream, margin).unwrap_or_else(|e| {
        log::warn!("{}, keeping it untrimmed", e);
        stream.clone()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trim_removes_both_ends() {
        let stream = Stream::synthetic("s", 10, 100, &[5, 50]);
        let trimmed = trim_session(&stream, 10);
        assert_eq!(trimmed.len(), 80);
        assert_eq!(trimmed.samples()[0].p1, 10.0);
        assert!(trimmed.samples()[40].event);
    }

    #[test]
    fn test_short_session_untouched() {
        let stream = Stream::synthetic("s", 10, 20, &[]);
        let trimmed = trim_session(&stream, 10);
        assert_eq!(trimmed.len(), 20);
        assert!(matches!(
            try_trim_session(&stream, 10),
            Err(FemoError::InsufficientStream(_))
        ));
    }
}
