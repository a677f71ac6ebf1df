//! Asset decoding with symphonia
//!
//! rodio's own decoder cannot demux WebM, so assets are decoded here into
//! an in-memory sample buffer that rodio then plays.

use std::fs::{self, File};
use std::io;
use std::path::Path;

use rodio::buffer::SamplesBuffer;
use symphonia::core::audio::SampleBuffer;
use symphonia::core::codecs::{DecoderOptions, CODEC_TYPE_NULL};
use symphonia::core::errors::Error as SymphoniaError;
use symphonia::core::formats::FormatOptions;
use symphonia::core::io::MediaSourceStream;
use symphonia::core::meta::MetadataOptions;
use symphonia::core::probe::Hint;

use crate::application::ports::PlaybackError;

// A bad packet is skipped; more than this many in a row is fatal.
const MAX_DECODE_RETRIES: usize = 3;

/// Decode a whole asset file into interleaved f32 samples.
///
/// Blocking; call from a blocking thread.
pub fn decode_asset(asset: &Path) -> Result<SamplesBuffer<f32>, PlaybackError> {
    let file = open_asset(asset)?;

    let mut hint = Hint::new();
    if let Some(ext) = asset.extension().and_then(|ext| ext.to_str()) {
        hint.with_extension(ext);
    }

    let mss = MediaSourceStream::new(Box::new(file), Default::default());
    let probed = symphonia::default::get_probe()
        .format(&hint, mss, &FormatOptions::default(), &MetadataOptions::default())
        .map_err(decode_failed)?;
    let mut format = probed.format;

    let track = format
        .tracks()
        .iter()
        .find(|t| t.codec_params.codec != CODEC_TYPE_NULL)
        .ok_or_else(|| PlaybackError::DecodeFailed("No audio track with a known codec".into()))?;
    let track_id = track.id;
    let mut channels = track.codec_params.channels.map(|c| c.count()).unwrap_or(0);
    let mut sample_rate = track.codec_params.sample_rate.unwrap_or(0);

    let mut decoder = symphonia::default::get_codecs()
        .make(&track.codec_params, &DecoderOptions::default())
        .map_err(decode_failed)?;

    let mut samples: Vec<f32> = Vec::new();
    let mut decode_errors = 0;

    loop {
        let packet = match format.next_packet() {
            Ok(packet) => packet,
            // End of stream
            Err(SymphoniaError::IoError(e)) if e.kind() == io::ErrorKind::UnexpectedEof => break,
            Err(SymphoniaError::ResetRequired) => break,
            Err(e) => return Err(decode_failed(e)),
        };

        if packet.track_id() != track_id {
            continue;
        }

        match decoder.decode(&packet) {
            Ok(decoded) => {
                decode_errors = 0;
                if decoded.frames() == 0 {
                    continue;
                }
                let spec = *decoded.spec();
                channels = spec.channels.count();
                sample_rate = spec.rate;

                let mut buffer = SampleBuffer::<f32>::new(decoded.capacity() as u64, spec);
                buffer.copy_interleaved_ref(decoded);
                samples.extend_from_slice(buffer.samples());
            }
            Err(SymphoniaError::DecodeError(e)) => {
                decode_errors += 1;
                if decode_errors > MAX_DECODE_RETRIES {
                    return Err(PlaybackError::DecodeFailed(e.to_string()));
                }
            }
            Err(e) => return Err(decode_failed(e)),
        }
    }

    if channels == 0 || sample_rate == 0 {
        return Err(PlaybackError::DecodeFailed(
            "Stream has no channel layout or sample rate".into(),
        ));
    }
    if samples.is_empty() {
        return Err(PlaybackError::DecodeFailed("Stream has no samples".into()));
    }

    Ok(SamplesBuffer::new(channels as u16, sample_rate, samples))
}

/// Open the asset, treating anything but a readable regular file as missing
fn open_asset(asset: &Path) -> Result<File, PlaybackError> {
    let not_found = || PlaybackError::AssetNotFound(asset.to_string_lossy().to_string());

    match fs::metadata(asset) {
        Ok(meta) if meta.is_file() => {}
        Ok(_) => return Err(not_found()),
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Err(not_found()),
        Err(e) => return Err(PlaybackError::DecodeFailed(e.to_string())),
    }

    File::open(asset).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => not_found(),
        _ => PlaybackError::DecodeFailed(e.to_string()),
    })
}

fn decode_failed(e: SymphoniaError) -> PlaybackError {
    PlaybackError::DecodeFailed(e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rodio::Source;
    use std::io::Write;
    use std::path::PathBuf;

    fn fixture(name: &str) -> PathBuf {
        Path::new(env!("CARGO_MANIFEST_DIR"))
            .join("tests")
            .join("fixtures")
            .join(name)
    }

    #[test]
    fn decodes_vorbis_in_webm() {
        let buffer = decode_asset(&fixture("breakpointHit.webm")).unwrap();
        assert_eq!(buffer.channels(), 1);
        assert_eq!(buffer.sample_rate(), 8000);
        assert!(buffer.count() > 0);
    }

    #[test]
    fn missing_file_is_not_found() {
        let result = decode_asset(Path::new("/nonexistent/breakpointHit.webm"));
        assert!(matches!(result, Err(PlaybackError::AssetNotFound(_))));
    }

    #[test]
    fn directory_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let result = decode_asset(dir.path());
        assert!(matches!(result, Err(PlaybackError::AssetNotFound(_))));
    }

    #[test]
    fn garbage_fails_to_decode() {
        let mut file = tempfile::Builder::new().suffix(".webm").tempfile().unwrap();
        file.write_all(b"definitely not audio").unwrap();

        let result = decode_asset(file.path());
        assert!(matches!(result, Err(PlaybackError::DecodeFailed(_))));
    }
}
