//! I/O helpers for frame sequences and JSON reports.
//!
//! - `load_frames`: read a JSON array of [`FrameSegments`].
//! - `write_json_file`: pretty-print a serializable value to disk.
use crate::types::FrameSegments;
use serde::Serialize;
use std::fs;
use std::path::Path;

/// Load a frame sequence previously dumped by the line detector.
pub fn load_frames(path: &Path) -> Result<Vec<FrameSegments>, String> {
    let data = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read frames {}: {e}", path.display()))?;
    serde_json::from_str(&data)
        .map_err(|e| format!("Failed to parse frames {}: {e}", path.display()))
}

/// Serialize a value as pretty JSON to `path`, creating parent directories.
pub fn write_json_file<T: Serialize>(path: &Path, value: &T) -> Result<(), String> {
    ensure_parent_dir(path)?;
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| format!("Failed to serialize JSON for {}: {e}", path.display()))?;
    fs::write(path, json).map_err(|e| format!("Failed to write JSON {}: {e}", path.display()))
}

fn ensure_parent_dir(path: &Path) -> Result<(), String> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .map_err(|e| format!("Failed to create {}: {e}", parent.display()))?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::segments::{HoughLine, LineSegment};

    #[test]
    fn frames_round_trip_through_disk() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("nested").join("frames.json");
        let frames = vec![
            FrameSegments::with_segments(
                800,
                600,
                vec![LineSegment::new([1.0, 2.0], [3.0, 4.0], 0.7)],
            ),
            FrameSegments {
                width: 800,
                height: 600,
                segments: Vec::new(),
                hough_lines: vec![HoughLine::new(120.0, 2.1)],
            },
        ];
        write_json_file(&path, &frames).expect("write");
        let loaded = load_frames(&path).expect("load");
        assert_eq!(loaded.len(), 2);
        assert_eq!(loaded[0].segments, frames[0].segments);
        assert_eq!(loaded[1].hough_lines, frames[1].hough_lines);
    }

    #[test]
    fn missing_lists_default_to_empty() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("frames.json");
        fs::write(&path, r#"[{ "width": 640, "height": 480 }]"#).expect("write");
        let loaded = load_frames(&path).expect("load");
        assert_eq!(loaded[0].width, 640);
        assert!(loaded[0].segments.is_empty());
        assert!(loaded[0].hough_lines.is_empty());
    }

    #[test]
    fn missing_file_reports_path() {
        let err = load_frames(Path::new("/definitely/not/here.json")).unwrap_err();
        assert!(err.contains("/definitely/not/here.json"), "err={err}");
    }
}
