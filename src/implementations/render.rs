use std::fs;
use std::path::{ Path, PathBuf };

use chrono::{ DateTime, Utc };
use log::{ debug, info };

use crate::errors::{ RtlForgeError, RtlForgeResult };
use crate::models::artifact::{ Artifact, GenerationResult };

/// Which viewer displays an artifact
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Viewer {
    Code,
    Markdown,
    Diagram,
}

impl Viewer {
    /// Choose a viewer from the artifact's content-language tag
    pub fn for_language(language: &str) -> Self {
        match language.trim().to_lowercase().as_str() {
            "markdown" | "md" => Viewer::Markdown,
            "mermaid" => Viewer::Diagram,
            _ => Viewer::Code,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Viewer::Code => "code",
            Viewer::Markdown => "Markdown",
            Viewer::Diagram => "diagram",
        }
    }
}

const MERMAID_HEADERS: &[&str] = &[
    "stateDiagram-v2",
    "stateDiagram",
    "flowchart",
    "graph",
    "sequenceDiagram",
    "classDiagram",
    "erDiagram",
    "gantt",
    "timeline",
    "mindmap",
    "pie",
];

/// Check diagram source the way the diagram renderer would reject it.
///
/// Notes must sit on their own line; a `note` inside a transition label does
/// not parse.
pub fn validate_diagram(source: &str) -> RtlForgeResult<()> {
    let render_error = |message: String| RtlForgeError::Render {
        viewer: Viewer::Diagram.name().to_string(),
        message,
    };

    let mut lines = source
        .lines()
        .map(str::trim)
        .enumerate()
        .filter(|(_, l)| !l.is_empty() && !l.starts_with("%%"));

    let Some((_, header)) = lines.next() else {
        return Err(render_error("diagram source is empty".to_string()));
    };
    if !MERMAID_HEADERS.iter().any(|h| header.starts_with(h)) {
        return Err(render_error(format!("unknown diagram type '{}'", header)));
    }

    for (index, line) in lines {
        if let Some((transition, label)) = line.split_once(':') {
            if transition.contains("-->") && label.to_lowercase().contains("note ") {
                return Err(
                    render_error(
                        format!("line {}: note inside a transition label: {}", index + 1, line)
                    )
                );
            }
        }
    }

    Ok(())
}

/// Drop raw HTML tags from Markdown before display
pub fn sanitize_markdown(markdown: &str) -> String {
    let mut out = String::with_capacity(markdown.len());
    let mut in_fence = false;

    for line in markdown.lines() {
        if line.trim_start().starts_with("```") {
            in_fence = !in_fence;
        }
        if in_fence || line.trim_start().starts_with("```") {
            out.push_str(line);
        } else {
            out.push_str(&strip_tags(line));
        }
        out.push('\n');
    }
    out
}

fn strip_tags(line: &str) -> String {
    let mut out = String::with_capacity(line.len());
    let mut rest = line;
    while let Some(start) = rest.find('<') {
        let after = &rest[start + 1..];
        let looks_like_tag = after
            .chars()
            .next()
            .map_or(false, |c| c.is_ascii_alphabetic() || c == '/' || c == '!');
        match after.find('>') {
            Some(end) if looks_like_tag => {
                out.push_str(&rest[..start]);
                rest = &after[end + 1..];
            }
            _ => {
                out.push_str(&rest[..start + 1]);
                rest = after;
            }
        }
    }
    out.push_str(rest);
    out
}

/// Final file name for an artifact; directory components are discarded
pub fn export_file_name(key: &str, artifact: &Artifact) -> String {
    Path::new(artifact.filename.trim())
        .file_name()
        .and_then(|n| n.to_str())
        .filter(|n| !n.is_empty() && *n != "." && *n != "..")
        .map(str::to_string)
        .unwrap_or_else(|| format!("{}.txt", key))
}

/// Parent of the timestamped export directories
pub const EXPORT_ROOT: &str = "generated";

/// Export directory for a run.
///
/// `None` when no export was requested, the given directory when one was
/// named, or a directory stamped with `now` under [`EXPORT_ROOT`].
pub fn resolve_export_dir(requested: Option<Option<&Path>>, now: DateTime<Utc>) -> Option<PathBuf> {
    requested.map(|dir| match dir {
        Some(dir) => dir.to_path_buf(),
        None => PathBuf::from(EXPORT_ROOT).join(format!("rtl_{}", now.format("%Y%m%d_%H%M%S"))),
    })
}

/// Write every artifact into `dir` under its own filename
pub fn export_artifacts(result: &GenerationResult, dir: &Path) -> RtlForgeResult<Vec<PathBuf>> {
    fs
        ::create_dir_all(dir)
        .map_err(|e|
            RtlForgeError::Persistence(
                format!("Failed to create output directory {}: {}", dir.display(), e)
            )
        )?;

    let mut written = Vec::with_capacity(result.len());
    for (key, artifact) in result.iter() {
        let path = dir.join(export_file_name(key, artifact));
        fs
            ::write(&path, &artifact.code)
            .map_err(|e|
                RtlForgeError::Persistence(format!("Failed to write {}: {}", path.display(), e))
            )?;
        debug!("Wrote {} ({} bytes)", path.display(), artifact.code.len());
        written.push(path);
    }

    info!("Exported {} artifact(s) to {}", written.len(), dir.display());
    Ok(written)
}
