use std::fs::create_dir_all;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};

use socialscrape_block::ScraperOutput;

/// Files written for one run.
#[derive(Debug, Clone)]
pub struct RunArtifacts {
    pub run_dir: PathBuf,
    pub users_path: PathBuf,
    pub posts_path: PathBuf,
    pub comments_path: PathBuf,
    pub output_path: PathBuf,
}

/// Write the three tables and the JSON output under
/// `<out_dir>/<timestamp>__run_<run_id>/`.
pub fn write_run_artifacts(
    out_dir: &Path,
    run_id: &str,
    started_at: DateTime<Utc>,
    output: &ScraperOutput,
) -> std::io::Result<RunArtifacts> {
    let timestamp = started_at.format("%Y-%m-%dT%H-%M-%SZ").to_string();
    let run_dir = out_dir.join(format!("{timestamp}__run_{run_id}"));
    create_dir_all(&run_dir)?;

    let artifacts = RunArtifacts {
        users_path: run_dir.join("users.csv"),
        posts_path: run_dir.join("posts.csv"),
        comments_path: run_dir.join("comments.csv"),
        output_path: run_dir.join("output.json"),
        run_dir,
    };

    std::fs::write(&artifacts.users_path, &output.users_csv)?;
    std::fs::write(&artifacts.posts_path, &output.posts_csv)?;
    std::fs::write(&artifacts.comments_path, &output.comments_csv)?;
    let json = serde_json::to_vec_pretty(output).map_err(std::io::Error::other)?;
    std::fs::write(&artifacts.output_path, json)?;

    Ok(artifacts)
}

/// First `max_chars` characters of `text`, with a trailing ellipsis.
pub fn preview(text: &str, max_chars: usize) -> String {
    let mut preview: String = text.chars().take(max_chars).collect();
    preview.push_str("...");
    preview
}
