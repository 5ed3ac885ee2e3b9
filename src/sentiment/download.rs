// Fetches the SST-2 sentiment model into the local model directory.
//
// Source: Xenova/distilbert-base-uncased-finetuned-sst-2-english on
// HuggingFace (quantized ONNX export plus tokenizer). Files land under the
// platform data dir, e.g. ~/.local/share/comment-compass/models/ on Linux.
// Each file is streamed to `<name>.partial` and renamed once complete.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use futures::StreamExt;
use indicatif::{ProgressBar, ProgressStyle};
use tokio::io::AsyncWriteExt;
use tracing::{debug, info};

const REPO_BASE_URL: &str =
    "https://huggingface.co/Xenova/distilbert-base-uncased-finetuned-sst-2-english/resolve/main";

/// Local file names inside the model directory.
pub const MODEL_FILE: &str = "model_quantized.onnx";
pub const TOKENIZER_FILE: &str = "tokenizer.json";

/// One file of the model bundle.
struct BundleFile {
    /// Path relative to REPO_BASE_URL
    remote: &'static str,
    local: &'static str,
    /// Large files get a progress bar
    large: bool,
}

const BUNDLE: [BundleFile; 2] = [
    BundleFile {
        remote: TOKENIZER_FILE,
        local: TOKENIZER_FILE,
        large: false,
    },
    BundleFile {
        remote: "onnx/model_quantized.onnx",
        local: MODEL_FILE,
        large: true,
    },
];

pub fn default_model_dir() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("comment-compass")
        .join("models")
}

/// True when every bundle file is on disk.
pub fn model_files_present(dir: &Path) -> bool {
    BUNDLE.iter().all(|f| dir.join(f.local).exists())
}

/// Fetch any bundle files missing from `dir`.
pub async fn download_model(dir: &Path) -> Result<()> {
    tokio::fs::create_dir_all(dir)
        .await
        .with_context(|| format!("Cannot create model directory {}", dir.display()))?;

    let client = reqwest::Client::new();
    for file in &BUNDLE {
        let dest = dir.join(file.local);
        if dest.exists() {
            println!("  {} present", file.local);
            debug!(path = %dest.display(), "Bundle file present");
            continue;
        }
        println!("  fetching {}", file.local);
        let url = format!("{REPO_BASE_URL}/{}", file.remote);
        fetch_to(&client, &url, &dest, file.large).await?;
    }

    Ok(())
}

async fn fetch_to(client: &reqwest::Client, url: &str, dest: &Path, large: bool) -> Result<()> {
    let response = client
        .get(url)
        .send()
        .await
        .and_then(|r| r.error_for_status())
        .with_context(|| format!("GET {url}"))?;

    let progress = if large {
        Some(progress_bar(response.content_length())?)
    } else {
        None
    };

    let partial = dest.with_extension("partial");
    let mut out = tokio::fs::File::create(&partial)
        .await
        .with_context(|| format!("Cannot create {}", partial.display()))?;

    let mut written: u64 = 0;
    let mut chunks = response.bytes_stream();
    while let Some(chunk) = chunks.next().await {
        let chunk = chunk.with_context(|| format!("Stream from {url} interrupted"))?;
        out.write_all(&chunk)
            .await
            .with_context(|| format!("Cannot write {}", partial.display()))?;
        written += chunk.len() as u64;
        if let Some(pb) = &progress {
            pb.set_position(written);
        }
    }
    out.flush().await?;
    drop(out);

    tokio::fs::rename(&partial, dest)
        .await
        .with_context(|| format!("Cannot move {} into place", partial.display()))?;

    if let Some(pb) = progress {
        pb.finish_and_clear();
    }
    info!(url, path = %dest.display(), bytes = written, "Fetched model file");
    Ok(())
}

fn progress_bar(total: Option<u64>) -> Result<ProgressBar> {
    let pb = match total {
        Some(size) => {
            let pb = ProgressBar::new(size);
            pb.set_style(
                ProgressStyle::default_bar()
                    .template("    [{bar:40.cyan/blue}] {bytes}/{total_bytes} ({eta})")?
                    .progress_chars("=> "),
            );
            pb
        }
        None => {
            let pb = ProgressBar::new_spinner();
            pb.set_style(ProgressStyle::default_spinner().template("    {spinner} {bytes}")?);
            pb
        }
    };
    Ok(pb)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_model_dir_is_under_app_name() {
        let dir = default_model_dir();
        let path_str = dir.to_string_lossy();
        assert!(
            path_str.contains("comment-compass") && path_str.contains("models"),
            "Expected path containing comment-compass/models, got: {path_str}"
        );
    }

    #[test]
    fn test_bundle_covers_model_and_tokenizer() {
        let locals: Vec<&str> = BUNDLE.iter().map(|f| f.local).collect();
        assert_eq!(locals, vec![TOKENIZER_FILE, MODEL_FILE]);
        assert!(BUNDLE.iter().filter(|f| f.large).all(|f| f.local == MODEL_FILE));
    }

    #[test]
    fn test_model_files_present_false_when_empty() {
        let dir = std::env::temp_dir().join("comment-compass-test-nonexistent");
        assert!(!model_files_present(&dir));
    }

    #[test]
    fn test_model_files_present_true_when_files_exist() {
        let dir = std::env::temp_dir().join("comment-compass-model-test");
        std::fs::create_dir_all(&dir).unwrap();
        std::fs::write(dir.join(MODEL_FILE), b"fake").unwrap();
        std::fs::write(dir.join(TOKENIZER_FILE), b"fake").unwrap();

        assert!(model_files_present(&dir));

        std::fs::remove_file(dir.join(TOKENIZER_FILE)).unwrap();
        assert!(!model_files_present(&dir));

        std::fs::remove_dir_all(&dir).unwrap();
    }
}
