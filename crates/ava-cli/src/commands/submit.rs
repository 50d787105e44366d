use std::path::Path;

use anyhow::Context;
use ava_gateway::{Attachment, SubmissionError, TaskSubmission};
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::SubmitArgs;
use crate::context::AppContext;
use crate::output::output;
use crate::progress::Progress;

#[derive(Serialize)]
struct SubmitResponse {
    response_id: i64,
    uploaded: Vec<UploadedFile>,
}

#[derive(Serialize)]
struct UploadedFile {
    id: i64,
    name: Option<String>,
    content_type: String,
    content_url: String,
}

pub async fn handle(
    args: &SubmitArgs,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let files = args
        .files
        .iter()
        .map(|path| read_attachment(path))
        .collect::<anyhow::Result<Vec<_>>>()?;
    let total = files.len();

    let submission = TaskSubmission {
        task_user_id: args.task_user,
        commentary: args.comment.clone(),
        files,
    };

    let result = {
        let spinner = Progress::spinner("submitting response", flags);
        if total > 0 {
            spinner.set_message(&format!("submitting response with {total} file(s)"));
        }
        ctx.client.submit_task_response(&ctx.call, &submission).await
    };

    let receipt = result.map_err(|error| {
        let note = partial_note(&error, total);
        let error = anyhow::Error::new(error);
        match note {
            Some(note) => error.context(note),
            None => error,
        }
    })?;

    output(
        &SubmitResponse {
            response_id: receipt.response.id,
            uploaded: receipt
                .contents
                .into_iter()
                .map(|c| UploadedFile {
                    id: c.id,
                    name: c.name,
                    content_type: c.content_type,
                    content_url: c.content_url,
                })
                .collect(),
        },
        flags.format,
    )
}

fn read_attachment(path: &Path) -> anyhow::Result<Attachment> {
    let bytes = std::fs::read(path).with_context(|| format!("failed to read {}", path.display()))?;
    let name = path
        .file_name()
        .and_then(|n| n.to_str())
        .with_context(|| format!("{} has no usable file name", path.display()))?
        .to_string();

    let attachment = Attachment::new(name, bytes);
    Ok(match guess_mime_type(path) {
        Some(mime) => attachment.with_mime_type(mime),
        None => attachment,
    })
}

/// MIME type for the extensions the backend distinguishes.
fn guess_mime_type(path: &Path) -> Option<&'static str> {
    let ext = path.extension()?.to_str()?.to_ascii_lowercase();
    let mime = match ext.as_str() {
        "pdf" => "application/pdf",
        "mp4" => "video/mp4",
        "avi" => "video/x-msvideo",
        "mov" => "video/quicktime",
        "jpg" | "jpeg" => "image/jpeg",
        "png" => "image/png",
        "mp3" => "audio/mpeg",
        "doc" => "application/msword",
        "docx" => "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
        "txt" => "text/plain",
        _ => return None,
    };
    Some(mime)
}

/// Describe what was left on the backend by a submission that stopped partway.
fn partial_note(error: &SubmissionError, total: usize) -> Option<String> {
    let response = error.response.as_ref()?;
    Some(format!(
        "response {} was created and {} of {total} file(s) uploaded; nothing was rolled back",
        response.id,
        error.uploaded.len()
    ))
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use ava_core::enums::TaskContentType;
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn known_extensions_get_a_mime_type() {
        assert_eq!(
            guess_mime_type(Path::new("relatorio.PDF")),
            Some("application/pdf")
        );
        assert_eq!(guess_mime_type(Path::new("foto.jpeg")), Some("image/jpeg"));
        assert_eq!(guess_mime_type(Path::new("planilha.xlsx")), None);
        assert_eq!(guess_mime_type(Path::new("LEIAME")), None);
    }

    #[test]
    fn reads_file_with_name_and_type() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("print.png");
        std::fs::write(&path, b"\x89PNG").expect("write");

        let attachment = read_attachment(&path).expect("attachment");
        assert_eq!(attachment.name, "print.png");
        assert_eq!(attachment.mime_type.as_deref(), Some("image/png"));
        assert_eq!(attachment.bytes, b"\x89PNG".to_vec());
        assert_eq!(attachment.content_type(), TaskContentType::Png);
    }

    #[test]
    fn unknown_extension_is_sent_without_mime_type() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("dados.xlsx");
        std::fs::write(&path, b"x").expect("write");

        let attachment = read_attachment(&path).expect("attachment");
        assert_eq!(attachment.mime_type, None);
        assert_eq!(attachment.content_type(), TaskContentType::Pdf);
    }

    #[test]
    fn missing_file_names_the_path() {
        let error = read_attachment(&PathBuf::from("/nonexistent/ava/a.pdf")).unwrap_err();
        assert!(error.to_string().contains("/nonexistent/ava/a.pdf"));
    }
}
