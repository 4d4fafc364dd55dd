//! File service
//!
//! Upload (single and sequential batch), listing, search, download, rename,
//! delete and share for the signed-in user's files.

use std::path::{Path, PathBuf};

use reqwest::multipart::{Form, Part};
use tokio::io::AsyncWrite;
use tracing::{debug, info};

use crate::client::api::{ApiClient, ApiRequest};
use crate::client::endpoints::{ensure_id, files};
use crate::client::search::SearchFilters;
use crate::client::upload::{inspect, UploadCandidate, UploadProgress};
use crate::shared::error::ApiError;
use crate::shared::models::{
    FileItem, FilesPage, FilterOptions, MessageResponse, ShareLink, ShareOptions,
    UpdateFileRequest,
};

pub struct FileService<'a> {
    api: &'a ApiClient,
}

impl<'a> FileService<'a> {
    pub fn new(api: &'a ApiClient) -> Self {
        Self { api }
    }

    /// Upload one file as multipart field `file`.
    pub async fn upload(&self, path: &Path) -> Result<FileItem, ApiError> {
        let candidate = inspect(path)?;
        self.upload_candidate(&candidate).await
    }

    /// Upload files one after another.
    ///
    /// `on_progress` is called with 0 completed before the first upload and
    /// after every successful one, so it rises monotonically to 100%. The
    /// first failure stops the batch; the returned [`ApiError::Upload`]
    /// carries the records that did make it.
    pub async fn upload_batch<F>(&self, paths: &[PathBuf], mut on_progress: F) -> Result<Vec<FileItem>, ApiError>
    where
        F: FnMut(UploadProgress),
    {
        if paths.is_empty() {
            return Ok(Vec::new());
        }
        let candidates = paths
            .iter()
            .map(|path| inspect(path))
            .collect::<Result<Vec<_>, _>>()?;

        let total = candidates.len();
        let mut uploaded = Vec::with_capacity(total);
        on_progress(UploadProgress { completed: 0, total });

        for candidate in &candidates {
            match self.upload_candidate(candidate).await {
                Ok(item) => {
                    uploaded.push(item);
                    on_progress(UploadProgress {
                        completed: uploaded.len(),
                        total,
                    });
                }
                Err(source) => {
                    return Err(ApiError::Upload {
                        completed: uploaded,
                        path: candidate.path.clone(),
                        source: Box::new(source),
                    })
                }
            }
        }
        info!(count = uploaded.len(), "batch upload finished");
        Ok(uploaded)
    }

    async fn upload_candidate(&self, candidate: &UploadCandidate) -> Result<FileItem, ApiError> {
        let bytes = tokio::fs::read(&candidate.path).await?;
        let part = Part::bytes(bytes)
            .file_name(candidate.file_name.clone())
            .mime_str(&candidate.mime_type)
            .map_err(|_| {
                ApiError::validation("file", format!("invalid MIME type {}", candidate.mime_type))
            })?;
        debug!(file = %candidate.file_name, size = candidate.size, "uploading");
        let request = ApiRequest::post(files::UPLOAD).multipart(Form::new().part("file", part));
        self.api.send(request).await
    }

    /// The user's files. The server applies `filters`, including the text query.
    pub async fn list(&self, filters: &SearchFilters) -> Result<FilesPage, ApiError> {
        self.api
            .send(ApiRequest::get(files::BASE).query(filters.list_params()))
            .await
    }

    pub async fn search(&self, filters: &SearchFilters) -> Result<FilesPage, ApiError> {
        self.api
            .send(ApiRequest::get(files::SEARCH).query(filters.search_params()))
            .await
    }

    pub async fn filter_options(&self) -> Result<FilterOptions, ApiError> {
        self.api.send(ApiRequest::get(files::FILTERS)).await
    }

    pub async fn get(&self, id: &str) -> Result<FileItem, ApiError> {
        let id = ensure_id("file id", id)?;
        self.api.send(ApiRequest::get(files::by_id(id))).await
    }

    pub async fn delete(&self, id: &str) -> Result<MessageResponse, ApiError> {
        let id = ensure_id("file id", id)?;
        self.api.send(ApiRequest::delete(files::by_id(id))).await
    }

    pub async fn update(&self, id: &str, update: &UpdateFileRequest) -> Result<FileItem, ApiError> {
        let id = ensure_id("file id", id)?;
        let request = ApiRequest::put(files::by_id(id)).json(update)?;
        self.api.send(request).await
    }

    pub async fn rename(&self, id: &str, name: &str) -> Result<FileItem, ApiError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(ApiError::validation("name", "File name cannot be empty"));
        }
        self.update(
            id,
            &UpdateFileRequest {
                name: Some(name.to_string()),
            },
        )
        .await
    }

    pub async fn share(&self, id: &str, options: &ShareOptions) -> Result<ShareLink, ApiError> {
        let id = ensure_id("file id", id)?;
        let request = ApiRequest::post(files::share(id)).json(options)?;
        self.api.send(request).await
    }

    /// Whole file in memory
    pub async fn download(&self, id: &str) -> Result<Vec<u8>, ApiError> {
        let id = ensure_id("file id", id)?;
        self.api.download(ApiRequest::get(files::download(id))).await
    }

    /// Stream the file into `writer`; returns the byte count.
    pub async fn download_to<W>(&self, id: &str, writer: &mut W) -> Result<u64, ApiError>
    where
        W: AsyncWrite + Unpin,
    {
        let id = ensure_id("file id", id)?;
        self.api
            .download_to(ApiRequest::get(files::download(id)), writer)
            .await
    }

    /// Download into `path`. The body goes to a temporary file next to it,
    /// renamed over `path` only once the whole body has arrived, so a failed
    /// download leaves any existing file untouched.
    pub async fn save_as(&self, id: &str, path: &Path) -> Result<u64, ApiError> {
        let dir = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        let partial = tempfile::Builder::new()
            .prefix(".cloudvault-")
            .suffix(".part")
            .tempfile_in(dir)?;
        let mut file = tokio::fs::File::from_std(partial.as_file().try_clone()?);
        let written = self.download_to(id, &mut file).await?;
        file.sync_all().await?;
        drop(file);
        partial.persist(path).map_err(|e| ApiError::Io(e.error))?;
        debug!(path = %path.display(), bytes = written, "download saved");
        Ok(written)
    }
}
